//! Build metadata captured by `build.rs` and exposed to the `bugtrack` binary.

use once_cell::sync::Lazy;

#[derive(Debug)]
struct BuildMeta {
    build_id: &'static str,
}

static META: Lazy<BuildMeta> = Lazy::new(|| BuildMeta {
    build_id: option_env!("BUGTRACK_BUILD_ID").unwrap_or("unknown build"),
});

/// Full build identifier, e.g. "2026-10-16 08:00:00 UTC | 8a4f1d2-dirty".
pub fn build_id() -> &'static str {
    META.build_id
}

/// Version string shown by `--version` and in the startup log line.
pub fn version_line(version: &str) -> String {
    format!("{} ({})", version, build_id())
}
