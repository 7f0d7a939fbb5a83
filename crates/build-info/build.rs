use std::env;
use std::path::PathBuf;
use std::process::Command;

use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-env-changed=BUGTRACK_BUILD_ID_OVERRIDE");
    if let Some(head) = workspace_git_head() {
        println!("cargo:rerun-if-changed={}", head.display());
    }

    let built_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let revision = git_revision().unwrap_or_else(|| "unknown".to_string());
    let build_id = env::var("BUGTRACK_BUILD_ID_OVERRIDE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| format!("{built_at} | {revision}"));

    println!("cargo:rustc-env=BUGTRACK_BUILD_ID={build_id}");
}

/// `.git/HEAD` of the workspace, two levels above this crate.
fn workspace_git_head() -> Option<PathBuf> {
    let manifest = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
    let head = manifest.parent()?.parent()?.join(".git").join("HEAD");
    head.exists().then_some(head)
}

fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let label = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!label.is_empty()).then_some(label)
}
