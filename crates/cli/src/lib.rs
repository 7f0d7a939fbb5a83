//! # bugtrack
//!
//! Plain-text bug reports: file a bug, append status updates, print a report.

pub mod core;

// Re-export core types for convenience
pub use crate::core::{
    resolve_path, run_menu, BugTrackError, BugTrackResult, Clock, Console, ErrorCategory,
    FixedClock, MenuCommand, MenuState, ReportFields, ReportLines, ReportStore, Status,
    SystemClock,
};
