//! # Bug Tracker Core
//!
//! Text-file report store plus the interactive dialogue that drives it.
//!
//! ## Architecture
//!
//! - **Report Layout** (`report`): header and status update text, description wrap
//! - **Report Store** (`store`): create, append-status and read against the filesystem
//! - **Console** (`prompt`): line-oriented input/output handles and the status prompt
//! - **Menu** (`menu`): the Running/Exiting loop dispatching numbered commands
//!
//! Reports are append-only once created and the filesystem is the only state.

pub mod clock;
pub mod errors;
pub mod menu;
pub mod prompt;
pub mod report;
pub mod safe_write;
pub mod status;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{BugTrackError, BugTrackResult, ErrorCategory};
pub use menu::{run_menu, MenuCommand, MenuState};
pub use prompt::Console;
pub use report::ReportFields;
pub use status::Status;
pub use store::{resolve_path, ReportLines, ReportStore};
