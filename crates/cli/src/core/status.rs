//! Bug lifecycle states and their numbered prompt choices.

use std::fmt;

use super::errors::{BugTrackError, BugTrackResult};

/// Lifecycle state of a bug, selected by its 1-based ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    NotYetAssigned,
    InProcess,
    Fixed,
    Committed,
}

impl Status {
    /// All statuses in prompt order.
    pub const ALL: [Status; 4] = [
        Status::NotYetAssigned,
        Status::InProcess,
        Status::Fixed,
        Status::Committed,
    ];

    /// Maps a raw input line to a status. Only the exact tokens `1`..`4` match.
    pub fn from_choice(input: &str) -> BugTrackResult<Self> {
        match input {
            "1" => Ok(Status::NotYetAssigned),
            "2" => Ok(Status::InProcess),
            "3" => Ok(Status::Fixed),
            "4" => Ok(Status::Committed),
            other => Err(BugTrackError::invalid_choice("status", other)),
        }
    }

    pub fn ordinal(self) -> usize {
        match self {
            Status::NotYetAssigned => 1,
            Status::InProcess => 2,
            Status::Fixed => 3,
            Status::Committed => 4,
        }
    }

    /// Text written into report files.
    pub fn label(self) -> &'static str {
        match self {
            Status::NotYetAssigned => "NOT YET ASSIGNED",
            Status::InProcess => "IN PROCESS",
            Status::Fixed => "FIXED",
            Status::Committed => "COMMITTED",
        }
    }

    /// Text shown in the numbered prompt.
    pub fn menu_text(self) -> &'static str {
        match self {
            Status::NotYetAssigned => "Not yet assigned",
            Status::InProcess => "In process",
            Status::Fixed => "Fixed",
            Status::Committed => "Committed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
