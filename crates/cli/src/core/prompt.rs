//! Line-oriented terminal dialogue.
//!
//! [`Console`] owns the input and output handles, so the menu and the status
//! prompt can be driven from scripted buffers in tests.

use std::io::{BufRead, Write};

use tracing::warn;

use super::errors::{BugTrackError, BugTrackResult};
use super::status::Status;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line without its terminator. `None` means end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced, so such a line simply
    /// matches no menu or status choice.
    pub fn read_line(&mut self) -> BugTrackResult<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(|e| BugTrackError::io(None, "read_input", e))?;
        if read == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Prints `text` without a line break, then reads the answer.
    ///
    /// Fails with [`BugTrackError::InputClosed`] when no answer can arrive.
    pub fn ask(&mut self, text: &str) -> BugTrackResult<String> {
        self.print(text)?;
        self.read_line()?
            .ok_or_else(|| BugTrackError::input_closed(text.trim_end_matches([':', ' '])))
    }

    pub fn print(&mut self, text: &str) -> BugTrackResult<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| BugTrackError::io(None, "write_output", e))
    }

    pub fn println(&mut self, text: &str) -> BugTrackResult<()> {
        self.print(text)?;
        self.print("\n")
    }

    /// Offers the four statuses and reads a choice.
    ///
    /// Anything but `1`..`4` prints a notice and yields `None`; callers still
    /// finish their write, leaving the status field empty.
    pub fn prompt_status(&mut self) -> BugTrackResult<Option<Status>> {
        self.println("Choose one of the options to assign the bug's status:")?;
        for status in Status::ALL {
            self.println(&format!("{}. {}", status.ordinal(), status.menu_text()))?;
        }
        let answer = self.ask("Enter your choice: ")?;
        match Status::from_choice(&answer) {
            Ok(status) => Ok(Some(status)),
            Err(err) => {
                warn!(error = %err, "status left blank");
                self.println("Invalid input detected")?;
                Ok(None)
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
