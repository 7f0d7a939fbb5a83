//! # Report Text Layout
//!
//! A report is a flat text file: a fixed header written once at creation,
//! followed by any number of status update blocks appended later. Label
//! spelling, tab padding and line order are shared with files produced by
//! earlier releases and must not drift.
//!
//! ```text
//! DATE AND TIME:\t\t<timestamp>
//! FILENAME:\t\t<source file>
//!
//! USER:\t\t\t<user>
//! BUG TYPE:\t\t<type>
//! BUG PRIORITY:\t\t<priority>
//! BUG DESCRIPTION: \t<description>
//!
//! BUG STATUS: \t\t<STATUS>
//! ----------------------------------
//! DATE:\t\t\t<timestamp>
//! STATUS UPDATE:\t\t<STATUS>
//! ```

use chrono::{DateTime, FixedOffset};

use super::clock::format_timestamp;
use super::status::Status;

/// Descriptions longer than this many characters are wrapped.
pub const DESCRIPTION_WRAP_WIDTH: usize = 50;

/// Prefix of every continuation line of a wrapped description.
pub const CONTINUATION_INDENT: &str = "\t\t\t";

/// Marker line opening every status update block (34 dashes).
pub const UPDATE_SEPARATOR: &str = "----------------------------------";

pub const STATUS_LABEL: &str = "BUG STATUS: \t\t";
pub const STATUS_UPDATE_LABEL: &str = "STATUS UPDATE:\t\t";

/// Free-text fields collected when a bug is filed. None of them are validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFields {
    /// File that contains the bug.
    pub source_file: String,
    pub user: String,
    pub bug_type: String,
    pub priority: String,
    pub description: String,
}

/// Header segments in write order, ending with the status label.
///
/// Each segment is flushed on its own so a failure leaves a readable prefix.
pub fn header_segments(fields: &ReportFields, created_at: &DateTime<FixedOffset>) -> Vec<String> {
    vec![
        format!("DATE AND TIME:\t\t{}\n", format_timestamp(created_at)),
        format!("FILENAME:\t\t{}\n\n", fields.source_file),
        format!("USER:\t\t\t{}\n", fields.user),
        format!("BUG TYPE:\t\t{}\n", fields.bug_type),
        format!("BUG PRIORITY:\t\t{}\n", fields.priority),
        format!("BUG DESCRIPTION: \t{}\n\n", wrap_description(&fields.description)),
        STATUS_LABEL.to_string(),
    ]
}

/// Segments opening a status update block, ending with the update label.
pub fn update_segments(updated_at: &DateTime<FixedOffset>) -> Vec<String> {
    vec![
        format!("{UPDATE_SEPARATOR}\n"),
        format!("DATE:\t\t\t{}\n", format_timestamp(updated_at)),
        STATUS_UPDATE_LABEL.to_string(),
    ]
}

/// Value written after a status label. No status writes nothing, not even
/// the line break.
pub fn status_value(status: Option<Status>) -> String {
    match status {
        Some(status) => format!("{}\n", status.label()),
        None => String::new(),
    }
}

/// Greedy word wrap used for the description field.
///
/// Short descriptions are returned untouched. Longer ones are split on
/// whitespace; a running count of token lengths (spaces excluded) decides
/// when to break, and the count restarts at zero after each break. Every
/// token is followed by a single space.
pub fn wrap_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_WRAP_WIDTH {
        return description.to_string();
    }

    let mut out = String::with_capacity(description.len() + 16);
    let mut running = 0usize;
    for token in description.split_whitespace() {
        running += token.chars().count();
        if running > DESCRIPTION_WRAP_WIDTH {
            running = 0;
            out.push('\n');
            out.push_str(CONTINUATION_INDENT);
        }
        out.push_str(token);
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2026-10-16T09:05:03+00:00").unwrap()
    }

    #[test]
    fn short_description_is_single_line() {
        let text = "Off by one error in loop bound causing crash";
        assert!(text.len() <= DESCRIPTION_WRAP_WIDTH);
        assert_eq!(wrap_description(text), text);
    }

    #[test]
    fn exactly_fifty_characters_is_not_wrapped() {
        let text = "a".repeat(50);
        assert_eq!(wrap_description(&text), text);
    }

    #[test]
    fn long_description_breaks_with_three_tabs() {
        let text = "The parser drops the final token whenever the input buffer ends \
                    exactly on a chunk boundary which corrupts the generated syntax tree";
        let wrapped = wrap_description(text);
        let lines: Vec<&str> = wrapped.split('\n').collect();
        assert!(lines.len() >= 2);
        for line in &lines[1..] {
            assert!(line.starts_with("\t\t\t"), "line {line:?}");
            assert!(!line.starts_with("\t\t\t\t"));
        }
        let rejoined: Vec<&str> = wrapped.split_whitespace().collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn break_happens_before_the_token_that_overflows() {
        // 10 tokens of 5 chars = 50, the 11th pushes the count to 55.
        let text = vec!["abcde"; 12].join(" ");
        let wrapped = wrap_description(&text);
        let expected = format!(
            "{} \n\t\t\tabcde abcde ",
            vec!["abcde"; 10].join(" ")
        );
        assert_eq!(wrapped, expected);
    }

    #[test]
    fn counter_restarts_at_zero_after_break() {
        // The overflowing token opens the next line uncounted, so that line
        // holds 11 tokens before the count passes 50 again.
        let text = vec!["abcde"; 21].join(" ");
        let wrapped = wrap_description(&text);
        let lines: Vec<&str> = wrapped.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].split_whitespace().count(), 11);

        let text = vec!["abcde"; 22].join(" ");
        assert_eq!(wrap_description(&text).split('\n').count(), 3);
    }

    #[test]
    fn single_oversized_token_starts_on_continuation_line() {
        let token = "x".repeat(60);
        assert_eq!(wrap_description(&token), format!("\n\t\t\t{token} "));
    }

    #[test]
    fn header_layout_matches_file_format() {
        let fields = ReportFields {
            source_file: "main.rs".into(),
            user: "alice".into(),
            bug_type: "logic".into(),
            priority: "high".into(),
            description: "Crash on start".into(),
        };
        let header: String = header_segments(&fields, &at()).concat();
        assert_eq!(
            header,
            "DATE AND TIME:\t\tFri Oct 16 09:05:03 +00:00 2026\n\
             FILENAME:\t\tmain.rs\n\
             \n\
             USER:\t\t\talice\n\
             BUG TYPE:\t\tlogic\n\
             BUG PRIORITY:\t\thigh\n\
             BUG DESCRIPTION: \tCrash on start\n\
             \n\
             BUG STATUS: \t\t"
        );
    }

    #[test]
    fn update_block_layout() {
        let block: String = update_segments(&at()).concat() + &status_value(Some(Status::Fixed));
        assert_eq!(
            block,
            "----------------------------------\n\
             DATE:\t\t\tFri Oct 16 09:05:03 +00:00 2026\n\
             STATUS UPDATE:\t\tFIXED\n"
        );
        assert_eq!(UPDATE_SEPARATOR.len(), 34);
    }

    #[test]
    fn missing_status_writes_nothing() {
        assert_eq!(status_value(None), "");
    }
}
