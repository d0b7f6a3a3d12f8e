//! Reverse parser for printed stack dumps.
//!
//! A printed dump is a repetition of either
//!
//! ```text
//! unknown
//! ```
//!
//! or
//!
//! ```text
//! <qualified function name>
//! <tab><file>:<line>
//! ```
//!
//! listed newest call first, usually preceded by a newline. The file line is
//! optional: an entry only consumes the following line when it starts with a
//! tab. Parsing is lenient throughout; a malformed line number becomes `0`
//! instead of rejecting the dump.

use crate::normalize::split_qualified_name;
use crate::types::frame::{Frame, UNKNOWN};
use crate::types::trace::Trace;
use alloc::vec::Vec;

/// Parses a printed stack dump into a [`Trace`], oldest call first.
///
/// Returns `None` when the input holds no entries (empty or only whitespace).
///
/// # Examples
///
/// ```
/// use trace_rail::parse_printed_stack;
///
/// let dump = "\nunknown\npkg.Foo\n\t/a/src/pkg/c.go:42";
/// let trace = parse_printed_stack(dump).unwrap();
///
/// assert_eq!(trace.len(), 2);
/// assert_eq!(trace.oldest().function(), "Foo");
/// assert!(trace.newest().is_unknown());
///
/// assert!(parse_printed_stack("  \n\t\n").is_none());
/// ```
pub fn parse_printed_stack(text: &str) -> Option<Trace> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let mut frames = Vec::with_capacity(lines.len() / 2 + 1);

    let mut i = 0;
    while i < lines.len() {
        let (next, entry) = parse_entry(&lines, i);
        frames.push(entry.into_frame());
        i = next;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(frames = frames.len(), "parsed printed stack");

    Trace::from_newest_first(frames)
}

/// One logical entry of a printed dump, borrowed from the input.
struct Entry<'a> {
    function: &'a str,
    file: &'a str,
    line: u32,
}

impl Entry<'_> {
    fn into_frame(self) -> Frame {
        if self.function == UNKNOWN {
            return Frame::new(UNKNOWN, UNKNOWN, self.file, self.line);
        }
        let (module, function) = split_qualified_name(self.function);
        Frame::new(module, function, self.file, self.line)
    }
}

/// Reads the entry starting at `lines[i]` and returns the index of the line
/// following it.
fn parse_entry<'a>(lines: &[&'a str], i: usize) -> (usize, Entry<'a>) {
    let mut entry = Entry {
        function: lines[i],
        file: "",
        line: 0,
    };

    match lines.get(i + 1) {
        Some(next) if next.starts_with('\t') => {
            let (file, line) = split_file_line(next.trim());
            entry.file = file;
            entry.line = line;
            (i + 2, entry)
        }
        _ => (i + 1, entry),
    }
}

/// Splits `file:line` at the last colon.
fn split_file_line(file_line: &str) -> (&str, u32) {
    match file_line.rfind(':') {
        None => (file_line, 0),
        Some(sep) => {
            let digits = &file_line[sep + 1..];
            let line = match digits.parse::<u32>() {
                Ok(line) => line,
                Err(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(line = digits, "unparseable line number, using 0");
                    0
                }
            };
            (&file_line[..sep], line)
        }
    }
}
