//! Ordered, non-empty stack traces.
//!
//! A [`Trace`] lists frames oldest call first, the order crash reporters
//! expect. There is no empty `Trace`: every constructor returns `None` instead,
//! so "no trace" is always spelled `Option::None`.

use crate::normalize::join_qualified_name;
use crate::types::frame::{Frame, UNKNOWN};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display, Write};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod fingerprint;

pub use fingerprint::TraceFingerprintConfig;

/// A reportable stack trace, oldest call first.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trace {
    frames: Vec<Frame>,
}

impl Trace {
    /// Wraps frames that are already oldest first.
    ///
    /// Returns `None` for an empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::{Frame, Trace};
    ///
    /// assert!(Trace::from_frames(Vec::new()).is_none());
    ///
    /// let trace = Trace::from_frames(vec![Frame::unknown()]).unwrap();
    /// assert_eq!(trace.len(), 1);
    /// ```
    #[inline]
    pub fn from_frames(frames: Vec<Frame>) -> Option<Self> {
        if frames.is_empty() {
            None
        } else {
            Some(Self { frames })
        }
    }

    /// Wraps frames listed newest first, reversing them into trace order.
    #[inline]
    pub fn from_newest_first(mut frames: Vec<Frame>) -> Option<Self> {
        frames.reverse();
        Self::from_frames(frames)
    }

    /// Returns the frames, oldest first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns an iterator over the frames, oldest first.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Number of frames; always at least one.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// The call site furthest from where the error was created.
    #[inline]
    pub fn oldest(&self) -> &Frame {
        &self.frames[0]
    }

    /// The call site where the error was created.
    #[inline]
    pub fn newest(&self) -> &Frame {
        &self.frames[self.frames.len() - 1]
    }

    /// Consumes the trace, returning its frames oldest first.
    #[inline]
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    /// Renders the trace back into the printed-stack grammar, newest first.
    ///
    /// Feeding the result to [`parse_printed_stack`](crate::parse_printed_stack)
    /// reproduces the trace. Dots inside a function name are written as middle
    /// dots, and the file line is omitted only when the frame has neither a
    /// path nor a line number.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::parse_printed_stack;
    ///
    /// let text = "pkg.Inner\n\t/w/src/pkg/a.go:9\npkg.Outer\n\t/w/src/pkg/b.go:3";
    /// let trace = parse_printed_stack(text).unwrap();
    /// assert_eq!(trace.to_printed(), text);
    /// ```
    pub fn to_printed(&self) -> String {
        let mut out = String::with_capacity(self.frames.len() * 48);
        for (i, frame) in self.frames.iter().rev().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if frame.is_unknown() {
                out.push_str(UNKNOWN);
            } else {
                out.push_str(&join_qualified_name(&frame.module, &frame.function));
            }
            if !frame.abs_path.is_empty() || frame.lineno != 0 {
                let _ = write!(out, "\n\t{}:{}", frame.abs_path, frame.lineno);
            }
        }
        out
    }

    /// Generates a grouping fingerprint with the default configuration.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint_config().compute()
    }

    /// Generates the fingerprint as a zero-padded hex string.
    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        self.fingerprint_config().compute_hex()
    }

    /// Creates a fingerprint configuration for this trace.
    #[must_use]
    pub fn fingerprint_config(&self) -> TraceFingerprintConfig<'_> {
        TraceFingerprintConfig::new(self)
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{:>3}: {}", i, frame)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Frame;
    type IntoIter = core::slice::Iter<'a, Frame>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl IntoIterator for Trace {
    type Item = Frame;
    type IntoIter = alloc::vec::IntoIter<Frame>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Trace {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            frames: Vec<Frame>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Trace::from_frames(raw.frames)
            .ok_or_else(|| serde::de::Error::invalid_length(0, &"at least one frame"))
    }
}
