use crate::origin::KindKey;
use crate::traits::{ReportableError, StackSource};
use crate::types::DetailVec;
use alloc::string::String;
use core::fmt::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An error reduced to plain data, as it looks after crossing a process or
/// network boundary.
///
/// The original kind is kept as a [`KindKey`] so that the receiving side can
/// still tell whether the first safe detail is a printed stack.
///
/// # Examples
///
/// ```
/// use trace_rail::{FlattenedError, KindKey, OriginRegistry, TraceResolver, WithStack};
///
/// let err = FlattenedError::new(WithStack::<()>::KIND, "disk full")
///     .with_safe_detail("\nstore.write\n\t/srv/src/store/write.go:61");
///
/// let registry = OriginRegistry::default();
/// let trace = TraceResolver::new(&registry).resolve(&err).unwrap();
/// assert_eq!(trace.oldest().module(), "store");
/// assert_eq!(trace.oldest().lineno(), 61);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedError {
    pub(crate) kind: KindKey,
    pub(crate) message: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) safe_details: DetailVec,
}

impl FlattenedError {
    /// Creates a flattened error without safe details.
    #[inline]
    pub fn new<M: Into<String>>(kind: KindKey, message: M) -> Self {
        Self {
            kind,
            message: message.into(),
            safe_details: DetailVec::new(),
        }
    }

    /// Appends one safe detail string.
    #[must_use]
    #[inline]
    pub fn with_safe_detail<S: Into<String>>(mut self, detail: S) -> Self {
        self.safe_details.push(detail.into());
        self
    }

    /// Replaces all safe detail strings.
    #[must_use]
    #[inline]
    pub fn with_safe_details(mut self, details: DetailVec) -> Self {
        self.safe_details = details;
        self
    }

    /// Returns the kind key of the original error.
    #[inline]
    pub fn kind(&self) -> &KindKey {
        &self.kind
    }

    /// Returns the original error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the redaction-safe detail strings.
    #[inline]
    pub fn safe_details(&self) -> &[String] {
        &self.safe_details
    }
}

impl Display for FlattenedError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl ReportableError for FlattenedError {
    #[inline]
    fn kind_key(&self) -> KindKey {
        self.kind.clone()
    }

    #[inline]
    fn stack_source(&self) -> StackSource<'_> {
        StackSource::SafeDetails(&self.safe_details)
    }
}

impl core::error::Error for FlattenedError {}
