use crate::origin::KindKey;
use crate::types::CallSite;
use alloc::boxed::Box;
use alloc::string::String;

/// Where an error keeps its stack trace, if anywhere.
///
/// An error reports exactly one source. Errors holding both structured call
/// sites and detail strings should report [`StackSource::Structured`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackSource<'a> {
    /// Call sites captured in-process, newest first.
    Structured(&'a [CallSite]),
    /// Redaction-safe detail strings; the first one may be a printed stack.
    SafeDetails(&'a [String]),
    /// No stack information.
    Plain,
}

/// An error whose stack trace can be extracted for reporting.
///
/// # Examples
///
/// ```
/// use trace_rail::{KindKey, OriginRegistry, ReportableError, StackSource, TraceResolver};
///
/// struct Timeout;
///
/// impl ReportableError for Timeout {
///     fn kind_key(&self) -> KindKey {
///         KindKey::new("net::Timeout")
///     }
/// }
///
/// let registry = OriginRegistry::default();
/// assert_eq!(Timeout.stack_source(), StackSource::Plain);
/// assert!(TraceResolver::new(&registry).resolve(&Timeout).is_none());
/// ```
pub trait ReportableError {
    /// Identity of the error's concrete kind.
    fn kind_key(&self) -> KindKey;

    /// The stack information carried by this error.
    fn stack_source(&self) -> StackSource<'_> {
        StackSource::Plain
    }
}

impl<T: ReportableError + ?Sized> ReportableError for &T {
    #[inline]
    fn kind_key(&self) -> KindKey {
        (**self).kind_key()
    }

    #[inline]
    fn stack_source(&self) -> StackSource<'_> {
        (**self).stack_source()
    }
}

impl<T: ReportableError + ?Sized> ReportableError for Box<T> {
    #[inline]
    fn kind_key(&self) -> KindKey {
        (**self).kind_key()
    }

    #[inline]
    fn stack_source(&self) -> StackSource<'_> {
        (**self).stack_source()
    }
}
