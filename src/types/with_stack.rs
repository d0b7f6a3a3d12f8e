use crate::origin::KindKey;
use crate::structured::render_call_sites;
use crate::traits::{ReportableError, StackSource};
use crate::types::{CallSite, DetailVec, FlattenedError};
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt::{Debug, Display};

/// Wraps an error together with the call sites recorded when it was created.
///
/// `WithStack` does not capture anything itself; the call sites come from
/// whatever capturing component the application uses, newest first.
///
/// # Examples
///
/// ```
/// use trace_rail::{call_site, OriginRegistry, TraceResolver, WithStack};
///
/// fn open_config() -> Result<(), WithStack<&'static str>> {
///     Err(WithStack::new("missing file", vec![call_site!("open_config")]))
/// }
///
/// let err = open_config().unwrap_err();
/// assert_eq!(err.to_string(), "missing file");
///
/// let registry = OriginRegistry::default();
/// let trace = TraceResolver::new(&registry).resolve(&err).unwrap();
/// assert_eq!(trace.newest().function(), "open_config");
/// ```
pub struct WithStack<E> {
    pub(crate) inner: E,
    pub(crate) stack: Vec<CallSite>,
}

impl<E> WithStack<E> {
    /// Kind key shared by every `WithStack`, whatever the wrapped type.
    pub const KIND: KindKey = KindKey::new("trace_rail::WithStack");

    /// Wraps `inner` with call sites listed newest first.
    #[inline]
    pub fn new(inner: E, stack: Vec<CallSite>) -> Self {
        Self { inner, stack }
    }

    /// Returns a reference to the wrapped error.
    #[inline]
    pub const fn inner(&self) -> &E {
        &self.inner
    }

    /// Consumes the wrapper, returning the wrapped error.
    #[inline]
    pub fn into_inner(self) -> E {
        self.inner
    }

    /// Recorded call sites, newest first.
    #[inline]
    pub fn stack(&self) -> &[CallSite] {
        &self.stack
    }

    /// Reduces the error to its transportable form.
    ///
    /// The message is the inner error's display text and the first safe
    /// detail is the rendered stack.
    pub fn flatten(&self) -> FlattenedError
    where
        E: Display,
    {
        let mut details = DetailVec::new();
        details.push(render_call_sites(&self.stack));
        FlattenedError::new(Self::KIND, self.inner.to_string()).with_safe_details(details)
    }
}

impl<E: Debug> Debug for WithStack<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WithStack")
            .field("inner", &self.inner)
            .field("frames", &self.stack.len())
            .finish()
    }
}

impl<E: Display> Display for WithStack<E> {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl<E> ReportableError for WithStack<E> {
    #[inline]
    fn kind_key(&self) -> KindKey {
        Self::KIND
    }

    #[inline]
    fn stack_source(&self) -> StackSource<'_> {
        StackSource::Structured(&self.stack)
    }
}

impl<E> core::error::Error for WithStack<E>
where
    E: core::error::Error + 'static,
{
    /// Returns the inner error as the source, enabling error chain traversal.
    #[inline]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.inner)
    }
}
