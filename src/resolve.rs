//! Trace extraction over any [`ReportableError`].
//!
//! The resolver tries, in order:
//!
//! 1. structured call sites carried by the error;
//! 2. the first safe detail string, when the error's kind is a recognized
//!    origin in the [`OriginRegistry`];
//!
//! and otherwise reports no trace. It never fails: a missing or unreadable
//! stack is an expected outcome, not an error.

use crate::origin::OriginRegistry;
use crate::parse::parse_printed_stack;
use crate::structured::adapt_call_sites;
use crate::traits::{ReportableError, StackSource};
use crate::types::Trace;

/// Extracts reportable traces using an injected origin table.
///
/// # Examples
///
/// ```
/// use trace_rail::{FlattenedError, KindKey, OriginRegistry, TraceResolver};
///
/// let registry = OriginRegistry::default();
/// let resolver = TraceResolver::new(&registry);
///
/// // Flattened text from an unrecognized kind is not treated as a stack.
/// let err = FlattenedError::new(KindKey::new("db::Conflict"), "conflict")
///     .with_safe_detail("pkg.F\n\t/a.go:1");
/// assert!(resolver.resolve(&err).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TraceResolver<'r> {
    registry: &'r OriginRegistry,
}

impl<'r> TraceResolver<'r> {
    /// Creates a resolver over `registry`.
    #[inline]
    pub const fn new(registry: &'r OriginRegistry) -> Self {
        Self { registry }
    }

    /// Returns the origin table used for flattened stacks.
    #[inline]
    pub const fn registry(&self) -> &'r OriginRegistry {
        self.registry
    }

    /// Returns the error's stack as a [`Trace`], oldest call first, or `None`.
    pub fn resolve<E>(&self, err: &E) -> Option<Trace>
    where
        E: ReportableError + ?Sized,
    {
        match err.stack_source() {
            StackSource::Structured(sites) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(call_sites = sites.len(), "resolving structured stack");
                adapt_call_sites(sites)
            }
            StackSource::SafeDetails([first, ..]) => {
                let kind = err.kind_key();
                match self.registry.origin_of(&kind) {
                    Some(_origin) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(kind = %kind, origin = ?_origin, "parsing flattened stack");
                        parse_printed_stack(first)
                    }
                    None => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(kind = %kind, "safe details from unrecognized kind");
                        None
                    }
                }
            }
            StackSource::SafeDetails([]) | StackSource::Plain => None,
        }
    }
}

/// Resolves `err` against the process-wide [`OriginRegistry::global`] table.
///
/// # Examples
///
/// ```
/// use trace_rail::{reportable_stack_trace, CallSite, WithStack};
///
/// let err = WithStack::new("boom", vec![CallSite::new("app.run", "/c/src/app/run.go", 4)]);
/// let trace = reportable_stack_trace(&err).unwrap();
/// assert_eq!(trace.oldest().filename(), "app/run.go");
/// ```
#[cfg(feature = "std")]
pub fn reportable_stack_trace<E>(err: &E) -> Option<Trace>
where
    E: ReportableError + ?Sized,
{
    TraceResolver::new(OriginRegistry::global()).resolve(err)
}
