//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use trace_rail::prelude::*;
//!
//! let registry = OriginRegistry::default();
//! let err = WithStack::new("failed", vec![call_site!("main")]);
//! assert!(TraceResolver::new(&registry).resolve(&err).is_some());
//! ```

// Macros
pub use crate::call_site;

// Core types
pub use crate::origin::{KindKey, OriginRegistry};
pub use crate::resolve::TraceResolver;
pub use crate::types::{CallSite, FlattenedError, Frame, Trace, WithStack};

// Traits
pub use crate::traits::{ReportableError, StackSource};

// Entry points
pub use crate::parse::parse_printed_stack;
#[cfg(feature = "std")]
pub use crate::resolve::reportable_stack_trace;
