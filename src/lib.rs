//! Reportable stack traces for errors that carry them in any shape.
//!
//! An error can hold its call stack as structured call sites, as a foreign
//! library's printed dump, or as text that was flattened while crossing a
//! process boundary. `trace-rail` recognizes each shape and produces a
//! [`Trace`]: a non-empty list of [`Frame`]s, oldest call first, ready to be
//! forwarded to a crash reporter.
//!
//! # Examples
//!
//! ## Resolving a wrapped error
//!
//! ```
//! use trace_rail::{CallSite, OriginRegistry, TraceResolver, WithStack};
//!
//! let err = WithStack::new(
//!     "connection reset",
//!     vec![
//!         CallSite::new("app/net.dial", "/home/ci/src/app/net/dial.go", 88),
//!         CallSite::new("app/cmd.main", "/home/ci/src/app/cmd/main.go", 12),
//!     ],
//! );
//!
//! let registry = OriginRegistry::default();
//! let trace = TraceResolver::new(&registry).resolve(&err).unwrap();
//!
//! assert_eq!(trace.len(), 2);
//! assert_eq!(trace.oldest().function(), "main");
//! assert_eq!(trace.newest().filename(), "app/net/dial.go");
//! ```
//!
//! ## Parsing a flattened dump
//!
//! ```
//! use trace_rail::parse_printed_stack;
//!
//! let trace = parse_printed_stack("pkg.Foo\n\t/a/src/pkg/foo.go:42").unwrap();
//! let frame = trace.oldest();
//!
//! assert_eq!(frame.module(), "pkg");
//! assert_eq!(frame.function(), "Foo");
//! assert_eq!(frame.lineno(), 42);
//! assert_eq!(frame.filename(), "pkg/foo.go");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// `call_site!` for recording the invoking location
pub mod macros;
/// Root trimming and qualified-name splitting
pub mod normalize;
/// Origin markers identifying error kinds whose text is a stack dump
pub mod origin;
/// Reverse parser for printed stack dumps
pub mod parse;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Trace extraction over any reportable error
pub mod resolve;
/// Conversion of structured call sites into a trace
pub mod structured;
/// Capability traits implemented by reportable errors
pub mod traits;
/// Frames, traces, call sites and stack carriers
pub mod types;

pub use normalize::{split_qualified_name, trim_root, ROOT_MARKER};
pub use origin::{KindKey, OriginKind, OriginMarker, OriginRegistry, OriginRegistryBuilder};
#[cfg(feature = "std")]
pub use origin::RegistryError;
pub use parse::parse_printed_stack;
#[cfg(feature = "std")]
pub use resolve::reportable_stack_trace;
pub use resolve::TraceResolver;
pub use structured::{adapt_call_sites, render_call_sites};
pub use traits::{ReportableError, StackSource};
pub use types::{
    CallSite, DetailVec, FlattenedError, Frame, Trace, TraceFingerprintConfig, WithStack,
};
