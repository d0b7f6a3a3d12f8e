//! Value types produced and consumed by trace extraction.
//!
//! # Examples
//!
//! ```
//! use trace_rail::{Frame, Trace};
//!
//! let trace = Trace::from_newest_first(vec![
//!     Frame::new("app", "handler", "/w/src/app/h.go", 20),
//!     Frame::new("app", "main", "/w/src/app/main.go", 8),
//! ])
//! .unwrap();
//!
//! println!("{}", trace);
//! //   0: app.main (app/main.go:8)
//! //   1: app.handler (app/h.go:20)
//! ```
use alloc::string::String;
use smallvec::SmallVec;

pub mod call_site;
pub mod flattened;
pub mod frame;
pub mod trace;
pub mod with_stack;

pub use call_site::CallSite;
pub use flattened::FlattenedError;
pub use frame::{Frame, UNKNOWN};
pub use trace::{Trace, TraceFingerprintConfig};
pub use with_stack::WithStack;

/// SmallVec-backed list of safe detail strings.
///
/// Uses inline storage for one element, the common case of a single
/// flattened stack dump.
pub type DetailVec = SmallVec<[String; 1]>;
