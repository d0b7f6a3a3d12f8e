//! Capability traits for reportable errors.
//!
//! Instead of querying an error for methods at runtime, an error describes the
//! stack information it carries once, through [`ReportableError::stack_source`].
//! The resolver then dispatches on the returned [`StackSource`] variant.

pub mod reportable;

pub use reportable::{ReportableError, StackSource};
