//! Conversion of structured call sites into a [`Trace`].
//!
//! Call-site fields are not decoded one by one. The whole list is rendered to
//! the printed-stack grammar and handed to
//! [`parse_printed_stack`](crate::parse_printed_stack), so structured and
//! flattened stacks always produce identical frames.

use crate::parse::parse_printed_stack;
use crate::types::{CallSite, Trace};
use alloc::string::String;
use core::fmt::Write;

/// Renders call sites (newest first) in the printed-stack grammar.
///
/// Every entry is preceded by a newline, matching how capture libraries print
/// a full stack.
///
/// # Examples
///
/// ```
/// use trace_rail::{render_call_sites, CallSite};
///
/// let text = render_call_sites(&[CallSite::new("pkg.F", "/s/f.go", 1), CallSite::unknown()]);
/// assert_eq!(text, "\npkg.F\n\t/s/f.go:1\nunknown\n\tunknown:0");
/// ```
pub fn render_call_sites(sites: &[CallSite]) -> String {
    let mut out = String::with_capacity(sites.len() * 64);
    for site in sites {
        let _ = write!(out, "\n{}", site);
    }
    out
}

/// Adapts call sites captured newest first into a [`Trace`], oldest first.
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use trace_rail::{adapt_call_sites, CallSite};
///
/// let trace = adapt_call_sites(&[
///     CallSite::new("app.leaf", "/b/src/app/leaf.go", 5),
///     CallSite::new("app.root", "/b/src/app/root.go", 50),
/// ])
/// .unwrap();
///
/// assert_eq!(trace.oldest().function(), "root");
/// assert_eq!(trace.newest().function(), "leaf");
/// assert!(adapt_call_sites(&[]).is_none());
/// ```
pub fn adapt_call_sites(sites: &[CallSite]) -> Option<Trace> {
    if sites.is_empty() {
        return None;
    }
    parse_printed_stack(&render_call_sites(sites))
}
