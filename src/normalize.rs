//! String helpers shared by every path that produces a [`Frame`](crate::Frame).
//!
//! Both helpers are total: they never fail and never allocate unless a
//! function name needs its middle dots rewritten.

use alloc::borrow::Cow;
use alloc::string::String;

/// Build-root marker stripped from absolute paths to form display paths.
pub const ROOT_MARKER: &str = "/src/";

/// Separator some runtimes print inside anonymous function names.
const MIDDLE_DOT: char = '\u{00B7}';

/// Returns the part of `path` following the last [`ROOT_MARKER`].
///
/// Paths without the marker are returned unchanged.
///
/// # Examples
///
/// ```
/// use trace_rail::trim_root;
///
/// assert_eq!(trim_root("/home/x/src/pkg/file.go"), "pkg/file.go");
/// assert_eq!(trim_root("/home/x/file.go"), "/home/x/file.go");
/// ```
#[inline]
pub fn trim_root(path: &str) -> &str {
    match path.rfind(ROOT_MARKER) {
        Some(idx) => &path[idx + ROOT_MARKER.len()..],
        None => path,
    }
}

/// Splits a qualified function identifier at its last `.` into
/// `(module, function)`.
///
/// Without a separator the module is empty. Middle dots in the function part
/// are rewritten to `.` after the split.
///
/// # Examples
///
/// ```
/// use trace_rail::split_qualified_name;
///
/// assert_eq!(split_qualified_name("pkg/sub.Func"), ("pkg/sub", "Func".into()));
/// assert_eq!(split_qualified_name("Func"), ("", "Func".into()));
/// assert_eq!(split_qualified_name("pkg.Outer\u{b7}1"), ("pkg", "Outer.1".into()));
/// ```
pub fn split_qualified_name(raw: &str) -> (&str, Cow<'_, str>) {
    let (module, function) = match raw.rfind('.') {
        Some(idx) => (&raw[..idx], &raw[idx + 1..]),
        None => ("", raw),
    };

    let function = if function.contains(MIDDLE_DOT) {
        Cow::Owned(function.replace(MIDDLE_DOT, "."))
    } else {
        Cow::Borrowed(function)
    };

    (module, function)
}

/// Joins `module` and `function` into the identifier [`split_qualified_name`]
/// splits back into the same pair.
///
/// Dots inside `function` are written as middle dots so that the last `.`
/// remains the module separator.
pub(crate) fn join_qualified_name(module: &str, function: &str) -> String {
    let mut out = String::with_capacity(module.len() + function.len() + 2);
    if !module.is_empty() {
        out.push_str(module);
        out.push('.');
    }
    out.extend(function.chars().map(|c| if c == '.' { MIDDLE_DOT } else { c }));
    out
}
