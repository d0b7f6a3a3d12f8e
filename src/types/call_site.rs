use crate::types::frame::UNKNOWN;
use alloc::borrow::Cow;
use core::fmt::{self, Display};
use core::panic::Location;

/// A structured call-site reference as handed over by a capturing component.
///
/// Call sites are opaque to the rest of the crate: the only thing done with
/// them is rendering into the printed-stack grammar through [`Display`], which
/// writes `function`, a newline, a tab, then `file:line`. Unresolved parts
/// render as `unknown` with line `0`.
///
/// # Examples
///
/// ```
/// use trace_rail::CallSite;
///
/// let site = CallSite::new("pkg.Handler", "/srv/src/pkg/handler.go", 30);
/// assert_eq!(site.to_string(), "pkg.Handler\n\t/srv/src/pkg/handler.go:30");
/// assert_eq!(CallSite::unknown().to_string(), "unknown\n\tunknown:0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSite {
    function: Option<Cow<'static, str>>,
    file: Option<Cow<'static, str>>,
    line: u32,
}

impl CallSite {
    /// Creates a resolved call site.
    #[inline]
    pub fn new<F, P>(function: F, file: P, line: u32) -> Self
    where
        F: Into<Cow<'static, str>>,
        P: Into<Cow<'static, str>>,
    {
        Self {
            function: Some(function.into()),
            file: Some(file.into()),
            line,
        }
    }

    /// A call site whose program counter did not resolve to a function.
    #[inline]
    pub const fn unknown() -> Self {
        Self {
            function: None,
            file: None,
            line: 0,
        }
    }

    /// Builds a call site from a `#[track_caller]` location.
    #[inline]
    pub fn from_location<F>(function: F, location: &Location<'static>) -> Self
    where
        F: Into<Cow<'static, str>>,
    {
        Self::new(function, location.file(), location.line())
    }

    /// Returns `true` when the function could not be resolved.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.function.is_none()
    }
}

impl Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let function = self.function.as_deref().unwrap_or(UNKNOWN);
        let file = self.file.as_deref().unwrap_or(UNKNOWN);
        write!(f, "{}\n\t{}:{}", function, file, self.line)
    }
}
