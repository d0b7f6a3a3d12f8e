use crate::normalize::trim_root;
use alloc::string::String;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Function and module name given to call sites that could not be resolved.
pub const UNKNOWN: &str = "unknown";

/// One call-site entry of a reportable stack trace.
///
/// Field names follow the crash reporter's frame payload, so a serialized
/// `Frame` can be embedded in an event without renaming. On deserialization
/// `filename` is recomputed from `abs_path`.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Frame {
    pub(crate) abs_path: String,
    pub(crate) filename: String,
    pub(crate) lineno: u32,
    pub(crate) module: String,
    pub(crate) function: String,
    pub(crate) in_app: bool,
}

impl Frame {
    /// Creates a frame, deriving the display path from `abs_path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::Frame;
    ///
    /// let frame = Frame::new("app/db", "query", "/build/src/app/db/query.go", 17);
    /// assert_eq!(frame.filename(), "app/db/query.go");
    /// assert!(!frame.in_app());
    /// ```
    pub fn new<M, F, P>(module: M, function: F, abs_path: P, lineno: u32) -> Self
    where
        M: Into<String>,
        F: Into<String>,
        P: Into<String>,
    {
        let abs_path = abs_path.into();
        let filename = trim_root(&abs_path).into();
        Self {
            abs_path,
            filename,
            lineno,
            module: module.into(),
            function: function.into(),
            in_app: false,
        }
    }

    /// A frame for a call site with no resolvable function.
    #[inline]
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN, String::new(), 0)
    }

    /// Marks the frame as belonging to the application rather than a library.
    #[must_use]
    #[inline]
    pub fn with_in_app(mut self, in_app: bool) -> Self {
        self.in_app = in_app;
        self
    }

    /// Replaces the line number.
    #[must_use]
    #[inline]
    pub fn with_lineno(mut self, lineno: u32) -> Self {
        self.lineno = lineno;
        self
    }

    /// Absolute path of the source file, empty when unknown.
    #[inline]
    pub fn abs_path(&self) -> &str {
        &self.abs_path
    }

    /// Display path: `abs_path` with everything up to the build root removed.
    #[inline]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Line number, `0` when unknown.
    #[inline]
    pub fn lineno(&self) -> u32 {
        self.lineno
    }

    /// Module (package path) the function belongs to.
    #[inline]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Function name without its module.
    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Whether the frame belongs to the application rather than a library.
    #[inline]
    pub fn in_app(&self) -> bool {
        self.in_app
    }

    /// Returns `true` when both module and function are [`UNKNOWN`].
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.function == UNKNOWN && self.module == UNKNOWN
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            f.write_str(UNKNOWN)?;
        } else if self.module.is_empty() {
            f.write_str(&self.function)?;
        } else {
            write!(f, "{}.{}", self.module, self.function)?;
        }

        if !self.filename.is_empty() {
            write!(f, " ({}:{})", self.filename, self.lineno)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Frame {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            abs_path: String,
            lineno: u32,
            module: String,
            function: String,
            #[serde(default)]
            in_app: bool,
        }

        let raw = Raw::deserialize(deserializer)?;
        let frame = Frame::new(raw.module, raw.function, raw.abs_path, raw.lineno);
        Ok(frame.with_in_app(raw.in_app))
    }
}
