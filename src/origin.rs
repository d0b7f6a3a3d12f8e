//! Origin markers: the error kinds whose first safe detail is a printed stack.
//!
//! Only errors of a recognized kind have their flattened text parsed. The
//! recognized kinds are collected once, at startup, by inspecting a sentinel
//! instance of each kind for its [`KindKey`]. The resulting [`OriginRegistry`]
//! is immutable and is handed to a [`TraceResolver`](crate::TraceResolver).
//!
//! With the `std` feature a registry can also be installed process-wide with
//! [`OriginRegistry::install`] and read back through [`OriginRegistry::global`].

use crate::traits::ReportableError;
use crate::types::WithStack;
use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Opaque identity of an error's concrete kind.
///
/// Keys are strings so that they survive being sent across a process
/// boundary along with a flattened error.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindKey(Cow<'static, str>);

impl KindKey {
    /// Creates a key from a static string.
    #[inline]
    pub const fn new(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// Creates a key from an owned string, e.g. one received over the wire.
    #[inline]
    pub fn from_string(key: String) -> Self {
        Self(Cow::Owned(key))
    }

    /// Key derived from the Rust type name of `T`.
    ///
    /// Generic types produce a different key per instantiation; wrappers that
    /// should share one identity define a constant key instead.
    #[inline]
    pub fn of<T: ?Sized>() -> Self {
        Self::new(core::any::type_name::<T>())
    }

    /// Returns the key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for KindKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three kinds of errors that may carry a flattened stack dump.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginKind {
    /// A foreign library's base error, created with a stack.
    ForeignFundamental,
    /// A foreign library's wrapper that adds a stack to another error.
    ForeignWithStack,
    /// This crate's own [`WithStack`] wrapper.
    OwnWithStack,
}

/// Association between an [`OriginKind`] and the key its errors report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginMarker {
    pub kind: OriginKind,
    pub key: KindKey,
}

/// Read-only table of recognized origin markers.
///
/// # Examples
///
/// ```
/// use trace_rail::{KindKey, OriginKind, OriginRegistry, ReportableError};
///
/// struct PkgFundamental;
///
/// impl ReportableError for PkgFundamental {
///     fn kind_key(&self) -> KindKey {
///         KindKey::new("pkg/errors::fundamental")
///     }
/// }
///
/// let registry = OriginRegistry::builder()
///     .foreign_fundamental(&PkgFundamental)
///     .build();
///
/// assert_eq!(
///     registry.origin_of(&KindKey::new("pkg/errors::fundamental")),
///     Some(OriginKind::ForeignFundamental)
/// );
/// assert_eq!(registry.origin_of(&KindKey::new("io::Error")), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginRegistry {
    markers: SmallVec<[OriginMarker; 3]>,
}

impl OriginRegistry {
    /// Returns a builder that reads kind keys from sentinel errors.
    #[inline]
    pub fn builder() -> OriginRegistryBuilder {
        OriginRegistryBuilder::default()
    }

    /// Returns the origin kind registered for `key`, if any.
    pub fn origin_of(&self, key: &KindKey) -> Option<OriginKind> {
        self.markers.iter().find(|m| &m.key == key).map(|m| m.kind)
    }

    /// Returns `true` when `key` matches any registered marker.
    #[inline]
    pub fn is_recognized(&self, key: &KindKey) -> bool {
        self.origin_of(key).is_some()
    }

    /// Returns the registered markers.
    #[inline]
    pub fn markers(&self) -> &[OriginMarker] {
        &self.markers
    }
}

impl Default for OriginRegistry {
    /// A registry recognizing only this crate's own [`WithStack`].
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder collecting origin markers by inspecting sentinel errors.
#[derive(Debug, Clone, Default)]
pub struct OriginRegistryBuilder {
    markers: Vec<OriginMarker>,
}

impl OriginRegistryBuilder {
    /// Registers the kind of a foreign library's base error.
    #[must_use]
    pub fn foreign_fundamental<E: ReportableError + ?Sized>(self, sentinel: &E) -> Self {
        self.register(OriginKind::ForeignFundamental, sentinel.kind_key())
    }

    /// Registers the kind of a foreign library's stack-adding wrapper.
    #[must_use]
    pub fn foreign_with_stack<E: ReportableError + ?Sized>(self, sentinel: &E) -> Self {
        self.register(OriginKind::ForeignWithStack, sentinel.kind_key())
    }

    /// Overrides the kind used for this system's own wrapper.
    #[must_use]
    pub fn own_with_stack<E: ReportableError + ?Sized>(self, sentinel: &E) -> Self {
        self.register(OriginKind::OwnWithStack, sentinel.kind_key())
    }

    /// Registers a key directly, replacing any key already held for `kind`.
    #[must_use]
    pub fn register(mut self, kind: OriginKind, key: KindKey) -> Self {
        self.markers.retain(|m| m.kind != kind);
        self.markers.push(OriginMarker { kind, key });
        self
    }

    /// Finishes the table, inspecting a [`WithStack`] sentinel when no own
    /// wrapper kind was registered.
    pub fn build(self) -> OriginRegistry {
        let mut markers: SmallVec<[OriginMarker; 3]> = self.markers.into_iter().collect();

        if !markers.iter().any(|m| m.kind == OriginKind::OwnWithStack) {
            let sentinel = WithStack::new((), Vec::new());
            markers.push(OriginMarker {
                kind: OriginKind::OwnWithStack,
                key: sentinel.kind_key(),
            });
        }

        OriginRegistry { markers }
    }
}

#[cfg(feature = "std")]
mod global {
    use super::OriginRegistry;
    use core::fmt::{self, Display};
    use std::sync::OnceLock;

    static GLOBAL: OnceLock<OriginRegistry> = OnceLock::new();

    /// Failure to install the process-wide origin table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum RegistryError {
        /// A table was already installed, or [`OriginRegistry::global`] was
        /// read before any install and fixed the default table.
        AlreadyInstalled,
    }

    impl Display for RegistryError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::AlreadyInstalled => f.write_str("origin registry already installed"),
            }
        }
    }

    impl core::error::Error for RegistryError {}

    impl OriginRegistry {
        /// Installs `registry` as the process-wide table.
        ///
        /// Call once during startup, before any concurrent use.
        ///
        /// # Errors
        ///
        /// Returns [`RegistryError::AlreadyInstalled`] if a table is already in
        /// place; the existing table is left untouched.
        pub fn install(
            registry: OriginRegistry,
        ) -> Result<&'static OriginRegistry, RegistryError> {
            let mut pending = Some(registry);
            let installed = GLOBAL.get_or_init(|| pending.take().unwrap_or_default());

            match pending {
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        markers = installed.markers().len(),
                        "installed origin registry"
                    );
                    Ok(installed)
                }
                Some(_) => Err(RegistryError::AlreadyInstalled),
            }
        }

        /// The process-wide table, initialized to [`OriginRegistry::default`]
        /// if nothing was installed.
        pub fn global() -> &'static OriginRegistry {
            GLOBAL.get_or_init(OriginRegistry::default)
        }
    }
}

#[cfg(feature = "std")]
pub use global::RegistryError;
