use crate::types::trace::Trace;
use alloc::string::String;
use core::fmt::Write;

/// Configuration builder for customizing trace fingerprints.
///
/// A fingerprint groups reports of the same crash. By default it covers the
/// module, function and display path of every frame, and leaves line numbers
/// out so that unrelated edits above a call site do not split a group.
pub struct TraceFingerprintConfig<'a> {
    pub(crate) trace: &'a Trace,
    pub(crate) include_paths: bool,
    pub(crate) include_lines: bool,
    pub(crate) in_app_only: bool,
}

impl<'a> TraceFingerprintConfig<'a> {
    pub(crate) fn new(trace: &'a Trace) -> Self {
        Self {
            trace,
            include_paths: true,
            include_lines: false,
            in_app_only: false,
        }
    }

    /// Whether to include display paths in the fingerprint (default: true).
    #[must_use]
    pub fn include_paths(mut self, include: bool) -> Self {
        self.include_paths = include;
        self
    }

    /// Whether to include line numbers in the fingerprint (default: false).
    #[must_use]
    pub fn include_lines(mut self, include: bool) -> Self {
        self.include_lines = include;
        self
    }

    /// Only hash frames flagged as in-app (default: false).
    ///
    /// Traces parsed from text never carry in-app frames, so this falls back
    /// to hashing every frame when none qualifies.
    #[must_use]
    pub fn in_app_only(mut self, only: bool) -> Self {
        self.in_app_only = only;
        self
    }

    /// Computes the fingerprint using the configured options.
    #[must_use]
    pub fn compute(&self) -> u64 {
        const FNV_OFFSET: u64 = 0xcbf29ce484222325;
        let mut hash = FNV_OFFSET;

        let frames = self.trace.frames();
        let filter_in_app = self.in_app_only && frames.iter().any(|f| f.in_app);

        for frame in frames.iter().filter(|f| !filter_in_app || f.in_app) {
            hash_bytes(&mut hash, b"frame:");
            hash_bytes(&mut hash, frame.module.as_bytes());
            hash_bytes(&mut hash, b".");
            hash_bytes(&mut hash, frame.function.as_bytes());

            if self.include_paths {
                hash_bytes(&mut hash, b"@");
                hash_bytes(&mut hash, frame.filename.as_bytes());
            }

            if self.include_lines {
                hash_bytes(&mut hash, b":");
                hash_bytes(&mut hash, &frame.lineno.to_le_bytes());
            }
        }

        hash
    }

    /// Computes the fingerprint and returns it as a hex string.
    #[must_use]
    pub fn compute_hex(&self) -> String {
        let mut result = String::with_capacity(16);
        let _ = write!(result, "{:016x}", self.compute());
        result
    }
}

/// FNV-1a prime constant for 64-bit hash.
const FNV_PRIME: u64 = 0x100000001b3;

#[inline(always)]
fn hash_bytes(hash: &mut u64, bytes: &[u8]) {
    for &byte in bytes {
        *hash ^= byte as u64;
        *hash = hash.wrapping_mul(FNV_PRIME);
    }
}
