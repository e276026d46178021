//! Shared types used across the VORTEX library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::HASH_SIZE;

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Peer schedule signature: `(lane, round) -> partner lane`.
///
/// The production schedule is [`crate::kernels::permutation::butterfly_peer`];
/// alternatives exist so diffusion experiments can swap the schedule without
/// touching the round function.
pub type PeerFn = fn(usize, usize) -> usize;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// A byte slice that should hold a digest has the wrong length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestLengthError {
    actual: usize,
}

impl DigestLengthError {
    /// Create a new `DigestLengthError` for a slice of `actual` bytes.
    pub const fn new(actual: usize) -> Self {
        Self { actual }
    }

    /// Length of the rejected slice.
    pub const fn actual(&self) -> usize {
        self.actual
    }
}

impl fmt::Display for DigestLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VORTEX digests are {HASH_SIZE} bytes, got {} bytes",
            self.actual
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for DigestLengthError {}
