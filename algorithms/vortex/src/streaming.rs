//! Streaming Hasher
//!
//! Incremental hashing for data that arrives in pieces (files, sockets).
//! Full blocks are absorbed as soon as they are complete; at most one
//! partial block is buffered. The state lives only inside this value: there
//! is no way to export or resume it.

use crate::engine::sponge::{Sponge, Squeezer};
use crate::kernels::constants::{BLOCK_SIZE, HASH_SIZE};

#[cfg(feature = "digest-trait")]
use digest::typenum::U64;
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, HashMarker, OutputSizeUser, Reset, Update};

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streaming VORTEX-512 hasher.
///
/// Produces the same digest as [`crate::hash`] for any split of the input.
///
/// # Example
/// ```rust
/// use vortex::Hasher;
///
/// let mut hasher = Hasher::new();
/// hasher.update(b"VOR");
/// hasher.update(b"TEX");
/// assert_eq!(hasher.finalize(), vortex::hash(b"VORTEX"));
/// ```
#[derive(Clone, Debug)]
pub struct VortexHasher {
    /// Absorb phase
    sponge: Sponge,
    /// Partial block (always < `BLOCK_SIZE` bytes used)
    buffer: [u8; BLOCK_SIZE],
    /// Bytes used in `buffer`
    buffered: usize,
    /// Total bytes processed
    total_len: u64,
}

impl VortexHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create new streaming hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sponge: Sponge::new(),
            buffer: [0u8; BLOCK_SIZE],
            buffered: 0,
            total_len: 0,
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher.
    pub fn update(&mut self, mut data: &[u8]) {
        self.total_len += data.len() as u64;

        // Top up a pending partial block first
        if self.buffered > 0 {
            let take = (BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_SIZE {
                return;
            }
            self.sponge.absorb(&self.buffer);
            self.buffered = 0;
        }

        // Fast path: absorb whole blocks straight from the input
        let mut chunks = data.chunks_exact(BLOCK_SIZE);
        for chunk in &mut chunks {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.sponge.absorb(&block);
        }

        let remainder = chunks.remainder();
        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffered = remainder.len();
    }

    /// Total number of input bytes seen so far.
    pub const fn input_len(&self) -> u64 {
        self.total_len
    }

    /// Finalize and return the 64-byte digest.
    #[must_use]
    pub fn finalize(self) -> [u8; HASH_SIZE] {
        self.finalize_xof().digest()
    }

    /// Finalize into an extendable-output reader.
    ///
    /// The first 64 squeezed bytes equal [`finalize`](Self::finalize).
    #[must_use]
    pub fn finalize_xof(self) -> Squeezer {
        self.sponge.finish(&self.buffer[..self.buffered])
    }

    /// Reset hasher for reuse.
    pub const fn reset(&mut self) {
        *self = Self::new();
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for VortexHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for VortexHasher {
    type OutputSize = U64;
}

#[cfg(feature = "digest-trait")]
impl Update for VortexHasher {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for VortexHasher {
    fn finalize_into(self, out: &mut Output<Self>) {
        let res = self.finalize();
        out.copy_from_slice(&res);
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for VortexHasher {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for VortexHasher {}
