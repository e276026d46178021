//! Sponge Driver
//!
//! Absorb and squeeze phases over the 1024-bit state (rate 512, capacity 512).
//! The phases are separate types: a [`Squeezer`] only exists after
//! [`Sponge::finish`] has consumed the absorbing sponge, so output can never be
//! read from a partially absorbed state.

use crate::kernels::constants::{BLOCK_SIZE, DOMAIN_SEPARATOR, HASH_SIZE, ROUNDS};
use crate::kernels::padding::{apply_domain_separator, final_block};
use crate::kernels::permutation::{permute, permute_rounds};
use crate::kernels::state::LaneState;
use crate::types::PeerFn;

// =============================================================================
// ABSORB PHASE
// =============================================================================

/// Absorbing half of the sponge.
///
/// Feed full message blocks with [`absorb`](Self::absorb), then hand the
/// remaining bytes to [`finish`](Self::finish), which pads them, applies
/// domain separation and switches to squeezing.
#[derive(Clone)]
pub struct Sponge {
    state: LaneState,
    separator: u8,
    schedule: Schedule,
}

/// Which permutation the sponge runs between blocks.
#[derive(Clone, Copy, Debug)]
enum Schedule {
    /// 12 rounds, butterfly peers.
    Standard,
    /// Reduced rounds or an alternative peer schedule.
    Custom { rounds: usize, peer: PeerFn },
}

impl Schedule {
    #[inline(always)]
    #[allow(clippy::inline_always)]
    fn apply(self, state: &mut LaneState) {
        match self {
            Self::Standard => permute(state),
            Self::Custom { rounds, peer } => permute_rounds(state, rounds, peer),
        }
    }
}

impl Sponge {
    /// Fresh all-zero sponge with the standard parameters.
    pub const fn new() -> Self {
        Self::with_domain(DOMAIN_SEPARATOR)
    }

    /// Fresh sponge with a different domain-separation byte.
    pub const fn with_domain(separator: u8) -> Self {
        Self {
            state: LaneState::new(),
            separator,
            schedule: Schedule::Standard,
        }
    }

    /// Fresh sponge with a custom separator, round count and peer schedule.
    ///
    /// Only [`Sponge::new`] produces VORTEX-512 digests. The other
    /// combinations exist for diffusion analysis.
    ///
    /// # Panics
    /// Panics if `rounds` exceeds the 12 defined rounds.
    pub const fn with_params(separator: u8, rounds: usize, peer: PeerFn) -> Self {
        assert!(rounds <= ROUNDS, "at most 12 rounds are defined");
        Self {
            state: LaneState::new(),
            separator,
            schedule: Schedule::Custom { rounds, peer },
        }
    }

    /// XOR one full message block into the rate and permute.
    #[inline]
    pub fn absorb(&mut self, block: &[u8; BLOCK_SIZE]) {
        self.state.xor_block(block);
        self.schedule.apply(&mut self.state);
    }

    /// Close the absorb phase.
    ///
    /// Pads and absorbs `tail` (the bytes after the last full block, possibly
    /// empty), XORs the separator into lane 0 and permutes. Padding cannot be
    /// skipped: every [`Squeezer`] reads a state that absorbed a padded tail.
    ///
    /// # Panics
    /// Panics if `tail` is a full block or longer.
    pub fn finish(mut self, tail: &[u8]) -> Squeezer {
        self.absorb(&final_block(tail));
        apply_domain_separator(&mut self.state, self.separator);
        self.schedule.apply(&mut self.state);

        let mut buffer = [0u8; BLOCK_SIZE];
        self.state.write_rate(&mut buffer);
        Squeezer {
            state: self.state,
            buffer,
            pos: 0,
            schedule: self.schedule,
        }
    }

    /// Absorb a complete message and close the absorb phase.
    pub fn absorb_message(mut self, message: &[u8]) -> Squeezer {
        let mut chunks = message.chunks_exact(BLOCK_SIZE);
        for chunk in &mut chunks {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            self.absorb(&block);
        }
        self.finish(chunks.remainder())
    }
}

impl Default for Sponge {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Sponge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sponge")
            .field("separator", &self.separator)
            .field("schedule", &self.schedule)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// SQUEEZE PHASE
// =============================================================================

/// Squeezing half of the sponge.
///
/// Emits the rate lanes 64 bytes at a time, permuting between blocks. The
/// first 64 bytes are the VORTEX-512 digest. Capacity lanes are never
/// emitted.
#[derive(Clone)]
pub struct Squeezer {
    state: LaneState,
    buffer: [u8; BLOCK_SIZE],
    pos: usize,
    schedule: Schedule,
}

impl Squeezer {
    /// Fill `out` with the next `out.len()` output bytes.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        let mut filled = 0;
        while filled < out.len() {
            if self.pos == BLOCK_SIZE {
                self.schedule.apply(&mut self.state);
                self.state.write_rate(&mut self.buffer);
                self.pos = 0;
            }

            let n = (BLOCK_SIZE - self.pos).min(out.len() - filled);
            out[filled..filled + n].copy_from_slice(&self.buffer[self.pos..self.pos + n]);
            self.pos += n;
            filled += n;
        }
    }

    /// The 64-byte digest (the first squeezed block).
    #[must_use]
    pub fn digest(mut self) -> [u8; HASH_SIZE] {
        let mut out = [0u8; HASH_SIZE];
        self.squeeze(&mut out);
        out
    }
}

impl core::fmt::Debug for Squeezer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Squeezer")
            .field("pos", &self.pos)
            .finish_non_exhaustive()
    }
}
