//! 1024-bit lane state.

use crate::kernels::constants::{BLOCK_SIZE, LANE_BYTES, NUM_LANES, RATE_LANES};

// =============================================================================
// STATE
// =============================================================================

/// Working state of one hash call: 16 lanes of 64 bits.
///
/// Lanes `0..RATE_LANES` are the rate, the rest are capacity. Only the
/// permutation writes capacity lanes, and lanes can only be read back
/// through the rate:
///
/// ```compile_fail
/// let state = vortex::kernels::state::LaneState::new();
/// let capacity = state.lanes()[8];
/// ```
///
/// ```
/// let state = vortex::kernels::state::LaneState::new();
/// let mut rate = [0u8; vortex::BLOCK_SIZE];
/// state.write_rate(&mut rate);
/// assert_eq!(rate, [0u8; 64]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LaneState {
    lanes: [u64; NUM_LANES],
}

impl LaneState {
    /// All-zero state.
    pub const fn new() -> Self {
        Self {
            lanes: [0; NUM_LANES],
        }
    }

    /// Build a state from raw lanes.
    pub const fn from_lanes(lanes: [u64; NUM_LANES]) -> Self {
        Self { lanes }
    }

    /// Read lane `i`.
    #[cfg(test)]
    pub(crate) const fn lane(&self, i: usize) -> u64 {
        self.lanes[i]
    }

    /// XOR `value` into lane `i`.
    #[inline(always)]
    #[allow(clippy::inline_always)]
    pub const fn xor_lane(&mut self, i: usize, value: u64) {
        self.lanes[i] ^= value;
    }

    /// Overwrite lane `i`.
    #[inline(always)]
    #[allow(clippy::inline_always)]
    pub const fn set_lane(&mut self, i: usize, value: u64) {
        self.lanes[i] = value;
    }

    /// Copy of all 16 lanes, capacity included.
    pub(crate) const fn lanes(&self) -> [u64; NUM_LANES] {
        self.lanes
    }

    /// XOR one block into the rate lanes (big-endian words).
    pub fn xor_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        for (lane, word) in self.lanes[..RATE_LANES]
            .iter_mut()
            .zip(block.chunks_exact(LANE_BYTES))
        {
            let mut bytes = [0u8; LANE_BYTES];
            bytes.copy_from_slice(word);
            *lane ^= u64::from_be_bytes(bytes);
        }
    }

    /// Write the rate lanes to `out` as big-endian bytes.
    pub fn write_rate(&self, out: &mut [u8; BLOCK_SIZE]) {
        for (word, lane) in out
            .chunks_exact_mut(LANE_BYTES)
            .zip(self.lanes[..RATE_LANES].iter())
        {
            word.copy_from_slice(&lane.to_be_bytes());
        }
    }
}

impl Default for LaneState {
    fn default() -> Self {
        Self::new()
    }
}

// Capacity lanes must not leak through formatting.
impl core::fmt::Debug for LaneState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LaneState").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_lands_in_rate_only() {
        let mut s = LaneState::new();
        s.xor_block(&[0xFF; BLOCK_SIZE]);

        for i in 0..RATE_LANES {
            assert_eq!(s.lane(i), u64::MAX, "rate lane {i}");
        }
        for i in RATE_LANES..NUM_LANES {
            assert_eq!(s.lane(i), 0, "capacity lane {i} touched by absorb");
        }
    }

    #[test]
    fn test_big_endian_lane_order() {
        let mut block = [0u8; BLOCK_SIZE];
        block[0] = 0x01;
        block[15] = 0x02;

        let mut s = LaneState::new();
        s.xor_block(&block);
        assert_eq!(s.lane(0), 0x0100_0000_0000_0000);
        assert_eq!(s.lane(1), 0x0000_0000_0000_0002);

        let mut out = [0u8; BLOCK_SIZE];
        s.write_rate(&mut out);
        assert_eq!(out, block);
    }

    #[test]
    fn test_lane_ops() {
        let mut s = LaneState::new();
        s.set_lane(3, 0xAA);
        s.xor_lane(3, 0x0F);
        assert_eq!(s.lane(3), 0xA5);
        assert_eq!(s.lanes()[3], 0xA5);
    }
}
