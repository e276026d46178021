//! Padding & Domain Separation
//!
//! Message bytes are followed by `0x01` and zero bytes up to the next block
//! boundary. The marker is always written, so a message that already fills
//! whole blocks gets one extra block of padding and no two messages share a
//! padded form.

use core::iter::FusedIterator;
use core::slice::ChunksExact;

use crate::kernels::constants::{BLOCK_SIZE, PAD_MARKER};
use crate::kernels::state::LaneState;

// =============================================================================
// PADDING
// =============================================================================

/// Length in bytes of the padded form of a `len`-byte message.
#[inline]
pub const fn padded_len(len: usize) -> usize {
    (len / BLOCK_SIZE + 1) * BLOCK_SIZE
}

/// Pad the trailing partial block of a message (`remainder.len() < BLOCK_SIZE`).
///
/// # Panics
/// Panics if `remainder` is a full block or longer.
pub fn final_block(remainder: &[u8]) -> [u8; BLOCK_SIZE] {
    assert!(
        remainder.len() < BLOCK_SIZE,
        "remainder must be shorter than one block"
    );
    let mut block = [0u8; BLOCK_SIZE];
    block[..remainder.len()].copy_from_slice(remainder);
    block[remainder.len()] = PAD_MARKER;
    block
}

/// Split `message` into padded blocks without copying the message.
pub fn pad(message: &[u8]) -> PaddedBlocks<'_> {
    let chunks = message.chunks_exact(BLOCK_SIZE);
    let tail = final_block(chunks.remainder());
    PaddedBlocks {
        chunks,
        tail: Some(tail),
    }
}

/// Iterator over the padded blocks of a message.
///
/// Yields every full message block, then exactly one padded tail block.
#[derive(Clone, Debug)]
pub struct PaddedBlocks<'a> {
    chunks: ChunksExact<'a, u8>,
    tail: Option<[u8; BLOCK_SIZE]>,
}

impl Iterator for PaddedBlocks<'_> {
    type Item = [u8; BLOCK_SIZE];

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(chunk) = self.chunks.next() {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            return Some(block);
        }
        self.tail.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.chunks.len() + usize::from(self.tail.is_some());
        (n, Some(n))
    }
}

impl ExactSizeIterator for PaddedBlocks<'_> {}
impl FusedIterator for PaddedBlocks<'_> {}

// =============================================================================
// DOMAIN SEPARATION
// =============================================================================

/// XOR the separator byte into the low byte of lane 0.
#[inline]
pub fn apply_domain_separator(state: &mut LaneState, separator: u8) {
    state.xor_lane(0, u64::from(separator));
}
