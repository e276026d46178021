//! VORTEX-P: the 1024-bit permutation.
//!
//! Each round pairs every lane with a butterfly peer at distance
//! `2^(r mod 4)` and mixes the pair with one 64-bit addition, two rotations
//! and two XORs:
//!
//! ```text
//! a' = rotl(a + b, ROT[r][i]) ^ RC[r]
//! b' = rotl(b, ROT[r][p]) ^ a'
//! ```
//!
//! where `a = lane[i]`, `b = lane[p]` and `i < p`. Pairs are disjoint, so
//! every update reads only the pre-round state. Four rounds complete one
//! butterfly network (every lane depends on every lane); 12 rounds run it
//! three times.

use crate::kernels::constants::{BUTTERFLY_STAGES, NUM_LANES, ROTATIONS, ROUNDS, ROUND_CONSTANTS};
use crate::kernels::state::LaneState;
use crate::types::PeerFn;

// =============================================================================
// PEER SCHEDULES
// =============================================================================

/// Butterfly partner of lane `i` in round `r`.
#[inline(always)]
#[allow(clippy::inline_always)]
pub const fn butterfly_peer(i: usize, r: usize) -> usize {
    i ^ (1 << (r % BUTTERFLY_STAGES))
}

/// Fixed-neighbour schedule: lane `i` always pairs with `i ^ 1`.
///
/// Lanes never leave their pair, so diffusion stalls at 2 of 16 lanes.
/// Kept for regression tests and the avalanche tool.
#[inline(always)]
#[allow(clippy::inline_always)]
pub const fn adjacent_peer(i: usize, _r: usize) -> usize {
    i ^ 1
}

// =============================================================================
// PERMUTATION
// =============================================================================

/// Full 12-round permutation.
#[inline]
pub fn permute(state: &mut LaneState) {
    permute_rounds(state, ROUNDS, butterfly_peer);
}

/// Run the first `rounds` rounds with a custom peer schedule.
///
/// `peer` must be an involution without fixed points for every round, i.e.
/// split the lanes into disjoint pairs. Reduced-round and non-butterfly
/// variants exist for diffusion analysis only.
///
/// # Panics
/// Panics if `rounds > ROUNDS`.
pub fn permute_rounds(state: &mut LaneState, rounds: usize, peer: PeerFn) {
    assert!(rounds <= ROUNDS, "at most {ROUNDS} rounds are defined");

    for (r, (rot, &rc)) in ROTATIONS
        .iter()
        .zip(ROUND_CONSTANTS.iter())
        .enumerate()
        .take(rounds)
    {
        let prev = state.lanes();

        for i in 0..NUM_LANES {
            let p = peer(i, r);
            debug_assert!(p < NUM_LANES && peer(p, r) == i && p != i, "peer schedule must pair lanes");
            if p < i {
                continue;
            }

            let a = prev[i].wrapping_add(prev[p]).rotate_left(rot[i]) ^ rc;
            let b = prev[p].rotate_left(rot[p]) ^ a;
            state.set_lane(i, a);
            state.set_lane(p, b);
        }
    }
}
