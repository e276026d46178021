//! VORTEX Kernel Constants
//!
//! Every table constant is derived from a single rule:
//!
//! ```text
//! constant = floor(frac(ln(p)) * 2^64)
//! ```
//!
//! where p is a prime number and frac(x) = x - floor(x).
//!
//! Prime assignment (consecutive, partitioned by purpose):
//!   `ROUND_CONSTANTS` : ln(197..263) — 12 consecutive primes, one per round
//!   `ROTATIONS`       : ln(269..401) — bit stream, see below
//!
//! Rotation stream: each prime contributes the top 60 bits of its constant
//! as ten 6-bit windows, most significant first. Windows are assigned to
//! lanes in order (round 0 lane 0 first) and a window is skipped when
//! - it is a multiple of 8 (zero and byte-aligned rotations),
//! - it equals the amount of the previous lane in the same round,
//! - it is lane 15 and equals lane 0 (wraparound neighbours).
//!
//! Changing any value here changes every digest.

use static_assertions::const_assert_eq;

// =============================================================================
// GEOMETRY
// =============================================================================

/// Number of 64-bit lanes in the permutation state (1024 bits).
pub const NUM_LANES: usize = 16;

/// Lanes 0..`RATE_LANES` form the rate region; the rest are capacity.
pub const RATE_LANES: usize = 8;

/// Size of one lane in bytes.
pub const LANE_BYTES: usize = 8;

/// Absorb block size in bytes (equal to the rate width, 512 bits).
pub const BLOCK_SIZE: usize = RATE_LANES * LANE_BYTES;

/// Capacity width in bits.
pub const CAPACITY_BITS: usize = (NUM_LANES - RATE_LANES) * LANE_BYTES * 8;

/// Hash output size in bytes (512-bit digest).
pub const HASH_SIZE: usize = 64;

const_assert_eq!(BLOCK_SIZE, 64);
const_assert_eq!(CAPACITY_BITS, 512);
const_assert_eq!(HASH_SIZE, BLOCK_SIZE);

// =============================================================================
// ROUNDS
// =============================================================================

/// 12 rounds: three passes of the 4-stage butterfly network.
pub const ROUNDS: usize = 12;

/// Stages in one full butterfly pass over 16 lanes (log2(16)).
pub const BUTTERFLY_STAGES: usize = 4;

const_assert_eq!(1 << BUTTERFLY_STAGES, NUM_LANES);
const_assert_eq!(ROUNDS % BUTTERFLY_STAGES, 0);

// =============================================================================
// PADDING & DOMAIN SEPARATION
// =============================================================================

/// First padding byte appended after the message.
pub const PAD_MARKER: u8 = 0x01;

/// Domain-separation byte (`0x06`), mixed into lane 0 with XOR before the
/// final permutation.
pub const DOMAIN_SEPARATOR: u8 = 0x06;

// =============================================================================
// ROUND CONSTANTS — frac(ln(p)) for consecutive primes
// =============================================================================

/// Per-round constant `RC[r]`, mixed with XOR into every pair update.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x4880_0A21_08F0_4118, // ln(197)
    0x4B16_0665_F361_8981, // ln(199)
    0x5A13_5FE8_1C7E_B508, // ln(211)
    0x683C_68C2_468D_7997, // ln(223)
    0x6CC9_863B_846A_AD92, // ln(227)
    0x6F08_67BC_D230_A9F5, // ln(229)
    0x7377_418F_4D97_DD42, // ln(233)
    0x79F9_83ED_4826_668C, // ln(239)
    0x7C1B_A6DE_8B1F_8F86, // ln(241)
    0x8684_1575_2878_9D37, // ln(251)
    0x8C90_4013_A404_2B60, // ln(257)
    0x9278_AFC8_7A60_335D, // ln(263)
];

// =============================================================================
// ROTATION AMOUNTS — 6-bit windows of frac(ln(p)), p = 269..401
// =============================================================================

/// Per-round, per-lane left-rotation amounts.
#[rustfmt::skip]
pub const ROTATIONS: [[u32; NUM_LANES]; ROUNDS] = [
    [38,  3, 60,  1, 17, 31, 11, 45, 49, 38, 34, 17, 53, 63,  1, 29],
    [38, 39, 59, 62, 28, 31, 19,  2, 47, 25, 54, 44, 54, 11, 38, 14],
    [38, 30, 41, 19,  2,  1, 10, 58, 47, 30, 35, 43, 33, 63, 10, 49],
    [53, 52,  1,  9, 34, 46, 33, 10, 49, 42, 59, 43,  5, 47, 22, 12],
    [17, 30, 57, 61, 22, 19, 43, 47, 28, 44,  6, 41, 50, 53, 36, 29],
    [34, 62, 58, 55, 39,  5, 35, 51, 21, 30, 33, 15, 28, 15, 29, 52],
    [31,  3, 52, 29, 60,  9, 34, 47, 54, 22, 53, 25, 18, 55, 29, 14],
    [18, 54, 46, 23, 62, 21, 25,  2, 55, 29,  3, 25, 47, 58, 35,  4],
    [34,  5, 42, 38,  6, 59, 20, 60, 57, 60, 23, 11, 18,  7,  3,  4],
    [41, 11, 58, 62, 50, 13, 17,  7, 14,  9,  3, 60,  9, 31, 26, 58],
    [20, 28, 55, 60, 43,  9, 43, 50, 31, 58, 29, 21, 60, 61, 42, 52],
    [34, 49, 63,  4, 63, 23, 62, 12, 63, 46, 60, 26,  1, 63, 39, 17],
];
