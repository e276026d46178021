//! Public API Layer
//!
use crate::engine::parallel;
use crate::engine::sponge::Sponge;
use crate::kernels::constants::HASH_SIZE;
use crate::types::DigestLengthError;
use subtle::ConstantTimeEq;

use alloc::vec::Vec;

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the VORTEX-512 digest of `input`.
///
/// Deterministic, allocation-free and safe to call from any number of
/// threads at once. The empty input is valid.
///
/// # Example
/// ```rust
/// let digest = vortex::hash(b"VORTEX");
/// assert_eq!(digest.len(), 64);
/// ```
#[must_use]
#[inline]
pub fn hash(input: &[u8]) -> [u8; HASH_SIZE] {
    Sponge::new().absorb_message(input).digest()
}

/// Fill `out` with extendable output.
///
/// The first 64 bytes equal [`hash`]; further bytes come from re-permuting
/// the state after each 64-byte block.
///
/// # Example
/// ```rust
/// let mut long = [0u8; 192];
/// vortex::hash_xof(b"VORTEX", &mut long);
/// assert_eq!(long[..64], vortex::hash(b"VORTEX"));
/// ```
pub fn hash_xof(input: &[u8], out: &mut [u8]) {
    Sponge::new().absorb_message(input).squeeze(out);
}

/// Hash every message independently, returning digests in input order.
///
/// Uses the Rayon thread pool when the `multithread` feature is enabled.
///
/// # Example
/// ```rust
/// let digests = vortex::hash_batch(&[&b"a"[..], &b"b"[..]]);
/// assert_eq!(digests[0], vortex::hash(b"a"));
/// assert_eq!(digests[1], vortex::hash(b"b"));
/// ```
#[must_use]
pub fn hash_batch<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<[u8; HASH_SIZE]> {
    parallel::hash_each(inputs, hash)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify a digest in constant time.
///
/// # Example
/// ```rust
/// let data = b"Secure Data";
/// let digest = vortex::hash(data);
/// assert!(vortex::verify(data, &digest));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &[u8; HASH_SIZE]) -> bool {
    let computed = hash(input);
    computed[..].ct_eq(&expected[..]).into()
}

/// Verify against an untyped digest slice, e.g. one decoded from hex.
///
/// # Errors
/// Returns `DigestLengthError` if `expected` is not exactly 64 bytes.
pub fn verify_slice(input: &[u8], expected: &[u8]) -> Result<bool, DigestLengthError> {
    let expected = digest_from_slice(expected)?;
    Ok(verify(input, &expected))
}

/// Convert a byte slice into a digest array.
///
/// # Errors
/// Returns `DigestLengthError` if `bytes` is not exactly 64 bytes.
pub fn digest_from_slice(bytes: &[u8]) -> Result<[u8; HASH_SIZE], DigestLengthError> {
    bytes
        .try_into()
        .map_err(|_| DigestLengthError::new(bytes.len()))
}
