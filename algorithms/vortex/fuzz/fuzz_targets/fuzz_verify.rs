#![no_main]

use libfuzzer_sys::fuzz_target;
use vortex::{digest_from_slice, hash, verify, verify_slice};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // 1. UNTYPED DIGESTS
    // =============================================================================

    // Arbitrary bytes as a digest: only 64-byte slices are accepted.
    match digest_from_slice(data) {
        Ok(_) => assert_eq!(data.len(), 64, "accepted {} bytes", data.len()),
        Err(err) => assert_eq!(err.actual(), data.len()),
    }
    assert_eq!(verify_slice(b"", data).is_ok(), data.len() == 64);

    // =============================================================================
    // 2. CONSTANT-TIME VERIFY
    // =============================================================================

    let h = hash(data);
    assert!(verify(data, &h), "verify() failed on correct data");

    let mut bad = h;
    bad[usize::from(data.first().copied().unwrap_or(0)) % 64] ^= 0x01;
    assert!(!verify(data, &bad), "verify() succeeded on corrupted hash");
});
