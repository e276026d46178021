use bolero::check;
use vortex::{hash, verify, verify_slice};

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let h = hash(data);
        assert!(verify(data, &h), "verify() failed on correct data");
        assert_eq!(verify_slice(data, &h), Ok(true));

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        // 1. Data Corruption
        if !data.is_empty() {
            let mut corrupted_data = data.clone();
            corrupted_data[0] ^= 0x01;
            assert!(
                !verify(&corrupted_data, &h),
                "verify() succeeded on corrupted data"
            );
        }

        // 2. Hash Corruption
        let mut bad_h = h;
        bad_h[63] ^= 0x80;
        assert!(!verify(data, &bad_h), "verify() succeeded on corrupted hash");

        // 3. Wrong digest length
        let cut = data.len() % 64;
        assert!(verify_slice(data, &h[..cut]).is_err());
    });
}
