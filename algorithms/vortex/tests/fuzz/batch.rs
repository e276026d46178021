use bolero::check;
use vortex::{hash, hash_batch};

#[test]
fn fuzz_batch_consistency() {
    check!().with_type::<Vec<Vec<u8>>>().for_each(|inputs| {
        // =============================================================================
        // BATCH (RAYON WHEN ENABLED)
        // =============================================================================
        let batch = hash_batch(inputs);

        // =============================================================================
        // SEQUENTIAL REFERENCE
        // =============================================================================
        assert_eq!(batch.len(), inputs.len());
        for (digest, input) in batch.iter().zip(inputs) {
            assert_eq!(*digest, hash(input), "Batch mismatch (Rayon vs Sequential)");
        }
    });
}
