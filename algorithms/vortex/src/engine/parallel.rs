//! Batch Execution Engine
//!
//! Hashes many independent messages. Every message gets its own sponge, so
//! the work is embarrassingly parallel: with the `multithread` feature the
//! messages are spread over the Rayon pool, otherwise they run serially.
//! Results always come back in input order.

use crate::kernels::constants::HASH_SIZE;

use alloc::vec::Vec;

// =============================================================================
// BATCH HASHING
// =============================================================================

/// Apply `kernel` to every message, preserving order.
pub fn hash_each<T, F>(inputs: &[T], kernel: F) -> Vec<[u8; HASH_SIZE]>
where
    T: AsRef<[u8]> + Sync,
    F: Fn(&[u8]) -> [u8; HASH_SIZE] + Sync + Send,
{
    inputs.process_each(kernel)
}

/// Helper for feature-agnostic per-message processing
trait BatchProcessor {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&[u8]) -> R + Sync + Send,
        R: Send;
}

impl<T: AsRef<[u8]> + Sync> BatchProcessor for &[T] {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&[u8]) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_iter().map(|m| f(m.as_ref())).collect()
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.iter().map(|m| f(m.as_ref())).collect()
        }
    }
}
