#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! # VORTEX-512
//!
//! 512-bit sponge hash (rate 512, capacity 512) over a 1024-bit ARX
//! permutation with butterfly lane mixing. Scalar 64-bit code only.

//! # Usage
//! ```rust
//! use vortex;
//!
//! // 1. One-shot
//! let digest = vortex::hash(b"Performance Matters");
//! println!("{:x?}", digest);
//!
//! // 2. Constant-time verification
//! let valid = vortex::verify(b"Performance Matters", &digest);
//! assert!(valid);
//!
//! // 3. Streaming (files, sockets)
//! use vortex::Hasher;
//!
//! let mut hasher = Hasher::new();
//! hasher.update(b"Chunk 1");
//! hasher.update(b"Chunk 2");
//! assert_eq!(hasher.finalize(), vortex::hash(b"Chunk 1Chunk 2"));
//! ```

// =============================================================================
// MODULES
// =============================================================================

extern crate alloc;

mod engine;
// Permutation internals for benchmarks, diffusion tools and tests
#[doc(hidden)]
pub mod kernels;
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use engine::sponge::{Sponge, Squeezer};
pub use kernels::constants::{BLOCK_SIZE, DOMAIN_SEPARATOR, HASH_SIZE, ROUNDS};
pub use oneshot::{digest_from_slice, hash, hash_batch, hash_xof, verify, verify_slice};
pub use streaming::VortexHasher as Hasher;
pub use types::{DigestLengthError, PeerFn};
