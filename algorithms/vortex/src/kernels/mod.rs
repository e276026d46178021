//! Permutation Kernels
//!
//! Lane state, constant tables, the VORTEX-P permutation and the padding rule.
//! Scalar 64-bit code only.

pub mod constants;
pub mod padding;
pub mod permutation;
pub mod state;
