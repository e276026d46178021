//! Execution Engine
//!
//! Sponge driver and batch processing.

pub mod parallel;
pub mod sponge;
