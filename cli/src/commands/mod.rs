//! CLI Commands
//!
//! All vortex CLI commands organized as separate modules.

mod check;
mod hash;
mod selftest;

pub use check::check_mode;
pub use hash::{hash_files, hash_string};
pub use selftest::selftest;
