//! Core deterministic primitives.
//!
//! Everything in this module is bit-exact across platforms. The RNG stream
//! and the date hash together define the published daily puzzles.

pub mod grid;
pub mod rng;
pub mod seed;

// Re-export core types
pub use grid::GridPos;
pub use rng::SeededRng;
pub use seed::{date_seed, puzzle_number, DateError};
