//! Puzzle Logic Module
//!
//! All puzzle semantics. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `dungeon`: room graph data model
//! - `generator`: daily dungeon generation
//! - `distance`: BFS hop counts and par
//! - `state`: exploration state machine
//! - `events`: transition events for the shell
//! - `stats`: grades and the persisted statistics record

pub mod distance;
pub mod dungeon;
pub mod events;
pub mod generator;
pub mod state;
pub mod stats;

// Re-export key types
pub use distance::{distances_from, par};
pub use dungeon::{Dungeon, Room, RoomId};
pub use events::GameEvent;
pub use generator::{generate, generate_from_seed};
pub use state::{GamePhase, GameState};
pub use stats::{Grade, Stats, StatsError};
