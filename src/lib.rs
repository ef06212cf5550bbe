//! # Gunud Puzzle Engine
//!
//! Deterministic daily dungeon puzzle: one small room graph per calendar
//! date, one entrance, one hidden treasure, and a fog-of-war exploration
//! state machine on top.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      GUNUD ENGINE                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── rng.rs      - Mulberry32 seeded PRNG                    │
//! │  ├── seed.rs     - Date string -> seed, puzzle numbering     │
//! │  └── grid.rs     - Integer grid coordinates                  │
//! │                                                              │
//! │  game/           - Puzzle logic (deterministic)              │
//! │  ├── dungeon.rs  - Room graph data model                     │
//! │  ├── generator.rs- Daily dungeon generation                  │
//! │  ├── distance.rs - BFS hop counts, par                       │
//! │  ├── state.rs    - Exploration state machine                 │
//! │  ├── events.rs   - Transition events for the shell           │
//! │  └── stats.rs    - Grades and persisted statistics           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The `core/` and `game/` modules are **100% deterministic**:
//! - All randomness comes from the seeded Mulberry32 stream
//! - No HashMap (BTreeMap/BTreeSet for sorted iteration)
//! - No system time dependencies (the library never reads the clock)
//!
//! Given the same date string, generation produces a bit-identical dungeon
//! on any platform, so every player sees the same puzzle.
//!
//! Rendering, dialogs, share text, and clock acquisition are external
//! collaborators; `gunud-daily` (src/main.rs) is a reference shell that
//! wires them up for a terminal run.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::grid::GridPos;
pub use crate::core::rng::SeededRng;
pub use crate::core::seed::{date_seed, puzzle_number, DateError};
pub use crate::game::distance::{distances_from, par};
pub use crate::game::dungeon::{Dungeon, Room, RoomId};
pub use crate::game::events::GameEvent;
pub use crate::game::generator::{generate, generate_from_seed};
pub use crate::game::state::{GamePhase, GameState};
pub use crate::game::stats::{Grade, Stats};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Launch date: the puzzle for this date is puzzle #1.
pub const LAUNCH_DATE: &str = "2026-02-05";

/// Smallest room count a dungeon may have.
pub const MIN_ROOMS: usize = 10;

/// Largest room count a dungeon may have.
pub const MAX_ROOMS: usize = 14;

/// Minimum BFS distance from the entrance at which the treasure is placed,
/// whenever any room that far out exists.
pub const MIN_TREASURE_DISTANCE: u32 = 4;
