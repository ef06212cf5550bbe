//! Game Events
//!
//! Notifications emitted by accepted transitions, drained by the shell for
//! rendering and statistics recording. Single-player, so there is no
//! ordering or priority concern: events appear in transition order.

use serde::{Deserialize, Serialize};

use crate::game::dungeon::RoomId;

/// An observable state transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An accepted move into a room.
    RoomEntered {
        /// Room the player stepped into.
        room: RoomId,
        /// Move count after this step.
        move_count: u32,
    },

    /// The move that reached the treasure and ended the game.
    TreasureFound {
        /// The treasure room.
        room: RoomId,
        /// Total moves taken.
        move_count: u32,
    },
}
