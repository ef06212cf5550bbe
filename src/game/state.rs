//! Exploration State Machine
//!
//! One player's progress through one dungeon: position, visited set, move
//! count, win phase, fog-of-war visibility, and the clue distance for the
//! room currently occupied.
//!
//! Invalid player actions are silent no-ops, never errors: the shell is
//! expected to gate moves behind [`GameState::can_move_to`], and a call
//! that slips through anyway must not corrupt state.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::game::distance::distances_from;
use crate::game::dungeon::{Dungeon, RoomId};
use crate::game::events::GameEvent;

// =============================================================================
// PHASE
// =============================================================================

/// Current phase of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// The player is still looking for the treasure.
    #[default]
    Exploring,
    /// The treasure room has been entered. Terminal: no transition leads
    /// back to `Exploring` short of an explicit reset.
    Won,
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Complete state of one play-through.
///
/// Mutated only through [`GameState::move_to`]; every accepted move
/// computes its successor fields first and assigns them as a whole, so a
/// collaborator never observes a half-applied transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// The puzzle being played. Immutable for the life of the state.
    dungeon: Dungeon,

    /// Current phase.
    phase: GamePhase,

    /// Room the player stands in.
    current_room: RoomId,

    /// Every room the player has stood in, entrance included.
    /// Grows monotonically; rooms are never forgotten.
    visited: BTreeSet<RoomId>,

    /// Accepted moves so far.
    move_count: u32,

    /// Treasure-rooted BFS distances, computed once at creation and reused
    /// across resets. Only the current room's entry is ever exposed.
    clue_distances: BTreeMap<RoomId, u32>,

    /// Events generated by transitions, drained by the shell.
    #[serde(skip)]
    pending_events: Vec<GameEvent>,
}

impl GameState {
    /// Start a fresh game on a dungeon.
    ///
    /// The player stands in the entrance with the entrance already visited
    /// and zero moves taken. If the dungeon were ever generated with the
    /// treasure in the entrance the game starts already won, a defined
    /// edge case even though the generator's placement policy keeps it
    /// practically unreachable.
    pub fn new(dungeon: Dungeon) -> Self {
        let clue_distances = distances_from(dungeon.rooms(), dungeon.treasure());
        let entrance = dungeon.entrance();
        let phase = if entrance == dungeon.treasure() {
            GamePhase::Won
        } else {
            GamePhase::Exploring
        };

        Self {
            dungeon,
            phase,
            current_room: entrance,
            visited: BTreeSet::from([entrance]),
            move_count: 0,
            clue_distances,
            pending_events: Vec::new(),
        }
    }

    /// The puzzle being played.
    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether the treasure has been found.
    pub fn has_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Room the player currently stands in.
    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    /// Accepted moves so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Rooms the player has stood in, in id order.
    pub fn visited(&self) -> &BTreeSet<RoomId> {
        &self.visited
    }

    /// Whether a move into `room` would be accepted.
    ///
    /// False once the game is won, and false for any room without a door
    /// from the current room. An unknown current room answers false.
    pub fn can_move_to(&self, room: RoomId) -> bool {
        if self.has_won() {
            return false;
        }
        self.dungeon
            .room(self.current_room)
            .is_some_and(|current| current.is_connected_to(room))
    }

    /// Step through a door.
    ///
    /// A silent no-op unless [`Self::can_move_to`] holds. On an accepted
    /// move the visited snapshot is rebuilt functionally (clone + insert)
    /// and the successor fields are assigned together; entering the
    /// treasure room flips the phase to [`GamePhase::Won`] permanently.
    pub fn move_to(&mut self, room: RoomId) {
        if !self.can_move_to(room) {
            return;
        }

        let mut visited = self.visited.clone();
        visited.insert(room);
        let move_count = self.move_count + 1;
        let won = room == self.dungeon.treasure();

        self.current_room = room;
        self.visited = visited;
        self.move_count = move_count;
        self.pending_events.push(GameEvent::RoomEntered { room, move_count });

        if won {
            self.phase = GamePhase::Won;
            self.pending_events
                .push(GameEvent::TreasureFound { room, move_count });
        }
    }

    /// Fog of war: whether a room may be shown at all.
    ///
    /// Visited rooms stay visible forever; unvisited rooms are visible only
    /// while adjacent to the current room, and reveal nothing beyond their
    /// existence.
    pub fn is_room_visible(&self, room: RoomId) -> bool {
        if self.visited.contains(&room) {
            return true;
        }
        self.dungeon
            .room(self.current_room)
            .is_some_and(|current| current.is_connected_to(room))
    }

    /// Clue for the room the player stands in: its BFS distance to the
    /// treasure. Distances of other rooms are deliberately not exposed;
    /// remembering where a clue was seen is the game. Unknown rooms answer 0.
    pub fn current_clue(&self) -> u32 {
        self.clue_distances
            .get(&self.current_room)
            .copied()
            .unwrap_or(0)
    }

    /// Return to the initial state for the same dungeon.
    ///
    /// The clue distances are part of the dungeon's identity and are kept,
    /// not recomputed.
    pub fn reset(&mut self) {
        let entrance = self.dungeon.entrance();
        self.phase = if entrance == self.dungeon.treasure() {
            GamePhase::Won
        } else {
            GamePhase::Exploring
        };
        self.current_room = entrance;
        self.visited = BTreeSet::from([entrance]);
        self.move_count = 0;
        self.pending_events.clear();
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

// =============================================================================
// TESTS
// =============================================================================
