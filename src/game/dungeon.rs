//! Dungeon Data Model
//!
//! The generated room graph. Immutable once built: exploration state lives
//! in `game::state`, never here.

use serde::{Deserialize, Serialize};

use crate::core::grid::GridPos;

// =============================================================================
// ROOM ID
// =============================================================================

/// Identifier of a room within one dungeon.
///
/// Ids are contiguous `0..room_count` and double as indices into the room
/// list. Implements Ord for deterministic BTreeMap/BTreeSet ordering.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RoomId(pub u32);

impl RoomId {
    /// Id of the entrance room in every dungeon.
    pub const ENTRANCE: RoomId = RoomId(0);

    /// Index into the dungeon's room list.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ROOM
// =============================================================================

/// A single room: a node in the puzzle graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// This room's id.
    pub id: RoomId,

    /// Grid coordinate. Unique per room except under the documented
    /// placement-exhaustion fallback in the generator.
    pub pos: GridPos,

    /// Ids of directly connected rooms, in connection order.
    /// The generator keeps this symmetric across the dungeon.
    pub connections: Vec<RoomId>,
}

impl Room {
    /// Create an unconnected room.
    pub fn new(id: RoomId, pos: GridPos) -> Self {
        Self {
            id,
            pos,
            connections: Vec::new(),
        }
    }

    /// Whether a door leads directly to `other`.
    #[inline]
    pub fn is_connected_to(&self, other: RoomId) -> bool {
        self.connections.contains(&other)
    }
}

// =============================================================================
// DUNGEON
// =============================================================================

/// The generated room graph plus its designated entrance and treasure.
///
/// # Invariants
///
/// Upheld by the generator, assumed everywhere else:
/// - Room ids are contiguous and equal to their list index
/// - Connections are symmetric
/// - Every room is reachable from the entrance
/// - The entrance is room 0
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    rooms: Vec<Room>,
    entrance: RoomId,
    treasure: RoomId,
}

impl Dungeon {
    /// Assemble a dungeon from finished parts.
    ///
    /// The caller is responsible for the structural invariants above; the
    /// rest of the crate degrades to safe defaults rather than checking
    /// them on every access.
    pub fn new(rooms: Vec<Room>, entrance: RoomId, treasure: RoomId) -> Self {
        Self {
            rooms,
            entrance,
            treasure,
        }
    }

    /// All rooms, ordered by id.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up a room by id.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    /// The fixed entrance room id.
    pub fn entrance(&self) -> RoomId {
        self.entrance
    }

    /// The treasure room id.
    pub fn treasure(&self) -> RoomId {
        self.treasure
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Line graph 0-1-2-3, entrance 0, treasure 3.
    fn line_dungeon() -> Dungeon {
        let mut rooms: Vec<Room> = (0..4)
            .map(|i| Room::new(RoomId(i), GridPos::new(i as i32, 0)))
            .collect();
        for i in 0..3usize {
            rooms[i].connections.push(RoomId(i as u32 + 1));
            rooms[i + 1].connections.push(RoomId(i as u32));
        }
        Dungeon::new(rooms, RoomId::ENTRANCE, RoomId(3))
    }

    #[test]
    fn test_room_id_ordering() {
        assert!(RoomId(0) < RoomId(1));
        assert!(RoomId(3) < RoomId(10));
        assert_eq!(RoomId::ENTRANCE, RoomId(0));
    }

    #[test]
    fn test_room_lookup() {
        let dungeon = line_dungeon();

        assert_eq!(dungeon.room(RoomId(2)).unwrap().id, RoomId(2));
        assert!(dungeon.room(RoomId(99)).is_none());
    }

    #[test]
    fn test_is_connected_to() {
        let dungeon = line_dungeon();
        let room1 = dungeon.room(RoomId(1)).unwrap();

        assert!(room1.is_connected_to(RoomId(0)));
        assert!(room1.is_connected_to(RoomId(2)));
        assert!(!room1.is_connected_to(RoomId(3)));
    }
}
