//! Graph Distances
//!
//! Breadth-first hop counts over the room graph. Used three ways: treasure
//! placement during generation, par calculation, and the per-room clue
//! distances a fresh game computes once.

use std::collections::{BTreeMap, VecDeque};

use crate::game::dungeon::{Dungeon, Room, RoomId};

/// Shortest hop-count distances from `start` to every reachable room.
///
/// A room's distance is fixed the first time it is reached and never
/// revisited. Rooms not reachable from `start` are absent from the map;
/// the generator guarantees that case never arises for its dungeons.
pub fn distances_from(rooms: &[Room], start: RoomId) -> BTreeMap<RoomId, u32> {
    let mut distances = BTreeMap::new();
    let mut queue = VecDeque::new();

    distances.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let current_dist = distances[&current];

        // A dangling start id yields the trivial map rather than panicking
        let Some(room) = rooms.get(current.index()) else {
            continue;
        };

        for &neighbor in &room.connections {
            if let std::collections::btree_map::Entry::Vacant(entry) = distances.entry(neighbor) {
                entry.insert(current_dist + 1);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}

/// Par: the minimum number of moves from entrance to treasure.
///
/// Recomputed on demand; at 14 rooms there is nothing worth caching.
/// Defaults to 0 if the treasure is unreachable, which a well-formed
/// dungeon never is.
pub fn par(dungeon: &Dungeon) -> u32 {
    distances_from(dungeon.rooms(), dungeon.entrance())
        .get(&dungeon.treasure())
        .copied()
        .unwrap_or(0)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::GridPos;

    /// Line graph 0-1-2-3.
    fn line_rooms() -> Vec<Room> {
        let mut rooms: Vec<Room> = (0..4)
            .map(|i| Room::new(RoomId(i), GridPos::new(i as i32, 0)))
            .collect();
        for i in 0..3usize {
            rooms[i].connections.push(RoomId(i as u32 + 1));
            rooms[i + 1].connections.push(RoomId(i as u32));
        }
        rooms
    }

    #[test]
    fn test_line_graph_distances() {
        let rooms = line_rooms();
        let distances = distances_from(&rooms, RoomId(0));

        assert_eq!(distances[&RoomId(0)], 0);
        assert_eq!(distances[&RoomId(1)], 1);
        assert_eq!(distances[&RoomId(2)], 2);
        assert_eq!(distances[&RoomId(3)], 3);
    }

    #[test]
    fn test_distances_from_interior_room() {
        let rooms = line_rooms();
        let distances = distances_from(&rooms, RoomId(2));

        assert_eq!(distances[&RoomId(0)], 2);
        assert_eq!(distances[&RoomId(1)], 1);
        assert_eq!(distances[&RoomId(3)], 1);
    }

    #[test]
    fn test_shortcut_wins_over_long_way() {
        // Square 0-1-2-3-0: two routes to room 2, both length 2
        let mut rooms: Vec<Room> = (0..4)
            .map(|i| Room::new(RoomId(i), GridPos::new(i as i32, 0)))
            .collect();
        for (a, b) in [(0usize, 1usize), (1, 2), (2, 3), (3, 0)] {
            rooms[a].connections.push(RoomId(b as u32));
            rooms[b].connections.push(RoomId(a as u32));
        }

        let distances = distances_from(&rooms, RoomId(0));
        assert_eq!(distances[&RoomId(2)], 2);
        assert_eq!(distances[&RoomId(3)], 1);
    }

    #[test]
    fn test_unreachable_room_absent() {
        let mut rooms = line_rooms();
        // Sever 3 from the line
        rooms[2].connections.retain(|&id| id != RoomId(3));
        rooms[3].connections.clear();

        let distances = distances_from(&rooms, RoomId(0));
        assert!(!distances.contains_key(&RoomId(3)));
    }

    #[test]
    fn test_dangling_start_yields_trivial_map() {
        let rooms = line_rooms();
        let distances = distances_from(&rooms, RoomId(42));

        assert_eq!(distances.len(), 1);
        assert_eq!(distances[&RoomId(42)], 0);
    }

    #[test]
    fn test_par_of_line_dungeon() {
        let dungeon = Dungeon::new(line_rooms(), RoomId::ENTRANCE, RoomId(3));
        assert_eq!(par(&dungeon), 3);
    }
}
