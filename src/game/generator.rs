//! Daily Dungeon Generation
//!
//! Builds the room graph for one puzzle: seeded draws for the layout, a
//! Prim spanning tree for guaranteed connectivity, a few shortcut edges for
//! variety, then distance-constrained treasure placement.
//!
//! # Determinism
//!
//! Every step draws from one `SeededRng` stream in a fixed order, so a date
//! string fully determines the dungeon. The order and number of draws is
//! part of the compatibility contract: inserting or skipping a draw
//! regenerates every published puzzle.

use std::collections::BTreeSet;

use crate::core::grid::GridPos;
use crate::core::rng::SeededRng;
use crate::core::seed::date_seed;
use crate::game::distance::distances_from;
use crate::game::dungeon::{Dungeon, Room, RoomId};
use crate::{MAX_ROOMS, MIN_ROOMS, MIN_TREASURE_DISTANCE};

/// Placement attempts per room before a colliding coordinate is accepted.
const PLACEMENT_ATTEMPTS: u32 = 100;

/// Extra shortcut edges drawn per dungeon: 1 to this many.
const MAX_EXTRA_EDGES: usize = 3;

/// Manhattan radius within which shortcut edges may connect rooms.
const SHORTCUT_RADIUS: u32 = 2;

/// Generate the dungeon for a calendar date.
///
/// Thin wrapper over [`generate_from_seed`]; the date string is hashed with
/// [`date_seed`]. Any string is accepted: the hash, not the calendar,
/// defines the puzzle.
pub fn generate(date: &str) -> Dungeon {
    generate_from_seed(date_seed(date))
}

/// Generate a dungeon from a raw 32-bit seed.
///
/// Public so the shell can serve practice puzzles from arbitrary seeds; the
/// daily puzzle is just the seed a date hashes to.
///
/// The returned dungeon is always connected, its entrance is room 0, and
/// the treasure sits at least [`MIN_TREASURE_DISTANCE`] moves out whenever
/// the graph has a room that far from the entrance.
pub fn generate_from_seed(seed: u32) -> Dungeon {
    let mut rng = SeededRng::new(seed);

    let room_count = MIN_ROOMS + rng.next_index(MAX_ROOMS - MIN_ROOMS + 1);

    let mut rooms = place_rooms(&mut rng, room_count);
    build_spanning_tree(&mut rooms);
    add_shortcut_edges(&mut rng, &mut rooms);
    let treasure = place_treasure(&mut rng, &rooms);

    Dungeon::new(rooms, RoomId::ENTRANCE, treasure)
}

// =============================================================================
// ROOM PLACEMENT
// =============================================================================

/// Side of the square grid rooms are scattered on: smallest `s` with
/// `s*s >= 3 * room_count`, so roughly a third of the cells fill up.
fn grid_side(room_count: usize) -> usize {
    let target = 3 * room_count;
    let mut side = 1;
    while side * side < target {
        side += 1;
    }
    side
}

/// Draw a grid position, retrying on collision.
///
/// Draws x then y per attempt. After `max_attempts` collisions the last
/// coordinate is accepted anyway, the placement-exhaustion fallback. With
/// at most [`MAX_ROOMS`] rooms on a grid of at least 3x that many cells the
/// fallback is unreachable in practice, but it is the defined behavior
/// rather than an infinite loop.
fn draw_room_position(
    rng: &mut SeededRng,
    side: usize,
    used: &BTreeSet<GridPos>,
    max_attempts: u32,
) -> GridPos {
    let mut attempts = 0;
    loop {
        let x = rng.next_index(side) as i32;
        let y = rng.next_index(side) as i32;
        let pos = GridPos::new(x, y);
        attempts += 1;
        if !used.contains(&pos) || attempts >= max_attempts {
            return pos;
        }
    }
}

fn place_rooms(rng: &mut SeededRng, room_count: usize) -> Vec<Room> {
    let side = grid_side(room_count);
    let mut used = BTreeSet::new();
    let mut rooms = Vec::with_capacity(room_count);

    for i in 0..room_count {
        let pos = draw_room_position(rng, side, &used, PLACEMENT_ATTEMPTS);
        used.insert(pos);
        rooms.push(Room::new(RoomId(i as u32), pos));
    }

    rooms
}

// =============================================================================
// CONNECTIONS
// =============================================================================

/// Record a door between two rooms, symmetric by construction.
fn connect(rooms: &mut [Room], a: RoomId, b: RoomId) {
    rooms[a.index()].connections.push(b);
    rooms[b.index()].connections.push(a);
}

/// Prim's algorithm rooted at room 0, Manhattan distance as edge cost.
///
/// Scans every (in-tree, out-of-tree) pair, in-tree rooms in ascending id
/// order and targets in ascending id order, keeping the strictly cheapest
/// edge, so cost ties resolve to the lowest `from`, then the lowest `to`.
/// Exactly `room_count - 1` edges; every room ends up reachable.
fn build_spanning_tree(rooms: &mut [Room]) {
    let room_count = rooms.len();
    let mut in_tree = BTreeSet::from([RoomId::ENTRANCE]);

    while in_tree.len() < room_count {
        let mut best: Option<(RoomId, RoomId, u32)> = None;

        for &from in &in_tree {
            for index in 0..room_count {
                let to = RoomId(index as u32);
                if in_tree.contains(&to) {
                    continue;
                }
                let cost = rooms[from.index()]
                    .pos
                    .manhattan_distance(rooms[to.index()].pos);
                if best.is_none_or(|(_, _, cheapest)| cost < cheapest) {
                    best = Some((from, to, cost));
                }
            }
        }

        let Some((from, to, _)) = best else {
            break;
        };
        connect(rooms, from, to);
        in_tree.insert(to);
    }
}

/// A few extra doors between nearby rooms so the tree gains cycles.
///
/// Per drawn edge: a uniform source room, then a uniform pick among rooms
/// not already connected to it within [`SHORTCUT_RADIUS`]. When no room
/// qualifies the edge is skipped outright: no retry, and the selection
/// draw is not consumed, so the stream stays aligned with the contract.
fn add_shortcut_edges(rng: &mut SeededRng, rooms: &mut [Room]) {
    let extra = 1 + rng.next_index(MAX_EXTRA_EDGES);

    for _ in 0..extra {
        let from = RoomId(rng.next_index(rooms.len()) as u32);
        let source = rooms[from.index()].clone();

        let candidates: Vec<RoomId> = rooms
            .iter()
            .filter(|room| {
                room.id != from
                    && !source.is_connected_to(room.id)
                    && source.pos.manhattan_distance(room.pos) <= SHORTCUT_RADIUS
            })
            .map(|room| room.id)
            .collect();

        if let Some(&to) = rng.choose(&candidates) {
            connect(rooms, from, to);
        }
    }
}

// =============================================================================
// TREASURE PLACEMENT
// =============================================================================

/// Pick the treasure room.
///
/// Preferred branch: among rooms at distance >= [`MIN_TREASURE_DISTANCE`]
/// from the entrance, sort by distance descending (stable, so equal
/// distances stay in id order), keep the farther half (ceiling, at least
/// one), and draw uniformly from it.
///
/// Fallback branches, each explicit:
/// - no room is far enough: the single farthest reachable room, distance
///   ties to the lowest id, never the entrance itself
/// - no such room either: the last room by index
fn place_treasure(rng: &mut SeededRng, rooms: &[Room]) -> RoomId {
    let distances = distances_from(rooms, RoomId::ENTRANCE);

    let mut eligible: Vec<(RoomId, u32)> = rooms
        .iter()
        .filter_map(|room| {
            let dist = distances.get(&room.id).copied()?;
            (dist >= MIN_TREASURE_DISTANCE).then_some((room.id, dist))
        })
        .collect();

    eligible.sort_by(|a, b| b.1.cmp(&a.1));

    if !eligible.is_empty() {
        let top_half = &eligible[..eligible.len().div_ceil(2)];
        if let Some(&(id, _)) = rng.choose(top_half) {
            return id;
        }
    }

    let mut farthest: Option<(RoomId, u32)> = None;
    for room in rooms {
        if room.id == RoomId::ENTRANCE {
            continue;
        }
        let dist = distances.get(&room.id).copied().unwrap_or(0);
        if farthest.is_none_or(|(_, best)| dist > best) {
            farthest = Some((room.id, dist));
        }
    }
    if let Some((id, _)) = farthest {
        return id;
    }

    rooms.last().map(|room| room.id).unwrap_or(RoomId::ENTRANCE)
}

// =============================================================================
// TESTS
// =============================================================================
