//! Gunud Daily Shell
//!
//! Reference collaborator for the puzzle engine: resolves today's date,
//! generates the dungeon, auto-plays it along a shortest route, and records
//! the result into the statistics file.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gunud::{
    core::seed::parse_date,
    date_seed, distances_from, generate, par, puzzle_number, GameEvent, GameState, Stats, VERSION,
};

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Gunud v{}", VERSION);

    // The engine never reads the clock; the shell supplies the date.
    let date = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Utc::now().date_naive().format("%Y-%m-%d").to_string());
    let day = parse_date(&date)?;

    info!("Date: {} (puzzle #{})", date, puzzle_number(&date)?);
    info!("Seed: {}", date_seed(&date));

    play_daily(&date, day)
}

/// Generate today's dungeon, walk a shortest route to the treasure, and
/// record the win.
fn play_daily(date: &str, day: chrono::NaiveDate) -> Result<()> {
    let dungeon = generate(date);
    let dungeon_par = par(&dungeon);

    info!(
        "Generated {} rooms, entrance {}, treasure {}, par {}",
        dungeon.room_count(),
        dungeon.entrance(),
        dungeon.treasure(),
        dungeon_par
    );
    for room in dungeon.rooms() {
        info!(
            "Room {} at ({}, {}) -> {:?}",
            room.id,
            room.pos.x,
            room.pos.y,
            room.connections.iter().map(|c| c.0).collect::<Vec<_>>()
        );
    }

    // The shell may consult the full distance map; the state machine only
    // ever reveals the current room's clue to a player.
    let to_treasure = distances_from(dungeon.rooms(), dungeon.treasure());
    let mut state = GameState::new(dungeon);

    while !state.has_won() {
        let current = state
            .dungeon()
            .room(state.current_room())
            .context("current room missing from dungeon")?;

        // Step through the door that gets closer to the treasure; a
        // connected graph always has one.
        let next = current
            .connections
            .iter()
            .copied()
            .min_by_key(|room| to_treasure.get(room).copied().unwrap_or(u32::MAX))
            .context("room has no doors")?;

        state.move_to(next);

        for event in state.take_events() {
            match event {
                GameEvent::RoomEntered { room, move_count } => {
                    info!("Move {}: room {} (clue: {})", move_count, room, state.current_clue());
                }
                GameEvent::TreasureFound { room, move_count } => {
                    info!("Treasure found in room {} after {} moves!", room, move_count);
                }
            }
        }
    }

    // Record the result the way the product records a daily win
    let stats_path = Stats::storage_path(&std::env::current_dir()?);
    let mut stats = Stats::load(&stats_path)?;

    if let Some(grade) = stats.record_win(day, state.move_count(), dungeon_par) {
        info!("Grade: {}", grade);
        if let Some(message) = grade.context_message(state.move_count(), dungeon_par) {
            info!("{}", message);
        }
        stats.save(&stats_path)?;
    } else {
        info!("Already played {}; result not recorded", date);
    }

    info!(
        "Played {}, won {}, streak {} (max {}), average moves {:.1}",
        stats.games_played,
        stats.games_won,
        stats.current_streak,
        stats.max_streak,
        stats.average_moves()
    );

    Ok(())
}
