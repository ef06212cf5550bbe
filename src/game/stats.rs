//! Grades and Persisted Statistics
//!
//! Each daily win earns a letter grade from its move count against par, and
//! rolls into a statistics record (play counts, streaks, recent move
//! history, per-grade counts). The record is hosting-shell state: loaded
//! once at startup through the explicit contract here and injected, never
//! read ambiently from storage mid-game.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed storage key for the statistics record.
pub const STORAGE_KEY: &str = "dungeon-echo-stats";

/// Wins kept in the rolling move history.
const MOVE_HISTORY_LIMIT: usize = 30;

// =============================================================================
// GRADE
// =============================================================================

/// Letter grade for a win, from best to worst.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Grade {
    /// Finished exactly at par.
    S,
    /// At most 2 moves over par.
    A,
    /// At most 5 moves over par.
    B,
    /// At most 9 moves over par.
    C,
    /// Everything slower.
    D,
}

impl Grade {
    /// Grade a finished game from its move count and the dungeon's par.
    pub fn from_result(moves: u32, par: u32) -> Self {
        match moves.saturating_sub(par) {
            0 => Grade::S,
            1..=2 => Grade::A,
            3..=5 => Grade::B,
            6..=9 => Grade::C,
            _ => Grade::D,
        }
    }

    /// The grade letter.
    pub fn letter(self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    /// Flavor line shown under the grade, if any.
    pub fn context_message(self, moves: u32, par: u32) -> Option<String> {
        let diff = moves.saturating_sub(par);
        match self {
            Grade::S => None,
            Grade::A => Some("Perfect navigation.".to_string()),
            Grade::B => Some(format!(
                "So close! Just {diff} step{} off.",
                if diff > 1 { "s" } else { "" }
            )),
            Grade::C => Some("A rough descent...".to_string()),
            Grade::D => Some("Lost in the dark.".to_string()),
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}

// =============================================================================
// STATS RECORD
// =============================================================================

/// Accumulated results across daily puzzles.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Daily games recorded.
    pub games_played: u32,

    /// Daily games won. Equal to `games_played` today: a game only ends by
    /// finding the treasure, so only wins are ever recorded.
    pub games_won: u32,

    /// Consecutive daily wins ending at `last_played`.
    pub current_streak: u32,

    /// Longest streak ever reached.
    pub max_streak: u32,

    /// Most recent recorded date, if any.
    pub last_played: Option<NaiveDate>,

    /// Move counts of the most recent wins, oldest first, bounded to the
    /// last 30.
    pub move_history: Vec<u32>,

    /// How often each grade has been earned.
    pub grade_counts: BTreeMap<Grade, u32>,
}

impl Stats {
    /// Whether a result was already recorded for `date`.
    pub fn has_played(&self, date: NaiveDate) -> bool {
        self.last_played == Some(date)
    }

    /// Mean of the recent move history, 0 when empty.
    pub fn average_moves(&self) -> f64 {
        if self.move_history.is_empty() {
            return 0.0;
        }
        let total: u32 = self.move_history.iter().sum();
        f64::from(total) / self.move_history.len() as f64
    }

    /// Record a daily win.
    ///
    /// Returns the earned grade, or `None` if `today` was already recorded
    /// (one result per date). The streak extends only when the previous
    /// recorded date is exactly yesterday; any gap restarts it at 1.
    pub fn record_win(&mut self, today: NaiveDate, moves: u32, par: u32) -> Option<Grade> {
        if self.has_played(today) {
            return None;
        }

        let consecutive = today
            .pred_opt()
            .is_some_and(|yesterday| self.last_played == Some(yesterday));
        self.current_streak = if consecutive {
            self.current_streak + 1
        } else {
            1
        };
        self.max_streak = self.max_streak.max(self.current_streak);

        self.games_played += 1;
        self.games_won += 1;
        self.last_played = Some(today);

        self.move_history.push(moves);
        if self.move_history.len() > MOVE_HISTORY_LIMIT {
            let excess = self.move_history.len() - MOVE_HISTORY_LIMIT;
            self.move_history.drain(..excess);
        }

        let grade = Grade::from_result(moves, par);
        *self.grade_counts.entry(grade).or_insert(0) += 1;
        Some(grade)
    }

    /// Load the record from a file, defaulting when the file is absent.
    ///
    /// Part of the explicit save/load contract: the shell calls this once
    /// at startup and owns the value from then on.
    pub fn load(path: &Path) -> Result<Self, StatsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save the record to a file.
    pub fn save(&self, path: &Path) -> Result<(), StatsError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Conventional file location for the record inside a profile
    /// directory, derived from [`STORAGE_KEY`].
    pub fn storage_path(profile_dir: &Path) -> PathBuf {
        profile_dir.join(format!("{STORAGE_KEY}.json"))
    }
}

/// Errors from the statistics save/load boundary.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Reading or writing the statistics file failed.
    #[error("statistics file error: {0}")]
    Io(#[from] std::io::Error),

    /// The statistics file held malformed JSON.
    #[error("statistics format error: {0}")]
    Format(#[from] serde_json::Error),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_result(4, 4), Grade::S);
        assert_eq!(Grade::from_result(5, 4), Grade::A);
        assert_eq!(Grade::from_result(6, 4), Grade::A);
        assert_eq!(Grade::from_result(7, 4), Grade::B);
        assert_eq!(Grade::from_result(9, 4), Grade::B);
        assert_eq!(Grade::from_result(10, 4), Grade::C);
        assert_eq!(Grade::from_result(13, 4), Grade::C);
        assert_eq!(Grade::from_result(14, 4), Grade::D);
    }

    #[test]
    fn test_grade_never_below_par() {
        // Par is the shortest path; fewer moves cannot happen, but the
        // mapping still answers S for defensive inputs
        assert_eq!(Grade::from_result(2, 4), Grade::S);
    }

    #[test]
    fn test_context_messages() {
        assert_eq!(Grade::S.context_message(4, 4), None);
        assert_eq!(
            Grade::B.context_message(5, 4).unwrap(),
            "So close! Just 1 step off."
        );
        assert_eq!(
            Grade::B.context_message(9, 4).unwrap(),
            "So close! Just 5 steps off."
        );
    }

    #[test]
    fn test_record_win_basics() {
        let mut stats = Stats::default();
        let grade = stats.record_win(date("2026-02-05"), 4, 4);

        assert_eq!(grade, Some(Grade::S));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 1);
        assert_eq!(stats.move_history, vec![4]);
        assert_eq!(stats.grade_counts[&Grade::S], 1);
    }

    #[test]
    fn test_same_day_recorded_once() {
        let mut stats = Stats::default();
        assert!(stats.record_win(date("2026-02-05"), 4, 4).is_some());
        assert!(stats.record_win(date("2026-02-05"), 8, 4).is_none());

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.move_history, vec![4]);
    }

    #[test]
    fn test_streak_extends_on_consecutive_days() {
        let mut stats = Stats::default();
        stats.record_win(date("2026-02-05"), 4, 4);
        stats.record_win(date("2026-02-06"), 5, 4);
        stats.record_win(date("2026-02-07"), 6, 4);

        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.max_streak, 3);
    }

    #[test]
    fn test_streak_resets_after_gap() {
        let mut stats = Stats::default();
        stats.record_win(date("2026-02-05"), 4, 4);
        stats.record_win(date("2026-02-06"), 4, 4);
        stats.record_win(date("2026-02-09"), 4, 4); // skipped two days

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn test_streak_across_month_boundary() {
        let mut stats = Stats::default();
        stats.record_win(date("2026-02-28"), 4, 4);
        stats.record_win(date("2026-03-01"), 4, 4);

        assert_eq!(stats.current_streak, 2);
    }

    #[test]
    fn test_move_history_is_bounded() {
        let mut stats = Stats::default();
        let mut day = date("2026-02-05");
        for moves in 0..40u32 {
            stats.record_win(day, moves, 4);
            day = day.succ_opt().unwrap();
        }

        assert_eq!(stats.move_history.len(), 30);
        // Oldest entries dropped, newest kept
        assert_eq!(*stats.move_history.first().unwrap(), 10);
        assert_eq!(*stats.move_history.last().unwrap(), 39);
    }

    #[test]
    fn test_average_moves() {
        let mut stats = Stats::default();
        assert_eq!(stats.average_moves(), 0.0);

        stats.record_win(date("2026-02-05"), 4, 4);
        stats.record_win(date("2026-02-06"), 8, 4);
        assert_eq!(stats.average_moves(), 6.0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut stats = Stats::default();
        stats.record_win(date("2026-02-05"), 4, 4);
        stats.record_win(date("2026-02-06"), 9, 4);

        let json = serde_json::to_string(&stats).unwrap();
        let restored: Stats = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, stats);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let path = std::env::temp_dir().join("gunud-test-no-such-stats.json");
        let stats = Stats::load(&path).unwrap();
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join("gunud-test-save-then-load.json");
        let mut stats = Stats::default();
        stats.record_win(date("2026-02-05"), 7, 4);

        stats.save(&path).unwrap();
        let restored = Stats::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(restored, stats);
    }

    #[test]
    fn test_storage_path_uses_fixed_key() {
        let path = Stats::storage_path(Path::new("/profile"));
        assert_eq!(path, Path::new("/profile/dungeon-echo-stats.json"));
    }
}
