//! High score leaderboard
//!
//! Applies the same rules as the backend's `/api/highscores`: names clipped
//! to 20 characters, ordered by score then level, top 10 kept.
//! Persisted to LocalStorage in the browser.

use serde::{Deserialize, Serialize};

use crate::report::ScoreReport;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Longest name stored on the board
pub const MAX_NAME_LEN: usize = 20;

/// Name used when none was given
pub const FALLBACK_NAME: &str = "Player";

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
    /// Level reached
    pub level: u32,
}

/// Clip a player name to the stored length; empty names become the fallback
pub fn sanitize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return FALLBACK_NAME.to_string();
    }
    trimmed.chars().take(MAX_NAME_LEN).collect()
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "coin_dash_highscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a score; returns the 1-based rank, or None if it fell off the board
    pub fn add_score(&mut self, name: &str, score: u32, level: u32) -> Option<usize> {
        let entry = HighScoreEntry {
            name: sanitize_name(name),
            score,
            level,
        };

        // Stable: ties keep earlier entries ahead
        let pos = self
            .entries
            .iter()
            .position(|e| (score, level) > (e.score, e.level))
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        (pos < MAX_HIGH_SCORES).then_some(pos + 1)
    }

    /// Record a finished game's report
    pub fn record(&mut self, report: &ScoreReport) -> Option<usize> {
        self.add_score(&report.name, report.score, report.level)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load high scores from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(scores) = serde_json::from_str::<HighScores>(&json) {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    return scores;
                }
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High scores saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_score_then_level() {
        let mut scores = HighScores::new();
        scores.add_score("a", 5, 3);
        scores.add_score("b", 9, 1);
        scores.add_score("c", 5, 7);

        let names: Vec<_> = scores.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
        assert_eq!(scores.top_score(), Some(9));
    }

    #[test]
    fn test_rank_returned() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score("a", 10, 10), Some(1));
        assert_eq!(scores.add_score("b", 20, 10), Some(1));
        assert_eq!(scores.add_score("c", 15, 10), Some(2));
        // Equal score and level ranks behind the existing entry
        assert_eq!(scores.add_score("d", 15, 10), Some(3));
    }

    #[test]
    fn test_board_is_capped() {
        let mut scores = HighScores::new();
        for i in 0..MAX_HIGH_SCORES as u32 {
            scores.add_score("p", 100 + i, 10);
        }
        assert_eq!(scores.add_score("low", 1, 1), None);
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.add_score("high", 500, 10), Some(1));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
    }

    #[test]
    fn test_name_sanitizing() {
        assert_eq!(sanitize_name("  "), FALLBACK_NAME);
        assert_eq!(sanitize_name("Ada"), "Ada");
        assert_eq!(sanitize_name("abcdefghijklmnopqrstuvwxyz").len(), MAX_NAME_LEN);
    }

    #[test]
    fn test_record_report() {
        let mut scores = HighScores::new();
        let rank = scores.record(&ScoreReport::new("Player1", 6, 10));
        assert_eq!(rank, Some(1));
        assert_eq!(scores.entries[0].level, 10);
    }
}
