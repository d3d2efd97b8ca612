//! High-score persistence: the [`ScoreStore`] collaborator the game talks to,
//! the ranking rules in [`ScoreBoard`], and a JSON file backend.

mod board;
mod store;

use std::path::PathBuf;

pub use board::{ScoreBoard, ScoreEntry, ScoreFile};
pub use store::JsonScoreStore;

use crate::error::ScoreStoreError;

/// Where and how many high scores are kept.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub path: PathBuf,
    pub capacity: usize,
    pub max_name_len: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        ScoreConfig {
            path: PathBuf::from("scores.json"),
            capacity: 10,
            max_name_len: 16,
        }
    }
}

/// Read/write access to the best-scores list.
pub trait ScoreStore {
    /// Whether `score` would earn a place in the table.
    fn is_high_score(&self, score: u32) -> bool;

    fn save_score(&mut self, name: &str, score: u32) -> Result<(), ScoreStoreError>;

    /// Name used for the most recent saved score, for pre-filling prompts.
    fn last_player_name(&self) -> String;

    /// Current table, best first.
    fn top_scores(&self) -> Vec<ScoreEntry>;
}
