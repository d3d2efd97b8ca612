use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ScoreStoreError;

use super::board::{ScoreBoard, ScoreEntry, ScoreFile};
use super::{ScoreConfig, ScoreStore};

/// High-score table persisted as a JSON file.
pub struct JsonScoreStore {
    path: PathBuf,
    max_name_len: usize,
    board: ScoreBoard,
}

impl JsonScoreStore {
    /// Open the store described by `config`. A missing file is an empty table.
    pub fn open(config: &ScoreConfig) -> Result<Self, ScoreStoreError> {
        let board = match Self::read_file(&config.path)? {
            Some(file) => ScoreBoard::from_file(file, config.capacity),
            None => ScoreBoard::new(config.capacity),
        };
        tracing::debug!(
            path = %config.path.display(),
            entries = board.entries().len(),
            "opened score store"
        );
        Ok(JsonScoreStore {
            path: config.path.clone(),
            max_name_len: config.max_name_len,
            board,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove every entry and persist the empty table.
    pub fn clear(&mut self) -> Result<(), ScoreStoreError> {
        let mut board = self.board.clone();
        board.clear();
        self.write_file(&board)?;
        self.board = board;
        Ok(())
    }

    fn read_file(path: &Path) -> Result<Option<ScoreFile>, ScoreStoreError> {
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(path).map_err(|e| ScoreStoreError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file = serde_json::from_str(&json).map_err(|e| ScoreStoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Some(file))
    }

    /// Write `board` to a sibling temp file, then rename over the real one.
    /// The temp file is removed if either step fails.
    fn write_file(&self, board: &ScoreBoard) -> Result<(), ScoreStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        let json = serde_json::to_string_pretty(&board.to_file())?;
        let written = fs::write(&tmp_path, json).and_then(|()| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

impl ScoreStore for JsonScoreStore {
    fn is_high_score(&self, score: u32) -> bool {
        self.board.qualifies(score)
    }

    fn save_score(&mut self, name: &str, score: u32) -> Result<(), ScoreStoreError> {
        let recorded_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let entry = ScoreEntry {
            name: name.chars().take(self.max_name_len).collect(),
            score,
            recorded_at,
        };

        // Only commit to memory once the file is written.
        let mut board = self.board.clone();
        match board.insert(entry) {
            Some(rank) => {
                self.write_file(&board)?;
                self.board = board;
                tracing::info!(name, score, rank = rank + 1, "high score saved");
                Ok(())
            }
            None => {
                tracing::debug!(name, score, "score did not qualify, not saved");
                Ok(())
            }
        }
    }

    fn last_player_name(&self) -> String {
        self.board.last_player().to_string()
    }

    fn top_scores(&self) -> Vec<ScoreEntry> {
        self.board.entries().to_vec()
    }
}
