use serde::{Deserialize, Serialize};

/// One row of the high-score table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    /// Unix seconds.
    #[serde(default)]
    pub recorded_at: u64,
}

/// On-disk layout of the scores file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreFile {
    #[serde(default)]
    pub last_player: String,
    #[serde(default)]
    pub entries: Vec<ScoreEntry>,
}

/// Bounded table of best scores, highest first.
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    capacity: usize,
    last_player: String,
    entries: Vec<ScoreEntry>,
}

impl ScoreBoard {
    pub fn new(capacity: usize) -> Self {
        ScoreBoard {
            capacity,
            last_player: String::new(),
            entries: Vec::new(),
        }
    }

    /// Rebuild a board from a loaded file, re-sorting and trimming to capacity
    /// in case the file was edited by hand or the capacity shrank.
    pub fn from_file(file: ScoreFile, capacity: usize) -> Self {
        let mut entries = file.entries;
        // Stable sort keeps the earlier of two equal scores first.
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(capacity);
        ScoreBoard {
            capacity,
            last_player: file.last_player,
            entries,
        }
    }

    pub fn to_file(&self) -> ScoreFile {
        ScoreFile {
            last_player: self.last_player.clone(),
            entries: self.entries.clone(),
        }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn last_player(&self) -> &str {
        &self.last_player
    }

    /// A score earns a place if it is positive and either a slot is free or it
    /// beats the lowest entry.
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 || self.capacity == 0 {
            return false;
        }
        if self.entries.len() < self.capacity {
            return true;
        }
        self.entries.last().map_or(true, |lowest| score > lowest.score)
    }

    /// Insert an entry and return its zero-based rank, or `None` if it does
    /// not qualify.
    pub fn insert(&mut self, entry: ScoreEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }
        let rank = self
            .entries
            .iter()
            .position(|e| e.score < entry.score)
            .unwrap_or(self.entries.len());
        self.last_player = entry.name.clone();
        self.entries.insert(rank, entry);
        self.entries.truncate(self.capacity);
        Some(rank)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u32) -> ScoreEntry {
        ScoreEntry {
            name: name.to_string(),
            score,
            recorded_at: 0,
        }
    }

    #[test]
    fn test_zero_never_qualifies() {
        let board = ScoreBoard::new(10);
        assert!(!board.qualifies(0));
        assert!(board.qualifies(1));
    }

    #[test]
    fn test_insert_orders_descending() {
        let mut board = ScoreBoard::new(10);
        assert_eq!(board.insert(entry("a", 3)), Some(0));
        assert_eq!(board.insert(entry("b", 7)), Some(0));
        assert_eq!(board.insert(entry("c", 5)), Some(1));

        let scores: Vec<u32> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![7, 5, 3]);
        assert_eq!(board.last_player(), "c");
    }

    #[test]
    fn test_ties_keep_earlier_entry_first() {
        let mut board = ScoreBoard::new(10);
        board.insert(entry("first", 4));
        assert_eq!(board.insert(entry("second", 4)), Some(1));
        assert_eq!(board.entries()[0].name, "first");
    }

    #[test]
    fn test_full_board_needs_to_beat_lowest() {
        let mut board = ScoreBoard::new(3);
        for (name, score) in [("a", 5), ("b", 4), ("c", 3)] {
            board.insert(entry(name, score));
        }

        assert!(!board.qualifies(3));
        assert_eq!(board.insert(entry("d", 2)), None);
        assert_eq!(board.last_player(), "c");

        assert_eq!(board.insert(entry("e", 4)), Some(2));
        assert_eq!(board.entries().len(), 3);
        assert_eq!(board.entries().last().unwrap().name, "e");
    }

    #[test]
    fn test_from_file_sorts_and_truncates() {
        let file = ScoreFile {
            last_player: "zed".to_string(),
            entries: vec![entry("a", 1), entry("b", 9), entry("c", 4)],
        };
        let board = ScoreBoard::from_file(file, 2);
        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
        assert_eq!(board.last_player(), "zed");
    }

    #[test]
    fn test_clear_keeps_last_player() {
        let mut board = ScoreBoard::new(5);
        board.insert(entry("amy", 2));
        board.clear();
        assert!(board.entries().is_empty());
        assert_eq!(board.last_player(), "amy");
    }
}
