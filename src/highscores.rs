//! High score leaderboard system
//!
//! Persisted to a flat text file, tracks the top 5 scores.

use std::path::{Path, PathBuf};

use crate::consts::MAX_HIGH_SCORES;
use crate::error::Result;
use crate::persistence;

/// High score leaderboard, sorted descending, at most `MAX_HIGH_SCORES` long
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    entries: Vec<u64>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a leaderboard from scores in any order
    pub fn from_scores(mut scores: Vec<u64>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_HIGH_SCORES);
        Self { entries: scores }
    }

    pub fn entries(&self) -> &[u64] {
        &self.entries
    }

    /// Check if a score would make the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|&low| score > low).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let pos = self.entries.iter().position(|&e| score > e);
        Some(pos.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a score, keeping the list sorted and trimmed.
    /// Returns the rank achieved (1-indexed) or None if it didn't make the list.
    /// A score tied with existing entries ranks below them.
    pub fn add_score(&mut self, score: u64) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(rank - 1, score);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of merging one finished game into the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedScore {
    /// Leaderboard as written to disk
    pub board: HighScores,
    /// Rank the score took, None when it didn't make the list
    pub rank: Option<usize>,
}

/// File-backed score store. Every call is a one-shot synchronous read or write.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scores exactly as stored; a missing file is an empty list.
    pub fn load(&self) -> Result<Vec<u64>> {
        persistence::read_scores(&self.path)
    }

    /// Current leaderboard view of the stored scores.
    pub fn leaderboard(&self) -> Result<HighScores> {
        self.load().map(HighScores::from_scores)
    }

    /// Merge `score` into the stored list and rewrite the file.
    ///
    /// The file is rewritten even when the score doesn't place, so it is
    /// always left sorted and trimmed.
    pub fn save(&self, score: u64) -> Result<SavedScore> {
        let mut board = self.leaderboard()?;
        let rank = board.add_score(score);
        persistence::write_scores(&self.path, board.entries())?;
        log::info!(
            "Score {} saved to {} ({} entries)",
            score,
            self.path.display(),
            board.entries().len()
        );
        Ok(SavedScore { board, rank })
    }
}
