//! Word bank and the player's score/level counters.

use thiserror::Error;

use super::rng::Lcg;
use super::words::WORD_LEVELS;

/// Score at which the controller raises the level and resets the count.
pub const LEVEL_UP_SCORE: u32 = 10;

/// Errors from leveled word lookups. [`WordModel::level_up`] saturates, so
/// normal play never reaches these; lookups stay bounds-checked regardless.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("level {level} out of range ({levels} levels)")]
    LevelOutOfRange { level: usize, levels: usize },
    #[error("level {level} has no words")]
    EmptyLevel { level: usize },
}

/// Ordered list of levels, each an ordered list of candidate words.
#[derive(Clone, Copy)]
pub struct WordBank {
    levels: &'static [&'static [&'static str]],
}

impl WordBank {
    pub const fn new(levels: &'static [&'static [&'static str]]) -> Self {
        Self { levels }
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// The words of one level, or a defined error for an out-of-range index.
    pub fn level_words(&self, level: usize) -> Result<&'static [&'static str], GameError> {
        self.levels
            .get(level)
            .copied()
            .ok_or(GameError::LevelOutOfRange {
                level,
                levels: self.levels.len(),
            })
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::new(WORD_LEVELS)
    }
}

/// The game model: a word bank plus the player's score and current level.
pub struct WordModel {
    bank: WordBank,
    score: u32,
    level: usize,
}

impl WordModel {
    pub fn new(bank: WordBank) -> Self {
        Self {
            bank,
            score: 0,
            level: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Picks a word uniformly at random from the current level's list; the
    /// random index is bounded by that list's own length.
    pub fn create_word(&self, rng: &mut Lcg) -> Result<&'static str, GameError> {
        let words = self.bank.level_words(self.level)?;
        if words.is_empty() {
            return Err(GameError::EmptyLevel { level: self.level });
        }
        Ok(words[rng.next_index(words.len())])
    }

    pub fn add_point(&mut self) {
        self.score += 1;
    }

    /// Raises the level, saturating at the bank's last level so word
    /// generation stays possible for the whole (unbounded) game lifetime.
    pub fn level_up(&mut self) {
        if self.level + 1 < self.bank.level_count() {
            self.level += 1;
        }
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

impl Default for WordModel {
    fn default() -> Self {
        Self::new(WordBank::default())
    }
}
