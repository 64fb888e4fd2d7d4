//! Rated combinations and the ordered history that holds them

use crate::{
    algorithm::random::RandomSource,
    analysis::statistics::{self, Summary},
    io::{
        configuration::MAX_RATING,
        error::{PoetryError, Result},
    },
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score given to a combination, always within `0..=MAX_RATING`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Validate a raw score
    ///
    /// # Errors
    ///
    /// Returns `InvalidRating` if the value exceeds `MAX_RATING`
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_RATING {
            return Err(PoetryError::InvalidRating {
                value,
                max: MAX_RATING,
            });
        }
        Ok(Self(value))
    }

    /// Raw score
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = PoetryError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A generated sentence paired with its rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// The rated sentence
    pub text: String,
    /// Score the user gave it
    pub note: Rating,
}

impl HistoryRecord {
    /// Pair a sentence with its rating
    pub fn new(text: impl Into<String>, note: Rating) -> Self {
        Self {
            text: text.into(),
            note,
        }
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Note : {}/{MAX_RATING})", self.text, self.note)
    }
}

/// Rated combinations in insertion order, or in whatever order the last sort left them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<HistoryRecord>,
}

impl History {
    /// Empty history
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record
    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    /// Records in their stored order
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Number of records
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no combination has been rated
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Forget every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Count, average, best and worst rating
    pub fn summarize(&self) -> Summary {
        statistics::summarize(&self.records)
    }

    /// Reorder from lowest to highest rating
    pub fn sort_ascending(&mut self) {
        statistics::sort_ascending(&mut self.records);
    }

    /// Reorder from highest to lowest rating
    pub fn sort_descending(&mut self) {
        statistics::sort_descending(&mut self.records);
    }

    /// Reorder uniformly at random
    pub fn shuffle(&mut self, rng: &mut impl RandomSource) {
        statistics::shuffle_records(&mut self.records, rng);
    }

    /// One-based listing lines, `"{i}. {text} (Note : {n}/10)"`
    pub fn numbered_lines(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| format!("{}. {record}", index + 1))
            .collect()
    }
}

impl From<Vec<HistoryRecord>> for History {
    fn from(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }
}
