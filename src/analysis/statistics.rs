//! Rating aggregation over history records and the in-place re-sort variants

use crate::{
    algorithm::{random::RandomSource, selection::shuffle_in_place},
    model::history::{HistoryRecord, Rating},
};
use std::fmt;

/// Aggregate view of a history
///
/// `None` marks a statistic that is undefined because no record exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of rated combinations
    pub count: usize,
    /// Mean rating rounded to two decimals
    pub average: Option<f64>,
    /// Highest rating
    pub best: Option<Rating>,
    /// Lowest rating
    pub worst: Option<Rating>,
}

impl Summary {
    /// Summary of an empty history
    pub const fn empty() -> Self {
        Self {
            count: 0,
            average: None,
            best: None,
            worst: None,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rated combinations: {}", self.count)?;
        match self.average {
            Some(average) => writeln!(f, "Average rating: {average:.2}")?,
            None => writeln!(f, "Average rating: -")?,
        }
        match self.best {
            Some(best) => writeln!(f, "Best rating: {best}")?,
            None => writeln!(f, "Best rating: -")?,
        }
        match self.worst {
            Some(worst) => write!(f, "Worst rating: {worst}"),
            None => write!(f, "Worst rating: -"),
        }
    }
}

/// Round to two decimal places
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Count, mean, maximum and minimum rating of the given records
pub fn summarize(records: &[HistoryRecord]) -> Summary {
    let notes = records.iter().map(|record| record.note);

    let (Some(best), Some(worst)) = (notes.clone().max(), notes.clone().min()) else {
        return Summary::empty();
    };

    let count = records.len();
    let sum: u32 = notes.map(|note| u32::from(note.value())).sum();

    Summary {
        count,
        average: Some(round_to_hundredths(f64::from(sum) / count as f64)),
        best: Some(best),
        worst: Some(worst),
    }
}

/// Reorder records from lowest to highest rating
pub fn sort_ascending(records: &mut [HistoryRecord]) {
    records.sort_by_key(|record| record.note);
}

/// Reorder records from highest to lowest rating
pub fn sort_descending(records: &mut [HistoryRecord]) {
    records.sort_by_key(|record| std::cmp::Reverse(record.note));
}

/// Reorder records uniformly at random
pub fn shuffle_records(records: &mut [HistoryRecord], rng: &mut impl RandomSource) {
    shuffle_in_place(records, rng);
}
