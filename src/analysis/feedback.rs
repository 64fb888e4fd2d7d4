//! Reaction shown once a rating is chosen

use crate::model::history::Rating;
use std::fmt;

/// Band a rating falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Ratings 0 to 3
    Whimsical,
    /// Ratings 4 to 6
    Intriguing,
    /// Ratings 7 and 8
    Poetic,
    /// Ratings 9 and 10
    Credible,
}

impl Feedback {
    /// Classify a rating
    pub const fn for_rating(rating: Rating) -> Self {
        match rating.value() {
            0..=3 => Self::Whimsical,
            4..=6 => Self::Intriguing,
            7..=8 => Self::Poetic,
            _ => Self::Credible,
        }
    }

    /// Message shown to the user
    pub const fn message(self) -> &'static str {
        match self {
            Self::Whimsical => "A far-fetched combination, isn't it? Let's try again...",
            Self::Intriguing => "Intriguing! Not entirely clear, but interesting.",
            Self::Poetic => "Some fine poetic material here!",
            Self::Credible => "Very realistic, a credible and inspiring combination!",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
