//! Word-count modes, sampling without replacement and shuffling

use crate::{
    algorithm::random::RandomSource,
    io::error::{PoetryError, invalid_parameter},
};
use std::fmt;
use std::str::FromStr;

/// How many words a generated combination should contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordCount {
    /// A fixed number of words, clamped to the vocabulary size
    Exact(usize),
    /// A uniformly random number of words
    #[default]
    Surprise,
    /// Every word of the vocabulary
    Max,
}

impl WordCount {
    /// Resolve the request into a concrete count within `[1, vocabulary_len]`
    ///
    /// Returns 0 only for an empty vocabulary.
    pub fn resolve(self, vocabulary_len: usize, rng: &mut impl RandomSource) -> usize {
        if vocabulary_len == 0 {
            return 0;
        }

        match self {
            Self::Exact(count) => count.clamp(1, vocabulary_len),
            Self::Surprise => rng.next_index(vocabulary_len) + 1,
            Self::Max => vocabulary_len,
        }
    }
}

impl FromStr for WordCount {
    type Err = PoetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "surprise" => Ok(Self::Surprise),
            "max" => Ok(Self::Max),
            other => other.parse::<usize>().map(Self::Exact).map_err(|e| {
                invalid_parameter("count", &s, &format!("expected 'surprise', 'max' or a number ({e})"))
            }),
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(count) => write!(f, "{count}"),
            Self::Surprise => write!(f, "surprise"),
            Self::Max => write!(f, "max"),
        }
    }
}

/// Draw distinct words from the vocabulary, in draw order
///
/// Each draw removes the chosen word from the candidate pool, so the result is
/// a prefix of a random permutation. An empty vocabulary yields no words.
pub fn sample_without_replacement<S: AsRef<str>>(
    vocabulary: &[S],
    count: WordCount,
    rng: &mut impl RandomSource,
) -> Vec<String> {
    let target = count.resolve(vocabulary.len(), rng);
    let mut pool: Vec<&str> = vocabulary.iter().map(AsRef::as_ref).collect();
    let mut drawn = Vec::with_capacity(target);

    while drawn.len() < target && !pool.is_empty() {
        let index = rng.next_index(pool.len());
        drawn.push(pool.remove(index).to_owned());
    }

    drawn
}

/// Fisher-Yates shuffle of the given words
pub fn shuffle<S: AsRef<str>>(words: &[S], rng: &mut impl RandomSource) -> Vec<String> {
    let mut shuffled: Vec<String> = words.iter().map(|w| w.as_ref().to_owned()).collect();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}

/// Fisher-Yates shuffle over any slice
pub fn shuffle_in_place<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}
