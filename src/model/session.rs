//! Owned session state: vocabulary, active selection, history and the pending combination

use crate::{
    algorithm::{
        formatting::format_sentence,
        random::RandomSource,
        selection::{WordCount, sample_without_replacement, shuffle},
    },
    analysis::statistics::Summary,
    io::{
        configuration::{CURRENT_KEY, HISTORY_KEY, SELECTION_KEY},
        error::{PoetryError, Result},
        storage::{KeyValueStore, load_json, remove_key, save_json},
    },
    model::{
        history::{History, HistoryRecord, Rating},
        vocabulary::{SelectionSet, Vocabulary},
    },
};

/// Everything one user works with between two persistence points
///
/// The session never touches the store on its own; callers decide when to
/// [`load`](Self::load) and [`persist`](Self::persist).
#[derive(Debug, Clone)]
pub struct Session {
    vocabulary: Vocabulary,
    selection: SelectionSet,
    history: History,
    current: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}

impl Session {
    /// Fresh session over `vocabulary` with every word active
    pub fn new(vocabulary: Vocabulary) -> Self {
        let selection = SelectionSet::full(&vocabulary);
        Self {
            vocabulary,
            selection,
            history: History::new(),
            current: None,
        }
    }

    /// Restore a session from `store`
    ///
    /// Missing or malformed values fall back to an empty history, a full
    /// selection and no pending combination.
    pub fn load<S: KeyValueStore + ?Sized>(vocabulary: Vocabulary, store: &S) -> Self {
        let history: History = load_json(store, HISTORY_KEY, History::new());

        let mut selection = load_json(store, SELECTION_KEY, SelectionSet::full(&vocabulary));
        selection.retain_known(&vocabulary);

        let current: Option<String> = load_json(store, CURRENT_KEY, None);

        tracing::debug!(
            history = history.len(),
            selected = selection.len(),
            pending = current.is_some(),
            "session loaded"
        );

        Self {
            vocabulary,
            selection,
            history,
            current,
        }
    }

    /// Write every part of the session to `store`
    ///
    /// Returns whether all values persisted; individual failures are logged.
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> bool {
        let history_saved = if self.history.is_empty() {
            remove_key(store, HISTORY_KEY)
        } else {
            save_json(store, HISTORY_KEY, &self.history)
        };
        let selection_saved = save_json(store, SELECTION_KEY, &self.selection);
        let current_saved = match &self.current {
            Some(current) => save_json(store, CURRENT_KEY, current),
            None => remove_key(store, CURRENT_KEY),
        };

        history_saved && selection_saved && current_saved
    }

    /// Vocabulary the session draws from
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Words currently active for selection-only generation
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Rated combinations
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Generated combination awaiting a rating
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Generate a combination from the full vocabulary
    ///
    /// # Errors
    ///
    /// Returns `EmptyVocabulary` if there are no words to draw from
    pub fn generate(&mut self, count: WordCount, rng: &mut impl RandomSource) -> Result<&str> {
        let words = sample_without_replacement(self.vocabulary.words(), count, rng);
        let sentence = format_sentence(&words).ok_or(PoetryError::EmptyVocabulary)?;
        tracing::debug!(%count, words = words.len(), "combination generated");
        Ok(self.current.insert(sentence).as_str())
    }

    /// Generate a combination using every active word, shuffled
    ///
    /// # Errors
    ///
    /// Returns `EmptySelection` if no word is active
    pub fn generate_from_selection(&mut self, rng: &mut impl RandomSource) -> Result<&str> {
        let words = shuffle(self.selection.words(), rng);
        let sentence = format_sentence(&words).ok_or(PoetryError::EmptySelection)?;
        tracing::debug!(words = words.len(), "combination generated from selection");
        Ok(self.current.insert(sentence).as_str())
    }

    /// Rate the pending combination and move it into history
    ///
    /// # Errors
    ///
    /// Returns `NothingToRate` if no combination is pending
    pub fn rate(&mut self, note: Rating) -> Result<&HistoryRecord> {
        let text = self.current.take().ok_or(PoetryError::NothingToRate)?;
        tracing::debug!(%note, "combination rated");
        self.history.push(HistoryRecord::new(text, note));
        self.history
            .records()
            .last()
            .ok_or(PoetryError::EmptyHistory)
    }

    /// Flip a word in or out of the active selection
    ///
    /// # Errors
    ///
    /// Returns `UnknownWord` if the word is not part of the vocabulary
    pub fn toggle_word(&mut self, word: &str) -> Result<bool> {
        self.selection.toggle(&self.vocabulary, word)
    }

    /// Reactivate every word
    pub fn reset_selection(&mut self) {
        self.selection.reset(&self.vocabulary);
    }

    /// Forget every rated combination
    pub fn reset_history(&mut self) {
        self.history.clear();
    }

    /// Statistics over the current history
    pub fn summarize(&self) -> Summary {
        self.history.summarize()
    }

    /// Reorder history from lowest to highest rating
    pub fn sort_history_ascending(&mut self) {
        self.history.sort_ascending();
    }

    /// Reorder history from highest to lowest rating
    pub fn sort_history_descending(&mut self) {
        self.history.sort_descending();
    }

    /// Reorder history at random
    pub fn shuffle_history(&mut self, rng: &mut impl RandomSource) {
        self.history.shuffle(rng);
    }
}
