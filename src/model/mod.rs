//! Session data: vocabulary, selection, rated history

/// Rated combinations and their ordering
pub mod history;
/// Owned session object tying vocabulary, selection and history together
pub mod session;
/// Word pool and the active selection
pub mod vocabulary;

pub use history::{History, HistoryRecord, Rating};
pub use session::Session;
pub use vocabulary::{SelectionSet, Vocabulary};
