//! Analysis modules for rating statistics and feedback

/// Reaction bands for individual ratings
pub mod feedback;
/// Aggregate statistics over rated history
pub mod statistics;
