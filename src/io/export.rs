//! Plain-text export of the rated history

use crate::io::error::{PoetryError, Result, file_system_error};
use crate::model::history::History;
use std::fs;
use std::path::Path;

/// Render the history as the text written by [`export_txt`]
///
/// # Errors
///
/// Returns `EmptyHistory` if there is nothing to export
pub fn render_txt(history: &History) -> Result<String> {
    if history.is_empty() {
        return Err(PoetryError::EmptyHistory);
    }
    Ok(history.numbered_lines().join("\n"))
}

/// Write the numbered history listing to `path`
///
/// # Errors
///
/// Returns an error if:
/// - The history is empty
/// - The file cannot be written
pub fn export_txt(history: &History, path: &Path) -> Result<()> {
    let content = render_txt(history)?;
    fs::write(path, content).map_err(|e| file_system_error(path, "export", e))?;
    tracing::debug!(path = %path.display(), records = history.len(), "history exported");
    Ok(())
}
