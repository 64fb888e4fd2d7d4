//! Character-by-character reveal of a freshly generated combination

use crate::io::configuration::TYPEWRITER_DELAY_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::thread;
use std::time::Duration;

static TYPEWRITER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{msg}{prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Cursor drawn after the revealed text
const CURSOR: &str = "|";

/// Reveals text on stderr one character at a time
///
/// Purely cosmetic: the reveal returns nothing the caller depends on, and
/// indicatif hides it entirely when stderr is not a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Typewriter {
    delay: Duration,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(Duration::from_millis(TYPEWRITER_DELAY_MS))
    }
}

impl Typewriter {
    /// Reveal with a fixed delay per character
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Typewriter that never animates
    pub const fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Whether [`reveal`](Self::reveal) animates at all
    pub const fn is_enabled(&self) -> bool {
        !self.delay.is_zero()
    }

    /// Successive states of the reveal, one per character
    pub fn frames(text: &str) -> Vec<String> {
        text.char_indices()
            .map(|(index, ch)| text.get(..index + ch.len_utf8()).unwrap_or(text).to_owned())
            .collect()
    }

    /// Play the reveal, returning whether anything was drawn
    pub fn reveal(&self, text: &str) -> bool {
        if !self.is_enabled() || text.is_empty() {
            return false;
        }

        let frames = Self::frames(text);
        let bar = ProgressBar::new(frames.len() as u64);
        bar.set_style(TYPEWRITER_STYLE.clone());
        bar.set_prefix(CURSOR);

        for frame in frames {
            bar.set_message(frame);
            bar.inc(1);
            thread::sleep(self.delay);
        }

        bar.finish_and_clear();
        true
    }
}
