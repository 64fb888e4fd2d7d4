//! Command-line interface driving a persisted poetry session

use crate::algorithm::random::SeededSource;
use crate::algorithm::selection::WordCount;
use crate::analysis::feedback::Feedback;
use crate::io::configuration::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, EXPORT_FILE_NAME, STORE_FILE_NAME,
};
use crate::io::error::Result;
use crate::io::export::export_txt;
use crate::io::storage::{FileStore, KeyValueStore};
use crate::io::typewriter::Typewriter;
use crate::model::{Rating, Session, Vocabulary};
use clap::{Parser, Subcommand, ValueEnum};
use directories::ProjectDirs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quantum-poetry")]
#[command(
    author,
    version,
    about = "Generate, rate and collect random word combinations"
)]
/// Command-line arguments for the poetry generator
pub struct Cli {
    /// Action to perform
    #[command(subcommand)]
    pub command: Command,

    /// Store file holding history and selection (defaults to the user data directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Random seed for reproducible draws
    #[arg(short = 'S', long, global = true)]
    pub seed: Option<u64>,

    /// Skip the typewriter reveal and only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

/// Available actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the vocabulary and which words are active
    Words,

    /// Activate or deactivate words for selection-only generation
    Toggle {
        /// Words to flip
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Reactivate every word
    ResetWords,

    /// Generate a new combination
    Generate {
        /// Number of words: a number, 'surprise' or 'max'
        #[arg(short, long, default_value_t = WordCount::Surprise)]
        count: WordCount,

        /// Use every active word instead of drawing from the whole vocabulary
        #[arg(long)]
        selected: bool,
    },

    /// Rate the last generated combination
    Rate {
        /// Score between 0 and 10
        note: u8,
    },

    /// Show rated combinations
    History {
        /// Reorder the stored history before listing it
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
    },

    /// Show rating statistics
    Stats,

    /// Write the history to a text file
    Export {
        /// Destination file
        #[arg(default_value = EXPORT_FILE_NAME)]
        path: PathBuf,
    },

    /// Erase the stored history
    Reset,
}

/// History reordering requested from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Lowest rating first
    Asc,
    /// Highest rating first
    Desc,
    /// Random order
    Random,
}

impl Cli {
    /// Check if the typewriter reveal should play
    pub const fn should_animate(&self) -> bool {
        !self.quiet
    }

    /// Default log filter directive for the chosen verbosity
    pub const fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }

    /// Store location, explicit or resolved from the platform data directory
    pub fn store_path(&self) -> PathBuf {
        self.store.clone().unwrap_or_else(default_store_path)
    }
}

/// Platform data directory store, or the working directory when none exists
pub fn default_store_path() -> PathBuf {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME).map_or_else(
        || PathBuf::from(STORE_FILE_NAME),
        |dirs| dirs.data_dir().join(STORE_FILE_NAME),
    )
}

/// Runs commands against a session loaded from a store, writing results to `out`
pub struct CommandProcessor<S, W> {
    session: Session,
    store: S,
    rng: SeededSource,
    typewriter: Typewriter,
    out: W,
}

impl<W: Write> CommandProcessor<FileStore, W> {
    /// Build a processor from parsed arguments, backed by the store file
    pub fn from_cli(cli: &Cli, out: W) -> Self {
        let typewriter = if cli.should_animate() {
            Typewriter::default()
        } else {
            Typewriter::disabled()
        };
        Self::new(FileStore::open(cli.store_path()), out, cli.seed, typewriter)
    }
}

impl<S: KeyValueStore, W: Write> CommandProcessor<S, W> {
    /// Load the session from `store`
    pub fn new(store: S, out: W, seed: Option<u64>, typewriter: Typewriter) -> Self {
        let session = Session::load(Vocabulary::default(), &store);
        let rng = seed.map_or_else(SeededSource::from_entropy, SeededSource::from_seed);

        Self {
            session,
            store,
            rng,
            typewriter,
            out,
        }
    }

    /// Current session state
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Output written so far
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Run one command
    ///
    /// Advisory conditions (nothing generated, empty history, empty selection)
    /// are written to the output as messages and do not count as failures.
    ///
    /// # Errors
    ///
    /// Returns an error if the command input is invalid, or if output or
    /// export files cannot be written
    pub fn execute(&mut self, command: &Command) -> Result<()> {
        match self.run(command) {
            Err(e) if e.is_advisory() => {
                tracing::info!(error = %e, "advisory");
                writeln!(self.out, "{e}")?;
                Ok(())
            }
            other => other,
        }
    }

    fn run(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::Words => self.list_words(),
            Command::Toggle { words } => self.toggle_words(words),
            Command::ResetWords => {
                self.session.reset_selection();
                self.persist();
                writeln!(self.out, "All words have been reactivated.")?;
                Ok(())
            }
            Command::Generate { count, selected } => self.generate(*count, *selected),
            Command::Rate { note } => self.rate(*note),
            Command::History { sort } => self.show_history(*sort),
            Command::Stats => {
                writeln!(self.out, "{}", self.session.summarize())?;
                Ok(())
            }
            Command::Export { path } => self.export(path),
            Command::Reset => {
                self.session.reset_history();
                self.persist();
                writeln!(self.out, "The history has been reset.")?;
                Ok(())
            }
        }
    }

    fn list_words(&mut self) -> Result<()> {
        let selection = self.session.selection();
        for word in self.session.vocabulary().words() {
            let marker = if selection.is_active(word) { 'x' } else { ' ' };
            writeln!(self.out, "[{marker}] {word}")?;
        }
        writeln!(
            self.out,
            "Selected words: {}/{}",
            selection.len(),
            self.session.vocabulary().len()
        )?;
        Ok(())
    }

    fn toggle_words(&mut self, words: &[String]) -> Result<()> {
        for word in words {
            let active = self.session.toggle_word(word)?;
            let state = if active { "active" } else { "inactive" };
            writeln!(self.out, "{word}: {state}")?;
        }
        self.persist();
        writeln!(
            self.out,
            "Selected words: {}",
            self.session.selection().len()
        )?;
        Ok(())
    }

    fn generate(&mut self, count: WordCount, selected: bool) -> Result<()> {
        let sentence = if selected {
            self.session
                .generate_from_selection(&mut self.rng)?
                .to_owned()
        } else {
            self.session.generate(count, &mut self.rng)?.to_owned()
        };
        self.persist();

        self.typewriter.reveal(&sentence);
        writeln!(self.out, "{sentence}")?;

        if selected {
            writeln!(
                self.out,
                "Combination generated with all {} selected words.",
                self.session.selection().len()
            )?;
        }
        Ok(())
    }

    fn rate(&mut self, note: u8) -> Result<()> {
        let rating = Rating::new(note)?;
        let record = self.session.rate(rating)?.clone();
        self.persist();

        writeln!(self.out, "{record}")?;
        writeln!(self.out, "{}", Feedback::for_rating(rating))?;
        writeln!(self.out, "Thanks for your contribution!")?;
        Ok(())
    }

    fn show_history(&mut self, sort: Option<SortOrder>) -> Result<()> {
        if self.session.history().is_empty() {
            writeln!(self.out, "No rated combinations yet.")?;
            return Ok(());
        }

        if let Some(order) = sort {
            match order {
                SortOrder::Asc => self.session.sort_history_ascending(),
                SortOrder::Desc => self.session.sort_history_descending(),
                SortOrder::Random => self.session.shuffle_history(&mut self.rng),
            }
            self.persist();
        }

        for line in self.session.history().numbered_lines() {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn export(&mut self, path: &Path) -> Result<()> {
        export_txt(self.session.history(), path)?;
        writeln!(
            self.out,
            "Exported {} combinations to {}",
            self.session.history().len(),
            path.display()
        )?;
        Ok(())
    }

    fn persist(&mut self) {
        if !self.session.persist(&mut self.store) {
            tracing::warn!("session changes were not persisted");
        }
    }
}
