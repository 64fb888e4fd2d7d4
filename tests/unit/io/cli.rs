//! Tests for argument parsing and command execution against an in-memory store

#[cfg(test)]
mod tests {
    use clap::Parser;
    use quantum_poetry::PoetryError;
    use quantum_poetry::algorithm::selection::WordCount;
    use quantum_poetry::io::cli::{Cli, Command, CommandProcessor, SortOrder};
    use quantum_poetry::io::storage::MemoryStore;
    use quantum_poetry::io::typewriter::Typewriter;
    use std::path::PathBuf;

    fn processor() -> CommandProcessor<MemoryStore, Vec<u8>> {
        CommandProcessor::new(MemoryStore::new(), Vec::new(), Some(42), Typewriter::disabled())
    }

    fn output(processor: &CommandProcessor<MemoryStore, Vec<u8>>) -> String {
        String::from_utf8_lossy(processor.output()).into_owned()
    }

    fn parse(args: &[&str]) -> Option<Cli> {
        Cli::try_parse_from(std::iter::once("quantum-poetry").chain(args.iter().copied())).ok()
    }

    // Tests generate defaults to surprise mode and accepts sentinels
    // Verified by defaulting to max
    #[test]
    fn test_parse_generate_counts() {
        let Some(cli) = parse(&["generate"]) else {
            unreachable!("generate parses without arguments");
        };
        assert_eq!(
            cli.command,
            Command::Generate {
                count: WordCount::Surprise,
                selected: false
            }
        );

        let Some(cli) = parse(&["generate", "--count", "max"]) else {
            unreachable!("max is a valid count");
        };
        assert!(matches!(cli.command, Command::Generate { count: WordCount::Max, .. }));

        let Some(cli) = parse(&["generate", "-c", "3", "--selected"]) else {
            unreachable!("numeric count parses");
        };
        assert!(matches!(
            cli.command,
            Command::Generate {
                count: WordCount::Exact(3),
                selected: true
            }
        ));

        assert!(parse(&["generate", "--count", "plenty"]).is_none());
    }

    // Tests remaining subcommands and global flags
    // Verified by dropping the global flag attribute
    #[test]
    fn test_parse_commands_and_flags() {
        let Some(cli) = parse(&["rate", "7", "--quiet", "--seed", "9"]) else {
            unreachable!("rate parses");
        };
        assert_eq!(cli.command, Command::Rate { note: 7 });
        assert!(!cli.should_animate());
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.log_level(), "error");

        let Some(cli) = parse(&["history", "--sort", "desc", "-v"]) else {
            unreachable!("history parses");
        };
        assert_eq!(cli.command, Command::History { sort: Some(SortOrder::Desc) });
        assert_eq!(cli.log_level(), "debug");

        let Some(cli) = parse(&["export", "--store", "custom.json"]) else {
            unreachable!("export parses");
        };
        assert_eq!(cli.store_path(), PathBuf::from("custom.json"));
        assert!(matches!(cli.command, Command::Export { ref path } if path.extension().is_some()));

        assert!(parse(&["toggle"]).is_none());
        assert!(parse(&["stats", "--quiet", "--verbose"]).is_none());
    }

    // Tests a generated combination can be rated and shows up in statistics
    // Verified by not persisting after rating
    #[test]
    fn test_generate_rate_stats_flow() {
        let mut processor = processor();

        assert!(processor.execute(&Command::Generate { count: WordCount::Exact(3), selected: false }).is_ok());
        assert!(processor.session().current().is_some());
        assert!(processor.execute(&Command::Rate { note: 9 }).is_ok());
        assert!(processor.execute(&Command::Stats).is_ok());

        let text = output(&processor);
        assert!(text.contains("(Note : 9/10)"));
        assert!(text.contains("credible"));
        assert!(text.contains("Rated combinations: 1"));
        assert!(text.contains("Average rating: 9.00"));
        assert_eq!(processor.session().history().len(), 1);
    }

    // Tests advisory conditions print a message without failing
    // Verified by propagating advisory errors
    #[test]
    fn test_advisories_do_not_fail() {
        let mut processor = processor();

        assert!(processor.execute(&Command::Rate { note: 5 }).is_ok());
        assert!(processor.execute(&Command::Export { path: PathBuf::from("unused.txt") }).is_ok());
        assert!(processor.execute(&Command::History { sort: None }).is_ok());

        let text = output(&processor);
        assert!(text.contains(&PoetryError::NothingToRate.to_string()));
        assert!(text.contains(&PoetryError::EmptyHistory.to_string()));
        assert!(text.contains("No rated combinations yet."));
        assert!(!PathBuf::from("unused.txt").exists());
    }

    // Tests invalid input is a real error
    // Verified by clamping out-of-range ratings
    #[test]
    fn test_invalid_input_fails() {
        let mut processor = processor();

        assert!(processor.execute(&Command::Generate { count: WordCount::Surprise, selected: false }).is_ok());
        assert!(matches!(
            processor.execute(&Command::Rate { note: 11 }),
            Err(PoetryError::InvalidRating { value: 11, .. })
        ));
        assert!(processor.session().current().is_some());

        assert!(matches!(
            processor.execute(&Command::Toggle { words: vec!["absent".into()] }),
            Err(PoetryError::UnknownWord { .. })
        ));
    }

    // Tests selection-only generation after toggling and the empty-selection advisory
    // Verified by generating from the full vocabulary with --selected
    #[test]
    fn test_toggle_and_generate_selected() {
        let mut processor = processor();
        let words: Vec<String> = processor.session().vocabulary().words().to_vec();
        let (keep, removed) = words.split_at(2);

        assert!(processor.execute(&Command::Toggle { words: removed.to_vec() }).is_ok());
        assert_eq!(processor.session().selection().len(), keep.len());

        assert!(processor.execute(&Command::Generate { count: WordCount::Max, selected: true }).is_ok());
        let Some(sentence) = processor.session().current() else {
            unreachable!("selection is not empty");
        };
        assert_eq!(sentence.split(' ').count(), keep.len());

        assert!(processor.execute(&Command::Toggle { words: keep.to_vec() }).is_ok());
        assert!(processor.execute(&Command::Generate { count: WordCount::Max, selected: true }).is_ok());
        assert!(output(&processor).contains(&PoetryError::EmptySelection.to_string()));

        assert!(processor.execute(&Command::ResetWords).is_ok());
        assert_eq!(processor.session().selection().len(), words.len());
    }

    // Tests the word listing marks inactive words
    // Verified by marking every word active
    #[test]
    fn test_words_listing() {
        let mut processor = processor();

        assert!(processor.execute(&Command::Toggle { words: vec!["Je".into()] }).is_ok());
        assert!(processor.execute(&Command::Words).is_ok());

        let text = output(&processor);
        assert!(text.contains("[ ] Je"));
        assert!(text.contains("[x] suis"));
        assert!(text.contains("Selected words: 19/20"));
    }

    // Tests sorted listing and reset
    // Verified by listing without applying the sort
    #[test]
    fn test_history_sort_and_reset() {
        let mut processor = processor();

        for note in [3, 10, 6] {
            assert!(processor.execute(&Command::Generate { count: WordCount::Exact(2), selected: false }).is_ok());
            assert!(processor.execute(&Command::Rate { note }).is_ok());
        }

        assert!(processor.execute(&Command::History { sort: Some(SortOrder::Desc) }).is_ok());
        let notes: Vec<u8> = processor
            .session()
            .history()
            .records()
            .iter()
            .map(|r| r.note.value())
            .collect();
        assert_eq!(notes, vec![10, 6, 3]);
        assert!(output(&processor).contains("1. "));

        assert!(processor.execute(&Command::Reset).is_ok());
        assert!(processor.session().history().is_empty());
        assert!(output(&processor).contains("The history has been reset."));
    }
}
