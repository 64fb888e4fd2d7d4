//! Tests for rating aggregation and history re-sorting

#[cfg(test)]
mod tests {
    use quantum_poetry::analysis::statistics::{
        Summary, round_to_hundredths, shuffle_records, sort_ascending, sort_descending, summarize,
    };
    use quantum_poetry::algorithm::random::SequenceSource;
    use quantum_poetry::model::history::{HistoryRecord, Rating};

    fn records(notes: &[u8]) -> Vec<HistoryRecord> {
        notes
            .iter()
            .enumerate()
            .filter_map(|(i, &note)| {
                Rating::new(note)
                    .ok()
                    .map(|rating| HistoryRecord::new(format!("Combinaison {i}."), rating))
            })
            .collect()
    }

    fn notes(records: &[HistoryRecord]) -> Vec<u8> {
        records.iter().map(|r| r.note.value()).collect()
    }

    // Tests an empty history leaves every statistic undefined
    // Verified by defaulting statistics to zero
    #[test]
    fn test_empty_history_is_undefined() {
        let summary = summarize(&[]);

        assert_eq!(summary.count, 0);
        assert!(summary.average.is_none());
        assert!(summary.best.is_none());
        assert!(summary.worst.is_none());
        assert_eq!(summary, Summary::empty());
    }

    // Tests count, mean, best and worst over a small history
    // Verified by swapping min and max
    #[test]
    fn test_summary_values() {
        let summary = summarize(&records(&[4, 8, 6]));

        assert_eq!(summary.count, 3);
        assert_eq!(summary.average, Some(6.0));
        assert_eq!(summary.best.map(Rating::value), Some(8));
        assert_eq!(summary.worst.map(Rating::value), Some(4));
    }

    // Tests the mean is rounded to two decimals
    // Verified by truncating instead of rounding
    #[test]
    fn test_average_rounding() {
        let summary = summarize(&records(&[1, 2, 2]));
        assert_eq!(summary.average, Some(1.67));

        assert!((round_to_hundredths(2.0 / 3.0) - 0.67).abs() < f64::EPSILON);
        assert!((round_to_hundredths(10.0) - 10.0).abs() < f64::EPSILON);
    }

    // Tests summarizing twice gives the same answer and leaves records untouched
    // Verified by sorting records inside summarize
    #[test]
    fn test_summarize_is_pure() {
        let history = records(&[9, 0, 5, 3]);
        let before = history.clone();

        let first = summarize(&history);
        let second = summarize(&history);

        assert_eq!(first, second);
        assert_eq!(history, before);
    }

    // Tests ascending and descending sorts reorder in place
    // Verified by reversing the comparator
    #[test]
    fn test_sort_directions() {
        let mut history = records(&[5, 2, 9, 0, 7]);

        sort_ascending(&mut history);
        assert_eq!(notes(&history), vec![0, 2, 5, 7, 9]);

        sort_descending(&mut history);
        assert_eq!(notes(&history), vec![9, 7, 5, 2, 0]);
    }

    // Tests the random reorder is a Fisher-Yates pass driven by the source
    // Verified by shuffling from the front instead of the back
    #[test]
    fn test_shuffle_records_with_scripted_source() {
        let mut history = records(&[5, 2, 9, 0, 7]);

        shuffle_records(&mut history, &mut SequenceSource::new(vec![0]));

        assert_eq!(notes(&history), vec![2, 9, 0, 7, 5]);
    }

    // Tests undefined statistics render as dashes
    // Verified by rendering zero for missing values
    #[test]
    fn test_display_empty_summary() {
        let rendered = Summary::empty().to_string();

        assert!(rendered.contains("Rated combinations: 0"));
        assert!(rendered.contains("Average rating: -"));
        assert!(rendered.contains("Best rating: -"));
        assert!(rendered.contains("Worst rating: -"));
    }

    // Tests the average always renders with two decimals
    // Verified by using default float formatting
    #[test]
    fn test_display_summary_values() {
        let rendered = summarize(&records(&[4, 8, 6])).to_string();

        assert!(rendered.contains("Rated combinations: 3"));
        assert!(rendered.contains("Average rating: 6.00"));
        assert!(rendered.contains("Best rating: 8"));
        assert!(rendered.contains("Worst rating: 4"));
    }
}
