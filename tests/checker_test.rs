#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use xiphos::checker::SpellChecker;
    use xiphos::config::SpellConfig;
    use xiphos::dictionary::EntryOutcome;
    use xiphos::suggest::{Suggestion, Verbosity};

    fn checker_with(words: &[(&str, u64)]) -> SpellChecker {
        let mut checker = SpellChecker::default();
        for &(word, count) in words {
            checker.create_entry(word, count);
        }
        checker.commit_staged();
        checker
    }

    #[test]
    fn test_every_word_finds_itself_exactly() {
        let words = [("the", 100u64), ("quick", 50), ("brown", 25), ("fox", 12)];
        let checker = checker_with(&words);

        for (word, count) in words {
            let results = checker.lookup(word, Verbosity::Top, 0).unwrap();
            assert_eq!(results, vec![Suggestion::new(word, 0, count)]);
        }
    }

    #[test]
    fn test_transposed_word_corrected() {
        // 1. Build a small dictionary with a short prefix window
        let config = SpellConfig::new(16, 2, 5, 1, u64::MAX, 5).unwrap();
        let mut checker = SpellChecker::new(config);
        checker.create_entry("the", 100);
        checker.create_entry("quick", 50);
        checker.commit_staged();

        // 2. A transposition costs two single-char edits here
        let results = checker.lookup("teh", Verbosity::Top, 2).unwrap();
        assert_eq!(results, vec![Suggestion::new("the", 2, 100)]);
    }

    #[test]
    fn test_compound_rejoins_split_word() {
        let checker = checker_with(&[("there", 80)]);

        let result = checker.lookup_compound("ther e", 2).unwrap();
        assert_eq!(result.suggestion, Suggestion::new("there", 1, 80));
    }

    #[test]
    fn test_minimum_count_gate() {
        // 1. Below the threshold the word is invisible
        let config = SpellConfig::new(16, 2, 7, 10, u64::MAX, 5).unwrap();
        let mut checker = SpellChecker::new(config);
        checker.create_entry("hello", 5);
        checker.commit_staged();
        assert!(checker.lookup("hello", Verbosity::Top, 0).unwrap().is_empty());

        // 2. Crossing it makes the word searchable at the cumulative count
        checker.create_entry("hello", 10);
        checker.commit_staged();
        let results = checker.lookup("hello", Verbosity::Top, 0).unwrap();
        assert_eq!(results, vec![Suggestion::new("hello", 0, 15)]);
    }

    #[test]
    fn test_results_respect_requested_bound() {
        let checker = checker_with(&[("test", 100), ("text", 90), ("toast", 40)]);

        for bound in 0..=2 {
            let results = checker.lookup("tezt", Verbosity::All, bound).unwrap();
            assert!(results.iter().all(|s| s.distance <= bound));
            for window in results.windows(2) {
                assert!(
                    window[0].distance < window[1].distance
                        || (window[0].distance == window[1].distance
                            && window[0].count >= window[1].count)
                );
            }
        }
    }

    #[test]
    fn test_above_threshold_words_retire() {
        // 1. A word that crosses the ceiling stops being searchable
        let config = SpellConfig::new(16, 2, 7, 1, 100, 5).unwrap();
        let mut checker = SpellChecker::new(config);
        checker.create_entry("common", 50);
        checker.commit_staged();
        assert!(!checker.lookup("common", Verbosity::Top, 0).unwrap().is_empty());

        // 2. Crossing the ceiling retires it for good
        let outcome = checker.create_entry("common", 60);
        assert_eq!(outcome, EntryOutcome::PromotedAboveThreshold);
        checker.commit_staged();
        assert!(checker.lookup("common", Verbosity::Top, 0).unwrap().is_empty());

        // 3. Fuzzy queries no longer reach it either, despite stale index
        //    associations
        assert!(checker.lookup("commn", Verbosity::All, 2).unwrap().is_empty());
    }

    #[test]
    fn test_too_long_input_is_rejected_early() {
        let checker = checker_with(&[("cat", 10), ("dog", 20)]);

        let results = checker
            .lookup("catastrophe", Verbosity::All, 2)
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_frequency_file_end_to_end() {
        // 1. Write a frequency dictionary to disk
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "the 23135851162").unwrap();
        writeln!(file, "of 13151942776").unwrap();
        writeln!(file, "garbage notanumber").unwrap();
        writeln!(file, "and 12997637966").unwrap();
        file.flush().unwrap();

        // 2. Load it
        let mut checker = SpellChecker::default();
        let loaded = checker.load_dictionary(file.path(), 0, 1).unwrap();
        assert!(loaded);
        assert_eq!(checker.word_count(), 3);

        // 3. Query it
        let results = checker.lookup("adn", Verbosity::Top, 2).unwrap();
        assert_eq!(results[0].term, "and");
    }

    #[test]
    fn test_corpus_file_end_to_end() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "The quick brown fox jumps over the lazy dog.").unwrap();
        writeln!(file, "The dog sleeps.").unwrap();
        file.flush().unwrap();

        let mut checker = SpellChecker::default();
        assert!(checker.create_dictionary(file.path()).unwrap());

        assert_eq!(checker.lookup("the", Verbosity::Top, 0).unwrap()[0].count, 3);
        assert_eq!(checker.lookup("dog", Verbosity::Top, 0).unwrap()[0].count, 2);
    }

    #[test]
    fn test_repeated_load_accumulates() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "hello 30").unwrap();
        file.flush().unwrap();

        let mut checker = SpellChecker::default();
        checker.load_dictionary(file.path(), 0, 1).unwrap();
        checker.load_dictionary(file.path(), 0, 1).unwrap();

        let results = checker.lookup("hello", Verbosity::Top, 0).unwrap();
        assert_eq!(results, vec![Suggestion::new("hello", 0, 60)]);
    }

    #[test]
    fn test_top_keeps_first_on_equal_count_and_distance() {
        let checker = checker_with(&[("tent", 70), ("test", 70)]);

        // Both corrections sit at distance 1 with identical counts; the
        // incumbent survives
        let results = checker.lookup("tept", Verbosity::Top, 2).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].distance, 1);
        assert_eq!(results[0].count, 70);
    }

    #[test]
    fn test_compound_full_sentence() {
        let checker = checker_with(&[
            ("the", 900),
            ("biggest", 120),
            ("players", 110),
        ]);

        let result = checker.lookup_compound("the bigjest playrs", 2).unwrap();
        assert_eq!(result.suggestion.term, "the biggest players");
        assert_eq!(result.suggestion.distance, 2);
        assert_eq!(result.suggestion.count, 110);
    }

    #[test]
    fn test_split_half_matching_whole_correction_is_skipped() {
        // "whereis" corrects to "where" outright; the "where is" split is
        // discarded because its first half lands on the same correction
        let checker = checker_with(&[("where", 300), ("is", 500)]);

        let result = checker.lookup_compound("whereis", 2).unwrap();
        assert_eq!(result.suggestion.term, "where");
        assert_eq!(result.parts, vec![Suggestion::new("where", 2, 300)]);
    }
}
