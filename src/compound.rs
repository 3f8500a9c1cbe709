//! Multi-word phrase correction.
//!
//! Corrects a phrase by walking its terms left to right, weighing three moves
//! per term: correct it in place, merge it with the previous term (wrongly
//! split input), or split it in two (wrongly joined input).

use crate::analysis::parse_words;
use crate::config::SpellConfig;
use crate::dictionary::DictionaryStore;
use crate::distance::{DistanceAlgorithm, bounded_damerau_levenshtein};
use crate::error::Result;
use crate::index::DeleteIndex;
use crate::lookup::LookupEngine;
use crate::suggest::{Suggestion, Verbosity};

use serde::{Deserialize, Serialize};

/// A corrected phrase plus the per-term choices that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundSuggestion {
    /// The reconstructed phrase with its aggregate distance and frequency.
    pub suggestion: Suggestion,
    /// One chosen suggestion per output slot, in phrase order.
    pub parts: Vec<Suggestion>,
}

/// Resolves multi-word input against the single-term lookup engine.
pub struct CompoundResolver<'a> {
    engine: LookupEngine<'a>,
    config: &'a SpellConfig,
}

impl<'a> CompoundResolver<'a> {
    /// Create a resolver over the given store, index, and configuration.
    pub fn new(
        store: &'a DictionaryStore,
        index: &'a DeleteIndex,
        config: &'a SpellConfig,
    ) -> Self {
        CompoundResolver {
            engine: LookupEngine::new(store, index, config, DistanceAlgorithm::default()),
            config,
        }
    }

    /// Correct the phrase `input`.
    ///
    /// Terms are segmented and case-folded first, so the result compares
    /// against the folded input. The aggregate frequency is the minimum over
    /// the chosen parts. Phrase-level distances always count transpositions
    /// as single edits, whatever the single-term lookups use.
    pub fn lookup_compound(
        &self,
        input: &str,
        max_edit_distance: usize,
    ) -> Result<CompoundSuggestion> {
        let terms = parse_words(input);
        if terms.is_empty() {
            return Ok(CompoundSuggestion {
                suggestion: Suggestion::new("", 0, 0),
                parts: Vec::new(),
            });
        }

        let mut parts: Vec<Suggestion> = Vec::with_capacity(terms.len());
        let mut last_combi = false;

        for (i, term) in terms.iter().enumerate() {
            let suggestions = self
                .engine
                .lookup(term, Verbosity::Top, max_edit_distance)?;

            // Merge check runs before anything else, but never chains: three
            // raw terms cannot collapse into one output slot
            if i > 0 && !last_combi {
                let merged_input = format!("{}{}", terms[i - 1], term);
                let combi = self
                    .engine
                    .lookup(&merged_input, Verbosity::Top, max_edit_distance)?;
                if let Some(combi_best) = combi.first() {
                    let previous = &parts[parts.len() - 1];
                    // When the term alone has no suggestion, stand in a
                    // just-over-bound placeholder so the merge wins easily
                    let (best_distance, _) = match suggestions.first() {
                        Some(best) => (best.distance, best.count),
                        None => (max_edit_distance + 1, 0),
                    };
                    let separate_distance = previous.distance + best_distance;
                    if combi_best.distance + 1 < separate_distance {
                        let mut merged = combi_best.clone();
                        merged.distance += 1;
                        let last = parts.len() - 1;
                        parts[last] = merged;
                        last_combi = true;
                        continue;
                    }
                }
            }
            last_combi = false;

            // Exact matches and single chars are taken as-is, never split
            if let Some(best) = suggestions.first()
                && (best.distance == 0 || term.chars().count() == 1)
            {
                parts.push(best.clone());
                continue;
            }

            parts.push(self.resolve_term(term, &suggestions, max_edit_distance)?);
        }

        let phrase = parts
            .iter()
            .map(|part| part.term.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let count = parts.iter().map(|part| part.count).min().unwrap_or(0);
        let bound = self.config.max_dictionary_edit_distance;
        let distance = bounded_damerau_levenshtein(&input.to_lowercase(), &phrase, bound)
            .unwrap_or(bound + 1);

        Ok(CompoundSuggestion {
            suggestion: Suggestion::new(phrase, distance, count),
            parts,
        })
    }

    /// Pick the best correction for a single term: its own top suggestion or
    /// a binary split, whichever comes out closer. First-found wins on ties.
    fn resolve_term(
        &self,
        term: &str,
        suggestions: &[Suggestion],
        max_edit_distance: usize,
    ) -> Result<Suggestion> {
        let mut candidates: Vec<Suggestion> = Vec::new();
        if let Some(best) = suggestions.first() {
            candidates.push(best.clone());
        }

        let chars: Vec<char> = term.chars().collect();
        for j in 1..chars.len() {
            let head: String = chars[..j].iter().collect();
            let tail: String = chars[j..].iter().collect();

            let head_suggestions = self
                .engine
                .lookup(&head, Verbosity::Top, max_edit_distance)?;
            let Some(head_best) = head_suggestions.first() else {
                continue;
            };
            // A half that corrects to the same word as the whole term adds
            // nothing over the whole-term candidate
            if suggestions
                .first()
                .is_some_and(|best| best.term == head_best.term)
            {
                continue;
            }

            let tail_suggestions = self
                .engine
                .lookup(&tail, Verbosity::Top, max_edit_distance)?;
            let Some(tail_best) = tail_suggestions.first() else {
                continue;
            };
            if suggestions
                .first()
                .is_some_and(|best| best.term == tail_best.term)
            {
                continue;
            }

            let split_term = format!("{} {}", head_best.term, tail_best.term);
            let Some(split_distance) =
                bounded_damerau_levenshtein(term, &split_term, max_edit_distance)
            else {
                continue;
            };
            let split_count = head_best.count.min(tail_best.count);
            let done = split_distance == 1;
            candidates.push(Suggestion::new(split_term, split_distance, split_count));
            // A single inserted space is the best any split can do
            if done {
                break;
            }
        }

        if candidates.is_empty() {
            // Kept as-is; the frequency marks it apart from genuine
            // zero-frequency hits
            return Ok(Suggestion::new(
                term,
                0,
                (max_edit_distance + 1) as u64,
            ));
        }

        candidates.sort();
        Ok(candidates.remove(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edits::generate_delete_forms;
    use crate::index::delete_hash;

    fn build_fixture(
        words: &[(&str, u64)],
        config: &SpellConfig,
    ) -> (DictionaryStore, DeleteIndex) {
        let mut store = DictionaryStore::new(
            config.initial_capacity,
            config.min_count_threshold,
            config.max_count_threshold,
        );
        let mut index = DeleteIndex::with_capacity(words.len() * 8);
        for &(word, count) in words {
            store.create_entry(word, count);
        }
        for (word, _) in store.iter_accepted() {
            for form in generate_delete_forms(
                word,
                config.max_dictionary_edit_distance,
                config.prefix_length,
            ) {
                index.insert(delete_hash(&form, config.compact_mask()), word.to_string());
            }
        }
        (store, index)
    }

    #[test]
    fn test_merges_wrongly_split_word() {
        let config = SpellConfig::default();
        let (store, index) = build_fixture(&[("there", 80)], &config);
        let resolver = CompoundResolver::new(&store, &index, &config);

        let result = resolver.lookup_compound("ther e", 2).unwrap();
        assert_eq!(result.suggestion, Suggestion::new("there", 1, 80));
        assert_eq!(result.parts.len(), 1);
        assert_eq!(result.parts[0].term, "there");
    }

    #[test]
    fn test_splits_wrongly_joined_words() {
        let config = SpellConfig::default();
        let (store, index) = build_fixture(&[("hello", 50), ("world", 60)], &config);
        let resolver = CompoundResolver::new(&store, &index, &config);

        let result = resolver.lookup_compound("helloworld", 2).unwrap();
        assert_eq!(result.suggestion.term, "hello world");
        assert_eq!(result.suggestion.distance, 1);
        assert_eq!(result.suggestion.count, 50);
    }

    #[test]
    fn test_exact_terms_stay_separate() {
        let config = SpellConfig::default();
        let (store, index) =
            build_fixture(&[("in", 100), ("to", 80), ("into", 120)], &config);
        let resolver = CompoundResolver::new(&store, &index, &config);

        let result = resolver.lookup_compound("in to", 2).unwrap();
        assert_eq!(result.suggestion.term, "in to");
        assert_eq!(result.suggestion.distance, 0);
        assert_eq!(result.suggestion.count, 80);
        assert_eq!(result.parts.len(), 2);
    }

    #[test]
    fn test_corrects_each_term_independently() {
        let config = SpellConfig::default();
        let (store, index) = build_fixture(&[("quick", 50), ("brown", 40)], &config);
        let resolver = CompoundResolver::new(&store, &index, &config);

        let result = resolver.lookup_compound("quikc borwn", 2).unwrap();
        assert_eq!(result.suggestion.term, "quick brown");
        assert_eq!(result.suggestion.count, 40);
        assert_eq!(
            result.parts.iter().map(|p| p.term.as_str()).collect::<Vec<_>>(),
            vec!["quick", "brown"]
        );
    }

    #[test]
    fn test_unknown_term_kept_as_is() {
        let config = SpellConfig::default();
        let (store, index) = build_fixture(&[("hello", 50)], &config);
        let resolver = CompoundResolver::new(&store, &index, &config);

        let result = resolver.lookup_compound("hello xyzqw", 2).unwrap();
        assert_eq!(result.suggestion.term, "hello xyzqw");
        // The kept-as-is sentinel caps the aggregate frequency
        assert_eq!(result.suggestion.count, 3);
        assert_eq!(result.parts[1], Suggestion::new("xyzqw", 0, 3));
    }

    #[test]
    fn test_no_merge_chaining() {
        // Three fragments of one word merge at most pairwise
        let config = SpellConfig::default();
        let (store, index) = build_fixture(&[("together", 90), ("tog", 5)], &config);
        let resolver = CompoundResolver::new(&store, &index, &config);

        let result = resolver.lookup_compound("toget her", 2).unwrap();
        assert_eq!(result.suggestion.term, "together");
        assert_eq!(result.parts.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let config = SpellConfig::default();
        let (store, index) = build_fixture(&[("hello", 50)], &config);
        let resolver = CompoundResolver::new(&store, &index, &config);

        let result = resolver.lookup_compound("  ", 2).unwrap();
        assert_eq!(result.suggestion, Suggestion::new("", 0, 0));
        assert!(result.parts.is_empty());
    }

    #[test]
    fn test_input_case_folded() {
        let config = SpellConfig::default();
        let (store, index) = build_fixture(&[("there", 80)], &config);
        let resolver = CompoundResolver::new(&store, &index, &config);

        let result = resolver.lookup_compound("Ther E", 2).unwrap();
        assert_eq!(result.suggestion.term, "there");
        assert_eq!(result.suggestion.distance, 1);
    }
}
