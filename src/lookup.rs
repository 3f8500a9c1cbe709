//! Single-term fuzzy lookup over the dictionary and delete index.

use ahash::AHashSet;

use crate::config::SpellConfig;
use crate::dictionary::DictionaryStore;
use crate::distance::{DistanceAlgorithm, DistanceComparer};
use crate::error::{Result, XiphosError};
use crate::index::{DeleteIndex, delete_hash};
use crate::suggest::{Suggestion, Verbosity};

/// Answers single-term fuzzy queries against a frozen dictionary and index.
///
/// The engine borrows its inputs; the store and index must not change while
/// queries run (build first, query after).
pub struct LookupEngine<'a> {
    store: &'a DictionaryStore,
    index: &'a DeleteIndex,
    config: &'a SpellConfig,
    algorithm: DistanceAlgorithm,
}

impl<'a> LookupEngine<'a> {
    /// Create an engine over the given store, index, and configuration.
    pub fn new(
        store: &'a DictionaryStore,
        index: &'a DeleteIndex,
        config: &'a SpellConfig,
        algorithm: DistanceAlgorithm,
    ) -> Self {
        LookupEngine {
            store,
            index,
            config,
            algorithm,
        }
    }

    /// Find suggested spellings for `input`.
    ///
    /// Results are sorted by ascending edit distance, then descending
    /// frequency. `max_edit_distance` may not exceed the distance the index
    /// was built for; the deeper delete forms simply do not exist.
    pub fn lookup(
        &self,
        input: &str,
        verbosity: Verbosity,
        max_edit_distance: usize,
    ) -> Result<Vec<Suggestion>> {
        if max_edit_distance > self.config.max_dictionary_edit_distance {
            return Err(XiphosError::lookup(format!(
                "requested edit distance {max_edit_distance} exceeds the configured maximum {}",
                self.config.max_dictionary_edit_distance
            )));
        }

        let mut suggestions: Vec<Suggestion> = Vec::new();

        let input_chars: Vec<char> = input.chars().collect();
        let input_len = input_chars.len();

        // Early exit: input is too long to match anything in the dictionary
        if input_len > self.store.max_length() + max_edit_distance {
            return Ok(suggestions);
        }

        if let Some(count) = self.store.accepted_count(input) {
            suggestions.push(Suggestion::new(input, 0, count));
            // The exact match cannot be beaten unless the caller wants
            // everything
            if verbosity != Verbosity::All {
                return Ok(suggestions);
            }
        }

        let mut considered_deletes: AHashSet<String> = AHashSet::new();
        let mut considered_suggestions: AHashSet<String> = AHashSet::new();
        considered_suggestions.insert(input.to_string());

        // Running best-distance bound; fixed at the requested bound for All
        let mut current_max = max_edit_distance;

        let prefix_length = self.config.prefix_length;
        let input_prefix_len = input_len.min(prefix_length);

        let mut candidates: Vec<String> = Vec::new();
        candidates.push(input_chars[..input_prefix_len].iter().collect());

        let compact_mask = self.config.compact_mask();
        let comparer = DistanceComparer::new(input, self.algorithm);

        let mut pointer = 0;
        while pointer < candidates.len() {
            let candidate = candidates[pointer].clone();
            pointer += 1;
            let candidate_len = candidate.chars().count();
            let length_diff = input_prefix_len - candidate_len;

            if length_diff > current_max {
                // Candidates are expanded closest-first, so for Top/Closest
                // nothing further can improve on what was found
                if verbosity == Verbosity::All {
                    continue;
                }
                break;
            }

            if let Some(bucket) = self.index.get(delete_hash(&candidate, compact_mask)) {
                for suggestion in bucket {
                    if suggestion == input {
                        continue;
                    }
                    let suggestion_len = suggestion.chars().count();

                    // A suggestion shorter than the candidate, or of equal
                    // length but different content, can only share the bucket
                    // through a hash collision
                    if suggestion_len.abs_diff(input_len) > current_max
                        || suggestion_len < candidate_len
                        || (suggestion_len == candidate_len && suggestion != &candidate)
                    {
                        continue;
                    }

                    let sugg_prefix_len = suggestion_len.min(prefix_length);
                    if sugg_prefix_len > input_prefix_len
                        && sugg_prefix_len - candidate_len > current_max
                    {
                        continue;
                    }

                    let distance;
                    if candidate_len == 0 {
                        // No chars in common within the prefix: the distance
                        // is the longer length
                        let gap = input_len.max(suggestion_len);
                        if gap > current_max
                            || !considered_suggestions.insert(suggestion.clone())
                        {
                            continue;
                        }
                        distance = gap;
                    } else if suggestion_len == 1 {
                        let sugg_char = suggestion.chars().next().unwrap_or_default();
                        let gap = if input_chars.contains(&sugg_char) {
                            input_len - 1
                        } else {
                            input_len
                        };
                        if gap > current_max
                            || !considered_suggestions.insert(suggestion.clone())
                        {
                            continue;
                        }
                        distance = gap;
                    } else {
                        // Verifying that the candidate's chars appear in order
                        // within the suggestion prefix rejects collisions
                        // before the more expensive distance computation; in
                        // All mode every candidate is verified by distance
                        // anyway
                        if (verbosity != Verbosity::All
                            && !delete_in_suggestion_prefix(
                                &candidate,
                                suggestion,
                                prefix_length,
                            ))
                            || !considered_suggestions.insert(suggestion.clone())
                        {
                            continue;
                        }
                        match comparer.compare(suggestion, current_max) {
                            Some(d) => distance = d,
                            None => continue,
                        }
                    }

                    if distance <= current_max {
                        // Words retired above the threshold after indexing
                        // keep stale index entries; they are no longer
                        // searchable
                        let Some(count) = self.store.accepted_count(suggestion) else {
                            continue;
                        };
                        let item = Suggestion::new(suggestion.clone(), distance, count);

                        if !suggestions.is_empty() {
                            match verbosity {
                                Verbosity::Closest => {
                                    if distance < current_max {
                                        suggestions.clear();
                                    }
                                }
                                Verbosity::Top => {
                                    // Strictly greater frequency only; an
                                    // equal count never replaces the incumbent
                                    if distance < current_max || count > suggestions[0].count {
                                        current_max = distance;
                                        suggestions[0] = item;
                                    }
                                    continue;
                                }
                                Verbosity::All => {}
                            }
                        }

                        if verbosity != Verbosity::All {
                            current_max = distance;
                        }
                        suggestions.push(item);
                    }
                }
            }

            // Expand this candidate's own deletes while it can still lead to
            // suggestions within the bound and stays within the prefix
            if length_diff < max_edit_distance && candidate_len <= prefix_length {
                if verbosity != Verbosity::All && length_diff >= current_max {
                    continue;
                }
                let candidate_chars: Vec<char> = candidate.chars().collect();
                for skip in 0..candidate_chars.len() {
                    let delete: String = candidate_chars
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != skip)
                        .map(|(_, c)| c)
                        .collect();
                    if considered_deletes.insert(delete.clone()) {
                        candidates.push(delete);
                    }
                }
            }
        }

        if suggestions.len() > 1 {
            suggestions.sort();
        }
        Ok(suggestions)
    }
}

/// Whether every char of `delete` appears, in order, within the first
/// `prefix_length` chars of `suggestion`.
///
/// A delete form of the suggestion's prefix must be a subsequence of it;
/// anything else landed in the bucket through a hash collision.
fn delete_in_suggestion_prefix(delete: &str, suggestion: &str, prefix_length: usize) -> bool {
    let suggestion_prefix: Vec<char> = suggestion.chars().take(prefix_length).collect();
    let mut j = 0;
    for del_char in delete.chars() {
        while j < suggestion_prefix.len() && del_char != suggestion_prefix[j] {
            j += 1;
        }
        if j == suggestion_prefix.len() {
            return false;
        }
        j += 1;
    }
    true
}
