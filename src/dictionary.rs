//! Dictionary storage and frequency classification.
//!
//! Words live in exactly one of three frequency partitions: below the
//! acceptance threshold, accepted (searchable), or above the retirement
//! threshold. Classification is a tagged union per key, so a word can never
//! occupy two partitions at once.

use ahash::AHashMap;

/// Frequency partition for a stored word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// Seen, but cumulative count has not reached the acceptance threshold.
    BelowThreshold(u64),
    /// A correct spelling, eligible for indexing and suggestions.
    Accepted(u64),
    /// Retired: count crossed the maximum threshold. Sticky; never demoted,
    /// never indexed further.
    AboveThreshold(u64),
}

impl Partition {
    /// The stored cumulative count, regardless of partition.
    pub fn count(&self) -> u64 {
        match *self {
            Partition::BelowThreshold(c) | Partition::Accepted(c) | Partition::AboveThreshold(c) => {
                c
            }
        }
    }
}

/// Result of [`DictionaryStore::create_entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The word just became a correct spelling (brand new or promoted from
    /// below threshold). The caller is responsible for generating and staging
    /// its delete forms.
    NewAccepted,
    /// An already accepted word had its count updated.
    UpdatedAccepted,
    /// The word remains (or was newly placed) below the acceptance threshold.
    UpdatedBelowThreshold,
    /// The word entered or remains in the above-threshold partition.
    PromotedAboveThreshold,
    /// The increment had no effect.
    Rejected,
}

/// Stores canonical words and their cumulative frequencies.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    entries: AHashMap<String, Partition>,
    min_count_threshold: u64,
    max_count_threshold: u64,
    /// Number of accepted entries, maintained alongside every mutation.
    accepted_len: usize,
    /// Length in chars of the longest accepted word.
    max_length: usize,
    /// Smallest count observed when accepting a word (bookkeeping only).
    min_observed_count: u64,
    /// Largest count observed when accepting a word (bookkeeping only).
    max_observed_count: u64,
}

impl DictionaryStore {
    /// Create an empty store with the given capacity and thresholds.
    pub fn new(initial_capacity: usize, min_count_threshold: u64, max_count_threshold: u64) -> Self {
        DictionaryStore {
            entries: AHashMap::with_capacity(initial_capacity),
            min_count_threshold,
            max_count_threshold,
            accepted_len: 0,
            max_length: 0,
            min_observed_count: u64::MAX,
            max_observed_count: 0,
        }
    }

    /// Create or update an entry, adding `increment` to its cumulative count.
    ///
    /// A zero increment is rejected unless the acceptance threshold is zero,
    /// in which case a zero-count new word may still be admitted. Counts
    /// saturate instead of wrapping.
    pub fn create_entry(&mut self, word: &str, increment: u64) -> EntryOutcome {
        if increment == 0 && self.min_count_threshold > 0 {
            return EntryOutcome::Rejected;
        }

        match self.entries.get(word).copied() {
            Some(Partition::AboveThreshold(previous)) => {
                // Terminal partition: only the stored count changes.
                let count = previous.saturating_add(increment);
                self.entries
                    .insert(word.to_string(), Partition::AboveThreshold(count));
                EntryOutcome::PromotedAboveThreshold
            }
            Some(Partition::BelowThreshold(previous)) => {
                let count = previous.saturating_add(increment);
                if count >= self.min_count_threshold {
                    if count >= self.max_count_threshold {
                        self.entries
                            .insert(word.to_string(), Partition::AboveThreshold(count));
                        EntryOutcome::PromotedAboveThreshold
                    } else {
                        self.accept(word, count);
                        EntryOutcome::NewAccepted
                    }
                } else {
                    self.entries
                        .insert(word.to_string(), Partition::BelowThreshold(count));
                    EntryOutcome::UpdatedBelowThreshold
                }
            }
            Some(Partition::Accepted(previous)) => {
                let count = previous.saturating_add(increment);
                if count >= self.max_count_threshold {
                    self.accepted_len -= 1;
                    self.entries
                        .insert(word.to_string(), Partition::AboveThreshold(count));
                    EntryOutcome::PromotedAboveThreshold
                } else {
                    self.entries
                        .insert(word.to_string(), Partition::Accepted(count));
                    EntryOutcome::UpdatedAccepted
                }
            }
            None => {
                if increment < self.min_count_threshold {
                    self.entries
                        .insert(word.to_string(), Partition::BelowThreshold(increment));
                    EntryOutcome::UpdatedBelowThreshold
                } else if increment > self.max_count_threshold {
                    self.entries
                        .insert(word.to_string(), Partition::AboveThreshold(increment));
                    EntryOutcome::PromotedAboveThreshold
                } else {
                    self.accept(word, increment);
                    EntryOutcome::NewAccepted
                }
            }
        }
    }

    /// Insert into the accepted partition, updating the running extrema in the
    /// same step as the classification change.
    fn accept(&mut self, word: &str, count: u64) {
        if count < self.min_observed_count {
            self.min_observed_count = count;
        }
        if count > self.max_observed_count {
            self.max_observed_count = count;
        }
        let length = word.chars().count();
        if length > self.max_length {
            self.max_length = length;
        }
        self.accepted_len += 1;
        self.entries.insert(word.to_string(), Partition::Accepted(count));
    }

    /// The frequency of an accepted word, or `None` if the word is missing or
    /// sits in another partition.
    pub fn accepted_count(&self, word: &str) -> Option<u64> {
        match self.entries.get(word) {
            Some(Partition::Accepted(count)) => Some(*count),
            _ => None,
        }
    }

    /// Whether the word is an accepted (searchable) spelling.
    pub fn is_accepted(&self, word: &str) -> bool {
        matches!(self.entries.get(word), Some(Partition::Accepted(_)))
    }

    /// The partition a word currently occupies, if any.
    pub fn partition(&self, word: &str) -> Option<Partition> {
        self.entries.get(word).copied()
    }

    /// Iterate over accepted words and their counts.
    pub fn iter_accepted(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().filter_map(|(word, partition)| match partition {
            Partition::Accepted(count) => Some((word.as_str(), *count)),
            _ => None,
        })
    }

    /// Number of accepted words.
    pub fn accepted_word_count(&self) -> usize {
        self.accepted_len
    }

    /// Length in chars of the longest accepted word.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Smallest count observed while accepting words, if any word was accepted.
    pub fn min_observed_count(&self) -> Option<u64> {
        (self.min_observed_count != u64::MAX).then_some(self.min_observed_count)
    }

    /// Largest count observed while accepting words, if any word was accepted.
    pub fn max_observed_count(&self) -> Option<u64> {
        (self.min_observed_count != u64::MAX).then_some(self.max_observed_count)
    }

    /// Drop all below-threshold entries. Accepted words are untouched.
    pub fn purge_below_threshold(&mut self) {
        self.entries
            .retain(|_, partition| !matches!(partition, Partition::BelowThreshold(_)));
    }

    /// Drop all above-threshold entries. Accepted words are untouched.
    pub fn purge_above_threshold(&mut self) {
        self.entries
            .retain(|_, partition| !matches!(partition, Partition::AboveThreshold(_)));
    }
}
