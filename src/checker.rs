//! The top-level spell checker facade.
//!
//! Owns the dictionary store, the delete index, and the staging buffer, and
//! wires them together behind a small API: feed it words (individually, from
//! a frequency file, or from a text corpus), commit, then query.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::parse_words;
use crate::compound::{CompoundResolver, CompoundSuggestion};
use crate::config::SpellConfig;
use crate::dictionary::{DictionaryStore, EntryOutcome};
use crate::edits::generate_delete_forms;
use crate::error::Result;
use crate::index::{DeleteIndex, StagingBuffer, delete_hash};
use crate::lookup::LookupEngine;
use crate::suggest::{Suggestion, Verbosity};

/// Snapshot of dictionary and index size counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellStats {
    /// Number of searchable words.
    pub word_count: usize,
    /// Length in chars of the longest searchable word.
    pub max_word_length: usize,
    /// Distinct delete-form hash buckets in the index.
    pub bucket_count: usize,
    /// Total (hash, word) associations in the index.
    pub association_count: usize,
    /// Associations staged but not yet committed.
    pub staged_count: usize,
    /// Smallest frequency seen among searchable words.
    pub min_count: Option<u64>,
    /// Largest frequency seen among searchable words.
    pub max_count: Option<u64>,
}

/// A symmetric-delete spelling corrector.
///
/// # Examples
///
/// ```
/// use xiphos::checker::SpellChecker;
/// use xiphos::suggest::Verbosity;
///
/// let mut checker = SpellChecker::default();
/// checker.create_entry("example", 100);
/// checker.commit_staged();
///
/// let suggestions = checker.lookup("exampel", Verbosity::Top, 2).unwrap();
/// assert_eq!(suggestions[0].term, "example");
/// ```
pub struct SpellChecker {
    config: SpellConfig,
    store: DictionaryStore,
    index: DeleteIndex,
    staging: StagingBuffer,
}

impl Default for SpellChecker {
    fn default() -> Self {
        SpellChecker::new(SpellConfig::default())
    }
}

impl SpellChecker {
    /// Create a checker with the given configuration.
    pub fn new(config: SpellConfig) -> Self {
        let store = DictionaryStore::new(
            config.initial_capacity,
            config.min_count_threshold,
            config.max_count_threshold,
        );
        let index = DeleteIndex::with_capacity(config.initial_capacity);
        SpellChecker {
            config,
            store,
            index,
            staging: StagingBuffer::default(),
        }
    }

    /// The configuration this checker was built with.
    pub fn config(&self) -> &SpellConfig {
        &self.config
    }

    /// Number of searchable words.
    pub fn word_count(&self) -> usize {
        self.store.accepted_word_count()
    }

    /// Add `increment` observations of `word`.
    ///
    /// The first time a word becomes searchable its delete forms are staged;
    /// call [`commit_staged`](SpellChecker::commit_staged) before querying.
    pub fn create_entry(&mut self, word: &str, increment: u64) -> EntryOutcome {
        let outcome = self.store.create_entry(word, increment);
        if outcome == EntryOutcome::NewAccepted {
            for form in generate_delete_forms(
                word,
                self.config.max_dictionary_edit_distance,
                self.config.prefix_length,
            ) {
                self.staging
                    .stage(delete_hash(&form, self.config.compact_mask()), word.to_string());
            }
        }
        outcome
    }

    /// Merge all staged delete-form associations into the index.
    pub fn commit_staged(&mut self) {
        self.staging.commit(&mut self.index);
    }

    /// Load a frequency dictionary file of whitespace-separated columns.
    ///
    /// `term_index` and `count_index` pick the word and frequency columns.
    /// Returns `Ok(false)` when the file does not exist, leaving the current
    /// dictionary untouched. Lines without enough columns, and lines whose
    /// count column does not parse, are skipped.
    pub fn load_dictionary<P: AsRef<Path>>(
        &mut self,
        path: P,
        term_index: usize,
        count_index: usize,
    ) -> Result<bool> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(false);
        }
        let reader = BufReader::new(File::open(path)?);
        self.load_dictionary_from_reader(reader, term_index, count_index)
    }

    /// Load a frequency dictionary from any buffered reader.
    pub fn load_dictionary_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        term_index: usize,
        count_index: usize,
    ) -> Result<bool> {
        for line in reader.lines() {
            let line = line?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() <= term_index.max(count_index) {
                continue;
            }
            let Ok(count) = fields[count_index].parse::<u64>() else {
                continue;
            };
            self.create_entry(fields[term_index], count);
        }
        self.commit_staged();
        // Partial and retired entries have no further use once a load is done
        self.store.purge_below_threshold();
        self.store.purge_above_threshold();
        Ok(true)
    }

    /// Build a dictionary from a plain text corpus, one observation per
    /// token occurrence.
    ///
    /// Returns `Ok(false)` when the file does not exist.
    pub fn create_dictionary<P: AsRef<Path>>(&mut self, path: P) -> Result<bool> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(false);
        }
        let reader = BufReader::new(File::open(path)?);
        self.create_dictionary_from_reader(reader)
    }

    /// Build a dictionary from corpus text on any buffered reader.
    pub fn create_dictionary_from_reader<R: BufRead>(&mut self, reader: R) -> Result<bool> {
        for line in reader.lines() {
            let line = line?;
            for word in parse_words(&line) {
                self.create_entry(&word, 1);
            }
        }
        self.commit_staged();
        Ok(true)
    }

    /// Drop all words still below the acceptance threshold.
    pub fn purge_below_threshold(&mut self) {
        self.store.purge_below_threshold();
    }

    /// Drop all words retired above the frequency ceiling.
    pub fn purge_above_threshold(&mut self) {
        self.store.purge_above_threshold();
    }

    /// Find suggested spellings for a single word.
    pub fn lookup(
        &self,
        input: &str,
        verbosity: Verbosity,
        max_edit_distance: usize,
    ) -> Result<Vec<Suggestion>> {
        let engine = LookupEngine::new(
            &self.store,
            &self.index,
            &self.config,
            Default::default(),
        );
        engine.lookup(input, verbosity, max_edit_distance)
    }

    /// Correct a multi-word phrase.
    pub fn lookup_compound(
        &self,
        input: &str,
        max_edit_distance: usize,
    ) -> Result<CompoundSuggestion> {
        let resolver = CompoundResolver::new(&self.store, &self.index, &self.config);
        resolver.lookup_compound(input, max_edit_distance)
    }

    /// Current dictionary and index size counters.
    pub fn stats(&self) -> SpellStats {
        SpellStats {
            word_count: self.store.accepted_word_count(),
            max_word_length: self.store.max_length(),
            bucket_count: self.index.bucket_count(),
            association_count: self.index.association_count(),
            staged_count: self.staging.len(),
            min_count: self.store.min_observed_count(),
            max_count: self.store.max_observed_count(),
        }
    }
}
