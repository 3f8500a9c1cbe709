//! Construction-time configuration for the spelling checker.

use serde::{Deserialize, Serialize};

use crate::error::{Result, XiphosError};

/// Default expected number of dictionary words.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;
/// Default maximum edit distance for lookups.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;
/// Default length of word prefixes used for delete generation.
pub const DEFAULT_PREFIX_LENGTH: usize = 7;
/// Default minimum frequency for a word to count as a correct spelling.
pub const DEFAULT_MIN_COUNT_THRESHOLD: u64 = 1;
/// Default maximum frequency before a word leaves the searchable set.
pub const DEFAULT_MAX_COUNT_THRESHOLD: u64 = u64::MAX;
/// Default degree of favoring lower memory use over speed (0..=16).
pub const DEFAULT_COMPACT_LEVEL: u8 = 5;

/// Smallest frequency count observed in the reference corpus.
const CORPUS_MIN_COUNT: u64 = 12_714;
/// Largest frequency count observed in the reference corpus.
const CORPUS_MAX_COUNT: u64 = 23_135_851_162;

/// Where a capture-percentage threshold window sits within the corpus
/// frequency range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeShift {
    /// Window anchored at the low-frequency end of the range.
    Start,
    /// Window centered on the middle of the range.
    Middle,
    /// Window anchored at the high-frequency end of the range.
    End,
}

/// Configuration for a [`SpellChecker`](crate::checker::SpellChecker).
///
/// Individual out-of-range values fall back to their defaults; contradictory
/// combinations (min threshold above max threshold, capture fraction outside
/// `[0, 1]`) are configuration errors and fail fast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellConfig {
    /// The expected number of words in the dictionary. Not essential, but an
    /// accurate value avoids map restructuring during bulk loads.
    pub initial_capacity: usize,
    /// Maximum edit distance the delete index is built for. Lookups may not
    /// request a larger bound.
    pub max_dictionary_edit_distance: usize,
    /// The length of word prefixes used for delete generation (5..7 typical).
    /// Must be greater than `max_dictionary_edit_distance`.
    pub prefix_length: usize,
    /// Minimum cumulative frequency for a word to be considered a correct
    /// spelling.
    pub min_count_threshold: u64,
    /// Cumulative frequency above which a word is retired from the searchable
    /// set (sticky).
    pub max_count_threshold: u64,
    /// Degree of favoring lower memory use over speed
    /// (0 = fastest / most memory, 16 = slowest / least memory).
    pub compact_level: u8,
}

impl Default for SpellConfig {
    fn default() -> Self {
        SpellConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_dictionary_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            prefix_length: DEFAULT_PREFIX_LENGTH,
            min_count_threshold: DEFAULT_MIN_COUNT_THRESHOLD,
            max_count_threshold: DEFAULT_MAX_COUNT_THRESHOLD,
            compact_level: DEFAULT_COMPACT_LEVEL,
        }
    }
}

impl SpellConfig {
    /// Create a configuration with explicit frequency thresholds.
    ///
    /// Out-of-range single values are replaced with defaults; a minimum
    /// threshold above the maximum threshold is an error.
    pub fn new(
        initial_capacity: usize,
        max_dictionary_edit_distance: usize,
        prefix_length: usize,
        min_count_threshold: u64,
        max_count_threshold: u64,
        compact_level: u8,
    ) -> Result<Self> {
        if min_count_threshold > max_count_threshold {
            return Err(XiphosError::config(format!(
                "min_count_threshold ({min_count_threshold}) cannot be greater than max_count_threshold ({max_count_threshold})"
            )));
        }

        let config = SpellConfig {
            initial_capacity,
            max_dictionary_edit_distance,
            prefix_length,
            min_count_threshold,
            max_count_threshold,
            compact_level,
        };
        Ok(config.normalized())
    }

    /// Create a configuration whose threshold window captures `fraction` of
    /// the corpus frequency range, anchored per `shift`.
    ///
    /// `fraction` must lie in `[0, 1]` or construction fails.
    pub fn with_capture_range(
        initial_capacity: usize,
        max_dictionary_edit_distance: usize,
        prefix_length: usize,
        fraction: f64,
        shift: RangeShift,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(XiphosError::config(format!(
                "capture fraction must be between 0.0 and 1.0, got {fraction}"
            )));
        }

        let span = (fraction * (CORPUS_MAX_COUNT - CORPUS_MIN_COUNT) as f64).round() as u64;

        let (min_count, max_count) = match shift {
            RangeShift::Start => (CORPUS_MIN_COUNT, CORPUS_MIN_COUNT + span),
            RangeShift::Middle => {
                let mid = CORPUS_MAX_COUNT / 2;
                (
                    (mid - span / 2).saturating_sub(CORPUS_MIN_COUNT),
                    (mid + span / 2).saturating_sub(CORPUS_MIN_COUNT),
                )
            }
            RangeShift::End => (CORPUS_MAX_COUNT - span, CORPUS_MAX_COUNT),
        };

        Self::new(
            initial_capacity,
            max_dictionary_edit_distance,
            prefix_length,
            min_count,
            max_count,
            DEFAULT_COMPACT_LEVEL,
        )
    }

    /// The bit mask applied to delete hashes, derived from `compact_level`.
    ///
    /// The low two bits stay clear for the length discriminator.
    pub fn compact_mask(&self) -> u32 {
        (u32::MAX >> (3 + self.compact_level as u32)) << 2
    }

    /// Replace out-of-range single fields with their defaults.
    fn normalized(mut self) -> Self {
        if self.initial_capacity == 0 {
            self.initial_capacity = DEFAULT_INITIAL_CAPACITY;
        }
        if self.prefix_length < 1 || self.prefix_length <= self.max_dictionary_edit_distance {
            self.prefix_length = DEFAULT_PREFIX_LENGTH;
        }
        if self.compact_level > 16 {
            self.compact_level = 16;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SpellConfig::default();
        assert_eq!(config.max_dictionary_edit_distance, 2);
        assert_eq!(config.prefix_length, 7);
        assert_eq!(config.min_count_threshold, 1);
        assert_eq!(config.compact_level, 5);
    }

    #[test]
    fn test_invalid_fields_fall_back_to_defaults() {
        // Prefix length must exceed the edit distance
        let config = SpellConfig::new(100, 3, 2, 1, u64::MAX, 5).unwrap();
        assert_eq!(config.prefix_length, DEFAULT_PREFIX_LENGTH);

        let config = SpellConfig::new(0, 2, 7, 1, u64::MAX, 5).unwrap();
        assert_eq!(config.initial_capacity, DEFAULT_INITIAL_CAPACITY);

        let config = SpellConfig::new(16, 2, 7, 1, u64::MAX, 40).unwrap();
        assert_eq!(config.compact_level, 16);
    }

    #[test]
    fn test_contradictory_thresholds_fail() {
        let result = SpellConfig::new(16, 2, 7, 100, 10, 5);
        assert!(matches!(result, Err(XiphosError::Config(_))));
    }

    #[test]
    fn test_capture_fraction_bounds() {
        assert!(SpellConfig::with_capture_range(16, 2, 7, -0.1, RangeShift::Start).is_err());
        assert!(SpellConfig::with_capture_range(16, 2, 7, 1.1, RangeShift::End).is_err());

        let config = SpellConfig::with_capture_range(16, 2, 7, 0.5, RangeShift::Start).unwrap();
        assert_eq!(config.min_count_threshold, CORPUS_MIN_COUNT);
        assert!(config.max_count_threshold > config.min_count_threshold);
        assert!(config.max_count_threshold < CORPUS_MAX_COUNT);
    }

    #[test]
    fn test_compact_mask_layout() {
        let config = SpellConfig::default();
        // Low two bits reserved for the length discriminator
        assert_eq!(config.compact_mask() & 0b11, 0);

        let mut wide = SpellConfig::default();
        wide.compact_level = 0;
        let mut narrow = SpellConfig::default();
        narrow.compact_level = 16;
        assert!(wide.compact_mask() > narrow.compact_mask());
    }
}
