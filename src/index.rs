//! The symmetric-delete index and its bulk-load staging buffer.

use ahash::AHashMap;

/// Hash a delete form into its index key.
///
/// A 32-bit rolling multiplicative hash over the chars, masked down by the
/// configured compactness mask, with the form's length (saturated at 3) OR'd
/// into the low bits so collisions across different lengths stay cheap to
/// tell apart.
pub fn delete_hash(form: &str, compact_mask: u32) -> u32 {
    let mut length = 0u32;
    let mut hash: u32 = 2_166_136_261;
    for c in form.chars() {
        hash ^= c as u32;
        hash = hash.wrapping_mul(16_777_619);
        length += 1;
    }

    (hash & compact_mask) | length.min(3)
}

/// Maps hashed delete forms to the accepted words that produced them.
///
/// Values keep the full originating words, not identifiers: lookup needs the
/// original string to filter out hash collisions.
#[derive(Debug, Clone, Default)]
pub struct DeleteIndex {
    entries: AHashMap<u32, Vec<String>>,
}

impl DeleteIndex {
    /// Create an empty index sized for the expected number of entries.
    pub fn with_capacity(capacity: usize) -> Self {
        DeleteIndex {
            entries: AHashMap::with_capacity(capacity),
        }
    }

    /// The words whose delete forms hashed to `hash`, if any.
    pub fn get(&self, hash: u32) -> Option<&[String]> {
        self.entries.get(&hash).map(|words| words.as_slice())
    }

    /// Associate `word` with `hash`, growing the per-hash list on collision.
    pub fn insert(&mut self, hash: u32, word: String) {
        self.entries.entry(hash).or_default().push(word);
    }

    /// Number of distinct hash buckets.
    pub fn bucket_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of (hash, word) associations.
    pub fn association_count(&self) -> usize {
        self.entries.values().map(|words| words.len()).sum()
    }

    /// Whether the index holds no associations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulates pending (hash, word) associations during bulk loads.
///
/// Staging keeps entry creation O(1) while counts are still moving; a single
/// [`commit`](StagingBuffer::commit) folds everything into the index
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct StagingBuffer {
    pending: Vec<(u32, String)>,
}

impl StagingBuffer {
    /// Create a staging buffer sized for an expected number of associations.
    pub fn with_capacity(capacity: usize) -> Self {
        StagingBuffer {
            pending: Vec::with_capacity(capacity),
        }
    }

    /// Append a pending association without touching the index.
    pub fn stage(&mut self, hash: u32, word: String) {
        self.pending.push((hash, word));
    }

    /// Number of staged associations.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Merge all pending associations into `index` and clear the buffer.
    pub fn commit(&mut self, index: &mut DeleteIndex) {
        for (hash, word) in self.pending.drain(..) {
            index.insert(hash, word);
        }
    }
}
