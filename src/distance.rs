//! Bounded edit distance calculation.
//!
//! Both algorithms are band-limited: only cells within `max_distance` of the
//! alignment diagonal are computed, and a row whose minimum already exceeds
//! the bound aborts the whole computation.

/// Selects the distance metric used for exact verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceAlgorithm {
    /// Substitution/insertion/deletion, cost 1 each.
    #[default]
    Levenshtein,
    /// Levenshtein plus adjacent transposition at cost 1 (restricted, no
    /// substring is edited twice).
    Damerau,
}

/// Bounded Levenshtein distance.
///
/// Returns `None` when the distance exceeds `max_distance`.
pub fn bounded_levenshtein(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    banded_distance(&a, &b, max_distance, false)
}

/// Bounded restricted Damerau-Levenshtein distance.
///
/// Returns `None` when the distance exceeds `max_distance`.
pub fn bounded_damerau_levenshtein(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    banded_distance(&a, &b, max_distance, true)
}

/// Reusable comparer that caches the base string's chars, for comparing one
/// input against many candidates.
#[derive(Debug, Clone)]
pub struct DistanceComparer {
    base: Vec<char>,
    algorithm: DistanceAlgorithm,
}

impl DistanceComparer {
    /// Create a comparer for `base` using the given algorithm.
    pub fn new(base: &str, algorithm: DistanceAlgorithm) -> Self {
        DistanceComparer {
            base: base.chars().collect(),
            algorithm,
        }
    }

    /// Distance between the base string and `other`, or `None` if it exceeds
    /// `max_distance`.
    pub fn compare(&self, other: &str, max_distance: usize) -> Option<usize> {
        let other: Vec<char> = other.chars().collect();
        banded_distance(
            &self.base,
            &other,
            max_distance,
            self.algorithm == DistanceAlgorithm::Damerau,
        )
    }
}

fn banded_distance(
    a: &[char],
    b: &[char],
    max_distance: usize,
    transpositions: bool,
) -> Option<usize> {
    if a == b {
        return Some(0);
    }
    // Keep the shorter string on the row axis
    let (a, b) = if a.len() > b.len() { (b, a) } else { (a, b) };
    if b.len() - a.len() > max_distance {
        return None;
    }
    if a.is_empty() {
        return (b.len() <= max_distance).then_some(b.len());
    }

    // Cells outside the band hold this sentinel; anything > max_distance is
    // equivalent
    let out_of_band = max_distance + 1;

    let mut prev2 = vec![out_of_band; b.len() + 1];
    let mut prev: Vec<usize> = (0..=b.len())
        .map(|j| if j <= max_distance { j } else { out_of_band })
        .collect();

    for i in 1..=a.len() {
        let mut curr = vec![out_of_band; b.len() + 1];
        if i <= max_distance {
            curr[0] = i;
        }

        let low = i.saturating_sub(max_distance).max(1);
        let high = (i + max_distance).min(b.len());
        let mut row_min = out_of_band;

        for j in low..=high {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut cell = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);

            if transpositions
                && i > 1
                && j > 1
                && a[i - 1] == b[j - 2]
                && a[i - 2] == b[j - 1]
            {
                cell = cell.min(prev2[j - 2] + 1);
            }

            let cell = cell.min(out_of_band);
            if cell < row_min {
                row_min = cell;
            }
            curr[j] = cell;
        }

        if row_min > max_distance {
            return None;
        }

        prev2 = prev;
        prev = curr;
    }

    (prev[b.len()] <= max_distance).then_some(prev[b.len()])
}
