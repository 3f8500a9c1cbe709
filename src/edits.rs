//! Delete-form generation for the symmetric-delete index.

use std::collections::VecDeque;

use ahash::AHashSet;

/// Generate the delete forms of `word` for indexing.
///
/// Returns the word's first `prefix_length` chars plus every distinct string
/// reachable from that prefix by deleting 1..=`max_edit_distance` chars, in
/// closest-first order (fewest deletions first). The empty string is included
/// when the whole word fits within the edit bound.
///
/// Expansion runs over an explicit work queue with a visited set, so ordering
/// is deterministic and no recursion depth is involved.
pub fn generate_delete_forms(
    word: &str,
    max_edit_distance: usize,
    prefix_length: usize,
) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();

    let mut forms = Vec::new();
    let mut seen = AHashSet::new();

    let prefix: String = chars.iter().take(prefix_length).collect();

    let mut queue: VecDeque<(String, usize)> = VecDeque::new();
    if seen.insert(prefix.clone()) {
        forms.push(prefix.clone());
    }
    queue.push_back((prefix, 0));

    while let Some((form, depth)) = queue.pop_front() {
        if depth >= max_edit_distance {
            continue;
        }
        let form_chars: Vec<char> = form.chars().collect();
        // Single-char forms are kept but not deleted down to ""
        if form_chars.len() <= 1 {
            continue;
        }
        for skip in 0..form_chars.len() {
            let delete: String = form_chars
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, c)| c)
                .collect();
            if seen.insert(delete.clone()) {
                forms.push(delete.clone());
                queue.push_back((delete, depth + 1));
            }
        }
    }

    // The empty string is the deepest form of all; deleting the whole word
    // is only within bounds when the word itself fits the edit distance.
    if chars.len() <= max_edit_distance && seen.insert(String::new()) {
        forms.push(String::new());
    }

    forms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_deletes() {
        let forms = generate_delete_forms("abc", 1, 7);
        assert!(forms.contains(&"abc".to_string()));
        assert!(forms.contains(&"ab".to_string()));
        assert!(forms.contains(&"ac".to_string()));
        assert!(forms.contains(&"bc".to_string()));
        assert_eq!(forms.len(), 4);
    }

    #[test]
    fn test_depth_two_deletes() {
        let forms = generate_delete_forms("abc", 2, 7);
        // Depth 2 reaches the single chars
        assert!(forms.contains(&"a".to_string()));
        assert!(forms.contains(&"b".to_string()));
        assert!(forms.contains(&"c".to_string()));
        // Word length 3 > max distance 2, so no empty string
        assert!(!forms.contains(&String::new()));
    }

    #[test]
    fn test_empty_string_when_word_fits_bound() {
        let forms = generate_delete_forms("ab", 2, 7);
        assert!(forms.contains(&String::new()));
        assert!(forms.contains(&"ab".to_string()));
        assert!(forms.contains(&"a".to_string()));
        assert!(forms.contains(&"b".to_string()));
    }

    #[test]
    fn test_prefix_cap() {
        let forms = generate_delete_forms("abcdefgh", 1, 5);
        assert!(forms.contains(&"abcde".to_string()));
        assert!(forms.contains(&"bcde".to_string()));
        // Nothing longer than the prefix appears
        assert!(forms.iter().all(|f| f.chars().count() <= 5));
        assert!(!forms.contains(&"abcdefgh".to_string()));
    }

    #[test]
    fn test_closest_first_ordering() {
        let forms = generate_delete_forms("abcd", 2, 7);
        let depths: Vec<usize> = forms
            .iter()
            .map(|f| 4 - f.chars().count())
            .collect();
        // Deletion depth never decreases along the output
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_forms_are_distinct() {
        let forms = generate_delete_forms("aaaa", 2, 7);
        let unique: AHashSet<&String> = forms.iter().collect();
        assert_eq!(unique.len(), forms.len());
        // "aaaa" deletes collapse heavily: "aaaa", "aaa", "aa"
        assert_eq!(forms.len(), 3);
    }

    #[test]
    fn test_zero_distance_keeps_prefix_only() {
        let forms = generate_delete_forms("abc", 0, 7);
        assert_eq!(forms, vec!["abc".to_string()]);
    }
}
