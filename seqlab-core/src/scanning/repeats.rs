use std::collections::{BTreeMap, HashMap};

use crate::sequence::normalize;

/// Substrings that occur more than once, with their occurrence counts.
///
/// The input is uppercased. Every substring whose length lies in
/// `min_length..=len / 2` is a candidate, and its count is the number of
/// non-overlapping occurrences in the whole sequence (so `AA` occurs twice
/// in `AAAA`, not three times). Only candidates with a count above one are
/// kept.
///
/// A `min_length` of zero admits the empty substring, which occurs
/// `len + 1` times (once at every boundary) and is reported whenever the
/// sequence is non-empty.
///
/// Each distinct candidate is counted once; the total cost is still
/// quadratic in the sequence length, so keep inputs short.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::scanning::find_repeats;
///
/// let repeats = find_repeats("atgatg", 3);
/// assert_eq!(repeats.len(), 1);
/// assert_eq!(repeats["ATG"], 2);
/// ```
#[must_use]
pub fn find_repeats(sequence: &str, min_length: usize) -> BTreeMap<String, usize> {
    let normalized = normalize(sequence);
    let bases: Vec<char> = normalized.chars().collect();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for length in min_length..=bases.len() / 2 {
        let candidates: Vec<String> = if length == 0 {
            vec![String::new()]
        } else {
            bases
                .windows(length)
                .map(|window| window.iter().collect())
                .collect()
        };
        for candidate in candidates {
            if !counts.contains_key(&candidate) {
                let occurrences = normalized.matches(candidate.as_str()).count();
                counts.insert(candidate, occurrences);
            }
        }
    }

    counts
        .into_iter()
        .filter(|&(_, occurrences)| occurrences > 1)
        .collect()
}
