/// Find every offset where `motif` occurs in `sequence`.
///
/// After a hit at position `p` the search resumes at `p + 1`, so
/// overlapping occurrences are all reported. Matching is case-sensitive;
/// pass uppercased sequence and motif for meaningful results. An empty
/// motif matches at every offset from `0` through the sequence length.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::scanning::find_motif;
///
/// assert_eq!(find_motif("ATGATGATG", "ATG"), vec![0, 3, 6]);
/// assert_eq!(find_motif("AAAA", "AA"), vec![0, 1, 2]);
/// assert!(find_motif("ATG", "atg").is_empty());
/// ```
#[must_use]
pub fn find_motif(sequence: &str, motif: &str) -> Vec<usize> {
    let bases: Vec<char> = sequence.chars().collect();
    let pattern: Vec<char> = motif.chars().collect();
    motif_positions(&bases, &pattern)
}

pub(crate) fn motif_positions(bases: &[char], pattern: &[char]) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..=bases.len()).collect();
    }

    bases
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(position, _)| position)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_motif_basic() {
        assert_eq!(find_motif("ATGATGATG", "ATG"), vec![0, 3, 6]);
        assert_eq!(find_motif("ATGCATGATG", "ATG"), vec![0, 4, 7]);
    }

    #[test]
    fn test_find_motif_reports_overlaps() {
        assert_eq!(find_motif("AAAAA", "AAA"), vec![0, 1, 2]);
        assert_eq!(find_motif("ATATAT", "ATA"), vec![0, 2]);
    }

    #[test]
    fn test_find_motif_no_match() {
        assert!(find_motif("GGGG", "ATG").is_empty());
        assert!(find_motif("AT", "ATG").is_empty());
        assert!(find_motif("", "A").is_empty());
    }

    #[test]
    fn test_find_motif_is_case_sensitive() {
        assert_eq!(find_motif("atgATG", "ATG"), vec![3]);
    }

    #[test]
    fn test_find_motif_empty_motif() {
        assert_eq!(find_motif("ACG", ""), vec![0, 1, 2, 3]);
        assert_eq!(find_motif("", ""), vec![0]);
    }
}
