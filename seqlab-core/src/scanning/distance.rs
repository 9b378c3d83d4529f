use crate::types::{Mismatch, SeqError};

fn paired_bases(first: &str, second: &str) -> Result<Vec<(char, char)>, SeqError> {
    let left = first.chars().count();
    let right = second.chars().count();
    if left != right {
        return Err(SeqError::LengthMismatch { left, right });
    }
    Ok(first.chars().zip(second.chars()).collect())
}

/// Number of positions at which two equal-length sequences differ.
///
/// Symbols are compared exactly, so `a` and `A` count as different.
///
/// # Errors
///
/// Returns [`SeqError::LengthMismatch`] when the lengths differ.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::scanning::hamming_distance;
///
/// assert_eq!(hamming_distance("ATGC", "AGGC")?, 1);
/// assert!(hamming_distance("ATGC", "ATG").is_err());
/// # Ok::<(), seqlab_core::types::SeqError>(())
/// ```
pub fn hamming_distance(first: &str, second: &str) -> Result<usize, SeqError> {
    Ok(paired_bases(first, second)?
        .into_iter()
        .filter(|(left, right)| left != right)
        .count())
}

/// Every position where two equal-length sequences differ, in order.
///
/// # Errors
///
/// Returns [`SeqError::LengthMismatch`] when the lengths differ.
pub fn differing_positions(first: &str, second: &str) -> Result<Vec<Mismatch>, SeqError> {
    Ok(paired_bases(first, second)?
        .into_iter()
        .enumerate()
        .filter(|(_, (left, right))| left != right)
        .map(|(position, (left, right))| Mismatch {
            position,
            left,
            right,
        })
        .collect())
}

/// Percentage of identical positions, `(1 - hamming / length) * 100`.
///
/// Two empty sequences are 100% similar.
///
/// # Errors
///
/// Returns [`SeqError::LengthMismatch`] when the lengths differ.
pub fn similarity(first: &str, second: &str) -> Result<f64, SeqError> {
    let distance = hamming_distance(first, second)?;
    let length = first.chars().count();
    if length == 0 {
        return Ok(100.0);
    }
    Ok((1.0 - distance as f64 / length as f64) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance("ATGC", "AGGC").unwrap(), 1);
        assert_eq!(hamming_distance("ATGC", "ATGC").unwrap(), 0);
        assert_eq!(hamming_distance("AAAA", "TTTT").unwrap(), 4);
        assert_eq!(hamming_distance("", "").unwrap(), 0);
    }

    #[test]
    fn test_hamming_distance_is_case_sensitive() {
        assert_eq!(hamming_distance("atgc", "ATGC").unwrap(), 4);
    }

    #[test]
    fn test_hamming_distance_length_mismatch() {
        match hamming_distance("ATGC", "ATG") {
            Err(SeqError::LengthMismatch { left, right }) => {
                assert_eq!(left, 4);
                assert_eq!(right, 3);
            }
            other => panic!("Expected LengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_differing_positions() {
        let mismatches = differing_positions("ATGCGCTAGGGTAA", "ATGCGCTAGGATAA").unwrap();
        assert_eq!(
            mismatches,
            vec![Mismatch {
                position: 10,
                left: 'G',
                right: 'A'
            }]
        );
        assert!(differing_positions("AT", "A").is_err());
    }

    #[test]
    fn test_similarity() {
        assert_eq!(similarity("ATGC", "ATCC").unwrap(), 75.0);
        assert_eq!(similarity("ATGC", "ATGC").unwrap(), 100.0);
        assert_eq!(similarity("", "").unwrap(), 100.0);
        assert!(matches!(
            similarity("ATGC", "AT"),
            Err(SeqError::LengthMismatch { .. })
        ));
    }
}
