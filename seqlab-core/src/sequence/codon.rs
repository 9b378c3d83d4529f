//! Codon table lookups for the standard genetic code.

use crate::constants::{CODON_LENGTH, CODON_TABLE, UNKNOWN_AMINO_ACID};

/// Converts a nucleotide character to its 2-bit table index.
///
/// Uppercase and lowercase bases are accepted. Anything else, including
/// `U` and IUPAC ambiguity codes, has no index.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::sequence::codon::base_index;
///
/// assert_eq!(base_index('A'), Some(0));
/// assert_eq!(base_index('c'), Some(1));
/// assert_eq!(base_index('G'), Some(2));
/// assert_eq!(base_index('T'), Some(3));
/// assert_eq!(base_index('N'), None);
/// ```
#[must_use]
pub const fn base_index(base: char) -> Option<usize> {
    match base.to_ascii_uppercase() {
        'A' => Some(0),
        'C' => Some(1),
        'G' => Some(2),
        'T' => Some(3),
        _ => None,
    }
}

/// Looks up a codon given as a slice of characters.
///
/// Returns [`UNKNOWN_AMINO_ACID`] when the slice is not exactly three bases
/// long or contains a non-ATGC symbol.
#[must_use]
pub fn lookup_codon(codon: &[char]) -> char {
    if codon.len() != CODON_LENGTH {
        return UNKNOWN_AMINO_ACID;
    }

    codon
        .iter()
        .try_fold(0usize, |index, &base| {
            base_index(base).map(|value| index * 4 + value)
        })
        .map_or(UNKNOWN_AMINO_ACID, |index| char::from(CODON_TABLE[index]))
}

/// Translates a single codon string to its amino-acid symbol.
///
/// Stop codons translate to `*`; malformed codons to `X`.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::sequence::codon::translate_codon;
///
/// assert_eq!(translate_codon("ATG"), 'M');
/// assert_eq!(translate_codon("tgg"), 'W');
/// assert_eq!(translate_codon("TAA"), '*');
/// assert_eq!(translate_codon("ANG"), 'X');
/// ```
#[must_use]
pub fn translate_codon(codon: &str) -> char {
    let bases: Vec<char> = codon.chars().collect();
    lookup_codon(&bases)
}
