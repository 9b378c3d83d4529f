use crate::constants::{WALLACE_AT_WEIGHT, WALLACE_GC_WEIGHT};
use crate::sequence::count_bases;

/// Wallace-rule melting temperature in degrees Celsius:
/// `2 * (A + T) + 4 * (G + C)`.
///
/// Case-insensitive. Only meaningful for short oligonucleotides; no
/// length or salt correction is applied.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::scanning::calculate_melting_temp;
///
/// assert_eq!(calculate_melting_temp("ATGC"), 12.0);
/// assert_eq!(calculate_melting_temp("gggg"), 16.0);
/// ```
#[must_use]
pub fn calculate_melting_temp(sequence: &str) -> f64 {
    let counts = count_bases(sequence);
    WALLACE_AT_WEIGHT * counts.at() as f64 + WALLACE_GC_WEIGHT * counts.gc() as f64
}
