//! Sequence composition and transformation.
//!
//! Every function in this module is total: symbols outside `ATGC` are
//! ignored or passed through rather than rejected. Use [`check_alphabet`]
//! when a hard failure is wanted instead.
//!
//! ## Modules
//!
//! - [`codon`]: Standard genetic code lookups
//! - [`io`]: FASTA/FASTQ reading and writing
//!
//! ## Examples
//!
//! ```rust
//! use seqlab_core::sequence::{complement, gc_content, reverse_complement, transcribe, translate};
//!
//! assert_eq!(gc_content("ATGC"), 50.0);
//! assert_eq!(complement("ATGC"), "TACG");
//! assert_eq!(reverse_complement("ATGC"), "GCAT");
//! assert_eq!(transcribe("ATGC"), "AUGC");
//! assert_eq!(translate("ATGGCC"), "MA");
//! ```

use crate::constants::{CODON_LENGTH, START_CODON, STOP_CODONS};
use crate::types::{BaseCounts, GcClass, SeqError};

pub mod codon;
pub mod io;

pub use codon::{lookup_codon, translate_codon};
pub use io::*;

/// Returns the canonical uppercase form of a sequence.
///
/// Only ASCII letters change case, so character offsets are preserved.
#[must_use]
pub fn normalize(sequence: &str) -> String {
    sequence.to_ascii_uppercase()
}

const fn is_dna_base(symbol: char) -> bool {
    matches!(symbol.to_ascii_uppercase(), 'A' | 'T' | 'G' | 'C')
}

/// Tests whether every symbol is one of A, T, G, C (case-insensitive).
///
/// The empty sequence is valid.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::sequence::validate;
///
/// assert!(validate("ATGC"));
/// assert!(validate("atgc"));
/// assert!(validate(""));
/// assert!(!validate("ATXC"));
/// ```
#[must_use]
pub fn validate(sequence: &str) -> bool {
    sequence.chars().all(is_dna_base)
}

/// Strict counterpart of [`validate`].
///
/// # Errors
///
/// Returns [`SeqError::InvalidAlphabet`] for the first symbol outside
/// A/T/G/C, with its character offset.
pub fn check_alphabet(sequence: &str) -> Result<(), SeqError> {
    match sequence
        .chars()
        .enumerate()
        .find(|&(_, symbol)| !is_dna_base(symbol))
    {
        Some((position, symbol)) => Err(SeqError::InvalidAlphabet { symbol, position }),
        None => Ok(()),
    }
}

/// Counts bases from any character iterator, returning the counts and the
/// number of characters seen.
pub(crate) fn tally<I>(bases: I) -> (BaseCounts, usize)
where
    I: IntoIterator<Item = char>,
{
    bases
        .into_iter()
        .fold((BaseCounts::default(), 0), |(mut counts, length), base| {
            match base.to_ascii_uppercase() {
                'A' => counts.a += 1,
                'T' => counts.t += 1,
                'G' => counts.g += 1,
                'C' => counts.c += 1,
                _ => {}
            }
            (counts, length + 1)
        })
}

/// GC percentage from precomputed counts and a total length.
pub(crate) fn gc_percent(counts: &BaseCounts, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    counts.gc() as f64 / length as f64 * 100.0
}

/// Counts each of the four bases, case-insensitively.
///
/// Symbols outside A/T/G/C are skipped.
#[must_use]
pub fn count_bases(sequence: &str) -> BaseCounts {
    tally(sequence.chars()).0
}

/// GC content as a percentage of the sequence length.
///
/// Non-ATGC symbols count towards the length but not towards GC. The
/// empty sequence has a GC content of exactly `0.0`.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::sequence::gc_content;
///
/// assert_eq!(gc_content("GGCC"), 100.0);
/// assert_eq!(gc_content("ATGN"), 25.0);
/// assert_eq!(gc_content(""), 0.0);
/// ```
#[must_use]
pub fn gc_content(sequence: &str) -> f64 {
    let (counts, length) = tally(sequence.chars());
    gc_percent(&counts, length)
}

/// AT content, defined as `100 - gc_content`.
///
/// AT and GC content therefore always sum to 100, even when the sequence
/// contains symbols that are neither.
#[must_use]
pub fn at_content(sequence: &str) -> f64 {
    100.0 - gc_content(sequence)
}

/// Classifies a sequence as AT-rich, moderate or GC-rich.
#[must_use]
pub fn classify_gc(sequence: &str) -> GcClass {
    GcClass::from_percent(gc_content(sequence))
}

/// Watson-Crick partner of a base, preserving case. Other symbols map to themselves.
#[must_use]
pub const fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        'a' => 't',
        't' => 'a',
        'g' => 'c',
        'c' => 'g',
        other => other,
    }
}

/// Complements every base of the sequence.
#[must_use]
pub fn complement(sequence: &str) -> String {
    sequence.chars().map(complement_base).collect()
}

/// Complements the sequence and reverses it.
#[must_use]
pub fn reverse_complement(sequence: &str) -> String {
    sequence.chars().rev().map(complement_base).collect()
}

/// Transcribes DNA to RNA by replacing `T` with `U` (and `t` with `u`).
#[must_use]
pub fn transcribe(sequence: &str) -> String {
    sequence
        .chars()
        .map(|base| match base {
            'T' => 'U',
            't' => 'u',
            other => other,
        })
        .collect()
}

/// Tests for `ATG` anywhere in the sequence, in any frame.
#[must_use]
pub fn has_start_codon(sequence: &str) -> bool {
    normalize(sequence).contains(START_CODON)
}

/// Tests for any stop codon anywhere in the sequence, in any frame.
#[must_use]
pub fn has_stop_codon(sequence: &str) -> bool {
    let sequence = normalize(sequence);
    STOP_CODONS.iter().any(|stop| sequence.contains(stop))
}

/// Translates a DNA sequence into a protein string.
///
/// Codons are read from offset 0 without overlap; one or two trailing bases
/// that do not complete a codon are dropped. Stop codons emit `*` and
/// translation continues past them. Triplets containing non-ATGC symbols
/// become `X`.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::sequence::translate;
///
/// assert_eq!(translate("ATGGCC"), "MA");
/// assert_eq!(translate("atgtaagcc"), "M*A");
/// assert_eq!(translate("ATGGC"), "M");
/// assert_eq!(translate("ATGNNN"), "MX");
/// ```
#[must_use]
pub fn translate(sequence: &str) -> String {
    let bases: Vec<char> = normalize(sequence).chars().collect();
    bases.chunks_exact(CODON_LENGTH).map(lookup_codon).collect()
}

/// Tests whether a sequence is a complete ORF on its own: it starts with
/// `ATG`, ends with a stop codon and its length is a multiple of three.
#[must_use]
pub fn is_valid_orf(sequence: &str) -> bool {
    let sequence = normalize(sequence);
    sequence.starts_with(START_CODON)
        && STOP_CODONS.iter().any(|stop| sequence.ends_with(stop))
        && sequence.chars().count() % CODON_LENGTH == 0
}
