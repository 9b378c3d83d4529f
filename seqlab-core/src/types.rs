use std::fmt;

use thiserror::Error;

use crate::constants::{CODON_LENGTH, GC_MODERATE_THRESHOLD, GC_RICH_THRESHOLD};

/// Occurrence counts of the four DNA bases.
///
/// Symbols outside `ATGC` are never counted, so [`BaseCounts::total`] may be
/// smaller than the length of the sequence the counts came from.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::sequence::count_bases;
///
/// let counts = count_bases("ATGCATGC");
/// assert_eq!((counts.a, counts.t, counts.g, counts.c), (2, 2, 2, 2));
/// assert_eq!(counts.total(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseCounts {
    /// Adenine count
    pub a: usize,
    /// Thymine count
    pub t: usize,
    /// Guanine count
    pub g: usize,
    /// Cytosine count
    pub c: usize,
}

impl BaseCounts {
    /// Sum of all four base counts
    #[must_use]
    pub const fn total(&self) -> usize {
        self.a + self.t + self.g + self.c
    }

    /// Number of G and C bases
    #[must_use]
    pub const fn gc(&self) -> usize {
        self.g + self.c
    }

    /// Number of A and T bases
    #[must_use]
    pub const fn at(&self) -> usize {
        self.a + self.t
    }

    /// Count for a single base, case-insensitive. Non-ATGC symbols yield `None`.
    #[must_use]
    pub const fn get(&self, base: char) -> Option<usize> {
        match base.to_ascii_uppercase() {
            'A' => Some(self.a),
            'T' => Some(self.t),
            'G' => Some(self.g),
            'C' => Some(self.c),
            _ => None,
        }
    }

    /// Iterate `(base, count)` pairs in A, T, G, C order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> {
        [('A', self.a), ('T', self.t), ('G', self.g), ('C', self.c)].into_iter()
    }
}

impl fmt::Display for BaseCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A={} T={} G={} C={}", self.a, self.t, self.g, self.c)
    }
}

/// Coarse GC content classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcClass {
    /// GC content below 40%
    AtRich,
    /// GC content from 40% to 60% inclusive
    Moderate,
    /// GC content above 60%
    GcRich,
}

impl GcClass {
    /// Classify a GC percentage
    #[must_use]
    pub fn from_percent(gc_percent: f64) -> Self {
        if gc_percent > GC_RICH_THRESHOLD {
            Self::GcRich
        } else if gc_percent >= GC_MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::AtRich
        }
    }
}

impl fmt::Display for GcClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtRich => write!(f, "AT-rich"),
            Self::Moderate => write!(f, "Moderate"),
            Self::GcRich => write!(f, "GC-rich"),
        }
    }
}

/// An open reading frame found by the forward scan.
///
/// `sequence` starts with `ATG`, ends with a stop codon and its length is a
/// multiple of three. Coordinates are 0-based with an exclusive `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orf {
    /// Offset of the start codon
    pub start: usize,
    /// Offset just past the stop codon
    pub end: usize,
    /// Nucleotides from start codon through stop codon (uppercase)
    pub sequence: String,
}

impl Orf {
    /// Nucleotide length of the ORF
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True only for a degenerate record with `start == end`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Reading frame (0, 1 or 2) the ORF lies in
    #[must_use]
    pub const fn frame(&self) -> usize {
        self.start % CODON_LENGTH
    }

    /// The terminating stop codon
    #[must_use]
    pub fn stop_codon(&self) -> &str {
        &self.sequence[self.sequence.len().saturating_sub(CODON_LENGTH)..]
    }
}

/// An ORF found by the per-frame scan, tagged with the frame that found it.
///
/// `frame` is the suffix offset the scan started from. It can differ from
/// [`Orf::frame`], the codon phase of the ORF itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOrf {
    /// Frame offset (0, 1 or 2)
    pub frame: usize,
    /// The ORF, with coordinates in the original sequence
    pub orf: Orf,
}

/// GC content of one sliding window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GcWindow {
    /// Offset of the first base of the window
    pub position: usize,
    /// GC percentage of the window
    pub gc_content: f64,
}

/// ORF count and longest ORF within one reading frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSummary {
    /// Frame offset (0, 1 or 2)
    pub frame: usize,
    /// Number of ORFs the frame's scan found
    pub orf_count: usize,
    /// The longest ORF; the earliest one wins ties
    pub longest: Option<Orf>,
}

/// A position where two equal-length sequences disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// 0-based offset of the differing symbols
    pub position: usize,
    /// Symbol in the first sequence
    pub left: char,
    /// Symbol in the second sequence
    pub right: char,
}

/// Error types produced by sequence analysis
#[derive(Error, Debug)]
pub enum SeqError {
    /// Two sequences that must be compared position by position differ in length
    #[error("Sequences must be same length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
    /// A symbol outside A/T/G/C was found while running in strict mode
    #[error("Invalid DNA symbol '{symbol}' at position {position}")]
    InvalidAlphabet { symbol: char, position: usize },
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing a sequence file
    #[error("Parse error: {0}")]
    ParseError(String),
}
