use std::collections::BTreeMap;

use crate::types::{BaseCounts, FrameOrf, FrameSummary, GcClass, GcWindow, Mismatch, Orf};

/// Everything computed for one sequence by
/// [`SequenceAnalyzer::analyze_sequence`](crate::SequenceAnalyzer::analyze_sequence).
///
/// All string fields derived from the input (complement, RNA, protein, ORF
/// sequences) are computed on the uppercase form of the sequence.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::{SequenceAnalyzer, config::AnalysisConfig};
///
/// let analyzer = SequenceAnalyzer::new(AnalysisConfig::default());
/// let results = analyzer.analyze_sequence("ATGCGCTAGGGTAA", None)?;
///
/// assert_eq!(results.sequence_info.length, 14);
/// assert_eq!(results.protein, "MR*G");
/// assert_eq!(results.melting_temp, 42.0);
/// # Ok::<(), seqlab_core::types::SeqError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisResults {
    /// Identifier, length and headline statistics.
    pub sequence_info: SequenceInfo,

    /// The analyzed sequence, uppercased.
    pub sequence: String,

    /// Per-base counts. Non-ATGC symbols are not counted.
    pub base_counts: BaseCounts,

    /// AT percentage, always `100 - gc_content`.
    pub at_content: f64,

    /// Wallace-rule melting temperature in degrees Celsius.
    pub melting_temp: f64,

    /// Base-by-base complement.
    pub complement: String,

    /// Complement read in reverse order.
    pub reverse_complement: String,

    /// RNA transcript (`T` replaced by `U`).
    pub rna: String,

    /// Whether `ATG` occurs anywhere.
    pub has_start_codon: bool,

    /// Whether any stop codon occurs anywhere.
    pub has_stop_codon: bool,

    /// Frame-0 translation of the whole sequence.
    pub protein: String,

    /// Offsets of every `ATG`, overlapping hits included.
    pub start_positions: Vec<usize>,

    /// ORFs from the forward scan that pass the minimum length filter.
    pub orfs: Vec<OrfReport>,

    /// ORFs from the per-frame suffix scan, grouped by frame.
    pub frame_orfs: Vec<FrameOrf>,

    /// ORF count and longest ORF for each of the three frames.
    pub frame_summaries: Vec<FrameSummary>,

    /// Sliding-window GC profile.
    pub gc_windows: Vec<GcWindow>,

    /// Repeated substrings, present only when a repeat search was requested.
    pub repeats: Option<BTreeMap<String, usize>>,
}

impl AnalysisResults {
    /// Number of ORFs reported after filtering
    #[must_use]
    pub fn num_orfs(&self) -> usize {
        self.orfs.len()
    }

    /// The longest reported ORF; the earliest one wins ties.
    #[must_use]
    pub fn longest_orf(&self) -> Option<&OrfReport> {
        self.orfs.iter().reduce(|best, candidate| {
            if candidate.orf.len() > best.orf.len() {
                candidate
            } else {
                best
            }
        })
    }
}

/// Information about an analyzed sequence.
///
/// # Examples
///
/// ```rust
/// # use seqlab_core::results::SequenceInfo;
/// # use seqlab_core::types::GcClass;
/// let info = SequenceInfo {
///     header: "gene1".to_string(),
///     description: Some("sample gene".to_string()),
///     length: 14,
///     gc_content: 50.0,
///     gc_class: GcClass::Moderate,
///     is_valid: true,
/// };
///
/// println!("{}: {} bp, {:.2}% GC ({})", info.header, info.length, info.gc_content, info.gc_class);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceInfo {
    /// Sequence identifier, the first word of a FASTA header.
    pub header: String,

    /// Rest of the FASTA header line, if any.
    pub description: Option<String>,

    /// Length in characters, including any non-ATGC symbols.
    pub length: usize,

    /// GC content as a percentage (0 to 100).
    pub gc_content: f64,

    /// Coarse classification of `gc_content`.
    pub gc_class: GcClass,

    /// Whether every symbol is one of A, T, G, C.
    pub is_valid: bool,
}

/// One reported ORF with its translation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrfReport {
    /// 1-based rank in start order
    pub index: usize,
    /// Coordinates and nucleotides
    pub orf: Orf,
    /// Translation of the ORF, ending in `*`
    pub protein: String,
    /// GC percentage of the ORF nucleotides
    pub gc_content: f64,
}

/// Side-by-side comparison of two sequences.
///
/// Position-wise metrics are only available when both sequences have the
/// same length; protein translations only when both lengths are multiples
/// of three.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceComparison {
    /// Length of the first sequence
    pub left_length: usize,
    /// Length of the second sequence
    pub right_length: usize,
    /// GC percentage of the first sequence
    pub left_gc: f64,
    /// GC percentage of the second sequence
    pub right_gc: f64,

    /// Absolute GC percentage difference.
    pub gc_difference: f64,

    /// Hamming distance, `None` when lengths differ.
    pub hamming_distance: Option<usize>,

    /// Percent identical positions, `None` when lengths differ.
    pub similarity: Option<f64>,

    /// Positions that differ, empty when lengths differ.
    pub differences: Vec<Mismatch>,

    /// Frame-0 translations `(left, right)`.
    pub proteins: Option<(String, String)>,
}

impl SequenceComparison {
    /// Whether both sequences have the same length.
    #[must_use]
    pub const fn same_length(&self) -> bool {
        self.left_length == self.right_length
    }

    /// Whether both sequences were translated and encode the same protein.
    #[must_use]
    pub fn same_protein(&self) -> bool {
        self.proteins
            .as_ref()
            .is_some_and(|(left, right)| left == right)
    }
}
