// =============================================================================
// Codons and reading frames
// =============================================================================

/// Length of a codon in base pairs
pub const CODON_LENGTH: usize = 3;

/// Number of forward reading frames scanned for ORFs
pub const READING_FRAMES: usize = 3;

/// The canonical start codon (methionine)
pub const START_CODON: &str = "ATG";

/// The three stop codons of the standard genetic code
pub const STOP_CODONS: [&str; 3] = ["TAA", "TAG", "TGA"];

/// Amino-acid symbol emitted for stop codons during translation
pub const STOP_SYMBOL: char = '*';

/// Placeholder emitted for triplets that are not in the codon table
pub const UNKNOWN_AMINO_ACID: char = 'X';

/// Standard genetic code indexed by `16 * b1 + 4 * b2 + b3`, with bases
/// ordered A=0, C=1, G=2, T=3.
pub const CODON_TABLE: &[u8; 64] =
    b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

// =============================================================================
// Composition
// =============================================================================

/// Wallace rule contribution of each A or T
pub const WALLACE_AT_WEIGHT: f64 = 2.0;

/// Wallace rule contribution of each G or C
pub const WALLACE_GC_WEIGHT: f64 = 4.0;

/// GC percentage above which a sequence is classified GC-rich
pub const GC_RICH_THRESHOLD: f64 = 60.0;

/// GC percentage at or above which a sequence is classified moderate
pub const GC_MODERATE_THRESHOLD: f64 = 40.0;

// =============================================================================
// Defaults
// =============================================================================

/// Default sliding window size for GC content profiles
pub const DEFAULT_WINDOW_SIZE: usize = 100;

/// Default minimum repeat length used by the CLI when `--repeats` has no value
pub const DEFAULT_REPEAT_MIN_LENGTH: usize = 3;

/// Line width used when writing FASTA sequence lines
pub const FASTA_LINE_WIDTH: usize = 60;

/// Header assigned to sequences analyzed without one
pub const DEFAULT_HEADER: &str = "Seqlab_Seq_1";
