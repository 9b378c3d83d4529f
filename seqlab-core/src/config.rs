use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_WINDOW_SIZE;

/// Output format options for analysis results.
///
/// # Formats
///
/// - **Report**: Human-readable summary of every analysis
/// - **TSV**: One tab-separated row per ORF
/// - **FASTA**: ORF nucleotide sequences, one record per ORF
///
/// # Examples
///
/// ```rust
/// use seqlab_core::config::{AnalysisConfig, OutputFormat};
///
/// let config = AnalysisConfig {
///     output_format: OutputFormat::Tsv,
///     ..Default::default()
/// };
/// assert_eq!("fasta".parse::<OutputFormat>(), Ok(OutputFormat::Fasta));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Sectioned plain-text report.
    ///
    /// Covers composition, content percentages, melting temperature, strand
    /// transforms, translation, ORFs, GC windows and repeats.
    #[default]
    Report,

    /// Tab-delimited ORF table with a header row.
    ///
    /// Columns: sequence id, ORF index, start, end, length, frame, GC%,
    /// protein.
    Tsv,

    /// ORF sequences as FASTA records wrapped at 60 columns.
    Fasta,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "report" => Ok(Self::Report),
            "tsv" => Ok(Self::Tsv),
            "fasta" | "fa" => Ok(Self::Fasta),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report => write!(f, "report"),
            Self::Tsv => write!(f, "tsv"),
            Self::Fasta => write!(f, "fasta"),
        }
    }
}

/// Configuration settings for sequence analysis.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use seqlab_core::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert!(!config.strict);
/// assert_eq!(config.window_size, 100);
/// ```
///
/// ## Strict validation with repeat search
///
/// ```rust
/// use seqlab_core::config::AnalysisConfig;
///
/// let config = AnalysisConfig {
///     strict: true,
///     min_orf_length: 30,
///     repeat_min_length: Some(4),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Reject sequences containing symbols outside A/T/G/C.
    ///
    /// When `false`, such symbols are ignored by composition and GC
    /// calculations, pass through the strand transforms and translate to
    /// `X`, and a warning is logged.
    ///
    /// **Default**: `false`
    pub strict: bool,

    /// Suppress progress messages.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Minimum ORF length in nucleotides, stop codon included.
    ///
    /// ORFs shorter than this are left out of the results. The smallest
    /// possible ORF is 6 nt (`ATG` plus a stop), so `0` keeps everything.
    ///
    /// **Default**: `0`
    pub min_orf_length: usize,

    /// Window size for the sliding GC content profile.
    ///
    /// Sequences shorter than the window produce no windows.
    ///
    /// **Default**: `100`
    pub window_size: usize,

    /// Minimum repeat length, or `None` to skip the repeat search.
    ///
    /// The search is quadratic in sequence length and off by default.
    ///
    /// **Default**: `None`
    pub repeat_min_length: Option<usize>,

    /// Output format used by callers of [`crate::output::write_results`].
    ///
    /// **Default**: [`OutputFormat::Report`]
    pub output_format: OutputFormat,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strict: false,
            quiet: false,
            min_orf_length: 0,
            window_size: DEFAULT_WINDOW_SIZE,
            repeat_min_length: None,
            output_format: OutputFormat::Report,
        }
    }
}
