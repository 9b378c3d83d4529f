//! Output formatting for analysis results.
//!
//! This module turns [`AnalysisResults`] into text for people and for
//! downstream tools.
//!
//! ## Supported Formats
//!
//! - **Report**: Sectioned human-readable summary
//! - **TSV**: Tab-separated ORF table
//! - **FASTA**: ORF nucleotide sequences
//!
//! ## Examples
//!
//! ### Write a TSV table for several sequences
//!
//! ```rust,no_run
//! use seqlab_core::{SequenceAnalyzer, config::{AnalysisConfig, OutputFormat}};
//! use seqlab_core::output::{write_header, write_results};
//! use std::fs::File;
//!
//! let analyzer = SequenceAnalyzer::new(AnalysisConfig::default());
//! let results = analyzer.analyze_fasta_file("genes.fasta")?;
//!
//! let mut output = File::create("orfs.tsv")?;
//! write_header(&mut output, OutputFormat::Tsv)?;
//! for result in &results {
//!     write_results(&mut output, result, OutputFormat::Tsv)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Write a report to stdout
//!
//! ```rust
//! use seqlab_core::{SequenceAnalyzer, config::{AnalysisConfig, OutputFormat}};
//! use seqlab_core::output::write_results;
//! use std::io::stdout;
//!
//! let analyzer = SequenceAnalyzer::new(AnalysisConfig::default());
//! let results = analyzer.analyze_sequence("ATGCGCTAGGGTAA", None)?;
//!
//! write_results(&mut stdout(), &results, OutputFormat::Report)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{SeqError, config::OutputFormat, results::AnalysisResults};
use std::io::Write;

mod formats {
    pub mod fasta;
    pub mod report;
    pub mod tsv;
}

use formats::{
    fasta::write_fasta_format,
    report::write_report_format,
    tsv::{write_tsv_format, write_tsv_header},
};

pub use formats::report::write_comparison_report;

/// Writes the once-per-file preamble of a format.
///
/// Only TSV has one (its column header row); the other formats write
/// nothing. Call it before the first [`write_results`].
///
/// # Errors
///
/// Returns [`SeqError::IoError`] if writing fails.
pub fn write_header<W: Write>(writer: &mut W, format: OutputFormat) -> Result<(), SeqError> {
    match format {
        OutputFormat::Tsv => write_tsv_header(writer),
        OutputFormat::Report | OutputFormat::Fasta => Ok(()),
    }
}

/// Writes analysis results for one sequence in the specified format.
///
/// This is the main entry point for output formatting. It delegates to
/// format-specific writers based on the requested output format.
///
/// # Arguments
///
/// * `writer` - Output writer (file, stdout, buffer, etc.)
/// * `results` - Analysis results to write
/// * `format` - Desired output format
///
/// # Errors
///
/// Returns [`SeqError::IoError`] if writing fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &AnalysisResults,
    format: OutputFormat,
) -> Result<(), SeqError> {
    match format {
        OutputFormat::Report => write_report_format(writer, results),
        OutputFormat::Tsv => write_tsv_format(writer, results),
        OutputFormat::Fasta => write_fasta_format(writer, results),
    }
}
