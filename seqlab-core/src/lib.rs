//! # Seqlab - DNA Sequence Analysis
//!
//! A library of small, total operations over DNA sequences: composition,
//! strand transforms, translation, motif and ORF scanning, sliding GC
//! windows, repeat discovery and pairwise distance, plus FASTA/FASTQ I/O.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqlab_core::{SequenceAnalyzer, config::AnalysisConfig};
//!
//! let analyzer = SequenceAnalyzer::new(AnalysisConfig::default());
//! let results = analyzer.analyze_sequence("ATGCGCTAGGGTAA", Some("gene1".to_string()))?;
//!
//! assert_eq!(results.sequence_info.gc_content, 50.0);
//! assert_eq!(results.num_orfs(), 1);
//! # Ok::<(), seqlab_core::types::SeqError>(())
//! ```
//!
//! The individual operations are also available on their own:
//!
//! ```rust
//! use seqlab_core::scanning::find_orfs;
//! use seqlab_core::sequence::{reverse_complement, translate};
//!
//! assert_eq!(reverse_complement("ATGC"), "GCAT");
//! assert_eq!(translate("ATGGCCTAA"), "MA*");
//! assert_eq!(find_orfs("CCATGAAATAGCC")[0].start, 2);
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options for analysis
//! - [`constants`]: Codon table, thresholds and defaults
//! - [`engine`]: The [`SequenceAnalyzer`] tying every operation together
//! - [`types`]: Core data types and the [`SeqError`] enum
//! - [`results`]: Per-sequence analysis and comparison results
//! - [`sequence`]: Composition, transforms, translation and file I/O
//! - [`scanning`]: Motifs, ORFs, GC windows, repeats and distance
//! - [`output`]: Report, TSV and FASTA writers
//!
//! ## Error Handling
//!
//! Most operations are total and never fail. The rest return
//! [`Result<T, SeqError>`](types::SeqError), covering:
//!
//! - Length mismatches in pairwise comparisons
//! - Non-ATGC symbols when strict validation is requested
//! - I/O errors and malformed FASTA/FASTQ records

pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod results;
pub mod scanning;
pub mod sequence;
pub mod types;

pub use engine::SequenceAnalyzer;
pub use types::SeqError;
