use std::path::Path;

use log::{debug, info, warn};

use crate::config::AnalysisConfig;
use crate::constants::{CODON_LENGTH, DEFAULT_HEADER, START_CODON};
use crate::results::{AnalysisResults, OrfReport, SequenceComparison, SequenceInfo};
use crate::scanning::{
    calculate_melting_temp, differing_positions, find_motif, find_orfs_all_frames,
    find_orfs_with_min_length, find_repeats, gc_content_window, hamming_distance,
    longest_orf_per_frame, similarity,
};
use crate::sequence::{
    FastaRecord, check_alphabet, complement, count_bases, gc_content, has_start_codon,
    has_stop_codon, normalize, read_fasta, reverse_complement, transcribe, translate, validate,
};
use crate::types::{GcClass, SeqError};

/// High-level sequence analyzer.
///
/// Runs every composition, transformation and scanning operation over a
/// sequence and collects the outcome into [`AnalysisResults`]. The
/// analyzer holds no state besides its configuration, so one instance can
/// be reused for any number of sequences.
///
/// # Alphabet handling
///
/// By default symbols outside A/T/G/C are tolerated: they are skipped by
/// base counts, count towards length in GC percentages, pass through the
/// strand transforms and translate to `X`. A warning is logged. With
/// [`AnalysisConfig::strict`] set, the first such symbol fails the analysis
/// with [`SeqError::InvalidAlphabet`].
///
/// # Examples
///
/// ## Analyze a sequence string
///
/// ```rust
/// use seqlab_core::{SequenceAnalyzer, config::AnalysisConfig};
///
/// let analyzer = SequenceAnalyzer::new(AnalysisConfig::default());
/// let results = analyzer.analyze_sequence("ATGCGCTAGGGTAA", Some("gene1".to_string()))?;
///
/// assert_eq!(results.sequence_info.header, "gene1");
/// assert_eq!(results.num_orfs(), 1);
/// assert_eq!(results.orfs[0].protein, "MR*");
/// # Ok::<(), seqlab_core::types::SeqError>(())
/// ```
///
/// ## Analyze a FASTA file
///
/// ```rust,no_run
/// use seqlab_core::{SequenceAnalyzer, config::AnalysisConfig};
///
/// let analyzer = SequenceAnalyzer::new(AnalysisConfig::default());
/// for result in analyzer.analyze_fasta_file("genes.fasta")? {
///     println!("{}: {} ORFs", result.sequence_info.header, result.num_orfs());
/// }
/// # Ok::<(), seqlab_core::types::SeqError>(())
/// ```
#[derive(Debug, Default)]
pub struct SequenceAnalyzer {
    /// Configuration options for analysis
    pub config: AnalysisConfig,
}

impl SequenceAnalyzer {
    /// Creates a new analyzer with the specified configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab_core::{SequenceAnalyzer, config::AnalysisConfig};
    ///
    /// let analyzer = SequenceAnalyzer::new(AnalysisConfig::default());
    /// ```
    pub const fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Analyzes every record of a FASTA file, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError`] if:
    /// - The file cannot be read
    /// - A record is malformed
    /// - Strict mode is on and a record contains a non-ATGC symbol
    pub fn analyze_fasta_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<AnalysisResults>, SeqError> {
        let path = path.as_ref();
        let records = read_fasta(path)?;

        if records.is_empty() {
            warn!("No sequences found in {}", path.display());
        } else if !self.config.quiet {
            info!("Analyzing {} sequences from {}", records.len(), path.display());
        }

        records
            .iter()
            .map(|record| self.analyze_record(record))
            .collect()
    }

    /// Analyzes a single sequence from a string.
    ///
    /// The header defaults to `Seqlab_Seq_1`. Case is ignored: the
    /// sequence is uppercased before analysis.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidAlphabet`] in strict mode when the
    /// sequence contains a symbol outside A/T/G/C. Lenient analysis never
    /// fails.
    pub fn analyze_sequence(
        &self,
        sequence: &str,
        header: Option<String>,
    ) -> Result<AnalysisResults, SeqError> {
        let header = header.unwrap_or_else(|| DEFAULT_HEADER.to_string());
        self.analyze_with_description(sequence, header, None)
    }

    /// Analyzes a parsed FASTA record, keeping its id and description.
    ///
    /// # Errors
    ///
    /// See [`SequenceAnalyzer::analyze_sequence`].
    pub fn analyze_record(&self, record: &FastaRecord) -> Result<AnalysisResults, SeqError> {
        self.analyze_with_description(
            &record.sequence,
            record.id.clone(),
            record.description.clone(),
        )
    }

    /// Core analysis used by the other entry points.
    ///
    /// # Errors
    ///
    /// See [`SequenceAnalyzer::analyze_sequence`].
    pub fn analyze_with_description(
        &self,
        sequence: &str,
        header: String,
        description: Option<String>,
    ) -> Result<AnalysisResults, SeqError> {
        let sequence = self.prepare(sequence, &header)?;
        let length = sequence.chars().count();
        let gc = gc_content(&sequence);

        if !self.config.quiet {
            info!("Analyzing {header} ({length} bp, {gc:.2}% GC)");
        }

        let orfs: Vec<OrfReport> =
            find_orfs_with_min_length(&sequence, self.config.min_orf_length)
                .into_iter()
                .enumerate()
                .map(|(i, orf)| OrfReport {
                    index: i + 1,
                    protein: translate(&orf.sequence),
                    gc_content: gc_content(&orf.sequence),
                    orf,
                })
                .collect();
        debug!("{header}: {} ORFs after length filter", orfs.len());

        let repeats = self.config.repeat_min_length.map(|min_length| {
            let repeats = find_repeats(&sequence, min_length);
            debug!("{header}: {} repeated substrings", repeats.len());
            repeats
        });

        Ok(AnalysisResults {
            sequence_info: SequenceInfo {
                header,
                description,
                length,
                gc_content: gc,
                gc_class: GcClass::from_percent(gc),
                is_valid: validate(&sequence),
            },
            base_counts: count_bases(&sequence),
            at_content: 100.0 - gc,
            melting_temp: calculate_melting_temp(&sequence),
            complement: complement(&sequence),
            reverse_complement: reverse_complement(&sequence),
            rna: transcribe(&sequence),
            has_start_codon: has_start_codon(&sequence),
            has_stop_codon: has_stop_codon(&sequence),
            protein: translate(&sequence),
            start_positions: find_motif(&sequence, START_CODON),
            orfs,
            frame_orfs: find_orfs_all_frames(&sequence),
            frame_summaries: longest_orf_per_frame(&sequence),
            gc_windows: gc_content_window(&sequence, self.config.window_size),
            repeats,
            sequence,
        })
    }

    /// Compares two sequences side by side.
    ///
    /// Both inputs are uppercased first. Lengths and GC content are always
    /// compared. Hamming distance, similarity and the differing positions
    /// are filled in when the lengths match, and both sequences are
    /// translated when each length is a multiple of three.
    ///
    /// # Errors
    ///
    /// Returns [`SeqError::InvalidAlphabet`] in strict mode when either
    /// sequence contains a symbol outside A/T/G/C.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqlab_core::{SequenceAnalyzer, config::AnalysisConfig};
    ///
    /// let analyzer = SequenceAnalyzer::new(AnalysisConfig::default());
    /// let comparison = analyzer.compare_sequences("ATGCGCTAGGGTAA", "ATGCGCTAGGATAA")?;
    ///
    /// assert_eq!(comparison.hamming_distance, Some(1));
    /// assert_eq!(comparison.differences[0].position, 10);
    /// # Ok::<(), seqlab_core::types::SeqError>(())
    /// ```
    pub fn compare_sequences(
        &self,
        first: &str,
        second: &str,
    ) -> Result<SequenceComparison, SeqError> {
        let first = self.prepare(first, "first sequence")?;
        let second = self.prepare(second, "second sequence")?;

        let left_length = first.chars().count();
        let right_length = second.chars().count();
        let left_gc = gc_content(&first);
        let right_gc = gc_content(&second);

        let (distance, identity, differences) = if left_length == right_length {
            (
                Some(hamming_distance(&first, &second)?),
                Some(similarity(&first, &second)?),
                differing_positions(&first, &second)?,
            )
        } else {
            (None, None, Vec::new())
        };

        let proteins = (left_length % CODON_LENGTH == 0 && right_length % CODON_LENGTH == 0)
            .then(|| (translate(&first), translate(&second)));

        Ok(SequenceComparison {
            left_length,
            right_length,
            left_gc,
            right_gc,
            gc_difference: (left_gc - right_gc).abs(),
            hamming_distance: distance,
            similarity: identity,
            differences,
            proteins,
        })
    }

    /// Uppercases a sequence and applies the alphabet policy.
    fn prepare(&self, sequence: &str, name: &str) -> Result<String, SeqError> {
        let sequence = normalize(sequence);
        if self.config.strict {
            check_alphabet(&sequence)?;
        } else if !validate(&sequence) {
            warn!("{name} contains non-ATGC symbols; they will be ignored or passed through");
        }
        Ok(sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FrameOrf;
    use std::fs;
    use tempfile::NamedTempFile;

    const GENE: &str = "ATGCGCTAGGGTAA";

    fn analyzer() -> SequenceAnalyzer {
        SequenceAnalyzer::new(AnalysisConfig {
            quiet: true,
            ..Default::default()
        })
    }

    #[test]
    fn test_analyze_sequence_full_report() {
        let results = analyzer().analyze_sequence(GENE, None).unwrap();

        assert_eq!(results.sequence_info.header, DEFAULT_HEADER);
        assert_eq!(results.sequence_info.length, 14);
        assert_eq!(results.sequence_info.gc_content, 50.0);
        assert_eq!(results.sequence_info.gc_class, GcClass::Moderate);
        assert!(results.sequence_info.is_valid);
        assert_eq!(results.at_content, 50.0);
        assert_eq!(results.base_counts.to_string(), "A=4 T=3 G=5 C=2");
        assert_eq!(results.melting_temp, 42.0);
        assert_eq!(results.complement, "TACGCGATCCCATT");
        assert_eq!(results.reverse_complement, "TTACCCTAGCGCAT");
        assert_eq!(results.rna, "AUGCGCUAGGGUAA");
        assert!(results.has_start_codon);
        assert!(results.has_stop_codon);
        assert_eq!(results.protein, "MR*G");
        assert_eq!(results.start_positions, vec![0]);
        assert!(results.repeats.is_none());
    }

    #[test]
    fn test_analyze_sequence_orfs() {
        let results = analyzer().analyze_sequence(GENE, None).unwrap();

        assert_eq!(results.num_orfs(), 1);
        let report = &results.orfs[0];
        assert_eq!(report.index, 1);
        assert_eq!((report.orf.start, report.orf.end), (0, 9));
        assert_eq!(report.orf.sequence, "ATGCGCTAG");
        assert_eq!(report.protein, "MR*");
        assert!((report.gc_content - 500.0 / 9.0).abs() < 1e-9);

        assert_eq!(results.frame_orfs.len(), 1);
        assert!(matches!(results.frame_orfs[0], FrameOrf { frame: 0, .. }));
        let counts: Vec<usize> = results
            .frame_summaries
            .iter()
            .map(|summary| summary.orf_count)
            .collect();
        assert_eq!(counts, vec![1, 0, 0]);
    }

    #[test]
    fn test_analyze_sequence_lowercase_input() {
        let upper = analyzer().analyze_sequence(GENE, None).unwrap();
        let lower = analyzer()
            .analyze_sequence(&GENE.to_lowercase(), None)
            .unwrap();

        assert_eq!(lower.sequence, GENE);
        assert_eq!(lower.protein, upper.protein);
        assert_eq!(lower.orfs, upper.orfs);
        assert_eq!(lower.complement, upper.complement);
    }

    #[test]
    fn test_min_orf_length_filter() {
        let seq = "AAATGCGCGCGTAGGGTAAATGATGCCCCCCTAG";
        let config = AnalysisConfig {
            quiet: true,
            min_orf_length: 13,
            ..Default::default()
        };
        let results = SequenceAnalyzer::new(config).analyze_sequence(seq, None).unwrap();

        let starts: Vec<usize> = results.orfs.iter().map(|r| r.orf.start).collect();
        assert_eq!(starts, vec![19]);
        assert_eq!(results.orfs[0].index, 1);
        assert_eq!(results.longest_orf().map(|r| r.orf.len()), Some(15));
    }

    #[test]
    fn test_windows_and_repeats_follow_config() {
        let config = AnalysisConfig {
            quiet: true,
            window_size: 4,
            repeat_min_length: Some(3),
            ..Default::default()
        };
        let results = SequenceAnalyzer::new(config)
            .analyze_sequence("ATGATG", None)
            .unwrap();

        assert_eq!(results.gc_windows.len(), 3);
        let repeats = results.repeats.unwrap();
        assert_eq!(repeats.get("ATG"), Some(&2));
        assert_eq!(repeats.len(), 1);
    }

    #[test]
    fn test_short_sequence_has_no_windows() {
        let results = analyzer().analyze_sequence(GENE, None).unwrap();
        assert!(results.gc_windows.is_empty());
    }

    #[test]
    fn test_lenient_mode_tolerates_invalid_symbols() {
        let results = analyzer().analyze_sequence("ATGNNNTAA", None).unwrap();

        assert!(!results.sequence_info.is_valid);
        assert_eq!(results.base_counts.total(), 6);
        assert_eq!(results.protein, "MX*");
        assert_eq!(results.complement, "TACNNNATT");
        assert_eq!(results.orfs.len(), 1);
    }

    #[test]
    fn test_strict_mode_rejects_invalid_symbols() {
        let config = AnalysisConfig {
            strict: true,
            quiet: true,
            ..Default::default()
        };
        let analyzer = SequenceAnalyzer::new(config);

        match analyzer.analyze_sequence("ATGXC", None) {
            Err(SeqError::InvalidAlphabet { symbol, position }) => {
                assert_eq!((symbol, position), ('X', 3));
            }
            other => panic!("Expected InvalidAlphabet, got {other:?}"),
        }
        assert!(analyzer.analyze_sequence("atgc", None).is_ok());
    }

    #[test]
    fn test_empty_sequence() {
        let results = analyzer().analyze_sequence("", None).unwrap();

        assert_eq!(results.sequence_info.length, 0);
        assert_eq!(results.sequence_info.gc_content, 0.0);
        assert_eq!(results.sequence_info.gc_class, GcClass::AtRich);
        assert_eq!(results.melting_temp, 0.0);
        assert!(results.protein.is_empty());
        assert!(results.orfs.is_empty());
        assert!(results.start_positions.is_empty());
    }

    #[test]
    fn test_analyze_fasta_file_keeps_record_order() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            ">gene1 first gene\nATGCGCTAGG\nGTAA\n>gene2\nGGGGCCCC\n",
        )
        .unwrap();

        let results = analyzer().analyze_fasta_file(file.path()).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].sequence_info.header, "gene1");
        assert_eq!(
            results[0].sequence_info.description.as_deref(),
            Some("first gene")
        );
        assert_eq!(results[0].sequence, GENE);
        assert_eq!(results[1].sequence_info.gc_class, GcClass::GcRich);
    }

    #[test]
    fn test_analyze_fasta_file_missing() {
        assert!(matches!(
            analyzer().analyze_fasta_file("does_not_exist.fasta"),
            Err(SeqError::IoError(_))
        ));
    }

    #[test]
    fn test_compare_single_mutation() {
        let comparison = analyzer()
            .compare_sequences(GENE, "ATGCGCTAGGATAA")
            .unwrap();

        assert!(comparison.same_length());
        assert_eq!(comparison.hamming_distance, Some(1));
        let similarity = comparison.similarity.unwrap();
        assert!((similarity - (1.0 - 1.0 / 14.0) * 100.0).abs() < 1e-9);
        assert_eq!(comparison.differences.len(), 1);
        assert_eq!(comparison.differences[0].left, 'G');
        assert_eq!(comparison.differences[0].right, 'A');
        assert!(comparison.proteins.is_none());
    }

    #[test]
    fn test_compare_different_lengths() {
        let comparison = analyzer()
            .compare_sequences("GCGCGCGCGCGCGC", "ATATATAT")
            .unwrap();

        assert!(!comparison.same_length());
        assert_eq!(comparison.hamming_distance, None);
        assert_eq!(comparison.similarity, None);
        assert!(comparison.differences.is_empty());
        assert_eq!(comparison.gc_difference, 100.0);
    }

    #[test]
    fn test_compare_translates_codon_multiples() {
        let comparison = analyzer()
            .compare_sequences("ATGGCCTAA", "ATGGCATAA")
            .unwrap();

        assert_eq!(
            comparison.proteins,
            Some(("MA*".to_string(), "MA*".to_string()))
        );
        assert!(comparison.same_protein());
        assert_eq!(comparison.hamming_distance, Some(1));
    }
}
