use std::io::Write;

use crate::constants::START_CODON;
use crate::results::{AnalysisResults, SequenceComparison};
use crate::types::SeqError;

const RULE_WIDTH: usize = 60;

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

fn write_banner<W: Write>(writer: &mut W, title: &str) -> Result<(), SeqError> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(writer, "{rule}")?;
    writeln!(writer, "{title}")?;
    writeln!(writer, "{rule}")?;
    Ok(())
}

/// Write a sectioned plain-text report for one sequence
pub fn write_report_format<W: Write>(
    writer: &mut W,
    results: &AnalysisResults,
) -> Result<(), SeqError> {
    let info = &results.sequence_info;
    let title = match &info.description {
        Some(description) => format!("Analysis for: {} {}", info.header, description),
        None => format!("Analysis for: {}", info.header),
    };
    write_banner(writer, &title)?;

    writeln!(writer)?;
    writeln!(writer, "Sequence: {}", results.sequence)?;
    writeln!(writer, "Length: {} bp", info.length)?;
    writeln!(writer, "Valid DNA: {}", yes_no(info.is_valid))?;

    writeln!(writer)?;
    writeln!(writer, "Composition:")?;
    for (base, count) in results.base_counts.iter() {
        writeln!(
            writer,
            "  {base}: {count} ({:.1}%)",
            percent_of(count, info.length)
        )?;
    }
    writeln!(writer)?;
    writeln!(writer, "GC Content: {:.2}% ({})", info.gc_content, info.gc_class)?;
    writeln!(writer, "AT Content: {:.2}%", results.at_content)?;
    writeln!(writer, "Melting Temperature: {:.1}°C", results.melting_temp)?;

    writeln!(writer)?;
    writeln!(writer, "Complement: {}", results.complement)?;
    writeln!(writer, "Reverse Complement: {}", results.reverse_complement)?;
    writeln!(writer, "RNA: {}", results.rna)?;
    writeln!(writer, "Protein: {}", results.protein)?;

    writeln!(writer)?;
    writeln!(
        writer,
        "Start codon ({START_CODON}): {}",
        yes_no(results.has_start_codon)
    )?;
    writeln!(writer, "Stop codon: {}", yes_no(results.has_stop_codon))?;
    if !results.start_positions.is_empty() {
        let positions: Vec<String> = results
            .start_positions
            .iter()
            .map(ToString::to_string)
            .collect();
        writeln!(
            writer,
            "{START_CODON} occurrences at positions: {}",
            positions.join(", ")
        )?;
    }

    writeln!(writer)?;
    if results.orfs.is_empty() {
        writeln!(writer, "No complete ORFs found")?;
    } else {
        writeln!(writer, "Open Reading Frames: {}", results.orfs.len())?;
        for report in &results.orfs {
            writeln!(
                writer,
                "  ORF {}: Position {}-{} (frame {}, {} bp, {:.2}% GC)",
                report.index,
                report.orf.start,
                report.orf.end,
                report.orf.frame(),
                report.orf.len(),
                report.gc_content
            )?;
            writeln!(writer, "    DNA: {}", report.orf.sequence)?;
            writeln!(writer, "    Protein: {}", report.protein)?;
        }
    }

    writeln!(writer)?;
    writeln!(writer, "Reading frames:")?;
    for summary in &results.frame_summaries {
        match &summary.longest {
            Some(orf) => writeln!(
                writer,
                "  Frame {}: {} ORFs, longest {}-{} ({} bp)",
                summary.frame,
                summary.orf_count,
                orf.start,
                orf.end,
                orf.len()
            )?,
            None => writeln!(writer, "  Frame {}: 0 ORFs", summary.frame)?,
        }
        for hit in results
            .frame_orfs
            .iter()
            .filter(|hit| hit.frame == summary.frame)
        {
            writeln!(
                writer,
                "    {}-{} ({} bp): {}",
                hit.orf.start,
                hit.orf.end,
                hit.orf.len(),
                hit.orf.sequence
            )?;
        }
    }

    if !results.gc_windows.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "GC windows: {}", results.gc_windows.len())?;
        for window in &results.gc_windows {
            writeln!(writer, "  {}\t{:.2}%", window.position, window.gc_content)?;
        }
    }

    if let Some(repeats) = &results.repeats {
        writeln!(writer)?;
        if repeats.is_empty() {
            writeln!(writer, "No repeated substrings found")?;
        } else {
            writeln!(writer, "Repeats: {}", repeats.len())?;
            for (repeat, count) in repeats {
                writeln!(writer, "  {repeat}: {count}")?;
            }
        }
    }

    writeln!(writer)?;
    Ok(())
}

/// Write a side-by-side comparison of two named sequences
pub fn write_comparison_report<W: Write>(
    writer: &mut W,
    names: (&str, &str),
    comparison: &SequenceComparison,
) -> Result<(), SeqError> {
    let (left, right) = names;
    write_banner(writer, &format!("Comparing: {left} vs {right}"))?;

    writeln!(writer)?;
    writeln!(writer, "Length:")?;
    writeln!(writer, "  {left}: {} bp", comparison.left_length)?;
    writeln!(writer, "  {right}: {} bp", comparison.right_length)?;
    if comparison.same_length() {
        writeln!(writer, "  Same length")?;
    } else {
        writeln!(
            writer,
            "  Different lengths (difference {} bp)",
            comparison.left_length.abs_diff(comparison.right_length)
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "GC content:")?;
    writeln!(writer, "  {left}: {:.2}%", comparison.left_gc)?;
    writeln!(writer, "  {right}: {:.2}%", comparison.right_gc)?;
    writeln!(writer, "  Difference: {:.2}%", comparison.gc_difference)?;

    writeln!(writer)?;
    writeln!(writer, "Similarity:")?;
    match (comparison.hamming_distance, comparison.similarity) {
        (Some(distance), Some(similarity)) => {
            writeln!(writer, "  Differences: {distance} positions")?;
            writeln!(writer, "  Similarity: {similarity:.1}%")?;
            for mismatch in &comparison.differences {
                writeln!(
                    writer,
                    "    Position {}: {} -> {}",
                    mismatch.position, mismatch.left, mismatch.right
                )?;
            }
        }
        _ => writeln!(writer, "  Not available (different lengths)")?,
    }

    if let Some((left_protein, right_protein)) = &comparison.proteins {
        writeln!(writer)?;
        writeln!(writer, "Proteins:")?;
        writeln!(writer, "  {left}: {left_protein}")?;
        writeln!(writer, "  {right}: {right_protein}")?;
        if comparison.same_protein() {
            writeln!(writer, "  Same protein")?;
        } else {
            writeln!(writer, "  Different proteins")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SequenceAnalyzer, config::AnalysisConfig};

    fn analyzer() -> SequenceAnalyzer {
        SequenceAnalyzer::new(AnalysisConfig {
            quiet: true,
            ..Default::default()
        })
    }

    fn render(results: &AnalysisResults) -> String {
        let mut buffer = Vec::new();
        write_report_format(&mut buffer, results).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_sections() {
        let results = analyzer()
            .analyze_sequence("ATGCGCTAGGGTAA", Some("gene1".to_string()))
            .unwrap();
        let output = render(&results);

        assert!(output.starts_with(&"=".repeat(RULE_WIDTH)));
        assert!(output.contains("Analysis for: gene1\n"));
        assert!(output.contains("Length: 14 bp\n"));
        assert!(output.contains("  G: 5 (35.7%)\n"));
        assert!(output.contains("GC Content: 50.00% (Moderate)\n"));
        assert!(output.contains("Melting Temperature: 42.0°C\n"));
        assert!(output.contains("Reverse Complement: TTACCCTAGCGCAT\n"));
        assert!(output.contains("RNA: AUGCGCUAGGGUAA\n"));
        assert!(output.contains("ATG occurrences at positions: 0\n"));
        assert!(output.contains("  ORF 1: Position 0-9 (frame 0, 9 bp, 55.56% GC)\n"));
        assert!(output.contains("    Protein: MR*\n"));
        assert!(output.contains("  Frame 0: 1 ORFs, longest 0-9 (9 bp)\n"));
        assert!(output.contains("  Frame 0: 1 ORFs, longest 0-9 (9 bp)\n    0-9 (9 bp): ATGCGCTAG\n  Frame 1: 0 ORFs\n"));
        assert!(output.contains("  Frame 2: 0 ORFs\n"));
        assert!(!output.contains("GC windows"));
        assert!(!output.contains("Repeats"));
    }

    #[test]
    fn test_report_lists_orfs_under_each_frame() {
        let results = analyzer().analyze_sequence("CATGAAATAGC", None).unwrap();
        let output = render(&results);

        let frames = &output[output.find("Reading frames:").unwrap()..];
        assert!(frames.starts_with(
            "Reading frames:\n\
             \x20 Frame 0: 1 ORFs, longest 1-10 (9 bp)\n\
             \x20   1-10 (9 bp): ATGAAATAG\n\
             \x20 Frame 1: 1 ORFs, longest 1-10 (9 bp)\n\
             \x20   1-10 (9 bp): ATGAAATAG\n\
             \x20 Frame 2: 0 ORFs\n"
        ));
    }

    #[test]
    fn test_report_without_orfs() {
        let results = analyzer().analyze_sequence("ATGC", None).unwrap();
        let output = render(&results);

        assert!(output.contains("No complete ORFs found\n"));
        assert!(output.contains("Stop codon: No\n"));
    }

    #[test]
    fn test_report_empty_sequence_has_zero_percentages() {
        let results = analyzer().analyze_sequence("", None).unwrap();
        let output = render(&results);

        assert!(output.contains("  A: 0 (0.0%)\n"));
        assert!(output.contains("Start codon (ATG): No\n"));
        assert!(!output.contains("occurrences at positions"));
    }

    #[test]
    fn test_report_windows_and_repeats() {
        let analyzer = SequenceAnalyzer::new(AnalysisConfig {
            quiet: true,
            window_size: 4,
            repeat_min_length: Some(3),
            ..Default::default()
        });
        let results = analyzer.analyze_sequence("ATGATG", None).unwrap();
        let output = render(&results);

        assert!(output.contains("GC windows: 3\n  0\t25.00%\n"));
        assert!(output.contains("Repeats: 1\n  ATG: 2\n"));
    }

    #[test]
    fn test_comparison_report() {
        let comparison = analyzer()
            .compare_sequences("ATGCGCTAGGGTAA", "ATGCGCTAGGATAA")
            .unwrap();
        let mut buffer = Vec::new();
        write_comparison_report(&mut buffer, ("Original", "Mutated"), &comparison).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Comparing: Original vs Mutated\n"));
        assert!(output.contains("  Same length\n"));
        assert!(output.contains("  Differences: 1 positions\n"));
        assert!(output.contains("  Similarity: 92.9%\n"));
        assert!(output.contains("    Position 10: G -> A\n"));
        assert!(!output.contains("Proteins:"));
    }

    #[test]
    fn test_comparison_report_different_lengths() {
        let comparison = analyzer()
            .compare_sequences("ATGGCC", "ATGGCCTAA")
            .unwrap();
        let mut buffer = Vec::new();
        write_comparison_report(&mut buffer, ("a", "b"), &comparison).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("  Different lengths (difference 3 bp)\n"));
        assert!(output.contains("  Not available (different lengths)\n"));
        assert!(output.contains("  a: MA\n  b: MA*\n  Different proteins\n"));
    }
}
