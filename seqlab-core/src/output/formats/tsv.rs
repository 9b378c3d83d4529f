use std::io::Write;

use crate::results::AnalysisResults;
use crate::types::SeqError;

pub const TSV_COLUMNS: [&str; 8] = [
    "sequence_id",
    "orf",
    "start",
    "end",
    "length",
    "frame",
    "gc_content",
    "protein",
];

/// Write the TSV column header row
pub fn write_tsv_header<W: Write>(writer: &mut W) -> Result<(), SeqError> {
    writeln!(writer, "{}", TSV_COLUMNS.join("\t"))?;
    Ok(())
}

/// Write one TSV row per reported ORF. Coordinates are 0-based, end-exclusive.
pub fn write_tsv_format<W: Write>(
    writer: &mut W,
    results: &AnalysisResults,
) -> Result<(), SeqError> {
    for report in &results.orfs {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{:.2}\t{}",
            results.sequence_info.header,
            report.index,
            report.orf.start,
            report.orf.end,
            report.orf.len(),
            report.orf.frame(),
            report.gc_content,
            report.protein
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SequenceAnalyzer, config::AnalysisConfig};

    fn render(sequence: &str) -> String {
        let analyzer = SequenceAnalyzer::new(AnalysisConfig {
            quiet: true,
            ..Default::default()
        });
        let results = analyzer
            .analyze_sequence(sequence, Some("seq1".to_string()))
            .unwrap();
        let mut buffer = Vec::new();
        write_tsv_format(&mut buffer, &results).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_tsv_header() {
        let mut buffer = Vec::new();
        write_tsv_header(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "sequence_id\torf\tstart\tend\tlength\tframe\tgc_content\tprotein\n"
        );
    }

    #[test]
    fn test_tsv_rows() {
        let output = render("AAATGCGCGCGTAGGGTAAATGATGCCCCCCTAG");
        insta::assert_snapshot!(output, @r"
        seq1	1	2	14	12	2	66.67	MRA*
        seq1	2	19	34	15	1	60.00	MMPP*
        seq1	3	22	34	12	1	66.67	MPP*
        ");
    }

    #[test]
    fn test_tsv_no_orfs() {
        assert_eq!(render("GGGCCC"), "");
    }
}
