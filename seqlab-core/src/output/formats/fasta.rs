use std::io::Write;

use crate::results::AnalysisResults;
use crate::sequence::{FastaRecord, write_fasta};
use crate::types::SeqError;

/// Write each reported ORF as a FASTA record named `<header>_orf<index>`
pub fn write_fasta_format<W: Write>(
    writer: &mut W,
    results: &AnalysisResults,
) -> Result<(), SeqError> {
    let records: Vec<FastaRecord> = results
        .orfs
        .iter()
        .map(|report| {
            FastaRecord::new(
                format!("{}_orf{}", results.sequence_info.header, report.index),
                Some(format!(
                    "start={} end={} frame={} length={} protein={}",
                    report.orf.start,
                    report.orf.end,
                    report.orf.frame(),
                    report.orf.len(),
                    report.protein
                )),
                report.orf.sequence.as_str(),
            )
        })
        .collect();

    write_fasta(writer, &records)
}
