//! # Seqlab CLI - Command-Line DNA Sequence Analysis
//!
//! A command-line interface for the seqlab sequence analysis library.
//!
//! ## Usage
//!
//! ```bash
//! # Full report for a sequence given on the command line
//! seqlab -s ATGCGCTAGGGTAA
//!
//! # ORF table for every record of a FASTA file
//! seqlab -i genes.fasta -f tsv -o orfs.tsv
//!
//! # Compare two sequences position by position
//! seqlab -s ATGCGCTAGGGTAA -c ATGCGCTAGGATAA
//! ```
//!
//! ## Options
//!
//! - `-s, --sequence <SEQ>`: Sequence to analyze
//! - `-i, --input <FILE>`: Input FASTA file
//! - `-c, --compare <SEQ>`: Second sequence to compare against `--sequence`
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-f, --format <FORMAT>`: Output format: report, tsv, fasta (default: report)
//! - `--strict`: Reject symbols outside A/T/G/C
//! - `-l, --min-orf-length <NT>`: Minimum ORF length in nucleotides (default: 0)
//! - `-w, --window <SIZE>`: GC window size (default: 100)
//! - `-r, --repeats [MIN]`: Search for repeats of at least MIN bases (default: 3)
//! - `-q, --quiet`: Suppress progress messages

use clap::{Arg, ArgAction, Command, value_parser};
use env_logger::Env;
use log::info;
use seqlab_core::config::{AnalysisConfig, OutputFormat};
use seqlab_core::constants::{DEFAULT_REPEAT_MIN_LENGTH, DEFAULT_WINDOW_SIZE};
use seqlab_core::output::{write_comparison_report, write_header, write_results};
use seqlab_core::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn build_cli() -> Command {
    Command::new("seqlab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("DNA sequence analysis: composition, translation, ORFs, motifs and repeats")
        .arg(
            Arg::new("sequence")
                .short('s')
                .long("sequence")
                .value_name("SEQ")
                .conflicts_with("input")
                .required_unless_present("input")
                .help("Sequence to analyze"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Input FASTA file"),
        )
        .arg(
            Arg::new("compare")
                .short('c')
                .long("compare")
                .value_name("SEQ")
                .requires("sequence")
                .help("Compare --sequence against this sequence"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .value_parser(["report", "tsv", "fasta"])
                .default_value("report")
                .help("Output format: report, tsv, fasta"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Reject symbols outside A/T/G/C"),
        )
        .arg(
            Arg::new("min-orf-length")
                .short('l')
                .long("min-orf-length")
                .value_name("NT")
                .value_parser(value_parser!(usize))
                .default_value("0")
                .help("Minimum ORF length in nucleotides"),
        )
        .arg(
            Arg::new("window")
                .short('w')
                .long("window")
                .value_name("SIZE")
                .value_parser(value_parser!(usize))
                .help("GC window size (default: 100)"),
        )
        .arg(
            Arg::new("repeats")
                .short('r')
                .long("repeats")
                .value_name("MIN")
                .value_parser(value_parser!(usize))
                .num_args(0..=1)
                .help("Search for repeated substrings of at least MIN bases (default: 3)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
}

/// Main entry point for the seqlab CLI application.
///
/// Parses command-line arguments, analyzes the given sequence or FASTA
/// file, and writes results in the requested format.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = build_cli().get_matches();
    let quiet = matches.get_flag("quiet");

    let default_filter = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let output_format: OutputFormat = matches
        .get_one::<String>("format")
        .map_or(Ok(OutputFormat::Report), |format| format.parse())?;

    let repeat_min_length = matches.contains_id("repeats").then(|| {
        matches
            .get_one::<usize>("repeats")
            .copied()
            .unwrap_or(DEFAULT_REPEAT_MIN_LENGTH)
    });

    let config = AnalysisConfig {
        strict: matches.get_flag("strict"),
        quiet,
        min_orf_length: matches
            .get_one::<usize>("min-orf-length")
            .copied()
            .unwrap_or_default(),
        window_size: matches
            .get_one::<usize>("window")
            .copied()
            .unwrap_or(DEFAULT_WINDOW_SIZE),
        repeat_min_length,
        output_format,
    };
    let analyzer = SequenceAnalyzer::new(config);

    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    if let (Some(first), Some(second)) = (
        matches.get_one::<String>("sequence"),
        matches.get_one::<String>("compare"),
    ) {
        let comparison = analyzer.compare_sequences(first, second)?;
        write_comparison_report(&mut writer, ("Sequence 1", "Sequence 2"), &comparison)?;
        writer.flush()?;
        if !quiet {
            info!("Comparison complete!");
        }
        return Ok(());
    }

    let results = if let Some(input_file) = matches.get_one::<String>("input") {
        analyzer.analyze_fasta_file(input_file)?
    } else if let Some(sequence) = matches.get_one::<String>("sequence") {
        vec![analyzer.analyze_sequence(sequence, None)?]
    } else {
        return Err("Either --sequence or --input is required".into());
    };

    write_header(&mut writer, analyzer.config.output_format)?;
    for result in &results {
        write_results(&mut writer, result, analyzer.config.output_format)?;
    }
    writer.flush()?;

    if !quiet {
        info!(
            "Analysis complete! Found {} ORFs in {} sequences.",
            results.iter().map(|r| r.num_orfs()).sum::<usize>(),
            results.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_repeats_flag_without_value() {
        let matches = build_cli().get_matches_from(["seqlab", "-s", "ATG", "-r"]);
        assert!(matches.contains_id("repeats"));
        assert_eq!(matches.get_one::<usize>("repeats"), None);

        let matches = build_cli().get_matches_from(["seqlab", "-s", "ATG", "--repeats", "5"]);
        assert_eq!(matches.get_one::<usize>("repeats"), Some(&5));

        let matches = build_cli().get_matches_from(["seqlab", "-s", "ATG"]);
        assert!(!matches.contains_id("repeats"));
    }
}
