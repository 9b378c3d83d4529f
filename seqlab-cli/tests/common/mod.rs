#![allow(dead_code)]

use std::fs;

use assert_cmd::Command;
use tempfile::NamedTempFile;

/// Three short genes used across the CLI tests
pub const SAMPLE_FASTA: &str = "\
>gene1 Sample gene 1
ATGCGCTAGGGTAA
>gene2 Sample gene 2
ATGATGCCCTAGATGATGTAGGGTAA
>short
ATGC
";

/// A `seqlab` command ready for arguments
pub fn seqlab() -> Command {
    Command::cargo_bin("seqlab").unwrap()
}

/// Writes `content` to a fresh temporary FASTA file
pub fn write_fasta(content: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), content).unwrap();
    file
}

/// Runs the seqlab CLI on an input file and returns what it wrote to `output_file`
pub fn run_seqlab(
    input_file: &str,
    output_file: &str,
    format: &str,
    extra_args: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    let mut cmd = seqlab();
    cmd.arg("-i")
        .arg(input_file)
        .arg("-o")
        .arg(output_file)
        .arg("-f")
        .arg(format)
        .arg("-q")
        .args(extra_args);

    cmd.assert().success();
    Ok(fs::read_to_string(output_file)?)
}
