use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use bio::io::{fasta, fastq};
use log::debug;

use crate::constants::FASTA_LINE_WIDTH;
use crate::types::SeqError;

/// A named sequence read from or written to a FASTA file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// First word of the header line
    pub id: String,
    /// Rest of the header line, if any
    pub description: Option<String>,
    /// Sequence with line breaks removed
    pub sequence: String,
}

impl FastaRecord {
    /// Creates a record from an id, optional description and sequence.
    pub fn new(
        id: impl Into<String>,
        description: Option<String>,
        sequence: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description,
            sequence: sequence.into(),
        }
    }

    /// The full header line without the leading `>`
    #[must_use]
    pub fn header(&self) -> String {
        match &self.description {
            Some(description) => format!("{} {}", self.id, description),
            None => self.id.clone(),
        }
    }
}

/// A FASTQ read with per-base quality string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    /// First word of the header line
    pub id: String,
    /// Rest of the header line, if any
    pub description: Option<String>,
    /// Read bases
    pub sequence: String,
    /// Phred quality string, one symbol per base
    pub quality: String,
}

impl FastqRecord {
    /// The full header line without the leading `@`
    #[must_use]
    pub fn header(&self) -> String {
        match &self.description {
            Some(description) => format!("{} {}", self.id, description),
            None => self.id.clone(),
        }
    }
}

fn bytes_to_string(bytes: &[u8], what: &str, id: &str) -> Result<String, SeqError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| SeqError::ParseError(format!("{what} of record '{id}' is not UTF-8: {e}")))
}

/// Read all records from a FASTA stream, in file order.
pub fn read_fasta_from<R: Read>(reader: R) -> Result<Vec<FastaRecord>, SeqError> {
    let reader = fasta::Reader::new(reader);
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| SeqError::ParseError(e.to_string()))?;
        let sequence = bytes_to_string(record.seq(), "sequence", record.id())?;
        records.push(FastaRecord {
            id: record.id().to_string(),
            description: record.desc().map(String::from),
            sequence,
        });
    }

    Ok(records)
}

/// Read all records from a FASTA file.
///
/// A missing file is reported as [`SeqError::IoError`].
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, SeqError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = read_fasta_from(file)?;
    debug!("Read {} FASTA records from {}", records.len(), path.display());
    Ok(records)
}

/// Write FASTA records, wrapping sequence lines at 60 columns.
pub fn write_fasta<W: Write>(writer: &mut W, records: &[FastaRecord]) -> Result<(), SeqError> {
    for record in records {
        writeln!(writer, ">{}", record.header())?;
        let bases: Vec<char> = record.sequence.chars().collect();
        for line in bases.chunks(FASTA_LINE_WIDTH) {
            writeln!(writer, "{}", line.iter().collect::<String>())?;
        }
    }
    Ok(())
}

/// Read all records from a FASTQ stream, in file order.
pub fn read_fastq_from<R: Read>(reader: R) -> Result<Vec<FastqRecord>, SeqError> {
    let reader = fastq::Reader::new(reader);
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| SeqError::ParseError(e.to_string()))?;
        let sequence = bytes_to_string(record.seq(), "sequence", record.id())?;
        let quality = bytes_to_string(record.qual(), "quality", record.id())?;
        records.push(FastqRecord {
            id: record.id().to_string(),
            description: record.desc().map(String::from),
            sequence,
            quality,
        });
    }

    Ok(records)
}

/// Read all records from a FASTQ file.
pub fn read_fastq<P: AsRef<Path>>(path: P) -> Result<Vec<FastqRecord>, SeqError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = read_fastq_from(file)?;
    debug!("Read {} FASTQ records from {}", records.len(), path.display());
    Ok(records)
}

/// Write FASTQ records as four-line entries.
pub fn write_fastq<W: Write>(writer: &mut W, records: &[FastqRecord]) -> Result<(), SeqError> {
    let mut fastq_writer = fastq::Writer::new(writer);
    for record in records {
        fastq_writer.write(
            &record.id,
            record.description.as_deref(),
            record.sequence.as_bytes(),
            record.quality.as_bytes(),
        )?;
    }
    fastq_writer.flush()?;
    Ok(())
}

/// Fields of a GenBank-style `gi|...|db|accession| description` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderInfo {
    /// A header with at least four `|`-separated parts.
    ///
    /// `description` holds everything after the fourth `|`, joined back
    /// with `|` and with its leading space kept.
    GenBank {
        /// GenInfo identifier
        gi: String,
        /// Source database tag such as `ref` or `gb`
        database: String,
        /// Versioned accession
        accession: String,
        /// Free-text remainder of the header
        description: String,
    },
    /// Header that does not follow the pipe-separated layout
    Raw(String),
}

/// Split a GenBank-style FASTA header into its fields.
///
/// Headers with fewer than four `|`-separated parts are returned as
/// [`HeaderInfo::Raw`].
///
/// # Examples
///
/// ```rust
/// use seqlab_core::sequence::io::{parse_genbank_header, HeaderInfo};
///
/// let info = parse_genbank_header("gi|123456|ref|NC_000001.1| Homo sapiens");
/// assert_eq!(
///     info,
///     HeaderInfo::GenBank {
///         gi: "123456".to_string(),
///         database: "ref".to_string(),
///         accession: "NC_000001.1".to_string(),
///         description: " Homo sapiens".to_string(),
///     }
/// );
/// ```
#[must_use]
pub fn parse_genbank_header(header: &str) -> HeaderInfo {
    let parts: Vec<&str> = header.split('|').collect();
    if parts.len() < 4 {
        return HeaderInfo::Raw(header.to_string());
    }

    HeaderInfo::GenBank {
        gi: parts[1].to_string(),
        database: parts[2].to_string(),
        accession: parts[3].to_string(),
        description: parts[4..].join("|"),
    }
}
