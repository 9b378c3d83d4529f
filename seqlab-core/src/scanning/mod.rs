//! Positional scans over DNA sequences.
//!
//! This module holds the operations that look at a sequence position by
//! position rather than as a whole: motif search, ORF detection, sliding
//! GC windows, repeat discovery and pairwise distance.
//!
//! ## Modules
//!
//! - [`motifs`]: Exact motif search, reporting overlapping hits
//! - [`orfs`]: ATG-to-stop open reading frame detection
//! - [`windows`]: Sliding-window GC content
//! - [`melting`]: Wallace-rule melting temperature
//! - [`distance`]: Hamming distance and percent identity
//! - [`repeats`]: Repeated substring counts
//!
//! ## Examples
//!
//! ```rust
//! use seqlab_core::scanning::{find_motif, find_orfs, hamming_distance};
//!
//! assert_eq!(find_motif("ATGATGATG", "ATG"), vec![0, 3, 6]);
//!
//! let orfs = find_orfs("CCATGAAATAGCC");
//! assert_eq!(orfs.len(), 1);
//! assert_eq!(orfs[0].sequence, "ATGAAATAG");
//!
//! assert_eq!(hamming_distance("ATGC", "AGGC")?, 1);
//! # Ok::<(), seqlab_core::types::SeqError>(())
//! ```

pub mod distance;
pub mod melting;
pub mod motifs;
pub mod orfs;
pub mod repeats;
pub mod windows;

pub use distance::*;
pub use melting::*;
pub use motifs::*;
pub use orfs::*;
pub use repeats::*;
pub use windows::*;
