use super::motifs::motif_positions;
use crate::constants::{CODON_LENGTH, READING_FRAMES, START_CODON, STOP_SYMBOL};
use crate::sequence::{lookup_codon, normalize};
use crate::types::{FrameOrf, FrameSummary, Orf};

fn is_stop(codon: &[char]) -> bool {
    lookup_codon(codon) == STOP_SYMBOL
}

/// Walk codons forward from a start codon at `start` and close the ORF at
/// the first in-frame stop. Returns `None` if the sequence ends first.
fn orf_from_start(bases: &[char], start: usize) -> Option<Orf> {
    let last_codon_start = bases.len().saturating_sub(CODON_LENGTH - 1);

    (start + CODON_LENGTH..last_codon_start)
        .step_by(CODON_LENGTH)
        .find(|&position| is_stop(&bases[position..position + CODON_LENGTH]))
        .map(|stop| {
            let end = stop + CODON_LENGTH;
            Orf {
                start,
                end,
                sequence: bases[start..end].iter().collect(),
            }
        })
}

/// Find ATG-initiated ORFs, one per ATG that reaches an in-frame stop.
///
/// The input is uppercased first. Every `ATG` is a candidate start,
/// whatever its frame; scanning from a start stops at the first in-frame
/// stop codon (`TAA`, `TAG`, `TGA`). Starts that never meet a stop produce
/// nothing. Nested ORFs sharing a stop are each reported, in start order.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::scanning::find_orfs;
///
/// let orfs = find_orfs("AAATGCGCGCGTAGGGTAAATGATGCCCCCCTAG");
/// let found: Vec<(usize, usize, &str)> = orfs
///     .iter()
///     .map(|orf| (orf.start, orf.end, orf.sequence.as_str()))
///     .collect();
///
/// assert_eq!(
///     found,
///     vec![
///         (2, 14, "ATGCGCGCGTAG"),
///         (19, 34, "ATGATGCCCCCCTAG"),
///         (22, 34, "ATGCCCCCCTAG"),
///     ]
/// );
/// ```
#[must_use]
pub fn find_orfs(sequence: &str) -> Vec<Orf> {
    let bases: Vec<char> = normalize(sequence).chars().collect();
    orfs_in(&bases)
}

fn orfs_in(bases: &[char]) -> Vec<Orf> {
    let start_codon: Vec<char> = START_CODON.chars().collect();

    motif_positions(bases, &start_codon)
        .into_iter()
        .filter_map(|start| orf_from_start(bases, start))
        .collect()
}

/// [`find_orfs`], keeping only ORFs of at least `min_length` nucleotides.
#[must_use]
pub fn find_orfs_with_min_length(sequence: &str, min_length: usize) -> Vec<Orf> {
    find_orfs(sequence)
        .into_iter()
        .filter(|orf| orf.len() >= min_length)
        .collect()
}

/// Find ORFs in each of the three forward reading frames.
///
/// Frame `f` runs [`find_orfs`] on the suffix starting at offset `f` and
/// shifts the hits back by `f`, so coordinates refer to the full sequence.
/// Every `ATG` inside a suffix is a candidate, whatever its codon phase,
/// which means one ORF can be reported under more than one frame. Results
/// are grouped by frame in ascending order. A frame offset past the end
/// of the sequence scans an empty suffix.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::scanning::find_orfs_all_frames;
///
/// let orfs = find_orfs_all_frames("CATGAAATAGC");
/// let tagged: Vec<(usize, usize)> = orfs.iter().map(|hit| (hit.frame, hit.orf.start)).collect();
/// assert_eq!(tagged, vec![(0, 1), (1, 1)]);
/// ```
#[must_use]
pub fn find_orfs_all_frames(sequence: &str) -> Vec<FrameOrf> {
    let bases: Vec<char> = normalize(sequence).chars().collect();

    (0..READING_FRAMES)
        .flat_map(|frame| {
            let suffix = bases.get(frame..).unwrap_or_default();
            orfs_in(suffix).into_iter().map(move |orf| FrameOrf {
                frame,
                orf: Orf {
                    start: orf.start + frame,
                    end: orf.end + frame,
                    sequence: orf.sequence,
                },
            })
        })
        .collect()
}

/// Summarize each reading frame: how many ORFs it holds and its longest.
#[must_use]
pub fn longest_orf_per_frame(sequence: &str) -> Vec<FrameSummary> {
    let frame_orfs = find_orfs_all_frames(sequence);

    (0..READING_FRAMES)
        .map(|frame| {
            let in_frame = frame_orfs.iter().filter(|hit| hit.frame == frame);
            let orf_count = in_frame.clone().count();
            let longest = in_frame
                .map(|hit| &hit.orf)
                .reduce(|best, orf| if orf.len() > best.len() { orf } else { best })
                .cloned();

            FrameSummary {
                frame,
                orf_count,
                longest,
            }
        })
        .collect()
}
