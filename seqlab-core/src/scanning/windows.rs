use crate::sequence::{gc_percent, tally};
use crate::types::GcWindow;

/// GC content of every window of `window_size` bases, in position order.
///
/// Produces `len - window_size + 1` windows when `window_size <= len` and
/// none otherwise. A zero-width window is legal and reports 0% at every
/// offset from `0` through `len`.
///
/// # Examples
///
/// ```rust
/// use seqlab_core::scanning::gc_content_window;
///
/// let windows = gc_content_window("GGGGAAAA", 4);
/// let percents: Vec<f64> = windows.iter().map(|w| w.gc_content).collect();
/// assert_eq!(percents, vec![100.0, 75.0, 50.0, 25.0, 0.0]);
/// assert!(gc_content_window("ATGC", 5).is_empty());
/// ```
#[must_use]
pub fn gc_content_window(sequence: &str, window_size: usize) -> Vec<GcWindow> {
    let bases: Vec<char> = sequence.chars().collect();

    if window_size == 0 {
        return (0..=bases.len())
            .map(|position| GcWindow {
                position,
                gc_content: 0.0,
            })
            .collect();
    }

    bases
        .windows(window_size)
        .enumerate()
        .map(|(position, window)| {
            let (counts, length) = tally(window.iter().copied());
            GcWindow {
                position,
                gc_content: gc_percent(&counts, length),
            }
        })
        .collect()
}
