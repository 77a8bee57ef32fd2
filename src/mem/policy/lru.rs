//! Least Recently Used (LRU) replacement policy.
//!
//! Selects the occupied frame whose last touch is oldest, regardless of
//! which process owns it. Selection is a stable linear scan over the
//! frame table, so equal timestamps resolve to the lowest frame index.

use crate::mem::frame::FrameTable;

/// Returns the index of the occupied frame with the minimum last-touch
/// tick.
///
/// Only called when the table is full, so at least one occupied frame
/// exists.
pub fn select_victim(table: &FrameTable) -> usize {
    let mut victim = 0;
    let mut oldest = u64::MAX;

    for (i, frame) in table.iter() {
        if frame.occupied && frame.last_touch < oldest {
            oldest = frame.last_touch;
            victim = i;
        }
    }

    victim
}
