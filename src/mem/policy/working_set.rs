//! Working-Set (WS) replacement policy.
//!
//! Approximates a process's locality as the distinct pages it touched in
//! its most recent `W` references. On a miss with a full table, every
//! resident frame of the requesting process whose page fell out of that
//! set is reclaimed; frames owned by other processes are never touched.
//! If all of the process's resident pages are still inside the set, the
//! highest-indexed owned frame is reclaimed to guarantee a free slot.
//! A process that owns no resident frames at all cannot make progress:
//! that is the starvation condition, reported to the caller as an error.

use crate::mem::frame::FrameTable;
use crate::mem::history::HistoryQueue;
use crate::mem::{MemError, Pid, Reference};
use crate::stats::MemStats;

/// Per-process reference-history windows.
///
/// One bounded FIFO per tracked process, all sharing the window size `W`.
/// Every reference rolls its process's window, hit or miss.
#[derive(Debug)]
pub struct WorkingSetState {
    window_size: usize,
    pids: Vec<Pid>,
    histories: Vec<HistoryQueue>,
}

impl WorkingSetState {
    /// Creates one empty history window per tracked pid.
    ///
    /// # Arguments
    ///
    /// * `pids` - The tracked process identifiers, in driver order.
    /// * `window_size` - The history window capacity `W` (> 0).
    pub fn new(pids: &[Pid], window_size: usize) -> Self {
        Self {
            window_size,
            pids: pids.to_vec(),
            histories: pids
                .iter()
                .map(|_| HistoryQueue::with_capacity(window_size))
                .collect(),
        }
    }

    /// The configured window size `W`.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Rolls `pid`'s window with a new reference.
    pub fn record(&mut self, pid: Pid, page: u32) -> Result<(), MemError> {
        let index = self.history_index(pid).ok_or(MemError::UnknownPid(pid))?;
        self.histories[index].push_bounded(Reference { pid, page }, self.window_size);
        Ok(())
    }

    /// The rolling history window of `pid`, if tracked.
    pub fn window_of(&self, pid: Pid) -> Option<&HistoryQueue> {
        self.history_index(pid).map(|i| &self.histories[i])
    }

    fn history_index(&self, pid: Pid) -> Option<usize> {
        self.pids.iter().position(|&p| p == pid)
    }
}

/// Builds the distinct-page set of a history window.
///
/// Pages are deduplicated and ordered by page number; how recently a page
/// was touched within the window is deliberately not represented.
pub fn distinct_pages(window: &HistoryQueue) -> HistoryQueue {
    let mut set = HistoryQueue::new();
    for record in window.iter() {
        set.sorted_insert(*record);
    }
    set
}

/// Frees at least one of `pid`'s frames and returns a now-empty index.
///
/// Scans the whole table once: frames owned by other processes are
/// skipped, and every owned frame outside `pid`'s working set is evicted
/// on the spot (charging a write-back for dirty pages). When the scan
/// evicts nothing, the highest-indexed owned frame is forcibly evicted.
///
/// # Errors
///
/// [`MemError::UnknownPid`] if `pid` has no history window, and
/// [`MemError::Starvation`] if `pid` owns no resident frames — the policy
/// has no cross-process fallback.
pub fn select_victim(
    table: &mut FrameTable,
    stats: &mut MemStats,
    state: &WorkingSetState,
    pid: Pid,
) -> Result<usize, MemError> {
    let window = state.window_of(pid).ok_or(MemError::UnknownPid(pid))?;
    let set = distinct_pages(window);

    let mut freed = None;
    let mut last_owned = None;

    for index in 0..table.capacity() {
        let frame = *table.get(index);
        if !frame.occupied || frame.pid != pid {
            continue;
        }

        last_owned = Some(index);

        let record = Reference {
            pid,
            page: frame.page,
        };
        if !set.contains(&record) {
            if table.evict(index) {
                stats.hd_writes += 1;
            }
            freed = Some(index);
        }
    }

    let last_owned = last_owned.ok_or(MemError::Starvation(pid))?;

    match freed {
        Some(index) => Ok(index),
        None => {
            // Every resident page is still in the working set: force one out.
            if table.evict(last_owned) {
                stats.hd_writes += 1;
            }
            Ok(last_owned)
        }
    }
}
