//! Reference history containers.
//!
//! `HistoryQueue` is the ordered container behind both Working-Set data
//! structures. In FIFO mode it is a process's rolling history window:
//! bounded appends evict the oldest record once the window is full. In
//! sorted mode it holds the transient working set: inserts keep the
//! records ordered by page number and drop duplicates, so the contents
//! are the distinct pages found in a window.

use std::collections::VecDeque;

use crate::mem::Reference;

/// Ordered sequence of references with FIFO and sorted-dedup insertion.
#[derive(Debug, Clone, Default)]
pub struct HistoryQueue {
    records: VecDeque<Reference>,
}

impl HistoryQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
        }
    }

    /// Creates an empty queue with storage reserved for `cap` records.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(cap),
        }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// FIFO append bounded to `cap` records.
    ///
    /// When the queue is full the oldest record is evicted first; the ring
    /// buffer reuses its slot, so a steady-state window never reallocates.
    pub fn push_bounded(&mut self, record: Reference, cap: usize) {
        if self.records.len() == cap {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Inserts a record keeping the queue sorted by page number.
    ///
    /// A record whose page number is already present is dropped, so
    /// repeated insertions build the distinct-page set of a window.
    pub fn sorted_insert(&mut self, record: Reference) {
        let mut pos = self.records.len();
        for (i, held) in self.records.iter().enumerate() {
            if held.page == record.page {
                return;
            }
            if held.page > record.page {
                pos = i;
                break;
            }
        }
        self.records.insert(pos, record);
    }

    /// Linear membership test comparing both pid and page.
    pub fn contains(&self, record: &Reference) -> bool {
        self.records.iter().any(|held| held == record)
    }

    /// Iterates the records front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.records.iter()
    }
}
