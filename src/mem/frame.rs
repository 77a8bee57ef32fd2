//! Inverse page table and per-frame metadata.
//!
//! One `FrameEntry` per physical frame holds both the resident-page
//! identity (owner pid, page number) and the frame metadata (dirty flag,
//! last-access offset, last-touch tick) in a single record, so the two
//! views can never fall out of index alignment.

use crate::mem::Pid;

/// State of one physical frame.
///
/// Entries are created empty at init and mutated in place for the run's
/// duration; a frame is never individually reallocated.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameEntry {
    /// Whether a page is resident in this frame.
    pub occupied: bool,

    /// Owning process of the resident page.
    pub pid: Pid,

    /// Resident virtual page number.
    pub page: u32,

    /// Whether the page has been written since it was loaded.
    pub dirty: bool,

    /// Intra-page offset of the last access.
    pub offset: u16,

    /// Logical tick of the last access.
    pub last_touch: u64,
}

/// Frame-indexed table mapping physical frames to resident pages.
#[derive(Debug)]
pub struct FrameTable {
    frames: Vec<FrameEntry>,
    occupied: usize,
}

impl FrameTable {
    /// Creates a table of `capacity` empty frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: vec![FrameEntry::default(); capacity],
            occupied: 0,
        }
    }

    /// Total frame count.
    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Number of occupied frames.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// True when every frame is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied == self.frames.len()
    }

    /// Returns the entry for frame `index`.
    pub fn get(&self, index: usize) -> &FrameEntry {
        &self.frames[index]
    }

    /// Iterates `(frame index, entry)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &FrameEntry)> {
        self.frames.iter().enumerate()
    }

    /// Linear search for the occupied frame holding `(pid, page)`.
    pub fn find_mut(&mut self, pid: Pid, page: u32) -> Option<&mut FrameEntry> {
        self.frames
            .iter_mut()
            .find(|f| f.occupied && f.pid == pid && f.page == page)
    }

    /// Linear search for the first unoccupied frame.
    pub fn find_free(&self) -> Option<usize> {
        self.frames.iter().position(|f| !f.occupied)
    }

    /// Places a new page into the unoccupied frame `index`.
    pub fn fill(&mut self, index: usize, pid: Pid, page: u32, dirty: bool, offset: u16, now: u64) {
        debug_assert!(!self.frames[index].occupied, "filling an occupied frame");
        debug_assert!(
            !self
                .frames
                .iter()
                .any(|f| f.occupied && f.pid == pid && f.page == page),
            "page resident in two frames"
        );

        self.frames[index] = FrameEntry {
            occupied: true,
            pid,
            page,
            dirty,
            offset,
            last_touch: now,
        };
        self.occupied += 1;
        self.check_occupancy();
    }

    /// Removes the page resident in frame `index`.
    ///
    /// # Returns
    ///
    /// Whether the evicted page was dirty (the caller charges the
    /// write-back).
    pub fn evict(&mut self, index: usize) -> bool {
        debug_assert!(self.frames[index].occupied, "evicting an empty frame");

        let dirty = self.frames[index].dirty;
        self.frames[index].occupied = false;
        self.occupied -= 1;
        self.check_occupancy();
        dirty
    }

    /// Occupancy counter must always match the per-frame flags.
    fn check_occupancy(&self) {
        debug_assert_eq!(
            self.occupied,
            self.frames.iter().filter(|f| f.occupied).count(),
            "occupied counter drifted from frame flags"
        );
    }
}
