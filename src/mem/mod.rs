//! Memory engine.
//!
//! The engine owns the inverse page table, the replacement-policy state,
//! and the run counters, and exposes a single per-reference entry point,
//! [`Memory::retrieve`]. Each reference runs the same pipeline to
//! completion: decompose the address, roll the history window (WS only),
//! search the table, and on a miss either fit into a free frame or ask
//! the policy to make room.

/// Engine error taxonomy.
pub mod error;

/// Inverse page table and per-frame metadata.
pub mod frame;

/// Reference history containers.
pub mod history;

/// Page replacement policies.
pub mod policy;

pub use error::MemError;
pub use frame::{FrameEntry, FrameTable};
pub use history::HistoryQueue;

use crate::config::Policy;
use crate::stats::MemStats;
use policy::{lru, working_set, WorkingSetState};

/// Process identifier.
pub type Pid = u8;

/// Bits of the intra-page offset (4096-byte pages).
pub const PAGE_SHIFT: u32 = 12;

/// Mask extracting the intra-page offset from an address.
pub const OFFSET_MASK: u32 = 0xFFF;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessMode {
    /// Load from memory; leaves the dirty flag alone.
    Read,

    /// Store to memory; marks the touched frame dirty.
    Write,
}

/// One memory reference: a page touched by a process.
///
/// Two references are equal iff both fields match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reference {
    pub pid: Pid,
    pub page: u32,
}

/// Replacement-policy state owned by the engine.
///
/// The Working-Set variant carries the per-process history windows, which
/// only exist under that policy.
#[derive(Debug)]
enum Replacement {
    Lru,
    Ws(WorkingSetState),
}

/// The simulated memory system.
#[derive(Debug)]
pub struct Memory {
    frames: FrameTable,
    stats: MemStats,
    replacement: Replacement,
    clock: u64,
}

impl Memory {
    /// Creates a memory system with `frames` physical frames.
    ///
    /// # Arguments
    ///
    /// * `frames` - Inverse page table capacity; must be positive.
    /// * `policy` - The page replacement policy.
    /// * `pids` - Tracked process identifiers, in driver order. Only
    ///   consulted under [`Policy::Ws`].
    /// * `window` - History window size `W`; mandatory and positive under
    ///   [`Policy::Ws`], ignored otherwise.
    ///
    /// # Errors
    ///
    /// [`MemError::ZeroCapacity`] for an empty frame pool, and
    /// [`MemError::MissingWindow`] when the Working-Set policy is chosen
    /// without a positive window size.
    pub fn new(
        frames: usize,
        policy: Policy,
        pids: &[Pid],
        window: Option<usize>,
    ) -> Result<Self, MemError> {
        if frames == 0 {
            return Err(MemError::ZeroCapacity);
        }

        let replacement = match policy {
            Policy::Lru => Replacement::Lru,
            Policy::Ws => match window {
                Some(w) if w > 0 => Replacement::Ws(WorkingSetState::new(pids, w)),
                _ => return Err(MemError::MissingWindow),
            },
        };

        Ok(Self {
            frames: FrameTable::new(frames),
            stats: MemStats::default(),
            replacement,
            clock: 0,
        })
    }

    /// Resolves one memory reference.
    ///
    /// # Arguments
    ///
    /// * `addr` - The 32-bit virtual address; the page number is
    ///   `addr >> 12` and the offset `addr & 0xfff`.
    /// * `mode` - Read or write access.
    /// * `pid` - The referencing process.
    ///
    /// # Behavior
    ///
    /// A hit refreshes the frame's last-touch tick and offset (and dirty
    /// flag on writes). A miss counts a page fault and a hard-disk read,
    /// then places the page in a free frame, evicting through the
    /// configured policy if none is free.
    ///
    /// # Errors
    ///
    /// [`MemError::Starvation`] when the Working-Set policy cannot reclaim
    /// any frame for `pid`, and [`MemError::UnknownPid`] for a WS
    /// reference from an untracked process. The engine state stays
    /// consistent either way; the driver chooses how to react.
    pub fn retrieve(&mut self, addr: u32, mode: AccessMode, pid: Pid) -> Result<(), MemError> {
        let page = addr >> PAGE_SHIFT;
        let offset = (addr & OFFSET_MASK) as u16;

        self.stats.total_requests += 1;
        self.clock += 1;
        let now = self.clock;

        // The history window rolls on every reference, hit or miss.
        if let Replacement::Ws(state) = &mut self.replacement {
            state.record(pid, page)?;
        }

        if let Some(frame) = self.frames.find_mut(pid, page) {
            if mode == AccessMode::Write {
                frame.dirty = true;
            }
            frame.last_touch = now;
            frame.offset = offset;
            return Ok(());
        }

        // Miss: the page comes in from the hard disk.
        self.stats.page_faults += 1;
        self.stats.hd_reads += 1;

        let slot = match self.frames.find_free() {
            Some(index) => index,
            None => self.make_room(pid)?,
        };
        self.frames
            .fill(slot, pid, page, mode == AccessMode::Write, offset, now);

        Ok(())
    }

    /// Frees a frame through the configured policy and returns its index.
    fn make_room(&mut self, pid: Pid) -> Result<usize, MemError> {
        match &self.replacement {
            Replacement::Lru => {
                let victim = lru::select_victim(&self.frames);
                if self.frames.evict(victim) {
                    self.stats.hd_writes += 1;
                }
                Ok(victim)
            }
            Replacement::Ws(state) => {
                working_set::select_victim(&mut self.frames, &mut self.stats, state, pid)
            }
        }
    }

    /// Read-only view of the run counters.
    pub fn stats(&self) -> &MemStats {
        &self.stats
    }

    /// Read-only view of the inverse page table.
    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }
}
