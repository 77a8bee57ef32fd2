//! Page replacement policies.
//!
//! Each policy answers one question: which frame should be freed when the
//! inverse page table is full? LRU competes globally across all processes;
//! the Working-Set policy only reclaims frames of the requesting process.

/// Least Recently Used victim selection.
pub mod lru;

/// Working-Set trimming and per-process history windows.
pub mod working_set;

pub use working_set::WorkingSetState;
