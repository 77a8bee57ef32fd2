//! Memory engine error types.

use std::fmt;

use crate::mem::Pid;

/// Failures surfaced by the memory engine.
///
/// Configuration variants are rejected at construction time; `Starvation`
/// and `UnknownPid` arise during replay and are returned to the driver,
/// which decides whether to abort, skip, or back off. The engine never
/// terminates the process itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemError {
    /// The engine was asked for an inverse page table with zero frames.
    ZeroCapacity,

    /// The Working-Set policy was selected without a positive window size.
    MissingWindow,

    /// A Working-Set reference named a process with no history window.
    UnknownPid(Pid),

    /// Under the Working-Set policy, the requesting process owns no
    /// resident frames to reclaim while the inverse page table is full.
    /// There is no cross-process eviction fallback.
    Starvation(Pid),
}

impl fmt::Display for MemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemError::ZeroCapacity => {
                write!(f, "memory must be created with at least one frame")
            }
            MemError::MissingWindow => {
                write!(
                    f,
                    "working-set policy selected without a history window size"
                )
            }
            MemError::UnknownPid(pid) => {
                write!(f, "reference from untracked process {}", pid)
            }
            MemError::Starvation(pid) => {
                write!(
                    f,
                    "starvation: process {} owns no resident frames and memory is full",
                    pid
                )
            }
        }
    }
}

impl std::error::Error for MemError {}
