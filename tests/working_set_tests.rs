//! Integration tests for the Working-Set replacement policy.
//!
//! These tests pin down the history-window aging behavior, the
//! distinct-page set semantics, per-process eviction scoping, the forced
//! eviction fallback, and the starvation condition.

use vmem_sim::config::Policy;
use vmem_sim::mem::policy::working_set::{distinct_pages, WorkingSetState};
use vmem_sim::mem::{AccessMode, MemError, Memory, Pid};

const A: u32 = 0x1;
const B: u32 = 0x2;
const C: u32 = 0x3;
const D: u32 = 0x4;
const E: u32 = 0x5;

/// Builds an address from a page number.
fn addr(page: u32) -> u32 {
    page << 12
}

/// Checks whether `(pid, page)` is resident in some frame.
fn resident(mem: &Memory, pid: Pid, page: u32) -> bool {
    mem.frames()
        .iter()
        .any(|(_, f)| f.occupied && f.pid == pid && f.page == page)
}

/// Tests that a window of size 3 holds exactly the last three references
/// after the touch sequence [A, B, C, A, D].
#[test]
fn test_window_holds_last_three_references() {
    let mut state = WorkingSetState::new(&[0], 3);
    for page in [A, B, C, A, D] {
        state.record(0, page).unwrap();
    }

    let window: Vec<u32> = state.window_of(0).unwrap().iter().map(|r| r.page).collect();
    assert_eq!(window, vec![C, A, D]);
}

/// Tests that the working set built from [C, A, D] is the sorted distinct
/// page set {A, C, D} — B has aged out.
#[test]
fn test_distinct_page_set() {
    let mut state = WorkingSetState::new(&[0], 3);
    for page in [A, B, C, A, D] {
        state.record(0, page).unwrap();
    }

    let set: Vec<u32> = distinct_pages(state.window_of(0).unwrap())
        .iter()
        .map(|r| r.page)
        .collect();
    assert_eq!(set, vec![A, C, D]);
}

/// Tests the full aging scenario through the engine: pages of process 0
/// that fell out of its window are evicted on the next miss, and the
/// other process's frame is untouched.
#[test]
fn test_aged_pages_evicted_on_miss() {
    let mut mem = Memory::new(5, Policy::Ws, &[0, 1], Some(3)).unwrap();

    // Pid 1 parks one page; it must survive pid 0's evictions.
    mem.retrieve(addr(0x63), AccessMode::Read, 1).unwrap();

    for page in [A, B, C, A, D] {
        mem.retrieve(addr(page), AccessMode::Read, 0).unwrap();
    }
    assert!(mem.frames().is_full());

    // Miss on E. Pid 0's window is now [A, D, E]; B and C are out.
    mem.retrieve(addr(E), AccessMode::Read, 0).unwrap();

    assert!(!resident(&mem, 0, B));
    assert!(!resident(&mem, 0, C));
    assert!(resident(&mem, 0, A));
    assert!(resident(&mem, 0, D));
    assert!(resident(&mem, 0, E));
    assert!(resident(&mem, 1, 0x63));

    // Two evicted, one refilled.
    assert_eq!(mem.frames().occupied(), 4);
}

/// Tests that when every resident page is still in the working set, the
/// highest-indexed owned frame is forcibly evicted.
#[test]
fn test_forced_eviction_when_set_covers_residents() {
    let mut mem = Memory::new(1, Policy::Ws, &[0], Some(3)).unwrap();

    mem.retrieve(addr(A), AccessMode::Read, 0).unwrap();

    // A is still in the window, but B needs the only frame.
    mem.retrieve(addr(B), AccessMode::Read, 0).unwrap();

    assert!(!resident(&mem, 0, A));
    assert!(resident(&mem, 0, B));
    assert_eq!(mem.frames().occupied(), 1);
}

/// Tests that trimming a dirty aged-out page charges a hard-disk write.
#[test]
fn test_trim_dirty_page_writes_back() {
    let mut mem = Memory::new(2, Policy::Ws, &[0], Some(2)).unwrap();

    mem.retrieve(addr(A), AccessMode::Write, 0).unwrap();
    mem.retrieve(addr(B), AccessMode::Read, 0).unwrap();

    // Window rolls to [B, C]; the dirty A is trimmed.
    mem.retrieve(addr(C), AccessMode::Read, 0).unwrap();

    assert_eq!(mem.stats().hd_writes, 1);
    assert!(!resident(&mem, 0, A));
}

/// Tests the starvation condition: a full table with no frame owned by
/// the requesting process is an error, not an eviction.
#[test]
fn test_starvation_is_an_error() {
    let mut mem = Memory::new(1, Policy::Ws, &[0, 1], Some(2)).unwrap();

    mem.retrieve(addr(A), AccessMode::Read, 1).unwrap();

    let err = mem.retrieve(addr(B), AccessMode::Read, 0).unwrap_err();
    assert_eq!(err, MemError::Starvation(0));

    // The other process's frame was not reclaimed.
    assert!(resident(&mem, 1, A));
    assert_eq!(mem.frames().occupied(), 1);
}

/// Tests that a reference from an untracked process is rejected under WS.
#[test]
fn test_unknown_pid_rejected() {
    let mut mem = Memory::new(2, Policy::Ws, &[0, 1], Some(2)).unwrap();

    let err = mem.retrieve(addr(A), AccessMode::Read, 5).unwrap_err();
    assert_eq!(err, MemError::UnknownPid(5));
}

/// Tests that each tracked process rolls its own window independently.
#[test]
fn test_windows_are_per_process() {
    let mut state = WorkingSetState::new(&[3, 7], 2);
    state.record(3, A).unwrap();
    state.record(7, B).unwrap();
    state.record(3, C).unwrap();

    let w3: Vec<u32> = state.window_of(3).unwrap().iter().map(|r| r.page).collect();
    let w7: Vec<u32> = state.window_of(7).unwrap().iter().map(|r| r.page).collect();
    assert_eq!(w3, vec![A, C]);
    assert_eq!(w7, vec![B]);
}
