//! Simulation statistics collection and reporting.
//!
//! Tracks the memory-system counters accumulated over a replay run: total
//! requests, page faults, and hard-disk read/write traffic.

use serde::Serialize;

/// Memory-system counters.
///
/// All counters are monotonic for the lifetime of the engine and are never
/// reset. A page fault always implies a hard-disk read; a hard-disk write
/// only occurs when a dirty frame is evicted.
#[derive(Debug, Default, Clone, Serialize)]
pub struct MemStats {
    /// Total references issued to the memory system.
    pub total_requests: u64,

    /// References that missed the inverse page table.
    pub page_faults: u64,

    /// Pages fetched from the hard disk on a fault.
    pub hd_reads: u64,

    /// Dirty pages written back to the hard disk on eviction.
    pub hd_writes: u64,
}

impl MemStats {
    /// Page faults per request, guarded against an empty run.
    pub fn fault_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.page_faults as f64 / self.total_requests as f64
        }
    }

    /// Prints a formatted summary of the simulation counters.
    ///
    /// # Arguments
    ///
    /// * `frames` - Physical frame count, echoed for context.
    pub fn print(&self, frames: usize) {
        println!("\n==========================================================");
        println!("VIRTUAL MEMORY SIMULATION STATISTICS");
        println!("==========================================================");
        println!("fault_rate               {:.6}", self.fault_rate());
        println!("----------------------------------------------------------");
        println!("total_requests           {}", self.total_requests);
        println!("page_faults              {}", self.page_faults);
        println!("hd_reads                 {}", self.hd_reads);
        println!("hd_writes                {}", self.hd_writes);
        println!("----------------------------------------------------------");
        println!("frames                   {}", frames);
        println!("==========================================================");
    }
}
