//! Demand-Paged Virtual Memory Simulator Library.
//!
//! This crate implements a deterministic simulator for demand-paged virtual
//! memory shared by multiple processes. A fixed pool of physical frames is
//! managed through an inverse page table, and page faults are resolved by
//! one of two replacement policies: global Least Recently Used (LRU) or
//! per-process Working Set (WS) trimming with a sliding reference-history
//! window.
//!
//! # Architecture
//!
//! * **Engine**: the request pipeline — inverse-page-table search, free-frame
//!   fit, policy-driven replacement — with fault/read/write accounting.
//! * **Policies**: LRU victim selection over last-touch timestamps, and
//!   Working-Set trimming driven by bounded per-process history windows.
//! * **Driver glue**: trace-file parsing, TOML/CLI configuration, and
//!   formatted statistics reporting.
//!
//! # Modules
//!
//! * `config`: Configuration loading and parsing.
//! * `mem`: Memory engine, frame table, history queues, and policies.
//! * `stats`: Simulation statistics collection and reporting.
//! * `trace`: Memory-trace file reading.

/// Configuration system for simulation settings.
///
/// Loads and parses TOML configuration files and provides the replacement
/// policy selector shared between the configuration layer and the engine.
pub mod config;

/// Memory engine implementation.
///
/// Implements the inverse page table, the per-frame metadata records, the
/// reference-history containers, and the LRU and Working-Set replacement
/// policies behind the `retrieve` request pipeline.
pub mod mem;

/// Simulation statistics collection and reporting.
pub mod stats;

/// Memory-trace file reading and record parsing.
pub mod trace;

pub use config::{Policy, SimConfig};
pub use mem::{AccessMode, MemError, Memory, Pid, Reference};
pub use stats::MemStats;
