//! Simulation configuration.
//!
//! Settings can come from a TOML file, from command-line flags, or from the
//! built-in defaults; the driver layers them in that order of increasing
//! precedence. The engine itself only consumes the resolved values.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

const DEFAULT_FRAMES: usize = 64;
const DEFAULT_BURST: usize = 5;

/// Page replacement policy selector.
///
/// Chooses how the engine frees a frame when the inverse page table is full:
/// globally least-recently-used eviction, or per-process working-set
/// trimming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Least Recently Used: evict the globally oldest-touched frame.
    Lru,

    /// Working Set: evict the requesting process's frames that have aged
    /// out of its reference-history window.
    Ws,
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LRU" | "lru" => Ok(Policy::Lru),
            "WS" | "ws" => Ok(Policy::Ws),
            other => Err(format!(
                "invalid replacement policy '{}', options are: lru, ws",
                other
            )),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Lru => write!(f, "LRU"),
            Policy::Ws => write!(f, "WS"),
        }
    }
}

/// Resolved simulation settings.
///
/// # Fields
///
/// * `policy` - The page replacement policy.
/// * `frames` - Physical frame count (inverse page table capacity).
/// * `burst` - References read from each trace per round-robin turn.
/// * `window` - Working-set history window size; required when `policy`
///   is [`Policy::Ws`], ignored otherwise.
/// * `max_refs` - Total reference budget across all traces; `0` means
///   unlimited.
#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    #[serde(default = "default_policy")]
    pub policy: Policy,

    #[serde(default = "default_frames")]
    pub frames: usize,

    #[serde(default = "default_burst")]
    pub burst: usize,

    #[serde(default)]
    pub window: Option<usize>,

    #[serde(default)]
    pub max_refs: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            frames: default_frames(),
            burst: default_burst(),
            window: None,
            max_refs: 0,
        }
    }
}

fn default_policy() -> Policy {
    Policy::Lru
}

fn default_frames() -> usize {
    DEFAULT_FRAMES
}

fn default_burst() -> usize {
    DEFAULT_BURST
}
