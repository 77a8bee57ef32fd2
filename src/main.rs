//! Virtual Memory Simulator CLI.
//!
//! The main executable for the simulator. It handles command-line argument
//! parsing, configuration loading, and the trace replay loop.
//!
//! # Usage
//!
//! Each `--trace` file is one process's reference stream; the first file
//! replays as pid 0, the second as pid 1, and so on. The driver
//! interleaves the streams round-robin, `q` references at a time, until
//! a stream runs dry or the reference budget is spent.

use clap::Parser;
use std::{fs, process};

extern crate vmem_sim;

use vmem_sim::config::{Policy, SimConfig};
use vmem_sim::mem::{Memory, Pid};
use vmem_sim::trace::TraceReader;

/// Command-line arguments for the virtual memory simulator.
///
/// Every setting can also come from a TOML config file; flags given on
/// the command line take precedence over the file.
#[derive(Parser, Debug)]
#[command(author, version, about = "Demand-Paged Virtual Memory Simulator")]
struct Args {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<String>,

    /// Page replacement policy: lru or ws.
    #[arg(short, long)]
    policy: Option<Policy>,

    /// Number of physical frames.
    #[arg(short, long)]
    frames: Option<usize>,

    /// References replayed from each trace per round-robin turn.
    #[arg(short = 'q', long)]
    burst: Option<usize>,

    /// Working-set history window size (required with --policy ws).
    #[arg(short, long)]
    window: Option<usize>,

    /// Total reference budget across all traces (0 = unlimited).
    #[arg(long)]
    max_refs: Option<u64>,

    /// Trace file, one per simulated process (repeatable).
    #[arg(short, long, required = true)]
    trace: Vec<String>,

    /// Emit the final counters as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

/// Main entry point for the virtual memory simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Loads the optional TOML file, then applies
///    command-line overrides.
/// 2. **Initialization**: Creates the memory engine; configuration errors
///    (zero frames, WS without a window) abort with usage context.
/// 3. **Replay Loop**: Interleaves the trace streams round-robin and feeds
///    each reference through the engine.
/// 4. **Teardown**: Prints the statistics report (text or JSON) and exits.
fn main() {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("[!] FATAL: Could not read config '{}': {}", path, e);
                process::exit(1);
            });
            toml::from_str::<SimConfig>(&content).unwrap_or_else(|e| {
                eprintln!("[!] FATAL: Could not parse config '{}': {}", path, e);
                process::exit(1);
            })
        }
        None => SimConfig::default(),
    };

    if let Some(policy) = args.policy {
        config.policy = policy;
    }
    if let Some(frames) = args.frames {
        config.frames = frames;
    }
    if let Some(burst) = args.burst {
        config.burst = burst;
    }
    if args.window.is_some() {
        config.window = args.window;
    }
    if let Some(max_refs) = args.max_refs {
        config.max_refs = max_refs;
    }

    if config.burst == 0 {
        eprintln!("[!] FATAL: Burst size must be positive.");
        process::exit(1);
    }
    if args.trace.len() > usize::from(Pid::MAX) + 1 {
        eprintln!("[!] FATAL: Too many trace files (max {}).", Pid::MAX as usize + 1);
        process::exit(1);
    }

    // One pid per trace stream, in the order given.
    let pids: Vec<Pid> = (0..args.trace.len()).map(|i| i as Pid).collect();

    let mut memory =
        Memory::new(config.frames, config.policy, &pids, config.window).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: {}", e);
            eprintln!("Usage:");
            eprintln!("  vmem-sim --policy lru --frames N --trace <file> [--trace <file>]");
            eprintln!("  vmem-sim --policy ws --frames N --window W --trace <file> ...");
            process::exit(1);
        });

    let mut readers: Vec<TraceReader<_>> = args
        .trace
        .iter()
        .map(|path| {
            TraceReader::open(path).unwrap_or_else(|e| {
                eprintln!("[!] FATAL: Could not open trace '{}': {}", path, e);
                process::exit(1);
            })
        })
        .collect();

    println!("Simulation Configuration");
    println!("------------------------");
    println!("  Policy:             {}", config.policy);
    println!("  Frames:             {}", config.frames);
    println!("  Burst (q):          {}", config.burst);
    if config.policy == Policy::Ws {
        println!("  WS Window:          {}", config.window.unwrap_or(0));
    }
    if config.max_refs > 0 {
        println!("  Max References:     {}", config.max_refs);
    } else {
        println!("  Max References:     No Limit");
    }
    for (pid, path) in args.trace.iter().enumerate() {
        println!("  Trace (pid {}):      {}", pid, path);
    }
    println!("------------------------");

    let mut refs_read: u64 = 0;
    let mut exhausted = false;

    while !exhausted && (config.max_refs == 0 || refs_read < config.max_refs) {
        for (stream, reader) in readers.iter_mut().enumerate() {
            let pid = pids[stream];

            for _ in 0..config.burst {
                let record = match reader.next_ref() {
                    Ok(Some(record)) => record,
                    Ok(None) => {
                        // One stream dry ends the run after this round.
                        exhausted = true;
                        break;
                    }
                    Err(e) => {
                        eprintln!("[!] FATAL: {} ('{}')", e, args.trace[stream]);
                        process::exit(1);
                    }
                };

                refs_read += 1;

                if let Err(e) = memory.retrieve(record.addr, record.mode, pid) {
                    eprintln!("\n[!] FATAL: {}", e);
                    memory.stats().print(config.frames);
                    process::exit(1);
                }
            }
        }
    }

    println!("\n[*] Replayed {} references.", refs_read);

    if args.json {
        let report = serde_json::to_string_pretty(memory.stats()).unwrap_or_else(|e| {
            eprintln!("[!] FATAL: Could not serialize stats: {}", e);
            process::exit(1);
        });
        println!("{}", report);
    } else {
        memory.stats().print(config.frames);
    }
}
