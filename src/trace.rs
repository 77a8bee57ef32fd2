//! Memory-trace file reading.
//!
//! A trace is a text file with one reference per line: a hexadecimal
//! 32-bit address followed by an access mode character, `R` or `W`.
//!
//! ```text
//! 0041f7a0 R
//! 13f5e2c0 R
//! 004c6ab0 W
//! ```
//!
//! Blank lines are skipped; any extra columns after the mode are ignored.
//! Malformed lines are reported with their line number, not silently
//! dropped.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::mem::AccessMode;

/// One parsed trace record: a raw address and its access mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRef {
    pub addr: u32,
    pub mode: AccessMode,
}

/// Failure while reading a trace.
#[derive(Debug)]
pub enum TraceError {
    /// Underlying I/O failure.
    Io(io::Error),

    /// A line that is neither blank nor a valid reference record.
    Parse { line: usize, content: String },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::Io(e) => write!(f, "trace read error: {}", e),
            TraceError::Parse { line, content } => {
                write!(f, "malformed trace record at line {}: '{}'", line, content)
            }
        }
    }
}

impl std::error::Error for TraceError {}

impl From<io::Error> for TraceError {
    fn from(e: io::Error) -> Self {
        TraceError::Io(e)
    }
}

/// Pull-based reader over a trace stream.
///
/// Generic over the buffered source so tests can drive it from in-memory
/// data; the driver opens real files through [`TraceReader::open`].
pub struct TraceReader<R: BufRead> {
    source: R,
    line_no: usize,
    buf: String,
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file for reading.
    pub fn open(path: &str) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps an already-buffered source.
    pub fn new(source: R) -> Self {
        Self {
            source,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// Reads the next reference record.
    ///
    /// # Returns
    ///
    /// `Ok(Some(record))` for a parsed line, `Ok(None)` at end of stream,
    /// or an error for I/O failures and malformed lines.
    pub fn next_ref(&mut self) -> Result<Option<TraceRef>, TraceError> {
        loop {
            self.buf.clear();
            if self.source.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let line = self.buf.trim();
            if line.is_empty() {
                continue;
            }

            match parse_record(line) {
                Some(record) => return Ok(Some(record)),
                None => {
                    return Err(TraceError::Parse {
                        line: self.line_no,
                        content: line.to_string(),
                    })
                }
            }
        }
    }
}

/// Parses a single non-blank trace line.
fn parse_record(line: &str) -> Option<TraceRef> {
    let mut fields = line.split_whitespace();

    let addr = u32::from_str_radix(fields.next()?, 16).ok()?;

    let mode_field = fields.next()?;
    let mode = match mode_field {
        "R" => AccessMode::Read,
        "W" => AccessMode::Write,
        _ => return None,
    };

    Some(TraceRef { addr, mode })
}
