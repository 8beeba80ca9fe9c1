//! Error contexts for the one fallible boundary in this crate: reading an
//! AMALFI graph file and running the CLI around it. The matching engine
//! itself is fallible-free (`assign` returns `bool`, not `Result`).
//!
//! Grounded on the teacher's `error-stack::Context` pattern
//! (`crates/core/src/error.rs`,
//! `crates/algorithms/src/shortest_paths/dijkstra/error.rs`): a small enum
//! implementing `Display`/`Error`, attached to an `error_stack::Report` at
//! the point of failure rather than carrying its own backtrace/context data.

use std::fmt;

/// Failure while decoding an AMALFI binary graph file.
#[derive(Debug)]
pub enum AmalfiError {
    /// The file ended before a complete header or record could be read.
    UnexpectedEof,
    /// A vertex's out-degree field named more targets than bytes remained,
    /// or trailing bytes followed the last record.
    TruncatedRecord,
}

impl fmt::Display for AmalfiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmalfiError::UnexpectedEof => write!(f, "unexpected end of AMALFI file"),
            AmalfiError::TruncatedRecord => write!(f, "truncated AMALFI record"),
        }
    }
}

impl std::error::Error for AmalfiError {}

/// The CLI's top-level error.
#[derive(Debug)]
pub enum CliError {
    Io,
    Parse,
    UsageError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io => write!(f, "I/O error"),
            CliError::Parse => write!(f, "failed to parse an AMALFI graph file"),
            CliError::UsageError(msg) => write!(f, "usage error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}
