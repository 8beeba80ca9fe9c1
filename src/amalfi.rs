//! Reader for the AMALFI binary graph format: a little-endian `u16` vertex
//! count, followed by one record per vertex — a `u16` out-degree and that
//! many `u16` target indices.
//!
//! Grounded on `original_source/main.cpp`'s
//! `read_amalfi<simple_adjacency_list<uint16_t>>` call site; the header
//! itself was filtered out of the retrieved source, so the format below is
//! pinned by that call site plus `SPEC_FULL.md` §6, not transcribed from a
//! header we could read directly.

use error_stack::{Report, ResultExt};

use crate::error::AmalfiError;
use crate::graph::Graph;

/// Parses an AMALFI-encoded graph out of `bytes`.
pub fn read_amalfi(bytes: &[u8]) -> Result<Graph, Report<AmalfiError>> {
    let mut cursor = Cursor { bytes, pos: 0 };
    let n = cursor.read_u16().change_context(AmalfiError::UnexpectedEof)? as usize;

    let mut edges = Vec::new();
    for u in 0..n {
        let out_degree = cursor
            .read_u16()
            .change_context(AmalfiError::UnexpectedEof)
            .attach_printable_lazy(|| format!("reading out-degree of vertex {u}"))? as usize;
        for _ in 0..out_degree {
            let v = cursor
                .read_u16()
                .change_context(AmalfiError::TruncatedRecord)
                .attach_printable_lazy(|| format!("reading a target of vertex {u}"))? as usize;
            if v >= n {
                return Err(Report::new(AmalfiError::TruncatedRecord)
                    .attach_printable(format!("vertex {u} names out-of-range target {v} (n = {n})")));
            }
            edges.push((u, v));
        }
    }
    if !cursor.is_exhausted() {
        return Err(Report::new(AmalfiError::TruncatedRecord).attach_printable("trailing bytes after the last record"));
    }
    Ok(Graph::new(n, edges))
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn read_u16(&mut self) -> Result<u16, Report<AmalfiError>> {
        let Some(chunk) = self.bytes.get(self.pos..self.pos + 2) else {
            return Err(Report::new(AmalfiError::UnexpectedEof));
        };
        self.pos += 2;
        Ok(u16::from_le_bytes([chunk[0], chunk[1]]))
    }

    fn is_exhausted(&self) -> bool {
        self.pos == self.bytes.len()
    }
}
