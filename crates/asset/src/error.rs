//! Errors produced by the OBJ importer.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjError {
    #[error("failed to open OBJ file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read OBJ line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A `v`/`vn` directive with a missing or non-numeric component.
    #[error("malformed '{directive}' on line {line}: {reason}")]
    MalformedDirective {
        line: usize,
        directive: &'static str,
        reason: String,
    },

    /// A face corner that is none of `p`, `p/t`, `p//n`, `p/t/n`.
    #[error("unparseable face reference '{token}' on line {line}")]
    MalformedFace { line: usize, token: String },

    #[error("{kind} index {raw} on line {line} is out of range (have {len})")]
    IndexOutOfRange {
        line: usize,
        kind: &'static str,
        raw: i64,
        len: usize,
    },

    #[error("OBJ contained no triangles")]
    EmptyMesh,
}

impl ObjError {
    /// `true` for failures to open or read the source, as opposed to bad geometry.
    pub fn is_io(&self) -> bool {
        matches!(self, ObjError::Open { .. } | ObjError::Read { .. })
    }
}
