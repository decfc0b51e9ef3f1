use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

impl IoContext {
    pub const START: IoContext = IoContext {
        byte_pos: 0,
        line_num: 0,
    };
}

/// Which side of a read pair still had records when the other ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mate {
    R1,
    R2,
}

impl std::fmt::Display for Mate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mate::R1 => f.write_str("R1"),
            Mate::R2 => f.write_str("R2"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected header '@' at start of record")]
    MissingHeader,
    #[error("found FASTA header '>' where FASTQ '@' expected")]
    FastaHeaderDetected,
    #[error("missing '+' separator line")]
    MissingPlus,
    #[error("input ends inside a record")]
    TruncatedInput,
    #[error("read ID does not follow the MGI layout: {id:?}")]
    MalformedIdentifier { id: String },
    #[error("{longer} file has more records than its mate (continues after {pairs} pairs)")]
    MismatchedPairLength { longer: Mate, pairs: u64 },
}

#[derive(Debug, Error)]
pub enum FastqError {
    #[error("cannot open {path:?}: {source}")]
    Open {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
    #[error("I/O error at {ctx:?}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("format error at {ctx:?}: {source}")]
    Format {
        #[source]
        source: FormatError,
        ctx: IoContext,
    },
}

impl FastqError {
    pub(crate) fn open_err(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Open {
            source,
            path: path.into(),
        }
    }
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn fmt_err(source: FormatError, ctx: IoContext) -> Self {
        Self::Format { source, ctx }
    }

    /// The format-level cause, if this is a format error.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::Format { source, .. } => Some(source),
            _ => None,
        }
    }
}
