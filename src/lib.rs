//! Streaming rewrite of MGI FASTQ read IDs into Illumina read IDs.
//!
//! - Plain and `.gz` input (auto-detect), gzip output.
//! - Streaming, record-by-record (no full-file buffering).
//! - Single-end or paired-end; a paired run whose files differ in record
//!   count is an error, not a silent truncation.
//! - Sequence and quality lines pass through untouched; only the read name
//!   changes.
//! - Optional `mmap` for plain files; `zlib` feature for system-zlib parity.

pub mod convert;
pub mod error;
pub mod meta;
pub mod paired;
pub mod policy;
pub mod reader;
pub mod readid;
pub mod record;
pub mod writer;
mod util;

pub use crate::convert::{ConvertStats, Converter, Job};
pub use crate::error::{FastqError, FormatError, IoContext, Mate};
pub use crate::meta::{MetadataBuilder, RunMetadata};
pub use crate::paired::PairedFastqReader;
pub use crate::policy::{ReaderOptions, SeparatorPolicy, WriterOptions};
pub use crate::reader::{FastqReader, Source};
pub use crate::readid::{IlluminaReadId, MgiReadId, transcode};
pub use crate::record::FastqRecord;
pub use crate::writer::{FastqWriter, PairedFastqWriter, paired_output_paths};
