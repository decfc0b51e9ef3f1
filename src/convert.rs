//! Streaming conversion: read a record (or pair), rename it, write it out.
//!
//! Single-end and paired-end runs share this one code path; the mode is
//! picked by the [`Job`] variant.

use crate::error::{FastqError, IoContext, Mate};
use crate::meta::RunMetadata;
use crate::paired::PairedFastqReader;
use crate::policy::{ReaderOptions, WriterOptions};
use crate::reader::FastqReader;
use crate::readid::transcode;
use crate::record::FastqRecord;
use crate::writer::{FastqWriter, PairedFastqWriter};

use std::io::Write;
use std::path::PathBuf;

/// What to convert and where to put it.
#[derive(Debug, Clone)]
pub enum Job {
    /// One input, written to exactly `output`.
    Single { input: PathBuf, output: PathBuf },
    /// R1/R2 inputs, written to `<prefix>_C_R1.fastq.gz` / `<prefix>_C_R2.fastq.gz`.
    Paired {
        r1: PathBuf,
        r2: PathBuf,
        prefix: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertStats {
    /// Records per output file; in paired mode this counts pairs.
    pub records: u64,
}

pub struct Converter {
    meta: RunMetadata,
    reader_opts: ReaderOptions,
    writer_opts: WriterOptions,
}

impl Converter {
    pub fn new(meta: RunMetadata) -> Self {
        Self {
            meta,
            reader_opts: ReaderOptions::default(),
            writer_opts: WriterOptions::default(),
        }
    }

    pub fn reader_options(mut self, opts: ReaderOptions) -> Self {
        self.reader_opts = opts;
        self
    }

    pub fn writer_options(mut self, opts: WriterOptions) -> Self {
        self.writer_opts = opts;
        self
    }

    pub fn metadata(&self) -> &RunMetadata {
        &self.meta
    }

    pub fn run(&self, job: &Job) -> Result<ConvertStats, FastqError> {
        log::info!("start converting {job:?}");
        let stats = match job {
            Job::Single { input, output } => {
                let rdr = FastqReader::from_path(input, self.reader_opts.clone())?;
                let wtr = FastqWriter::to_path(output, self.writer_opts)?;
                self.convert_single(rdr, wtr)?
            }
            Job::Paired { r1, r2, prefix } => {
                let rdr = PairedFastqReader::from_paths(r1, r2, self.reader_opts.clone())?;
                let wtr = PairedFastqWriter::to_prefix(prefix, self.writer_opts)?;
                self.convert_paired(rdr, wtr)?
            }
        };
        log::info!("finished writing {} records", stats.records);
        Ok(stats)
    }

    /// Convert every record of `rdr` into `wtr`, then finalize `wtr`.
    pub fn convert_single<W: Write>(
        &self,
        mut rdr: FastqReader,
        mut wtr: FastqWriter<W>,
    ) -> Result<ConvertStats, FastqError> {
        let mut records = 0u64;
        while let Some(rec) = rdr.next_record() {
            let rec = self.rename(rec?, rdr.ctx())?;
            wtr.write_record(&rec)?;
            records += 1;
        }
        wtr.finish()?;
        Ok(ConvertStats { records })
    }

    /// Convert an R1/R2 pair stream into `wtr`, then finalize `wtr`.
    pub fn convert_paired<W: Write>(
        &self,
        mut rdr: PairedFastqReader,
        mut wtr: PairedFastqWriter<W>,
    ) -> Result<ConvertStats, FastqError> {
        let mut records = 0u64;
        while let Some(pair) = rdr.next() {
            let (a, b) = pair?;
            let a = self.rename(a, rdr.ctx(Mate::R1))?;
            let b = self.rename(b, rdr.ctx(Mate::R2))?;
            wtr.write_pair(&a, &b)?;
            records += 1;
        }
        wtr.finish()?;
        Ok(ConvertStats { records })
    }

    /// `ctx` points just past the record, for error reporting.
    fn rename(&self, rec: FastqRecord, ctx: IoContext) -> Result<FastqRecord, FastqError> {
        let id = transcode(&rec.id, &self.meta).map_err(|e| FastqError::fmt_err(e, ctx))?;
        Ok(rec.with_id(id))
    }
}
