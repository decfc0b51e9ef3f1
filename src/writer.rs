use crate::error::{FastqError, IoContext};
use crate::policy::WriterOptions;
use crate::record::FastqRecord;
use crate::util::create_file;

use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const BUF_CAPACITY: usize = 256 * 1024;

/// Gzip FASTQ writer.
///
/// Records go out as `@id\nseq\n+\nqual\n`. Call [`FastqWriter::finish`] to
/// see trailer errors; a writer dropped without it still finalizes the gzip
/// stream, but any error on that path is lost.
pub struct FastqWriter<W: Write = File> {
    out: BufWriter<GzEncoder<W>>,
    records: u64,
    byte_pos: u64,
}

impl FastqWriter<File> {
    pub fn to_path<P: AsRef<Path>>(path: P, opts: WriterOptions) -> Result<Self, FastqError> {
        let path = path.as_ref();
        let f = create_file(path)?;
        log::debug!("writing {} (gzip level {})", path.display(), opts.level);
        Ok(Self::new(f, opts))
    }
}

impl<W: Write> FastqWriter<W> {
    pub fn new(inner: W, opts: WriterOptions) -> Self {
        let enc = GzEncoder::new(inner, opts.compression());
        Self {
            out: BufWriter::with_capacity(BUF_CAPACITY, enc),
            records: 0,
            byte_pos: 0,
        }
    }

    pub fn records_written(&self) -> u64 {
        self.records
    }

    pub fn write_record(&mut self, rec: &FastqRecord) -> Result<(), FastqError> {
        self.put(rec).map_err(|e| FastqError::io_err(e, self.ctx()))?;
        self.records += 1;
        self.byte_pos += (rec.id.len() + rec.seq.len() + rec.qual.len() + 6) as u64;
        Ok(())
    }

    fn put(&mut self, rec: &FastqRecord) -> io::Result<()> {
        self.out.write_all(b"@")?;
        self.out.write_all(rec.id.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.write_all(&rec.seq)?;
        self.out.write_all(b"\n+\n")?;
        self.out.write_all(&rec.qual)?;
        self.out.write_all(b"\n")
    }

    /// Flush buffers and write the gzip trailer. Returns the inner sink.
    pub fn finish(self) -> Result<W, FastqError> {
        let ctx = self.ctx();
        let enc = self
            .out
            .into_inner()
            .map_err(|e| FastqError::io_err(e.into_error(), ctx))?;
        enc.finish().map_err(|e| FastqError::io_err(e, ctx))
    }

    fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.records * 4,
        }
    }
}

/// Output file names for a paired run: `<prefix>_C_R1.fastq.gz` and
/// `<prefix>_C_R2.fastq.gz`.
pub fn paired_output_paths(prefix: &Path) -> (PathBuf, PathBuf) {
    let with = |suffix: &str| {
        let mut name = prefix.as_os_str().to_os_string();
        name.push(suffix);
        PathBuf::from(name)
    };
    (with("_C_R1.fastq.gz"), with("_C_R2.fastq.gz"))
}

/// R1/R2 writers advanced together.
pub struct PairedFastqWriter<W: Write = File> {
    r1: FastqWriter<W>,
    r2: FastqWriter<W>,
}

impl PairedFastqWriter<File> {
    /// Create both mates' files from a common prefix.
    pub fn to_prefix<P: AsRef<Path>>(prefix: P, opts: WriterOptions) -> Result<Self, FastqError> {
        let (p1, p2) = paired_output_paths(prefix.as_ref());
        Ok(Self::new(
            FastqWriter::to_path(p1, opts)?,
            FastqWriter::to_path(p2, opts)?,
        ))
    }
}

impl<W: Write> PairedFastqWriter<W> {
    pub fn new(r1: FastqWriter<W>, r2: FastqWriter<W>) -> Self {
        Self { r1, r2 }
    }

    pub fn write_pair(&mut self, r1: &FastqRecord, r2: &FastqRecord) -> Result<(), FastqError> {
        self.r1.write_record(r1)?;
        self.r2.write_record(r2)
    }

    pub fn pairs_written(&self) -> u64 {
        self.r1.records_written()
    }

    pub fn finish(self) -> Result<(W, W), FastqError> {
        let Self { r1, r2 } = self;
        // finalize R2 even if R1 fails
        let a = r1.finish();
        let b = r2.finish();
        Ok((a?, b?))
    }
}
