use crate::error::{FastqError, FormatError, IoContext};
use crate::policy::{ReaderOptions, SeparatorPolicy};
use crate::record::FastqRecord;
use crate::util::{looks_like_gzip, open_file};

use flate2::read::MultiGzDecoder;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

const BUF_CAPACITY: usize = 256 * 1024;

#[derive(Debug)]
pub enum Source {
    Path(PathBuf),
    Reader,
}

/// Sync FASTQ reader (plain/.gz), streaming, one 4-line record at a time.
pub struct FastqReader {
    src: Source,
    rdr: Box<dyn BufRead + Send>,
    opts: ReaderOptions,
    line_num: u64,
    byte_pos: u64,
    records: u64,
    header: String,
    line: Vec<u8>,
}

impl FastqReader {
    /// Open from a file path. Auto-detect `.gz` by extension or magic bytes.
    pub fn from_path<P: AsRef<Path>>(path: P, opts: ReaderOptions) -> Result<Self, FastqError> {
        let path = path.as_ref();
        let f = open_file(path)?;

        let is_gz = path.extension().and_then(|s| s.to_str()) == Some("gz")
            || looks_like_gzip(&f).unwrap_or(false);
        log::debug!("opening {} (gzip: {is_gz})", path.display());

        let rdr: Box<dyn BufRead + Send> = if is_gz {
            let dec = MultiGzDecoder::new(f);
            Box::new(BufReader::with_capacity(BUF_CAPACITY, dec))
        } else {
            #[cfg(feature = "mmap")]
            {
                use memmap2::Mmap;
                use std::io::Cursor;
                // Own the Mmap inside Cursor to avoid self-ref problems
                let mmap = unsafe { Mmap::map(&f) }
                    .map_err(|e| FastqError::io_err(e, IoContext::START))?;
                Box::new(BufReader::with_capacity(2 * BUF_CAPACITY, Cursor::new(mmap)))
            }
            #[cfg(not(feature = "mmap"))]
            {
                Box::new(BufReader::with_capacity(BUF_CAPACITY, f))
            }
        };

        Ok(Self::new(Source::Path(path.to_path_buf()), rdr, opts))
    }

    /// Wrap an arbitrary `BufRead` (stdin, an in-memory buffer, ...).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R, opts: ReaderOptions) -> Self {
        Self::new(Source::Reader, Box::new(reader), opts)
    }

    fn new(src: Source, rdr: Box<dyn BufRead + Send>, opts: ReaderOptions) -> Self {
        Self {
            src,
            rdr,
            opts,
            line_num: 0,
            byte_pos: 0,
            records: 0,
            header: String::with_capacity(128),
            line: Vec::with_capacity(256),
        }
    }

    pub fn source(&self) -> &Source {
        &self.src
    }

    /// Number of complete records returned so far.
    pub fn records_read(&self) -> u64 {
        self.records
    }

    /// Next record, `None` at a clean end of input.
    pub fn next_record(&mut self) -> Option<Result<FastqRecord, FastqError>> {
        match self.read_one() {
            Ok(Some(rec)) => {
                self.records += 1;
                Some(Ok(rec))
            }
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }

    fn read_line(rdr: &mut dyn BufRead, buf: &mut String) -> io::Result<usize> {
        buf.clear();
        let n = rdr.read_line(buf)?;
        if buf.ends_with('\n') {
            buf.pop();
        }
        if buf.ends_with('\r') {
            buf.pop();
        }
        Ok(n)
    }

    /// Like `read_line`, but keeps the bytes as they are.
    fn read_raw_line(rdr: &mut dyn BufRead, buf: &mut Vec<u8>) -> io::Result<usize> {
        buf.clear();
        let n = rdr.read_until(b'\n', buf)?;
        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }
        Ok(n)
    }

    /// Reads into `self.line`; EOF here means the record was cut short.
    fn record_line(&mut self) -> Result<(), FastqError> {
        let n = Self::read_raw_line(self.rdr.as_mut(), &mut self.line)
            .map_err(|e| FastqError::io_err(e, self.ctx()))?;
        if n == 0 {
            return Err(FastqError::fmt_err(FormatError::TruncatedInput, self.ctx()));
        }
        self.line_num += 1;
        self.byte_pos += n as u64;
        Ok(())
    }

    fn read_one(&mut self) -> Result<Option<FastqRecord>, FastqError> {
        // seek first non-empty line
        loop {
            let n = Self::read_line(self.rdr.as_mut(), &mut self.header)
                .map_err(|e| FastqError::io_err(e, self.ctx()))?;
            if n == 0 {
                return Ok(None);
            }
            self.line_num += 1;
            self.byte_pos += n as u64;
            if !self.header.is_empty() {
                break;
            }
        }

        let Some(name) = self.header.strip_prefix('@') else {
            let err = if self.header.starts_with('>') {
                FormatError::FastaHeaderDetected
            } else {
                FormatError::MissingHeader
            };
            return Err(FastqError::fmt_err(err, self.ctx()));
        };

        let mut parts = name.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        self.record_line()?;
        let seq = self.line.clone();

        self.record_line()?;
        if self.opts.separator == SeparatorPolicy::Require && !self.line.starts_with(b"+") {
            return Err(FastqError::fmt_err(FormatError::MissingPlus, self.ctx()));
        }

        self.record_line()?;
        let qual = self.line.clone();

        Ok(Some(FastqRecord {
            id,
            desc,
            seq,
            qual,
        }))
    }

    #[inline]
    pub(crate) fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}

impl Iterator for FastqReader {
    type Item = Result<FastqRecord, FastqError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}
