//! Lockstep iteration over an R1/R2 file pair.
//!
//! Both readers advance one record per step. When one side runs out before
//! the other the pair is reported as `MismatchedPairLength`; the shorter file
//! is never used to silently cut the longer one.

use crate::error::{FastqError, FormatError, IoContext, Mate};
use crate::policy::ReaderOptions;
use crate::reader::FastqReader;
use crate::record::FastqRecord;

use std::path::Path;

pub struct PairedFastqReader {
    r1: FastqReader,
    r2: FastqReader,
    pairs: u64,
    done: bool,
}

impl PairedFastqReader {
    pub fn from_paths<P1: AsRef<Path>, P2: AsRef<Path>>(
        r1: P1,
        r2: P2,
        opts: ReaderOptions,
    ) -> Result<Self, FastqError> {
        let r1 = FastqReader::from_path(r1, opts.clone())?;
        let r2 = FastqReader::from_path(r2, opts)?;
        Ok(Self::from_readers(r1, r2))
    }

    pub fn from_readers(r1: FastqReader, r2: FastqReader) -> Self {
        Self {
            r1,
            r2,
            pairs: 0,
            done: false,
        }
    }

    /// Number of complete pairs returned so far.
    pub fn pairs_read(&self) -> u64 {
        self.pairs
    }

    pub(crate) fn ctx(&self, mate: Mate) -> IoContext {
        match mate {
            Mate::R1 => self.r1.ctx(),
            Mate::R2 => self.r2.ctx(),
        }
    }

    fn mismatch(&self, longer: Mate) -> FastqError {
        FastqError::fmt_err(
            FormatError::MismatchedPairLength {
                longer,
                pairs: self.pairs,
            },
            self.ctx(longer),
        )
    }
}

impl Iterator for PairedFastqReader {
    type Item = Result<(FastqRecord, FastqRecord), FastqError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = match (self.r1.next_record(), self.r2.next_record()) {
            (Some(Ok(a)), Some(Ok(b))) => {
                self.pairs += 1;
                return Some(Ok((a, b)));
            }
            (None, None) => return None,
            (Some(Err(e)), _) | (_, Some(Err(e))) => e,
            (Some(Ok(_)), None) => self.mismatch(Mate::R1),
            (None, Some(Ok(_))) => self.mismatch(Mate::R2),
        };
        self.done = true;
        Some(Err(item))
    }
}
