use crate::error::FastqError;

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

pub fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.stream_position()?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == [0x1F, 0x8B])
}

pub fn open_file(path: &Path) -> Result<File, FastqError> {
    File::open(path).map_err(|e| FastqError::open_err(e, path))
}

pub fn create_file(path: &Path) -> Result<File, FastqError> {
    File::create(path).map_err(|e| FastqError::open_err(e, path))
}
