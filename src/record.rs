/// One FASTQ read. `id` is the header text after `@` up to the first
/// whitespace; anything after it lands in `desc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

impl FastqRecord {
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Same read under a new identifier; sequence and quality are moved as-is.
    pub fn with_id(self, id: String) -> Self {
        Self {
            id,
            desc: None,
            seq: self.seq,
            qual: self.qual,
        }
    }
}
