use flate2::Compression;

/// How the third line of a record is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorPolicy {
    /// Read and discard whatever is there.
    #[default]
    Ignore,
    /// Fail with `MissingPlus` unless the line starts with '+'.
    Require,
}

#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    pub separator: SeparatorPolicy,
}

#[derive(Debug, Clone, Copy)]
pub struct WriterOptions {
    /// gzip level, 0..=9.
    pub level: u32,
}

impl WriterOptions {
    pub(crate) fn compression(&self) -> Compression {
        Compression::new(self.level.min(9))
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            level: Compression::default().level(),
        }
    }
}
