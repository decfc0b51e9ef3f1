//! Run-level fields stamped into every converted read name.

use rand::Rng;

const BARCODE_ALPHABET: &[u8] = b"CGTA";
const BARCODE_LEN: usize = 12;
const INSTRUMENT_DIGITS: usize = 12;

/// Instrument, run and index barcodes shared by every record of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    pub instrument_id: String,
    pub run_id: String,
    pub i5: String,
    pub i7: String,
}

/// Caller-supplied values, any of which may be left out and filled in by
/// [`MetadataBuilder::resolve`].
#[derive(Debug, Clone, Default)]
pub struct MetadataBuilder {
    pub instrument_id: Option<String>,
    pub run_id: Option<String>,
    pub i5: Option<String>,
    pub i7: Option<String>,
}

impl MetadataBuilder {
    pub fn instrument_id(mut self, v: impl Into<String>) -> Self {
        self.instrument_id = Some(v.into());
        self
    }
    pub fn run_id(mut self, v: impl Into<String>) -> Self {
        self.run_id = Some(v.into());
        self
    }
    pub fn i5(mut self, v: impl Into<String>) -> Self {
        self.i5 = Some(v.into());
        self
    }
    pub fn i7(mut self, v: impl Into<String>) -> Self {
        self.i7 = Some(v.into());
        self
    }

    /// Fill gaps from the thread RNG and the local clock.
    pub fn resolve(self) -> RunMetadata {
        let mut rng = rand::thread_rng();
        let now = chrono::Local::now().format("%Y%m%d%H%M%S").to_string();
        self.resolve_with(&mut rng, now)
    }

    /// Fill gaps: barcodes become random 12-mers over `CGTA`, the run ID
    /// becomes `timestamp`, the instrument ID becomes `R` + 12 random digits.
    pub fn resolve_with<R: Rng + ?Sized>(self, rng: &mut R, timestamp: String) -> RunMetadata {
        let meta = RunMetadata {
            instrument_id: self
                .instrument_id
                .unwrap_or_else(|| random_instrument_id(rng)),
            run_id: self.run_id.unwrap_or(timestamp),
            i5: self.i5.unwrap_or_else(|| random_barcode(rng)),
            i7: self.i7.unwrap_or_else(|| random_barcode(rng)),
        };
        log::debug!("resolved run metadata: {meta:?}");
        meta
    }
}

pub fn random_barcode<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..BARCODE_LEN)
        .map(|_| BARCODE_ALPHABET[rng.gen_range(0..BARCODE_ALPHABET.len())] as char)
        .collect()
}

pub fn random_instrument_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut id = String::with_capacity(INSTRUMENT_DIGITS + 1);
    id.push('R');
    id.extend((0..INSTRUMENT_DIGITS).map(|_| char::from(b'0' + rng.gen_range(0..10u8))));
    id
}
