use mgi_readid_convert::{
    FastqError, FastqReader, FormatError, ReaderOptions, SeparatorPolicy,
};
use std::io::BufReader;

const SAMPLE: &str = "\
@read1 desc
ACGTN
+
!!!!!
@read2
ACGT
+read2
####";

fn reader(data: &'static str, separator: SeparatorPolicy) -> FastqReader {
    FastqReader::from_bufread(BufReader::new(data.as_bytes()), ReaderOptions { separator })
}

fn format_err(err: FastqError) -> FormatError {
    match err {
        FastqError::Format { source, .. } => source,
        other => panic!("expected format error, got {other}"),
    }
}

#[test]
fn parse_two_records() {
    let mut fq = reader(SAMPLE, SeparatorPolicy::Ignore);

    let r1 = fq.next().unwrap().unwrap();
    assert_eq!(r1.id, "read1");
    assert_eq!(r1.desc.as_deref(), Some("desc"));
    assert_eq!(r1.seq, b"ACGTN");
    assert_eq!(r1.qual, b"!!!!!");

    let r2 = fq.next().unwrap().unwrap();
    assert_eq!(r2.id, "read2");
    assert_eq!(r2.desc, None);
    assert_eq!(r2.seq, b"ACGT");
    assert_eq!(r2.qual, b"####");

    assert!(fq.next().is_none());
    assert_eq!(fq.records_read(), 2);
}

#[test]
fn crlf_and_blank_lines_between_records() {
    let data = "@a\r\nAC\r\n+\r\nII\r\n\n\n@b\nGT\n+\nJJ\n\n";
    let ids: Vec<String> = reader(data, SeparatorPolicy::Ignore)
        .map(|r| r.unwrap().id)
        .collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn separator_content_is_not_checked_by_default() {
    let data = "@a\nACGT\nwhatever\nIIII\n";
    let rec = reader(data, SeparatorPolicy::Ignore).next().unwrap().unwrap();
    assert_eq!(rec.seq, b"ACGT");
    assert_eq!(rec.qual, b"IIII");
}

#[test]
fn strict_separator_rejects_missing_plus() {
    let data = "@a\nACGT\nwhatever\nIIII\n";
    let err = reader(data, SeparatorPolicy::Require).next().unwrap().unwrap_err();
    assert_eq!(format_err(err), FormatError::MissingPlus);
}

#[test]
fn truncated_trailing_record() {
    let data = "@a\nACGT\n+\nIIII\n@b\nACGT\n+\n";
    let mut fq = reader(data, SeparatorPolicy::Ignore);
    assert!(fq.next().unwrap().is_ok());
    let err = fq.next().unwrap().unwrap_err();
    match err {
        FastqError::Format { source, ctx } => {
            assert_eq!(source, FormatError::TruncatedInput);
            assert_eq!(ctx.line_num, 7);
        }
        other => panic!("expected format error, got {other}"),
    }
}

#[test]
fn header_without_marker() {
    let err = reader("read1\nACGT\n+\nIIII\n", SeparatorPolicy::Ignore)
        .next()
        .unwrap()
        .unwrap_err();
    assert_eq!(format_err(err), FormatError::MissingHeader);

    let err = reader(">read1\nACGT\n", SeparatorPolicy::Ignore)
        .next()
        .unwrap()
        .unwrap_err();
    assert_eq!(format_err(err), FormatError::FastaHeaderDetected);
}

#[test]
fn non_utf8_sequence_and_quality_kept_verbatim() {
    let data: &'static [u8] = b"@a\nAC\xffGT\n+\nII\xfe\x80I\n";
    let rec = FastqReader::from_bufread(data, ReaderOptions::default())
        .next()
        .unwrap()
        .unwrap();
    assert_eq!(rec.id, "a");
    assert_eq!(rec.seq, b"AC\xffGT");
    assert_eq!(rec.qual, b"II\xfe\x80I");
}

#[test]
fn empty_input_yields_nothing() {
    assert!(reader("", SeparatorPolicy::Ignore).next().is_none());
}
