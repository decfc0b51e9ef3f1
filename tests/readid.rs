use mgi_readid_convert::{FormatError, IlluminaReadId, MgiReadId, RunMetadata, transcode};

fn meta() -> RunMetadata {
    RunMetadata {
        instrument_id: "ID2".into(),
        run_id: "ID1".into(),
        i5: "AAAAA".into(),
        i7: "TTTTT".into(),
    }
}

fn assert_malformed(id: &str) {
    assert_eq!(
        transcode(id, &meta()),
        Err(FormatError::MalformedIdentifier { id: id.to_string() }),
        "{id} should be rejected"
    );
}

#[test]
fn convert_mate_one() {
    assert_eq!(
        transcode("V350018879L4C001R0020000010/1", &meta()).unwrap(),
        "ID2:ID1:V350018879:4:10:1:2 1:N:0:AAAAA+TTTTT"
    );
}

#[test]
fn convert_mate_two() {
    assert_eq!(
        transcode("V350018879L4C001R0020000010/2", &meta()).unwrap(),
        "ID2:ID1:V350018879:4:10:1:2 2:N:0:AAAAA+TTTTT"
    );
}

#[test]
fn fields_are_parsed_and_reordered() {
    let id = MgiReadId::parse("E100012345L02C123R0451234567/2").unwrap();
    assert_eq!(
        id,
        MgiReadId {
            flowcell: "E100012345",
            lane: "2",
            column: "123",
            row: "45",
            seq: "1234567",
            mate: 2,
        }
    );
    let meta = RunMetadata {
        instrument_id: "R000000000001".into(),
        run_id: "20210917154250".into(),
        i5: "CACTAGCG".into(),
        i7: "AATAATCT".into(),
    };
    assert_eq!(
        IlluminaReadId::new(&meta, &id).to_string(),
        "R000000000001:20210917154250:E100012345:2:1234567:123:45 2:N:0:CACTAGCG+AATAATCT"
    );
}

#[test]
fn marker_letters_inside_flowcell() {
    // last L/C/R wins, as the numeric fields cannot hold letters
    let id = MgiReadId::parse("RCL9L1C2R0031/1").unwrap();
    assert_eq!(id.flowcell, "RCL9");
    assert_eq!((id.lane, id.column, id.row, id.seq), ("1", "2", "3", "1"));
}

#[test]
fn all_zero_fields_render_as_zero() {
    assert_eq!(
        transcode("FC1L00C000R0000000/2", &meta()).unwrap(),
        "ID2:ID1:FC1:0:0:0:0 2:N:0:AAAAA+TTTTT"
    );
}

#[test]
fn values_wider_than_u64_pass_through() {
    let meta = RunMetadata {
        instrument_id: "ID2".into(),
        run_id: "ID1".into(),
        i5: "A".into(),
        i7: "T".into(),
    };
    assert_eq!(
        transcode("V3L4C001R00299999999999999999999999/1", &meta).unwrap(),
        "ID2:ID1:V3:4:99999999999999999999999:1:2 1:N:0:A+T"
    );
    assert_eq!(
        transcode("V3L000000000000000000000000007C1R0011/2", &meta).unwrap(),
        "ID2:ID1:V3:7:1:1:1 2:N:0:A+T"
    );
}

#[test]
fn same_input_same_output() {
    let a = transcode("V350018879L1C010R0100000001/1", &meta()).unwrap();
    let b = transcode("V350018879L1C010R0100000001/1", &meta()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rejects_missing_or_bad_mate() {
    assert_malformed("V350018879L4C001R0020000010");
    assert_malformed("V350018879L4C001R0020000010/3");
    assert_malformed("V350018879L4C001R0020000010/");
    assert_malformed("V350018879L4C001R0020000010/12");
}

#[test]
fn rejects_short_row() {
    // three digits in total leave nothing for the sequence number
    assert_malformed("V350018879L4C001R002/1");
    assert_malformed("V350018879L4C001R02/1");
}

#[test]
fn rejects_structural_damage() {
    assert_malformed("");
    assert_malformed("L4C001R0020000010/1");
    assert_malformed("V3500_18879L4C001R0020000010/1");
    assert_malformed("V350018879LC001R0020000010/1");
    assert_malformed("V350018879L4CR0020000010/1");
    assert_malformed("V350018879L4C0x1R0020000010/1");
    assert_malformed("V350018879L4C001R00200000a0/1");
    assert_malformed("V350018879C001L4R0020000010/1");
    assert_malformed("SRR000001.1/1");
    // multi-byte characters around the row/sequence split
    assert_malformed("V3L4C001R00\u{e9}/1");
    assert_malformed("V3L4C001R0\u{e9}12/1");
    assert_malformed("V3L4C001R\u{e9}0012/1");
    assert_malformed("V3L\u{0664}C001R0020000010/1");
}
