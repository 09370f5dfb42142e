//! Decoder behavior against wire messages: header handling, field-scoped
//! errors, repetition modes, and trigger selection failures.

use octofhir_hl7v2::versions::v251::V251;
use octofhir_hl7v2::{DecodeOptions, Decoder, EncodeOptions, Encoder, Hl7Error, Value};

fn decoder(options: DecodeOptions) -> Decoder<V251> {
    Decoder::new(V251, options)
}

#[test]
fn minimal_header_decodes_alone() {
    let raw = b"MSH|^~\\&|||||||^^";
    let dec = decoder(DecodeOptions {
        header_only: true,
        ..Default::default()
    });
    let list = dec.decode_segments(raw).expect("decode");
    assert_eq!(list.len(), 1);
    let msh = &list[0].segment;
    assert_eq!(msh.id(), "MSH");
    assert!(msh.field(8).is_empty(), "security should be empty");
    assert!(msh.field(9).is_empty(), "message type is all-empty components");

    // The encoded form is a prefix of the input: only trailing emptiness
    // differs.
    let encoder = Encoder::new(EncodeOptions {
        trim_trailing_separator: true,
    });
    let out = encoder.encode_segment(msh);
    let line = &out[..out.len() - 1];
    assert!(raw.starts_with(line), "expected prefix, got {line:?}");
}

#[test]
fn header_only_still_assembles() {
    let raw = b"MSH|^~\\&|DX_LAB|Hematology|WPX||20070305170957|XYZ|ORL^O34^ORL_O34|2|P|2.5||||||8859/1|||\r\
PID|1||PID1992299||Smith^John||19561192000000|M\r";
    let dec = decoder(DecodeOptions {
        header_only: true,
        ..Default::default()
    });
    let list = dec.decode_segments(raw).expect("decode");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].segment.field(8).as_text(), Some("XYZ"));

    let message = dec.assemble(list).expect("assemble");
    assert_eq!(message.trigger_id(), "ORL_O34");
    let msh = message.root().segment("MSH").expect("MSH placed");
    assert_eq!(msh.field(8).as_text(), Some("XYZ"));
    assert!(message.root().single("RESPONSE").is_none());
}

#[test]
fn compound_date_truncates_at_precision_marker() {
    let raw = b"MSH|^~\\&|PATIENTPING_ADT|123456^Medical|1|uid-123456^^^PP^PP|20190306^^^default^default||JOE^DOE^||19541129|F|||31 MOZFA|272605|Medical|HOS|300 W 27th St^^Hometown^NC^28358|1790152668210992";
    let list = decoder(DecodeOptions::default())
        .decode_segments(raw)
        .expect("decode");
    assert_eq!(list.len(), 1);
    assert!(list[0].is_clean(), "errors: {:?}", list[0].errors);
    let ts = list[0]
        .segment
        .field(7)
        .as_timestamp()
        .expect("message date");
    assert_eq!(ts.to_rfc3339(), "2019-03-06T00:00:00+00:00");
}

#[test]
fn inline_field_error_keeps_remaining_fields() {
    let raw = b"MSH|^~\\&|DX_LAB|Hematology|WPX||20070305170957||ORL^O34^ORL_O34|2|P|2.5||||||8859/1|||\r\
PID|1||PID1992299||Smith^John||19561192000000|M||Caucasian\r\
NTE|1||testing the system comments here\r\
NTE|2||more comments here\r";
    let dec = decoder(DecodeOptions::default());
    let list = dec.decode_segments(raw).expect("decode");
    assert_eq!(list.len(), 4);

    let pid = &list[1];
    assert_eq!(pid.errors.len(), 1);
    assert_eq!(
        pid.errors[0].to_string(),
        "line 2, PID.DateTimeOfBirth(TS)[7]: parsing time \"19561192000000\": day out of range"
    );
    let name = &pid.segment.field(5).elements()[0];
    let family = name
        .component(1)
        .and_then(|v| v.component(1))
        .and_then(Value::as_text);
    assert_eq!(family, Some("Smith"));
    assert_eq!(name.component(2).and_then(Value::as_text), Some("John"));

    // The high-level assemble joins the field error while still building
    // the full tree.
    let err = dec.assemble(list).expect_err("field error surfaces");
    assert_eq!(
        err.to_string(),
        "line 2, PID.DateTimeOfBirth(TS)[7]: parsing time \"19561192000000\": day out of range"
    );
    let message = err.message.expect("partial tree retained");
    assert_eq!(message.trigger_id(), "ORL_O34");
    let pid = message
        .root()
        .group("RESPONSE")
        .and_then(|r| r.group("PATIENT"))
        .and_then(|p| p.segment("PID"))
        .expect("PID placed");
    assert_eq!(pid.field(8).as_text(), Some("M"));
}

#[test]
fn disallowed_repetition_is_strict_by_default() {
    let raw = siu_s12_with_repeating_aig();
    let dec = decoder(DecodeOptions::default());
    let list = dec.decode_segments(&raw).expect("decode");
    let err = dec.assemble(list).expect_err("repetition is strict");
    assert_eq!(
        err.to_string(),
        "line 6, AIG.ResourceID(CE)[3]: data repeats but element CE does not"
    );
}

#[test]
fn lenient_repetition_keeps_first_element() {
    let raw = siu_s12_with_repeating_aig();
    let dec = decoder(DecodeOptions {
        lenient_repetition: true,
        ..Default::default()
    });
    let list = dec.decode_segments(&raw).expect("decode");
    let message = dec.assemble(list).expect("lenient assemble");
    // A second RGS reopens the repeating resources group.
    assert_eq!(message.root().many("RESOURCES").len(), 2);
    let aig = message.root().many("RESOURCES")[0]
        .as_group()
        .and_then(|r| r.many("GENERAL_RESOURCE").first())
        .and_then(|g| g.as_group())
        .and_then(|g| g.segment("AIG"))
        .expect("AIG placed");
    assert_eq!(aig.field(3).component(1).and_then(Value::as_text), Some("1"));
    assert_eq!(
        aig.field(3).component(2).and_then(Value::as_text),
        Some("White, Charles")
    );
}

#[test]
fn unexpected_segment_exposes_the_value() {
    let raw = b"MSH|^~\\&|LAB|ORG|SYS||20250609071616||ORU^R01|1749478576661393532|P|2.5||||||UTF-8\r\
MSA|AA|1749478576661393532|HL7 ACK\r";
    let dec = decoder(DecodeOptions::default());
    let list = dec.decode_segments(raw).expect("decode");
    let err = dec.assemble(list).expect_err("MSA has no slot in ORU_R01");
    assert_eq!(
        err.to_string(),
        "line 2 (MSA) not found in trigger \"ORU_R01\""
    );

    let segment = err
        .errors
        .iter()
        .find_map(|e| match e {
            Hl7Error::UnexpectedSegment { segment, .. } => Some(segment),
            _ => None,
        })
        .expect("offending segment recoverable");
    assert_eq!(segment.id(), "MSA");
    assert_eq!(segment.field(1).as_text(), Some("AA"));
}

#[test]
fn missing_final_separator_leaves_fields_empty() {
    let raw = b"MSA|AA|undefined|HL7 ACK";
    let list = decoder(DecodeOptions::default())
        .decode_segments(raw)
        .expect("decode");
    assert_eq!(list.len(), 1);
    let msa = &list[0].segment;
    assert_eq!(msa.field(1).as_text(), Some("AA"));
    assert_eq!(msa.field(2).as_text(), Some("undefined"));
    assert_eq!(msa.field(3).as_text(), Some("HL7 ACK"));
    assert!(msa.field(4).is_empty());
}

#[test]
fn headerless_message_cannot_name_a_trigger() {
    let raw = b"MSA|AA|undefined|HL7 ACK";
    let dec = decoder(DecodeOptions::default());
    let err = dec.decode(raw).expect_err("MSA declares no structure");
    assert!(err.message.is_none());
    assert_eq!(
        err.to_string(),
        "line 1 (MSA): segment does not declare a message structure"
    );
}

#[test]
fn unknown_trigger_reports_candidates() {
    let raw = b"MSH|^~\\&|A|B|||20250101120000||QRY^Q99|1|P|2.5.1\r";
    let dec = decoder(DecodeOptions::default());
    let err = dec.decode(raw).expect_err("no QRY_Q99 tables");
    assert_eq!(
        err.to_string(),
        "message structure code not found [\"QRY_Q99\", \"QRY\"]"
    );
}

#[test]
fn bare_code_falls_back_for_acknowledgments() {
    let raw = b"MSH|^~\\&|SYS|ORG|||20250101120000||ACK^A01|99|P|2.5.1\r\
MSA|AA|42\r";
    let dec = decoder(DecodeOptions::default());
    let message = dec.decode(raw).expect("ACK resolves through bare code");
    assert_eq!(message.trigger_id(), "ACK");
    let msa = message.root().segment("MSA").expect("MSA");
    assert_eq!(msa.field(2).as_text(), Some("42"));
}

#[test]
fn segment_serializes_by_field_name() {
    let raw = b"MSA|AA|undefined|HL7 ACK";
    let list = decoder(DecodeOptions::default())
        .decode_segments(raw)
        .expect("decode");
    let json = serde_json::to_value(&list[0].segment).expect("serialize");
    assert_eq!(json["segment"], "MSA");
    assert_eq!(json["AcknowledgmentCode"], "AA");
    assert_eq!(json["TextMessage"], "HL7 ACK");
    assert!(json.get("ExpectedSequenceNumber").is_none());
}

fn siu_s12_with_repeating_aig() -> Vec<u8> {
    let mut raw = Vec::new();
    raw.extend_from_slice(
        b"MSH|^~\\&|MESA_OP|XYZ_HOSPITAL|iFW|ABC_HOSPITAL|20110613061611||SIU^S12|24916560|P|2.5\r",
    );
    raw.extend_from_slice(b"SCH|10345^10345|2196178^2196178|||10345|OFFICE^Office visit|reason for the appointment|OFFICE|60|m|^^60^20110617084500^20110617093000|||||9^DENT^ARTHUR^||||9^DENT^COREY^|||||Scheduled\r");
    raw.extend_from_slice(b"PID|1||42||SMITH^PAUL||19781012000000|M\r");
    raw.extend_from_slice(b"PV1|1|O|||||1^Smith^Miranda^A^MD^^^^|2^Withers^Peter^D^MD^^^^\r");
    raw.extend_from_slice(b"RGS|1|A\r");
    raw.extend_from_slice(b"AIG|1|A|1^White, Charles~2^Black, Charles|D^^\r");
    raw.extend_from_slice(b"AIL|1|A|OFFICE^^^OFFICE|^Main Office||20110614084500|||45|m^Minutes||Scheduled\r");
    raw.extend_from_slice(b"AIP|1|A|1^White^Charles^A^MD^^^^|D^White, Douglas||20110614084500|||45|m^Minutes||Scheduled\r");
    raw.extend_from_slice(b"RGS|2|A\r");
    raw.extend_from_slice(b"AIG|1|A|3^Green, Dolores|D^^\r");
    raw
}
