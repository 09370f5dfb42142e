//! Byte-level round-trip properties: decode → assemble → encode.

use octofhir_hl7v2::versions::v251::V251;
use octofhir_hl7v2::{DecodeOptions, Decoder, EncodeOptions, Encoder, Message};

fn decode(raw: &[u8]) -> Message {
    Decoder::new(V251, DecodeOptions::default())
        .decode(raw)
        .expect("decode")
}

fn trim_encoder() -> Encoder {
    Encoder::new(EncodeOptions {
        trim_trailing_separator: true,
    })
}

fn oru_r01_two_patients() -> Vec<u8> {
    let mut raw = Vec::new();
    raw.extend_from_slice(
        b"MSH|^~\\&|LAB|HOSPITAL|EHR|CLINIC|20250115103000||ORU^R01^ORU_R01|MSG001|P|2.5.1\r",
    );
    raw.extend_from_slice(b"PID|1||PAT1||Doe^John||19800515000000|M\r");
    raw.extend_from_slice(b"NTE|1||Patient note\r");
    raw.extend_from_slice(b"NK1|1|Wilson^Tom|SPO\r");
    raw.extend_from_slice(b"PV1|1|I|ICU^101^A\r");
    raw.extend_from_slice(b"PV2|||^Chest pain\r");
    raw.extend_from_slice(b"ORC|RE|ORD001\r");
    raw.extend_from_slice(b"OBR|1|ORD001||CBC^Complete Blood Count|||20250115090000\r");
    raw.extend_from_slice(b"NTE|1||Order note\r");
    raw.extend_from_slice(b"OBX|1|NM|WBC^Leukocytes||7.2|10*9/L|||||F\r");
    raw.extend_from_slice(b"OBX|2|ST|COLOR^Color||Amber||||||F\r");
    raw.extend_from_slice(b"NTE|1||Within range\r");
    raw.extend_from_slice(b"SPM|1|SPEC123||BLD^Blood\r");
    raw.extend_from_slice(b"OBX|1|ST|APPEAR^Appearance||Clear||||||F\r");
    raw.extend_from_slice(b"PID|1||PAT2||Smith^Jane||19751102000000|F\r");
    raw.extend_from_slice(b"OBR|1|ORD002||BMP^Basic Metabolic Panel\r");
    raw.extend_from_slice(b"OBX|1|NM|NA^Sodium||140|mmol/L|||||F\r");
    raw
}

#[test]
fn oru_r01_round_trips_byte_exact() {
    let raw = oru_r01_two_patients();
    let message = decode(&raw);
    assert_eq!(message.trigger_id(), "ORU_R01");
    assert_eq!(trim_encoder().encode(&message).as_slice(), raw.as_slice());
}

#[test]
fn oru_r01_groups_by_patient() {
    let message = decode(&oru_r01_two_patients());
    let results = message.root().many("PATIENT_RESULT");
    assert_eq!(results.len(), 2);

    let first = results[0].as_group().expect("group");
    let patient = first.group("PATIENT").expect("patient");
    assert!(patient.group("VISIT").is_some());
    assert_eq!(patient.many("NTE").len(), 1);
    let orders = first.many("ORDER_OBSERVATION");
    assert_eq!(orders.len(), 1);
    let order = orders[0].as_group().expect("group");
    assert_eq!(order.many("OBSERVATION").len(), 2);
    assert_eq!(order.many("SPECIMEN").len(), 1);

    let second = results[1].as_group().expect("group");
    let order = second.many("ORDER_OBSERVATION")[0].as_group().expect("group");
    assert!(order.segment("ORC").is_none());
    assert_eq!(order.many("OBSERVATION").len(), 1);
}

#[test]
fn header_bytes_are_preserved() {
    let raw = oru_r01_two_patients();
    let message = decode(&raw);
    let out = trim_encoder().encode(&message);
    assert_eq!(&out[..9], b"MSH|^~\\&|");
}

#[test]
fn direct_mode_encode_is_idempotent() {
    let raw = oru_r01_two_patients();
    let encoder = Encoder::new(EncodeOptions::default());

    let first = encoder.encode(&decode(&raw));
    let second = encoder.encode(&decode(&first));
    assert_eq!(first, second);
}

#[test]
fn trim_mode_leaves_no_trailing_separators() {
    let raw = oru_r01_two_patients();
    let out = trim_encoder().encode(&decode(&raw));
    for line in out.split(|&b| b == b'\r').filter(|l| !l.is_empty()) {
        assert_ne!(line.last(), Some(&b'|'), "trailing separator in {line:?}");
    }
}

#[test]
fn escape_sequences_round_trip() {
    let raw = b"MSH|^~\\&|LAB|HOSPITAL|||20250115103000||ORU^R01^ORU_R01|MSG002|P|2.5.1\r\
PID|1||PAT1||Doe\\F\\Jones^Anne\\S\\Marie\r\
OBR|1|ORD001||NOTE^\\E\\escaped\\E\\ text\r";
    let message = decode(raw);

    let patient = message.root().many("PATIENT_RESULT")[0]
        .as_group()
        .and_then(|g| g.group("PATIENT"))
        .expect("patient");
    let pid = patient.segment("PID").expect("PID");
    let name = &pid.field(5).elements()[0];
    let family = name
        .component(1)
        .and_then(|v| v.component(1))
        .and_then(|v| v.as_text());
    assert_eq!(family, Some("Doe|Jones"));
    assert_eq!(name.component(2).and_then(|v| v.as_text()), Some("Anne^Marie"));

    assert_eq!(trim_encoder().encode(&message).as_slice(), raw.as_slice());
}

#[test]
fn alternate_delimiters_round_trip_values() {
    // Same content, declared with a different delimiter set.
    let raw = b"MSH#*~\\&#LAB#HOSPITAL###20250115103000##ORU*R01*ORU_R01#MSG003#P#2.5.1\r\
PID#1##PAT1##Doe*John\r\
OBR#1#ORD001##GLU*Glucose\r";
    let message = decode(raw);
    let patient = message.root().many("PATIENT_RESULT")[0]
        .as_group()
        .and_then(|g| g.group("PATIENT"))
        .expect("patient");
    let pid = patient.segment("PID").expect("PID");
    let name = &pid.field(5).elements()[0];
    assert_eq!(name.component(2).and_then(|v| v.as_text()), Some("John"));

    // Encoding re-reads the delimiter set from the header markers.
    let out = trim_encoder().encode(&message);
    assert_eq!(out.as_slice(), raw.as_slice());
}

#[test]
fn control_segments_are_dropped_from_the_tree() {
    let raw = b"MSH|^~\\&|LAB|HOSPITAL|||20250115103000||ORU^R01^ORU_R01|MSG004|P|2.5.1\r\
PID|1||PAT1||Doe^John\r\
OBR|1|ORD001||GLU^Glucose\r\
BTS|1|batch done\r";
    let message = decode(raw);
    let out = trim_encoder().encode(&message);
    let lines: Vec<_> = out.split(|&b| b == b'\r').filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| !l.starts_with(b"BTS")));
}

#[test]
fn orl_o34_nested_specimens_round_trip() {
    let mut raw = Vec::new();
    raw.extend_from_slice(
        b"MSH|^~\\&|LAB|HOSPITAL|||20250115103000||ORL^O34^ORL_O34|MSG004|P|2.5.1\r",
    );
    raw.extend_from_slice(b"MSA|AA|REF001\r");
    raw.extend_from_slice(b"PID|1||PAT9||TestPatient^Lab\r");
    raw.extend_from_slice(b"SPM|1|SPEC1||BLD^Blood\r");
    raw.extend_from_slice(b"ORC|OK|PO001\r");
    raw.extend_from_slice(b"OBR|1|PO001||GLU^Glucose\r");
    raw.extend_from_slice(b"ORC|OK|PO002\r");
    raw.extend_from_slice(b"OBR|2|PO002||BUN^Urea Nitrogen\r");
    raw.extend_from_slice(b"SPM|2|SPEC2||UR^Urine\r");
    raw.extend_from_slice(b"ORC|OK|PO003\r");

    let message = decode(&raw);
    assert_eq!(message.trigger_id(), "ORL_O34");

    let patient = message
        .root()
        .group("RESPONSE")
        .and_then(|r| r.group("PATIENT"))
        .expect("patient");
    let specimens = patient.many("SPECIMEN");
    assert_eq!(specimens.len(), 2);

    let first = specimens[0].as_group().expect("group");
    let orders = first.many("ORDER");
    assert_eq!(orders.len(), 2);
    for (i, order) in orders.iter().enumerate() {
        let order = order.as_group().expect("group");
        let obr = order
            .group("OBSERVATION_REQUEST")
            .and_then(|g| g.segment("OBR"))
            .expect("OBR");
        assert_eq!(obr.field(1).as_text(), Some([ "1", "2" ][i]));
    }

    let second = specimens[1].as_group().expect("group");
    assert_eq!(second.many("ORDER").len(), 1);
    assert!(second.many("ORDER")[0]
        .as_group()
        .expect("group")
        .group("OBSERVATION_REQUEST")
        .is_none());

    assert_eq!(trim_encoder().encode(&message).as_slice(), raw.as_slice());
}

#[test]
fn assembly_is_deterministic() {
    let raw = oru_r01_two_patients();
    assert_eq!(decode(&raw), decode(&raw));
}

#[test]
fn encode_decode_encode_matches_for_assembled_trees() {
    let raw = oru_r01_two_patients();
    let encoder = trim_encoder();
    let message = decode(&raw);
    let once = encoder.encode(&message);
    let twice = encoder.encode(&decode(&once));
    assert_eq!(once, twice);
}
