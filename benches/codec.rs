//! Codec benchmarks: segment decoding, grouping, and encoding throughput.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use octofhir_hl7v2::versions::v251::V251;
use octofhir_hl7v2::{DecodeOptions, Decoder, EncodeOptions, Encoder};

fn sample_message() -> Vec<u8> {
    let mut raw = Vec::new();
    raw.extend_from_slice(
        b"MSH|^~\\&|LAB|HOSPITAL|EHR|CLINIC|20250115103000||ORU^R01^ORU_R01|MSG001|P|2.5.1\r",
    );
    for patient in 1..=4 {
        raw.extend_from_slice(
            format!("PID|1||PAT{patient}||Doe^John||19800515000000|M\r").as_bytes(),
        );
        raw.extend_from_slice(b"PV1|1|I|ICU^101^A\r");
        raw.extend_from_slice(b"OBR|1|ORD001||CBC^Complete Blood Count|||20250115090000\r");
        for obx in 1..=6 {
            raw.extend_from_slice(
                format!("OBX|{obx}|NM|WBC^Leukocytes||7.2|10*9/L|||||F\r").as_bytes(),
            );
        }
    }
    raw
}

fn bench_codec(c: &mut Criterion) {
    let raw = sample_message();
    let decoder = Decoder::new(V251, DecodeOptions::default());
    let encoder = Encoder::new(EncodeOptions {
        trim_trailing_separator: true,
    });
    let message = decoder.decode(&raw).expect("sample decodes");

    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Bytes(raw.len() as u64));

    group.bench_function("decode_segments", |b| {
        b.iter(|| decoder.decode_segments(black_box(&raw)))
    });
    group.bench_function("decode_and_group", |b| {
        b.iter(|| decoder.decode(black_box(&raw)))
    });
    group.bench_function("encode", |b| b.iter(|| encoder.encode(black_box(&message))));

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
