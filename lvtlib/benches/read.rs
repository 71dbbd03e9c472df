use criterion::{criterion_group, criterion_main, Criterion};
use lvtlib::read::table::TableReader;
use lvtlib::types::FieldValue;

fn make_lvt(record_count: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&lvtlib::LVTMAGIC);
    buf.extend_from_slice(&[0u8; 8]);
    buf.extend_from_slice(&3u32.to_le_bytes());
    buf.extend_from_slice(&record_count.to_le_bytes());
    for name in ["id", "flags", "ratio"] {
        buf.push(0x04);
        buf.extend_from_slice(name.as_bytes());
        buf.push(0x00);
    }
    for i in 0..record_count {
        buf.push(0x01);
        buf.extend_from_slice(&(i as i32).to_le_bytes());
        buf.push(0x02);
        buf.extend_from_slice(&(0x8000_0000u32 | i).to_le_bytes());
        buf.push(0x03);
        buf.extend_from_slice(&(i as f32 * 0.25).to_le_bytes());
    }
    buf
}

fn decode(input: &[u8]) {
    let table = TableReader::new(input).unwrap();
    for record in table.records() {
        for value in record {
            match value {
                FieldValue::I32(_) | FieldValue::U32Hex(_) | FieldValue::F32(_) => {}
            }
        }
    }
}

fn render_lines(input: &[u8]) {
    let table = TableReader::new(input).unwrap();
    let mut lines = Vec::with_capacity(table.record_count());
    for record in table.records() {
        lines.push(
            record
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        );
    }
    assert_eq!(lines.len(), table.record_count());
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = make_lvt(10_000);
    c.bench_function("decode", |b| b.iter(|| decode(&data)));
    c.bench_function("render_lines", |b| b.iter(|| render_lines(&data)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
