//! Performance benchmarks for the pure text stages
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use docfields::text::{extract_entities, extract_key_values, normalize_text};

/// Synthetic invoice-like page text: labeled lines plus entity-rich prose.
fn sample_page_text() -> String {
    let mut text = String::new();
    for i in 0..50 {
        text.push_str(&format!(
            "Invoice Number: {i}\nTotal Amount: ₹{i},200.50\nVerify at: https://registry.example/check/{i}\n\
             Contact billing{i}@acme.in or call before 12/05/2024.\n\n"
        ));
    }
    text
}

fn bench_normalize(c: &mut Criterion) {
    let raw = sample_page_text();

    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Bytes(raw.len() as u64));
    group.bench_function("invoice_50_blocks", |b| {
        b.iter(|| normalize_text(black_box(&raw)));
    });
    group.finish();
}

fn bench_entities(c: &mut Criterion) {
    let cleaned = normalize_text(&sample_page_text());

    let mut group = c.benchmark_group("entities");
    group.throughput(Throughput::Bytes(cleaned.len() as u64));
    group.bench_function("invoice_50_blocks", |b| {
        b.iter(|| extract_entities(black_box(&cleaned)));
    });
    group.finish();
}

fn bench_key_values(c: &mut Criterion) {
    let raw = sample_page_text();

    let mut group = c.benchmark_group("key_values");
    group.throughput(Throughput::Bytes(raw.len() as u64));
    group.bench_function("invoice_50_blocks", |b| {
        b.iter(|| extract_key_values(black_box(&raw)));
    });
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_entities, bench_key_values);
criterion_main!(benches);
