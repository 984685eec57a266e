//! Benchmarks for the two extraction paths over synthetic documents.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use matisse_core::{extract_illustrator_layers, extract_optional_content};

/// A document with `count` optional content groups, half of them off.
fn build_ocg_doc(count: u32) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"%PDF-1.7\n");

    let ocgs: Vec<String> = (0..count).map(|i| format!("{} 0 R", 10 + i)).collect();
    let off: Vec<String> = (0..count)
        .filter(|i| i % 2 == 1)
        .map(|i| format!("{} 0 R", 10 + i))
        .collect();
    out.extend_from_slice(
        format!(
            "1 0 obj\n<< /Type /Catalog /OCProperties << /OCGs [{}] /D << /OFF [{}] >> >> >>\nendobj\n",
            ocgs.join(" "),
            off.join(" "),
        )
        .as_bytes(),
    );
    for i in 0..count {
        out.extend_from_slice(
            format!("{} 0 obj\n<< /Type /OCG /Name (Layer {i}) >>\nendobj\n", 10 + i).as_bytes(),
        );
    }
    out.extend_from_slice(b"trailer\n<< /Size 2 /Root 1 0 R >>\n%%EOF");
    out
}

/// A document with `count` Illustrator layers in one private-data block.
fn build_private_doc(count: u32) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"%PDF-1.5\n%AIPrivateDataBegin\n");
    for i in 0..count {
        let visible = if i % 2 == 0 { "true" } else { "false" };
        out.extend_from_slice(
            format!("(Layer (Name \"Layer {i}\")(Visible {visible}))\n").as_bytes(),
        );
    }
    out.extend_from_slice(b"%AIPrivateDataEnd\n%%EOF");
    out
}

fn bench_optional_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("optional_content");

    for count in [8u32, 64] {
        let data = build_ocg_doc(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| extract_optional_content(black_box(data)))
        });
    }

    group.finish();
}

fn bench_illustrator(c: &mut Criterion) {
    let mut group = c.benchmark_group("illustrator");

    for count in [8u32, 64] {
        let data = build_private_doc(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| extract_illustrator_layers(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_optional_content, bench_illustrator);
criterion_main!(benches);
