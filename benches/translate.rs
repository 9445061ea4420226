//! Benchmarks for the translation pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use doctex::export::{Exporter, LatexExporter};
use doctex::{Node, TranslateOptions, translate};

const LIBRARY_JSON: &str = include_str!("../tests/fixtures/library.json");

/// The fixture's top-level documents repeated to a realistic manual size.
fn large_tree(copies: usize) -> Node {
    let library = doctex::import::parse_document(LIBRARY_JSON).unwrap();
    let mut root = Node::new(doctex::Kind::Document);
    for _ in 0..copies {
        root.children.extend(library.children.iter().cloned());
    }
    root
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_document", |b| {
        b.iter(|| doctex::import::parse_document(std::hint::black_box(LIBRARY_JSON)).unwrap())
    });
}

fn bench_translate(c: &mut Criterion) {
    let tree = large_tree(200);
    let options = TranslateOptions::default();

    c.bench_function("translate_body", |b| {
        b.iter(|| translate(std::hint::black_box(&tree), &options))
    });
}

fn bench_export(c: &mut Criterion) {
    let tree = large_tree(200);
    let exporter = LatexExporter::new();

    c.bench_function("export_document", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(1 << 20);
            exporter.export(std::hint::black_box(&tree), &mut out).unwrap();
            out
        })
    });
}

criterion_group!(benches, bench_parse, bench_translate, bench_export);
criterion_main!(benches);
