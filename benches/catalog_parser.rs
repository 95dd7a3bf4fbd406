//! Benchmarks for the catalog parser
//!
//! Run with: `cargo bench --bench catalog_parser`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use globular_atlas::core::{AtlasConfig, CatalogParser, Scene};

// =============================================================================
// Benchmark Data
// =============================================================================

const SAMPLE: &str = include_str!("../tests/fixtures/harris_sample.txt");
const MATCHING_LINE: &str =
    "NGC_5139  omega Cen      13 26 47.24  -47 28 46.5  309.10  14.97  5.2   6.4    3.1   -3.9    1.3";
const HEADER_LINE: &str =
    " ID        Name            RA (2000)    DEC         L      B     R_Sun  R_gc    X      Y      Z";

/// A catalog of `copies` repetitions of the sample extract
fn synthetic_catalog(copies: usize) -> String {
    SAMPLE.repeat(copies)
}

// =============================================================================
// Line Benchmarks
// =============================================================================

fn bench_parse_line(c: &mut Criterion) {
    let parser = CatalogParser::new();
    let mut group = c.benchmark_group("parse_line");

    group.bench_function("matching", |b| {
        b.iter(|| parser.parse_line(black_box(MATCHING_LINE)))
    });
    group.bench_function("header", |b| {
        b.iter(|| parser.parse_line(black_box(HEADER_LINE)))
    });

    group.finish();
}

// =============================================================================
// Catalog Benchmarks
// =============================================================================

fn bench_parse_catalog(c: &mut Criterion) {
    let parser = CatalogParser::new();
    let mut group = c.benchmark_group("parse_catalog");

    for copies in [1usize, 20, 200] {
        let text = synthetic_catalog(copies);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(copies), &text, |b, text| {
            b.iter(|| parser.parse_with_report(black_box(text)))
        });
    }

    group.finish();
}

fn bench_scene_build(c: &mut Criterion) {
    let entries = CatalogParser::new().parse(&synthetic_catalog(20));
    let mut config = AtlasConfig::default();
    config.disk.seed = Some(2010);

    c.bench_function("scene_build_default_disk", |b| {
        b.iter(|| Scene::build(black_box(&entries), &config).unwrap())
    });
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(line_benchmarks, bench_parse_line);
criterion_group!(catalog_benchmarks, bench_parse_catalog, bench_scene_build);

criterion_main!(line_benchmarks, catalog_benchmarks);
