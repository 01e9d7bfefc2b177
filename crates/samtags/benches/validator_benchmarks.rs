//! Validator performance benchmarks.
//!
//! Measures declaration validation and catalog lookups.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use samtags::{StandardTag, TagDeclaration, TagDeclarationValidator, is_standard_tag};

/// Sample codes for catalog lookups.
const LOOKUP_SAMPLES: &[&str] = &["AM", "RG", "UQ", "XG", "xb", "ZZ", "NM", "MD", "aa", "1a"];

fn declaration(size: usize, with_errors: bool) -> TagDeclaration {
    (0..size)
        .fold(TagDeclaration::builder("Bench"), |b, i| {
            let value = if with_errors && i % 4 == 0 {
                StandardTag::ALL[i % StandardTag::ALL.len()].code().to_string()
            } else {
                let prefix = ['x', 'y', 'z'][i % 3];
                let suffix = char::from_digit((i / 3 % 36) as u32, 36).unwrap_or('0');
                format!("{prefix}{suffix}")
            };
            b.member(format!("M{i}"), value)
        })
        .build()
        .expect("unique member names")
}

fn bench_validate(c: &mut Criterion) {
    let validator = TagDeclarationValidator::new();
    let mut group = c.benchmark_group("validate");

    for size in [4, 16, 64] {
        for with_errors in [false, true] {
            let decl = declaration(size, with_errors);
            let label = if with_errors { "with_errors" } else { "clean" };
            group.bench_with_input(BenchmarkId::new(label, size), &decl, |b, decl| {
                b.iter(|| validator.check(black_box(decl)))
            });
        }
    }

    group.finish();
}

fn bench_catalog_lookup(c: &mut Criterion) {
    c.bench_function("is_standard_tag", |b| {
        b.iter(|| {
            for code in LOOKUP_SAMPLES {
                black_box(is_standard_tag(black_box(code)));
            }
        })
    });
}

criterion_group!(benches, bench_validate, bench_catalog_lookup);
criterion_main!(benches);
