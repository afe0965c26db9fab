use criterion::{criterion_group, Criterion};
use std::hint::black_box;

use leadsheet_harmony::{notation::harte, prelude::*};

// ---------------------------------------------------------------------------------------------

fn create_harmonies() -> Vec<RawHarmony> {
    vec![
        RawHarmony::new("C", "major-seventh"),
        RawHarmony::new("D", "half-diminished-seventh"),
        RawHarmony::new("G", "dominant")
            .with_degree(Degree::alter(9, -1))
            .with_degree(Degree::add(13, 0)),
        RawHarmony::new("Bb", "minor-11th").with_bass("F"),
        RawHarmony::new(4u8, "suspended-fourth").with_degree(Degree::subtract(5)),
    ]
}

// ---------------------------------------------------------------------------------------------

pub fn encode_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode");
    let encoder = HarmonyEncoder::new(SpellingPreference::Sharps);
    let harmonies = create_harmonies();
    for reduction in [Reduction::Full, Reduction::Triad, Reduction::Simplified] {
        group.bench_function(reduction.to_string(), |b| {
            b.iter(|| {
                for harmony in &harmonies {
                    let _ = black_box(encoder.encode(harmony, reduction));
                }
            })
        });
    }
    group.finish();
}

pub fn decode_harte(c: &mut Criterion) {
    let mut group = c.benchmark_group("Harte");
    let notations = ["C:maj7", "D:hdim7", "G:7(b9,13)", "Bb:min9(11)/5", "E:sus4(*5)"];
    group.bench_function("Decode", |b| {
        b.iter(|| {
            for notation in notations {
                let _ = black_box(harte::decode(notation));
            }
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = encode;
    config = Criterion::default();
    targets = encode_reductions, decode_harte
}
