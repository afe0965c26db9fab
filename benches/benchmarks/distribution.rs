use criterion::{criterion_group, Criterion};
use std::hint::black_box;

use leadsheet_harmony::prelude::*;

// ---------------------------------------------------------------------------------------------

fn create_harmonies(count: usize) -> Vec<RawHarmony> {
    let kinds = ChordKind::all();
    (0..count)
        .map(|index| {
            let harmony = RawHarmony::new((index % 12) as u8, kinds[index % kinds.len()].name());
            if index % 5 == 0 {
                harmony.with_degree(Degree::add(9, 0))
            } else {
                harmony
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------------------------

pub fn collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("Distribution");
    let encoder = HarmonyEncoder::new(SpellingPreference::Flats);
    let harmonies = create_harmonies(10_000);
    group.bench_function("Collect", |b| {
        b.iter(|| {
            black_box(HarmonyDistribution::collect(
                &encoder,
                &harmonies,
                Reduction::Full,
            ))
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = distribution;
    config = Criterion::default();
    targets = collect
}
