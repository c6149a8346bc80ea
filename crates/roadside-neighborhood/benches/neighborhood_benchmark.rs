// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{SeedableRng, seq::index::sample};
use rand_chacha::ChaCha8Rng;
use roadside_model::loading::RoadLoader;
use roadside_neighborhood::neighborhood::compute_neighborhoods;
use roadside_neighborhood::query::city_with_min_neighborhood;
use std::fmt::Write;
use std::hint::black_box;

/// Renders a road description with `num_cities` distinct random positions.
fn synthetic_road(length: i64, num_cities: usize, seed: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let positions = sample(&mut rng, (length - 1) as usize, num_cities);

    let mut text = String::new();
    writeln!(text, "{}\n{}", length, num_cities).unwrap();
    for (i, p) in positions.into_iter().enumerate() {
        writeln!(text, "{} City {}", p + 1, i).unwrap();
    }
    text
}

fn bench_neighborhoods(c: &mut Criterion) {
    let loader = RoadLoader::new();
    let mut group = c.benchmark_group("neighborhood_benchmark");

    for &num_cities in &[10usize, 1_000, 10_000] {
        let text = synthetic_road(1_000_000, num_cities, num_cities as u64);
        let road = loader
            .from_str(&text)
            .unwrap_or_else(|e| panic!("Failed to load synthetic road: {}", e));

        group.throughput(Throughput::Elements(num_cities as u64));

        group.bench_with_input(BenchmarkId::new("load", num_cities), &text, |b, text| {
            b.iter(|| loader.from_str(black_box(text)).unwrap())
        });

        group.bench_with_input(
            BenchmarkId::new("compute", num_cities),
            &road,
            |b, road| b.iter(|| compute_neighborhoods(black_box(road)).len()),
        );

        group.bench_with_input(
            BenchmarkId::new("min_city", num_cities),
            &road,
            |b, road| b.iter(|| city_with_min_neighborhood(black_box(road)).unwrap().position()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_neighborhoods);
criterion_main!(benches);
