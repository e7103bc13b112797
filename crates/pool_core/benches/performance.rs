//! Performance benchmarks for pool_core using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pool_core::matching::{
    find_possible_rides, select_ride, RideRequest, SearchLimits, SelectionStrategy,
};
use pool_core::store::RecordStore;
use pool_core::test_helpers::store_with_rides;

/// Layered ride graph: `width` locations per layer, every location linked to
/// every location of the next layer. Itinerary count grows as width^layers.
fn layered_store(layers: usize, width: usize) -> RecordStore {
    let names: Vec<Vec<String>> = (0..layers)
        .map(|layer| (0..width).map(|slot| format!("L{layer}-{slot}")).collect())
        .collect();

    let mut legs: Vec<(String, String)> = Vec::new();
    for slot in 0..width {
        legs.push(("Source".to_string(), names[0][slot].clone()));
        legs.push((names[layers - 1][slot].clone(), "Target".to_string()));
    }
    for pair in names.windows(2) {
        for from in &pair[0] {
            for to in &pair[1] {
                legs.push((from.clone(), to.clone()));
            }
        }
    }

    let borrowed: Vec<(&str, &str, u32)> = legs
        .iter()
        .map(|(from, to)| (from.as_str(), to.as_str(), 4))
        .collect();
    store_with_rides(&borrowed)
}

fn bench_multi_hop(c: &mut Criterion) {
    let graphs = vec![("small", 2, 3), ("medium", 3, 4), ("large", 4, 5)];

    let mut group = c.benchmark_group("multi_hop_discovery");
    for (name, layers, width) in graphs {
        let store = layered_store(layers, width);
        group.bench_with_input(BenchmarkId::from_parameter(name), &store, |b, store| {
            b.iter(|| {
                black_box(find_possible_rides(
                    store,
                    "Source",
                    "Target",
                    1,
                    SearchLimits::unbounded(),
                ))
            });
        });
    }
    group.finish();
}

fn bench_direct_selection(c: &mut Criterion) {
    let legs: Vec<(&str, &str, u32)> = (0..1_000)
        .map(|i| {
            if i % 10 == 0 {
                ("Hyderabad", "Bangalore", 4)
            } else {
                ("Pune", "Mumbai", 4)
            }
        })
        .collect();
    let store = store_with_rides(&legs);

    let mut group = c.benchmark_group("direct_selection");
    for strategy in ["", "Most Vacant", "Preferred Vehicle=Swift"] {
        let request = RideRequest {
            rider: "bench".to_string(),
            origin: "Hyderabad".to_string(),
            destination: "Bangalore".to_string(),
            seats: 1,
            strategy: SelectionStrategy::parse(strategy),
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(request.strategy.to_string()),
            &request,
            |b, request| {
                b.iter_batched(
                    || store.clone(),
                    |mut store| black_box(select_ride(&mut store, request)),
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_multi_hop, bench_direct_selection);
criterion_main!(benches);
