use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexmap::{grid_distance, world_distance, AxialPoint, HexMap, MapConfig};

fn criterion_benchmark(c: &mut Criterion) {
    let config = MapConfig {
        seed: 0.into(),
        columns: 200,
        rows: 100,
        ..Default::default()
    };

    let mut group = c.benchmark_group("map");
    group.sample_size(10);
    group.bench_function("map creation", |b| {
        b.iter(|| HexMap::new(black_box(config.clone())))
    });
    group.finish();

    let a = AxialPoint::new(3, 40);
    let b = AxialPoint::new(190, 60);
    c.bench_function("grid distance", |bench| {
        bench.iter(|| grid_distance(black_box(a), black_box(b), 200))
    });
    c.bench_function("world distance", |bench| {
        bench.iter(|| world_distance(black_box(a), black_box(b), 200))
    });

    // Every call after the first one hits the cache
    let map = HexMap::new(config).unwrap();
    c.bench_function("neighbors", |bench| {
        bench.iter(|| {
            map.tiles()
                .map(|tile| tile.neighbors().count())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
