use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use geobox::{
    GeoStore, LatLng, LatLngBounds, Located, generate_tags, neighbor_east, neighbor_north,
    tags_for_region,
};

fn benchmark_geocoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("geocoding");

    let sf = LatLng::new(37.781, -122.4113);
    group.bench_function("generate_tags", |b| {
        b.iter(|| generate_tags(black_box(&sf)).unwrap())
    });

    group.bench_function("neighbor_north_carry", |b| {
        b.iter(|| neighbor_north(black_box("3FFFFFFFFF")).unwrap())
    });

    group.bench_function("neighbor_east", |b| {
        b.iter(|| neighbor_east(black_box("8E64BF8FAB")).unwrap())
    });

    group.finish();
}

fn benchmark_region_tiling(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_tiling");

    for span in [0.0001, 0.01, 1.0, 45.0].iter() {
        let region = LatLngBounds::new(
            LatLng::new(37.70, -122.50),
            LatLng::new(37.70 + span, -122.50 + span),
        );
        group.bench_with_input(BenchmarkId::new("tags_for_region", span), &region, |b, r| {
            b.iter(|| tags_for_region(black_box(r)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");

    for count in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));

        let mut store = GeoStore::memory();
        for i in 0..*count {
            let lat = 37.0 + (i as f64 * 0.0001);
            let lng = -122.0 - (i as f64 * 0.0001);
            let mut pin = Located::new(LatLng::new(lat, lng), i);
            store.store_entity("pin", &mut pin).unwrap();
        }

        let region = LatLngBounds::new(LatLng::new(37.0, -122.5), LatLng::new(37.5, -122.0));
        group.bench_with_input(
            BenchmarkId::new("entities_in_region", count),
            &region,
            |b, r| b.iter(|| store.entities_in_region("pin", black_box(r)).unwrap()),
        );
    }

    group.bench_function("store_entity", |b| {
        let mut store = GeoStore::memory();
        let mut counter = 0u32;
        b.iter(|| {
            let mut pin = Located::new(LatLng::new(51.5, -0.12), counter);
            counter += 1;
            store.store_entity("pin", black_box(&mut pin)).unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_geocoding,
    benchmark_region_tiling,
    benchmark_store
);
criterion_main!(benches);
