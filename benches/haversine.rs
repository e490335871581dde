#[macro_use]
extern crate criterion;

extern crate trackmath;

use criterion::Criterion;
use trackmath::haversine::haversine_distance;
use trackmath::GeoPoint;

fn criterion_benchmark(c: &mut Criterion) {
    let point1 = GeoPoint::new(6.953333, 51.301389);
    let point2 = GeoPoint::new(6.186389, 50.823194);
    c.bench_function("haversine", |b| b.iter(|| haversine_distance(&point1, &point2)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
