// Criterion benchmarks for Close Contacts

use close_contacts::core::{planar_distance, ProximityFilter};
use close_contacts::models::{Contact, Gender, GenderFilter, QueryRequest, ResultOrder};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geo::Point;

fn create_contact(id: usize) -> Contact {
    let gender = match id % 3 {
        0 => Gender::Male,
        1 => Gender::Female,
        _ => Gender::Other,
    };
    let x = (id as f64 * 0.37) % 100.0;
    let y = (id as f64 * 0.71) % 100.0;
    Contact::new(format!("Contact {}", id), x, y, Some(gender))
}

fn bench_planar_distance(c: &mut Criterion) {
    c.bench_function("planar_distance", |b| {
        b.iter(|| {
            planar_distance(
                black_box(Point::new(25.0, 15.0)),
                black_box(Point::new(15.0, 50.0)),
            )
        });
    });
}

fn bench_gender_filter_parse(c: &mut Criterion) {
    c.bench_function("gender_filter_parse", |b| {
        b.iter(|| GenderFilter::parse(black_box(Some("male, female,other"))));
    });
}

fn bench_filter(c: &mut Criterion) {
    let filter = ProximityFilter::new();
    let request = QueryRequest::new(50.0, 50.0, 13.54)
        .with_genders(GenderFilter::parse(Some("female,other")));

    let mut group = c.benchmark_group("proximity_filter");

    for contact_count in [100, 1_000, 10_000, 100_000].iter() {
        let contacts: Vec<Contact> = (0..*contact_count).map(create_contact).collect();

        group.bench_with_input(
            BenchmarkId::new("scan_order", contact_count),
            contact_count,
            |b, _| {
                b.iter(|| filter.filter(black_box(&contacts), black_box(&request)));
            },
        );

        let sorted = request.clone().with_order(ResultOrder::Distance);
        group.bench_with_input(
            BenchmarkId::new("distance_order", contact_count),
            contact_count,
            |b, _| {
                b.iter(|| filter.filter(black_box(&contacts), black_box(&sorted)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_planar_distance,
    bench_gender_filter_parse,
    bench_filter
);

criterion_main!(benches);
