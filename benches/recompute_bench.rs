use criterion::{Criterion, criterion_group, criterion_main};
use launchdash_rs::core::{payload_scatter, success_pie};
use launchdash_rs::data::{LaunchDataset, LaunchRecord, Outcome};
use launchdash_rs::interaction::{PayloadRange, SiteSelection};
use std::hint::black_box;

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

fn synthetic_dataset(len: usize) -> LaunchDataset {
    let records: Vec<LaunchRecord> = (0..len)
        .map(|i| {
            LaunchRecord::new(
                SITES[i % SITES.len()],
                (i % 10_000) as f64,
                if i % 3 == 0 {
                    Outcome::Failure
                } else {
                    Outcome::Success
                },
                if i % 2 == 0 { "v1.1" } else { "FT" },
            )
        })
        .collect();
    LaunchDataset::from_records(records).expect("valid generated records")
}

fn bench_success_pie_10k(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);

    c.bench_function("success_pie_all_sites_10k", |b| {
        b.iter(|| success_pie(black_box(&dataset), black_box(&SiteSelection::AllSites)))
    });
}

fn bench_payload_scatter_10k(c: &mut Criterion) {
    let dataset = synthetic_dataset(10_000);
    let range = PayloadRange::new(1_000.0, 8_000.0).expect("valid range");

    c.bench_function("payload_scatter_windowed_10k", |b| {
        b.iter(|| {
            payload_scatter(
                black_box(&dataset),
                black_box(&SiteSelection::AllSites),
                black_box(range),
            )
        })
    });
}

criterion_group!(benches, bench_success_pie_10k, bench_payload_scatter_10k);
criterion_main!(benches);
