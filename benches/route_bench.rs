//! Benchmarks for hash routing and content loading
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use folio::registry::{Portfolio, Registry, EMBEDDED_PROJECTS};
use folio::route::{format_hash, parse_hash, MemoryLocation, Router, ViewState};
use std::rc::Rc;

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");

    let hashes = [
        "",
        "#projects",
        "#project/telco-customer-churn",
        "project/airbnb-berlin",
        "#project/caf%C3%A9%20menu",
        "#project/%E0%A4%A",
    ];
    group.throughput(Throughput::Elements(hashes.len() as u64));

    group.bench_function("parse", |b| {
        b.iter(|| {
            for hash in hashes {
                black_box(parse_hash(black_box(hash)));
            }
        })
    });

    let state = ViewState::project("store-sales-forecast");
    group.bench_function("format", |b| b.iter(|| format_hash(black_box(&state))));

    group.finish();
}

fn bench_router(c: &mut Criterion) {
    let mut group = c.benchmark_group("router");

    group.bench_function("navigate_round_trip", |b| {
        let location = Rc::new(MemoryLocation::new());
        let mounted = Router::new(Rc::clone(&location)).mount(|state| {
            black_box(state);
        });
        let navigator = mounted.navigator();

        b.iter(|| {
            navigator.project(black_box("global-power-plants"));
            navigator.home();
        });
    });

    group.bench_function("mount_unmount", |b| {
        let location = Rc::new(MemoryLocation::with_hash("#project/airbnb-berlin"));

        b.iter(|| {
            let mounted = Router::new(Rc::clone(&location)).mount(|_| {});
            mounted.unmount();
        });
    });

    group.finish();
}

fn bench_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("content");

    group.bench_function("parse_projects", |b| {
        b.iter(|| Registry::from_toml_str(black_box(EMBEDDED_PROJECTS), "projects.toml").unwrap())
    });

    group.bench_function("embedded_portfolio", |b| {
        b.iter(|| Portfolio::embedded().unwrap())
    });

    let portfolio = Portfolio::embedded().unwrap();
    group.bench_function("lookup", |b| {
        b.iter(|| portfolio.projects.get(black_box("turbine-maintenance")))
    });

    group.finish();
}

criterion_group!(benches, bench_hash, bench_router, bench_content);
criterion_main!(benches);
