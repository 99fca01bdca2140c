//! Benchmarks for registry lookups.
//!
//! Measures name and value lookups against the compiled-in table, for both registered and
//! unregistered inputs, plus the one-off cost of building a registry and validating it.
//!
//! ## Benchmark execution
//!
//! Running this exact benchmark can be done with the following command:
//!
//! `> cargo bench -p ntstatus_registry --bench bench_lookup`
//!
//! If you wish to run a subset of benchmarks in this file, you can filter them by name:
//!
//! `> cargo bench -p ntstatus_registry --bench bench_lookup -- <filter>`
//!
//! ## Examples
//!
//! ```bash
//! > cargo bench -p ntstatus_registry --bench bench_lookup -- by_name
//! > cargo bench -p ntstatus_registry --bench bench_lookup -- build
//! ```
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ntstatus_registry::{table, Registry};
use rand::Rng;
use std::hint::black_box;

const SAMPLES: usize = 1024;

fn random_symbols(count: usize) -> Vec<&'static str> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| table::STATUS_CODES[rng.gen_range(0..table::STATUS_CODES.len())].symbol).collect()
}

fn random_values(count: usize) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen::<u32>()).collect()
}

fn bench_by_name(c: &mut Criterion) {
    let registry = Registry::global();
    let mut group = c.benchmark_group("by_name");

    let symbols = random_symbols(SAMPLES);
    group.bench_with_input(BenchmarkId::new("registered", SAMPLES), &symbols, |b, symbols| {
        b.iter(|| symbols.iter().filter_map(|symbol| registry.by_name(black_box(symbol))).count())
    });

    let misses: Vec<String> = symbols.iter().map(|symbol| format!("{symbol}_MISSING")).collect();
    group.bench_with_input(BenchmarkId::new("unregistered", SAMPLES), &misses, |b, misses| {
        b.iter(|| misses.iter().filter_map(|symbol| registry.by_name(black_box(symbol))).count())
    });

    group.finish();
}

fn bench_by_value(c: &mut Criterion) {
    let registry = Registry::global();
    let mut group = c.benchmark_group("by_value");

    let mut rng = rand::thread_rng();
    let registered: Vec<u32> =
        (0..SAMPLES).map(|_| table::STATUS_CODES[rng.gen_range(0..table::STATUS_CODES.len())].value).collect();
    group.bench_with_input(BenchmarkId::new("registered", SAMPLES), &registered, |b, values| {
        b.iter(|| values.iter().map(|value| registry.by_value(black_box(*value)).len()).sum::<usize>())
    });

    let random = random_values(SAMPLES);
    group.bench_with_input(BenchmarkId::new("random", SAMPLES), &random, |b, values| {
        b.iter(|| values.iter().map(|value| registry.by_value(black_box(*value)).len()).sum::<usize>())
    });

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.bench_function("new", |b| b.iter(|| Registry::new(table::FACILITIES, table::STATUS_CODES).len()));
    group.bench_function("validate", |b| b.iter(|| Registry::global().validate().len()));
    group.finish();
}

criterion_group!(benches, bench_by_name, bench_by_value, bench_build);
criterion_main!(benches);
