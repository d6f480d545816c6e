// Copyright 2026 The benchgen Authors. All Rights Reserved.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use benchgen::{open, GeneratorOptions, Suite};

fn bench_table(c: &mut Criterion, suite: Suite, suite_name: &str, table: &str, rows: i64) {
    let options = GeneratorOptions {
        scale_factor: 0.01,
        chunk_size: 1024,
        row_count: rows,
        ..Default::default()
    };

    let mut g = c.benchmark_group(suite_name);
    g.throughput(Throughput::Elements(rows as u64));
    g.bench_function(BenchmarkId::new(table, rows), |b| {
        b.iter(|| {
            let mut iter = open(suite, table, options.clone()).unwrap();
            let mut total = 0usize;
            while let Some(batch) = iter.next() {
                total += black_box(&batch).num_rows;
            }
            total
        });
    });
    g.finish();
}

fn gen(c: &mut Criterion) {
    bench_table(c, Suite::Tpch, "tpch", "customer", 1_000);
    bench_table(c, Suite::Tpch, "tpch", "lineitem", 4_000);
    bench_table(c, Suite::Tpcds, "tpcds", "customer", 1_000);
    bench_table(c, Suite::Tpcds, "tpcds", "store_sales", 4_000);
    bench_table(c, Suite::Ssb, "ssb", "lineorder", 4_000);
}

// The grouping here is an artifact of criterion's interaction with the
// plug-able rust benchmark harness. We use criterion's groups instead.
criterion_group!(benches, gen);
criterion_main!(benches);
