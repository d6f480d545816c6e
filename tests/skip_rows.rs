// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! End-to-end windowing tests: a generator opened at `start_row = n` must
//! reproduce exactly the rows a full-stream read yields at that offset, and
//! batch boundaries must never affect content.

use benchgen::{open, GeneratorOptions, RecordBatchIter, Suite};

fn collect_rows(iter: &mut RecordBatchIter, limit: usize) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    while rows.len() < limit {
        let Some(batch) = iter.next() else {
            break;
        };
        for row in 0..batch.num_rows {
            if rows.len() >= limit {
                break;
            }
            rows.push(batch.columns.iter().map(|c| c.render(row)).collect());
        }
    }
    rows
}

fn assert_window_matches(suite: Suite, table: &str, scale_factor: f64, start: usize, count: usize) {
    let options = GeneratorOptions { scale_factor, chunk_size: 64, ..Default::default() };
    let mut full = open(suite, table, options.clone()).unwrap();
    let all_rows = collect_rows(&mut full, start + count);
    assert_eq!(all_rows.len(), start + count);

    let skip_options = GeneratorOptions {
        start_row: start as i64,
        row_count: count as i64,
        ..options
    };
    let mut windowed = open(suite, table, skip_options).unwrap();
    let skipped_rows = collect_rows(&mut windowed, count + 1);
    assert_eq!(skipped_rows.len(), count);

    for (i, row) in skipped_rows.iter().enumerate() {
        assert_eq!(row, &all_rows[start + i], "{table} row {}", start + i);
    }
}

#[test]
fn tpch_customer_window() {
    assert_window_matches(Suite::Tpch, "customer", 1.0, 5, 10);
}

#[test]
fn tpch_partsupp_window() {
    assert_window_matches(Suite::Tpch, "partsupp", 1.0, 3, 6);
}

#[test]
fn tpch_lineitem_window() {
    assert_window_matches(Suite::Tpch, "lineitem", 1.0, 10, 10);
}

#[test]
fn tpch_orders_window() {
    assert_window_matches(Suite::Tpch, "orders", 1.0, 7, 8);
}

#[test]
fn tpch_nation_and_region_windows() {
    assert_window_matches(Suite::Tpch, "nation", 1.0, 4, 6);
    assert_window_matches(Suite::Tpch, "region", 1.0, 2, 3);
}

#[test]
fn tpcds_dimension_windows() {
    assert_window_matches(Suite::Tpcds, "customer", 0.01, 10, 10);
    assert_window_matches(Suite::Tpcds, "customer_address", 0.01, 10, 10);
    assert_window_matches(Suite::Tpcds, "item", 0.01, 5, 10);
    assert_window_matches(Suite::Tpcds, "store", 1.0, 5, 6);
    assert_window_matches(Suite::Tpcds, "web_page", 1.0, 5, 10);
    assert_window_matches(Suite::Tpcds, "inventory", 0.01, 10, 10);
}

#[test]
fn tpcds_store_sales_window_crosses_a_ticket_boundary() {
    // Row 20 sits mid-ticket for every admissible per-ticket line count.
    assert_window_matches(Suite::Tpcds, "store_sales", 0.01, 20, 10);
}

#[test]
fn tpcds_returns_windows() {
    assert_window_matches(Suite::Tpcds, "store_returns", 0.01, 5, 5);
    assert_window_matches(Suite::Tpcds, "web_returns", 0.01, 5, 5);
}

#[test]
fn ssb_windows() {
    assert_window_matches(Suite::Ssb, "customer", 1.0, 5, 10);
    assert_window_matches(Suite::Ssb, "lineorder", 1.0, 10, 10);
    assert_window_matches(Suite::Ssb, "date", 1.0, 100, 10);
}

#[test]
fn chunk_size_never_changes_content() {
    for chunk_size in [17, 128] {
        let options = GeneratorOptions {
            scale_factor: 0.01,
            chunk_size,
            ..Default::default()
        };
        let mut iter = open(Suite::Tpcds, "customer", options).unwrap();
        let rows = collect_rows(&mut iter, usize::MAX);
        assert_eq!(rows.len(), 1000, "chunk_size={chunk_size}");
    }

    let small = {
        let options =
            GeneratorOptions { scale_factor: 0.01, chunk_size: 17, ..Default::default() };
        let mut iter = open(Suite::Tpcds, "customer", options).unwrap();
        collect_rows(&mut iter, usize::MAX)
    };
    let large = {
        let options =
            GeneratorOptions { scale_factor: 0.01, chunk_size: 128, ..Default::default() };
        let mut iter = open(Suite::Tpcds, "customer", options).unwrap();
        collect_rows(&mut iter, usize::MAX)
    };
    assert_eq!(small, large);
}

#[test]
fn identical_options_are_deterministic() {
    for (suite, table) in [
        (Suite::Tpch, "supplier"),
        (Suite::Tpcds, "warehouse"),
        (Suite::Ssb, "part"),
    ] {
        let options = GeneratorOptions {
            scale_factor: 0.01,
            chunk_size: 50,
            row_count: 100,
            ..Default::default()
        };
        let mut a = open(suite, table, options.clone()).unwrap();
        let mut b = open(suite, table, options).unwrap();
        assert_eq!(collect_rows(&mut a, usize::MAX), collect_rows(&mut b, usize::MAX));
    }
}

#[test]
fn harness_rendering_matches_the_pipe_format() {
    // Null columns render empty and booleans render Y/N, so a full line can
    // be joined with pipes the way the digest harness does.
    let options = GeneratorOptions { scale_factor: 0.01, row_count: 5, ..Default::default() };
    let mut iter = open(Suite::Tpcds, "customer", options).unwrap();
    let batch = iter.next().unwrap();
    for row in 0..batch.num_rows {
        let line: Vec<String> = batch.columns.iter().map(|c| c.render(row)).collect();
        let joined = line.join("|") + "|";
        assert_eq!(joined.matches('|').count(), 18);
        // The preferred-customer flag renders as Y, N, or empty.
        assert!(matches!(line[10].as_str(), "Y" | "N" | ""));
    }
}
