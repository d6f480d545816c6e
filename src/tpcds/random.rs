// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! Per-column random number streams and the per-generator stream bank.
//!
//! Unlike the TPC-H bank, TPC-DS binds one Park-Miller lane to every column
//! (keyed by its global column number) and declares a fixed seed budget per
//! row. `consume_remaining_seeds_for_row` tops every lane to that budget so
//! row N+1 always starts from lane states that depend only on N.

use std::collections::HashMap;

use crate::tpcds::constants::{COLUMN_SEED_BASE, COLUMN_SEED_STRIDE};
use crate::tpch::random::{next_rand, nth_element};

const MODULUS_F: f64 = 2_147_483_647.0;

/// One column's Park-Miller lane.
#[derive(Clone, Debug)]
pub struct RandomNumberStream {
    column: usize,
    value: i64,
    seeds_used: i64,
    seeds_per_row: i64,
}

impl RandomNumberStream {
    /// A lane for a global column number with the given per-row seed budget.
    pub fn new(column: usize, seeds_per_row: i64) -> RandomNumberStream {
        let seed = COLUMN_SEED_BASE + column as i64 * COLUMN_SEED_STRIDE;
        RandomNumberStream {
            column,
            value: seed % 2_147_483_646 + 1,
            seeds_used: 0,
            seeds_per_row,
        }
    }

    /// The owning global column number.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn seeds_used(&self) -> i64 {
        self.seeds_used
    }

    pub fn seeds_per_row(&self) -> i64 {
        self.seeds_per_row
    }

    fn next(&mut self) -> i64 {
        self.value = next_rand(self.value);
        self.seeds_used += 1;
        self.value
    }

    /// Uniform integer in `[low, high]`.
    pub fn uniform_int(&mut self, mut low: i64, mut high: i64) -> i64 {
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }
        let range = (high - low + 1) as f64;
        let value = self.next();
        low + ((value as f64 / MODULUS_F) * range) as i64
    }

    /// Uniform scaled decimal (cents) in `[low, high]`.
    pub fn uniform_decimal(&mut self, low: i64, high: i64) -> i64 {
        self.uniform_int(low, high)
    }

    /// Jumps `row_count` rows forward in one shot.
    pub fn skip_rows(&mut self, row_count: i64) {
        if row_count <= 0 {
            return;
        }
        self.value = nth_element(self.seeds_per_row * row_count, self.value);
    }

    /// Tops the lane up to its per-row budget and clears the usage count.
    pub fn consume_remaining_seeds_for_row(&mut self) {
        let remaining = self.seeds_per_row - self.seeds_used;
        if remaining > 0 {
            self.value = nth_element(remaining, self.value);
        }
        self.seeds_used = 0;
    }
}

/// The ordered set of column lanes one row generator owns.
#[derive(Clone, Debug)]
pub struct RowStreams {
    entries: Vec<RandomNumberStream>,
    index: HashMap<usize, usize>,
}

impl RowStreams {
    /// Builds lanes for `(column, seeds_per_row)` pairs, in declaration order.
    pub fn new(columns: &[(usize, i64)]) -> RowStreams {
        let mut entries = Vec::with_capacity(columns.len());
        let mut index = HashMap::with_capacity(columns.len());
        for (i, (column, seeds)) in columns.iter().enumerate() {
            entries.push(RandomNumberStream::new(*column, *seeds));
            index.insert(*column, i);
        }
        RowStreams { entries, index }
    }

    /// The lane for a global column number. Unknown columns are a programmer
    /// error and panic.
    pub fn stream(&mut self, column: usize) -> &mut RandomNumberStream {
        let i = *self.index.get(&column).unwrap_or_else(|| panic!("unknown column id {column}"));
        &mut self.entries[i]
    }

    /// Read-only access for tests and peeks.
    pub fn stream_ref(&self, column: usize) -> &RandomNumberStream {
        let i = *self.index.get(&column).unwrap_or_else(|| panic!("unknown column id {column}"));
        &self.entries[i]
    }

    /// Jumps every lane `row_count` rows forward.
    pub fn skip_rows(&mut self, row_count: i64) {
        for entry in &mut self.entries {
            entry.skip_rows(row_count);
        }
    }

    /// Tops every lane to its budget and resets usage.
    pub fn consume_remaining_seeds_for_row(&mut self) {
        for entry in &mut self.entries {
            entry.consume_remaining_seeds_for_row();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_equals_consumed_rows() {
        let columns = [(7usize, 3i64), (8, 1)];
        let mut sequential = RowStreams::new(&columns);
        for _ in 0..5 {
            sequential.stream(7).uniform_int(1, 100);
            sequential.stream(8).uniform_int(1, 100);
            sequential.consume_remaining_seeds_for_row();
        }

        let mut skipped = RowStreams::new(&columns);
        skipped.skip_rows(5);

        assert_eq!(
            sequential.stream(7).uniform_int(1, 100),
            skipped.stream(7).uniform_int(1, 100)
        );
        assert_eq!(
            sequential.stream(8).uniform_int(1, 100),
            skipped.stream(8).uniform_int(1, 100)
        );
    }

    #[test]
    fn distinct_columns_get_distinct_seeds() {
        let a = RandomNumberStream::new(1, 1);
        let b = RandomNumberStream::new(2, 1);
        let mut a2 = a.clone();
        let mut b2 = b.clone();
        assert_ne!(a2.uniform_int(0, i32::MAX as i64), b2.uniform_int(0, i32::MAX as i64));
    }

    #[test]
    fn consume_tops_partial_usage() {
        let mut a = RandomNumberStream::new(3, 4);
        let mut b = RandomNumberStream::new(3, 4);
        a.uniform_int(1, 10);
        a.consume_remaining_seeds_for_row();
        for _ in 0..4 {
            b.uniform_int(1, 10);
        }
        b.consume_remaining_seeds_for_row();
        assert_eq!(a.uniform_int(1, 1000), b.uniform_int(1, 1000));
    }
}
