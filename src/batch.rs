// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! The batch emitter: drives a row source in chunks and assembles record
//! batches through the columnar builders.

use crate::col::{ArrayBuilder, RecordBatch, Schema};
use crate::error::{Error, Result};

/// Caller options for [crate::open].
#[derive(Clone, Debug)]
pub struct GeneratorOptions {
    /// Data volume multiplier; must be positive.
    pub scale_factor: f64,
    /// Rows per emitted batch; must be positive.
    pub chunk_size: i64,
    /// First row (0-based) to emit.
    pub start_row: i64,
    /// Rows to emit; -1 means everything from `start_row` on.
    pub row_count: i64,
    /// Optional projection; `None` keeps every column.
    pub column_names: Option<Vec<String>>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            scale_factor: 1.0,
            chunk_size: 4096,
            start_row: 0,
            row_count: -1,
            column_names: None,
        }
    }
}

/// One table's row production surface. The emitter owns the chunking; a
/// source owns its stream bank and scratch state.
pub trait RowSource {
    /// The full (unprojected) schema.
    fn schema(&self) -> &Schema;

    /// Total rows at the configured scale factor.
    fn total_rows(&self) -> i64;

    /// Fast-forwards over `rows` rows, leaving streams and scratch state as
    /// sequential generation would have.
    fn skip_rows(&mut self, rows: i64);

    /// Generates the next row and appends one value (or null) per column.
    /// Implementations consume their remaining per-row seed budget before
    /// returning; skipping that top-up produces divergent rows.
    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]);
}

/// A chunked iterator over one table's record batches.
pub struct RecordBatchIter {
    source: Box<dyn RowSource>,
    schema: Schema,
    projection: Vec<usize>,
    chunk_size: i64,
    total_rows: i64,
    remaining_rows: i64,
}

impl std::fmt::Debug for RecordBatchIter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordBatchIter")
            .field("schema", &self.schema)
            .field("projection", &self.projection)
            .field("chunk_size", &self.chunk_size)
            .field("total_rows", &self.total_rows)
            .field("remaining_rows", &self.remaining_rows)
            .finish()
    }
}

impl RecordBatchIter {
    /// Validates options, clamps the row window, and positions the source.
    pub fn new(mut source: Box<dyn RowSource>, options: &GeneratorOptions) -> Result<RecordBatchIter> {
        if options.scale_factor <= 0.0 {
            return Err(Error::invalid("scale_factor must be positive"));
        }
        if options.chunk_size <= 0 {
            return Err(Error::invalid("chunk_size must be positive"));
        }
        if options.start_row < 0 {
            return Err(Error::invalid("start_row must be non-negative"));
        }

        let full_schema = source.schema().clone();
        let projection = match &options.column_names {
            None => (0..full_schema.len()).collect::<Vec<_>>(),
            Some(names) => {
                let mut indices = Vec::with_capacity(names.len());
                for name in names {
                    let index = full_schema
                        .index_of(name)
                        .ok_or_else(|| Error::invalid(format!("unknown column name: {name}")))?;
                    indices.push(index);
                }
                indices
            }
        };
        let schema = full_schema.project(&projection);

        let total_rows = source.total_rows();
        let remaining_rows = if options.start_row >= total_rows {
            0
        } else {
            let available = total_rows - options.start_row;
            if options.row_count < 0 {
                available
            } else {
                options.row_count.min(available)
            }
        };
        if remaining_rows > 0 {
            source.skip_rows(options.start_row);
        }

        Ok(RecordBatchIter {
            source,
            schema,
            projection,
            chunk_size: options.chunk_size,
            total_rows,
            remaining_rows,
        })
    }

    /// The projected schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Total rows at this scale factor (before windowing).
    pub fn total_rows(&self) -> i64 {
        self.total_rows
    }

    /// Rows still to be emitted.
    pub fn remaining_rows(&self) -> i64 {
        self.remaining_rows
    }

    /// The next batch, or `None` at end of stream.
    pub fn next(&mut self) -> Option<RecordBatch> {
        if self.remaining_rows == 0 {
            return None;
        }
        let batch_rows = self.remaining_rows.min(self.chunk_size);

        let full_schema = self.source.schema();
        let mut builders: Vec<ArrayBuilder> =
            full_schema.fields().iter().map(|f| ArrayBuilder::new(f.column_type)).collect();

        for _ in 0..batch_rows {
            self.source.append_next_row(&mut builders);
        }
        self.remaining_rows -= batch_rows;

        let arrays: Vec<_> = builders.into_iter().map(ArrayBuilder::finish).collect();
        let projected =
            self.projection.iter().map(|index| arrays[*index].clone()).collect::<Vec<_>>();
        Some(RecordBatch::new(batch_rows as usize, projected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::col::{ColumnType, Field};

    struct Counter {
        schema: Schema,
        next: i64,
        total: i64,
    }

    impl RowSource for Counter {
        fn schema(&self) -> &Schema {
            &self.schema
        }

        fn total_rows(&self) -> i64 {
            self.total
        }

        fn skip_rows(&mut self, rows: i64) {
            self.next += rows;
        }

        fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
            builders[0].append_i64(self.next);
            builders[1].append_str(&format!("row-{}", self.next));
            self.next += 1;
        }
    }

    fn counter(total: i64) -> Box<dyn RowSource> {
        Box::new(Counter {
            schema: Schema::new(vec![
                Field::required("k", ColumnType::Int64),
                Field::new("v", ColumnType::Utf8),
            ]),
            next: 0,
            total,
        })
    }

    #[test]
    fn chunking_and_remaining() {
        let options = GeneratorOptions { chunk_size: 4, ..Default::default() };
        let mut iter = RecordBatchIter::new(counter(10), &options).unwrap();
        assert_eq!(iter.total_rows(), 10);
        assert_eq!(iter.remaining_rows(), 10);
        let sizes: Vec<usize> = std::iter::from_fn(|| iter.next().map(|b| b.num_rows)).collect();
        assert_eq!(sizes, vec![4, 4, 2]);
        assert_eq!(iter.remaining_rows(), 0);
        assert!(iter.next().is_none());
    }

    #[test]
    fn window_clamps() {
        let options = GeneratorOptions { start_row: 7, row_count: 10, ..Default::default() };
        let iter = RecordBatchIter::new(counter(10), &options).unwrap();
        assert_eq!(iter.remaining_rows(), 3);

        let options = GeneratorOptions { start_row: 10, ..Default::default() };
        let mut iter = RecordBatchIter::new(counter(10), &options).unwrap();
        assert!(iter.next().is_none());
    }

    #[test]
    fn projection_selects_and_reorders() {
        let options = GeneratorOptions {
            column_names: Some(vec!["v".to_string(), "k".to_string()]),
            chunk_size: 2,
            ..Default::default()
        };
        let mut iter = RecordBatchIter::new(counter(3), &options).unwrap();
        assert_eq!(iter.schema().fields()[0].name, "v");
        let batch = iter.next().unwrap();
        assert_eq!(batch.columns[0].str_value(0), "row-0");
        assert_eq!(batch.columns[1].render(1), "1");
    }

    #[test]
    fn invalid_options_are_rejected() {
        assert!(RecordBatchIter::new(
            counter(1),
            &GeneratorOptions { chunk_size: 0, ..Default::default() }
        )
        .is_err());
        assert!(RecordBatchIter::new(
            counter(1),
            &GeneratorOptions { start_row: -1, ..Default::default() }
        )
        .is_err());
        assert!(RecordBatchIter::new(
            counter(1),
            &GeneratorOptions { column_names: Some(vec!["nope".into()]), ..Default::default() }
        )
        .is_err());
    }
}
