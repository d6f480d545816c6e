// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! A tiny abstraction for columnar record batches
//!
//! Inspired heavily by [columnar](https://crates.io/crates/columnar). The
//! emitter depends only on this surface; swapping in another columnar
//! representation (e.g. Arrow builders) only needs these appends.

/// The column types the generators emit.
///
/// Dates are days since the Unix epoch; decimals are scaled integers with the
/// declared precision and a scale of two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit float.
    Float64,
    /// Boolean.
    Boolean,
    /// Days since 1970-01-01.
    Date32,
    /// `decimal(precision, 2)` as a scaled i64.
    Decimal(u8),
    /// UTF-8 string.
    Utf8,
}

/// A named, typed column in a [Schema].
#[derive(Clone, Debug)]
pub struct Field {
    /// Column name.
    pub name: &'static str,
    /// Column type.
    pub column_type: ColumnType,
    /// Whether the column admits nulls.
    pub nullable: bool,
}

impl Field {
    /// A nullable field.
    pub fn new(name: &'static str, column_type: ColumnType) -> Field {
        Field { name, column_type, nullable: true }
    }

    /// A non-nullable field (keys).
    pub fn required(name: &'static str, column_type: ColumnType) -> Field {
        Field { name, column_type, nullable: false }
    }
}

/// An ordered list of [Field]s.
#[derive(Clone, Debug)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Constructs a schema from fields in column order.
    pub fn new(fields: Vec<Field>) -> Schema {
        Schema { fields }
    }

    /// The fields in column order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// The number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The index of the named column, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// A schema containing only the given column indices, in the given order.
    pub fn project(&self, indices: &[usize]) -> Schema {
        Schema { fields: indices.iter().map(|i| self.fields[*i].clone()).collect() }
    }
}

/// An in-progress column of a record batch.
///
/// Appends must match the builder's variant; a mismatch is a programmer error
/// and panics.
#[derive(Debug)]
pub enum ArrayBuilder {
    /// i32 values plus validity.
    Int32(Vec<i32>, Vec<bool>),
    /// i64 values plus validity.
    Int64(Vec<i64>, Vec<bool>),
    /// f64 values plus validity.
    Float64(Vec<f64>, Vec<bool>),
    /// bool values plus validity.
    Boolean(Vec<bool>, Vec<bool>),
    /// date32 values plus validity.
    Date32(Vec<i32>, Vec<bool>),
    /// Scaled decimal values plus validity and precision.
    Decimal(Vec<i64>, Vec<bool>, u8),
    /// String lengths-as-offsets plus concatenated bytes plus validity.
    Utf8(Vec<usize>, String, Vec<bool>),
}

impl ArrayBuilder {
    /// An empty builder for the given column type.
    pub fn new(column_type: ColumnType) -> ArrayBuilder {
        match column_type {
            ColumnType::Int32 => ArrayBuilder::Int32(Vec::new(), Vec::new()),
            ColumnType::Int64 => ArrayBuilder::Int64(Vec::new(), Vec::new()),
            ColumnType::Float64 => ArrayBuilder::Float64(Vec::new(), Vec::new()),
            ColumnType::Boolean => ArrayBuilder::Boolean(Vec::new(), Vec::new()),
            ColumnType::Date32 => ArrayBuilder::Date32(Vec::new(), Vec::new()),
            ColumnType::Decimal(p) => ArrayBuilder::Decimal(Vec::new(), Vec::new(), p),
            ColumnType::Utf8 => ArrayBuilder::Utf8(Vec::new(), String::new(), Vec::new()),
        }
    }

    /// Appends a null of this builder's type.
    pub fn append_null(&mut self) {
        match self {
            ArrayBuilder::Int32(v, set) => {
                v.push(0);
                set.push(false);
            }
            ArrayBuilder::Int64(v, set) => {
                v.push(0);
                set.push(false);
            }
            ArrayBuilder::Float64(v, set) => {
                v.push(0.0);
                set.push(false);
            }
            ArrayBuilder::Boolean(v, set) => {
                v.push(false);
                set.push(false);
            }
            ArrayBuilder::Date32(v, set) => {
                v.push(0);
                set.push(false);
            }
            ArrayBuilder::Decimal(v, set, _) => {
                v.push(0);
                set.push(false);
            }
            ArrayBuilder::Utf8(lens, concat, set) => {
                lens.push(concat.len());
                set.push(false);
            }
        }
    }

    /// Appends an i32.
    pub fn append_i32(&mut self, value: i32) {
        match self {
            ArrayBuilder::Int32(v, set) => {
                v.push(value);
                set.push(true);
            }
            _ => panic!("append_i32 on {self:?}"),
        }
    }

    /// Appends an i64.
    pub fn append_i64(&mut self, value: i64) {
        match self {
            ArrayBuilder::Int64(v, set) => {
                v.push(value);
                set.push(true);
            }
            _ => panic!("append_i64 on {self:?}"),
        }
    }

    /// Appends an f64.
    pub fn append_f64(&mut self, value: f64) {
        match self {
            ArrayBuilder::Float64(v, set) => {
                v.push(value);
                set.push(true);
            }
            _ => panic!("append_f64 on {self:?}"),
        }
    }

    /// Appends a bool.
    pub fn append_bool(&mut self, value: bool) {
        match self {
            ArrayBuilder::Boolean(v, set) => {
                v.push(value);
                set.push(true);
            }
            _ => panic!("append_bool on {self:?}"),
        }
    }

    /// Appends a date as days since epoch.
    pub fn append_date(&mut self, days: i32) {
        match self {
            ArrayBuilder::Date32(v, set) => {
                v.push(days);
                set.push(true);
            }
            _ => panic!("append_date on {self:?}"),
        }
    }

    /// Appends a scaled decimal.
    pub fn append_decimal(&mut self, number: i64) {
        match self {
            ArrayBuilder::Decimal(v, set, _) => {
                v.push(number);
                set.push(true);
            }
            _ => panic!("append_decimal on {self:?}"),
        }
    }

    /// Appends a string.
    pub fn append_str(&mut self, value: &str) {
        match self {
            ArrayBuilder::Utf8(lens, concat, set) => {
                concat.push_str(value);
                lens.push(concat.len());
                set.push(true);
            }
            _ => panic!("append_str on {self:?}"),
        }
    }

    /// Finishes the builder into an immutable [Array].
    pub fn finish(self) -> Array {
        match self {
            ArrayBuilder::Int32(v, set) => Array::Int32(v, set),
            ArrayBuilder::Int64(v, set) => Array::Int64(v, set),
            ArrayBuilder::Float64(v, set) => Array::Float64(v, set),
            ArrayBuilder::Boolean(v, set) => Array::Boolean(v, set),
            ArrayBuilder::Date32(v, set) => Array::Date32(v, set),
            ArrayBuilder::Decimal(v, set, p) => Array::Decimal(v, set, p),
            ArrayBuilder::Utf8(lens, concat, set) => Array::Utf8(lens, concat, set),
        }
    }
}

/// A finished column.
#[derive(Clone, Debug, PartialEq)]
pub enum Array {
    /// i32 values plus validity.
    Int32(Vec<i32>, Vec<bool>),
    /// i64 values plus validity.
    Int64(Vec<i64>, Vec<bool>),
    /// f64 values plus validity.
    Float64(Vec<f64>, Vec<bool>),
    /// bool values plus validity.
    Boolean(Vec<bool>, Vec<bool>),
    /// date32 values plus validity.
    Date32(Vec<i32>, Vec<bool>),
    /// Scaled decimal values plus validity and precision.
    Decimal(Vec<i64>, Vec<bool>, u8),
    /// String lengths-as-offsets plus concatenated bytes plus validity.
    Utf8(Vec<usize>, String, Vec<bool>),
}

impl Array {
    /// The number of values (including nulls).
    pub fn len(&self) -> usize {
        match self {
            Array::Int32(_, set)
            | Array::Int64(_, set)
            | Array::Float64(_, set)
            | Array::Boolean(_, set)
            | Array::Date32(_, set)
            | Array::Decimal(_, set, _)
            | Array::Utf8(_, _, set) => set.len(),
        }
    }

    /// Whether the array has no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the value at `idx` is null.
    pub fn is_null(&self, idx: usize) -> bool {
        match self {
            Array::Int32(_, set)
            | Array::Int64(_, set)
            | Array::Float64(_, set)
            | Array::Boolean(_, set)
            | Array::Date32(_, set)
            | Array::Decimal(_, set, _)
            | Array::Utf8(_, _, set) => !set[idx],
        }
    }

    /// The string at `idx`. Panics if the array is not Utf8.
    pub fn str_value(&self, idx: usize) -> &str {
        match self {
            Array::Utf8(lens, concat, _) => {
                let end = lens[idx];
                let start = if idx == 0 { 0 } else { lens[idx - 1] };
                &concat[start..end]
            }
            _ => panic!("str_value on {self:?}"),
        }
    }

    /// Renders the value at `idx` the way the `|`-separated harness does:
    /// nulls as empty strings, booleans as `Y`/`N`.
    pub fn render(&self, idx: usize) -> String {
        if self.is_null(idx) {
            return String::new();
        }
        match self {
            Array::Int32(v, _) => v[idx].to_string(),
            Array::Int64(v, _) => v[idx].to_string(),
            Array::Float64(v, _) => v[idx].to_string(),
            Array::Boolean(v, _) => if v[idx] { "Y" } else { "N" }.to_string(),
            Array::Date32(v, _) => v[idx].to_string(),
            Array::Decimal(v, _, _) => {
                let (whole, frac) = (v[idx] / 100, (v[idx] % 100).abs());
                format!("{whole}.{frac:02}")
            }
            Array::Utf8(..) => self.str_value(idx).to_string(),
        }
    }
}

/// A batch of rows as finished columns.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordBatch {
    /// The finished columns, in schema order.
    pub columns: Vec<Array>,
    /// The number of rows in every column.
    pub num_rows: usize,
}

impl RecordBatch {
    /// Assembles a batch, checking column lengths.
    pub fn new(num_rows: usize, columns: Vec<Array>) -> RecordBatch {
        for column in &columns {
            debug_assert_eq!(column.len(), num_rows);
        }
        RecordBatch { columns, num_rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_offsets() {
        let mut b = ArrayBuilder::new(ColumnType::Utf8);
        b.append_str("foo");
        b.append_null();
        b.append_str("");
        b.append_str("barbaz");
        let a = b.finish();
        assert_eq!(a.len(), 4);
        assert_eq!(a.str_value(0), "foo");
        assert!(a.is_null(1));
        assert_eq!(a.str_value(2), "");
        assert_eq!(a.str_value(3), "barbaz");
    }

    #[test]
    fn render_matches_harness_format() {
        let mut b = ArrayBuilder::new(ColumnType::Boolean);
        b.append_bool(true);
        b.append_bool(false);
        b.append_null();
        let a = b.finish();
        assert_eq!(a.render(0), "Y");
        assert_eq!(a.render(1), "N");
        assert_eq!(a.render(2), "");

        let mut b = ArrayBuilder::new(ColumnType::Decimal(7));
        b.append_decimal(123456);
        b.append_decimal(-205);
        let a = b.finish();
        assert_eq!(a.render(0), "1234.56");
        assert_eq!(a.render(1), "-2.05");
    }
}
