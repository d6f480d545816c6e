// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! SSB row-count formulas.

const CUSTOMER_BASE: i64 = 30_000;
const SUPPLIER_BASE: i64 = 2_000;
const PART_BASE: i64 = 200_000;
const DATE_BASE: i64 = 2_556;
const ORDERS_BASE: i64 = 150_000;
const ORDERS_PER_CUSTOMER: i64 = 10;
// dbgen lineorder row counts at scale 1/5/10 (used for interpolation).
const LINEORDER_SCALE_1: i64 = 6_001_215;
const LINEORDER_SCALE_5: i64 = 29_999_795;
const LINEORDER_SCALE_10: i64 = 59_986_052;

/// The SSB tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableId {
    Customer,
    Supplier,
    Part,
    Date,
    Lineorder,
}

fn scale_linear(base: i64, scale_factor: f64) -> i64 {
    if scale_factor < 1.0 {
        let scaled = base as f64 * scale_factor;
        return if scaled < 1.0 { 1 } else { scaled as i64 };
    }
    base * scale_factor as i64
}

// Parts grow with the log of the scale, not linearly.
fn part_scale_multiplier(scale: i64) -> i64 {
    if scale <= 1 {
        return 1;
    }
    (1.0 + (scale as f64).ln() / 2f64.ln()).floor() as i64
}

fn lineorder_count(scale_factor: f64) -> i64 {
    if scale_factor < 1.0 {
        return scale_linear(LINEORDER_SCALE_1, scale_factor);
    }
    let scale = scale_factor as i64;
    if scale <= 0 {
        return 0;
    }
    let tens = scale / 10;
    let remainder = scale % 10;
    let mut count = tens * LINEORDER_SCALE_10;
    if remainder == 0 {
        return count;
    }
    if remainder < 5 {
        let delta = LINEORDER_SCALE_5 - LINEORDER_SCALE_1;
        count += LINEORDER_SCALE_1 + (delta * (remainder - 1)) / 4;
        return count;
    }
    if remainder == 5 {
        return count + LINEORDER_SCALE_5;
    }
    let delta = LINEORDER_SCALE_10 - LINEORDER_SCALE_5;
    count + LINEORDER_SCALE_5 + (delta * (remainder - 5)) / 5
}

/// Orders behind the lineorder stream.
pub fn order_count(scale_factor: f64) -> i64 {
    scale_linear(ORDERS_BASE * ORDERS_PER_CUSTOMER, scale_factor)
}

/// Rows for `table` at `scale_factor`.
pub fn row_count(table: TableId, scale_factor: f64) -> i64 {
    let scale = if scale_factor >= 1.0 { scale_factor as i64 } else { 1 };
    let base_scale = if scale_factor < 1.0 { scale_factor } else { 1.0 };
    match table {
        TableId::Customer => scale_linear(CUSTOMER_BASE, scale_factor),
        TableId::Supplier => scale_linear(SUPPLIER_BASE, scale_factor),
        TableId::Part => {
            let base = PART_BASE * part_scale_multiplier(scale);
            let scaled = base as f64 * base_scale;
            if scaled < 1.0 {
                1
            } else {
                scaled as i64
            }
        }
        TableId::Date => {
            let scaled = DATE_BASE as f64 * base_scale;
            if scaled < 1.0 {
                1
            } else {
                scaled as i64
            }
        }
        TableId::Lineorder => lineorder_count(scale_factor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_one_counts() {
        assert_eq!(row_count(TableId::Customer, 1.0), 30_000);
        assert_eq!(row_count(TableId::Supplier, 1.0), 2_000);
        assert_eq!(row_count(TableId::Part, 1.0), 200_000);
        assert_eq!(row_count(TableId::Date, 1.0), 2_556);
        assert_eq!(row_count(TableId::Lineorder, 1.0), 6_001_215);
    }

    #[test]
    fn part_grows_logarithmically() {
        assert_eq!(row_count(TableId::Part, 2.0), 400_000);
        assert_eq!(row_count(TableId::Part, 4.0), 600_000);
        assert_eq!(row_count(TableId::Part, 8.0), 800_000);
    }

    #[test]
    fn lineorder_anchors() {
        assert_eq!(row_count(TableId::Lineorder, 5.0), 29_999_795);
        assert_eq!(row_count(TableId::Lineorder, 10.0), 59_986_052);
    }

    #[test]
    fn date_does_not_scale_up() {
        assert_eq!(row_count(TableId::Date, 100.0), 2_556);
        assert_eq!(row_count(TableId::Date, 0.5), 1_278);
    }
}
