// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! Row-count formulas per table and scale factor.

use crate::tpch::constants::{ORDERS_PER_CUSTOMER, SUPP_PER_PART};

const PART_BASE: i64 = 200_000;
const SUPPLIER_BASE: i64 = 10_000;
const CUSTOMER_BASE: i64 = 150_000;
const ORDERS_BASE: i64 = 150_000;
// dbgen lineitem row counts at scale 1/5/10 (used for interpolation).
const LINEITEM_SCALE_1: i64 = 6_001_215;
const LINEITEM_SCALE_5: i64 = 29_999_795;
const LINEITEM_SCALE_10: i64 = 59_986_052;

/// The TPC-H tables with a scaling rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableId {
    Part,
    PartSupp,
    Supplier,
    Customer,
    Orders,
    LineItem,
    Nation,
    Region,
}

fn scale_linear(base: i64, scale_factor: f64) -> i64 {
    if scale_factor < 1.0 {
        let int_scale = (scale_factor * 1000.0) as i64;
        let scaled = (int_scale * base) / 1000;
        return scaled.max(1);
    }
    base * scale_factor as i64
}

/// dbgen's measured lineitem counts, interpolated between the 1/5/10
/// anchors and repeated per ten scale units.
pub fn lineitem_count(scale_factor: f64) -> i64 {
    if scale_factor < 1.0 {
        return scale_linear(LINEITEM_SCALE_1, scale_factor);
    }
    let scale = scale_factor as i64;
    if scale <= 0 {
        return 0;
    }
    let tens = scale / 10;
    let remainder = scale % 10;
    let mut count = tens * LINEITEM_SCALE_10;
    if remainder == 0 {
        return count;
    }
    if remainder < 5 {
        let delta = LINEITEM_SCALE_5 - LINEITEM_SCALE_1;
        count += LINEITEM_SCALE_1 + (delta * (remainder - 1)) / 4;
        return count;
    }
    if remainder == 5 {
        return count + LINEITEM_SCALE_5;
    }
    let delta = LINEITEM_SCALE_10 - LINEITEM_SCALE_5;
    count + LINEITEM_SCALE_5 + (delta * (remainder - 5)) / 5
}

/// Orders per scale factor: the customer base times ten.
pub fn order_count(scale_factor: f64) -> i64 {
    scale_linear(ORDERS_BASE * ORDERS_PER_CUSTOMER, scale_factor)
}

/// Rows for `table` at `scale_factor`. Nation and Region are sized by their
/// distribution's length, not here.
pub fn row_count(table: TableId, scale_factor: f64) -> i64 {
    match table {
        TableId::Part => scale_linear(PART_BASE, scale_factor),
        TableId::PartSupp => scale_linear(PART_BASE, scale_factor) * SUPP_PER_PART,
        TableId::Supplier => scale_linear(SUPPLIER_BASE, scale_factor),
        TableId::Customer => scale_linear(CUSTOMER_BASE, scale_factor),
        TableId::Orders => order_count(scale_factor),
        TableId::LineItem => lineitem_count(scale_factor),
        TableId::Nation | TableId::Region => -1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_one_counts() {
        assert_eq!(row_count(TableId::Customer, 1.0), 150_000);
        assert_eq!(row_count(TableId::Supplier, 1.0), 10_000);
        assert_eq!(row_count(TableId::Part, 1.0), 200_000);
        assert_eq!(row_count(TableId::PartSupp, 1.0), 800_000);
        assert_eq!(row_count(TableId::Orders, 1.0), 1_500_000);
        assert_eq!(row_count(TableId::LineItem, 1.0), 6_001_215);
    }

    #[test]
    fn lineitem_anchors() {
        assert_eq!(row_count(TableId::LineItem, 5.0), 29_999_795);
        assert_eq!(row_count(TableId::LineItem, 10.0), 59_986_052);
        assert_eq!(row_count(TableId::LineItem, 20.0), 2 * 59_986_052);
    }

    #[test]
    fn fractional_scale() {
        assert_eq!(row_count(TableId::Customer, 0.01), 1500);
        assert_eq!(row_count(TableId::Supplier, 0.0001), 1);
        assert_eq!(row_count(TableId::Orders, 0.1), 150_000);
    }
}
