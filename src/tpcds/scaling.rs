// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! TPC-DS row-count scaling: anchored counts per table with linear
//! interpolation between the defined scale points, plus the SCD id-count
//! mapping used by join keys.

use crate::tpcds::constants::{Table, INVENTORY_WEEKS};

// (scale-1 rows, scale-10 rows, scale-100 rows). Fixed-cardinality tables
// use the same value at every anchor.
fn anchors(table: Table) -> (i64, i64, i64) {
    match table {
        Table::CallCenter => (6, 24, 30),
        Table::CatalogPage => (11_718, 12_000, 20_400),
        Table::CatalogReturns => (144_067, 1_440_126, 14_399_706),
        Table::CatalogSales => (1_441_548, 14_401_261, 143_997_065),
        Table::Customer => (100_000, 650_000, 6_500_000),
        Table::CustomerAddress => (50_000, 325_000, 3_250_000),
        Table::CustomerDemographics => (1_920_800, 1_920_800, 1_920_800),
        Table::DateDim => (73_049, 73_049, 73_049),
        Table::HouseholdDemographics => (7_200, 7_200, 7_200),
        Table::IncomeBand => (20, 20, 20),
        Table::Inventory => (0, 0, 0),
        Table::Item => (18_000, 102_000, 204_000),
        Table::Promotion => (300, 500, 1_000),
        Table::Reason => (35, 45, 55),
        Table::ShipMode => (20, 20, 20),
        Table::Store => (12, 102, 402),
        Table::StoreReturns => (287_514, 2_875_432, 28_795_080),
        Table::StoreSales => (2_880_404, 28_800_991, 287_997_024),
        Table::TimeDim => (86_400, 86_400, 86_400),
        Table::Warehouse => (5, 10, 15),
        Table::WebPage => (60, 200, 2_040),
        Table::WebReturns => (71_763, 719_217, 7_197_670),
        Table::WebSales => (719_384, 7_197_566, 72_001_237),
        Table::WebSite => (30, 42, 24),
    }
}

fn interpolate(low: i64, high: i64, low_scale: i64, high_scale: i64, scale: i64) -> i64 {
    if high_scale == low_scale {
        return low;
    }
    low + (high - low) * (scale - low_scale) / (high_scale - low_scale)
}

/// Scale-dependent cardinalities at one scale factor.
#[derive(Clone, Copy, Debug)]
pub struct Scaling {
    scale: f64,
}

impl Scaling {
    pub fn new(scale: f64) -> Scaling {
        Scaling { scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rows for `table` at this scale.
    pub fn row_count(&self, table: Table) -> i64 {
        if table == Table::Inventory {
            // Dense product: weekly snapshots of every item id at every
            // warehouse.
            return INVENTORY_WEEKS
                * self.id_count(Table::Item)
                * self.row_count(Table::Warehouse);
        }
        let (s1, s10, s100) = anchors(table);
        if self.scale < 1.0 {
            if s1 == s10 && s10 == s100 {
                // Fixed-cardinality dimensions do not shrink.
                return s1;
            }
            let scaled = (s1 as f64 * self.scale) as i64;
            return scaled.max(1);
        }
        let scale = self.scale as i64;
        if scale <= 1 {
            s1
        } else if scale <= 10 {
            interpolate(s1, s10, 1, 10, scale)
        } else if scale <= 100 {
            interpolate(s10, s100, 10, 100, scale)
        } else {
            // Beyond the last anchor, continue the 10..100 slope.
            interpolate(s10, s100, 10, 100, scale)
        }
    }

    /// Unique business ids for `table`: SCD tables map six surrogate rows to
    /// three ids, everything else is 1:1.
    pub fn id_count(&self, table: Table) -> i64 {
        let row_count = self.row_count(table);
        if !table.keeps_history() {
            return row_count;
        }
        let mut unique = (row_count / 6) * 3;
        unique += match row_count % 6 {
            0 => 0,
            1 => 1,
            2 | 3 => 2,
            _ => 3,
        };
        unique
    }

    /// How many `table` parent rows fall on a given julian day; sales use it
    /// to advance the order date deterministically.
    pub fn row_count_for_date(&self, table: Table, julian: i64) -> i64 {
        use crate::tpcds::constants::{DATA_DAYS, JULIAN_DATA_START_DATE};
        let total = self.row_count(table);
        let base = total / DATA_DAYS;
        let remainder = total % DATA_DAYS;
        let day_index = julian - JULIAN_DATA_START_DATE;
        if day_index < 0 || day_index >= DATA_DAYS {
            return 0;
        }
        base + if day_index < remainder { 1 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_one_counts() {
        let scaling = Scaling::new(1.0);
        assert_eq!(scaling.row_count(Table::Customer), 100_000);
        assert_eq!(scaling.row_count(Table::StoreSales), 2_880_404);
        assert_eq!(scaling.row_count(Table::TimeDim), 86_400);
        assert_eq!(scaling.row_count(Table::Warehouse), 5);
        assert_eq!(scaling.row_count(Table::Item), 18_000);
    }

    #[test]
    fn fractional_scale_keeps_small_dimensions() {
        let scaling = Scaling::new(0.01);
        assert_eq!(scaling.row_count(Table::Customer), 1_000);
        assert_eq!(scaling.row_count(Table::ShipMode), 20);
        assert_eq!(scaling.row_count(Table::IncomeBand), 20);
        assert_eq!(scaling.row_count(Table::TimeDim), 86_400);
    }

    #[test]
    fn scd_id_mapping() {
        let scaling = Scaling::new(1.0);
        // 18000 item rows -> 9000 unique item ids.
        assert_eq!(scaling.id_count(Table::Item), 9_000);
        // 12 store rows -> 6 ids.
        assert_eq!(scaling.id_count(Table::Store), 6);
        // Non-history tables are 1:1.
        assert_eq!(scaling.id_count(Table::Customer), 100_000);
    }

    #[test]
    fn inventory_is_a_dense_product() {
        let scaling = Scaling::new(1.0);
        assert_eq!(
            scaling.row_count(Table::Inventory),
            261 * 9_000 * 5,
        );
    }

    #[test]
    fn per_date_counts_sum_to_total() {
        use crate::tpcds::constants::{DATA_DAYS, JULIAN_DATA_START_DATE};
        let scaling = Scaling::new(0.01);
        let total: i64 = (0..DATA_DAYS)
            .map(|d| scaling.row_count_for_date(Table::CatalogSales, JULIAN_DATA_START_DATE + d))
            .sum();
        assert_eq!(total, scaling.row_count(Table::CatalogSales));
    }
}
