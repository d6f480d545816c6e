// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! Slowly-changing-dimension machinery: the 6-row/3-id revision layout, the
//! record date windows, and the per-row field-change bitmap that decides
//! which attributes a revision inherits from the previous row.

use crate::tpcds::constants::{JULIAN_DATA_END_DATE, JULIAN_DATA_START_DATE};
use crate::tpcds::random::RandomNumberStream;
use crate::tpcds::scaling::Scaling;
use crate::tpcds::constants::Table;
use crate::tpcds::support::make_business_key;

// Revision date splits across the data window.
fn half_date() -> i64 {
    JULIAN_DATA_START_DATE + (JULIAN_DATA_END_DATE - JULIAN_DATA_START_DATE) / 2
}

fn third_date(n: i64) -> i64 {
    JULIAN_DATA_START_DATE + n * (JULIAN_DATA_END_DATE - JULIAN_DATA_START_DATE) / 3
}

/// The SCD key material for one surrogate row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScdKey {
    /// The repeating business key.
    pub business_key: String,
    /// Whether this row starts a new business key (no inheritance).
    pub is_new_business_key: bool,
    /// rec_start_date as a julian day, or -1 for none.
    pub start_date: i64,
    /// rec_end_date as a julian day, or -1 for open-ended.
    pub end_date: i64,
}

/// Computes the key layout for 1-based `row_number`: rows cycle through six
/// definitions covering one single-revision id, one two-revision id, and one
/// three-revision id.
pub fn scd_key(row_number: i64) -> ScdKey {
    let definition = (row_number - 1) % 6;
    let id_base = ((row_number - 1) / 6) * 3;
    let (id_offset, is_new, start, end) = match definition {
        // One revision, valid for the whole window.
        0 => (1, true, JULIAN_DATA_START_DATE, -1),
        // First and second of two revisions, split at the half-way date.
        1 => (2, true, JULIAN_DATA_START_DATE, half_date()),
        2 => (2, false, half_date() + 1, -1),
        // First, second, and third of three revisions, split at thirds.
        3 => (3, true, JULIAN_DATA_START_DATE, third_date(1)),
        4 => (3, false, third_date(1) + 1, third_date(2)),
        _ => (3, false, third_date(2) + 1, -1),
    };
    ScdKey {
        business_key: make_business_key((id_base + id_offset) as u64),
        is_new_business_key: is_new,
        start_date: start,
        end_date: end,
    }
}

/// Maps a unique business id plus a transaction date to the surrogate key of
/// the revision active on that date, or -1 when the id is out of range.
pub fn match_surrogate_key(unique: i64, julian_date: i64, table: Table, scaling: &Scaling) -> i64 {
    if unique < 1 {
        return -1;
    }
    let mut surrogate = ((unique - 1) / 3) * 6;
    match (unique - 1) % 3 {
        0 => surrogate += 1,
        1 => {
            surrogate += 2;
            if julian_date > half_date() {
                surrogate += 1;
            }
        }
        _ => {
            surrogate += 4;
            if julian_date > third_date(1) {
                surrogate += 1;
            }
            if julian_date > third_date(2) {
                surrogate += 1;
            }
        }
    }
    if surrogate > scaling.row_count(table) {
        -1
    } else {
        surrogate
    }
}

/// The per-row change bitmap; one draw on the table's SCD stream.
pub fn field_change_flags(stream: &mut RandomNumberStream) -> i64 {
    stream.uniform_int(0, i32::MAX as i64)
}

/// Picks the new or inherited value for one column, then shifts the flags
/// for the next column. New business keys always take the new value; a
/// revision keeps the old value when its flag bit is clear.
pub fn scd_value<T: Clone>(new: T, old: &mut T, flags: &mut i64, is_new_key: bool) -> T {
    let use_new = is_new_key || (*flags & 1) != 0;
    *flags >>= 1;
    if use_new {
        *old = new.clone();
        new
    } else {
        old.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_row_cycle() {
        // Rows 1..=6 cover ids 1, 2, 2, 3, 3, 3.
        let keys: Vec<ScdKey> = (1..=6).map(scd_key).collect();
        assert!(keys[0].is_new_business_key);
        assert!(keys[1].is_new_business_key);
        assert!(!keys[2].is_new_business_key);
        assert!(keys[3].is_new_business_key);
        assert!(!keys[4].is_new_business_key);
        assert!(!keys[5].is_new_business_key);
        assert_eq!(keys[1].business_key, keys[2].business_key);
        assert_eq!(keys[3].business_key, keys[4].business_key);
        assert_eq!(keys[4].business_key, keys[5].business_key);
        assert_ne!(keys[0].business_key, keys[1].business_key);

        // Revision windows chain without gaps.
        assert_eq!(keys[2].start_date, keys[1].end_date + 1);
        assert_eq!(keys[4].start_date, keys[3].end_date + 1);
        assert_eq!(keys[5].start_date, keys[4].end_date + 1);
        assert_eq!(keys[0].end_date, -1);
        assert_eq!(keys[5].end_date, -1);
    }

    #[test]
    fn surrogate_matches_active_revision() {
        let scaling = Scaling::new(1.0);
        // Item id 2 has two revisions split at the half-way date.
        let early = match_surrogate_key(2, JULIAN_DATA_START_DATE + 1, Table::Item, &scaling);
        let late = match_surrogate_key(2, JULIAN_DATA_END_DATE - 1, Table::Item, &scaling);
        assert_eq!(early, 2);
        assert_eq!(late, 3);
        // Id 1 has a single revision.
        assert_eq!(match_surrogate_key(1, JULIAN_DATA_END_DATE, Table::Item, &scaling), 1);
        // Out-of-range ids are rejected.
        assert_eq!(match_surrogate_key(0, JULIAN_DATA_END_DATE, Table::Item, &scaling), -1);
    }

    #[test]
    fn revision_inheritance_follows_flags() {
        let mut old = "old".to_string();
        let mut flags = 0b10i64;
        // Bit 0 clear: revision keeps the old value.
        let kept = scd_value("new".to_string(), &mut old, &mut flags, false);
        assert_eq!(kept, "old");
        // Bit shifted: next column's bit is set, so the new value wins.
        let replaced = scd_value("newer".to_string(), &mut old, &mut flags, false);
        assert_eq!(replaced, "newer");
        assert_eq!(old, "newer");
    }
}
