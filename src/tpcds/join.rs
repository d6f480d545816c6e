// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! Foreign-key generation: uniform keys for plain dimensions, date-window
//! keys for the date and time dimensions, and surrogate matching for
//! history-keeping targets.

use crate::tpcds::constants::{
    Table, JULIAN_DATA_END_DATE, JULIAN_DATA_START_DATE, SECONDS_PER_DAY,
};
use crate::tpcds::random::RandomNumberStream;
use crate::tpcds::scaling::Scaling;
use crate::tpcds::scd::match_surrogate_key;

/// Seeds one join key consumes.
pub const JOIN_KEY_SEEDS_PER_ROW: i64 = 2;

/// A foreign key into `table`. Date keys are julian day numbers inside the
/// data window; time keys are seconds of day; SCD targets resolve the
/// revision active on a drawn date.
pub fn generate_join_key(
    table: Table,
    stream: &mut RandomNumberStream,
    scaling: &Scaling,
) -> i64 {
    match table {
        Table::DateDim => stream.uniform_int(JULIAN_DATA_START_DATE, JULIAN_DATA_END_DATE),
        Table::TimeDim => stream.uniform_int(0, SECONDS_PER_DAY - 1),
        _ if table.keeps_history() => {
            let id_count = scaling.id_count(table);
            if id_count <= 0 {
                return -1;
            }
            let unique = stream.uniform_int(1, id_count);
            let date = stream.uniform_int(JULIAN_DATA_START_DATE, JULIAN_DATA_END_DATE);
            match_surrogate_key(unique, date, table, scaling)
        }
        _ => {
            let row_count = scaling.row_count(table);
            if row_count <= 0 {
                return -1;
            }
            stream.uniform_int(1, row_count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_stay_in_range() {
        let scaling = Scaling::new(1.0);
        let mut stream = RandomNumberStream::new(51, JOIN_KEY_SEEDS_PER_ROW);
        for _ in 0..200 {
            let customer = generate_join_key(Table::Customer, &mut stream, &scaling);
            assert!((1..=100_000).contains(&customer));
            let date = generate_join_key(Table::DateDim, &mut stream, &scaling);
            assert!((JULIAN_DATA_START_DATE..=JULIAN_DATA_END_DATE).contains(&date));
            let time = generate_join_key(Table::TimeDim, &mut stream, &scaling);
            assert!((0..SECONDS_PER_DAY).contains(&time));
            let item = generate_join_key(Table::Item, &mut stream, &scaling);
            assert!(item == -1 || (1..=18_000).contains(&item));
        }
    }
}
