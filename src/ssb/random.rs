// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! The SSB stream bank. Same seed values as the TPC-H bank, but the text
//! boundaries budget sentence-at-a-time draws instead of pool slices, and
//! `random_int` has no `MAX_LONG` overflow special case.

use crate::ssb::constants::*;
use crate::tpch::random::{next_rand, nth_element};

const MODULUS_F: f64 = 2_147_483_647.0;

fn child_table(table: SsbTable) -> SsbTable {
    match table {
        SsbTable::Part => SsbTable::PartSupp,
        SsbTable::Order => SsbTable::Line,
        _ => SsbTable::None,
    }
}

#[derive(Clone, Copy, Debug)]
struct SeedState {
    table: SsbTable,
    value: i64,
    usage: i64,
    boundary: i64,
}

const S: i64 = RNG_PER_SENTENCE;

const INITIAL_SEEDS: [(SsbTable, i64, i64); MAX_STREAM + 1] = [
    (SsbTable::Part, 1, 1),
    (SsbTable::Part, 46831694, 1),
    (SsbTable::Part, 1841581359, 1),
    (SsbTable::Part, 1193163244, 1),
    (SsbTable::Part, 727633698, 1),
    (SsbTable::None, 933588178, 1),
    (SsbTable::Part, 804159733, S * 3),
    (SsbTable::PartSupp, 1671059989, 4),
    (SsbTable::PartSupp, 1051288424, 4),
    (SsbTable::PartSupp, 1961692154, 4 * S * 20),
    (SsbTable::Order, 1227283347, 1),
    (SsbTable::Order, 1171034773, 1),
    (SsbTable::Order, 276090261, S * 8),
    (SsbTable::Order, 1066728069, 1),
    (SsbTable::Line, 209208115, O_LCNT_MAX),
    (SsbTable::Line, 554590007, O_LCNT_MAX),
    (SsbTable::Line, 721958466, O_LCNT_MAX),
    (SsbTable::Line, 1371272478, O_LCNT_MAX),
    (SsbTable::Line, 675466456, O_LCNT_MAX),
    (SsbTable::Line, 1808217256, O_LCNT_MAX),
    (SsbTable::Line, 2095021727, O_LCNT_MAX),
    (SsbTable::Line, 1769349045, O_LCNT_MAX),
    (SsbTable::Line, 904914315, O_LCNT_MAX),
    (SsbTable::Line, 373135028, O_LCNT_MAX),
    (SsbTable::Line, 717419739, O_LCNT_MAX),
    (SsbTable::Line, 1095462486, O_LCNT_MAX * S * 5),
    (SsbTable::Cust, 881155353, 9),
    (SsbTable::Cust, 1489529863, 1),
    (SsbTable::Cust, 1521138112, 3),
    (SsbTable::Cust, 298370230, 1),
    (SsbTable::Cust, 1140279430, 1),
    (SsbTable::Cust, 1335826707, S * 12),
    (SsbTable::Supp, 706178559, 9),
    (SsbTable::Supp, 110356601, 1),
    (SsbTable::Supp, 884434366, 3),
    (SsbTable::Supp, 962338209, 1),
    (SsbTable::Supp, 1341315363, S * 11),
    (SsbTable::Part, 709314158, MAX_COLOR),
    (SsbTable::Order, 591449447, 1),
    (SsbTable::Line, 431918286, 1),
    (SsbTable::Order, 851767375, 1),
    (SsbTable::Nation, 606179079, S * 16),
    (SsbTable::Region, 1500869201, S * 16),
    (SsbTable::Order, 1434868289, 1),
    (SsbTable::Supp, 263032577, 1),
    (SsbTable::Supp, 753643799, 1),
    (SsbTable::Supp, 202794285, 1),
    (SsbTable::Supp, 715851524, 1),
];

/// The SSB 48-stream bank.
#[derive(Clone, Debug)]
pub struct StreamBank {
    seeds: [SeedState; MAX_STREAM + 1],
}

impl Default for StreamBank {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamBank {
    pub fn new() -> StreamBank {
        let mut seeds = [SeedState { table: SsbTable::None, value: 0, usage: 0, boundary: 0 };
            MAX_STREAM + 1];
        for (state, (table, value, boundary)) in seeds.iter_mut().zip(INITIAL_SEEDS.iter()) {
            *state = SeedState { table: *table, value: *value, usage: 0, boundary: *boundary };
        }
        StreamBank { seeds }
    }

    pub fn row_start(&mut self) {
        for seed in &mut self.seeds {
            seed.usage = 0;
        }
    }

    pub fn row_stop(&mut self, table: SsbTable) {
        let table = match table {
            SsbTable::OrderLine => SsbTable::Order,
            SsbTable::PartPsupp => SsbTable::Part,
            other => other,
        };
        let child = child_table(table);
        for seed in &mut self.seeds {
            if seed.table == table || seed.table == child {
                let remaining = seed.boundary - seed.usage;
                if remaining > 0 {
                    seed.value = nth_element(remaining, seed.value);
                }
            }
        }
    }

    pub fn random_int(&mut self, mut low: i64, mut high: i64, stream: usize) -> i64 {
        let index = normalize_stream(stream);
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }
        let range = (high - low + 1) as f64;
        let seed = &mut self.seeds[index];
        seed.value = next_rand(seed.value);
        let ntemp = ((seed.value as f64 / MODULUS_F) * range) as i64;
        seed.usage += 1;
        low + ntemp
    }

    pub fn peek_random_int(&self, mut low: i64, mut high: i64, stream: usize) -> i64 {
        let index = normalize_stream(stream);
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }
        let range = (high - low + 1) as f64;
        let next = next_rand(self.seeds[index].value);
        low + ((next as f64 / MODULUS_F) * range) as i64
    }

    pub fn seed_value(&self, stream: usize) -> i64 {
        self.seeds[normalize_stream(stream)].value
    }

    pub fn seed_usage(&self, stream: usize) -> i64 {
        self.seeds[normalize_stream(stream)].usage
    }

    pub fn seed_boundary(&self, stream: usize) -> i64 {
        self.seeds[normalize_stream(stream)].boundary
    }

    pub fn advance_stream(&mut self, stream: usize, count: i64) {
        if count <= 0 {
            return;
        }
        let index = normalize_stream(stream);
        self.seeds[index].value = nth_element(count, self.seeds[index].value);
    }
}

fn normalize_stream(stream: usize) -> usize {
    if stream > MAX_STREAM {
        0
    } else {
        stream
    }
}

pub fn skip_part(bank: &mut StreamBank, skip_count: i64) {
    if skip_count <= 0 {
        return;
    }
    for stream in P_MFG_SD..=P_CNTR_SD {
        bank.advance_stream(stream, skip_count);
    }
    bank.advance_stream(P_CAT_SD, skip_count);
    bank.advance_stream(P_CMNT_SD, bank.seed_boundary(P_CMNT_SD) * skip_count);
    bank.advance_stream(P_NAME_SD, MAX_COLOR * skip_count);
}

pub fn skip_supplier(bank: &mut StreamBank, skip_count: i64) {
    if skip_count <= 0 {
        return;
    }
    bank.advance_stream(S_NTRG_SD, skip_count);
    bank.advance_stream(C_PHNE_SD, 3 * skip_count);
    bank.advance_stream(S_ABAL_SD, skip_count);
    bank.advance_stream(S_ADDR_SD, bank.seed_boundary(S_ADDR_SD) * skip_count);
    bank.advance_stream(S_CMNT_SD, bank.seed_boundary(S_CMNT_SD) * skip_count);
    bank.advance_stream(BBB_CMNT_SD, skip_count);
    bank.advance_stream(BBB_JNK_SD, skip_count);
    bank.advance_stream(BBB_OFFSET_SD, skip_count);
    bank.advance_stream(BBB_TYPE_SD, skip_count);
    // The city digit draws from stream 98, which lands on stream 0.
    bank.advance_stream(CITY_SD, skip_count);
}

pub fn skip_customer(bank: &mut StreamBank, skip_count: i64) {
    if skip_count <= 0 {
        return;
    }
    bank.advance_stream(C_ADDR_SD, bank.seed_boundary(C_ADDR_SD) * skip_count);
    bank.advance_stream(C_CMNT_SD, bank.seed_boundary(C_CMNT_SD) * skip_count);
    bank.advance_stream(C_NTRG_SD, skip_count);
    bank.advance_stream(C_PHNE_SD, 3 * skip_count);
    bank.advance_stream(C_ABAL_SD, skip_count);
    bank.advance_stream(C_MSEG_SD, skip_count);
    // The city digit draws from stream 98, which lands on stream 0.
    bank.advance_stream(CITY_SD, skip_count);
}

pub fn skip_order(bank: &mut StreamBank, skip_count: i64) {
    if skip_count <= 0 {
        return;
    }
    bank.advance_stream(O_LCNT_SD, skip_count);
    bank.advance_stream(O_CKEY_SD, skip_count);
    bank.advance_stream(O_CMNT_SD, bank.seed_boundary(O_CMNT_SD) * skip_count);
    bank.advance_stream(O_SUPP_SD, skip_count);
    bank.advance_stream(O_CLRK_SD, skip_count);
    bank.advance_stream(O_PRIO_SD, skip_count);
    bank.advance_stream(O_ODATE_SD, skip_count);
}

pub fn skip_line(bank: &mut StreamBank, skip_count: i64, child: bool) {
    if skip_count <= 0 {
        return;
    }
    for _ in 0..O_LCNT_MAX {
        for stream in L_QTY_SD..=L_RFLG_SD {
            bank.advance_stream(stream, skip_count);
        }
    }
    bank.advance_stream(L_CMNT_SD, bank.seed_boundary(L_CMNT_SD) * skip_count);
    if child {
        bank.advance_stream(O_ODATE_SD, skip_count);
        bank.advance_stream(O_LCNT_SD, skip_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_stream_lands_on_zero() {
        let mut bank = StreamBank::new();
        let before = bank.seed_value(0);
        bank.random_int(0, 9, CITY_SD);
        assert_eq!(bank.seed_value(0), next_rand(before));
    }

    #[test]
    fn seed_values_match_the_tpch_bank() {
        let ssb = StreamBank::new();
        let tpch = crate::tpch::random::StreamBank::new();
        for stream in 0..=MAX_STREAM {
            assert_eq!(ssb.seed_value(stream), tpch.seed_value(stream), "stream {stream}");
        }
    }

    #[test]
    fn row_stop_tops_text_budgets() {
        let mut bank = StreamBank::new();
        bank.row_start();
        let before = bank.seed_value(C_CMNT_SD);
        bank.row_stop(SsbTable::Cust);
        assert_eq!(bank.seed_value(C_CMNT_SD), nth_element(RNG_PER_SENTENCE * 12, before));
    }
}
