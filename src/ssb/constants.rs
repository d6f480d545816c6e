// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! SSB (Star Schema Benchmark) constants. The stream layout mirrors dbgen's;
//! the boundaries budget word-by-word text draws per sentence.

/// Stream ownership for row-stop accounting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SsbTable {
    None,
    Part,
    PartSupp,
    Supp,
    Cust,
    Order,
    Line,
    OrderLine,
    PartPsupp,
    Nation,
    Region,
}

pub const MAX_STREAM: usize = 47;
pub const MAX_COLOR: i64 = 92;
pub const RNG_PER_SENTENCE: i64 = 27;

pub const V_STR_LOW: f64 = 0.4;
pub const V_STR_HIGH: f64 = 1.6;

pub const P_NAME_SCL: i32 = 3;
pub const P_MFG_MIN: i64 = 1;
pub const P_MFG_MAX: i64 = 5;
pub const P_CAT_MIN: i64 = 1;
pub const P_CAT_MAX: i64 = 5;
pub const P_BRND_MIN: i64 = 1;
pub const P_BRND_MAX: i64 = 40;
pub const P_SIZE_MIN: i64 = 1;
pub const P_SIZE_MAX: i64 = 50;

pub const C_ADDR_LEN: i64 = 15;
pub const S_ADDR_LEN: i64 = 15;
pub const CITY_FIX: usize = 10;

pub const O_CLRK_SCL: i64 = 1000;
pub const O_LCNT_MIN: i64 = 1;
pub const O_LCNT_MAX: i64 = 7;

pub const L_QTY_MIN: i64 = 1;
pub const L_QTY_MAX: i64 = 50;
pub const L_TAX_MIN: i64 = 0;
pub const L_TAX_MAX: i64 = 8;
pub const L_DCNT_MIN: i64 = 0;
pub const L_DCNT_MAX: i64 = 10;
pub const L_CDTE_MIN: i64 = 30;
pub const L_CDTE_MAX: i64 = 90;

pub const START_DATE: i64 = 92_001;
pub const TOTAL_DATE: i64 = 2557;
pub const PENNIES: i64 = 100;

pub const CUSTOMER_MORTALITY: i64 = 3;
pub const NATIONS_MAX: i64 = 90;

pub const C_NAME_TAG: &str = "Customer#";
pub const S_NAME_TAG: &str = "Supplier#";
pub const O_CLRK_TAG: &str = "Clerk#";
pub const P_MFG_TAG: &str = "MFGR#";

// Stream indices (shared numbering with the TPC-H bank).
pub const P_MFG_SD: usize = 0;
pub const P_BRND_SD: usize = 1;
pub const P_TYPE_SD: usize = 2;
pub const P_SIZE_SD: usize = 3;
pub const P_CNTR_SD: usize = 4;
pub const P_CMNT_SD: usize = 6;
pub const PS_QTY_SD: usize = 7;
pub const PS_SCST_SD: usize = 8;
pub const PS_CMNT_SD: usize = 9;
pub const O_SUPP_SD: usize = 10;
pub const O_CLRK_SD: usize = 11;
pub const O_CMNT_SD: usize = 12;
pub const O_ODATE_SD: usize = 13;
pub const L_QTY_SD: usize = 14;
pub const L_DCNT_SD: usize = 15;
pub const L_TAX_SD: usize = 16;
pub const L_SHIP_SD: usize = 17;
pub const L_SMODE_SD: usize = 18;
pub const L_PKEY_SD: usize = 19;
pub const L_SKEY_SD: usize = 20;
pub const L_SDTE_SD: usize = 21;
pub const L_CDTE_SD: usize = 22;
pub const L_RDTE_SD: usize = 23;
pub const L_RFLG_SD: usize = 24;
pub const L_CMNT_SD: usize = 25;
pub const C_ADDR_SD: usize = 26;
pub const C_NTRG_SD: usize = 27;
pub const C_PHNE_SD: usize = 28;
pub const C_ABAL_SD: usize = 29;
pub const C_MSEG_SD: usize = 30;
pub const C_CMNT_SD: usize = 31;
pub const S_ADDR_SD: usize = 32;
pub const S_NTRG_SD: usize = 33;
pub const S_PHNE_SD: usize = 34;
pub const S_ABAL_SD: usize = 35;
pub const S_CMNT_SD: usize = 36;
pub const P_NAME_SD: usize = 37;
pub const O_PRIO_SD: usize = 38;
pub const O_CKEY_SD: usize = 40;
pub const N_CMNT_SD: usize = 41;
pub const R_CMNT_SD: usize = 42;
pub const O_LCNT_SD: usize = 43;
pub const BBB_OFFSET_SD: usize = 44;
pub const BBB_TYPE_SD: usize = 45;
pub const BBB_CMNT_SD: usize = 46;
pub const BBB_JNK_SD: usize = 47;

// The category draw reaches past the declared bank and lands on stream 0;
// the city digit does the same through stream 98.
pub const P_CAT_SD: usize = 97;
pub const CITY_SD: usize = 98;
