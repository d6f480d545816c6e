// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! The non-history TPC-DS dimensions.

use crate::error::Result;
use crate::tpcds::address::{generate_address, Address, ADDRESS_SEEDS_PER_ROW};
use crate::tpcds::constants::*;
use crate::tpcds::distribution::{
    bitmap_to_int, bitmap_to_string, embedded_store, DstDistributionStore,
};
use crate::tpcds::join::{generate_join_key, JOIN_KEY_SEEDS_PER_ROW};
use crate::tpcds::nulls::{generate_null_bitmap, NULL_SEEDS_PER_ROW};
use crate::tpcds::random::RowStreams;
use crate::tpcds::scaling::Scaling;
use crate::tpcds::support::{make_business_key, make_word, random_charset};
use crate::tpcds::text::generate_text;

const ALPHA_NUM_LOWER: &str = "abcdefghijklmnopqrstuvxyzABCDEFGHIJKLMNOPQRSTUVXYZ0123456789";

// -------------------------------------------------------------------------
// customer_address

const CA_BASE: usize = column_base(Table::CustomerAddress);
const CA_NULLS: usize = CA_BASE;
const CA_ADDRESS: usize = CA_BASE + 1;
const CA_LOCATION_TYPE: usize = CA_BASE + 2;

const CA_NULL_BASIS_POINTS: i64 = 100;
const CA_NOT_NULL_MASK: i64 = 0b11;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerAddressRow {
    pub address_sk: i64,
    pub address_id: String,
    pub address: Address,
    pub location_type: String,
    pub null_bitmap: i64,
}

pub struct CustomerAddressRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
    streams: RowStreams,
}

impl CustomerAddressRowGenerator {
    pub fn new(scale: f64) -> Result<CustomerAddressRowGenerator> {
        Ok(CustomerAddressRowGenerator {
            store: embedded_store()?,
            scaling: Scaling::new(scale),
            streams: RowStreams::new(&[
                (CA_NULLS, NULL_SEEDS_PER_ROW),
                (CA_ADDRESS, ADDRESS_SEEDS_PER_ROW),
                (CA_LOCATION_TYPE, 1),
            ]),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::CustomerAddress)
    }

    pub fn skip_rows(&mut self, rows: i64) {
        self.streams.skip_rows(rows);
    }

    pub fn generate_row(&mut self, row_number: i64) -> CustomerAddressRow {
        let mut row = CustomerAddressRow {
            address_sk: row_number,
            address_id: make_business_key(row_number as u64),
            ..Default::default()
        };
        row.null_bitmap = generate_null_bitmap(
            CA_NULL_BASIS_POINTS,
            CA_NOT_NULL_MASK,
            self.streams.stream(CA_NULLS),
        );
        row.address =
            generate_address(self.store, self.streams.stream(CA_ADDRESS), &self.scaling);

        let location_types = self.store.get("location_type").expect("location_type");
        let picked = location_types.pick_index(1, self.streams.stream(CA_LOCATION_TYPE));
        row.location_type = location_types.get_string(picked, 1).to_string();
        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// customer

const C_BASE: usize = column_base(Table::Customer);
const C_NULLS: usize = C_BASE;
const C_CDEMO_SK: usize = C_BASE + 1;
const C_HDEMO_SK: usize = C_BASE + 2;
const C_ADDR_SK: usize = C_BASE + 3;
const C_FIRST_SALES_DATE: usize = C_BASE + 4;
const C_SALUTATION: usize = C_BASE + 5;
const C_FIRST_NAME: usize = C_BASE + 6;
const C_LAST_NAME: usize = C_BASE + 7;
const C_PREFERRED: usize = C_BASE + 8;
const C_BIRTH_DAY: usize = C_BASE + 9;
const C_BIRTH_MONTH: usize = C_BASE + 10;
const C_BIRTH_YEAR: usize = C_BASE + 11;
const C_BIRTH_COUNTRY: usize = C_BASE + 12;
const C_EMAIL: usize = C_BASE + 13;
const C_LAST_REVIEW_DATE: usize = C_BASE + 14;

const C_NULL_BASIS_POINTS: i64 = 100;
const C_NOT_NULL_MASK: i64 = 0b11;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerRow {
    pub customer_sk: i64,
    pub customer_id: String,
    pub current_cdemo_sk: i64,
    pub current_hdemo_sk: i64,
    pub current_addr_sk: i64,
    pub first_shipto_date_sk: i64,
    pub first_sales_date_sk: i64,
    pub salutation: String,
    pub first_name: String,
    pub last_name: String,
    pub preferred_cust_flag: bool,
    pub birth_day: i32,
    pub birth_month: i32,
    pub birth_year: i32,
    pub birth_country: String,
    pub email_address: String,
    pub last_review_date_sk: i64,
    pub null_bitmap: i64,
}

pub struct CustomerRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
    streams: RowStreams,
}

impl CustomerRowGenerator {
    pub fn new(scale: f64) -> Result<CustomerRowGenerator> {
        Ok(CustomerRowGenerator {
            store: embedded_store()?,
            scaling: Scaling::new(scale),
            streams: RowStreams::new(&[
                (C_NULLS, NULL_SEEDS_PER_ROW),
                (C_CDEMO_SK, JOIN_KEY_SEEDS_PER_ROW),
                (C_HDEMO_SK, JOIN_KEY_SEEDS_PER_ROW),
                (C_ADDR_SK, JOIN_KEY_SEEDS_PER_ROW),
                (C_FIRST_SALES_DATE, JOIN_KEY_SEEDS_PER_ROW),
                (C_SALUTATION, 1),
                (C_FIRST_NAME, 1),
                (C_LAST_NAME, 1),
                (C_PREFERRED, 1),
                (C_BIRTH_DAY, 1),
                (C_BIRTH_MONTH, 1),
                (C_BIRTH_YEAR, 1),
                (C_BIRTH_COUNTRY, 1),
                (C_EMAIL, 2),
                (C_LAST_REVIEW_DATE, JOIN_KEY_SEEDS_PER_ROW),
            ]),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::Customer)
    }

    pub fn skip_rows(&mut self, rows: i64) {
        self.streams.skip_rows(rows);
    }

    pub fn generate_row(&mut self, row_number: i64) -> CustomerRow {
        let mut row = CustomerRow {
            customer_sk: row_number,
            customer_id: make_business_key(row_number as u64),
            ..Default::default()
        };
        row.null_bitmap =
            generate_null_bitmap(C_NULL_BASIS_POINTS, C_NOT_NULL_MASK, self.streams.stream(C_NULLS));

        row.current_cdemo_sk = generate_join_key(
            Table::CustomerDemographics,
            self.streams.stream(C_CDEMO_SK),
            &self.scaling,
        );
        row.current_hdemo_sk = generate_join_key(
            Table::HouseholdDemographics,
            self.streams.stream(C_HDEMO_SK),
            &self.scaling,
        );
        row.current_addr_sk = generate_join_key(
            Table::CustomerAddress,
            self.streams.stream(C_ADDR_SK),
            &self.scaling,
        );

        row.first_sales_date_sk =
            generate_join_key(Table::DateDim, self.streams.stream(C_FIRST_SALES_DATE), &self.scaling);
        row.first_shipto_date_sk = row.first_sales_date_sk + 30;

        let salutations = self.store.get("salutations").expect("salutations");
        let picked = salutations.pick_index(1, self.streams.stream(C_SALUTATION));
        row.salutation = salutations.get_string(picked, 1).to_string();

        let first_names = self.store.get("first_names").expect("first_names");
        let picked = first_names.pick_index(1, self.streams.stream(C_FIRST_NAME));
        row.first_name = first_names.get_string(picked, 1).to_string();

        let last_names = self.store.get("last_names").expect("last_names");
        let picked = last_names.pick_index(1, self.streams.stream(C_LAST_NAME));
        row.last_name = last_names.get_string(picked, 1).to_string();

        row.preferred_cust_flag =
            self.streams.stream(C_PREFERRED).uniform_int(1, 100) <= C_PREFERRED_PCT;

        row.birth_month = self.streams.stream(C_BIRTH_MONTH).uniform_int(1, 12) as i32;
        let month_days = match row.birth_month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => 28,
        };
        row.birth_day = self.streams.stream(C_BIRTH_DAY).uniform_int(1, month_days) as i32;
        row.birth_year =
            self.streams.stream(C_BIRTH_YEAR).uniform_int(C_BIRTH_YEAR_MIN, C_BIRTH_YEAR_MAX) as i32;

        let countries = self.store.get("countries").expect("countries");
        let picked = countries.pick_index(1, self.streams.stream(C_BIRTH_COUNTRY));
        row.birth_country = countries.get_string(picked, 1).to_string();

        let company = self.streams.stream(C_EMAIL).uniform_int(1, 1_000_000);
        let company_word = make_word("syllables", company, 10, self.store);
        let domains = self.store.get("top_domains").expect("top_domains");
        let picked = domains.pick_index(1, self.streams.stream(C_EMAIL));
        row.email_address = format!(
            "{}.{}@{}.{}",
            row.first_name,
            row.last_name,
            company_word,
            domains.get_string(picked, 1)
        );

        row.last_review_date_sk = generate_join_key(
            Table::DateDim,
            self.streams.stream(C_LAST_REVIEW_DATE),
            &self.scaling,
        );
        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// customer_demographics (derived, no streams)

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerDemographicsRow {
    pub demo_sk: i64,
    pub gender: String,
    pub marital_status: String,
    pub education_status: String,
    pub purchase_estimate: i32,
    pub credit_rating: String,
    pub dep_count: i32,
    pub dep_employed_count: i32,
    pub dep_college_count: i32,
}

const CD_MAX_CHILDREN: i64 = 7;
const CD_MAX_EMPLOYED: i64 = 7;
const CD_MAX_COLLEGE: i64 = 7;

pub struct CustomerDemographicsRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
}

impl CustomerDemographicsRowGenerator {
    pub fn new(scale: f64) -> Result<CustomerDemographicsRowGenerator> {
        Ok(CustomerDemographicsRowGenerator { store: embedded_store()?, scaling: Scaling::new(scale) })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::CustomerDemographics)
    }

    pub fn skip_rows(&mut self, _rows: i64) {}

    pub fn generate_row(&self, row_number: i64) -> CustomerDemographicsRow {
        let mut row = CustomerDemographicsRow { demo_sk: row_number, ..Default::default() };
        let mut temp = row_number - 1;

        row.gender = bitmap_to_string(self.store.get("gender").expect("gender"), 1, &mut temp);
        row.marital_status =
            bitmap_to_string(self.store.get("marital_status").expect("marital_status"), 1, &mut temp);
        row.education_status =
            bitmap_to_string(self.store.get("education").expect("education"), 1, &mut temp);
        row.purchase_estimate =
            bitmap_to_int(self.store.get("purchase_band").expect("purchase_band"), 1, &mut temp);
        row.credit_rating =
            bitmap_to_string(self.store.get("credit_rating").expect("credit_rating"), 1, &mut temp);

        row.dep_count = (temp % CD_MAX_CHILDREN) as i32;
        temp /= CD_MAX_CHILDREN;
        row.dep_employed_count = (temp % CD_MAX_EMPLOYED) as i32;
        temp /= CD_MAX_EMPLOYED;
        row.dep_college_count = (temp % CD_MAX_COLLEGE) as i32;
        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {}
}

// -------------------------------------------------------------------------
// household_demographics (derived, no streams)

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HouseholdDemographicsRow {
    pub demo_sk: i64,
    pub income_band_sk: i64,
    pub buy_potential: String,
    pub dep_count: i32,
    pub vehicle_count: i32,
}

pub struct HouseholdDemographicsRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
}

impl HouseholdDemographicsRowGenerator {
    pub fn new(scale: f64) -> Result<HouseholdDemographicsRowGenerator> {
        Ok(HouseholdDemographicsRowGenerator {
            store: embedded_store()?,
            scaling: Scaling::new(scale),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::HouseholdDemographics)
    }

    pub fn skip_rows(&mut self, _rows: i64) {}

    pub fn generate_row(&self, row_number: i64) -> HouseholdDemographicsRow {
        let mut row = HouseholdDemographicsRow { demo_sk: row_number, ..Default::default() };
        let mut temp = row_number;

        let income_band = self.store.get("income_band").expect("income_band");
        row.income_band_sk = (temp % income_band.size() as i64) + 1;
        temp /= income_band.size() as i64;

        row.buy_potential =
            bitmap_to_string(self.store.get("buy_potential").expect("buy_potential"), 1, &mut temp);
        row.dep_count =
            bitmap_to_int(self.store.get("dependent_count").expect("dependent_count"), 1, &mut temp);
        row.vehicle_count =
            bitmap_to_int(self.store.get("vehicle_count").expect("vehicle_count"), 1, &mut temp);
        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {}
}

// -------------------------------------------------------------------------
// income_band

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncomeBandRow {
    pub income_band_sk: i64,
    pub lower_bound: i32,
    pub upper_bound: i32,
}

pub struct IncomeBandRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
}

impl IncomeBandRowGenerator {
    pub fn new(scale: f64) -> Result<IncomeBandRowGenerator> {
        Ok(IncomeBandRowGenerator { store: embedded_store()?, scaling: Scaling::new(scale) })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::IncomeBand)
    }

    pub fn skip_rows(&mut self, _rows: i64) {}

    pub fn generate_row(&self, row_number: i64) -> IncomeBandRow {
        let income_band = self.store.get("income_band").expect("income_band");
        let index = row_number as i32;
        IncomeBandRow {
            income_band_sk: row_number,
            lower_bound: income_band.get_int(index, 1),
            upper_bound: income_band.get_int(index, 2),
        }
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {}
}

// -------------------------------------------------------------------------
// reason

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReasonRow {
    pub reason_sk: i64,
    pub reason_id: String,
    pub reason_description: String,
}

pub struct ReasonRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
}

impl ReasonRowGenerator {
    pub fn new(scale: f64) -> Result<ReasonRowGenerator> {
        Ok(ReasonRowGenerator { store: embedded_store()?, scaling: Scaling::new(scale) })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::Reason)
    }

    pub fn skip_rows(&mut self, _rows: i64) {}

    pub fn generate_row(&self, row_number: i64) -> ReasonRow {
        let reasons = self.store.get("return_reasons").expect("return_reasons");
        let index = ((row_number - 1) % reasons.size() as i64) as i32 + 1;
        ReasonRow {
            reason_sk: row_number,
            reason_id: make_business_key(row_number as u64),
            reason_description: reasons.get_string(index, 1).to_string(),
        }
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {}
}

// -------------------------------------------------------------------------
// ship_mode

const SM_BASE: usize = column_base(Table::ShipMode);
const SM_NULLS: usize = SM_BASE;
const SM_CONTRACT: usize = SM_BASE + 1;

const SM_NULL_BASIS_POINTS: i64 = 100;
const SM_NOT_NULL_MASK: i64 = 0b11;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShipModeRow {
    pub ship_mode_sk: i64,
    pub ship_mode_id: String,
    pub ship_mode_type: String,
    pub code: String,
    pub carrier: String,
    pub contract: String,
    pub null_bitmap: i64,
}

pub struct ShipModeRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
    streams: RowStreams,
}

impl ShipModeRowGenerator {
    pub fn new(scale: f64) -> Result<ShipModeRowGenerator> {
        Ok(ShipModeRowGenerator {
            store: embedded_store()?,
            scaling: Scaling::new(scale),
            streams: RowStreams::new(&[
                (SM_NULLS, NULL_SEEDS_PER_ROW),
                (SM_CONTRACT, RS_SM_CONTRACT as i64 + 1),
            ]),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::ShipMode)
    }

    pub fn skip_rows(&mut self, rows: i64) {
        self.streams.skip_rows(rows);
    }

    pub fn generate_row(&mut self, row_number: i64) -> ShipModeRow {
        let mut row = ShipModeRow {
            ship_mode_sk: row_number,
            ship_mode_id: make_business_key(row_number as u64),
            ..Default::default()
        };
        row.null_bitmap = generate_null_bitmap(
            SM_NULL_BASIS_POINTS,
            SM_NOT_NULL_MASK,
            self.streams.stream(SM_NULLS),
        );

        let mut modulus = row_number;
        row.ship_mode_type = bitmap_to_string(
            self.store.get("ship_mode_type").expect("ship_mode_type"),
            1,
            &mut modulus,
        );
        row.code = bitmap_to_string(
            self.store.get("ship_mode_code").expect("ship_mode_code"),
            1,
            &mut modulus,
        );

        let carriers = self.store.get("ship_mode_carrier").expect("ship_mode_carrier");
        let index = ((row_number - 1) % carriers.size() as i64) as i32 + 1;
        row.carrier = carriers.get_string(index, 1).to_string();

        row.contract = random_charset(
            ALPHA_NUM_LOWER,
            1,
            RS_SM_CONTRACT as i64,
            self.streams.stream(SM_CONTRACT),
        );
        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// time_dim (derived, no streams)

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeDimRow {
    pub time_sk: i64,
    pub time_id: String,
    pub time: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub am_pm: String,
    pub shift: String,
    pub sub_shift: String,
    pub meal_time: String,
}

pub struct TimeDimRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
}

impl TimeDimRowGenerator {
    pub fn new(scale: f64) -> Result<TimeDimRowGenerator> {
        Ok(TimeDimRowGenerator { store: embedded_store()?, scaling: Scaling::new(scale) })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::TimeDim)
    }

    pub fn skip_rows(&mut self, _rows: i64) {}

    pub fn generate_row(&self, row_number: i64) -> TimeDimRow {
        let mut row = TimeDimRow {
            time_sk: row_number - 1,
            time_id: make_business_key(row_number as u64),
            ..Default::default()
        };
        let mut ntemp = (row_number - 1) as i32;
        row.time = ntemp;
        row.second = ntemp % 60;
        ntemp /= 60;
        row.minute = ntemp % 60;
        ntemp /= 60;
        row.hour = ntemp % 24;

        let hours = self.store.get("hours").expect("hours");
        let hour_index = row.hour + 1;
        row.am_pm = hours.get_string(hour_index, 2).to_string();
        row.shift = hours.get_string(hour_index, 3).to_string();
        row.sub_shift = hours.get_string(hour_index, 4).to_string();
        row.meal_time = hours.get_string(hour_index, 5).to_string();
        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {}
}

// -------------------------------------------------------------------------
// warehouse

const W_BASE: usize = column_base(Table::Warehouse);
const W_NULLS: usize = W_BASE;
const W_WAREHOUSE_NAME: usize = W_BASE + 1;
const W_WAREHOUSE_SQ_FT: usize = W_BASE + 2;
const W_WAREHOUSE_ADDRESS: usize = W_BASE + 3;

const W_NULL_BASIS_POINTS: i64 = 100;
const W_NOT_NULL_MASK: i64 = 0b11;
const W_SQFT_MIN: i64 = 50_000;
const W_SQFT_MAX: i64 = 1_000_000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WarehouseRow {
    pub warehouse_sk: i64,
    pub warehouse_id: String,
    pub warehouse_name: String,
    pub warehouse_sq_ft: i32,
    pub address: Address,
    pub null_bitmap: i64,
}

pub struct WarehouseRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
    streams: RowStreams,
}

impl WarehouseRowGenerator {
    pub fn new(scale: f64) -> Result<WarehouseRowGenerator> {
        Ok(WarehouseRowGenerator {
            store: embedded_store()?,
            scaling: Scaling::new(scale),
            streams: RowStreams::new(&[
                (W_NULLS, NULL_SEEDS_PER_ROW),
                (W_WAREHOUSE_NAME, RS_W_WAREHOUSE_NAME as i64 * 2),
                (W_WAREHOUSE_SQ_FT, 1),
                (W_WAREHOUSE_ADDRESS, ADDRESS_SEEDS_PER_ROW),
            ]),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::Warehouse)
    }

    pub fn skip_rows(&mut self, rows: i64) {
        self.streams.skip_rows(rows);
    }

    pub fn generate_row(&mut self, row_number: i64) -> WarehouseRow {
        let mut row = WarehouseRow {
            warehouse_sk: row_number,
            warehouse_id: make_business_key(row_number as u64),
            ..Default::default()
        };
        row.null_bitmap =
            generate_null_bitmap(W_NULL_BASIS_POINTS, W_NOT_NULL_MASK, self.streams.stream(W_NULLS));
        row.warehouse_name = generate_text(
            W_NAME_MIN,
            RS_W_WAREHOUSE_NAME,
            self.store,
            self.streams.stream(W_WAREHOUSE_NAME),
        );
        row.warehouse_sq_ft =
            self.streams.stream(W_WAREHOUSE_SQ_FT).uniform_int(W_SQFT_MIN, W_SQFT_MAX) as i32;
        row.address =
            generate_address(self.store, self.streams.stream(W_WAREHOUSE_ADDRESS), &self.scaling);
        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// promotion

const P_BASE: usize = column_base(Table::Promotion);
const P_NULLS: usize = P_BASE;
const P_START_DATE: usize = P_BASE + 1;
const P_END_DATE: usize = P_BASE + 2;
const P_ITEM_SK: usize = P_BASE + 3;
const P_COST: usize = P_BASE + 4;
const P_RESPONSE_TARGET: usize = P_BASE + 5;
const P_PROMO_NAME: usize = P_BASE + 6;
const P_CHANNELS: usize = P_BASE + 7;
const P_CHANNEL_DETAILS: usize = P_BASE + 8;

const P_NULL_BASIS_POINTS: i64 = 200;
const P_NOT_NULL_MASK: i64 = 0b11;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PromotionRow {
    pub promo_sk: i64,
    pub promo_id: String,
    pub start_date_sk: i64,
    pub end_date_sk: i64,
    pub item_sk: i64,
    pub cost: i64,
    pub response_target: i32,
    pub promo_name: String,
    pub channel_dmail: bool,
    pub channel_email: bool,
    pub channel_catalog: bool,
    pub channel_tv: bool,
    pub channel_radio: bool,
    pub channel_press: bool,
    pub channel_event: bool,
    pub channel_demo: bool,
    pub channel_details: String,
    pub purpose: String,
    pub discount_active: bool,
    pub null_bitmap: i64,
}

pub struct PromotionRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
    streams: RowStreams,
}

impl PromotionRowGenerator {
    pub fn new(scale: f64) -> Result<PromotionRowGenerator> {
        Ok(PromotionRowGenerator {
            store: embedded_store()?,
            scaling: Scaling::new(scale),
            streams: RowStreams::new(&[
                (P_NULLS, NULL_SEEDS_PER_ROW),
                (P_START_DATE, 1),
                (P_END_DATE, 1),
                (P_ITEM_SK, JOIN_KEY_SEEDS_PER_ROW),
                (P_COST, 1),
                (P_RESPONSE_TARGET, 1),
                (P_PROMO_NAME, 1),
                (P_CHANNELS, 10),
                (P_CHANNEL_DETAILS, RS_P_CHANNEL_DETAILS as i64 * 2),
            ]),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::Promotion)
    }

    pub fn skip_rows(&mut self, rows: i64) {
        self.streams.skip_rows(rows);
    }

    pub fn generate_row(&mut self, row_number: i64) -> PromotionRow {
        let mut row = PromotionRow {
            promo_sk: row_number,
            promo_id: make_business_key(row_number as u64),
            purpose: "Unknown".to_string(),
            ..Default::default()
        };
        row.null_bitmap =
            generate_null_bitmap(P_NULL_BASIS_POINTS, P_NOT_NULL_MASK, self.streams.stream(P_NULLS));

        row.start_date_sk = JULIAN_DATA_START_DATE
            + self.streams.stream(P_START_DATE).uniform_int(0, P_START_DATE_OFFSET_MAX);
        row.end_date_sk =
            row.start_date_sk + self.streams.stream(P_END_DATE).uniform_int(1, P_END_DATE_OFFSET_MAX);

        row.item_sk = generate_join_key(Table::Item, self.streams.stream(P_ITEM_SK), &self.scaling);
        row.cost = self.streams.stream(P_COST).uniform_int(100, 100_000) * 100;
        row.response_target = self.streams.stream(P_RESPONSE_TARGET).uniform_int(1, 1) as i32;

        let name_src = self.streams.stream(P_PROMO_NAME).uniform_int(1, 1_000_000);
        row.promo_name = make_word("syllables", name_src, P_PROMO_NAME_LEN as usize, self.store);

        let channels = self.streams.stream(P_CHANNELS);
        row.channel_dmail = channels.uniform_int(0, 1) == 1;
        row.channel_email = channels.uniform_int(0, 1) == 1;
        row.channel_catalog = channels.uniform_int(0, 1) == 1;
        row.channel_tv = channels.uniform_int(0, 1) == 1;
        row.channel_radio = channels.uniform_int(0, 1) == 1;
        row.channel_press = channels.uniform_int(0, 1) == 1;
        row.channel_event = channels.uniform_int(0, 1) == 1;
        row.channel_demo = channels.uniform_int(0, 1) == 1;
        row.discount_active = channels.uniform_int(0, 1) == 1;

        row.channel_details = generate_text(
            RS_P_CHANNEL_DETAILS / 2,
            RS_P_CHANNEL_DETAILS - 1,
            self.store,
            self.streams.stream(P_CHANNEL_DETAILS),
        );
        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// catalog_page

const CP_BASE: usize = column_base(Table::CatalogPage);
const CP_NULLS: usize = CP_BASE;
const CP_DESCRIPTION: usize = CP_BASE + 1;

const CP_NULL_BASIS_POINTS: i64 = 100;
const CP_NOT_NULL_MASK: i64 = 0b11;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogPageRow {
    pub catalog_page_sk: i64,
    pub catalog_page_id: String,
    pub start_date_sk: i64,
    pub end_date_sk: i64,
    pub department: String,
    pub catalog_number: i32,
    pub catalog_page_number: i32,
    pub description: String,
    pub page_type: String,
    pub null_bitmap: i64,
}

pub struct CatalogPageRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
    streams: RowStreams,
    pages_per_catalog: i64,
}

impl CatalogPageRowGenerator {
    pub fn new(scale: f64) -> Result<CatalogPageRowGenerator> {
        let scaling = Scaling::new(scale);
        let total = scaling.row_count(Table::CatalogPage);
        let mut pages_per_catalog = total / CP_CATALOGS_PER_YEAR;
        pages_per_catalog /= (YEAR_MAXIMUM - YEAR_MINIMUM + 2) as i64;
        Ok(CatalogPageRowGenerator {
            store: embedded_store()?,
            scaling,
            streams: RowStreams::new(&[
                (CP_NULLS, NULL_SEEDS_PER_ROW),
                (CP_DESCRIPTION, RS_CP_DESCRIPTION as i64 * 2),
            ]),
            pages_per_catalog: pages_per_catalog.max(1),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::CatalogPage)
    }

    pub fn skip_rows(&mut self, rows: i64) {
        self.streams.skip_rows(rows);
    }

    pub fn generate_row(&mut self, row_number: i64) -> CatalogPageRow {
        let mut row = CatalogPageRow {
            catalog_page_sk: row_number,
            catalog_page_id: make_business_key(row_number as u64),
            department: "DEPARTMENT".to_string(),
            ..Default::default()
        };
        row.null_bitmap = generate_null_bitmap(
            CP_NULL_BASIS_POINTS,
            CP_NOT_NULL_MASK,
            self.streams.stream(CP_NULLS),
        );

        row.catalog_number = ((row_number - 1) / self.pages_per_catalog) as i32 + 1;
        row.catalog_page_number = ((row_number - 1) % self.pages_per_catalog) as i32 + 1;

        // Catalog cadence: two half-year books, four quarterlies, the rest
        // monthly.
        let catalog_interval = (row.catalog_number as i64 - 1) % CP_CATALOGS_PER_YEAR;
        let (duration, offset, type_index) = match catalog_interval {
            0 | 1 => (182, catalog_interval * 182, 1),
            2..=5 => (91, (catalog_interval - 2) * 91, 2),
            _ => (30, (catalog_interval - 6) * 30, 3),
        };

        row.start_date_sk = JULIAN_DATA_START_DATE
            + offset
            + ((row.catalog_number as i64 - 1) / CP_CATALOGS_PER_YEAR) * 365;
        row.end_date_sk = row.start_date_sk + duration - 1;

        let types = self.store.get("catalog_page_type").expect("catalog_page_type");
        row.page_type = types.get_string(type_index, 1).to_string();

        row.description = generate_text(
            RS_CP_DESCRIPTION / 2,
            RS_CP_DESCRIPTION - 1,
            self.store,
            self.streams.stream(CP_DESCRIPTION),
        );
        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skip_equals_sequential<G, R: PartialEq + std::fmt::Debug>(
        mut sequential: G,
        mut skipped: G,
        start_row: i64,
        generate: impl Fn(&mut G, i64) -> R,
        skip: impl Fn(&mut G, i64),
        consume: impl Fn(&mut G),
    ) {
        let mut expected = None;
        for i in 0..=start_row {
            expected = Some(generate(&mut sequential, i + 1));
            consume(&mut sequential);
        }
        skip(&mut skipped, start_row);
        let actual = generate(&mut skipped, start_row + 1);
        assert_eq!(actual, expected.unwrap());
    }

    #[test]
    fn customer_address_skip_equivalence() {
        skip_equals_sequential(
            CustomerAddressRowGenerator::new(1.0).unwrap(),
            CustomerAddressRowGenerator::new(1.0).unwrap(),
            10,
            |g, n| g.generate_row(n),
            |g, n| g.skip_rows(n),
            |g| g.consume_remaining_seeds_for_row(),
        );
    }

    #[test]
    fn customer_skip_equivalence() {
        skip_equals_sequential(
            CustomerRowGenerator::new(1.0).unwrap(),
            CustomerRowGenerator::new(1.0).unwrap(),
            10,
            |g, n| g.generate_row(n),
            |g, n| g.skip_rows(n),
            |g| g.consume_remaining_seeds_for_row(),
        );
    }

    #[test]
    fn warehouse_skip_equivalence() {
        skip_equals_sequential(
            WarehouseRowGenerator::new(1.0).unwrap(),
            WarehouseRowGenerator::new(1.0).unwrap(),
            3,
            |g, n| g.generate_row(n),
            |g, n| g.skip_rows(n),
            |g| g.consume_remaining_seeds_for_row(),
        );
    }

    #[test]
    fn promotion_skip_equivalence() {
        skip_equals_sequential(
            PromotionRowGenerator::new(1.0).unwrap(),
            PromotionRowGenerator::new(1.0).unwrap(),
            10,
            |g, n| g.generate_row(n),
            |g, n| g.skip_rows(n),
            |g| g.consume_remaining_seeds_for_row(),
        );
    }

    #[test]
    fn catalog_page_skip_equivalence() {
        skip_equals_sequential(
            CatalogPageRowGenerator::new(1.0).unwrap(),
            CatalogPageRowGenerator::new(1.0).unwrap(),
            10,
            |g, n| g.generate_row(n),
            |g, n| g.skip_rows(n),
            |g| g.consume_remaining_seeds_for_row(),
        );
    }

    #[test]
    fn ship_mode_cascade_and_skip() {
        skip_equals_sequential(
            ShipModeRowGenerator::new(1.0).unwrap(),
            ShipModeRowGenerator::new(1.0).unwrap(),
            7,
            |g, n| g.generate_row(n),
            |g, n| g.skip_rows(n),
            |g| g.consume_remaining_seeds_for_row(),
        );
        let mut modes = ShipModeRowGenerator::new(1.0).unwrap();
        let row = modes.generate_row(1);
        assert!(!row.ship_mode_type.is_empty());
        assert!(!row.carrier.is_empty());
        assert!((1..=RS_SM_CONTRACT as usize).contains(&row.contract.len()));
    }

    #[test]
    fn customer_demographics_is_a_pure_function_of_the_row() {
        let gen = CustomerDemographicsRowGenerator::new(1.0).unwrap();
        assert_eq!(gen.total_rows(), 1_920_800);
        let first = gen.generate_row(1);
        assert_eq!(first, gen.generate_row(1));
        // The cascade must cover every combination exactly once per cycle.
        let a = gen.generate_row(1);
        let b = gen.generate_row(2);
        assert_ne!(a.gender, b.gender);
        let last = gen.generate_row(gen.total_rows());
        assert_eq!(last.dep_college_count, 6);
    }

    #[test]
    fn household_demographics_covers_income_bands() {
        let gen = HouseholdDemographicsRowGenerator::new(1.0).unwrap();
        assert_eq!(gen.total_rows(), 7_200);
        let row = gen.generate_row(1);
        assert!((1..=20).contains(&row.income_band_sk));
    }

    #[test]
    fn time_dim_is_deterministic() {
        let gen = TimeDimRowGenerator::new(1.0).unwrap();
        assert_eq!(gen.total_rows(), 86_400);
        let row = gen.generate_row(1);
        assert_eq!((row.hour, row.minute, row.second), (0, 0, 0));
        let row = gen.generate_row(86_400);
        assert_eq!((row.hour, row.minute, row.second), (23, 59, 59));
        let noon = gen.generate_row(12 * 3600 + 1);
        assert_eq!(noon.hour, 12);
        assert_eq!(noon.am_pm, "PM");
    }

    #[test]
    fn catalog_page_layout_is_derived() {
        let mut gen = CatalogPageRowGenerator::new(1.0).unwrap();
        let first = gen.generate_row(1);
        assert_eq!(first.catalog_number, 1);
        assert_eq!(first.catalog_page_number, 1);
        assert_eq!(first.page_type, "bi-annual");
        assert_eq!(first.end_date_sk - first.start_date_sk, 181);
    }
}
