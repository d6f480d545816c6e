// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! The history-keeping dimensions: store, item, call_center, web_site, and
//! web_page. Every row draws a field-change bitmap; revision rows inherit
//! attributes from the previous generated row wherever their bit is clear.

use crate::error::Result;
use crate::tpcds::address::{generate_address, Address, ADDRESS_SEEDS_PER_ROW};
use crate::tpcds::constants::*;
use crate::tpcds::distribution::{embedded_store, DstDistributionStore};
use crate::tpcds::join::{generate_join_key, JOIN_KEY_SEEDS_PER_ROW};
use crate::tpcds::nulls::{generate_null_bitmap, NULL_SEEDS_PER_ROW};
use crate::tpcds::random::RowStreams;
use crate::tpcds::scaling::Scaling;
use crate::tpcds::scd::{field_change_flags, scd_key, scd_value};
use crate::tpcds::support::{
    hierarchy_brand, hierarchy_category, hierarchy_class, make_company_name, make_word,
    random_charset, HierarchyState,
};
use crate::tpcds::text::generate_text;

fn pick<'a>(
    store: &'a DstDistributionStore,
    name: &str,
    stream: &mut crate::tpcds::random::RandomNumberStream,
) -> &'a str {
    let dist = store.get(name).unwrap_or_else(|_| panic!("missing distribution {name}"));
    let picked = dist.pick_index(1, stream);
    dist.get_string(picked, 1)
}

fn person_name(
    store: &DstDistributionStore,
    stream: &mut crate::tpcds::random::RandomNumberStream,
) -> String {
    let first = pick(store, "first_names", stream).to_string();
    let last = pick(store, "last_names", stream);
    format!("{first} {last}")
}

// -------------------------------------------------------------------------
// store

const S_BASE: usize = column_base(Table::Store);
const S_NULLS: usize = S_BASE;
const S_SCD: usize = S_BASE + 1;
const S_CLOSED_DATE: usize = S_BASE + 2;
const S_EMPLOYEES: usize = S_BASE + 3;
const S_FLOOR_SPACE: usize = S_BASE + 4;
const S_HOURS: usize = S_BASE + 5;
const S_MANAGER: usize = S_BASE + 6;
const S_MARKET_ID: usize = S_BASE + 7;
const S_TAX_PCT: usize = S_BASE + 8;
const S_MARKET_DESC: usize = S_BASE + 9;
const S_MARKET_MANAGER: usize = S_BASE + 10;
const S_DIVISION: usize = S_BASE + 11;
const S_COMPANY: usize = S_BASE + 12;
const S_ADDRESS: usize = S_BASE + 13;

const S_NULL_BASIS_POINTS: i64 = 100;
const S_NOT_NULL_MASK: i64 = 0b11;
const S_EMPLOYEES_MIN: i64 = 200;
const S_EMPLOYEES_MAX: i64 = 300;
const S_FLOOR_SPACE_MIN: i64 = 5_000_000;
const S_FLOOR_SPACE_MAX: i64 = 10_000_000;
const S_TAX_MAX: i64 = 1_100;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreRow {
    pub store_sk: i64,
    pub store_id: String,
    pub rec_start_date: i64,
    pub rec_end_date: i64,
    pub closed_date_sk: i64,
    pub store_name: String,
    pub employees: i32,
    pub floor_space: i32,
    pub hours: String,
    pub manager: String,
    pub market_id: i32,
    pub geography_class: String,
    pub market_desc: String,
    pub market_manager: String,
    pub division_id: i32,
    pub division_name: String,
    pub company_id: i32,
    pub company_name: String,
    pub address: Address,
    pub tax_percentage: i64,
    pub null_bitmap: i64,
}

pub struct StoreRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
    streams: RowStreams,
    old_values: StoreRow,
}

impl StoreRowGenerator {
    pub fn new(scale: f64) -> Result<StoreRowGenerator> {
        Ok(StoreRowGenerator {
            store: embedded_store()?,
            scaling: Scaling::new(scale),
            streams: RowStreams::new(&[
                (S_NULLS, NULL_SEEDS_PER_ROW),
                (S_SCD, 1),
                (S_CLOSED_DATE, 2),
                (S_EMPLOYEES, 1),
                (S_FLOOR_SPACE, 1),
                (S_HOURS, 1),
                (S_MANAGER, 2),
                (S_MARKET_ID, 1),
                (S_TAX_PCT, 1),
                (S_MARKET_DESC, RS_S_MARKET_DESC as i64 * 2),
                (S_MARKET_MANAGER, 2),
                (S_DIVISION, 1),
                (S_COMPANY, 1),
                (S_ADDRESS, ADDRESS_SEEDS_PER_ROW),
            ]),
            old_values: StoreRow::default(),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::Store)
    }

    pub fn skip_rows(&mut self, rows: i64) {
        // Stream state is a pure jump; the old-values snapshot is rebuilt by
        // replaying the (cheap) revision chain up to the window edge.
        if rows <= 0 {
            return;
        }
        let replay_from = ((rows) / 6) * 6;
        self.streams.skip_rows(replay_from);
        for row in replay_from..rows {
            self.generate_row(row + 1);
            self.consume_remaining_seeds_for_row();
        }
    }

    pub fn generate_row(&mut self, row_number: i64) -> StoreRow {
        let key = scd_key(row_number);
        let is_new = key.is_new_business_key;
        let mut flags = field_change_flags(self.streams.stream(S_SCD));

        let mut row = StoreRow {
            store_sk: row_number,
            store_id: key.business_key,
            rec_start_date: key.start_date,
            rec_end_date: key.end_date,
            ..Default::default()
        };
        row.null_bitmap =
            generate_null_bitmap(S_NULL_BASIS_POINTS, S_NOT_NULL_MASK, self.streams.stream(S_NULLS));

        let closed_kind = self.streams.stream(S_CLOSED_DATE).uniform_int(0, 99);
        let closed_date = self
            .streams
            .stream(S_CLOSED_DATE)
            .uniform_int(JULIAN_DATA_START_DATE, JULIAN_DATA_END_DATE);
        let closed = if closed_kind < 30 { closed_date } else { -1 };
        row.closed_date_sk = scd_value(closed, &mut self.old_values.closed_date_sk, &mut flags, is_new);

        let name = make_word("syllables", (row_number + 5) * 3, 10, self.store);
        row.store_name = scd_value(name, &mut self.old_values.store_name, &mut flags, is_new);

        let employees =
            self.streams.stream(S_EMPLOYEES).uniform_int(S_EMPLOYEES_MIN, S_EMPLOYEES_MAX) as i32;
        row.employees = scd_value(employees, &mut self.old_values.employees, &mut flags, is_new);

        let floor_space = self
            .streams
            .stream(S_FLOOR_SPACE)
            .uniform_int(S_FLOOR_SPACE_MIN, S_FLOOR_SPACE_MAX) as i32;
        row.floor_space =
            scd_value(floor_space, &mut self.old_values.floor_space, &mut flags, is_new);

        let hours = pick(self.store, "store_hours", self.streams.stream(S_HOURS)).to_string();
        row.hours = scd_value(hours, &mut self.old_values.hours, &mut flags, is_new);

        let manager = person_name(self.store, self.streams.stream(S_MANAGER));
        row.manager = scd_value(manager, &mut self.old_values.manager, &mut flags, is_new);

        let market_id = self.streams.stream(S_MARKET_ID).uniform_int(1, 10) as i32;
        row.market_id = scd_value(market_id, &mut self.old_values.market_id, &mut flags, is_new);

        row.geography_class = "Unknown".to_string();

        let market_desc = generate_text(
            RS_S_MARKET_DESC / 2,
            RS_S_MARKET_DESC - 1,
            self.store,
            self.streams.stream(S_MARKET_DESC),
        );
        row.market_desc =
            scd_value(market_desc, &mut self.old_values.market_desc, &mut flags, is_new);

        let market_manager = person_name(self.store, self.streams.stream(S_MARKET_MANAGER));
        row.market_manager =
            scd_value(market_manager, &mut self.old_values.market_manager, &mut flags, is_new);

        let division_id = self.streams.stream(S_DIVISION).uniform_int(1, 6) as i32;
        row.division_id = scd_value(division_id, &mut self.old_values.division_id, &mut flags, is_new);
        row.division_name = make_company_name(row.division_id as i64, self.store);

        let company_id = self.streams.stream(S_COMPANY).uniform_int(1, 6) as i32;
        row.company_id = scd_value(company_id, &mut self.old_values.company_id, &mut flags, is_new);
        row.company_name = make_company_name(row.company_id as i64, self.store);

        let address = generate_address(self.store, self.streams.stream(S_ADDRESS), &self.scaling);
        row.address = scd_value(address, &mut self.old_values.address, &mut flags, is_new);

        let tax = self.streams.stream(S_TAX_PCT).uniform_int(0, S_TAX_MAX);
        row.tax_percentage = scd_value(tax, &mut self.old_values.tax_percentage, &mut flags, is_new);

        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// item

const I_BASE: usize = column_base(Table::Item);
const I_NULLS: usize = I_BASE;
const I_SCD: usize = I_BASE + 1;
const I_DESC: usize = I_BASE + 2;
const I_CURRENT_PRICE: usize = I_BASE + 3;
const I_WHOLESALE_COST: usize = I_BASE + 4;
const I_CATEGORY: usize = I_BASE + 5;
const I_CLASS: usize = I_BASE + 6;
const I_MANUFACT_ID: usize = I_BASE + 7;
const I_SIZE: usize = I_BASE + 8;
const I_FORMULATION: usize = I_BASE + 9;
const I_COLOR: usize = I_BASE + 10;
const I_UNITS: usize = I_BASE + 11;
const I_MANAGER_ID: usize = I_BASE + 12;
const I_PROMO_SK: usize = I_BASE + 13;
const I_PRODUCT_NAME: usize = I_BASE + 14;

const I_NULL_BASIS_POINTS: i64 = 200;
const I_NOT_NULL_MASK: i64 = 0b11;
const I_PRICE_MIN: i64 = 9;
const I_PRICE_MAX: i64 = 9_999;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemRow {
    pub item_sk: i64,
    pub item_id: String,
    pub rec_start_date: i64,
    pub rec_end_date: i64,
    pub item_desc: String,
    pub current_price: i64,
    pub wholesale_cost: i64,
    pub brand_id: i64,
    pub brand: String,
    pub class_id: i64,
    pub class_name: String,
    pub category_id: i64,
    pub category: String,
    pub manufact_id: i64,
    pub manufact: String,
    pub size: String,
    pub formulation: String,
    pub color: String,
    pub units: String,
    pub container: String,
    pub manager_id: i64,
    pub product_name: String,
    pub promo_sk: i64,
    pub null_bitmap: i64,
}

pub struct ItemRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
    streams: RowStreams,
    old_values: ItemRow,
    hierarchy: HierarchyState,
}

impl ItemRowGenerator {
    pub fn new(scale: f64) -> Result<ItemRowGenerator> {
        Ok(ItemRowGenerator {
            store: embedded_store()?,
            scaling: Scaling::new(scale),
            streams: RowStreams::new(&[
                (I_NULLS, NULL_SEEDS_PER_ROW),
                (I_SCD, 1),
                (I_DESC, RS_I_ITEM_DESC as i64 * 2),
                (I_CURRENT_PRICE, 2),
                (I_WHOLESALE_COST, 1),
                (I_CATEGORY, 1),
                (I_CLASS, 1),
                (I_MANUFACT_ID, 1),
                (I_SIZE, 1),
                (I_FORMULATION, RS_I_FORMULATION as i64 + 2),
                (I_COLOR, 1),
                (I_UNITS, 1),
                (I_MANAGER_ID, 1),
                (I_PROMO_SK, JOIN_KEY_SEEDS_PER_ROW),
                (I_PRODUCT_NAME, 1),
            ]),
            old_values: ItemRow::default(),
            hierarchy: HierarchyState::new(),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::Item)
    }

    pub fn skip_rows(&mut self, rows: i64) {
        if rows <= 0 {
            return;
        }
        let replay_from = (rows / 6) * 6;
        self.streams.skip_rows(replay_from);
        for row in replay_from..rows {
            self.generate_row(row + 1);
            self.consume_remaining_seeds_for_row();
        }
    }

    pub fn generate_row(&mut self, row_number: i64) -> ItemRow {
        let key = scd_key(row_number);
        let is_new = key.is_new_business_key;
        let mut flags = field_change_flags(self.streams.stream(I_SCD));

        let mut row = ItemRow {
            item_sk: row_number,
            item_id: key.business_key,
            rec_start_date: key.start_date,
            rec_end_date: key.end_date,
            container: "Unknown".to_string(),
            ..Default::default()
        };
        row.null_bitmap =
            generate_null_bitmap(I_NULL_BASIS_POINTS, I_NOT_NULL_MASK, self.streams.stream(I_NULLS));

        let desc = generate_text(
            RS_I_ITEM_DESC / 2,
            RS_I_ITEM_DESC - 1,
            self.store,
            self.streams.stream(I_DESC),
        );
        row.item_desc = scd_value(desc, &mut self.old_values.item_desc, &mut flags, is_new);

        let price = self.streams.stream(I_CURRENT_PRICE).uniform_int(I_PRICE_MIN, I_PRICE_MAX);
        row.current_price =
            scd_value(price, &mut self.old_values.current_price, &mut flags, is_new);
        // Wholesale sits somewhere under the list price.
        let markdown = self.streams.stream(I_WHOLESALE_COST).uniform_int(40, 80);
        let wholesale = row.current_price * markdown / 100;
        row.wholesale_cost =
            scd_value(wholesale, &mut self.old_values.wholesale_cost, &mut flags, is_new);

        let (category_id, category) =
            hierarchy_category(self.store, self.streams.stream(I_CATEGORY), &mut self.hierarchy);
        let (class_id, class_name) =
            hierarchy_class(self.store, self.streams.stream(I_CLASS), &mut self.hierarchy);
        let (brand_id, brand) = hierarchy_brand(row_number, self.store, &mut self.hierarchy);
        row.category_id = scd_value(category_id, &mut self.old_values.category_id, &mut flags, is_new);
        row.category = scd_value(category, &mut self.old_values.category, &mut flags, is_new);
        row.class_id = scd_value(class_id, &mut self.old_values.class_id, &mut flags, is_new);
        row.class_name = scd_value(class_name, &mut self.old_values.class_name, &mut flags, is_new);
        row.brand_id = scd_value(brand_id, &mut self.old_values.brand_id, &mut flags, is_new);
        row.brand = scd_value(brand, &mut self.old_values.brand, &mut flags, is_new);

        let manufact_id = self.streams.stream(I_MANUFACT_ID).uniform_int(1, 1_000);
        row.manufact_id =
            scd_value(manufact_id, &mut self.old_values.manufact_id, &mut flags, is_new);
        row.manufact = make_word("syllables", row.manufact_id, 15, self.store);

        let size = pick(self.store, "sizes", self.streams.stream(I_SIZE)).to_string();
        row.size = scd_value(size, &mut self.old_values.size, &mut flags, is_new);

        let formulation = random_charset(
            "0123456789abcdefghijklmnopqrstuvwxyz",
            RS_I_FORMULATION as i64,
            RS_I_FORMULATION as i64,
            self.streams.stream(I_FORMULATION),
        );
        row.formulation =
            scd_value(formulation, &mut self.old_values.formulation, &mut flags, is_new);

        let color = pick(self.store, "colors", self.streams.stream(I_COLOR)).to_string();
        row.color = scd_value(color, &mut self.old_values.color, &mut flags, is_new);

        let units = pick(self.store, "units", self.streams.stream(I_UNITS)).to_string();
        row.units = scd_value(units, &mut self.old_values.units, &mut flags, is_new);

        let manager_id = self.streams.stream(I_MANAGER_ID).uniform_int(1, 100);
        row.manager_id = scd_value(manager_id, &mut self.old_values.manager_id, &mut flags, is_new);

        let name_src = self.streams.stream(I_PRODUCT_NAME).uniform_int(1, 100_000_000);
        row.product_name = make_word("syllables", name_src, 20, self.store);

        row.promo_sk =
            generate_join_key(Table::Promotion, self.streams.stream(I_PROMO_SK), &self.scaling);
        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// call_center

const CC_BASE: usize = column_base(Table::CallCenter);
const CC_NULLS: usize = CC_BASE;
const CC_SCD: usize = CC_BASE + 1;
const CC_CLOSED_DATE: usize = CC_BASE + 2;
const CC_OPEN_DATE: usize = CC_BASE + 3;
const CC_NAME: usize = CC_BASE + 4;
const CC_CLASS: usize = CC_BASE + 5;
const CC_EMPLOYEES: usize = CC_BASE + 6;
const CC_SQ_FT: usize = CC_BASE + 7;
const CC_HOURS: usize = CC_BASE + 8;
const CC_MANAGER: usize = CC_BASE + 9;
const CC_MARKET_ID: usize = CC_BASE + 10;
const CC_MARKET_CLASS: usize = CC_BASE + 11;
const CC_MARKET_DESC: usize = CC_BASE + 12;
const CC_MARKET_MANAGER: usize = CC_BASE + 13;
const CC_DIVISION: usize = CC_BASE + 14;
const CC_COMPANY: usize = CC_BASE + 15;
const CC_ADDRESS: usize = CC_BASE + 16;
const CC_TAX_PCT: usize = CC_BASE + 17;

const CC_NULL_BASIS_POINTS: i64 = 100;
const CC_NOT_NULL_MASK: i64 = 0b11;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallCenterRow {
    pub call_center_sk: i64,
    pub call_center_id: String,
    pub rec_start_date: i64,
    pub rec_end_date: i64,
    pub closed_date_sk: i64,
    pub open_date_sk: i64,
    pub name: String,
    pub class: String,
    pub employees: i32,
    pub sq_ft: i32,
    pub hours: String,
    pub manager: String,
    pub market_id: i32,
    pub market_class: String,
    pub market_desc: String,
    pub market_manager: String,
    pub division_id: i32,
    pub division_name: String,
    pub company_id: i32,
    pub company_name: String,
    pub address: Address,
    pub tax_percentage: i64,
    pub null_bitmap: i64,
}

pub struct CallCenterRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
    streams: RowStreams,
    old_values: CallCenterRow,
}

impl CallCenterRowGenerator {
    pub fn new(scale: f64) -> Result<CallCenterRowGenerator> {
        Ok(CallCenterRowGenerator {
            store: embedded_store()?,
            scaling: Scaling::new(scale),
            streams: RowStreams::new(&[
                (CC_NULLS, NULL_SEEDS_PER_ROW),
                (CC_SCD, 1),
                (CC_CLOSED_DATE, 2),
                (CC_OPEN_DATE, 1),
                (CC_NAME, 1),
                (CC_CLASS, 1),
                (CC_EMPLOYEES, 1),
                (CC_SQ_FT, 1),
                (CC_HOURS, 1),
                (CC_MANAGER, 2),
                (CC_MARKET_ID, 1),
                (CC_MARKET_CLASS, RS_CC_MARKET_CLASS as i64 * 2),
                (CC_MARKET_DESC, RS_CC_MARKET_DESC as i64 * 2),
                (CC_MARKET_MANAGER, 2),
                (CC_DIVISION, 1),
                (CC_COMPANY, 1),
                (CC_ADDRESS, ADDRESS_SEEDS_PER_ROW),
                (CC_TAX_PCT, 1),
            ]),
            old_values: CallCenterRow::default(),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::CallCenter)
    }

    pub fn skip_rows(&mut self, rows: i64) {
        if rows <= 0 {
            return;
        }
        let replay_from = (rows / 6) * 6;
        self.streams.skip_rows(replay_from);
        for row in replay_from..rows {
            self.generate_row(row + 1);
            self.consume_remaining_seeds_for_row();
        }
    }

    pub fn generate_row(&mut self, row_number: i64) -> CallCenterRow {
        let key = scd_key(row_number);
        let is_new = key.is_new_business_key;
        let mut flags = field_change_flags(self.streams.stream(CC_SCD));

        let mut row = CallCenterRow {
            call_center_sk: row_number,
            call_center_id: key.business_key,
            rec_start_date: key.start_date,
            rec_end_date: key.end_date,
            ..Default::default()
        };
        row.null_bitmap = generate_null_bitmap(
            CC_NULL_BASIS_POINTS,
            CC_NOT_NULL_MASK,
            self.streams.stream(CC_NULLS),
        );

        let closed_kind = self.streams.stream(CC_CLOSED_DATE).uniform_int(0, 99);
        let _closed_date = self
            .streams
            .stream(CC_CLOSED_DATE)
            .uniform_int(JULIAN_DATA_START_DATE, JULIAN_DATA_END_DATE);
        // Call centers never close in the source data; the draws still burn.
        let _ = closed_kind;
        row.closed_date_sk = -1;

        let open = JULIAN_DATA_START_DATE
            - self.streams.stream(CC_OPEN_DATE).uniform_int(0, 727);
        row.open_date_sk = scd_value(open, &mut self.old_values.open_date_sk, &mut flags, is_new);

        let name = pick(self.store, "call_centers", self.streams.stream(CC_NAME)).to_string();
        row.name = scd_value(name, &mut self.old_values.name, &mut flags, is_new);

        let class = pick(self.store, "call_center_class", self.streams.stream(CC_CLASS)).to_string();
        row.class = scd_value(class, &mut self.old_values.class, &mut flags, is_new);

        let employees = self.streams.stream(CC_EMPLOYEES).uniform_int(1, 7) as i32 * 100;
        row.employees = scd_value(employees, &mut self.old_values.employees, &mut flags, is_new);

        let sq_ft = self.streams.stream(CC_SQ_FT).uniform_int(100, 700) as i32 * 1000;
        row.sq_ft = scd_value(sq_ft, &mut self.old_values.sq_ft, &mut flags, is_new);

        let hours = pick(self.store, "call_center_hours", self.streams.stream(CC_HOURS)).to_string();
        row.hours = scd_value(hours, &mut self.old_values.hours, &mut flags, is_new);

        let manager = person_name(self.store, self.streams.stream(CC_MANAGER));
        row.manager = scd_value(manager, &mut self.old_values.manager, &mut flags, is_new);

        let market_id = self.streams.stream(CC_MARKET_ID).uniform_int(1, 6) as i32;
        row.market_id = scd_value(market_id, &mut self.old_values.market_id, &mut flags, is_new);

        let market_class = generate_text(
            RS_CC_MARKET_CLASS / 2,
            RS_CC_MARKET_CLASS - 1,
            self.store,
            self.streams.stream(CC_MARKET_CLASS),
        );
        row.market_class =
            scd_value(market_class, &mut self.old_values.market_class, &mut flags, is_new);

        let market_desc = generate_text(
            RS_CC_MARKET_DESC / 2,
            RS_CC_MARKET_DESC - 1,
            self.store,
            self.streams.stream(CC_MARKET_DESC),
        );
        row.market_desc =
            scd_value(market_desc, &mut self.old_values.market_desc, &mut flags, is_new);

        let market_manager = person_name(self.store, self.streams.stream(CC_MARKET_MANAGER));
        row.market_manager =
            scd_value(market_manager, &mut self.old_values.market_manager, &mut flags, is_new);

        let division_id = self.streams.stream(CC_DIVISION).uniform_int(1, 6) as i32;
        row.division_id =
            scd_value(division_id, &mut self.old_values.division_id, &mut flags, is_new);
        row.division_name = make_company_name(row.division_id as i64, self.store);

        let company_id = self.streams.stream(CC_COMPANY).uniform_int(1, 6) as i32;
        row.company_id = scd_value(company_id, &mut self.old_values.company_id, &mut flags, is_new);
        row.company_name = make_company_name(row.company_id as i64, self.store);

        let address = generate_address(self.store, self.streams.stream(CC_ADDRESS), &self.scaling);
        row.address = scd_value(address, &mut self.old_values.address, &mut flags, is_new);

        let tax = self.streams.stream(CC_TAX_PCT).uniform_int(0, 1_200);
        row.tax_percentage = scd_value(tax, &mut self.old_values.tax_percentage, &mut flags, is_new);

        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// web_site

const WEB_BASE: usize = column_base(Table::WebSite);
const WEB_NULLS: usize = WEB_BASE;
const WEB_SCD: usize = WEB_BASE + 1;
const WEB_OPEN_DATE: usize = WEB_BASE + 2;
const WEB_CLOSE_DATE: usize = WEB_BASE + 3;
const WEB_CLASS: usize = WEB_BASE + 4;
const WEB_MANAGER: usize = WEB_BASE + 5;
const WEB_MARKET_ID: usize = WEB_BASE + 6;
const WEB_MARKET_CLASS: usize = WEB_BASE + 7;
const WEB_MARKET_DESC: usize = WEB_BASE + 8;
const WEB_MARKET_MANAGER: usize = WEB_BASE + 9;
const WEB_COMPANY: usize = WEB_BASE + 10;
const WEB_ADDRESS: usize = WEB_BASE + 11;
const WEB_TAX_PCT: usize = WEB_BASE + 12;

const WEB_NULL_BASIS_POINTS: i64 = 100;
const WEB_NOT_NULL_MASK: i64 = 0b11;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WebSiteRow {
    pub site_sk: i64,
    pub site_id: String,
    pub rec_start_date: i64,
    pub rec_end_date: i64,
    pub name: String,
    pub open_date_sk: i64,
    pub close_date_sk: i64,
    pub class: String,
    pub manager: String,
    pub market_id: i32,
    pub market_class: String,
    pub market_desc: String,
    pub market_manager: String,
    pub company_id: i32,
    pub company_name: String,
    pub address: Address,
    pub tax_percentage: i64,
    pub null_bitmap: i64,
}

pub struct WebSiteRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
    streams: RowStreams,
    old_values: WebSiteRow,
}

impl WebSiteRowGenerator {
    pub fn new(scale: f64) -> Result<WebSiteRowGenerator> {
        Ok(WebSiteRowGenerator {
            store: embedded_store()?,
            scaling: Scaling::new(scale),
            streams: RowStreams::new(&[
                (WEB_NULLS, NULL_SEEDS_PER_ROW),
                (WEB_SCD, 1),
                (WEB_OPEN_DATE, 1),
                (WEB_CLOSE_DATE, 2),
                (WEB_CLASS, 1),
                (WEB_MANAGER, 2),
                (WEB_MARKET_ID, 1),
                (WEB_MARKET_CLASS, RS_WEB_MARKET_CLASS as i64 * 2),
                (WEB_MARKET_DESC, RS_WEB_MARKET_DESC as i64 * 2),
                (WEB_MARKET_MANAGER, 2),
                (WEB_COMPANY, 1),
                (WEB_ADDRESS, ADDRESS_SEEDS_PER_ROW),
                (WEB_TAX_PCT, 1),
            ]),
            old_values: WebSiteRow::default(),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::WebSite)
    }

    pub fn skip_rows(&mut self, rows: i64) {
        if rows <= 0 {
            return;
        }
        let replay_from = (rows / 6) * 6;
        self.streams.skip_rows(replay_from);
        for row in replay_from..rows {
            self.generate_row(row + 1);
            self.consume_remaining_seeds_for_row();
        }
    }

    pub fn generate_row(&mut self, row_number: i64) -> WebSiteRow {
        let key = scd_key(row_number);
        let is_new = key.is_new_business_key;
        let mut flags = field_change_flags(self.streams.stream(WEB_SCD));

        let mut row = WebSiteRow {
            site_sk: row_number,
            site_id: key.business_key,
            rec_start_date: key.start_date,
            rec_end_date: key.end_date,
            name: format!("site_{}", (row_number - 1) / 6),
            ..Default::default()
        };
        row.null_bitmap = generate_null_bitmap(
            WEB_NULL_BASIS_POINTS,
            WEB_NOT_NULL_MASK,
            self.streams.stream(WEB_NULLS),
        );

        let open = JULIAN_DATA_START_DATE
            - self.streams.stream(WEB_OPEN_DATE).uniform_int(0, WEB_DATE_STAGGER * 24);
        row.open_date_sk = scd_value(open, &mut self.old_values.open_date_sk, &mut flags, is_new);

        let close_kind = self.streams.stream(WEB_CLOSE_DATE).uniform_int(0, 99);
        let close_date = self
            .streams
            .stream(WEB_CLOSE_DATE)
            .uniform_int(JULIAN_DATA_START_DATE, JULIAN_DATA_END_DATE);
        let close = if close_kind < 30 { close_date } else { -1 };
        row.close_date_sk = scd_value(close, &mut self.old_values.close_date_sk, &mut flags, is_new);

        let class = pick(self.store, "web_site_class", self.streams.stream(WEB_CLASS)).to_string();
        row.class = scd_value(class, &mut self.old_values.class, &mut flags, is_new);

        let manager = person_name(self.store, self.streams.stream(WEB_MANAGER));
        row.manager = scd_value(manager, &mut self.old_values.manager, &mut flags, is_new);

        let market_id = self.streams.stream(WEB_MARKET_ID).uniform_int(1, 6) as i32;
        row.market_id = scd_value(market_id, &mut self.old_values.market_id, &mut flags, is_new);

        let market_class = generate_text(
            RS_WEB_MARKET_CLASS / 2,
            RS_WEB_MARKET_CLASS - 1,
            self.store,
            self.streams.stream(WEB_MARKET_CLASS),
        );
        row.market_class =
            scd_value(market_class, &mut self.old_values.market_class, &mut flags, is_new);

        let market_desc = generate_text(
            RS_WEB_MARKET_DESC / 2,
            RS_WEB_MARKET_DESC - 1,
            self.store,
            self.streams.stream(WEB_MARKET_DESC),
        );
        row.market_desc =
            scd_value(market_desc, &mut self.old_values.market_desc, &mut flags, is_new);

        let market_manager = person_name(self.store, self.streams.stream(WEB_MARKET_MANAGER));
        row.market_manager =
            scd_value(market_manager, &mut self.old_values.market_manager, &mut flags, is_new);

        let company_id = self.streams.stream(WEB_COMPANY).uniform_int(1, 6) as i32;
        row.company_id = scd_value(company_id, &mut self.old_values.company_id, &mut flags, is_new);
        row.company_name = make_company_name(row.company_id as i64, self.store);

        let address = generate_address(self.store, self.streams.stream(WEB_ADDRESS), &self.scaling);
        row.address = scd_value(address, &mut self.old_values.address, &mut flags, is_new);

        let tax = self.streams.stream(WEB_TAX_PCT).uniform_int(0, 1_200);
        row.tax_percentage = scd_value(tax, &mut self.old_values.tax_percentage, &mut flags, is_new);

        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// web_page

const WP_BASE: usize = column_base(Table::WebPage);
const WP_NULLS: usize = WP_BASE;
const WP_SCD: usize = WP_BASE + 1;
const WP_CREATION_DATE: usize = WP_BASE + 2;
const WP_ACCESS_DATE: usize = WP_BASE + 3;
const WP_AUTOGEN: usize = WP_BASE + 4;
const WP_CUSTOMER_SK: usize = WP_BASE + 5;
const WP_URL: usize = WP_BASE + 6;
const WP_TYPE: usize = WP_BASE + 7;
const WP_CHAR_COUNT: usize = WP_BASE + 8;
const WP_LINK_COUNT: usize = WP_BASE + 9;
const WP_IMAGE_COUNT: usize = WP_BASE + 10;
const WP_AD_COUNT: usize = WP_BASE + 11;

const WP_NULL_BASIS_POINTS: i64 = 100;
const WP_NOT_NULL_MASK: i64 = 0b11;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WebPageRow {
    pub page_sk: i64,
    pub page_id: String,
    pub rec_start_date: i64,
    pub rec_end_date: i64,
    pub creation_date_sk: i64,
    pub access_date_sk: i64,
    pub autogen_flag: bool,
    pub customer_sk: i64,
    pub url: String,
    pub page_type: String,
    pub char_count: i32,
    pub link_count: i32,
    pub image_count: i32,
    pub max_ad_count: i32,
    pub null_bitmap: i64,
}

pub struct WebPageRowGenerator {
    store: &'static DstDistributionStore,
    scaling: Scaling,
    streams: RowStreams,
    old_values: WebPageRow,
}

impl WebPageRowGenerator {
    pub fn new(scale: f64) -> Result<WebPageRowGenerator> {
        Ok(WebPageRowGenerator {
            store: embedded_store()?,
            scaling: Scaling::new(scale),
            streams: RowStreams::new(&[
                (WP_NULLS, NULL_SEEDS_PER_ROW),
                (WP_SCD, 1),
                (WP_CREATION_DATE, 1),
                (WP_ACCESS_DATE, 1),
                (WP_AUTOGEN, 1),
                (WP_CUSTOMER_SK, JOIN_KEY_SEEDS_PER_ROW),
                (WP_URL, 1),
                (WP_TYPE, 1),
                (WP_CHAR_COUNT, 1),
                (WP_LINK_COUNT, 1),
                (WP_IMAGE_COUNT, 1),
                (WP_AD_COUNT, 1),
            ]),
            old_values: WebPageRow::default(),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::WebPage)
    }

    pub fn skip_rows(&mut self, rows: i64) {
        if rows <= 0 {
            return;
        }
        let replay_from = (rows / 6) * 6;
        self.streams.skip_rows(replay_from);
        for row in replay_from..rows {
            self.generate_row(row + 1);
            self.consume_remaining_seeds_for_row();
        }
    }

    pub fn generate_row(&mut self, row_number: i64) -> WebPageRow {
        let key = scd_key(row_number);
        let is_new = key.is_new_business_key;
        let mut flags = field_change_flags(self.streams.stream(WP_SCD));

        let mut row = WebPageRow {
            page_sk: row_number,
            page_id: key.business_key,
            rec_start_date: key.start_date,
            rec_end_date: key.end_date,
            ..Default::default()
        };
        row.null_bitmap = generate_null_bitmap(
            WP_NULL_BASIS_POINTS,
            WP_NOT_NULL_MASK,
            self.streams.stream(WP_NULLS),
        );

        let creation = JULIAN_DATA_START_DATE
            - self.streams.stream(WP_CREATION_DATE).uniform_int(0, WEB_DATE_STAGGER * 12);
        row.creation_date_sk =
            scd_value(creation, &mut self.old_values.creation_date_sk, &mut flags, is_new);

        let access = row.creation_date_sk
            + self.streams.stream(WP_ACCESS_DATE).uniform_int(0, WEB_DATE_STAGGER);
        row.access_date_sk =
            scd_value(access, &mut self.old_values.access_date_sk, &mut flags, is_new);

        let autogen = self.streams.stream(WP_AUTOGEN).uniform_int(0, 99) < WP_AUTOGEN_PCT;
        row.autogen_flag = scd_value(autogen, &mut self.old_values.autogen_flag, &mut flags, is_new);

        let customer =
            generate_join_key(Table::Customer, self.streams.stream(WP_CUSTOMER_SK), &self.scaling);
        row.customer_sk = if row.autogen_flag { customer } else { -1 };

        let url_src = self.streams.stream(WP_URL).uniform_int(1, 1_000_000);
        let word = make_word("syllables", url_src, 20, self.store);
        row.url = scd_value(
            format!("http://www.{word}.com"),
            &mut self.old_values.url,
            &mut flags,
            is_new,
        );

        let page_type = pick(self.store, "web_page_use", self.streams.stream(WP_TYPE)).to_string();
        row.page_type = scd_value(page_type, &mut self.old_values.page_type, &mut flags, is_new);

        let char_count = self.streams.stream(WP_CHAR_COUNT).uniform_int(2_500, 8_000) as i32;
        row.char_count = scd_value(char_count, &mut self.old_values.char_count, &mut flags, is_new);

        let link_count =
            self.streams.stream(WP_LINK_COUNT).uniform_int(WP_LINK_MIN, WP_LINK_MAX) as i32;
        row.link_count = scd_value(link_count, &mut self.old_values.link_count, &mut flags, is_new);

        let image_count =
            self.streams.stream(WP_IMAGE_COUNT).uniform_int(WP_IMAGE_MIN, WP_IMAGE_MAX) as i32;
        row.image_count =
            scd_value(image_count, &mut self.old_values.image_count, &mut flags, is_new);

        let ad_count = self.streams.stream(WP_AD_COUNT).uniform_int(WP_AD_MIN, WP_AD_MAX) as i32;
        row.max_ad_count = scd_value(ad_count, &mut self.old_values.max_ad_count, &mut flags, is_new);

        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_revisions_share_business_keys() {
        let mut stores = StoreRowGenerator::new(1.0).unwrap();
        let mut rows = Vec::new();
        for i in 1..=12 {
            rows.push(stores.generate_row(i));
            stores.consume_remaining_seeds_for_row();
        }
        assert_eq!(rows[1].store_id, rows[2].store_id);
        assert_eq!(rows[3].store_id, rows[4].store_id);
        assert_eq!(rows[4].store_id, rows[5].store_id);
        assert_ne!(rows[0].store_id, rows[1].store_id);
        // Revision windows chain.
        assert_eq!(rows[2].rec_start_date, rows[1].rec_end_date + 1);
    }

    #[test]
    fn store_skip_equivalence() {
        let mut sequential = StoreRowGenerator::new(1.0).unwrap();
        let mut expected = StoreRow::default();
        for i in 0..6 {
            expected = sequential.generate_row(i + 1);
            sequential.consume_remaining_seeds_for_row();
        }

        let mut skipped = StoreRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(5);
        assert_eq!(skipped.generate_row(6), expected);
    }

    #[test]
    fn store_skip_equivalence_mid_cycle() {
        let mut sequential = StoreRowGenerator::new(1.0).unwrap();
        let mut expected = StoreRow::default();
        for i in 0..9 {
            expected = sequential.generate_row(i + 1);
            sequential.consume_remaining_seeds_for_row();
        }

        let mut skipped = StoreRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(8);
        assert_eq!(skipped.generate_row(9), expected);
    }

    #[test]
    fn item_skip_equivalence() {
        let mut sequential = ItemRowGenerator::new(1.0).unwrap();
        let mut expected = ItemRow::default();
        for i in 0..8 {
            expected = sequential.generate_row(i + 1);
            sequential.consume_remaining_seeds_for_row();
        }

        let mut skipped = ItemRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(7);
        assert_eq!(skipped.generate_row(8), expected);
    }

    #[test]
    fn item_brand_nests_in_hierarchy() {
        let mut items = ItemRowGenerator::new(1.0).unwrap();
        for i in 1..=12 {
            let row = items.generate_row(i);
            items.consume_remaining_seeds_for_row();
            assert!(row.brand_id > 0);
            assert!(!row.category.is_empty());
            assert!(!row.class_name.is_empty());
            assert!(row.brand.contains('#'));
        }
    }

    #[test]
    fn call_center_skip_equivalence() {
        let mut sequential = CallCenterRowGenerator::new(1.0).unwrap();
        let mut expected = CallCenterRow::default();
        for i in 0..6 {
            expected = sequential.generate_row(i + 1);
            sequential.consume_remaining_seeds_for_row();
        }

        let mut skipped = CallCenterRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(5);
        assert_eq!(skipped.generate_row(6), expected);
    }

    #[test]
    fn web_site_skip_equivalence() {
        let mut sequential = WebSiteRowGenerator::new(1.0).unwrap();
        let mut expected = WebSiteRow::default();
        for i in 0..6 {
            expected = sequential.generate_row(i + 1);
            sequential.consume_remaining_seeds_for_row();
        }

        let mut skipped = WebSiteRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(5);
        assert_eq!(skipped.generate_row(6), expected);
    }

    #[test]
    fn web_page_skip_equivalence() {
        let mut sequential = WebPageRowGenerator::new(1.0).unwrap();
        let mut expected = WebPageRow::default();
        for i in 0..6 {
            expected = sequential.generate_row(i + 1);
            sequential.consume_remaining_seeds_for_row();
        }

        let mut skipped = WebPageRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(5);
        assert_eq!(skipped.generate_row(6), expected);
    }

    #[test]
    fn web_page_customer_only_when_autogenerated() {
        let mut pages = WebPageRowGenerator::new(1.0).unwrap();
        for i in 1..=30 {
            let row = pages.generate_row(i);
            pages.consume_remaining_seeds_for_row();
            if !row.autogen_flag {
                assert_eq!(row.customer_sk, -1);
            }
        }
    }
}
