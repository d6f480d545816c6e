// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! Schemas and [RowSource] adapters for the TPC-DS tables.

use crate::batch::{GeneratorOptions, RowSource};
use crate::col::{ArrayBuilder, ColumnType, Field, Schema};
use crate::error::{Error, Result};
use crate::tpcds::dates::date32_from_julian;
use crate::tpcds::generators::dimensions::*;
use crate::tpcds::generators::sales::*;
use crate::tpcds::generators::scd_tables::*;
use crate::tpcds::nulls::is_null;
use crate::tpcds::pricing::Pricing;

// Foreign keys of -1 and bitmap hits render as nulls.
fn append_key(builder: &mut ArrayBuilder, value: i64, null: bool) {
    if null || value < 0 {
        builder.append_null();
    } else {
        builder.append_i64(value);
    }
}

// Julian day keys are 32-bit in the schemas.
fn append_date_key(builder: &mut ArrayBuilder, value: i64, null: bool) {
    if null || value < 0 {
        builder.append_null();
    } else {
        builder.append_i32(value as i32);
    }
}

fn append_str(builder: &mut ArrayBuilder, value: &str, null: bool) {
    if null {
        builder.append_null();
    } else {
        builder.append_str(value);
    }
}

fn append_i32(builder: &mut ArrayBuilder, value: i32, null: bool) {
    if null {
        builder.append_null();
    } else {
        builder.append_i32(value);
    }
}

fn append_bool(builder: &mut ArrayBuilder, value: bool, null: bool) {
    if null {
        builder.append_null();
    } else {
        builder.append_bool(value);
    }
}

fn append_decimal(builder: &mut ArrayBuilder, value: i64, null: bool) {
    if null {
        builder.append_null();
    } else {
        builder.append_decimal(value);
    }
}

// SCD record windows render as date32, with -1 meaning null.
fn append_rec_date(builder: &mut ArrayBuilder, julian: i64, null: bool) {
    if null || julian <= 0 {
        builder.append_null();
    } else {
        builder.append_date(date32_from_julian(julian));
    }
}

macro_rules! address_fields {
    ($prefix:literal) => {
        [
            Field::new(concat!($prefix, "street_number"), ColumnType::Utf8),
            Field::new(concat!($prefix, "street_name"), ColumnType::Utf8),
            Field::new(concat!($prefix, "street_type"), ColumnType::Utf8),
            Field::new(concat!($prefix, "suite_number"), ColumnType::Utf8),
            Field::new(concat!($prefix, "city"), ColumnType::Utf8),
            Field::new(concat!($prefix, "county"), ColumnType::Utf8),
            Field::new(concat!($prefix, "state"), ColumnType::Utf8),
            Field::new(concat!($prefix, "zip"), ColumnType::Utf8),
            Field::new(concat!($prefix, "country"), ColumnType::Utf8),
            Field::new(concat!($prefix, "gmt_offset"), ColumnType::Float64),
        ]
    };
}

fn append_address(
    builders: &mut [ArrayBuilder],
    start: usize,
    address: &crate::tpcds::address::Address,
    bitmap: i64,
    offset_base: usize,
) {
    let null_at = |i: usize| is_null(bitmap, offset_base + i);
    append_str(&mut builders[start], &address.street_num.to_string(), null_at(0));
    append_str(&mut builders[start + 1], &address.street_name(), null_at(1));
    append_str(&mut builders[start + 2], &address.street_type, null_at(2));
    append_str(&mut builders[start + 3], &address.suite_num, null_at(3));
    append_str(&mut builders[start + 4], &address.city, null_at(4));
    append_str(&mut builders[start + 5], &address.county, null_at(5));
    append_str(&mut builders[start + 6], &address.state, null_at(6));
    append_str(&mut builders[start + 7], &address.format_zip(), null_at(7));
    append_str(&mut builders[start + 8], &address.country, null_at(8));
    if null_at(9) {
        builders[start + 9].append_null();
    } else {
        builders[start + 9].append_f64(address.gmt_offset as f64);
    }
}

macro_rules! pricing_fields {
    ($prefix:literal) => {
        [
            Field::new(concat!($prefix, "quantity"), ColumnType::Int32),
            Field::new(concat!($prefix, "wholesale_cost"), ColumnType::Decimal(7)),
            Field::new(concat!($prefix, "list_price"), ColumnType::Decimal(7)),
            Field::new(concat!($prefix, "sales_price"), ColumnType::Decimal(7)),
            Field::new(concat!($prefix, "ext_discount_amt"), ColumnType::Decimal(7)),
            Field::new(concat!($prefix, "ext_sales_price"), ColumnType::Decimal(7)),
            Field::new(concat!($prefix, "ext_wholesale_cost"), ColumnType::Decimal(7)),
            Field::new(concat!($prefix, "ext_list_price"), ColumnType::Decimal(7)),
            Field::new(concat!($prefix, "ext_tax"), ColumnType::Decimal(7)),
            Field::new(concat!($prefix, "coupon_amt"), ColumnType::Decimal(7)),
        ]
    };
}

fn append_store_pricing(builders: &mut [ArrayBuilder], start: usize, pricing: &Pricing) {
    builders[start].append_i32(pricing.quantity as i32);
    builders[start + 1].append_decimal(pricing.wholesale_cost);
    builders[start + 2].append_decimal(pricing.list_price);
    builders[start + 3].append_decimal(pricing.sales_price);
    builders[start + 4].append_decimal(pricing.ext_discount_amt);
    builders[start + 5].append_decimal(pricing.ext_sales_price);
    builders[start + 6].append_decimal(pricing.ext_wholesale_cost);
    builders[start + 7].append_decimal(pricing.ext_list_price);
    builders[start + 8].append_decimal(pricing.ext_tax);
    builders[start + 9].append_decimal(pricing.coupon_amt);
}

// -------------------------------------------------------------------------

struct CustomerAddressSource {
    schema: Schema,
    gen: CustomerAddressRowGenerator,
    current_row: i64,
}

impl RowSource for CustomerAddressSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        builders[0].append_i64(row.address_sk);
        builders[1].append_str(&row.address_id);
        append_i32(&mut builders[2], row.address.street_num, is_null(bitmap, 2));
        append_str(&mut builders[3], &row.address.street_name(), is_null(bitmap, 3));
        append_str(&mut builders[4], &row.address.street_type, is_null(bitmap, 4));
        append_str(&mut builders[5], &row.address.suite_num, is_null(bitmap, 5));
        append_str(&mut builders[6], &row.address.city, is_null(bitmap, 6));
        append_str(&mut builders[7], &row.address.county, is_null(bitmap, 7));
        append_str(&mut builders[8], &row.address.state, is_null(bitmap, 8));
        append_str(&mut builders[9], &row.address.format_zip(), is_null(bitmap, 9));
        append_str(&mut builders[10], &row.address.country, is_null(bitmap, 10));
        append_i32(&mut builders[11], row.address.gmt_offset, is_null(bitmap, 11));
        append_str(&mut builders[12], &row.location_type, is_null(bitmap, 12));
    }
}

struct CustomerSource {
    schema: Schema,
    gen: CustomerRowGenerator,
    current_row: i64,
}

impl RowSource for CustomerSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        builders[0].append_i64(row.customer_sk);
        builders[1].append_str(&row.customer_id);
        append_key(&mut builders[2], row.current_cdemo_sk, is_null(bitmap, 2));
        append_key(&mut builders[3], row.current_hdemo_sk, is_null(bitmap, 3));
        append_key(&mut builders[4], row.current_addr_sk, is_null(bitmap, 4));
        append_date_key(&mut builders[5], row.first_shipto_date_sk, is_null(bitmap, 5));
        append_date_key(&mut builders[6], row.first_sales_date_sk, is_null(bitmap, 6));
        append_str(&mut builders[7], &row.salutation, is_null(bitmap, 7));
        append_str(&mut builders[8], &row.first_name, is_null(bitmap, 8));
        append_str(&mut builders[9], &row.last_name, is_null(bitmap, 9));
        append_bool(&mut builders[10], row.preferred_cust_flag, is_null(bitmap, 10));
        append_i32(&mut builders[11], row.birth_day, is_null(bitmap, 11));
        append_i32(&mut builders[12], row.birth_month, is_null(bitmap, 12));
        append_i32(&mut builders[13], row.birth_year, is_null(bitmap, 13));
        append_str(&mut builders[14], &row.birth_country, is_null(bitmap, 14));
        // Login is always absent in the source data.
        builders[15].append_null();
        append_str(&mut builders[16], &row.email_address, is_null(bitmap, 16));
        append_date_key(&mut builders[17], row.last_review_date_sk, is_null(bitmap, 17));
    }
}

struct CustomerDemographicsSource {
    schema: Schema,
    gen: CustomerDemographicsRowGenerator,
    current_row: i64,
}

impl RowSource for CustomerDemographicsSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        builders[0].append_i64(row.demo_sk);
        builders[1].append_str(&row.gender);
        builders[2].append_str(&row.marital_status);
        builders[3].append_str(&row.education_status);
        builders[4].append_i32(row.purchase_estimate);
        builders[5].append_str(&row.credit_rating);
        builders[6].append_i32(row.dep_count);
        builders[7].append_i32(row.dep_employed_count);
        builders[8].append_i32(row.dep_college_count);
    }
}

struct HouseholdDemographicsSource {
    schema: Schema,
    gen: HouseholdDemographicsRowGenerator,
    current_row: i64,
}

impl RowSource for HouseholdDemographicsSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        builders[0].append_i64(row.demo_sk);
        builders[1].append_i64(row.income_band_sk);
        builders[2].append_str(&row.buy_potential);
        builders[3].append_i32(row.dep_count);
        builders[4].append_i32(row.vehicle_count);
    }
}

struct IncomeBandSource {
    schema: Schema,
    gen: IncomeBandRowGenerator,
    current_row: i64,
}

impl RowSource for IncomeBandSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        builders[0].append_i64(row.income_band_sk);
        builders[1].append_i32(row.lower_bound);
        builders[2].append_i32(row.upper_bound);
    }
}

struct ReasonSource {
    schema: Schema,
    gen: ReasonRowGenerator,
    current_row: i64,
}

impl RowSource for ReasonSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        builders[0].append_i64(row.reason_sk);
        builders[1].append_str(&row.reason_id);
        builders[2].append_str(&row.reason_description);
    }
}

struct ShipModeSource {
    schema: Schema,
    gen: ShipModeRowGenerator,
    current_row: i64,
}

impl RowSource for ShipModeSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        builders[0].append_i64(row.ship_mode_sk);
        builders[1].append_str(&row.ship_mode_id);
        append_str(&mut builders[2], &row.ship_mode_type, is_null(bitmap, 2));
        append_str(&mut builders[3], &row.code, is_null(bitmap, 3));
        append_str(&mut builders[4], &row.carrier, is_null(bitmap, 4));
        append_str(&mut builders[5], &row.contract, is_null(bitmap, 5));
    }
}

struct TimeDimSource {
    schema: Schema,
    gen: TimeDimRowGenerator,
    current_row: i64,
}

impl RowSource for TimeDimSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        builders[0].append_i64(row.time_sk);
        builders[1].append_str(&row.time_id);
        builders[2].append_i32(row.time);
        builders[3].append_i32(row.hour);
        builders[4].append_i32(row.minute);
        builders[5].append_i32(row.second);
        builders[6].append_str(&row.am_pm);
        builders[7].append_str(&row.shift);
        builders[8].append_str(&row.sub_shift);
        builders[9].append_str(&row.meal_time);
    }
}

struct WarehouseSource {
    schema: Schema,
    gen: WarehouseRowGenerator,
    current_row: i64,
}

impl RowSource for WarehouseSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        builders[0].append_i64(row.warehouse_sk);
        builders[1].append_str(&row.warehouse_id);
        append_str(&mut builders[2], &row.warehouse_name, is_null(bitmap, 2));
        append_i32(&mut builders[3], row.warehouse_sq_ft, is_null(bitmap, 3));
        append_address(builders, 4, &row.address, bitmap, 4);
    }
}

struct PromotionSource {
    schema: Schema,
    gen: PromotionRowGenerator,
    current_row: i64,
}

impl RowSource for PromotionSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        builders[0].append_i64(row.promo_sk);
        builders[1].append_str(&row.promo_id);
        append_date_key(&mut builders[2], row.start_date_sk, is_null(bitmap, 2));
        append_date_key(&mut builders[3], row.end_date_sk, is_null(bitmap, 3));
        append_key(&mut builders[4], row.item_sk, is_null(bitmap, 4));
        append_decimal(&mut builders[5], row.cost, is_null(bitmap, 5));
        append_i32(&mut builders[6], row.response_target, is_null(bitmap, 6));
        append_str(&mut builders[7], &row.promo_name, is_null(bitmap, 7));
        append_bool(&mut builders[8], row.channel_dmail, is_null(bitmap, 8));
        append_bool(&mut builders[9], row.channel_email, is_null(bitmap, 9));
        append_bool(&mut builders[10], row.channel_catalog, is_null(bitmap, 10));
        append_bool(&mut builders[11], row.channel_tv, is_null(bitmap, 11));
        append_bool(&mut builders[12], row.channel_radio, is_null(bitmap, 12));
        append_bool(&mut builders[13], row.channel_press, is_null(bitmap, 13));
        append_bool(&mut builders[14], row.channel_event, is_null(bitmap, 14));
        append_bool(&mut builders[15], row.channel_demo, is_null(bitmap, 15));
        append_str(&mut builders[16], &row.channel_details, is_null(bitmap, 16));
        append_str(&mut builders[17], &row.purpose, is_null(bitmap, 17));
        append_bool(&mut builders[18], row.discount_active, is_null(bitmap, 18));
    }
}

struct CatalogPageSource {
    schema: Schema,
    gen: CatalogPageRowGenerator,
    current_row: i64,
}

impl RowSource for CatalogPageSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        builders[0].append_i64(row.catalog_page_sk);
        builders[1].append_str(&row.catalog_page_id);
        append_date_key(&mut builders[2], row.start_date_sk, is_null(bitmap, 2));
        append_date_key(&mut builders[3], row.end_date_sk, is_null(bitmap, 3));
        append_str(&mut builders[4], &row.department, is_null(bitmap, 4));
        append_i32(&mut builders[5], row.catalog_number, is_null(bitmap, 5));
        append_i32(&mut builders[6], row.catalog_page_number, is_null(bitmap, 6));
        append_str(&mut builders[7], &row.description, is_null(bitmap, 7));
        append_str(&mut builders[8], &row.page_type, is_null(bitmap, 8));
    }
}

struct StoreSource {
    schema: Schema,
    gen: StoreRowGenerator,
    current_row: i64,
}

impl RowSource for StoreSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        builders[0].append_i64(row.store_sk);
        builders[1].append_str(&row.store_id);
        append_rec_date(&mut builders[2], row.rec_start_date, is_null(bitmap, 2));
        append_rec_date(&mut builders[3], row.rec_end_date, is_null(bitmap, 3));
        append_date_key(&mut builders[4], row.closed_date_sk, is_null(bitmap, 4));
        append_str(&mut builders[5], &row.store_name, is_null(bitmap, 5));
        append_i32(&mut builders[6], row.employees, is_null(bitmap, 6));
        append_i32(&mut builders[7], row.floor_space, is_null(bitmap, 7));
        append_str(&mut builders[8], &row.hours, is_null(bitmap, 8));
        append_str(&mut builders[9], &row.manager, is_null(bitmap, 9));
        append_i32(&mut builders[10], row.market_id, is_null(bitmap, 10));
        append_str(&mut builders[11], &row.geography_class, is_null(bitmap, 11));
        append_str(&mut builders[12], &row.market_desc, is_null(bitmap, 12));
        append_str(&mut builders[13], &row.market_manager, is_null(bitmap, 13));
        append_i32(&mut builders[14], row.division_id, is_null(bitmap, 14));
        append_str(&mut builders[15], &row.division_name, is_null(bitmap, 15));
        append_i32(&mut builders[16], row.company_id, is_null(bitmap, 16));
        append_str(&mut builders[17], &row.company_name, is_null(bitmap, 17));
        append_address(builders, 18, &row.address, bitmap, 18);
        append_decimal(&mut builders[28], row.tax_percentage, is_null(bitmap, 28));
    }
}

struct ItemSource {
    schema: Schema,
    gen: ItemRowGenerator,
    current_row: i64,
}

impl RowSource for ItemSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        builders[0].append_i64(row.item_sk);
        builders[1].append_str(&row.item_id);
        append_rec_date(&mut builders[2], row.rec_start_date, is_null(bitmap, 2));
        append_rec_date(&mut builders[3], row.rec_end_date, is_null(bitmap, 3));
        append_str(&mut builders[4], &row.item_desc, is_null(bitmap, 4));
        append_decimal(&mut builders[5], row.current_price, is_null(bitmap, 5));
        append_decimal(&mut builders[6], row.wholesale_cost, is_null(bitmap, 6));
        append_key(&mut builders[7], row.brand_id, is_null(bitmap, 7));
        append_str(&mut builders[8], &row.brand, is_null(bitmap, 8));
        append_key(&mut builders[9], row.class_id, is_null(bitmap, 9));
        append_str(&mut builders[10], &row.class_name, is_null(bitmap, 10));
        append_key(&mut builders[11], row.category_id, is_null(bitmap, 11));
        append_str(&mut builders[12], &row.category, is_null(bitmap, 12));
        append_key(&mut builders[13], row.manufact_id, is_null(bitmap, 13));
        append_str(&mut builders[14], &row.manufact, is_null(bitmap, 14));
        append_str(&mut builders[15], &row.size, is_null(bitmap, 15));
        append_str(&mut builders[16], &row.formulation, is_null(bitmap, 16));
        append_str(&mut builders[17], &row.color, is_null(bitmap, 17));
        append_str(&mut builders[18], &row.units, is_null(bitmap, 18));
        append_str(&mut builders[19], &row.container, is_null(bitmap, 19));
        append_key(&mut builders[20], row.manager_id, is_null(bitmap, 20));
        append_str(&mut builders[21], &row.product_name, is_null(bitmap, 21));
    }
}

struct CallCenterSource {
    schema: Schema,
    gen: CallCenterRowGenerator,
    current_row: i64,
}

impl RowSource for CallCenterSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        builders[0].append_i64(row.call_center_sk);
        builders[1].append_str(&row.call_center_id);
        append_rec_date(&mut builders[2], row.rec_start_date, is_null(bitmap, 2));
        append_rec_date(&mut builders[3], row.rec_end_date, is_null(bitmap, 3));
        append_date_key(&mut builders[4], row.closed_date_sk, is_null(bitmap, 4));
        append_date_key(&mut builders[5], row.open_date_sk, is_null(bitmap, 5));
        append_str(&mut builders[6], &row.name, is_null(bitmap, 6));
        append_str(&mut builders[7], &row.class, is_null(bitmap, 7));
        append_i32(&mut builders[8], row.employees, is_null(bitmap, 8));
        append_i32(&mut builders[9], row.sq_ft, is_null(bitmap, 9));
        append_str(&mut builders[10], &row.hours, is_null(bitmap, 10));
        append_str(&mut builders[11], &row.manager, is_null(bitmap, 11));
        append_i32(&mut builders[12], row.market_id, is_null(bitmap, 12));
        append_str(&mut builders[13], &row.market_class, is_null(bitmap, 13));
        append_str(&mut builders[14], &row.market_desc, is_null(bitmap, 14));
        append_str(&mut builders[15], &row.market_manager, is_null(bitmap, 15));
        append_i32(&mut builders[16], row.division_id, is_null(bitmap, 16));
        append_str(&mut builders[17], &row.division_name, is_null(bitmap, 17));
        append_i32(&mut builders[18], row.company_id, is_null(bitmap, 18));
        append_str(&mut builders[19], &row.company_name, is_null(bitmap, 19));
        append_address(builders, 20, &row.address, bitmap, 20);
        append_decimal(&mut builders[30], row.tax_percentage, is_null(bitmap, 30));
    }
}

struct WebSiteSource {
    schema: Schema,
    gen: WebSiteRowGenerator,
    current_row: i64,
}

impl RowSource for WebSiteSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        builders[0].append_i64(row.site_sk);
        builders[1].append_str(&row.site_id);
        append_rec_date(&mut builders[2], row.rec_start_date, is_null(bitmap, 2));
        append_rec_date(&mut builders[3], row.rec_end_date, is_null(bitmap, 3));
        append_str(&mut builders[4], &row.name, is_null(bitmap, 4));
        append_date_key(&mut builders[5], row.open_date_sk, is_null(bitmap, 5));
        append_date_key(&mut builders[6], row.close_date_sk, is_null(bitmap, 6));
        append_str(&mut builders[7], &row.class, is_null(bitmap, 7));
        append_str(&mut builders[8], &row.manager, is_null(bitmap, 8));
        append_i32(&mut builders[9], row.market_id, is_null(bitmap, 9));
        append_str(&mut builders[10], &row.market_class, is_null(bitmap, 10));
        append_str(&mut builders[11], &row.market_desc, is_null(bitmap, 11));
        append_str(&mut builders[12], &row.market_manager, is_null(bitmap, 12));
        append_i32(&mut builders[13], row.company_id, is_null(bitmap, 13));
        append_str(&mut builders[14], &row.company_name, is_null(bitmap, 14));
        append_address(builders, 15, &row.address, bitmap, 15);
        append_decimal(&mut builders[25], row.tax_percentage, is_null(bitmap, 25));
    }
}

struct WebPageSource {
    schema: Schema,
    gen: WebPageRowGenerator,
    current_row: i64,
}

impl RowSource for WebPageSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        builders[0].append_i64(row.page_sk);
        builders[1].append_str(&row.page_id);
        append_rec_date(&mut builders[2], row.rec_start_date, is_null(bitmap, 2));
        append_rec_date(&mut builders[3], row.rec_end_date, is_null(bitmap, 3));
        append_date_key(&mut builders[4], row.creation_date_sk, is_null(bitmap, 4));
        append_date_key(&mut builders[5], row.access_date_sk, is_null(bitmap, 5));
        append_bool(&mut builders[6], row.autogen_flag, is_null(bitmap, 6));
        append_key(&mut builders[7], row.customer_sk, is_null(bitmap, 7));
        append_str(&mut builders[8], &row.url, is_null(bitmap, 8));
        append_str(&mut builders[9], &row.page_type, is_null(bitmap, 9));
        append_i32(&mut builders[10], row.char_count, is_null(bitmap, 10));
        append_i32(&mut builders[11], row.link_count, is_null(bitmap, 11));
        append_i32(&mut builders[12], row.image_count, is_null(bitmap, 12));
        append_i32(&mut builders[13], row.max_ad_count, is_null(bitmap, 13));
    }
}

struct InventorySource {
    schema: Schema,
    gen: InventoryRowGenerator,
    current_row: i64,
}

impl RowSource for InventorySource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        builders[0].append_i32(row.date_sk as i32);
        builders[1].append_i64(row.item_sk);
        builders[2].append_i64(row.warehouse_sk);
        append_i32(&mut builders[3], row.quantity_on_hand, is_null(bitmap, 3));
    }
}

struct StoreSalesSource {
    schema: Schema,
    gen: StoreSalesRowGenerator,
    current_order: i64,
}

impl RowSource for StoreSalesSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.current_order = self.gen.skip_rows(rows);
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        let row = self.gen.generate_row(self.current_order + 1);
        self.gen.consume_remaining_seeds_for_row();
        if self.gen.last_row_in_ticket() {
            self.current_order += 1;
        }
        let bitmap = row.null_bitmap;
        append_date_key(&mut builders[0], row.sold_date_sk, is_null(bitmap, 0));
        append_date_key(&mut builders[1], row.sold_time_sk, is_null(bitmap, 1));
        builders[2].append_i64(row.sold_item_sk);
        append_key(&mut builders[3], row.sold_customer_sk, is_null(bitmap, 3));
        append_key(&mut builders[4], row.sold_cdemo_sk, is_null(bitmap, 4));
        append_key(&mut builders[5], row.sold_hdemo_sk, is_null(bitmap, 5));
        append_key(&mut builders[6], row.sold_addr_sk, is_null(bitmap, 6));
        append_key(&mut builders[7], row.sold_store_sk, is_null(bitmap, 7));
        append_key(&mut builders[8], row.sold_promo_sk, is_null(bitmap, 8));
        builders[9].append_i64(row.ticket_number);
        append_store_pricing(builders, 10, &row.pricing);
        builders[20].append_decimal(row.pricing.net_paid);
        builders[21].append_decimal(row.pricing.net_paid_inc_tax);
        builders[22].append_decimal(row.pricing.net_profit);
    }
}

struct StoreReturnsSource {
    schema: Schema,
    gen: StoreReturnsRowGenerator,
    current_row: i64,
}

impl RowSource for StoreReturnsSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        append_date_key(&mut builders[0], row.returned_date_sk, is_null(bitmap, 0));
        append_date_key(&mut builders[1], row.returned_time_sk, is_null(bitmap, 1));
        builders[2].append_i64(row.item_sk);
        append_key(&mut builders[3], row.customer_sk, is_null(bitmap, 3));
        append_key(&mut builders[4], row.cdemo_sk, is_null(bitmap, 4));
        append_key(&mut builders[5], row.hdemo_sk, is_null(bitmap, 5));
        append_key(&mut builders[6], row.addr_sk, is_null(bitmap, 6));
        append_key(&mut builders[7], row.store_sk, is_null(bitmap, 7));
        append_key(&mut builders[8], row.reason_sk, is_null(bitmap, 8));
        builders[9].append_i64(row.ticket_number);
        builders[10].append_i32(row.pricing.quantity as i32);
        builders[11].append_decimal(row.pricing.net_paid);
        builders[12].append_decimal(row.pricing.ext_tax);
        builders[13].append_decimal(row.pricing.net_paid_inc_tax);
        builders[14].append_decimal(row.pricing.fee);
        builders[15].append_decimal(row.pricing.ext_ship_cost);
        builders[16].append_decimal(row.pricing.refunded_cash);
        builders[17].append_decimal(row.pricing.reversed_charge);
        builders[18].append_decimal(row.pricing.store_credit);
        builders[19].append_decimal(row.pricing.net_loss);
    }
}

struct CatalogSalesSource {
    schema: Schema,
    gen: CatalogSalesRowGenerator,
    current_order: i64,
}

impl RowSource for CatalogSalesSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.current_order = self.gen.skip_rows(rows);
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        let row = self.gen.generate_row(self.current_order + 1);
        self.gen.consume_remaining_seeds_for_row();
        if self.gen.last_row_in_order() {
            self.current_order += 1;
        }
        let bitmap = row.null_bitmap;
        append_date_key(&mut builders[0], row.sold_date_sk, is_null(bitmap, 0));
        append_date_key(&mut builders[1], row.sold_time_sk, is_null(bitmap, 1));
        append_date_key(&mut builders[2], row.ship_date_sk, is_null(bitmap, 2));
        append_key(&mut builders[3], row.bill_customer_sk, is_null(bitmap, 3));
        append_key(&mut builders[4], row.bill_cdemo_sk, is_null(bitmap, 4));
        append_key(&mut builders[5], row.bill_hdemo_sk, is_null(bitmap, 5));
        append_key(&mut builders[6], row.bill_addr_sk, is_null(bitmap, 6));
        append_key(&mut builders[7], row.ship_customer_sk, is_null(bitmap, 7));
        append_key(&mut builders[8], row.ship_cdemo_sk, is_null(bitmap, 8));
        append_key(&mut builders[9], row.ship_hdemo_sk, is_null(bitmap, 9));
        append_key(&mut builders[10], row.ship_addr_sk, is_null(bitmap, 10));
        append_key(&mut builders[11], row.call_center_sk, is_null(bitmap, 11));
        append_key(&mut builders[12], row.catalog_page_sk, is_null(bitmap, 12));
        append_key(&mut builders[13], row.ship_mode_sk, is_null(bitmap, 13));
        append_key(&mut builders[14], row.warehouse_sk, is_null(bitmap, 14));
        builders[15].append_i64(row.sold_item_sk);
        append_key(&mut builders[16], row.promo_sk, is_null(bitmap, 16));
        builders[17].append_i64(row.order_number);
        append_store_pricing(builders, 18, &row.pricing);
        builders[28].append_decimal(row.pricing.ext_ship_cost);
        builders[29].append_decimal(row.pricing.net_paid);
        builders[30].append_decimal(row.pricing.net_paid_inc_tax);
        builders[31].append_decimal(row.pricing.net_paid_inc_ship);
        builders[32].append_decimal(row.pricing.net_paid_inc_ship_tax);
        builders[33].append_decimal(row.pricing.net_profit);
    }
}

struct CatalogReturnsSource {
    schema: Schema,
    gen: CatalogReturnsRowGenerator,
    current_row: i64,
}

impl RowSource for CatalogReturnsSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        append_date_key(&mut builders[0], row.returned_date_sk, is_null(bitmap, 0));
        append_date_key(&mut builders[1], row.returned_time_sk, is_null(bitmap, 1));
        builders[2].append_i64(row.item_sk);
        append_key(&mut builders[3], row.refunded_customer_sk, is_null(bitmap, 3));
        append_key(&mut builders[4], row.refunded_cdemo_sk, is_null(bitmap, 4));
        append_key(&mut builders[5], row.refunded_hdemo_sk, is_null(bitmap, 5));
        append_key(&mut builders[6], row.refunded_addr_sk, is_null(bitmap, 6));
        append_key(&mut builders[7], row.returning_customer_sk, is_null(bitmap, 7));
        append_key(&mut builders[8], row.returning_cdemo_sk, is_null(bitmap, 8));
        append_key(&mut builders[9], row.returning_hdemo_sk, is_null(bitmap, 9));
        append_key(&mut builders[10], row.returning_addr_sk, is_null(bitmap, 10));
        append_key(&mut builders[11], row.call_center_sk, is_null(bitmap, 11));
        append_key(&mut builders[12], row.catalog_page_sk, is_null(bitmap, 12));
        append_key(&mut builders[13], row.ship_mode_sk, is_null(bitmap, 13));
        append_key(&mut builders[14], row.warehouse_sk, is_null(bitmap, 14));
        append_key(&mut builders[15], row.reason_sk, is_null(bitmap, 15));
        builders[16].append_i64(row.order_number);
        builders[17].append_i32(row.pricing.quantity as i32);
        builders[18].append_decimal(row.pricing.net_paid);
        builders[19].append_decimal(row.pricing.ext_tax);
        builders[20].append_decimal(row.pricing.net_paid_inc_tax);
        builders[21].append_decimal(row.pricing.fee);
        builders[22].append_decimal(row.pricing.ext_ship_cost);
        builders[23].append_decimal(row.pricing.refunded_cash);
        builders[24].append_decimal(row.pricing.reversed_charge);
        builders[25].append_decimal(row.pricing.store_credit);
        builders[26].append_decimal(row.pricing.net_loss);
    }
}

struct WebSalesSource {
    schema: Schema,
    gen: WebSalesRowGenerator,
    current_order: i64,
}

impl RowSource for WebSalesSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.current_order = self.gen.skip_rows(rows);
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        let row = self.gen.generate_row(self.current_order + 1);
        self.gen.consume_remaining_seeds_for_row();
        if self.gen.last_row_in_order() {
            self.current_order += 1;
        }
        let bitmap = row.null_bitmap;
        append_date_key(&mut builders[0], row.sold_date_sk, is_null(bitmap, 0));
        append_date_key(&mut builders[1], row.sold_time_sk, is_null(bitmap, 1));
        append_date_key(&mut builders[2], row.ship_date_sk, is_null(bitmap, 2));
        builders[3].append_i64(row.item_sk);
        append_key(&mut builders[4], row.bill_customer_sk, is_null(bitmap, 4));
        append_key(&mut builders[5], row.bill_cdemo_sk, is_null(bitmap, 5));
        append_key(&mut builders[6], row.bill_hdemo_sk, is_null(bitmap, 6));
        append_key(&mut builders[7], row.bill_addr_sk, is_null(bitmap, 7));
        append_key(&mut builders[8], row.ship_customer_sk, is_null(bitmap, 8));
        append_key(&mut builders[9], row.ship_cdemo_sk, is_null(bitmap, 9));
        append_key(&mut builders[10], row.ship_hdemo_sk, is_null(bitmap, 10));
        append_key(&mut builders[11], row.ship_addr_sk, is_null(bitmap, 11));
        append_key(&mut builders[12], row.web_page_sk, is_null(bitmap, 12));
        append_key(&mut builders[13], row.web_site_sk, is_null(bitmap, 13));
        append_key(&mut builders[14], row.ship_mode_sk, is_null(bitmap, 14));
        append_key(&mut builders[15], row.warehouse_sk, is_null(bitmap, 15));
        append_key(&mut builders[16], row.promo_sk, is_null(bitmap, 16));
        builders[17].append_i64(row.order_number);
        append_store_pricing(builders, 18, &row.pricing);
        builders[28].append_decimal(row.pricing.ext_ship_cost);
        builders[29].append_decimal(row.pricing.net_paid);
        builders[30].append_decimal(row.pricing.net_paid_inc_tax);
        builders[31].append_decimal(row.pricing.net_paid_inc_ship);
        builders[32].append_decimal(row.pricing.net_paid_inc_ship_tax);
        builders[33].append_decimal(row.pricing.net_profit);
    }
}

struct WebReturnsSource {
    schema: Schema,
    gen: WebReturnsRowGenerator,
    current_row: i64,
}

impl RowSource for WebReturnsSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
        self.current_row += rows;
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        self.current_row += 1;
        let row = self.gen.generate_row(self.current_row);
        self.gen.consume_remaining_seeds_for_row();
        let bitmap = row.null_bitmap;
        append_date_key(&mut builders[0], row.returned_date_sk, is_null(bitmap, 0));
        append_date_key(&mut builders[1], row.returned_time_sk, is_null(bitmap, 1));
        builders[2].append_i64(row.item_sk);
        append_key(&mut builders[3], row.refunded_customer_sk, is_null(bitmap, 3));
        append_key(&mut builders[4], row.refunded_cdemo_sk, is_null(bitmap, 4));
        append_key(&mut builders[5], row.refunded_hdemo_sk, is_null(bitmap, 5));
        append_key(&mut builders[6], row.refunded_addr_sk, is_null(bitmap, 6));
        append_key(&mut builders[7], row.returning_customer_sk, is_null(bitmap, 7));
        append_key(&mut builders[8], row.returning_cdemo_sk, is_null(bitmap, 8));
        append_key(&mut builders[9], row.returning_hdemo_sk, is_null(bitmap, 9));
        append_key(&mut builders[10], row.returning_addr_sk, is_null(bitmap, 10));
        append_key(&mut builders[11], row.web_page_sk, is_null(bitmap, 11));
        append_key(&mut builders[12], row.reason_sk, is_null(bitmap, 12));
        builders[13].append_i64(row.order_number);
        builders[14].append_i32(row.pricing.quantity as i32);
        builders[15].append_decimal(row.pricing.net_paid);
        builders[16].append_decimal(row.pricing.ext_tax);
        builders[17].append_decimal(row.pricing.net_paid_inc_tax);
        builders[18].append_decimal(row.pricing.fee);
        builders[19].append_decimal(row.pricing.ext_ship_cost);
        builders[20].append_decimal(row.pricing.refunded_cash);
        builders[21].append_decimal(row.pricing.reversed_charge);
        builders[22].append_decimal(row.pricing.store_credit);
        builders[23].append_decimal(row.pricing.net_loss);
    }
}

/// Builds the [RowSource] for a TPC-DS table name.
pub fn new_source(table: &str, options: &GeneratorOptions) -> Result<Box<dyn RowSource>> {
    let sf = options.scale_factor;
    Ok(match table {
        "customer_address" => Box::new(CustomerAddressSource {
            schema: Schema::new(vec![
                Field::required("ca_address_sk", ColumnType::Int64),
                Field::required("ca_address_id", ColumnType::Utf8),
                Field::new("ca_street_number", ColumnType::Int32),
                Field::new("ca_street_name", ColumnType::Utf8),
                Field::new("ca_street_type", ColumnType::Utf8),
                Field::new("ca_suite_number", ColumnType::Utf8),
                Field::new("ca_city", ColumnType::Utf8),
                Field::new("ca_county", ColumnType::Utf8),
                Field::new("ca_state", ColumnType::Utf8),
                Field::new("ca_zip", ColumnType::Utf8),
                Field::new("ca_country", ColumnType::Utf8),
                Field::new("ca_gmt_offset", ColumnType::Int32),
                Field::new("ca_location_type", ColumnType::Utf8),
            ]),
            gen: CustomerAddressRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "customer" => Box::new(CustomerSource {
            schema: Schema::new(vec![
                Field::required("c_customer_sk", ColumnType::Int64),
                Field::required("c_customer_id", ColumnType::Utf8),
                Field::new("c_current_cdemo_sk", ColumnType::Int64),
                Field::new("c_current_hdemo_sk", ColumnType::Int64),
                Field::new("c_current_addr_sk", ColumnType::Int64),
                Field::new("c_first_shipto_date_sk", ColumnType::Int32),
                Field::new("c_first_sales_date_sk", ColumnType::Int32),
                Field::new("c_salutation", ColumnType::Utf8),
                Field::new("c_first_name", ColumnType::Utf8),
                Field::new("c_last_name", ColumnType::Utf8),
                Field::new("c_preferred_cust_flag", ColumnType::Boolean),
                Field::new("c_birth_day", ColumnType::Int32),
                Field::new("c_birth_month", ColumnType::Int32),
                Field::new("c_birth_year", ColumnType::Int32),
                Field::new("c_birth_country", ColumnType::Utf8),
                Field::new("c_login", ColumnType::Utf8),
                Field::new("c_email_address", ColumnType::Utf8),
                Field::new("c_last_review_date_sk", ColumnType::Int32),
            ]),
            gen: CustomerRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "customer_demographics" => Box::new(CustomerDemographicsSource {
            schema: Schema::new(vec![
                Field::required("cd_demo_sk", ColumnType::Int64),
                Field::new("cd_gender", ColumnType::Utf8),
                Field::new("cd_marital_status", ColumnType::Utf8),
                Field::new("cd_education_status", ColumnType::Utf8),
                Field::new("cd_purchase_estimate", ColumnType::Int32),
                Field::new("cd_credit_rating", ColumnType::Utf8),
                Field::new("cd_dep_count", ColumnType::Int32),
                Field::new("cd_dep_employed_count", ColumnType::Int32),
                Field::new("cd_dep_college_count", ColumnType::Int32),
            ]),
            gen: CustomerDemographicsRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "household_demographics" => Box::new(HouseholdDemographicsSource {
            schema: Schema::new(vec![
                Field::required("hd_demo_sk", ColumnType::Int64),
                Field::new("hd_income_band_sk", ColumnType::Int64),
                Field::new("hd_buy_potential", ColumnType::Utf8),
                Field::new("hd_dep_count", ColumnType::Int32),
                Field::new("hd_vehicle_count", ColumnType::Int32),
            ]),
            gen: HouseholdDemographicsRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "income_band" => Box::new(IncomeBandSource {
            schema: Schema::new(vec![
                Field::required("ib_income_band_sk", ColumnType::Int64),
                Field::new("ib_lower_bound", ColumnType::Int32),
                Field::new("ib_upper_bound", ColumnType::Int32),
            ]),
            gen: IncomeBandRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "reason" => Box::new(ReasonSource {
            schema: Schema::new(vec![
                Field::required("r_reason_sk", ColumnType::Int64),
                Field::required("r_reason_id", ColumnType::Utf8),
                Field::new("r_reason_desc", ColumnType::Utf8),
            ]),
            gen: ReasonRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "ship_mode" => Box::new(ShipModeSource {
            schema: Schema::new(vec![
                Field::required("sm_ship_mode_sk", ColumnType::Int64),
                Field::required("sm_ship_mode_id", ColumnType::Utf8),
                Field::new("sm_type", ColumnType::Utf8),
                Field::new("sm_code", ColumnType::Utf8),
                Field::new("sm_carrier", ColumnType::Utf8),
                Field::new("sm_contract", ColumnType::Utf8),
            ]),
            gen: ShipModeRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "time_dim" => Box::new(TimeDimSource {
            schema: Schema::new(vec![
                Field::required("t_time_sk", ColumnType::Int64),
                Field::required("t_time_id", ColumnType::Utf8),
                Field::new("t_time", ColumnType::Int32),
                Field::new("t_hour", ColumnType::Int32),
                Field::new("t_minute", ColumnType::Int32),
                Field::new("t_second", ColumnType::Int32),
                Field::new("t_am_pm", ColumnType::Utf8),
                Field::new("t_shift", ColumnType::Utf8),
                Field::new("t_sub_shift", ColumnType::Utf8),
                Field::new("t_meal_time", ColumnType::Utf8),
            ]),
            gen: TimeDimRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "warehouse" => {
            let mut fields = vec![
                Field::required("w_warehouse_sk", ColumnType::Int64),
                Field::required("w_warehouse_id", ColumnType::Utf8),
                Field::new("w_warehouse_name", ColumnType::Utf8),
                Field::new("w_warehouse_sq_ft", ColumnType::Int32),
            ];
            fields.extend(address_fields!("w_"));
            Box::new(WarehouseSource {
                schema: Schema::new(fields),
                gen: WarehouseRowGenerator::new(sf)?,
                current_row: 0,
            })
        }
        "promotion" => Box::new(PromotionSource {
            schema: Schema::new(vec![
                Field::required("p_promo_sk", ColumnType::Int64),
                Field::required("p_promo_id", ColumnType::Utf8),
                Field::new("p_start_date_sk", ColumnType::Int32),
                Field::new("p_end_date_sk", ColumnType::Int32),
                Field::new("p_item_sk", ColumnType::Int64),
                Field::new("p_cost", ColumnType::Decimal(9)),
                Field::new("p_response_target", ColumnType::Int32),
                Field::new("p_promo_name", ColumnType::Utf8),
                Field::new("p_channel_dmail", ColumnType::Boolean),
                Field::new("p_channel_email", ColumnType::Boolean),
                Field::new("p_channel_catalog", ColumnType::Boolean),
                Field::new("p_channel_tv", ColumnType::Boolean),
                Field::new("p_channel_radio", ColumnType::Boolean),
                Field::new("p_channel_press", ColumnType::Boolean),
                Field::new("p_channel_event", ColumnType::Boolean),
                Field::new("p_channel_demo", ColumnType::Boolean),
                Field::new("p_channel_details", ColumnType::Utf8),
                Field::new("p_purpose", ColumnType::Utf8),
                Field::new("p_discount_active", ColumnType::Boolean),
            ]),
            gen: PromotionRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "catalog_page" => Box::new(CatalogPageSource {
            schema: Schema::new(vec![
                Field::required("cp_catalog_page_sk", ColumnType::Int64),
                Field::required("cp_catalog_page_id", ColumnType::Utf8),
                Field::new("cp_start_date_sk", ColumnType::Int32),
                Field::new("cp_end_date_sk", ColumnType::Int32),
                Field::new("cp_department", ColumnType::Utf8),
                Field::new("cp_catalog_number", ColumnType::Int32),
                Field::new("cp_catalog_page_number", ColumnType::Int32),
                Field::new("cp_description", ColumnType::Utf8),
                Field::new("cp_type", ColumnType::Utf8),
            ]),
            gen: CatalogPageRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "store" => {
            let mut fields = vec![
                Field::required("s_store_sk", ColumnType::Int64),
                Field::required("s_store_id", ColumnType::Utf8),
                Field::new("s_rec_start_date", ColumnType::Date32),
                Field::new("s_rec_end_date", ColumnType::Date32),
                Field::new("s_closed_date_sk", ColumnType::Int32),
                Field::new("s_store_name", ColumnType::Utf8),
                Field::new("s_number_employees", ColumnType::Int32),
                Field::new("s_floor_space", ColumnType::Int32),
                Field::new("s_hours", ColumnType::Utf8),
                Field::new("s_manager", ColumnType::Utf8),
                Field::new("s_market_id", ColumnType::Int32),
                Field::new("s_geography_class", ColumnType::Utf8),
                Field::new("s_market_desc", ColumnType::Utf8),
                Field::new("s_market_manager", ColumnType::Utf8),
                Field::new("s_division_id", ColumnType::Int32),
                Field::new("s_division_name", ColumnType::Utf8),
                Field::new("s_company_id", ColumnType::Int32),
                Field::new("s_company_name", ColumnType::Utf8),
            ];
            fields.extend(address_fields!("s_"));
            fields.push(Field::new("s_tax_precentage", ColumnType::Decimal(5)));
            Box::new(StoreSource {
                schema: Schema::new(fields),
                gen: StoreRowGenerator::new(sf)?,
                current_row: 0,
            })
        }
        "item" => Box::new(ItemSource {
            schema: Schema::new(vec![
                Field::required("i_item_sk", ColumnType::Int64),
                Field::required("i_item_id", ColumnType::Utf8),
                Field::new("i_rec_start_date", ColumnType::Date32),
                Field::new("i_rec_end_date", ColumnType::Date32),
                Field::new("i_item_desc", ColumnType::Utf8),
                Field::new("i_current_price", ColumnType::Decimal(7)),
                Field::new("i_wholesale_cost", ColumnType::Decimal(7)),
                Field::new("i_brand_id", ColumnType::Int64),
                Field::new("i_brand", ColumnType::Utf8),
                Field::new("i_class_id", ColumnType::Int64),
                Field::new("i_class", ColumnType::Utf8),
                Field::new("i_category_id", ColumnType::Int64),
                Field::new("i_category", ColumnType::Utf8),
                Field::new("i_manufact_id", ColumnType::Int64),
                Field::new("i_manufact", ColumnType::Utf8),
                Field::new("i_size", ColumnType::Utf8),
                Field::new("i_formulation", ColumnType::Utf8),
                Field::new("i_color", ColumnType::Utf8),
                Field::new("i_units", ColumnType::Utf8),
                Field::new("i_container", ColumnType::Utf8),
                Field::new("i_manager_id", ColumnType::Int64),
                Field::new("i_product_name", ColumnType::Utf8),
            ]),
            gen: ItemRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "call_center" => {
            let mut fields = vec![
                Field::required("cc_call_center_sk", ColumnType::Int64),
                Field::required("cc_call_center_id", ColumnType::Utf8),
                Field::new("cc_rec_start_date", ColumnType::Date32),
                Field::new("cc_rec_end_date", ColumnType::Date32),
                Field::new("cc_closed_date_sk", ColumnType::Int32),
                Field::new("cc_open_date_sk", ColumnType::Int32),
                Field::new("cc_name", ColumnType::Utf8),
                Field::new("cc_class", ColumnType::Utf8),
                Field::new("cc_employees", ColumnType::Int32),
                Field::new("cc_sq_ft", ColumnType::Int32),
                Field::new("cc_hours", ColumnType::Utf8),
                Field::new("cc_manager", ColumnType::Utf8),
                Field::new("cc_mkt_id", ColumnType::Int32),
                Field::new("cc_mkt_class", ColumnType::Utf8),
                Field::new("cc_mkt_desc", ColumnType::Utf8),
                Field::new("cc_market_manager", ColumnType::Utf8),
                Field::new("cc_division", ColumnType::Int32),
                Field::new("cc_division_name", ColumnType::Utf8),
                Field::new("cc_company", ColumnType::Int32),
                Field::new("cc_company_name", ColumnType::Utf8),
            ];
            fields.extend(address_fields!("cc_"));
            fields.push(Field::new("cc_tax_percentage", ColumnType::Decimal(5)));
            Box::new(CallCenterSource {
                schema: Schema::new(fields),
                gen: CallCenterRowGenerator::new(sf)?,
                current_row: 0,
            })
        }
        "web_site" => {
            let mut fields = vec![
                Field::required("web_site_sk", ColumnType::Int64),
                Field::required("web_site_id", ColumnType::Utf8),
                Field::new("web_rec_start_date", ColumnType::Date32),
                Field::new("web_rec_end_date", ColumnType::Date32),
                Field::new("web_name", ColumnType::Utf8),
                Field::new("web_open_date_sk", ColumnType::Int32),
                Field::new("web_close_date_sk", ColumnType::Int32),
                Field::new("web_class", ColumnType::Utf8),
                Field::new("web_manager", ColumnType::Utf8),
                Field::new("web_mkt_id", ColumnType::Int32),
                Field::new("web_mkt_class", ColumnType::Utf8),
                Field::new("web_mkt_desc", ColumnType::Utf8),
                Field::new("web_market_manager", ColumnType::Utf8),
                Field::new("web_company_id", ColumnType::Int32),
                Field::new("web_company_name", ColumnType::Utf8),
            ];
            fields.extend(address_fields!("web_"));
            fields.push(Field::new("web_tax_percentage", ColumnType::Decimal(5)));
            Box::new(WebSiteSource {
                schema: Schema::new(fields),
                gen: WebSiteRowGenerator::new(sf)?,
                current_row: 0,
            })
        }
        "web_page" => Box::new(WebPageSource {
            schema: Schema::new(vec![
                Field::required("wp_web_page_sk", ColumnType::Int64),
                Field::required("wp_web_page_id", ColumnType::Utf8),
                Field::new("wp_rec_start_date", ColumnType::Date32),
                Field::new("wp_rec_end_date", ColumnType::Date32),
                Field::new("wp_creation_date_sk", ColumnType::Int32),
                Field::new("wp_access_date_sk", ColumnType::Int32),
                Field::new("wp_autogen_flag", ColumnType::Boolean),
                Field::new("wp_customer_sk", ColumnType::Int64),
                Field::new("wp_url", ColumnType::Utf8),
                Field::new("wp_type", ColumnType::Utf8),
                Field::new("wp_char_count", ColumnType::Int32),
                Field::new("wp_link_count", ColumnType::Int32),
                Field::new("wp_image_count", ColumnType::Int32),
                Field::new("wp_max_ad_count", ColumnType::Int32),
            ]),
            gen: WebPageRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "inventory" => Box::new(InventorySource {
            schema: Schema::new(vec![
                Field::required("inv_date_sk", ColumnType::Int32),
                Field::required("inv_item_sk", ColumnType::Int64),
                Field::required("inv_warehouse_sk", ColumnType::Int64),
                Field::new("inv_quantity_on_hand", ColumnType::Int32),
            ]),
            gen: InventoryRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "store_sales" => {
            let mut fields = vec![
                Field::new("ss_sold_date_sk", ColumnType::Int32),
                Field::new("ss_sold_time_sk", ColumnType::Int32),
                Field::required("ss_item_sk", ColumnType::Int64),
                Field::new("ss_customer_sk", ColumnType::Int64),
                Field::new("ss_cdemo_sk", ColumnType::Int64),
                Field::new("ss_hdemo_sk", ColumnType::Int64),
                Field::new("ss_addr_sk", ColumnType::Int64),
                Field::new("ss_store_sk", ColumnType::Int64),
                Field::new("ss_promo_sk", ColumnType::Int64),
                Field::required("ss_ticket_number", ColumnType::Int64),
            ];
            fields.extend(pricing_fields!("ss_"));
            fields.push(Field::new("ss_net_paid", ColumnType::Decimal(7)));
            fields.push(Field::new("ss_net_paid_inc_tax", ColumnType::Decimal(7)));
            fields.push(Field::new("ss_net_profit", ColumnType::Decimal(7)));
            Box::new(StoreSalesSource {
                schema: Schema::new(fields),
                gen: StoreSalesRowGenerator::new(sf)?,
                current_order: 0,
            })
        }
        "store_returns" => Box::new(StoreReturnsSource {
            schema: Schema::new(vec![
                Field::new("sr_returned_date_sk", ColumnType::Int32),
                Field::new("sr_return_time_sk", ColumnType::Int32),
                Field::required("sr_item_sk", ColumnType::Int64),
                Field::new("sr_customer_sk", ColumnType::Int64),
                Field::new("sr_cdemo_sk", ColumnType::Int64),
                Field::new("sr_hdemo_sk", ColumnType::Int64),
                Field::new("sr_addr_sk", ColumnType::Int64),
                Field::new("sr_store_sk", ColumnType::Int64),
                Field::new("sr_reason_sk", ColumnType::Int64),
                Field::required("sr_ticket_number", ColumnType::Int64),
                Field::new("sr_return_quantity", ColumnType::Int32),
                Field::new("sr_return_amt", ColumnType::Decimal(7)),
                Field::new("sr_return_tax", ColumnType::Decimal(7)),
                Field::new("sr_return_amt_inc_tax", ColumnType::Decimal(7)),
                Field::new("sr_fee", ColumnType::Decimal(7)),
                Field::new("sr_return_ship_cost", ColumnType::Decimal(7)),
                Field::new("sr_refunded_cash", ColumnType::Decimal(7)),
                Field::new("sr_reversed_charge", ColumnType::Decimal(7)),
                Field::new("sr_store_credit", ColumnType::Decimal(7)),
                Field::new("sr_net_loss", ColumnType::Decimal(7)),
            ]),
            gen: StoreReturnsRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "catalog_sales" => {
            let mut fields = vec![
                Field::new("cs_sold_date_sk", ColumnType::Int32),
                Field::new("cs_sold_time_sk", ColumnType::Int32),
                Field::new("cs_ship_date_sk", ColumnType::Int32),
                Field::new("cs_bill_customer_sk", ColumnType::Int64),
                Field::new("cs_bill_cdemo_sk", ColumnType::Int64),
                Field::new("cs_bill_hdemo_sk", ColumnType::Int64),
                Field::new("cs_bill_addr_sk", ColumnType::Int64),
                Field::new("cs_ship_customer_sk", ColumnType::Int64),
                Field::new("cs_ship_cdemo_sk", ColumnType::Int64),
                Field::new("cs_ship_hdemo_sk", ColumnType::Int64),
                Field::new("cs_ship_addr_sk", ColumnType::Int64),
                Field::new("cs_call_center_sk", ColumnType::Int64),
                Field::new("cs_catalog_page_sk", ColumnType::Int64),
                Field::new("cs_ship_mode_sk", ColumnType::Int64),
                Field::new("cs_warehouse_sk", ColumnType::Int64),
                Field::required("cs_item_sk", ColumnType::Int64),
                Field::new("cs_promo_sk", ColumnType::Int64),
                Field::required("cs_order_number", ColumnType::Int64),
            ];
            fields.extend(pricing_fields!("cs_"));
            fields.push(Field::new("cs_ext_ship_cost", ColumnType::Decimal(7)));
            fields.push(Field::new("cs_net_paid", ColumnType::Decimal(7)));
            fields.push(Field::new("cs_net_paid_inc_tax", ColumnType::Decimal(7)));
            fields.push(Field::new("cs_net_paid_inc_ship", ColumnType::Decimal(7)));
            fields.push(Field::new("cs_net_paid_inc_ship_tax", ColumnType::Decimal(7)));
            fields.push(Field::new("cs_net_profit", ColumnType::Decimal(7)));
            Box::new(CatalogSalesSource {
                schema: Schema::new(fields),
                gen: CatalogSalesRowGenerator::new(sf)?,
                current_order: 0,
            })
        }
        "catalog_returns" => Box::new(CatalogReturnsSource {
            schema: Schema::new(vec![
                Field::new("cr_returned_date_sk", ColumnType::Int32),
                Field::new("cr_returned_time_sk", ColumnType::Int32),
                Field::required("cr_item_sk", ColumnType::Int64),
                Field::new("cr_refunded_customer_sk", ColumnType::Int64),
                Field::new("cr_refunded_cdemo_sk", ColumnType::Int64),
                Field::new("cr_refunded_hdemo_sk", ColumnType::Int64),
                Field::new("cr_refunded_addr_sk", ColumnType::Int64),
                Field::new("cr_returning_customer_sk", ColumnType::Int64),
                Field::new("cr_returning_cdemo_sk", ColumnType::Int64),
                Field::new("cr_returning_hdemo_sk", ColumnType::Int64),
                Field::new("cr_returning_addr_sk", ColumnType::Int64),
                Field::new("cr_call_center_sk", ColumnType::Int64),
                Field::new("cr_catalog_page_sk", ColumnType::Int64),
                Field::new("cr_ship_mode_sk", ColumnType::Int64),
                Field::new("cr_warehouse_sk", ColumnType::Int64),
                Field::new("cr_reason_sk", ColumnType::Int64),
                Field::required("cr_order_number", ColumnType::Int64),
                Field::new("cr_return_quantity", ColumnType::Int32),
                Field::new("cr_return_amount", ColumnType::Decimal(7)),
                Field::new("cr_return_tax", ColumnType::Decimal(7)),
                Field::new("cr_return_amt_inc_tax", ColumnType::Decimal(7)),
                Field::new("cr_fee", ColumnType::Decimal(7)),
                Field::new("cr_return_ship_cost", ColumnType::Decimal(7)),
                Field::new("cr_refunded_cash", ColumnType::Decimal(7)),
                Field::new("cr_reversed_charge", ColumnType::Decimal(7)),
                Field::new("cr_store_credit", ColumnType::Decimal(7)),
                Field::new("cr_net_loss", ColumnType::Decimal(7)),
            ]),
            gen: CatalogReturnsRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "web_sales" => {
            let mut fields = vec![
                Field::new("ws_sold_date_sk", ColumnType::Int32),
                Field::new("ws_sold_time_sk", ColumnType::Int32),
                Field::new("ws_ship_date_sk", ColumnType::Int32),
                Field::required("ws_item_sk", ColumnType::Int64),
                Field::new("ws_bill_customer_sk", ColumnType::Int64),
                Field::new("ws_bill_cdemo_sk", ColumnType::Int64),
                Field::new("ws_bill_hdemo_sk", ColumnType::Int64),
                Field::new("ws_bill_addr_sk", ColumnType::Int64),
                Field::new("ws_ship_customer_sk", ColumnType::Int64),
                Field::new("ws_ship_cdemo_sk", ColumnType::Int64),
                Field::new("ws_ship_hdemo_sk", ColumnType::Int64),
                Field::new("ws_ship_addr_sk", ColumnType::Int64),
                Field::new("ws_web_page_sk", ColumnType::Int64),
                Field::new("ws_web_site_sk", ColumnType::Int64),
                Field::new("ws_ship_mode_sk", ColumnType::Int64),
                Field::new("ws_warehouse_sk", ColumnType::Int64),
                Field::new("ws_promo_sk", ColumnType::Int64),
                Field::required("ws_order_number", ColumnType::Int64),
            ];
            fields.extend(pricing_fields!("ws_"));
            fields.push(Field::new("ws_ext_ship_cost", ColumnType::Decimal(7)));
            fields.push(Field::new("ws_net_paid", ColumnType::Decimal(7)));
            fields.push(Field::new("ws_net_paid_inc_tax", ColumnType::Decimal(7)));
            fields.push(Field::new("ws_net_paid_inc_ship", ColumnType::Decimal(7)));
            fields.push(Field::new("ws_net_paid_inc_ship_tax", ColumnType::Decimal(7)));
            fields.push(Field::new("ws_net_profit", ColumnType::Decimal(7)));
            Box::new(WebSalesSource {
                schema: Schema::new(fields),
                gen: WebSalesRowGenerator::new(sf)?,
                current_order: 0,
            })
        }
        "web_returns" => Box::new(WebReturnsSource {
            schema: Schema::new(vec![
                Field::new("wr_returned_date_sk", ColumnType::Int32),
                Field::new("wr_returned_time_sk", ColumnType::Int32),
                Field::required("wr_item_sk", ColumnType::Int64),
                Field::new("wr_refunded_customer_sk", ColumnType::Int64),
                Field::new("wr_refunded_cdemo_sk", ColumnType::Int64),
                Field::new("wr_refunded_hdemo_sk", ColumnType::Int64),
                Field::new("wr_refunded_addr_sk", ColumnType::Int64),
                Field::new("wr_returning_customer_sk", ColumnType::Int64),
                Field::new("wr_returning_cdemo_sk", ColumnType::Int64),
                Field::new("wr_returning_hdemo_sk", ColumnType::Int64),
                Field::new("wr_returning_addr_sk", ColumnType::Int64),
                Field::new("wr_web_page_sk", ColumnType::Int64),
                Field::new("wr_reason_sk", ColumnType::Int64),
                Field::required("wr_order_number", ColumnType::Int64),
                Field::new("wr_return_quantity", ColumnType::Int32),
                Field::new("wr_return_amt", ColumnType::Decimal(7)),
                Field::new("wr_return_tax", ColumnType::Decimal(7)),
                Field::new("wr_return_amt_inc_tax", ColumnType::Decimal(7)),
                Field::new("wr_fee", ColumnType::Decimal(7)),
                Field::new("wr_return_ship_cost", ColumnType::Decimal(7)),
                Field::new("wr_refunded_cash", ColumnType::Decimal(7)),
                Field::new("wr_reversed_charge", ColumnType::Decimal(7)),
                Field::new("wr_store_credit", ColumnType::Decimal(7)),
                Field::new("wr_net_loss", ColumnType::Decimal(7)),
            ]),
            gen: WebReturnsRowGenerator::new(sf)?,
            current_row: 0,
        }),
        other => return Err(Error::invalid(format!("unknown tpcds table: {other}"))),
    })
}
