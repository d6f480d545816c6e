// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! SSB row generators: customer, supplier, part, date, lineorder.

use crate::error::Result;
use crate::ssb::constants::*;
use crate::ssb::random::{
    skip_customer, skip_line, skip_order, skip_part, skip_supplier, StreamBank,
};
use crate::ssb::scaling::{row_count, TableId};
use crate::tpch::constants::MAX_LONG;
use crate::tpch::context;
use crate::tpch::dates::order_date_max;
use crate::tpch::distribution::Distribution;
use crate::tpch::utils::retail_price;
use crate::tpch::TpchContext;

const ALPHA_NUM: &[u8; 64] = b"0123456789abcdefghijklmnopqrstuvwxyz ABCDEFGHIJKLMNOPQRSTUVWXYZ,";

fn random_string(mut min_len: i64, mut max_len: i64, stream: usize, bank: &mut StreamBank) -> String {
    if min_len > max_len {
        std::mem::swap(&mut min_len, &mut max_len);
    }
    let length = bank.random_int(min_len, max_len, stream).max(0);
    let mut out = String::with_capacity(length as usize);
    let mut char_int: i64 = 0;
    for i in 0..length {
        if i % 5 == 0 {
            char_int = bank.random_int(0, MAX_LONG, stream);
        }
        out.push(ALPHA_NUM[(char_int & 0o77) as usize] as char);
        char_int >>= 6;
    }
    out
}

fn variable_string(avg_len: i64, stream: usize, bank: &mut StreamBank) -> String {
    let min_len = (avg_len as f64 * V_STR_LOW) as i64;
    let max_len = (avg_len as f64 * V_STR_HIGH) as i64;
    random_string(min_len, max_len, stream, bank)
}

fn pick_string(dist: &Distribution, stream: usize, bank: &mut StreamBank) -> String {
    if dist.list.is_empty() || dist.max <= 0 {
        return String::new();
    }
    let pick = bank.random_int(1, dist.max, stream);
    let mut index = 0;
    while dist.list[index].weight < pick {
        index += 1;
    }
    dist.list[index].text.clone()
}

fn agg_string(dist: &Distribution, count: i32, stream: usize, bank: &mut StreamBank) -> String {
    let dist_size = dist.list.len();
    let count = (count as usize).min(dist_size);
    let mut permute: Vec<usize> = (0..dist_size).collect();
    for i in 0..dist_size {
        let source = bank.random_int(i as i64, dist_size as i64 - 1, stream) as usize;
        permute.swap(i, source);
    }
    let mut result = String::new();
    for (i, index) in permute.iter().take(count).enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push_str(&dist.list[*index].text);
    }
    result
}

fn generate_phone(nation_index: i64, stream: usize, bank: &mut StreamBank) -> String {
    let acode = bank.random_int(100, 999, stream);
    let exchg = bank.random_int(100, 999, stream);
    let number = bank.random_int(1000, 9999, stream);
    format!("{:02}-{acode:03}-{exchg:03}-{number:04}", 10 + nation_index % NATIONS_MAX)
}

// A city is the nation name cut or padded to nine characters plus one drawn
// digit; the digit comes through stream 98, which the bank lands on stream 0.
fn generate_city(nation_name: &str, bank: &mut StreamBank) -> String {
    let digit = bank.random_int(0, 9, CITY_SD);
    let mut city = String::with_capacity(CITY_FIX);
    for c in nation_name.chars().take(CITY_FIX - 1) {
        city.push(c);
    }
    while city.len() < CITY_FIX - 1 {
        city.push(' ');
    }
    city.push(char::from_digit(digit as u32, 10).unwrap_or('0'));
    city
}

/// One SSB customer row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerRow {
    pub custkey: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub nation_key: i64,
    pub nation_name: String,
    pub region_key: i64,
    pub region_name: String,
    pub phone: String,
    pub mktsegment: String,
}

pub struct CustomerRowGenerator {
    ctx: &'static TpchContext,
    bank: StreamBank,
    total_rows: i64,
}

impl CustomerRowGenerator {
    pub fn new(scale_factor: f64) -> Result<CustomerRowGenerator> {
        Ok(CustomerRowGenerator {
            ctx: context()?,
            bank: StreamBank::new(),
            total_rows: row_count(TableId::Customer, scale_factor),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.total_rows
    }

    pub fn skip_rows(&mut self, rows: i64) {
        skip_customer(&mut self.bank, rows);
    }

    pub fn generate_row(&mut self, row_number: i64) -> CustomerRow {
        let bank = &mut self.bank;
        bank.row_start();

        let mut row = CustomerRow {
            custkey: row_number,
            name: format!("{C_NAME_TAG}{row_number:09}"),
            ..Default::default()
        };
        row.address = variable_string(C_ADDR_LEN, C_ADDR_SD, bank);

        let nations = &self.ctx.dists.nations;
        let nation_index = bank.random_int(0, nations.len() as i64 - 1, C_NTRG_SD);
        let nation = &nations.list[nation_index as usize];
        row.nation_key = nation_index;
        row.nation_name = nation.text.clone();
        row.region_key = nation.weight;
        row.region_name = self.ctx.dists.regions.list[nation.weight as usize].text.clone();
        row.city = generate_city(&row.nation_name, bank);

        row.phone = generate_phone(nation_index, C_PHNE_SD, bank);
        row.mktsegment = pick_string(&self.ctx.dists.msegmnt, C_MSEG_SD, bank);

        bank.row_stop(SsbTable::Cust);
        row
    }
}

/// One SSB supplier row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupplierRow {
    pub suppkey: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub nation_key: i64,
    pub nation_name: String,
    pub region_key: i64,
    pub region_name: String,
    pub phone: String,
}

pub struct SupplierRowGenerator {
    ctx: &'static TpchContext,
    bank: StreamBank,
    total_rows: i64,
}

impl SupplierRowGenerator {
    pub fn new(scale_factor: f64) -> Result<SupplierRowGenerator> {
        Ok(SupplierRowGenerator {
            ctx: context()?,
            bank: StreamBank::new(),
            total_rows: row_count(TableId::Supplier, scale_factor),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.total_rows
    }

    pub fn skip_rows(&mut self, rows: i64) {
        skip_supplier(&mut self.bank, rows);
    }

    pub fn generate_row(&mut self, row_number: i64) -> SupplierRow {
        let bank = &mut self.bank;
        bank.row_start();

        let mut row = SupplierRow {
            suppkey: row_number,
            name: format!("{S_NAME_TAG}{row_number:09}"),
            ..Default::default()
        };
        row.address = variable_string(S_ADDR_LEN, S_ADDR_SD, bank);

        let nations = &self.ctx.dists.nations;
        let nation_index = bank.random_int(0, nations.len() as i64 - 1, S_NTRG_SD);
        let nation = &nations.list[nation_index as usize];
        row.nation_key = nation_index;
        row.nation_name = nation.text.clone();
        row.region_key = nation.weight;
        row.region_name = self.ctx.dists.regions.list[nation.weight as usize].text.clone();
        row.city = generate_city(&row.nation_name, bank);

        // The phone shares the customer phone stream.
        row.phone = generate_phone(nation_index, C_PHNE_SD, bank);

        bank.row_stop(SsbTable::Supp);
        row
    }
}

/// One SSB part row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartRow {
    pub partkey: i64,
    pub name: String,
    pub mfgr: String,
    pub category: String,
    pub brand: String,
    pub color: String,
    pub type_name: String,
    pub size: i32,
    pub container: String,
}

pub struct PartRowGenerator {
    ctx: &'static TpchContext,
    bank: StreamBank,
    total_rows: i64,
}

impl PartRowGenerator {
    pub fn new(scale_factor: f64) -> Result<PartRowGenerator> {
        Ok(PartRowGenerator {
            ctx: context()?,
            bank: StreamBank::new(),
            total_rows: row_count(TableId::Part, scale_factor),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.total_rows
    }

    pub fn skip_rows(&mut self, rows: i64) {
        skip_part(&mut self.bank, rows);
    }

    pub fn generate_row(&mut self, row_number: i64) -> PartRow {
        let bank = &mut self.bank;
        bank.row_start();

        let mut row = PartRow { partkey: row_number, ..Default::default() };
        row.name = agg_string(&self.ctx.dists.colors, P_NAME_SCL, P_NAME_SD, bank);
        row.color = row.name.split(' ').next().unwrap_or_default().to_string();

        let mfgr = bank.random_int(P_MFG_MIN, P_MFG_MAX, P_MFG_SD);
        row.mfgr = format!("{P_MFG_TAG}{mfgr}");

        // The category digit draws through stream 97, landing on stream 0.
        let category = bank.random_int(P_CAT_MIN, P_CAT_MAX, P_CAT_SD);
        row.category = format!("{}{category}", row.mfgr);

        let brand = bank.random_int(P_BRND_MIN, P_BRND_MAX, P_BRND_SD);
        row.brand = format!("{}{brand}", row.category);

        row.type_name = pick_string(&self.ctx.dists.p_types, P_TYPE_SD, bank);
        row.size = bank.random_int(P_SIZE_MIN, P_SIZE_MAX, P_SIZE_SD) as i32;
        row.container = pick_string(&self.ctx.dists.p_cntr, P_CNTR_SD, bank);

        bank.row_stop(SsbTable::Part);
        row
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

// Month/day pairs flagged as holidays.
const HOLIDAYS: [(u32, u32); 10] = [
    (1, 1),
    (2, 14),
    (5, 31),
    (7, 4),
    (9, 5),
    (11, 11),
    (11, 25),
    (12, 24),
    (12, 25),
    (12, 31),
];

fn month_days(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if crate::tpch::dates::is_leap_year(year - 1900) {
                29
            } else {
                28
            }
        }
    }
}

fn selling_season(month: u32) -> &'static str {
    match month {
        1..=3 => "Winter",
        4 | 5 => "Spring",
        6..=8 => "Summer",
        9 | 10 => "Fall",
        _ => "Christmas",
    }
}

/// One SSB date row; fully deterministic from the row number.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DateRow {
    pub datekey: i64,
    pub date: String,
    pub dayofweek: String,
    pub month: String,
    pub year: i32,
    pub yearmonthnum: i32,
    pub yearmonth: String,
    pub daynuminweek: i32,
    pub daynuminmonth: i32,
    pub daynuminyear: i32,
    pub monthnuminyear: i32,
    pub weeknuminyear: i32,
    pub sellingseason: String,
    pub lastdayinweekfl: bool,
    pub lastdayinmonthfl: bool,
    pub holidayfl: bool,
    pub weekdayfl: bool,
}

/// Generates date rows for the window starting 1992-01-01.
pub struct DateRowGenerator {
    total_rows: i64,
}

impl DateRowGenerator {
    pub fn new(scale_factor: f64) -> Result<DateRowGenerator> {
        Ok(DateRowGenerator { total_rows: row_count(TableId::Date, scale_factor) })
    }

    pub fn total_rows(&self) -> i64 {
        self.total_rows
    }

    pub fn skip_rows(&mut self, _rows: i64) {}

    pub fn generate_row(&self, row_number: i64) -> DateRow {
        // Walk the calendar from 1992-01-01.
        let mut year: i64 = 92;
        let mut month: u32 = 1;
        let mut day: u32 = 1;
        let mut day_in_year: i32 = 1;
        for _ in 1..row_number {
            day += 1;
            day_in_year += 1;
            if day > month_days(year + 1900, month) {
                day = 1;
                month += 1;
            }
            if month > 12 {
                month = 1;
                year += 1;
                day_in_year = 1;
            }
        }
        let civil_year = (year + 1900) as i32;

        // 1992-01-01 was a Wednesday; day numbers run Sunday=1..Saturday=7.
        let dow = (((row_number - 1) + 3) % 7 + 1) as i32;
        let dow_jan1 = (((row_number - 1 - (day_in_year as i64 - 1)) + 3) % 7 + 1) as i32;

        DateRow {
            datekey: civil_year as i64 * 10_000 + month as i64 * 100 + day as i64,
            date: format!("{} {}, {}", MONTH_NAMES[(month - 1) as usize], day, civil_year),
            dayofweek: DAY_NAMES[(dow - 1) as usize].to_string(),
            month: MONTH_NAMES[(month - 1) as usize].to_string(),
            year: civil_year,
            yearmonthnum: civil_year * 100 + month as i32,
            yearmonth: format!("{}{}", &MONTH_NAMES[(month - 1) as usize][..3], civil_year),
            daynuminweek: dow,
            daynuminmonth: day as i32,
            daynuminyear: day_in_year,
            monthnuminyear: month as i32,
            weeknuminyear: (day_in_year - 1 + dow_jan1 - 1) / 7 + 1,
            sellingseason: selling_season(month).to_string(),
            lastdayinweekfl: dow == 7,
            lastdayinmonthfl: day == month_days(year + 1900, month),
            holidayfl: HOLIDAYS.contains(&(month, day)),
            weekdayfl: (2..=6).contains(&dow),
        }
    }
}

/// One lineorder row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineorderRow {
    pub orderkey: i64,
    pub linenumber: i32,
    pub custkey: i64,
    pub partkey: i64,
    pub suppkey: i64,
    pub orderdate: String,
    pub orderpriority: String,
    pub shippriority: i32,
    pub quantity: i64,
    pub extendedprice: i64,
    pub ordertotalprice: i64,
    pub discount: i64,
    pub revenue: i64,
    pub supplycost: i64,
    pub tax: i64,
    pub commitdate: String,
    pub shipmode: String,
}

struct OrderScratch {
    lines: Vec<LineorderRow>,
}

/// Emits lineorder rows, 1-7 per order, sharing the order header.
pub struct LineorderRowGenerator {
    ctx: &'static TpchContext,
    bank: StreamBank,
    total_rows: i64,
    customer_count: i64,
    part_count: i64,
    supplier_count: i64,
    max_clerk: i64,
    current_order: i64,
    buffered: Option<OrderScratch>,
    line_cursor: usize,
}

impl LineorderRowGenerator {
    pub fn new(scale_factor: f64) -> Result<LineorderRowGenerator> {
        let scale = if scale_factor < 1.0 { 1 } else { scale_factor as i64 };
        Ok(LineorderRowGenerator {
            ctx: context()?,
            bank: StreamBank::new(),
            total_rows: row_count(TableId::Lineorder, scale_factor),
            customer_count: row_count(TableId::Customer, scale_factor),
            part_count: row_count(TableId::Part, scale_factor),
            supplier_count: row_count(TableId::Supplier, scale_factor),
            max_clerk: (scale * O_CLRK_SCL).max(O_CLRK_SCL),
            current_order: 0,
            buffered: None,
            line_cursor: 0,
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.total_rows
    }

    fn generate_order(&mut self, order_number: i64) -> OrderScratch {
        let bank = &mut self.bank;
        bank.row_start();

        let orderkey = crate::tpch::utils::make_sparse_key(order_number, 0);

        let mut custkey = bank.random_int(1, self.customer_count, O_CKEY_SD);
        let mut delta = 1;
        while custkey % CUSTOMER_MORTALITY == 0 {
            custkey += delta;
            custkey = custkey.min(self.customer_count);
            delta *= -1;
        }

        let odate = bank.random_int(START_DATE, order_date_max(), O_ODATE_SD);
        let orderdate = self.ctx.asc_date[(odate - START_DATE) as usize].clone();
        let orderpriority = pick_string(&self.ctx.dists.o_priority, O_PRIO_SD, bank);
        let clerk_num = bank.random_int(1, self.max_clerk, O_CLRK_SD);
        let _clerk = format!("{O_CLRK_TAG}{clerk_num:09}");

        let line_count = bank.random_int(O_LCNT_MIN, O_LCNT_MAX, O_LCNT_SD);
        let mut lines = Vec::with_capacity(line_count as usize);
        let mut totalprice = 0;
        for linenumber in 1..=line_count {
            let mut line = LineorderRow {
                orderkey,
                linenumber: linenumber as i32,
                custkey,
                orderdate: orderdate.clone(),
                orderpriority: orderpriority.clone(),
                shippriority: 0,
                ..Default::default()
            };
            line.quantity = bank.random_int(L_QTY_MIN, L_QTY_MAX, L_QTY_SD);
            line.discount = bank.random_int(L_DCNT_MIN, L_DCNT_MAX, L_DCNT_SD);
            line.tax = bank.random_int(L_TAX_MIN, L_TAX_MAX, L_TAX_SD);
            line.shipmode = pick_string(&self.ctx.dists.smode, L_SMODE_SD, bank);
            line.partkey = bank.random_int(1, self.part_count, L_PKEY_SD);
            line.suppkey = bank.random_int(1, self.supplier_count, L_SKEY_SD);

            let rprice = retail_price(line.partkey);
            line.extendedprice = rprice * line.quantity;
            line.revenue = line.extendedprice * (PENNIES - line.discount) / PENNIES;
            line.supplycost = 6 * rprice / 10;

            let cdate = odate + bank.random_int(L_CDTE_MIN, L_CDTE_MAX, L_CDTE_SD);
            line.commitdate = self.ctx.asc_date[(cdate - START_DATE) as usize].clone();

            totalprice += (line.extendedprice * (PENNIES - line.discount) / PENNIES)
                * (PENNIES + line.tax)
                / PENNIES;
            lines.push(line);
        }
        for line in &mut lines {
            line.ordertotalprice = totalprice;
        }

        bank.row_stop(SsbTable::Order);
        OrderScratch { lines }
    }

    pub fn skip_rows(&mut self, mut rows: i64) {
        while rows > 0 {
            if let Some(order) = &self.buffered {
                let remaining = order.lines.len() as i64 - self.line_cursor as i64;
                if rows < remaining {
                    self.line_cursor += rows as usize;
                    return;
                }
                rows -= remaining;
                self.buffered = None;
                self.line_cursor = 0;
                continue;
            }
            let line_count = self.bank.peek_random_int(O_LCNT_MIN, O_LCNT_MAX, O_LCNT_SD);
            if line_count <= rows {
                skip_order(&mut self.bank, 1);
                skip_line(&mut self.bank, 1, false);
                self.current_order += 1;
                rows -= line_count;
            } else {
                let order = self.generate_order(self.current_order + 1);
                self.current_order += 1;
                self.line_cursor = rows as usize;
                self.buffered = Some(order);
                return;
            }
        }
    }

    pub fn next_row(&mut self) -> LineorderRow {
        loop {
            if let Some(order) = &self.buffered {
                if self.line_cursor < order.lines.len() {
                    let line = order.lines[self.line_cursor].clone();
                    self.line_cursor += 1;
                    return line;
                }
                self.buffered = None;
                self.line_cursor = 0;
            }
            let order = self.generate_order(self.current_order + 1);
            self.current_order += 1;
            self.line_cursor = 0;
            self.buffered = Some(order);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_skip_equals_sequential() {
        let mut sequential = CustomerRowGenerator::new(1.0).unwrap();
        for i in 0..6 {
            sequential.generate_row(i + 1);
        }
        let expected = sequential.generate_row(7);

        let mut skipped = CustomerRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(6);
        assert_eq!(skipped.generate_row(7), expected);
    }

    #[test]
    fn supplier_skip_equals_sequential() {
        let mut sequential = SupplierRowGenerator::new(1.0).unwrap();
        for i in 0..6 {
            sequential.generate_row(i + 1);
        }
        let expected = sequential.generate_row(7);

        let mut skipped = SupplierRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(6);
        assert_eq!(skipped.generate_row(7), expected);
    }

    #[test]
    fn part_skip_equals_sequential() {
        let mut sequential = PartRowGenerator::new(1.0).unwrap();
        for i in 0..8 {
            sequential.generate_row(i + 1);
        }
        let expected = sequential.generate_row(9);

        let mut skipped = PartRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(8);
        assert_eq!(skipped.generate_row(9), expected);
    }

    #[test]
    fn city_is_nation_prefix_plus_digit() {
        let mut customers = CustomerRowGenerator::new(1.0).unwrap();
        for i in 1..=32 {
            let row = customers.generate_row(i);
            assert_eq!(row.city.len(), CITY_FIX);
            let prefix: String = row.nation_name.chars().take(9).collect();
            assert!(row.city.starts_with(prefix.trim_end()));
            assert!(row.city.ends_with(|c: char| c.is_ascii_digit()));
        }
    }

    #[test]
    fn brand_nests_in_category_and_mfgr() {
        let mut parts = PartRowGenerator::new(1.0).unwrap();
        for i in 1..=32 {
            let row = parts.generate_row(i);
            assert!(row.category.starts_with(&row.mfgr));
            assert!(row.brand.starts_with(&row.category));
            assert!(row.name.split(' ').next().unwrap() == row.color);
        }
    }

    #[test]
    fn date_rows_walk_the_calendar() {
        let dates = DateRowGenerator::new(1.0).unwrap();
        let first = dates.generate_row(1);
        assert_eq!(first.datekey, 19_920_101);
        assert_eq!(first.date, "January 1, 1992");
        assert_eq!(first.dayofweek, "Wednesday");
        assert_eq!(first.daynuminweek, 4);
        assert!(first.holidayfl);

        let leap = dates.generate_row(60);
        assert_eq!(leap.datekey, 19_920_229);
        assert_eq!(leap.lastdayinmonthfl, true);

        let last = dates.generate_row(dates.total_rows());
        assert_eq!(last.year, 1998);
    }

    #[test]
    fn lineorder_skip_crosses_orders() {
        let mut sequential = LineorderRowGenerator::new(1.0).unwrap();
        let mut all = Vec::new();
        for _ in 0..20 {
            all.push(sequential.next_row());
        }

        let mut skipped = LineorderRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(9);
        for expected in all.iter().skip(9) {
            assert_eq!(&skipped.next_row(), expected);
        }
    }

    #[test]
    fn revenue_follows_discount() {
        let mut lineorders = LineorderRowGenerator::new(1.0).unwrap();
        for _ in 0..32 {
            let row = lineorders.next_row();
            assert_eq!(row.revenue, row.extendedprice * (100 - row.discount) / 100);
            assert_eq!(row.supplycost, 6 * retail_price(row.partkey) / 10);
        }
    }
}
