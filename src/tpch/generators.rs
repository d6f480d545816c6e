// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! The eight TPC-H row generators.
//!
//! Every generator follows the same per-row discipline: `row_start`, draws in
//! dbgen's column order, `row_stop(table)` so unused boundary budget is
//! advanced. Skipping uses the closed-form advances in [crate::tpch::random];
//! the stateful partsupp and lineitem generators additionally reconstruct
//! their cursors by replaying whole parent rows at the window edge.

use crate::error::Result;
use crate::tpch::constants::*;
use crate::tpch::context;
use crate::tpch::dates::{julian_date, order_date_max};
use crate::tpch::random::{
    skip_customer, skip_line, skip_order, skip_part, skip_part_supp, skip_supplier, StreamBank,
};
use crate::tpch::scaling::{row_count, TableId};
use crate::tpch::text::generate_text;
use crate::tpch::utils::{
    agg_string, format_tag_number, generate_phone, make_sparse_key, part_supp_bridge, pick_string,
    retail_price, variable_string,
};
use crate::tpch::TpchContext;

/// One customer row. Monetary values are in pennies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerRow {
    pub custkey: i64,
    pub name: String,
    pub address: String,
    pub nationkey: i64,
    pub phone: String,
    pub acctbal: i64,
    pub mktsegment: String,
    pub comment: String,
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
            name: format_tag_number(C_NAME_TAG, 9, row_number),
            ..Default::default()
        };
        row.address = variable_string(C_ADDRESS_LEN as i64, C_ADDR_SD, bank);

        let nations = &self.ctx.dists.nations;
        let nation_index = if nations.is_empty() {
            0
        } else {
            bank.random_int(0, nations.len() as i64 - 1, C_NTRG_SD)
        };
        row.nationkey = nation_index;
        row.phone = generate_phone(nation_index, C_PHNE_SD, bank);

        row.acctbal = bank.random_int(C_ABAL_MIN, C_ABAL_MAX, C_ABAL_SD);
        pick_string(&self.ctx.dists.msegmnt, C_MSEG_SD, bank, &mut row.mktsegment);
        row.comment = generate_text(C_COMMENT_LEN, C_CMNT_SD, bank, &self.ctx.dists);

        bank.row_stop(DbgenTable::Customer);
        row
    }
}

/// One supplier row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupplierRow {
    pub suppkey: i64,
    pub name: String,
    pub address: String,
    pub nationkey: i64,
    pub phone: String,
    pub acctbal: i64,
    pub comment: String,
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
            name: format_tag_number(S_NAME_TAG, 9, row_number),
            ..Default::default()
        };
        row.address = variable_string(S_ADDRESS_LEN as i64, S_ADDR_SD, bank);

        let nations = &self.ctx.dists.nations;
        let nation_index = if nations.is_empty() {
            0
        } else {
            bank.random_int(0, nations.len() as i64 - 1, S_NTRG_SD)
        };
        row.nationkey = nation_index;
        row.phone = generate_phone(nation_index, S_PHNE_SD, bank);

        row.acctbal = bank.random_int(S_ABAL_MIN, S_ABAL_MAX, S_ABAL_SD);
        row.comment = generate_text(S_COMMENT_LEN, S_CMNT_SD, bank, &self.ctx.dists);

        // A few suppliers get a Better Business Bureau note patched into the
        // comment: "Customer ...Complaints" or "Customer ...Recommends".
        let bad_press = bank.random_int(1, 10_000, BBB_CMNT_SD);
        let kind = bank.random_int(0, 100, BBB_TYPE_SD);
        let comment_len = row.comment.len() as i64;
        let noise = bank.random_int(0, comment_len - BBB_COMMENT_LEN, BBB_JNK_SD);
        let offset = bank.random_int(0, comment_len - (BBB_COMMENT_LEN + noise), BBB_OFFSET_SD);
        if bad_press <= S_COMMENT_BBB {
            let type_text = if kind < BBB_DEADBEATS { BBB_COMPLAIN } else { BBB_COMMEND };
            let offset = offset as usize;
            row.comment.replace_range(offset..offset + BBB_BASE_LEN as usize, BBB_BASE);
            let type_at = offset + (BBB_BASE_LEN + noise) as usize;
            row.comment.replace_range(type_at..type_at + BBB_TYPE_LEN as usize, type_text);
        }

        bank.row_stop(DbgenTable::Supplier);
        row
    }
}

/// One part row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartRow {
    pub partkey: i64,
    pub name: String,
    pub mfgr: String,
    pub brand: String,
    pub type_name: String,
    pub size: i32,
    pub container: String,
    pub retailprice: i64,
    pub comment: String,
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
        skip_part_supp(&mut self.bank, rows);
    }

    pub fn generate_row(&mut self, row_number: i64) -> PartRow {
        let bank = &mut self.bank;
        bank.row_start();

        let mut row = PartRow { partkey: row_number, ..Default::default() };
        row.name = agg_string(&self.ctx.dists.colors, P_NAME_SCL, P_NAME_SD, bank);

        let mfgr = bank.random_int(P_MFG_MIN, P_MFG_MAX, P_MFG_SD);
        row.mfgr = format_tag_number(P_MFG_TAG, 1, mfgr);

        let brnd = bank.random_int(P_BRND_MIN, P_BRND_MAX, P_BRND_SD);
        row.brand = format_tag_number(P_BRND_TAG, 2, mfgr * 10 + brnd);

        pick_string(&self.ctx.dists.p_types, P_TYPE_SD, bank, &mut row.type_name);
        row.size = bank.random_int(P_SIZE_MIN, P_SIZE_MAX, P_SIZE_SD) as i32;
        pick_string(&self.ctx.dists.p_cntr, P_CNTR_SD, bank, &mut row.container);

        row.retailprice = retail_price(row.partkey);
        row.comment = generate_text(P_COMMENT_LEN, P_CMNT_SD, bank, &self.ctx.dists);

        bank.row_stop(DbgenTable::Part);
        row
    }
}

/// One partsupp row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartSuppRow {
    pub partkey: i64,
    pub suppkey: i64,
    pub availqty: i32,
    pub supplycost: i64,
    pub comment: String,
}

/// Emits `SUPP_PER_PART` rows per part; the stream-bank row boundary is the
/// part, not the emitted row.
pub struct PartSuppRowGenerator {
    ctx: &'static TpchContext,
    bank: StreamBank,
    total_parts: i64,
    total_rows: i64,
    supplier_count: i64,
    current_part_index: i64,
    current_supp_index: i64,
    has_part: bool,
}

impl PartSuppRowGenerator {
    pub fn new(scale_factor: f64) -> Result<PartSuppRowGenerator> {
        let total_parts = row_count(TableId::Part, scale_factor);
        Ok(PartSuppRowGenerator {
            ctx: context()?,
            bank: StreamBank::new(),
            total_parts,
            total_rows: total_parts * SUPP_PER_PART,
            supplier_count: row_count(TableId::Supplier, scale_factor),
            current_part_index: 1,
            current_supp_index: 0,
            has_part: false,
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.total_rows
    }

    fn load_part(&mut self) {
        self.bank.row_start();
        self.has_part = true;
        self.current_supp_index = 0;
    }

    pub fn skip_rows(&mut self, mut rows: i64) {
        while rows > 0 && self.current_part_index <= self.total_parts {
            if !self.has_part {
                self.load_part();
            }
            let remaining = SUPP_PER_PART - self.current_supp_index;
            if rows < remaining {
                for _ in 0..rows {
                    self.bank.random_int(PS_QTY_MIN, PS_QTY_MAX, PS_QTY_SD);
                    self.bank.random_int(PS_SCOST_MIN, PS_SCOST_MAX, PS_SCST_SD);
                    let _ = generate_text(PS_COMMENT_LEN, PS_CMNT_SD, &mut self.bank, &self.ctx.dists);
                    self.current_supp_index += 1;
                }
                return;
            }
            for _ in self.current_supp_index..SUPP_PER_PART {
                self.bank.random_int(PS_QTY_MIN, PS_QTY_MAX, PS_QTY_SD);
                self.bank.random_int(PS_SCOST_MIN, PS_SCOST_MAX, PS_SCST_SD);
                let _ = generate_text(PS_COMMENT_LEN, PS_CMNT_SD, &mut self.bank, &self.ctx.dists);
            }
            rows -= remaining;
            self.bank.row_stop(DbgenTable::PartSupp);
            self.has_part = false;
            self.current_part_index += 1;
            self.current_supp_index = 0;
        }
    }

    pub fn next_row(&mut self) -> Option<PartSuppRow> {
        while self.current_part_index <= self.total_parts {
            if !self.has_part {
                self.load_part();
            }
            if self.current_supp_index < SUPP_PER_PART {
                let supp_index = self.current_supp_index;
                let row = PartSuppRow {
                    partkey: self.current_part_index,
                    suppkey: part_supp_bridge(
                        self.current_part_index,
                        supp_index,
                        self.supplier_count,
                    ),
                    availqty: self.bank.random_int(PS_QTY_MIN, PS_QTY_MAX, PS_QTY_SD) as i32,
                    supplycost: self.bank.random_int(PS_SCOST_MIN, PS_SCOST_MAX, PS_SCST_SD),
                    comment: generate_text(
                        PS_COMMENT_LEN,
                        PS_CMNT_SD,
                        &mut self.bank,
                        &self.ctx.dists,
                    ),
                };
                self.current_supp_index += 1;
                if self.current_supp_index >= SUPP_PER_PART {
                    self.bank.row_stop(DbgenTable::PartSupp);
                    self.has_part = false;
                    self.current_part_index += 1;
                    self.current_supp_index = 0;
                }
                return Some(row);
            }
            self.bank.row_stop(DbgenTable::PartSupp);
            self.has_part = false;
            self.current_part_index += 1;
            self.current_supp_index = 0;
        }
        None
    }
}

/// One lineitem, as generated inside its order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineItemRow {
    pub orderkey: i64,
    pub partkey: i64,
    pub suppkey: i64,
    pub linenumber: i32,
    pub quantity: i64,
    pub extendedprice: i64,
    pub discount: i64,
    pub tax: i64,
    pub returnflag: char,
    pub linestatus: char,
    /// Dense day index into the data window (0 = 1992-01-01).
    pub shipdate: i64,
    pub commitdate: i64,
    pub receiptdate: i64,
    pub shipinstruct: String,
    pub shipmode: String,
    pub comment: String,
}

/// One order plus the lineitems drawn with it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderRow {
    pub orderkey: i64,
    pub custkey: i64,
    pub orderstatus: char,
    pub totalprice: i64,
    /// Dense day index into the data window.
    pub orderdate: i64,
    pub orderpriority: String,
    pub clerk: String,
    pub shippriority: i32,
    pub comment: String,
    pub line_count: i32,
    pub lines: Vec<LineItemRow>,
}

pub struct OrdersRowGenerator {
    ctx: &'static TpchContext,
    bank: StreamBank,
    total_rows: i64,
    part_count: i64,
    supplier_count: i64,
    customer_count: i64,
    max_clerk: i64,
}

impl OrdersRowGenerator {
    pub fn new(scale_factor: f64) -> Result<OrdersRowGenerator> {
        let scale = if scale_factor < 1.0 { 1 } else { scale_factor as i64 };
        Ok(OrdersRowGenerator {
            ctx: context()?,
            bank: StreamBank::new(),
            total_rows: row_count(TableId::Orders, scale_factor),
            part_count: row_count(TableId::Part, scale_factor),
            supplier_count: row_count(TableId::Supplier, scale_factor),
            customer_count: row_count(TableId::Customer, scale_factor),
            max_clerk: (scale * O_CLERK_SCALE).max(O_CLERK_SCALE),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.total_rows
    }

    pub fn skip_rows(&mut self, rows: i64) {
        skip_order(&mut self.bank, rows);
        skip_line(&mut self.bank, rows, false);
    }

    /// The line count the next row will draw, without consuming it.
    pub fn peek_line_count(&self) -> i32 {
        self.bank.peek_random_int(O_LCNT_MIN, O_LCNT_MAX, O_LCNT_SD) as i32
    }

    pub fn generate_row(&mut self, row_number: i64) -> OrderRow {
        let bank = &mut self.bank;
        bank.row_start();

        let mut row = OrderRow {
            orderkey: make_sparse_key(row_number, 0),
            orderstatus: 'O',
            ..Default::default()
        };

        // Every third customer places no orders; walk off the mortality
        // residue while staying in range.
        let mut custkey = bank.random_int(1, self.customer_count, O_CKEY_SD);
        let mut delta = 1;
        while custkey % CUSTOMER_MORTALITY == 0 {
            custkey += delta;
            custkey = custkey.min(self.customer_count);
            delta *= -1;
        }
        row.custkey = custkey;

        let tmp_date = bank.random_int(START_DATE, order_date_max(), O_ODATE_SD);
        row.orderdate = tmp_date - START_DATE;

        pick_string(&self.ctx.dists.o_priority, O_PRIO_SD, bank, &mut row.orderpriority);

        let clerk_num = bank.random_int(1, self.max_clerk, O_CLRK_SD);
        row.clerk = format_tag_number(O_CLERK_TAG, 9, clerk_num);

        row.comment = generate_text(O_COMMENT_LEN, O_CMNT_SD, bank, &self.ctx.dists);

        let line_count = bank.random_int(O_LCNT_MIN, O_LCNT_MAX, O_LCNT_SD) as i32;
        row.line_count = line_count;
        row.lines.reserve(line_count as usize);

        let mut shipped_lines = 0;
        for lcnt in 0..line_count {
            let mut line = LineItemRow {
                orderkey: row.orderkey,
                linenumber: lcnt + 1,
                returnflag: 'N',
                linestatus: 'O',
                ..Default::default()
            };
            line.partkey = bank.random_int(1, self.part_count, L_PKEY_SD);
            let supp_index = bank.random_int(0, SUPP_PER_PART - 1, L_SKEY_SD);
            line.suppkey = part_supp_bridge(line.partkey, supp_index, self.supplier_count);

            line.quantity = bank.random_int(L_QTY_MIN, L_QTY_MAX, L_QTY_SD);
            line.discount = bank.random_int(L_DISC_MIN, L_DISC_MAX, L_DCNT_SD);
            line.tax = bank.random_int(L_TAX_MIN, L_TAX_MAX, L_TAX_SD);

            pick_string(&self.ctx.dists.instruct, L_SHIP_SD, bank, &mut line.shipinstruct);
            pick_string(&self.ctx.dists.smode, L_SMODE_SD, bank, &mut line.shipmode);
            line.comment = generate_text(L_COMMENT_LEN, L_CMNT_SD, bank, &self.ctx.dists);

            line.extendedprice = retail_price(line.partkey) * line.quantity;

            let s_date = bank.random_int(L_SDTE_MIN, L_SDTE_MAX, L_SDTE_SD) + tmp_date;
            let c_date = bank.random_int(L_CDTE_MIN, L_CDTE_MAX, L_CDTE_SD) + tmp_date;
            let r_date = bank.random_int(L_RDTE_MIN, L_RDTE_MAX, L_RDTE_SD) + s_date;

            line.shipdate = s_date - START_DATE;
            line.commitdate = c_date - START_DATE;
            line.receiptdate = r_date - START_DATE;

            if julian_date(r_date) <= CURRENT_DATE {
                let mut rflag = String::new();
                pick_string(&self.ctx.dists.rflag, L_RFLG_SD, bank, &mut rflag);
                line.returnflag = rflag.chars().next().unwrap_or('N');
            }

            if julian_date(s_date) <= CURRENT_DATE {
                line.linestatus = 'F';
                shipped_lines += 1;
            }

            row.totalprice += (line.extendedprice * (PENNIES - line.discount) / PENNIES)
                * (PENNIES + line.tax)
                / PENNIES;
            row.lines.push(line);
        }

        if shipped_lines > 0 {
            row.orderstatus = 'P';
        }
        if shipped_lines == line_count {
            row.orderstatus = 'F';
        }

        bank.row_stop(DbgenTable::Orders);
        row
    }
}

/// Emits the lineitems of consecutive orders one row at a time.
pub struct LineItemRowGenerator {
    orders: OrdersRowGenerator,
    total_rows: i64,
    current_order: i64,
    buffered: Option<OrderRow>,
    line_cursor: usize,
}

impl LineItemRowGenerator {
    pub fn new(scale_factor: f64) -> Result<LineItemRowGenerator> {
        let orders = OrdersRowGenerator::new(scale_factor)?;
        Ok(LineItemRowGenerator {
            orders,
            total_rows: row_count(TableId::LineItem, scale_factor),
            current_order: 0,
            buffered: None,
            line_cursor: 0,
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.total_rows
    }

    /// Skips `rows` lineitems: whole orders advance closed-form; the order
    /// containing the target row is generated and its leading lines dropped.
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
            let line_count = self.orders.peek_line_count() as i64;
            if line_count <= rows {
                skip_order(&mut self.orders.bank, 1);
                skip_line(&mut self.orders.bank, 1, false);
                self.current_order += 1;
                rows -= line_count;
            } else {
                let order = self.orders.generate_row(self.current_order + 1);
                self.current_order += 1;
                self.line_cursor = rows as usize;
                self.buffered = Some(order);
                return;
            }
        }
    }

    pub fn next_row(&mut self) -> LineItemRow {
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
            let order = self.orders.generate_row(self.current_order + 1);
            self.current_order += 1;
            self.line_cursor = 0;
            self.buffered = Some(order);
        }
    }
}

/// One nation row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NationRow {
    pub nationkey: i64,
    pub name: String,
    pub regionkey: i64,
    pub comment: String,
}

pub struct NationRowGenerator {
    ctx: &'static TpchContext,
    bank: StreamBank,
    total_rows: i64,
}

impl NationRowGenerator {
    pub fn new(_scale_factor: f64) -> Result<NationRowGenerator> {
        let ctx = context()?;
        Ok(NationRowGenerator {
            ctx,
            bank: StreamBank::new(),
            total_rows: ctx.dists.nations.len() as i64,
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.total_rows
    }

    pub fn skip_rows(&mut self, rows: i64) {
        if rows <= 0 {
            return;
        }
        let boundary = self.bank.seed_boundary(N_CMNT_SD);
        self.bank.advance_stream(N_CMNT_SD, boundary * rows);
    }

    pub fn generate_row(&mut self, row_number: i64) -> NationRow {
        let bank = &mut self.bank;
        bank.row_start();

        let mut row = NationRow { nationkey: row_number - 1, ..Default::default() };
        let nations = &self.ctx.dists.nations;
        if row_number > 0 && row_number <= nations.len() as i64 {
            let entry = &nations.list[(row_number - 1) as usize];
            row.name = entry.text.clone();
            row.regionkey = entry.weight;
        }
        row.comment = generate_text(N_COMMENT_LEN, N_CMNT_SD, bank, &self.ctx.dists);

        bank.row_stop(DbgenTable::Nation);
        row
    }
}

/// One region row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionRow {
    pub regionkey: i64,
    pub name: String,
    pub comment: String,
}

pub struct RegionRowGenerator {
    ctx: &'static TpchContext,
    bank: StreamBank,
    total_rows: i64,
}

impl RegionRowGenerator {
    pub fn new(_scale_factor: f64) -> Result<RegionRowGenerator> {
        let ctx = context()?;
        Ok(RegionRowGenerator {
            ctx,
            bank: StreamBank::new(),
            total_rows: ctx.dists.regions.len() as i64,
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.total_rows
    }

    pub fn skip_rows(&mut self, rows: i64) {
        if rows <= 0 {
            return;
        }
        let boundary = self.bank.seed_boundary(R_CMNT_SD);
        self.bank.advance_stream(R_CMNT_SD, boundary * rows);
    }

    pub fn generate_row(&mut self, row_number: i64) -> RegionRow {
        let bank = &mut self.bank;
        bank.row_start();

        let mut row = RegionRow { regionkey: row_number - 1, ..Default::default() };
        let regions = &self.ctx.dists.regions;
        if row_number > 0 && row_number <= regions.len() as i64 {
            row.name = regions.list[(row_number - 1) as usize].text.clone();
        }
        row.comment = generate_text(R_COMMENT_LEN, R_CMNT_SD, bank, &self.ctx.dists);

        bank.row_stop(DbgenTable::Region);
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_skip_equals_sequential() {
        let mut sequential = CustomerRowGenerator::new(1.0).unwrap();
        for i in 0..5 {
            sequential.generate_row(i + 1);
        }
        let expected = sequential.generate_row(6);

        let mut skipped = CustomerRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(5);
        assert_eq!(skipped.generate_row(6), expected);
    }

    #[test]
    fn supplier_skip_equals_sequential() {
        let mut sequential = SupplierRowGenerator::new(1.0).unwrap();
        for i in 0..7 {
            sequential.generate_row(i + 1);
        }
        let expected = sequential.generate_row(8);

        let mut skipped = SupplierRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(7);
        assert_eq!(skipped.generate_row(8), expected);
    }

    #[test]
    fn part_skip_equals_sequential() {
        let mut sequential = PartRowGenerator::new(1.0).unwrap();
        for i in 0..9 {
            sequential.generate_row(i + 1);
        }
        let expected = sequential.generate_row(10);

        let mut skipped = PartRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(9);
        assert_eq!(skipped.generate_row(10), expected);
    }

    #[test]
    fn partsupp_skip_lands_mid_part() {
        let mut sequential = PartSuppRowGenerator::new(1.0).unwrap();
        let mut expected = Vec::new();
        for _ in 0..9 {
            expected.push(sequential.next_row().unwrap());
        }

        // 3 is mid-way through the first part's four suppliers.
        let mut skipped = PartSuppRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(3);
        for i in 3..9 {
            assert_eq!(skipped.next_row().unwrap(), expected[i], "row {i}");
        }
    }

    #[test]
    fn orders_skip_equals_sequential() {
        let mut sequential = OrdersRowGenerator::new(1.0).unwrap();
        for i in 0..4 {
            sequential.generate_row(i + 1);
        }
        let expected = sequential.generate_row(5);

        let mut skipped = OrdersRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(4);
        assert_eq!(skipped.generate_row(5), expected);
    }

    #[test]
    fn lineitem_skip_crosses_orders() {
        let mut sequential = LineItemRowGenerator::new(1.0).unwrap();
        let mut all = Vec::new();
        for _ in 0..25 {
            all.push(sequential.next_row());
        }

        let mut skipped = LineItemRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(10);
        for expected in all.iter().skip(10) {
            assert_eq!(&skipped.next_row(), expected);
        }
    }

    #[test]
    fn order_status_follows_lines() {
        let mut orders = OrdersRowGenerator::new(1.0).unwrap();
        for i in 0..64 {
            let row = orders.generate_row(i + 1);
            let shipped = row.lines.iter().filter(|l| l.linestatus == 'F').count() as i32;
            let expected = if shipped == row.line_count {
                'F'
            } else if shipped > 0 {
                'P'
            } else {
                'O'
            };
            assert_eq!(row.orderstatus, expected);
            let total: i64 = row
                .lines
                .iter()
                .map(|l| {
                    (l.extendedprice * (PENNIES - l.discount) / PENNIES) * (PENNIES + l.tax)
                        / PENNIES
                })
                .sum();
            assert_eq!(row.totalprice, total);
        }
    }

    #[test]
    fn nation_rows_come_from_the_distribution() {
        let mut nations = NationRowGenerator::new(1.0).unwrap();
        assert_eq!(nations.total_rows(), 25);
        let first = nations.generate_row(1);
        assert_eq!(first.nationkey, 0);
        assert_eq!(first.name, "ALGERIA");
        assert_eq!(first.regionkey, 0);
        let fifth = nations.generate_row(5);
        assert_eq!(fifth.name, "EGYPT");
        assert_eq!(fifth.regionkey, 4);
    }
}
