// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! Schemas and [RowSource] adapters for the TPC-H tables.

use crate::batch::{GeneratorOptions, RowSource};
use crate::col::{ArrayBuilder, ColumnType, Field, Schema};
use crate::error::{Error, Result};
use crate::tpch::constants::START_DATE;
use crate::tpch::dates::{date32_from_julian, julian_date};
use crate::tpch::generators::*;

fn date32_from_index(index: i64) -> i32 {
    date32_from_julian(julian_date(START_DATE + index))
}

fn append_char(builder: &mut ArrayBuilder, c: char) {
    let mut buf = [0u8; 4];
    builder.append_str(c.encode_utf8(&mut buf));
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
        builders[0].append_i64(row.custkey);
        builders[1].append_str(&row.name);
        builders[2].append_str(&row.address);
        builders[3].append_i32(row.nationkey as i32);
        builders[4].append_str(&row.phone);
        builders[5].append_decimal(row.acctbal);
        builders[6].append_str(&row.mktsegment);
        builders[7].append_str(&row.comment);
    }
}

struct SupplierSource {
    schema: Schema,
    gen: SupplierRowGenerator,
    current_row: i64,
}

impl RowSource for SupplierSource {
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
        builders[0].append_i64(row.suppkey);
        builders[1].append_str(&row.name);
        builders[2].append_str(&row.address);
        builders[3].append_i32(row.nationkey as i32);
        builders[4].append_str(&row.phone);
        builders[5].append_decimal(row.acctbal);
        builders[6].append_str(&row.comment);
    }
}

struct PartSource {
    schema: Schema,
    gen: PartRowGenerator,
    current_row: i64,
}

impl RowSource for PartSource {
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
        builders[0].append_i64(row.partkey);
        builders[1].append_str(&row.name);
        builders[2].append_str(&row.mfgr);
        builders[3].append_str(&row.brand);
        builders[4].append_str(&row.type_name);
        builders[5].append_i32(row.size);
        builders[6].append_str(&row.container);
        builders[7].append_decimal(row.retailprice);
        builders[8].append_str(&row.comment);
    }
}

struct PartSuppSource {
    schema: Schema,
    gen: PartSuppRowGenerator,
}

impl RowSource for PartSuppSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        // The window is clamped to total_rows before we get here.
        let row = self.gen.next_row().expect("partsupp row past end");
        builders[0].append_i64(row.partkey);
        builders[1].append_i64(row.suppkey);
        builders[2].append_i32(row.availqty);
        builders[3].append_decimal(row.supplycost);
        builders[4].append_str(&row.comment);
    }
}

struct OrdersSource {
    schema: Schema,
    gen: OrdersRowGenerator,
    current_row: i64,
}

impl RowSource for OrdersSource {
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
        builders[0].append_i64(row.orderkey);
        builders[1].append_i64(row.custkey);
        append_char(&mut builders[2], row.orderstatus);
        builders[3].append_decimal(row.totalprice);
        builders[4].append_date(date32_from_index(row.orderdate));
        builders[5].append_str(&row.orderpriority);
        builders[6].append_str(&row.clerk);
        builders[7].append_i32(row.shippriority);
        builders[8].append_str(&row.comment);
    }
}

struct LineItemSource {
    schema: Schema,
    gen: LineItemRowGenerator,
}

impl RowSource for LineItemSource {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn total_rows(&self) -> i64 {
        self.gen.total_rows()
    }

    fn skip_rows(&mut self, rows: i64) {
        self.gen.skip_rows(rows);
    }

    fn append_next_row(&mut self, builders: &mut [ArrayBuilder]) {
        let row = self.gen.next_row();
        builders[0].append_i64(row.orderkey);
        builders[1].append_i64(row.partkey);
        builders[2].append_i64(row.suppkey);
        builders[3].append_i32(row.linenumber);
        builders[4].append_decimal(row.quantity * 100);
        builders[5].append_decimal(row.extendedprice);
        builders[6].append_decimal(row.discount);
        builders[7].append_decimal(row.tax);
        append_char(&mut builders[8], row.returnflag);
        append_char(&mut builders[9], row.linestatus);
        builders[10].append_date(date32_from_index(row.shipdate));
        builders[11].append_date(date32_from_index(row.commitdate));
        builders[12].append_date(date32_from_index(row.receiptdate));
        builders[13].append_str(&row.shipinstruct);
        builders[14].append_str(&row.shipmode);
        builders[15].append_str(&row.comment);
    }
}

struct NationSource {
    schema: Schema,
    gen: NationRowGenerator,
    current_row: i64,
}

impl RowSource for NationSource {
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
        builders[0].append_i32(row.nationkey as i32);
        builders[1].append_str(&row.name);
        builders[2].append_i32(row.regionkey as i32);
        builders[3].append_str(&row.comment);
    }
}

struct RegionSource {
    schema: Schema,
    gen: RegionRowGenerator,
    current_row: i64,
}

impl RowSource for RegionSource {
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
        builders[0].append_i32(row.regionkey as i32);
        builders[1].append_str(&row.name);
        builders[2].append_str(&row.comment);
    }
}

/// Builds the [RowSource] for a TPC-H table name.
pub fn new_source(table: &str, options: &GeneratorOptions) -> Result<Box<dyn RowSource>> {
    let sf = options.scale_factor;
    Ok(match table {
        "customer" => Box::new(CustomerSource {
            schema: Schema::new(vec![
                Field::required("c_custkey", ColumnType::Int64),
                Field::required("c_name", ColumnType::Utf8),
                Field::new("c_address", ColumnType::Utf8),
                Field::new("c_nationkey", ColumnType::Int32),
                Field::new("c_phone", ColumnType::Utf8),
                Field::new("c_acctbal", ColumnType::Decimal(7)),
                Field::new("c_mktsegment", ColumnType::Utf8),
                Field::new("c_comment", ColumnType::Utf8),
            ]),
            gen: CustomerRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "supplier" => Box::new(SupplierSource {
            schema: Schema::new(vec![
                Field::required("s_suppkey", ColumnType::Int64),
                Field::required("s_name", ColumnType::Utf8),
                Field::new("s_address", ColumnType::Utf8),
                Field::new("s_nationkey", ColumnType::Int32),
                Field::new("s_phone", ColumnType::Utf8),
                Field::new("s_acctbal", ColumnType::Decimal(7)),
                Field::new("s_comment", ColumnType::Utf8),
            ]),
            gen: SupplierRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "part" => Box::new(PartSource {
            schema: Schema::new(vec![
                Field::required("p_partkey", ColumnType::Int64),
                Field::new("p_name", ColumnType::Utf8),
                Field::new("p_mfgr", ColumnType::Utf8),
                Field::new("p_brand", ColumnType::Utf8),
                Field::new("p_type", ColumnType::Utf8),
                Field::new("p_size", ColumnType::Int32),
                Field::new("p_container", ColumnType::Utf8),
                Field::new("p_retailprice", ColumnType::Decimal(7)),
                Field::new("p_comment", ColumnType::Utf8),
            ]),
            gen: PartRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "partsupp" => Box::new(PartSuppSource {
            schema: Schema::new(vec![
                Field::required("ps_partkey", ColumnType::Int64),
                Field::required("ps_suppkey", ColumnType::Int64),
                Field::new("ps_availqty", ColumnType::Int32),
                Field::new("ps_supplycost", ColumnType::Decimal(7)),
                Field::new("ps_comment", ColumnType::Utf8),
            ]),
            gen: PartSuppRowGenerator::new(sf)?,
        }),
        "orders" => Box::new(OrdersSource {
            schema: Schema::new(vec![
                Field::required("o_orderkey", ColumnType::Int64),
                Field::required("o_custkey", ColumnType::Int64),
                Field::new("o_orderstatus", ColumnType::Utf8),
                Field::new("o_totalprice", ColumnType::Decimal(9)),
                Field::new("o_orderdate", ColumnType::Date32),
                Field::new("o_orderpriority", ColumnType::Utf8),
                Field::new("o_clerk", ColumnType::Utf8),
                Field::new("o_shippriority", ColumnType::Int32),
                Field::new("o_comment", ColumnType::Utf8),
            ]),
            gen: OrdersRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "lineitem" => Box::new(LineItemSource {
            schema: Schema::new(vec![
                Field::required("l_orderkey", ColumnType::Int64),
                Field::required("l_partkey", ColumnType::Int64),
                Field::required("l_suppkey", ColumnType::Int64),
                Field::required("l_linenumber", ColumnType::Int32),
                Field::new("l_quantity", ColumnType::Decimal(5)),
                Field::new("l_extendedprice", ColumnType::Decimal(9)),
                Field::new("l_discount", ColumnType::Decimal(5)),
                Field::new("l_tax", ColumnType::Decimal(5)),
                Field::new("l_returnflag", ColumnType::Utf8),
                Field::new("l_linestatus", ColumnType::Utf8),
                Field::new("l_shipdate", ColumnType::Date32),
                Field::new("l_commitdate", ColumnType::Date32),
                Field::new("l_receiptdate", ColumnType::Date32),
                Field::new("l_shipinstruct", ColumnType::Utf8),
                Field::new("l_shipmode", ColumnType::Utf8),
                Field::new("l_comment", ColumnType::Utf8),
            ]),
            gen: LineItemRowGenerator::new(sf)?,
        }),
        "nation" => Box::new(NationSource {
            schema: Schema::new(vec![
                Field::required("n_nationkey", ColumnType::Int32),
                Field::new("n_name", ColumnType::Utf8),
                Field::new("n_regionkey", ColumnType::Int32),
                Field::new("n_comment", ColumnType::Utf8),
            ]),
            gen: NationRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "region" => Box::new(RegionSource {
            schema: Schema::new(vec![
                Field::required("r_regionkey", ColumnType::Int32),
                Field::new("r_name", ColumnType::Utf8),
                Field::new("r_comment", ColumnType::Utf8),
            ]),
            gen: RegionRowGenerator::new(sf)?,
            current_row: 0,
        }),
        other => return Err(Error::invalid(format!("unknown tpch table: {other}"))),
    })
}
