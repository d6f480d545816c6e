// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! Schemas and [RowSource] adapters for the SSB tables.

use crate::batch::{GeneratorOptions, RowSource};
use crate::col::{ArrayBuilder, ColumnType, Field, Schema};
use crate::error::{Error, Result};
use crate::ssb::generators::*;

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
        builders[3].append_str(&row.city);
        builders[4].append_str(&row.nation_name);
        builders[5].append_str(&row.region_name);
        builders[6].append_str(&row.phone);
        builders[7].append_str(&row.mktsegment);
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
        builders[3].append_str(&row.city);
        builders[4].append_str(&row.nation_name);
        builders[5].append_str(&row.region_name);
        builders[6].append_str(&row.phone);
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
        builders[3].append_str(&row.category);
        builders[4].append_str(&row.brand);
        builders[5].append_str(&row.color);
        builders[6].append_str(&row.type_name);
        builders[7].append_i32(row.size);
        builders[8].append_str(&row.container);
    }
}

struct DateSource {
    schema: Schema,
    gen: DateRowGenerator,
    current_row: i64,
}

impl RowSource for DateSource {
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
        builders[0].append_i32(row.datekey as i32);
        builders[1].append_str(&row.date);
        builders[2].append_str(&row.dayofweek);
        builders[3].append_str(&row.month);
        builders[4].append_i32(row.year);
        builders[5].append_i32(row.yearmonthnum);
        builders[6].append_str(&row.yearmonth);
        builders[7].append_i32(row.daynuminweek);
        builders[8].append_i32(row.daynuminmonth);
        builders[9].append_i32(row.daynuminyear);
        builders[10].append_i32(row.monthnuminyear);
        builders[11].append_i32(row.weeknuminyear);
        builders[12].append_str(&row.sellingseason);
        builders[13].append_bool(row.lastdayinweekfl);
        builders[14].append_bool(row.lastdayinmonthfl);
        builders[15].append_bool(row.holidayfl);
        builders[16].append_bool(row.weekdayfl);
    }
}

struct LineorderSource {
    schema: Schema,
    gen: LineorderRowGenerator,
}

impl RowSource for LineorderSource {
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
        builders[1].append_i32(row.linenumber);
        builders[2].append_i64(row.custkey);
        builders[3].append_i64(row.partkey);
        builders[4].append_i64(row.suppkey);
        builders[5].append_str(&row.orderdate);
        builders[6].append_str(&row.orderpriority);
        builders[7].append_i32(row.shippriority);
        builders[8].append_i32(row.quantity as i32);
        builders[9].append_decimal(row.extendedprice);
        builders[10].append_decimal(row.ordertotalprice);
        builders[11].append_i32(row.discount as i32);
        builders[12].append_decimal(row.revenue);
        builders[13].append_decimal(row.supplycost);
        builders[14].append_i32(row.tax as i32);
        builders[15].append_str(&row.commitdate);
        builders[16].append_str(&row.shipmode);
    }
}

/// Builds the [RowSource] for an SSB table name.
pub fn new_source(table: &str, options: &GeneratorOptions) -> Result<Box<dyn RowSource>> {
    let sf = options.scale_factor;
    Ok(match table {
        "customer" => Box::new(CustomerSource {
            schema: Schema::new(vec![
                Field::required("c_custkey", ColumnType::Int64),
                Field::required("c_name", ColumnType::Utf8),
                Field::new("c_address", ColumnType::Utf8),
                Field::new("c_city", ColumnType::Utf8),
                Field::new("c_nation", ColumnType::Utf8),
                Field::new("c_region", ColumnType::Utf8),
                Field::new("c_phone", ColumnType::Utf8),
                Field::new("c_mktsegment", ColumnType::Utf8),
            ]),
            gen: CustomerRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "supplier" => Box::new(SupplierSource {
            schema: Schema::new(vec![
                Field::required("s_suppkey", ColumnType::Int64),
                Field::required("s_name", ColumnType::Utf8),
                Field::new("s_address", ColumnType::Utf8),
                Field::new("s_city", ColumnType::Utf8),
                Field::new("s_nation", ColumnType::Utf8),
                Field::new("s_region", ColumnType::Utf8),
                Field::new("s_phone", ColumnType::Utf8),
            ]),
            gen: SupplierRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "part" => Box::new(PartSource {
            schema: Schema::new(vec![
                Field::required("p_partkey", ColumnType::Int64),
                Field::new("p_name", ColumnType::Utf8),
                Field::new("p_mfgr", ColumnType::Utf8),
                Field::new("p_category", ColumnType::Utf8),
                Field::new("p_brand1", ColumnType::Utf8),
                Field::new("p_color", ColumnType::Utf8),
                Field::new("p_type", ColumnType::Utf8),
                Field::new("p_size", ColumnType::Int32),
                Field::new("p_container", ColumnType::Utf8),
            ]),
            gen: PartRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "date" => Box::new(DateSource {
            schema: Schema::new(vec![
                Field::required("d_datekey", ColumnType::Int32),
                Field::new("d_date", ColumnType::Utf8),
                Field::new("d_dayofweek", ColumnType::Utf8),
                Field::new("d_month", ColumnType::Utf8),
                Field::new("d_year", ColumnType::Int32),
                Field::new("d_yearmonthnum", ColumnType::Int32),
                Field::new("d_yearmonth", ColumnType::Utf8),
                Field::new("d_daynuminweek", ColumnType::Int32),
                Field::new("d_daynuminmonth", ColumnType::Int32),
                Field::new("d_daynuminyear", ColumnType::Int32),
                Field::new("d_monthnuminyear", ColumnType::Int32),
                Field::new("d_weeknuminyear", ColumnType::Int32),
                Field::new("d_sellingseason", ColumnType::Utf8),
                Field::new("d_lastdayinweekfl", ColumnType::Boolean),
                Field::new("d_lastdayinmonthfl", ColumnType::Boolean),
                Field::new("d_holidayfl", ColumnType::Boolean),
                Field::new("d_weekdayfl", ColumnType::Boolean),
            ]),
            gen: DateRowGenerator::new(sf)?,
            current_row: 0,
        }),
        "lineorder" => Box::new(LineorderSource {
            schema: Schema::new(vec![
                Field::required("lo_orderkey", ColumnType::Int64),
                Field::required("lo_linenumber", ColumnType::Int32),
                Field::required("lo_custkey", ColumnType::Int64),
                Field::required("lo_partkey", ColumnType::Int64),
                Field::required("lo_suppkey", ColumnType::Int64),
                Field::new("lo_orderdate", ColumnType::Utf8),
                Field::new("lo_orderpriority", ColumnType::Utf8),
                Field::new("lo_shippriority", ColumnType::Int32),
                Field::new("lo_quantity", ColumnType::Int32),
                Field::new("lo_extendedprice", ColumnType::Decimal(9)),
                Field::new("lo_ordtotalprice", ColumnType::Decimal(9)),
                Field::new("lo_discount", ColumnType::Int32),
                Field::new("lo_revenue", ColumnType::Decimal(9)),
                Field::new("lo_supplycost", ColumnType::Decimal(9)),
                Field::new("lo_tax", ColumnType::Int32),
                Field::new("lo_commitdate", ColumnType::Utf8),
                Field::new("lo_shipmode", ColumnType::Utf8),
            ]),
            gen: LineorderRowGenerator::new(sf)?,
        }),
        other => return Err(Error::invalid(format!("unknown ssb table: {other}"))),
    })
}
