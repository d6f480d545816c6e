// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! The fact-table generators: the three sales channels (ticket/order state
//! shared across line items), the three returns channels (materialized from
//! flagged sales lines), and the dense inventory cross-product.

use crate::error::Result;
use crate::tpcds::constants::*;
use crate::tpcds::distribution::embedded_store;
use crate::tpcds::join::{generate_join_key, JOIN_KEY_SEEDS_PER_ROW};
use crate::tpcds::nulls::{generate_null_bitmap, NULL_SEEDS_PER_ROW};
use crate::tpcds::pricing::{
    catalog_sales_limits, generate_pricing, generate_return_pricing, store_sales_limits,
    web_sales_limits, Pricing, PRICING_SEEDS_PER_ROW, RETURN_PRICING_SEEDS_PER_ROW,
};
use crate::tpcds::random::{RandomNumberStream, RowStreams};
use crate::tpcds::scaling::Scaling;
use crate::tpcds::scd::match_surrogate_key;

/// Fisher-Yates permutation of `[1, count]`; one draw per element.
pub fn make_permutation(count: i64, stream: &mut RandomNumberStream) -> Vec<i32> {
    let mut permutation: Vec<i32> = (1..=count as i32).collect();
    for i in 0..count {
        let j = stream.uniform_int(i, count - 1) as usize;
        permutation.swap(i as usize, j);
    }
    permutation
}

// A throwaway lane positioned where the generator's own lane sits at a row
// boundary; the seeds-per-row budget must match the real lane's.
fn probe_lane(column: usize, seeds_per_row: i64, rows: i64) -> RandomNumberStream {
    let mut lane = RandomNumberStream::new(column, seeds_per_row);
    lane.skip_rows(rows);
    lane
}

// -------------------------------------------------------------------------
// store_sales

const SS_BASE: usize = column_base(Table::StoreSales);
const SS_NULLS: usize = SS_BASE;
const SS_PERMUTATION: usize = SS_BASE + 1;
const SS_LINE_COUNT: usize = SS_BASE + 2;
const SS_SOLD_ITEM: usize = SS_BASE + 3;
const SS_SOLD_STORE: usize = SS_BASE + 4;
const SS_SOLD_TIME: usize = SS_BASE + 5;
const SS_SOLD_DATE: usize = SS_BASE + 6;
const SS_CUSTOMER: usize = SS_BASE + 7;
const SS_CDEMO: usize = SS_BASE + 8;
const SS_HDEMO: usize = SS_BASE + 9;
const SS_ADDR: usize = SS_BASE + 10;
const SS_PROMO: usize = SS_BASE + 11;
const SS_PRICING: usize = SS_BASE + 12;
const SS_IS_RETURNED: usize = SS_BASE + 13;

const SS_NULL_BASIS_POINTS: i64 = 400;
const SS_NOT_NULL_MASK: i64 = 1 << 9;

/// Header fields shared by every line in one ticket.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TicketInfo {
    pub sold_date_sk: i64,
    pub sold_time_sk: i64,
    pub customer_sk: i64,
    pub cdemo_sk: i64,
    pub hdemo_sk: i64,
    pub addr_sk: i64,
    pub store_sk: i64,
    pub ticket_number: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreSalesRow {
    pub sold_date_sk: i64,
    pub sold_time_sk: i64,
    pub sold_item_sk: i64,
    pub sold_customer_sk: i64,
    pub sold_cdemo_sk: i64,
    pub sold_hdemo_sk: i64,
    pub sold_addr_sk: i64,
    pub sold_store_sk: i64,
    pub sold_promo_sk: i64,
    pub ticket_number: i64,
    pub pricing: Pricing,
    pub null_bitmap: i64,
    pub is_returned: bool,
}

pub struct StoreSalesRowGenerator {
    scaling: Scaling,
    streams: RowStreams,
    item_permutation: Vec<i32>,
    item_count: i64,
    remaining_items: i64,
    item_index: i64,
    ticket_info: TicketInfo,
    last_row_in_ticket: bool,
}

impl StoreSalesRowGenerator {
    pub fn new(scale: f64) -> Result<StoreSalesRowGenerator> {
        let scaling = Scaling::new(scale);
        embedded_store()?;
        Ok(StoreSalesRowGenerator {
            scaling,
            streams: RowStreams::new(&[
                (SS_NULLS, NULL_SEEDS_PER_ROW),
                (SS_PERMUTATION, 0),
                (SS_LINE_COUNT, 1),
                (SS_SOLD_ITEM, 1),
                (SS_SOLD_STORE, JOIN_KEY_SEEDS_PER_ROW),
                (SS_SOLD_TIME, JOIN_KEY_SEEDS_PER_ROW),
                (SS_SOLD_DATE, JOIN_KEY_SEEDS_PER_ROW),
                (SS_CUSTOMER, JOIN_KEY_SEEDS_PER_ROW),
                (SS_CDEMO, JOIN_KEY_SEEDS_PER_ROW),
                (SS_HDEMO, JOIN_KEY_SEEDS_PER_ROW),
                (SS_ADDR, JOIN_KEY_SEEDS_PER_ROW),
                (SS_PROMO, JOIN_KEY_SEEDS_PER_ROW),
                (SS_PRICING, PRICING_SEEDS_PER_ROW),
                (SS_IS_RETURNED, 1),
            ]),
            item_permutation: Vec::new(),
            item_count: scaling.id_count(Table::Item),
            remaining_items: 0,
            item_index: 0,
            ticket_info: TicketInfo::default(),
            last_row_in_ticket: true,
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::StoreSales)
    }

    pub fn last_row_in_ticket(&self) -> bool {
        self.last_row_in_ticket
    }

    fn ensure_permutation(&mut self) {
        if self.item_permutation.is_empty() {
            self.item_permutation =
                make_permutation(self.item_count, self.streams.stream(SS_PERMUTATION));
        }
    }

    fn build_ticket_info(&mut self, ticket_number: i64) -> TicketInfo {
        TicketInfo {
            store_sk: generate_join_key(
                Table::Store,
                self.streams.stream(SS_SOLD_STORE),
                &self.scaling,
            ),
            sold_time_sk: generate_join_key(
                Table::TimeDim,
                self.streams.stream(SS_SOLD_TIME),
                &self.scaling,
            ),
            sold_date_sk: generate_join_key(
                Table::DateDim,
                self.streams.stream(SS_SOLD_DATE),
                &self.scaling,
            ),
            customer_sk: generate_join_key(
                Table::Customer,
                self.streams.stream(SS_CUSTOMER),
                &self.scaling,
            ),
            cdemo_sk: generate_join_key(
                Table::CustomerDemographics,
                self.streams.stream(SS_CDEMO),
                &self.scaling,
            ),
            hdemo_sk: generate_join_key(
                Table::HouseholdDemographics,
                self.streams.stream(SS_HDEMO),
                &self.scaling,
            ),
            addr_sk: generate_join_key(
                Table::CustomerAddress,
                self.streams.stream(SS_ADDR),
                &self.scaling,
            ),
            ticket_number,
        }
    }

    pub fn generate_row(&mut self, ticket_number: i64) -> StoreSalesRow {
        self.ensure_permutation();

        if self.remaining_items == 0 {
            self.ticket_info = self.build_ticket_info(ticket_number);
            self.remaining_items = self
                .streams
                .stream(SS_LINE_COUNT)
                .uniform_int(SS_MIN_LINES_PER_TICKET, SS_MAX_LINES_PER_TICKET);
            self.item_index = self.streams.stream(SS_SOLD_ITEM).uniform_int(1, self.item_count);
        }

        let mut row = StoreSalesRow {
            sold_date_sk: self.ticket_info.sold_date_sk,
            sold_time_sk: self.ticket_info.sold_time_sk,
            sold_customer_sk: self.ticket_info.customer_sk,
            sold_cdemo_sk: self.ticket_info.cdemo_sk,
            sold_hdemo_sk: self.ticket_info.hdemo_sk,
            sold_addr_sk: self.ticket_info.addr_sk,
            sold_store_sk: self.ticket_info.store_sk,
            ticket_number: self.ticket_info.ticket_number,
            ..Default::default()
        };
        row.null_bitmap = generate_null_bitmap(
            SS_NULL_BASIS_POINTS,
            SS_NOT_NULL_MASK,
            self.streams.stream(SS_NULLS),
        );

        // Items are unique within a ticket: walk the shared permutation.
        self.item_index += 1;
        if self.item_index > self.item_count {
            self.item_index = 1;
        }
        let item_id = self.item_permutation[(self.item_index - 1) as usize] as i64;
        row.sold_item_sk =
            match_surrogate_key(item_id, row.sold_date_sk, Table::Item, &self.scaling);

        row.sold_promo_sk =
            generate_join_key(Table::Promotion, self.streams.stream(SS_PROMO), &self.scaling);
        row.pricing = generate_pricing(&store_sales_limits(), self.streams.stream(SS_PRICING));
        row.is_returned =
            self.streams.stream(SS_IS_RETURNED).uniform_int(0, 99) < SR_RETURN_PCT;

        self.remaining_items -= 1;
        self.last_row_in_ticket = self.remaining_items == 0;
        row
    }

    /// Skips `rows` emitted rows. Whole tickets advance through probes of the
    /// boundary-aligned lanes; the ticket containing the target row has its
    /// header and cursor reconstructed. Returns the number of complete
    /// tickets consumed.
    pub fn skip_rows(&mut self, rows: i64) -> i64 {
        if rows <= 0 {
            return 0;
        }
        self.ensure_permutation();

        let mut row = 0i64;
        let mut tickets = 0i64;
        loop {
            let line_count = probe_lane(SS_LINE_COUNT, 1, row)
                .uniform_int(SS_MIN_LINES_PER_TICKET, SS_MAX_LINES_PER_TICKET);
            if row + line_count <= rows {
                row += line_count;
                tickets += 1;
                if row == rows {
                    self.remaining_items = 0;
                    self.last_row_in_ticket = true;
                    break;
                }
                continue;
            }
            // Mid-ticket: rebuild the header the sequential run drew at the
            // ticket's first row.
            let consumed = rows - row;
            self.ticket_info = TicketInfo {
                store_sk: generate_join_key(
                    Table::Store,
                    &mut probe_lane(SS_SOLD_STORE, JOIN_KEY_SEEDS_PER_ROW, row),
                    &self.scaling,
                ),
                sold_time_sk: generate_join_key(
                    Table::TimeDim,
                    &mut probe_lane(SS_SOLD_TIME, JOIN_KEY_SEEDS_PER_ROW, row),
                    &self.scaling,
                ),
                sold_date_sk: generate_join_key(
                    Table::DateDim,
                    &mut probe_lane(SS_SOLD_DATE, JOIN_KEY_SEEDS_PER_ROW, row),
                    &self.scaling,
                ),
                customer_sk: generate_join_key(
                    Table::Customer,
                    &mut probe_lane(SS_CUSTOMER, JOIN_KEY_SEEDS_PER_ROW, row),
                    &self.scaling,
                ),
                cdemo_sk: generate_join_key(
                    Table::CustomerDemographics,
                    &mut probe_lane(SS_CDEMO, JOIN_KEY_SEEDS_PER_ROW, row),
                    &self.scaling,
                ),
                hdemo_sk: generate_join_key(
                    Table::HouseholdDemographics,
                    &mut probe_lane(SS_HDEMO, JOIN_KEY_SEEDS_PER_ROW, row),
                    &self.scaling,
                ),
                addr_sk: generate_join_key(
                    Table::CustomerAddress,
                    &mut probe_lane(SS_ADDR, JOIN_KEY_SEEDS_PER_ROW, row),
                    &self.scaling,
                ),
                ticket_number: tickets + 1,
            };
            self.remaining_items = line_count - consumed;
            let mut item_index = probe_lane(SS_SOLD_ITEM, 1, row).uniform_int(1, self.item_count);
            item_index += consumed;
            while item_index > self.item_count {
                item_index -= self.item_count;
            }
            self.item_index = item_index;
            self.last_row_in_ticket = false;
            break;
        }

        self.streams.skip_rows(rows);
        tickets
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// store_returns

const SR_BASE: usize = column_base(Table::StoreReturns);
const SR_NULLS: usize = SR_BASE;
const SR_RETURN_LAG: usize = SR_BASE + 1;
const SR_RETURNED_TIME: usize = SR_BASE + 2;
const SR_REASON: usize = SR_BASE + 3;
const SR_PRICING: usize = SR_BASE + 4;

const SR_NULL_BASIS_POINTS: i64 = 400;
const SR_NOT_NULL_MASK: i64 = 1 << 9;
const SR_MAX_RETURN_LAG: i64 = 60;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreReturnsRow {
    pub returned_date_sk: i64,
    pub returned_time_sk: i64,
    pub item_sk: i64,
    pub customer_sk: i64,
    pub cdemo_sk: i64,
    pub hdemo_sk: i64,
    pub addr_sk: i64,
    pub store_sk: i64,
    pub reason_sk: i64,
    pub ticket_number: i64,
    pub pricing: Pricing,
    pub null_bitmap: i64,
}

pub struct StoreReturnsRowGenerator {
    scaling: Scaling,
    streams: RowStreams,
    sales: StoreSalesRowGenerator,
    current_ticket: i64,
}

impl StoreReturnsRowGenerator {
    pub fn new(scale: f64) -> Result<StoreReturnsRowGenerator> {
        Ok(StoreReturnsRowGenerator {
            scaling: Scaling::new(scale),
            streams: RowStreams::new(&[
                (SR_NULLS, NULL_SEEDS_PER_ROW),
                (SR_RETURN_LAG, 1),
                (SR_RETURNED_TIME, 1),
                (SR_REASON, JOIN_KEY_SEEDS_PER_ROW),
                (SR_PRICING, RETURN_PRICING_SEEDS_PER_ROW),
            ]),
            sales: StoreSalesRowGenerator::new(scale)?,
            current_ticket: 0,
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::StoreReturns)
    }

    fn build_return(&mut self, sale: &StoreSalesRow) -> StoreReturnsRow {
        let mut row = StoreReturnsRow {
            item_sk: sale.sold_item_sk,
            customer_sk: sale.sold_customer_sk,
            cdemo_sk: sale.sold_cdemo_sk,
            hdemo_sk: sale.sold_hdemo_sk,
            addr_sk: sale.sold_addr_sk,
            store_sk: sale.sold_store_sk,
            ticket_number: sale.ticket_number,
            ..Default::default()
        };
        row.null_bitmap = generate_null_bitmap(
            SR_NULL_BASIS_POINTS,
            SR_NOT_NULL_MASK,
            self.streams.stream(SR_NULLS),
        );
        row.returned_date_sk = sale.sold_date_sk
            + self.streams.stream(SR_RETURN_LAG).uniform_int(1, SR_MAX_RETURN_LAG);
        row.returned_time_sk =
            self.streams.stream(SR_RETURNED_TIME).uniform_int(0, SECONDS_PER_DAY - 1);
        row.reason_sk =
            generate_join_key(Table::Reason, self.streams.stream(SR_REASON), &self.scaling);
        row.pricing = generate_return_pricing(&sale.pricing, self.streams.stream(SR_PRICING));
        row
    }

    /// The next materialized return; sales rows without the returned flag
    /// are consumed and dropped.
    pub fn generate_row(&mut self, _row_number: i64) -> StoreReturnsRow {
        loop {
            let sale = self.sales.generate_row(self.current_ticket + 1);
            let last = self.sales.last_row_in_ticket();
            let returned = sale.is_returned;
            let result = if returned { Some(self.build_return(&sale)) } else { None };
            self.sales.consume_remaining_seeds_for_row();
            if last {
                self.current_ticket += 1;
            }
            if let Some(row) = result {
                return row;
            }
        }
    }

    pub fn skip_rows(&mut self, rows: i64) {
        // Returns are data-dependent; the window edge is found by replaying.
        for i in 0..rows {
            let _ = self.generate_row(i + 1);
            self.consume_remaining_seeds_for_row();
        }
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// catalog_sales

const CS_BASE: usize = column_base(Table::CatalogSales);
const CS_NULLS: usize = CS_BASE;
const CS_PERMUTATION: usize = CS_BASE + 1;
const CS_LINE_COUNT: usize = CS_BASE + 2;
const CS_SOLD_ITEM: usize = CS_BASE + 3;
const CS_SOLD_TIME: usize = CS_BASE + 4;
const CS_CALL_CENTER: usize = CS_BASE + 5;
const CS_BILL_CUSTOMER: usize = CS_BASE + 6;
const CS_BILL_CDEMO: usize = CS_BASE + 7;
const CS_BILL_HDEMO: usize = CS_BASE + 8;
const CS_BILL_ADDR: usize = CS_BASE + 9;
const CS_SHIP_CUSTOMER: usize = CS_BASE + 10;
const CS_SHIP_CDEMO: usize = CS_BASE + 11;
const CS_SHIP_HDEMO: usize = CS_BASE + 12;
const CS_SHIP_ADDR: usize = CS_BASE + 13;
const CS_CATALOG_PAGE: usize = CS_BASE + 14;
const CS_SHIP_MODE: usize = CS_BASE + 15;
const CS_WAREHOUSE: usize = CS_BASE + 16;
const CS_PROMO: usize = CS_BASE + 17;
const CS_SHIP_DATE: usize = CS_BASE + 18;
const CS_PRICING: usize = CS_BASE + 19;
const CS_IS_RETURNED: usize = CS_BASE + 20;

const CS_NULL_BASIS_POINTS: i64 = 400;
const CS_NOT_NULL_MASK: i64 = 1 << 17;

/// Header fields shared by every line in one catalog order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CatalogOrderInfo {
    pub sold_date_sk: i64,
    pub sold_time_sk: i64,
    pub call_center_sk: i64,
    pub bill_customer_sk: i64,
    pub bill_cdemo_sk: i64,
    pub bill_hdemo_sk: i64,
    pub bill_addr_sk: i64,
    pub ship_customer_sk: i64,
    pub ship_cdemo_sk: i64,
    pub ship_hdemo_sk: i64,
    pub ship_addr_sk: i64,
    pub order_number: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogSalesRow {
    pub sold_date_sk: i64,
    pub sold_time_sk: i64,
    pub ship_date_sk: i64,
    pub bill_customer_sk: i64,
    pub bill_cdemo_sk: i64,
    pub bill_hdemo_sk: i64,
    pub bill_addr_sk: i64,
    pub ship_customer_sk: i64,
    pub ship_cdemo_sk: i64,
    pub ship_hdemo_sk: i64,
    pub ship_addr_sk: i64,
    pub call_center_sk: i64,
    pub catalog_page_sk: i64,
    pub ship_mode_sk: i64,
    pub warehouse_sk: i64,
    pub sold_item_sk: i64,
    pub promo_sk: i64,
    pub order_number: i64,
    pub pricing: Pricing,
    pub null_bitmap: i64,
    pub is_returned: bool,
}

pub struct CatalogSalesRowGenerator {
    scaling: Scaling,
    streams: RowStreams,
    item_permutation: Vec<i32>,
    item_count: i64,
    remaining_line_items: i64,
    item_index: i64,
    julian_date: i64,
    next_date_index: i64,
    order_info: CatalogOrderInfo,
    last_row_in_order: bool,
}

impl CatalogSalesRowGenerator {
    pub fn new(scale: f64) -> Result<CatalogSalesRowGenerator> {
        let scaling = Scaling::new(scale);
        embedded_store()?;
        Ok(CatalogSalesRowGenerator {
            scaling,
            streams: RowStreams::new(&[
                (CS_NULLS, NULL_SEEDS_PER_ROW),
                (CS_PERMUTATION, 0),
                (CS_LINE_COUNT, 1),
                (CS_SOLD_ITEM, 1),
                (CS_SOLD_TIME, JOIN_KEY_SEEDS_PER_ROW),
                (CS_CALL_CENTER, JOIN_KEY_SEEDS_PER_ROW),
                (CS_BILL_CUSTOMER, JOIN_KEY_SEEDS_PER_ROW),
                (CS_BILL_CDEMO, JOIN_KEY_SEEDS_PER_ROW),
                (CS_BILL_HDEMO, JOIN_KEY_SEEDS_PER_ROW),
                (CS_BILL_ADDR, JOIN_KEY_SEEDS_PER_ROW),
                (CS_SHIP_CUSTOMER, JOIN_KEY_SEEDS_PER_ROW + 1),
                (CS_SHIP_CDEMO, JOIN_KEY_SEEDS_PER_ROW),
                (CS_SHIP_HDEMO, JOIN_KEY_SEEDS_PER_ROW),
                (CS_SHIP_ADDR, JOIN_KEY_SEEDS_PER_ROW),
                (CS_CATALOG_PAGE, JOIN_KEY_SEEDS_PER_ROW),
                (CS_SHIP_MODE, JOIN_KEY_SEEDS_PER_ROW),
                (CS_WAREHOUSE, JOIN_KEY_SEEDS_PER_ROW),
                (CS_PROMO, JOIN_KEY_SEEDS_PER_ROW),
                (CS_SHIP_DATE, 1),
                (CS_PRICING, PRICING_SEEDS_PER_ROW),
                (CS_IS_RETURNED, 1),
            ]),
            item_permutation: Vec::new(),
            item_count: scaling.id_count(Table::Item),
            remaining_line_items: 0,
            item_index: 0,
            julian_date: JULIAN_DATA_START_DATE,
            next_date_index: 0,
            order_info: CatalogOrderInfo::default(),
            last_row_in_order: false,
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::CatalogSales)
    }

    pub fn last_row_in_order(&self) -> bool {
        self.last_row_in_order
    }

    fn ensure_permutation(&mut self) {
        if self.item_permutation.is_empty() {
            self.item_permutation =
                make_permutation(self.item_count, self.streams.stream(CS_PERMUTATION));
        }
    }

    fn advance_date(&mut self, order_number: i64) {
        while order_number > self.next_date_index {
            self.julian_date += 1;
            self.next_date_index +=
                self.scaling.row_count_for_date(Table::CatalogSales, self.julian_date);
        }
    }

    fn build_order_info(&mut self, order_number: i64) -> CatalogOrderInfo {
        self.advance_date(order_number);
        let sold_date_sk = self.julian_date;

        let sold_time_sk = generate_join_key(
            Table::TimeDim,
            self.streams.stream(CS_SOLD_TIME),
            &self.scaling,
        );
        let call_center_sk = generate_join_key(
            Table::CallCenter,
            self.streams.stream(CS_CALL_CENTER),
            &self.scaling,
        );
        let bill_customer_sk = generate_join_key(
            Table::Customer,
            self.streams.stream(CS_BILL_CUSTOMER),
            &self.scaling,
        );
        let bill_cdemo_sk = generate_join_key(
            Table::CustomerDemographics,
            self.streams.stream(CS_BILL_CDEMO),
            &self.scaling,
        );
        let bill_hdemo_sk = generate_join_key(
            Table::HouseholdDemographics,
            self.streams.stream(CS_BILL_HDEMO),
            &self.scaling,
        );
        let bill_addr_sk = generate_join_key(
            Table::CustomerAddress,
            self.streams.stream(CS_BILL_ADDR),
            &self.scaling,
        );

        // Most orders ship to the ordering customer; the rest are gifts.
        let gift = self.streams.stream(CS_SHIP_CUSTOMER).uniform_int(0, 99);
        let (ship_customer_sk, ship_cdemo_sk, ship_hdemo_sk, ship_addr_sk) = if gift < GIFT_PCT {
            (
                generate_join_key(
                    Table::Customer,
                    self.streams.stream(CS_SHIP_CUSTOMER),
                    &self.scaling,
                ),
                generate_join_key(
                    Table::CustomerDemographics,
                    self.streams.stream(CS_SHIP_CDEMO),
                    &self.scaling,
                ),
                generate_join_key(
                    Table::HouseholdDemographics,
                    self.streams.stream(CS_SHIP_HDEMO),
                    &self.scaling,
                ),
                generate_join_key(
                    Table::CustomerAddress,
                    self.streams.stream(CS_SHIP_ADDR),
                    &self.scaling,
                ),
            )
        } else {
            (bill_customer_sk, bill_cdemo_sk, bill_hdemo_sk, bill_addr_sk)
        };

        CatalogOrderInfo {
            sold_date_sk,
            sold_time_sk,
            call_center_sk,
            bill_customer_sk,
            bill_cdemo_sk,
            bill_hdemo_sk,
            bill_addr_sk,
            ship_customer_sk,
            ship_cdemo_sk,
            ship_hdemo_sk,
            ship_addr_sk,
            order_number,
        }
    }

    pub fn generate_row(&mut self, order_number: i64) -> CatalogSalesRow {
        self.ensure_permutation();

        if self.remaining_line_items == 0 {
            self.order_info = self.build_order_info(order_number);
            self.remaining_line_items = self
                .streams
                .stream(CS_LINE_COUNT)
                .uniform_int(CS_MIN_LINES_PER_ORDER, CS_MAX_LINES_PER_ORDER);
            self.item_index = self.streams.stream(CS_SOLD_ITEM).uniform_int(1, self.item_count);
        }

        let mut row = CatalogSalesRow {
            sold_date_sk: self.order_info.sold_date_sk,
            sold_time_sk: self.order_info.sold_time_sk,
            bill_customer_sk: self.order_info.bill_customer_sk,
            bill_cdemo_sk: self.order_info.bill_cdemo_sk,
            bill_hdemo_sk: self.order_info.bill_hdemo_sk,
            bill_addr_sk: self.order_info.bill_addr_sk,
            ship_customer_sk: self.order_info.ship_customer_sk,
            ship_cdemo_sk: self.order_info.ship_cdemo_sk,
            ship_hdemo_sk: self.order_info.ship_hdemo_sk,
            ship_addr_sk: self.order_info.ship_addr_sk,
            call_center_sk: self.order_info.call_center_sk,
            order_number: self.order_info.order_number,
            ..Default::default()
        };
        row.null_bitmap = generate_null_bitmap(
            CS_NULL_BASIS_POINTS,
            CS_NOT_NULL_MASK,
            self.streams.stream(CS_NULLS),
        );

        self.item_index += 1;
        if self.item_index > self.item_count {
            self.item_index = 1;
        }
        let item_id = self.item_permutation[(self.item_index - 1) as usize] as i64;
        row.sold_item_sk =
            match_surrogate_key(item_id, row.sold_date_sk, Table::Item, &self.scaling);

        row.catalog_page_sk = generate_join_key(
            Table::CatalogPage,
            self.streams.stream(CS_CATALOG_PAGE),
            &self.scaling,
        );
        row.ship_mode_sk =
            generate_join_key(Table::ShipMode, self.streams.stream(CS_SHIP_MODE), &self.scaling);
        row.warehouse_sk =
            generate_join_key(Table::Warehouse, self.streams.stream(CS_WAREHOUSE), &self.scaling);
        row.promo_sk =
            generate_join_key(Table::Promotion, self.streams.stream(CS_PROMO), &self.scaling);

        row.ship_date_sk = row.sold_date_sk
            + self.streams.stream(CS_SHIP_DATE).uniform_int(CS_MIN_SHIP_DELAY, CS_MAX_SHIP_DELAY);

        row.pricing = generate_pricing(&catalog_sales_limits(), self.streams.stream(CS_PRICING));
        row.is_returned =
            self.streams.stream(CS_IS_RETURNED).uniform_int(0, 99) < CR_RETURN_PCT;

        self.remaining_line_items -= 1;
        self.last_row_in_order = self.remaining_line_items == 0;
        row
    }

    pub fn skip_rows(&mut self, rows: i64) -> i64 {
        if rows <= 0 {
            return 0;
        }
        self.ensure_permutation();

        let mut row = 0i64;
        let mut orders = 0i64;
        loop {
            let line_count = probe_lane(CS_LINE_COUNT, 1, row)
                .uniform_int(CS_MIN_LINES_PER_ORDER, CS_MAX_LINES_PER_ORDER);
            if row + line_count <= rows {
                row += line_count;
                orders += 1;
                if row == rows {
                    self.remaining_line_items = 0;
                    self.last_row_in_order = true;
                    self.advance_date(orders);
                    break;
                }
                continue;
            }
            let consumed = rows - row;
            // The header was drawn at the order's first emitted row; rebuild
            // it from probes at that lane position.
            let saved_streams = std::mem::replace(
                &mut self.streams,
                RowStreams::new(&[
                    (CS_SOLD_TIME, JOIN_KEY_SEEDS_PER_ROW),
                    (CS_CALL_CENTER, JOIN_KEY_SEEDS_PER_ROW),
                    (CS_BILL_CUSTOMER, JOIN_KEY_SEEDS_PER_ROW),
                    (CS_BILL_CDEMO, JOIN_KEY_SEEDS_PER_ROW),
                    (CS_BILL_HDEMO, JOIN_KEY_SEEDS_PER_ROW),
                    (CS_BILL_ADDR, JOIN_KEY_SEEDS_PER_ROW),
                    (CS_SHIP_CUSTOMER, JOIN_KEY_SEEDS_PER_ROW + 1),
                    (CS_SHIP_CDEMO, JOIN_KEY_SEEDS_PER_ROW),
                    (CS_SHIP_HDEMO, JOIN_KEY_SEEDS_PER_ROW),
                    (CS_SHIP_ADDR, JOIN_KEY_SEEDS_PER_ROW),
                ]),
            );
            self.streams.skip_rows(row);
            self.order_info = self.build_order_info(orders + 1);
            self.streams = saved_streams;

            self.remaining_line_items = line_count - consumed;
            let mut item_index = probe_lane(CS_SOLD_ITEM, 1, row).uniform_int(1, self.item_count);
            item_index += consumed;
            while item_index > self.item_count {
                item_index -= self.item_count;
            }
            self.item_index = item_index;
            self.last_row_in_order = false;
            break;
        }

        self.streams.skip_rows(rows);
        orders
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// catalog_returns

const CR_BASE: usize = column_base(Table::CatalogReturns);
const CR_NULLS: usize = CR_BASE;
const CR_RETURN_LAG: usize = CR_BASE + 1;
const CR_RETURNED_TIME: usize = CR_BASE + 2;
const CR_REASON: usize = CR_BASE + 3;
const CR_PRICING: usize = CR_BASE + 4;
const CR_RETURNING_CUSTOMER: usize = CR_BASE + 5;

const CR_NULL_BASIS_POINTS: i64 = 400;
const CR_NOT_NULL_MASK: i64 = 1 << 16;
const CR_MAX_RETURN_LAG: i64 = 60;
const CR_RETURNING_CUSTOMER_PCT: i64 = 20;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogReturnsRow {
    pub returned_date_sk: i64,
    pub returned_time_sk: i64,
    pub item_sk: i64,
    pub refunded_customer_sk: i64,
    pub refunded_cdemo_sk: i64,
    pub refunded_hdemo_sk: i64,
    pub refunded_addr_sk: i64,
    pub returning_customer_sk: i64,
    pub returning_cdemo_sk: i64,
    pub returning_hdemo_sk: i64,
    pub returning_addr_sk: i64,
    pub call_center_sk: i64,
    pub catalog_page_sk: i64,
    pub ship_mode_sk: i64,
    pub warehouse_sk: i64,
    pub reason_sk: i64,
    pub order_number: i64,
    pub pricing: Pricing,
    pub null_bitmap: i64,
}

pub struct CatalogReturnsRowGenerator {
    scaling: Scaling,
    streams: RowStreams,
    sales: CatalogSalesRowGenerator,
    current_order: i64,
}

impl CatalogReturnsRowGenerator {
    pub fn new(scale: f64) -> Result<CatalogReturnsRowGenerator> {
        Ok(CatalogReturnsRowGenerator {
            scaling: Scaling::new(scale),
            streams: RowStreams::new(&[
                (CR_NULLS, NULL_SEEDS_PER_ROW),
                (CR_RETURN_LAG, 1),
                (CR_RETURNED_TIME, 1),
                (CR_REASON, JOIN_KEY_SEEDS_PER_ROW),
                (CR_PRICING, RETURN_PRICING_SEEDS_PER_ROW),
                (CR_RETURNING_CUSTOMER, JOIN_KEY_SEEDS_PER_ROW * 4 + 1),
            ]),
            sales: CatalogSalesRowGenerator::new(scale)?,
            current_order: 0,
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::CatalogReturns)
    }

    fn build_return(&mut self, sale: &CatalogSalesRow) -> CatalogReturnsRow {
        let mut row = CatalogReturnsRow {
            item_sk: sale.sold_item_sk,
            refunded_customer_sk: sale.bill_customer_sk,
            refunded_cdemo_sk: sale.bill_cdemo_sk,
            refunded_hdemo_sk: sale.bill_hdemo_sk,
            refunded_addr_sk: sale.bill_addr_sk,
            returning_customer_sk: sale.ship_customer_sk,
            returning_cdemo_sk: sale.ship_cdemo_sk,
            returning_hdemo_sk: sale.ship_hdemo_sk,
            returning_addr_sk: sale.ship_addr_sk,
            call_center_sk: sale.call_center_sk,
            catalog_page_sk: sale.catalog_page_sk,
            ship_mode_sk: sale.ship_mode_sk,
            warehouse_sk: sale.warehouse_sk,
            order_number: sale.order_number,
            ..Default::default()
        };
        row.null_bitmap = generate_null_bitmap(
            CR_NULL_BASIS_POINTS,
            CR_NOT_NULL_MASK,
            self.streams.stream(CR_NULLS),
        );
        row.returned_date_sk = sale.ship_date_sk
            + self.streams.stream(CR_RETURN_LAG).uniform_int(1, CR_MAX_RETURN_LAG);
        row.returned_time_sk =
            self.streams.stream(CR_RETURNED_TIME).uniform_int(0, SECONDS_PER_DAY - 1);
        row.reason_sk =
            generate_join_key(Table::Reason, self.streams.stream(CR_REASON), &self.scaling);
        row.pricing = generate_return_pricing(&sale.pricing, self.streams.stream(CR_PRICING));

        // Sometimes a third party returns the order.
        let other = self.streams.stream(CR_RETURNING_CUSTOMER).uniform_int(0, 99);
        if other < CR_RETURNING_CUSTOMER_PCT {
            row.returning_customer_sk = generate_join_key(
                Table::Customer,
                self.streams.stream(CR_RETURNING_CUSTOMER),
                &self.scaling,
            );
            row.returning_cdemo_sk = generate_join_key(
                Table::CustomerDemographics,
                self.streams.stream(CR_RETURNING_CUSTOMER),
                &self.scaling,
            );
            row.returning_hdemo_sk = generate_join_key(
                Table::HouseholdDemographics,
                self.streams.stream(CR_RETURNING_CUSTOMER),
                &self.scaling,
            );
            row.returning_addr_sk = generate_join_key(
                Table::CustomerAddress,
                self.streams.stream(CR_RETURNING_CUSTOMER),
                &self.scaling,
            );
        }
        row
    }

    pub fn generate_row(&mut self, _row_number: i64) -> CatalogReturnsRow {
        loop {
            let sale = self.sales.generate_row(self.current_order + 1);
            let last = self.sales.last_row_in_order();
            let returned = sale.is_returned;
            let result = if returned { Some(self.build_return(&sale)) } else { None };
            self.sales.consume_remaining_seeds_for_row();
            if last {
                self.current_order += 1;
            }
            if let Some(row) = result {
                return row;
            }
        }
    }

    pub fn skip_rows(&mut self, rows: i64) {
        for i in 0..rows {
            let _ = self.generate_row(i + 1);
            self.consume_remaining_seeds_for_row();
        }
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// web_sales

const WS_BASE: usize = column_base(Table::WebSales);
const WS_NULLS: usize = WS_BASE;
const WS_PERMUTATION: usize = WS_BASE + 1;
const WS_LINE_COUNT: usize = WS_BASE + 2;
const WS_SOLD_ITEM: usize = WS_BASE + 3;
const WS_SOLD_TIME: usize = WS_BASE + 4;
const WS_BILL_CUSTOMER: usize = WS_BASE + 5;
const WS_BILL_CDEMO: usize = WS_BASE + 6;
const WS_BILL_HDEMO: usize = WS_BASE + 7;
const WS_BILL_ADDR: usize = WS_BASE + 8;
const WS_SHIP_CUSTOMER: usize = WS_BASE + 9;
const WS_SHIP_CDEMO: usize = WS_BASE + 10;
const WS_SHIP_HDEMO: usize = WS_BASE + 11;
const WS_SHIP_ADDR: usize = WS_BASE + 12;
const WS_WEB_PAGE: usize = WS_BASE + 13;
const WS_WEB_SITE: usize = WS_BASE + 14;
const WS_SHIP_MODE: usize = WS_BASE + 15;
const WS_WAREHOUSE: usize = WS_BASE + 16;
const WS_PROMO: usize = WS_BASE + 17;
const WS_SHIP_DATE: usize = WS_BASE + 18;
const WS_PRICING: usize = WS_BASE + 19;
const WS_IS_RETURNED: usize = WS_BASE + 20;

const WS_NULL_BASIS_POINTS: i64 = 400;
const WS_NOT_NULL_MASK: i64 = 1 << 17;

/// Header fields shared by every line in one web order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WebOrderInfo {
    pub sold_date_sk: i64,
    pub sold_time_sk: i64,
    pub bill_customer_sk: i64,
    pub bill_cdemo_sk: i64,
    pub bill_hdemo_sk: i64,
    pub bill_addr_sk: i64,
    pub ship_customer_sk: i64,
    pub ship_cdemo_sk: i64,
    pub ship_hdemo_sk: i64,
    pub ship_addr_sk: i64,
    pub web_site_sk: i64,
    pub order_number: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WebSalesRow {
    pub sold_date_sk: i64,
    pub sold_time_sk: i64,
    pub ship_date_sk: i64,
    pub item_sk: i64,
    pub bill_customer_sk: i64,
    pub bill_cdemo_sk: i64,
    pub bill_hdemo_sk: i64,
    pub bill_addr_sk: i64,
    pub ship_customer_sk: i64,
    pub ship_cdemo_sk: i64,
    pub ship_hdemo_sk: i64,
    pub ship_addr_sk: i64,
    pub web_page_sk: i64,
    pub web_site_sk: i64,
    pub ship_mode_sk: i64,
    pub warehouse_sk: i64,
    pub promo_sk: i64,
    pub order_number: i64,
    pub pricing: Pricing,
    pub null_bitmap: i64,
    pub is_returned: bool,
}

pub struct WebSalesRowGenerator {
    scaling: Scaling,
    streams: RowStreams,
    item_permutation: Vec<i32>,
    item_count: i64,
    remaining_line_items: i64,
    item_index: i64,
    julian_date: i64,
    next_date_index: i64,
    order_info: WebOrderInfo,
    last_row_in_order: bool,
}

impl WebSalesRowGenerator {
    pub fn new(scale: f64) -> Result<WebSalesRowGenerator> {
        let scaling = Scaling::new(scale);
        embedded_store()?;
        Ok(WebSalesRowGenerator {
            scaling,
            streams: RowStreams::new(&[
                (WS_NULLS, NULL_SEEDS_PER_ROW),
                (WS_PERMUTATION, 0),
                (WS_LINE_COUNT, 1),
                (WS_SOLD_ITEM, 1),
                (WS_SOLD_TIME, JOIN_KEY_SEEDS_PER_ROW),
                (WS_BILL_CUSTOMER, JOIN_KEY_SEEDS_PER_ROW),
                (WS_BILL_CDEMO, JOIN_KEY_SEEDS_PER_ROW),
                (WS_BILL_HDEMO, JOIN_KEY_SEEDS_PER_ROW),
                (WS_BILL_ADDR, JOIN_KEY_SEEDS_PER_ROW),
                (WS_SHIP_CUSTOMER, JOIN_KEY_SEEDS_PER_ROW + 1),
                (WS_SHIP_CDEMO, JOIN_KEY_SEEDS_PER_ROW),
                (WS_SHIP_HDEMO, JOIN_KEY_SEEDS_PER_ROW),
                (WS_SHIP_ADDR, JOIN_KEY_SEEDS_PER_ROW),
                (WS_WEB_PAGE, JOIN_KEY_SEEDS_PER_ROW),
                (WS_WEB_SITE, JOIN_KEY_SEEDS_PER_ROW),
                (WS_SHIP_MODE, JOIN_KEY_SEEDS_PER_ROW),
                (WS_WAREHOUSE, JOIN_KEY_SEEDS_PER_ROW),
                (WS_PROMO, JOIN_KEY_SEEDS_PER_ROW),
                (WS_SHIP_DATE, 1),
                (WS_PRICING, PRICING_SEEDS_PER_ROW),
                (WS_IS_RETURNED, 1),
            ]),
            item_permutation: Vec::new(),
            item_count: scaling.id_count(Table::Item),
            remaining_line_items: 0,
            item_index: 0,
            julian_date: JULIAN_DATA_START_DATE,
            next_date_index: 0,
            order_info: WebOrderInfo::default(),
            last_row_in_order: false,
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::WebSales)
    }

    pub fn last_row_in_order(&self) -> bool {
        self.last_row_in_order
    }

    fn ensure_permutation(&mut self) {
        if self.item_permutation.is_empty() {
            self.item_permutation =
                make_permutation(self.item_count, self.streams.stream(WS_PERMUTATION));
        }
    }

    fn advance_date(&mut self, order_number: i64) {
        while order_number > self.next_date_index {
            self.julian_date += 1;
            self.next_date_index +=
                self.scaling.row_count_for_date(Table::WebSales, self.julian_date);
        }
    }

    fn build_order_info(&mut self, order_number: i64) -> WebOrderInfo {
        self.advance_date(order_number);
        let sold_date_sk = self.julian_date;

        let sold_time_sk =
            generate_join_key(Table::TimeDim, self.streams.stream(WS_SOLD_TIME), &self.scaling);
        let bill_customer_sk = generate_join_key(
            Table::Customer,
            self.streams.stream(WS_BILL_CUSTOMER),
            &self.scaling,
        );
        let bill_cdemo_sk = generate_join_key(
            Table::CustomerDemographics,
            self.streams.stream(WS_BILL_CDEMO),
            &self.scaling,
        );
        let bill_hdemo_sk = generate_join_key(
            Table::HouseholdDemographics,
            self.streams.stream(WS_BILL_HDEMO),
            &self.scaling,
        );
        let bill_addr_sk = generate_join_key(
            Table::CustomerAddress,
            self.streams.stream(WS_BILL_ADDR),
            &self.scaling,
        );

        let gift = self.streams.stream(WS_SHIP_CUSTOMER).uniform_int(0, 99);
        let (ship_customer_sk, ship_cdemo_sk, ship_hdemo_sk, ship_addr_sk) = if gift < GIFT_PCT {
            (
                generate_join_key(
                    Table::Customer,
                    self.streams.stream(WS_SHIP_CUSTOMER),
                    &self.scaling,
                ),
                generate_join_key(
                    Table::CustomerDemographics,
                    self.streams.stream(WS_SHIP_CDEMO),
                    &self.scaling,
                ),
                generate_join_key(
                    Table::HouseholdDemographics,
                    self.streams.stream(WS_SHIP_HDEMO),
                    &self.scaling,
                ),
                generate_join_key(
                    Table::CustomerAddress,
                    self.streams.stream(WS_SHIP_ADDR),
                    &self.scaling,
                ),
            )
        } else {
            (bill_customer_sk, bill_cdemo_sk, bill_hdemo_sk, bill_addr_sk)
        };

        let web_site_sk =
            generate_join_key(Table::WebSite, self.streams.stream(WS_WEB_SITE), &self.scaling);

        WebOrderInfo {
            sold_date_sk,
            sold_time_sk,
            bill_customer_sk,
            bill_cdemo_sk,
            bill_hdemo_sk,
            bill_addr_sk,
            ship_customer_sk,
            ship_cdemo_sk,
            ship_hdemo_sk,
            ship_addr_sk,
            web_site_sk,
            order_number,
        }
    }

    pub fn generate_row(&mut self, order_number: i64) -> WebSalesRow {
        self.ensure_permutation();

        if self.remaining_line_items == 0 {
            self.order_info = self.build_order_info(order_number);
            self.remaining_line_items = self
                .streams
                .stream(WS_LINE_COUNT)
                .uniform_int(WS_MIN_LINES_PER_ORDER, WS_MAX_LINES_PER_ORDER);
            self.item_index = self.streams.stream(WS_SOLD_ITEM).uniform_int(1, self.item_count);
        }

        let mut row = WebSalesRow {
            sold_date_sk: self.order_info.sold_date_sk,
            sold_time_sk: self.order_info.sold_time_sk,
            bill_customer_sk: self.order_info.bill_customer_sk,
            bill_cdemo_sk: self.order_info.bill_cdemo_sk,
            bill_hdemo_sk: self.order_info.bill_hdemo_sk,
            bill_addr_sk: self.order_info.bill_addr_sk,
            ship_customer_sk: self.order_info.ship_customer_sk,
            ship_cdemo_sk: self.order_info.ship_cdemo_sk,
            ship_hdemo_sk: self.order_info.ship_hdemo_sk,
            ship_addr_sk: self.order_info.ship_addr_sk,
            web_site_sk: self.order_info.web_site_sk,
            order_number: self.order_info.order_number,
            ..Default::default()
        };
        row.null_bitmap = generate_null_bitmap(
            WS_NULL_BASIS_POINTS,
            WS_NOT_NULL_MASK,
            self.streams.stream(WS_NULLS),
        );

        self.item_index += 1;
        if self.item_index > self.item_count {
            self.item_index = 1;
        }
        let item_id = self.item_permutation[(self.item_index - 1) as usize] as i64;
        row.item_sk = match_surrogate_key(item_id, row.sold_date_sk, Table::Item, &self.scaling);

        row.web_page_sk =
            generate_join_key(Table::WebPage, self.streams.stream(WS_WEB_PAGE), &self.scaling);
        row.ship_mode_sk =
            generate_join_key(Table::ShipMode, self.streams.stream(WS_SHIP_MODE), &self.scaling);
        row.warehouse_sk =
            generate_join_key(Table::Warehouse, self.streams.stream(WS_WAREHOUSE), &self.scaling);
        row.promo_sk =
            generate_join_key(Table::Promotion, self.streams.stream(WS_PROMO), &self.scaling);

        row.ship_date_sk = row.sold_date_sk
            + self.streams.stream(WS_SHIP_DATE).uniform_int(CS_MIN_SHIP_DELAY, CS_MAX_SHIP_DELAY);

        row.pricing = generate_pricing(&web_sales_limits(), self.streams.stream(WS_PRICING));
        row.is_returned =
            self.streams.stream(WS_IS_RETURNED).uniform_int(0, 99) < WR_RETURN_PCT;

        self.remaining_line_items -= 1;
        self.last_row_in_order = self.remaining_line_items == 0;
        row
    }

    pub fn skip_rows(&mut self, rows: i64) -> i64 {
        if rows <= 0 {
            return 0;
        }
        self.ensure_permutation();

        let mut row = 0i64;
        let mut orders = 0i64;
        loop {
            let line_count = probe_lane(WS_LINE_COUNT, 1, row)
                .uniform_int(WS_MIN_LINES_PER_ORDER, WS_MAX_LINES_PER_ORDER);
            if row + line_count <= rows {
                row += line_count;
                orders += 1;
                if row == rows {
                    self.remaining_line_items = 0;
                    self.last_row_in_order = true;
                    self.advance_date(orders);
                    break;
                }
                continue;
            }
            let consumed = rows - row;
            let saved_streams = std::mem::replace(
                &mut self.streams,
                RowStreams::new(&[
                    (WS_SOLD_TIME, JOIN_KEY_SEEDS_PER_ROW),
                    (WS_BILL_CUSTOMER, JOIN_KEY_SEEDS_PER_ROW),
                    (WS_BILL_CDEMO, JOIN_KEY_SEEDS_PER_ROW),
                    (WS_BILL_HDEMO, JOIN_KEY_SEEDS_PER_ROW),
                    (WS_BILL_ADDR, JOIN_KEY_SEEDS_PER_ROW),
                    (WS_SHIP_CUSTOMER, JOIN_KEY_SEEDS_PER_ROW + 1),
                    (WS_SHIP_CDEMO, JOIN_KEY_SEEDS_PER_ROW),
                    (WS_SHIP_HDEMO, JOIN_KEY_SEEDS_PER_ROW),
                    (WS_SHIP_ADDR, JOIN_KEY_SEEDS_PER_ROW),
                    (WS_WEB_SITE, JOIN_KEY_SEEDS_PER_ROW),
                ]),
            );
            self.streams.skip_rows(row);
            self.order_info = self.build_order_info(orders + 1);
            self.streams = saved_streams;

            self.remaining_line_items = line_count - consumed;
            let mut item_index = probe_lane(WS_SOLD_ITEM, 1, row).uniform_int(1, self.item_count);
            item_index += consumed;
            while item_index > self.item_count {
                item_index -= self.item_count;
            }
            self.item_index = item_index;
            self.last_row_in_order = false;
            break;
        }

        self.streams.skip_rows(rows);
        orders
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// web_returns

const WR_BASE: usize = column_base(Table::WebReturns);
const WR_NULLS: usize = WR_BASE;
const WR_RETURN_LAG: usize = WR_BASE + 1;
const WR_RETURNED_TIME: usize = WR_BASE + 2;
const WR_REASON: usize = WR_BASE + 3;
const WR_PRICING: usize = WR_BASE + 4;
const WR_RETURNING_CUSTOMER: usize = WR_BASE + 5;

const WR_NULL_BASIS_POINTS: i64 = 400;
const WR_NOT_NULL_MASK: i64 = 1 << 13;
const WR_MAX_RETURN_LAG: i64 = 60;
const WR_RETURNING_CUSTOMER_PCT: i64 = 20;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WebReturnsRow {
    pub returned_date_sk: i64,
    pub returned_time_sk: i64,
    pub item_sk: i64,
    pub refunded_customer_sk: i64,
    pub refunded_cdemo_sk: i64,
    pub refunded_hdemo_sk: i64,
    pub refunded_addr_sk: i64,
    pub returning_customer_sk: i64,
    pub returning_cdemo_sk: i64,
    pub returning_hdemo_sk: i64,
    pub returning_addr_sk: i64,
    pub web_page_sk: i64,
    pub reason_sk: i64,
    pub order_number: i64,
    pub pricing: Pricing,
    pub null_bitmap: i64,
}

pub struct WebReturnsRowGenerator {
    scaling: Scaling,
    streams: RowStreams,
    sales: WebSalesRowGenerator,
    current_order: i64,
}

impl WebReturnsRowGenerator {
    pub fn new(scale: f64) -> Result<WebReturnsRowGenerator> {
        Ok(WebReturnsRowGenerator {
            scaling: Scaling::new(scale),
            streams: RowStreams::new(&[
                (WR_NULLS, NULL_SEEDS_PER_ROW),
                (WR_RETURN_LAG, 1),
                (WR_RETURNED_TIME, 1),
                (WR_REASON, JOIN_KEY_SEEDS_PER_ROW),
                (WR_PRICING, RETURN_PRICING_SEEDS_PER_ROW),
                (WR_RETURNING_CUSTOMER, JOIN_KEY_SEEDS_PER_ROW * 4 + 1),
            ]),
            sales: WebSalesRowGenerator::new(scale)?,
            current_order: 0,
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::WebReturns)
    }

    fn build_return(&mut self, sale: &WebSalesRow) -> WebReturnsRow {
        let mut row = WebReturnsRow {
            item_sk: sale.item_sk,
            refunded_customer_sk: sale.bill_customer_sk,
            refunded_cdemo_sk: sale.bill_cdemo_sk,
            refunded_hdemo_sk: sale.bill_hdemo_sk,
            refunded_addr_sk: sale.bill_addr_sk,
            returning_customer_sk: sale.ship_customer_sk,
            returning_cdemo_sk: sale.ship_cdemo_sk,
            returning_hdemo_sk: sale.ship_hdemo_sk,
            returning_addr_sk: sale.ship_addr_sk,
            web_page_sk: sale.web_page_sk,
            order_number: sale.order_number,
            ..Default::default()
        };
        row.null_bitmap = generate_null_bitmap(
            WR_NULL_BASIS_POINTS,
            WR_NOT_NULL_MASK,
            self.streams.stream(WR_NULLS),
        );
        row.returned_date_sk = sale.ship_date_sk
            + self.streams.stream(WR_RETURN_LAG).uniform_int(1, WR_MAX_RETURN_LAG);
        row.returned_time_sk =
            self.streams.stream(WR_RETURNED_TIME).uniform_int(0, SECONDS_PER_DAY - 1);
        row.reason_sk =
            generate_join_key(Table::Reason, self.streams.stream(WR_REASON), &self.scaling);
        row.pricing = generate_return_pricing(&sale.pricing, self.streams.stream(WR_PRICING));

        let other = self.streams.stream(WR_RETURNING_CUSTOMER).uniform_int(0, 99);
        if other < WR_RETURNING_CUSTOMER_PCT {
            row.returning_customer_sk = generate_join_key(
                Table::Customer,
                self.streams.stream(WR_RETURNING_CUSTOMER),
                &self.scaling,
            );
            row.returning_cdemo_sk = generate_join_key(
                Table::CustomerDemographics,
                self.streams.stream(WR_RETURNING_CUSTOMER),
                &self.scaling,
            );
            row.returning_hdemo_sk = generate_join_key(
                Table::HouseholdDemographics,
                self.streams.stream(WR_RETURNING_CUSTOMER),
                &self.scaling,
            );
            row.returning_addr_sk = generate_join_key(
                Table::CustomerAddress,
                self.streams.stream(WR_RETURNING_CUSTOMER),
                &self.scaling,
            );
        }
        row
    }

    pub fn generate_row(&mut self, _row_number: i64) -> WebReturnsRow {
        loop {
            let sale = self.sales.generate_row(self.current_order + 1);
            let last = self.sales.last_row_in_order();
            let returned = sale.is_returned;
            let result = if returned { Some(self.build_return(&sale)) } else { None };
            self.sales.consume_remaining_seeds_for_row();
            if last {
                self.current_order += 1;
            }
            if let Some(row) = result {
                return row;
            }
        }
    }

    pub fn skip_rows(&mut self, rows: i64) {
        for i in 0..rows {
            let _ = self.generate_row(i + 1);
            self.consume_remaining_seeds_for_row();
        }
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

// -------------------------------------------------------------------------
// inventory

const INV_BASE: usize = column_base(Table::Inventory);
const INV_NULLS: usize = INV_BASE;
const INV_QUANTITY: usize = INV_BASE + 1;

const INV_NULL_BASIS_POINTS: i64 = 400;
const INV_NOT_NULL_MASK: i64 = 0b111;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryRow {
    pub date_sk: i64,
    pub item_sk: i64,
    pub warehouse_sk: i64,
    pub quantity_on_hand: i32,
    pub null_bitmap: i64,
}

pub struct InventoryRowGenerator {
    scaling: Scaling,
    streams: RowStreams,
    item_count: i64,
    warehouse_count: i64,
}

impl InventoryRowGenerator {
    pub fn new(scale: f64) -> Result<InventoryRowGenerator> {
        let scaling = Scaling::new(scale);
        // Force the embedded store to load so construction surfaces errors.
        embedded_store()?;
        Ok(InventoryRowGenerator {
            scaling,
            streams: RowStreams::new(&[
                (INV_NULLS, NULL_SEEDS_PER_ROW),
                (INV_QUANTITY, 1),
            ]),
            item_count: scaling.id_count(Table::Item),
            warehouse_count: scaling.row_count(Table::Warehouse),
        })
    }

    pub fn total_rows(&self) -> i64 {
        self.scaling.row_count(Table::Inventory)
    }

    pub fn skip_rows(&mut self, rows: i64) {
        self.streams.skip_rows(rows);
    }

    pub fn generate_row(&mut self, row_number: i64) -> InventoryRow {
        let mut row = InventoryRow::default();
        row.null_bitmap = generate_null_bitmap(
            INV_NULL_BASIS_POINTS,
            INV_NOT_NULL_MASK,
            self.streams.stream(INV_NULLS),
        );

        // Weekly snapshots walk item fastest, then warehouse, then week.
        let mut index = row_number - 1;
        let item_index = index % self.item_count;
        index /= self.item_count;
        row.warehouse_sk = index % self.warehouse_count + 1;
        index /= self.warehouse_count;
        row.date_sk = JULIAN_DATA_START_DATE + index * 7;
        row.item_sk = match_surrogate_key(item_index + 1, row.date_sk, Table::Item, &self.scaling);

        row.quantity_on_hand = self.streams.stream(INV_QUANTITY).uniform_int(0, 1_000) as i32;
        row
    }

    pub fn consume_remaining_seeds_for_row(&mut self) {
        self.streams.consume_remaining_seeds_for_row();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive_store_sales(count: i64) -> (Vec<StoreSalesRow>, i64) {
        let mut generator = StoreSalesRowGenerator::new(1.0).unwrap();
        let mut rows = Vec::new();
        let mut current_order = 0i64;
        for _ in 0..count {
            let row = generator.generate_row(current_order + 1);
            generator.consume_remaining_seeds_for_row();
            if generator.last_row_in_ticket() {
                current_order += 1;
            }
            rows.push(row);
        }
        (rows, current_order)
    }

    #[test]
    fn tickets_share_headers() {
        let (rows, _) = drive_store_sales(40);
        let first_ticket = rows[0].ticket_number;
        for row in rows.iter().take_while(|r| r.ticket_number == first_ticket) {
            assert_eq!(row.sold_customer_sk, rows[0].sold_customer_sk);
            assert_eq!(row.sold_store_sk, rows[0].sold_store_sk);
            assert_eq!(row.sold_date_sk, rows[0].sold_date_sk);
        }
        // Line counts stay within the declared band.
        let ticket_len = rows.iter().filter(|r| r.ticket_number == first_ticket).count() as i64;
        assert!((SS_MIN_LINES_PER_TICKET..=SS_MAX_LINES_PER_TICKET).contains(&ticket_len));
    }

    #[test]
    fn store_sales_skip_lands_mid_ticket() {
        let (rows, _) = drive_store_sales(30);

        // Row 20 sits inside a ticket for every line-count draw in 8..=16.
        let mut skipped = StoreSalesRowGenerator::new(1.0).unwrap();
        let orders = skipped.skip_rows(20);
        let row = skipped.generate_row(orders + 1);
        assert_eq!(row, rows[20]);
    }

    #[test]
    fn store_sales_skip_at_ticket_boundary() {
        let (rows, _) = drive_store_sales(60);
        // Find a ticket boundary.
        let mut boundary = 0usize;
        for i in 1..rows.len() {
            if rows[i].ticket_number != rows[i - 1].ticket_number {
                boundary = i;
                break;
            }
        }
        let mut skipped = StoreSalesRowGenerator::new(1.0).unwrap();
        let orders = skipped.skip_rows(boundary as i64);
        assert!(skipped.last_row_in_ticket());
        let row = skipped.generate_row(orders + 1);
        assert_eq!(row, rows[boundary]);
    }

    #[test]
    fn catalog_sales_skip_equivalence() {
        let mut sequential = CatalogSalesRowGenerator::new(1.0).unwrap();
        let mut rows = Vec::new();
        let mut current_order = 0i64;
        for _ in 0..25 {
            let row = sequential.generate_row(current_order + 1);
            sequential.consume_remaining_seeds_for_row();
            if sequential.last_row_in_order() {
                current_order += 1;
            }
            rows.push(row);
        }

        let mut skipped = CatalogSalesRowGenerator::new(1.0).unwrap();
        let orders = skipped.skip_rows(20);
        let row = skipped.generate_row(orders + 1);
        assert_eq!(row, rows[20]);
    }

    #[test]
    fn web_sales_skip_equivalence() {
        let mut sequential = WebSalesRowGenerator::new(1.0).unwrap();
        let mut rows = Vec::new();
        let mut current_order = 0i64;
        for _ in 0..25 {
            let row = sequential.generate_row(current_order + 1);
            sequential.consume_remaining_seeds_for_row();
            if sequential.last_row_in_order() {
                current_order += 1;
            }
            rows.push(row);
        }

        let mut skipped = WebSalesRowGenerator::new(1.0).unwrap();
        let orders = skipped.skip_rows(20);
        let row = skipped.generate_row(orders + 1);
        assert_eq!(row, rows[20]);
    }

    #[test]
    fn store_returns_skip_equivalence() {
        let mut sequential = StoreReturnsRowGenerator::new(1.0).unwrap();
        let mut rows = Vec::new();
        for i in 0..8 {
            rows.push(sequential.generate_row(i + 1));
            sequential.consume_remaining_seeds_for_row();
        }

        let mut skipped = StoreReturnsRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(5);
        assert_eq!(skipped.generate_row(6), rows[5]);
    }

    #[test]
    fn returns_lag_their_sales() {
        let mut returns = StoreReturnsRowGenerator::new(1.0).unwrap();
        for i in 0..8 {
            let row = returns.generate_row(i + 1);
            returns.consume_remaining_seeds_for_row();
            assert!(row.returned_date_sk > JULIAN_DATA_START_DATE);
            assert!(row.pricing.quantity >= 1);
            assert!(row.reason_sk >= 1);
        }
    }

    #[test]
    fn web_returns_skip_equivalence() {
        let mut sequential = WebReturnsRowGenerator::new(1.0).unwrap();
        let mut rows = Vec::new();
        for i in 0..8 {
            rows.push(sequential.generate_row(i + 1));
            sequential.consume_remaining_seeds_for_row();
        }

        let mut skipped = WebReturnsRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(5);
        assert_eq!(skipped.generate_row(6), rows[5]);
    }

    #[test]
    fn catalog_returns_skip_equivalence() {
        let mut sequential = CatalogReturnsRowGenerator::new(1.0).unwrap();
        let mut rows = Vec::new();
        for i in 0..8 {
            rows.push(sequential.generate_row(i + 1));
            sequential.consume_remaining_seeds_for_row();
        }

        let mut skipped = CatalogReturnsRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(5);
        assert_eq!(skipped.generate_row(6), rows[5]);
    }

    #[test]
    fn inventory_walks_the_dense_product() {
        let mut inventory = InventoryRowGenerator::new(1.0).unwrap();
        let first = inventory.generate_row(1);
        inventory.consume_remaining_seeds_for_row();
        assert_eq!(first.date_sk, JULIAN_DATA_START_DATE);
        assert_eq!(first.warehouse_sk, 1);

        // Second row advances the item only.
        let second = inventory.generate_row(2);
        inventory.consume_remaining_seeds_for_row();
        assert_eq!(second.date_sk, first.date_sk);
        assert_eq!(second.warehouse_sk, 1);

        // One full item cycle advances the warehouse.
        let item_count = Scaling::new(1.0).id_count(Table::Item);
        let row = inventory.generate_row(item_count + 1);
        assert_eq!(row.warehouse_sk, 2);

        // Skip equivalence on index math plus streams.
        let mut sequential = InventoryRowGenerator::new(1.0).unwrap();
        let mut expected = InventoryRow::default();
        for i in 0..7 {
            expected = sequential.generate_row(i + 1);
            sequential.consume_remaining_seeds_for_row();
        }
        let mut skipped = InventoryRowGenerator::new(1.0).unwrap();
        skipped.skip_rows(6);
        assert_eq!(skipped.generate_row(7), expected);
    }
}
