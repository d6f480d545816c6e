// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! The sales pricing sub-record: a fixed-order draw sequence shared by the
//! three sales channels, in scaled cents throughout.

use crate::tpcds::random::RandomNumberStream;

/// Seeds one pricing block consumes per row.
pub const PRICING_SEEDS_PER_ROW: i64 = 7;

/// Channel-specific pricing bounds, in cents.
#[derive(Clone, Copy, Debug)]
pub struct PricingLimits {
    pub max_quantity: i64,
    pub min_wholesale: i64,
    pub max_wholesale: i64,
    pub max_markup_pct: i64,
    pub max_coupon_pct: i64,
    pub max_ship_pct: i64,
    pub max_tax_pct: i64,
}

/// Store channel bounds.
pub fn store_sales_limits() -> PricingLimits {
    PricingLimits {
        max_quantity: 100,
        min_wholesale: 100,
        max_wholesale: 10_000,
        max_markup_pct: 100,
        max_coupon_pct: 50,
        max_ship_pct: 0,
        max_tax_pct: 9,
    }
}

/// Catalog channel bounds.
pub fn catalog_sales_limits() -> PricingLimits {
    PricingLimits {
        max_quantity: 100,
        min_wholesale: 100,
        max_wholesale: 10_000,
        max_markup_pct: 200,
        max_coupon_pct: 50,
        max_ship_pct: 50,
        max_tax_pct: 9,
    }
}

/// Web channel bounds.
pub fn web_sales_limits() -> PricingLimits {
    PricingLimits {
        max_quantity: 100,
        min_wholesale: 100,
        max_wholesale: 10_000,
        max_markup_pct: 200,
        max_coupon_pct: 50,
        max_ship_pct: 50,
        max_tax_pct: 9,
    }
}

/// All monetary columns of one sales line, in cents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pricing {
    pub quantity: i64,
    pub wholesale_cost: i64,
    pub list_price: i64,
    pub sales_price: i64,
    pub ext_discount_amt: i64,
    pub ext_sales_price: i64,
    pub ext_wholesale_cost: i64,
    pub ext_list_price: i64,
    pub tax_pct: i64,
    pub ext_tax: i64,
    pub coupon_amt: i64,
    pub ship_cost: i64,
    pub ext_ship_cost: i64,
    pub net_paid: i64,
    pub net_paid_inc_tax: i64,
    pub net_paid_inc_ship: i64,
    pub net_paid_inc_ship_tax: i64,
    pub net_profit: i64,
    pub refunded_cash: i64,
    pub reversed_charge: i64,
    pub store_credit: i64,
    pub fee: i64,
    pub net_loss: i64,
}

/// Draws one pricing block: quantity, wholesale, markup, discount, coupon,
/// shipping, tax — in that order — then derives the extended columns.
pub fn generate_pricing(limits: &PricingLimits, stream: &mut RandomNumberStream) -> Pricing {
    let mut pricing = Pricing::default();

    pricing.quantity = stream.uniform_int(1, limits.max_quantity);
    pricing.wholesale_cost = stream.uniform_int(limits.min_wholesale, limits.max_wholesale);

    // Markup and discount are percentages in hundredths.
    let markup = stream.uniform_int(0, limits.max_markup_pct * 100);
    pricing.list_price = pricing.wholesale_cost * (10_000 + markup) / 10_000;

    let discount = stream.uniform_int(0, 10_000);
    pricing.sales_price = pricing.list_price * (10_000 - discount) / 10_000;

    let coupon = stream.uniform_int(0, limits.max_coupon_pct * 100);
    let ship = stream.uniform_int(0, limits.max_ship_pct * 100);
    pricing.tax_pct = stream.uniform_int(0, limits.max_tax_pct * 100);

    pricing.ext_wholesale_cost = pricing.wholesale_cost * pricing.quantity;
    pricing.ext_list_price = pricing.list_price * pricing.quantity;
    pricing.ext_sales_price = pricing.sales_price * pricing.quantity;
    pricing.ext_discount_amt = pricing.ext_list_price - pricing.ext_sales_price;
    pricing.coupon_amt = pricing.ext_sales_price * coupon / 10_000;
    pricing.net_paid = pricing.ext_sales_price - pricing.coupon_amt;
    pricing.ship_cost = pricing.list_price * ship / 10_000;
    pricing.ext_ship_cost = pricing.ship_cost * pricing.quantity;
    pricing.ext_tax = pricing.net_paid * pricing.tax_pct / 10_000;
    pricing.net_paid_inc_tax = pricing.net_paid + pricing.ext_tax;
    pricing.net_paid_inc_ship = pricing.net_paid + pricing.ext_ship_cost;
    pricing.net_paid_inc_ship_tax = pricing.net_paid_inc_ship + pricing.ext_tax;
    pricing.net_profit = pricing.net_paid - pricing.ext_wholesale_cost;

    pricing
}

/// Seeds one returns pricing block consumes.
pub const RETURN_PRICING_SEEDS_PER_ROW: i64 = 3;

/// Derives the refund columns for a partial return of `sale`: quantity
/// returned, then a three-way split of the refund.
pub fn generate_return_pricing(sale: &Pricing, stream: &mut RandomNumberStream) -> Pricing {
    let mut pricing = sale.clone();

    pricing.quantity = stream.uniform_int(1, sale.quantity);
    let ratio_num = pricing.quantity;
    let ratio_den = sale.quantity.max(1);

    pricing.ext_sales_price = sale.sales_price * pricing.quantity;
    pricing.ext_list_price = sale.list_price * pricing.quantity;
    pricing.ext_wholesale_cost = sale.wholesale_cost * pricing.quantity;
    pricing.ext_discount_amt = pricing.ext_list_price - pricing.ext_sales_price;
    pricing.coupon_amt = sale.coupon_amt * ratio_num / ratio_den;
    pricing.net_paid = pricing.ext_sales_price - pricing.coupon_amt;
    pricing.ext_tax = pricing.net_paid * sale.tax_pct / 10_000;
    pricing.net_paid_inc_tax = pricing.net_paid + pricing.ext_tax;

    // Refund split: cash, reversed charge, store credit.
    let cash_pct = stream.uniform_int(0, 100);
    pricing.refunded_cash = pricing.net_paid * cash_pct / 100;
    let charge_pct = stream.uniform_int(0, 100);
    let remainder = pricing.net_paid - pricing.refunded_cash;
    pricing.reversed_charge = remainder * charge_pct / 100;
    pricing.store_credit = remainder - pricing.reversed_charge;

    pricing.fee = pricing.ext_ship_cost / 2;
    pricing.ship_cost = sale.ship_cost;
    pricing.ext_ship_cost = sale.ship_cost * pricing.quantity;
    pricing.net_loss = pricing.net_paid_inc_tax - pricing.store_credit + pricing.ext_ship_cost / 2;

    pricing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_budget_and_identities() {
        let mut stream = RandomNumberStream::new(41, PRICING_SEEDS_PER_ROW);
        let limits = store_sales_limits();
        for _ in 0..64 {
            let p = generate_pricing(&limits, &mut stream);
            assert!(p.quantity >= 1 && p.quantity <= limits.max_quantity);
            assert!(p.sales_price <= p.list_price);
            assert!(p.wholesale_cost <= p.list_price);
            assert_eq!(p.ext_discount_amt, p.ext_list_price - p.ext_sales_price);
            assert_eq!(p.net_paid, p.ext_sales_price - p.coupon_amt);
            assert_eq!(p.net_paid_inc_tax, p.net_paid + p.ext_tax);
            assert_eq!(p.net_profit, p.net_paid - p.ext_wholesale_cost);
            stream.consume_remaining_seeds_for_row();
        }
    }

    #[test]
    fn returns_never_exceed_the_sale() {
        let mut sale_stream = RandomNumberStream::new(42, PRICING_SEEDS_PER_ROW);
        let mut return_stream = RandomNumberStream::new(43, RETURN_PRICING_SEEDS_PER_ROW);
        for _ in 0..64 {
            let sale = generate_pricing(&catalog_sales_limits(), &mut sale_stream);
            let ret = generate_return_pricing(&sale, &mut return_stream);
            assert!(ret.quantity <= sale.quantity);
            assert!(ret.refunded_cash + ret.reversed_charge + ret.store_credit <= ret.net_paid);
        }
    }
}
