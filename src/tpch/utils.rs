// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! dbgen string and key primitives shared by the TPC-H row generators.

use crate::tpch::constants::*;
use crate::tpch::distribution::Distribution;
use crate::tpch::random::StreamBank;

const ALPHA_NUM: &[u8; 64] = b"0123456789abcdefghijklmnopqrstuvwxyz ABCDEFGHIJKLMNOPQRSTUVWXYZ,";

/// A random string of length `[min_len, max_len]`; characters are packed
/// five per 64-bit draw, six bits each, into the alphanumeric alphabet.
pub fn random_string(
    mut min_len: i64,
    mut max_len: i64,
    stream: usize,
    bank: &mut StreamBank,
) -> String {
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

/// A random string whose length varies `[0.4, 1.6]` around `avg_len`.
pub fn variable_string(avg_len: i64, stream: usize, bank: &mut StreamBank) -> String {
    let min_len = (avg_len as f64 * V_STR_LOW) as i64;
    let max_len = (avg_len as f64 * V_STR_HIGH) as i64;
    random_string(min_len, max_len, stream, bank)
}

/// Weighted pick: draws in `[1, dist.max]` and scans to the first entry whose
/// prefix sum covers the draw. Returns the picked index.
pub fn pick_string(
    dist: &Distribution,
    stream: usize,
    bank: &mut StreamBank,
    out: &mut String,
) -> Option<usize> {
    if dist.list.is_empty() || dist.max <= 0 {
        return None;
    }
    let pick = bank.random_int(1, dist.max, stream);
    let mut index = 0;
    while dist.list[index].weight < pick {
        index += 1;
    }
    out.clear();
    out.push_str(&dist.list[index].text);
    Some(index)
}

/// Fisher-Yates permutes the distribution with `len` draws and joins the
/// first `count` entries with single spaces.
pub fn agg_string(dist: &Distribution, count: i32, stream: usize, bank: &mut StreamBank) -> String {
    if dist.list.is_empty() || count <= 0 {
        return String::new();
    }
    let dist_size = dist.list.len();
    let count = (count as usize).min(dist_size);
    let mut permute: Vec<usize> = (0..dist_size).collect();
    for i in 0..dist_size {
        let source = bank.random_int(i as i64, dist_size as i64 - 1, stream) as usize;
        permute.swap(i, source);
    }
    let mut result = String::with_capacity(count * 8);
    for (i, index) in permute.iter().take(count).enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push_str(&dist.list[*index].text);
    }
    result
}

/// The fixed `CC-AAA-XXX-NNNN` phone layout; the country code derives from
/// the nation index, the rest are three draws in order.
pub fn generate_phone(nation_index: i64, stream: usize, bank: &mut StreamBank) -> String {
    let acode = bank.random_int(100, 999, stream);
    let exchg = bank.random_int(100, 999, stream);
    let number = bank.random_int(1000, 9999, stream);
    format!("{:02}-{acode:03}-{exchg:03}-{number:04}", 10 + nation_index % NATIONS_MAX)
}

/// The deterministic retail price, in pennies.
pub fn retail_price(partkey: i64) -> i64 {
    90_000 + (partkey / 10) % 20_001 + (partkey % 1000) * 100
}

/// Deterministic bridge from a part to its `supp_index`-th supplier,
/// preserving referential integrity without a materialized mapping.
pub fn part_supp_bridge(partkey: i64, supp_index: i64, supplier_count: i64) -> i64 {
    if supplier_count <= 0 {
        return 1;
    }
    let stride = supplier_count / SUPP_PER_PART + (partkey - 1) / supplier_count;
    (partkey + supp_index * stride) % supplier_count + 1
}

/// dbgen's sparse order-key layout: keep the low three bits, make room for a
/// two-bit sequence, shift the rest up.
pub fn make_sparse_key(index: i64, seq: i64) -> i64 {
    let low_bits = index & ((1 << SPARSE_KEEP) - 1);
    let mut value = index >> SPARSE_KEEP;
    value <<= SPARSE_BITS;
    value += seq;
    value <<= SPARSE_KEEP;
    value + low_bits
}

/// `tag` followed by `number` zero-padded to `width` digits.
pub fn format_tag_number(tag: &str, width: usize, number: i64) -> String {
    format!("{tag}{number:0width$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tpch::distribution::DistributionStore;

    #[test]
    fn retail_price_formula() {
        assert_eq!(retail_price(1), 90_100);
        assert_eq!(retail_price(10), 90_001);
        assert_eq!(retail_price(1000), 90_100);
        assert_eq!(retail_price(200_000), 110_000);
    }

    #[test]
    fn bridge_stays_in_range_and_spreads() {
        let suppliers = 10_000;
        for partkey in [1, 2, 77, 199_999, 200_000] {
            let mut seen = std::collections::HashSet::new();
            for i in 0..SUPP_PER_PART {
                let supp = part_supp_bridge(partkey, i, suppliers);
                assert!((1..=suppliers).contains(&supp));
                seen.insert(supp);
            }
            assert_eq!(seen.len(), SUPP_PER_PART as usize, "partkey={partkey}");
        }
    }

    #[test]
    fn sparse_key_layout() {
        assert_eq!(make_sparse_key(1, 0), 1);
        assert_eq!(make_sparse_key(7, 0), 7);
        assert_eq!(make_sparse_key(8, 0), 32);
        assert_eq!(make_sparse_key(8, 1), 40);
    }

    #[test]
    fn tag_number_padding() {
        assert_eq!(format_tag_number(C_NAME_TAG, 9, 42), "Customer#000000042");
        assert_eq!(format_tag_number(P_MFG_TAG, 1, 3), "Manufacturer#3");
    }

    #[test]
    fn phone_layout() {
        let mut bank = StreamBank::new();
        let phone = generate_phone(3, C_PHNE_SD, &mut bank);
        assert_eq!(phone.len(), PHONE_LEN);
        assert_eq!(&phone[..3], "13-");
        assert_eq!(phone.as_bytes()[6], b'-');
        assert_eq!(phone.as_bytes()[10], b'-');
    }

    #[test]
    fn random_string_respects_bounds() {
        let mut bank = StreamBank::new();
        for _ in 0..32 {
            let s = random_string(5, 12, C_ADDR_SD, &mut bank);
            assert!((5..=12).contains(&s.len()));
            assert!(s.bytes().all(|b| ALPHA_NUM.contains(&b)));
        }
    }

    #[test]
    fn weighted_pick_law() {
        let store =
            DistributionStore::parse("BEGIN demo\ncount|3\na|5\nb|1\nc|4\nEND\n").unwrap();
        let dist = store.find("demo").unwrap();
        let mut bank = StreamBank::new();
        let mut out = String::new();
        for _ in 0..200 {
            let draw = bank.peek_random_int(1, dist.max, P_TYPE_SD);
            let index = pick_string(dist, P_TYPE_SD, &mut bank, &mut out).unwrap();
            let lower = if index == 0 { 0 } else { dist.list[index - 1].weight };
            assert!(lower < draw && draw <= dist.list[index].weight);
        }
    }
}
