// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! The shared street/city/county address generator.

use crate::tpcds::distribution::DstDistributionStore;
use crate::tpcds::random::RandomNumberStream;
use crate::tpcds::scaling::Scaling;

/// Seeds one address consumes per row.
pub const ADDRESS_SEEDS_PER_ROW: i64 = 10;

/// One generated address.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Address {
    pub street_num: i32,
    pub street_name1: String,
    pub street_name2: String,
    pub street_type: String,
    pub suite_num: String,
    pub city: String,
    pub county: String,
    pub state: String,
    pub country: String,
    pub zip: i32,
    pub plus4: i32,
    pub gmt_offset: i32,
}

impl Address {
    /// `street_name1 street_name2` as one column value.
    pub fn street_name(&self) -> String {
        format!("{} {}", self.street_name1, self.street_name2)
    }

    /// The five-digit zip rendering.
    pub fn format_zip(&self) -> String {
        format!("{:05}", self.zip)
    }
}

/// A stable hash of the city name, folded into the zip so that one city maps
/// to a narrow zip band.
pub fn city_hash(name: &str) -> i32 {
    let mut hash: i64 = 0;
    for c in name.bytes() {
        if c.is_ascii_alphabetic() {
            hash = (hash * 26 + (c.to_ascii_lowercase() - b'a') as i64) % 1_000_000_007;
        }
    }
    (hash % 100_000) as i32
}

/// Draws a full address; exactly [ADDRESS_SEEDS_PER_ROW] draws.
pub fn generate_address(
    store: &DstDistributionStore,
    stream: &mut RandomNumberStream,
    _scaling: &Scaling,
) -> Address {
    let mut address = Address { country: "United States".to_string(), ..Default::default() };

    address.street_num = stream.uniform_int(1, 1000) as i32;

    let street_names = store.get("street_names").expect("street_names distribution");
    let first = street_names.pick_index(1, stream);
    address.street_name1 = street_names.get_string(first, 1).to_string();
    let second = street_names.pick_index(1, stream);
    address.street_name2 = street_names.get_string(second, 1).to_string();

    let street_types = store.get("street_type").expect("street_type distribution");
    let picked = street_types.pick_index(1, stream);
    address.street_type = street_types.get_string(picked, 1).to_string();

    let kind = stream.uniform_int(0, 1);
    let number = stream.uniform_int(0, 99);
    address.suite_num = if kind == 0 {
        format!("Suite {}", number * 10)
    } else {
        format!("Suite {}", (b'A' + (number % 26) as u8) as char)
    };

    let cities = store.get("cities").expect("cities distribution");
    let picked = cities.pick_index(1, stream);
    address.city = cities.get_string(picked, 1).to_string();

    let counties = store.get("fips_county").expect("fips_county distribution");
    let picked = counties.pick_index(1, stream);
    address.county = counties.get_string(picked, 1).to_string();
    address.state = counties.get_string(picked, 2).to_string();
    address.gmt_offset = counties.get_int(picked, 3);

    address.zip = (city_hash(&address.city) + stream.uniform_int(0, 9999) as i32) % 100_000;
    address.plus4 = stream.uniform_int(0, 9999) as i32;

    address
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tpcds::distribution::embedded_store;

    #[test]
    fn address_consumes_a_fixed_budget() {
        let store = embedded_store().unwrap();
        let scaling = Scaling::new(1.0);
        let mut stream = RandomNumberStream::new(31, ADDRESS_SEEDS_PER_ROW);
        let address = generate_address(store, &mut stream, &scaling);
        assert_eq!(stream.seeds_used(), ADDRESS_SEEDS_PER_ROW);
        assert!(!address.city.is_empty());
        assert!(!address.state.is_empty());
        assert!((0..100_000).contains(&address.zip));
        assert_eq!(address.format_zip().len(), 5);
    }

    #[test]
    fn city_hash_is_stable() {
        assert_eq!(city_hash("Pleasant Hill"), city_hash("Pleasant Hill"));
        assert_ne!(city_hash("Pleasant Hill"), city_hash("Oak Grove"));
    }
}
