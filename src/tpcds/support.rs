// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! Key formatting and word-building helpers shared by the row generators.

use crate::tpcds::distribution::DstDistributionStore;
use crate::tpcds::random::RandomNumberStream;

const BKEY_XLATE: &[u8; 16] = b"ABCDEFGHIJKLMNOP";

/// The 16-character business id: the high word of `n` hex-translated A-P,
/// then the byte-reversed low word.
pub fn make_business_key(n: u64) -> String {
    let mut out = String::with_capacity(16);
    let high = format!("{:08x}", n >> 32);
    for c in high.bytes() {
        out.push(BKEY_XLATE[hex_digit(c)] as char);
    }
    let low = format!("{:08x}", n & 0xffff_ffff);
    for c in low.bytes().rev() {
        out.push(BKEY_XLATE[hex_digit(c)] as char);
    }
    out
}

fn hex_digit(c: u8) -> usize {
    match c {
        b'0'..=b'9' => (c - b'0') as usize,
        _ => (c - b'a' + 10) as usize,
    }
}

/// Builds a pronounceable word by peeling base-`size` digits off `src` and
/// concatenating syllables, stopping at `char_count` characters.
pub fn make_word(syllable_set: &str, src: i64, char_count: usize, store: &DstDistributionStore) -> String {
    let Ok(dist) = store.get(syllable_set) else {
        return String::new();
    };
    let dist_size = dist.size();
    if dist_size <= 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut value = src;
    while value > 0 {
        let index = (value % dist_size as i64) as i32 + 1;
        let syllable = dist.get_string(index, 1);
        if out.len() + syllable.len() <= char_count {
            out.push_str(syllable);
        } else {
            break;
        }
        value /= dist_size as i64;
    }
    out
}

/// A company name from the shared syllable table.
pub fn make_company_name(company: i64, store: &DstDistributionStore) -> String {
    make_word("syllables", company, 10, store)
}

/// A random string over `charset`, `[min, max]` characters, one draw per
/// character plus one for the length.
pub fn random_charset(
    charset: &str,
    min: i64,
    max: i64,
    stream: &mut RandomNumberStream,
) -> String {
    let chars: Vec<char> = charset.chars().collect();
    let length = stream.uniform_int(min, max);
    let mut out = String::with_capacity(length as usize);
    for _ in 0..length {
        let index = stream.uniform_int(0, chars.len() as i64 - 1) as usize;
        out.push(chars[index]);
    }
    out
}

/// Item category/class/brand hierarchy state threaded across the three
/// levels of one item row.
#[derive(Clone, Debug, Default)]
pub struct HierarchyState {
    pub last_category: i32,
    pub last_class: i32,
    pub brand_base: i32,
    pub class_dist_name: String,
}

impl HierarchyState {
    pub fn new() -> HierarchyState {
        HierarchyState { last_category: -1, last_class: -1, brand_base: 0, class_dist_name: String::new() }
    }
}

/// Picks the category level: name from the categories table, and remembers
/// which per-category class table the next level uses.
pub fn hierarchy_category(
    store: &DstDistributionStore,
    stream: &mut RandomNumberStream,
    state: &mut HierarchyState,
) -> (i64, String) {
    let categories = store.get("categories").expect("categories distribution");
    let picked = categories.pick_index(1, stream);
    let name = categories.get_string(picked, 1).to_string();
    state.last_category = picked;
    state.brand_base = picked;
    state.last_class = -1;
    state.class_dist_name = categories.get_string(picked, 2).to_string();
    (picked as i64, name)
}

/// Picks the class level within the current category.
pub fn hierarchy_class(
    store: &DstDistributionStore,
    stream: &mut RandomNumberStream,
    state: &mut HierarchyState,
) -> (i64, String) {
    assert!(state.last_category != -1, "class picked before category");
    let class_dist = store.get(&state.class_dist_name).expect("per-category class distribution");
    let picked = class_dist.pick_index(1, stream);
    let name = class_dist.get_string(picked, 1).to_string();
    state.last_class = picked;
    state.last_category = -1;
    (picked as i64, name)
}

/// Derives the brand level from the item index; no draws.
pub fn hierarchy_brand(
    index: i64,
    store: &DstDistributionStore,
    state: &mut HierarchyState,
) -> (i64, String) {
    assert!(state.last_class != -1, "brand derived before class");
    let class_dist = store.get(&state.class_dist_name).expect("per-category class distribution");
    let brand_count = class_dist.get_int(state.last_class, 2).max(1);
    let mut brand_id = (index % brand_count as i64) + 1;
    let mut name = make_word(
        "brand_syllables",
        (state.brand_base * 10 + state.last_class) as i64,
        45,
        store,
    );
    name.push_str(" #");
    name.push_str(&brand_id.to_string());
    brand_id += ((state.brand_base as i64 * 1000) + state.last_class as i64) * 1000;
    (brand_id, name)
}

/// Replaces a random slice of `dest` with a picked word; used to splash
/// recognizable tokens into generated text.
pub fn embed_string(
    dest: &mut String,
    dist_name: &str,
    value_set: i32,
    weight_set: i32,
    store: &DstDistributionStore,
    stream: &mut RandomNumberStream,
) {
    let Ok(dist) = store.get(dist_name) else {
        return;
    };
    let picked = dist.pick_index(weight_set, stream);
    let word = dist.get_string(picked, value_set).to_string();
    if word.is_empty() || dest.is_empty() {
        return;
    }
    if dest.len() < word.len() + 1 {
        return;
    }
    let max_pos = (dest.len() - word.len() - 1) as i64;
    let pos = stream.uniform_int(0, max_pos) as usize;
    if dest.is_char_boundary(pos) && dest.is_char_boundary(pos + word.len()) {
        dest.replace_range(pos..pos + word.len(), &word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_keys_are_stable() {
        assert_eq!(make_business_key(0), "AAAAAAAAAAAAAAAA");
        assert_eq!(make_business_key(1), "AAAAAAAABAAAAAAA");
        assert_eq!(make_business_key(2), "AAAAAAAACAAAAAAA");
        assert_eq!(make_business_key(16), "AAAAAAAAABAAAAAA");
        assert_eq!(make_business_key(1).len(), 16);
    }

    #[test]
    fn random_charset_respects_bounds() {
        let mut stream = RandomNumberStream::new(5, 1);
        for _ in 0..32 {
            let s = random_charset("abc123", 1, 20, &mut stream);
            assert!((1..=20).contains(&s.len()));
            assert!(s.chars().all(|c| "abc123".contains(c)));
        }
    }
}
