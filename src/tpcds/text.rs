// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! Sentence-at-a-time text: every call builds fresh sentences from the
//! sentence templates until the drawn target length is filled, truncating
//! the last sentence. Capitalization follows sentence boundaries.

use crate::tpcds::distribution::DstDistributionStore;
use crate::tpcds::random::RandomNumberStream;

fn pick_word(
    store: &DstDistributionStore,
    dist_name: &str,
    stream: &mut RandomNumberStream,
) -> String {
    let dist = store.get(dist_name).expect("text distribution");
    let index = dist.pick_index(1, stream);
    dist.get_string(index, 1).to_string()
}

fn make_sentence(store: &DstDistributionStore, stream: &mut RandomNumberStream) -> String {
    let sentences = store.get("sentences").expect("sentences distribution");
    let index = sentences.pick_index(1, stream);
    let syntax = sentences.get_string(index, 1).to_string();

    let mut out = String::with_capacity(syntax.len() * 2);
    for c in syntax.chars() {
        match c {
            'N' => out.push_str(&pick_word(store, "nouns", stream)),
            'V' => out.push_str(&pick_word(store, "verbs", stream)),
            'J' => out.push_str(&pick_word(store, "adjectives", stream)),
            'D' => out.push_str(&pick_word(store, "adverbs", stream)),
            'X' => out.push_str(&pick_word(store, "auxiliaries", stream)),
            'P' => out.push_str(&pick_word(store, "prepositions", stream)),
            'A' => out.push_str(&pick_word(store, "articles", stream)),
            'T' => out.push_str(&pick_word(store, "terminators", stream)),
            other => out.push(other),
        }
    }
    out
}

/// Text of exactly `[min, max]` characters: one draw for the target length,
/// then sentence picks until it is filled.
pub fn generate_text(
    min: i32,
    max: i32,
    store: &DstDistributionStore,
    stream: &mut RandomNumberStream,
) -> String {
    let mut target_len = stream.uniform_int(min as i64, max as i64);
    let mut out = String::with_capacity(target_len as usize);

    let mut capitalize = true;
    while target_len > 0 {
        let mut sentence = make_sentence(store, stream);
        let generated_length = sentence.chars().count() as i64;
        if capitalize {
            let mut chars = sentence.chars();
            if let Some(first) = chars.next() {
                sentence = first.to_uppercase().collect::<String>() + chars.as_str();
            }
        }
        capitalize = sentence.ends_with('.');

        if target_len <= generated_length {
            sentence = sentence.chars().take(target_len as usize).collect();
        }

        out.push_str(&sentence);
        target_len -= generated_length;
        if target_len > 0 {
            out.push(' ');
            target_len -= 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tpcds::distribution::embedded_store;

    #[test]
    fn length_is_exact_within_bounds() {
        let store = embedded_store().unwrap();
        let mut stream = RandomNumberStream::new(21, 100);
        for _ in 0..32 {
            let text = generate_text(20, 60, store, &mut stream);
            let len = text.chars().count();
            assert!((20..=60).contains(&len), "len={len}");
        }
    }

    #[test]
    fn first_character_is_capitalized() {
        let store = embedded_store().unwrap();
        let mut stream = RandomNumberStream::new(22, 100);
        let text = generate_text(30, 40, store, &mut stream);
        let first = text.chars().next().unwrap();
        assert!(!first.is_lowercase());
    }

    #[test]
    fn deterministic_per_stream() {
        let store = embedded_store().unwrap();
        let mut a = RandomNumberStream::new(23, 100);
        let mut b = RandomNumberStream::new(23, 100);
        assert_eq!(generate_text(30, 80, store, &mut a), generate_text(30, 80, store, &mut b));
    }
}
