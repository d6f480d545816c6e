// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! The v-str text pool: 300 MiB of grammar-generated sentences built once per
//! process, then sliced by two draws per comment.

use std::sync::OnceLock;

use crate::tpch::constants::*;
use crate::tpch::distribution::{DbgenDistributions, Distribution};
use crate::tpch::random::StreamBank;

fn pick<'a>(dist: &'a Distribution, stream: usize, bank: &mut StreamBank) -> Option<&'a str> {
    if dist.list.is_empty() || dist.max <= 0 {
        return None;
    }
    let pick = bank.random_int(1, dist.max, stream);
    let mut index = 0;
    while dist.list[index].weight < pick {
        index += 1;
    }
    Some(&dist.list[index].text)
}

fn verb_phrase(out: &mut String, dists: &DbgenDistributions, stream: usize, bank: &mut StreamBank) {
    let Some(syntax) = pick(&dists.vp, stream, bank).map(str::to_owned) else {
        return;
    };
    for token in syntax.split(' ') {
        let mut chars = token.chars();
        let src = match chars.next() {
            Some('D') => &dists.adverbs,
            Some('V') => &dists.verbs,
            Some('X') => &dists.auxillaries,
            _ => continue,
        };
        let Some(word) = pick(src, stream, bank) else {
            continue;
        };
        out.push_str(word);
        if let Some(punct) = chars.next() {
            out.push(punct);
        }
        out.push(' ');
    }
}

fn noun_phrase(out: &mut String, dists: &DbgenDistributions, stream: usize, bank: &mut StreamBank) {
    let Some(syntax) = pick(&dists.np, stream, bank).map(str::to_owned) else {
        return;
    };
    for token in syntax.split(' ') {
        let mut chars = token.chars();
        let src = match chars.next() {
            Some('A') => &dists.articles,
            Some('J') => &dists.adjectives,
            Some('D') => &dists.adverbs,
            Some('N') => &dists.nouns,
            _ => continue,
        };
        let Some(word) = pick(src, stream, bank) else {
            continue;
        };
        out.push_str(word);
        if let Some(punct) = chars.next() {
            out.push(punct);
        }
        out.push(' ');
    }
}

// One sentence from the grammar distribution. Non-terminals: N(oun phrase),
// V(erb phrase), P(repositional phrase), T(erminator). A terminator
// overwrites the trailing space.
fn sentence(out: &mut String, dists: &DbgenDistributions, stream: usize, bank: &mut StreamBank) {
    let Some(syntax) = pick(&dists.grammar, stream, bank).map(str::to_owned) else {
        return;
    };
    let bytes: Vec<char> = syntax.chars().collect();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        match c {
            ' ' => {
                i += 1;
                continue;
            }
            'V' => verb_phrase(out, dists, stream, bank),
            'N' => noun_phrase(out, dists, stream, bank),
            'P' => {
                if let Some(prep) = pick(&dists.prepositions, stream, bank) {
                    out.push_str(prep);
                    out.push_str(" the ");
                    noun_phrase(out, dists, stream, bank);
                }
            }
            'T' => {
                // Replace the trailing space left by the previous phrase.
                if out.ends_with(' ') {
                    out.pop();
                }
                if let Some(term) = pick(&dists.terminators, stream, bank) {
                    out.push_str(term);
                }
            }
            _ => {}
        }
        i += 1;
        if i < bytes.len() && bytes[i] != ' ' {
            out.push(bytes[i]);
            i += 1;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
}

/// The process-wide deterministic text pool.
pub struct TextPool {
    pool: String,
}

impl TextPool {
    fn build(dists: &DbgenDistributions) -> TextPool {
        let mut pool = String::with_capacity(TEXT_POOL_SIZE);
        let mut bank = StreamBank::new();
        let mut sentence_buf = String::with_capacity(MAX_SENTENCE_LEN);
        while pool.len() < TEXT_POOL_SIZE {
            sentence_buf.clear();
            sentence(&mut sentence_buf, dists, TEXT_POOL_STREAM, &mut bank);
            if sentence_buf.is_empty() {
                break;
            }
            let needed = TEXT_POOL_SIZE - pool.len();
            if needed > sentence_buf.len() {
                pool.push_str(&sentence_buf);
                pool.push(' ');
            } else {
                pool.push_str(&sentence_buf[..needed]);
            }
        }
        pool.truncate(TEXT_POOL_SIZE);
        TextPool { pool }
    }

    /// `pool[offset..offset + length]`.
    pub fn slice(&self, offset: i64, length: i64) -> &str {
        &self.pool[offset as usize..(offset + length) as usize]
    }

    /// The pool size in bytes.
    pub fn size(&self) -> i64 {
        self.pool.len() as i64
    }
}

static TEXT_POOL: OnceLock<TextPool> = OnceLock::new();

/// The lazily-built shared pool. The build is deterministic and independent
/// of generator configuration.
pub fn text_pool(dists: &DbgenDistributions) -> &'static TextPool {
    TEXT_POOL.get_or_init(|| TextPool::build(dists))
}

/// A v-str comment: two draws pick a slice offset and length in
/// `[0.4 * avg, 1.6 * avg]`.
pub fn generate_text(
    avg_length: i32,
    stream: usize,
    bank: &mut StreamBank,
    dists: &DbgenDistributions,
) -> String {
    let mut min_len = (avg_length as f64 * V_STR_LOW) as i64;
    let mut max_len = (avg_length as f64 * V_STR_HIGH) as i64;
    if min_len < 0 {
        min_len = 0;
    }
    if max_len < min_len {
        max_len = min_len;
    }

    let pool = text_pool(dists);
    if pool.size() <= max_len {
        return String::new();
    }

    let offset = bank.random_int(0, pool.size() - max_len, stream);
    let length = bank.random_int(min_len, max_len, stream);
    pool.slice(offset, length).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tpch::distribution::{embedded_store, DbgenDistributions};

    #[test]
    fn sentences_expand_grammar() {
        let dists = DbgenDistributions::from_store(embedded_store().unwrap()).unwrap();
        let mut bank = StreamBank::new();
        let mut out = String::new();
        sentence(&mut out, &dists, TEXT_POOL_STREAM, &mut bank);
        assert!(!out.is_empty());
        assert!(!out.ends_with(' '));
    }

    #[test]
    fn text_draw_costs_two_seeds() {
        let dists = DbgenDistributions::from_store(embedded_store().unwrap()).unwrap();
        let mut bank = StreamBank::new();
        bank.row_start();
        let _ = generate_text(C_COMMENT_LEN, C_CMNT_SD, &mut bank, &dists);
        assert_eq!(bank.seed_usage(C_CMNT_SD), 2);
    }

    #[test]
    fn pool_slices_are_reproducible() {
        let dists = DbgenDistributions::from_store(embedded_store().unwrap()).unwrap();
        let mut a = StreamBank::new();
        let mut b = StreamBank::new();
        let left = generate_text(C_COMMENT_LEN, C_CMNT_SD, &mut a, &dists);
        let right = generate_text(C_COMMENT_LEN, C_CMNT_SD, &mut b, &dists);
        assert_eq!(left, right);
    }
}
