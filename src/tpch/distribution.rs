// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! The dbgen `.dst` distribution store: `BEGIN <name>` / `token|weight` /
//! `END` blocks with prefix-summed weights.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// One weighted entry. `weight` is the running prefix sum at this entry, so
/// the last entry's weight equals the distribution's `max`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionEntry {
    pub text: String,
    pub weight: i64,
}

/// An ordered weighted list of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Distribution {
    pub list: Vec<DistributionEntry>,
    pub max: i64,
}

impl Distribution {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the distribution is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

/// All distributions parsed from one `.dst` source.
#[derive(Clone, Debug, Default)]
pub struct DistributionStore {
    distributions: HashMap<String, Distribution>,
}

impl DistributionStore {
    /// Parses a `.dst` text.
    pub fn parse(input: &str) -> Result<DistributionStore> {
        let mut distributions = HashMap::new();
        let mut current_name = String::new();
        let mut current = Distribution::default();
        let mut expected_count: i64 = -1;
        let mut in_dist = false;

        for raw_line in input.lines() {
            let mut line = raw_line;
            if let Some(pos) = line.find('#') {
                line = &line[..pos];
            }
            let line = line.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }

            if !in_dist {
                let mut header = line.split_whitespace();
                let (Some(token), Some(name)) = (header.next(), header.next()) else {
                    continue;
                };
                if !token.eq_ignore_ascii_case("begin") {
                    continue;
                }
                current_name = name.to_ascii_lowercase();
                current = Distribution::default();
                expected_count = -1;
                in_dist = true;
                continue;
            }

            if line.len() >= 3 && line[..3].eq_ignore_ascii_case("end") {
                if expected_count >= 0 && current.list.len() as i64 != expected_count {
                    return Err(Error::parse(format!("read error on dist '{current_name}'")));
                }
                if distributions
                    .insert(current_name.clone(), std::mem::take(&mut current))
                    .is_some()
                {
                    return Err(Error::parse(format!("duplicate distribution: {current_name}")));
                }
                in_dist = false;
                current_name.clear();
                expected_count = -1;
                continue;
            }

            let Some(bar) = line.find('|') else {
                continue;
            };
            let token = &line[..bar];
            let weight_text = line[bar + 1..].trim();
            let weight: i64 = match parse_leading_int(weight_text) {
                Some(w) => w,
                None => continue,
            };

            if token.eq_ignore_ascii_case("count") {
                expected_count = weight;
                if expected_count < 0 {
                    return Err(Error::parse(format!(
                        "invalid distribution count for {current_name}"
                    )));
                }
                current.list.reserve(expected_count as usize);
                continue;
            }

            if expected_count < 0 {
                return Err(Error::parse(format!(
                    "distribution count missing for {current_name}"
                )));
            }
            if current.list.len() as i64 >= expected_count {
                return Err(Error::parse(format!(
                    "distribution entry overflow for {current_name}"
                )));
            }

            current.max += weight;
            current.list.push(DistributionEntry { text: token.to_string(), weight: current.max });
        }

        if in_dist {
            return Err(Error::parse(format!("unterminated distribution: {current_name}")));
        }

        Ok(DistributionStore { distributions })
    }

    /// Loads a `.dst` file from disk.
    pub fn load_file(path: &std::path::Path) -> Result<DistributionStore> {
        let text = std::fs::read_to_string(path)?;
        DistributionStore::parse(&text)
    }

    /// Looks up a distribution by case-insensitive name.
    pub fn find(&self, name: &str) -> Option<&Distribution> {
        self.distributions.get(&name.to_ascii_lowercase())
    }

    /// Like [Self::find] but surfaces a [Error::Missing].
    pub fn get(&self, name: &str) -> Result<&Distribution> {
        self.find(name).ok_or_else(|| Error::Missing(name.to_string()))
    }
}

// strtoll semantics: parse the leading integer, ignore trailing junk.
fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let mut end = 0;
    for (i, c) in text.char_indices() {
        if c == '-' && i == 0 || c.is_ascii_digit() {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    text[..end].parse().ok()
}

/// The distributions dbgen's row generators draw from, cloned out of the
/// store once at startup.
#[derive(Clone, Debug)]
pub struct DbgenDistributions {
    pub nations: Distribution,
    pub regions: Distribution,
    pub p_types: Distribution,
    pub p_cntr: Distribution,
    pub colors: Distribution,
    pub instruct: Distribution,
    pub smode: Distribution,
    pub msegmnt: Distribution,
    pub o_priority: Distribution,
    pub rflag: Distribution,
    pub grammar: Distribution,
    pub np: Distribution,
    pub vp: Distribution,
    pub nouns: Distribution,
    pub verbs: Distribution,
    pub adjectives: Distribution,
    pub adverbs: Distribution,
    pub auxillaries: Distribution,
    pub prepositions: Distribution,
    pub articles: Distribution,
    pub terminators: Distribution,
}

impl DbgenDistributions {
    /// Resolves every distribution the generators need, erroring on the first
    /// missing name.
    pub fn from_store(store: &DistributionStore) -> Result<DbgenDistributions> {
        Ok(DbgenDistributions {
            nations: store.get("nations")?.clone(),
            regions: store.get("regions")?.clone(),
            p_types: store.get("p_types")?.clone(),
            p_cntr: store.get("p_cntr")?.clone(),
            colors: store.get("colors")?.clone(),
            instruct: store.get("instruct")?.clone(),
            smode: store.get("smode")?.clone(),
            msegmnt: store.get("msegmnt")?.clone(),
            o_priority: store.get("o_oprio")?.clone(),
            rflag: store.get("rflag")?.clone(),
            grammar: store.get("grammar")?.clone(),
            np: store.get("np")?.clone(),
            vp: store.get("vp")?.clone(),
            nouns: store.get("nouns")?.clone(),
            verbs: store.get("verbs")?.clone(),
            adjectives: store.get("adjectives")?.clone(),
            adverbs: store.get("adverbs")?.clone(),
            auxillaries: store.get("auxillaries")?.clone(),
            prepositions: store.get("prepositions")?.clone(),
            articles: store.get("articles")?.clone(),
            terminators: store.get("terminators")?.clone(),
        })
    }
}

/// The `dists.dss` text compiled into the binary.
pub const EMBEDDED_DISTS: &str = include_str!("../../resources/tpch/dists.dss");

static EMBEDDED_STORE: OnceLock<std::result::Result<DistributionStore, String>> = OnceLock::new();

/// The process-wide store parsed from the embedded `dists.dss`. Immutable
/// after first use.
pub fn embedded_store() -> Result<&'static DistributionStore> {
    match EMBEDDED_STORE.get_or_init(|| {
        DistributionStore::parse(EMBEDDED_DISTS).map_err(|err| err.to_string())
    }) {
        Ok(store) => Ok(store),
        Err(msg) => Err(Error::parse(msg.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefix_sums() {
        let store = DistributionStore::parse(
            "# comment\nBEGIN demo\ncount|3\na|1\nb|2\nc|3\nEND\n",
        )
        .unwrap();
        let dist = store.find("DEMO").unwrap();
        assert_eq!(dist.len(), 3);
        assert_eq!(dist.max, 6);
        assert_eq!(dist.list[0].weight, 1);
        assert_eq!(dist.list[1].weight, 3);
        assert_eq!(dist.list[2].weight, 6);
    }

    #[test]
    fn count_mismatch_is_rejected() {
        let err = DistributionStore::parse("BEGIN demo\ncount|2\na|1\nEND\n").unwrap_err();
        assert!(err.to_string().contains("read error on dist 'demo'"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let text = "BEGIN demo\ncount|1\na|1\nEND\nBEGIN demo\ncount|1\nb|1\nEND\n";
        let err = DistributionStore::parse(text).unwrap_err();
        assert!(err.to_string().contains("duplicate distribution"));
    }

    #[test]
    fn embedded_dists_resolve() {
        let store = embedded_store().unwrap();
        let dists = DbgenDistributions::from_store(store).unwrap();
        assert_eq!(dists.nations.len(), 25);
        assert_eq!(dists.regions.len(), 5);
        assert_eq!(dists.colors.len(), 92);
        assert_eq!(dists.p_types.len(), 150);
        assert_eq!(dists.p_cntr.len(), 40);
        // Nation weights are deltas whose prefix sums are the region keys.
        assert_eq!(dists.nations.list[0].weight, 0);
        assert_eq!(dists.nations.list[4].text, "EGYPT");
        assert_eq!(dists.nations.list[4].weight, 4);
    }
}
