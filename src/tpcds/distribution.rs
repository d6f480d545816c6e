// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! The TPC-DS distribution store: typed, multi-column weighted tables loaded
//! from the binary `.idx` image or its `.dst` source dialect.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::tpcds::idx;
use crate::tpcds::random::RandomNumberStream;

pub const TKN_VARCHAR: i32 = 6;
pub const TKN_INT: i32 = 7;
pub const TKN_DATE: i32 = 9;
pub const TKN_DECIMAL: i32 = 10;

pub const IDX_NAME_LENGTH: usize = 20;
pub const IDX_INT_COUNT: usize = 7;
pub const IDX_ENTRY_SIZE: usize = IDX_NAME_LENGTH + IDX_INT_COUNT * 4;

/// The value-column types a distribution can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DstValueType {
    Varchar,
    Int,
    Date,
    Decimal,
}

impl DstValueType {
    /// Maps a binary type token, rejecting anything out of range.
    pub fn from_token(token: i32) -> Result<DstValueType> {
        match token {
            TKN_VARCHAR => Ok(DstValueType::Varchar),
            TKN_INT => Ok(DstValueType::Int),
            TKN_DATE => Ok(DstValueType::Date),
            TKN_DECIMAL => Ok(DstValueType::Decimal),
            other => Err(Error::parse(format!("unknown idx distribution type: {other}"))),
        }
    }

    /// The binary token for this type.
    pub fn token(self) -> i32 {
        match self {
            DstValueType::Varchar => TKN_VARCHAR,
            DstValueType::Int => TKN_INT,
            DstValueType::Date => TKN_DATE,
            DstValueType::Decimal => TKN_DECIMAL,
        }
    }
}

/// One named distribution: `length` rows, each with one value per value
/// column and one weight per weight set.
#[derive(Clone, Debug, Default)]
pub struct DstDistribution {
    name: String,
    types: Vec<DstValueType>,
    // values[column][row]
    values: Vec<Vec<String>>,
    // weights[weight_set][row]
    weights: Vec<Vec<i32>>,
    value_names: Vec<String>,
    weight_names: Vec<String>,
    length: i32,
}

impl DstDistribution {
    pub fn new(name: impl Into<String>) -> DstDistribution {
        DstDistribution { name: name.into(), ..Default::default() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows.
    pub fn size(&self) -> i32 {
        self.length
    }

    pub fn value_set_count(&self) -> i32 {
        self.types.len() as i32
    }

    pub fn weight_set_count(&self) -> i32 {
        self.weights.len() as i32
    }

    pub fn types(&self) -> &[DstValueType] {
        &self.types
    }

    pub fn value_names(&self) -> &[String] {
        &self.value_names
    }

    pub fn weight_names(&self) -> &[String] {
        &self.weight_names
    }

    pub fn set_types(&mut self, types: Vec<DstValueType>) {
        self.values = vec![Vec::new(); types.len()];
        self.types = types;
    }

    pub fn set_weight_set_count(&mut self, count: i32) -> Result<()> {
        if count < 0 {
            return Err(Error::parse("weight set count must be non-negative".to_string()));
        }
        self.weights = vec![Vec::new(); count as usize];
        Ok(())
    }

    pub fn set_names(&mut self, value_names: Vec<String>, weight_names: Vec<String>) {
        self.value_names = value_names;
        self.weight_names = weight_names;
    }

    /// Appends one row.
    pub fn add_entry(&mut self, values: Vec<String>, weights: Vec<i32>) -> Result<()> {
        if self.value_set_count() > 0 && values.len() as i32 != self.value_set_count() {
            return Err(Error::parse(format!(
                "distribution value count mismatch for {}",
                self.name
            )));
        }
        if self.weight_set_count() > 0 && weights.len() as i32 != self.weight_set_count() {
            return Err(Error::parse(format!(
                "distribution weight count mismatch for {}",
                self.name
            )));
        }
        if self.values.is_empty() {
            self.values = vec![Vec::new(); values.len()];
        }
        for (column, value) in values.into_iter().enumerate() {
            self.values[column].push(value);
        }
        for (set, weight) in weights.into_iter().enumerate() {
            self.weights[set].push(weight);
        }
        self.length += 1;
        Ok(())
    }

    /// The string at 1-based `row` in 1-based `value_set`. Out-of-range
    /// access is a programmer error and panics.
    pub fn get_string(&self, row: i32, value_set: i32) -> &str {
        &self.values[(value_set - 1) as usize][(row - 1) as usize]
    }

    /// The integer at 1-based `row` in 1-based `value_set`.
    pub fn get_int(&self, row: i32, value_set: i32) -> i32 {
        self.get_string(row, value_set).trim().parse().unwrap_or(0)
    }

    /// The weight of 1-based `row` in 1-based `weight_set`.
    pub fn get_weight(&self, row: i32, weight_set: i32) -> i32 {
        self.weights[(weight_set - 1) as usize][(row - 1) as usize]
    }

    /// Weighted pick: draws in `[1, total_weight]` and returns the 1-based
    /// row whose running sum first covers the draw.
    pub fn pick_index(&self, weight_set: i32, stream: &mut RandomNumberStream) -> i32 {
        let weights = &self.weights[(weight_set - 1) as usize];
        let total: i64 = weights.iter().map(|w| *w as i64).sum();
        if total <= 0 {
            return 1;
        }
        let pick = stream.uniform_int(1, total);
        let mut running = 0i64;
        for (row, weight) in weights.iter().enumerate() {
            running += *weight as i64;
            if running >= pick {
                return row as i32 + 1;
            }
        }
        self.length
    }
}

/// Repeated modulus against a distribution's size; used by the demographics
/// tables to derive every column from the row number. The size must be
/// positive; an empty distribution is a contract violation.
pub fn bitmap_to_index(dist: &DstDistribution, modulus: &mut i64) -> i32 {
    let size = dist.size();
    assert!(size > 0, "distribution {} is empty", dist.name());
    let index = (*modulus % size as i64) as i32 + 1;
    *modulus /= size as i64;
    index
}

/// [bitmap_to_index] then a string lookup.
pub fn bitmap_to_string(dist: &DstDistribution, value_set: i32, modulus: &mut i64) -> String {
    let index = bitmap_to_index(dist, modulus);
    dist.get_string(index, value_set).to_string()
}

/// [bitmap_to_index] then an int lookup.
pub fn bitmap_to_int(dist: &DstDistribution, value_set: i32, modulus: &mut i64) -> i32 {
    let index = bitmap_to_index(dist, modulus);
    dist.get_int(index, value_set)
}

fn is_valid_utf8(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes).is_ok()
}

fn latin1_to_utf8(bytes: &[u8]) -> String {
    bytes.iter().map(|b| *b as char).collect()
}

/// Backslash escapes collapse to the escaped character; non-UTF-8 bytes are
/// re-encoded from Latin-1.
pub fn normalize_value_encoding(input: &[u8]) -> String {
    let mut unescaped = Vec::with_capacity(input.len());
    let mut escape = false;
    for b in input {
        if escape {
            unescaped.push(*b);
            escape = false;
            continue;
        }
        if *b == b'\\' {
            escape = true;
            continue;
        }
        unescaped.push(*b);
    }
    if is_valid_utf8(&unescaped) {
        String::from_utf8(unescaped).expect("checked utf8")
    } else {
        latin1_to_utf8(&unescaped)
    }
}

/// All distributions from one source, with lookup by lowercase name.
#[derive(Clone, Debug, Default)]
pub struct DstDistributionStore {
    by_name: HashMap<String, DstDistribution>,
}

impl DstDistributionStore {
    /// Builds a store from an ordered distribution list, rejecting duplicate
    /// names.
    pub fn from_list(list: Vec<DstDistribution>) -> Result<DstDistributionStore> {
        let mut by_name = HashMap::with_capacity(list.len());
        for dist in list {
            let key = dist.name().to_ascii_lowercase();
            if key.is_empty() {
                continue;
            }
            if by_name.insert(key.clone(), dist).is_some() {
                return Err(Error::parse(format!("duplicate distribution: {key}")));
            }
        }
        Ok(DstDistributionStore { by_name })
    }

    /// Loads a binary `.idx` image.
    pub fn from_idx_bytes(data: &[u8]) -> Result<DstDistributionStore> {
        DstDistributionStore::from_list(read_idx(data)?)
    }

    /// Parses `.dst` source text.
    pub fn from_dst_text(text: &str) -> Result<DstDistributionStore> {
        DstDistributionStore::from_list(parse_dst(text)?)
    }

    /// Looks up by case-insensitive name.
    pub fn find(&self, name: &str) -> Option<&DstDistribution> {
        self.by_name.get(&name.to_ascii_lowercase())
    }

    /// Like [Self::find], surfacing [Error::Missing].
    pub fn get(&self, name: &str) -> Result<&DstDistribution> {
        self.find(name).ok_or_else(|| Error::Missing(name.to_string()))
    }
}

fn read_be32(data: &[u8], pos: &mut usize) -> Result<i32> {
    if *pos + 4 > data.len() {
        return Err(Error::parse("unexpected end of idx data".to_string()));
    }
    let value = i32::from_be_bytes([data[*pos], data[*pos + 1], data[*pos + 2], data[*pos + 3]]);
    *pos += 4;
    Ok(value)
}

struct IdxEntry {
    name: String,
    offset: i32,
    str_space: i32,
    length: i32,
    w_width: i32,
    v_width: i32,
    name_space: i32,
}

/// Reads a `.idx` image into an ordered distribution list.
pub fn read_idx(data: &[u8]) -> Result<Vec<DstDistribution>> {
    let mut pos = 0usize;
    let entry_count = read_be32(data, &mut pos)?;
    if entry_count <= 0 {
        return Err(Error::parse("invalid idx entry count".to_string()));
    }

    let index_size = IDX_ENTRY_SIZE * entry_count as usize;
    if data.len() < index_size {
        return Err(Error::parse("invalid idx file size".to_string()));
    }
    let mut pos = data.len() - index_size;

    let mut entries = Vec::with_capacity(entry_count as usize);
    for _ in 0..entry_count {
        if pos + IDX_NAME_LENGTH > data.len() {
            return Err(Error::parse("failed to read idx name".to_string()));
        }
        let name_bytes = &data[pos..pos + IDX_NAME_LENGTH];
        pos += IDX_NAME_LENGTH;
        let end = name_bytes.iter().position(|b| *b == 0).unwrap_or(IDX_NAME_LENGTH);
        let name = String::from_utf8_lossy(&name_bytes[..end]).into_owned();

        let _index = read_be32(data, &mut pos)?;
        let offset = read_be32(data, &mut pos)?;
        let str_space = read_be32(data, &mut pos)?;
        let length = read_be32(data, &mut pos)?;
        let w_width = read_be32(data, &mut pos)?;
        let v_width = read_be32(data, &mut pos)?;
        let name_space = read_be32(data, &mut pos)?;

        if offset < 0 || str_space < 0 || length < 0 || w_width < 0 || v_width < 0 || name_space < 0
        {
            return Err(Error::parse("invalid idx entry values".to_string()));
        }
        entries.push(IdxEntry { name, offset, str_space, length, w_width, v_width, name_space });
    }

    let mut result = Vec::with_capacity(entries.len());
    for entry in &entries {
        if entry.name.is_empty() {
            continue;
        }
        let mut pos = entry.offset as usize;

        let mut types = Vec::with_capacity(entry.v_width as usize);
        for _ in 0..entry.v_width {
            types.push(DstValueType::from_token(read_be32(data, &mut pos)?)?);
        }

        let mut weights = Vec::with_capacity(entry.w_width as usize);
        for _ in 0..entry.w_width {
            let mut set = Vec::with_capacity(entry.length as usize);
            for _ in 0..entry.length {
                set.push(read_be32(data, &mut pos)?);
            }
            weights.push(set);
        }

        let mut offsets = Vec::with_capacity(entry.v_width as usize);
        for _ in 0..entry.v_width {
            let mut set = Vec::with_capacity(entry.length as usize);
            for _ in 0..entry.length {
                set.push(read_be32(data, &mut pos)?);
            }
            offsets.push(set);
        }

        let names_buffer = if entry.name_space > 0 {
            let end = pos + entry.name_space as usize;
            if end > data.len() {
                return Err(Error::parse(format!("failed to read idx names for {}", entry.name)));
            }
            let buffer = &data[pos..end];
            pos = end;
            buffer
        } else {
            &[][..]
        };

        let strings = if entry.str_space > 0 {
            let end = pos + entry.str_space as usize;
            if end > data.len() {
                return Err(Error::parse(format!("failed to read idx strings for {}", entry.name)));
            }
            &data[pos..end]
        } else {
            &[][..]
        };

        let mut value_names = Vec::new();
        let mut weight_names = Vec::new();
        if !names_buffer.is_empty() {
            let mut all_names = Vec::new();
            let mut current = Vec::new();
            for b in names_buffer {
                if *b == 0 {
                    all_names.push(String::from_utf8_lossy(&current).into_owned());
                    current.clear();
                } else {
                    current.push(*b);
                }
            }
            if !current.is_empty() {
                all_names.push(String::from_utf8_lossy(&current).into_owned());
            }
            if all_names.len() as i32 >= entry.v_width {
                weight_names = all_names.split_off(entry.v_width as usize);
                value_names = all_names;
            }
        }

        let read_string = |offset: i32| -> Result<String> {
            if offset < 0 || offset >= entry.str_space {
                return Err(Error::parse(format!(
                    "idx string offset out of range for {}",
                    entry.name
                )));
            }
            let start = offset as usize;
            let end = strings[start..].iter().position(|b| *b == 0).map(|p| start + p);
            let bytes = &strings[start..end.unwrap_or(strings.len())];
            Ok(String::from_utf8_lossy(bytes).into_owned())
        };

        let mut dist = DstDistribution::new(entry.name.clone());
        dist.set_types(types);
        dist.set_weight_set_count(entry.w_width)?;
        if !value_names.is_empty() || !weight_names.is_empty() {
            dist.set_names(value_names, weight_names);
        }

        for row in 0..entry.length {
            let mut values = Vec::with_capacity(entry.v_width as usize);
            for v in 0..entry.v_width {
                values.push(read_string(offsets[v as usize][row as usize])?);
            }
            let mut row_weights = Vec::with_capacity(entry.w_width as usize);
            for w in 0..entry.w_width {
                row_weights.push(weights[w as usize][row as usize]);
            }
            dist.add_entry(values, row_weights)?;
        }
        result.push(dist);
    }

    Ok(result)
}

fn parse_value_type(token: &str) -> Result<DstValueType> {
    match token.trim().to_ascii_lowercase().as_str() {
        "varchar" | "char" => Ok(DstValueType::Varchar),
        "int" | "integer" => Ok(DstValueType::Int),
        "date" => Ok(DstValueType::Date),
        "decimal" => Ok(DstValueType::Decimal),
        other => Err(Error::parse(format!("unknown distribution type: {other}"))),
    }
}

// Splits on whitespace/comma/colon/parens outside quotes, normalizing each
// token's encoding.
fn split_tokens(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = Vec::new();
    let mut in_quotes = false;
    let mut escape = false;
    for b in input.bytes() {
        if escape {
            current.push(b);
            escape = false;
            continue;
        }
        if b == b'\\' && in_quotes {
            current.push(b'\\');
            escape = true;
            continue;
        }
        if b == b'"' {
            in_quotes = !in_quotes;
            continue;
        }
        if !in_quotes
            && (b.is_ascii_whitespace() || matches!(b, b'(' | b')' | b'=' | b',' | b';' | b':'))
        {
            if !current.is_empty() {
                tokens.push(normalize_value_encoding(&current));
                current.clear();
            }
            continue;
        }
        current.push(b);
    }
    if !current.is_empty() {
        tokens.push(normalize_value_encoding(&current));
    }
    tokens
}

fn parenthesized(statement: &str, context: &str) -> Result<String> {
    let open = statement.find('(');
    let close = statement.rfind(')');
    match (open, close) {
        (Some(open), Some(close)) if close > open => {
            Ok(statement[open + 1..close].to_string())
        }
        _ => Err(Error::parse(format!("invalid {context} line"))),
    }
}

// One `add (...)` row: values are parsed per declared type (varchar values
// are quoted; numerics are bare), then one weight token per weight set.
fn parse_add_statement(statement: &str, dist: &mut DstDistribution) -> Result<()> {
    if dist.value_set_count() == 0 || dist.weight_set_count() == 0 {
        return Err(Error::parse(format!("add entry without types/weights in {}", dist.name())));
    }
    let body = parenthesized(statement, "add")?;
    let bytes = body.as_bytes();
    let mut pos = 0usize;

    let mut values = Vec::with_capacity(dist.value_set_count() as usize);
    for value_type in dist.types().to_vec() {
        match value_type {
            DstValueType::Varchar => {
                while pos < bytes.len() && bytes[pos] != b'"' {
                    pos += 1;
                }
                if pos >= bytes.len() {
                    return Err(Error::parse(format!("invalid add line in {}", dist.name())));
                }
                pos += 1;
                let start = pos;
                let mut escape = false;
                while pos < bytes.len() && (bytes[pos] != b'"' || escape) {
                    escape = bytes[pos] == b'\\' && !escape;
                    pos += 1;
                }
                if pos >= bytes.len() {
                    return Err(Error::parse(format!("invalid add line in {}", dist.name())));
                }
                values.push(normalize_value_encoding(&bytes[start..pos]));
                pos += 1;
            }
            _ => {
                while pos < bytes.len() && !bytes[pos].is_ascii_digit() && bytes[pos] != b'-' {
                    pos += 1;
                }
                if pos >= bytes.len() {
                    return Err(Error::parse(format!("invalid add line in {}", dist.name())));
                }
                let start = pos;
                while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'-') {
                    pos += 1;
                }
                values.push(normalize_value_encoding(&bytes[start..pos]));
            }
        }
    }

    let tail = &body[pos.min(body.len())..];
    let weight_tokens = split_tokens(tail);
    let mut weights = Vec::with_capacity(dist.weight_set_count() as usize);
    for i in 0..dist.weight_set_count() as usize {
        let weight =
            weight_tokens.get(i).and_then(|t| t.parse::<i32>().ok()).unwrap_or(0);
        weights.push(weight);
    }

    dist.add_entry(values, weights)
}

/// Parses `.dst` source text into an ordered distribution list. `#include`
/// directives are rejected here (file loading resolves them before parsing).
pub fn parse_dst(text: &str) -> Result<Vec<DstDistribution>> {
    let mut result: Vec<DstDistribution> = Vec::new();
    let mut names: HashSet<String> = HashSet::new();
    let mut current: Option<DstDistribution> = None;

    let mut flush =
        |current: &mut Option<DstDistribution>, result: &mut Vec<DstDistribution>| -> Result<()> {
            if let Some(dist) = current.take() {
                if !names.insert(dist.name().to_ascii_lowercase()) {
                    return Err(Error::parse(format!("duplicate distribution: {}", dist.name())));
                }
                result.push(dist);
            }
            Ok(())
        };

    let mut pending = String::new();
    for raw_line in text.lines() {
        let line = match raw_line.find("--") {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        };
        let line = line.trim_start();
        if line.is_empty() {
            continue;
        }
        pending.push_str(line);
        if !line.contains(';') {
            pending.push(' ');
            continue;
        }

        let statement = pending.trim().trim_end_matches(';').trim().to_string();
        pending.clear();
        if statement.is_empty() {
            continue;
        }

        let lower = statement.to_ascii_lowercase();
        if lower.starts_with("#include") {
            return Err(Error::parse("#include is only resolved when loading files".to_string()));
        }
        if lower.starts_with("create ") {
            flush(&mut current, &mut result)?;
            let name = statement[6..].trim().trim_end_matches(';').trim();
            current = Some(DstDistribution::new(name));
            continue;
        }
        let Some(dist) = current.as_mut() else {
            continue;
        };
        if lower.starts_with("set types") {
            let body = parenthesized(&statement, "types")?;
            let mut types = Vec::new();
            for token in body.split([',', ' ']).filter(|t| !t.trim().is_empty()) {
                types.push(parse_value_type(token)?);
            }
            dist.set_types(types);
            continue;
        }
        if lower.starts_with("set weights") {
            let eq = statement
                .find('=')
                .ok_or_else(|| Error::parse("invalid weights line".to_string()))?;
            let count = statement[eq + 1..].trim().trim_end_matches(';').trim();
            let count: i32 = count
                .parse()
                .map_err(|_| Error::parse("invalid weights line".to_string()))?;
            dist.set_weight_set_count(count)?;
            continue;
        }
        if lower.starts_with("set names") {
            let body = parenthesized(&statement, "names")?;
            let tokens = split_tokens(&body);
            let value_count = dist.value_set_count() as usize;
            if tokens.len() >= value_count {
                let (values, weights) = tokens.split_at(value_count);
                dist.set_names(values.to_vec(), weights.to_vec());
            } else {
                dist.set_names(tokens, Vec::new());
            }
            continue;
        }
        if lower.starts_with("add") {
            parse_add_statement(&statement, dist)?;
            continue;
        }
    }

    flush(&mut current, &mut result)?;
    Ok(result)
}

/// Loads a `.dst` file from disk, resolving `#include "path"` relative to the
/// including file. Repeated includes are loaded once.
pub fn load_dst_file(path: &std::path::Path) -> Result<Vec<DstDistribution>> {
    fn resolve(
        path: &std::path::Path,
        loaded: &mut HashSet<std::path::PathBuf>,
        out: &mut String,
    ) -> Result<()> {
        if !loaded.insert(path.to_path_buf()) {
            return Ok(());
        }
        let text = std::fs::read_to_string(path)?;
        let directory = path.parent().map(|p| p.to_path_buf()).unwrap_or_default();
        for raw_line in text.lines() {
            let trimmed = raw_line.trim_start();
            if trimmed.len() >= 8 && trimmed[..8].eq_ignore_ascii_case("#include") {
                let rest = trimmed[8..].trim();
                let include = rest
                    .trim_start_matches(['"', '<'])
                    .trim_end_matches([';'])
                    .trim_end_matches(['"', '>'])
                    .trim();
                if !include.is_empty() {
                    let target = if include.starts_with(['/', '\\']) {
                        std::path::PathBuf::from(include)
                    } else {
                        directory.join(include)
                    };
                    resolve(&target, loaded, out)?;
                }
                continue;
            }
            out.push_str(raw_line);
            out.push('\n');
        }
        Ok(())
    }

    let mut text = String::new();
    resolve(path, &mut HashSet::new(), &mut text)?;
    parse_dst(&text)
}

/// The `tpcds.dst` source compiled into the binary.
pub const EMBEDDED_TPCDS_DST: &str = include_str!("../../resources/tpcds/tpcds.dst");

static EMBEDDED_STORE: OnceLock<std::result::Result<DstDistributionStore, String>> =
    OnceLock::new();

/// The process-wide TPC-DS store. The embedded `.dst` source is compiled to
/// an in-memory `.idx` image and read back, so the production load path is
/// the binary format.
pub fn embedded_store() -> Result<&'static DstDistributionStore> {
    match EMBEDDED_STORE.get_or_init(|| {
        let parsed = parse_dst(EMBEDDED_TPCDS_DST).map_err(|e| e.to_string())?;
        let image = idx::write_idx(&parsed).map_err(|e| e.to_string())?;
        DstDistributionStore::from_idx_bytes(&image).map_err(|e| e.to_string())
    }) {
        Ok(store) => Ok(store),
        Err(msg) => Err(Error::parse(msg.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tpcds::idx::write_idx;

    const SAMPLE: &str = r#"
-- sample distributions
create demo;
set types = (varchar, int);
set weights = 2;
set names = (word, score : uniform, skewed);
add ("alpha", 10 : 1, 5);
add ("beta", 20 : 1, 1);
add ("gam\"ma", 30 : 1, 4);

create plain;
set types = (varchar);
set weights = 1;
add ("only" : 7);
"#;

    #[test]
    fn dst_round_trips_through_idx() {
        let parsed = parse_dst(SAMPLE).unwrap();
        assert_eq!(parsed.len(), 2);
        let image = write_idx(&parsed).unwrap();
        let reloaded = read_idx(&image).unwrap();
        assert_eq!(reloaded.len(), 2);

        let direct = DstDistributionStore::from_list(parsed).unwrap();
        let via_idx = DstDistributionStore::from_list(reloaded).unwrap();
        for name in ["demo", "plain"] {
            let a = direct.get(name).unwrap();
            let b = via_idx.get(name).unwrap();
            assert_eq!(a.size(), b.size());
            assert_eq!(a.value_set_count(), b.value_set_count());
            assert_eq!(a.weight_set_count(), b.weight_set_count());
            for row in 1..=a.size() {
                for v in 1..=a.value_set_count() {
                    assert_eq!(a.get_string(row, v), b.get_string(row, v));
                }
                for w in 1..=a.weight_set_count() {
                    assert_eq!(a.get_weight(row, w), b.get_weight(row, w));
                }
            }
        }
    }

    #[test]
    fn escapes_and_quotes() {
        let store = DstDistributionStore::from_dst_text(SAMPLE).unwrap();
        let demo = store.get("demo").unwrap();
        assert_eq!(demo.get_string(3, 1), "gam\"ma");
        assert_eq!(demo.get_int(2, 2), 20);
        assert_eq!(demo.value_names(), &["word", "score"]);
        assert_eq!(demo.weight_names(), &["uniform", "skewed"]);
    }

    #[test]
    fn pick_index_respects_prefix_sums() {
        let store = DstDistributionStore::from_dst_text(SAMPLE).unwrap();
        let demo = store.get("demo").unwrap();
        let mut stream = RandomNumberStream::new(1, 1);
        for _ in 0..500 {
            let picked = demo.pick_index(2, &mut stream);
            assert!((1..=3).contains(&picked));
        }
        // Weight set 1 is uniform; every row must be reachable.
        let mut seen = [false; 3];
        let mut stream = RandomNumberStream::new(2, 1);
        for _ in 0..200 {
            seen[(demo.pick_index(1, &mut stream) - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn duplicate_distributions_are_rejected() {
        let text = "create a;\nset types = (int);\nset weights = 1;\nadd (1 : 1);\ncreate a;\nset types = (int);\nset weights = 1;\nadd (2 : 1);\n";
        assert!(parse_dst(text).is_err());
    }

    #[test]
    fn latin1_values_are_reencoded() {
        let bytes = [b'c', 0xE9, b'f'];
        let normalized = normalize_value_encoding(&bytes);
        assert_eq!(normalized, "c\u{e9}f");
    }

    #[test]
    fn embedded_store_loads() {
        let store = embedded_store().unwrap();
        assert!(store.find("gender").is_some());
        assert!(store.find("hours").is_some());
        assert!(store.find("not-a-distribution").is_none());
        assert!(store.get("income_band").unwrap().size() >= 20);
    }

    #[test]
    fn bitmap_cascade_divides_through() {
        let store = embedded_store().unwrap();
        let gender = store.get("gender").unwrap();
        let mut modulus = 7i64;
        let first = bitmap_to_string(gender, 1, &mut modulus);
        assert!(!first.is_empty());
        assert_eq!(modulus, 7 / gender.size() as i64);
    }
}
