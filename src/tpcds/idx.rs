// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! The `.idx` writer: serializes an ordered distribution list into the
//! binary layout the store reads (entry count up front, bodies in the
//! middle, the header table in the trailing bytes).

use log::warn;

use crate::error::Result;
use crate::tpcds::distribution::{DstDistribution, IDX_NAME_LENGTH};

fn write_be32(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_be_bytes());
}

struct IdxEntry {
    name: String,
    index: i32,
    offset: i32,
    str_space: i32,
    length: i32,
    w_width: i32,
    v_width: i32,
    name_space: i32,
}

/// Serializes `distributions` into a `.idx` image.
pub fn write_idx(distributions: &[DstDistribution]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_be32(&mut out, distributions.len() as i32);

    let mut entries = Vec::with_capacity(distributions.len());
    for (idx, dist) in distributions.iter().enumerate() {
        let mut entry = IdxEntry {
            name: dist.name().to_string(),
            index: idx as i32 + 1,
            offset: out.len() as i32,
            str_space: 0,
            length: dist.size(),
            w_width: dist.weight_set_count(),
            v_width: dist.value_set_count(),
            name_space: 0,
        };

        for value_type in dist.types() {
            write_be32(&mut out, value_type.token());
        }

        for w in 1..=entry.w_width {
            for row in 1..=entry.length {
                write_be32(&mut out, dist.get_weight(row, w));
            }
        }

        // String bodies are null-terminated and row-major; the offset tables
        // point into them per value column.
        let mut offsets = vec![vec![0i32; entry.length as usize]; entry.v_width as usize];
        let mut strings: Vec<u8> = Vec::new();
        let mut str_offset = 0i32;
        for row in 0..entry.length {
            for v in 0..entry.v_width {
                let value = dist.get_string(row + 1, v + 1);
                offsets[v as usize][row as usize] = str_offset;
                strings.extend_from_slice(value.as_bytes());
                strings.push(0);
                str_offset += value.len() as i32 + 1;
            }
        }
        entry.str_space = str_offset;

        for offset_set in &offsets {
            for offset in offset_set {
                write_be32(&mut out, *offset);
            }
        }

        let mut names: Vec<u8> = Vec::new();
        if !dist.value_names().is_empty() || !dist.weight_names().is_empty() {
            for name in dist.value_names().iter().chain(dist.weight_names()) {
                names.extend_from_slice(name.as_bytes());
                names.push(0);
            }
        }
        entry.name_space = names.len() as i32;
        out.extend_from_slice(&names);
        out.extend_from_slice(&strings);

        entries.push(entry);
    }

    for entry in &entries {
        let mut name = entry.name.clone();
        if name.len() > IDX_NAME_LENGTH {
            warn!("truncated distribution name {}", entry.name);
            name.truncate(IDX_NAME_LENGTH);
        }
        let mut name_buffer = name.into_bytes();
        name_buffer.resize(IDX_NAME_LENGTH, 0);
        out.extend_from_slice(&name_buffer);
        write_be32(&mut out, entry.index);
        write_be32(&mut out, entry.offset);
        write_be32(&mut out, entry.str_space);
        write_be32(&mut out, entry.length);
        write_be32(&mut out, entry.w_width);
        write_be32(&mut out, entry.v_width);
        write_be32(&mut out, entry.name_space);
    }

    Ok(out)
}
