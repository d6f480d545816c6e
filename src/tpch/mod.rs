// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! TPC-H (dbgen-compatible) row generation.

pub mod constants;
pub mod dates;
pub mod distribution;
pub mod generators;
pub mod random;
pub mod scaling;
pub mod source;
pub mod text;
pub mod utils;

use std::sync::OnceLock;

use crate::error::{Error, Result};
use distribution::{DbgenDistributions, DistributionStore};

/// Immutable per-process context: the embedded distributions and the dense
/// date-string table.
pub struct TpchContext {
    pub dists: DbgenDistributions,
    pub asc_date: Vec<String>,
}

static CONTEXT: OnceLock<std::result::Result<TpchContext, String>> = OnceLock::new();

/// The shared context, built once from the embedded `dists.dss`.
pub fn context() -> Result<&'static TpchContext> {
    match CONTEXT.get_or_init(|| {
        let store: &DistributionStore = distribution::embedded_store().map_err(|e| e.to_string())?;
        let dists = DbgenDistributions::from_store(store).map_err(|e| e.to_string())?;
        Ok(TpchContext { dists, asc_date: dates::build_asc_date() })
    }) {
        Ok(ctx) => Ok(ctx),
        Err(msg) => Err(Error::parse(msg.clone())),
    }
}
