// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! SSB (Star Schema Benchmark) row generation. Shares the dbgen seed values
//! and distribution data with the TPC-H suite; differs in table shapes,
//! scaling, and the text budget per stream.

pub mod constants;
pub mod generators;
pub mod random;
pub mod scaling;
pub mod source;
