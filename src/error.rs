// Copyright 2026 The benchgen Authors. All Rights Reserved.

//! Error type shared by the distribution stores, generators, and emitters.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error kinds a generator or distribution store can surface.
///
/// The PRNG bank and the skip engine are infallible; everything that touches
/// caller input, embedded resources, or the filesystem funnels through here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad caller input: non-positive chunk size, negative start row, unknown
    /// table or column name.
    #[error("invalid argument: {0}")]
    Invalid(String),

    /// Malformed `.dst` or `.idx` data.
    #[error("parse error: {0}")]
    Parse(String),

    /// A distribution (or embedded resource) that should exist does not.
    #[error("missing distribution: {0}")]
    Missing(String),

    /// Reading a distribution file from disk failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Error {
        Error::Invalid(msg.into())
    }

    pub(crate) fn parse(msg: impl Into<String>) -> Error {
        Error::Parse(msg.into())
    }
}
