//! Shared error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `BoardError` via `From` impls, or keep them separate.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{StationId, VehicleId};

/// The common base error for the `db-*` crates.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for the `db-*` crates.
pub type BoardResult<T> = Result<T, BoardError>;
