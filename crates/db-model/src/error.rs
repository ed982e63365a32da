use thiserror::Error;

use db_core::{StationId, VehicleId};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("order references unknown station {0}")]
    UnknownStation(StationId),

    #[error("unknown vehicle {0}")]
    UnknownVehicle(VehicleId),

    #[error("fixture parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
