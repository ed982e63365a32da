//! `db-core` — foundational types for the departure board subsystem.
//!
//! This crate is a dependency of every other `db-*` crate.  It intentionally
//! has no `db-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `StationId`, `VehicleId`                          |
//! | [`time`]    | `GameTime`, `DayLength`, `GameClock`              |
//! | [`kind`]    | `VehicleKind` enum                                |
//! | [`error`]   | `BoardError`, `BoardResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod error;
pub mod ids;
pub mod kind;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{BoardError, BoardResult};
pub use ids::{StationId, VehicleId};
pub use kind::VehicleKind;
pub use time::{DayLength, GameClock, GameTime};
