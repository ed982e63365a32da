//! `db-model` — the read-only simulation snapshot the board consumes.
//!
//! The host simulation owns vehicles, orders and stations; the departure
//! board only *reads* them.  This crate is the boundary: plain-data mirrors
//! of exactly the fields the board's algorithms consume, frozen for one
//! simulation tick, plus a CSV loader for building fixture worlds in demos
//! and tests.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`order`]   | `Order`, `OrderAction`, load/unload/stop policies, `OrderList` |
//! | [`vehicle`] | `Vehicle`, `VehicleActivity`                            |
//! | [`station`] | `Station`, `Facilities`, `StationRegistry`              |
//! | [`world`]   | `World` — the per-tick snapshot and vehicle list queries |
//! | [`loader`]  | `load_world_csv`, `load_world_readers`                  |
//! | [`error`]   | `ModelError`, `ModelResult<T>`                          |
//!
//! # Order cycle model
//!
//! Each vehicle's orders form a fixed-size circular sequence, stored as a
//! contiguous arena with explicit index wraparound (`OrderList::next_index`).
//! Walks over the cycle are bounded by the list length; there are no
//! back-pointers and no linked structure.

pub mod error;
pub mod loader;
pub mod order;
pub mod station;
pub mod vehicle;
pub mod world;


pub use error::{ModelError, ModelResult};
pub use loader::{load_world_csv, load_world_readers};
pub use order::{LoadPolicy, Order, OrderAction, OrderList, StopPolicy, UnloadPolicy};
pub use station::{Facilities, Station, StationRegistry};
pub use vehicle::{Vehicle, VehicleActivity};
pub use world::World;
