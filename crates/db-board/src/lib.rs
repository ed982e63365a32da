//! `db-board` — departure board computation for a tick-driven transport
//! simulation.
//!
//! Given a frozen per-tick [`World`], the board projects every serving
//! vehicle's circular order list forward in time and produces a ranked,
//! paginated list of departures or arrivals for one station or waypoint.
//! The computation is a pure query: it reads the snapshot, owns its working
//! buffers, and is recomputed from scratch every tick — recomputing twice
//! against the same snapshot yields identical results.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`entry`]   | `BoardEntry`, `CallingAt`, statuses, mode selectors      |
//! | [`scanner`] | `find_board_start` — locate the first qualifying order   |
//! | [`synth`]   | `synthesize` — split one cycle into board entries        |
//! | [`rank`]    | `KindFilter`, `visible_count`, `page`, `ProjectedEntry`  |
//! | [`display`] | text rendering and interchange icons                     |
//!
//! # Per-tick flow
//!
//! ```text
//! recompute_board(world, station, mode, stop)   once per tick
//!   └─ per vehicle kind: world.vehicles_serving → synthesize per vehicle
//! visible_count(entries, …)                     scrollbar sizing
//! page(entries, …, skip, len)                   the visible window only
//! ```
//!
//! A single vehicle's anomaly never aborts the recompute: an unprojectable
//! timetable surfaces as `repeat_ticks == 0`, a vehicle with no qualifying
//! departure simply contributes nothing, and a failed vehicle-list query
//! skips that vehicle kind for the tick with a logged warning.

pub mod display;
pub mod entry;
pub mod rank;
pub mod scanner;
pub mod synth;


use log::warn;

use db_core::{StationId, VehicleKind};
use db_model::World;

pub use entry::{BoardEntry, BoardMode, BoardStop, CallingAt, EntryStatus, VehicleStatus};
pub use rank::{KindFilter, ProjectedEntry, page, visible_count};
pub use scanner::{BoardStart, find_board_start};
pub use synth::synthesize;

/// Rebuild the full entry list for one station or waypoint.
///
/// Called once per simulation tick.  Vehicles stopped in depots are
/// excluded; vehicles en route to a depot are included with
/// [`VehicleStatus::Diverted`].  Never fails as a whole — per-kind query
/// errors are logged and that kind is skipped for this tick.
pub fn recompute_board(
    world: &World,
    station: StationId,
    mode: BoardMode,
    stop: BoardStop,
) -> Vec<BoardEntry> {
    let mut result = Vec::new();

    for kind in VehicleKind::ALL {
        let vehicles = match world.vehicles_serving(station, kind) {
            Ok(vehicles) => vehicles,
            Err(err) => {
                warn!(
                    "skipping {kind} vehicles for station {}: {err}",
                    world.stations.name(station),
                );
                continue;
            }
        };

        for vehicle in vehicles {
            if vehicle.stopped_in_depot() {
                continue;
            }
            result.extend(synthesize(world, station, vehicle, mode, stop));
        }
    }

    result
}
