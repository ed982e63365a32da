//! CSV fixture loader.
//!
//! Builds a [`World`] from three CSV files.  The live host hands the board a
//! `World` directly; this loader exists for demos and tests.
//!
//! # CSV formats
//!
//! **stations.csv** — one row per station:
//!
//! ```csv
//! station_id,name,kind,facilities
//! 0,Sandpool Central,station,rail|road
//! 1,Fort Gravel Junction,waypoint,
//! ```
//!
//! `kind` is `station` or `waypoint`; `facilities` is a `|`-separated subset
//! of `rail`, `road`, `dock`, `airport` (may be empty).
//!
//! **vehicles.csv** — one row per vehicle:
//!
//! ```csv
//! vehicle_id,name,kind,passengers,cur_order,activity,order_ticks,lateness
//! 0,Flying Sandpooler,train,1,2,loading,30,-5
//! ```
//!
//! `kind` is `train`/`road`/`ship`/`aircraft`; `activity` is `travelling`,
//! `loading`, `to_depot`, or `in_depot`; `lateness` is signed ticks
//! (negative = early).
//!
//! **orders.csv** — one row per order, grouped by vehicle, ordered by `seq`:
//!
//! ```csv
//! vehicle_id,seq,action,dest,travel_ticks,wait_ticks,load,unload,stop
//! 0,0,station,0,15,10,load,unload,stop
//! 0,1,station,2,20,0,none,unload,via
//! 0,2,depot,,10,0,load,unload,stop
//! ```
//!
//! `action` is `station`/`waypoint`/`implicit`/`depot`/`conditional`;
//! `dest` may be blank for `depot` and `conditional` rows; `load` is
//! `load`/`full`/`none`; `unload` is `unload`/`force`/`none`; `stop` is
//! `stop`/`via`.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use db_core::{GameClock, StationId, VehicleId, VehicleKind};

use crate::error::ModelError;
use crate::order::{LoadPolicy, Order, OrderAction, OrderList, StopPolicy, UnloadPolicy};
use crate::station::{Facilities, Station, StationRegistry};
use crate::vehicle::{Vehicle, VehicleActivity};
use crate::world::World;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StationRecord {
    station_id: u16,
    name:       String,
    kind:       String,
    facilities: String,
}

#[derive(Deserialize)]
struct VehicleRecord {
    vehicle_id:  u32,
    name:        String,
    kind:        String,
    passengers:  u8,
    cur_order:   usize,
    activity:    String,
    order_ticks: u32,
    lateness:    i32,
}

#[derive(Deserialize)]
struct OrderRecord {
    vehicle_id:   u32,
    seq:          u32,
    action:       String,
    dest:         String,
    travel_ticks: u32,
    wait_ticks:   u32,
    load:         String,
    unload:       String,
    stop:         String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a `World` from CSV files on disk.
pub fn load_world_csv(
    stations: &Path,
    vehicles: &Path,
    orders: &Path,
    clock: GameClock,
) -> Result<World, ModelError> {
    load_world_readers(
        std::fs::File::open(stations)?,
        std::fs::File::open(vehicles)?,
        std::fs::File::open(orders)?,
        clock,
    )
}

/// Like [`load_world_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s over embedded fixtures).
pub fn load_world_readers<R1: Read, R2: Read, R3: Read>(
    stations: R1,
    vehicles: R2,
    orders: R3,
    clock: GameClock,
) -> Result<World, ModelError> {
    // ── Stations ──────────────────────────────────────────────────────────
    let mut registry = StationRegistry::new();
    for result in csv::Reader::from_reader(stations).deserialize::<StationRecord>() {
        let row = result.map_err(|e| ModelError::Parse(e.to_string()))?;
        registry.insert(Station {
            id: StationId(row.station_id),
            name: row.name,
            is_waypoint: match row.kind.trim() {
                "station" => false,
                "waypoint" => true,
                other => {
                    return Err(ModelError::Parse(format!(
                        "invalid station kind {other:?}: expected \"station\" or \"waypoint\""
                    )));
                }
            },
            facilities: parse_facilities(&row.facilities)?,
        });
    }

    // ── Orders, grouped per vehicle ───────────────────────────────────────
    let mut by_vehicle: HashMap<u32, Vec<OrderRecord>> = HashMap::new();
    for result in csv::Reader::from_reader(orders).deserialize::<OrderRecord>() {
        let row = result.map_err(|e| ModelError::Parse(e.to_string()))?;
        by_vehicle.entry(row.vehicle_id).or_default().push(row);
    }

    // ── Vehicles ──────────────────────────────────────────────────────────
    let mut fleet: Vec<Vehicle> = Vec::new();
    for result in csv::Reader::from_reader(vehicles).deserialize::<VehicleRecord>() {
        let row = result.map_err(|e| ModelError::Parse(e.to_string()))?;

        let mut rows = by_vehicle.remove(&row.vehicle_id).unwrap_or_default();
        rows.sort_by_key(|r| r.seq);
        let orders: Vec<Order> = rows.iter().map(parse_order).collect::<Result<_, _>>()?;

        fleet.push(Vehicle {
            id: VehicleId(row.vehicle_id),
            name: row.name,
            kind: parse_kind(&row.kind)?,
            carries_passengers: row.passengers != 0,
            orders: OrderList::new(orders),
            cur_order: row.cur_order,
            current_order_ticks: row.order_ticks,
            lateness: row.lateness,
            activity: parse_activity(&row.activity)?,
        });
    }
    fleet.sort_by_key(|v| v.id);

    Ok(World::new(registry, fleet, clock))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_facilities(s: &str) -> Result<Facilities, ModelError> {
    let mut f = Facilities::default();
    for part in s.split('|').map(str::trim).filter(|p| !p.is_empty()) {
        match part {
            "rail" => f.rail = true,
            "road" => f.road = true,
            "dock" => f.dock = true,
            "airport" => f.airport = true,
            other => {
                return Err(ModelError::Parse(format!("invalid facility {other:?}")));
            }
        }
    }
    Ok(f)
}

fn parse_kind(s: &str) -> Result<VehicleKind, ModelError> {
    match s.trim() {
        "train" => Ok(VehicleKind::Train),
        "road" => Ok(VehicleKind::Road),
        "ship" => Ok(VehicleKind::Ship),
        "aircraft" => Ok(VehicleKind::Aircraft),
        other => Err(ModelError::Parse(format!("invalid vehicle kind {other:?}"))),
    }
}

fn parse_activity(s: &str) -> Result<VehicleActivity, ModelError> {
    match s.trim() {
        "travelling" => Ok(VehicleActivity::Travelling),
        "loading" => Ok(VehicleActivity::Loading),
        "to_depot" => Ok(VehicleActivity::HeadingToDepot),
        "in_depot" => Ok(VehicleActivity::StoppedInDepot),
        other => Err(ModelError::Parse(format!("invalid activity {other:?}"))),
    }
}

fn parse_order(row: &OrderRecord) -> Result<Order, ModelError> {
    let dest = || -> Result<StationId, ModelError> {
        row.dest
            .trim()
            .parse::<u16>()
            .map(StationId)
            .map_err(|_| {
                ModelError::Parse(format!(
                    "invalid order destination {:?}: expected a StationId (u16)",
                    row.dest
                ))
            })
    };

    let action = match row.action.trim() {
        "station" => OrderAction::Station(dest()?),
        "waypoint" => OrderAction::Waypoint(dest()?),
        "implicit" => OrderAction::Implicit(dest()?),
        "depot" => OrderAction::Depot,
        "conditional" => OrderAction::Conditional,
        other => {
            return Err(ModelError::Parse(format!("invalid order action {other:?}")));
        }
    };

    Ok(Order {
        action,
        travel_ticks: row.travel_ticks,
        wait_ticks: row.wait_ticks,
        load: match row.load.trim() {
            "load" => LoadPolicy::Load,
            "full" => LoadPolicy::FullLoad,
            "none" => LoadPolicy::NoLoad,
            other => {
                return Err(ModelError::Parse(format!("invalid load policy {other:?}")));
            }
        },
        unload: match row.unload.trim() {
            "unload" => UnloadPolicy::Unload,
            "force" => UnloadPolicy::ForceUnload,
            "none" => UnloadPolicy::NoUnload,
            other => {
                return Err(ModelError::Parse(format!("invalid unload policy {other:?}")));
            }
        },
        stop: match row.stop.trim() {
            "stop" => StopPolicy::Stop,
            "via" => StopPolicy::Via,
            other => {
                return Err(ModelError::Parse(format!("invalid stop policy {other:?}")));
            }
        },
    })
}
