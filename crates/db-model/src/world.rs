//! The per-tick world snapshot and its vehicle list queries.

use log::trace;

use db_core::{GameClock, StationId, VehicleId, VehicleKind};

use crate::error::{ModelError, ModelResult};
use crate::station::StationRegistry;
use crate::vehicle::Vehicle;

/// Everything the board reads, frozen for one simulation tick.
///
/// The host rebuilds (or re-freezes) this once per tick; the board never
/// mutates it.  Repeated queries against the same `World` return identical
/// results.
#[derive(Clone, Debug)]
pub struct World {
    pub stations: StationRegistry,
    pub vehicles: Vec<Vehicle>,
    pub clock: GameClock,
}

impl World {
    pub fn new(stations: StationRegistry, vehicles: Vec<Vehicle>, clock: GameClock) -> Self {
        Self { stations, vehicles, clock }
    }

    pub fn vehicle(&self, id: VehicleId) -> ModelResult<&Vehicle> {
        self.vehicles
            .iter()
            .find(|v| v.id == id)
            .ok_or(ModelError::UnknownVehicle(id))
    }

    /// All vehicles of `kind` — regardless of owner — whose order list
    /// touches `station`, sorted by vehicle ID.
    ///
    /// Sorting makes the enumeration order stable across ticks, so repeated
    /// recomputes rank identical entries identically (no display flicker).
    ///
    /// Fails with [`ModelError::UnknownStation`] if a candidate vehicle's
    /// order list references a station missing from the registry — the host
    /// data is inconsistent and the caller should skip this kind for the
    /// tick rather than project garbage.
    pub fn vehicles_serving(
        &self,
        station: StationId,
        kind: VehicleKind,
    ) -> ModelResult<Vec<&Vehicle>> {
        let mut result: Vec<&Vehicle> = Vec::new();
        for vehicle in &self.vehicles {
            if vehicle.kind != kind || !vehicle.orders.touches(station) {
                continue;
            }
            for order in vehicle.orders.orders() {
                if let Some(dest) = order.destination() {
                    if !self.stations.is_valid(dest) {
                        return Err(ModelError::UnknownStation(dest));
                    }
                }
            }
            result.push(vehicle);
        }
        result.sort_by_key(|v| v.id);
        trace!(
            "{} {} vehicle(s) serve station {}",
            result.len(),
            kind,
            self.stations.name(station),
        );
        Ok(result)
    }
}
