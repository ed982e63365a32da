//! Stations, waypoints and the station registry.

use rustc_hash::FxHashMap;

use db_core::StationId;

// ── Facilities ────────────────────────────────────────────────────────────────

/// Which transport facilities a station has.  The presentation layer uses
/// these to pick an interchange icon next to a destination name.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facilities {
    pub rail: bool,
    pub road: bool,
    pub dock: bool,
    pub airport: bool,
}

// ── Station ───────────────────────────────────────────────────────────────────

/// A station or waypoint in the host's pool.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id: StationId,
    pub name: String,
    /// Waypoints never load or unload; they only exist for routing and for
    /// waypoint boards.
    pub is_waypoint: bool,
    pub facilities: Facilities,
}

// ── StationRegistry ───────────────────────────────────────────────────────────

/// Lookup table over the station pool.
///
/// `FxHashMap` because lookups are integer-keyed and on the recompute hot
/// path (every order destination is validated through here).
#[derive(Clone, Debug, Default)]
pub struct StationRegistry {
    by_id: FxHashMap<StationId, Station>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, station: Station) {
        self.by_id.insert(station.id, station);
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.by_id.get(&id)
    }

    pub fn is_valid(&self, id: StationId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// The station's display name, or a placeholder for a dangling ID.
    /// Intended for diagnostics only.
    pub fn name(&self, id: StationId) -> &str {
        self.get(id).map_or("<unknown>", |s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.by_id.values()
    }
}
