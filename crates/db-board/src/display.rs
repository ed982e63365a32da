//! Text presentation of projected entries.
//!
//! Deliberately shallow: the real UI owns layout, fonts and scrolling.  This
//! module only knows how to turn one [`ProjectedEntry`] into strings — the
//! headline row and the "Calling at:" line — plus the interchange-icon
//! lookup from station facilities.

use db_core::{StationId, VehicleKind};
use db_model::{Facilities, StationRegistry};

use crate::entry::{BoardMode, EntryStatus};
use crate::rank::ProjectedEntry;

// ── Icons ─────────────────────────────────────────────────────────────────────

/// Interchange icon shown next to a destination name.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StationIcon {
    None,
    Train,
    Ship,
    Plane,
}

/// Pick the interchange icon for a destination: the "most foreign" facility
/// wins, and a facility matching the vehicle's own kind is never shown.
pub fn destination_icon(kind: VehicleKind, facilities: Facilities) -> StationIcon {
    let mut icon = StationIcon::None;
    match kind {
        VehicleKind::Road => {
            if facilities.rail {
                icon = StationIcon::Train;
            }
            if facilities.dock {
                icon = StationIcon::Ship;
            }
            if facilities.airport {
                icon = StationIcon::Plane;
            }
        }
        VehicleKind::Train => {
            if facilities.dock {
                icon = StationIcon::Ship;
            }
            if facilities.airport {
                icon = StationIcon::Plane;
            }
        }
        VehicleKind::Ship => {
            if facilities.airport {
                icon = StationIcon::Plane;
            }
        }
        VehicleKind::Aircraft => {}
    }
    icon
}

// ── Lines ─────────────────────────────────────────────────────────────────────

/// Headline row: time, status, destination (with via where set).
///
/// ```text
/// day 102  On time   Fort Gravel via Sandpool Central
/// ```
pub fn headline(entry: &ProjectedEntry, stations: &StationRegistry, mode: BoardMode) -> String {
    let day = match mode {
        BoardMode::Departures => entry.scheduled_departure_day,
        BoardMode::Arrivals => entry.scheduled_arrival_day,
    };
    let status = match entry.status {
        EntryStatus::OnTime => "On time".to_string(),
        EntryStatus::Arrived => "Arrived".to_string(),
        EntryStatus::Cancelled => "Cancelled".to_string(),
        EntryStatus::Delayed => "Delayed".to_string(),
        EntryStatus::Expected => format!("Expected day {}", entry.expected_day),
    };

    let destination = entry.destination();
    let mut line = format!("day {day}  {status}  {}", stations.name(destination));
    match entry.via {
        Some(via) if via != destination => {
            line.push_str(&format!(" via {}", stations.name(via)));
        }
        _ => {}
    }
    line
}

/// The "Calling at:" line, split into the segment through the advertised
/// destination and — where the service carries on — a "continues to" tail.
///
/// ```text
/// Calling at: Sandpool Central, Fort Gravel and Gravel Heights, continues to Sandpool Bay.
/// ```
pub fn calling_at_line(entry: &ProjectedEntry, stations: &StationRegistry) -> String {
    let names: Vec<&str> = entry
        .calling_at
        .iter()
        .map(|ca| stations.name(ca.station))
        .collect();
    let split = entry.destination_index + 1;

    let mut line = format!("Calling at: {}", join_stops(&names[..split]));
    if split < names.len() {
        line.push_str(&format!(", continues to {}", join_stops(&names[split..])));
    }
    line.push('.');
    line
}

/// "A", "A and B", "A, B and C".
fn join_stops(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

/// Resolve a station's icon for a projected entry's destination.
pub fn entry_destination_icon(
    entry: &ProjectedEntry,
    stations: &StationRegistry,
) -> StationIcon {
    icon_for(entry.kind, entry.destination(), stations)
}

fn icon_for(kind: VehicleKind, station: StationId, stations: &StationRegistry) -> StationIcon {
    stations
        .get(station)
        .map_or(StationIcon::None, |s| destination_icon(kind, s.facilities))
}
