//! Board entry types and the accumulator the synthesizer builds them with.
//!
//! A [`BoardEntry`] is one synthesized departure (or arrival): the time a
//! vehicle reaches the board's station on one cycle of its orders, how long
//! it waits there, every stop it calls at before the next reset, and how
//! often the whole pattern repeats.  Entries are rebuilt from scratch every
//! simulation tick and never persisted.

use db_core::{DayLength, GameTime, StationId, VehicleId, VehicleKind};
use db_model::Vehicle;

// ── Mode selectors ────────────────────────────────────────────────────────────

/// Whether the board lists departures from the station or arrivals at it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BoardMode {
    Departures,
    Arrivals,
}

/// Whether the board's subject is a station or a waypoint.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BoardStop {
    Station,
    Waypoint,
}

// ── CallingAt ─────────────────────────────────────────────────────────────────

/// One intermediate stop of a synthesized entry.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallingAt {
    pub station: StationId,
    /// Ticks from the entry's departure until the vehicle reaches this stop.
    pub ticks_after_start: u32,
}

// ── Status ────────────────────────────────────────────────────────────────────

/// Where the vehicle is in its cycle, relative to this entry.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleStatus {
    /// On its way to the station.
    Travelling,
    /// At the station, loading.
    Arrived,
    /// Diverted to a depot; shown as cancelled.
    Diverted,
}

/// The classification a board row displays.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryStatus {
    OnTime,
    Arrived,
    Cancelled,
    /// Past its scheduled time and not early.
    Delayed,
    /// Running late; the lateness-adjusted projection is later than scheduled.
    Expected,
}

// ── BoardEntry ────────────────────────────────────────────────────────────────

/// One synthesized schedule record.
///
/// Invariant: `calling_at` never starts with the entry's own origin station;
/// a station appears more than once only if the cycle genuinely revisits it.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardEntry {
    /// When the vehicle first reaches the station on this cycle.
    pub arrival: GameTime,
    /// Scheduled wait at the station.
    pub wait_ticks: u32,
    pub calling_at: Vec<CallingAt>,
    /// Resolved via station, if a via-only stop's destination later reappears
    /// as a real stop.
    pub via: Option<StationId>,
    pub vehicle_status: VehicleStatus,
    /// Signed ticks: negative = early, positive = late.
    pub lateness: i32,
    pub vehicle: VehicleId,
    pub kind: VehicleKind,
    /// Splits road vehicles into the bus/lorry filter categories.
    pub carries_passengers: bool,
    /// Ticks until the next occurrence; 0 = does not repeat (a conditional
    /// or untimetabled order broke the cycle).
    pub repeat_ticks: u32,
}

impl BoardEntry {
    #[inline]
    pub fn repeats(&self) -> bool {
        self.repeat_ticks != 0
    }

    /// Absolute tick of the arrival.
    #[inline]
    pub fn arrival_ticks(&self, day_length: DayLength) -> u64 {
        self.arrival.total_ticks(day_length)
    }

    /// Absolute tick of the scheduled departure (arrival + wait).
    #[inline]
    pub fn departure_ticks(&self, day_length: DayLength) -> u64 {
        self.arrival_ticks(day_length) + self.wait_ticks as u64
    }

    /// Day of the scheduled departure, for coarse display comparisons.
    pub fn scheduled_departure_day(&self, day_length: DayLength) -> u32 {
        self.arrival.day_after(self.wait_ticks as i64, day_length)
    }

    /// Day of the lateness-adjusted arrival.
    pub fn expected_day(&self, day_length: DayLength) -> u32 {
        self.arrival.day_after(self.lateness as i64, day_length)
    }

    /// Advance this entry to its next scheduled occurrence.
    ///
    /// Callers must check [`BoardEntry::repeats`] first; advancing a
    /// non-repeating entry is a logic error.
    pub fn advance_to_next_occurrence(&mut self, day_length: DayLength) {
        debug_assert!(self.repeats());
        self.arrival = self.arrival.plus(self.repeat_ticks, day_length);
        if self.vehicle_status == VehicleStatus::Arrived {
            self.vehicle_status = VehicleStatus::Travelling;
        }
    }

    /// Classify the entry for display at day `now_day`.
    ///
    /// Departure boards compare against the scheduled departure day; arrival
    /// boards against the arrival day.
    pub fn display_status(
        &self,
        now_day: u32,
        mode: BoardMode,
        day_length: DayLength,
    ) -> EntryStatus {
        match self.vehicle_status {
            VehicleStatus::Arrived => EntryStatus::Arrived,
            VehicleStatus::Diverted => EntryStatus::Cancelled,
            VehicleStatus::Travelling => {
                let expected = self.expected_day(day_length);
                let scheduled = match mode {
                    BoardMode::Departures => self.scheduled_departure_day(day_length),
                    BoardMode::Arrivals => self.arrival.day,
                };
                if expected > scheduled {
                    EntryStatus::Expected
                } else if now_day < scheduled {
                    EntryStatus::OnTime
                } else {
                    EntryStatus::Delayed
                }
            }
        }
    }
}

// ── EntryBuilder ──────────────────────────────────────────────────────────────

/// The synthesizer's accumulator: the entry currently being assembled.
///
/// The walk over a vehicle's cycle flushes the accumulator with
/// [`EntryBuilder::emit`] each time the board's station is revisited, then
/// restarts the window with [`EntryBuilder::reset`].  Reset replaces all
/// window state wholesale so flush points are the only places the window
/// changes shape.
#[derive(Clone, Debug)]
pub(crate) struct EntryBuilder {
    entry: BoardEntry,
}

impl EntryBuilder {
    pub fn new(
        arrival: GameTime,
        wait_ticks: u32,
        status: VehicleStatus,
        vehicle: &Vehicle,
    ) -> Self {
        Self {
            entry: BoardEntry {
                arrival,
                wait_ticks,
                calling_at: Vec::new(),
                via: None,
                vehicle_status: status,
                lateness: vehicle.lateness,
                vehicle: vehicle.id,
                kind: vehicle.kind,
                carries_passengers: vehicle.carries_passengers,
                repeat_ticks: 0,
            },
        }
    }

    /// Start a fresh window at `arrival`, dropping all accumulated stops.
    pub fn reset(&mut self, arrival: GameTime, wait_ticks: u32, status: VehicleStatus) {
        self.entry.calling_at.clear();
        self.entry.via = None;
        self.entry.arrival = arrival;
        self.entry.wait_ticks = wait_ticks;
        self.entry.vehicle_status = status;
    }

    /// Snapshot the current window as a finished entry.
    pub fn emit(&self) -> BoardEntry {
        self.entry.clone()
    }

    pub fn has_stops(&self) -> bool {
        !self.entry.calling_at.is_empty()
    }

    pub fn already_calling_at(&self, station: StationId) -> bool {
        self.entry.calling_at.iter().any(|ca| ca.station == station)
    }

    pub fn push_calling_at(&mut self, station: StationId, ticks_after_start: u32) {
        self.entry.calling_at.push(CallingAt { station, ticks_after_start });
    }

    /// Drop an earlier occurrence of `station` so only the latest remains
    /// (arrival boards keep the final visit before the terminus).
    pub fn remove_calling_at(&mut self, station: StationId) {
        self.entry.calling_at.retain(|ca| ca.station != station);
    }

    /// Clear the manifest after a forced unload.
    pub fn clear_calling_at(&mut self) {
        self.entry.calling_at.clear();
    }

    pub fn via(&self) -> Option<StationId> {
        self.entry.via
    }

    pub fn set_via(&mut self, station: StationId) {
        self.entry.via = Some(station);
    }

    pub fn clear_via(&mut self) {
        self.entry.via = None;
    }

    pub fn set_arrival(&mut self, arrival: GameTime) {
        self.entry.arrival = arrival;
    }

    pub fn set_status(&mut self, status: VehicleStatus) {
        self.entry.vehicle_status = status;
    }
}
