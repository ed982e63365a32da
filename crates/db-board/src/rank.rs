//! Selection, ordering and pagination of synthesized entries.
//!
//! Entries from all vehicles are merged through a min-heap keyed by
//! scheduled departure (departure boards) or arrival (arrival boards).
//! Repeating entries are expanded lazily: each time one is popped, its next
//! occurrence is pushed back if it still falls within the display horizon.
//! Only the requested page is projected into display form; projection also
//! trims the advertised destination past stops some other service reaches
//! sooner.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use db_core::{DayLength, GameClock, StationId, VehicleId, VehicleKind};

use crate::entry::{BoardEntry, BoardMode, CallingAt, EntryStatus};

// ── KindFilter ────────────────────────────────────────────────────────────────

/// Which of the five display categories the board shows.
///
/// Buses and lorries are both road vehicles; they are told apart by whether
/// the vehicle's cargo is a passenger class.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct KindFilter {
    pub trains: bool,
    pub buses: bool,
    pub lorries: bool,
    pub ships: bool,
    pub planes: bool,
}

impl KindFilter {
    pub const ALL: KindFilter = KindFilter {
        trains: true,
        buses: true,
        lorries: true,
        ships: true,
        planes: true,
    };

    pub const NONE: KindFilter = KindFilter {
        trains: false,
        buses: false,
        lorries: false,
        ships: false,
        planes: false,
    };

    /// Does this filter show `entry`?
    pub fn shows(&self, entry: &BoardEntry) -> bool {
        match entry.kind {
            VehicleKind::Train => self.trains,
            VehicleKind::Road => {
                if entry.carries_passengers {
                    self.buses
                } else {
                    self.lorries
                }
            }
            VehicleKind::Ship => self.ships,
            VehicleKind::Aircraft => self.planes,
        }
    }
}

impl Default for KindFilter {
    fn default() -> Self {
        Self::ALL
    }
}

// ── ProjectedEntry ────────────────────────────────────────────────────────────

/// A display-ready view of one occurrence of a board entry.
#[derive(Clone, Debug)]
pub struct ProjectedEntry {
    pub scheduled_arrival_day: u32,
    pub scheduled_departure_day: u32,
    /// Lateness-adjusted arrival day.
    pub expected_day: u32,
    pub status: EntryStatus,
    pub calling_at: Vec<CallingAt>,
    /// Index into `calling_at` of the stop advertised as the destination.
    pub destination_index: usize,
    pub via: Option<StationId>,
    pub vehicle: VehicleId,
    pub kind: VehicleKind,
    pub carries_passengers: bool,
}

impl ProjectedEntry {
    /// The advertised destination station.
    pub fn destination(&self) -> StationId {
        self.calling_at[self.destination_index].station
    }
}

// ── Counting ──────────────────────────────────────────────────────────────────

/// How many occurrences the board will show within `horizon_days` — repeats
/// included.  Used for scrollbar sizing.
pub fn visible_count(
    entries: &[BoardEntry],
    clock: GameClock,
    horizon_days: u32,
    mode: BoardMode,
    filter: KindFilter,
) -> u32 {
    let day_length = clock.day_length;
    let limit_ticks = (clock.now.day as u64 + horizon_days as u64) * day_length.ticks();

    let mut count = 0;
    for entry in entries {
        let scheduled = match mode {
            BoardMode::Departures => entry.departure_ticks(day_length),
            BoardMode::Arrivals => entry.arrival_ticks(day_length),
        };
        if scheduled < limit_ticks && filter.shows(entry) {
            count += 1;
            if entry.repeats() {
                count += ((limit_ticks - scheduled) / entry.repeat_ticks as u64) as u32;
            }
        }
    }
    count
}

// ── Pagination ────────────────────────────────────────────────────────────────

/// One recorded arrival opportunity at a destination station, for the
/// trimming pass: a service departing at `start_ticks` (repeating every
/// `every_ticks`; 0 = once) reaches the station `after_ticks` later.
struct DestinationArrival {
    start_ticks: u64,
    after_ticks: u32,
    every_ticks: u32,
}

type ArrivalIndex = FxHashMap<StationId, Vec<DestinationArrival>>;

/// Rank all entries, skip `skip` occurrences, and project the next `len`.
///
/// The input is not modified; repeat expansion happens on working copies.
pub fn page(
    entries: &[BoardEntry],
    clock: GameClock,
    horizon_days: u32,
    mode: BoardMode,
    filter: KindFilter,
    skip: usize,
    len: usize,
) -> Vec<ProjectedEntry> {
    let day_length = clock.day_length;
    let limit_day = clock.now.day + horizon_days;

    // Departure boards precompute, per destination station, every recorded
    // way of reaching it — used to trim advertised destinations below.
    let arrival_index: ArrivalIndex = match mode {
        BoardMode::Departures => {
            let mut index: ArrivalIndex = FxHashMap::default();
            for entry in entries.iter().filter(|e| filter.shows(e)) {
                for ca in &entry.calling_at {
                    index.entry(ca.station).or_default().push(DestinationArrival {
                        start_ticks: entry.departure_ticks(day_length),
                        after_ticks: ca.ticks_after_start,
                        every_ticks: entry.repeat_ticks,
                    });
                }
            }
            index
        }
        BoardMode::Arrivals => FxHashMap::default(),
    };

    // Min-heap over working copies.  Key: scheduled departure then arrival
    // (departure boards), or arrival alone; slot index as the final
    // tie-break keeps the ranking deterministic.
    let mut working: Vec<BoardEntry> = Vec::new();
    let mut heap: BinaryHeap<Reverse<(u64, u64, usize)>> = BinaryHeap::new();

    let key = |entry: &BoardEntry, slot: usize| -> (u64, u64, usize) {
        let arrival = entry.arrival_ticks(day_length);
        match mode {
            BoardMode::Departures => (arrival + entry.wait_ticks as u64, arrival, slot),
            BoardMode::Arrivals => (arrival, arrival, slot),
        }
    };

    for entry in entries {
        if entry.scheduled_departure_day(day_length) < limit_day && filter.shows(entry) {
            let slot = working.len();
            working.push(entry.clone());
            heap.push(Reverse(key(&working[slot], slot)));
        }
    }

    // Pop an occurrence and requeue its successor while it stays within the
    // horizon.
    let mut advance = |slot: usize, heap: &mut BinaryHeap<Reverse<(u64, u64, usize)>>,
                       working: &mut Vec<BoardEntry>| {
        if working[slot].repeats() {
            working[slot].advance_to_next_occurrence(day_length);
            if working[slot].scheduled_departure_day(day_length) < limit_day {
                heap.push(Reverse(key(&working[slot], slot)));
            }
        }
    };

    for _ in 0..skip {
        let Some(Reverse((_, _, slot))) = heap.pop() else { break };
        advance(slot, &mut heap, &mut working);
    }

    let mut result = Vec::with_capacity(len);
    for _ in 0..len {
        let Some(Reverse((_, _, slot))) = heap.pop() else { break };
        let projected = project(&working[slot], clock, mode, &arrival_index, day_length);
        result.push(projected);
        advance(slot, &mut heap, &mut working);
    }

    result
}

// ── Projection ────────────────────────────────────────────────────────────────

fn project(
    entry: &BoardEntry,
    clock: GameClock,
    mode: BoardMode,
    arrival_index: &ArrivalIndex,
    day_length: DayLength,
) -> ProjectedEntry {
    debug_assert!(!entry.calling_at.is_empty());

    let mut via = entry.via;
    let destination_index = match mode {
        BoardMode::Departures => {
            trim_destination(entry, arrival_index, day_length, &mut via)
        }
        BoardMode::Arrivals => 0,
    };

    ProjectedEntry {
        scheduled_arrival_day: entry.arrival.day,
        scheduled_departure_day: entry.scheduled_departure_day(day_length),
        expected_day: entry.expected_day(day_length),
        status: entry.display_status(clock.now.day, mode, day_length),
        calling_at: entry.calling_at.clone(),
        destination_index,
        via,
        vehicle: entry.vehicle,
        kind: entry.kind,
        carries_passengers: entry.carries_passengers,
    }
}

/// Walk the calling-at list backward from the end, dropping trailing stops
/// some other recorded service reaches no later despite departing no
/// earlier — advertising those as the destination would point passengers at
/// a slower option.  Clears `via` if the trimming passes it.
fn trim_destination(
    entry: &BoardEntry,
    arrival_index: &ArrivalIndex,
    day_length: DayLength,
    via: &mut Option<StationId>,
) -> usize {
    let departure_ticks = entry.departure_ticks(day_length);

    let mut destination_index = entry.calling_at.len() - 1;
    while destination_index > 0 {
        let stop = &entry.calling_at[destination_index];
        if *via == Some(stop.station) {
            *via = None;
        }
        let reached_at = departure_ticks + stop.ticks_after_start as u64;

        let covered_sooner = arrival_index
            .get(&stop.station)
            .is_some_and(|arrivals| {
                arrivals.iter().any(|a| covers(a, departure_ticks, reached_at))
            });
        if !covered_sooner {
            break;
        }
        destination_index -= 1;
    }
    destination_index
}

/// Does `arrival` reach the stop no later than `reached_at` while departing
/// no earlier than `departure_ticks`?
fn covers(arrival: &DestinationArrival, departure_ticks: u64, reached_at: u64) -> bool {
    if arrival.every_ticks == 0 {
        arrival.start_ticks >= departure_ticks
            && arrival.start_ticks + (arrival.after_ticks as u64) < reached_at
    } else {
        // First occurrence of the repeating service departing at or after
        // our own departure.
        let mut first_after = arrival.start_ticks;
        let diff = departure_ticks as i64 - arrival.start_ticks as i64;
        if diff > 0 {
            let every = arrival.every_ticks as u64;
            first_after = arrival.start_ticks + (diff as u64).div_ceil(every) * every;
        }
        first_after + (arrival.after_ticks as u64) < reached_at
    }
}
