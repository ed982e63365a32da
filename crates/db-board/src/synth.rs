//! Departure synthesizer: walk one vehicle's full order cycle and split it
//! into discrete board entries.
//!
//! Starting from the order the scanner found, the walk keeps a running clock
//! and an [`EntryBuilder`] window.  Each time the cycle revisits the board's
//! station (or waypoint), the window is flushed as a finished entry and
//! restarted; other stops accumulate into the window's calling-at list
//! according to their load/unload/via semantics.  One pass over the cycle
//! therefore yields zero or more entries, all sharing the cycle's total
//! duration as their repeat interval — unless a conditional or untimetabled
//! order is hit, which marks every entry from this vehicle non-repeating.

use log::{debug, trace};

use db_core::StationId;
use db_model::{OrderAction, Vehicle, World};

use crate::entry::{BoardEntry, BoardMode, BoardStop, EntryBuilder, VehicleStatus};
use crate::scanner::find_board_start;

/// Synthesize all board entries one vehicle contributes this tick.
///
/// A vehicle stopped in a depot contributes nothing; one currently diverted
/// to a depot still contributes, with status [`VehicleStatus::Diverted`].
pub fn synthesize(
    world: &World,
    station: StationId,
    vehicle: &Vehicle,
    mode: BoardMode,
    stop: BoardStop,
) -> Vec<BoardEntry> {
    if vehicle.stopped_in_depot() {
        return Vec::new();
    }

    let day_length = world.clock.day_length;
    let orders = &vehicle.orders;
    let diverted = vehicle.diverted();

    let start = find_board_start(world, station, vehicle, stop);
    let Some(first_index) = start.order else {
        trace!("vehicle {}: no departures from this station", vehicle.name);
        return Vec::new();
    };
    let first = orders.get(first_index).expect("scanner returned valid index");

    // Total (travel + wait) over the whole cycle; becomes every entry's
    // repeat interval.  Forced to 0 if projection breaks partway.
    let mut cycle_ticks: u32 = first.round_ticks();
    // Ticks since the current window's departure.
    let mut ticks_after_start: u32 = 0;

    let initial_status = if diverted {
        VehicleStatus::Diverted
    } else if start.arrived {
        VehicleStatus::Arrived
    } else {
        VehicleStatus::Travelling
    };
    let reset_status = if diverted { VehicleStatus::Diverted } else { VehicleStatus::Travelling };

    let mut builder = EntryBuilder::new(start.arrival, first.wait_ticks, initial_status, vehicle);
    let mut result: Vec<BoardEntry> = Vec::new();

    let mut t = start.arrival.plus(first.wait_ticks, day_length);
    // Set when the manifest was cleared by a forced unload; suppresses
    // further calling-at appends until the next departure reset.
    let mut unloaded_everything = false;
    // Pending via-only destination, resolved if it reappears as a real stop.
    let mut via: Option<StationId> = None;

    let mut index = orders.next_index(first_index);
    'walk: while index != first_index {
        let order = orders.get(index).expect("cycle index in range");

        if order.action == OrderAction::Conditional || !order.timetabled() {
            debug!("vehicle {}: conditional or untimetabled order, giving up", vehicle.name);
            cycle_ticks = 0;
            break 'walk;
        }

        t = t.plus(order.travel_ticks, day_length);

        if let OrderAction::Implicit(dest) = order.action {
            trace!("skipping implicit order to {}", world.stations.name(dest));
            index = orders.next_index(index);
            continue 'walk;
        }

        cycle_ticks += order.round_ticks();
        ticks_after_start += order.round_ticks();

        // Via-only station orders record their destination and advance the
        // clock by travel only; every other order also waits at the bottom.
        let mut advance_wait = true;

        match order.action {
            OrderAction::Station(dest) => {
                if order.is_via() {
                    trace!("going via {}", world.stations.name(dest));
                    via = Some(dest);
                    advance_wait = false;
                } else if order.wait_ticks == 0 {
                    debug!("vehicle {}: station order with no scheduled wait", vehicle.name);
                    cycle_ticks = 0;
                    break 'walk;
                } else {
                    match mode {
                        BoardMode::Departures => {
                            if dest == station && order.load.picks_up() {
                                // Back at the board's station: flush the
                                // window (if it saw any stops) and restart.
                                if builder.has_stops() {
                                    result.push(builder.emit());
                                    ticks_after_start = 0;
                                }
                                unloaded_everything = false;
                                builder.reset(t, order.wait_ticks, reset_status);
                            } else if order.unload.sets_down()
                                && !builder.already_calling_at(dest)
                                && !unloaded_everything
                            {
                                builder.push_calling_at(
                                    dest,
                                    ticks_after_start - order.wait_ticks,
                                );
                                unloaded_everything |= order.unload.force_unload();
                                if via == Some(dest) && builder.via().is_none() {
                                    builder.set_via(dest);
                                    via = None;
                                }
                            } else {
                                via = None;
                            }
                        }
                        BoardMode::Arrivals => {
                            if dest == station && order.unload.sets_down() {
                                if builder.has_stops() {
                                    builder.set_arrival(t);
                                    result.push(builder.emit());
                                    ticks_after_start = 0;
                                }
                                builder.reset(t, order.wait_ticks, reset_status);
                            } else if order.load.picks_up() {
                                // Keep only the latest visit to each stop.
                                builder.remove_calling_at(dest);
                                if order.unload.force_unload() {
                                    builder.clear_calling_at();
                                    builder.clear_via();
                                }
                                builder.push_calling_at(
                                    dest,
                                    ticks_after_start - order.wait_ticks,
                                );
                                if via == Some(dest) && builder.via().is_none() {
                                    builder.set_via(dest);
                                    via = None;
                                }
                            } else {
                                if order.unload.force_unload() {
                                    builder.clear_calling_at();
                                }
                                via = None;
                            }
                        }
                    }
                }
            }

            OrderAction::Waypoint(dest) if stop == BoardStop::Waypoint && dest == station => {
                // Revisiting the board's waypoint flushes exactly like a
                // departure-mode station match, in both modes.
                if builder.has_stops() {
                    result.push(builder.emit());
                    ticks_after_start = 0;
                }
                unloaded_everything = false;
                builder.reset(t, order.wait_ticks, reset_status);
            }

            // Depots and foreign waypoints only consume time.
            _ => {}
        }

        if advance_wait {
            t = t.plus(order.wait_ticks, day_length);
        }
        index = orders.next_index(index);
    }

    // Wrap-around tail: stops accumulated after the last revisit belong to
    // the window that departs at the original start order.
    if builder.has_stops() {
        if mode == BoardMode::Arrivals {
            builder.set_arrival(start.arrival);
            builder.set_status(initial_status);
        }
        result.push(builder.emit());
    }

    for entry in &mut result {
        entry.repeat_ticks = cycle_ticks;
    }
    debug!(
        "vehicle {}: {} entr{} synthesized, cycle {} ticks",
        vehicle.name,
        result.len(),
        if result.len() == 1 { "y" } else { "ies" },
        cycle_ticks,
    );

    result
}
