//! Order scanner: locate a vehicle's first qualifying departure from the
//! board's station.
//!
//! The scan reconstructs the *scheduled* start time of the vehicle's current
//! order (undoing elapsed progress and lateness), then walks the order cycle
//! at most once looking for an order that loads at the station.  Conditional
//! and untimetabled orders end the scan immediately — the timetable cannot
//! be projected through them.

use log::{debug, trace};

use db_core::{GameTime, StationId};
use db_model::{OrderAction, Vehicle, World};

use crate::entry::BoardStop;

/// Result of the scan: the first qualifying order (if any), the time the
/// vehicle is due at that order's station, and whether it is already there.
#[derive(Clone, Debug)]
pub struct BoardStart {
    /// Index of the qualifying order, or `None` if the vehicle has no
    /// projectable departure from this station.
    pub order: Option<usize>,
    pub arrival: GameTime,
    /// The vehicle is currently loading at the qualifying order's station.
    pub arrived: bool,
}

/// Find the order in `vehicle`'s cycle that represents its next (or current)
/// qualifying departure from `station`.
pub fn find_board_start(
    world: &World,
    station: StationId,
    vehicle: &Vehicle,
    stop: BoardStop,
) -> BoardStart {
    let day_length = world.clock.day_length;
    let orders = &vehicle.orders;

    if orders.is_empty() {
        return BoardStart { order: None, arrival: world.clock.now, arrived: false };
    }

    let mut index = vehicle.current_order_index();
    let current = orders.get(index).expect("current order index in range");
    let mut arrived = vehicle.is_loading();

    // Reconstruct the scheduled start of the current order: subtract elapsed
    // order time, the travel leg if the loading phase has begun (loading
    // follows travel), and lateness where it has already shifted the clock.
    let mut base = world.clock.now_ticks() as i64 - vehicle.current_order_ticks as i64;
    if arrived {
        base -= current.travel_ticks as i64;
        if vehicle.lateness < 0 {
            // Arrived early: remove the (negative) lateness to recover the
            // timetabled start.
            base -= vehicle.lateness as i64;
        }
    } else if vehicle.lateness > 0 {
        base -= vehicle.lateness as i64;
    }
    let mut arrival = day_length.time(base.max(0) as u64);

    trace!(
        "vehicle {} ({}): order start reconstructed as {arrival}, loading = {arrived}",
        vehicle.name, vehicle.id,
    );

    for _ in 0..orders.len() {
        let order = orders.get(index).expect("cycle index in range");

        if order.action == OrderAction::Conditional || !order.timetabled() {
            debug!(
                "vehicle {}: conditional or untimetabled order before any departure",
                vehicle.name
            );
            break;
        }

        match order.action {
            OrderAction::Station(dest) => {
                let via = order.is_via();
                if !via && order.wait_ticks == 0 {
                    debug!("vehicle {}: station order with no scheduled wait", vehicle.name);
                    break;
                }
                if dest == station && order.load.picks_up() && !via {
                    arrival = arrival.plus(order.travel_ticks, day_length);
                    debug!(
                        "vehicle {}: first departure from {} arrives {arrival}",
                        vehicle.name,
                        world.stations.name(station),
                    );
                    return BoardStart { order: Some(index), arrival, arrived };
                }
            }
            OrderAction::Waypoint(dest) if stop == BoardStop::Waypoint && dest == station => {
                arrival = arrival.plus(order.travel_ticks, day_length);
                debug!(
                    "vehicle {}: first visit to waypoint {} arrives {arrival}",
                    vehicle.name,
                    world.stations.name(station),
                );
                return BoardStart { order: Some(index), arrival, arrived };
            }
            _ => {}
        }

        // Not the departure we want: the vehicle passes through and the scan
        // moves on, so it can no longer count as already arrived.
        arrival = arrival.plus(order.round_ticks(), day_length);
        arrived = false;
        index = orders.next_index(index);
    }

    BoardStart { order: None, arrival, arrived }
}
