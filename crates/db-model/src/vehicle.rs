//! Vehicle snapshot state.
//!
//! Only the fields the board's algorithms consume are mirrored here; the
//! host keeps everything else (position, consist, cargo amounts, …).

use db_core::{VehicleId, VehicleKind};

use crate::order::{Order, OrderList};

// ── VehicleActivity ───────────────────────────────────────────────────────────

/// What the vehicle is doing right now, as far as the board cares.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleActivity {
    /// En route to its current order's destination.
    #[default]
    Travelling,
    /// At a station, loading/unloading (the loading phase follows travel).
    Loading,
    /// Diverted toward a depot; its board entries show as cancelled.
    HeadingToDepot,
    /// Parked in a depot; contributes nothing to any board.
    StoppedInDepot,
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

/// One vehicle, frozen for the current simulation tick.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub kind: VehicleKind,
    /// `true` if the vehicle's cargo is a passenger class; splits road
    /// vehicles into the bus/lorry display categories.
    pub carries_passengers: bool,
    pub orders: OrderList,
    /// Index of the current order within the cycle.
    pub cur_order: usize,
    /// Ticks elapsed since the current order began.
    pub current_order_ticks: u32,
    /// Signed offset from the timetable: negative = early, positive = late.
    pub lateness: i32,
    pub activity: VehicleActivity,
}

impl Vehicle {
    /// The current order, or `None` for an orderless vehicle.
    pub fn current_order(&self) -> Option<&Order> {
        if self.orders.is_empty() {
            return None;
        }
        self.orders.get(self.cur_order % self.orders.len())
    }

    /// Index of the current order, normalized into the cycle.
    pub fn current_order_index(&self) -> usize {
        debug_assert!(!self.orders.is_empty());
        self.cur_order % self.orders.len()
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.activity == VehicleActivity::Loading
    }

    #[inline]
    pub fn diverted(&self) -> bool {
        self.activity == VehicleActivity::HeadingToDepot
    }

    #[inline]
    pub fn stopped_in_depot(&self) -> bool {
        self.activity == VehicleActivity::StoppedInDepot
    }
}
