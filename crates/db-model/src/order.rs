//! Orders and circular order lists.
//!
//! An order is one leg of a vehicle's programmed route: where to go, how
//! long the leg is timetabled to take, how long to wait there, and what the
//! vehicle does with cargo on arrival.  Orders the board cares about:
//!
//! * **goto-station** — a real stop (or a via-only pass-through).
//! * **goto-waypoint** — a routing marker; only waypoint boards treat it as
//!   a stop.
//! * **implicit** — auto-generated record of an unordered stop; skipped for
//!   display but still consumes travel time.
//! * **depot** — maintenance detour.
//! * **conditional** — a jump whose target depends on live state; the board
//!   cannot project past one.

use db_core::StationId;

// ── Policies ──────────────────────────────────────────────────────────────────

/// What the vehicle loads at the order's destination.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadPolicy {
    /// Load whatever is available.
    #[default]
    Load,
    /// Wait until completely full.
    FullLoad,
    /// Load nothing.
    NoLoad,
}

impl LoadPolicy {
    /// A passenger could board here.
    #[inline]
    pub fn picks_up(self) -> bool {
        self != LoadPolicy::NoLoad
    }
}

/// What the vehicle unloads at the order's destination.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnloadPolicy {
    /// Unload whatever is accepted.
    #[default]
    Unload,
    /// Force everything off, accepted or not.
    ForceUnload,
    /// Unload nothing.
    NoUnload,
}

impl UnloadPolicy {
    /// A passenger could alight here.
    #[inline]
    pub fn sets_down(self) -> bool {
        self != UnloadPolicy::NoUnload
    }

    /// Everything is forced off — clears the calling-at manifest.
    #[inline]
    pub fn force_unload(self) -> bool {
        self == UnloadPolicy::ForceUnload
    }
}

/// Whether the vehicle actually halts at the destination.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopPolicy {
    #[default]
    Stop,
    /// Pass through without stopping; only influences routing display.
    Via,
}

// ── Order ─────────────────────────────────────────────────────────────────────

/// The kind and destination of one order.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderAction {
    Station(StationId),
    Waypoint(StationId),
    /// Auto-generated stop record; display-invisible.
    Implicit(StationId),
    Depot,
    /// Conditional jump — unprojectable.
    Conditional,
}

/// One leg of a vehicle's circular order list.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub action: OrderAction,
    /// Timetabled ticks to travel from the previous order's destination.
    /// Zero means the leg is untimetabled.
    pub travel_ticks: u32,
    /// Timetabled ticks spent waiting at the destination.
    pub wait_ticks: u32,
    pub load: LoadPolicy,
    pub unload: UnloadPolicy,
    pub stop: StopPolicy,
}

impl Order {
    /// The leg has a timetabled travel time and can be projected.
    #[inline]
    pub fn timetabled(&self) -> bool {
        self.travel_ticks != 0
    }

    /// Travel plus wait — one full leg of the cycle.
    #[inline]
    pub fn round_ticks(&self) -> u32 {
        self.travel_ticks + self.wait_ticks
    }

    /// The station this order targets, for any action that has one.
    pub fn destination(&self) -> Option<StationId> {
        match self.action {
            OrderAction::Station(s) | OrderAction::Waypoint(s) | OrderAction::Implicit(s) => {
                Some(s)
            }
            OrderAction::Depot | OrderAction::Conditional => None,
        }
    }

    #[inline]
    pub fn is_via(&self) -> bool {
        self.stop == StopPolicy::Via
    }
}

// ── OrderList ─────────────────────────────────────────────────────────────────

/// A vehicle's circular order sequence, stored as a contiguous arena.
///
/// Traversal wraps from the last order back to the first via
/// [`OrderList::next_index`]; every walk in the board is bounded by `len()`
/// iterations, so a malformed cycle can never loop forever.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderList {
    orders: Vec<Order>,
}

impl OrderList {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Order> {
        self.orders.get(index)
    }

    /// Read-only slice of the whole cycle.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The index after `index`, wrapping last → first.
    ///
    /// # Panics
    /// Panics in debug mode if the list is empty.
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        debug_assert!(!self.orders.is_empty());
        (index + 1) % self.orders.len()
    }

    /// Does any order in the cycle target `station` (as a station, waypoint,
    /// or implicit stop)?
    pub fn touches(&self, station: StationId) -> bool {
        self.orders.iter().any(|o| o.destination() == Some(station))
    }
}
