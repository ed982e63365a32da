//! Vehicle kind enum shared across the board crates.
//!
//! Road vehicles are one kind here; the bus/lorry split the board's filter
//! buttons expose is a *display* category derived from whether the vehicle
//! carries a passenger-class cargo, and lives with the filtering code.

/// The transport mode of a vehicle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleKind {
    Train,
    /// Bus or lorry, disambiguated by cargo class.
    Road,
    Ship,
    Aircraft,
}

impl VehicleKind {
    /// All kinds, in the order the board iterates them each recompute.
    pub const ALL: [VehicleKind; 4] = [
        VehicleKind::Train,
        VehicleKind::Road,
        VehicleKind::Ship,
        VehicleKind::Aircraft,
    ];

    /// Human-readable label, useful for logs and CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleKind::Train    => "train",
            VehicleKind::Road     => "road",
            VehicleKind::Ship     => "ship",
            VehicleKind::Aircraft => "aircraft",
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
