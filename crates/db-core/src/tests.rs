//! Unit tests for db-core primitives.

#[cfg(test)]
mod ids {
    use crate::{StationId, VehicleId};

    #[test]
    fn index_roundtrip() {
        let id = StationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(StationId(0) < StationId(1));
        assert!(VehicleId(100) > VehicleId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(StationId::INVALID.0, u16::MAX);
        assert_eq!(VehicleId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(StationId(7).to_string(), "StationId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{DayLength, GameTime};

    const DAY: DayLength = DayLength(74); // the host's classic day length

    #[test]
    fn normalization_keeps_fract_in_range() {
        for ticks in [0u64, 1, 73, 74, 75, 147, 148, 10_000_000] {
            let t = DAY.time(ticks);
            assert!(t.fract < 74, "fract {} out of range", t.fract);
            assert_eq!(t.total_ticks(DAY), ticks);
        }
    }

    #[test]
    fn plus_matches_tick_sum() {
        // (t + d).total_ticks == t.total_ticks + d, for deltas within a day.
        let t = GameTime::new(100, 50);
        for d in [0u32, 1, 23, 24, 73, 74] {
            assert_eq!(t.plus(d, DAY).total_ticks(DAY), t.total_ticks(DAY) + d as u64);
        }
    }

    #[test]
    fn plus_carries_into_next_day() {
        let t = GameTime::new(10, 70);
        let u = t.plus(10, DAY);
        assert_eq!(u, GameTime::new(11, 6));
    }

    #[test]
    fn ordering_compares_day_then_fract() {
        assert!(GameTime::new(2, 0) > GameTime::new(1, 73));
        assert!(GameTime::new(1, 10) > GameTime::new(1, 9));
        assert_eq!(GameTime::new(5, 5), GameTime::new(5, 5));
    }

    #[test]
    fn day_after_truncates() {
        let t = GameTime::new(3, 70);
        // 3*74 + 70 = 292; +4 = 296 = day 4 exactly; +3 = 295 still day 3.
        assert_eq!(t.day_after(4, DAY), 4);
        assert_eq!(t.day_after(3, DAY), 3);
    }

    #[test]
    fn day_after_negative_delta() {
        let t = GameTime::new(1, 0);
        // 74 ticks - 1 = day 0.
        assert_eq!(t.day_after(-1, DAY), 0);
        // Saturates at day 0 rather than going negative.
        assert_eq!(GameTime::ZERO.day_after(-100, DAY), 0);
    }

    #[test]
    fn no_overflow_at_large_days() {
        // A day count near u32::MAX with a large day length still sums in u64.
        let t = GameTime::new(u32::MAX - 1, 70);
        let big = DayLength(65_536);
        let ticks = t.total_ticks(big);
        assert_eq!(ticks / big.ticks(), (u32::MAX - 1) as u64);
    }
}

#[cfg(test)]
mod kind {
    use crate::VehicleKind;

    #[test]
    fn all_covers_every_kind() {
        assert_eq!(VehicleKind::ALL.len(), 4);
    }

    #[test]
    fn display() {
        assert_eq!(VehicleKind::Train.to_string(), "train");
        assert_eq!(VehicleKind::Aircraft.to_string(), "aircraft");
    }
}
