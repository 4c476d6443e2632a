//! Unit tests for gw-core primitives.

#[cfg(test)]
mod ids {
    use crate::EntityId;

    #[test]
    fn index_roundtrip() {
        let id = EntityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(EntityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(EntityId(7).to_string(), "EntityId(7)");
    }
}

#[cfg(test)]
mod point {
    use crate::{Point, p};

    #[test]
    fn manhattan_distance() {
        assert_eq!(p(0, 0).manhattan(p(0, 0)), 0);
        assert_eq!(p(0, 0).manhattan(p(2, -3)), 5);
        assert_eq!(p(-1, 4).manhattan(p(1, 4)), 2);
    }

    #[test]
    fn neighbours_are_four_connected() {
        let centre = p(3, 4);
        let ns: Vec<_> = centre.neighbours().collect();
        assert_eq!(ns, [p(3, 5), p(4, 4), p(3, 3), p(2, 4)]);
        assert!(ns.iter().all(|&n| centre.is_neighbour(n)));
        assert!(!centre.is_neighbour(p(4, 5)), "diagonals are not neighbours");
        assert!(!centre.is_neighbour(centre));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let corner = p(i32::MAX, i32::MAX);
        let ns: Vec<_> = corner.neighbours().collect();
        assert_eq!(ns, [p(i32::MAX, i32::MAX - 1), p(i32::MAX - 1, i32::MAX)]);

        let far = p(i32::MIN, i32::MIN);
        assert_eq!(corner.manhattan(far), u32::MAX);
        assert_eq!(far.neighbours().count(), 2);
    }

    #[test]
    fn component_bounds() {
        let a = p(1, -5);
        let b = p(-2, 3);
        assert_eq!(a.component_min(b), p(-2, -5));
        assert_eq!(a.component_max(b), p(1, 3));
    }

    #[test]
    fn within_is_inclusive() {
        assert!(p(0, 0).within(p(0, 0), p(0, 0)));
        assert!(p(2, 2).within(p(-2, -2), p(2, 2)));
        assert!(!p(3, 0).within(p(-2, -2), p(2, 2)));
    }

    #[test]
    fn zero_is_default() {
        assert_eq!(Point::default(), Point::ZERO);
        assert_eq!(p(1, 2).to_string(), "(1, 2)");
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{FrameClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
    }

    #[test]
    fn clock_accumulates_budget() {
        let mut clock = FrameClock::new();
        clock.advance(Duration::from_millis(16));
        clock.advance(Duration::from_millis(20));
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed, Duration::from_millis(36));
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::{GwError, WorldConfig, p};

    #[test]
    fn defaults_are_valid() {
        let cfg = WorldConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.cell_count(), 21 * 21);
        assert_eq!(cfg.step_duration(), Duration::from_millis(250));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let cfg = WorldConfig { min: p(1, 0), max: p(0, 0), ..WorldConfig::default() };
        assert!(matches!(cfg.validate(), Err(GwError::Config(_))));
        assert_eq!(cfg.cell_count(), 0);
    }

    #[test]
    fn spawn_outside_grid_rejected() {
        let cfg = WorldConfig {
            min: p(0, 0),
            max: p(2, 2),
            spawns: vec![p(1, 1), p(5, 5)],
            ..WorldConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(GwError::OutOfBounds(pt)) if pt == p(5, 5)));
    }

    #[test]
    fn zero_frame_rejected() {
        let cfg = WorldConfig { frame_millis: 0, ..WorldConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_fills_missing_keys_with_defaults() {
        let cfg = WorldConfig::from_toml_str(
            "step_millis = 100\nmin = { row = -2, column = -2 }\nmax = { row = 2, column = 2 }\n",
        )
        .expect("valid config");
        assert_eq!(cfg.step_millis, 100);
        assert_eq!(cfg.min, p(-2, -2));
        assert_eq!(cfg.seed, WorldConfig::default().seed);
        assert_eq!(cfg.spawns, vec![p(1, 1), p(0, 0)]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn toml_errors_are_reported() {
        assert!(matches!(
            WorldConfig::from_toml_str("step_millis = \"slow\""),
            Err(GwError::Parse(_))
        ));
        assert!(matches!(
            WorldConfig::from_toml_str("spawns = [{ row = 50, column = 0 }]"),
            Err(GwError::OutOfBounds(_))
        ));
        assert!(matches!(
            WorldConfig::load("/nonexistent/gridwalk.toml"),
            Err(GwError::Io(_))
        ));
    }
}

#[cfg(test)]
mod rng {
    use crate::{EntityId, EntityRng, WorldRng, p};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = EntityRng::new(12345, EntityId(0));
        let mut r2 = EntityRng::new(12345, EntityId(0));
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0..1000), r2.gen_range(0..1000));
        }
    }

    #[test]
    fn point_within_stays_in_bounds() {
        let mut rng = EntityRng::new(0, EntityId(0));
        for _ in 0..1000 {
            let pt = rng.point_within(p(-2, -3), p(2, 3));
            assert!(pt.within(p(-2, -3), p(2, 3)), "got {pt}");
        }
    }

    #[test]
    fn degenerate_rectangle() {
        let mut rng = EntityRng::new(0, EntityId(0));
        assert_eq!(rng.point_within(p(4, 4), p(4, 4)), p(4, 4));
        assert_eq!(rng.point_within(p(4, 4), p(0, 0)), p(4, 4));
    }

    #[test]
    fn world_rng_is_reproducible() {
        let mut w1 = WorldRng::new(9);
        let mut w2 = WorldRng::new(9);
        let mut a = w1.entity(EntityId(3));
        let mut b = w2.entity(EntityId(3));
        assert_eq!(a.gen_range(0u64..u64::MAX), b.gen_range(0u64..u64::MAX));
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = EntityRng::new(0, EntityId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
