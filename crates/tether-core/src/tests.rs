#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec3;

    use crate::commands::TraversalCommand;
    use crate::config::TraversalConfig;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::{CameraCue, TraversalEvent};
    use crate::state::TraversalSnapshot;
    use crate::types::*;

    // ---- Geometry helpers ----

    #[test]
    fn test_side_index_and_sign() {
        assert_eq!(TetherSide::Left.index(), 0);
        assert_eq!(TetherSide::Right.index(), 1);
        assert_eq!(TetherSide::Left.sign(), -1.0);
        assert_eq!(TetherSide::Right.sign(), 1.0);
    }

    #[test]
    fn test_remap_clamped() {
        assert_relative_eq!(remap_clamped(450.0, 0.0, 900.0, 4.5, 25.0), 14.75);
        assert_relative_eq!(remap_clamped(-10.0, 0.0, 900.0, 4.5, 25.0), 4.5);
        assert_relative_eq!(remap_clamped(5000.0, 0.0, 900.0, 4.5, 25.0), 25.0);
        // Descending output range
        assert_relative_eq!(remap_clamped(900.0, 0.0, 900.0, 4.5, 1.5), 1.5);
        // Degenerate input range collapses to the low output
        assert_relative_eq!(remap_clamped(3.0, 1.0, 1.0, 2.0, 9.0), 2.0);
    }

    #[test]
    fn test_smoothstep_endpoints_and_midpoint() {
        assert_relative_eq!(smoothstep(0.0, 10.0, -1.0), 0.0);
        assert_relative_eq!(smoothstep(0.0, 10.0, 5.0), 0.5);
        assert_relative_eq!(smoothstep(0.0, 10.0, 20.0), 1.0);
    }

    #[test]
    fn test_move_towards_angle_takes_short_arc() {
        use std::f32::consts::PI;
        // From just below +PI to just above -PI is a short hop across the seam.
        let next = move_towards_angle(PI - 0.1, -PI + 0.1, 0.05);
        assert_relative_eq!(wrap_angle(next), PI - 0.05, epsilon = 1e-5);
        // Within reach snaps to target
        assert_relative_eq!(move_towards_angle(0.0, 0.02, 0.05), 0.02);
    }

    #[test]
    fn test_yaw_of_axes() {
        assert_relative_eq!(yaw_of(Vec3::Z), 0.0);
        assert_relative_eq!(yaw_of(Vec3::X), std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_flatten_drops_vertical() {
        assert_eq!(flatten(Vec3::new(1.0, 5.0, -2.0)), Vec3::new(1.0, 0.0, -2.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..PHYSICS_RATE {
            time.advance(PHYSICS_DT);
        }
        assert_eq!(time.tick, u64::from(PHYSICS_RATE));
        assert_relative_eq!(time.elapsed_secs, 1.0, epsilon = 1e-5);
    }

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        TraversalConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_toml_overrides_only_named_keys() {
        let config = TraversalConfig::from_toml_str(
            r#"
            [tether]
            durability_max = 6.0

            [maneuver.boost_cost]
            energy = 250.0
            "#,
        )
        .unwrap();
        assert_eq!(config.tether.durability_max, 6.0);
        assert_eq!(config.tether.eject_speed, EJECT_SPEED);
        assert_eq!(config.maneuver.boost_cost.energy, 250.0);
        assert_eq!(config.maneuver.boost_cost.fuel, BOOST_FUEL_COST);
        assert_eq!(config.economy.fuel_capacity, FUEL_CAPACITY);
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let text = TraversalConfig::default().to_toml_string().unwrap();
        let back = TraversalConfig::from_toml_str(&text).unwrap();
        assert_eq!(back, TraversalConfig::default());
    }

    #[test]
    fn test_invalid_length_factor_rejected() {
        let err = TraversalConfig::from_toml_str("[swing]\nmax_length_factor = 1.5\n").unwrap_err();
        match err {
            ConfigError::Invalid { key, .. } => assert_eq!(key, "swing.max_length_factor"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut config = TraversalConfig::default();
        config.swing.stiffness_min = 30.0;
        config.swing.stiffness_max = 10.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                key: "swing.stiffness_max",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut config = TraversalConfig::default();
        config.maneuver.dash_cost.energy = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_physics_rate_rejected() {
        let err = TraversalConfig::from_toml_str("[clock]\nphysics_rate = 0\n").unwrap_err();
        assert!(err.to_string().contains("clock.physics_rate"));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = TraversalConfig::from_toml_str("[tether\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TraversalConfig::load("/definitely/not/here/tether.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    // ---- Wire shapes ----

    #[test]
    fn test_command_tagging() {
        let json = serde_json::to_string(&TraversalCommand::FireTether {
            side: TetherSide::Right,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"FireTether","side":"Right"}"#);

        let back: TraversalCommand =
            serde_json::from_str(r#"{"type":"SetOrbit","direction":"Up"}"#).unwrap();
        assert_eq!(
            back,
            TraversalCommand::SetOrbit {
                direction: Some(OrbitDirection::Up)
            }
        );
    }

    #[test]
    fn test_event_tagging() {
        let event = TraversalEvent::TetherReleased {
            side: TetherSide::Left,
            reason: ReleaseReason::DurabilityExpired,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"TetherReleased""#));
        assert!(json.contains("DurabilityExpired"));
        let back: TraversalEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);

        let cue = CameraCue::FovBurst { magnitude: 6.0 };
        let back: CameraCue = serde_json::from_str(&serde_json::to_string(&cue).unwrap()).unwrap();
        assert_eq!(back, cue);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = TraversalSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: TraversalSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
        assert!(!snapshot.aim(TetherSide::Left).visible());
    }
}
