//! Runtime tuning configuration, loadable from TOML.
//!
//! [`TraversalConfig`] mirrors every constant in [`crate::constants`]. Every
//! section is `#[serde(default)]`, so a TOML file only needs the keys it wants
//! to override:
//!
//! ```toml
//! [tether]
//! durability_max = 6.0
//!
//! [economy]
//! energy_recharge_rate = 300.0
//! ```
//!
//! `constants.rs` stays the authoritative default source.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Complete tuning set for one traversal engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    pub clock: ClockConfig,
    pub targeting: TargetingConfig,
    pub tether: TetherConfig,
    pub swing: SwingConfig,
    pub economy: EconomyConfig,
    pub maneuver: ManeuverConfig,
    pub feedback: FeedbackConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub physics_rate: u32,
    pub max_steps_per_frame: u32,
}

impl ClockConfig {
    /// Seconds per physics step.
    pub fn dt(&self) -> f32 {
        1.0 / self.physics_rate as f32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetingConfig {
    pub max_range: f32,
    pub probe_radius: f32,
    pub max_spread_angle: f32,
    pub combined_threshold: f32,
    pub default_separation: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TetherConfig {
    pub eject_speed: f32,
    pub cooldown: f32,
    pub durability_max: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwingConfig {
    pub max_length_factor: f32,
    pub slack_distance: f32,
    pub speed_sq_min: f32,
    pub speed_sq_max: f32,
    pub stiffness_min: f32,
    pub stiffness_max: f32,
    pub damping_min: f32,
    pub damping_max: f32,
    pub mass_scale_slow: f32,
    pub mass_scale_fast: f32,
    pub tolerance: f32,
    pub reel_force_normal: f32,
    pub reel_force_boosted: f32,
    pub reel_force_dash: f32,
    pub reel_divider_min: f32,
    pub reel_divider_max: f32,
    pub reel_blend_rate: f32,
    pub reel_start_lift: f32,
    pub grounded_lift: f32,
    pub turn_rate: f32,
    pub min_turn_distance: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    pub fuel_capacity: f32,
    pub energy_capacity: f32,
    pub reel_fuel_per_step: f32,
    pub boosted_reel_fuel_per_step: f32,
    pub energy_recharge_delay: f32,
    pub energy_recharge_rate: f32,
    pub grounded_recharge_multiplier: f32,
}

/// Price of one maneuver execution. Both pools must cover their share or
/// nothing is debited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionCost {
    pub fuel: f32,
    pub energy: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManeuverConfig {
    pub orbit_force: f32,
    pub orbit_cost: ActionCost,
    pub dash_force: f32,
    pub dodge_force: f32,
    pub dash_cost: ActionCost,
    pub dash_cooldown: f32,
    pub dash_reel_window: f32,
    pub double_tap_window: f32,
    pub boost_force: f32,
    pub boost_cost: ActionCost,
    pub unhooked_boost_cost: ActionCost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub hook_fov_burst: f32,
    pub hook_distance_burst: f32,
    pub reel_fov_burst: f32,
    pub reel_distance_burst: f32,
    pub dash_fov_burst: f32,
    pub dash_distance_burst: f32,
    pub reel_pitch_min: f32,
    pub reel_pitch_max: f32,
    pub reel_volume_min: f32,
    pub reel_volume_max: f32,
    pub audio_speed_ref: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            physics_rate: PHYSICS_RATE,
            max_steps_per_frame: MAX_STEPS_PER_FRAME,
        }
    }
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            max_range: MAX_TETHER_RANGE,
            probe_radius: PROBE_RADIUS,
            max_spread_angle: MAX_SPREAD_ANGLE,
            combined_threshold: COMBINED_AIM_THRESHOLD,
            default_separation: DEFAULT_AIM_SEPARATION,
        }
    }
}

impl Default for TetherConfig {
    fn default() -> Self {
        Self {
            eject_speed: EJECT_SPEED,
            cooldown: TETHER_COOLDOWN,
            durability_max: DURABILITY_MAX,
        }
    }
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            max_length_factor: MAX_LENGTH_FACTOR,
            slack_distance: SLACK_DISTANCE,
            speed_sq_min: SPEED_SQ_MIN,
            speed_sq_max: SPEED_SQ_MAX,
            stiffness_min: STIFFNESS_MIN,
            stiffness_max: STIFFNESS_MAX,
            damping_min: DAMPING_MIN,
            damping_max: DAMPING_MAX,
            mass_scale_slow: MASS_SCALE_SLOW,
            mass_scale_fast: MASS_SCALE_FAST,
            tolerance: CONSTRAINT_TOLERANCE,
            reel_force_normal: REEL_FORCE_NORMAL,
            reel_force_boosted: REEL_FORCE_BOOSTED,
            reel_force_dash: REEL_FORCE_DASH,
            reel_divider_min: REEL_DIVIDER_MIN,
            reel_divider_max: REEL_DIVIDER_MAX,
            reel_blend_rate: REEL_BLEND_RATE,
            reel_start_lift: REEL_START_LIFT,
            grounded_lift: GROUNDED_LIFT,
            turn_rate: TURN_RATE,
            min_turn_distance: MIN_TURN_DISTANCE,
        }
    }
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            fuel_capacity: FUEL_CAPACITY,
            energy_capacity: ENERGY_CAPACITY,
            reel_fuel_per_step: REEL_FUEL_PER_STEP,
            boosted_reel_fuel_per_step: BOOSTED_REEL_FUEL_PER_STEP,
            energy_recharge_delay: ENERGY_RECHARGE_DELAY,
            energy_recharge_rate: ENERGY_RECHARGE_RATE,
            grounded_recharge_multiplier: GROUNDED_RECHARGE_MULTIPLIER,
        }
    }
}

impl Default for ManeuverConfig {
    fn default() -> Self {
        Self {
            orbit_force: ORBIT_FORCE,
            orbit_cost: ActionCost {
                fuel: ORBIT_FUEL_COST,
                energy: ORBIT_ENERGY_COST,
            },
            dash_force: DASH_FORCE,
            dodge_force: DODGE_FORCE,
            dash_cost: ActionCost {
                fuel: DASH_FUEL_COST,
                energy: DASH_ENERGY_COST,
            },
            dash_cooldown: DASH_COOLDOWN,
            dash_reel_window: DASH_REEL_WINDOW,
            double_tap_window: DOUBLE_TAP_WINDOW,
            boost_force: BOOST_FORCE,
            boost_cost: ActionCost {
                fuel: BOOST_FUEL_COST,
                energy: BOOST_ENERGY_COST,
            },
            unhooked_boost_cost: ActionCost {
                fuel: UNHOOKED_BOOST_FUEL_COST,
                energy: UNHOOKED_BOOST_ENERGY_COST,
            },
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            hook_fov_burst: HOOK_FOV_BURST,
            hook_distance_burst: HOOK_DISTANCE_BURST,
            reel_fov_burst: REEL_FOV_BURST,
            reel_distance_burst: REEL_DISTANCE_BURST,
            dash_fov_burst: DASH_FOV_BURST,
            dash_distance_burst: DASH_DISTANCE_BURST,
            reel_pitch_min: REEL_PITCH_MIN,
            reel_pitch_max: REEL_PITCH_MAX,
            reel_volume_min: REEL_VOLUME_MIN,
            reel_volume_max: REEL_VOLUME_MAX,
            audio_speed_ref: AUDIO_SPEED_REF,
        }
    }
}

impl TraversalConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: TraversalConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), "loaded traversal config");
        Ok(config)
    }

    /// Render as TOML (every key, including defaults).
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the solver cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clock.physics_rate == 0 {
            return Err(ConfigError::Invalid {
                key: "clock.physics_rate",
                value: 0.0,
                expected: "must be at least 1",
            });
        }
        if self.clock.max_steps_per_frame == 0 {
            return Err(ConfigError::Invalid {
                key: "clock.max_steps_per_frame",
                value: 0.0,
                expected: "must be at least 1",
            });
        }

        positive("targeting.max_range", self.targeting.max_range)?;
        non_negative("targeting.probe_radius", self.targeting.probe_radius)?;
        non_negative("targeting.max_spread_angle", self.targeting.max_spread_angle)?;
        unit_interval("targeting.default_separation", self.targeting.default_separation)?;

        positive("tether.eject_speed", self.tether.eject_speed)?;
        non_negative("tether.cooldown", self.tether.cooldown)?;
        positive("tether.durability_max", self.tether.durability_max)?;

        let swing = &self.swing;
        if !(swing.max_length_factor > 0.0 && swing.max_length_factor <= 1.0) {
            return Err(ConfigError::Invalid {
                key: "swing.max_length_factor",
                value: swing.max_length_factor,
                expected: "must be in (0, 1]",
            });
        }
        non_negative("swing.slack_distance", swing.slack_distance)?;
        ordered("swing.speed_sq_max", swing.speed_sq_min, swing.speed_sq_max)?;
        ordered("swing.stiffness_max", swing.stiffness_min, swing.stiffness_max)?;
        ordered("swing.damping_max", swing.damping_min, swing.damping_max)?;
        ordered("swing.reel_divider_max", swing.reel_divider_min, swing.reel_divider_max)?;
        positive("swing.mass_scale_slow", swing.mass_scale_slow)?;
        positive("swing.mass_scale_fast", swing.mass_scale_fast)?;
        non_negative("swing.reel_blend_rate", swing.reel_blend_rate)?;
        non_negative("swing.turn_rate", swing.turn_rate)?;

        let economy = &self.economy;
        positive("economy.fuel_capacity", economy.fuel_capacity)?;
        positive("economy.energy_capacity", economy.energy_capacity)?;
        non_negative("economy.reel_fuel_per_step", economy.reel_fuel_per_step)?;
        non_negative(
            "economy.boosted_reel_fuel_per_step",
            economy.boosted_reel_fuel_per_step,
        )?;
        non_negative("economy.energy_recharge_delay", economy.energy_recharge_delay)?;
        non_negative("economy.energy_recharge_rate", economy.energy_recharge_rate)?;
        positive(
            "economy.grounded_recharge_multiplier",
            economy.grounded_recharge_multiplier,
        )?;

        let maneuver = &self.maneuver;
        cost("maneuver.orbit_cost", maneuver.orbit_cost)?;
        cost("maneuver.dash_cost", maneuver.dash_cost)?;
        cost("maneuver.boost_cost", maneuver.boost_cost)?;
        cost("maneuver.unhooked_boost_cost", maneuver.unhooked_boost_cost)?;
        non_negative("maneuver.dash_cooldown", maneuver.dash_cooldown)?;
        non_negative("maneuver.double_tap_window", maneuver.double_tap_window)?;

        let feedback = &self.feedback;
        ordered("feedback.reel_pitch_max", feedback.reel_pitch_min, feedback.reel_pitch_max)?;
        ordered(
            "feedback.reel_volume_max",
            feedback.reel_volume_min,
            feedback.reel_volume_max,
        )?;
        positive("feedback.audio_speed_ref", feedback.audio_speed_ref)?;

        Ok(())
    }
}

fn positive(key: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            value,
            expected: "must be positive",
        })
    }
}

fn non_negative(key: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            value,
            expected: "must be zero or positive",
        })
    }
}

fn unit_interval(key: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            value,
            expected: "must be in [0, 1]",
        })
    }
}

fn ordered(key: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            value: max,
            expected: "must not be below its paired minimum",
        })
    }
}

fn cost(key: &'static str, cost: ActionCost) -> Result<(), ConfigError> {
    if cost.fuel >= 0.0 && cost.energy >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            key,
            value: cost.fuel.min(cost.energy),
            expected: "costs must be zero or positive",
        })
    }
}
