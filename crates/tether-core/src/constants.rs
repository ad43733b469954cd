//! Default tuning parameters.
//!
//! These are the authoritative defaults used by `TraversalConfig::default()`.
//! Distances are world units, times are seconds, velocity changes are units/s.

// --- Clock ---

/// Physics step rate (Hz).
pub const PHYSICS_RATE: u32 = 50;

/// Seconds per physics step.
pub const PHYSICS_DT: f32 = 1.0 / PHYSICS_RATE as f32;

/// Upper bound on physics steps run for a single frame.
pub const MAX_STEPS_PER_FRAME: u32 = 5;

// --- Targeting ---

/// Maximum tether range, used for both aim casts and mid-flight range checks.
pub const MAX_TETHER_RANGE: f32 = 60.0;

/// Radius of the volumetric aim-assist probe.
pub const PROBE_RADIUS: f32 = 2.5;

/// Half-angle between the two aim directions at full separation (radians, ~20 deg).
pub const MAX_SPREAD_ANGLE: f32 = 0.35;

/// Separation below which both tethers share a single combined target.
pub const COMBINED_AIM_THRESHOLD: f32 = 0.05;

/// Aim separation a freshly created engine starts with.
pub const DEFAULT_AIM_SEPARATION: f32 = 0.5;

// --- Tether lifecycle ---

/// Tip travel speed during launch.
pub const EJECT_SPEED: f32 = 120.0;

/// Base cooldown between a tether's release and its next fire.
pub const TETHER_COOLDOWN: f32 = 0.25;

/// Seconds a tether may stay attached before it auto-releases.
pub const DURABILITY_MAX: f32 = 4.0;

/// Durability at or below this counts as expired (absorbs step accumulation error).
pub const DURABILITY_EPSILON: f32 = 1e-4;

// --- Swing constraint ---

/// Constraint max length as a fraction of the attach distance.
pub const MAX_LENGTH_FACTOR: f32 = 0.9;

/// Within this distance of the anchor the constraint goes slack.
pub const SLACK_DISTANCE: f32 = 3.0;

/// Squared-speed range mapped onto the stiffness/damping/mass-scale ranges.
pub const SPEED_SQ_MIN: f32 = 0.0;
pub const SPEED_SQ_MAX: f32 = 900.0;

pub const STIFFNESS_MIN: f32 = 4.5;
pub const STIFFNESS_MAX: f32 = 25.0;

pub const DAMPING_MIN: f32 = 7.0;
pub const DAMPING_MAX: f32 = 20.0;

/// Mass scale shrinks as speed grows (slow = heavy feel, fast = light).
pub const MASS_SCALE_SLOW: f32 = 4.5;
pub const MASS_SCALE_FAST: f32 = 1.5;

/// Stretch tolerance before the constraint pushes back.
pub const CONSTRAINT_TOLERANCE: f32 = 0.025;

/// Reel-in target speeds for the three tiers.
pub const REEL_FORCE_NORMAL: f32 = 22.0;
pub const REEL_FORCE_BOOSTED: f32 = 38.0;
pub const REEL_FORCE_DASH: f32 = 55.0;

/// Output range of the distance-derived reel divider (near anchor = low end).
pub const REEL_DIVIDER_MIN: f32 = 0.35;
pub const REEL_DIVIDER_MAX: f32 = 1.0;

/// Rate (per second) at which velocity blends toward the reel target.
pub const REEL_BLEND_RATE: f32 = 3.0;

/// Upward velocity change applied on the step reeling begins.
pub const REEL_START_LIFT: f32 = 3.0;

/// Upward acceleration layered while grounded and reeling.
pub const GROUNDED_LIFT: f32 = 15.0;

/// Yaw turn rate toward the anchor while swinging (rad/s).
pub const TURN_RATE: f32 = 6.0;

/// Flattened anchor direction shorter than this skips rotation.
pub const MIN_TURN_DISTANCE: f32 = 0.05;

// --- Economy ---

pub const FUEL_CAPACITY: f32 = 100.0;
pub const ENERGY_CAPACITY: f32 = 600.0;

/// Fuel spent by each attached tether per physics step.
pub const REEL_FUEL_PER_STEP: f32 = 0.02;

/// Extra fuel spent by each attached tether per step while boost-reeling.
pub const BOOSTED_REEL_FUEL_PER_STEP: f32 = 0.04;

/// Lockout after energy is driven to zero.
pub const ENERGY_RECHARGE_DELAY: f32 = 0.5;

/// Energy regenerated per second once the lockout has elapsed.
pub const ENERGY_RECHARGE_RATE: f32 = 120.0;

/// Recharge multiplier while the body is grounded.
pub const GROUNDED_RECHARGE_MULTIPLIER: f32 = 2.0;

// --- Maneuvers ---

/// Tangential velocity change per physics step while orbiting.
pub const ORBIT_FORCE: f32 = 0.6;
pub const ORBIT_FUEL_COST: f32 = 0.02;
pub const ORBIT_ENERGY_COST: f32 = 1.0;

/// Horizontal dash velocity change.
pub const DASH_FORCE: f32 = 24.0;

/// Vertical dodge velocity change when there is no movement intent.
pub const DODGE_FORCE: f32 = 12.0;
pub const DASH_FUEL_COST: f32 = 0.5;
pub const DASH_ENERGY_COST: f32 = 150.0;
pub const DASH_COOLDOWN: f32 = 0.6;

/// Post-dash window during which reeling uses the dash tier.
pub const DASH_REEL_WINDOW: f32 = 0.5;

/// Second boost press must land within this window of the first.
pub const DOUBLE_TAP_WINDOW: f32 = 0.3;

/// Velocity change toward the anchor on a hooked boost.
pub const BOOST_FORCE: f32 = 30.0;
pub const BOOST_ENERGY_COST: f32 = 200.0;
pub const BOOST_FUEL_COST: f32 = 1.0;

/// Fuel spent when a boost falls back to the movement dash state.
pub const UNHOOKED_BOOST_FUEL_COST: f32 = 5.0;
pub const UNHOOKED_BOOST_ENERGY_COST: f32 = 0.0;

// --- Feedback ---

pub const HOOK_FOV_BURST: f32 = 6.0;
pub const HOOK_DISTANCE_BURST: f32 = 0.5;
pub const REEL_FOV_BURST: f32 = 0.3;
pub const REEL_DISTANCE_BURST: f32 = 0.05;
pub const DASH_FOV_BURST: f32 = 10.0;
pub const DASH_DISTANCE_BURST: f32 = 1.2;

pub const REEL_PITCH_MIN: f32 = 0.8;
pub const REEL_PITCH_MAX: f32 = 1.6;
pub const REEL_VOLUME_MIN: f32 = 0.2;
pub const REEL_VOLUME_MAX: f32 = 1.0;

/// Body speed that maps to full reel pitch.
pub const AUDIO_SPEED_REF: f32 = 40.0;
