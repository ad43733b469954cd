//! Tether lifecycle finite state machine.
//!
//! `Idle → Launching → Attached → Idle`, with `Launching → Idle` on a range
//! violation and `Attached → Idle` on release input, durability expiry or a
//! fuel sweep. The transition table lives here; side effects (constraint and
//! marker entities, events) are the caller's job, driven by the returned
//! [`Transition`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use tether_core::constants::DURABILITY_EPSILON;
use tether_core::enums::{CuePhase, ReleaseReason, TetherPhase};
use tether_core::types::TetherSide;

/// Tip flight toward a captured anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub anchor: Vec3,
    pub elapsed: f32,
    /// `distance / eject_speed` at fire time.
    pub travel_time: f32,
}

/// A tether fixed to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub anchor: Vec3,
    pub durability_remaining: f32,
    /// Constraint max length, slightly shorter than the attach distance.
    pub max_length: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum TetherState {
    #[default]
    Idle,
    Launching(Flight),
    Attached(Attachment),
}

/// One of the two tethers a body carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tether {
    pub side: TetherSide,
    pub state: TetherState,
    /// Emission point on the body, refreshed every step.
    pub origin: Vec3,
    /// Visible tip. Lerps origin → anchor during flight.
    pub tip: Vec3,
    pub cooldown_remaining: f32,
    /// Last computed reel force magnitude (telemetry/audio only).
    pub reel_force_current: f32,
    pub cue: CuePhase,
}

/// Result of a fire request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Fired,
    NotIdle,
    CoolingDown,
    NoTarget,
    NoFuel,
}

/// Per-step transition reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Attached,
    Released(ReleaseReason),
}

/// Inputs to a fire request.
pub struct FireContext {
    /// This step's aim candidate.
    pub candidate: Option<Vec3>,
    pub fuel: f32,
    pub eject_speed: f32,
    pub cooldown: f32,
}

/// Inputs to one lifecycle step.
pub struct StepContext {
    pub origin: Vec3,
    pub body_position: Vec3,
    pub dt: f32,
    pub max_range: f32,
    pub durability_max: f32,
    pub max_length_factor: f32,
    pub cooldown: f32,
}

impl Tether {
    pub fn new(side: TetherSide) -> Self {
        Self {
            side,
            state: TetherState::Idle,
            origin: Vec3::ZERO,
            tip: Vec3::ZERO,
            cooldown_remaining: 0.0,
            reel_force_current: 0.0,
            cue: CuePhase::Released,
        }
    }

    pub fn phase(&self) -> TetherPhase {
        match self.state {
            TetherState::Idle => TetherPhase::Idle,
            TetherState::Launching(_) => TetherPhase::Launching,
            TetherState::Attached(_) => TetherPhase::Attached,
        }
    }

    /// Anchor point, only while launching or attached.
    pub fn anchor(&self) -> Option<Vec3> {
        match self.state {
            TetherState::Idle => None,
            TetherState::Launching(flight) => Some(flight.anchor),
            TetherState::Attached(attachment) => Some(attachment.anchor),
        }
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        match &self.state {
            TetherState::Attached(attachment) => Some(attachment),
            _ => None,
        }
    }

    /// Zero unless attached.
    pub fn durability_remaining(&self) -> f32 {
        self.attachment()
            .map(|a| a.durability_remaining)
            .unwrap_or(0.0)
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.state, TetherState::Attached(_))
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, TetherState::Idle)
    }

    /// Count the cooldown down by one frame.
    pub fn tick_cooldown(&mut self, dt: f32) {
        self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);
    }
}

/// `Idle → Launching`. Requires an elapsed cooldown, a candidate and fuel.
pub fn fire(tether: &mut Tether, ctx: &FireContext) -> FireOutcome {
    if !tether.is_idle() {
        return FireOutcome::NotIdle;
    }
    if tether.cooldown_remaining > 0.0 {
        return FireOutcome::CoolingDown;
    }
    let anchor = match ctx.candidate {
        Some(point) => point,
        None => return FireOutcome::NoTarget,
    };
    if ctx.fuel <= 0.0 {
        return FireOutcome::NoFuel;
    }

    let distance = tether.origin.distance(anchor);
    let travel_time = if ctx.eject_speed > 0.0 {
        distance / ctx.eject_speed
    } else {
        0.0
    };

    tether.state = TetherState::Launching(Flight {
        anchor,
        elapsed: 0.0,
        travel_time,
    });
    tether.tip = tether.origin;
    tether.cooldown_remaining = ctx.cooldown;
    tether.cue = CuePhase::Launching;
    FireOutcome::Fired
}

/// Advance one physics step: flight progress, attach, durability.
pub fn step(tether: &mut Tether, ctx: &StepContext) -> Transition {
    tether.origin = ctx.origin;

    match tether.state {
        TetherState::Idle => {
            tether.tip = ctx.origin;
            Transition::None
        }
        TetherState::Launching(mut flight) => {
            if ctx.origin.distance(flight.anchor) > ctx.max_range {
                return release(tether, ReleaseReason::RangeExceeded, ctx.cooldown);
            }

            flight.elapsed += ctx.dt;
            if flight.elapsed >= flight.travel_time {
                let attach_distance = ctx.body_position.distance(flight.anchor);
                tether.state = TetherState::Attached(Attachment {
                    anchor: flight.anchor,
                    durability_remaining: ctx.durability_max,
                    max_length: attach_distance * ctx.max_length_factor,
                });
                tether.tip = flight.anchor;
                tether.cue = CuePhase::Attached;
                return Transition::Attached;
            }

            let t = flight.elapsed / flight.travel_time;
            tether.tip = ctx.origin.lerp(flight.anchor, t);
            tether.state = TetherState::Launching(flight);
            Transition::None
        }
        TetherState::Attached(mut attachment) => {
            attachment.durability_remaining -= ctx.dt;
            if attachment.durability_remaining <= DURABILITY_EPSILON {
                return release(tether, ReleaseReason::DurabilityExpired, ctx.cooldown);
            }
            tether.tip = attachment.anchor;
            tether.state = TetherState::Attached(attachment);
            Transition::None
        }
    }
}

/// Any non-idle state `→ Idle`. Releasing an idle tether changes nothing.
pub fn release(tether: &mut Tether, reason: ReleaseReason, cooldown: f32) -> Transition {
    if tether.is_idle() {
        return Transition::None;
    }
    tether.state = TetherState::Idle;
    tether.tip = tether.origin;
    tether.cooldown_remaining = cooldown;
    tether.reel_force_current = 0.0;
    tether.cue = CuePhase::Released;
    Transition::Released(reason)
}
