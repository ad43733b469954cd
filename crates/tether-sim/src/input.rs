//! Input latch: turns queued commands into the per-step intent the systems read.
//!
//! Fire, release and dash are edges, held until the next physics step takes
//! them. Orbit and boost are held states.

use tether_core::commands::TraversalCommand;
use tether_core::enums::OrbitDirection;
use tether_core::types::TetherSide;

#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    fire: [bool; 2],
    release: [bool; 2],
    dash: bool,
    orbit: Option<OrbitDirection>,
    boost_held: bool,
    boosting: bool,
    /// Seconds since an unpaired boost press, while inside the double-tap window.
    since_boost_press: Option<f32>,
    aim_separation: f32,
}

impl InputLatch {
    pub fn new(aim_separation: f32) -> Self {
        Self {
            aim_separation: aim_separation.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    pub fn apply(&mut self, command: &TraversalCommand, double_tap_window: f32) {
        match *command {
            TraversalCommand::FireTether { side } => self.fire[side.index()] = true,
            TraversalCommand::ReleaseTether { side } => self.release[side.index()] = true,
            TraversalCommand::SetAimSeparation { value } => {
                self.aim_separation = value.clamp(0.0, 1.0);
            }
            TraversalCommand::SetOrbit { direction } => self.orbit = direction,
            TraversalCommand::Dash => self.dash = true,
            TraversalCommand::BoostPressed => {
                self.boost_held = true;
                match self.since_boost_press {
                    Some(elapsed) if elapsed <= double_tap_window => {
                        self.boosting = true;
                        self.since_boost_press = None;
                    }
                    _ => self.since_boost_press = Some(0.0),
                }
            }
            TraversalCommand::BoostReleased => {
                self.boost_held = false;
                self.boosting = false;
            }
        }
    }

    /// Frame-rate timer upkeep for the double-tap window.
    pub fn tick(&mut self, dt: f32, double_tap_window: f32) {
        if let Some(elapsed) = self.since_boost_press.as_mut() {
            *elapsed += dt;
            if *elapsed > double_tap_window {
                self.since_boost_press = None;
            }
        }
    }

    pub fn take_fire(&mut self, side: TetherSide) -> bool {
        std::mem::take(&mut self.fire[side.index()])
    }

    pub fn take_release(&mut self, side: TetherSide) -> bool {
        std::mem::take(&mut self.release[side.index()])
    }

    pub fn take_dash(&mut self) -> bool {
        std::mem::take(&mut self.dash)
    }

    pub fn orbit(&self) -> Option<OrbitDirection> {
        self.orbit
    }

    pub fn boost_held(&self) -> bool {
        self.boost_held
    }

    /// Double-tap armed and the button still down.
    pub fn boosting(&self) -> bool {
        self.boosting
    }

    pub fn aim_separation(&self) -> f32 {
        self.aim_separation
    }
}
