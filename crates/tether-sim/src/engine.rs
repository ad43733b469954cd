//! Traversal engine: the tether pair, the pools and the attachment world.
//!
//! `TraversalEngine` queues commands, latches them into input state on the
//! frame pass, runs the ordered systems once per fixed physics step and
//! produces `TraversalSnapshot`s. Headless; the host supplies the body and the
//! collision probe on every call, so tests drive it with stubs.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::World;

use tether_core::commands::TraversalCommand;
use tether_core::config::TraversalConfig;
use tether_core::probe::WorldProbe;
use tether_core::state::{ReelAudio, TraversalSnapshot};
use tether_core::types::{SimTime, TetherSide};
use tether_rules::pools::{EnergyPool, ResourcePool};
use tether_rules::tether::Tether;

use crate::body::{BodyMotion, BodySample, TraversalBody};
use crate::clock::FixedClock;
use crate::components::{AttachMarker, ElasticLink};
use crate::input::InputLatch;
use crate::slot::{hooked_anchor, TetherSlot};
use crate::systems;
use crate::systems::maneuver::{ManeuverState, Pools};
use crate::systems::snapshot::StepFlags;
use crate::systems::targeting::AimCandidates;
use crate::systems::Outbox;

pub struct TraversalEngine {
    config: TraversalConfig,
    clock: FixedClock,
    time: SimTime,
    slots: [TetherSlot; 2],
    fuel: ResourcePool,
    energy: EnergyPool,
    input: InputLatch,
    command_queue: VecDeque<TraversalCommand>,
    /// `ElasticLink` and `AttachMarker` entities, one pair per attached tether.
    attachments: World,
    aims: AimCandidates,
    maneuvers: ManeuverState,
    was_reeling: bool,
    /// Body velocity seen by the last physics step, for frame-rate audio.
    last_velocity: Vec3,
    reel_audio: [ReelAudio; 2],
    outbox: Outbox,
}

impl TraversalEngine {
    /// Both pools start full, both tethers idle.
    pub fn new(config: TraversalConfig) -> Self {
        Self {
            clock: FixedClock::new(
                config.clock.dt(),
                config.clock.max_steps_per_frame as usize,
            ),
            time: SimTime::default(),
            slots: [
                TetherSlot::new(TetherSide::Left),
                TetherSlot::new(TetherSide::Right),
            ],
            fuel: ResourcePool::new(config.economy.fuel_capacity),
            energy: EnergyPool::new(&config.economy),
            input: InputLatch::new(config.targeting.default_separation),
            command_queue: VecDeque::new(),
            attachments: World::new(),
            aims: AimCandidates::default(),
            maneuvers: ManeuverState::default(),
            was_reeling: false,
            last_velocity: Vec3::ZERO,
            reel_audio: [ReelAudio::default(); 2],
            outbox: Outbox::default(),
            config,
        }
    }

    /// Queue a command for the next frame pass.
    pub fn queue_command(&mut self, command: TraversalCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = TraversalCommand>) {
        self.command_queue.extend(commands);
    }

    /// Frame pass: latch queued commands, count down frame timers, refresh reel audio.
    pub fn frame(&mut self, frame_dt: f32) {
        let window = self.config.maneuver.double_tap_window;
        while let Some(command) = self.command_queue.pop_front() {
            self.input.apply(&command, window);
        }
        self.input.tick(frame_dt, window);

        for slot in &mut self.slots {
            slot.tether.tick_cooldown(frame_dt);
        }
        self.maneuvers.tick(frame_dt);

        for side in TetherSide::ALL {
            self.reel_audio[side.index()] = systems::feedback::reel_audio(
                &self.slots[side.index()].tether,
                self.last_velocity,
                &self.config.feedback,
                self.config.targeting.max_range,
            );
        }
    }

    /// One fixed physics step.
    pub fn physics_step(
        &mut self,
        body: &mut dyn TraversalBody,
        probe: &dyn WorldProbe,
    ) -> TraversalSnapshot {
        let dt = self.config.clock.dt();
        let sample: BodySample = body.sample();

        // 1. Aim prediction
        self.aims = systems::targeting::run(
            probe,
            &sample.aim,
            self.input.aim_separation(),
            &self.config.targeting,
        );
        // 2. Tether lifecycle (release, fire, flight, durability)
        systems::lifecycle::run(
            &mut self.slots,
            &mut self.attachments,
            &mut self.input,
            &self.aims,
            &sample,
            &self.fuel,
            &self.config,
            dt,
            &mut self.outbox,
        );
        // 3. Constraint and reel forces
        let tier = systems::constraint::select_tier(
            self.input.boost_held(),
            self.maneuvers.dash_window,
        );
        let swing = systems::constraint::run(
            &mut self.slots,
            &mut self.attachments,
            &sample,
            tier,
            self.was_reeling,
            &mut self.fuel,
            &self.config,
            dt,
            &mut self.outbox,
        );
        // 4. Fuel sweep, energy regeneration
        systems::economy::sweep(
            &mut self.slots,
            &mut self.attachments,
            &self.fuel,
            swing.unfunded,
            self.config.tether.cooldown,
            &mut self.outbox,
        );
        systems::economy::regenerate(&mut self.energy, dt, sample.grounded);
        // 5. Orbit, dash, boost
        let mut velocity = swing.velocity;
        let orbiting = systems::maneuver::run(
            &mut self.maneuvers,
            &mut velocity,
            &self.slots,
            &mut self.input,
            &sample,
            body,
            Pools {
                fuel: &mut self.fuel,
                energy: &mut self.energy,
            },
            &self.config,
            &mut self.outbox,
        );
        // 6. Face the anchor while swinging
        let anchor = hooked_anchor(&self.slots);
        let rotation = match anchor {
            Some(anchor) => systems::orientation::run(
                sample.rotation,
                sample.position,
                anchor,
                &self.config.swing,
                dt,
            ),
            None => sample.rotation,
        };

        body.apply(&BodyMotion { velocity, rotation });
        self.was_reeling = anchor.is_some();
        self.last_velocity = velocity;
        self.time.advance(dt);

        systems::snapshot::build_snapshot(
            self.time,
            &self.slots,
            &self.aims,
            &self.fuel,
            &self.energy,
            self.config.tether.durability_max,
            &self.reel_audio,
            StepFlags {
                reeling: anchor.is_some(),
                orbiting,
                boosting: self.maneuvers.was_boosting,
            },
            std::mem::take(&mut self.outbox),
        )
    }

    /// Frame pass, then however many physics steps the clock owes. Returns the
    /// last step's snapshot, or `None` if no step was due.
    pub fn tick(
        &mut self,
        frame_dt: f32,
        body: &mut dyn TraversalBody,
        probe: &dyn WorldProbe,
    ) -> Option<TraversalSnapshot> {
        self.frame(frame_dt);
        let steps = self.clock.advance(frame_dt);
        let mut last = None;
        for _ in 0..steps {
            last = Some(self.physics_step(body, probe));
        }
        last
    }

    /// External pickup. Clamped to capacity.
    pub fn add_fuel(&mut self, amount: f32) {
        self.fuel.credit(amount);
        tracing::debug!(
            amount,
            fuel = self.fuel.value(),
            capacity = self.fuel.capacity(),
            "fuel pickup"
        );
    }

    pub fn tether(&self, side: TetherSide) -> &Tether {
        &self.slots[side.index()].tether
    }

    pub fn fuel(&self) -> f32 {
        self.fuel.value()
    }

    pub fn energy(&self) -> f32 {
        self.energy.value()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Live `ElasticLink` plus `AttachMarker` entities.
    pub fn attachment_count(&self) -> usize {
        self.attachments.len() as usize
    }

    /// The elastic link installed for `side`, while attached.
    pub fn link(&self, side: TetherSide) -> Option<ElasticLink> {
        let entity = self.slots[side.index()].link?;
        self.attachments
            .get::<&ElasticLink>(entity)
            .ok()
            .map(|link| *link)
    }

    /// Attach-point visuals currently alive.
    pub fn markers(&self) -> Vec<AttachMarker> {
        self.attachments
            .query::<&AttachMarker>()
            .iter()
            .map(|(_, marker)| *marker)
            .collect()
    }

    #[cfg(test)]
    pub fn set_fuel(&mut self, value: f32) {
        self.fuel.set(value);
    }

    #[cfg(test)]
    pub fn set_energy(&mut self, value: f32) {
        self.energy.set(value);
    }

    #[cfg(test)]
    pub fn maneuvers(&self) -> &ManeuverState {
        &self.maneuvers
    }
}
