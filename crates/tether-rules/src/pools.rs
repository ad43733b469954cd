//! Fuel and energy pools.
//!
//! Both pools stay inside `[0, capacity]` after every mutation. A debit that
//! cannot be covered is rejected outright; it is never clamped.

use serde::{Deserialize, Serialize};

use tether_core::config::{ActionCost, EconomyConfig};

/// Timer residue below this counts as elapsed.
const TIMER_EPSILON: f32 = 1e-5;

/// A bounded scalar resource.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourcePool {
    value: f32,
    capacity: f32,
}

impl ResourcePool {
    /// A full pool.
    pub fn new(capacity: f32) -> Self {
        let capacity = capacity.max(0.0);
        Self {
            value: capacity,
            capacity,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn capacity(&self) -> f32 {
        self.capacity
    }

    /// Fill fraction in [0, 1].
    pub fn level(&self) -> f32 {
        if self.capacity > 0.0 {
            self.value / self.capacity
        } else {
            0.0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value <= 0.0
    }

    pub fn can_cover(&self, amount: f32) -> bool {
        amount >= 0.0 && amount <= self.value
    }

    /// Subtract `amount` if the pool covers it. Returns whether it did.
    pub fn try_debit(&mut self, amount: f32) -> bool {
        if !self.can_cover(amount) {
            return false;
        }
        self.value = (self.value - amount).clamp(0.0, self.capacity);
        true
    }

    /// Add `amount`, clamped to capacity.
    pub fn credit(&mut self, amount: f32) {
        self.value = (self.value + amount.max(0.0)).clamp(0.0, self.capacity);
    }

    /// Overwrite the value, clamped to `[0, capacity]`.
    pub fn set(&mut self, value: f32) {
        self.value = value.clamp(0.0, self.capacity);
    }
}

/// Energy: a pool that regenerates, with a lockout after it is emptied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyPool {
    pool: ResourcePool,
    recharge_delay: f32,
    recharge_rate: f32,
    grounded_multiplier: f32,
    delay_remaining: f32,
}

impl EnergyPool {
    pub fn new(config: &EconomyConfig) -> Self {
        Self {
            pool: ResourcePool::new(config.energy_capacity),
            recharge_delay: config.energy_recharge_delay,
            recharge_rate: config.energy_recharge_rate,
            grounded_multiplier: config.grounded_recharge_multiplier,
            delay_remaining: 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.pool.value()
    }

    pub fn level(&self) -> f32 {
        self.pool.level()
    }

    pub fn delay_remaining(&self) -> f32 {
        self.delay_remaining
    }

    pub fn can_cover(&self, amount: f32) -> bool {
        self.pool.can_cover(amount)
    }

    /// Debit; emptying the pool exactly starts the recharge lockout.
    pub fn try_debit(&mut self, amount: f32) -> bool {
        if !self.pool.try_debit(amount) {
            return false;
        }
        if amount > 0.0 && self.pool.is_empty() {
            self.delay_remaining = self.recharge_delay;
        }
        true
    }

    /// Overwrite the value. Setting it to zero starts the lockout.
    pub fn set(&mut self, value: f32) {
        self.pool.set(value);
        if self.pool.is_empty() {
            self.delay_remaining = self.recharge_delay;
        }
    }

    /// Run the lockout timer, then regenerate for whatever time is left of `dt`.
    pub fn regenerate(&mut self, dt: f32, grounded: bool) {
        let mut available = dt;
        if self.delay_remaining > 0.0 {
            self.delay_remaining -= dt;
            if self.delay_remaining > TIMER_EPSILON {
                return;
            }
            available = (-self.delay_remaining).max(0.0);
            self.delay_remaining = 0.0;
        }
        if available <= 0.0 {
            return;
        }

        let rate = if grounded {
            self.recharge_rate * self.grounded_multiplier
        } else {
            self.recharge_rate
        };
        self.pool.credit(rate * available);
    }
}

/// Debit a maneuver's cost from both pools, or neither.
pub fn try_pay(fuel: &mut ResourcePool, energy: &mut EnergyPool, cost: ActionCost) -> bool {
    if !fuel.can_cover(cost.fuel) || !energy.can_cover(cost.energy) {
        return false;
    }
    // Both covered above, so neither debit can be rejected.
    let fuel_ok = fuel.try_debit(cost.fuel);
    let energy_ok = energy.try_debit(cost.energy);
    fuel_ok && energy_ok
}
