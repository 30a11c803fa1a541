//! Observables (spec §4.5): pure, read-only derivations from a [`System`]'s
//! state and run counters — temperature, pressure, volume.

use crate::constants::K_BOLTZMANN;
use crate::scheduler::System;

impl<const D: usize> System<D> {
    /// `2 * KE_total / (k_B * N * d)`, the equipartition temperature (spec
    /// §4.5 / §9 — the factor matches ½k_BT per degree of freedom).
    pub fn temperature(&self) -> f64 {
        2.0 * self.system_ke() / (K_BOLTZMANN * self.particle_count() as f64 * D as f64)
    }

    pub fn volume(&self) -> f64 {
        self.container().volume()
    }

    /// `net_impulse / (global_time * wall_area)`, or `0` before the first
    /// event (spec §4.5).
    pub fn pressure(&self) -> f64 {
        if self.global_time() == 0.0 {
            return 0.0;
        }
        self.net_impulse() / (self.global_time() * self.container().wall_area())
    }
}
