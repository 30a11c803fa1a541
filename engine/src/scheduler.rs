//! The scheduler / resolver (spec §4.4): the main event loop that advances
//! global time to the next predicted collision, applies the elastic
//! collision laws, refreshes the event series, and accumulates wall
//! impulse for the pressure observable.

use crate::container::Container;
use crate::error::EngineError;
use crate::events::{EventKey, EventSeries};
use crate::particle::Particle;
use crate::store::ParticleStore;

/// The full simulated state: container, particles, and the pending event
/// series, plus the run counters the observables (§4.5) read from.
#[derive(Debug)]
pub struct System<const D: usize> {
    container: Container<D>,
    particles: ParticleStore<D>,
    events: EventSeries,
    global_time: f64,
    collision_count: u64,
    net_impulse: f64,
}

impl<const D: usize> System<D> {
    /// Builds a system from an already-valid (non-overlapping, in-bounds)
    /// particle population. Callers needing rejection-sampled random
    /// initialisation should go through [`crate::init::build_system`] instead.
    ///
    /// Returns `InvalidConfig` if `particles` is empty: spec §7 requires a
    /// positive particle count, and an empty event series has no minimum to
    /// pop (see `EventSeries::min`).
    pub fn from_particles(container: Container<D>, particles: Vec<Particle<D>>) -> Result<Self, EngineError> {
        if particles.is_empty() {
            return Err(EngineError::InvalidConfig("particle count must be positive".into()));
        }
        let particles = ParticleStore::new(particles);
        let mut events = EventSeries::new();
        events.init(particles.as_slice(), &container, 0.0);
        Ok(System {
            container,
            particles,
            events,
            global_time: 0.0,
            collision_count: 0,
            net_impulse: 0.0,
        })
    }

    pub fn container(&self) -> &Container<D> {
        &self.container
    }

    pub fn particles(&self) -> &[Particle<D>] {
        self.particles.as_slice()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn global_time(&self) -> f64 {
        self.global_time
    }

    pub fn collision_count(&self) -> u64 {
        self.collision_count
    }

    pub fn net_impulse(&self) -> f64 {
        self.net_impulse
    }

    pub fn system_ke(&self) -> f64 {
        self.particles.kinetic_energy()
    }

    /// Number of particles currently within the container's interior (spec
    /// §4.2's `within_box`, summed), exposed so the end-of-run conservation
    /// check can report the observed count, not just a boolean.
    pub fn particles_in_box_count(&self) -> usize {
        self.particles.count_within(&self.container)
    }

    /// `true` iff at most one particle currently sits outside the container,
    /// absorbing the transient boundary slack left by the most recent event
    /// (spec §3 invariant 1, §4.4's `check_N`-equivalent).
    pub fn particle_count_ok(&self) -> bool {
        self.check_particle_count().is_ok()
    }

    /// Validates the end-of-run conservation invariant (spec §7,
    /// "Invariant breach"): at most one particle may sit outside the
    /// container. Returns the structured error with the observed count
    /// rather than a boolean, as §7 requires.
    pub fn check_particle_count(&self) -> Result<(), EngineError> {
        let observed = self.particles_in_box_count();
        let expected = self.particle_count();
        if observed == expected || observed + 1 == expected {
            Ok(())
        } else {
            Err(EngineError::InvariantBreach { expected, observed })
        }
    }

    /// Advances the system by one event: finds the next collision, moves
    /// every particle up to it, resolves it, and refreshes the event series
    /// for the one or two particles involved (spec §4.4).
    pub fn simulate_event(&mut self) -> Result<(), EngineError> {
        let (key, dt) = self.events.min(self.global_time);

        if dt < -crate::constants::TIME_SEC_EPS {
            return Err(EngineError::NumericalPathology(dt));
        }
        // A predicted time within epsilon of "now" but slightly negative is
        // floating-point roundoff from the previous event boundary, not a
        // logic error (spec §9); clamp it rather than advancing backwards.
        let dt = dt.max(0.0);
        if !dt.is_finite() {
            // The system has reached a stationary configuration (spec §8,
            // "event-series finiteness"): nothing more will ever collide.
            tracing::warn!(collision_count = self.collision_count, "event series exhausted: no finite next event");
            return Ok(());
        }

        self.particles.advance_all(dt);
        self.global_time += dt;
        self.collision_count += 1;
        self.events.shift(dt);

        match key {
            EventKey::Wall { particle, axis, side } => {
                let p = self.particles.get_mut(particle);
                self.net_impulse += 2.0 * p.mass * p.velocity[axis].abs();
                p.velocity[axis] = -p.velocity[axis];
                tracing::debug!(
                    particle,
                    axis,
                    ?side,
                    collision_count = self.collision_count,
                    global_time = self.global_time,
                    "wall collision resolved"
                );
                self.events.refresh(particle, self.particles.as_slice(), &self.container, self.global_time);
            }
            EventKey::Pair { i, j } => {
                self.resolve_pair(i, j);
                tracing::debug!(
                    i,
                    j,
                    collision_count = self.collision_count,
                    global_time = self.global_time,
                    "pair collision resolved"
                );
                self.events.refresh(i, self.particles.as_slice(), &self.container, self.global_time);
                self.events.refresh(j, self.particles.as_slice(), &self.container, self.global_time);
            }
        }

        self.events.forbid(key);
        Ok(())
    }

    /// Elastic impulse exchange along the line of centres (spec §4.4).
    fn resolve_pair(&mut self, i: usize, j: usize) {
        let pi = *self.particles.get(i);
        let pj = *self.particles.get(j);

        let normal = (pj.position - pi.position).unit();
        let delta_v = pj.velocity - pi.velocity;
        let k = (2.0 * pi.mass * pj.mass / (pi.mass + pj.mass)) * delta_v.dot(&normal);

        self.particles.get_mut(i).velocity = pi.velocity + normal * (k / pi.mass);
        self.particles.get_mut(j).velocity = pj.velocity - normal * (k / pj.mass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vecd;

    // Reference scenario 1 (spec §8): head-on pair, 3-D.
    #[test]
    fn test_simulate_event_head_on_pair() {
        let container = Container::new([100.0, 100.0, 100.0]);
        let particles = vec![
            Particle::new(Vecd::new([2.0, 2.0, 5.0]), Vecd::new([1.0, 1.0, 0.0]), 1.0, 1.0),
            Particle::new(Vecd::new([8.0, 6.0, 5.0]), Vecd::new([0.0, 0.0, 0.0]), 1.0, 1.0),
        ];
        let mut system = System::from_particles(container, particles).unwrap();
        system.simulate_event().unwrap();

        assert!((system.global_time() - 4.0).abs() < 1e-10);
        assert_eq!(system.collision_count(), 1);
        assert!(system.particles()[0].position.approx_eq(Vecd::new([6.0, 6.0, 5.0]), 1e-10));
        assert!(system.particles()[1].position.approx_eq(Vecd::new([8.0, 6.0, 5.0]), 1e-10));
        assert!(system.particles()[0].velocity.approx_eq(Vecd::new([0.0, 1.0, 0.0]), 1e-10));
        assert!(system.particles()[1].velocity.approx_eq(Vecd::new([1.0, 0.0, 0.0]), 1e-10));
    }

    #[test]
    fn test_wall_bounce_accumulates_impulse_and_flips_velocity() {
        let container = Container::new([10.0, 10.0]);
        let particles = vec![Particle::new(Vecd::new([5.0, 5.0]), Vecd::new([1.0, 0.0]), 2.0, 1.0)];
        let mut system = System::from_particles(container, particles).unwrap();
        // Hits the Max wall on axis 0 at x=9, travelling at speed 1: t=4.
        system.simulate_event().unwrap();
        assert!((system.global_time() - 4.0).abs() < 1e-10);
        assert!((system.net_impulse() - 2.0 * 2.0 * 1.0).abs() < 1e-10);
        assert!(system.particles()[0].velocity.approx_eq(Vecd::new([-1.0, 0.0]), 1e-10));
    }

    #[test]
    fn test_forbid_prevents_immediate_recollision() {
        // Two particles that just touched should not be reported as the
        // immediate next event again due to floating point slack.
        let container = Container::new([100.0, 100.0]);
        let particles = vec![
            Particle::new(Vecd::new([2.0, 2.0]), Vecd::new([1.0, 0.0]), 1.0, 1.0),
            Particle::new(Vecd::new([8.0, 2.0]), Vecd::new([0.0, 0.0]), 1.0, 1.0),
        ];
        let mut system = System::from_particles(container, particles).unwrap();
        system.simulate_event().unwrap();
        // Post-collision, particle velocities have exchanged and they are
        // moving apart; the pair key must not immediately reappear as the
        // next event since it was just forbidden.
        let (key, _) = system.events.min(system.global_time());
        assert_ne!(key, EventKey::pair(0, 1));
    }

    #[test]
    fn test_particle_count_ok_allows_one_boundary_particle() {
        let container = Container::new([10.0, 10.0]);
        let particles = vec![
            Particle::new(Vecd::new([5.0, 5.0]), Vecd::ZERO, 1.0, 1.0),
            Particle::new(Vecd::new([0.0, 5.0]), Vecd::ZERO, 1.0, 1.0),
        ];
        let system = System::from_particles(container, particles).unwrap();
        assert!(system.particle_count_ok());
    }

    #[test]
    fn test_energy_conservation_over_many_events() {
        let container = Container::new([20.0, 20.0, 20.0]);
        let particles = vec![
            Particle::new(Vecd::new([2.0, 2.0, 2.0]), Vecd::new([1.3, -2.1, 0.7]), 1.0, 1.0),
            Particle::new(Vecd::new([10.0, 10.0, 10.0]), Vecd::new([-0.5, 1.1, -1.2]), 1.0, 1.0),
            Particle::new(Vecd::new([15.0, 5.0, 15.0]), Vecd::new([0.2, 0.3, -0.4]), 2.0, 1.5),
        ];
        let mut system = System::from_particles(container, particles).unwrap();
        let ke0 = system.system_ke();
        for _ in 0..200 {
            system.simulate_event().unwrap();
        }
        let ke1 = system.system_ke();
        assert!((ke0 - ke1).abs() / ke0 < 1e-6);
        assert!(system.particle_count_ok());
        assert!(system.global_time() > 0.0);
    }

    #[test]
    fn test_from_particles_rejects_empty_population() {
        let container: Container<2> = Container::new([10.0, 10.0]);
        let err = System::from_particles(container, Vec::new()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_check_particle_count_reports_observed_and_expected() {
        let container = Container::new([10.0, 10.0]);
        let particles = vec![
            Particle::new(Vecd::new([5.0, 5.0]), Vecd::ZERO, 1.0, 1.0),
            Particle::new(Vecd::new([50.0, 50.0]), Vecd::ZERO, 1.0, 1.0),
            Particle::new(Vecd::new([60.0, 60.0]), Vecd::ZERO, 1.0, 1.0),
        ];
        let system = System::from_particles(container, particles).unwrap();
        let err = system.check_particle_count().unwrap_err();
        assert_eq!(err, EngineError::InvariantBreach { expected: 3, observed: 1 });
    }
}
