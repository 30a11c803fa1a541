use crate::container::Container;
use crate::particle::Particle;

/// A fixed-size, index-addressable array of sphere states (spec §4.2). `N`
/// is set once at construction and never changes for the lifetime of a run.
#[derive(Debug, Clone)]
pub struct ParticleStore<const D: usize> {
    particles: Vec<Particle<D>>,
}

impl<const D: usize> ParticleStore<D> {
    pub fn new(particles: Vec<Particle<D>>) -> Self {
        ParticleStore { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn as_slice(&self) -> &[Particle<D>] {
        &self.particles
    }

    pub fn get(&self, i: usize) -> &Particle<D> {
        &self.particles[i]
    }

    pub fn get_mut(&mut self, i: usize) -> &mut Particle<D> {
        &mut self.particles[i]
    }

    /// `position[i] += velocity[i] * dt` for every particle (spec §4.2).
    pub fn advance_all(&mut self, dt: f64) {
        for particle in self.particles.iter_mut() {
            particle.position += particle.velocity * dt;
        }
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    /// Number of particles currently within the container's interior, used
    /// only for the end-of-run conservation check (spec §4.2).
    pub fn count_within(&self, container: &Container<D>) -> usize {
        self.particles
            .iter()
            .filter(|p| container.contains(&p.position, p.radius))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vecd;

    #[test]
    fn test_advance_all() {
        let mut store = ParticleStore::new(vec![
            Particle::new(Vecd::new([0.0, 0.0]), Vecd::new([1.0, 2.0]), 1.0, 1.0),
            Particle::new(Vecd::new([5.0, 5.0]), Vecd::new([0.0, -1.0]), 1.0, 1.0),
        ]);
        store.advance_all(2.0);
        assert!(store.get(0).position.approx_eq(Vecd::new([2.0, 4.0]), 1e-12));
        assert!(store.get(1).position.approx_eq(Vecd::new([5.0, 3.0]), 1e-12));
    }

    #[test]
    fn test_kinetic_energy() {
        let store = ParticleStore::new(vec![
            Particle::new(Vecd::new([0.0, 0.0]), Vecd::new([3.0, 4.0]), 2.0, 1.0),
            Particle::new(Vecd::new([0.0, 0.0]), Vecd::new([0.0, 0.0]), 5.0, 1.0),
        ]);
        assert_eq!(store.kinetic_energy(), 0.5 * 2.0 * 25.0);
    }

    #[test]
    fn test_count_within() {
        let container = Container::new([10.0, 10.0]);
        let store = ParticleStore::new(vec![
            Particle::new(Vecd::new([5.0, 5.0]), Vecd::ZERO, 1.0, 1.0),
            Particle::new(Vecd::new([0.2, 5.0]), Vecd::ZERO, 1.0, 1.0),
        ]);
        assert_eq!(store.count_within(&container), 1);
    }
}
