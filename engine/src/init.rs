//! Random initial-state construction: non-overlapping placement on the
//! container interior plus isotropic velocity sampling at a prescribed
//! speed (spec §3, "Lifecycle"). This is the only place randomness enters
//! the core, fed by a caller-supplied, seedable RNG (spec §5,
//! "Determinism").

use rand::Rng;

use crate::constants::MAX_PLACEMENT_ATTEMPTS;
use crate::container::Container;
use crate::error::EngineError;
use crate::particle::Particle;
use crate::scheduler::System;
use crate::Vecd;

/// Builds a ready-to-run system of `n` identical spheres (common `mass` and
/// `radius`), placed without overlap inside a `box_lengths`-sized container,
/// each given a random direction at speed `speed` (spec §6).
///
/// Returns `InvalidConfig` if any parameter is non-positive, if the spheres
/// cannot possibly fit, or if rejection sampling fails to place every
/// sphere within the retry budget (spec §7, §9 "Overlap-at-init").
pub fn build_system<const D: usize>(
    n: usize,
    mass: f64,
    radius: f64,
    box_lengths: [f64; D],
    speed: f64,
    rng: &mut impl Rng,
) -> Result<System<D>, EngineError> {
    if n == 0 {
        return Err(EngineError::InvalidConfig("particle count must be positive".into()));
    }
    if mass <= 0.0 {
        return Err(EngineError::InvalidConfig("mass must be positive".into()));
    }
    if radius <= 0.0 {
        return Err(EngineError::InvalidConfig("radius must be positive".into()));
    }
    if speed <= 0.0 {
        return Err(EngineError::InvalidConfig("initial speed must be positive".into()));
    }
    if box_lengths.iter().any(|&l| l <= 0.0) {
        return Err(EngineError::InvalidConfig("box side lengths must be positive".into()));
    }
    if box_lengths.iter().any(|&l| l <= 2.0 * radius) {
        return Err(EngineError::InvalidConfig(format!(
            "sphere radius {radius} does not fit inside a container with side lengths {box_lengths:?}"
        )));
    }

    let container = Container::new(box_lengths);
    let mut particles: Vec<Particle<D>> = Vec::with_capacity(n);

    for _ in 0..n {
        let mut placed = false;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let mut position = Vecd::ZERO;
            for axis in 0..D {
                position[axis] = rng.gen_range(radius..=(box_lengths[axis] - radius));
            }
            let velocity = Vecd::random_unit(rng) * speed;
            let candidate = Particle::new(position, velocity, mass, radius);

            if particles.iter().all(|existing| !candidate.overlaps(existing)) {
                particles.push(candidate);
                placed = true;
                break;
            }
        }
        if !placed {
            return Err(EngineError::InvalidConfig(format!(
                "could not place particle {} of {n} without overlap after {MAX_PLACEMENT_ATTEMPTS} attempts \
                 (packing fraction too high)",
                particles.len()
            )));
        }
    }

    tracing::info!(n, mass, radius, speed, "initialised system");
    System::from_particles(container, particles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_build_system_places_n_non_overlapping_particles() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let system: System<3> = build_system(20, 1.0, 1.0, [50.0, 50.0, 50.0], 2.0, &mut rng).unwrap();
        assert_eq!(system.particle_count(), 20);
        let particles = system.particles();
        for i in 0..particles.len() {
            assert!(system.container().contains(&particles[i].position, particles[i].radius));
            for j in (i + 1)..particles.len() {
                assert!(!particles[i].overlaps(&particles[j]));
            }
            assert!((particles[i].velocity.length() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_build_system_rejects_non_positive_params() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(build_system::<3>(0, 1.0, 1.0, [10.0, 10.0, 10.0], 1.0, &mut rng).is_err());
        assert!(build_system::<3>(5, -1.0, 1.0, [10.0, 10.0, 10.0], 1.0, &mut rng).is_err());
        assert!(build_system::<3>(5, 1.0, 0.0, [10.0, 10.0, 10.0], 1.0, &mut rng).is_err());
        assert!(build_system::<3>(5, 1.0, 1.0, [10.0, 10.0, 10.0], 0.0, &mut rng).is_err());
    }

    #[test]
    fn test_build_system_rejects_infeasible_packing() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        // Radius too large to fit even one sphere.
        let err = build_system::<2>(1, 1.0, 10.0, [5.0, 5.0], 1.0, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));

        // Plausible per-sphere size but far too many spheres for the box.
        let err = build_system::<2>(10_000, 1.0, 1.0, [5.0, 5.0], 1.0, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }
}
