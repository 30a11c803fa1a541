//! Persisted-state output (spec §6): a per-particle state table plus a
//! summary of the run's observables, serialised as YAML. The teacher's
//! `SimulationSpec` round-tripped its own config through `serde_yaml`; this
//! reuses the same crate for the output side, since no csv-style tabular
//! crate appears anywhere in the example pack.

use serde::Serialize;

use hsg_engine::System;

#[derive(Debug, Serialize, PartialEq)]
pub struct ParticleState {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub mass: f64,
    pub radius: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RunSummary {
    pub particle_count: usize,
    pub collisions: u64,
    pub global_time: f64,
    pub temperature: f64,
    pub pressure: f64,
    pub volume: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Report {
    pub summary: RunSummary,
    pub particles: Vec<ParticleState>,
}

impl Report {
    pub fn from_system<const D: usize>(system: &System<D>) -> Self {
        let particles = system
            .particles()
            .iter()
            .map(|p| ParticleState {
                position: (0..D).map(|axis| p.position[axis]).collect(),
                velocity: (0..D).map(|axis| p.velocity[axis]).collect(),
                mass: p.mass,
                radius: p.radius,
            })
            .collect();

        Report {
            summary: RunSummary {
                particle_count: system.particle_count(),
                collisions: system.collision_count(),
                global_time: system.global_time(),
                temperature: system.temperature(),
                pressure: system.pressure(),
                volume: system.volume(),
            },
            particles,
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsg_engine::{Container, Particle, Vecd};

    #[test]
    fn test_report_from_system_captures_observables_and_particles() {
        let container = Container::new([10.0, 10.0, 10.0]);
        let particles = vec![Particle::new(Vecd::new([5.0, 5.0, 5.0]), Vecd::new([1.0, 0.0, 0.0]), 2.0, 1.0)];
        let system: System<3> = System::from_particles(container, particles).unwrap();

        let report = Report::from_system(&system);
        assert_eq!(report.summary.particle_count, 1);
        assert_eq!(report.summary.collisions, 0);
        assert_eq!(report.particles.len(), 1);
        assert_eq!(report.particles[0].position, vec![5.0, 5.0, 5.0]);
        assert_eq!(report.particles[0].mass, 2.0);
    }

    #[test]
    fn test_to_yaml_round_trips_through_serde_yaml() {
        let container = Container::new([10.0, 10.0, 10.0]);
        let particles = vec![Particle::new(Vecd::new([5.0, 5.0, 5.0]), Vecd::ZERO, 1.0, 1.0)];
        let system: System<3> = System::from_particles(container, particles).unwrap();
        let yaml = Report::from_system(&system).to_yaml().unwrap();
        assert!(yaml.contains("particle_count"));
        assert!(yaml.contains("position"));
    }
}
