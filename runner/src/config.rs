//! The YAML-loaded run configuration (spec §1, "the thin driver that picks
//! simulation parameters"). Mirrors the parameter set the teacher's
//! `SimulationSpec` loaded with `serde` + `serde_yaml`, but trimmed to what
//! this spec's engine actually needs: particle count, shared mass/radius,
//! box geometry, a temperature to derive the initial speed from, a
//! collision budget, and a run seed (spec §5, "Determinism").

use serde::Deserialize;

use hsg_engine::K_BOLTZMANN;

/// This binary fixes the simulation to three dimensions; `hsg_engine`
/// itself is dimension-generic over `Vecd<D>`/`System<D>`, but a CLI
/// argument cannot select a `const` type parameter at runtime, so the
/// driver picks one dimensionality and commits to it at compile time
/// (see DESIGN.md, "Dimensionality in the runner").
pub const DIMENSIONS: usize = 3;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RunConfig {
    /// Number of spheres to place in the container.
    pub particle_count: usize,
    /// Shared mass of every sphere, in kilograms.
    pub mass: f64,
    /// Shared radius of every sphere, in metres.
    pub radius: f64,
    /// Side lengths of the confining box, one per axis, in metres.
    pub box_lengths: [f64; DIMENSIONS],
    /// Initial temperature in kelvin; converted to an isotropic initial
    /// speed via `v = sqrt(3 k_B T / m)`, as the original driver script does.
    pub temperature_kelvin: f64,
    /// Number of collision events to simulate before stopping.
    pub collisions: u64,
    /// Seed for the deterministic RNG used to place and launch particles.
    pub seed: u64,
}

impl RunConfig {
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }

    /// `sqrt(3 k_B T / m)`: the root-mean-square speed at `temperature_kelvin`
    /// (spec §6, initial velocity sampling magnitude).
    pub fn initial_speed(&self) -> f64 {
        (3.0 * K_BOLTZMANN * self.temperature_kelvin / self.mass).sqrt()
    }
}
