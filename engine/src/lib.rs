//! Event-driven hard-sphere gas simulator core: the collision scheduler and
//! resolver for a fixed population of non-overlapping rigid spheres in an
//! axis-aligned `D`-dimensional box. See `SPEC_FULL.md` at the repository
//! root for the full design.

pub mod constants;
pub mod container;
pub mod error;
pub mod events;
pub mod geometry;
pub mod init;
pub mod observables;
pub mod particle;
pub mod scheduler;
pub mod store;
pub mod vecd;

pub use constants::*;
pub use container::{Container, Side};
pub use error::EngineError;
pub use events::{EventKey, EventSeries};
pub use init::build_system;
pub use particle::Particle;
pub use scheduler::System;
pub use store::ParticleStore;
pub use vecd::Vecd;
