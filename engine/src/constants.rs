/// Slack tolerated in position/overlap invariants at event boundaries (spec §3 invariants 1-2).
pub const DISTANCE_EPS: f64 = 1e-8;

/// Slack allowed when accepting an event whose predicted time is slightly in the past,
/// as can happen after floating point roundoff at the previous event boundary
/// (wired into `System::simulate_event`'s negative-time check).
pub const TIME_SEC_EPS: f64 = 1e-6;

/// Boltzmann constant, J/K.
pub const K_BOLTZMANN: f64 = 1.380649e-23;

/// Number of rejection-sampling attempts per particle before the initialiser gives up
/// and reports the configuration as infeasible (spec §9, "Overlap-at-init").
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;
