//! The event series (spec §4.3): the ordered collection of pending
//! event predictions, one per pair-key, supporting `min`, `refresh` and
//! `forbid`.
//!
//! Internally this stores *absolute* predicted times rather than deltas
//! from "now" plus a lazily-cleaned min-heap over them, the optimisation
//! spec §9 names explicitly ("a heap storing absolute predicted times...
//! eliminates the sweep entirely"). `min`/`refresh` take the caller's
//! current `global_time` and convert to/from the delta-from-now the outer
//! contract describes; nothing outside this module needs to know the
//! internal representation.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::HashMap;

use ordered_float::OrderedFloat;

use crate::container::{Container, Side};
use crate::geometry::{time_to_pair, time_to_wall};
use crate::particle::Particle;

/// A potential future collision: either a sphere against one face of the
/// container, or a pair of spheres (spec §3, "Pair-key").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKey {
    Wall { particle: usize, axis: usize, side: Side },
    Pair { i: usize, j: usize },
}

impl EventKey {
    /// Builds a pair key, normalising so `i < j` (spec §3).
    pub fn pair(a: usize, b: usize) -> Self {
        if a < b {
            EventKey::Pair { i: a, j: b }
        } else {
            EventKey::Pair { i: b, j: a }
        }
    }

    pub fn involves(&self, particle: usize) -> bool {
        match *self {
            EventKey::Wall { particle: p, .. } => p == particle,
            EventKey::Pair { i, j } => i == particle || j == particle,
        }
    }
}

#[derive(Debug, Default)]
pub struct EventSeries {
    absolute: HashMap<EventKey, f64>,
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, EventKey)>>,
}

impl EventSeries {
    pub fn new() -> Self {
        EventSeries {
            absolute: HashMap::new(),
            heap: BinaryHeap::new(),
        }
    }

    fn set(&mut self, key: EventKey, absolute_time: f64) {
        self.absolute.insert(key, absolute_time);
        self.heap.push(Reverse((OrderedFloat(absolute_time), key)));
    }

    /// Populates every wall key and pair key from scratch (spec §4.3, `init`).
    pub fn init<const D: usize>(&mut self, particles: &[Particle<D>], container: &Container<D>, now: f64) {
        self.absolute.clear();
        self.heap.clear();
        for i in 0..particles.len() {
            for axis in 0..D {
                for side in [Side::Min, Side::Max] {
                    let dt = time_to_wall(&particles[i], container, axis, side);
                    self.set(EventKey::Wall { particle: i, axis, side }, now + dt);
                }
            }
            for j in (i + 1)..particles.len() {
                let dt = time_to_pair(&particles[i], &particles[j]);
                self.set(EventKey::pair(i, j), now + dt);
            }
        }
    }

    /// Recomputes the `2d` wall keys and `N-1` pair keys mentioning particle
    /// `i` (spec §4.3, `refresh`).
    pub fn refresh<const D: usize>(&mut self, i: usize, particles: &[Particle<D>], container: &Container<D>, now: f64) {
        for axis in 0..D {
            for side in [Side::Min, Side::Max] {
                let dt = time_to_wall(&particles[i], container, axis, side);
                self.set(EventKey::Wall { particle: i, axis, side }, now + dt);
            }
        }
        for j in 0..particles.len() {
            if j == i {
                continue;
            }
            let dt = time_to_pair(&particles[i], &particles[j]);
            self.set(EventKey::pair(i, j), now + dt);
        }
    }

    /// Sets a single key to `+∞`, the re-collision guard of spec §4.4 / §9.
    pub fn forbid(&mut self, key: EventKey) {
        self.set(key, f64::INFINITY);
    }

    /// No-op: entries are absolute predicted times, not deltas from "now",
    /// so there is nothing to subtract after the scheduler advances time.
    /// Kept to name the operation spec §4.3 describes.
    pub fn shift(&mut self, _dt: f64) {}

    /// Returns the pair-key with the smallest time-to-collision from `now`,
    /// and that time (spec §4.3, `min`). Lazily discards heap entries that
    /// a later `refresh`/`forbid` superseded.
    pub fn min(&mut self, now: f64) -> (EventKey, f64) {
        loop {
            let &Reverse((t, key)) = self.heap.peek().expect("event series must never be empty");
            match self.absolute.get(&key) {
                Some(&current) if current == t.into_inner() => {
                    self.heap.pop();
                    return (key, current - now);
                }
                _ => {
                    self.heap.pop();
                }
            }
        }
    }
}
