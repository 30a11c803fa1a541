use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub};

use rand_distr::{Distribution, StandardNormal};

/// A `D`-dimensional real vector. Used for both position and velocity; the
/// distinction is purely semantic, as in the original `Position`/`Velocity`
/// split over a common `Vector` base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vecd<const D: usize> {
    components: [f64; D],
}

impl<const D: usize> Vecd<D> {
    pub const ZERO: Vecd<D> = Vecd { components: [0.0; D] };

    pub fn new(components: [f64; D]) -> Self {
        Vecd { components }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        let mut sum = 0.0;
        for k in 0..D {
            sum += self.components[k] * other.components[k];
        }
        sum
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn unit(&self) -> Self {
        *self / self.length()
    }

    pub fn approx_eq(&self, other: Self, epsilon: f64) -> bool {
        (0..D).all(|k| (self.components[k] - other.components[k]).abs() < epsilon)
    }

    /// Draws a vector uniformly distributed over directions by sampling each
    /// component from a standard normal distribution and normalising,
    /// exactly the procedure used by the original `Vector.random_unit_vector`.
    pub fn random_unit(rng: &mut impl rand::Rng) -> Self {
        let mut components = [0.0; D];
        for c in components.iter_mut() {
            *c = StandardNormal.sample(rng);
        }
        Vecd { components }.unit()
    }
}

impl<const D: usize> Index<usize> for Vecd<D> {
    type Output = f64;
    fn index(&self, axis: usize) -> &f64 {
        &self.components[axis]
    }
}

impl<const D: usize> IndexMut<usize> for Vecd<D> {
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.components[axis]
    }
}

impl<const D: usize> Add for Vecd<D> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for k in 0..D {
            out.components[k] += rhs.components[k];
        }
        out
    }
}

impl<const D: usize> AddAssign for Vecd<D> {
    fn add_assign(&mut self, rhs: Self) {
        for k in 0..D {
            self.components[k] += rhs.components[k];
        }
    }
}

impl<const D: usize> Sub for Vecd<D> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<const D: usize> Neg for Vecd<D> {
    type Output = Self;
    fn neg(self) -> Self {
        let mut out = self;
        for k in 0..D {
            out.components[k] = -out.components[k];
        }
        out
    }
}

impl<const D: usize> Mul<f64> for Vecd<D> {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        let mut out = self;
        for k in 0..D {
            out.components[k] *= scalar;
        }
        out
    }
}

impl<const D: usize> Div<f64> for Vecd<D> {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        let mut out = self;
        for k in 0..D {
            out.components[k] /= scalar;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        assert_eq!(Vecd::new([3.0, 4.0]).length(), 5.0);
        assert_eq!(Vecd::new([0.0, 0.0]).length(), 0.0);
        assert_eq!(Vecd::new([-3.0, 4.0]).length(), 5.0);
    }

    #[test]
    fn test_dot() {
        let a = Vecd::new([1.0, 2.0, 3.0]);
        let b = Vecd::new([4.0, -5.0, 6.0]);
        assert_eq!(a.dot(&b), 4.0 - 10.0 + 18.0);
    }

    #[test]
    fn test_add_sub_neg() {
        let a = Vecd::new([1.0, 2.0]);
        let b = Vecd::new([3.0, -1.0]);
        assert_eq!((a + b).approx_eq(Vecd::new([4.0, 1.0]), 1e-12), true);
        assert_eq!((a - b).approx_eq(Vecd::new([-2.0, 3.0]), 1e-12), true);
        assert_eq!((-a).approx_eq(Vecd::new([-1.0, -2.0]), 1e-12), true);
    }

    #[test]
    fn test_random_unit_is_normalised() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let v: Vecd<3> = Vecd::random_unit(&mut rng);
            assert!((v.length() - 1.0).abs() < 1e-9);
        }
    }
}
