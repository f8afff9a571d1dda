//! Approximate equality through the [`approx`] traits.
//!
//! A vector is approximately equal to another if every pair of elements is.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl<T: AbsDiffEq, const N: usize> AbsDiffEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T: RelativeEq, const N: usize> RelativeEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}

impl<T: UlpsEq, const N: usize> UlpsEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| T::ulps_eq(a, b, epsilon, max_ulps))
    }
}
