//! Per-element range and rounding operations for fractional kinds.

use rust_decimal::Decimal;

use crate::{One, Scalar, Vector, Zero};

/// Scalar kinds with a fractional representation that support saturation and rounding.
///
/// Implemented for [`f32`], [`f64`] and [`Decimal`]. Integer kinds do not implement this trait, so
/// the corresponding [`Vector`] methods are unavailable for integer vectors.
pub trait Fractional: Scalar + Zero + One {
    /// Returns the largest integral value less than or equal to `self`.
    fn floor(self) -> Self;

    /// Returns the smallest integral value greater than or equal to `self`.
    fn ceil(self) -> Self;

    /// Clamps `self` to the closed interval `[0, 1]`.
    ///
    /// `NaN` compares false against both bounds and is returned unchanged.
    #[inline]
    fn saturate(self) -> Self {
        if self < Self::ZERO {
            Self::ZERO
        } else if self > Self::ONE {
            Self::ONE
        } else {
            self
        }
    }
}

impl Fractional for f32 {
    #[inline]
    fn floor(self) -> Self {
        f32::floor(self)
    }

    #[inline]
    fn ceil(self) -> Self {
        f32::ceil(self)
    }
}

impl Fractional for f64 {
    #[inline]
    fn floor(self) -> Self {
        f64::floor(self)
    }

    #[inline]
    fn ceil(self) -> Self {
        f64::ceil(self)
    }
}

impl Fractional for Decimal {
    #[inline]
    fn floor(self) -> Self {
        Decimal::floor(&self)
    }

    #[inline]
    fn ceil(self) -> Self {
        Decimal::ceil(&self)
    }
}

impl<T: Fractional, const N: usize> Vector<T, N> {
    /// Clamps each element of `self` to the closed interval `[0, 1]`, in place.
    ///
    /// Elements that are `NaN` are left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let mut v = vec4(-0.5, 0.5, 1.5, f32::NAN);
    /// v.saturate();
    /// assert_eq!(v.truncate(), vec3(0.0, 0.5, 1.0));
    /// assert!(v.w.is_nan());
    /// ```
    ///
    /// Integer vectors cannot be saturated:
    ///
    /// ```compile_fail
    /// # use numvec::*;
    /// let mut v = vec2(-1i32, 2);
    /// v.saturate();
    /// ```
    pub fn saturate(&mut self) {
        self.as_mut_slice()
            .iter_mut()
            .for_each(|elem| *elem = T::saturate(*elem));
    }

    /// Rounds each element of `self` towards negative infinity, in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let mut v = vec4(2.0, -2.0, 2.5, -2.5);
    /// v.floor();
    /// assert_eq!(v, vec4(2.0, -2.0, 2.0, -3.0));
    /// ```
    ///
    /// ```compile_fail
    /// # use numvec::*;
    /// let mut v = vec2(1u8, 2);
    /// v.floor();
    /// ```
    pub fn floor(&mut self) {
        self.as_mut_slice()
            .iter_mut()
            .for_each(|elem| *elem = T::floor(*elem));
    }

    /// Rounds each element of `self` towards positive infinity, in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let mut v = vec4(2.0, -2.0, 2.5, -2.5);
    /// v.ceil();
    /// assert_eq!(v, vec4(2.0, -2.0, 3.0, -2.0));
    /// ```
    ///
    /// ```compile_fail
    /// # use numvec::*;
    /// let mut v = vec2(1i64, 2);
    /// v.ceil();
    /// ```
    pub fn ceil(&mut self) {
        self.as_mut_slice()
            .iter_mut()
            .for_each(|elem| *elem = T::ceil(*elem));
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Vec2d, Vec3f, Vec4d, Vec4f};

    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn saturate_bounds() {
        let mut v = vec4(-0.5f32, 0.5, 1.5, f32::NAN);
        v.saturate();
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 0.5);
        assert_eq!(v.z, 1.0);
        assert!(v.w.is_nan());

        let mut v = vec2(f64::NEG_INFINITY, f64::INFINITY);
        v.saturate();
        assert_eq!(v, Vec2d::Y);

        let mut v = vec3(0.0f32, 1.0, -0.0);
        v.saturate();
        assert_eq!(v, vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn saturate_decimal() {
        let mut v = vec4(dec("-0.5"), dec("0.5"), dec("1.5"), dec("1.0000000001"));
        v.saturate();
        assert_eq!(v, vec4(Decimal::ZERO, dec("0.5"), Decimal::ONE, Decimal::ONE));
    }

    #[test]
    fn floor_ceil() {
        let v = vec4(2.0f64, -2.0, 2.5, -2.5);

        let mut floor = v;
        floor.floor();
        assert_eq!(floor, vec4(2.0, -2.0, 2.0, -3.0));

        let mut ceil = v;
        ceil.ceil();
        assert_eq!(ceil, vec4(2.0, -2.0, 3.0, -2.0));
    }

    #[test]
    fn floor_ceil_decimal() {
        let mut v = vec2(dec("2.5"), dec("-2.5"));
        v.floor();
        assert_eq!(v, vec2(dec("2"), dec("-3")));

        let mut v = vec2(dec("2.5"), dec("-2.5"));
        v.ceil();
        assert_eq!(v, vec2(dec("3"), dec("-2")));
    }

    #[test]
    fn floor_ceil_non_finite() {
        let mut v = vec3(f32::NAN, f32::INFINITY, f32::NEG_INFINITY);
        v.floor();
        assert!(v.x.is_nan());
        assert_eq!(v.y, f32::INFINITY);
        assert_eq!(v.z, f32::NEG_INFINITY);

        let mut v = Vec3f::splat(-0.25);
        v.ceil();
        assert_eq!(v, Vec3f::ZERO);
        assert!(v.x.is_sign_negative());
    }

    #[test]
    fn idempotent() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..1000 {
            let v = Vec4f::from_fn(|_| (rng.f32() - 0.5) * 1000.0);

            let mut once = v;
            once.floor();
            let mut twice = once;
            twice.floor();
            assert_eq!(once, twice);

            let mut once = v;
            once.ceil();
            let mut twice = once;
            twice.ceil();
            assert_eq!(once, twice);

            let mut once = v;
            once.saturate();
            let mut twice = once;
            twice.saturate();
            assert_eq!(once, twice);
            assert!(once.as_slice().iter().all(|e| (0.0..=1.0).contains(e)));
        }
    }

    #[test]
    fn idempotent_f64() {
        let mut rng = fastrand::Rng::with_seed(43);
        for _ in 0..1000 {
            let v = Vec4d::from_fn(|_| (rng.f64() - 0.5) * 1e6);

            let mut once = v;
            once.floor();
            let mut twice = once;
            twice.floor();
            assert_eq!(once, twice);
            assert!(once.as_slice().iter().zip(v.as_slice()).all(|(r, e)| r <= e));

            let mut once = v;
            once.ceil();
            let mut twice = once;
            twice.ceil();
            assert_eq!(once, twice);
            assert!(once.as_slice().iter().zip(v.as_slice()).all(|(r, e)| r >= e));
        }
    }

    #[test]
    fn idempotent_decimal() {
        let mut rng = fastrand::Rng::with_seed(44);
        for _ in 0..1000 {
            let v = Vector::<Decimal, 3>::from_fn(|_| {
                Decimal::new(rng.i64(-1_000_000..1_000_000), 3)
            });

            let mut once = v;
            once.floor();
            let mut twice = once;
            twice.floor();
            assert_eq!(once, twice);
            assert!(once.as_slice().iter().all(|e| e.fract().is_zero()));

            let mut once = v;
            once.ceil();
            let mut twice = once;
            twice.ceil();
            assert_eq!(once, twice);
            assert!(once.as_slice().iter().all(|e| e.fract().is_zero()));
        }
    }
}
