//! Explicit widening conversions to the preferred floating-point kind.

use half::f16;

use crate::{Scalar, Vector};

/// Scalar kinds that can be converted to a wider floating-point kind.
///
/// Every kind has at most one such *preferred wide kind*: integers up to 32 bits and [`f16`] widen
/// to [`f32`], 64-bit integers widen to [`f64`]. The pointer-sized integers follow the rule for the
/// target's pointer width. [`f32`], [`f64`] and [`Decimal`][crate::Decimal] do not implement this
/// trait.
///
/// The conversion is total: every value of `Self` maps to a value of `Self::Wide`. Integers too
/// large to be represented exactly are rounded to the nearest representable float.
pub trait Widen: Scalar {
    /// The floating-point kind `Self` converts to.
    type Wide: Scalar;

    /// Converts `self` to the wide kind.
    fn widen(self) -> Self::Wide;
}

// A blanket `impl From<Vector<T, N>> for Vector<T::Wide, N>` would overlap with the reflexive
// `From<T> for T` impl, so every edge gets its own impl.
macro_rules! vector_from {
    ($($from:ty),+ => $to:ty) => {
        $(
            impl<const N: usize> From<Vector<$from, N>> for Vector<$to, N> {
                #[inline]
                fn from(value: Vector<$from, N>) -> Self {
                    value.widen()
                }
            }
        )+
    };
}

macro_rules! widen_lossless {
    ($($from:ty),+ => $to:ty) => {
        $(
            impl Widen for $from {
                type Wide = $to;

                #[inline]
                fn widen(self) -> $to {
                    <$to>::from(self)
                }
            }
        )+
        vector_from!($($from),+ => $to);
    };
}

macro_rules! widen_rounding {
    ($($from:ty),+ => $to:ty) => {
        $(
            impl Widen for $from {
                type Wide = $to;

                #[inline]
                fn widen(self) -> $to {
                    self as $to
                }
            }
        )+
        vector_from!($($from),+ => $to);
    };
}

widen_lossless!(i8, u8, i16, u16, f16 => f32);
widen_rounding!(i32, u32 => f32);
widen_rounding!(i64, u64 => f64);

#[cfg(target_pointer_width = "64")]
widen_rounding!(isize, usize => f64);
#[cfg(not(target_pointer_width = "64"))]
widen_rounding!(isize, usize => f32);

impl<T: Widen, const N: usize> Vector<T, N> {
    /// Converts each element to the kind's preferred floating-point type.
    ///
    /// Element order is preserved. Also see the [`From`] impls, which perform the same conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = vec3(7u8, 0, 255).widen();
    /// assert_eq!(v, vec3(7.0f32, 0.0, 255.0));
    ///
    /// let v = Vec2d::from(vec2(-3i64, 1 << 40));
    /// assert_eq!(v, vec2(-3.0, 1099511627776.0));
    /// ```
    ///
    /// Conversions only go towards the preferred wide kind:
    ///
    /// ```compile_fail
    /// # use numvec::*;
    /// let v: Vec2d = vec2(1i32, 2).into();
    /// ```
    #[inline]
    pub fn widen(self) -> Vector<T::Wide, N> {
        self.map(T::widen)
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec4, Decimal, ScalarKind, Vec2, Vec2f, Vec4, Vec4d, Vec4f};

    use super::*;

    fn wide_kind<T: Widen, const N: usize>(_: Vector<T, N>) -> ScalarKind {
        <T::Wide as Scalar>::KIND
    }

    #[test]
    fn narrow_integers() {
        assert_eq!(vec2(7u8, 200).widen(), vec2(7.0f32, 200.0));
        assert_eq!(vec2(-128i8, 127).widen(), vec2(-128.0f32, 127.0));
        assert_eq!(
            vec4(u16::MAX, 0, 1, 2).widen(),
            vec4(65535.0f32, 0.0, 1.0, 2.0)
        );
        assert_eq!(Vec2f::from(vec2(i16::MIN, -1)), vec2(-32768.0, -1.0));
    }

    #[test]
    fn wide_integers() {
        assert_eq!(vec2(-5i32, 5).widen(), vec2(-5.0f32, 5.0));
        assert_eq!(Vec4f::from(vec4(0u32, 1, 2, u32::MAX)).w, 4294967296.0);
        assert_eq!(
            Vec4d::from(vec4(i64::MIN, -1, 0, 1)),
            vec4(-9223372036854775808.0, -1.0, 0.0, 1.0)
        );
        assert_eq!(vec2(u64::MAX, 3).widen(), vec2(18446744073709551615.0f64, 3.0));
    }

    #[test]
    fn half() {
        let v = vec2(f16::from_f32(0.5), f16::from_f32(-2.0)).widen();
        assert_eq!(v, vec2(0.5f32, -2.0));

        let v: Vec4f = vec4(f16::INFINITY, f16::NEG_INFINITY, f16::MAX, f16::ZERO).into();
        assert_eq!(v, vec4(f32::INFINITY, f32::NEG_INFINITY, 65504.0, 0.0));
        assert!(Vec2::from([f16::NAN, f16::ONE]).widen().x.is_nan());
    }

    #[test]
    fn pointer_sized() {
        let v = vec2(-3isize, 9).widen();
        assert_eq!(v.x, -3.0);
        assert_eq!(v.y, 9.0);
        assert_eq!(vec2(12usize, 0).widen().x, 12.0);
    }

    #[test]
    fn order_preserved() {
        let v = vec4(1i8, 2, 3, 4).widen();
        assert_eq!(v.into_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn target_kind_independent_of_dimension() {
        assert_eq!(wide_kind(Vec2::<i16>::ZERO), ScalarKind::F32);
        assert_eq!(wide_kind(Vec4::<i16>::ZERO), ScalarKind::F32);
        assert_eq!(wide_kind(Vec2::<f16>::ZERO), ScalarKind::F32);
        assert_eq!(wide_kind(Vec4::<f16>::ZERO), ScalarKind::F32);
        assert_eq!(wide_kind(Vec2::<i64>::ZERO), ScalarKind::F64);
        assert_eq!(wide_kind(Vec4::<i64>::ZERO), ScalarKind::F64);
        assert_eq!(wide_kind(Vec2::<u32>::ZERO), wide_kind(Vec2::<i32>::ZERO));
        assert_eq!(wide_kind(Vec4::<u64>::ZERO), wide_kind(Vec4::<i64>::ZERO));
    }

    #[test]
    fn type_table_matches_kind_table() {
        fn check<T: Widen>() {
            assert_eq!(
                T::KIND.preferred_wide(),
                Some(<T::Wide as Scalar>::KIND),
                "{}",
                T::KIND
            );
        }

        check::<i8>();
        check::<u8>();
        check::<i16>();
        check::<u16>();
        check::<i32>();
        check::<u32>();
        check::<i64>();
        check::<u64>();
        check::<isize>();
        check::<usize>();
        check::<f16>();

        assert_eq!(Decimal::KIND.preferred_wide(), None);
    }
}
