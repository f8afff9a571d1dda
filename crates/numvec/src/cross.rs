//! Cross products of 2- and 3-dimensional vectors.

use half::f16;

use crate::{vec3, Scalar, Vec2, Vec3};

/// Scalar kinds that define a cross product.
///
/// The cross product never changes the scalar kind and never fails:
///
/// - Integer kinds narrower than 32 bits compute the products and the difference at `i32` width
///   (wrapping on overflow), and then truncate the result back down to `Self`. Overflowing results
///   are *not* saturated: `(100, 1) × (1, 100)` in [`i8`] is `9999 as i8`, which is `15`.
/// - Integer kinds of 32 bits and wider use their native wrapping multiplication and subtraction.
/// - Floating-point kinds use regular IEEE 754 arithmetic.
///
/// [`Decimal`][crate::Decimal] does not implement this trait, since its arithmetic panics on
/// overflow.
pub trait Cross: Scalar {
    /// Computes `lx * ry - ly * rx` according to the kind's arithmetic rules.
    fn cross(lx: Self, ly: Self, rx: Self, ry: Self) -> Self;
}

macro_rules! cross_promoted {
    ($($ty:ty),+) => {
        $(
            impl Cross for $ty {
                #[inline]
                fn cross(lx: Self, ly: Self, rx: Self, ry: Self) -> Self {
                    let [lx, ly, rx, ry] = [lx, ly, rx, ry].map(i32::from);
                    lx.wrapping_mul(ry).wrapping_sub(ly.wrapping_mul(rx)) as $ty
                }
            }
        )+
    };
}

macro_rules! cross_wrapping {
    ($($ty:ty),+) => {
        $(
            impl Cross for $ty {
                #[inline]
                fn cross(lx: Self, ly: Self, rx: Self, ry: Self) -> Self {
                    lx.wrapping_mul(ry).wrapping_sub(ly.wrapping_mul(rx))
                }
            }
        )+
    };
}

macro_rules! cross_float {
    ($($ty:ty),+) => {
        $(
            impl Cross for $ty {
                #[inline]
                fn cross(lx: Self, ly: Self, rx: Self, ry: Self) -> Self {
                    lx * ry - ly * rx
                }
            }
        )+
    };
}

cross_promoted!(i8, u8, i16, u16);
cross_wrapping!(i32, u32, i64, u64, isize, usize);
cross_float!(f16, f32, f64);

impl<T: Cross> Vec2<T> {
    /// Computes the 2D cross product of `self` and `other`.
    ///
    /// The result is the signed area of the parallelogram spanned by both vectors, or equivalently
    /// the Z coordinate of the 3D cross product of both vectors extended with Z=0. It is positive if
    /// `other` points counterclockwise of `self`.
    ///
    /// See [`Cross`] for how overflow is handled for integer kinds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// assert_eq!(Vec2f::X.cross(Vec2f::Y), 1.0);
    /// assert_eq!(Vec2f::Y.cross(Vec2f::X), -1.0);
    /// assert_eq!(vec2(3, 4).cross(vec2(5, 6)), -2);
    ///
    /// // Narrow kinds wrap.
    /// assert_eq!(vec2(100i8, 1).cross(vec2(1, 100)), 15);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> T {
        let [lx, ly] = self.into_array();
        let [rx, ry] = other.into_array();
        T::cross(lx, ly, rx, ry)
    }

    /// Computes the 2D cross product of `self` and `other`, taking both by reference.
    ///
    /// The result is identical to the by-value form.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let (a, b) = (vec2(2u32, 7), vec2(3, 1));
    /// assert_eq!(a.cross_ref(&b), a.cross(b));
    /// ```
    #[inline]
    pub fn cross_ref(&self, other: &Self) -> T {
        T::cross(self[0], self[1], other[0], other[1])
    }
}

impl<T: Cross> Vec3<T> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// Each component is computed with the same per-kind rules as the 2D cross product (see
    /// [`Cross`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        vec3(
            T::cross(a2, a3, b2, b3),
            T::cross(a3, a1, b3, b1),
            T::cross(a1, a2, b1, b2),
        )
    }
}
