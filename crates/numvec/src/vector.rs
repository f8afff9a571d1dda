use std::{array, fmt, str::FromStr};

use half::f16;

use crate::{
    traits::{Number, Sqrt},
    MinMax, One, VectorError, Zero,
};

mod approx_eq;
mod ops;
#[cfg(feature = "serde")]
mod serialize;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// A 2-dimensional vector with [`f16`] elements.
pub type Vec2h = Vec2<f16>;
/// A 3-dimensional vector with [`f16`] elements.
pub type Vec3h = Vec3<f16>;
/// A 4-dimensional vector with [`f16`] elements.
pub type Vec4h = Vec4<f16>;

/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;

/// A 2-dimensional vector with [`u32`] elements.
pub type Vec2u = Vec2<u32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type Vec3u = Vec3<u32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type Vec4u = Vec4<u32>;

/// An `N`-element vector storing elements of type `T`.
///
/// A [`Vector`] is a plain value: it has the same layout as `[T; N]`, is [`Copy`] whenever `T` is,
/// and equality and hashing are purely structural.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices of
///   the right length using their [`TryFrom`] implementation.
/// - Vectors can be parsed from their [`Display`][fmt::Display] representation via [`FromStr`].
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with 2 to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W`
///   are unit vectors pointing in the given direction.
///
/// # Element Access
///
/// - For vectors with 2 to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, and `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], [`Vector::into_array`] and the [`AsRef`] and
///   [`AsMut`] impls expose the underlying elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Conversions and Kind-Specific Operations
///
/// Vectors never convert between element types implicitly. Integer and [`f16`] vectors can be
/// explicitly widened to floating-point vectors with [`Vector::widen`] (see [`Widen`]). The cross
/// product is available for kinds implementing [`Cross`], and [`Vector::saturate`],
/// [`Vector::floor`] and [`Vector::ceil`] for kinds implementing [`Fractional`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`Widen`]: crate::Widen
/// [`Cross`]: crate::Cross
/// [`Fractional`]: crate::Fractional
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = Vector::splat(2u16);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = Vector::from_fn(|i| i as i8 - 1);
    /// assert_eq!(v, vec4(-1, 0, 1, 2));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// The closure may change the element type. For the conversions that this crate defines
    /// between scalar kinds, prefer [`Vector::widen`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let a = vec2(1u8, 2);
    /// let b = vec2(-1.5, 0.5);
    /// assert_eq!(a.zip(b), vec2((1, -1.5), (2, 0.5)));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_array()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often shorter
    /// and requires no type annotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// The result is computed in the element type, with that type's overflow behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// assert_eq!(vec2(4u32, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, Vec3d::Z);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        self.zip(other).map(|(a, b)| a.min(b))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        self.zip(other).map(|(a, b)| a.max(b))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// Also see [`Vector::saturate`] for clamping to `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = vec3(-5i16, 5, 50);
    /// assert_eq!(v.clamp(Vector::splat(0), Vector::splat(10)), vec3(0, 5, 10));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        vec3(x, y, value)
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        vec2(x, y)
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        vec4(x, y, z, value)
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        vec3(x, y, z)
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

/// Copies the elements of a slice of length `N`.
///
/// # Examples
///
/// ```
/// # use numvec::*;
/// let v = Vec3u::try_from(&[1, 2, 3][..]).unwrap();
/// assert_eq!(v, vec3(1, 2, 3));
///
/// let err = Vec3u::try_from(&[1, 2][..]).unwrap_err();
/// assert_eq!(err, VectorError::Length { expected: 3, found: 2 });
/// ```
impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = VectorError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        <[T; N]>::try_from(slice)
            .map(Self)
            .map_err(|_| VectorError::Length {
                expected: N,
                found: slice.len(),
            })
    }
}

/// Parses the [`Display`][fmt::Display] representation of a vector, `(x, y, ...)`.
///
/// Whitespace around the parentheses and elements is ignored.
///
/// # Examples
///
/// ```
/// # use numvec::*;
/// let v: Vec2f = "(1.5, -2)".parse().unwrap();
/// assert_eq!(v, vec2(1.5, -2.0));
///
/// let v: Vec4<u8> = " ( 1,2 , 3,4 ) ".parse().unwrap();
/// assert_eq!(v.to_string().parse::<Vec4<u8>>(), Ok(v));
///
/// assert_eq!("1, 2".parse::<Vec2i>(), Err(VectorError::MissingParens));
/// ```
impl<T: FromStr, const N: usize> FromStr for Vector<T, N>
where
    T::Err: fmt::Display,
{
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or(VectorError::MissingParens)?;

        let parts = if inner.trim().is_empty() {
            Vec::new()
        } else {
            inner.split(',').collect::<Vec<_>>()
        };
        if parts.len() != N {
            return Err(VectorError::Length {
                expected: N,
                found: parts.len(),
            });
        }

        let elems = parts
            .into_iter()
            .enumerate()
            .map(|(index, part)| {
                part.trim().parse().map_err(|e: T::Err| VectorError::Element {
                    index,
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<T>, _>>()?;

        <[T; N]>::try_from(elems)
            .map(Self)
            .map_err(|elems| VectorError::Length {
                expected: N,
                found: elems.len(),
            })
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
