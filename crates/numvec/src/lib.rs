//! Fixed-size numeric vectors for graphics, physics and general numeric code.
//!
//! # Overview
//!
//! The central type is [`Vector<T, N>`], a plain `N`-element value type. Aliases are provided for
//! the 2-, 3- and 4-dimensional case ([`Vec2`], [`Vec3`], [`Vec4`]), as well as shorthands for
//! commonly used element types ([`Vec2f`], [`Vec4d`], [`Vec3h`], ...).
//!
//! Vectors can be instantiated with any of the supported *scalar kinds* (see [`Scalar`] and
//! [`ScalarKind`]): [`i8`] through [`u64`], [`isize`] and [`usize`], [`f16`], [`f32`], [`f64`]
//! and [`Decimal`]. On top of the element-wise arithmetic every vector has, each kind opts into a
//! set of operations through small per-kind traits:
//!
//! - [`Widen`]: explicit conversion to the kind's preferred floating-point type. Integer vectors
//!   and [`f16`] vectors can be converted to [`f32`] or [`f64`] vectors via [`Vector::widen`] or
//!   the matching [`From`] impl. Conversions are never applied implicitly.
//! - [`Cross`]: the 2D cross product (a scalar) and the 3D cross product (a vector). Narrow integer
//!   kinds compute at `i32` width and wrap back down to their own width.
//! - [`Fractional`]: [`Vector::saturate`], [`Vector::floor`] and [`Vector::ceil`]. Only kinds with
//!   a fractional representation implement it, so calling these on an integer vector does not
//!   compile.
//!
//! # Goals & Non-Goals
//!
//! - Dimensions are specified via const generics. Dynamically-sized vectors are out of scope.
//! - A single, unpadded data layout: a `Vector<T, N>` has the same layout as `[T; N]`. No SIMD
//!   alignment guarantees are made.
//! - The scalar kind is always fixed at compile time. There is no runtime-selected element type.
//! - Matrices, quaternions and transforms are not part of this library.

mod cross;
mod error;
mod round;
mod scalar;
mod traits;
mod vector;
mod widen;

pub use cross::*;
pub use error::*;
pub use round::*;
pub use scalar::*;
pub use traits::*;
pub use vector::*;
pub use widen::*;

pub use half::f16;
pub use rust_decimal::Decimal;
