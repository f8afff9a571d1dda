use std::ops;

use half::f16;
use rust_decimal::Decimal;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// The floating-point kinds implement this trait in terms of [`f32::min`] and [`f32::max`] (or
/// their equivalents), so a `NaN` operand is ignored in favor of the other one. Integer kinds and
/// [`Decimal`] implement it in terms of [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Unlike signed arithmetic, this does not require [`ops::Neg`], so unsigned integer kinds are
/// numbers too.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_consts!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);

macro_rules! float_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    <$types>::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    <$types>::max(self, other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    <$types>::sqrt(self)
                }
            }
        )+
    };
}
float_consts!(f32, f64);

impl Zero for f16 {
    const ZERO: Self = f16::ZERO;
}
impl One for f16 {
    const ONE: Self = f16::ONE;
}
impl MinMax for f16 {
    fn min(self, other: Self) -> Self {
        if self.is_nan() || other < self {
            other
        } else {
            self
        }
    }

    fn max(self, other: Self) -> Self {
        if self.is_nan() || other > self {
            other
        } else {
            self
        }
    }
}
impl Sqrt for f16 {
    fn sqrt(self) -> Self {
        f16::from_f32(self.to_f32().sqrt())
    }
}

impl Zero for Decimal {
    const ZERO: Self = Decimal::ZERO;
}
impl One for Decimal {
    const ONE: Self = Decimal::ONE;
}
impl MinMax for Decimal {
    fn min(self, other: Self) -> Self {
        Ord::min(self, other)
    }

    fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }
}
