//! The set of supported scalar kinds and their fixed properties.

use std::fmt;

use half::f16;
use rust_decimal::Decimal;

/// Identifies one of the scalar kinds a [`Vector`][crate::Vector] can be instantiated with.
///
/// This mirrors the type-level information carried by the [`Scalar`] trait, and is mostly useful
/// for introspection, diagnostics and tests. The properties returned by its methods are fixed and
/// agree with the trait impls (for example, [`ScalarKind::preferred_wide`] returns the kind of
/// [`Widen::Wide`][crate::Widen::Wide]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ScalarKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    /// Pointer-sized signed integer ([`isize`]).
    ISize,
    /// Pointer-sized unsigned integer ([`usize`]).
    USize,
    /// IEEE 754 binary16 ([`f16`]).
    F16,
    F32,
    F64,
    /// 128-bit decimal floating point ([`Decimal`]).
    Decimal,
}

impl ScalarKind {
    /// All scalar kinds, ordered by category and then by width.
    pub const ALL: [ScalarKind; 14] = [
        Self::I8,
        Self::U8,
        Self::I16,
        Self::U16,
        Self::I32,
        Self::U32,
        Self::I64,
        Self::U64,
        Self::ISize,
        Self::USize,
        Self::F16,
        Self::F32,
        Self::F64,
        Self::Decimal,
    ];

    /// Returns the storage width of this kind in bits.
    ///
    /// The pointer-sized kinds report the width of the compilation target.
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 | Self::U8 => 8,
            Self::I16 | Self::U16 | Self::F16 => 16,
            Self::I32 | Self::U32 | Self::F32 => 32,
            Self::I64 | Self::U64 | Self::F64 => 64,
            Self::ISize | Self::USize => usize::BITS,
            Self::Decimal => 128,
        }
    }

    /// Returns whether values of this kind can be negative.
    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::USize
        )
    }

    /// Returns whether this is one of the integer kinds.
    pub const fn is_integer(self) -> bool {
        !matches!(self, Self::F16 | Self::F32 | Self::F64 | Self::Decimal)
    }

    /// Returns whether this kind supports the range and rounding operations
    /// ([`Vector::saturate`][crate::Vector::saturate], [`Vector::floor`][crate::Vector::floor],
    /// [`Vector::ceil`][crate::Vector::ceil]).
    ///
    /// [`ScalarKind::F16`] has a fractional representation, but is a storage format only and does
    /// not support these operations.
    pub const fn has_fraction(self) -> bool {
        matches!(self, Self::F32 | Self::F64 | Self::Decimal)
    }

    /// Returns the floating-point kind this kind explicitly widens to, if any.
    ///
    /// The mapping depends only on the category and bit width of the kind: integers up to 32 bits
    /// and [`ScalarKind::F16`] widen to [`ScalarKind::F32`], 64-bit integers widen to
    /// [`ScalarKind::F64`]. [`ScalarKind::F32`], [`ScalarKind::F64`] and [`ScalarKind::Decimal`]
    /// have no preferred wide kind.
    pub const fn preferred_wide(self) -> Option<ScalarKind> {
        match self {
            Self::F32 | Self::F64 | Self::Decimal => None,
            Self::F16 => Some(Self::F32),
            _ if self.bits() <= 32 => Some(Self::F32),
            _ => Some(Self::F64),
        }
    }

    /// Returns the name of the Rust type implementing this kind.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::ISize => "isize",
            Self::USize => "usize",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Decimal => "Decimal",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.type_name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A scalar kind that vectors in this crate are instantiated with.
///
/// This trait is sealed: it is implemented for exactly the types listed in [`ScalarKind`], and
/// cannot be implemented outside of this crate.
pub trait Scalar: sealed::Sealed + Copy + PartialEq + PartialOrd + fmt::Debug + 'static {
    /// The kind tag of this type.
    const KIND: ScalarKind;
}

macro_rules! scalars {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;
            }
        )+
    };
}

scalars! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    isize => ISize,
    usize => USize,
    f16 => F16,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signedness() {
        assert!(i8::KIND.is_signed());
        assert!(isize::KIND.is_signed());
        assert!(f16::KIND.is_signed());
        assert!(Decimal::KIND.is_signed());
        assert!(!u8::KIND.is_signed());
        assert!(!usize::KIND.is_signed());
    }

    #[test]
    fn fraction() {
        let fractional = ScalarKind::ALL
            .into_iter()
            .filter(|kind| kind.has_fraction())
            .collect::<Vec<_>>();
        assert_eq!(
            fractional,
            [ScalarKind::F32, ScalarKind::F64, ScalarKind::Decimal]
        );
        assert!(ScalarKind::ALL
            .into_iter()
            .filter(|kind| kind.is_integer())
            .all(|kind| !kind.has_fraction()));
    }

    #[test]
    fn preferred_wide() {
        use ScalarKind::*;

        for kind in [I8, U8, I16, U16, I32, U32, F16] {
            assert_eq!(kind.preferred_wide(), Some(F32), "{kind}");
        }
        for kind in [I64, U64] {
            assert_eq!(kind.preferred_wide(), Some(F64), "{kind}");
        }
        for kind in [F32, F64, Decimal] {
            assert_eq!(kind.preferred_wide(), None, "{kind}");
        }

        let pointer_wide = if usize::BITS > 32 { F64 } else { F32 };
        assert_eq!(ISize.preferred_wide(), Some(pointer_wide));
        assert_eq!(USize.preferred_wide(), Some(pointer_wide));
    }

    #[test]
    fn bits() {
        assert_eq!(u8::KIND.bits(), 8);
        assert_eq!(f16::KIND.bits(), 16);
        assert_eq!(u32::KIND.bits(), 32);
        assert_eq!(i64::KIND.bits(), 64);
        assert_eq!(usize::KIND.bits(), usize::BITS);
        assert_eq!(Decimal::KIND.bits(), 128);
    }

    #[test]
    fn display() {
        assert_eq!(ScalarKind::U16.to_string(), "u16");
        assert_eq!(ScalarKind::Decimal.to_string(), "Decimal");
    }
}
