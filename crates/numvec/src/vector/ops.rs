//! Implementations of `std::ops` and comparison traits.
//!
//! All operators act element-wise and stay within the element type: no operator ever mixes scalar
//! kinds or converts between them.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise logical negation.
impl<T, const N: usize> Not for Vector<T, N>
where
    T: Not,
{
    type Output = Vector<T::Output, N>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

/// Implements a binary operator and its assigning form element-wise between two vectors.
macro_rules! elementwise {
    ($(#[doc = $doc:literal] $op:ident::$method:ident, $assign:ident::$assign_method:ident;)+) => {
        $(
            #[doc = $doc]
            impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
            where
                T: $op,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l.$method(r))
                }
            }

            #[doc = $doc]
            impl<T, const N: usize> $assign<Vector<T, N>> for Vector<T, N>
            where
                T: $assign,
            {
                fn $assign_method(&mut self, rhs: Vector<T, N>) {
                    self.as_mut_slice()
                        .iter_mut()
                        .zip(rhs.into_array())
                        .for_each(|(lhs, rhs)| lhs.$assign_method(rhs));
                }
            }
        )+
    };
}

/// Implements a binary operator and its assigning form between a vector and a scalar.
macro_rules! scalar {
    ($(#[doc = $doc:literal] $op:ident::$method:ident, $assign:ident::$assign_method:ident;)+) => {
        $(
            #[doc = $doc]
            impl<T, const N: usize> $op<T> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem.$method(rhs))
                }
            }

            #[doc = $doc]
            impl<T, const N: usize> $assign<T> for Vector<T, N>
            where
                T: $assign + Copy,
            {
                fn $assign_method(&mut self, rhs: T) {
                    self.as_mut_slice()
                        .iter_mut()
                        .for_each(|lhs| lhs.$assign_method(rhs));
                }
            }
        )+
    };
}

elementwise! {
    /// Element-wise addition.
    Add::add, AddAssign::add_assign;
    /// Element-wise subtraction.
    Sub::sub, SubAssign::sub_assign;
    /// Element-wise multiplication.
    Mul::mul, MulAssign::mul_assign;
    /// Element-wise division.
    Div::div, DivAssign::div_assign;
    /// Element-wise remainder.
    Rem::rem, RemAssign::rem_assign;
    /// Element-wise bitwise and.
    BitAnd::bitand, BitAndAssign::bitand_assign;
    /// Element-wise bitwise or.
    BitOr::bitor, BitOrAssign::bitor_assign;
    /// Element-wise bitwise xor.
    BitXor::bitxor, BitXorAssign::bitxor_assign;
}

// NB: supporting both vector-vector and vector-scalar forms of `*` and `/` rules out a more generic
// `Mul<U> for Vector<T, N> where T: Mul<U>` impl. Mixed-kind arithmetic is not wanted anyway.
scalar! {
    /// Vector-Scalar multiplication (scaling).
    Mul::mul, MulAssign::mul_assign;
    /// Vector-Scalar division (scaling).
    Div::div, DivAssign::div_assign;
}
