use thiserror::Error;

/// Errors returned when building a [`Vector`][crate::Vector] from unchecked input.
///
/// None of the vector operations themselves can fail. This error is only produced by the slice
/// ([`TryFrom`]) and string ([`FromStr`][std::str::FromStr]) conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VectorError {
    /// The input had the wrong number of elements.
    #[error("expected {expected} elements, found {found}")]
    Length { expected: usize, found: usize },

    /// A vector literal was not enclosed in parentheses.
    #[error("vector literal must be enclosed in parentheses")]
    MissingParens,

    /// One of the elements of a vector literal could not be parsed.
    #[error("invalid element at index {index}: {message}")]
    Element { index: usize, message: String },
}
