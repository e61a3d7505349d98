//! Failure modes of the arithmetic core.
//!
//! Every fallible operation returns [`ArithmeticError`]. A square root that
//! does not exist is *not* an error: [`FieldElement::sqrt`] returns `None`.
//!
//! [`FieldElement::sqrt`]: crate::field::FieldElement::sqrt

/// Errors surfaced by big-integer encoding and field arithmetic.
///
/// All operations are pure and deterministic, so retrying a failed call with
/// the same input always fails the same way.
#[expect(
    clippy::module_name_repetitions,
    reason = "reads as a noun at the crate root"
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// The value needs more bytes than the fixed length allows.
    #[error("integer does not fit into {length} bytes")]
    Overflow {
        /// Requested byte length.
        length: usize,
    },

    /// Inversion of zero, or the Euclidean algorithm ended with a gcd other
    /// than one.
    #[error("element has no multiplicative inverse")]
    Uninvertible,

    /// An encoded integer is not below the field modulus.
    #[error("integer is not a canonical field element")]
    NonCanonical,

    /// A byte array at the boundary has the wrong length.
    #[error("expected {expected} bytes, got {actual}")]
    Length {
        /// Required length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// A numeral string is empty or contains a character that is not a digit
    /// in its base.
    #[error("invalid numeral string")]
    InvalidNumeral,

    /// A numeral base outside `2..=36`.
    #[error("unsupported numeral base {radix}")]
    InvalidRadix {
        /// Requested base.
        radix: u32,
    },

    /// An evaluation domain larger than the two-adic subgroup was requested.
    #[error("log2 size of evaluation domain must be in [0, 32], got {log2_size}")]
    DomainTooLarge {
        /// Requested log2 domain size.
        log2_size: u32,
    },

    /// Integer division by zero.
    #[error("division by zero")]
    DivisionByZero,
}
