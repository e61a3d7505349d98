//! Prime-field arithmetic over the two Pasta moduli.
//!
//! A [`FieldElement<M>`] is an integer in $[0, m)$ for the modulus chosen by
//! the marker `M`. Every operation computes the exact integer result first
//! (sum, signed difference, or full product) and then normalizes it with
//! [`canonical_modulo`], so no value outside $[0, m)$ is ever observable.
//!
//! Exponentiation, inversion and square roots live in [`exp`].

pub mod exp;

use core::{
    cmp::Ordering,
    fmt,
    hash::Hash,
    marker::PhantomData,
    ops::{Add, Mul, Neg, Sub},
};

use rand::{RngCore, SeedableRng as _, rngs::StdRng};

use crate::{
    bigint::{Integer, NUM_BYTES, U256, canonical_modulo},
    constants,
    error::ArithmeticError,
};

/// Parameters of a prime field with 2-adicity 32.
pub trait PrimeModulus:
    Clone + Copy + fmt::Debug + Default + Eq + Hash + Ord + Send + Sync + 'static
{
    /// Name used in traces and debug output.
    const NAME: &'static str;

    /// The prime $m$.
    const MODULUS: U256;

    /// The odd $t$ with $m - 1 = t \cdot 2^{32}$.
    const ODD_FACTOR: U256;

    /// A primitive $2^{32}$-th root of unity.
    const TWO_ADIC_ROOT: U256;
}

/// Marker for $\mathbb{F}_p$, the Pallas base field and Vesta scalar field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PallasBase;

impl PrimeModulus for PallasBase {
    const MODULUS: U256 = constants::FP_MODULUS;
    const NAME: &'static str = "pasta_fp";
    const ODD_FACTOR: U256 = constants::FP_ODD_FACTOR;
    const TWO_ADIC_ROOT: U256 = constants::FP_TWO_ADIC_ROOT;
}

/// Marker for $\mathbb{F}_q$, the Vesta base field and Pallas scalar field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VestaBase;

impl PrimeModulus for VestaBase {
    const MODULUS: U256 = constants::FQ_MODULUS;
    const NAME: &'static str = "pasta_fq";
    const ODD_FACTOR: U256 = constants::FQ_ODD_FACTOR;
    const TWO_ADIC_ROOT: U256 = constants::FQ_TWO_ADIC_ROOT;
}

/// An element of $\mathbb{F}_p$.
pub type Fp = FieldElement<PallasBase>;

/// An element of $\mathbb{F}_q$.
pub type Fq = FieldElement<VestaBase>;

/// A canonical residue modulo `M::MODULUS`.
///
/// Crosses any external boundary as 32 little-endian bytes; decoding rejects
/// encodings at or above the modulus.
#[expect(
    clippy::module_name_repetitions,
    reason = "reads as a noun at the crate root"
)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[u8; 32]", try_from = "[u8; 32]", bound = "")
)]
pub struct FieldElement<M: PrimeModulus> {
    value: U256,
    modulus: PhantomData<M>,
}

impl<M: PrimeModulus> FieldElement<M> {
    /// Zero.
    pub const ZERO: Self = Self::from_canonical(U256::ZERO);

    /// One.
    pub const ONE: Self = Self::from_canonical(U256::ONE);

    /// Wrap a value the caller knows is below the modulus.
    pub(crate) const fn from_canonical(value: U256) -> Self {
        Self {
            value,
            modulus: PhantomData,
        }
    }

    fn reduce(value: &Integer) -> Self {
        Self::from_canonical(canonical_modulo(value, &M::MODULUS))
    }

    /// The modulus as an integer.
    #[must_use]
    pub const fn modulus() -> U256 {
        M::MODULUS
    }

    /// Bit size of the modulus.
    #[must_use]
    pub const fn size_in_bits() -> u32 {
        constants::SIZE_IN_BITS
    }

    /// Accept an integer in $[0, m)$.
    pub fn from_bigint(value: U256) -> Result<Self, ArithmeticError> {
        if value < M::MODULUS {
            Ok(Self::from_canonical(value))
        } else {
            Err(ArithmeticError::NonCanonical)
        }
    }

    /// The canonical integer representative.
    #[must_use]
    pub const fn to_bigint(&self) -> U256 {
        self.value
    }

    /// Decode 32 little-endian bytes, rejecting non-canonical encodings.
    pub fn from_bytes(bytes: &[u8; NUM_BYTES]) -> Result<Self, ArithmeticError> {
        Self::from_bigint(U256::from_le_bytes(bytes))
    }

    /// Decode a byte slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ArithmeticError> {
        let array = <&[u8; NUM_BYTES]>::try_from(bytes).map_err(|_err| ArithmeticError::Length {
            expected: NUM_BYTES,
            actual: bytes.len(),
        })?;
        Self::from_bytes(array)
    }

    /// 32-byte little-endian encoding.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; NUM_BYTES] {
        self.value.to_le_bytes()
    }

    /// Embed a machine integer; negative values wrap around the modulus.
    #[must_use]
    pub fn from_i64(int: i64) -> Self {
        let magnitude = U256::from_u64(int.unsigned_abs()).into();
        if int < 0 {
            Self::reduce(&Integer::negative(magnitude))
        } else {
            Self::reduce(&Integer::positive(magnitude))
        }
    }

    /// Parse a decimal string naming an integer in $[0, m)$.
    pub fn from_decimal(decimal: &str) -> Result<Self, ArithmeticError> {
        Self::from_bigint(decimal.parse()?)
    }

    /// Whether this is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// $a^2 \bmod m$.
    #[must_use]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// $2a \bmod m$.
    #[must_use]
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// $a \cdot b^{-1}$; fails when $b = 0$.
    pub fn div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        Ok(*self * rhs.inverse()?)
    }

    /// $a^{e}$ with $e$ reduced modulo $m - 1$ first.
    #[must_use]
    pub fn pow(&self, exponent: &U256) -> Self {
        exp::pow(self, exponent)
    }

    /// Multiplicative inverse by the extended Euclidean algorithm.
    pub fn inverse(&self) -> Result<Self, ArithmeticError> {
        exp::inverse(self)
    }

    /// Euler's criterion; zero counts as a square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        exp::is_square(self)
    }

    /// A square root by Tonelli-Shanks, or `None` for a non-residue.
    #[must_use]
    pub fn sqrt(&self) -> Option<Self> {
        exp::sqrt(self)
    }

    /// The fixed primitive $2^{32}$-th root of unity.
    #[must_use]
    pub const fn two_adic_root_of_unity() -> Self {
        Self::from_canonical(M::TWO_ADIC_ROOT)
    }

    /// Generator of the multiplicative subgroup of order $2^{k}$.
    pub fn domain_generator(log2_size: u32) -> Result<Self, ArithmeticError> {
        exp::domain_generator(log2_size)
    }

    /// Uniform sample: 255-bit candidates, rejected until one is below the
    /// modulus.
    pub fn random(rng: &mut impl RngCore) -> Self {
        loop {
            let mut bytes = [0u8; NUM_BYTES];
            rng.fill_bytes(&mut bytes);
            if let Some(top) = bytes.last_mut() {
                *top &= 0x7f;
            }
            if let Ok(element) = Self::from_bytes(&bytes) {
                return element;
            }
        }
    }

    /// Deterministic sample from a seeded [`StdRng`].
    #[must_use]
    pub fn rng(seed: u64) -> Self {
        Self::random(&mut StdRng::seed_from_u64(seed))
    }
}

impl<M: PrimeModulus> Default for FieldElement<M> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<M: PrimeModulus> Ord for FieldElement<M> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<M: PrimeModulus> PartialOrd for FieldElement<M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<M: PrimeModulus> fmt::Debug for FieldElement<M> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}({})", M::NAME, self.value)
    }
}

impl<M: PrimeModulus> fmt::Display for FieldElement<M> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, fmt)
    }
}

impl<M: PrimeModulus> From<u64> for FieldElement<M> {
    fn from(word: u64) -> Self {
        Self::reduce(&U256::from_u64(word).into())
    }
}

impl<M: PrimeModulus> From<FieldElement<M>> for [u8; NUM_BYTES] {
    fn from(element: FieldElement<M>) -> Self {
        element.to_bytes()
    }
}

impl<M: PrimeModulus> TryFrom<[u8; NUM_BYTES]> for FieldElement<M> {
    type Error = ArithmeticError;

    fn try_from(bytes: [u8; NUM_BYTES]) -> Result<Self, Self::Error> {
        Self::from_bytes(&bytes)
    }
}

impl<M: PrimeModulus> Add for FieldElement<M> {
    type Output = Self;

    /// $a + b \bmod m$.
    fn add(self, rhs: Self) -> Self {
        Self::reduce(&self.value.widening_add(&rhs.value).into())
    }
}

impl<M: PrimeModulus> Sub for FieldElement<M> {
    type Output = Self;

    /// $a - b \bmod m$, through a signed intermediate.
    fn sub(self, rhs: Self) -> Self {
        Self::reduce(&Integer::difference(&self.value, &rhs.value))
    }
}

impl<M: PrimeModulus> Mul for FieldElement<M> {
    type Output = Self;

    /// $a \cdot b \bmod m$.
    fn mul(self, rhs: Self) -> Self {
        Self::reduce(&self.value.widening_mul(&rhs.value).into())
    }
}

impl<M: PrimeModulus> Neg for FieldElement<M> {
    type Output = Self;

    /// $-a \bmod m$. Zero negates to zero.
    fn neg(self) -> Self {
        Self::reduce(&Integer::difference(&U256::ZERO, &self.value))
    }
}
