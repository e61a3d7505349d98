//! Fixed-width unsigned integers and the one reduction all field arithmetic
//! goes through.
//!
//! [`U256`] holds four little-endian `u64` limbs and is wide enough for any
//! canonical field element. Products land in [`U512`]. Intermediates that may
//! go below zero (a difference, a Bezout coefficient) are carried as a signed
//! [`Integer`] and folded back into $[0, m)$ by [`canonical_modulo`].

use alloc::{string::String, vec::Vec};
use core::{
    cmp::Ordering,
    fmt::{self, Write as _},
    str::FromStr,
};

use bitvec::{order::Lsb0, view::BitView as _};

use crate::error::ArithmeticError;

/// Limbs in a [`U256`].
pub const NUM_LIMBS: usize = 4;

/// Bytes in one limb.
pub const BYTES_PER_LIMB: usize = 8;

/// Bytes in the fixed little-endian encoding of a [`U256`].
pub const NUM_BYTES: usize = 32;

/// Largest power of ten that fits a limb, used to print decimals in chunks
/// of 19 digits.
const DECIMAL_CHUNK: u64 = 10u64.pow(19);

#[expect(
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    reason = "keeps the low limb of a double-width value"
)]
const fn lo(wide: u128) -> u64 {
    wide as u64
}

const fn hi(wide: u128) -> u64 {
    lo(wide >> 64)
}

/// `lhs + rhs + carry`, returning the sum limb and the carry out.
fn adc(lhs: u64, rhs: u64, carry: u64) -> (u64, u64) {
    let sum = u128::from(lhs) + u128::from(rhs) + u128::from(carry);
    (lo(sum), hi(sum))
}

/// `lhs - rhs - borrow`, returning the difference limb and the borrow out.
fn sbb(lhs: u64, rhs: u64, borrow: u64) -> (u64, u64) {
    let (first, under_rhs) = lhs.overflowing_sub(rhs);
    let (second, under_borrow) = first.overflowing_sub(borrow);
    (second, u64::from(under_rhs | under_borrow))
}

/// `acc + lhs * rhs + carry`, which never exceeds $2^{128} - 1$.
fn mac(acc: u64, lhs: u64, rhs: u64, carry: u64) -> (u64, u64) {
    let wide = u128::from(acc) + u128::from(lhs) * u128::from(rhs) + u128::from(carry);
    (lo(wide), hi(wide))
}

/// A 256-bit unsigned integer, four little-endian `u64` limbs.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U256([u64; NUM_LIMBS]);

impl U256 {
    /// Zero.
    pub const ZERO: Self = Self([0; NUM_LIMBS]);

    /// One.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// Build from little-endian limbs.
    #[must_use]
    pub const fn from_limbs(limbs: [u64; NUM_LIMBS]) -> Self {
        Self(limbs)
    }

    /// The little-endian limbs.
    #[must_use]
    pub const fn limbs(&self) -> &[u64; NUM_LIMBS] {
        &self.0
    }

    /// Widen a single word.
    #[must_use]
    pub const fn from_u64(word: u64) -> Self {
        Self([word, 0, 0, 0])
    }

    /// Decode 32 little-endian bytes.
    #[must_use]
    pub fn from_le_bytes(bytes: &[u8; NUM_BYTES]) -> Self {
        let mut limbs = [0u64; NUM_LIMBS];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(BYTES_PER_LIMB)) {
            let mut word = [0u8; BYTES_PER_LIMB];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }
        Self(limbs)
    }

    /// Encode as 32 little-endian bytes.
    #[must_use]
    pub fn to_le_bytes(&self) -> [u8; NUM_BYTES] {
        let mut bytes = [0u8; NUM_BYTES];
        for (chunk, limb) in bytes.chunks_exact_mut(BYTES_PER_LIMB).zip(&self.0) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        bytes
    }

    /// Whether every limb is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Whether the low bit is set.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.bit(0)
    }

    /// Test bit `index`, counting from the least significant bit. Bits past
    /// 255 read as zero.
    #[must_use]
    pub fn bit(&self, index: usize) -> bool {
        self.0
            .view_bits::<Lsb0>()
            .get(index)
            .is_some_and(|bit| *bit)
    }

    /// Position of the highest set bit plus one; zero for zero.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0
            .view_bits::<Lsb0>()
            .last_one()
            .map_or(0, |index| index + 1)
    }

    /// Bits from least to most significant, stopping at the highest set bit.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0
            .view_bits::<Lsb0>()
            .iter()
            .by_vals()
            .take(self.bit_len())
    }

    /// Sum and whether it carried out of 256 bits.
    #[must_use]
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; NUM_LIMBS];
        let mut carry = 0;
        for ((slot, &lhs_limb), &rhs_limb) in out.iter_mut().zip(&self.0).zip(&rhs.0) {
            let (sum, next) = adc(lhs_limb, rhs_limb, carry);
            *slot = sum;
            carry = next;
        }
        (Self(out), carry != 0)
    }

    /// Difference and whether it borrowed past zero.
    #[must_use]
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; NUM_LIMBS];
        let mut borrow = 0;
        for ((slot, &lhs_limb), &rhs_limb) in out.iter_mut().zip(&self.0).zip(&rhs.0) {
            let (diff, next) = sbb(lhs_limb, rhs_limb, borrow);
            *slot = diff;
            borrow = next;
        }
        (Self(out), borrow != 0)
    }

    /// Difference modulo $2^{256}$.
    #[must_use]
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Full 257-bit sum.
    #[must_use]
    pub fn widening_add(&self, rhs: &Self) -> U512 {
        let (sum, carry) = self.overflowing_add(rhs);
        let mut wide = U512::from(sum);
        if let Some(slot) = wide.0.get_mut(NUM_LIMBS) {
            *slot = u64::from(carry);
        }
        wide
    }

    /// Full 512-bit product, schoolbook.
    #[must_use]
    pub fn widening_mul(&self, rhs: &Self) -> U512 {
        let mut out = [0u64; 2 * NUM_LIMBS];
        for (offset, &lhs_limb) in self.0.iter().enumerate() {
            let mut carry = 0;
            for (slot, &rhs_limb) in out.iter_mut().skip(offset).zip(&rhs.0) {
                let (limb, next) = mac(*slot, lhs_limb, rhs_limb, carry);
                *slot = limb;
                carry = next;
            }
            if let Some(slot) = out.get_mut(offset + NUM_LIMBS) {
                *slot = carry;
            }
        }
        U512(out)
    }

    /// Shift left by one, feeding `carry_in` into bit 0. Returns the bit
    /// shifted out of the top.
    fn shl1_with(&self, carry_in: bool) -> (Self, bool) {
        let mut out = [0u64; NUM_LIMBS];
        let mut carry = u64::from(carry_in);
        for (slot, &limb) in out.iter_mut().zip(&self.0) {
            *slot = (limb << 1) | carry;
            carry = limb >> 63;
        }
        (Self(out), carry != 0)
    }

    /// Shift right by one.
    #[must_use]
    pub fn shr1(&self) -> Self {
        let mut out = [0u64; NUM_LIMBS];
        let mut carry = 0;
        for (slot, &limb) in out.iter_mut().zip(&self.0).rev() {
            *slot = (limb >> 1) | (carry << 63);
            carry = limb & 1;
        }
        Self(out)
    }

    /// Truncating quotient and remainder by bitwise long division.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let mut quotient = Self::ZERO;
        let mut remainder = Self::ZERO;
        for index in (0..self.bit_len()).rev() {
            let (shifted, carried) = remainder.shl1_with(self.bit(index));
            remainder = shifted;
            if carried || remainder >= *divisor {
                remainder = remainder.wrapping_sub(divisor);
                quotient.0.view_bits_mut::<Lsb0>().set(index, true);
            }
        }
        Ok((quotient, remainder))
    }

    /// Parse unsigned digits in base `radix`, most significant first. Letters
    /// of either case stand for digits from ten up.
    pub fn from_str_radix(digits: &str, radix: u32) -> Result<Self, ArithmeticError> {
        if !(2..=36).contains(&radix) {
            return Err(ArithmeticError::InvalidRadix { radix });
        }
        if digits.is_empty() {
            return Err(ArithmeticError::InvalidNumeral);
        }
        digits.chars().try_fold(Self::ZERO, |acc, ch| {
            let digit = ch.to_digit(radix).ok_or(ArithmeticError::InvalidNumeral)?;
            match acc.mul_add_u64(u64::from(radix), u64::from(digit)) {
                (next, 0) => Ok(next),
                (_, _) => Err(ArithmeticError::Overflow { length: NUM_BYTES }),
            }
        })
    }

    /// `self * factor + addend`, with the word carried out of the top.
    fn mul_add_u64(&self, factor: u64, addend: u64) -> (Self, u64) {
        let mut out = [0u64; NUM_LIMBS];
        let mut carry = addend;
        for (slot, &limb) in out.iter_mut().zip(&self.0) {
            let (low, next) = mac(0, limb, factor, carry);
            *slot = low;
            carry = next;
        }
        (Self(out), carry)
    }

    /// Quotient and remainder by a nonzero word.
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "word-sized short division"
    )]
    fn div_rem_u64(&self, divisor: u64) -> (Self, u64) {
        let wide_divisor = u128::from(divisor);
        let mut out = [0u64; NUM_LIMBS];
        let mut remainder = 0u64;
        for (slot, &limb) in out.iter_mut().zip(&self.0).rev() {
            let wide = (u128::from(remainder) << 64) | u128::from(limb);
            *slot = lo(wide / wide_divisor);
            remainder = lo(wide % wide_divisor);
        }
        (Self(out), remainder)
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "U256(0x")?;
        for limb in self.0.iter().rev() {
            write!(fmt, "{limb:016x}")?;
        }
        write!(fmt, ")")
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chunks = Vec::new();
        let mut rest = *self;
        while !rest.is_zero() {
            let (quotient, chunk) = rest.div_rem_u64(DECIMAL_CHUNK);
            chunks.push(chunk);
            rest = quotient;
        }
        let mut from_top = chunks.iter().rev();
        match from_top.next() {
            None => fmt.pad("0"),
            Some(leading) => {
                let mut digits = String::new();
                write!(digits, "{leading}")?;
                for chunk in from_top {
                    write!(digits, "{chunk:019}")?;
                }
                fmt.pad(&digits)
            },
        }
    }
}

impl FromStr for U256 {
    type Err = ArithmeticError;

    /// Parse an unsigned decimal string. Values of $2^{256}$ or more fail
    /// with [`ArithmeticError::Overflow`].
    fn from_str(decimal: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(decimal, 10)
    }
}

impl From<u64> for U256 {
    fn from(word: u64) -> Self {
        Self::from_u64(word)
    }
}

/// A 512-bit unsigned integer, the width of a full product.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct U512([u64; 2 * NUM_LIMBS]);

impl U512 {
    /// Remainder modulo a nonzero `modulus`, by bitwise long division from
    /// the top set bit down.
    #[must_use]
    pub fn reduce(&self, modulus: &U256) -> U256 {
        let bits = self.0.view_bits::<Lsb0>();
        let top = bits.last_one().map_or(0, |index| index + 1);
        let mut remainder = U256::ZERO;
        for index in (0..top).rev() {
            let set = bits.get(index).is_some_and(|flag| *flag);
            let (shifted, carried) = remainder.shl1_with(set);
            remainder = shifted;
            if carried || remainder >= *modulus {
                remainder = remainder.wrapping_sub(modulus);
            }
        }
        remainder
    }
}

impl From<U256> for U512 {
    fn from(narrow: U256) -> Self {
        let mut limbs = [0u64; 2 * NUM_LIMBS];
        for (slot, &limb) in limbs.iter_mut().zip(narrow.limbs()) {
            *slot = limb;
        }
        Self(limbs)
    }
}

impl fmt::Debug for U512 {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "U512(0x")?;
        for limb in self.0.iter().rev() {
            write!(fmt, "{limb:016x}")?;
        }
        write!(fmt, ")")
    }
}

/// A signed intermediate: a sign and a 512-bit magnitude.
///
/// Only ever built from sums, differences and products of canonical values,
/// so the magnitude never exceeds $2^{511}$.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Integer {
    negative: bool,
    magnitude: U512,
}

impl Integer {
    /// A nonnegative value.
    #[must_use]
    pub const fn positive(magnitude: U512) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }

    /// The value `-magnitude`.
    #[must_use]
    pub const fn negative(magnitude: U512) -> Self {
        Self {
            negative: true,
            magnitude,
        }
    }

    /// The signed difference `lhs - rhs`.
    #[must_use]
    pub fn difference(lhs: &U256, rhs: &U256) -> Self {
        if lhs >= rhs {
            Self::positive(U512::from(lhs.wrapping_sub(rhs)))
        } else {
            Self::negative(U512::from(rhs.wrapping_sub(lhs)))
        }
    }

    /// Whether the value is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative && self.magnitude != U512::default()
    }
}

impl From<U256> for Integer {
    fn from(value: U256) -> Self {
        Self::positive(U512::from(value))
    }
}

impl From<U512> for Integer {
    fn from(value: U512) -> Self {
        Self::positive(value)
    }
}

/// `value mod modulus`, normalized into $[0, \text{modulus})$ also for
/// negative `value`.
///
/// Every field operation reduces through here. `modulus` must be nonzero.
#[must_use]
pub fn canonical_modulo(value: &Integer, modulus: &U256) -> U256 {
    let remainder = value.magnitude.reduce(modulus);
    if value.is_negative() && !remainder.is_zero() {
        modulus.wrapping_sub(&remainder)
    } else {
        remainder
    }
}

/// Accumulate little-endian bytes into an integer.
///
/// Inputs of any length are accepted as long as every byte past the 32nd is
/// zero; otherwise the value does not fit and this fails with
/// [`ArithmeticError::Overflow`].
pub fn bytes_to_integer(bytes: &[u8]) -> Result<U256, ArithmeticError> {
    let (low, high) = bytes.split_at(bytes.len().min(NUM_BYTES));
    if high.iter().any(|&byte| byte != 0) {
        return Err(ArithmeticError::Overflow { length: NUM_BYTES });
    }
    let mut padded = [0u8; NUM_BYTES];
    padded
        .iter_mut()
        .zip(low)
        .for_each(|(slot, &byte)| *slot = byte);
    Ok(U256::from_le_bytes(&padded))
}

/// Minimal little-endian encoding, zero-padded on the right to `length` when
/// given.
///
/// Zero encodes as no bytes at all. A value needing more than `length` bytes
/// fails with [`ArithmeticError::Overflow`].
pub fn integer_to_bytes(value: &U256, length: Option<usize>) -> Result<Vec<u8>, ArithmeticError> {
    let mut bytes = value.to_le_bytes().to_vec();
    let used = bytes.iter().rposition(|&byte| byte != 0).map_or(0, |index| index + 1);
    bytes.truncate(used);
    match length {
        None => Ok(bytes),
        Some(width) if used > width => Err(ArithmeticError::Overflow { length: width }),
        Some(width) => {
            bytes.resize(width, 0);
            Ok(bytes)
        },
    }
}
