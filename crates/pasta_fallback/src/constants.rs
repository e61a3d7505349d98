//! Pasta cycle parameters.
//!
//! Pallas is defined over $\mathbb{F}_p$ and has a group of order $q$; Vesta
//! is defined over $\mathbb{F}_q$ with order $p$. Both are
//! $y^2 = x^3 + 5$ and both fields have 2-adicity 32:
//!
//! $$m - 1 = t \cdot 2^{32}, \quad t \text{ odd}.$$
//!
//! Multi-word values are little-endian `u64` limbs. The endomorphism constants
//! are 32-byte little-endian encodings.

use crate::bigint::U256;

/// Two-adicity of both Pasta fields.
pub const TWO_ADICITY: u32 = 32;

/// Bit size of both moduli.
pub const SIZE_IN_BITS: u32 = 255;

/// Curve coefficient $b$ in $y^2 = x^3 + b$, shared by Pallas and Vesta.
pub const CURVE_B: u64 = 5;

/// The Pallas base field modulus
/// $p = \texttt{0x40000000000000000000000000000000224698fc094cf91b992d30ed00000001}$.
pub const FP_MODULUS: U256 = U256::from_limbs([
    0x992d_30ed_0000_0001,
    0x2246_98fc_094c_f91b,
    0x0000_0000_0000_0000,
    0x4000_0000_0000_0000,
]);

/// The Vesta base field modulus
/// $q = \texttt{0x40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001}$.
pub const FQ_MODULUS: U256 = U256::from_limbs([
    0x8c46_eb21_0000_0001,
    0x2246_98fc_0994_a8dd,
    0x0000_0000_0000_0000,
    0x4000_0000_0000_0000,
]);

/// $(p - 1) / 2^{32}$.
pub const FP_ODD_FACTOR: U256 = U256::from_limbs([
    0x094c_f91b_992d_30ed,
    0x0000_0000_2246_98fc,
    0x0000_0000_0000_0000,
    0x0000_0000_4000_0000,
]);

/// $(q - 1) / 2^{32}$.
pub const FQ_ODD_FACTOR: U256 = U256::from_limbs([
    0x0994_a8dd_8c46_eb21,
    0x0000_0000_2246_98fc,
    0x0000_0000_0000_0000,
    0x0000_0000_4000_0000,
]);

/// Primitive $2^{32}$-th root of unity in $\mathbb{F}_p$: $5^{t}$.
pub const FP_TWO_ADIC_ROOT: U256 = U256::from_limbs([
    0xbdad_6fab_d87e_a32f,
    0xea32_2bf2_b7bb_7584,
    0x3621_2083_0561_f81a,
    0x2bce_74de_ac30_ebda,
]);

/// Primitive $2^{32}$-th root of unity in $\mathbb{F}_q$: $5^{t}$.
pub const FQ_TWO_ADIC_ROOT: U256 = U256::from_limbs([
    0xa70e_2c11_02b6_d05f,
    0x9bb9_7ea3_c106_f049,
    0x9e5c_4dfd_492a_e26e,
    0x2de6_a9b8_746d_3f58,
]);

/// Pallas generator $x$-coordinate.
pub const PALLAS_GENERATOR_X: U256 = U256::ONE;

/// Pallas generator $y$-coordinate, $\sqrt{6} \bmod p$.
pub const PALLAS_GENERATOR_Y: U256 = U256::from_limbs([
    0x19cf_7a23_caed_2abb,
    0x8f65_5bd4_333d_4771,
    0x53df_a9f0_6378_ee54,
    0x1b74_b5a3_0a12_937c,
]);

/// Vesta generator $x$-coordinate.
pub const VESTA_GENERATOR_X: U256 = U256::ONE;

/// Vesta generator $y$-coordinate, $\sqrt{6} \bmod q$.
pub const VESTA_GENERATOR_Y: U256 = U256::from_limbs([
    0x4e43_89b9_b027_6a62,
    0xacce_3a7f_298b_a20c,
    0x13b6_4e3a_ae89_754c,
    0x1943_666e_a922_ae6b,
]);

/// Pallas $\beta \in \mathbb{F}_p$, a primitive cube root of unity with
/// $[\lambda](x, y) = (\beta x, y)$ for [`PALLAS_ENDO_SCALAR`] $\lambda$.
pub const PALLAS_ENDO_BASE: [u8; 32] = [
    71, 181, 1, 2, 47, 210, 127, 123, 210, 199, 159, 209, 41, 13, 39, 5, 80, 78, 85, 168, 35, 42,
    85, 211, 142, 69, 50, 181, 124, 53, 51, 45,
];

/// Pallas $\lambda \in \mathbb{F}_q$, a primitive cube root of unity.
pub const PALLAS_ENDO_SCALAR: [u8; 32] = [
    177, 241, 85, 175, 64, 24, 157, 97, 46, 117, 212, 193, 126, 82, 89, 18, 166, 240, 8, 227, 39,
    75, 226, 174, 113, 173, 193, 215, 167, 101, 126, 57,
];

/// Vesta $\beta \in \mathbb{F}_q$, paired with [`VESTA_ENDO_SCALAR`].
pub const VESTA_ENDO_BASE: [u8; 32] = [
    79, 14, 170, 80, 224, 210, 169, 42, 175, 51, 192, 71, 125, 70, 237, 15, 90, 15, 247, 28, 216,
    180, 29, 81, 142, 82, 62, 40, 88, 154, 129, 6,
];

/// Vesta $\lambda \in \mathbb{F}_p$.
pub const VESTA_ENDO_SCALAR: [u8; 32] = [
    185, 74, 254, 253, 189, 94, 173, 29, 73, 49, 173, 55, 210, 139, 31, 29, 176, 177, 170, 87, 220,
    213, 170, 44, 113, 186, 205, 74, 131, 202, 204, 18,
];

#[cfg(test)]
mod tests {
    use super::*;

    /// The odd factors recombine into the moduli.
    #[test]
    fn odd_factor_times_two_adic_part() {
        for (odd, modulus) in [(FP_ODD_FACTOR, FP_MODULUS), (FQ_ODD_FACTOR, FQ_MODULUS)] {
            let mut shifted = odd;
            for _ in 0..TWO_ADICITY {
                let (doubled, carried) = shifted.overflowing_add(&shifted);
                assert!(!carried, "no overflow");
                shifted = doubled;
            }
            let (plus_one, _) = shifted.overflowing_add(&U256::ONE);
            assert_eq!(plus_one, modulus, "t * 2^32 + 1");
            assert!(odd.is_odd(), "t is odd");
        }
    }

    /// Moduli agree with the independent implementation.
    #[test]
    fn moduli_match_pasta_curves() {
        use ff::PrimeField as _;

        let modulus: U256 = pasta_curves::Fp::MODULUS
            .trim_start_matches("0x")
            .chars()
            .try_fold(U256::ZERO, |acc, ch| {
                let digit = ch.to_digit(16)?;
                let mut shifted = acc;
                for _ in 0..4u8 {
                    shifted = shifted.overflowing_add(&shifted).0;
                }
                Some(shifted.overflowing_add(&U256::from_u64(u64::from(digit))).0)
            })
            .unwrap();
        assert_eq!(modulus, FP_MODULUS, "p");
        assert_eq!(FP_MODULUS.bit_len(), 255, "size in bits");
        assert_eq!(FQ_MODULUS.bit_len(), 255, "size in bits");
        assert!(FP_MODULUS < FQ_MODULUS, "p < q");
    }
}
