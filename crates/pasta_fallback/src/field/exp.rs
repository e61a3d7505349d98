//! Exponentiation and what is built on it: inversion, the quadratic residue
//! test, square roots and roots of unity.
//!
//! Both Pasta fields have $m - 1 = t \cdot 2^{32}$ with $t$ odd, so square
//! roots use Tonelli-Shanks seeded with the fixed primitive $2^{32}$-th root
//! of unity $\omega$ (a non-residue): $c = \omega^{t}$.

use super::{FieldElement, PrimeModulus};
use crate::{
    bigint::{Integer, U256, canonical_modulo},
    constants::TWO_ADICITY,
    error::ArithmeticError,
};

/// $m - 1$, the order of the multiplicative group.
fn group_order<M: PrimeModulus>() -> U256 {
    M::MODULUS.wrapping_sub(&U256::ONE)
}

/// Square `value` repeatedly, `count` times: $a^{2^{k}}$.
#[must_use]
pub fn square_n<M: PrimeModulus>(value: &FieldElement<M>, count: u32) -> FieldElement<M> {
    (0..count).fold(*value, |acc, _| acc.square())
}

/// $a^{e}$ by square-and-multiply over the bits of $e \bmod (m - 1)$.
///
/// Reducing the exponent relies on Fermat's little theorem and therefore on
/// the modulus being prime.
#[must_use]
pub fn pow<M: PrimeModulus>(base: &FieldElement<M>, exponent: &U256) -> FieldElement<M> {
    let reduced = canonical_modulo(&Integer::from(*exponent), &group_order::<M>());
    let mut acc = FieldElement::ONE;
    let mut power = *base;
    for bit in reduced.bits() {
        if bit {
            acc = acc * power;
        }
        power = power.square();
    }
    acc
}

/// $a^{-1}$ by the extended Euclidean algorithm on $(m, a)$.
///
/// Only the Bezout coefficient of $a$ is tracked, and it is kept reduced
/// modulo $m$. Fails for zero, and for any input whose gcd with the modulus
/// is not one.
pub fn inverse<M: PrimeModulus>(value: &FieldElement<M>) -> Result<FieldElement<M>, ArithmeticError> {
    if value.is_zero() {
        return Err(ArithmeticError::Uninvertible);
    }
    let mut dividend = M::MODULUS;
    let mut divisor = value.to_bigint();
    let mut coefficient = FieldElement::<M>::ZERO;
    let mut next_coefficient = FieldElement::<M>::ONE;
    while !divisor.is_zero() {
        let (quotient, remainder) = dividend.div_rem(&divisor)?;
        let updated = coefficient - next_coefficient * FieldElement::reduce(&quotient.into());
        dividend = divisor;
        divisor = remainder;
        coefficient = next_coefficient;
        next_coefficient = updated;
    }
    if dividend == U256::ONE {
        Ok(coefficient)
    } else {
        Err(ArithmeticError::Uninvertible)
    }
}

/// Euler's criterion: $a^{(m-1)/2} = 1$. Zero is a square.
#[must_use]
pub fn is_square<M: PrimeModulus>(value: &FieldElement<M>) -> bool {
    value.is_zero() || pow(value, &group_order::<M>().shr1()) == FieldElement::ONE
}

/// Tonelli-Shanks.
///
/// Starts from $c = \omega^{t}$, $\tau = a^{t}$ and $R = a^{(t+1)/2}$ with the
/// current order bound at 32. Each round finds the least $i$ with
/// $\tau^{2^i} = 1$; reaching the bound means $a$ is not a square. Returns a
/// single root without normalizing its sign.
#[must_use]
pub fn sqrt<M: PrimeModulus>(value: &FieldElement<M>) -> Option<FieldElement<M>> {
    let odd = M::ODD_FACTOR;
    let (half_odd_plus_one, _) = odd.shr1().overflowing_add(&U256::ONE);

    let mut bound = TWO_ADICITY;
    let mut cofactor = pow(&FieldElement::two_adic_root_of_unity(), &odd);
    let mut residue = pow(value, &odd);
    let mut root = pow(value, &half_odd_plus_one);

    loop {
        if residue.is_zero() {
            return Some(FieldElement::ZERO);
        }
        if residue == FieldElement::ONE {
            return Some(root);
        }

        let mut least = 0;
        let mut probe = residue;
        while probe != FieldElement::ONE && least < bound {
            probe = probe.square();
            least += 1;
        }
        if least >= bound {
            return None;
        }

        let step = square_n(&cofactor, bound - least - 1);
        bound = least;
        cofactor = step.square();
        residue = residue * cofactor;
        root = root * step;
    }
}

/// Generator of the subgroup of order $2^{k}$: $\omega^{2^{32-k}}$.
///
/// $k = 0$ gives one. $k > 32$ has no such subgroup.
pub fn domain_generator<M: PrimeModulus>(log2_size: u32) -> Result<FieldElement<M>, ArithmeticError> {
    if log2_size == 0 {
        Ok(FieldElement::ONE)
    } else if log2_size <= TWO_ADICITY {
        Ok(square_n(
            &FieldElement::two_adic_root_of_unity(),
            TWO_ADICITY - log2_size,
        ))
    } else {
        Err(ArithmeticError::DomainTooLarge { log2_size })
    }
}

#[cfg(test)]
mod tests {
    use ff::{Field as _, PrimeField as _};
    use proptest::prelude::*;
    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;
    use crate::field::{Fp, Fq, PallasBase};

    fn arb_fq() -> impl Strategy<Value = Fq> {
        any::<u64>().prop_map(Fq::rng)
    }

    /// Small exponents, and exponents reduced modulo `m - 1`.
    #[test]
    fn pow_small() {
        assert_eq!(Fp::from(3).pow(&U256::from_u64(5)), Fp::from(243), "3^5");
        assert_eq!(Fp::from(3).pow(&U256::ZERO), Fp::ONE, "3^0");
        assert_eq!(
            Fp::from(3).pow(&group_order::<PallasBase>()),
            Fp::ONE,
            "Fermat"
        );
    }

    /// Zero has no inverse.
    #[test]
    fn inverse_of_zero() {
        assert_eq!(Fp::ZERO.inverse(), Err(ArithmeticError::Uninvertible), "fp");
        assert_eq!(
            Fq::ONE.div(&Fq::ZERO),
            Err(ArithmeticError::Uninvertible),
            "division"
        );
    }

    /// One and minus one are their own inverses.
    #[test]
    fn inverse_of_units() {
        assert_eq!(Fp::ONE.inverse().unwrap(), Fp::ONE, "1");
        assert_eq!((-Fq::ONE).inverse().unwrap(), -Fq::ONE, "-1");
        assert_eq!(Fp::from(2).inverse().unwrap() * Fp::from(2), Fp::ONE, "2");
    }

    /// Inverses agree with `pasta_curves`.
    #[test]
    fn inverse_matches_pasta_curves() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..16u8 {
            let element = Fp::random(&mut rng);
            let expected = pasta_curves::Fp::from_repr(element.to_bytes())
                .unwrap()
                .invert()
                .unwrap();
            assert_eq!(element.inverse().unwrap().to_bytes(), expected.to_repr(), "inverse");
        }
    }

    /// sqrt(4) is 2 or -2, and zero is its own root.
    #[test]
    fn sqrt_of_small_squares() {
        let root = Fp::from(4).sqrt().unwrap();
        assert!(root == Fp::from(2) || root == -Fp::from(2), "sqrt(4)");
        assert_eq!(Fq::ZERO.sqrt(), Some(Fq::ZERO), "sqrt(0)");
        assert!(Fq::ZERO.is_square(), "0 is a square");
    }

    /// The root of unity is a non-residue, so it has no square root.
    #[test]
    fn sqrt_of_non_residue() {
        let root = Fp::two_adic_root_of_unity();
        assert!(!root.is_square(), "omega is not a square");
        assert_eq!(root.sqrt(), None, "no root");
        assert_eq!(Fq::two_adic_root_of_unity().sqrt(), None, "no root in fq");
        assert_eq!(Fp::from(5).sqrt(), None, "5 is the multiplicative generator");
    }

    /// Residuosity agrees with `pasta_curves`.
    #[test]
    fn residuosity_matches_pasta_curves() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..16u8 {
            let element = Fq::random(&mut rng);
            let oracle = pasta_curves::Fq::from_repr(element.to_bytes()).unwrap();
            let expected = bool::from(oracle.sqrt().is_some());
            assert_eq!(element.is_square(), expected, "is_square");
            assert_eq!(element.sqrt().is_some(), expected, "sqrt defined");
        }
    }

    /// The root of unity has order exactly 2^32.
    #[test]
    fn two_adic_root_order() {
        for (full, half) in [
            (
                square_n(&Fp::two_adic_root_of_unity(), 32) == Fp::ONE,
                square_n(&Fp::two_adic_root_of_unity(), 31) == -Fp::ONE,
            ),
            (
                square_n(&Fq::two_adic_root_of_unity(), 32) == Fq::ONE,
                square_n(&Fq::two_adic_root_of_unity(), 31) == -Fq::ONE,
            ),
        ] {
            assert!(full, "omega^(2^32) = 1");
            assert!(half, "omega^(2^31) = -1");
        }
    }

    /// The root of unity is 5^t, as `pasta_curves` defines it.
    #[test]
    fn two_adic_root_matches_pasta_curves() {
        assert_eq!(
            Fp::two_adic_root_of_unity().to_bytes(),
            pasta_curves::Fp::ROOT_OF_UNITY.to_repr(),
            "fp"
        );
        assert_eq!(
            Fq::two_adic_root_of_unity().to_bytes(),
            pasta_curves::Fq::ROOT_OF_UNITY.to_repr(),
            "fq"
        );
    }

    /// Domain generators at the edges of the accepted range.
    #[test]
    fn domain_generators() {
        assert_eq!(Fp::domain_generator(0).unwrap(), Fp::ONE, "size 1");
        assert_eq!(Fp::domain_generator(1).unwrap(), -Fp::ONE, "size 2");
        assert_eq!(
            Fq::domain_generator(32).unwrap(),
            Fq::two_adic_root_of_unity(),
            "size 2^32"
        );
        assert_eq!(
            Fp::domain_generator(33),
            Err(ArithmeticError::DomainTooLarge { log2_size: 33 }),
            "too large"
        );
        let generator = Fq::domain_generator(10).unwrap();
        assert_eq!(square_n(&generator, 10), Fq::ONE, "order divides 2^10");
        assert_ne!(square_n(&generator, 9), Fq::ONE, "order is 2^10");
    }

    proptest! {
        /// Every nonzero element times its inverse is one.
        #[test]
        fn inverse_identity(element in arb_fq()) {
            prop_assume!(!element.is_zero());
            prop_assert_eq!(element * element.inverse().unwrap(), Fq::ONE);
        }

        /// Squares have roots, and the root squares back.
        #[test]
        fn sqrt_of_square(element in arb_fq()) {
            let square = element.square();
            prop_assert!(square.is_square());
            let root = square.sqrt().unwrap();
            prop_assert_eq!(root.square(), square);
            prop_assert!(root == element || root == -element);
        }

        /// `is_square` holds exactly when `sqrt` is defined.
        #[test]
        fn residue_iff_root(element in arb_fq()) {
            prop_assert_eq!(element.is_square(), element.sqrt().is_some());
        }

        /// Dividing undoes multiplying.
        #[test]
        fn div_undoes_mul(lhs in arb_fq(), rhs in arb_fq()) {
            prop_assume!(!rhs.is_zero());
            prop_assert_eq!((lhs * rhs).div(&rhs).unwrap(), lhs);
        }
    }
}
