//! Short Weierstrass arithmetic on Pallas and Vesta.
//!
//! Both curves are $E: y^2 = x^3 + 5$, Pallas over $\mathbb{F}_p$ and Vesta
//! over $\mathbb{F}_q$. Points are kept in Jacobian coordinates
//! ([`ProjectivePoint`]) and normalized to [`AffinePoint`] on request.
//!
//! [`ProjectivePoint`]: projective::ProjectivePoint
//! [`AffinePoint`]: affine::AffinePoint
//!
//! ## Affine conversion
//!
//! The $y$-coordinate of a normalized point is available in two forms, chosen
//! by [`AffineConversion`]:
//!
//! - [`Compatible`](AffineConversion::Compatible):
//!   $y' = x \cdot z^{-1} \cdot z^{-2}$, bit-for-bit what the reference backend
//!   returns. This is **not** the affine $y$ of the point unless $z = 1$.
//! - [`Exact`](AffineConversion::Exact): $y' = y \cdot z^{-2} \cdot z^{-1}$.

pub mod affine;
pub mod projective;

use core::{fmt, hash::Hash};

use crate::{
    bigint::U256,
    constants,
    field::{FieldElement, PallasBase, PrimeModulus, VestaBase},
};

/// Parameters of a Pasta curve $y^2 = x^3 + 5$.
#[expect(
    clippy::module_name_repetitions,
    reason = "reads as a noun at the crate root"
)]
pub trait CurveParams:
    Clone + Copy + fmt::Debug + Default + Eq + Hash + Send + Sync + 'static
{
    /// Field of the coordinates.
    type Base: PrimeModulus;

    /// Field of the scalars, of order equal to the group order.
    type Scalar: PrimeModulus;

    /// Name used in traces and debug output.
    const NAME: &'static str;

    /// Generator $x$-coordinate.
    const GENERATOR_X: U256;

    /// Generator $y$-coordinate.
    const GENERATOR_Y: U256;

    /// Cube root of unity $\beta$ in the base field, little-endian.
    const ENDO_BASE: [u8; 32];

    /// Cube root of unity $\lambda$ in the scalar field, little-endian, with
    /// $[\lambda](x, y) = (\beta x, y)$.
    const ENDO_SCALAR: [u8; 32];

    /// The coefficient $b = 5$.
    #[must_use]
    fn b() -> FieldElement<Self::Base> {
        FieldElement::from(constants::CURVE_B)
    }

    /// $\beta$ as a base field element.
    #[must_use]
    fn endo_base() -> FieldElement<Self::Base> {
        FieldElement::from_canonical(U256::from_le_bytes(&Self::ENDO_BASE))
    }

    /// $\lambda$ as a scalar field element.
    #[must_use]
    fn endo_scalar() -> FieldElement<Self::Scalar> {
        FieldElement::from_canonical(U256::from_le_bytes(&Self::ENDO_SCALAR))
    }
}

/// The Pallas curve over $\mathbb{F}_p$, with scalars in $\mathbb{F}_q$.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pallas;

impl CurveParams for Pallas {
    type Base = PallasBase;
    type Scalar = VestaBase;

    const ENDO_BASE: [u8; 32] = constants::PALLAS_ENDO_BASE;
    const ENDO_SCALAR: [u8; 32] = constants::PALLAS_ENDO_SCALAR;
    const GENERATOR_X: U256 = constants::PALLAS_GENERATOR_X;
    const GENERATOR_Y: U256 = constants::PALLAS_GENERATOR_Y;
    const NAME: &'static str = "pallas";
}

/// The Vesta curve over $\mathbb{F}_q$, with scalars in $\mathbb{F}_p$.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vesta;

impl CurveParams for Vesta {
    type Base = VestaBase;
    type Scalar = PallasBase;

    const ENDO_BASE: [u8; 32] = constants::VESTA_ENDO_BASE;
    const ENDO_SCALAR: [u8; 32] = constants::VESTA_ENDO_SCALAR;
    const GENERATOR_X: U256 = constants::VESTA_GENERATOR_X;
    const GENERATOR_Y: U256 = constants::VESTA_GENERATOR_Y;
    const NAME: &'static str = "vesta";
}

/// How [`to_affine_with`](projective::ProjectivePoint::to_affine_with)
/// computes the affine $y$.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AffineConversion {
    /// $y' = x \cdot z^{-3}$, matching the reference backend.
    #[default]
    Compatible,
    /// $y' = y \cdot z^{-3}$.
    Exact,
}
