//! Jacobian points: $(X, Y, Z)$ stands for $(X / Z^2, Y / Z^3)$ and $Z = 0$ is
//! the point at infinity.

use rand::{RngCore, SeedableRng as _, rngs::StdRng};

use super::{AffineConversion, CurveParams, affine::AffinePoint};
use crate::field::FieldElement;

/// A curve point in Jacobian coordinates.
///
/// Equality is equality of representations: two triples describing the same
/// point with different $Z$ compare unequal. Normalize with
/// [`to_affine`](Self::to_affine) to compare points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "")
)]
pub struct ProjectivePoint<C: CurveParams> {
    /// $X$.
    pub x: FieldElement<C::Base>,
    /// $Y$.
    pub y: FieldElement<C::Base>,
    /// $Z$, zero for the point at infinity.
    pub z: FieldElement<C::Base>,
}

impl<C: CurveParams> ProjectivePoint<C> {
    /// Build from raw coordinates. Nothing is checked.
    #[must_use]
    pub const fn new(
        x: FieldElement<C::Base>,
        y: FieldElement<C::Base>,
        z: FieldElement<C::Base>,
    ) -> Self {
        Self { x, y, z }
    }

    /// The point at infinity, $(1, 1, 0)$.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(FieldElement::ONE, FieldElement::ONE, FieldElement::ZERO)
    }

    /// The fixed generator, with $Z = 1$.
    #[must_use]
    pub const fn generator() -> Self {
        Self::new(
            FieldElement::from_canonical(C::GENERATOR_X),
            FieldElement::from_canonical(C::GENERATOR_Y),
            FieldElement::ONE,
        )
    }

    /// Lift affine coordinates with $Z = 1$. The point is not checked to be
    /// on the curve.
    #[must_use]
    pub const fn of_affine_coordinates(x: FieldElement<C::Base>, y: FieldElement<C::Base>) -> Self {
        Self::new(x, y, FieldElement::ONE)
    }

    /// Whether $Z = 0$.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// $(X, -Y, Z)$.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(self.x, -self.y, self.z)
    }

    /// Jacobian addition, `add-2007-bl` from the Explicit-Formulas Database:
    ///
    /// $$\begin{aligned}
    /// U_1 &= X_1 Z_2^2, & U_2 &= X_2 Z_1^2, \\
    /// S_1 &= Y_1 Z_2^3, & S_2 &= Y_2 Z_1^3, \\
    /// H &= U_2 - U_1, & r &= 2 (S_2 - S_1), \\
    /// I &= (2H)^2, & J &= H I, \quad V = U_1 I, \\
    /// X_3 &= r^2 - J - 2V, & Y_3 &= r (V - X_3) - 2 S_1 J, \\
    /// Z_3 &= ((Z_1 + Z_2)^2 - Z_1^2 - Z_2^2) H.
    /// \end{aligned}$$
    ///
    /// The formula is incomplete and no case is special-cased. Equal inputs
    /// give $(0, 0, 0)$ instead of the double, mutually negated inputs give
    /// $Z_3 = 0$, and the identity is not neutral. Callers pass distinct,
    /// non-cancelling, finite points, or use [`double`](Self::double).
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = self.x * z2z2;
        let u2 = rhs.x * z1z1;
        let s1 = self.y * rhs.z * z2z2;
        let s2 = rhs.y * self.z * z1z1;

        let x_gap = u2 - u1;
        let i = x_gap.double().square();
        let j = x_gap * i;
        let y_gap = (s2 - s1).double();
        let scaled_u1 = u1 * i;

        let x3 = y_gap.square() - j - scaled_u1.double();
        let y3 = y_gap * (scaled_u1 - x3) - (s1 * j).double();
        let z3 = ((self.z + rhs.z).square() - z1z1 - z2z2) * x_gap;
        Self::new(x3, y3, z3)
    }

    /// `add(self, negate(rhs))`, with the same restrictions as
    /// [`add`](Self::add).
    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.negate())
    }

    /// Jacobian doubling for $a = 0$, `dbl-2009-l`:
    ///
    /// $$\begin{aligned}
    /// A &= X^2, \quad B = Y^2, \quad C = B^2, \\
    /// D &= 2 ((X + B)^2 - A - C), \quad E = 3A, \quad F = E^2, \\
    /// X_3 &= F - 2D, \quad Y_3 = E (D - X_3) - 8C, \quad Z_3 = 2 Y Z.
    /// \end{aligned}$$
    ///
    /// The identity doubles to itself.
    #[must_use]
    pub fn double(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        let xx = self.x.square();
        let yy = self.y.square();
        let yyyy = yy.square();
        let dd = ((self.x + yy).square() - xx - yyyy).double();
        let ee = xx.double() + xx;

        let x3 = ee.square() - dd.double();
        let y3 = ee * (dd - x3) - yyyy.double().double().double();
        let z3 = (self.y * self.z).double();
        Self::new(x3, y3, z3)
    }

    /// $[k] P$ by double-and-add from the least significant bit.
    ///
    /// While the accumulator is still the identity the partial sum is taken
    /// over directly, so the incomplete [`add`](Self::add) never sees the
    /// identity. A zero scalar gives the identity.
    #[must_use]
    pub fn scale(&self, scalar: &FieldElement<C::Scalar>) -> Self {
        let mut acc = Self::identity();
        let mut power = *self;
        for bit in scalar.to_bigint().bits() {
            if bit {
                acc = if acc.is_identity() {
                    power
                } else {
                    acc.add(&power)
                };
            }
            power = power.double();
        }
        acc
    }

    /// Normalize with the exact formula $(X Z^{-2}, Y Z^{-3})$.
    #[must_use]
    pub fn to_affine(&self) -> AffinePoint<C> {
        self.to_affine_with(AffineConversion::Exact)
    }

    /// Normalize the way the reference backend does, with $y' = X Z^{-3}$.
    ///
    /// Agrees with [`to_affine`](Self::to_affine) whenever $Z \in \{0, 1\}$.
    #[must_use]
    pub fn to_affine_compatible(&self) -> AffinePoint<C> {
        self.to_affine_with(AffineConversion::Compatible)
    }

    /// Normalize to affine form.
    ///
    /// $Z = 0$ gives the infinity point $(1, 1)$ and $Z = 1$ returns the
    /// coordinates unchanged. Otherwise $x' = X Z^{-2}$ and $y'$ follows
    /// `conversion`.
    #[must_use]
    pub fn to_affine_with(&self, conversion: AffineConversion) -> AffinePoint<C> {
        if self.z == FieldElement::ONE {
            return AffinePoint::new(self.x, self.y);
        }
        // zero is the only element without an inverse
        let Ok(zinv) = self.z.inverse() else {
            return AffinePoint::identity();
        };
        let zinv_squared = zinv.square();
        let numerator = match conversion {
            AffineConversion::Compatible => self.x,
            AffineConversion::Exact => self.y,
        };
        AffinePoint::new(self.x * zinv_squared, numerator * zinv * zinv_squared)
    }

    /// A uniformly random multiple of the generator.
    pub fn random(rng: &mut impl RngCore) -> Self {
        Self::generator().scale(&FieldElement::random(rng))
    }

    /// A random multiple of the generator from a seeded [`StdRng`].
    #[must_use]
    pub fn rng(seed: u64) -> Self {
        Self::random(&mut StdRng::seed_from_u64(seed))
    }
}

impl<C: CurveParams> Default for ProjectivePoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: CurveParams> From<AffinePoint<C>> for ProjectivePoint<C> {
    fn from(point: AffinePoint<C>) -> Self {
        point.to_projective()
    }
}
