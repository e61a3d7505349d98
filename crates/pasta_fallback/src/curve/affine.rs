//! Normalized points.

use super::{CurveParams, projective::ProjectivePoint};
use crate::field::FieldElement;

/// A point in affine form, or the point at infinity.
///
/// The infinity point always carries $(1, 1)$ in its coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "")
)]
pub struct AffinePoint<C: CurveParams> {
    /// $x$, or one at infinity.
    pub x: FieldElement<C::Base>,
    /// $y$, or one at infinity.
    pub y: FieldElement<C::Base>,
    /// Whether this is the point at infinity.
    pub infinity: bool,
}

impl<C: CurveParams> AffinePoint<C> {
    /// A finite point. Nothing is checked.
    #[must_use]
    pub const fn new(x: FieldElement<C::Base>, y: FieldElement<C::Base>) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// The point at infinity, $(1, 1, \top)$.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            x: FieldElement::ONE,
            y: FieldElement::ONE,
            infinity: true,
        }
    }

    /// Whether $y^2 = x^3 + 5$ holds. Infinity counts as on the curve.
    #[must_use]
    pub fn is_on_curve(&self) -> bool {
        self.infinity || self.y.square() == self.x.square() * self.x + C::b()
    }

    /// Lift to Jacobian form with $Z = 1$, or the projective identity.
    #[must_use]
    pub const fn to_projective(&self) -> ProjectivePoint<C> {
        if self.infinity {
            ProjectivePoint::identity()
        } else {
            ProjectivePoint::of_affine_coordinates(self.x, self.y)
        }
    }
}

impl<C: CurveParams> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}
