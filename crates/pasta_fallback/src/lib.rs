//! # pasta_fallback
//!
//! Pure-software arithmetic over the Pasta cycle, exposed through the same
//! operation surface as the native backend.
//!
//! The Pasta cycle is two prime fields of 255 bits,
//! $\mathbb{F}_p$ and $\mathbb{F}_q$, and two curves $y^2 = x^3 + 5$:
//! Pallas over $\mathbb{F}_p$ with scalars in $\mathbb{F}_q$, and Vesta the
//! other way around.
//!
//! ## Layers
//!
//! - [`bigint`]: fixed-width 256-bit integers, signed reduction and byte
//!   codecs.
//! - [`field`]: [`FieldElement`] over a [`PrimeModulus`](field::PrimeModulus),
//!   including inversion, square roots and roots of unity.
//! - [`curve`]: Jacobian [`ProjectivePoint`]s and normalized
//!   [`AffinePoint`]s.
//! - [`bindings`]: [`Bindings`], the named operation families `pasta_fp`,
//!   `pasta_fq`, `pallas`, `vesta` and `bigint_256`.
//!
//! ## Known limitations
//!
//! Point addition is the incomplete `add-2007-bl` formula. Adding a point
//! to itself or to the identity gives a wrong answer; use
//! [`ProjectivePoint::double`] for the former. The default affine
//! conversion reproduces the reference backend's $y$; see
//! [`AffineConversion`].
//!
//! ```
//! use pasta_fallback::{AffineConversion, BackendConfig, Bindings};
//!
//! let config = BackendConfig::new()
//!     .with_trace(true)
//!     .with_affine(AffineConversion::Exact);
//! let bindings = Bindings::from(config);
//! let pallas = bindings.pallas();
//! let generator = pallas.one();
//! let affine = pallas.to_affine(&pallas.double(&generator));
//! assert!(affine.is_on_curve());
//!
//! // the default conversion leaves a doubled point off the curve
//! let compatible = Bindings::default();
//! let quirky = compatible.pallas().to_affine(&generator.double());
//! assert_eq!(quirky.x, affine.x);
//! assert!(!quirky.is_on_curve());
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![expect(clippy::pub_use, reason = "exporting items for consumers")]

extern crate alloc;

pub mod bigint;
pub mod bindings;
pub mod config;
pub mod constants;
pub mod curve;
pub mod error;
pub mod field;
pub mod trace;

pub use bindings::Bindings;
pub use config::BackendConfig;
pub use curve::{
    AffineConversion, Pallas, Vesta, affine::AffinePoint, projective::ProjectivePoint,
};
pub use error::ArithmeticError;
pub use field::{FieldElement, Fp, Fq};
