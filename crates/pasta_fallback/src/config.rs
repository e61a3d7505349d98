//! Backend configuration.

use crate::curve::AffineConversion;

/// Settings for a [`Bindings`](crate::bindings::Bindings) instance.
///
/// The default traces nothing and normalizes points the way the reference
/// backend does.
#[expect(
    clippy::module_name_repetitions,
    reason = "reads as a noun at the crate root"
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BackendConfig {
    /// Emit a trace record before every exported call.
    pub trace: bool,
    /// How curve `to_affine` computes $y$.
    pub affine: AffineConversion,
}

impl BackendConfig {
    /// Tracing off, compatible affine conversion.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            trace: false,
            affine: AffineConversion::Compatible,
        }
    }

    /// Toggle call tracing.
    #[must_use]
    pub const fn with_trace(self, trace: bool) -> Self {
        Self { trace, ..self }
    }

    /// Choose the affine conversion.
    #[must_use]
    pub const fn with_affine(self, affine: AffineConversion) -> Self {
        Self { affine, ..self }
    }
}
