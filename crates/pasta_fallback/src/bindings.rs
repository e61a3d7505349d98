//! The exported operation surface.
//!
//! [`Bindings`] hands out one typed surface per operation family:
//!
//! - [`fp`](Bindings::fp) and [`fq`](Bindings::fq): [`FieldOps`] over
//!   $\mathbb{F}_p$ and $\mathbb{F}_q$;
//! - [`pallas`](Bindings::pallas) and [`vesta`](Bindings::vesta):
//!   [`CurveOps`];
//! - [`bigint`](Bindings::bigint): [`BigIntOps`] over 256-bit integers.
//!
//! Each method is exactly one named operation. Nothing here computes: every
//! call is traced through the instance's [`Tracer`] (when enabled) and then
//! delegated to the field, curve or integer engine.
//!
//! ```
//! use pasta_fallback::{Bindings, Fp};
//!
//! let bindings = Bindings::default();
//! let fp = bindings.fp();
//! let two = fp.of_int(2);
//! assert_eq!(fp.mul(&fp.inverse(&two).unwrap(), &two), Fp::ONE);
//! ```

use core::{cmp::Ordering, fmt, marker::PhantomData, str::FromStr as _};

use rand::thread_rng;

use crate::{
    bigint::{self, NUM_BYTES, NUM_LIMBS, U256},
    config::BackendConfig,
    curve::{
        AffineConversion, CurveParams, Pallas, Vesta, affine::AffinePoint,
        projective::ProjectivePoint,
    },
    error::ArithmeticError,
    field::{FieldElement, PallasBase, PrimeModulus, VestaBase},
    trace::{LogSink, Sink, Tracer},
};

/// Operation family name of [`BigIntOps`] in trace records.
const BIGINT_FAMILY: &str = "bigint_256";

/// Entry point: configuration plus the call tracer.
#[derive(Debug)]
pub struct Bindings<S: Sink = LogSink> {
    config: BackendConfig,
    tracer: Tracer<S>,
}

impl<S: Sink> Bindings<S> {
    /// Bindings that trace into `sink` when `config.trace` is set.
    #[must_use]
    pub const fn with_sink(config: BackendConfig, sink: S) -> Self {
        Self {
            config,
            tracer: Tracer::new(config.trace, sink),
        }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// The call tracer.
    #[must_use]
    pub const fn tracer(&self) -> &Tracer<S> {
        &self.tracer
    }

    /// Operations on $\mathbb{F}_p$.
    #[must_use]
    pub const fn fp(&self) -> FieldOps<'_, PallasBase, S> {
        FieldOps::new(&self.tracer)
    }

    /// Operations on $\mathbb{F}_q$.
    #[must_use]
    pub const fn fq(&self) -> FieldOps<'_, VestaBase, S> {
        FieldOps::new(&self.tracer)
    }

    /// Operations on Pallas.
    #[must_use]
    pub const fn pallas(&self) -> CurveOps<'_, Pallas, S> {
        CurveOps::new(&self.tracer, self.config.affine)
    }

    /// Operations on Vesta.
    #[must_use]
    pub const fn vesta(&self) -> CurveOps<'_, Vesta, S> {
        CurveOps::new(&self.tracer, self.config.affine)
    }

    /// Operations on 256-bit integers.
    #[must_use]
    pub const fn bigint(&self) -> BigIntOps<'_, S> {
        BigIntOps {
            tracer: &self.tracer,
        }
    }
}

impl Default for Bindings<LogSink> {
    fn default() -> Self {
        Self::from(BackendConfig::default())
    }
}

impl From<BackendConfig> for Bindings<LogSink> {
    fn from(config: BackendConfig) -> Self {
        Self::with_sink(config, LogSink)
    }
}

/// Field operations for the modulus `M`.
#[derive(Debug)]
pub struct FieldOps<'ctx, M: PrimeModulus, S: Sink> {
    tracer: &'ctx Tracer<S>,
    modulus: PhantomData<M>,
}

impl<'ctx, M: PrimeModulus, S: Sink> FieldOps<'ctx, M, S> {
    const fn new(tracer: &'ctx Tracer<S>) -> Self {
        Self {
            tracer,
            modulus: PhantomData,
        }
    }

    fn traced<T>(&self, op: &'static str, args: &[&dyn fmt::Debug], body: impl FnOnce() -> T) -> T {
        self.tracer.call(M::NAME, op, args, body)
    }

    /// The modulus.
    #[must_use]
    pub fn size(&self) -> U256 {
        self.traced("size", &[], FieldElement::<M>::modulus)
    }

    /// Bit size of the modulus, 255.
    #[must_use]
    pub fn size_in_bits(&self) -> u32 {
        self.traced("size_in_bits", &[], FieldElement::<M>::size_in_bits)
    }

    /// $a + b$.
    #[must_use]
    pub fn add(&self, lhs: &FieldElement<M>, rhs: &FieldElement<M>) -> FieldElement<M> {
        self.traced("add", &[lhs, rhs], || *lhs + *rhs)
    }

    /// $a - b$.
    #[must_use]
    pub fn sub(&self, lhs: &FieldElement<M>, rhs: &FieldElement<M>) -> FieldElement<M> {
        self.traced("sub", &[lhs, rhs], || *lhs - *rhs)
    }

    /// $-a$.
    #[must_use]
    pub fn negate(&self, value: &FieldElement<M>) -> FieldElement<M> {
        self.traced("negate", &[value], || -*value)
    }

    /// $a b$.
    #[must_use]
    pub fn mul(&self, lhs: &FieldElement<M>, rhs: &FieldElement<M>) -> FieldElement<M> {
        self.traced("mul", &[lhs, rhs], || *lhs * *rhs)
    }

    /// $a / b$.
    pub fn div(
        &self,
        lhs: &FieldElement<M>,
        rhs: &FieldElement<M>,
    ) -> Result<FieldElement<M>, ArithmeticError> {
        self.traced("div", &[lhs, rhs], || lhs.div(rhs))
    }

    /// $a^{-1}$.
    pub fn inverse(&self, value: &FieldElement<M>) -> Result<FieldElement<M>, ArithmeticError> {
        self.traced("inv", &[value], || value.inverse())
    }

    /// $a^2$.
    #[must_use]
    pub fn square(&self, value: &FieldElement<M>) -> FieldElement<M> {
        self.traced("square", &[value], || value.square())
    }

    /// $a^{e}$.
    #[must_use]
    pub fn pow(&self, base: &FieldElement<M>, exponent: &U256) -> FieldElement<M> {
        self.traced("pow", &[base, exponent], || base.pow(exponent))
    }

    /// Quadratic residue test.
    #[must_use]
    pub fn is_square(&self, value: &FieldElement<M>) -> bool {
        self.traced("is_square", &[value], || value.is_square())
    }

    /// A square root, or `None` for a non-residue.
    #[must_use]
    pub fn sqrt(&self, value: &FieldElement<M>) -> Option<FieldElement<M>> {
        self.traced("sqrt", &[value], || value.sqrt())
    }

    /// Embed a machine integer.
    #[must_use]
    pub fn of_int(&self, int: i64) -> FieldElement<M> {
        self.traced("of_int", &[&int], || FieldElement::from_i64(int))
    }

    /// Parse a canonical decimal string.
    pub fn of_decimal_string(&self, decimal: &str) -> Result<FieldElement<M>, ArithmeticError> {
        self.traced("of_decimal_string", &[&decimal], || {
            FieldElement::from_decimal(decimal)
        })
    }

    /// Decimal representation.
    #[must_use]
    pub fn to_string(&self, value: &FieldElement<M>) -> String {
        self.traced("to_string", &[value], || value.to_string())
    }

    /// Order of the canonical representatives.
    #[must_use]
    pub fn compare(&self, lhs: &FieldElement<M>, rhs: &FieldElement<M>) -> Ordering {
        self.traced("compare", &[lhs, rhs], || lhs.cmp(rhs))
    }

    /// Equality.
    #[must_use]
    pub fn equal(&self, lhs: &FieldElement<M>, rhs: &FieldElement<M>) -> bool {
        self.traced("equal", &[lhs, rhs], || lhs == rhs)
    }

    /// A uniformly random element from the thread-local generator.
    #[must_use]
    pub fn random(&self) -> FieldElement<M> {
        self.traced("random", &[], || FieldElement::random(&mut thread_rng()))
    }

    /// A random element from a seeded generator.
    #[must_use]
    pub fn rng(&self, seed: u64) -> FieldElement<M> {
        self.traced("rng", &[&seed], || FieldElement::rng(seed))
    }

    /// The canonical integer.
    #[must_use]
    pub fn to_bigint(&self, value: &FieldElement<M>) -> U256 {
        self.traced("to_bigint", &[value], || value.to_bigint())
    }

    /// Accept a canonical integer.
    pub fn of_bigint(&self, value: &U256) -> Result<FieldElement<M>, ArithmeticError> {
        self.traced("of_bigint", &[value], || FieldElement::from_bigint(*value))
    }

    /// The primitive $2^{32}$-th root of unity.
    #[must_use]
    pub fn two_adic_root_of_unity(&self) -> FieldElement<M> {
        self.traced(
            "two_adic_root_of_unity",
            &[],
            FieldElement::two_adic_root_of_unity,
        )
    }

    /// Generator of the subgroup of order $2^{k}$, $k \le 32$.
    pub fn domain_generator(&self, log2_size: u32) -> Result<FieldElement<M>, ArithmeticError> {
        self.traced("domain_generator", &[&log2_size], || {
            FieldElement::domain_generator(log2_size)
        })
    }

    /// 32-byte little-endian encoding.
    #[must_use]
    pub fn to_bytes(&self, value: &FieldElement<M>) -> [u8; NUM_BYTES] {
        self.traced("to_bytes", &[value], || value.to_bytes())
    }

    /// Decode exactly 32 little-endian bytes of a canonical value.
    pub fn of_bytes(&self, bytes: &[u8]) -> Result<FieldElement<M>, ArithmeticError> {
        self.traced("of_bytes", &[&bytes], || FieldElement::from_slice(bytes))
    }

    /// An independent copy.
    #[must_use]
    pub fn deep_copy(&self, value: &FieldElement<M>) -> FieldElement<M> {
        self.traced("deep_copy", &[value], || *value)
    }
}

/// Curve operations for `C`.
#[derive(Debug)]
pub struct CurveOps<'ctx, C: CurveParams, S: Sink> {
    tracer: &'ctx Tracer<S>,
    affine: AffineConversion,
    curve: PhantomData<C>,
}

impl<'ctx, C: CurveParams, S: Sink> CurveOps<'ctx, C, S> {
    const fn new(tracer: &'ctx Tracer<S>, affine: AffineConversion) -> Self {
        Self {
            tracer,
            affine,
            curve: PhantomData,
        }
    }

    fn traced<T>(&self, op: &'static str, args: &[&dyn fmt::Debug], body: impl FnOnce() -> T) -> T {
        self.tracer.call(C::NAME, op, args, body)
    }

    /// The generator.
    #[must_use]
    pub fn one(&self) -> ProjectivePoint<C> {
        self.traced("one", &[], ProjectivePoint::generator)
    }

    /// Incomplete addition; see [`ProjectivePoint::add`].
    #[must_use]
    pub fn add(&self, lhs: &ProjectivePoint<C>, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        self.traced("add", &[lhs, rhs], || lhs.add(rhs))
    }

    /// `add(lhs, negate(rhs))`.
    #[must_use]
    pub fn sub(&self, lhs: &ProjectivePoint<C>, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        self.traced("sub", &[lhs, rhs], || lhs.sub(rhs))
    }

    /// $-P$.
    #[must_use]
    pub fn negate(&self, point: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        self.traced("negate", &[point], || point.negate())
    }

    /// $2P$.
    #[must_use]
    pub fn double(&self, point: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        self.traced("double", &[point], || point.double())
    }

    /// $[k] P$.
    #[must_use]
    pub fn scale(
        &self,
        point: &ProjectivePoint<C>,
        scalar: &FieldElement<C::Scalar>,
    ) -> ProjectivePoint<C> {
        self.traced("scale", &[point, scalar], || point.scale(scalar))
    }

    /// Endomorphism base-field constant $\beta$.
    #[must_use]
    pub fn endo_base(&self) -> FieldElement<C::Base> {
        self.traced("endo_base", &[], C::endo_base)
    }

    /// Endomorphism scalar-field constant $\lambda$.
    #[must_use]
    pub fn endo_scalar(&self) -> FieldElement<C::Scalar> {
        self.traced("endo_scalar", &[], C::endo_scalar)
    }

    /// Normalize with the configured [`AffineConversion`].
    #[must_use]
    pub fn to_affine(&self, point: &ProjectivePoint<C>) -> AffinePoint<C> {
        self.traced("to_affine", &[point], || point.to_affine_with(self.affine))
    }

    /// Lift affine coordinates with $Z = 1$.
    #[must_use]
    pub fn of_affine_coordinates(
        &self,
        x: &FieldElement<C::Base>,
        y: &FieldElement<C::Base>,
    ) -> ProjectivePoint<C> {
        self.traced("of_affine_coordinates", &[x, y], || {
            ProjectivePoint::of_affine_coordinates(*x, *y)
        })
    }

    /// A random multiple of the generator.
    #[must_use]
    pub fn random(&self) -> ProjectivePoint<C> {
        self.traced("random", &[], || ProjectivePoint::random(&mut thread_rng()))
    }

    /// A random multiple of the generator from a seeded generator.
    #[must_use]
    pub fn rng(&self, seed: u64) -> ProjectivePoint<C> {
        self.traced("rng", &[&seed], || ProjectivePoint::rng(seed))
    }
}

/// 256-bit integer operations.
#[derive(Debug)]
pub struct BigIntOps<'ctx, S: Sink> {
    tracer: &'ctx Tracer<S>,
}

impl<S: Sink> BigIntOps<'_, S> {
    fn traced<T>(&self, op: &'static str, args: &[&dyn fmt::Debug], body: impl FnOnce() -> T) -> T {
        self.tracer.call(BIGINT_FAMILY, op, args, body)
    }

    /// Limbs per integer, 4.
    #[must_use]
    pub fn num_limbs(&self) -> usize {
        self.traced("num_limbs", &[], || NUM_LIMBS)
    }

    /// Bytes per limb, 8.
    #[must_use]
    pub fn bytes_per_limb(&self) -> usize {
        self.traced("bytes_per_limb", &[], || bigint::BYTES_PER_LIMB)
    }

    /// Little-endian bytes of any length; nonzero bytes past the 32nd
    /// overflow.
    pub fn of_bytes(&self, bytes: &[u8]) -> Result<U256, ArithmeticError> {
        self.traced("of_bytes", &[&bytes], || bigint::bytes_to_integer(bytes))
    }

    /// 32 little-endian bytes.
    pub fn to_bytes(&self, value: &U256) -> Result<Vec<u8>, ArithmeticError> {
        self.traced("to_bytes", &[value], || {
            bigint::integer_to_bytes(value, Some(NUM_BYTES))
        })
    }

    /// Parse an unsigned decimal string.
    pub fn of_decimal_string(&self, decimal: &str) -> Result<U256, ArithmeticError> {
        self.traced("of_decimal_string", &[&decimal], || U256::from_str(decimal))
    }

    /// Parse unsigned digits in any base from 2 to 36.
    pub fn of_numeral(&self, digits: &str, base: u32) -> Result<U256, ArithmeticError> {
        self.traced("of_numeral", &[&digits, &base], || {
            U256::from_str_radix(digits, base)
        })
    }

    /// Decimal representation.
    #[must_use]
    pub fn to_string(&self, value: &U256) -> String {
        self.traced("to_string", &[value], || value.to_string())
    }

    /// Bit `index`, least significant first.
    #[must_use]
    pub fn test_bit(&self, value: &U256, index: usize) -> bool {
        self.traced("test_bit", &[value, &index], || value.bit(index))
    }

    /// Numeric order.
    #[must_use]
    pub fn compare(&self, lhs: &U256, rhs: &U256) -> Ordering {
        self.traced("compare", &[lhs, rhs], || lhs.cmp(rhs))
    }

    /// Truncating quotient.
    pub fn div(&self, lhs: &U256, rhs: &U256) -> Result<U256, ArithmeticError> {
        self.traced("div", &[lhs, rhs], || {
            lhs.div_rem(rhs).map(|(quotient, _)| quotient)
        })
    }

    /// An independent copy.
    #[must_use]
    pub fn deep_copy(&self, value: &U256) -> U256 {
        self.traced("deep_copy", &[value], || *value)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use proptest::prelude::*;

    use super::*;
    use crate::{
        field::{Fp, Fq},
        trace::Record,
    };

    #[derive(Debug, Default)]
    struct Collect(Mutex<Vec<String>>);

    impl Sink for Collect {
        fn record(&self, record: &Record<'_>) {
            self.0.lock().unwrap().push(record.to_string());
        }
    }

    fn traced_bindings(config: BackendConfig) -> Bindings<Collect> {
        Bindings::with_sink(config.with_trace(true), Collect::default())
    }

    /// Adding zero to arbitrary canonical bytes returns them unchanged.
    #[test]
    fn add_zero() {
        let bindings = Bindings::default();
        let fp = bindings.fp();
        let mut bytes = [0x5a; 32];
        bytes[31] = 0x3f;
        let element = fp.of_bytes(&bytes).unwrap();
        let sum = fp.add(&fp.of_int(0), &element);
        assert_eq!(fp.to_bytes(&sum), bytes, "0 + x");
    }

    /// inverse(2) * 2 = 1.
    #[test]
    fn half_times_two() {
        let bindings = Bindings::default();
        let fp = bindings.fp();
        let two = fp.of_int(2);
        let half = fp.inverse(&two).unwrap();
        assert!(fp.equal(&fp.mul(&half, &two), &fp.of_int(1)), "one");
    }

    /// 4 is a square and its root squares back to 4.
    #[test]
    fn sqrt_of_four() {
        let bindings = Bindings::default();
        let fp = bindings.fp();
        let four = fp.of_int(4);
        assert!(fp.is_square(&four), "is_square");
        let root = fp.sqrt(&four).unwrap();
        assert_eq!(fp.square(&root), four, "root^2");
    }

    /// The two-adic root raised to 2^32 is one.
    #[test]
    fn two_adic_root_to_two_pow_32() {
        let bindings = Bindings::default();
        let fp = bindings.fp();
        let exponent = U256::from_u64(1 << 32);
        assert_eq!(
            fp.pow(&fp.two_adic_root_of_unity(), &exponent),
            Fp::ONE,
            "omega^(2^32)"
        );
        let half = U256::from_u64(1 << 31);
        assert_eq!(
            fp.pow(&fp.two_adic_root_of_unity(), &half),
            fp.negate(&Fp::ONE),
            "omega^(2^31)"
        );
    }

    /// to_affine(one) is the documented generator on both curves.
    #[test]
    fn generator_affine() {
        let bindings = Bindings::default();
        let pallas = bindings.pallas();
        let affine = pallas.to_affine(&pallas.one());
        assert_eq!(
            affine,
            AffinePoint::new(
                Fp::ONE,
                Fp::from_decimal(
                    "12418654782883325593414442427049395787963493412651469444558597405572177144507"
                )
                .unwrap()
            ),
            "pallas"
        );
        let vesta = bindings.vesta();
        let other = vesta.to_affine(&vesta.one());
        assert_eq!(
            other,
            AffinePoint::new(
                Fq::ONE,
                Fq::from_decimal(
                    "11426906929455361843568202299992114520848200991084027513389447476559454104162"
                )
                .unwrap()
            ),
            "vesta"
        );
    }

    /// The configured conversion decides the affine y.
    #[test]
    fn configured_affine_conversion() {
        let compatible = Bindings::default();
        let exact = Bindings::from(BackendConfig::new().with_affine(AffineConversion::Exact));
        let point = compatible.pallas().rng(5);
        assert_eq!(
            compatible.pallas().to_affine(&point),
            point.to_affine_compatible(),
            "compatible by default"
        );
        assert_eq!(exact.pallas().to_affine(&point), point.to_affine(), "exact");
        assert!(exact.pallas().to_affine(&point).is_on_curve(), "exact is on curve");
    }

    /// A doubled point has Z != 1: only the exact conversion keeps it on the
    /// curve, and both agree on x.
    #[test]
    fn doubled_point_affine_forms() {
        let exact = Bindings::from(BackendConfig::new().with_affine(AffineConversion::Exact));
        let pallas = exact.pallas();
        let doubled = pallas.double(&pallas.one());
        assert_ne!(doubled.z, Fp::ONE, "projective z");
        let on_curve = pallas.to_affine(&doubled);
        assert!(on_curve.is_on_curve(), "exact 2G");

        let compatible = Bindings::default();
        let quirky = compatible.pallas().to_affine(&doubled);
        assert_eq!(quirky.x, on_curve.x, "same x");
        assert!(!quirky.is_on_curve(), "compatible 2G is off the curve");
    }

    /// Errors surface unchanged through the surface.
    #[test]
    fn errors() {
        let bindings = Bindings::default();
        let fq = bindings.fq();
        assert_eq!(fq.inverse(&Fq::ZERO), Err(ArithmeticError::Uninvertible), "inv 0");
        assert_eq!(fq.div(&Fq::ONE, &Fq::ZERO), Err(ArithmeticError::Uninvertible), "div 0");
        assert_eq!(
            fq.of_bytes(&[1; 33]),
            Err(ArithmeticError::Length {
                expected: 32,
                actual: 33
            }),
            "33 bytes"
        );
        assert_eq!(
            fq.of_bigint(&fq.size()),
            Err(ArithmeticError::NonCanonical),
            "q"
        );
        assert_eq!(
            fq.domain_generator(40),
            Err(ArithmeticError::DomainTooLarge { log2_size: 40 }),
            "2^40"
        );
        assert_eq!(fq.sqrt(&fq.two_adic_root_of_unity()), None, "no root");
    }

    /// The field surface exposes the remaining conversions.
    #[test]
    fn field_conversions() {
        let bindings = Bindings::default();
        let fq = bindings.fq();
        assert_eq!(fq.size_in_bits(), 255, "bits");
        let value = fq.of_decimal_string("1234567890").unwrap();
        assert_eq!(fq.to_string(&value), "1234567890", "decimal");
        assert_eq!(fq.of_bigint(&fq.to_bigint(&value)).unwrap(), value, "bigint");
        assert_eq!(fq.compare(&value, &fq.of_int(7)), Ordering::Greater, "compare");
        assert_eq!(fq.deep_copy(&value), value, "copy");
        assert_eq!(fq.of_int(-1), fq.negate(&Fq::ONE), "negative int");
        assert_eq!(fq.rng(11), fq.rng(11), "seeded");
        assert!(fq.random().to_bigint() < fq.size(), "random is canonical");
        assert_eq!(
            fq.domain_generator(32).unwrap(),
            fq.two_adic_root_of_unity(),
            "full domain"
        );
        assert_eq!(fq.sub(&value, &value), Fq::ZERO, "x - x");
    }

    /// Curve surface: endomorphism constants and known limitations of add.
    #[test]
    fn curve_surface() {
        let bindings = Bindings::default();
        let vesta = bindings.vesta();
        let generator = vesta.one();
        let scaled = vesta.scale(&generator, &vesta.endo_scalar());
        let exact = scaled.to_affine();
        assert_eq!(exact.x, vesta.endo_base() * generator.x, "beta x");

        let cancelled = vesta.add(&generator, &vesta.negate(&generator));
        assert!(cancelled.is_identity(), "P + (-P) has z = 0");
        assert!(vesta.to_affine(&cancelled).infinity, "normalizes to infinity");
        let doubled_wrongly = vesta.add(&generator, &generator);
        assert_ne!(
            vesta.to_affine(&doubled_wrongly),
            vesta.to_affine(&vesta.double(&generator)),
            "P + P is not 2P"
        );

        let lifted = vesta.of_affine_coordinates(&generator.x, &generator.y);
        assert_eq!(lifted, generator, "lift");
        let three = vesta.add(&generator, &vesta.double(&generator));
        assert_eq!(
            vesta.sub(&three, &generator).to_affine(),
            vesta.double(&generator).to_affine(),
            "3G - G"
        );
        assert!(vesta.random().to_affine().is_on_curve(), "random point");
    }

    /// Integer surface.
    #[test]
    fn bigint_surface() {
        let bindings = Bindings::default();
        let ints = bindings.bigint();
        assert_eq!(ints.num_limbs(), 4, "limbs");
        assert_eq!(ints.bytes_per_limb(), 8, "bytes per limb");
        let value = ints.of_decimal_string("1000").unwrap();
        assert_eq!(ints.to_string(&value), "1000", "decimal");
        assert!(ints.test_bit(&value, 3), "1000 = 0b1111101000");
        assert!(!ints.test_bit(&value, 0), "even");
        let bytes = ints.to_bytes(&value).unwrap();
        assert_eq!(bytes.len(), 32, "fixed length");
        assert_eq!(ints.of_bytes(&bytes).unwrap(), value, "round trip");
        assert_eq!(
            ints.div(&value, &U256::from_u64(7)).unwrap(),
            U256::from_u64(142),
            "1000 / 7"
        );
        assert_eq!(
            ints.div(&value, &U256::ZERO),
            Err(ArithmeticError::DivisionByZero),
            "div by zero"
        );
        assert_eq!(ints.compare(&value, &U256::ONE), Ordering::Greater, "compare");
        assert_eq!(ints.deep_copy(&value), value, "copy");
        assert_eq!(ints.of_numeral("3e8", 16).unwrap(), value, "hex numeral");
        assert_eq!(ints.of_numeral("1111101000", 2).unwrap(), value, "binary numeral");
        assert_eq!(
            ints.of_numeral("1000", 40),
            Err(ArithmeticError::InvalidRadix { radix: 40 }),
            "base 40"
        );
        assert_eq!(
            ints.of_numeral("19", 8),
            Err(ArithmeticError::InvalidNumeral),
            "9 is not octal"
        );
    }

    /// Tracing numbers calls per instance and names each operation.
    #[test]
    fn trace_records() {
        let bindings = traced_bindings(BackendConfig::new());
        let fp = bindings.fp();
        let sum = fp.add(&Fp::from(1u64), &Fp::from(2u64));
        assert_eq!(sum, Fp::from(3u64), "result unaffected");
        assert_eq!(bindings.pallas().one().z, Fp::ONE, "generator");
        assert_eq!(bindings.bigint().num_limbs(), 4, "limbs");
        assert_eq!(
            *bindings.tracer().sink().0.lock().unwrap(),
            [
                "#0 pasta_fp_add(pasta_fp(1), pasta_fp(2))",
                "#1 pallas_one()",
                "#2 bigint_256_num_limbs()",
            ],
            "records"
        );

        let other = traced_bindings(BackendConfig::new());
        assert_eq!(other.fq().of_int(5), Fq::from(5u64), "five");
        assert_eq!(
            *other.tracer().sink().0.lock().unwrap(),
            ["#0 pasta_fq_of_int(5)"],
            "independent counter"
        );
    }

    /// Untraced bindings leave the counter at zero.
    #[test]
    fn untraced_by_default() {
        let bindings = Bindings::with_sink(BackendConfig::default(), Collect::default());
        assert_eq!(bindings.fq().square(&Fq::from(3u64)), Fq::from(9u64), "nine");
        assert_eq!(bindings.tracer().emitted(), 0, "no records");
        assert!(!bindings.config().trace, "trace off");
    }

    proptest! {
        /// Field bytes round trip through the surface.
        #[test]
        fn bytes_round_trip(seed in any::<u64>()) {
            let bindings = Bindings::default();
            let fp = bindings.fp();
            let element = fp.rng(seed);
            prop_assert_eq!(fp.of_bytes(&fp.to_bytes(&element)).unwrap(), element);
        }

        /// Integer bytes round trip for everything below the modulus.
        #[test]
        fn integer_round_trip(seed in any::<u64>()) {
            let bindings = Bindings::default();
            let value = Fq::rng(seed).to_bigint();
            let ints = bindings.bigint();
            prop_assert_eq!(ints.of_bytes(&ints.to_bytes(&value).unwrap()).unwrap(), value);
        }
    }
}
