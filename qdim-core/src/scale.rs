//! Scale types and traits.

use crate::rational::Fraction;
use core::marker::PhantomData;

/// Trait implemented by every **scale** type.
///
/// `RATIO` is how many base units one stored unit represents. If metres are the base
/// (`Unity::RATIO == 1/1`) then kilometres use `Kilo::RATIO == 1000/1` because `1 km = 1000 m`.
///
/// Scales are zero-sized marker types; the ratio is an associated constant so every
/// combination below is evaluated by the compiler.
///
/// # Invariants
///
/// - `RATIO` is strictly positive and in lowest terms.
pub trait Scale: 'static {
    /// Scale-to-base ratio.
    const RATIO: Fraction;
}

/// A literal scale `N / D`.
///
/// Both components must be positive; `Ratio<1, 0>` fails to compile as soon as its ratio is
/// used.
///
/// ```rust
/// use qdim_core::{Ratio, Scale};
/// assert_eq!(<Ratio<1000>>::RATIO.num(), 1000);
/// assert_eq!(<Ratio<10_000, 393_694>>::RATIO.den(), 196_847);
/// ```
///
/// ```compile_fail
/// use qdim_core::{Ratio, Scale};
/// const BAD: qdim_core::Fraction = <Ratio<1, 0> as Scale>::RATIO;
/// let _ = BAD;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ratio<const N: i128, const D: i128 = 1>;

impl<const N: i128, const D: i128> Scale for Ratio<N, D> {
    const RATIO: Fraction = {
        assert!(N > 0 && D > 0, "scale ratio components must be positive");
        Fraction::new(N, D)
    };
}

/// Scale of a product `A * B`.
#[derive(Debug)]
pub struct ScaleMul<A, B>(PhantomData<(A, B)>);

impl<A: Scale, B: Scale> Scale for ScaleMul<A, B> {
    const RATIO: Fraction = A::RATIO.mul(B::RATIO);
}

/// Scale of a quotient `A / B`.
#[derive(Debug)]
pub struct ScaleDiv<A, B>(PhantomData<(A, B)>);

impl<A: Scale, B: Scale> Scale for ScaleDiv<A, B> {
    const RATIO: Fraction = A::RATIO.div(B::RATIO);
}

/// Scale of the reciprocal `1 / A`.
#[derive(Debug)]
pub struct ScaleRecip<A>(PhantomData<A>);

impl<A: Scale> Scale for ScaleRecip<A> {
    const RATIO: Fraction = A::RATIO.recip();
}

/// The finest scale both `A` and `B` convert to without a division:
/// `gcd(n1, n2) / lcm(d1, d2)`.
///
/// Sums, differences, remainders and comparisons are evaluated at this scale.
#[derive(Debug)]
pub struct CommonScale<A, B>(PhantomData<(A, B)>);

impl<A: Scale, B: Scale> Scale for CommonScale<A, B> {
    const RATIO: Fraction = A::RATIO.common(B::RATIO);
}

/// Transfer coefficient from one scale to another, `From / To` in lowest terms.
#[derive(Debug)]
pub struct Transfer<From, To>(PhantomData<(From, To)>);

impl<From: Scale, To: Scale> Transfer<From, To> {
    /// Multiply a value stored at `From` by this to express it at `To`.
    pub const COEF: Fraction = From::RATIO.div(To::RATIO);
}

// ─────────────────────────────────────────────────────────────────────────────
// SI and binary prefixes
// ─────────────────────────────────────────────────────────────────────────────

/// `10^-18`.
pub type Atto = Ratio<1, 1_000_000_000_000_000_000>;
/// `10^-15`.
pub type Femto = Ratio<1, 1_000_000_000_000_000>;
/// `10^-12`.
pub type Pico = Ratio<1, 1_000_000_000_000>;
/// `10^-9`.
pub type Nano = Ratio<1, 1_000_000_000>;
/// `10^-6`.
pub type Micro = Ratio<1, 1_000_000>;
/// `10^-3`.
pub type Milli = Ratio<1, 1_000>;
/// `10^-2`.
pub type Centi = Ratio<1, 100>;
/// `10^-1`.
pub type Deci = Ratio<1, 10>;
/// The base scale, `1/1`.
pub type Unity = Ratio<1, 1>;
/// `10^1`.
pub type Deca = Ratio<10>;
/// `10^2`.
pub type Hecto = Ratio<100>;
/// `10^3`.
pub type Kilo = Ratio<1_000>;
/// `10^6`.
pub type Mega = Ratio<1_000_000>;
/// `10^9`.
pub type Giga = Ratio<1_000_000_000>;
/// `10^12`.
pub type Tera = Ratio<1_000_000_000_000>;
/// `10^15`.
pub type Peta = Ratio<1_000_000_000_000_000>;
/// `10^18`.
pub type Exa = Ratio<1_000_000_000_000_000_000>;

/// `2^10`.
pub type Kibi = Ratio<1_024>;
/// `2^20`.
pub type Mebi = Ratio<1_048_576>;
/// `2^30`.
pub type Gibi = Ratio<1_073_741_824>;
/// `2^40`.
pub type Tebi = Ratio<1_099_511_627_776>;
/// `2^50`.
pub type Pebi = Ratio<1_125_899_906_842_624>;
