//! Exact integer helpers and the [`Fraction`] value used for scale ratios.
//!
//! Everything here is `const fn`: scale ratios are associated constants of [`Scale`](crate::Scale)
//! types, so reductions, products and quotients are evaluated by the compiler. An invalid ratio
//! (zero denominator, overflow while combining) therefore surfaces as a compile-time error at the
//! point where the constant is first used.

use core::fmt::{Display, Formatter, Result};

/// Returns `-1` for negative values and `1` otherwise (zero counts as positive).
#[inline]
pub const fn sign(value: i128) -> i128 {
    if value < 0 {
        -1
    } else {
        1
    }
}

/// Absolute value.
#[inline]
pub const fn abs(value: i128) -> i128 {
    value * sign(value)
}

/// Greatest common divisor, always non-negative.
///
/// `gcd(0, x) == |x|` and `gcd(x, 0) == |x|`.
///
/// ```rust
/// use qdim_core::rational::gcd;
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(0, 7), 7);
/// assert_eq!(gcd(-4, 6), 2);
/// ```
pub const fn gcd(first: i128, second: i128) -> i128 {
    let mut a = abs(first);
    let mut b = abs(second);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, `|a * b| / gcd(a, b)`; `0` when either input is `0`.
///
/// ```rust
/// use qdim_core::rational::lcm;
/// assert_eq!(lcm(4, 6), 12);
/// assert_eq!(lcm(1000, 100), 1000);
/// ```
pub const fn lcm(first: i128, second: i128) -> i128 {
    if first == 0 || second == 0 {
        return 0;
    }
    // Divide before multiplying to keep the intermediate small.
    abs(first / gcd(first, second) * second)
}

/// An exact rational number in lowest terms with a positive denominator.
///
/// `Fraction` is the runtime face of a [`Scale`](crate::Scale): `Kilo::RATIO` is `1000/1`,
/// `Milli::RATIO` is `1/1000`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: i128,
    den: i128,
}

impl Fraction {
    /// The multiplicative identity, `1/1`.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Builds a reduced fraction.
    ///
    /// # Panics
    ///
    /// Panics when `den == 0` or when either component is `i128::MIN`, whose magnitude has no
    /// `i128` representation. Inside a constant this is reported by the compiler.
    ///
    /// ```rust
    /// use qdim_core::Fraction;
    /// let f = Fraction::new(10_000, 393_694);
    /// assert_eq!((f.num(), f.den()), (5_000, 196_847));
    /// assert_eq!(Fraction::new(3, -6), Fraction::new(-1, 2));
    /// ```
    pub const fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "fraction denominator must be non-zero");
        assert!(num != i128::MIN && den != i128::MIN, "fraction components must not be i128::MIN");
        let g = gcd(num, den);
        let s = sign(den);
        Self {
            num: s * num / g,
            den: s * den / g,
        }
    }

    /// Numerator (carries the sign).
    #[inline]
    pub const fn num(&self) -> i128 {
        self.num
    }

    /// Denominator (always positive).
    #[inline]
    pub const fn den(&self) -> i128 {
        self.den
    }

    /// `true` for `1/1`.
    #[inline]
    pub const fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// `true` when the denominator is `1`.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// Product, cross-cancelling before multiplying.
    pub const fn mul(self, rhs: Self) -> Self {
        let g12 = gcd(self.num, rhs.den);
        let g21 = gcd(rhs.num, self.den);
        Self::new(
            self.num / g12 * (rhs.num / g21),
            self.den / g21 * (rhs.den / g12),
        )
    }

    /// Quotient, cancelling numerators and denominators pairwise first.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero.
    pub const fn div(self, rhs: Self) -> Self {
        assert!(rhs.num != 0, "cannot divide by a zero fraction");
        let g_num = gcd(self.num, rhs.num);
        let g_den = gcd(rhs.den, self.den);
        Self::new(
            self.num / g_num * (rhs.den / g_den),
            self.den / g_den * (rhs.num / g_num),
        )
    }

    /// Reciprocal.
    ///
    /// # Panics
    ///
    /// Panics on a zero fraction.
    pub const fn recip(self) -> Self {
        Self::new(self.den, self.num)
    }

    /// The coarsest fraction that divides both operands an integral number of times,
    /// `gcd(n1, n2) / lcm(d1, d2)`.
    ///
    /// Values stored at either scale convert to this one by a pure multiplication.
    ///
    /// ```rust
    /// use qdim_core::Fraction;
    /// let mm = Fraction::new(1, 1000);
    /// let cm = Fraction::new(1, 100);
    /// assert_eq!(Fraction::common(mm, cm), mm);
    /// assert_eq!(Fraction::common(Fraction::new(1000, 1), Fraction::ONE), Fraction::ONE);
    /// ```
    pub const fn common(self, rhs: Self) -> Self {
        Self::new(gcd(self.num, rhs.num), lcm(self.den, rhs.den))
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn gcd_edge_cases() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(9, 0), 9);
        assert_eq!(gcd(7, 7), 7);
        assert_eq!(gcd(1, 1_000_000), 1);
        assert_eq!(gcd(-12, -8), 4);
    }

    #[test]
    fn lcm_matches_definition() {
        assert_eq!(lcm(21, 6), 42);
        assert_eq!(lcm(-3, 5), 15);
        assert_eq!(lcm(0, 5), 0);
        assert_eq!(lcm(196_847, 196_847), 196_847);
    }

    #[test]
    fn sign_and_abs() {
        assert_eq!(sign(-5), -1);
        assert_eq!(sign(0), 1);
        assert_eq!(sign(5), 1);
        assert_eq!(abs(-5), 5);
        assert_eq!(abs(0), 0);
    }

    #[test]
    fn fraction_reduces_and_normalises_sign() {
        let f = Fraction::new(120_000, 393_694);
        assert_eq!((f.num(), f.den()), (60_000, 196_847));
        let neg = Fraction::new(2, -4);
        assert_eq!((neg.num(), neg.den()), (-1, 2));
        assert_eq!(Fraction::new(0, -7), Fraction::new(0, 1));
    }

    #[test]
    #[should_panic(expected = "denominator must be non-zero")]
    fn fraction_rejects_zero_denominator() {
        let _ = Fraction::new(1, 0);
    }

    #[test]
    #[should_panic(expected = "must not be i128::MIN")]
    fn fraction_rejects_unrepresentable_magnitude() {
        let _ = Fraction::new(i128::MIN, 1);
    }

    #[test]
    fn fraction_mul_div() {
        let kilo = Fraction::new(1000, 1);
        let milli = Fraction::new(1, 1000);
        assert_eq!(kilo.mul(milli), Fraction::ONE);
        assert_eq!(kilo.mul(kilo), Fraction::new(1_000_000, 1));
        assert_eq!(kilo.div(milli), Fraction::new(1_000_000, 1));
        assert_eq!(milli.div(kilo), Fraction::new(1, 1_000_000));
        assert_eq!(Fraction::new(2, 3).mul(Fraction::new(9, 4)), Fraction::new(3, 2));
        assert_eq!(kilo.recip(), milli);
    }

    #[test]
    fn fraction_display() {
        assert_eq!(format!("{}", Fraction::new(1000, 1)), "1000/1");
        assert_eq!(format!("{}", Fraction::new(-3, 9)), "-1/3");
    }

    #[test]
    fn fraction_predicates() {
        assert!(Fraction::ONE.is_one());
        assert!(Fraction::new(5, 5).is_one());
        assert!(Fraction::new(1000, 1).is_integer());
        assert!(!Fraction::new(1, 1000).is_integer());
    }

    proptest! {
        #[test]
        fn prop_gcd_divides_both(a in -100_000i128..100_000, b in -100_000i128..100_000) {
            let g = gcd(a, b);
            prop_assert!(g >= 0);
            if g != 0 {
                prop_assert_eq!(a % g, 0);
                prop_assert_eq!(b % g, 0);
            }
        }

        #[test]
        fn prop_gcd_times_lcm(a in 1i128..100_000, b in 1i128..100_000) {
            prop_assert_eq!(gcd(a, b) * lcm(a, b), a * b);
        }

        #[test]
        fn prop_common_divides_both(n1 in 1i128..10_000, d1 in 1i128..10_000, n2 in 1i128..10_000, d2 in 1i128..10_000) {
            let a = Fraction::new(n1, d1);
            let b = Fraction::new(n2, d2);
            let c = a.common(b);
            prop_assert!(a.div(c).is_integer());
            prop_assert!(b.div(c).is_integer());
        }

        #[test]
        fn prop_mul_then_div_roundtrips(n1 in 1i128..10_000, d1 in 1i128..10_000, n2 in 1i128..10_000, d2 in 1i128..10_000) {
            let a = Fraction::new(n1, d1);
            let b = Fraction::new(n2, d2);
            prop_assert_eq!(a.mul(b).div(b), a);
        }
    }
}
