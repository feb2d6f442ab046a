//! The interval type and its outward-rounded arithmetic operators.

use crate::error::{IntervalError, IntervalResult};
use enc_core::numeric::{Real, int_is_exact};
use enc_core::rounding::{
    add_enclosure, div_enclosure, mul_down, mul_up, sqrt_enclosure, sub_down, sub_up,
};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A closed real interval `[lo, hi]` with outward-rounded arithmetic.
///
/// # Invariants
/// `lo <= hi` always holds and neither bound is NaN. Bounds may be infinite
/// after an overflow saturated them; [`Interval::is_bounded`] reports this.
///
/// Intervals are immutable values: every operation builds a fresh interval.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Interval {
    lo: Real,
    hi: Real,
}

/// Sign classification used by the multiplication case analysis.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Sign {
    /// `lo >= 0`
    NonNeg,
    /// `hi <= 0`
    NonPos,
    /// `lo < 0 < hi`
    Straddle,
}

impl Interval {
    /// Creates `[lo, hi]`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or either bound is NaN. Use [`Interval::try_new`]
    /// for untrusted input.
    pub fn new(lo: Real, hi: Real) -> Self {
        assert!(
            lo <= hi,
            "Invalid interval: lo must be less than or equal to hi (got [{lo}, {hi}])"
        );
        Self { lo, hi }
    }

    /// Creates `[lo, hi]` if the bounds are ordered and not NaN.
    pub fn try_new(lo: Real, hi: Real) -> IntervalResult<Self> {
        if lo <= hi {
            Ok(Self { lo, hi })
        } else {
            Err(IntervalError::InvalidConstruction { lo, hi })
        }
    }

    /// The degenerate interval `[x, x]`.
    ///
    /// An `f64` value is exactly representable by definition, so the tightest
    /// enclosure of a scalar is the point interval. Decimal literals are a
    /// different matter; see [`Interval::from_decimal`](crate::convert).
    pub fn point(x: Real) -> Self {
        debug_assert!(x.is_finite(), "point interval requires a finite value");
        Self { lo: x, hi: x }
    }

    /// Point interval of an exact integer.
    ///
    /// Fails if `n` does not convert to `f64` without rounding; silently
    /// rounding the integer would corrupt every bound derived from it.
    pub fn exact_int(n: u64) -> IntervalResult<Self> {
        if int_is_exact(n) {
            Ok(Self::point(n as Real))
        } else {
            Err(IntervalError::IntegerNotRepresentable(n))
        }
    }

    pub fn lo(&self) -> Real {
        self.lo
    }

    pub fn hi(&self) -> Real {
        self.hi
    }

    /// Whether `v` lies in the closed set `[lo, hi]`.
    pub fn contains(&self, v: Real) -> bool {
        self.lo <= v && v <= self.hi
    }

    pub fn is_point(&self) -> bool {
        self.lo == self.hi
    }

    /// False once any bound has saturated to an infinity.
    pub fn is_bounded(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }

    /// Outward-rounded division. Fails when the divisor interval contains
    /// zero: the true quotient set is then unbounded (or two-component),
    /// which this engine does not represent.
    pub fn div(self, rhs: Interval) -> IntervalResult<Interval> {
        if rhs.lo <= 0.0 && rhs.hi >= 0.0 {
            return Err(IntervalError::DivisorStraddlesZero {
                lo: rhs.lo,
                hi: rhs.hi,
            });
        }
        // A / B = A * [1/b_hi, 1/b_lo], reciprocals rounded outward. Both
        // roundings are outward, so the composition is still an enclosure.
        let (r_lo, _) = div_enclosure(1.0, rhs.hi);
        let (_, r_hi) = div_enclosure(1.0, rhs.lo);
        Ok(self * Interval { lo: r_lo, hi: r_hi })
    }

    /// Outward-rounded square root. Fails when the domain reaches below
    /// zero; clamping instead would silently misreport the enclosure.
    pub fn sqrt(self) -> IntervalResult<Interval> {
        if self.lo < 0.0 {
            return Err(IntervalError::NegativeSqrtDomain {
                lo: self.lo,
                hi: self.hi,
            });
        }
        let (lo, _) = sqrt_enclosure(self.lo);
        let (_, hi) = sqrt_enclosure(self.hi);
        Ok(Self::result(lo, hi))
    }

    fn sign(&self) -> Sign {
        if self.lo >= 0.0 {
            Sign::NonNeg
        } else if self.hi <= 0.0 {
            Sign::NonPos
        } else {
            Sign::Straddle
        }
    }

    /// Assembles an arithmetic result, reporting bound saturation.
    fn result(lo: Real, hi: Real) -> Self {
        debug_assert!(lo <= hi, "arithmetic produced unordered bounds");
        if !(lo.is_finite() && hi.is_finite()) {
            tracing::warn!(lo, hi, "interval bound saturated to infinity");
        }
        Self { lo, hi }
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        let (lo, _) = add_enclosure(self.lo, rhs.lo);
        let (_, hi) = add_enclosure(self.hi, rhs.hi);
        Interval::result(lo, hi)
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        Interval::result(sub_down(self.lo, rhs.hi), sub_up(self.hi, rhs.lo))
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        // Negation is exact: no rounding, no widening.
        Interval {
            lo: -self.hi,
            hi: -self.lo,
        }
    }
}

impl Mul for Interval {
    type Output = Interval;

    /// Sign-partition case analysis. Each case picks the corner products
    /// that realize the minimum and maximum of the true product set; only
    /// the straddle-times-straddle case needs two candidates per side.
    fn mul(self, rhs: Interval) -> Interval {
        let (a, b) = (self, rhs);
        let (lo, hi) = match (a.sign(), b.sign()) {
            (Sign::NonNeg, Sign::NonNeg) => (mul_down(a.lo, b.lo), mul_up(a.hi, b.hi)),
            (Sign::NonNeg, Sign::NonPos) => (mul_down(a.hi, b.lo), mul_up(a.lo, b.hi)),
            (Sign::NonNeg, Sign::Straddle) => (mul_down(a.hi, b.lo), mul_up(a.hi, b.hi)),
            (Sign::NonPos, Sign::NonNeg) => (mul_down(a.lo, b.hi), mul_up(a.hi, b.lo)),
            (Sign::NonPos, Sign::NonPos) => (mul_down(a.hi, b.hi), mul_up(a.lo, b.lo)),
            (Sign::NonPos, Sign::Straddle) => (mul_down(a.lo, b.hi), mul_up(a.lo, b.lo)),
            (Sign::Straddle, Sign::NonNeg) => (mul_down(a.lo, b.hi), mul_up(a.hi, b.hi)),
            (Sign::Straddle, Sign::NonPos) => (mul_down(a.hi, b.lo), mul_up(a.lo, b.lo)),
            (Sign::Straddle, Sign::Straddle) => (
                mul_down(a.lo, b.hi).min(mul_down(a.hi, b.lo)),
                mul_up(a.lo, b.lo).max(mul_up(a.hi, b.hi)),
            ),
        };
        Interval::result(lo, hi)
    }
}

// Scalar promotion: a bare f64 on either side of an operator is promoted to
// a point interval. This is the statically-typed counterpart of implicit
// literal-to-interval rewriting.

impl Add<Real> for Interval {
    type Output = Interval;

    fn add(self, rhs: Real) -> Interval {
        self + Interval::point(rhs)
    }
}

impl Add<Interval> for Real {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval::point(self) + rhs
    }
}

impl Sub<Real> for Interval {
    type Output = Interval;

    fn sub(self, rhs: Real) -> Interval {
        self - Interval::point(rhs)
    }
}

impl Sub<Interval> for Real {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        Interval::point(self) - rhs
    }
}

impl Mul<Real> for Interval {
    type Output = Interval;

    fn mul(self, rhs: Real) -> Interval {
        self * Interval::point(rhs)
    }
}

impl Mul<Interval> for Real {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        Interval::point(self) * rhs
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:e}, {:e}]", self.lo, self.hi)
    }
}
