//! Reporting queries: diameter, midpoint-radius form, and membership of
//! higher-precision decimal references.
//!
//! These are validation conveniences; none of them participates in the
//! enclosure arithmetic itself, but each is still computed so that what it
//! reports remains a sound claim about the interval.

use crate::convert::{Decimal, cmp_f64_decimal};
use crate::error::IntervalResult;
use crate::interval::Interval;
use enc_core::numeric::Real;
use enc_core::rounding::sub_up;
use std::cmp::Ordering;

impl Interval {
    /// Width `hi - lo`, rounded upward so the reported diameter is itself a
    /// valid upper bound on the true width.
    pub fn diameter(&self) -> Real {
        sub_up(self.hi(), self.lo())
    }

    /// Midpoint-radius form `(mid, r)` with `mid - r <= lo` and
    /// `hi <= mid + r` guaranteed despite the roundings involved.
    pub fn midpoint_radius(&self) -> (Real, Real) {
        if !self.is_bounded() {
            // No finite center-and-radius pair covers a saturated bound.
            let mid = if self.lo().is_finite() {
                self.lo()
            } else if self.hi().is_finite() {
                self.hi()
            } else {
                0.0
            };
            return (mid, Real::INFINITY);
        }
        let mid = (self.lo() + (self.hi() - self.lo()) / 2.0)
            .max(self.lo())
            .min(self.hi());
        let r = sub_up(self.hi(), mid).max(sub_up(mid, self.lo()));
        (mid, r)
    }

    /// Membership of a decimal reference value, compared exactly.
    ///
    /// The reference may carry far more digits than an `f64` resolves;
    /// the comparison happens in integer arithmetic so no rounding is
    /// reintroduced at the boundary.
    pub fn contains_decimal(&self, reference: &str) -> IntervalResult<bool> {
        let d = Decimal::parse(reference)?;
        Ok(cmp_f64_decimal(self.lo(), &d) != Ordering::Greater
            && cmp_f64_decimal(self.hi(), &d) != Ordering::Less)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diameter_of_point_is_zero() {
        assert_eq!(Interval::point(3.5).diameter(), 0.0);
    }

    #[test]
    fn diameter_bounds_true_width() {
        let iv = Interval::new(0.1, 0.3);
        // True width 0.2 (in the reals of these binary endpoints) never
        // exceeds the upward-rounded report.
        assert!(iv.diameter() >= iv.hi() - iv.lo());
    }

    #[test]
    fn midpoint_radius_covers_both_ends() {
        for (lo, hi) in [(1.0, 2.0), (-3.0, 7.5), (0.1, 0.1000000001), (-1e300, 1e300)] {
            let iv = Interval::new(lo, hi);
            let (mid, r) = iv.midpoint_radius();
            assert!(iv.contains(mid));
            assert!(mid - r <= lo, "[{lo}, {hi}]");
            assert!(hi <= mid + r, "[{lo}, {hi}]");
        }
    }

    #[test]
    fn contains_decimal_reference() {
        let iv = Interval::from_decimal("0.1").unwrap();
        assert!(iv.contains_decimal("0.1").unwrap());
        assert!(!iv.contains_decimal("0.2").unwrap());

        let sqrt2 = Interval::point(2.0).sqrt().unwrap();
        assert!(
            sqrt2
                .contains_decimal("1.41421356237309504880168872420969808")
                .unwrap()
        );
    }
}
