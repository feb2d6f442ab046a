//! Tightest-enclosure conversion of decimal literals.
//!
//! A decimal literal like `0.1` is usually not representable in binary, so
//! parsing it to one `f64` and treating that as a point interval would break
//! the enclosure guarantee for the decimal's true value. Conversion here
//! decides *exactly* which way round-to-nearest parsing missed, using
//! integer arithmetic, and widens one ULP on the deficient side only.

use crate::error::{IntervalError, IntervalResult};
use crate::interval::Interval;
use enc_core::numeric::{Real, decompose, ensure_finite};
use num_bigint::BigUint;
use num_traits::Zero;
use std::cmp::Ordering;

/// An exact decimal value `sign * digits * 10^exp10`.
#[derive(Clone, Debug)]
pub struct Decimal {
    negative: bool,
    digits: BigUint,
    exp10: i64,
}

impl Decimal {
    /// Parses `[+-]?digits[.digits][(e|E)[+-]?digits]`.
    pub fn parse(s: &str) -> IntervalResult<Self> {
        let err = |what: &str| IntervalError::DecimalParse {
            what: format!("{what} in {s:?}"),
        };

        let mut rest = s.trim();
        let negative = match rest.as_bytes().first() {
            Some(&b'-') => {
                rest = &rest[1..];
                true
            }
            Some(&b'+') => {
                rest = &rest[1..];
                false
            }
            _ => false,
        };

        let (mantissa_part, exp_part) = match rest.find(['e', 'E']) {
            Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
            None => (rest, None),
        };

        let (int_part, frac_part) = match mantissa_part.find('.') {
            Some(idx) => (&mantissa_part[..idx], &mantissa_part[idx + 1..]),
            None => (mantissa_part, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(err("no digits"));
        }
        let all_digits: String = int_part.chars().chain(frac_part.chars()).collect();
        if !all_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err("invalid digit"));
        }

        let digits = all_digits
            .parse::<BigUint>()
            .map_err(|_| err("digit overflow"))?;
        let mut exp10 = -(frac_part.len() as i64);
        if let Some(e) = exp_part {
            let e: i64 = e.parse().map_err(|_| err("invalid exponent"))?;
            exp10 += e;
        }

        Ok(Self {
            negative: negative && !digits.is_zero(),
            digits,
            exp10,
        })
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }
}

/// Exact ordering of a finite float against a decimal value.
///
/// Compares `m * 2^e` against `d * 10^q` by scaling both to integers; no
/// floating-point rounding is involved.
pub fn cmp_f64_decimal(v: Real, d: &Decimal) -> Ordering {
    debug_assert!(v.is_finite());

    // Settle by sign before doing any big arithmetic.
    let v_neg = v < 0.0;
    if v == 0.0 && d.is_zero() {
        return Ordering::Equal;
    }
    if v == 0.0 {
        return if d.negative {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if d.is_zero() {
        return if v_neg { Ordering::Less } else { Ordering::Greater };
    }
    if v_neg != d.negative {
        return if v_neg { Ordering::Less } else { Ordering::Greater };
    }

    let (m, e) = decompose(v.abs());
    let m = BigUint::from(m as u64);
    let q = d.exp10;

    // |v| = m * 2^e, |d| = digits * 10^q. Multiply both sides by
    // 10^max(-q,0) * 2^max(-e,0) so every exponent is non-negative.
    let ten = BigUint::from(10u32);
    let lhs = m * pow2(e.max(0) as u64) * ten.pow((-q).max(0) as u32);
    let rhs = &d.digits * pow2((-(e as i64)).max(0) as u64) * ten.pow(q.max(0) as u32);

    let mag = lhs.cmp(&rhs);
    if v_neg { mag.reverse() } else { mag }
}

fn pow2(e: u64) -> BigUint {
    BigUint::from(1u32) << e
}

impl Interval {
    /// Tightest enclosure of a decimal literal.
    ///
    /// Returns a point interval when the decimal is exactly representable,
    /// otherwise an interval exactly one ULP wide with the parsed float on
    /// the side round-to-nearest chose.
    pub fn from_decimal(s: &str) -> IntervalResult<Interval> {
        let d = Decimal::parse(s)?;
        let v: Real = s.trim().parse().map_err(|_| IntervalError::DecimalParse {
            what: format!("float parse of {s:?}"),
        })?;
        let v = ensure_finite(v, "parsed decimal literal")?;
        Ok(match cmp_f64_decimal(v, &d) {
            Ordering::Equal => Interval::point(v),
            Ordering::Less => Interval::new(v, v.next_up()),
            Ordering::Greater => Interval::new(v.next_down(), v),
        })
    }
}
