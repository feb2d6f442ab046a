//! Directed-rounding scalar primitives.
//!
//! Each operation returns a `(down, up)` pair bracketing the exact real
//! result: `down` is the largest representable value `<=` the exact result,
//! `up` the smallest representable value `>=` it (except in the subnormal
//! range, where both sides are widened one extra ULP; see below).
//!
//! The implementation never touches the hardware rounding-mode register.
//! It computes the round-to-nearest result together with an exact residual
//! and nudges one ULP outward only on the side the rounding actually moved:
//!
//! - add/sub: Knuth two-sum, whose error term is exact for all finite
//!   operands including subnormals;
//! - mul: FMA residual `fma(a, b, -p)`;
//! - div: FMA residual `fma(q, b, -a)`;
//! - sqrt: FMA residual `fma(s, s, -a)` (IEEE sqrt is correctly rounded, so
//!   one ULP always suffices).
//!
//! The FMA residual of a result near the bottom of the normal range can
//! itself flush to zero and masquerade as "exact": the residual lives about
//! 52 binary orders below the result, so it leaves the subnormal grid while
//! the result is still normal. Any result (or residual-scale operand) with
//! magnitude below [`RESIDUAL_FLOOR`] is therefore widened on both sides
//! unconditionally. Round-to-nearest overflow saturates the overflowed side
//! at the signed infinity and the other side at `±MAX`.

use crate::numeric::Real;

/// Smallest magnitude at which an FMA residual is still exactly
/// representable: one full significand above the smallest normal,
/// `MIN_POSITIVE / EPSILON = 2^-970`. Below this, residual signs cannot be
/// trusted and enclosures widen one ULP on both sides.
pub const RESIDUAL_FLOOR: Real = Real::MIN_POSITIVE / Real::EPSILON;

/// Knuth two-sum: returns `(s, e)` with `s = fl(a + b)` and `a + b = s + e`
/// exactly, for any finite `a`, `b` with finite `s`.
#[inline]
fn two_sum(a: Real, b: Real) -> (Real, Real) {
    let s = a + b;
    let bv = s - a;
    let av = s - bv;
    let e = (a - av) + (b - bv);
    (s, e)
}

#[inline]
fn saturate(sign_positive: bool) -> (Real, Real) {
    if sign_positive {
        (Real::MAX, Real::INFINITY)
    } else {
        (Real::NEG_INFINITY, Real::MIN)
    }
}

/// Nudge one ULP outward on the side indicated by the residual sign.
/// `residual > 0` means the rounded result overshot the exact value.
#[inline]
fn nudge(rounded: Real, residual_positive_means_high: bool, residual: Real) -> (Real, Real) {
    if residual == 0.0 {
        (rounded, rounded)
    } else if (residual > 0.0) == residual_positive_means_high {
        (rounded.next_down(), rounded)
    } else {
        (rounded, rounded.next_up())
    }
}

/// Enclosure of `a + b`.
pub fn add_enclosure(a: Real, b: Real) -> (Real, Real) {
    debug_assert!(!a.is_nan() && !b.is_nan());
    let (s, e) = two_sum(a, b);
    if s.is_infinite() {
        return saturate(s > 0.0);
    }
    // Two-sum residual: e > 0 means the exact sum exceeds s.
    nudge(s, false, e)
}

/// Enclosure of `a - b`.
pub fn sub_enclosure(a: Real, b: Real) -> (Real, Real) {
    add_enclosure(a, -b)
}

/// Enclosure of `a * b`.
///
/// Convention: `0 * ±inf = 0`, so a bound that has already saturated stays
/// sound when multiplied by an exact zero.
pub fn mul_enclosure(a: Real, b: Real) -> (Real, Real) {
    debug_assert!(!a.is_nan() && !b.is_nan());
    if a == 0.0 || b == 0.0 {
        return (0.0, 0.0);
    }
    let p = a * b;
    if p.is_infinite() {
        return saturate(p > 0.0);
    }
    if p.abs() < RESIDUAL_FLOOR {
        // The residual of a product this small can flush to zero even while
        // the product itself is still normal.
        return (p.next_down(), p.next_up());
    }
    let e = a.mul_add(b, -p);
    nudge(p, false, e)
}

/// Enclosure of `a / b`. Caller guarantees `b != 0`.
pub fn div_enclosure(a: Real, b: Real) -> (Real, Real) {
    debug_assert!(!a.is_nan() && !b.is_nan() && b != 0.0);
    if a == 0.0 {
        return (0.0, 0.0);
    }
    let q = a / b;
    if q.is_infinite() {
        return saturate(q > 0.0);
    }
    if q.abs() < RESIDUAL_FLOOR || a.abs() < RESIDUAL_FLOOR {
        // fma(q, b, -a) lives ~52 binary orders below a; too small either
        // way and it flushes to zero.
        return (q.next_down(), q.next_up());
    }
    // fma(q, b, -a) = (q - a/b) * b up to one exact rounding, so its sign
    // combined with the sign of b tells which way q missed.
    let e = q.mul_add(b, -a);
    nudge(q, b > 0.0, e)
}

/// Enclosure of `sqrt(a)`. Caller guarantees `a >= 0`.
pub fn sqrt_enclosure(a: Real) -> (Real, Real) {
    debug_assert!(a >= 0.0);
    if a == 0.0 {
        return (0.0, 0.0);
    }
    let s = a.sqrt();
    if a < RESIDUAL_FLOOR {
        // The residual fma(s, s, -a) is at the scale of a, not s; s itself
        // is comfortably normal here (>= 2^-485).
        return (s.next_down(), s.next_up());
    }
    let e = s.mul_add(s, -a);
    nudge(s, true, e)
}

pub fn add_down(a: Real, b: Real) -> Real {
    add_enclosure(a, b).0
}

pub fn add_up(a: Real, b: Real) -> Real {
    add_enclosure(a, b).1
}

pub fn sub_down(a: Real, b: Real) -> Real {
    sub_enclosure(a, b).0
}

pub fn sub_up(a: Real, b: Real) -> Real {
    sub_enclosure(a, b).1
}

pub fn mul_down(a: Real, b: Real) -> Real {
    mul_enclosure(a, b).0
}

pub fn mul_up(a: Real, b: Real) -> Real {
    mul_enclosure(a, b).1
}

pub fn div_down(a: Real, b: Real) -> Real {
    div_enclosure(a, b).0
}

pub fn div_up(a: Real, b: Real) -> Real {
    div_enclosure(a, b).1
}

pub fn sqrt_down(a: Real) -> Real {
    sqrt_enclosure(a).0
}

pub fn sqrt_up(a: Real) -> Real {
    sqrt_enclosure(a).1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exact_operations_stay_points() {
        assert_eq!(add_enclosure(1.0, 2.0), (3.0, 3.0));
        assert_eq!(sub_enclosure(1.5, 0.25), (1.25, 1.25));
        assert_eq!(mul_enclosure(3.0, 0.5), (1.5, 1.5));
        assert_eq!(div_enclosure(1.0, 4.0), (0.25, 0.25));
        assert_eq!(sqrt_enclosure(9.0), (3.0, 3.0));
    }

    #[test]
    fn inexact_division_brackets_one_third() {
        let (lo, hi) = div_enclosure(1.0, 3.0);
        assert!(lo < hi);
        assert_eq!(hi, lo.next_up());
        // lo < 1/3 < hi in the reals, so 3*lo < 1 < 3*hi.
        assert!(mul_down(lo, 3.0) < 1.0);
        assert!(mul_up(hi, 3.0) > 1.0);
    }

    #[test]
    fn inexact_sum_widens_one_ulp() {
        let (lo, hi) = add_enclosure(1.0, 1e-20);
        assert_eq!(lo, 1.0);
        assert_eq!(hi, 1.0f64.next_up());
    }

    #[test]
    fn sqrt_two_brackets() {
        let (lo, hi) = sqrt_enclosure(2.0);
        assert!(lo < hi);
        assert!(mul_down(lo, lo) < 2.0);
        assert!(mul_up(hi, hi) > 2.0);
    }

    #[test]
    fn overflow_saturates() {
        let (lo, hi) = add_enclosure(Real::MAX, Real::MAX);
        assert_eq!(lo, Real::MAX);
        assert_eq!(hi, Real::INFINITY);

        let (lo, hi) = mul_enclosure(-Real::MAX, 2.0);
        assert_eq!(lo, Real::NEG_INFINITY);
        assert_eq!(hi, Real::MIN);
    }

    #[test]
    fn underflow_widens_both_sides() {
        let tiny = Real::MIN_POSITIVE;
        let (lo, hi) = mul_enclosure(tiny, 0.5);
        assert!(lo < hi);
        assert!(lo <= tiny * 0.5 && tiny * 0.5 <= hi);
    }

    #[test]
    fn zero_times_infinity_is_zero() {
        assert_eq!(mul_enclosure(0.0, Real::INFINITY), (0.0, 0.0));
        assert_eq!(mul_enclosure(Real::NEG_INFINITY, 0.0), (0.0, 0.0));
    }

    // (1 + 2^-52)^2 * 2^-1000 = (1 + 2^-51 + 2^-104) * 2^-1000. The product
    // rounds to a normal float but the 2^-1104 remainder is below the
    // subnormal grid, so the FMA residual flushes to zero. The enclosure
    // must still widen upward past the rounded product.
    #[test]
    fn normal_product_with_flushed_residual_widens() {
        let a = (1.0 + Real::EPSILON) * 2.0f64.powi(-500);
        let p = a * a;
        assert!(p.is_normal());
        let (lo, hi) = mul_enclosure(a, a);
        assert!(lo < hi);
        assert_eq!(hi, p.next_up());
        assert!(lo <= p);
    }

    #[test]
    fn normal_quotient_with_flushed_residual_widens() {
        let a = (1.0 + Real::EPSILON) * 2.0f64.powi(-1000);
        let q = a / 3.0;
        assert!(q.is_normal());
        let (lo, hi) = div_enclosure(a, 3.0);
        assert!(lo < hi);
        assert!(lo <= q && q <= hi);
        assert!(mul_down(lo, 3.0) < a);
        assert!(mul_up(hi, 3.0) > a);
    }

    #[test]
    fn sqrt_of_tiny_input_widens() {
        let a = (1.0 + Real::EPSILON) * 2.0f64.powi(-1000);
        let (lo, hi) = sqrt_enclosure(a);
        assert!(lo < hi);
        assert!(mul_down(lo, lo) < a);
        assert!(mul_up(hi, hi) > a);
    }

    // Compares a float against n * 2^-1104 exactly; usable for any positive
    // normal float with exponent above -1104.
    fn cmp_exact(x: Real, n: u128) -> std::cmp::Ordering {
        let (m, e) = crate::numeric::decompose(x);
        ((m as u128) << (e + 1104) as u32).cmp(&n)
    }

    proptest! {
        // Operands m * 2^-552 with full 53-bit significands multiply to
        // m1 * m2 * 2^-1104, exactly representable in u128. The product
        // magnitude (~2^-1000) sits in the band where it is normal but its
        // residual flushes, so soundness here depends on the widening path.
        #[test]
        fn mul_brackets_exact_value_below_residual_floor(
            m1 in (1u64 << 52)..(1u64 << 53),
            m2 in (1u64 << 52)..(1u64 << 53),
        ) {
            let scale = 2.0f64.powi(-552);
            let a = m1 as f64 * scale;
            let b = m2 as f64 * scale;
            let (lo, hi) = mul_enclosure(a, b);
            let exact = m1 as u128 * m2 as u128;
            prop_assert!(cmp_exact(lo, exact) != std::cmp::Ordering::Greater);
            prop_assert!(cmp_exact(hi, exact) != std::cmp::Ordering::Less);
        }

        // Significands 2^52 + s keep the rounding remainder at s1 * s2, which
        // is below the subnormal grid for every sample here: the residual
        // always flushes and the true product always exceeds the rounded one.
        #[test]
        fn mul_widens_when_residual_always_flushes(
            s1 in 1u64..(1u64 << 15),
            s2 in 1u64..(1u64 << 15),
        ) {
            let m1 = (1u64 << 52) + s1;
            let m2 = (1u64 << 52) + s2;
            let scale = 2.0f64.powi(-552);
            let (lo, hi) = mul_enclosure(m1 as f64 * scale, m2 as f64 * scale);
            prop_assert!(lo < hi);
            let exact = m1 as u128 * m2 as u128;
            prop_assert!(cmp_exact(lo, exact) == std::cmp::Ordering::Less);
            prop_assert!(cmp_exact(hi, exact) == std::cmp::Ordering::Greater);
        }
    }

    proptest! {
        #[test]
        fn add_brackets_and_is_tight(a in -1e100f64..1e100, b in -1e100f64..1e100) {
            let (lo, hi) = add_enclosure(a, b);
            let s = a + b;
            prop_assert!(lo <= s && s <= hi);
            prop_assert!(hi <= lo.next_up());
        }

        #[test]
        fn mul_brackets_nearest(a in -1e100f64..1e100, b in -1e100f64..1e100) {
            let (lo, hi) = mul_enclosure(a, b);
            let p = a * b;
            prop_assert!(lo <= p && p <= hi);
        }

        #[test]
        fn div_brackets_nearest(a in -1e100f64..1e100, b in 1e-100f64..1e100) {
            let (lo, hi) = div_enclosure(a, b);
            let q = a / b;
            prop_assert!(lo <= q && q <= hi);
        }

        #[test]
        fn sqrt_brackets_nearest(a in 0.0f64..1e300) {
            let (lo, hi) = sqrt_enclosure(a);
            let s = a.sqrt();
            prop_assert!(lo <= s && s <= hi);
        }
    }
}
