//! Basel-series partial sums, tail bounds, and the pi enclosure.
//!
//! The identity `S = sum_{n>=1} 1/n^2 = pi^2/6` splits into `S_N + T_N`:
//! `S_N` is summed term-by-term in interval arithmetic, `T_N` comes from the
//! integral test, `1/(N+1) <= T_N <= 1/N`, and `pi in sqrt(6 * (S_N + T_N))`.
//!
//! Cost tradeoff worth knowing: the tail width shrinks like `1/N^2`, while
//! the rounding width accumulated in `S_N` *grows* roughly like `N` ULPs of
//! the running sum. Raising `N` tightens the result until accumulated
//! rounding takes over; past that point larger `N` only costs time. The
//! traversal order matters for the same reason: descending summation adds
//! the small terms while the accumulator is still small, so each addition
//! wastes less precision, and the final diameter is markedly tighter
//! (roughly 1e-12 versus 1e-9 at a million terms).

use crate::error::{SeriesError, SeriesResult};
use enc_core::numeric::int_is_exact;
use enc_interval::Interval;

/// Traversal direction for the partial sum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SumOrder {
    /// `n = 1..N`: natural order, larger accumulated rounding width.
    Ascending,
    /// `n = N..1`: small terms first, tighter result for the same `N`.
    Descending,
}

impl SumOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SumOrder::Ascending => "ascending",
            SumOrder::Descending => "descending",
        }
    }
}

fn check_terms(terms: u64) -> SeriesResult<()> {
    if terms == 0 {
        return Err(SeriesError::InvalidTermCount {
            terms,
            why: "at least one term is required",
        });
    }
    // The tail bound needs N + 1 as an exact float as well.
    match terms.checked_add(1) {
        Some(succ) if int_is_exact(succ) => Ok(()),
        _ => Err(SeriesError::InvalidTermCount {
            terms,
            why: "N and N + 1 must be exactly representable as f64",
        }),
    }
}

/// Enclosure of one series term `1/n^2`.
fn term(n: u64) -> SeriesResult<Interval> {
    let k = Interval::exact_int(n)?;
    Ok(Interval::point(1.0).div(k * k)?)
}

/// Interval enclosure of the partial sum `S_N = sum_{n=1}^{N} 1/n^2`.
///
/// Any failing term aborts the whole computation: a missing term would
/// invalidate the rigor of the final bound, so there is nothing to retry.
pub fn partial_sum(terms: u64, order: SumOrder) -> SeriesResult<Interval> {
    check_terms(terms)?;
    let mut sum = Interval::point(0.0);
    match order {
        SumOrder::Ascending => {
            for n in 1..=terms {
                sum = sum + term(n)?;
            }
        }
        SumOrder::Descending => {
            for n in (1..=terms).rev() {
                sum = sum + term(n)?;
            }
        }
    }
    tracing::debug!(
        terms,
        order = order.label(),
        diameter = sum.diameter(),
        "partial sum computed"
    );
    Ok(sum)
}

/// Analytic enclosure of the tail `T_N = sum_{n>N} 1/n^2`.
///
/// The integral test gives `1/(N+1) <= T_N <= 1/N`, expressed here as the
/// single division `[1, 1] / [N, N+1]`: dividing by the exact two-endpoint
/// interval yields exactly the outward-rounded `[1/(N+1), 1/N]`.
pub fn tail_bound(terms: u64) -> SeriesResult<Interval> {
    check_terms(terms)?;
    let range = Interval::new(terms as f64, (terms + 1) as f64);
    Ok(Interval::point(1.0).div(range)?)
}

/// Two-sided bound on pi from `N` series terms: `sqrt(6 * (S_N + T_N))`.
pub fn pi_enclosure(terms: u64, order: SumOrder) -> SeriesResult<Interval> {
    let s = partial_sum(terms, order)? + tail_bound(terms)?;
    let six = Interval::exact_int(6)?;
    let pi = (six * s).sqrt()?;
    tracing::debug!(
        terms,
        order = order.label(),
        lo = pi.lo(),
        hi = pi.hi(),
        diameter = pi.diameter(),
        "pi enclosure computed"
    );
    Ok(pi)
}
