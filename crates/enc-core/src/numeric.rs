use crate::CoreError;

/// Floating point type used throughout the engine.
pub type Real = f64;

/// Largest integer such that every `u64` up to it converts to `Real` exactly.
pub const MAX_EXACT_INT: u64 = 1 << 53;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Whether `n` converts to `Real` without rounding.
pub fn int_is_exact(n: u64) -> bool {
    n <= MAX_EXACT_INT
}

/// Decompose a finite float into `(mantissa, exponent)` with
/// `v == mantissa * 2^exponent` exactly. Sign is carried by the mantissa.
pub fn decompose(v: Real) -> (i64, i32) {
    debug_assert!(v.is_finite(), "decompose requires a finite value");
    let bits = v.to_bits();
    let frac = (bits & ((1u64 << 52) - 1)) as i64;
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let (mantissa, exponent) = if exp_bits == 0 {
        // Subnormal (or zero): no implicit leading bit.
        (frac, -1074)
    } else {
        (frac | (1i64 << 52), exp_bits - 1075)
    };
    if bits >> 63 == 1 {
        (-mantissa, exponent)
    } else {
        (mantissa, exponent)
    }
}
