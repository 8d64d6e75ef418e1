//! Cyclic integer arithmetic for stems, branches and ring positions.
//!
//! All modulo work in the workspace goes through these helpers so negative
//! offsets are always folded back into `0..modulus`.

/// Fold `value` into `0..modulus`, correcting negative remainders.
///
/// # Panics
/// Panics if `modulus` is zero.
pub fn wrap(value: i64, modulus: usize) -> usize {
    assert!(modulus > 0, "cyclic modulus must be positive");
    value.rem_euclid(modulus as i64) as usize
}

/// Distance of `value` from `origin` folded into `0..modulus`.
///
/// Widened so any pair of `i64` values folds without overflow.
pub fn wrap_offset(value: i64, origin: i64, modulus: usize) -> usize {
    assert!(modulus > 0, "cyclic modulus must be positive");
    (i128::from(value) - i128::from(origin)).rem_euclid(modulus as i128) as usize
}

/// Move `steps` (possibly negative) from `index` around a cycle of `modulus`.
pub fn advance(index: usize, steps: i64, modulus: usize) -> usize {
    wrap(index as i64 + steps, modulus)
}

/// Forward distance from `from` to `to` on a cycle of `modulus`.
pub fn offset(from: usize, to: usize, modulus: usize) -> usize {
    wrap(to as i64 - from as i64, modulus)
}

/// Mirror an index around zero: `n -> (modulus - n) mod modulus`.
pub fn mirror(index: usize, modulus: usize) -> usize {
    wrap(-(index as i64), modulus)
}
