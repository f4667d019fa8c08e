//! Modular arithmetic helpers for the rolling needle hash.
//!
//! All operands are widened to `u64` so intermediate products never wrap.

/// Computes `(a * b) % m`.
#[inline]
pub(crate) fn mul_mod(a: u32, b: u32, m: u32) -> u32 {
    ((u64::from(a) * u64::from(b)) % u64::from(m)) as u32
}

/// Computes `(a - b) % m` for `a, b < m`.
#[inline]
pub(crate) fn sub_mod(a: u32, b: u32, m: u32) -> u32 {
    ((u64::from(m) + u64::from(a) - u64::from(b)) % u64::from(m)) as u32
}

/// Computes `(a * b + c) % m`.
///
/// `(2^32 - 1)^2 + (2^32 - 1)` still fits in a `u64`, so `c` may be any `u32`.
#[inline]
pub(crate) fn mul_add_mod(a: u32, b: u32, c: u32, m: u32) -> u32 {
    ((u64::from(a) * u64::from(b) + u64::from(c)) % u64::from(m)) as u32
}

/// Computes `base^exp % m` by repeated multiplication.
pub(crate) fn pow_mod(base: u32, exp: usize, m: u32) -> u32 {
    let mut acc = 1 % m;
    for _ in 0..exp {
        acc = mul_mod(acc, base, m);
    }
    acc
}
