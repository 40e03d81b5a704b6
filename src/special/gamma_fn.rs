//! Gamma, log-gamma, scaled gamma and the Pochhammer symbol.
//!
//! These are the public faces of the engine's own gamma routines
//! (Chebyshev/Stirling based, see `stirling.rs`), so the incomplete gamma
//! ratio and these functions agree to the last bit.

use core::f64::consts::PI;

use crate::FloatScalar;
use super::dwarf;
use super::stirling::{gamma1, gamstar, loggam, stirling};

/// Largest integer step count evaluated as an explicit product in [`pochhammer`].
const POCHHAMMER_PRODUCT_MAX: i64 = 64;

/// Non-positive integers, where Γ has its poles.
#[inline]
pub(crate) fn is_pole<T: FloatScalar>(x: T) -> bool {
    x <= T::zero() && x == x.floor()
}

/// Gamma function Γ(x).
///
/// Exact products for integers and half-integers below 21, the Stirling
/// series with its Chebyshev/rational correction above 3, downward
/// recurrence in between, and the reflection formula for x < 0.45.
/// Returns infinity at non-positive integer poles (0, −1, −2, …) and NaN for
/// NaN input or −∞.
///
/// # Example
///
/// ```
/// use gamma_ratio::special::gamma;
///
/// // Γ(5) = 4! = 24
/// assert!((gamma(5.0_f64) - 24.0).abs() < 1e-12);
///
/// // Γ(0.5) = √π
/// let sqrt_pi = core::f64::consts::PI.sqrt();
/// assert!((gamma(0.5_f64) - sqrt_pi).abs() < 1e-15);
///
/// // Γ(−0.5) = −2√π
/// assert!((gamma(-0.5_f64) + 2.0 * sqrt_pi).abs() < 1e-14);
/// ```
pub fn gamma<T: FloatScalar>(x: T) -> T {
    if x.is_nan() || x == T::neg_infinity() {
        return T::nan();
    }
    if x == T::infinity() || is_pole(x) {
        return T::infinity();
    }
    if x > T::zero() && x < dwarf() {
        return T::one() / x;
    }
    gamma1(x)
}

/// Natural logarithm of the gamma function, ln |Γ(x)|.
///
/// Positive arguments use the engine's `loggam`; negative ones go through the
/// reflection formula in log space. Returns infinity at non-positive integer
/// poles and NaN for NaN input.
///
/// # Example
///
/// ```
/// use gamma_ratio::special::lgamma;
///
/// // ln Γ(1) = 0
/// assert!(lgamma(1.0_f64).abs() < 1e-15);
///
/// // ln Γ(100): large argument, no overflow
/// let val = lgamma(100.0_f64);
/// assert!((val - 359.1342053695754).abs() < 1e-10);
/// ```
pub fn lgamma<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() || is_pole(x) {
        return T::infinity();
    }
    if x > T::zero() {
        return loggam(x);
    }

    let pi = T::lit(PI);
    let sin_pi_x = (pi * x).sin().abs();
    if sin_pi_x == T::zero() {
        return T::infinity();
    }
    pi.ln() - sin_pi_x.ln() - loggam(T::one() - x)
}

/// Signed log-gamma: returns `(ln |Γ(x)|, sign of Γ(x))` with the sign as ±1.
///
/// Γ is positive for x > 0 and alternates sign between consecutive negative
/// integers: negative on (−1, 0), positive on (−2, −1), and so on. Poles
/// report `(+∞, 1)`.
///
/// # Example
///
/// ```
/// use gamma_ratio::special::{gamma, lgamma_sign};
///
/// let (lg, s) = lgamma_sign(-0.5_f64);
/// assert_eq!(s, -1.0);
/// assert!((s * lg.exp() - gamma(-0.5_f64)).abs() < 1e-14);
///
/// let (_, s) = lgamma_sign(-1.5_f64);
/// assert_eq!(s, 1.0);
/// ```
pub fn lgamma_sign<T: FloatScalar>(x: T) -> (T, T) {
    let one = T::one();
    let lg = lgamma(x);
    if x.is_nan() {
        return (lg, T::nan());
    }
    if x > T::zero() || is_pole(x) || x.is_infinite() {
        return (lg, one);
    }
    let fl = x.floor();
    let half_fl = fl * T::lit(0.5);
    let sign = if half_fl == half_fl.floor() { one } else { -one };
    (lg, sign)
}

/// Scaled gamma function Γ*(x) = Γ(x) / (√(2π) x^(x−½) e^(−x)), x > 0.
///
/// Γ*(x) → 1 as x → ∞ and is the bounded factor the incomplete gamma engine
/// divides by instead of Γ itself. Returns +∞ for x ≤ 0.
///
/// # Example
///
/// ```
/// use gamma_ratio::special::gamma_star;
///
/// // Γ*(1) = e/√(2π)
/// let expected = core::f64::consts::E / (2.0 * core::f64::consts::PI).sqrt();
/// assert!((gamma_star(1.0_f64) - expected).abs() < 1e-14);
/// assert!((gamma_star(1.0e6_f64) - 1.0).abs() < 1e-6);
/// ```
pub fn gamma_star<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    gamstar(x)
}

/// Stirling correction term ln Γ(x) − ((x−½) ln x − x + ½ ln 2π), x > 0.
///
/// Returns the largest finite value for arguments below the underflow floor.
///
/// # Example
///
/// ```
/// use gamma_ratio::special::stirling_correction;
///
/// // ~ 1/(12x) for large x
/// let x = 1000.0_f64;
/// assert!((stirling_correction(x) - 1.0 / (12.0 * x)).abs() < 1e-11);
/// ```
pub fn stirling_correction<T: FloatScalar>(x: T) -> T {
    if x.is_nan() {
        return x;
    }
    stirling(x)
}

/// Pochhammer symbol (rising factorial) (a)ₙ = Γ(a+n) / Γ(a).
///
/// Integer `n` with |n| ≤ 64 is evaluated as an explicit product, so
/// (−3)₂ = 6 and (−3)₅ = 0 come out exactly. Other arguments use the signed
/// log-gamma ratio.
///
/// # Example
///
/// ```
/// use gamma_ratio::special::pochhammer;
///
/// // (1)ₙ = n!
/// assert!((pochhammer(1.0_f64, 5.0) - 120.0).abs() < 1e-12);
/// // (a)₀ = 1
/// assert_eq!(pochhammer(3.7_f64, 0.0), 1.0);
/// // (½)_{½} = Γ(1)/Γ(½)
/// let expected = 1.0 / core::f64::consts::PI.sqrt();
/// assert!((pochhammer(0.5_f64, 0.5) - expected).abs() < 1e-15);
/// ```
pub fn pochhammer<T: FloatScalar>(a: T, n: T) -> T {
    let one = T::one();
    if a.is_nan() || n.is_nan() {
        return T::nan();
    }
    if n == T::zero() {
        return one;
    }

    if n == n.floor() {
        if let Some(m) = num_traits::cast::<T, i64>(n) {
            if m.abs() <= POCHHAMMER_PRODUCT_MAX {
                return if m > 0 {
                    (0..m).fold(one, |p, k| p * (a + T::lit(k as f64)))
                } else {
                    one / (1..=-m).fold(one, |p, k| p * (a - T::lit(k as f64)))
                };
            }
        }
    }

    let b = a + n;
    match (is_pole(a), is_pole(b)) {
        (true, true) => {
            // (a)ₙ = (−1)ⁿ Γ(1−a) / Γ(1−a−n) when both a and a+n are poles
            let (lg, _) = lgamma_sign(one - a);
            let (lgn, _) = lgamma_sign(one - b);
            let half_n = n * T::lit(0.5);
            let sign = if half_n == half_n.floor() { one } else { -one };
            sign * (lg - lgn).exp()
        }
        (true, false) => T::zero(),
        (false, true) => T::infinity(),
        (false, false) => {
            let (lb, sb) = lgamma_sign(b);
            let (la, sa) = lgamma_sign(a);
            sa * sb * (lb - la).exp()
        }
    }
}

/// Logarithm of the Pochhammer symbol, ln |(a)ₙ| = ln |Γ(a+n)| − ln |Γ(a)|.
///
/// Stays finite where (a)ₙ itself would overflow.
///
/// # Example
///
/// ```
/// use gamma_ratio::special::{lpochhammer, lgamma};
///
/// let v = lpochhammer(10.0_f64, 500.0);
/// assert!((v - (lgamma(510.0_f64) - lgamma(10.0_f64))).abs() < 1e-10);
/// assert!(lpochhammer(2.5_f64, 0.0).abs() < 1e-16);
/// ```
pub fn lpochhammer<T: FloatScalar>(a: T, n: T) -> T {
    let one = T::one();
    if a.is_nan() || n.is_nan() {
        return T::nan();
    }
    if n == T::zero() {
        return T::zero();
    }
    let b = a + n;
    match (is_pole(a), is_pole(b)) {
        (true, true) => lgamma(one - a) - lgamma(one - b),
        (true, false) => T::neg_infinity(),
        (false, true) => T::infinity(),
        (false, false) => lgamma(b) - lgamma(a),
    }
}
