//! Stirling correction, scaled gamma Γ*, and the Chebyshev-based helpers
//! for ln Γ(1+x) and 1/Γ(1+x) near the origin.
//!
//! Each routine covers its argument range with a separate approximation
//! (direct `lgamma` identities, Chebyshev sums, rational expansions in 1/x²),
//! and none of them allocates: coefficient tables are `const` arrays.

use core::f64::consts::PI;

use crate::FloatScalar;
use super::elementary::{chepolsum, nint, sign};
use super::{dwarf, giant, EULER_GAMMA, LN_SQRT_2PI, SQRT_2PI};

/// Chebyshev coefficients of 12x·stirling(x) in z = 18/x² − 1, 3 ≤ x < 12.
const STIRLING_CHEB: [f64; 18] = [
    1.996379051590076518221,
    -0.17971032528832887213e-2,
    0.131292857963846713e-4,
    -0.2340875228178749e-6,
    0.72291210671127e-8,
    -0.3280997607821e-9,
    0.198750709010e-10,
    -0.15092141830e-11,
    0.1375340084e-12,
    -0.145728923e-13,
    0.17532367e-14,
    -0.2351465e-15,
    0.346551e-16,
    -0.55471e-17,
    0.9548e-18,
    -0.1748e-18,
    0.332e-19,
    -0.58e-20,
];

/// Rational fit of x·stirling(x) in z = 1/x², 12 ≤ x < 1000.
/// Numerator c₀..c₅, denominator c₆ + z.
const STIRLING_RAT: [f64; 7] = [
    0.25721014990011306473e-1,
    0.82475966166999631057e-1,
    -0.25328157302663562668e-2,
    0.60992926669463371e-3,
    -0.33543297638406e-3,
    0.250505279903e-3,
    0.30865217988013567769,
];

/// Chebyshev coefficients of g(x) in ln Γ(1+x) = x(1−x)·g(x), t = 2x − 1.
const AUXLOGGAM_CHEB: [f64; 26] = [
    -0.98283078605877425496,
    0.7611416167043584304e-1,
    -0.843232496593277796e-2,
    0.107949372632860815e-2,
    -0.14900748003692965e-3,
    0.2151239988855679e-4,
    -0.319793298608622e-5,
    0.48516930121399e-6,
    -0.7471487821163e-7,
    0.1163829670017e-7,
    -0.182940043712e-8,
    0.28969180607e-9,
    -0.4615701406e-10,
    0.739281023e-11,
    -0.118942800e-11,
    0.19212069e-12,
    -0.3113976e-13,
    0.506284e-14,
    -0.82542e-15,
    0.13491e-15,
    -0.2210e-16,
    0.363e-17,
    -0.60e-18,
    0.98e-19,
    -0.2e-19,
    0.3e-20,
];

/// Chebyshev coefficients of g(x) in 1/Γ(1+x) = 1 + x(x−1)·g(x), t = 2x − 1.
const AUXGAM_CHEB: [f64; 18] = [
    -1.013609258009865776949,
    0.784903531024782283535e-1,
    0.67588668743258315530e-2,
    -0.12790434869623468120e-2,
    0.462939838642739585e-4,
    0.43381681744740352e-5,
    -0.5326872422618006e-6,
    0.172233457410539e-7,
    0.8300542107118e-9,
    -0.10553994239968e-9,
    0.39415842851e-11,
    0.362068537e-13,
    -0.107440229e-13,
    0.5000413e-15,
    -0.62452e-17,
    -0.5185e-18,
    0.347e-19,
    -0.9e-21,
];

/// Stirling correction: ln Γ(x) = (x−½) ln x − x + ½ ln(2π) + stirling(x).
///
/// Returns the largest finite value for x below the underflow floor.
pub(crate) fn stirling<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let half = T::lit(0.5);
    let ln_sqrt_2pi = T::lit(LN_SQRT_2PI);

    if x < dwarf() {
        giant()
    } else if x < one {
        (x + one).tlgamma() - (x + half) * x.ln() + x - ln_sqrt_2pi
    } else if x < T::lit(2.0) {
        x.tlgamma() - (x - half) * x.ln() + x - ln_sqrt_2pi
    } else if x < T::lit(3.0) {
        (x - one).tlgamma() - (x - half) * x.ln() + x - ln_sqrt_2pi + (x - one).ln()
    } else if x < T::lit(12.0) {
        let z = T::lit(18.0) / (x * x) - one;
        chepolsum(z, &STIRLING_CHEB) / (T::lit(12.0) * x)
    } else {
        let z = one / (x * x);
        if x < T::lit(1000.0) {
            let c = &STIRLING_RAT;
            let num = ((((T::lit(c[5]) * z + T::lit(c[4])) * z + T::lit(c[3])) * z + T::lit(c[2])) * z
                + T::lit(c[1]))
                * z
                + T::lit(c[0]);
            num / (T::lit(c[6]) + z) / x
        } else {
            (((-z / T::lit(1680.0) + one / T::lit(1260.0)) * z - one / T::lit(360.0)) * z + one / T::lit(12.0))
                / x
        }
    }
}

/// Scaled gamma Γ*(x) = Γ(x) / (√(2π) x^(x−½) e^(−x)), x > 0; +∞ otherwise.
pub(crate) fn gamstar<T: FloatScalar>(x: T) -> T {
    if x >= T::lit(3.0) {
        stirling(x).exp()
    } else if x > T::zero() {
        gamma1(x) / ((-x + (x - T::lit(0.5)) * x.ln()).exp() * T::lit(SQRT_2PI))
    } else {
        T::infinity()
    }
}

/// Euler gamma function Γ(x) for real x.
///
/// Poles return ±(largest finite value), signed by the side of the pole.
pub(crate) fn gamma1<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let half = T::lit(0.5);
    let pi = T::lit(PI);

    if x >= T::lit(21.0) {
        return stirling_gamma(x);
    }
    let k = match nint(x) {
        Some(k) => k,
        // Outside the i64 range every float is a negative integer.
        None => return giant(),
    };
    let kf = T::lit(k as f64);
    let dw = if k == 0 { dwarf() } else { T::epsilon() };

    if k <= 0 && (kf - x).abs() <= dw {
        if k % 2 != 0 {
            sign(kf - x) * giant()
        } else {
            sign(x - kf) * giant()
        }
    } else if x < T::lit(0.45) {
        pi / ((pi * x).sin() * gamma1(one - x))
    } else if (kf - x).abs() < dw {
        (2..k).fold(one, |gam, n| gam * T::lit(n as f64))
    } else if (kf - x - half).abs() < dw {
        (1..k).fold(pi.sqrt(), |gam, n| gam * (T::lit(n as f64) - half))
    } else if x < T::lit(3.0) {
        let k = if kf > x { k - 1 } else { k };
        let k1 = 3 - k;
        let z = T::lit(k1 as f64) + x;
        (1..=k1).fold(gamma1(z), |gam, n| gam / (z - T::lit(n as f64)))
    } else {
        stirling_gamma(x)
    }
}

/// √(2π) x^(x−½) e^(−x) e^(stirling(x)), x ≥ 3.
#[inline]
fn stirling_gamma<T: FloatScalar>(x: T) -> T {
    T::lit(SQRT_2PI) * (-x + (x - T::lit(0.5)) * x.ln() + stirling(x)).exp()
}

/// ln Γ(x) for x > 0; +∞ otherwise.
pub(crate) fn loggam<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let two = T::lit(2.0);
    let half = T::lit(0.5);

    if x >= T::lit(3.0) {
        (x - half) * x.ln() - x + T::lit(LN_SQRT_2PI) + stirling(x)
    } else if x >= two {
        (x - two) * (T::lit(3.0) - x) * auxloggam(x - two) + (x - two).ln_1p()
    } else if x >= one {
        (x - one) * (two - x) * auxloggam(x - one)
    } else if x > half {
        x * (one - x) * auxloggam(x) - (x - one).ln_1p()
    } else if x > T::zero() {
        x * (one - x) * auxloggam(x) - x.ln()
    } else {
        T::infinity()
    }
}

/// g(x) in ln Γ(1+x) = x(1−x)·g(x), designed for −1 ≤ x ≤ 1.
///
/// Arguments beyond x = 2 are evaluated directly from [`loggam`], which keeps
/// the recursion one level deep for any input.
pub(crate) fn auxloggam<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let two = T::lit(2.0);

    if x < -one {
        T::infinity()
    } else if x.abs() <= T::epsilon() * T::lit(10.0) {
        -T::lit(EULER_GAMMA)
    } else if (x - one).abs() <= T::epsilon() {
        T::lit(EULER_GAMMA) - one
    } else if x < T::zero() {
        -(x * (one + x) * auxloggam(x + one) + x.ln_1p()) / (x * (one - x))
    } else if x < one {
        chepolsum(two * x - one, &AUXLOGGAM_CHEB)
    } else if x < T::lit(1.5) {
        ((x - one).ln_1p() + (x - one) * (two - x) * auxloggam(x - one)) / (x * (one - x))
    } else if x <= two {
        (x.ln() + (x - one) * (two - x) * auxloggam(x - one)) / (x * (one - x))
    } else {
        loggam(one + x) / (x * (one - x))
    }
}

/// g(x) in 1/Γ(1+x) = 1 + x(x−1)·g(x), designed for −1 ≤ x ≤ 1.
///
/// Outside [−1, 1.5] the value comes from [`gamma1`] directly.
pub(crate) fn auxgam<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    if x < -one || x > T::lit(1.5) {
        (one / gamma1(one + x) - one) / (x * (x - one))
    } else if x < T::zero() {
        let xp1 = one + x;
        -(one + xp1 * xp1 * auxgam(xp1)) / (one - x)
    } else {
        chepolsum(T::lit(2.0) * x - one, &AUXGAM_CHEB)
    }
}
