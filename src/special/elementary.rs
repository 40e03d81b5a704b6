//! Cancellation-free elementary helpers and polynomial evaluators.

use crate::FloatScalar;

/// (eˣ − 1 − x) / (x²/2), evaluated without cancellation near zero.
pub(crate) fn exmin1minx<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let two = T::lit(2.0);
    if x == T::zero() {
        return one;
    }
    let half_x2 = x * x / two;
    if x.abs() > T::lit(0.9) {
        return (x.exp_m1() - x) / half_x2;
    }
    // eˣ − 1 = 2t² + 2t√(1+t²) with t = sinh(x/2)
    let t = (x / two).sinh();
    let t2 = t * t;
    (two * t2 + (two * t * (one + t2).sqrt() - x)) / half_x2
}

/// ln(1+x) − x, accurate for small |x| (x > −1).
///
/// One Padé-corrected step around z = ln(1+x) recovers the digits that
/// `ln_1p(x) - x` loses when x is small.
pub(crate) fn lnec<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    let four = T::lit(4.0);
    let six = T::lit(6.0);

    let z = x.ln_1p();
    let y0 = z - x;
    let s = exmin1minx(z) * z * z / T::lit(2.0);
    let r = (s + y0) / (s + one + z);
    y0 - r * (six - r) / (six - four * r)
}

/// Chebyshev sum a₀/2 + a₁T₁(x) + … + aₙTₙ(x) (Clenshaw recurrence).
pub(crate) fn chepolsum<T: FloatScalar>(x: T, a: &[f64]) -> T {
    let two = T::lit(2.0);
    let n = a.len() - 1;
    match n {
        0 => T::lit(a[0]) / two,
        1 => T::lit(a[0]) / two + T::lit(a[1]) * x,
        _ => {
            let tx = x + x;
            let mut r = T::lit(a[n]);
            let mut h = T::lit(a[n - 1]) + r * tx;
            for &ak in a[1..n - 1].iter().rev() {
                let s = r;
                r = h;
                h = T::lit(ak) + r * tx - s;
            }
            T::lit(a[0]) / two - r + h * x
        }
    }
}

/// Horner evaluation of the polynomial with coefficients `c` (lowest degree first).
#[inline]
pub(crate) fn polyval<T: FloatScalar>(x: T, c: &[f64]) -> T {
    c.iter().rev().fold(T::zero(), |acc, &ck| acc * x + T::lit(ck))
}

/// Rational function P(x)/Q(x), both given lowest degree first.
#[inline]
pub(crate) fn ratfun<T: FloatScalar>(x: T, num: &[f64], den: &[f64]) -> T {
    polyval(x, num) / polyval(x, den)
}

/// Rational function with a monic denominator: (r₀ + … + rₙxⁿ) / (s₀ + … + sₙ₋₁xⁿ⁻¹ + xⁿ).
pub(crate) fn fractio<T: FloatScalar>(x: T, r: &[f64], s: &[f64]) -> T {
    let n = s.len();
    let mut a = T::lit(r[n]);
    let mut b = T::one();
    for k in (0..n).rev() {
        a = a * x + T::lit(r[k]);
        b = b * x + T::lit(s[k]);
    }
    a / b
}

/// Nearest integer, ties rounding up. `None` when |x| is beyond the `i64` range.
pub(crate) fn nint<T: FloatScalar>(x: T) -> Option<i64> {
    let c = x.ceil();
    let t = x.floor();
    let k = if (x - c).abs() > (x - t).abs() { t } else { c };
    num_traits::cast::<T, i64>(k)
}

/// +1 for v ≥ 0, −1 otherwise.
#[inline]
pub(crate) fn sign<T: FloatScalar>(v: T) -> T {
    if v >= T::zero() {
        T::one()
    } else {
        -T::one()
    }
}
