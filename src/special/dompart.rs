//! Dominant term xᵃe⁻ˣ/Γ(a+1) and the P/Q regime boundary.

use core::f64::consts::PI;

use crate::FloatScalar;
use super::elementary::lnec;
use super::stirling::gamstar;
use super::{dwarf, giant, EXP_LOW};

/// Regime boundary: `a > alfa(x)` means P(a,x) is the smaller ratio and is
/// computed first; otherwise Q(a,x) is.
pub(crate) fn alfa<T: FloatScalar>(x: T) -> T {
    let ln_half = T::lit(0.5).ln();
    if x > T::lit(0.25) {
        x + T::lit(0.25)
    } else if x >= dwarf() {
        ln_half / x.ln()
    } else {
        ln_half / dwarf::<T>().ln()
    }
}

/// Dominant term d(a,x) = xᵃe⁻ˣ/Γ(a+1), x > 0.
///
/// With `qt` set, returns the raw exponential exp(r) where
/// r = −x + a ln x for a ≤ 1, and a(1 − x/a + ln(x/a)) − ½ ln(2πa) otherwise.
/// Exponents below −300 flush to zero. Returns `None` when the exponent of
/// the normalized form exceeds the overflow threshold.
pub(crate) fn dompart<T: FloatScalar>(a: T, x: T, qt: bool) -> Option<T> {
    let one = T::one();
    let two_pi = T::lit(2.0 * PI);
    let lnx = x.ln();

    let r = if a <= one {
        -x + a * lnx
    } else {
        let r = if x == a {
            T::zero()
        } else {
            let la = x / a;
            a * (one - la + la.ln())
        };
        r - T::lit(0.5) * (two_pi * a).ln()
    };

    if qt {
        let dp = if r < T::lit(EXP_LOW) { T::zero() } else { r.exp() };
        return Some(dp);
    }

    if a < T::lit(3.0) || x < T::lit(0.2) {
        return Some((a * lnx - x).exp() / (a + one).tgamma());
    }

    let mu = (x - a) / a;
    let ac = a * lnec(mu);
    if ac > giant::<T>().ln() {
        None
    } else if ac < dwarf::<T>().ln() {
        Some(T::zero())
    } else {
        Some(ac.exp() / ((two_pi * a).sqrt() * gamstar(a)))
    }
}
