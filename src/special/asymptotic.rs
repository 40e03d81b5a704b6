//! Uniform (saddle-point) asymptotic expansion for the transition region a ≈ x.
//!
//! With μ = (x−a)/a and η = sign(μ)·√(−2 lnec(μ)),
//!
//! Q(a,x) = ½ erfc(η√(a/2)) + R_a(η),  P(a,x) = ½ erfc(−η√(a/2)) − R_a(η),
//!
//! where R_a(η) = e^(−aη²/2) / √(2πa) · S_a(η) and S_a is summed by [`saeta`].

use core::f64::consts::PI;

use crate::FloatScalar;
use super::elementary::lnec;
use super::erf_fn::erfc_core;
use super::tolerance;

/// Coefficients fₘ of the expansion of S_a(η) in powers of η (before the 1/a recursion).
const SAETA_F: [f64; 27] = [
    1.0,
    -1.0 / 3.0,
    1.0 / 12.0,
    -2.0 / 135.0,
    1.0 / 864.0,
    1.0 / 2835.0,
    -139.0 / 777600.0,
    1.0 / 25515.0,
    -571.0 / 261273600.0,
    -281.0 / 151559100.0,
    8.29671134095308601e-7,
    -1.76659527368260793e-7,
    6.70785354340149857e-9,
    1.02618097842403080e-8,
    -4.38203601845335319e-9,
    9.14769958223679023e-10,
    -2.55141939949462497e-11,
    -5.83077213255042507e-11,
    2.43619480206674162e-11,
    -5.02766928011417559e-12,
    1.10043920319561347e-13,
    3.37176326240098538e-13,
    -1.39238872241816207e-13,
    2.85348938070474432e-14,
    -5.13911183424257258e-16,
    -1.97522882943494428e-15,
    8.09952115670456133e-16,
];

/// P(a,x) (`lower = true`) or Q(a,x) from the uniform expansion.
///
/// `dp` is the dominant term. The engine only asks for the ratio on the
/// small side of the transition, so an underflowed `dp` means that ratio is 0.
pub(crate) fn pqasymp<T: FloatScalar>(a: T, x: T, dp: T, lower: bool) -> T {
    let zero = T::zero();
    let half = T::lit(0.5);

    if dp == zero {
        return zero;
    }

    let s = if lower { -T::one() } else { T::one() };
    let mu = (x - a) / a;
    let y = -lnec(mu);
    let mut eta = if y < zero { zero } else { (T::lit(2.0) * y).sqrt() };
    let y = y * a;
    let mut v = y.abs().sqrt();
    if mu < zero {
        eta = -eta;
        v = -v;
    }

    let u = half * erfc_core(s * v, false);
    let v = s * (-y).exp() * saeta(a, eta) / (T::lit(2.0 * PI) * a).sqrt();
    u + v
}

/// S_a(η), normalized so that its leading term is 1/(1 + b₁/a).
///
/// The coefficients bₘ come from the backward recursion
/// bₘ₋₁ = fₘ + (m+1)·bₘ₊₁/a, seeded with b₂₅ = f₂₆, b₂₄ = f₂₅.
pub(crate) fn saeta<T: FloatScalar>(a: T, eta: T) -> T {
    let eps = tolerance::<T>();
    let mut bm = [T::zero(); 27];
    bm[25] = T::lit(SAETA_F[26]);
    bm[24] = T::lit(SAETA_F[25]);
    for m in (1..=24).rev() {
        bm[m - 1] = T::lit(SAETA_F[m]) + T::lit((m + 1) as f64) * bm[m + 1] / a;
    }

    let mut s = bm[0];
    let mut t = s;
    let mut y = eta;
    let mut m = 1;
    while (t / s).abs() > eps && m < 25 {
        t = bm[m] * y;
        s = s + t;
        m += 1;
        y = y * eta;
    }
    s / (T::one() + bm[1] / a)
}
