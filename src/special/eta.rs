//! The η ↔ λ transformation of the uniform expansion and the ε corrections
//! used to start the inversion.
//!
//! For λ = x/a the transition variable is η with
//! ½η² = λ − 1 − ln λ, sign(η) = sign(λ − 1).
//! The inverse x of Q(a,x) = q then has the expansion
//! η = η₀ + ε₁(η₀)/a + ε₂(η₀)/a² + ε₃(η₀)/a³ + …

use core::f64::consts::SQRT_2;

use crate::FloatScalar;
use super::elementary::{lnec, ratfun};

/// Iteration cap for the fixed-point refinement in [`lambdaeta`].
const LAMBDAETA_MAX_ITER: usize = 50;

/// λ(η): the positive root of ½η² = λ − 1 − ln λ on the side sign(λ−1) = sign(η).
pub(crate) fn lambdaeta<T: FloatScalar>(eta: T) -> T {
    let one = T::one();
    let s = eta * eta * T::lit(0.5);

    let mut la = if eta == T::zero() {
        one
    } else if eta < -one {
        let r = (-one - s).exp();
        r * (one
            + r * (one
                + r * (T::lit(1.5)
                    + r * (T::lit(8.0 / 3.0) + r * (T::lit(125.0 / 24.0) + r * T::lit(54.0 / 5.0))))))
    } else if eta < one {
        let r = eta;
        one + r
            * (one
                + r * (T::lit(1.0 / 3.0)
                    + r * (T::lit(1.0 / 36.0)
                        + r * (T::lit(-1.0 / 270.0) + r * (T::lit(1.0 / 4320.0) + r * T::lit(1.0 / 17010.0))))))
    } else {
        let r = one + s;
        let l = r.ln();
        let l2 = l * l;
        let l3 = l2 * l;
        let l4 = l3 * l;
        let l5 = l4 * l;
        let ak2 = (T::lit(2.0) - l) * T::lit(0.5);
        let ak3 = (T::lit(-9.0) * l + T::lit(6.0) + T::lit(2.0) * l2) / T::lit(6.0);
        let ak4 = -(T::lit(3.0) * l3 + T::lit(36.0) * l - T::lit(22.0) * l2 - T::lit(12.0)) / T::lit(12.0);
        let ak5 = (T::lit(60.0) + T::lit(350.0) * l2 - T::lit(300.0) * l - T::lit(125.0) * l3
            + T::lit(12.0) * l4)
            / T::lit(60.0);
        let ak6 = -(T::lit(-120.0) - T::lit(274.0) * l4 + T::lit(900.0) * l - T::lit(1700.0) * l2
            + T::lit(1125.0) * l3
            + T::lit(20.0) * l5)
            / T::lit(120.0);
        let la = r + l;
        let r = one / r;
        la + l * r * (one + r * (ak2 + r * (ak3 + r * (ak4 + r * (ak5 + r * ak6)))))
    };

    let refine = (eta > T::lit(-3.5) && eta < T::lit(-0.03)) || (eta > T::lit(0.03) && eta < T::lit(40.0));
    if refine {
        let tol = T::lit(1e-8).max(T::lit(8.0) * T::epsilon());
        let mut q = la;
        let mut r = one;
        let mut n = 0;
        while r > tol && n < LAMBDAETA_MAX_ITER {
            la = q * (s + q.ln()) / (q - one);
            r = (q / la - one).abs();
            q = la;
            n += 1;
        }
    }
    la
}

/// ε₁(η): first-order coefficient of the η expansion.
pub(crate) fn eps1<T: FloatScalar>(eta: T) -> T {
    const AK: [f64; 5] = [
        -3.333333333438e-1,
        -2.070740359969e-1,
        -5.041806657154e-2,
        -4.923635739372e-3,
        -4.293658292782e-5,
    ];
    const BK: [f64; 5] = [
        1.000000000000e+0,
        7.045554412463e-1,
        2.118190062224e-1,
        3.048648397436e-2,
        1.605037988091e-3,
    ];
    if eta.abs() < T::one() {
        ratfun(eta, &AK, &BK)
    } else {
        let la = lambdaeta(eta);
        (eta / (la - T::one())).ln() / eta
    }
}

/// ε₂(η): second-order coefficient.
pub(crate) fn eps2<T: FloatScalar>(eta: T) -> T {
    if eta < T::lit(-5.0) {
        let x = eta * eta;
        let lnmeta = (-eta).ln();
        (T::lit(12.0) - x - T::lit(6.0) * lnmeta * lnmeta) / (T::lit(12.0) * x * eta)
    } else if eta < T::lit(-2.0) {
        const AK: [f64; 5] = [
            -1.72847633523e-2,
            -1.59372646475e-2,
            -4.64910887221e-3,
            -6.06834887760e-4,
            -6.14830384279e-6,
        ];
        const BK: [f64; 5] = [
            1.00000000000e+0,
            7.64050615669e-1,
            2.97143406325e-1,
            5.79490176079e-2,
            5.74558524851e-3,
        ];
        ratfun(eta, &AK, &BK)
    } else if eta < T::lit(2.0) {
        const AK: [f64; 5] = [
            -1.72839517431e-2,
            -1.46362417966e-2,
            -3.57406772616e-3,
            -3.91032032692e-4,
            2.49634036069e-6,
        ];
        const BK: [f64; 5] = [
            1.00000000000e+0,
            6.90560400696e-1,
            2.49962384741e-1,
            4.43843438769e-2,
            4.24073217211e-3,
        ];
        ratfun(eta, &AK, &BK)
    } else if eta < T::lit(1000.0) {
        const AK: [f64; 5] = [
            9.99944669480e-1,
            1.04649839762e+2,
            8.57204033806e+2,
            7.31901559577e+2,
            4.55174411671e+1,
        ];
        const BK: [f64; 5] = [
            1.00000000000e+0,
            1.04526456943e+2,
            8.23313447808e+2,
            3.11993802124e+3,
            3.97003311219e+3,
        ];
        ratfun(T::one() / eta, &AK, &BK) / (T::lit(-12.0) * eta)
    } else {
        -T::one() / (T::lit(12.0) * eta)
    }
}

/// ε₃(η): third-order coefficient.
pub(crate) fn eps3<T: FloatScalar>(eta: T) -> T {
    let one = T::one();
    if eta < T::lit(-8.0) {
        let x = eta * eta;
        let y = (-eta).ln() / eta;
        (T::lit(-30.0) + eta * y * (T::lit(6.0) * x * y * y - T::lit(12.0) + x)) / (T::lit(12.0) * eta * x * x)
    } else if eta < T::lit(-4.0) {
        const AK: [f64; 5] = [
            4.95346498136e-2,
            2.99521337141e-2,
            6.88296911516e-3,
            5.12634846317e-4,
            -2.01411722031e-5,
        ];
        const BK: [f64; 5] = [
            1.00000000000e+0,
            7.59803615283e-1,
            2.61547111595e-1,
            4.64854522477e-2,
            4.03751193496e-3,
        ];
        ratfun(eta, &AK, &BK) / (eta * eta)
    } else if eta < T::lit(-2.0) {
        const AK: [f64; 5] = [
            4.52313583942e-3,
            1.20744920113e-3,
            -7.89724156582e-5,
            -5.04476066942e-5,
            -5.35770949796e-6,
        ];
        const BK: [f64; 5] = [
            1.00000000000e+0,
            9.12203410349e-1,
            4.05368773071e-1,
            9.01638932349e-2,
            9.48935714996e-3,
        ];
        ratfun(eta, &AK, &BK)
    } else if eta < T::lit(2.0) {
        const AK: [f64; 5] = [
            4.39937562904e-3,
            4.87225670639e-4,
            -1.28470657374e-4,
            5.29110969589e-6,
            1.57166771750e-7,
        ];
        const BK: [f64; 5] = [
            1.00000000000e+0,
            7.94435257415e-1,
            3.33094721709e-1,
            7.03527806143e-2,
            8.06110846078e-3,
        ];
        ratfun(eta, &AK, &BK)
    } else if eta < T::lit(10.0) {
        const AK: [f64; 5] = [
            -1.14811912320e-3,
            -1.12850923276e-1,
            1.51623048511e+0,
            -2.18472031183e-1,
            7.30002451555e-2,
        ];
        const BK: [f64; 5] = [
            1.00000000000e+0,
            1.42482206905e+1,
            6.97360396285e+1,
            2.18938950816e+2,
            2.77067027185e+2,
        ];
        ratfun(one / eta, &AK, &BK) / (eta * eta)
    } else if eta < T::lit(100.0) {
        const AK: [f64; 5] = [
            -1.45727889667e-4,
            -2.90806748131e-1,
            -1.33085045450e+1,
            1.99722374056e+2,
            -1.14311378756e+1,
        ];
        const BK: [f64; 5] = [
            1.00000000000e+0,
            1.39612587808e+2,
            2.18901116348e+3,
            7.11524019009e+3,
            4.55746081453e+4,
        ];
        ratfun(one / eta, &AK, &BK) / (eta * eta)
    } else {
        -eta.ln() / (T::lit(12.0) * eta * eta * eta)
    }
}

/// λ = t solving −lnec(t−1) = x² with sign(t−1) = sign(x), i.e. [`lambdaeta`]
/// evaluated at η = x√2, by a starting approximation plus up to six
/// third-order corrections.
pub(crate) fn inveta<T: FloatScalar>(x: T) -> T {
    let one = T::one();
    if x < T::lit(-26.0) {
        return T::zero();
    }
    if x == T::zero() {
        return one;
    }

    let z = x * x;
    let x2 = x * T::lit(SQRT_2);
    let (mut mu, mut t) = if x2 > T::lit(2.0) {
        let p = z + one;
        let q = p.ln();
        let a = one / q;
        let b = T::lit(1.0 / 3.0) + a * (a - T::lit(1.5));
        let r = q / p;
        let mu = z + q + r * (one + r * (a - T::lit(0.5) + b * r));
        (mu, mu + one)
    } else if x2 > T::lit(-1.5) {
        let mu = x2
            * (one
                + x2 * (T::lit(1.0 / 3.0)
                    + x2 * (T::lit(1.0 / 36.0)
                        + x2 * (T::lit(-1.0 / 270.0) + x2 * (T::lit(1.0 / 4320.0) + x2 / T::lit(17010.0))))));
        (mu, mu + one)
    } else {
        let p = (-z - one).exp();
        let t = p
            * (one
                + p * (one + p * (T::lit(1.5) + p * (T::lit(8.0 / 3.0) + p * T::lit(125.0 / 24.0)))));
        (t - one, t)
    };
    if mu <= -one {
        // t below rounding of 1: the starting series is already exact
        return t;
    }

    let mut k = 0;
    loop {
        let r = -lnec(mu) - z;
        if r.abs() <= T::lit(1.0e-18) {
            break;
        }
        let r = r * t / mu;
        let p = r / t / mu;
        let q = r * (one - p * (T::lit(4.0) * t - one) / T::lit(6.0))
            / (one - p * (T::lit(2.0) * t + one) / T::lit(3.0));
        mu = mu - q;
        t = t - q;
        k += 1;
        if t <= T::zero() || mu <= -one {
            return T::zero();
        }
        if k > 5 || q.abs() < T::lit(1.0e-10) * (mu.abs() + one) {
            break;
        }
    }
    t
}
