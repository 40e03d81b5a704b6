//! Special mathematical functions.
//!
//! The centerpiece is the incomplete gamma ratio engine: [`gamma_ratio`]
//! returns both P(a,x) and Q(a,x) to full relative accuracy, and
//! [`gamma_ratio_inv`] solves P(a,x) = p (or Q(a,x) = q) for x. Around them sit
//! the gamma-function helpers they are built from (Γ, ln Γ, Γ*, the Stirling
//! correction), and the error-function family used by the asymptotic branch.
//! All functions are generic over [`FloatScalar`] (f32/f64), no-std compatible,
//! and stack-only.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`gamma_ratio`] | P(a,x) and Q(a,x) with a [`GammaStatus`] |
//! | [`gamma_ratio_inv`] | x such that P(a,x) = p and Q(a,x) = q |
//! | [`gamma_inc_inv`] | x such that P(a,x) = p |
//! | [`gamma_inc_upper_inv`] | x such that Q(a,x) = q |
//! | [`gamma_inc_inv_asymptotic`] | Large-a uniform asymptotic inversion |
//! | [`gamma_inc`] | Regularized lower incomplete gamma P(a,x) |
//! | [`gamma_inc_upper`] | Regularized upper incomplete gamma Q(a,x) = 1−P(a,x) |
//! | [`gamma_p`] / [`gamma_q`] | P and Q with failures folded into NaN |
//! | [`gamma_incomplete`] | Non-normalized γ(a,x) or Γ(a,x) |
//! | [`gamma`] | Gamma function Γ(x) |
//! | [`lgamma`] | Log-gamma ln Γ(x) |
//! | [`lgamma_sign`] | ln \|Γ(x)\| together with the sign of Γ(x) |
//! | [`gamma_star`] | Scaled gamma Γ*(x) = Γ(x) / (√(2π) x^(x−½) e^(−x)) |
//! | [`stirling_correction`] | ln Γ(x) − ((x−½) ln x − x + ½ ln 2π) |
//! | [`pochhammer`] / [`lpochhammer`] | Rising factorial (a)ₙ and its log |
//! | [`beta`] | Beta function B(a,b) = Γ(a)Γ(b)/Γ(a+b) |
//! | [`lbeta`] | Log-beta ln \|B(a,b)\| |
//! | [`erf`] | Error function |
//! | [`erfc`] | Complementary error function 1−erf(x) |
//! | [`erfcx`] | Scaled complementary error function e^(x²) erfc(x) |
//! | [`erfc_inv`] | Inverse complementary error function |
//!
//! # Example
//!
//! ```
//! use gamma_ratio::special::{gamma, gamma_ratio, gamma_inc_inv, erf};
//!
//! // Γ(5) = 4! = 24
//! assert!((gamma(5.0_f64) - 24.0).abs() < 1e-12);
//!
//! // P(1, x) = 1 − e^{−x}
//! let r = gamma_ratio(1.0_f64, 2.0).unwrap();
//! assert!((r.p - (1.0 - (-2.0_f64).exp())).abs() < 1e-15);
//!
//! // Median of the Gamma(3) distribution
//! let m = gamma_inc_inv(3.0_f64, 0.5).unwrap();
//! assert!((m.x - 2.674060313723561).abs() < 1e-12);
//!
//! // erf(0) = 0
//! assert!(erf(0.0_f64).abs() < 1e-16);
//! ```

use core::fmt;

use crate::FloatScalar;

mod elementary;
mod stirling;
mod gamma_fn;
mod beta_fn;
mod erf_fn;
mod dompart;
mod asymptotic;
mod incgamma;
mod eta;
mod inverse;

#[cfg(test)]
mod tests;

pub use gamma_fn::{gamma, gamma_star, lgamma, lgamma_sign, lpochhammer, pochhammer, stirling_correction};
pub use beta_fn::{beta, lbeta};
pub use erf_fn::{erf, erfc, erfc_inv, erfcx};
pub use incgamma::{
    gamma_inc, gamma_inc_upper, gamma_incomplete, gamma_p, gamma_q, gamma_ratio, GammaKind, GammaRatio,
};
pub use inverse::{gamma_inc_inv, gamma_inc_inv_asymptotic, gamma_inc_upper_inv, gamma_ratio_inv, GammaInverse};

/// Errors from special function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialError {
    /// Newton iteration did not converge within the iteration limit.
    ConvergenceFailure,
    /// Input outside the function's domain (e.g. a ≤ 0 or x < 0 for incomplete gamma).
    DomainError,
    /// A gamma factor overflowed; no trustworthy value could be formed.
    Overflow,
}

impl fmt::Display for SpecialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConvergenceFailure => write!(f, "iteration did not converge"),
            Self::DomainError => write!(f, "input outside function domain"),
            Self::Overflow => write!(f, "overflow in a gamma factor"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpecialError {}

/// Outcome of an in-domain ratio or inversion computation.
///
/// Numeric difficulty never aborts a computation: it is reported here next to
/// the value, and the caller decides whether the value is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GammaStatus {
    /// Value computed to full accuracy.
    Ok,
    /// A gamma factor overflowed. The accompanying value must not be trusted;
    /// for an inversion it is the initial approximation.
    Overflow,
    /// The Newton inversion hit its iteration limit. The accompanying value
    /// is the last iterate and is usually still a good estimate.
    IterationLimit,
}

impl GammaStatus {
    /// `true` for [`GammaStatus::Ok`].
    #[inline]
    pub fn is_ok(self) -> bool {
        self == GammaStatus::Ok
    }

    /// Turn a non-ok status into the matching [`SpecialError`].
    pub fn into_result<T>(self, value: T) -> Result<T, SpecialError> {
        match self {
            GammaStatus::Ok => Ok(value),
            GammaStatus::Overflow => Err(SpecialError::Overflow),
            GammaStatus::IterationLimit => Err(SpecialError::ConvergenceFailure),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared constants and numerical floors
// ---------------------------------------------------------------------------

/// Euler–Mascheroni constant γ.
pub(crate) const EULER_GAMMA: f64 = 0.577_215_664_901_532_860_6;

/// ln √(2π).
pub(crate) const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_741_8;

/// √(2π).
pub(crate) const SQRT_2PI: f64 = 2.506_628_274_631_000_502_4;

/// Exponents below this are flushed to zero in the dominant term.
pub(crate) const EXP_LOW: f64 = -300.0;

/// Nominal relative tolerance of the engine, floored by the element's epsilon.
#[inline]
pub(crate) fn tolerance<T: FloatScalar>() -> T {
    T::lit(1e-15).max(T::epsilon())
}

/// Underflow floor: ten times the smallest positive normal number.
#[inline]
pub(crate) fn dwarf<T: FloatScalar>() -> T {
    T::min_positive_value() * T::lit(10.0)
}

/// Largest finite value, used as the explicit overflow sentinel.
#[inline]
pub(crate) fn giant<T: FloatScalar>() -> T {
    T::max_value()
}
