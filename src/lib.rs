//! # gamma_ratio
//!
//! Pure-Rust incomplete gamma function ratios and their inverse, no-std
//! compatible. Implements the Gil–Segura–Temme algorithm: every (a, x) is
//! routed to exactly one of a Taylor series, a continued fraction or a uniform
//! (saddle-point) asymptotic expansion, so that both P(a,x) and Q(a,x) come out
//! with full relative accuracy, including the tiny one.
//!
//! ## Quick start
//!
//! ```
//! use gamma_ratio::special::{gamma_ratio, gamma_ratio_inv, GammaStatus};
//!
//! let r = gamma_ratio(2.0_f64, 3.0).unwrap();
//! assert_eq!(r.status, GammaStatus::Ok);
//! assert!((r.p - 0.800851726528544).abs() < 1e-14);
//! assert!((r.q - 0.199148273471456).abs() < 1e-14);
//!
//! // Invert: find x with P(2, x) = r.p
//! let inv = gamma_ratio_inv(2.0_f64, r.p, r.q).unwrap();
//! assert!((inv.x - 3.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`special`]: The ratio engine ([`special::gamma_ratio`]), the inversion
//!   engine ([`special::gamma_ratio_inv`]), and the gamma-function family they
//!   are built on: Γ, ln Γ, the scaled gamma Γ*, beta, Pochhammer symbols, and
//!   the error-function family (erf, erfc, scaled erfc, inverse erfc).
//!
//! - [`stats`]: Gamma, chi-squared, Erlang, exponential and Poisson
//!   distributions whose CDFs and quantiles come straight from the ratio and
//!   inversion engines. Requires `stats` feature.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all numeric elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`Transcendental`]: precision-matched elementary functions (erfc, lgamma, tgamma)
//!   - [`FloatScalar`]: real floats (`Scalar + Float + Transcendental`), used everywhere
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | `stats`   | yes      | Probability distributions built on the engine |
//! | `all`     | no       | All features: `std` + `stats` |
//!
//! `num-traits/libm` is always enabled, so `no_std` builds get `Float` with no
//! extra feature.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod special;
#[cfg(feature = "stats")]
pub mod stats;
pub mod traits;

pub use traits::{FloatScalar, Scalar, Transcendental};
