use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as numeric elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements accepted by the special functions.
///
/// `Float` supplies the IEEE-754 surface (NaN/∞ predicates, epsilon,
/// `max_value`, `exp`, `ln`, `ln_1p`, `sin`, `sinh`, `sqrt`, `powf`);
/// [`Transcendental`] adds the routines `num-traits` does not cover.
pub trait FloatScalar: Scalar + Float + Transcendental {}

impl<T: Scalar + Float + Transcendental> FloatScalar for T {}

/// Elementary transcendental functions evaluated at the element's own precision.
///
/// Every algorithm in the crate is written once against this trait; each
/// instantiation is monomorphized, so an `f32` evaluation never rounds through
/// `f64` intermediates. A new precision plugs in by implementing this trait.
pub trait Transcendental: Scalar {
    /// Round an `f64` literal into `Self`.
    fn lit(v: f64) -> Self;

    /// Complementary error function.
    fn terfc(self) -> Self;

    /// Natural log of |Γ(x)|.
    fn tlgamma(self) -> Self;

    /// Gamma function.
    fn tgamma(self) -> Self;
}

/// Concrete impls for real floats, delegating to `libm`.
macro_rules! impl_transcendental {
    ($($t:ty => $erfc:path, $lgamma:path, $tgamma:path);* $(;)?) => {
        $(
            impl Transcendental for $t {
                #[inline] fn lit(v: f64) -> $t { v as $t }
                #[inline] fn terfc(self) -> $t { $erfc(self) }
                #[inline] fn tlgamma(self) -> $t { $lgamma(self) }
                #[inline] fn tgamma(self) -> $t { $tgamma(self) }
            }
        )*
    };
}

impl_transcendental! {
    f32 => libm::erfcf, libm::lgammaf, libm::tgammaf;
    f64 => libm::erfc, libm::lgamma, libm::tgamma;
}
