//! Bounded nonlinearities used in ladder feedback paths.

use crate::sample::Sample;

/// Clamps to `[-1, 1]`.
#[inline]
pub fn hard_clip<T: Sample>(x: T) -> T {
    x.max(-T::one()).min(T::one())
}

/// Hard clip with slope `leak` outside `[-1, 1]`.
#[inline]
pub fn leaky_hard_clip<T: Sample>(x: T, leak: T) -> T {
    let clipped = hard_clip(x);
    clipped + leak * (x - clipped)
}

/// Cubic soft clip: `1.5 * (x - x³/3)` on the hard-clipped input.
///
/// Smooth through the origin with unit slope at zero, flat at ±1.
#[inline]
pub fn cubic_clip<T: Sample>(x: T) -> T {
    let x = hard_clip(x);
    T::lit(1.5) * (x - x * x * x / T::lit(3.0))
}

/// Hyperbolic tangent soft clip.
#[inline]
pub fn hyperbolic_tangent<T: Sample>(x: T) -> T {
    x.tanh()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_clip() {
        assert_eq!(hard_clip(0.5f64), 0.5);
        assert_eq!(hard_clip(3.0f64), 1.0);
        assert_eq!(hard_clip(-3.0f32), -1.0);
    }

    #[test]
    fn test_cubic_clip() {
        assert!((cubic_clip(0.5f64) - 0.6875).abs() < 1e-12);
        assert!((cubic_clip(0.1f64) - 0.1495).abs() < 1e-12);
        assert!((cubic_clip(-0.5f64) + 0.6875).abs() < 1e-12);
        assert!((cubic_clip(1.0f64) - 1.0).abs() < 1e-12);
        assert!((cubic_clip(10.0f64) - 1.0).abs() < 1e-12);
        assert!((cubic_clip(-10.0f64) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hyperbolic_tangent() {
        assert!((hyperbolic_tangent(0.5f64) - 0.46211716).abs() < 1e-8);
        assert!(hyperbolic_tangent(1e6f64) <= 1.0);
    }

    #[test]
    fn test_leaky_hard_clip() {
        assert_eq!(leaky_hard_clip(0.5f64, 0.1), 0.5);
        assert!((leaky_hard_clip(2.0f64, 0.1) - 1.1).abs() < 1e-12);
        assert!((leaky_hard_clip(-3.0f64, 0.5) + 2.0).abs() < 1e-12);
    }
}
