//! Window functions for FIR design.
//!
//! Each window is evaluated at index `n` of an `N`-point window. The
//! symmetric form (divisor `N - 1`) is the one used for filter design; the
//! periodic form (divisor `N`) is the one used for spectral analysis.

use rackfilter_spec::WindowKind;

use crate::sample::Sample;

/// Window shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Window {
    /// Rectangular window.
    Boxcar,
    /// Triangular window with zero endpoints.
    Bartlett,
    /// Bartlett-Hann hybrid.
    BartlettHann,
    /// Piecewise-cubic de la Vallée Poussin window.
    Parzen,
    /// Parabolic window.
    Welch,
    /// Half-period sine.
    Cosine,
    /// Convolution of two half-period cosines.
    Bohman,
    /// Central lobe of a sinc.
    Lanczos,
    /// Raised cosine with zero endpoints.
    Hann,
    /// Raised cosine with 0.08 endpoints.
    #[default]
    Hamming,
    /// Three-term cosine sum.
    Blackman,
    /// Four-term minimum side-lobe cosine sum.
    BlackmanHarris,
    /// Four-term Nuttall variant of Blackman-Harris.
    BlackmanNuttall,
    /// Four-term cosine-sum approximation of the Kaiser-Bessel window.
    KaiserBessel,
    /// Five-term flat-top window. Dips slightly below zero near the edges.
    Flattop,
}

const BLACKMAN: [f64; 3] = [0.42, 0.5, 0.08];
const BLACKMAN_HARRIS: [f64; 4] = [0.35875, 0.48829, 0.14128, 0.01168];
const BLACKMAN_NUTTALL: [f64; 4] = [0.3635819, 0.4891775, 0.1365995, 0.0106411];
const KAISER_BESSEL: [f64; 4] = [0.402, 0.498, 0.098, 0.001];
const FLATTOP: [f64; 5] = [0.21557895, 0.41663158, 0.277263158, 0.083578947, 0.006947368];

/// `a0 - a1 cos(φ) + a2 cos(2φ) - ...`
#[inline]
fn cosine_sum<T: Sample>(coefficients: &[f64], phase: T) -> T {
    coefficients
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (k, &a)| {
            let term = T::lit(a) * (T::lit(k as f64) * phase).cos();
            if k % 2 == 0 {
                acc + term
            } else {
                acc - term
            }
        })
}

impl Window {
    /// Every shape, in declaration order.
    pub const ALL: [Window; 15] = [
        Window::Boxcar,
        Window::Bartlett,
        Window::BartlettHann,
        Window::Parzen,
        Window::Welch,
        Window::Cosine,
        Window::Bohman,
        Window::Lanczos,
        Window::Hann,
        Window::Hamming,
        Window::Blackman,
        Window::BlackmanHarris,
        Window::BlackmanNuttall,
        Window::KaiserBessel,
        Window::Flattop,
    ];

    /// Evaluates the window at index `n` of `len` points.
    ///
    /// # Arguments
    /// * `n` - Index in `0..len`
    /// * `len` - Window length
    /// * `symmetric` - Symmetric (filter design) or periodic (analysis) form
    pub fn value<T: Sample>(&self, n: usize, len: usize, symmetric: bool) -> T {
        let sym = if symmetric { T::one() } else { T::zero() };
        let n = T::lit(n as f64);
        let len = T::lit(len as f64);
        let two = T::lit(2.0);
        let span = len - sym;
        let phase = two * T::PI() * n / span;
        // Position mapped onto [-1, 1].
        let centered = two * n / span - T::one();

        match self {
            Window::Boxcar => T::one(),
            // A one-point symmetric window has no span.
            _ if span == T::zero() => T::one(),
            Window::Bartlett => (two / span) * (span / two - (n - span / two).abs()),
            Window::BartlettHann => {
                T::lit(0.62) - T::lit(0.48) * (n / span - T::lit(0.5)).abs()
                    - T::lit(0.38) * phase.cos()
            }
            Window::Parzen => {
                let x = centered.abs();
                if x >= T::lit(0.5) {
                    two * (T::one() - x).powi(3)
                } else {
                    T::one() - T::lit(6.0) * x * x + T::lit(6.0) * x.powi(3)
                }
            }
            Window::Welch => {
                let x = (n - span / two) / ((span + two) / two);
                T::one() - x * x
            }
            Window::Cosine => (T::PI() * (n + T::lit(0.5)) / (len + T::one() - sym)).sin(),
            Window::Bohman => {
                let x = centered.abs();
                (T::one() - x) * (T::PI() * x).cos() + (T::PI() * x).sin() / T::PI()
            }
            Window::Lanczos => {
                let x = T::PI() * centered;
                if x == T::zero() {
                    T::one()
                } else {
                    x.sin() / x
                }
            }
            Window::Hann => T::lit(0.5) - T::lit(0.5) * phase.cos(),
            Window::Hamming => T::lit(0.54) - T::lit(0.46) * phase.cos(),
            Window::Blackman => cosine_sum(&BLACKMAN, phase),
            Window::BlackmanHarris => cosine_sum(&BLACKMAN_HARRIS, phase),
            Window::BlackmanNuttall => cosine_sum(&BLACKMAN_NUTTALL, phase),
            Window::KaiserBessel => cosine_sum(&KAISER_BESSEL, phase),
            Window::Flattop => cosine_sum(&FLATTOP, phase),
        }
    }

    /// Fills `out` with the window.
    pub fn fill<T: Sample>(&self, out: &mut [T], symmetric: bool) {
        let len = out.len();
        for (n, w) in out.iter_mut().enumerate() {
            *w = self.value(n, len, symmetric);
        }
    }

    /// Mean value of the window for large `N`; divide by it to restore unity
    /// passband gain.
    pub fn coherent_gain(&self) -> f64 {
        match self {
            Window::Boxcar => 1.0,
            Window::Bartlett | Window::BartlettHann | Window::Hann => 0.5,
            Window::Parzen => 0.375,
            Window::Welch => 0.667317,
            Window::Cosine => 0.637240,
            Window::Bohman => 0.405285,
            Window::Lanczos => 0.589490,
            Window::Hamming => 0.54,
            Window::Blackman => 0.42,
            Window::BlackmanHarris => 0.35875,
            Window::BlackmanNuttall => 0.363582,
            Window::KaiserBessel => 0.402,
            Window::Flattop => 0.215579,
        }
    }

    /// True for shapes that can go negative.
    pub fn has_negative_lobes(&self) -> bool {
        matches!(self, Window::Flattop)
    }
}

impl From<WindowKind> for Window {
    fn from(kind: WindowKind) -> Self {
        match kind {
            WindowKind::Boxcar => Window::Boxcar,
            WindowKind::Bartlett => Window::Bartlett,
            WindowKind::BartlettHann => Window::BartlettHann,
            WindowKind::Parzen => Window::Parzen,
            WindowKind::Welch => Window::Welch,
            WindowKind::Cosine => Window::Cosine,
            WindowKind::Bohman => Window::Bohman,
            WindowKind::Lanczos => Window::Lanczos,
            WindowKind::Hann => Window::Hann,
            WindowKind::Hamming => Window::Hamming,
            WindowKind::Blackman => Window::Blackman,
            WindowKind::BlackmanHarris => Window::BlackmanHarris,
            WindowKind::BlackmanNuttall => Window::BlackmanNuttall,
            WindowKind::KaiserBessel => Window::KaiserBessel,
            WindowKind::Flattop => Window::Flattop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(w: Window, len: usize) -> Vec<f64> {
        let mut out = vec![0.0; len];
        w.fill(&mut out, true);
        out
    }

    #[test]
    fn test_boxcar() {
        assert!(window(Window::Boxcar, 8).iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_hann_endpoints_and_peak() {
        let w = window(Window::Hann, 9);
        assert!(w[0].abs() < 1e-12);
        assert!(w[8].abs() < 1e-12);
        assert!((w[4] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hamming_endpoints() {
        let w = window(Window::Hamming, 9);
        assert!((w[0] - 0.08).abs() < 1e-12);
        assert!((w[4] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_blackman_endpoints() {
        let w = window(Window::Blackman, 9);
        assert!(w[0].abs() < 1e-12);
        assert!((w[4] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bartlett_triangle() {
        let w = window(Window::Bartlett, 5);
        let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
        for (a, b) in w.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_symmetric_windows_are_symmetric() {
        for kind in Window::ALL {
            let w = window(kind, 16);
            for i in 0..8 {
                assert!(
                    (w[i] - w[15 - i]).abs() < 1e-12,
                    "{:?} not symmetric at {}",
                    kind,
                    i
                );
            }
        }
    }

    #[test]
    fn test_polynomial_and_sinc_shapes() {
        let expect = |w: Window, values: [f64; 5]| {
            for (got, want) in window(w, 5).iter().zip(values.iter()) {
                assert!((got - want).abs() < 1e-6, "{:?}: {} vs {}", w, got, want);
            }
        };
        expect(Window::Parzen, [0.0, 0.25, 1.0, 0.25, 0.0]);
        expect(Window::Bohman, [0.0, 0.318310, 1.0, 0.318310, 0.0]);
        expect(Window::Lanczos, [0.0, 0.636620, 1.0, 0.636620, 0.0]);
        expect(Window::BartlettHann, [0.0, 0.5, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_cosine_sum_shapes() {
        let expect = |w: Window, edge: f64, quarter: f64, center: f64| {
            let v = window(w, 5);
            assert!((v[0] - edge).abs() < 1e-9, "{:?} edge {}", w, v[0]);
            assert!((v[1] - quarter).abs() < 1e-9, "{:?} quarter {}", w, v[1]);
            assert!((v[2] - center).abs() < 1e-9, "{:?} center {}", w, v[2]);
        };
        expect(Window::BlackmanHarris, 6.0e-5, 0.21747, 1.0);
        expect(Window::BlackmanNuttall, 3.628e-4, 0.2269824, 1.0);
        expect(Window::KaiserBessel, 1.0e-3, 0.304, 0.999);
        expect(Window::Flattop, -4.21051e-4, -0.05473684, 1.000000003);
        assert!(Window::Flattop.has_negative_lobes());
    }

    #[test]
    fn test_coherent_gain_matches_mean() {
        for kind in [Window::Hann, Window::Hamming, Window::Blackman, Window::BlackmanHarris] {
            let mut w = vec![0.0f64; 4096];
            kind.fill(&mut w, false);
            let mean = w.iter().sum::<f64>() / w.len() as f64;
            assert!((mean - kind.coherent_gain()).abs() < 1e-6, "{:?}", kind);
        }
    }

    #[test]
    fn test_periodic_hann_starts_at_zero() {
        let mut w = vec![0.0f32; 8];
        Window::Hann.fill(&mut w, false);
        assert!(w[0].abs() < 1e-6);
        assert!((w[4] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_point() {
        assert_eq!(Window::Hann.value::<f64>(0, 1, true), 1.0);
    }

    #[test]
    fn test_from_window_kind() {
        assert_eq!(Window::from(WindowKind::Blackman), Window::Blackman);
        assert_eq!(Window::from(WindowKind::default()), Window::Hamming);
        assert_eq!(Window::from(WindowKind::KaiserBessel), Window::KaiserBessel);
    }
}
