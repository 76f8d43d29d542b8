//! Helpers for driving filters and comparing sequences.

use rackfilter_dsp::{Sample, SampleFilter};

/// Runs `input` through `filter` and collects the output.
pub fn run<T, F>(filter: &mut F, input: &[T]) -> Vec<T>
where
    T: Sample,
    F: SampleFilter<T> + ?Sized,
{
    input.iter().map(|&x| filter.process(x)).collect()
}

/// Converts an `f64` sequence to the sample type.
pub fn convert<T: Sample>(input: &[f64]) -> Vec<T> {
    input.iter().map(|&x| T::lit(x)).collect()
}

/// Largest absolute difference between two equally long sequences.
pub fn max_abs_diff<T: Sample>(a: &[T], b: &[T]) -> f64 {
    assert_eq!(a.len(), b.len(), "sequence lengths differ");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x.to_f64_lossless() - y.to_f64_lossless()).abs())
        .fold(0.0, f64::max)
}

/// Asserts that two sequences agree within `tolerance` at every index.
pub fn assert_sequences_close<T: Sample>(actual: &[T], expected: &[T], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "sequence lengths differ");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let (a, e) = (a.to_f64_lossless(), e.to_f64_lossless());
        assert!(
            (a - e).abs() <= tolerance,
            "sample {} differs: actual {}, expected {} (tolerance {})",
            i,
            a,
            e,
            tolerance
        );
    }
}

/// Peak absolute value of a sequence. Returns infinity if any sample is NaN.
pub fn peak<T: Sample>(signal: &[T]) -> f64 {
    signal
        .iter()
        .map(|s| {
            let s = s.to_f64_lossless();
            if s.is_nan() {
                f64::INFINITY
            } else {
                s.abs()
            }
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_flags_nan() {
        assert_eq!(peak(&[0.5, -2.0, 1.0]), 2.0);
        assert_eq!(peak(&[0.5, f64::NAN]), f64::INFINITY);
    }

    #[test]
    fn test_max_abs_diff() {
        assert_eq!(max_abs_diff(&[1.0_f32, 2.0], &[1.5, 2.0]), 0.5);
    }
}
