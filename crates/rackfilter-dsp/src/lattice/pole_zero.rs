//! Pole-zero (general IIR) lattice.
//!
//! The all-pole recursion with an extra tap coefficient per stage. The tap
//! outputs `Σ c_i · g_i` are accumulated during the sweep and added to the
//! forward output scaled by the incoming `g`, which carries the direct-path
//! gain.

use log::debug;

use super::{check_stage_count, LatticeOutput};
use crate::error::{check_length, FilterResult};
use crate::sample::{Sample, SampleFilter};

/// One pole-zero lattice stage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PoleZeroStage<T: Sample> {
    /// Reflection coefficient.
    pub reflection: T,
    /// Tap coefficient.
    pub tap: T,
    g: T,
}

impl<T: Sample> PoleZeroStage<T> {
    /// Creates a stage with a cleared register.
    pub fn new(reflection: T, tap: T) -> Self {
        Self {
            reflection,
            tap,
            g: T::zero(),
        }
    }

    /// Backward register.
    pub fn g(&self) -> T {
        self.g
    }

    /// Clears the register.
    pub fn reset(&mut self) {
        self.g = T::zero();
    }

    /// `f' = f - k·g`, `g' = g + k·f'`.
    #[inline]
    pub fn process(&mut self, f: &mut T) {
        *f = *f - self.reflection * self.g;
        self.g = self.g + self.reflection * *f;
    }
}

/// Cascade of pole-zero lattice stages.
#[derive(Debug, Clone)]
pub struct PoleZeroLattice<T: Sample> {
    stages: Vec<PoleZeroStage<T>>,
    direct_gain: T,
}

impl<T: Sample> PoleZeroLattice<T> {
    /// Creates a cascade of `count` stages with zero coefficients and unit
    /// direct gain.
    pub fn new(count: usize) -> FilterResult<Self> {
        check_stage_count(count)?;
        debug!("building pole-zero lattice with {} stages", count);
        Ok(Self {
            stages: vec![PoleZeroStage::default(); count],
            direct_gain: T::one(),
        })
    }

    /// Creates a cascade from matching reflection and tap coefficients.
    pub fn from_coefficients(reflection: &[T], taps: &[T]) -> FilterResult<Self> {
        let mut lattice = Self::new(reflection.len())?;
        lattice.set_poles(reflection)?;
        lattice.set_zeros(taps)?;
        Ok(lattice)
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false; a cascade has at least one stage.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stages in processing order.
    pub fn stages(&self) -> &[PoleZeroStage<T>] {
        &self.stages
    }

    /// Assigns reflection coefficients stage by stage.
    pub fn set_poles(&mut self, reflection: &[T]) -> FilterResult<()> {
        check_length("reflection", self.stages.len(), reflection.len())?;
        for (stage, &k) in self.stages.iter_mut().zip(reflection) {
            stage.reflection = k;
        }
        Ok(())
    }

    /// Assigns tap coefficients stage by stage.
    pub fn set_zeros(&mut self, taps: &[T]) -> FilterResult<()> {
        check_length("taps", self.stages.len(), taps.len())?;
        for (stage, &c) in self.stages.iter_mut().zip(taps) {
            stage.tap = c;
        }
        Ok(())
    }

    /// Gain passed as the incoming `g` by the [`SampleFilter`] impl.
    pub fn direct_gain(&self) -> T {
        self.direct_gain
    }

    /// Sets the gain passed as the incoming `g` by the [`SampleFilter`] impl.
    pub fn set_direct_gain(&mut self, gain: T) {
        self.direct_gain = gain;
    }

    /// Clears every stage's register.
    pub fn reset(&mut self) {
        self.stages.iter_mut().for_each(PoleZeroStage::reset);
    }

    /// Runs one sample through the cascade in place.
    ///
    /// On return `f = g_in · f_lattice + Σ c_i · g_i` and `g` holds stage 0's
    /// register as it stood right after stage 0 ran, before the shuffle.
    #[inline]
    pub fn process(&mut self, f: &mut T, g: &mut T) {
        let last = self.stages.len() - 1;
        self.stages[0].process(f);
        let mut y = self.stages[0].tap * self.stages[0].g;
        let w = self.stages[0].g;
        for i in 1..self.stages.len() {
            self.stages[i].process(f);
            self.stages[i - 1].g = self.stages[i].g;
            y = y + self.stages[i].tap * self.stages[i].g;
        }
        self.stages[last].g = *f;
        *f = *g * *f + y;
        *g = w;
    }

    /// Runs one `(f, g)` pair through the cascade.
    #[inline]
    pub fn process_pair(&mut self, mut f: T, mut g: T) -> LatticeOutput<T> {
        self.process(&mut f, &mut g);
        LatticeOutput { f, g }
    }
}

/// Feeds the direct gain as `g` and returns the forward output.
impl<T: Sample> SampleFilter<T> for PoleZeroLattice<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        self.process_pair(input, self.direct_gain).f
    }

    fn reset(&mut self) {
        PoleZeroLattice::reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::AllPoleLattice;
    use pretty_assertions::assert_eq;

    fn run(reflection: &[f64], taps: &[f64], input: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let mut lattice = PoleZeroLattice::from_coefficients(reflection, taps).unwrap();
        input
            .iter()
            .map(|&x| {
                let out = lattice.process_pair(x, 1.0);
                (out.f, out.g)
            })
            .unzip()
    }

    #[test]
    fn test_unit_reflection_no_taps() {
        let (f, g) = run(&[1.0], &[0.0], &[1.0; 4]);
        assert_eq!(f, vec![1.0, 0.0, 1.0, 0.0]);
        assert_eq!(g, vec![1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_negative_unit_reflection() {
        let (f, g) = run(&[-1.0], &[0.0], &[1.0; 4]);
        assert_eq!(f, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(g, vec![-1.0, -1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_two_stages() {
        let (f, g) = run(&[1.0, 1.0], &[0.0, 0.0], &[1.0; 4]);
        assert_eq!(f, vec![1.0, -1.0, 2.0, -2.0]);
        assert_eq!(g, vec![1.0, 1.0, 1.0, 1.0]);

        let (f, g) = run(&[1.0, 1.0], &[0.0, 1.0], &[1.0; 4]);
        assert_eq!(f, vec![2.0, -1.0, 3.0, -2.0]);
        assert_eq!(g, vec![1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_zero_taps_match_all_pole() {
        let reflection = [0.6, 0.15, -0.3, 0.25, 0.5];
        let mut all_pole = AllPoleLattice::from_reflection(&reflection).unwrap();
        let mut pole_zero = PoleZeroLattice::from_coefficients(&reflection, &[0.0; 5]).unwrap();
        for n in 0..64 {
            let x = (0.41 * n as f64).sin();
            let expected = all_pole.process_pair(x, 0.0);
            let actual = pole_zero.process_pair(x, 1.0);
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_tap_length_checked() {
        assert!(PoleZeroLattice::from_coefficients(&[0.5, 0.5], &[1.0]).is_err());
        let mut lattice = PoleZeroLattice::<f32>::new(2).unwrap();
        assert!(lattice.set_zeros(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_direct_gain_scales_forward_path() {
        let mut lattice = PoleZeroLattice::from_coefficients(&[0.0], &[0.0]).unwrap();
        lattice.set_direct_gain(0.5);
        assert_eq!(SampleFilter::process(&mut lattice, 2.0), 1.0);
        assert_eq!(lattice.direct_gain(), 0.5);
    }
}
