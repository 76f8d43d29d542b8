//! FIR lattice.

use log::debug;

use super::{check_stage_count, LatticeOutput};
use crate::error::{check_length, FilterResult};
use crate::sample::{Sample, SampleFilter};

/// One FIR lattice stage: a reflection coefficient and a one-sample delay
/// of the backward signal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FirStage<T: Sample> {
    /// Reflection coefficient.
    pub reflection: T,
    h: T,
}

impl<T: Sample> FirStage<T> {
    /// Creates a stage with a cleared delay.
    pub fn new(reflection: T) -> Self {
        Self {
            reflection,
            h: T::zero(),
        }
    }

    /// Delayed backward signal.
    pub fn delay(&self) -> T {
        self.h
    }

    /// Clears the delay.
    pub fn reset(&mut self) {
        self.h = T::zero();
    }

    /// `g' = h + k·f`, `f' = f + k·h`, `h' = g`.
    #[inline]
    pub fn process(&mut self, f: &mut T, g: &mut T) {
        let g_in = *g;
        *g = self.h + self.reflection * *f;
        *f = *f + self.reflection * self.h;
        self.h = g_in;
    }
}

/// Cascade of FIR lattice stages processed front to back.
#[derive(Debug, Clone)]
pub struct FirLattice<T: Sample> {
    stages: Vec<FirStage<T>>,
}

impl<T: Sample> FirLattice<T> {
    /// Creates a cascade of `count` stages with zero reflection.
    pub fn new(count: usize) -> FilterResult<Self> {
        check_stage_count(count)?;
        debug!("building FIR lattice with {} stages", count);
        Ok(Self {
            stages: vec![FirStage::default(); count],
        })
    }

    /// Creates a cascade with one stage per reflection coefficient.
    pub fn from_reflection(reflection: &[T]) -> FilterResult<Self> {
        let mut lattice = Self::new(reflection.len())?;
        lattice.set_coefficients(reflection)?;
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
    pub fn stages(&self) -> &[FirStage<T>] {
        &self.stages
    }

    /// Assigns reflection coefficients stage by stage.
    pub fn set_coefficients(&mut self, reflection: &[T]) -> FilterResult<()> {
        check_length("reflection", self.stages.len(), reflection.len())?;
        for (stage, &k) in self.stages.iter_mut().zip(reflection) {
            stage.reflection = k;
        }
        Ok(())
    }

    /// Clears every stage's delay.
    pub fn reset(&mut self) {
        self.stages.iter_mut().for_each(FirStage::reset);
    }

    /// Runs `f` and `g` through every stage in order, in place.
    #[inline]
    pub fn process(&mut self, f: &mut T, g: &mut T) {
        for stage in self.stages.iter_mut() {
            stage.process(f, g);
        }
    }

    /// Runs one `(f, g)` pair through the cascade.
    #[inline]
    pub fn process_pair(&mut self, mut f: T, mut g: T) -> LatticeOutput<T> {
        self.process(&mut f, &mut g);
        LatticeOutput { f, g }
    }
}

/// Feeds the input to both rails and returns the backward output.
impl<T: Sample> SampleFilter<T> for FirLattice<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        self.process_pair(input, input).g
    }

    fn reset(&mut self) {
        FirLattice::reset(self)
    }
}
