//! All-pole lattice.
//!
//! An `N`-stage cascade realizes an `N`-pole filter with one scalar register
//! per stage. After each stage runs, its register is overwritten with the
//! next stage's register, and the last stage receives the forward output.
//! This shuffle stands in for a single delay chain shared by every stage and
//! must happen in exactly this order.

use log::debug;

use super::{check_stage_count, LatticeOutput};
use crate::error::{check_length, FilterResult};
use crate::sample::{Sample, SampleFilter};

/// One all-pole lattice stage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AllPoleStage<T: Sample> {
    /// Reflection coefficient.
    pub reflection: T,
    g: T,
}

impl<T: Sample> AllPoleStage<T> {
    /// Creates a stage with a cleared register.
    pub fn new(reflection: T) -> Self {
        Self {
            reflection,
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

/// Cascade of all-pole lattice stages.
#[derive(Debug, Clone)]
pub struct AllPoleLattice<T: Sample> {
    stages: Vec<AllPoleStage<T>>,
}

impl<T: Sample> AllPoleLattice<T> {
    /// Creates a cascade of `count` stages with zero reflection.
    pub fn new(count: usize) -> FilterResult<Self> {
        check_stage_count(count)?;
        debug!("building all-pole lattice with {} stages", count);
        Ok(Self {
            stages: vec![AllPoleStage::default(); count],
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
    pub fn stages(&self) -> &[AllPoleStage<T>] {
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

    /// Clears every stage's register.
    pub fn reset(&mut self) {
        self.stages.iter_mut().for_each(AllPoleStage::reset);
    }

    /// Runs one sample through the cascade in place.
    ///
    /// `f` carries the input in and the filtered output out. The incoming
    /// `g` is ignored and replaced with stage 0's register after it runs.
    #[inline]
    pub fn process(&mut self, f: &mut T, g: &mut T) {
        let last = self.stages.len() - 1;
        self.stages[0].process(f);
        *g = self.stages[0].g;
        for i in 1..self.stages.len() {
            self.stages[i].process(f);
            self.stages[i - 1].g = self.stages[i].g;
        }
        self.stages[last].g = *f;
    }

    /// Runs one `(f, g)` pair through the cascade.
    #[inline]
    pub fn process_pair(&mut self, mut f: T, mut g: T) -> LatticeOutput<T> {
        self.process(&mut f, &mut g);
        LatticeOutput { f, g }
    }
}

/// Returns the forward output.
impl<T: Sample> SampleFilter<T> for AllPoleLattice<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        self.process_pair(input, T::zero()).f
    }

    fn reset(&mut self) {
        AllPoleLattice::reset(self)
    }
}
