//! Lattice realizations parameterized by reflection coefficients.
//!
//! Each cascade owns an ordered, non-empty sequence of stages and exchanges
//! a forward signal `f` and a backward signal `g` between them once per
//! sample. Reflection coefficients in `(-1, 1)` keep the recursive forms
//! stable; the boundary values are stable in exact arithmetic but marginal
//! in floating point. The cascades do not enforce the range.

pub mod all_pole;
pub mod fir;
pub mod pole_zero;

pub use all_pole::{AllPoleLattice, AllPoleStage};
pub use fir::{FirLattice, FirStage};
pub use pole_zero::{PoleZeroLattice, PoleZeroStage};

use crate::error::{FilterError, FilterResult};

/// Forward and backward outputs of one lattice step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatticeOutput<T> {
    /// Forward signal.
    pub f: T,
    /// Backward signal.
    pub g: T,
}

pub(crate) fn check_stage_count(count: usize) -> FilterResult<()> {
    if count < 1 {
        return Err(FilterError::InvalidOrder { order: count });
    }
    Ok(())
}
