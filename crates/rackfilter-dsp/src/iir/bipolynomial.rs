//! Variable-order direct forms.
//!
//! Order is chosen at runtime. Coefficient storage and delay lines are sized
//! on construction or by [`set_order`](BipolynomialDirectForm1::set_order);
//! `process` never allocates.

use log::debug;
use num_complex::Complex;

use crate::coefficients::freqz;
use crate::delay_line::DelayLine;
use crate::error::{check_length, FilterError, FilterResult};
use crate::sample::{Sample, SampleFilter};

fn check_order(order: usize) -> FilterResult<()> {
    if order < 1 {
        return Err(FilterError::InvalidOrder { order });
    }
    Ok(())
}

/// Coefficient storage shared by both forms: `b` has `order + 1` entries,
/// `a` has `order`.
#[derive(Debug, Clone)]
struct Polynomials<T: Sample> {
    b: Vec<T>,
    a: Vec<T>,
}

impl<T: Sample> Polynomials<T> {
    fn new(order: usize) -> Self {
        Self {
            b: vec![T::zero(); order + 1],
            a: vec![T::zero(); order],
        }
    }

    fn resize(&mut self, order: usize) {
        self.b.resize(order + 1, T::zero());
        self.a.resize(order, T::zero());
    }

    fn assign(&mut self, b: &[T], a: &[T]) -> FilterResult<()> {
        check_length("b", self.b.len(), b.len())?;
        check_length("a", self.a.len(), a.len())?;
        self.b.copy_from_slice(b);
        self.a.copy_from_slice(a);
        Ok(())
    }
}

/// N-order Direct Form 1.
#[derive(Debug, Clone)]
pub struct BipolynomialDirectForm1<T: Sample> {
    coefficients: Polynomials<T>,
    x: DelayLine<T>,
    y: DelayLine<T>,
}

impl<T: Sample> BipolynomialDirectForm1<T> {
    /// Creates a zeroed filter of the given order.
    pub fn new(order: usize) -> FilterResult<Self> {
        check_order(order)?;
        Ok(Self {
            coefficients: Polynomials::new(order),
            x: DelayLine::new(order),
            y: DelayLine::new(order),
        })
    }

    /// Creates a filter from `b` (order + 1 entries) and `a` (order entries).
    pub fn with_coefficients(b: &[T], a: &[T]) -> FilterResult<Self> {
        let mut filter = Self::new(a.len())?;
        filter.set_coefficients(b, a)?;
        Ok(filter)
    }

    /// Changes the order. Clears state; existing coefficients are truncated
    /// or zero-extended.
    pub fn set_order(&mut self, order: usize) -> FilterResult<()> {
        check_order(order)?;
        debug!("resizing direct form 1 from order {} to {}", self.order(), order);
        self.x.resize(order);
        self.y.resize(order);
        self.coefficients.resize(order);
        Ok(())
    }

    /// Current order.
    pub fn order(&self) -> usize {
        self.x.len()
    }

    /// Replaces both coefficient arrays.
    pub fn set_coefficients(&mut self, b: &[T], a: &[T]) -> FilterResult<()> {
        self.coefficients.assign(b, a)
    }

    /// Feedforward coefficients.
    pub fn b(&self) -> &[T] {
        &self.coefficients.b
    }

    /// Mutable feedforward coefficients.
    pub fn b_mut(&mut self) -> &mut [T] {
        &mut self.coefficients.b
    }

    /// Feedback coefficients.
    pub fn a(&self) -> &[T] {
        &self.coefficients.a
    }

    /// Mutable feedback coefficients.
    pub fn a_mut(&mut self) -> &mut [T] {
        &mut self.coefficients.a
    }

    /// Complex frequency response at `omega` radians.
    pub fn frequency_response(&self, omega: T) -> Complex<T> {
        freqz(&self.coefficients.b, &self.coefficients.a, omega)
    }

    /// Clears the input and output histories.
    pub fn reset(&mut self) {
        self.x.clear();
        self.y.clear();
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        let Polynomials { b, a } = &self.coefficients;
        let mut accumulator = b[0] * value;
        for i in 0..a.len() {
            accumulator = accumulator + b[i + 1] * self.x.get(i);
            accumulator = accumulator - a[i] * self.y.get(i);
        }
        self.x.push(value);
        self.y.push(accumulator);
        accumulator
    }
}

impl<T: Sample> SampleFilter<T> for BipolynomialDirectForm1<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        BipolynomialDirectForm1::process(self, input)
    }

    fn reset(&mut self) {
        BipolynomialDirectForm1::reset(self)
    }
}

/// N-order Direct Form 2.
#[derive(Debug, Clone)]
pub struct BipolynomialDirectForm2<T: Sample> {
    coefficients: Polynomials<T>,
    h: DelayLine<T>,
}

impl<T: Sample> BipolynomialDirectForm2<T> {
    /// Creates a zeroed filter of the given order.
    pub fn new(order: usize) -> FilterResult<Self> {
        check_order(order)?;
        Ok(Self {
            coefficients: Polynomials::new(order),
            h: DelayLine::new(order),
        })
    }

    /// Creates a filter from `b` (order + 1 entries) and `a` (order entries).
    pub fn with_coefficients(b: &[T], a: &[T]) -> FilterResult<Self> {
        let mut filter = Self::new(a.len())?;
        filter.set_coefficients(b, a)?;
        Ok(filter)
    }

    /// Changes the order. Clears state; existing coefficients are truncated
    /// or zero-extended.
    pub fn set_order(&mut self, order: usize) -> FilterResult<()> {
        check_order(order)?;
        debug!("resizing direct form 2 from order {} to {}", self.order(), order);
        self.h.resize(order);
        self.coefficients.resize(order);
        Ok(())
    }

    /// Current order.
    pub fn order(&self) -> usize {
        self.h.len()
    }

    /// Replaces both coefficient arrays.
    pub fn set_coefficients(&mut self, b: &[T], a: &[T]) -> FilterResult<()> {
        self.coefficients.assign(b, a)
    }

    /// Feedforward coefficients.
    pub fn b(&self) -> &[T] {
        &self.coefficients.b
    }

    /// Mutable feedforward coefficients.
    pub fn b_mut(&mut self) -> &mut [T] {
        &mut self.coefficients.b
    }

    /// Feedback coefficients.
    pub fn a(&self) -> &[T] {
        &self.coefficients.a
    }

    /// Mutable feedback coefficients.
    pub fn a_mut(&mut self) -> &mut [T] {
        &mut self.coefficients.a
    }

    /// Complex frequency response at `omega` radians.
    pub fn frequency_response(&self, omega: T) -> Complex<T> {
        freqz(&self.coefficients.b, &self.coefficients.a, omega)
    }

    /// Clears the delay line.
    pub fn reset(&mut self) {
        self.h.clear();
    }

    /// Processes one sample.
    #[inline]
    pub fn process(&mut self, value: T) -> T {
        let Polynomials { b, a } = &self.coefficients;
        let mut feedback = value;
        let mut feedforward = T::zero();
        for i in 0..a.len() {
            let h = self.h.get(i);
            feedback = feedback - a[i] * h;
            feedforward = feedforward + b[i + 1] * h;
        }
        self.h.push(feedback);
        feedback * b[0] + feedforward
    }
}

impl<T: Sample> SampleFilter<T> for BipolynomialDirectForm2<T> {
    #[inline]
    fn process(&mut self, input: T) -> T {
        BipolynomialDirectForm2::process(self, input)
    }

    fn reset(&mut self) {
        BipolynomialDirectForm2::reset(self)
    }
}
