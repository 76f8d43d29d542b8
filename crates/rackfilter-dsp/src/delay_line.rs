//! Fixed-capacity circular history buffer.

use crate::sample::Sample;

/// A ring buffer holding the most recent `len` samples.
///
/// Age `0` is the most recently pushed sample. Capacity only changes through
/// [`DelayLine::resize`], so pushing never allocates.
#[derive(Debug, Clone)]
pub struct DelayLine<T: Sample> {
    buffer: Vec<T>,
    head: usize,
}

impl<T: Sample> DelayLine<T> {
    /// Creates a zeroed delay line. A zero length is raised to one.
    pub fn new(len: usize) -> Self {
        Self {
            buffer: vec![T::zero(); len.max(1)],
            head: 0,
        }
    }

    /// Number of samples held.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always false; a delay line holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Pushes a sample, discarding the oldest.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.head = (self.head + 1) % self.buffer.len();
        self.buffer[self.head] = value;
    }

    /// Reads the sample pushed `age` pushes ago, wrapping modulo the length.
    #[inline]
    pub fn get(&self, age: usize) -> T {
        let len = self.buffer.len();
        self.buffer[(self.head + len - age % len) % len]
    }

    /// Zeroes every sample.
    pub fn clear(&mut self) {
        self.buffer.iter_mut().for_each(|x| *x = T::zero());
    }

    /// Changes the length and clears the contents.
    pub fn resize(&mut self, len: usize) {
        self.buffer.clear();
        self.buffer.resize(len.max(1), T::zero());
        self.head = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_line_basic() {
        let mut dl = DelayLine::new(10);
        for i in 0..5 {
            dl.push(i as f64);
        }
        assert_eq!(dl.get(0), 4.0);
        assert_eq!(dl.get(4), 0.0);
        assert_eq!(dl.get(5), 0.0);
    }

    #[test]
    fn test_delay_line_wrap_around() {
        let mut dl = DelayLine::new(4);
        for i in 0..10 {
            dl.push(i as f32);
        }
        // The last 4 samples written are 6, 7, 8, 9
        assert_eq!(dl.get(0), 9.0);
        assert_eq!(dl.get(3), 6.0);
        assert_eq!(dl.get(4), 9.0);
    }

    #[test]
    fn test_clear_and_resize() {
        let mut dl = DelayLine::new(3);
        dl.push(1.0f64);
        dl.push(2.0);
        dl.clear();
        assert_eq!(dl.len(), 3);
        assert!((0..3).all(|i| dl.get(i) == 0.0));

        dl.push(5.0);
        dl.resize(6);
        assert_eq!(dl.len(), 6);
        assert!((0..6).all(|i| dl.get(i) == 0.0));
    }

    #[test]
    fn test_zero_length_raised() {
        let dl = DelayLine::<f64>::new(0);
        assert_eq!(dl.len(), 1);
        assert!(!dl.is_empty());
    }
}
