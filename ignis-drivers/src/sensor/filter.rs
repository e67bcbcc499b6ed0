//! Moving-average filter

use heapless::HistoryBuffer;

/// Mean of the last `N` samples
///
/// The window starts zero-filled: until `N` samples have arrived, the
/// missing ones count as zero. A noisy input therefore has to persist
/// for several samples before the mean follows it.
pub struct MovingAverage<const N: usize> {
    samples: HistoryBuffer<u16, N>,
}

impl<const N: usize> MovingAverage<N> {
    /// Create an empty (zero-filled) window
    pub const fn new() -> Self {
        Self {
            samples: HistoryBuffer::new(),
        }
    }

    /// Add a sample and return the new mean
    pub fn push(&mut self, sample: u16) -> u16 {
        self.samples.write(sample);
        self.mean()
    }

    /// Current mean
    pub fn mean(&self) -> u16 {
        let sum: u32 = self.samples.as_slice().iter().map(|&s| s as u32).sum();
        (sum / N.max(1) as u32) as u16
    }

    /// Check if `N` real samples have arrived
    pub fn is_primed(&self) -> bool {
        self.samples.len() == N
    }

    /// Forget every sample
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl<const N: usize> Default for MovingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}
