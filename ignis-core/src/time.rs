//! Monotonic tick source
//!
//! A [`Tick`] is a wrapping 32-bit counter advanced by a periodic timer.
//! Every interval comparison goes through [`Tick::elapsed_since`], which
//! uses wrapping subtraction so a counter overflow between two readings
//! still yields the correct elapsed count.

use portable_atomic::{AtomicU32, Ordering};

/// One reading of the monotonic tick counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick(u32);

impl Tick {
    /// Counter value at boot
    pub const ZERO: Tick = Tick(0);

    /// Wrap a raw counter value
    pub const fn from_raw(raw: u32) -> Self {
        Tick(raw)
    }

    /// Raw counter value
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Ticks elapsed since `earlier`, correct across counter wraparound
    pub const fn elapsed_since(self, earlier: Tick) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// The tick `ticks` after this one, wrapping at the counter bound
    pub const fn wrapping_add(self, ticks: u32) -> Tick {
        Tick(self.0.wrapping_add(ticks))
    }
}

/// Source of monotonic ticks
///
/// Implementations must never block and must return the counter as a
/// whole (no torn multi-word reads).
pub trait TimeBase {
    /// Current tick
    fn now(&self) -> Tick;
}

impl<T: TimeBase + ?Sized> TimeBase for &T {
    fn now(&self) -> Tick {
        (**self).now()
    }
}

/// Tick counter shared between a timer context and the control task
///
/// The timer side calls [`advance`](Self::advance); the control side only
/// reads through [`TimeBase::now`]. The counter is a single atomic word,
/// so a reader preempted by the timer sees either the old or the new
/// value, never a mix of both.
pub struct AtomicTimeBase {
    ticks: AtomicU32,
}

impl Default for AtomicTimeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomicTimeBase {
    /// Create a counter starting at [`Tick::ZERO`] (usable in statics)
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
        }
    }

    /// Advance the counter by one tick, wrapping at `u32::MAX`
    pub fn advance(&self) {
        self.ticks.fetch_add(1, Ordering::Release);
    }

    /// Advance the counter by several ticks at once
    ///
    /// Used when the timer context catches up after a missed period.
    pub fn advance_by(&self, ticks: u32) {
        self.ticks.fetch_add(ticks, Ordering::Release);
    }
}

impl TimeBase for AtomicTimeBase {
    fn now(&self) -> Tick {
        Tick(self.ticks.load(Ordering::Acquire))
    }
}
