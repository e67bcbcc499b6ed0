//! Tick task for the monotonic time base
//!
//! Advances [`TIME_BASE`] once per tick period. The control task only
//! reads it, so every timer in the sequencer is measured in these ticks.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use ignis_core::config::ControlConfig;
use ignis_core::time::AtomicTimeBase;

/// Monotonic tick counter shared with the control task
pub static TIME_BASE: AtomicTimeBase = AtomicTimeBase::new();

/// Tick task - advances the time base every `tick_period_ms`
///
/// Ticks are counted from elapsed wall time, so a wakeup that arrives
/// late publishes every missed tick at once and the counter never drifts.
#[embassy_executor::task]
pub async fn tick_task(control: ControlConfig) {
    info!("Tick task started ({} ms)", control.tick_period_ms);

    let period_ms = control.tick_period_ms.max(1) as u64;
    let mut ticker = Ticker::every(Duration::from_millis(period_ms));
    let mut counted_until = Instant::now();

    loop {
        ticker.next().await;

        let elapsed_ms = counted_until.elapsed().as_millis();
        let ticks = control.ms_to_ticks(elapsed_ms.min(u32::MAX as u64) as u32);
        match ticks {
            0 => continue,
            1 => TIME_BASE.advance(),
            n => {
                debug!("Tick task caught up {} ticks", n);
                TIME_BASE.advance_by(n);
            }
        }
        counted_until = counted_until + Duration::from_millis(ticks as u64 * period_ms);
    }
}
