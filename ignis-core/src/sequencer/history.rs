//! Recent transition history

use heapless::HistoryBuffer;

use crate::state::{SystemState, Transition};

/// Number of transitions retained
pub const HISTORY_LEN: usize = 16;

/// Ring of the most recent transitions, oldest overwritten first
#[derive(Default)]
pub struct TransitionLog {
    entries: HistoryBuffer<Transition, HISTORY_LEN>,
    total: u32,
}

impl TransitionLog {
    /// Create an empty log
    pub const fn new() -> Self {
        Self {
            entries: HistoryBuffer::new(),
            total: 0,
        }
    }

    /// Append a transition
    pub fn record(&mut self, transition: Transition) {
        self.entries.write(transition);
        self.total = self.total.wrapping_add(1);
    }

    /// Most recent transition
    pub fn last(&self) -> Option<&Transition> {
        self.entries.recent()
    }

    /// Retained transitions, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.entries.oldest_ordered()
    }

    /// Number of retained transitions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }

    /// Transitions recorded since boot, including overwritten ones
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Count retained transitions into `state`
    pub fn entries_into(&self, state: SystemState) -> usize {
        self.iter().filter(|t| t.to == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Event;
    use crate::time::Tick;

    fn transition(at: u32, event: Event, from: SystemState) -> Transition {
        Transition {
            at: Tick::from_raw(at),
            from,
            to: event.target(),
            event,
        }
    }

    #[test]
    fn test_record_and_last() {
        let mut log = TransitionLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());

        log.record(transition(0, Event::HeatRequested, SystemState::Idle));
        log.record(transition(3_000, Event::PurgeComplete, SystemState::Prepurge));

        assert_eq!(log.len(), 2);
        assert_eq!(log.last().unwrap().to, SystemState::PilotIgnition);
        let order: heapless::Vec<u32, 4> = log.iter().map(|t| t.at.raw()).collect();
        assert_eq!(order.as_slice(), &[0, 3_000]);
    }

    #[test]
    fn test_oldest_overwritten() {
        let mut log = TransitionLog::new();
        for i in 0..(HISTORY_LEN as u32 + 4) {
            log.record(transition(i, Event::HeatRequested, SystemState::Idle));
        }

        assert_eq!(log.len(), HISTORY_LEN);
        assert_eq!(log.total(), HISTORY_LEN as u32 + 4);
        assert_eq!(log.iter().next().unwrap().at.raw(), 4);
    }

    #[test]
    fn test_entries_into() {
        let mut log = TransitionLog::new();
        log.record(transition(0, Event::HeatRequested, SystemState::Idle));
        log.record(transition(1, Event::SafetyTrip, SystemState::Prepurge));
        log.record(transition(2, Event::ShutdownComplete, SystemState::Shutdown));
        log.record(transition(3, Event::HeatRequested, SystemState::Idle));

        assert_eq!(log.entries_into(SystemState::Prepurge), 2);
        assert_eq!(log.entries_into(SystemState::Lockout), 0);
    }
}
