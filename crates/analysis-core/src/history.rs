//! Bounded rolling history of score pairs.

use std::collections::VecDeque;

use crate::score::ScorePair;

/// Maximum number of samples retained in the series.
pub const MAX_HISTORY: usize = 100;

/// Fixed-capacity, insertion-ordered series of score pairs.
///
/// Appends are change-filtered: a sample that differs from the latest
/// recorded pair by less than one point on both feeds is dropped, so a
/// static scene does not flood the chart with duplicates. When the
/// series is full the oldest entry is evicted (FIFO). While frozen,
/// appends are ignored entirely; samples keep being computed upstream
/// but the series holds still.
#[derive(Debug, Clone, Default)]
pub struct ScoreHistory {
    entries: VecDeque<ScorePair>,
    frozen: bool,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_HISTORY),
            frozen: false,
        }
    }

    /// Record a sample, subject to the freeze state and change filter.
    pub fn append(&mut self, pair: ScorePair) {
        if self.frozen {
            return;
        }
        if let Some(last) = self.entries.back() {
            let delta0 = (i16::from(pair.feed0) - i16::from(last.feed0)).abs();
            let delta1 = (i16::from(pair.feed1) - i16::from(last.feed1)).abs();
            if delta0 < 1 && delta1 < 1 {
                return;
            }
        }
        self.entries.push_back(pair);
        if self.entries.len() > MAX_HISTORY {
            self.entries.pop_front();
        }
    }

    /// Switch between the Recording and Frozen states.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &ScorePair> {
        self.entries.iter()
    }

    /// The most recently recorded pair.
    pub fn latest(&self) -> Option<&ScorePair> {
        self.entries.back()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn first_sample_is_always_recorded() {
        let mut history = ScoreHistory::new();
        history.append(ScorePair::new(50, 50));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn near_duplicates_are_suppressed() {
        let mut history = ScoreHistory::new();
        history.append(ScorePair::new(50, 50));
        history.append(ScorePair::new(50, 50));
        assert_eq!(history.len(), 1);

        // One point of movement on either feed is enough to record.
        history.append(ScorePair::new(51, 50));
        assert_eq!(history.len(), 2);
        history.append(ScorePair::new(51, 49));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn frozen_appends_are_no_ops() {
        let mut history = ScoreHistory::new();
        history.append(ScorePair::new(10, 90));
        history.set_frozen(true);

        for i in 0..10u8 {
            history.append(ScorePair::new(20 + i, 80 - i));
        }
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest(), Some(&ScorePair::new(10, 90)));

        // Unfreezing resumes normal filtering.
        history.set_frozen(false);
        history.append(ScorePair::new(30, 70));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn eviction_preserves_insertion_order() {
        let mut history = ScoreHistory::new();
        for i in 0..(MAX_HISTORY + 5) {
            history.append(ScorePair::new((i % 101) as u8, 100 - (i % 101) as u8));
        }
        assert_eq!(history.len(), MAX_HISTORY);

        // The five oldest entries were evicted; the series now starts at
        // the sixth sample and stays strictly in insertion order.
        let first = history.iter().next().unwrap();
        assert_eq!(first, &ScorePair::new(5, 95));
        let last = history.latest().unwrap();
        assert_eq!(last, &ScorePair::new(104 % 101, 100 - 104 % 101));
    }

    proptest! {
        #[test]
        fn capacity_is_never_exceeded(samples in proptest::collection::vec((0u8..=100, 0u8..=100), 0..400)) {
            let mut history = ScoreHistory::new();
            for (feed0, feed1) in samples {
                history.append(ScorePair::new(feed0, feed1));
                prop_assert!(history.len() <= MAX_HISTORY);
            }
        }

        #[test]
        fn distinct_appends_stabilize_at_capacity(extra in 1usize..200) {
            let mut history = ScoreHistory::new();
            // Alternating values differ by at least one point every time.
            for i in 0..(MAX_HISTORY + extra) {
                let value = if i % 2 == 0 { 40 } else { 60 };
                history.append(ScorePair::new(value, 100 - value));
            }
            prop_assert_eq!(history.len(), MAX_HISTORY);
        }
    }
}
