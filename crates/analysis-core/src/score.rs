//! Relative score normalization.

use serde::Serialize;

/// Normalized sharpness of the two feeds at one tick, each in 0..=100.
///
/// The pair is relative: each raw score is scaled against the larger of
/// the two, so the sharper feed always reads 100. It answers "which feed
/// is sharper right now and by how much", not "how sharp is this feed in
/// absolute terms" — a simultaneous blur of both feeds still reads
/// (100, 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScorePair {
    pub feed0: u8,
    pub feed1: u8,
}

impl ScorePair {
    pub fn new(feed0: u8, feed1: u8) -> Self {
        Self { feed0, feed1 }
    }

    /// Normalize two raw sharpness scores against each other.
    ///
    /// Percentages are floored; both are 0 only when both raw scores are
    /// zero, and equal positive scores both read 100.
    pub fn from_raw(s0: f64, s1: f64) -> Self {
        let max = s0.max(s1);
        if max <= 0.0 {
            return Self { feed0: 0, feed1: 0 };
        }
        Self {
            feed0: (s0 / max * 100.0) as u8,
            feed1: (s1 / max * 100.0) as u8,
        }
    }
}
