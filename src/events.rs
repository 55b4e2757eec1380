//! Movement events and per-finger grouping.
use serde::Deserialize;

use crate::config::N_FINGERS;
use crate::finger::Finger;

/// One row of the event table.
///
/// `peak_point` is carried through from the table but plays no part in
/// epoching; the onset (`starting_point`) is the time-zero anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Event {
    pub starting_point: i64,
    pub peak_point: i64,
    pub finger: i64,
}

impl Event {
    pub fn new(starting_point: i64, peak_point: i64, finger: i64) -> Self {
        Self { starting_point, peak_point, finger }
    }

    pub fn finger(&self) -> Option<Finger> {
        Finger::from_label(self.finger)
    }
}

/// Onset indices bucketed by finger, in input order within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerGroups {
    /// `onsets[finger.row()]`.
    pub onsets: [Vec<i64>; N_FINGERS],
    /// Events whose label was outside 1..=5.
    pub ignored: usize,
}

impl FingerGroups {
    pub fn onsets(&self, finger: Finger) -> &[i64] {
        &self.onsets[finger.row()]
    }
}

/// Split `events` into one bucket per finger. Every event lands in at most
/// one bucket; relative order is preserved.
pub fn group_by_finger(events: &[Event]) -> FingerGroups {
    let mut groups = FingerGroups::default();
    for ev in events {
        match ev.finger() {
            Some(f) => groups.onsets[f.row()].push(ev.starting_point),
            None => groups.ignored += 1,
        }
    }
    groups
}
