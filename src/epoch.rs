//! Onset-locked epoching and per-finger averaging.
//!
//! For every event the window `[onset - pre_samples, onset + post_samples]`
//! is cut from the signal. Windows that do not lie fully inside
//! `[0, len(signal))` are dropped, never truncated or padded. The surviving
//! epochs of each finger are averaged sample-wise into row `finger - 1` of a
//! `[5, pre_samples + post_samples + 1]` matrix. A finger with no surviving
//! epoch keeps an all-zero row.
use std::ops::Range;

use ndarray::{s, Array1, Array2};

use crate::config::{EpochConfig, N_FINGERS};
use crate::events::{group_by_finger, Event};
use crate::finger::Finger;

/// Averaged responses plus how many epochs went into each row.
#[derive(Debug, Clone, PartialEq)]
pub struct ErpResult {
    /// `[5, cfg.epoch_len()]`, row `i` is finger `i + 1`.
    pub erp: Array2<f64>,
    /// Epochs averaged into each row.
    pub included: [usize; N_FINGERS],
    /// Epochs skipped because their window left the recording.
    pub dropped: [usize; N_FINGERS],
    /// Events whose finger label was outside 1..=5.
    pub ignored: usize,
}

impl ErpResult {
    pub fn row(&self, finger: Finger) -> ndarray::ArrayView1<'_, f64> {
        self.erp.row(finger.row())
    }
}

/// Sample range of the epoch anchored at `onset`, or `None` when any part of
/// it falls outside a signal of `n_samples` samples.
pub fn epoch_window(onset: i64, cfg: &EpochConfig, n_samples: usize) -> Option<Range<usize>> {
    let start = onset.checked_sub(i64::try_from(cfg.pre_samples).ok()?)?;
    let end = onset.checked_add(i64::try_from(cfg.post_samples).ok()?)?.checked_add(1)?;
    if start < 0 || end > i64::try_from(n_samples).ok()? {
        return None;
    }
    Some(start as usize..end as usize)
}

/// Mean ERP per finger, shape `[5, cfg.epoch_len()]`.
///
/// Pure function of its inputs: events near the recording edges are skipped
/// silently and labels outside 1..=5 are ignored.
///
/// # Examples
///
/// ```
/// use fingers_erp::{mean_erp, EpochConfig, Event};
/// use ndarray::Array1;
///
/// let signal: Array1<f64> = (0..1401).map(|i| i as f64).collect();
/// let events = [Event::new(200, 250, 1)];
/// let erp = mean_erp(&events, &signal, &EpochConfig::default());
///
/// assert_eq!(erp.dim(), (5, 1201));
/// assert_eq!(erp[[0, 0]], 0.0);
/// assert_eq!(erp[[0, 1200]], 1200.0);
/// ```
pub fn mean_erp(events: &[Event], signal: &Array1<f64>, cfg: &EpochConfig) -> Array2<f64> {
    mean_erp_with_counts(events, signal, cfg).erp
}

/// Same as [`mean_erp`], also reporting per-finger included/dropped counts.
pub fn mean_erp_with_counts(
    events: &[Event],
    signal: &Array1<f64>,
    cfg: &EpochConfig,
) -> ErpResult {
    let n_t = cfg.epoch_len();
    let groups = group_by_finger(events);

    let mut erp = Array2::<f64>::zeros((N_FINGERS, n_t));
    let mut included = [0usize; N_FINGERS];
    let mut dropped = [0usize; N_FINGERS];

    for finger in Finger::ALL {
        let r = finger.row();
        let mut sum = Array1::<f64>::zeros(n_t);
        for &onset in groups.onsets(finger) {
            match epoch_window(onset, cfg, signal.len()) {
                Some(win) => {
                    sum += &signal.slice(s![win]);
                    included[r] += 1;
                }
                None => dropped[r] += 1,
            }
        }
        if included[r] > 0 {
            sum /= included[r] as f64;
            erp.row_mut(r).assign(&sum);
        }
        tracing::debug!(
            finger = finger.label(),
            included = included[r],
            dropped = dropped[r],
            "averaged epochs"
        );
    }

    if groups.ignored > 0 {
        tracing::debug!(ignored = groups.ignored, "events with finger label outside 1..=5 ignored");
    }

    ErpResult { erp, included, dropped, ignored: groups.ignored }
}
