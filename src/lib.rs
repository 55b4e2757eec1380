//! # fingers-erp — per-finger event-related potentials
//!
//! Averages a continuous single-channel ECoG/EEG recording around
//! finger-movement onsets, producing one representative waveform per finger.
//!
//! ## Pipeline overview
//!
//! ```text
//! events.csv  (starting_point, peak_point, finger)      signal.csv
//!   │                                                       │
//!   ├─ io::read_events()                                    ├─ io::read_signal()
//!   └─ events::group_by_finger()   5 buckets, thumb..pinky  │
//!          │                                                │
//!          └────────────── epoch::mean_erp() ───────────────┘
//!                 cut [onset − 200, onset + 1000] per event,
//!                 drop windows leaving the recording,
//!                 average per finger
//!                        │
//!                        └─→ [5, 1201] f64   (row i = finger i + 1)
//! ```
//!
//! ## Quick start
//!
//! ```no_run
//! use fingers_erp::{calc_mean_erp, EpochConfig};
//! use std::path::Path;
//!
//! let res = calc_mean_erp(
//!     Path::new("events_file_ordered.csv"),
//!     Path::new("brain_data_channel_one.csv"),
//!     &EpochConfig::default(),
//! ).unwrap();
//!
//! assert_eq!(res.erp.dim(), (5, 1201));
//! println!("thumb epochs averaged: {}", res.included[0]);
//! ```
//!
//! ## In-memory use
//!
//! ```
//! use fingers_erp::{mean_erp, EpochConfig, Event};
//! use ndarray::Array1;
//!
//! let signal: Array1<f64> = (0..1401).map(|i| i as f64).collect();
//! let events = [Event::new(300, 320, 2), Event::new(400, 430, 2)];
//!
//! let erp = mean_erp(&events, &signal, &EpochConfig::default());
//! assert_eq!(erp[[1, 0]], 150.0); // mean of signal[100] and signal[200]
//! ```

pub mod config;
pub mod epoch;
pub mod events;
pub mod finger;
pub mod io;
pub mod plot;
pub mod summary;

use anyhow::Result;
use std::path::Path;

// ── Crate-root re-exports ─────────────────────────────────────────────────

// config
pub use config::{EpochConfig, N_FINGERS};

// epoch
pub use epoch::{epoch_window, mean_erp, mean_erp_with_counts, ErpResult};

// events / finger
pub use events::{group_by_finger, Event, FingerGroups};
pub use finger::Finger;

// io — CSV loaders
pub use io::{read_events, read_events_from_reader, read_signal, read_signal_from_reader};

// plot
pub use plot::{plot_erp, PlotOptions};

// summary
pub use summary::{ErpSummary, FingerSummary};

/// Load an event table and a signal from CSV and compute the per-finger ERPs.
///
/// # Arguments
///
/// * `events_path` – headed CSV with `starting_point`, `peak_point`, `finger`.
/// * `signal_path` – header-less CSV of samples, flattened row-major.
/// * `cfg`         – epoch window (see [`EpochConfig`]).
///
/// # Errors
///
/// Only loading can fail (missing file, missing column, non-numeric value,
/// empty signal). Events whose window leaves the recording are skipped and
/// show up in [`ErpResult::dropped`], not as errors.
pub fn calc_mean_erp(events_path: &Path, signal_path: &Path, cfg: &EpochConfig) -> Result<ErpResult> {
    let events = io::read_events(events_path)?;
    let signal = io::read_signal(signal_path)?;
    Ok(epoch::mean_erp_with_counts(&events, &signal, cfg))
}
