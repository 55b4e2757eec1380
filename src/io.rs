//! CSV loaders for the event table and the signal.
//!
//! - Event table: headed CSV with integer columns `starting_point`,
//!   `peak_point`, `finger`. Extra columns are ignored.
//! - Signal: header-less CSV of real numbers. Every field of every row is
//!   read in row-major order into one flat series, so a single column, a
//!   single row and a wrapped matrix all load the same way. Every row must
//!   have the same number of fields as the first; a short or long row is a
//!   load error rather than a silent shift of later samples.
//!
//! Type or shape problems surface here as errors; the averager never sees
//! malformed input.
use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, Trim};
use ndarray::Array1;
use std::io::Read;
use std::path::Path;

use crate::events::Event;

// ── Event table ───────────────────────────────────────────────────────────────

pub fn read_events(path: &Path) -> Result<Vec<Event>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening event table {}", path.display()))?;
    let events = read_events_from_reader(file)
        .with_context(|| format!("reading event table {}", path.display()))?;
    tracing::info!(path = %path.display(), n_events = events.len(), "loaded events");
    Ok(events)
}

pub fn read_events_from_reader<R: Read>(rdr: R) -> Result<Vec<Event>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(rdr);

    let headers = reader.headers().context("reading header row")?.clone();
    for col in ["starting_point", "peak_point", "finger"] {
        if !headers.iter().any(|h| h == col) {
            bail!("missing column '{col}' (found: {})", headers.iter().collect::<Vec<_>>().join(", "));
        }
    }

    let mut events = Vec::new();
    for (i, record) in reader.deserialize::<Event>().enumerate() {
        // +2: one for the header, one for 1-based line numbers.
        let ev = record.with_context(|| format!("parsing event on line {}", i + 2))?;
        events.push(ev);
    }
    Ok(events)
}

// ── Signal ────────────────────────────────────────────────────────────────────

pub fn read_signal(path: &Path) -> Result<Array1<f64>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening signal {}", path.display()))?;
    let signal = read_signal_from_reader(file)
        .with_context(|| format!("reading signal {}", path.display()))?;
    tracing::info!(path = %path.display(), n_samples = signal.len(), "loaded signal");
    Ok(signal)
}

pub fn read_signal_from_reader<R: Read>(rdr: R) -> Result<Array1<f64>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(rdr);

    let mut samples = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading line {}", row + 1))?;
        for (col, field) in record.iter().enumerate() {
            let v: f64 = field.parse().with_context(|| {
                format!("parsing sample {field:?} at line {}, column {}", row + 1, col + 1)
            })?;
            samples.push(v);
        }
    }

    if samples.is_empty() {
        bail!("signal contains no samples");
    }
    Ok(Array1::from(samples))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_parse_with_extra_columns() {
        let csv = "trial,starting_point,peak_point,finger\n0,1200,1350,2\n1, 3400 ,3520,5\n";
        let events = read_events_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(events, vec![Event::new(1200, 1350, 2), Event::new(3400, 3520, 5)]);
    }

    #[test]
    fn events_reject_float_onset() {
        let csv = "starting_point,peak_point,finger\n12.5,20,1\n";
        let err = read_events_from_reader(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    }

    #[test]
    fn events_require_columns() {
        let csv = "starting_point,finger\n10,1\n";
        let err = read_events_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("peak_point"), "{err}");
    }

    #[test]
    fn signal_flattens_row_major() {
        let csv = "1.5,2,7\n3,4.25,-5\n";
        let sig = read_signal_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(sig.to_vec(), vec![1.5, 2.0, 7.0, 3.0, 4.25, -5.0]);
    }

    #[test]
    fn signal_rejects_short_row() {
        let csv = "1,2\n3\n4,5\n";
        let err = read_signal_from_reader(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    }

    #[test]
    fn signal_rejects_long_row() {
        let csv = "1.5,2\n3,4.25,-5\n";
        assert!(read_signal_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn signal_rejects_text() {
        let csv = "1.0\nabc\n";
        assert!(read_signal_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn empty_signal_is_an_error() {
        assert!(read_signal_from_reader("".as_bytes()).is_err());
    }
}
