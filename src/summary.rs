//! Console summary of an ERP result.
use serde::Serialize;

use crate::epoch::ErpResult;
use crate::finger::Finger;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FingerSummary {
    pub finger: i64,
    pub name: &'static str,
    /// Mean over the whole averaged waveform.
    pub mean_amplitude: f64,
    pub included: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErpSummary {
    pub shape: (usize, usize),
    pub expected_shape: (usize, usize),
    pub fingers: Vec<FingerSummary>,
    pub ignored_events: usize,
}

impl ErpSummary {
    pub fn new(res: &ErpResult, expected_shape: (usize, usize)) -> Self {
        let fingers = Finger::ALL
            .iter()
            .map(|&f| FingerSummary {
                finger: f.label(),
                name: f.name(),
                mean_amplitude: res.row(f).mean().unwrap_or(0.0),
                included: res.included[f.row()],
                dropped: res.dropped[f.row()],
            })
            .collect();
        Self {
            shape: res.erp.dim(),
            expected_shape,
            fingers,
            ignored_events: res.ignored,
        }
    }
}

impl std::fmt::Display for ErpSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Output matrix shape: {:?}", self.shape)?;
        writeln!(f, "Expected shape: {:?}", self.expected_shape)?;
        writeln!(f)?;
        writeln!(f, "Mean amplitude for each finger:")?;
        for s in &self.fingers {
            writeln!(f, "  Finger {}: {:.2}", s.finger, s.mean_amplitude)?;
        }
        Ok(())
    }
}
