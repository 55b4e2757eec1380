//! Epoch window configuration.
//!
//! [`EpochConfig`] holds the two window-shape parameters used by the
//! averager. Defaults match the finger-movement recordings: 200 samples
//! before onset, 1000 samples after it, 1201 samples per epoch.

use ndarray::Array1;

/// Number of fingers, and therefore rows in every ERP matrix.
pub const N_FINGERS: usize = 5;

/// Shape of the window cut around each movement onset.
///
/// All fields are `pub` so you can construct one with struct-update syntax:
///
/// ```
/// use fingers_erp::EpochConfig;
///
/// let cfg = EpochConfig {
///     post_samples: 500,
///     ..EpochConfig::default()
/// };
/// assert_eq!(cfg.epoch_len(), 701);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochConfig {
    /// Samples kept before the onset sample.
    ///
    /// Default: `200`.
    pub pre_samples: usize,

    /// Samples kept after the onset sample. The onset itself is always
    /// included, so the window covers `post_samples + 1` samples from
    /// onset onward.
    ///
    /// Default: `1000`.
    pub post_samples: usize,
}

impl Default for EpochConfig {
    fn default() -> Self {
        Self {
            pre_samples: 200,
            post_samples: 1000,
        }
    }
}

impl EpochConfig {
    /// Samples per epoch: `pre_samples + post_samples + 1`.
    ///
    /// ```
    /// use fingers_erp::EpochConfig;
    /// assert_eq!(EpochConfig::default().epoch_len(), 1201);
    /// ```
    pub fn epoch_len(&self) -> usize {
        self.pre_samples + self.post_samples + 1
    }

    /// Sample offsets relative to onset, `-pre_samples ..= post_samples`.
    pub fn time_axis(&self) -> Array1<f64> {
        let pre = self.pre_samples as i64;
        let post = self.post_samples as i64;
        (-pre..=post).map(|t| t as f64).collect()
    }

    /// Shape of the ERP matrix produced with this window.
    pub fn erp_shape(&self) -> (usize, usize) {
        (N_FINGERS, self.epoch_len())
    }
}
