//! Numerical parameters for the orbit integration
//!
//! `Parameters` holds runtime settings:
//! - substeps per external tick,
//! - the drift-correction policy,
//! - the time scale applied to every incoming tick

use serde::Deserialize;

use crate::error::{SimError, SimResult};

/// Default substeps per tick
pub const DEFAULT_SUBSTEPS: usize = 100;

/// What to do once a full orbital period has elapsed
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Snap the secondary back to its initial position once per period
    #[default]
    EveryPeriod,
    /// Never resynchronize
    Never,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub substeps: usize, // substeps per tick, > 0
    pub reset_policy: ResetPolicy, // drift correction
    pub time_scale: f64, // simulated time per unit of tick time
}

impl Parameters {
    /// Validate raw values; the substep count arrives signed so that
    /// negative counts are reported instead of wrapping
    pub fn new(substeps: i64, reset_policy: ResetPolicy) -> SimResult<Self> {
        if substeps <= 0 {
            return Err(SimError::InvalidConfiguration(format!(
                "substep count must be positive, got {substeps}"
            )));
        }
        let substeps = usize::try_from(substeps)
            .map_err(|_| SimError::InvalidConfiguration(format!("substep count {substeps} is too large")))?;

        Ok(Self {
            substeps,
            reset_policy,
            time_scale: 1.0,
        })
    }

    pub fn with_time_scale(mut self, time_scale: f64) -> SimResult<Self> {
        if !(time_scale.is_finite() && time_scale > 0.0) {
            return Err(SimError::InvalidConfiguration(format!(
                "time scale must be positive, got {time_scale}"
            )));
        }
        self.time_scale = time_scale;
        Ok(self)
    }
}
