use crate::error::{PgResult, PhiError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Smallest accepted selection side, in pixels.
pub const MIN_SELECTION_SIDE: u32 = 10;

/// Exponential decay applied to the distance from φ.
pub const DEFAULT_DECAY: f64 = 3.0;

pub const THRESHOLD_EXCELLENT: f64 = 0.05;
pub const THRESHOLD_GOOD: f64 = 0.15;
pub const THRESHOLD_FAIR: f64 = 0.3;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    #[arg(long, default_value_t = MIN_SELECTION_SIDE)]
    pub min_side: u32,

    #[arg(long, default_value_t = DEFAULT_DECAY)]
    pub decay: f64,

    // === STATUS BANDS (upper bounds on |ratio - φ|) ===
    #[arg(long, default_value_t = THRESHOLD_EXCELLENT)]
    pub threshold_excellent: f64,
    #[arg(long, default_value_t = THRESHOLD_GOOD)]
    pub threshold_good: f64,
    #[arg(long, default_value_t = THRESHOLD_FAIR)]
    pub threshold_fair: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            min_side: MIN_SELECTION_SIDE,
            decay: DEFAULT_DECAY,
            threshold_excellent: THRESHOLD_EXCELLENT,
            threshold_good: THRESHOLD_GOOD,
            threshold_fair: THRESHOLD_FAIR,
        }
    }
}

impl ScoringParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PgResult<Self> {
        let path = path.as_ref();
        debug!("Reading scoring params from {}", path.display());
        let content = fs::read_to_string(path)?;
        // Validated once CLI overrides are merged (see `Scorer::new`).
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every value the user typed explicitly on the command line
    /// over the current (file-loaded) values.
    pub fn merge_from_cli(&mut self, cli_params: &ScoringParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field;
                }
            };
        }

        update_if_present!(min_side, "min_side");
        update_if_present!(decay, "decay");
        update_if_present!(threshold_excellent, "threshold_excellent");
        update_if_present!(threshold_good, "threshold_good");
        update_if_present!(threshold_fair, "threshold_fair");
    }

    pub fn validate(&self) -> PgResult<()> {
        if self.min_side == 0 {
            return Err(PhiError::Config("min_side must be at least 1".to_string()));
        }
        if !self.decay.is_finite() || self.decay <= 0.0 {
            return Err(PhiError::Config(format!(
                "decay must be a positive number, got {}",
                self.decay
            )));
        }
        let bands = [
            self.threshold_excellent,
            self.threshold_good,
            self.threshold_fair,
        ];
        if bands.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(PhiError::Config(
                "status thresholds must be positive".to_string(),
            ));
        }
        if !(bands[0] < bands[1] && bands[1] < bands[2]) {
            return Err(PhiError::Config(format!(
                "status thresholds must be strictly increasing, got {:?}",
                bands
            )));
        }
        Ok(())
    }
}
