pub mod types;

pub use self::types::{Measurement, Status};
use crate::config::ScoringParams;
use crate::error::{PgResult, PhiError};
use tracing::debug;

/// φ = (1 + √5) / 2
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Scores a `width` × `height` selection with the default parameters.
pub fn evaluate(width: u32, height: u32) -> PgResult<Measurement> {
    Scorer::default().evaluate(width, height)
}

/// Maps a distance from φ onto 0..=100 with `100 * e^(-decay * difference)`.
pub fn score_for_difference(difference: f64, decay: f64) -> u8 {
    let raw = 100.0 * (-decay * difference.abs()).exp();
    raw.round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scorer {
    pub params: ScoringParams,
}

impl Scorer {
    pub fn new(params: ScoringParams) -> PgResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn evaluate(&self, width: u32, height: u32) -> PgResult<Measurement> {
        let min = self.params.min_side;
        if width < min || height < min {
            debug!("Rejected {}x{} selection (min {})", width, height, min);
            return Err(PhiError::SelectionTooSmall { width, height, min });
        }

        // Orientation-free: portrait and landscape of the same shape score alike.
        let long_side = width.max(height);
        let short_side = width.min(height);

        let ratio = long_side as f64 / short_side as f64;
        let difference = (ratio - GOLDEN_RATIO).abs();
        let score = score_for_difference(difference, self.params.decay);
        let status = Status::from_difference(difference, &self.params);

        debug!(
            "ratio={}/{}={:.4}, diff={:.4}, score={}, status={}",
            long_side, short_side, ratio, difference, score, status
        );

        Ok(Measurement {
            ratio,
            long_side,
            short_side,
            difference,
            score,
            status,
        })
    }
}
