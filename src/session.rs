use crate::error::{PgResult, PhiError};
use crate::geometry::Selection;
use crate::imaging::ImageInfo;
use crate::report::Report;
use crate::scorer::{Measurement, Scorer};
use tracing::{debug, info, warn};

/// Owns everything one user works on: the current image, the current
/// selection on it, and the last measurement of that selection.
///
/// Invariants:
/// - a measurement only exists for the selection it was computed from;
/// - loading a differently sized image drops both selection and measurement.
#[derive(Debug, Default)]
pub struct Session {
    scorer: Scorer,
    image: Option<ImageInfo>,
    selection: Option<Selection>,
    report: Option<Report>,
}

impl Session {
    pub fn new(scorer: Scorer) -> Self {
        Self {
            scorer,
            ..Default::default()
        }
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn image(&self) -> Option<&ImageInfo> {
        self.image.as_ref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn measurement(&self) -> Option<&Measurement> {
        self.report.as_ref().map(|r| &r.measurement)
    }

    /// Installs a new image. Returns `true` when the image was treated as new
    /// (and previous work discarded).
    pub fn load_image(&mut self, image: ImageInfo) -> bool {
        let changed = self.image.as_ref().map(ImageInfo::size) != Some(image.size());
        if changed {
            info!("New image loaded: {}x{}", image.width, image.height);
            self.selection = None;
            self.report = None;
        } else {
            debug!("Image reloaded with identical size, keeping selection");
        }
        self.image = Some(image);
        changed
    }

    pub fn select(&mut self, selection: Selection) -> PgResult<()> {
        if let Some(img) = &self.image {
            selection.ensure_within(img.width, img.height)?;
        }
        debug!("Selection captured: {}", selection);
        self.selection = Some(selection);
        self.report = None;
        Ok(())
    }

    /// Scores the current selection and keeps the result.
    pub fn calculate(&mut self) -> PgResult<&Report> {
        let selection = self.selection.ok_or_else(|| {
            warn!("Calculate requested without a selection");
            PhiError::NoSelection
        })?;

        let measurement = self
            .scorer
            .evaluate(selection.width(), selection.height())?;
        info!(
            "Scored {} -> {} ({})",
            selection,
            measurement.score,
            measurement.status.label()
        );

        Ok(self.report.insert(Report::new(measurement, Some(selection))))
    }

    /// Drops selection and measurement; the image stays loaded.
    pub fn clear(&mut self) {
        debug!("Session cleared");
        self.selection = None;
        self.report = None;
    }
}
