use crate::error::PgResult;
use crate::geometry::Selection;
use crate::scorer::Measurement;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

pub const DEFAULT_REPORT_NAME: &str = "golden_ratio.txt";

/// A measurement plus where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<Selection>,
    #[serde(flatten)]
    pub measurement: Measurement,
}

impl Report {
    pub fn new(measurement: Measurement, selection: Option<Selection>) -> Self {
        Self {
            label: None,
            selection,
            measurement,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Plain-text report offered for download (no trailing newline).
    pub fn to_text(&self) -> String {
        let m = &self.measurement;
        let mut out = format!(
            "Golden Ratio Analysis\nRatio: {:.4}\nScore: {}/100\nDimensions: {} × {} px",
            m.ratio, m.score, m.long_side, m.short_side
        );
        if let Some(sel) = &self.selection {
            out.push_str(&format!("\nSelection: {}", sel));
        }
        out
    }

    pub fn to_json(&self) -> PgResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_text<P: AsRef<Path>>(&self, path: P) -> PgResult<()> {
        fs::write(path.as_ref(), self.to_text())?;
        info!("Report written to {}", path.as_ref().display());
        Ok(())
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> PgResult<()> {
        fs::write(path.as_ref(), self.to_json()?)?;
        info!("JSON report written to {}", path.as_ref().display());
        Ok(())
    }
}
