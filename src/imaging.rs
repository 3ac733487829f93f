use crate::error::PgResult;
use crate::geometry::Selection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub path: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    /// Reads only the image header; pixel data is never decoded here.
    pub fn probe<P: AsRef<Path>>(path: P) -> PgResult<Self> {
        let path = path.as_ref();
        let (width, height) = image::image_dimensions(path)?;
        debug!("Probed {}: {}x{}", path.display(), width, height);
        Ok(Self {
            path: Some(path.to_path_buf()),
            width,
            height,
        })
    }

    /// An image known only by its size (no backing file).
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            path: None,
            width,
            height,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Writes the selected region of `source` to `dest`. The output format
/// follows the destination extension.
pub fn crop_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    selection: &Selection,
    dest: Q,
) -> PgResult<()> {
    let img = image::open(source.as_ref())?;
    selection.ensure_within(img.width(), img.height())?;

    let region = img.crop_imm(
        selection.x_start(),
        selection.y_start(),
        selection.width(),
        selection.height(),
    );
    region.save(dest.as_ref())?;
    info!(
        "Saved {}x{} crop to {}",
        region.width(),
        region.height(),
        dest.as_ref().display()
    );
    Ok(())
}
