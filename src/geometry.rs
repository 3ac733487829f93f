use crate::error::{PgResult, PhiError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point in pixel space; fractional while a gesture is in flight.
pub type Point = (f64, f64);

/// Axis-aligned pixel rectangle, half-open: `x_start..x_end`, `y_start..y_end`.
///
/// Always non-empty (`x_end > x_start`, `y_end > y_start`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SelectionRecord", into = "SelectionRecord")]
pub struct Selection {
    x_start: u32,
    y_start: u32,
    x_end: u32,
    y_end: u32,
}

/// Wire shape of a selection, as produced by the drag capture
/// (`{x_start, y_start, x_end, y_end, width, height}`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub x_start: u32,
    pub y_start: u32,
    pub x_end: u32,
    pub y_end: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Selection {
    pub fn new(x_start: u32, y_start: u32, x_end: u32, y_end: u32) -> PgResult<Self> {
        if x_end <= x_start || y_end <= y_start {
            return Err(PhiError::InvalidSelection(format!(
                "expected x_end > x_start and y_end > y_start, got ({},{})-({},{})",
                x_start, y_start, x_end, y_end
            )));
        }
        Ok(Self {
            x_start,
            y_start,
            x_end,
            y_end,
        })
    }

    /// Builds a selection from two opposite corners given in any order.
    pub fn from_corners(a: (u32, u32), b: (u32, u32)) -> PgResult<Self> {
        Self::new(a.0.min(b.0), a.1.min(b.1), a.0.max(b.0), a.1.max(b.1))
    }

    /// Converts a drag gesture into whole pixels.
    ///
    /// The box is anchored at the top-left of the two points and its far
    /// edge is `floor(origin + extent)`, so dragging in any direction over
    /// the same area yields the same rectangle. Negative coordinates (a
    /// pointer that left the surface) are clamped to zero.
    pub fn from_drag(start: Point, end: Point) -> PgResult<Self> {
        for v in [start.0, start.1, end.0, end.1] {
            if !v.is_finite() {
                return Err(PhiError::InvalidSelection(format!(
                    "non-finite drag coordinate {}",
                    v
                )));
            }
        }

        let x = start.0.min(end.0).max(0.0);
        let y = start.1.min(end.1).max(0.0);
        let x_far = start.0.max(end.0).max(0.0);
        let y_far = start.1.max(end.1).max(0.0);

        Self::new(
            x.floor() as u32,
            y.floor() as u32,
            x_far.floor() as u32,
            y_far.floor() as u32,
        )
    }

    pub fn x_start(&self) -> u32 {
        self.x_start
    }

    pub fn y_start(&self) -> u32 {
        self.y_start
    }

    pub fn x_end(&self) -> u32 {
        self.x_end
    }

    pub fn y_end(&self) -> u32 {
        self.y_end
    }

    pub fn width(&self) -> u32 {
        self.x_end - self.x_start
    }

    pub fn height(&self) -> u32 {
        self.y_end - self.y_start
    }

    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x_end <= width && self.y_end <= height
    }

    pub fn ensure_within(&self, width: u32, height: u32) -> PgResult<()> {
        if self.fits_within(width, height) {
            Ok(())
        } else {
            Err(PhiError::SelectionOutOfBounds {
                selection: self.to_string(),
                image_width: width,
                image_height: height,
            })
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X {}-{}, Y {}-{}",
            self.x_start, self.x_end, self.y_start, self.y_end
        )
    }
}

impl TryFrom<SelectionRecord> for Selection {
    type Error = PhiError;

    fn try_from(rec: SelectionRecord) -> PgResult<Self> {
        let sel = Selection::new(rec.x_start, rec.y_start, rec.x_end, rec.y_end)?;
        if rec.width.is_some_and(|w| w != sel.width())
            || rec.height.is_some_and(|h| h != sel.height())
        {
            return Err(PhiError::InvalidSelection(format!(
                "declared size {:?}x{:?} does not match corners ({}x{})",
                rec.width,
                rec.height,
                sel.width(),
                sel.height()
            )));
        }
        Ok(sel)
    }
}

impl From<Selection> for SelectionRecord {
    fn from(sel: Selection) -> Self {
        Self {
            x_start: sel.x_start,
            y_start: sel.y_start,
            x_end: sel.x_end,
            y_end: sel.y_end,
            width: Some(sel.width()),
            height: Some(sel.height()),
        }
    }
}

/// Parses `"x0,y0,x1,y1"`.
impl FromStr for Selection {
    type Err = PhiError;

    fn from_str(s: &str) -> PgResult<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(PhiError::InvalidSelection(format!(
                "'{}' must be x0,y0,x1,y1",
                s
            )));
        }
        let mut v = [0u32; 4];
        for (slot, p) in v.iter_mut().zip(&parts) {
            *slot = p.parse().map_err(|_| {
                PhiError::InvalidSelection(format!("'{}' is not a pixel coordinate", p))
            })?;
        }
        Selection::from_corners((v[0], v[1]), (v[2], v[3]))
    }
}

/// Rescales a pointer position measured on a (possibly shrunk) display
/// surface into image pixels.
pub fn map_display_point(point: Point, display: (u32, u32), image: (u32, u32)) -> PgResult<Point> {
    if display.0 == 0 || display.1 == 0 {
        return Err(PhiError::InvalidSelection(format!(
            "display size {}x{} has no area",
            display.0, display.1
        )));
    }
    let sx = image.0 as f64 / display.0 as f64;
    let sy = image.1 as f64 / display.1 as f64;
    Ok((point.0 * sx, point.1 * sy))
}

/// Parses `"x,y"`.
pub fn parse_point(s: &str) -> PgResult<Point> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| PhiError::InvalidSelection(format!("'{}' must be x,y", s)))?;
    let parse = |p: &str| {
        p.trim()
            .parse::<f64>()
            .map_err(|_| PhiError::InvalidSelection(format!("'{}' is not a number", p)))
    };
    Ok((parse(x)?, parse(y)?))
}

/// Parses a drag gesture written as `"x,y:x,y"` (start, then release).
pub fn parse_drag(s: &str) -> PgResult<(Point, Point)> {
    let (a, b) = s
        .split_once(':')
        .ok_or_else(|| PhiError::InvalidSelection(format!("'{}' must be x,y:x,y", s)))?;
    Ok((parse_point(a)?, parse_point(b)?))
}

/// Parses `"WxH"`.
pub fn parse_size(s: &str) -> PgResult<(u32, u32)> {
    let (w, h) = s
        .split_once(['x', 'X', '×'])
        .ok_or_else(|| PhiError::InvalidSelection(format!("'{}' must be WxH", s)))?;
    let parse = |p: &str| {
        p.trim()
            .parse::<u32>()
            .map_err(|_| PhiError::InvalidSelection(format!("'{}' is not a size", p)))
    };
    Ok((parse(w)?, parse(h)?))
}
