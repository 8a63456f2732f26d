use crate::foundation::error::{StudioError, StudioResult};

pub use kurbo::Rect;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero-sized sides.
    pub fn new(width: u32, height: u32) -> StudioResult<Self> {
        if width == 0 || height == 0 {
            return Err(StudioError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Bounds covering the whole canvas.
    pub fn bounds(self) -> Bounds {
        Bounds {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }

    /// `true` when `b` lies entirely inside `[0, width] x [0, height]`.
    pub fn contains(self, b: Bounds) -> bool {
        u64::from(b.x) + u64::from(b.width) <= u64::from(self.width)
            && u64::from(b.y) + u64::from(b.height) <= u64::from(self.height)
    }
}

/// Pixel-space rectangle of a zone. Origin is the canvas top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Bounds {
    /// Exclusive right edge.
    pub fn right(self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }

    /// Area in square pixels.
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Geometry view used for overlap tests.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            self.right() as f64,
            self.bottom() as f64,
        )
    }

    /// `true` when the two rectangles share a region of non-zero area.
    /// Touching edges do not count.
    pub fn overlaps(self, other: Bounds) -> bool {
        let hit = self.to_rect().intersect(other.to_rect());
        hit.width() > 0.0 && hit.height() > 0.0
    }
}

/// Logical cell coordinates of a zone inside its grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPosition {
    /// Zero-based row.
    pub row: u32,
    /// Zero-based column.
    pub col: u32,
    /// Rows covered; reserved for merged cells.
    pub row_span: u32,
    /// Columns covered; reserved for merged cells.
    pub col_span: u32,
}

impl GridPosition {
    /// Single-cell position.
    pub fn cell(row: u32, col: u32) -> Self {
        Self {
            row,
            col,
            row_span: 1,
            col_span: 1,
        }
    }
}

/// `true` for `#rgb` and `#rrggbb` colour strings.
pub fn is_hex_colour(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
