use crate::foundation::core::Canvas;
use crate::foundation::error::{StudioError, StudioResult};

/// Smallest custom format side in pixels.
pub const CUSTOM_FORMAT_MIN: u32 = 100;
/// Largest custom format side in pixels.
pub const CUSTOM_FORMAT_MAX: u32 = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Named canvas size.
pub struct FormatPreset {
    /// Stable lookup key.
    pub key: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Built-in canvas sizes.
pub const FORMAT_PRESETS: [FormatPreset; 4] = [
    FormatPreset {
        key: "ig-post",
        label: "Instagram Post",
        width: 1080,
        height: 1080,
    },
    FormatPreset {
        key: "ig-story",
        label: "Instagram Story",
        width: 1080,
        height: 1920,
    },
    FormatPreset {
        key: "flyer-a5",
        label: "Flyer A5",
        width: 1748,
        height: 2480,
    },
    FormatPreset {
        key: "flyer-a4",
        label: "Flyer A4",
        width: 2480,
        height: 3508,
    },
];

/// Look up a format preset by key.
pub fn format_preset(key: &str) -> Option<&'static FormatPreset> {
    FORMAT_PRESETS.iter().find(|p| p.key == key)
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Canvas format chosen in the Format step, as stored in its output.
pub struct Format {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Display label.
    pub label: String,
}

impl Format {
    /// Format for a built-in preset key.
    pub fn preset(key: &str) -> StudioResult<Self> {
        let p = format_preset(key)
            .ok_or_else(|| StudioError::validation(format!("unknown format preset '{key}'")))?;
        Ok(Self {
            width: p.width,
            height: p.height,
            label: p.label.to_string(),
        })
    }

    /// User-sized format; each side must be within the custom range.
    pub fn custom(width: u32, height: u32) -> StudioResult<Self> {
        let range = CUSTOM_FORMAT_MIN..=CUSTOM_FORMAT_MAX;
        if !range.contains(&width) || !range.contains(&height) {
            return Err(StudioError::validation(format!(
                "custom format sides must be within {CUSTOM_FORMAT_MIN}..={CUSTOM_FORMAT_MAX}, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            label: format!("Custom {width}x{height}"),
        })
    }

    /// Key of the built-in preset with the same dimensions, if any.
    pub fn matching_preset(&self) -> Option<&'static str> {
        FORMAT_PRESETS
            .iter()
            .find(|p| p.width == self.width && p.height == self.height)
            .map(|p| p.key)
    }

    /// Canvas of this format.
    pub fn canvas(&self) -> StudioResult<Canvas> {
        Canvas::new(self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Named row/column template for subdividing a canvas.
pub struct GridPreset {
    /// Stable lookup key.
    pub key: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Row count.
    pub rows: u32,
    /// Column count.
    pub cols: u32,
    /// Optional size ratios for the axis with more than one cell.
    pub ratios: Option<&'static [f64]>,
}

impl GridPreset {
    /// Ratios for an axis with `count` cells, if they apply to it.
    pub fn ratios_for(&self, count: u32) -> Option<&'static [f64]> {
        self.ratios
            .filter(|r| count > 1 && r.len() == count as usize)
    }

    /// Number of zones this preset produces.
    pub fn cell_count(&self) -> u32 {
        self.rows * self.cols
    }
}

/// Built-in grid templates.
pub const GRID_PRESETS: [GridPreset; 6] = [
    GridPreset {
        key: "2h",
        label: "2 Rows",
        rows: 2,
        cols: 1,
        ratios: None,
    },
    GridPreset {
        key: "2v",
        label: "2 Columns",
        rows: 1,
        cols: 2,
        ratios: None,
    },
    GridPreset {
        key: "3r",
        label: "3 Rows",
        rows: 3,
        cols: 1,
        ratios: None,
    },
    GridPreset {
        key: "4q",
        label: "4 Quarters",
        rows: 2,
        cols: 2,
        ratios: None,
    },
    GridPreset {
        key: "asym-lr",
        label: "Asymmetric L/R",
        rows: 1,
        cols: 2,
        ratios: Some(&[0.6, 0.4]),
    },
    GridPreset {
        key: "asym-tb",
        label: "Asymmetric T/B",
        rows: 2,
        cols: 1,
        ratios: Some(&[0.7, 0.3]),
    },
];

/// Look up a grid preset by key.
pub fn grid_preset(key: &str) -> Option<&'static GridPreset> {
    GRID_PRESETS.iter().find(|p| p.key == key)
}

#[cfg(test)]
#[path = "../../tests/unit/composition/presets.rs"]
mod tests;
