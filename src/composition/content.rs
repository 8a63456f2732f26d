use std::collections::BTreeMap;

use crate::foundation::core::is_hex_colour;
use crate::foundation::error::{StudioError, StudioResult};

/// Free-form parameter object passed through to processors and the renderer.
pub type Params = serde_json::Map<String, serde_json::Value>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// What a zone is filled with.
pub enum ZoneRole {
    /// Photo or graphic.
    Image,
    /// Typography.
    Text,
    /// Generated texture.
    Texture,
    /// Repeating pattern.
    Pattern,
    /// Flat colour fill.
    Solid,
    /// No content.
    #[default]
    Empty,
}

impl ZoneRole {
    /// Every role, in picker order.
    pub const ALL: [ZoneRole; 6] = [
        ZoneRole::Image,
        ZoneRole::Text,
        ZoneRole::Texture,
        ZoneRole::Pattern,
        ZoneRole::Solid,
        ZoneRole::Empty,
    ];

    /// Wire name (`"image"`, `"text"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneRole::Image => "image",
            ZoneRole::Text => "text",
            ZoneRole::Texture => "texture",
            ZoneRole::Pattern => "pattern",
            ZoneRole::Solid => "solid",
            ZoneRole::Empty => "empty",
        }
    }

    /// Canonical content payload for a zone that just switched to this role.
    pub fn default_content(self) -> ZoneContent {
        match self {
            ZoneRole::Image => ZoneContent::Image(ImageContent::default()),
            ZoneRole::Text => ZoneContent::Text(TextContent::default()),
            ZoneRole::Texture => ZoneContent::Texture(ProcessorContent::default()),
            ZoneRole::Pattern => ZoneContent::Pattern(ProcessorContent::default()),
            ZoneRole::Solid => ZoneContent::Solid(SolidContent::default()),
            ZoneRole::Empty => ZoneContent::Empty,
        }
    }
}

impl std::str::FromStr for ZoneRole {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZoneRole::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| StudioError::validation(format!("unknown zone role '{s}'")))
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Zone payload. The active variant always matches the zone's [`ZoneRole`].
pub enum ZoneContent {
    /// Image payload.
    Image(ImageContent),
    /// Text payload.
    Text(TextContent),
    /// Texture processor payload.
    Texture(ProcessorContent),
    /// Pattern processor payload.
    Pattern(ProcessorContent),
    /// Solid fill payload.
    Solid(SolidContent),
    /// No payload.
    #[default]
    Empty,
}

impl ZoneContent {
    /// Role this payload belongs to.
    pub fn role(&self) -> ZoneRole {
        match self {
            ZoneContent::Image(_) => ZoneRole::Image,
            ZoneContent::Text(_) => ZoneRole::Text,
            ZoneContent::Texture(_) => ZoneRole::Texture,
            ZoneContent::Pattern(_) => ZoneRole::Pattern,
            ZoneContent::Solid(_) => ZoneRole::Solid,
            ZoneContent::Empty => ZoneRole::Empty,
        }
    }

    /// Check payload invariants (crop range, weight range, colour syntax).
    pub fn validate(&self) -> StudioResult<()> {
        match self {
            ZoneContent::Image(c) => c.crop_rect.validate(),
            ZoneContent::Text(c) => {
                if !(100..=900).contains(&c.weight) {
                    return Err(StudioError::validation(
                        "text weight must be within 100..=900",
                    ));
                }
                if !c.size.is_finite() || c.size <= 0.0 {
                    return Err(StudioError::validation("text size must be finite and > 0"));
                }
                validate_colour(&c.colour, "text colour")
            }
            ZoneContent::Texture(_) | ZoneContent::Pattern(_) | ZoneContent::Empty => Ok(()),
            ZoneContent::Solid(c) => validate_colour(&c.colour, "solid colour"),
        }
    }
}

fn validate_colour(colour: &str, field: &str) -> StudioResult<()> {
    if !is_hex_colour(colour) {
        return Err(StudioError::validation(format!(
            "{field} must be a #rgb or #rrggbb hex string, got '{colour}'"
        )));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Image reference plus crop and filters.
pub struct ImageContent {
    /// Asset store id; empty until an image is uploaded.
    pub asset_id: String,
    /// Normalized crop rectangle.
    pub crop_rect: CropRect,
    /// Filter name to strength.
    #[serde(default)]
    pub filters: BTreeMap<String, f64>,
}

impl Default for ImageContent {
    fn default() -> Self {
        Self {
            asset_id: String::new(),
            crop_rect: CropRect::FULL,
            filters: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Crop rectangle in normalized `[0, 1]` image coordinates.
pub struct CropRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl CropRect {
    /// The whole image.
    pub const FULL: CropRect = CropRect {
        x: 0.0,
        y: 0.0,
        w: 1.0,
        h: 1.0,
    };

    /// Check that the rectangle lies inside the unit square.
    pub fn validate(&self) -> StudioResult<()> {
        for (name, v) in [("x", self.x), ("y", self.y), ("w", self.w), ("h", self.h)] {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(StudioError::validation(format!(
                    "crop_rect.{name} must be within [0, 1]"
                )));
            }
        }
        if self.x + self.w > 1.0 || self.y + self.h > 1.0 {
            return Err(StudioError::validation(
                "crop_rect must stay inside the unit square",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal text alignment inside a zone.
pub enum TextAlign {
    /// Flush left.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush right.
    Right,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Literal text with its typography.
pub struct TextContent {
    /// UTF-8 text.
    pub text: String,
    /// Font family name.
    pub font: String,
    /// Font size in pixels.
    pub size: f32,
    /// Text colour as hex.
    pub colour: String,
    /// Numeric weight, 100..=900.
    pub weight: u16,
    /// Horizontal alignment.
    pub alignment: TextAlign,
}

impl Default for TextContent {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: "Inter".to_string(),
            size: 24.0,
            colour: "#e8e8e8".to_string(),
            weight: 400,
            alignment: TextAlign::Center,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Texture or pattern generator reference.
pub struct ProcessorContent {
    /// Processor identifier; empty until one is picked.
    pub processor_id: String,
    /// Opaque processor parameters.
    #[serde(default)]
    pub params: Params,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Flat colour fill.
pub struct SolidContent {
    /// Fill colour as hex.
    pub colour: String,
}

impl Default for SolidContent {
    fn default() -> Self {
        Self {
            colour: "#1a1a1a".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Post-processing directive applied after a zone's content is rendered.
pub struct ProcessorEffect {
    /// Processor identifier.
    pub processor_id: String,
    /// Processor parameters.
    #[serde(default)]
    pub params: Params,
}

#[cfg(test)]
#[path = "../../tests/unit/composition/content.rs"]
mod tests;
