use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Extracted palette, grouped by use.
pub struct Palette {
    /// Dominant colours.
    #[serde(default)]
    pub primary: Vec<String>,
    /// Highlight colours.
    #[serde(default)]
    pub accent: Vec<String>,
    /// Background colours.
    #[serde(default)]
    pub background: Vec<String>,
    /// Text colours.
    #[serde(default)]
    pub text: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One typographic role.
pub struct FontSpec {
    /// Font family.
    pub family: String,
    /// Numeric weight.
    pub weight: u16,
    /// Size relative to body text.
    pub size_ratio: f64,
}

impl FontSpec {
    fn inter(weight: u16, size_ratio: f64) -> Self {
        Self {
            family: "Inter".to_string(),
            weight,
            size_ratio,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Font choices per role.
pub struct Typography {
    /// Headlines.
    pub headline: FontSpec,
    /// Running text.
    pub body: FontSpec,
    /// Emphasis.
    pub accent: FontSpec,
    /// Captions.
    pub caption: FontSpec,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            headline: FontSpec::inter(700, 2.5),
            body: FontSpec::inter(400, 1.0),
            accent: FontSpec::inter(400, 1.5),
            caption: FontSpec::inter(400, 0.75),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Layout tendencies.
pub struct CompositionTraits {
    /// Share of text relative to imagery.
    pub text_image_ratio: f64,
    /// Preferred alignments.
    #[serde(default)]
    pub alignment: Vec<String>,
    /// Whitespace amount, 0..1.
    pub whitespace: f64,
    /// Visual density, 0..1.
    pub density: f64,
}

impl Default for CompositionTraits {
    fn default() -> Self {
        Self {
            text_image_ratio: 0.3,
            alignment: vec!["centre".to_string()],
            whitespace: 0.5,
            density: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Surface treatment.
pub struct TextureTraits {
    /// Film grain, 0..1.
    pub grain_intensity: f64,
    /// Contrast, 0..1.
    pub contrast: f64,
    /// Halftone screening present.
    pub halftone: bool,
    /// Pattern density, 0..1.
    pub pattern_density: f64,
}

impl Default for TextureTraits {
    fn default() -> Self {
        Self {
            grain_intensity: 0.0,
            contrast: 0.5,
            halftone: false,
            pattern_density: 0.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Mood scores.
pub struct Mood {
    /// Warm versus cool.
    pub warmth: f64,
    /// Busy versus sparse.
    pub density: f64,
    /// Light versus dark.
    pub brightness: f64,
    /// Formal versus casual.
    pub formality: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Style attributes derived from a set of reference images.
///
/// Missing sections fall back to the neutral profile the backend produces when analysis
/// yields nothing usable.
pub struct StyleProfile {
    /// Palette.
    #[serde(default)]
    pub colours: Palette,
    /// Fonts.
    #[serde(default)]
    pub typography: Typography,
    /// Layout tendencies.
    #[serde(default)]
    pub composition: CompositionTraits,
    /// Surface treatment.
    #[serde(default)]
    pub textures: TextureTraits,
    /// Mood scores.
    #[serde(default)]
    pub mood: Mood,
}

impl StyleProfile {
    /// First primary colour, if the palette has one.
    pub fn lead_colour(&self) -> Option<&str> {
        self.colours.primary.first().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/profile.rs"]
mod tests;
