use serde::Deserialize as _;

use crate::{
    composition::content::{ProcessorEffect, ZoneContent, ZoneRole},
    foundation::core::{Bounds, Canvas, GridPosition},
    foundation::error::{StudioError, StudioResult},
    foundation::ids::ZoneId,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A rectangular region of the canvas with its own content.
pub struct Zone {
    /// Unique, immutable id.
    pub id: ZoneId,
    /// Owning project; unset for freshly generated zones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// Logical grid cell.
    pub grid_position: GridPosition,
    /// Pixel rectangle on the canvas.
    pub bounds: Bounds,
    /// What the zone holds.
    #[serde(default)]
    pub role: ZoneRole,
    /// Payload for `role`.
    #[serde(default, deserialize_with = "content_from_value_or_json_string")]
    pub content: ZoneContent,
    /// Post-processing chain, applied in order.
    #[serde(default)]
    pub effects: Vec<ProcessorEffect>,
    /// Row-major paint order, 0-based.
    #[serde(rename = "zone_order")]
    pub order: u32,
}

impl Zone {
    /// New empty zone with a fresh id.
    pub fn new(grid_position: GridPosition, bounds: Bounds, order: u32) -> Self {
        Self {
            id: ZoneId::generate(),
            project_id: None,
            grid_position,
            bounds,
            role: ZoneRole::Empty,
            content: ZoneContent::Empty,
            effects: Vec::new(),
            order,
        }
    }

    /// Switch role and reset content to the role's default payload.
    pub fn assign_role(&mut self, role: ZoneRole) {
        self.role = role;
        self.content = role.default_content();
    }

    /// Check per-zone invariants, optionally against a canvas.
    pub fn validate(&self, canvas: Option<Canvas>) -> StudioResult<()> {
        if self.content.role() != self.role {
            return Err(StudioError::validation(format!(
                "zone '{}' has role '{}' but '{}' content",
                self.id,
                self.role.as_str(),
                self.content.role().as_str()
            )));
        }
        self.content.validate()?;
        if let Some(canvas) = canvas
            && !canvas.contains(self.bounds)
        {
            return Err(StudioError::validation(format!(
                "zone '{}' bounds exceed the {}x{} canvas",
                self.id, canvas.width, canvas.height
            )));
        }
        Ok(())
    }
}

/// Persisted zones may carry their content as a JSON-encoded string, and untouched rows
/// hold `{}`.
fn content_from_value_or_json_string<'de, D>(de: D) -> Result<ZoneContent, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(de)?;
    let value = match raw {
        serde_json::Value::String(s) => {
            serde_json::from_str(&s).map_err(serde::de::Error::custom)?
        }
        other => other,
    };
    match &value {
        serde_json::Value::Null => return Ok(ZoneContent::Empty),
        serde_json::Value::Object(map) if map.is_empty() => return Ok(ZoneContent::Empty),
        _ => {}
    }
    serde_json::from_value(value).map_err(serde::de::Error::custom)
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Shallow partial update of a [`Zone`]. Unset fields are left alone; `id` is not patchable.
///
/// Changing `role` without also supplying matching `content` breaks the zone invariant;
/// use [`ZonePatch::role`] which pairs them.
pub struct ZonePatch {
    /// Replacement role.
    pub role: Option<ZoneRole>,
    /// Replacement content.
    pub content: Option<ZoneContent>,
    /// Replacement effect chain.
    pub effects: Option<Vec<ProcessorEffect>>,
    /// Replacement bounds.
    pub bounds: Option<Bounds>,
    /// Replacement grid position.
    pub grid_position: Option<GridPosition>,
    /// Replacement order.
    pub order: Option<u32>,
    /// Replacement project association.
    pub project_id: Option<String>,
}

impl ZonePatch {
    /// Role change paired with the role's default content.
    pub fn role(role: ZoneRole) -> Self {
        Self {
            role: Some(role),
            content: Some(role.default_content()),
            ..Self::default()
        }
    }

    /// Content replacement.
    pub fn content(content: ZoneContent) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }

    /// Effect chain replacement.
    pub fn effects(effects: Vec<ProcessorEffect>) -> Self {
        Self {
            effects: Some(effects),
            ..Self::default()
        }
    }

    /// Merge every set field into `zone`.
    pub fn apply(&self, zone: &mut Zone) {
        if let Some(role) = self.role {
            zone.role = role;
        }
        if let Some(content) = &self.content {
            zone.content = content.clone();
        }
        if let Some(effects) = &self.effects {
            zone.effects = effects.clone();
        }
        if let Some(bounds) = self.bounds {
            zone.bounds = bounds;
        }
        if let Some(pos) = self.grid_position {
            zone.grid_position = pos;
        }
        if let Some(order) = self.order {
            zone.order = order;
        }
        if let Some(project_id) = &self.project_id {
            zone.project_id = Some(project_id.clone());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/zone.rs"]
mod tests;
