use serde::{Deserialize, Serialize};

use crate::{
    composition::content::Params,
    composition::zone::Zone,
    pipeline::step::{PipelineStep, PipelineType, parse_steps},
    services::profile::StyleProfile,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Asset store reply for an uploaded or fetched asset.
pub struct AssetRecord {
    /// Asset id, used as `ImageContent::asset_id`.
    pub id: String,
    /// Asset kind (`image`, `video`, ...).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Original file name.
    #[serde(default)]
    pub filename: Option<String>,
    /// Stored size.
    #[serde(default)]
    pub size_bytes: Option<u64>,
    /// Free-form metadata (image width/height, ...).
    #[serde(default)]
    pub metadata: Params,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Body of `POST /profiles/`.
pub struct CreateProfile {
    /// Display name.
    pub name: String,
    /// Server-side paths of the reference images.
    pub source_image_paths: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Reply to profile creation.
pub struct ProfileRef {
    /// Profile id.
    pub id: String,
    /// Display name, echoed back.
    #[serde(default)]
    pub name: String,
    /// Backend status string.
    #[serde(default)]
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Reply to `POST /profiles/{id}/analyze`.
pub struct ProfileAnalysis {
    /// Profile id.
    pub id: String,
    /// Backend status string.
    #[serde(default)]
    pub status: String,
    /// Derived attributes.
    pub profile: StyleProfile,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Body of `POST /projects/`.
pub struct CreateProject {
    /// Project name.
    pub name: String,
    /// Which wizard the project runs.
    pub pipeline_type: PipelineType,
    /// Optional style profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_profile_id: Option<String>,
    /// Initial brief.
    #[serde(default)]
    pub brief: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Reply to project creation.
pub struct ProjectRef {
    /// New project id.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Pipeline type, echoed back.
    pub pipeline_type: PipelineType,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Persisted pipeline state. `steps` is kept raw: the backend may send an array or a
/// JSON-encoded string.
pub struct PipelineRecord {
    /// Persisted pointer.
    #[serde(default)]
    pub current_step: Option<u32>,
    /// Raw steps payload.
    #[serde(default)]
    pub steps: serde_json::Value,
}

impl PipelineRecord {
    /// Decoded steps; malformed payloads yield an empty list.
    pub fn steps(&self) -> Vec<PipelineStep> {
        parse_steps(&self.steps)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// `GET /projects/{id}` reply.
pub struct ProjectRecord {
    /// Project id.
    pub id: String,
    /// Project name.
    #[serde(default)]
    pub name: String,
    /// Pipeline type.
    #[serde(default)]
    pub pipeline_type: PipelineType,
    /// Brief text.
    #[serde(default)]
    pub brief: String,
    /// Linked style profile.
    #[serde(default)]
    pub style_profile_id: Option<String>,
    /// Pipeline state, if one was created.
    #[serde(default)]
    pub pipeline: Option<PipelineRecord>,
    /// Raw zone rows.
    #[serde(default)]
    pub zones: Vec<serde_json::Value>,
}

impl ProjectRecord {
    /// Decode persisted zones. Rows store nested fields as JSON strings; rows that still
    /// fail to decode are skipped with a warning.
    pub fn zones(&self) -> Vec<Zone> {
        self.zones.iter().filter_map(decode_zone_row).collect()
    }
}

const ENCODED_ZONE_FIELDS: [&str; 4] = ["grid_position", "bounds", "content", "effects"];

fn decode_zone_row(row: &serde_json::Value) -> Option<Zone> {
    let mut row = row.clone();
    if let Some(obj) = row.as_object_mut() {
        for key in ENCODED_ZONE_FIELDS {
            if let Some(serde_json::Value::String(raw)) = obj.get(key)
                && let Ok(decoded) = serde_json::from_str::<serde_json::Value>(raw)
            {
                obj.insert(key.to_string(), decoded);
            }
        }
    }
    match serde_json::from_value::<Zone>(row) {
        Ok(zone) => Some(zone),
        Err(err) => {
            tracing::warn!(%err, "skipping malformed persisted zone");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/records.rs"]
mod tests;
