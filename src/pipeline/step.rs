use crate::foundation::error::{StudioError, StudioResult};

/// Free-form key/value payload accumulated by a step.
pub type Payload = serde_json::Map<String, serde_json::Value>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Lifecycle state of a pipeline step.
///
/// `pending -> active -> completed`, or `pending -> skipped`.
pub enum StepStatus {
    /// Not started.
    #[default]
    Pending,
    /// Being worked on.
    Active,
    /// Done.
    Completed,
    /// Not relevant for this pipeline run.
    Skipped,
}

impl StepStatus {
    /// `completed` and `skipped` are terminal.
    pub fn is_terminal(self) -> bool {
        matches!(self, StepStatus::Completed | StepStatus::Skipped)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Descriptive classification of what a step asks of the user.
pub enum StepType {
    /// User supplies data.
    Input,
    /// Computed without user input.
    Auto,
    /// System proposes, user accepts or edits.
    Propose,
    /// User fine-tunes.
    Tweak,
    /// User reviews.
    Review,
    /// Produces the deliverable.
    Export,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One stage of the composition wizard.
pub struct PipelineStep {
    /// Fixed 0-based ordinal.
    pub step_number: u32,
    /// Display name.
    pub name: String,
    /// Behaviour classification.
    #[serde(rename = "type")]
    pub kind: StepType,
    /// Lifecycle state.
    #[serde(default)]
    pub status: StepStatus,
    /// Input payload.
    #[serde(default)]
    pub input: Payload,
    /// Output payload; merged into, never replaced.
    #[serde(default)]
    pub output: Payload,
    /// User overrides payload.
    #[serde(default)]
    pub user_overrides: Payload,
}

impl PipelineStep {
    /// Fresh pending step with empty payloads.
    pub fn new(step_number: u32, name: impl Into<String>, kind: StepType) -> Self {
        Self {
            step_number,
            name: name.into(),
            kind,
            status: StepStatus::Pending,
            input: Payload::new(),
            output: Payload::new(),
            user_overrides: Payload::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which wizard a project runs.
pub enum PipelineType {
    /// Single static zone composition.
    #[default]
    Static,
    /// Photo shoot direction.
    PhotoDirection,
    /// Short video reel.
    VideoReel,
}

impl PipelineType {
    /// Wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            PipelineType::Static => "static",
            PipelineType::PhotoDirection => "photo_direction",
            PipelineType::VideoReel => "video_reel",
        }
    }

    /// Initial step list for a new project of this type.
    pub fn template(self) -> Vec<PipelineStep> {
        use StepType::*;

        let names: &[(&str, StepType)] = match self {
            PipelineType::Static => &[
                ("Brief", Input),
                ("Format", Input),
                ("Grid", Tweak),
                ("Zone Assignment", Propose),
                ("Zone Composition", Input),
                ("Zone Refinement", Tweak),
                ("Compile", Auto),
                ("Export", Export),
            ],
            PipelineType::PhotoDirection => &[
                ("Brief", Input),
                ("Analysis", Auto),
                ("Shot List", Propose),
                ("Mood Board", Auto),
                ("Technical Notes", Auto),
                ("Export", Export),
            ],
            PipelineType::VideoReel => &[
                ("Upload", Input),
                ("Scan", Auto),
                ("Clip Selection", Propose),
                ("Sequence", Propose),
                ("Timing", Tweak),
                ("Transitions", Tweak),
                ("Grade", Tweak),
                ("Text/Titles", Input),
                ("Preview", Review),
                ("Export", Export),
            ],
        };
        names
            .iter()
            .enumerate()
            .map(|(n, &(name, kind))| PipelineStep::new(n as u32, name, kind))
            .collect()
    }
}

impl std::str::FromStr for PipelineType {
    type Err = StudioError;

    fn from_str(s: &str) -> StudioResult<Self> {
        [
            PipelineType::Static,
            PipelineType::PhotoDirection,
            PipelineType::VideoReel,
        ]
        .into_iter()
        .find(|t| t.as_str() == s)
        .ok_or_else(|| StudioError::validation(format!("invalid pipeline type '{s}'")))
    }
}

/// Step numbers of the static pipeline.
pub mod static_steps {
    /// Brief text and reference images.
    pub const BRIEF: u32 = 0;
    /// Canvas format.
    pub const FORMAT: u32 = 1;
    /// Grid preset.
    pub const GRID: u32 = 2;
    /// Role per zone.
    pub const ZONE_ASSIGNMENT: u32 = 3;
    /// Content per zone.
    pub const ZONE_COMPOSITION: u32 = 4;
    /// Content polish.
    pub const ZONE_REFINEMENT: u32 = 5;
    /// Render request.
    pub const COMPILE: u32 = 6;
    /// Download.
    pub const EXPORT: u32 = 7;
}

/// Decode persisted steps, tolerating malformed data.
///
/// Accepts a JSON array or a JSON-encoded string holding one. Anything else, including an
/// array that does not decode, yields an empty list.
pub fn parse_steps(raw: &serde_json::Value) -> Vec<PipelineStep> {
    let decoded = match raw {
        serde_json::Value::Null => return Vec::new(),
        serde_json::Value::Array(_) => serde_json::from_value::<Vec<PipelineStep>>(raw.clone()),
        serde_json::Value::String(s) => serde_json::from_str::<Vec<PipelineStep>>(s),
        other => {
            tracing::warn!(kind = json_kind(other), "pipeline steps are not a list, ignoring");
            return Vec::new();
        }
    };
    match decoded {
        Ok(steps) => steps,
        Err(err) => {
            tracing::warn!(error = %err, "malformed pipeline steps, ignoring");
            Vec::new()
        }
    }
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/step.rs"]
mod tests;
