//! Zonestudio is the state core of a zone-based static composition tool.
//!
//! A user walks a project through a fixed wizard (brief, format, grid, zone assignment,
//! zone content, compile, export). The canvas is split into rectangular zones by a grid
//! preset, each zone is filled with image, text, solid, texture or pattern content, and the
//! finished layout is handed to an external render service.
//!
//! # Pieces
//!
//! 1. **Grid layout**: `preset + canvas -> Vec<Zone>`, pure and deterministic ([`generate_grid`]).
//! 2. **Zone store**: the current zones and the single selection ([`ZoneStore`]).
//! 3. **Step tracker**: ordered [`PipelineStep`]s with status, merged output and a
//!    current-step pointer ([`StepTracker`]).
//! 4. **History**: bounded linear undo/redo over `(steps, zones)` snapshots ([`History`]).
//! 5. **Render request**: canvas plus zones in paint order ([`build_render_request`]).
//!
//! [`Studio`] owns all of the above for one open project and notifies subscribers after
//! every committed mutation. The collaborator traits ([`RenderService`], [`AssetStore`],
//! [`StyleProfileService`], [`ProjectStore`]) are implemented over HTTP by [`HttpBackend`].
//!
//! Mutators never fail on unknown ids or step numbers; they do nothing. External failures
//! surface as [`StudioError::Service`] and leave local state as it was.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod composition;
mod foundation;
mod history;
mod layout;
mod pipeline;
mod services;
mod session;
mod store;

pub use compose::output::{RenderedImage, inspect_render, inspect_render_sized};
pub use compose::request::{
    MAX_RENDER_SIDE, RenderRequest, RenderResponse, ZoneRender, build_render_request,
    is_valid_render_id,
};
pub use composition::content::{
    CropRect, ImageContent, Params, ProcessorContent, ProcessorEffect, SolidContent, TextAlign,
    TextContent, ZoneContent, ZoneRole,
};
pub use composition::presets::{
    CUSTOM_FORMAT_MAX, CUSTOM_FORMAT_MIN, FORMAT_PRESETS, Format, FormatPreset, GRID_PRESETS,
    GridPreset, format_preset, grid_preset,
};
pub use composition::zone::{Zone, ZonePatch};
pub use foundation::core::{Bounds, Canvas, GridPosition, Rect, is_hex_colour};
pub use foundation::error::{StudioError, StudioResult};
pub use foundation::ids::ZoneId;
pub use history::snapshot::StudioSnapshot;
pub use history::stack::{HISTORY_LIMIT, History, HistoryEntry};
pub use layout::grid::{DEFAULT_GAP_PX, GridOpts, generate_grid, generate_grid_for, validate_partition};
pub use pipeline::step::{
    Payload, PipelineStep, PipelineType, StepStatus, StepType, parse_steps, static_steps,
};
pub use pipeline::tracker::StepTracker;
pub use services::config::{
    BackendConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT, ENV_API_URL, ENV_TIMEOUT_SECS,
};
pub use services::contract::{AssetStore, ProjectStore, RenderService, StyleProfileService};
pub use services::http::HttpBackend;
pub use services::profile::{
    CompositionTraits, FontSpec, Mood, Palette, StyleProfile, TextureTraits, Typography,
};
pub use services::records::{
    AssetRecord, CreateProfile, CreateProject, PipelineRecord, ProfileAnalysis, ProfileRef,
    ProjectRecord, ProjectRef,
};
pub use session::studio::{Studio, StudioEvent, Subscription};
pub use store::zones::ZoneStore;
