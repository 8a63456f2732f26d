use std::path::Path;

use crate::{
    compose::request::{RenderRequest, RenderResponse},
    foundation::error::StudioResult,
    services::records::{
        AssetRecord, CreateProfile, CreateProject, ProfileAnalysis, ProfileRef, ProjectRecord,
        ProjectRef,
    },
};

/// Uploaded media storage.
pub trait AssetStore {
    /// Upload a local file.
    fn upload(&self, path: &Path) -> StudioResult<AssetRecord>;

    /// Metadata for a stored asset.
    fn asset(&self, id: &str) -> StudioResult<AssetRecord>;

    /// Locator for the stored file.
    fn file_url(&self, id: &str) -> String;
}

/// Style extraction from reference images.
pub trait StyleProfileService {
    /// Register a profile over server-side image paths.
    fn create_profile(&self, req: &CreateProfile) -> StudioResult<ProfileRef>;

    /// Run the analysis and return the derived attributes.
    fn analyze_profile(&self, id: &str) -> StudioResult<ProfileAnalysis>;
}

/// Rasterizes a zone layout.
pub trait RenderService {
    /// Submit a layout; returns the render handle.
    fn render(&self, req: &RenderRequest) -> StudioResult<RenderResponse>;

    /// Encoded image for a previous render.
    fn fetch_rendered(&self, render_id: &str) -> StudioResult<Vec<u8>>;
}

/// Project and pipeline persistence.
pub trait ProjectStore {
    /// Create a project with its initial pipeline.
    fn create_project(&self, req: &CreateProject) -> StudioResult<ProjectRef>;

    /// Project, pipeline state and zones.
    fn project(&self, id: &str) -> StudioResult<ProjectRecord>;
}
