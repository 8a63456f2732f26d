use std::path::Path;

use anyhow::Context;
use reqwest::blocking::{Client, Response, multipart};
use serde::de::DeserializeOwned;

use crate::{
    compose::request::{RenderRequest, RenderResponse, is_valid_render_id},
    foundation::error::{StudioError, StudioResult},
    services::config::BackendConfig,
    services::contract::{AssetStore, ProjectStore, RenderService, StyleProfileService},
    services::records::{
        AssetRecord, CreateProfile, CreateProject, ProfileAnalysis, ProfileRef, ProjectRecord,
        ProjectRef,
    },
};

/// Blocking client for the studio backend. Implements every collaborator trait.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    cfg: BackendConfig,
    http: Client,
}

impl HttpBackend {
    /// Client for `cfg`.
    pub fn new(cfg: BackendConfig) -> StudioResult<Self> {
        let http = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .context("build http client")?;
        Ok(Self { cfg, http })
    }

    /// Active configuration.
    pub fn config(&self) -> &BackendConfig {
        &self.cfg
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> StudioResult<T> {
        let resp = self
            .http
            .get(self.cfg.url(path))
            .send()
            .map_err(transport(what))?;
        decode(checked(resp, what)?, what)
    }

    fn post_json<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        what: &str,
    ) -> StudioResult<T> {
        let resp = self
            .http
            .post(self.cfg.url(path))
            .json(body)
            .send()
            .map_err(transport(what))?;
        decode(checked(resp, what)?, what)
    }
}

fn transport(what: &str) -> impl FnOnce(reqwest::Error) -> StudioError + '_ {
    move |err| {
        tracing::warn!(what, error = %err, "backend unreachable");
        StudioError::service(format!("{what}: {err}"))
    }
}

fn checked(resp: Response, what: &str) -> StudioResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    tracing::warn!(what, %status, "backend refused request");
    Err(StudioError::service(format!(
        "{what} failed with {status}: {}",
        body.trim()
    )))
}

fn decode<T: DeserializeOwned>(resp: Response, what: &str) -> StudioResult<T> {
    resp.json::<T>()
        .map_err(|err| StudioError::serde(format!("{what}: {err}")))
}

impl AssetStore for HttpBackend {
    fn upload(&self, path: &Path) -> StudioResult<AssetRecord> {
        let form = multipart::Form::new()
            .file("file", path)
            .with_context(|| format!("open upload '{}'", path.display()))?;
        let resp = self
            .http
            .post(self.cfg.url("/assets/upload"))
            .multipart(form)
            .send()
            .map_err(transport("upload"))?;
        let asset: AssetRecord = decode(checked(resp, "upload")?, "upload")?;
        tracing::debug!(asset = %asset.id, "asset uploaded");
        Ok(asset)
    }

    fn asset(&self, id: &str) -> StudioResult<AssetRecord> {
        self.get_json(&format!("/assets/{id}"), "get asset")
    }

    fn file_url(&self, id: &str) -> String {
        self.cfg.url(&format!("/assets/{id}/file"))
    }
}

impl StyleProfileService for HttpBackend {
    fn create_profile(&self, req: &CreateProfile) -> StudioResult<ProfileRef> {
        self.post_json("/profiles/", req, "create profile")
    }

    fn analyze_profile(&self, id: &str) -> StudioResult<ProfileAnalysis> {
        self.post_json(
            &format!("/profiles/{id}/analyze"),
            &serde_json::json!({}),
            "analyze profile",
        )
    }
}

impl RenderService for HttpBackend {
    fn render(&self, req: &RenderRequest) -> StudioResult<RenderResponse> {
        let out: RenderResponse = self.post_json("/compose/render", req, "render")?;
        tracing::debug!(render = %out.render_id, zones = req.zones.len(), "render submitted");
        Ok(out)
    }

    fn fetch_rendered(&self, render_id: &str) -> StudioResult<Vec<u8>> {
        if !is_valid_render_id(render_id) {
            return Err(StudioError::validation(format!(
                "invalid render id '{render_id}'"
            )));
        }
        let what = "fetch render";
        let resp = self
            .http
            .get(self.cfg.url(&format!("/compose/render/{render_id}")))
            .send()
            .map_err(transport(what))?;
        let bytes = checked(resp, what)?.bytes().map_err(transport(what))?;
        Ok(bytes.to_vec())
    }
}

impl ProjectStore for HttpBackend {
    fn create_project(&self, req: &CreateProject) -> StudioResult<ProjectRef> {
        self.post_json("/projects/", req, "create project")
    }

    fn project(&self, id: &str) -> StudioResult<ProjectRecord> {
        self.get_json(&format!("/projects/{id}"), "get project")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/http.rs"]
mod tests;
