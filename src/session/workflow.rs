//! Step handlers for the static pipeline, built on the public [`Studio`] primitives.
//!
//! Gated handlers return [`StudioError::Validation`] and change nothing when their gate is
//! closed. Render failures leave every step untouched so the call can be retried.

use crate::{
    compose::output::{RenderedImage, inspect_render_sized},
    compose::request::build_render_request,
    composition::content::{
        CropRect, ImageContent, Params, ProcessorContent, SolidContent, TextContent, ZoneContent,
        ZoneRole,
    },
    composition::presets::{Format, grid_preset},
    composition::zone::ZonePatch,
    foundation::error::{StudioError, StudioResult},
    foundation::ids::ZoneId,
    layout::grid::{GridOpts, generate_grid_for},
    pipeline::step::{Payload, StepStatus, static_steps},
    services::contract::RenderService,
    session::studio::Studio,
};

fn payload(value: serde_json::Value) -> Payload {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Payload::new(),
    }
}

impl Studio {
    /// Format recorded by the Format step.
    pub fn format(&self) -> Option<Format> {
        self.tracker().output_as(static_steps::FORMAT, "format")
    }

    /// Grid preset recorded by the Grid step.
    pub fn grid_preset_key(&self) -> Option<String> {
        self.tracker().output_as(static_steps::GRID, "grid_preset")
    }

    /// Render id recorded by the Compile step.
    pub fn render_id(&self) -> Option<String> {
        self.tracker().output_as(static_steps::COMPILE, "render_id")
    }

    fn complete_and_move(&mut self, step: u32, next: u32) {
        self.update_step_status(step, StepStatus::Completed);
        self.set_current_step(next);
    }

    /// Record the brief and the uploaded reference asset ids, then move to Format.
    pub fn submit_brief(&mut self, brief: &str, reference_ids: &[String]) {
        self.update_step_output(
            static_steps::BRIEF,
            payload(serde_json::json!({ "brief": brief, "reference_ids": reference_ids })),
        );
        self.complete_and_move(static_steps::BRIEF, static_steps::FORMAT);
    }

    /// Record the canvas format, then move to Grid.
    pub fn submit_format(&mut self, format: &Format) -> StudioResult<()> {
        format.canvas()?;
        self.update_step_output(
            static_steps::FORMAT,
            payload(serde_json::json!({ "format": format })),
        );
        self.complete_and_move(static_steps::FORMAT, static_steps::GRID);
        Ok(())
    }

    /// Generate zones for a grid preset on the recorded format and replace the zone set.
    ///
    /// The zones are stamped with the project id and the choice is recorded in the Grid
    /// step output. The step is not completed; see [`Studio::submit_grid`].
    pub fn choose_grid(&mut self, preset_key: &str) -> StudioResult<()> {
        let format = self
            .format()
            .ok_or_else(|| StudioError::validation("choose a format before a grid"))?;
        let preset = grid_preset(preset_key)
            .ok_or_else(|| StudioError::validation(format!("unknown grid preset '{preset_key}'")))?;

        let mut zones = generate_grid_for(preset, format.canvas()?, GridOpts::default());
        if let Some(project_id) = self.project_id() {
            for zone in &mut zones {
                zone.project_id = Some(project_id.to_owned());
            }
        }
        self.set_zones(zones);
        self.update_step_output(
            static_steps::GRID,
            payload(serde_json::json!({ "grid_preset": preset.key })),
        );
        Ok(())
    }

    /// Complete Grid and move to Zone Assignment. Needs a chosen preset.
    pub fn submit_grid(&mut self) -> StudioResult<()> {
        if self.grid_preset_key().is_none() {
            return Err(StudioError::validation("no grid preset chosen"));
        }
        self.complete_and_move(static_steps::GRID, static_steps::ZONE_ASSIGNMENT);
        Ok(())
    }

    /// Give a zone a role with that role's default content. Undoable.
    pub fn assign_role(&mut self, zone_id: &ZoneId, role: ZoneRole) -> bool {
        self.update_zone(zone_id, &ZonePatch::role(role))
    }

    /// `true` when there are zones and none is `empty`.
    pub fn all_zones_assigned(&self) -> bool {
        self.zone_store().all_assigned()
    }

    /// Complete Zone Assignment and activate Zone Composition. Needs every zone assigned.
    pub fn submit_zone_assignment(&mut self) -> StudioResult<()> {
        if !self.all_zones_assigned() {
            return Err(StudioError::validation("every zone needs a role first"));
        }
        self.update_step_status(static_steps::ZONE_ASSIGNMENT, StepStatus::Completed);
        self.update_step_status(static_steps::ZONE_COMPOSITION, StepStatus::Active);
        self.set_current_step(static_steps::ZONE_COMPOSITION);
        Ok(())
    }

    fn edit_content(
        &mut self,
        zone_id: &ZoneId,
        edit: impl FnOnce(&mut ZoneContent) -> bool,
    ) -> bool {
        let Some(zone) = self.zone(zone_id) else {
            return false;
        };
        let mut content = zone.content.clone();
        if !edit(&mut content) {
            tracing::debug!(zone = %zone_id, role = zone.role.as_str(), "content edit does not fit role");
            return false;
        }
        self.update_zone(zone_id, &ZonePatch::content(content))
    }

    /// Point an image zone at an uploaded asset, resetting its crop.
    pub fn set_image_asset(&mut self, zone_id: &ZoneId, asset_id: &str) -> bool {
        self.edit_content(zone_id, |c| match c {
            ZoneContent::Image(img) => {
                *img = ImageContent {
                    asset_id: asset_id.to_owned(),
                    crop_rect: CropRect::FULL,
                    filters: std::mem::take(&mut img.filters),
                };
                true
            }
            _ => false,
        })
    }

    /// Edit a text zone in place.
    pub fn edit_text(&mut self, zone_id: &ZoneId, edit: impl FnOnce(&mut TextContent)) -> bool {
        self.edit_content(zone_id, |c| match c {
            ZoneContent::Text(text) => {
                edit(text);
                true
            }
            _ => false,
        })
    }

    /// Change a solid zone's fill.
    pub fn set_solid_colour(&mut self, zone_id: &ZoneId, colour: &str) -> bool {
        self.edit_content(zone_id, |c| match c {
            ZoneContent::Solid(solid) => {
                *solid = SolidContent {
                    colour: colour.to_owned(),
                };
                true
            }
            _ => false,
        })
    }

    /// Pick the processor of a texture or pattern zone.
    pub fn set_processor(&mut self, zone_id: &ZoneId, processor_id: &str, params: Params) -> bool {
        self.edit_content(zone_id, |c| match c {
            ZoneContent::Texture(p) | ZoneContent::Pattern(p) => {
                *p = ProcessorContent {
                    processor_id: processor_id.to_owned(),
                    params,
                };
                true
            }
            _ => false,
        })
    }

    /// Finish Zone Composition or Zone Refinement: complete it, activate the next step and
    /// move there.
    pub fn submit_composition(&mut self) -> StudioResult<()> {
        let current = self.current_step();
        if current != static_steps::ZONE_COMPOSITION && current != static_steps::ZONE_REFINEMENT {
            return Err(StudioError::validation(format!(
                "step {current} is not a composition step"
            )));
        }
        let next = current + 1;
        self.update_step_status(current, StepStatus::Completed);
        self.update_step_status(next, StepStatus::Active);
        self.set_current_step(next);
        Ok(())
    }

    /// Send the layout to the render service and record the render id on Compile.
    pub fn compile(&mut self, renderer: &dyn RenderService) -> StudioResult<String> {
        let format = self
            .format()
            .ok_or_else(|| StudioError::validation("no format recorded"))?;
        if self.zones().is_empty() {
            return Err(StudioError::validation("nothing to render, no zones"));
        }
        let project_id = self
            .project_id()
            .ok_or_else(|| StudioError::validation("no project open"))?;
        let request = build_render_request(project_id, format.canvas()?, self.zones())?;

        let response = renderer.render(&request).inspect_err(|err| {
            tracing::warn!(error = %err, "render failed, compile step left as is");
        })?;

        self.update_step_output(
            static_steps::COMPILE,
            payload(serde_json::json!({ "render_id": response.render_id })),
        );
        self.update_step_status(static_steps::COMPILE, StepStatus::Completed);
        Ok(response.render_id)
    }

    /// Move to Export once a render exists.
    pub fn continue_to_export(&mut self) -> StudioResult<()> {
        if self.render_id().is_none() {
            return Err(StudioError::validation("compile before exporting"));
        }
        self.set_current_step(static_steps::EXPORT);
        Ok(())
    }

    /// Fetch the rendered image, check it has the recorded format's size and complete Export.
    pub fn export(&mut self, renderer: &dyn RenderService) -> StudioResult<RenderedImage> {
        let render_id = self
            .render_id()
            .ok_or_else(|| StudioError::validation("compile before exporting"))?;
        let format = self
            .format()
            .ok_or_else(|| StudioError::validation("no format recorded"))?;
        let bytes = renderer.fetch_rendered(&render_id)?;
        let image =
            inspect_render_sized(bytes, format.width, format.height).inspect_err(|err| {
                tracing::warn!(error = %err, render = %render_id, "export rejected");
            })?;
        self.update_step_status(static_steps::EXPORT, StepStatus::Completed);
        Ok(image)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/workflow.rs"]
mod tests;
