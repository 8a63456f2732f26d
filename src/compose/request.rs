use crate::{
    composition::content::ZoneContent,
    composition::zone::Zone,
    foundation::core::{Bounds, Canvas},
    foundation::error::{StudioError, StudioResult},
};

/// Largest canvas side the render service accepts.
pub const MAX_RENDER_SIDE: u32 = 8192;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One zone as the render service sees it.
pub struct ZoneRender {
    /// Pixel rectangle.
    pub bounds: Bounds,
    /// Content payload, tagged by `type`.
    pub content: ZoneContent,
    /// Paint order; lower is painted first.
    pub zone_order: u32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Body of `POST /compose/render`.
pub struct RenderRequest {
    /// Owning project.
    pub project_id: String,
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Zones in ascending paint order.
    pub zones: Vec<ZoneRender>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Render service reply.
pub struct RenderResponse {
    /// Opaque handle for fetching the image.
    pub render_id: String,
    /// Rendered width.
    pub width: u32,
    /// Rendered height.
    pub height: u32,
}

/// Assemble the render request for `zones` on `canvas`.
///
/// Zones are emitted by ascending order; ties keep their input order. Canvas sides outside
/// `1..=MAX_RENDER_SIDE` are rejected.
pub fn build_render_request(
    project_id: &str,
    canvas: Canvas,
    zones: &[Zone],
) -> StudioResult<RenderRequest> {
    for (axis, side) in [("width", canvas.width), ("height", canvas.height)] {
        if !(1..=MAX_RENDER_SIDE).contains(&side) {
            return Err(StudioError::validation(format!(
                "canvas {axis} {side} is outside 1..={MAX_RENDER_SIDE}"
            )));
        }
    }

    let mut ordered: Vec<&Zone> = zones.iter().collect();
    ordered.sort_by_key(|z| z.order);

    Ok(RenderRequest {
        project_id: project_id.to_owned(),
        canvas_width: canvas.width,
        canvas_height: canvas.height,
        zones: ordered
            .into_iter()
            .map(|z| ZoneRender {
                bounds: z.bounds,
                content: z.content.clone(),
                zone_order: z.order,
            })
            .collect(),
    })
}

/// Render ids are lowercase hex with dashes; anything else is refused before it reaches a URL.
pub fn is_valid_render_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b) || b == b'-')
}

#[cfg(test)]
#[path = "../../tests/unit/compose/request.rs"]
mod tests;
