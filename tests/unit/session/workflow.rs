use std::cell::RefCell;
use std::io::Cursor;

use super::*;
use crate::compose::request::{RenderRequest, RenderResponse};
use crate::composition::content::TextAlign;
use crate::pipeline::step::PipelineType;

#[derive(Default)]
struct FakeRenderer {
    fail: bool,
    size_override: Option<(u32, u32)>,
    requests: RefCell<Vec<RenderRequest>>,
}

impl RenderService for FakeRenderer {
    fn render(&self, req: &RenderRequest) -> StudioResult<RenderResponse> {
        if self.fail {
            return Err(StudioError::service("render failed with 500"));
        }
        self.requests.borrow_mut().push(req.clone());
        Ok(RenderResponse {
            render_id: "0badc0de-1".to_string(),
            width: req.canvas_width,
            height: req.canvas_height,
        })
    }

    fn fetch_rendered(&self, _render_id: &str) -> StudioResult<Vec<u8>> {
        let (w, h) = self.size_override.unwrap_or_else(|| {
            let sent = self.requests.borrow();
            sent.last().map_or((1, 1), |r| (r.canvas_width, r.canvas_height))
        });
        let img = image::RgbaImage::new(w, h);
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| StudioError::service(e.to_string()))?;
        Ok(buf)
    }
}

fn status(s: &Studio, n: u32) -> StepStatus {
    s.tracker().step(n).unwrap().status
}

fn studio_at_assignment() -> Studio {
    let mut s = Studio::new();
    s.set_project("p1", PipelineType::Static.template());
    s.submit_brief("summer launch", &["a1".to_string()]);
    s.submit_format(&Format::preset("ig-post").unwrap()).unwrap();
    s.choose_grid("2v").unwrap();
    s.submit_grid().unwrap();
    s
}

#[test]
fn brief_and_format_advance() {
    let mut s = Studio::new();
    s.set_project("p1", PipelineType::Static.template());
    s.submit_brief("moody", &[]);
    assert_eq!(status(&s, 0), StepStatus::Completed);
    assert_eq!(s.current_step(), 1);
    assert_eq!(
        s.tracker().output_as::<String>(0, "brief").as_deref(),
        Some("moody")
    );

    s.submit_format(&Format::custom(800, 600).unwrap()).unwrap();
    assert_eq!(s.current_step(), 2);
    assert_eq!(s.format().unwrap().label, "Custom 800x600");
}

#[test]
fn grid_needs_format_and_known_preset() {
    let mut s = Studio::new();
    s.set_project("p1", PipelineType::Static.template());
    assert!(s.choose_grid("4q").is_err());
    assert!(s.submit_grid().is_err());

    s.submit_format(&Format::preset("ig-story").unwrap()).unwrap();
    assert!(s.choose_grid("9x9").is_err());
    assert!(s.zones().is_empty());

    s.choose_grid("3r").unwrap();
    assert_eq!(s.zones().len(), 3);
    assert!(s.zones().iter().all(|z| z.project_id.as_deref() == Some("p1")));
    assert_eq!(s.grid_preset_key().as_deref(), Some("3r"));
    assert_eq!(status(&s, 2), StepStatus::Pending);

    s.submit_grid().unwrap();
    assert_eq!(s.current_step(), 3);
}

#[test]
fn assignment_gate() {
    let mut s = studio_at_assignment();
    let ids: Vec<_> = s.zones().iter().map(|z| z.id.clone()).collect();

    assert!(s.assign_role(&ids[0], ZoneRole::Image));
    assert!(!s.all_zones_assigned());
    assert!(s.submit_zone_assignment().is_err());
    assert_eq!(s.current_step(), 3);

    assert!(s.assign_role(&ids[1], ZoneRole::Text));
    s.submit_zone_assignment().unwrap();
    assert_eq!(status(&s, 3), StepStatus::Completed);
    assert_eq!(status(&s, 4), StepStatus::Active);
    assert_eq!(s.current_step(), 4);
}

#[test]
fn content_edits_respect_role() {
    let mut s = studio_at_assignment();
    let ids: Vec<_> = s.zones().iter().map(|z| z.id.clone()).collect();
    s.assign_role(&ids[0], ZoneRole::Image);
    s.assign_role(&ids[1], ZoneRole::Text);

    assert!(s.set_image_asset(&ids[0], "asset-7"));
    assert!(!s.set_solid_colour(&ids[0], "#fff"));
    assert!(s.edit_text(&ids[1], |t| {
        t.text = "Hello".into();
        t.alignment = TextAlign::Left;
    }));
    assert!(!s.set_processor(&ids[1], "grain", Params::new()));

    match &s.zone(&ids[0]).unwrap().content {
        ZoneContent::Image(img) => assert_eq!(img.asset_id, "asset-7"),
        other => panic!("unexpected {other:?}"),
    }
    match &s.zone(&ids[1]).unwrap().content {
        ZoneContent::Text(t) => {
            assert_eq!(t.text, "Hello");
            assert_eq!(t.font, "Inter");
        }
        other => panic!("unexpected {other:?}"),
    }

    s.undo();
    match &s.zone(&ids[1]).unwrap().content {
        ZoneContent::Text(t) => assert_eq!(t.text, ""),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn composition_walks_to_compile() {
    let mut s = studio_at_assignment();
    assert!(s.submit_composition().is_err());
    let ids: Vec<_> = s.zones().iter().map(|z| z.id.clone()).collect();
    for id in &ids {
        s.assign_role(id, ZoneRole::Solid);
    }
    s.submit_zone_assignment().unwrap();
    s.submit_composition().unwrap();
    assert_eq!(s.current_step(), 5);
    assert_eq!(status(&s, 5), StepStatus::Active);
    s.submit_composition().unwrap();
    assert_eq!(s.current_step(), 6);
    assert_eq!(status(&s, 5), StepStatus::Completed);
    assert_eq!(status(&s, 6), StepStatus::Active);
}

#[test]
fn failed_compile_leaves_steps_untouched() {
    let mut s = studio_at_assignment();
    let steps_before = s.steps().to_vec();
    let failing = FakeRenderer {
        fail: true,
        ..FakeRenderer::default()
    };
    let err = s.compile(&failing).unwrap_err();
    assert!(matches!(err, StudioError::Service(_)));
    assert_eq!(s.steps(), steps_before.as_slice());
    assert!(s.render_id().is_none());
    assert!(s.continue_to_export().is_err());
}

#[test]
fn compile_then_export() {
    let mut s = studio_at_assignment();
    let renderer = FakeRenderer::default();

    let render_id = s.compile(&renderer).unwrap();
    assert_eq!(render_id, "0badc0de-1");
    assert_eq!(status(&s, 6), StepStatus::Completed);
    let sent = renderer.requests.borrow();
    assert_eq!(sent[0].project_id, "p1");
    assert_eq!((sent[0].canvas_width, sent[0].canvas_height), (1080, 1080));
    assert_eq!(sent[0].zones.len(), 2);
    drop(sent);

    s.continue_to_export().unwrap();
    assert_eq!(s.current_step(), 7);
    let image = s.export(&renderer).unwrap();
    assert_eq!((image.width, image.height), (1080, 1080));
    assert_eq!(status(&s, 7), StepStatus::Completed);
}

#[test]
fn export_rejects_render_of_the_wrong_size() {
    let mut s = studio_at_assignment();
    let renderer = FakeRenderer {
        size_override: Some((540, 540)),
        ..FakeRenderer::default()
    };
    s.compile(&renderer).unwrap();
    s.continue_to_export().unwrap();

    let err = s.export(&renderer).unwrap_err();
    assert!(matches!(err, StudioError::Service(_)));
    assert!(err.to_string().contains("expected 1080x1080"));
    assert_eq!(status(&s, 7), StepStatus::Pending);
}

#[test]
fn compile_needs_format_and_zones() {
    let mut s = Studio::new();
    s.set_project("p1", PipelineType::Static.template());
    let renderer = FakeRenderer::default();
    assert!(s.compile(&renderer).is_err());

    s.submit_format(&Format::preset("ig-post").unwrap()).unwrap();
    assert!(s.compile(&renderer).is_err());
    assert!(renderer.requests.borrow().is_empty());
}
