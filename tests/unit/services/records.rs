use serde_json::json;

use super::*;
use crate::composition::content::ZoneRole;

#[test]
fn project_reply_with_string_encoded_rows() {
    let steps = serde_json::to_string(&PipelineType::Static.template()).unwrap();
    let rec: ProjectRecord = serde_json::from_value(json!({
        "id": "p1",
        "name": "Poster",
        "pipeline_type": "static",
        "created_at": "2026-01-01",
        "pipeline": { "id": "x", "project_id": "p1", "current_step": 3, "steps": steps },
        "zones": [
            {
                "id": "z0",
                "project_id": "p1",
                "grid_position": "{\"row\":0,\"col\":0,\"rowSpan\":1,\"colSpan\":1}",
                "bounds": "{\"x\":0,\"y\":0,\"width\":540,\"height\":1080}",
                "role": "solid",
                "content": "{\"type\":\"solid\",\"colour\":\"#ff0000\"}",
                "effects": "[]",
                "zone_order": 0
            },
            {
                "id": "z1",
                "project_id": "p1",
                "grid_position": "{\"row\":0,\"col\":1,\"rowSpan\":1,\"colSpan\":1}",
                "bounds": "{\"x\":544,\"y\":0,\"width\":536,\"height\":1080}",
                "role": "empty",
                "content": "{}",
                "effects": "[]",
                "zone_order": 1
            },
            { "id": "broken", "bounds": "not json" }
        ]
    }))
    .unwrap();

    let pipeline = rec.pipeline.as_ref().unwrap();
    assert_eq!(pipeline.current_step, Some(3));
    assert_eq!(pipeline.steps().len(), 8);

    let zones = rec.zones();
    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0].role, ZoneRole::Solid);
    assert_eq!(zones[0].bounds.width, 540);
    assert_eq!(zones[1].content.role(), ZoneRole::Empty);
    assert_eq!(zones[1].project_id.as_deref(), Some("p1"));
}

#[test]
fn project_without_pipeline() {
    let rec: ProjectRecord = serde_json::from_value(json!({ "id": "p2" })).unwrap();
    assert!(rec.pipeline.is_none());
    assert_eq!(rec.pipeline_type, PipelineType::Static);
    assert!(rec.zones().is_empty());
}

#[test]
fn create_project_body() {
    let body = serde_json::to_value(CreateProject {
        name: "Reel".into(),
        pipeline_type: PipelineType::VideoReel,
        style_profile_id: None,
        brief: String::new(),
    })
    .unwrap();
    assert_eq!(
        body,
        json!({ "name": "Reel", "pipeline_type": "video_reel", "brief": "" })
    );
}

#[test]
fn asset_reply() {
    let a: AssetRecord = serde_json::from_value(json!({
        "id": "a1",
        "type": "image",
        "filename": "cat.png",
        "size_bytes": 12,
        "metadata": { "width": 4, "height": 3 }
    }))
    .unwrap();
    assert_eq!(a.kind.as_deref(), Some("image"));
    assert_eq!(a.metadata["width"], 4);
}
