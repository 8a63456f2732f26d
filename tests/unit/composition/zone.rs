use super::*;
use crate::composition::content::{SolidContent, TextContent};

fn zone() -> Zone {
    Zone::new(
        GridPosition::cell(0, 1),
        Bounds {
            x: 502,
            y: 0,
            width: 498,
            height: 498,
        },
        1,
    )
}

#[test]
fn new_zone_is_empty() {
    let z = zone();
    assert_eq!(z.role, ZoneRole::Empty);
    assert_eq!(z.content, ZoneContent::Empty);
    assert!(z.effects.is_empty());
    assert!(z.project_id.is_none());
    z.validate(Some(Canvas::new(1000, 1000).unwrap())).unwrap();
}

#[test]
fn assign_role_resets_content() {
    let mut z = zone();
    z.assign_role(ZoneRole::Solid);
    assert_eq!(
        z.content,
        ZoneContent::Solid(SolidContent {
            colour: "#1a1a1a".to_string()
        })
    );
    z.assign_role(ZoneRole::Text);
    assert_eq!(z.content, ZoneContent::Text(TextContent::default()));
    z.validate(None).unwrap();
}

#[test]
fn validate_catches_role_content_mismatch_and_overflow() {
    let mut z = zone();
    z.role = ZoneRole::Text;
    assert!(z.validate(None).is_err());

    let z = zone();
    assert!(z.validate(Some(Canvas::new(900, 1000).unwrap())).is_err());
}

#[test]
fn patch_merges_only_set_fields() {
    let mut z = zone();
    let before = z.clone();
    ZonePatch::role(ZoneRole::Image).apply(&mut z);
    assert_eq!(z.role, ZoneRole::Image);
    assert_eq!(z.content.role(), ZoneRole::Image);
    assert_eq!(z.id, before.id);
    assert_eq!(z.bounds, before.bounds);
    assert_eq!(z.order, before.order);

    ZonePatch::default().apply(&mut z);
    assert_eq!(z.role, ZoneRole::Image);
}

#[test]
fn zone_wire_shape_uses_zone_order() {
    let v = serde_json::to_value(zone()).unwrap();
    assert_eq!(v["zone_order"], 1);
    assert_eq!(v["role"], "empty");
    assert_eq!(v["content"]["type"], "empty");
    assert!(v.get("project_id").is_none());
}

#[test]
fn persisted_string_content_is_decoded() {
    let v = serde_json::json!({
        "id": "z1",
        "project_id": "p1",
        "grid_position": { "row": 0, "col": 0, "rowSpan": 1, "colSpan": 1 },
        "bounds": { "x": 0, "y": 0, "width": 10, "height": 10 },
        "role": "solid",
        "content": "{\"type\":\"solid\",\"colour\":\"#ffffff\"}",
        "effects": [],
        "zone_order": 0
    });
    let z: Zone = serde_json::from_value(v).unwrap();
    assert_eq!(z.id.as_str(), "z1");
    assert_eq!(
        z.content,
        ZoneContent::Solid(SolidContent {
            colour: "#ffffff".to_string()
        })
    );
}
