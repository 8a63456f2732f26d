use super::*;

#[test]
fn default_content_matches_role() {
    for role in ZoneRole::ALL {
        assert_eq!(role.default_content().role(), role);
        role.default_content().validate().unwrap();
    }
}

#[test]
fn text_defaults() {
    let ZoneContent::Text(t) = ZoneRole::Text.default_content() else {
        panic!("expected text content");
    };
    assert_eq!(t.font, "Inter");
    assert_eq!(t.size, 24.0);
    assert_eq!(t.colour, "#e8e8e8");
    assert_eq!(t.weight, 400);
    assert_eq!(t.alignment, TextAlign::Center);
}

#[test]
fn content_is_tagged_by_type() {
    let v = serde_json::to_value(ZoneContent::Empty).unwrap();
    assert_eq!(v, serde_json::json!({ "type": "empty" }));

    let v = serde_json::to_value(ZoneRole::Solid.default_content()).unwrap();
    assert_eq!(v, serde_json::json!({ "type": "solid", "colour": "#1a1a1a" }));

    let parsed: ZoneContent = serde_json::from_value(serde_json::json!({
        "type": "pattern",
        "processor_id": "dots",
        "params": { "spacing": 8 }
    }))
    .unwrap();
    assert_eq!(parsed.role(), ZoneRole::Pattern);
}

#[test]
fn image_content_wire_shape() {
    let v = serde_json::to_value(ZoneRole::Image.default_content()).unwrap();
    assert_eq!(v["type"], "image");
    assert_eq!(v["asset_id"], "");
    assert_eq!(v["crop_rect"]["w"], 1.0);
}

#[test]
fn validate_rejects_bad_payloads() {
    let mut text = TextContent::default();
    text.weight = 950;
    assert!(ZoneContent::Text(text).validate().is_err());

    let solid = SolidContent {
        colour: "red".to_string(),
    };
    assert!(ZoneContent::Solid(solid).validate().is_err());

    let image = ImageContent {
        crop_rect: CropRect {
            x: 0.5,
            y: 0.0,
            w: 0.75,
            h: 1.0,
        },
        ..ImageContent::default()
    };
    assert!(ZoneContent::Image(image).validate().is_err());
}

#[test]
fn role_parses_from_wire_name() {
    assert_eq!("texture".parse::<ZoneRole>().unwrap(), ZoneRole::Texture);
    assert!("video".parse::<ZoneRole>().is_err());
}
