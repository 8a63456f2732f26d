use super::*;

#[test]
fn format_presets_resolve() {
    let f = Format::preset("ig-story").unwrap();
    assert_eq!((f.width, f.height), (1080, 1920));
    assert_eq!(f.label, "Instagram Story");
    assert_eq!(f.matching_preset(), Some("ig-story"));
    assert!(Format::preset("billboard").is_err());
}

#[test]
fn custom_format_range_is_enforced() {
    let f = Format::custom(1200, 628).unwrap();
    assert_eq!(f.label, "Custom 1200x628");
    assert_eq!(f.matching_preset(), None);
    assert!(Format::custom(99, 500).is_err());
    assert!(Format::custom(500, 10_001).is_err());
}

#[test]
fn ratios_only_apply_to_the_split_axis() {
    let p = grid_preset("asym-lr").unwrap();
    assert_eq!(p.ratios_for(p.cols), Some(&[0.6, 0.4][..]));
    assert_eq!(p.ratios_for(p.rows), None);
    assert_eq!(grid_preset("4q").unwrap().cell_count(), 4);
    assert!(grid_preset("9x9").is_none());
}

#[test]
fn format_output_shape() {
    let v = serde_json::to_value(Format::preset("ig-post").unwrap()).unwrap();
    assert_eq!(
        v,
        serde_json::json!({ "width": 1080, "height": 1080, "label": "Instagram Post" })
    );
}
