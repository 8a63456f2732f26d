use super::*;
use crate::foundation::core::Canvas;
use crate::layout::grid::{GridOpts, generate_grid};

fn store_with(preset: &str) -> ZoneStore {
    let mut s = ZoneStore::default();
    s.set_zones(generate_grid(
        preset,
        Canvas::new(1080, 1080).unwrap(),
        GridOpts::default(),
    ));
    s
}

#[test]
fn update_touches_only_the_matching_zone() {
    let mut s = store_with("4q");
    let before = s.zones().to_vec();
    let target = before[2].id.clone();

    assert!(s.update_zone(&target, &ZonePatch::role(ZoneRole::Solid)));
    for (old, new) in before.iter().zip(s.zones()) {
        if old.id == target {
            assert_eq!(new.role, ZoneRole::Solid);
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn unknown_zone_update_is_a_noop() {
    let mut s = store_with("2h");
    let before = s.clone();
    assert!(!s.update_zone(&ZoneId::from("nope"), &ZonePatch::role(ZoneRole::Text)));
    assert_eq!(s, before);
}

#[test]
fn single_selection() {
    let mut s = store_with("2v");
    let a = s.zones()[0].id.clone();
    let b = s.zones()[1].id.clone();
    s.select_zone(Some(a));
    s.select_zone(Some(b.clone()));
    assert_eq!(s.selected_zone_id(), Some(&b));
    assert_eq!(s.selected_zone().map(|z| z.order), Some(1));
    s.select_zone(None);
    assert!(s.selected_zone().is_none());
}

#[test]
fn regenerating_the_grid_clears_a_stale_selection() {
    let mut s = store_with("2v");
    let keep = s.zones()[0].id.clone();
    s.select_zone(Some(keep.clone()));

    let same = s.zones().to_vec();
    s.set_zones(same);
    assert_eq!(s.selected_zone_id(), Some(&keep));

    s.set_zones(generate_grid(
        "3r",
        Canvas::new(100, 100).unwrap(),
        GridOpts::default(),
    ));
    assert!(s.selected_zone_id().is_none());
}

#[test]
fn all_assigned_needs_zones_and_no_empty_role() {
    let mut s = ZoneStore::default();
    assert!(!s.all_assigned());
    s = store_with("2h");
    assert!(!s.all_assigned());
    let ids: Vec<_> = s.zones().iter().map(|z| z.id.clone()).collect();
    for id in &ids {
        s.update_zone(id, &ZonePatch::role(ZoneRole::Texture));
    }
    assert!(s.all_assigned());
}
