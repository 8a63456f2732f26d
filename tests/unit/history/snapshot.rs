use super::*;
use crate::composition::content::ZoneRole;
use crate::composition::zone::ZonePatch;
use crate::foundation::core::Canvas;
use crate::layout::grid::{GridOpts, generate_grid};
use crate::pipeline::step::{PipelineType, StepStatus};

#[test]
fn restore_is_a_deep_copy_and_leaves_pointer_alone() {
    let mut tracker = StepTracker::new(PipelineType::Static.template());
    let mut zones = ZoneStore::default();
    zones.set_zones(generate_grid(
        "2h",
        Canvas::new(800, 600).unwrap(),
        GridOpts::default(),
    ));

    let snap = StudioSnapshot::capture(&tracker, &zones);

    let id = zones.zones()[0].id.clone();
    zones.update_zone(&id, &ZonePatch::role(ZoneRole::Text));
    tracker.update_step_status(0, StepStatus::Completed);
    tracker.set_current_step(3);

    assert_eq!(snap.zones[0].role, ZoneRole::Empty);
    assert_eq!(snap.steps[0].status, StepStatus::Pending);

    snap.restore(&mut tracker, &mut zones);
    assert_eq!(zones.zones()[0].role, ZoneRole::Empty);
    assert_eq!(tracker.step(0).unwrap().status, StepStatus::Pending);
    assert_eq!(tracker.current_step(), 3);
}
