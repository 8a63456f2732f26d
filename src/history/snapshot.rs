use serde::{Deserialize, Serialize};

use crate::{
    composition::zone::Zone, pipeline::step::PipelineStep, pipeline::tracker::StepTracker,
    store::zones::ZoneStore,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Deep copy of the undoable part of a session: steps and zones.
///
/// The current-step pointer, the selection, and the project id are not captured.
pub struct StudioSnapshot {
    /// Pipeline steps at capture time.
    pub steps: Vec<PipelineStep>,
    /// Zones at capture time.
    pub zones: Vec<Zone>,
}

impl StudioSnapshot {
    /// Copy the current steps and zones.
    pub fn capture(tracker: &StepTracker, zones: &ZoneStore) -> Self {
        Self {
            steps: tracker.steps().to_vec(),
            zones: zones.zones().to_vec(),
        }
    }

    /// Write the captured steps and zones back.
    pub fn restore(&self, tracker: &mut StepTracker, zones: &mut ZoneStore) {
        tracker.replace_steps(self.steps.clone());
        zones.set_zones(self.zones.clone());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/history/snapshot.rs"]
mod tests;
