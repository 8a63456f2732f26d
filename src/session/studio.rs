//! Session controller: one owned state object instead of an ambient store.
//!
//! [`Studio`] holds the project id, the step tracker, the zone store and the undo history.
//! Every committed mutation notifies subscribers synchronously, in registration order, with
//! a read-only view of the new state.

use std::rc::{Rc, Weak};

use crate::{
    composition::zone::{Zone, ZonePatch},
    foundation::ids::ZoneId,
    history::snapshot::StudioSnapshot,
    history::stack::History,
    pipeline::step::{Payload, PipelineStep, StepStatus},
    pipeline::tracker::StepTracker,
    services::records::ProjectRecord,
    store::zones::ZoneStore,
};

#[derive(Clone, Debug, PartialEq)]
/// What changed in a [`Studio`].
pub enum StudioEvent {
    /// A project was installed (fresh or loaded).
    ProjectLoaded,
    /// Everything was cleared.
    Reset,
    /// The current-step pointer moved.
    CurrentStepChanged(u32),
    /// A step's status was replaced.
    StepStatusChanged {
        /// Step number.
        step: u32,
        /// New status.
        status: StepStatus,
    },
    /// A step's output was merged into.
    StepOutputChanged(u32),
    /// The whole zone set was replaced.
    ZonesReplaced,
    /// One zone was patched.
    ZoneUpdated(ZoneId),
    /// Selection changed.
    SelectionChanged(Option<ZoneId>),
    /// Steps and zones were restored by undo.
    Undone,
    /// Steps and zones were restored by redo.
    Redone,
}

type Callback = dyn Fn(&StudioEvent, &Studio);

/// Keeps a [`Studio::subscribe`] callback alive. Dropping it unsubscribes.
pub struct Subscription {
    _guard: Rc<Callback>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Pipeline, zones, selection and history for one open project.
pub struct Studio {
    project_id: Option<String>,
    tracker: StepTracker,
    zones: ZoneStore,
    history: History<StudioSnapshot>,
    subscribers: Vec<Weak<Callback>>,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Studio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio")
            .field("project_id", &self.project_id)
            .field("tracker", &self.tracker)
            .field("zones", &self.zones)
            .field("history_len", &self.history.len())
            .finish_non_exhaustive()
    }
}

impl Studio {
    /// Empty session with no project.
    pub fn new() -> Self {
        Self {
            project_id: None,
            tracker: StepTracker::default(),
            zones: ZoneStore::default(),
            history: History::default(),
            subscribers: Vec::new(),
        }
    }

    /// Install a project: new steps, pointer at 0, no zones, no selection, no history.
    pub fn set_project(&mut self, project_id: impl Into<String>, steps: Vec<PipelineStep>) {
        self.project_id = Some(project_id.into());
        self.tracker = StepTracker::new(steps);
        self.zones = ZoneStore::default();
        self.history.clear();
        tracing::debug!(
            project = self.project_id.as_deref(),
            steps = self.tracker.steps().len(),
            "project installed"
        );
        self.emit(StudioEvent::ProjectLoaded);
    }

    /// Install a persisted project. Malformed steps load as an empty list; the persisted
    /// pointer and zones are applied when present.
    pub fn load_project(&mut self, record: &ProjectRecord) {
        let steps = record
            .pipeline
            .as_ref()
            .map(|p| p.steps())
            .unwrap_or_default();
        self.project_id = Some(record.id.clone());
        self.tracker = StepTracker::new(steps);
        if let Some(step) = record.pipeline.as_ref().and_then(|p| p.current_step) {
            self.tracker.set_current_step(step);
        }
        self.zones = ZoneStore::default();
        self.zones.set_zones(record.zones());
        self.history.clear();
        tracing::debug!(
            project = %record.id,
            steps = self.tracker.steps().len(),
            zones = self.zones.zones().len(),
            current = self.tracker.current_step(),
            "project loaded"
        );
        self.emit(StudioEvent::ProjectLoaded);
    }

    /// Drop the project and all state. Subscribers stay registered.
    pub fn reset(&mut self) {
        self.project_id = None;
        self.tracker = StepTracker::default();
        self.zones = ZoneStore::default();
        self.history.clear();
        self.emit(StudioEvent::Reset);
    }

    /// Open project, if any.
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Step tracker (read-only).
    pub fn tracker(&self) -> &StepTracker {
        &self.tracker
    }

    /// Steps in order.
    pub fn steps(&self) -> &[PipelineStep] {
        self.tracker.steps()
    }

    /// Current-step pointer.
    pub fn current_step(&self) -> u32 {
        self.tracker.current_step()
    }

    /// Zone store (read-only).
    pub fn zone_store(&self) -> &ZoneStore {
        &self.zones
    }

    /// Current zones.
    pub fn zones(&self) -> &[Zone] {
        self.zones.zones()
    }

    /// Zone by id.
    pub fn zone(&self, id: &ZoneId) -> Option<&Zone> {
        self.zones.zone(id)
    }

    /// Selected zone, if the selection names an existing zone.
    pub fn selected_zone(&self) -> Option<&Zone> {
        self.zones.selected_zone()
    }

    /// Undo history (read-only).
    pub fn history(&self) -> &History<StudioSnapshot> {
        &self.history
    }

    /// Move the step pointer. Unconditional; see [`StepTracker::can_enter`] for gating.
    pub fn set_current_step(&mut self, step_number: u32) {
        self.tracker.set_current_step(step_number);
        self.emit(StudioEvent::CurrentStepChanged(step_number));
    }

    /// Replace a step's status. Unknown steps are ignored and return `false`.
    pub fn update_step_status(&mut self, step_number: u32, status: StepStatus) -> bool {
        let hit = self.tracker.update_step_status(step_number, status);
        if hit {
            self.emit(StudioEvent::StepStatusChanged {
                step: step_number,
                status,
            });
        }
        hit
    }

    /// Merge into a step's output. Unknown steps are ignored and return `false`.
    pub fn update_step_output(&mut self, step_number: u32, partial: Payload) -> bool {
        let hit = self.tracker.update_step_output(step_number, partial);
        if hit {
            self.emit(StudioEvent::StepOutputChanged(step_number));
        }
        hit
    }

    /// Replace the zone set. Not recorded in history.
    pub fn set_zones(&mut self, zones: Vec<Zone>) {
        self.zones.set_zones(zones);
        self.emit(StudioEvent::ZonesReplaced);
    }

    /// Snapshot, then patch one zone.
    ///
    /// The snapshot is taken even when no zone matches, so an unknown id still records a
    /// history entry; it returns `false` and nothing else changes.
    pub fn update_zone(&mut self, id: &ZoneId, patch: &ZonePatch) -> bool {
        self.push_history("update zone");
        let hit = self.zones.update_zone(id, patch);
        if hit {
            self.emit(StudioEvent::ZoneUpdated(id.clone()));
        }
        hit
    }

    /// Set or clear the selection.
    pub fn select_zone(&mut self, id: Option<ZoneId>) {
        self.zones.select_zone(id.clone());
        self.emit(StudioEvent::SelectionChanged(id));
    }

    /// Record the current steps and zones.
    pub fn push_history(&mut self, label: &str) {
        let snap = StudioSnapshot::capture(&self.tracker, &self.zones);
        self.history.push(label, snap);
    }

    /// Restore the snapshot under the history cursor. `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snap) = self.history.undo() else {
            return false;
        };
        snap.restore(&mut self.tracker, &mut self.zones);
        self.emit(StudioEvent::Undone);
        true
    }

    /// Step the history cursor forward and restore. `false` at the tail.
    pub fn redo(&mut self) -> bool {
        let Some(snap) = self.history.redo() else {
            return false;
        };
        snap.restore(&mut self.tracker, &mut self.zones);
        self.emit(StudioEvent::Redone);
        true
    }

    /// Whether [`Studio::undo`] would change anything.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`Studio::redo`] would change anything.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Register an observer. It runs after every committed mutation until the returned
    /// guard is dropped.
    pub fn subscribe(&mut self, callback: impl Fn(&StudioEvent, &Studio) + 'static) -> Subscription {
        let strong: Rc<Callback> = Rc::new(callback);
        self.subscribers.push(Rc::downgrade(&strong));
        Subscription { _guard: strong }
    }

    /// Live observers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    fn emit(&mut self, event: StudioEvent) {
        self.subscribers.retain(|w| w.strong_count() > 0);
        let live: Vec<Rc<Callback>> = self.subscribers.iter().filter_map(Weak::upgrade).collect();
        for cb in &live {
            cb(&event, self);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/studio.rs"]
mod tests;
