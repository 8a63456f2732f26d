use serde::de::DeserializeOwned;

use crate::pipeline::step::{Payload, PipelineStep, StepStatus};

#[derive(Clone, Debug, Default, PartialEq)]
/// Ordered pipeline steps plus the "current step" pointer.
///
/// The tracker is a thin primitive: it never refuses a transition. Gating (is the previous
/// step done, is the pointer in range) is layered on top by the caller, see
/// [`StepTracker::can_enter`].
pub struct StepTracker {
    steps: Vec<PipelineStep>,
    current_step: u32,
}

impl StepTracker {
    /// Tracker over `steps` with the pointer at step 0.
    pub fn new(steps: Vec<PipelineStep>) -> Self {
        Self {
            steps,
            current_step: 0,
        }
    }

    /// All steps in sequence order.
    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    /// Replace the whole step list (history restore, project load).
    pub(crate) fn replace_steps(&mut self, steps: Vec<PipelineStep>) {
        self.steps = steps;
    }

    /// Step with the given number.
    pub fn step(&self, step_number: u32) -> Option<&PipelineStep> {
        self.steps.iter().find(|s| s.step_number == step_number)
    }

    fn step_mut(&mut self, step_number: u32) -> Option<&mut PipelineStep> {
        self.steps.iter_mut().find(|s| s.step_number == step_number)
    }

    /// Current pointer; may name a step that does not exist.
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    /// Step under the pointer, if it exists.
    pub fn current(&self) -> Option<&PipelineStep> {
        self.step(self.current_step)
    }

    /// Move the pointer. Unconditional.
    pub fn set_current_step(&mut self, step_number: u32) {
        self.current_step = step_number;
    }

    /// Replace a step's status. Returns `false` (and changes nothing) for unknown steps.
    pub fn update_step_status(&mut self, step_number: u32, status: StepStatus) -> bool {
        match self.step_mut(step_number) {
            Some(step) => {
                step.status = status;
                true
            }
            None => false,
        }
    }

    /// Shallow-merge `partial` into a step's output, key by key. Returns `false` for
    /// unknown steps.
    pub fn update_step_output(&mut self, step_number: u32, partial: Payload) -> bool {
        match self.step_mut(step_number) {
            Some(step) => {
                step.output.extend(partial);
                true
            }
            None => false,
        }
    }

    /// Decode one output key of a step. Missing or mistyped values are `None`.
    pub fn output_as<T: DeserializeOwned>(&self, step_number: u32, key: &str) -> Option<T> {
        let value = self.step(step_number)?.output.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Whether a step exists and is in a terminal state.
    pub fn is_done(&self, step_number: u32) -> bool {
        self.step(step_number)
            .is_some_and(|s| s.status.is_terminal())
    }

    /// Readiness check for callers gating navigation: the step exists and every earlier
    /// step is completed or skipped.
    pub fn can_enter(&self, step_number: u32) -> bool {
        self.step(step_number).is_some()
            && self
                .steps
                .iter()
                .filter(|s| s.step_number < step_number)
                .all(|s| s.status.is_terminal())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/tracker.rs"]
mod tests;
