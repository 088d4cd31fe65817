use crate::action::{
    schedule_with_base, Action, ActionKind, Effect, ScheduledAction, BASE_DELAY,
};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Lifecycle of one visit sequence. There is no path back to `Idle` and no
/// cancellation once `Running`; `start` acts as the one-shot latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running { next: usize },
    Completed,
}

// ---------------------------------------------------------------------------
// RunnerState
// ---------------------------------------------------------------------------

/// State of the visit Action Runner, observed by the presentation layer.
///
/// Holds the resolved schedule, the current phase, and the contact-form flag.
/// All transitions are synchronous; the async driver owns the waits and the
/// browser side effects.
#[derive(Debug, Clone)]
pub struct RunnerState {
    steps: Vec<ScheduledAction>,
    phase: Phase,
    show_form: bool,
}

impl RunnerState {
    pub fn new(actions: &[Action]) -> Self {
        Self::with_base_delay(actions, BASE_DELAY)
    }

    pub fn with_base_delay(actions: &[Action], base: Duration) -> Self {
        Self {
            steps: schedule_with_base(actions, base),
            phase: Phase::Idle,
            show_form: false,
        }
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Start the sequence. Returns `true` only on the one transition from
    /// `Idle` to `Running`; every later call is a no-op. An empty schedule
    /// goes straight to `Completed` so no timer is ever scheduled.
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Idle if self.steps.is_empty() => {
                self.phase = Phase::Completed;
                false
            }
            Phase::Idle => {
                self.phase = Phase::Running { next: 0 };
                true
            }
            Phase::Running { .. } | Phase::Completed => false,
        }
    }

    /// The pending step's index and pre-execution wait, while running.
    pub fn next_wait(&self) -> Option<(usize, Duration)> {
        match self.phase {
            Phase::Running { next } => self.steps.get(next).map(|s| (next, s.wait)),
            _ => None,
        }
    }

    /// Execute the pending step: apply its effect to this state, advance,
    /// and transition to `Completed` after the last step.
    ///
    /// Returns the side effect the driver must perform, or `None` for a
    /// skipped step (unknown kind or missing payload).
    pub fn execute_next(&mut self) -> Option<Effect> {
        let Phase::Running { next } = self.phase else {
            return None;
        };
        let effect = self.steps.get(next).and_then(|s| s.action.effect());
        if matches!(effect, Some(Effect::ShowForm)) {
            self.show_form = true;
        }
        self.phase = if next + 1 < self.steps.len() {
            Phase::Running { next: next + 1 }
        } else {
            Phase::Completed
        };
        effect
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Whether any active action is configured at all.
    pub fn has_actions(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Whether the contact form should currently be shown.
    pub fn show_form(&self) -> bool {
        self.show_form
    }

    /// The scheduled website action, if one is configured.
    pub fn website_action(&self) -> Option<&Action> {
        self.find_kind(&ActionKind::Website)
    }

    /// The scheduled download action, if one is configured.
    pub fn download_action(&self) -> Option<&Action> {
        self.find_kind(&ActionKind::Download)
    }

    pub fn steps(&self) -> &[ScheduledAction] {
        &self.steps
    }

    fn find_kind(&self, kind: &ActionKind) -> Option<&Action> {
        self.steps
            .iter()
            .map(|s| &s.action)
            .find(|a| &a.kind == kind)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn website(id: u32, order: u32) -> Action {
        Action {
            id,
            kind: ActionKind::Website,
            url: Some(format!("https://a.test/{id}")),
            file: None,
            order: Some(order),
            active: true,
            delay: None,
        }
    }

    fn form(id: u32, order: u32) -> Action {
        Action {
            id,
            kind: ActionKind::Form,
            url: None,
            file: None,
            order: Some(order),
            active: true,
            delay: None,
        }
    }

    #[test]
    fn empty_schedule_completes_without_timers() {
        let mut state = RunnerState::new(&[]);
        assert!(!state.has_actions());
        assert!(!state.start());
        assert!(state.is_completed());
        assert_eq!(state.next_wait(), None);
    }

    #[test]
    fn start_is_a_one_shot_latch() {
        let mut state = RunnerState::new(&[website(1, 1)]);
        assert!(state.start());
        assert!(!state.start());
        state.execute_next();
        assert!(state.is_completed());
        assert!(!state.start());
        assert_eq!(state.next_wait(), None);
    }

    #[test]
    fn execute_before_start_is_noop() {
        let mut state = RunnerState::new(&[website(1, 1)]);
        assert_eq!(state.execute_next(), None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn steps_run_in_order_with_order_derived_waits() {
        let mut state = RunnerState::new(&[website(1, 2), form(2, 1)]);
        assert!(state.start());

        let (idx, wait) = state.next_wait().unwrap();
        assert_eq!(state.steps()[idx].action.id, 2);
        assert_eq!(wait, Duration::from_millis(1000));
        assert_eq!(state.execute_next(), Some(Effect::ShowForm));
        assert!(state.show_form());

        let (idx, wait) = state.next_wait().unwrap();
        assert_eq!(state.steps()[idx].action.id, 1);
        assert_eq!(wait, Duration::from_millis(2000));
        assert_eq!(
            state.execute_next(),
            Some(Effect::OpenUrl("https://a.test/1".to_string()))
        );
        assert!(state.is_completed());
    }

    #[test]
    fn unknown_step_skips_and_continues() {
        let unknown = Action {
            id: 9,
            kind: ActionKind::Unknown("redirect".to_string()),
            url: Some("https://a.test/legacy".to_string()),
            file: None,
            order: Some(1),
            active: true,
            delay: None,
        };
        let mut state = RunnerState::new(&[unknown, website(1, 2)]);
        state.start();
        assert_eq!(state.execute_next(), None);
        assert!(!state.is_completed());
        assert!(state.execute_next().is_some());
        assert!(state.is_completed());
    }

    #[test]
    fn views_resolve_website_and_download() {
        let download = Action {
            id: 3,
            kind: ActionKind::Download,
            url: None,
            file: Some("https://cdn.test/file.pdf".to_string()),
            order: Some(2),
            active: true,
            delay: None,
        };
        let state = RunnerState::new(&[website(1, 1), download]);
        assert!(state.has_actions());
        assert_eq!(state.website_action().map(|a| a.id), Some(1));
        assert_eq!(state.download_action().map(|a| a.id), Some(3));
        assert!(!state.show_form());
    }

    #[test]
    fn inactive_actions_never_appear() {
        let mut inactive = website(1, 1);
        inactive.active = false;
        let state = RunnerState::new(&[inactive]);
        assert!(!state.has_actions());
        assert!(state.website_action().is_none());
    }
}
