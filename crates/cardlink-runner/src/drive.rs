use crate::browser::Browser;
use crate::store::StoreClient;
use cardlink_core::{Action, Effect, RunnerState, VisitTarget};
use tracing::{debug, info, warn};

// ─── RunSummary ───────────────────────────────────────────────────────────

/// Counts from one drive of a visit sequence.
///
/// A re-drive of an already-started state returns the zero summary: the
/// one-shot latch holds and nothing executes twice.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: u32,
    pub skipped: u32,
}

// ─── Action resolution ────────────────────────────────────────────────────

/// Resolve a visit target into the action list the runner will execute.
///
/// Direct-URL targets become their single synthetic website action. Card
/// targets are fetched from the store; any fetch failure degrades to an
/// empty list so the visit page shows "no actions configured" instead of
/// erroring.
pub async fn resolve_actions(target: &VisitTarget, store: &StoreClient) -> Vec<Action> {
    match target {
        VisitTarget::Url(_) => target.synthetic_action().into_iter().collect(),
        VisitTarget::Card(id) => match store.fetch_card_actions(id).await {
            Ok(actions) => actions,
            Err(e) => {
                warn!(card = %id, error = %e, "failed to fetch card configuration");
                Vec::new()
            }
        },
    }
}

// ─── Driving ──────────────────────────────────────────────────────────────

/// Drive a sequence to completion: start the machine, then for each step
/// await its position-derived delay, execute it, and perform the effect.
///
/// Steps run strictly one at a time. A blocked or failing browser open is
/// logged and never retried; the sequence continues regardless.
pub async fn run(state: &mut RunnerState, browser: &impl Browser) -> RunSummary {
    let mut summary = RunSummary::default();

    if !state.start() {
        if state.has_actions() {
            debug!("sequence already started; ignoring");
        } else {
            debug!("no actions configured");
        }
        return summary;
    }

    while let Some((index, wait)) = state.next_wait() {
        let (action_id, kind) = {
            let step = &state.steps()[index];
            (step.action.id, step.action.kind.clone())
        };

        tokio::time::sleep(wait).await;

        match state.execute_next() {
            Some(Effect::OpenUrl(url)) => {
                info!(action = action_id, kind = %kind, %url, "opening browsing context");
                if let Err(e) = browser.open(&url) {
                    warn!(action = action_id, error = %e, "browser open failed; continuing");
                }
                summary.executed += 1;
            }
            Some(Effect::ShowForm) => {
                info!(action = action_id, "showing contact form");
                summary.executed += 1;
            }
            None => {
                warn!(action = action_id, kind = %kind, "skipping step with no executable effect");
                summary.skipped += 1;
            }
        }
    }

    summary
}

/// Full visit flow: parse the raw path segment, resolve actions, and drive
/// the sequence. A malformed target degrades to an empty sequence.
pub async fn run_visit(
    raw_target: &str,
    store: &StoreClient,
    browser: &impl Browser,
) -> (RunnerState, RunSummary) {
    let actions = match VisitTarget::parse(raw_target) {
        Ok(target) => resolve_actions(&target, store).await,
        Err(e) => {
            warn!(target = raw_target, error = %e, "unusable visit target");
            Vec::new()
        }
    };

    let mut state = RunnerState::new(&actions);
    let summary = run(&mut state, browser).await;
    (state, summary)
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use cardlink_core::ActionKind;
    use std::io;
    use std::sync::Mutex;
    use tokio::time::Instant;

    /// Records every open together with the virtual time it happened at.
    #[derive(Default)]
    struct RecordingBrowser {
        opened: Mutex<Vec<(String, Instant)>>,
        fail: bool,
    }

    impl RecordingBrowser {
        fn failing() -> Self {
            Self {
                opened: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn opened(&self) -> Vec<(String, Instant)> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl Browser for RecordingBrowser {
        fn open(&self, url: &str) -> io::Result<()> {
            self.opened
                .lock()
                .unwrap()
                .push((url.to_string(), Instant::now()));
            if self.fail {
                Err(io::Error::other("popup blocked"))
            } else {
                Ok(())
            }
        }
    }

    fn action(id: u32, kind: &str, order: u32, url: Option<&str>) -> Action {
        Action {
            id,
            kind: ActionKind::from(kind.to_string()),
            url: url.map(str::to_string),
            file: None,
            order: Some(order),
            active: true,
            delay: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn waits_accumulate_from_order() {
        // form at order 1 fires at 1s, website at order 2 at 1s + 2s.
        let actions = vec![
            action(1, "website", 2, Some("https://a.test")),
            action(2, "form", 1, None),
        ];
        let mut state = RunnerState::new(&actions);
        let browser = RecordingBrowser::default();
        let start = Instant::now();

        let summary = run(&mut state, &browser).await;

        assert_eq!(summary, RunSummary { executed: 2, skipped: 0 });
        assert!(state.is_completed());
        assert!(state.show_form());

        let opened = browser.opened();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].0, "https://a.test");
        assert_eq!((opened[0].1 - start).as_millis(), 3000);
    }

    #[tokio::test(start_paused = true)]
    async fn stored_delay_field_is_ignored() {
        let mut a = action(1, "website", 1, Some("https://a.test"));
        a.delay = Some(60_000);
        let mut state = RunnerState::new(&[a]);
        let browser = RecordingBrowser::default();
        let start = Instant::now();

        run(&mut state, &browser).await;

        let opened = browser.opened();
        assert_eq!((opened[0].1 - start).as_millis(), 1000);
    }

    #[tokio::test(start_paused = true)]
    async fn second_run_is_a_noop() {
        let actions = vec![action(1, "website", 1, Some("https://a.test"))];
        let mut state = RunnerState::new(&actions);
        let browser = RecordingBrowser::default();

        let first = run(&mut state, &browser).await;
        let second = run(&mut state, &browser).await;

        assert_eq!(first.executed, 1);
        assert_eq!(second, RunSummary::default());
        assert_eq!(browser.opened().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn blocked_browser_does_not_stop_the_sequence() {
        let actions = vec![
            action(1, "website", 1, Some("https://a.test")),
            action(2, "download", 2, Some("https://b.test")),
        ];
        let mut state = RunnerState::new(&actions);
        let browser = RecordingBrowser::failing();

        let summary = run(&mut state, &browser).await;

        assert_eq!(summary.executed, 2);
        assert_eq!(browser.opened().len(), 2);
        assert!(state.is_completed());
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_kind_is_counted_as_skip() {
        let actions = vec![
            action(1, "redirect", 1, Some("https://legacy.test")),
            action(2, "form", 2, None),
        ];
        let mut state = RunnerState::new(&actions);
        let browser = RecordingBrowser::default();

        let summary = run(&mut state, &browser).await;

        assert_eq!(summary, RunSummary { executed: 1, skipped: 1 });
        assert!(browser.opened().is_empty());
        assert!(state.show_form());
    }

    #[tokio::test(start_paused = true)]
    async fn no_active_actions_completes_immediately() {
        let mut off = action(1, "website", 1, Some("https://a.test"));
        off.active = false;
        let mut state = RunnerState::new(&[off]);
        let browser = RecordingBrowser::default();
        let start = Instant::now();

        let summary = run(&mut state, &browser).await;

        assert_eq!(summary, RunSummary::default());
        assert!(state.is_completed());
        assert!(!state.has_actions());
        assert_eq!((Instant::now() - start).as_millis(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn run_visit_synthesizes_website_from_encoded_url() {
        let store = StoreClient::new("http://127.0.0.1:1");
        let browser = RecordingBrowser::default();
        let start = Instant::now();

        let (state, summary) =
            run_visit("https%3A%2F%2Fexample.com", &store, &browser).await;

        assert_eq!(summary.executed, 1);
        assert!(state.is_completed());
        let opened = browser.opened();
        assert_eq!(opened[0].0, "https://example.com/");
        assert_eq!((opened[0].1 - start).as_millis(), 1000);
    }

    #[tokio::test]
    async fn resolve_actions_fetch_failure_degrades_to_empty() {
        // Nothing listens on port 1; the refused connection must degrade
        // silently to "no actions configured".
        let store = StoreClient::new("http://127.0.0.1:1");
        let target = VisitTarget::parse("000000000000000000000000").unwrap();
        let actions = resolve_actions(&target, &store).await;
        assert!(actions.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn run_visit_malformed_target_degrades_to_no_actions() {
        let store = StoreClient::new("http://127.0.0.1:1");
        let browser = RecordingBrowser::default();

        let (state, summary) = run_visit("not-a-card", &store, &browser).await;

        assert_eq!(summary, RunSummary::default());
        assert!(!state.has_actions());
        assert!(state.is_completed());
        assert!(browser.opened().is_empty());
    }
}
