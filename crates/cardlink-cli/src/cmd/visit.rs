use crate::output::print_table;
use anyhow::Result;
use cardlink_core::{RunnerState, VisitTarget};
use cardlink_runner::{resolve_actions, StoreClient, SystemBrowser};
use std::path::Path;

/// Simulate a visitor opening a QR link: resolve the target, fetch or
/// synthesize the action list, and execute the sequence with the system
/// browser. `--dry-run` prints the schedule without executing anything.
pub fn run(_root: &Path, target: &str, store_url: &str, dry_run: bool) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let store = StoreClient::new(store_url);

        let actions = match VisitTarget::parse(target) {
            Ok(t) => resolve_actions(&t, &store).await,
            Err(e) => {
                tracing::warn!(error = %e, "unusable visit target");
                Vec::new()
            }
        };

        let mut state = RunnerState::new(&actions);
        if !state.has_actions() {
            println!("No actions configured.");
            return Ok(());
        }

        if dry_run {
            print_schedule(&state);
            return Ok(());
        }

        let summary = cardlink_runner::run(&mut state, &SystemBrowser).await;
        println!(
            "Sequence completed: {} executed, {} skipped.",
            summary.executed, summary.skipped
        );
        if state.show_form() {
            println!("Contact form shown.");
        }
        Ok(())
    })
}

fn print_schedule(state: &RunnerState) {
    let rows: Vec<Vec<String>> = state
        .steps()
        .iter()
        .map(|s| {
            vec![
                s.order.to_string(),
                s.action.kind.to_string(),
                format!("{}ms", s.wait.as_millis()),
                s.action
                    .url
                    .clone()
                    .or_else(|| s.action.file.clone())
                    .unwrap_or_default(),
            ]
        })
        .collect();
    print_table(&["ORDER", "KIND", "WAIT", "TARGET"], rows);
}
