use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cardlink(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cardlink").unwrap();
    cmd.arg("--root").arg(dir.path());
    cmd
}

/// Create a card and return its generated id.
fn create_card(dir: &TempDir, name: &str) -> String {
    let output = cardlink(dir)
        .args(["-j", "card", "create", "--name", name])
        .output()
        .unwrap();
    assert!(output.status.success());
    let card: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    card["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Card management
// ---------------------------------------------------------------------------

#[test]
fn create_and_list_cards() {
    let dir = TempDir::new().unwrap();
    let id = create_card(&dir, "Atelier Dupont");
    assert_eq!(id.len(), 24);

    cardlink(&dir)
        .args(["card", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Atelier Dupont"))
        .stdout(predicate::str::contains(&id));
}

#[test]
fn add_action_appears_in_show() {
    let dir = TempDir::new().unwrap();
    let id = create_card(&dir, "x");

    cardlink(&dir)
        .args([
            "card",
            "add-action",
            &id,
            "--kind",
            "website",
            "--url",
            "https://dupont.example",
            "--order",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added action 1"));

    cardlink(&dir)
        .args(["card", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("website"))
        .stdout(predicate::str::contains("https://dupont.example"));
}

#[test]
fn add_action_rejects_unknown_kind() {
    let dir = TempDir::new().unwrap();
    let id = create_card(&dir, "x");

    cardlink(&dir)
        .args(["card", "add-action", &id, "--kind", "redirect"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown action kind"));
}

#[test]
fn remove_action_roundtrip() {
    let dir = TempDir::new().unwrap();
    let id = create_card(&dir, "x");
    cardlink(&dir)
        .args(["card", "add-action", &id, "--kind", "form"])
        .assert()
        .success();

    cardlink(&dir)
        .args(["card", "remove-action", &id, "1"])
        .assert()
        .success();

    cardlink(&dir)
        .args(["card", "remove-action", &id, "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("action not found"));
}

#[test]
fn show_unknown_card_fails() {
    let dir = TempDir::new().unwrap();
    cardlink(&dir)
        .args(["card", "show", "000000000000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("card not found"));
}

// ---------------------------------------------------------------------------
// QR rendering
// ---------------------------------------------------------------------------

#[test]
fn qr_prints_visit_url() {
    let dir = TempDir::new().unwrap();
    let id = create_card(&dir, "x");

    cardlink(&dir)
        .args(["qr", &id, "--base-url", "https://cards.example"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "https://cards.example/visit/{id}"
        )));
}

#[test]
fn qr_for_unknown_card_fails() {
    let dir = TempDir::new().unwrap();
    cardlink(&dir)
        .args(["qr", "000000000000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("card not found"));
}

// ---------------------------------------------------------------------------
// Visit
// ---------------------------------------------------------------------------

#[test]
fn visit_malformed_target_reports_no_actions() {
    let dir = TempDir::new().unwrap();
    cardlink(&dir)
        .args(["visit", "not-a-card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No actions configured."));
}

#[test]
fn visit_dry_run_prints_synthetic_website_schedule() {
    let dir = TempDir::new().unwrap();
    cardlink(&dir)
        .args(["visit", "https%3A%2F%2Fexample.com", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("website"))
        .stdout(predicate::str::contains("1000ms"))
        .stdout(predicate::str::contains("https://example.com"));
}

#[test]
fn visit_unreachable_store_degrades_to_no_actions() {
    let dir = TempDir::new().unwrap();
    cardlink(&dir)
        .args([
            "visit",
            "000000000000000000000000",
            "--store-url",
            "http://127.0.0.1:1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No actions configured."));
}
