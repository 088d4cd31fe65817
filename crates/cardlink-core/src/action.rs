use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Wait unit for the position-derived delay policy: the step at effective
/// order `n` waits `n * BASE_DELAY` before executing.
pub const BASE_DELAY: Duration = Duration::from_millis(1000);

// ---------------------------------------------------------------------------
// ActionKind
// ---------------------------------------------------------------------------

/// Kind tag of a configured lead-capture step.
///
/// Stored as a plain string; any tag that isn't one of the three live kinds
/// (including the legacy `redirect` still present in old configurations)
/// deserializes to `Unknown` and is skipped at run time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionKind {
    Website,
    Form,
    Download,
    Unknown(String),
}

impl ActionKind {
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Website => "website",
            ActionKind::Form => "form",
            ActionKind::Download => "download",
            ActionKind::Unknown(tag) => tag,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ActionKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "website" => ActionKind::Website,
            "form" => ActionKind::Form,
            "download" => ActionKind::Download,
            _ => ActionKind::Unknown(tag),
        }
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        kind.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// One configured step in a card's lead-capture sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based position. Missing values default to list index + 1 at
    /// schedule time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    pub active: bool,
    /// Stored per-step delay in milliseconds. Inert: scheduling derives the
    /// wait from `order`, never from this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
}

impl Action {
    /// The side effect executing this action produces, if any.
    ///
    /// `None` means the step is a logged skip: an unknown kind, or a
    /// website/download step missing its payload location.
    pub fn effect(&self) -> Option<Effect> {
        match &self.kind {
            ActionKind::Website => self.url.clone().map(Effect::OpenUrl),
            ActionKind::Download => self
                .file
                .clone()
                .or_else(|| self.url.clone())
                .map(Effect::OpenUrl),
            ActionKind::Form => Some(Effect::ShowForm),
            ActionKind::Unknown(_) => None,
        }
    }
}

/// Side effect of an executed step, performed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the URL in a new browsing context (website visit or download).
    OpenUrl(String),
    /// Flip the presentation layer's contact-form flag.
    ShowForm,
}

// ---------------------------------------------------------------------------
// Scheduling
// ---------------------------------------------------------------------------

/// An active action with its effective order and pre-execution wait resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledAction {
    pub action: Action,
    /// Effective 1-based order (stored `order`, or list index + 1).
    pub order: u32,
    /// Wait paid before this step executes: `order * base`.
    pub wait: Duration,
}

/// Resolve a configured action list into its execution schedule.
///
/// Drops inactive entries, defaults missing `order` to list index + 1, and
/// stable-sorts ascending by order so ties keep configuration order.
pub fn schedule(actions: &[Action]) -> Vec<ScheduledAction> {
    schedule_with_base(actions, BASE_DELAY)
}

pub fn schedule_with_base(actions: &[Action], base: Duration) -> Vec<ScheduledAction> {
    // Filter before enumerating: default orders count surviving entries only.
    let mut steps: Vec<ScheduledAction> = actions
        .iter()
        .filter(|a| a.active)
        .enumerate()
        .map(|(idx, a)| {
            let order = a.order.unwrap_or(idx as u32 + 1);
            ScheduledAction {
                action: a.clone(),
                order,
                wait: base * order,
            }
        })
        .collect();
    steps.sort_by_key(|s| s.order);
    steps
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
