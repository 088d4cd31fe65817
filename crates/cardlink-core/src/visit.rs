use crate::action::{Action, ActionKind};
use crate::error::{CardlinkError, Result};
use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// CardId
// ---------------------------------------------------------------------------

static CARD_ID_RE: OnceLock<Regex> = OnceLock::new();

fn card_id_re() -> &'static Regex {
    CARD_ID_RE.get_or_init(|| Regex::new(r"^[0-9a-f]{24}$").unwrap())
}

/// Identifier of a persisted business card: 24 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId(String);

impl CardId {
    pub fn parse(raw: &str) -> Result<Self> {
        if card_id_re().is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(CardlinkError::InvalidCardId(raw.to_string()))
        }
    }

    /// Generate a random id (12 random bytes, hex-encoded).
    pub fn generate() -> Self {
        use rand::Rng;
        let bytes: [u8; 12] = rand::thread_rng().gen();
        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CardId {
    type Error = CardlinkError;

    fn try_from(value: String) -> Result<Self> {
        CardId::parse(&value)
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.0
    }
}

// ---------------------------------------------------------------------------
// VisitTarget
// ---------------------------------------------------------------------------

/// What a visit URL's path segment resolves to: either a stored card
/// configuration or a percent-encoded absolute URL to open directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitTarget {
    Card(CardId),
    Url(String),
}

impl VisitTarget {
    /// Parse a raw visit path segment.
    ///
    /// A 24-hex-character segment is a card id; anything else is
    /// percent-decoded and must parse as an absolute http(s) URL.
    pub fn parse(raw: &str) -> Result<Self> {
        if let Ok(id) = CardId::parse(raw) {
            return Ok(VisitTarget::Card(id));
        }

        let decoded = percent_decode_str(raw).decode_utf8_lossy();
        match url::Url::parse(&decoded) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => {
                Ok(VisitTarget::Url(u.to_string()))
            }
            _ => Err(CardlinkError::InvalidVisitTarget(raw.to_string())),
        }
    }

    /// Turn a direct-URL target into its single synthetic website action.
    /// Card targets have no synthetic action; their list comes from the store.
    pub fn synthetic_action(&self) -> Option<Action> {
        match self {
            VisitTarget::Url(url) => Some(Action {
                id: 1,
                kind: ActionKind::Website,
                url: Some(url.clone()),
                file: None,
                order: Some(1),
                active: true,
                delay: None,
            }),
            VisitTarget::Card(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
