use crate::action::Action;
use crate::error::{CardlinkError, Result};
use crate::visit::CardId;
use crate::{io, paths};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// CardConfig
// ---------------------------------------------------------------------------

/// The embedded lead-capture configuration of a business card.
///
/// Field names are camelCase so the persisted record matches the public wire
/// envelope (`cardConfig.actions`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Counter backing action-id uniqueness within this configuration.
    #[serde(default = "default_next_action_id")]
    pub next_action_id: u32,
}

fn default_next_action_id() -> u32 {
    1
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            next_action_id: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// BusinessCard
// ---------------------------------------------------------------------------

/// A persisted business-card record: identity plus its action configuration.
/// Read-only at visit time; only the owner-facing CLI and API mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCard {
    pub id: CardId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub card_config: CardConfig,
}

impl BusinessCard {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CardId::generate(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            card_config: CardConfig::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    pub fn create(root: &Path, name: impl Into<String>) -> Result<Self> {
        let card = Self::new(name);
        let path = paths::card_path(root, &card.id);
        if path.exists() {
            return Err(CardlinkError::CardExists(card.id.to_string()));
        }
        card.save(root)?;
        Ok(card)
    }

    pub fn load(root: &Path, id: &CardId) -> Result<Self> {
        let path = paths::card_path(root, id);
        if !path.exists() {
            return Err(CardlinkError::CardNotFound(id.to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let card: BusinessCard = serde_yaml::from_str(&data)?;
        Ok(card)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::card_path(root, &self.id);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&path, data.as_bytes())
    }

    pub fn delete(root: &Path, id: &CardId) -> Result<()> {
        let path = paths::card_path(root, id);
        if !path.exists() {
            return Err(CardlinkError::CardNotFound(id.to_string()));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }

    /// List all cards under `root`, sorted by name.
    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let dir = paths::cards_dir(root);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut cards = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let data = std::fs::read_to_string(&path)?;
            cards.push(serde_yaml::from_str::<BusinessCard>(&data)?);
        }
        cards.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cards)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append an action, assigning it the next unique id within this card.
    pub fn add_action(&mut self, mut action: Action) -> u32 {
        let id = self.card_config.next_action_id;
        action.id = id;
        self.card_config.next_action_id += 1;
        self.card_config.actions.push(action);
        self.updated_at = Utc::now();
        id
    }

    pub fn remove_action(&mut self, action_id: u32) -> Result<()> {
        let before = self.card_config.actions.len();
        self.card_config.actions.retain(|a| a.id != action_id);
        if self.card_config.actions.len() == before {
            return Err(CardlinkError::ActionNotFound(action_id));
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Replace the whole action list, re-assigning ids to keep them unique.
    pub fn replace_actions(&mut self, actions: Vec<Action>) {
        self.card_config.actions.clear();
        for action in actions {
            self.add_action(action);
        }
        self.updated_at = Utc::now();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
