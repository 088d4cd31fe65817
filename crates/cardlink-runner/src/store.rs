use crate::error::RunnerError;
use crate::Result;
use cardlink_core::{Action, CardId};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Wire envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct VisitEnvelope {
    #[serde(rename = "businessCard")]
    business_card: CardPayload,
}

#[derive(Debug, Deserialize)]
struct CardPayload {
    #[serde(rename = "cardConfig", default)]
    card_config: ConfigPayload,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPayload {
    #[serde(default)]
    actions: Vec<Action>,
}

// ---------------------------------------------------------------------------
// StoreClient
// ---------------------------------------------------------------------------

/// Client for the public business-card endpoint of the card store.
#[derive(Debug, Clone)]
pub struct StoreClient {
    base_url: String,
    http: reqwest::Client,
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Fetch a card's configured actions.
    ///
    /// Returns the raw stored list (including inactive entries); filtering
    /// and ordering happen at schedule time.
    pub async fn fetch_card_actions(&self, id: &CardId) -> Result<Vec<Action>> {
        let url = format!(
            "{}/api/public/business-card/{}",
            self.base_url.trim_end_matches('/'),
            id
        );
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RunnerError::Status {
                status,
                id: id.to_string(),
            });
        }
        let envelope: VisitEnvelope = response.json().await?;
        Ok(envelope.business_card.card_config.actions)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
