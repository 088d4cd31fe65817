use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use cardlink_core::{Action, BusinessCard, CardId, CardlinkError};

/// GET /api/cards — summary list of all cards.
pub async fn list_cards(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let cards = BusinessCard::list(&root)?;
        let list: Vec<serde_json::Value> = cards
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.id,
                    "name": c.name,
                    "actionCount": c.card_config.actions.len(),
                    "updatedAt": c.updated_at,
                })
            })
            .collect();
        Ok::<_, CardlinkError>(serde_json::json!(list))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct CreateCardBody {
    pub name: String,
}

/// POST /api/cards — create a card with a freshly generated id.
pub async fn create_card(
    State(app): State<AppState>,
    Json(body): Json<CreateCardBody>,
) -> Result<Json<BusinessCard>, AppError> {
    let root = app.root.clone();
    let card = tokio::task::spawn_blocking(move || BusinessCard::create(&root, body.name))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    tracing::info!(card = %card.id, "created card");
    Ok(Json(card))
}

/// GET /api/cards/:id — full card record.
pub async fn get_card(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BusinessCard>, AppError> {
    let root = app.root.clone();
    let card = tokio::task::spawn_blocking(move || {
        let id = CardId::parse(&id)?;
        BusinessCard::load(&root, &id)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(card))
}

#[derive(serde::Deserialize)]
pub struct ReplaceActionsBody {
    pub actions: Vec<Action>,
}

/// PUT /api/cards/:id/actions — replace the card's action list.
pub async fn replace_actions(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ReplaceActionsBody>,
) -> Result<Json<BusinessCard>, AppError> {
    let root = app.root.clone();
    let card = tokio::task::spawn_blocking(move || {
        let id = CardId::parse(&id)?;
        let mut card = BusinessCard::load(&root, &id)?;
        card.replace_actions(body.actions);
        card.save(&root)?;
        Ok::<_, CardlinkError>(card)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(card))
}

/// DELETE /api/cards/:id — remove a card.
pub async fn delete_card(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    tokio::task::spawn_blocking(move || {
        let id = CardId::parse(&id)?;
        BusinessCard::delete(&root, &id)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({ "deleted": true })))
}
