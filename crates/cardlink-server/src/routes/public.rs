use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use cardlink_core::{BusinessCard, CardId, CardlinkError};

/// GET /api/public/business-card/:id — the visit-time configuration fetch.
///
/// Wraps the card in the `businessCard` envelope the runner expects.
pub async fn get_business_card(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let id = CardId::parse(&id)?;
        let card = BusinessCard::load(&root, &id)?;
        Ok::<_, CardlinkError>(serde_json::json!({ "businessCard": card }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
