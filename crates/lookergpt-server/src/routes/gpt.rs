//! Gpt Routes - Completion proxy
//!
//! The status code is 200 whenever the upstream produced a status, even a
//! failing one; the failure shows up as the reply text. The query string is
//! decoded as raw pairs so a repeated `query` key still gets a JSON reply.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::models::{GptParams, GptReply};
use crate::AppState;

/// Turn a question into a reporting URL
#[utoipa::path(
    get,
    path = "/api/gpt",
    params(GptParams),
    responses(
        (status = 200, description = "Model reply, or the upstream status text if the completion API failed", body = GptReply),
        (status = 502, description = "Completion API unreachable or returned an unreadable body", body = GptReply)
    ),
    tag = "Proxy"
)]
pub async fn ask_gpt(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<GptReply>, (StatusCode, Json<GptReply>)> {
    let query: lookergpt::Query = GptParams::from_pairs(pairs).into();

    let reply = state.proxy.ask(&query).await.map_err(|e| {
        tracing::error!("Completion call failed: {}", e);
        (
            StatusCode::BAD_GATEWAY,
            Json(GptReply {
                reply: e.to_string(),
            }),
        )
    })?;

    Ok(Json(reply.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/gpt", get(ask_gpt))
}
