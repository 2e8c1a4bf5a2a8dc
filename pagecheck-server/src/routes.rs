use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::Json;
use pagecheck_core::result::CheckResult;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub url: String,
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "pagecheck",
        "uptime_seconds": state.uptime_seconds(),
    }))
}

/// Run one check and return its result. Persistence is best-effort: a
/// failed insert is logged and the client still gets the verdict.
pub async fn check(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CheckRequest>,
) -> ApiResult<Json<CheckResult>> {
    let identity = state.auth.verify(bearer_token(&headers)).await?;

    let result = state.pipeline.run_check(&payload.url).await?;

    if let Some(database) = &state.database {
        // attribution comes from the verified identity only
        let user_id = identity.map(|i| i.id);
        persist(database.clone(), result.clone(), payload.url.clone(), user_id).await;
    }

    Ok(Json(result))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

async fn persist(
    database: std::sync::Arc<std::sync::Mutex<pagecheck_core::data::Database>>,
    result: CheckResult,
    url: String,
    user_id: Option<String>,
) {
    let outcome = tokio::task::spawn_blocking(move || {
        let db = database
            .lock()
            .map_err(|_| anyhow::anyhow!("database mutex poisoned"))?;
        db.insert_check(&result, &url, user_id.as_deref())
            .map_err(anyhow::Error::from)
    })
    .await;

    match outcome {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => warn!("Failed to persist check: {}", e),
        Err(e) => warn!("Persistence task panicked: {}", e),
    }
}
