use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::models::Activity;
use crate::services::activity_service::{self, ActivityError};
use crate::store::SharedRegistry;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn list_activities_handler(
    State(registry): State<SharedRegistry>,
) -> Json<HashMap<String, Activity>> {
    Json(activity_service::list_activities(&registry).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activity_service::signup(&registry, &activity_name, &query.email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "signup rejected");
            error_response(e)
        })?;

    Ok(Json(json!({
        "message": format!("Signed up {} for {}", query.email, activity_name)
    })))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(registry): State<SharedRegistry>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activity_service::unregister(&registry, &activity_name, &query.email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "unregister rejected");
            error_response(e)
        })?;

    Ok(Json(json!({
        "message": format!("Unregistered {} from {}", query.email, activity_name)
    })))
}

// Unknown activity and unknown participant both surface as 404; only the
// detail text tells them apart.
fn error_response(err: ActivityError) -> (StatusCode, Json<Value>) {
    let status = match err {
        ActivityError::ActivityNotFound | ActivityError::NotSignedUp => StatusCode::NOT_FOUND,
        ActivityError::AlreadySignedUp => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "detail": err.to_string() })))
}
