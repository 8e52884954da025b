use axum::extract::Query;
use axum::Json;
use serde::Serialize;

use crate::query::EchoParams;

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    #[serde(rename = "Message")]
    pub message: String,
}

/// GET /echo?message=&name=
pub async fn echo(Query(params): Query<EchoParams>) -> Json<EchoResponse> {
    Json(EchoResponse {
        message: format!("{} {}!", params.message, params.name),
    })
}
