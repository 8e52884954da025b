use axum::routing::get;
use axum::Router;

use crate::handlers::echo;
use crate::state::AppState;

/// Mount the echo route (`GET /echo?message=&name=`).
pub fn router() -> Router<AppState> {
    Router::new().route("/echo", get(echo::echo))
}
