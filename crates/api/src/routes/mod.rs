pub mod echo;
pub mod health;
pub mod lists;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                  service + database health
/// /echo?message=&name=                     echo greeting
///
/// /lists                                   list, create
/// /lists/{id}                              get, replace, delete
/// /lists/{list_id}/items?page=&per_page=   list (paginated), create
/// /lists/{list_id}/items/{id}              get, partial update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(echo::router())
        .nest("/lists", lists::router())
}
