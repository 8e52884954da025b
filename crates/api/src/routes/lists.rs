//! Route definitions for the `/lists` resource.
//!
//! Also nests item routes under `/lists/{list_id}/items`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{todo_item, todo_list};
use crate::state::AppState;

/// Routes mounted at `/lists`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{list_id}                     -> get_by_id
/// PUT    /{list_id}                     -> update
/// DELETE /{list_id}                     -> delete
///
/// GET    /{list_id}/items               -> list_by_list
/// POST   /{list_id}/items               -> create
/// GET    /{list_id}/items/{id}          -> get_by_id
/// PUT    /{list_id}/items/{id}          -> update
/// DELETE /{list_id}/items/{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    let item_routes = Router::new()
        .route("/", get(todo_item::list_by_list).post(todo_item::create))
        .route(
            "/{id}",
            get(todo_item::get_by_id)
                .put(todo_item::update)
                .delete(todo_item::delete),
        );

    Router::new()
        .route("/", get(todo_list::list).post(todo_list::create))
        .route(
            "/{list_id}",
            get(todo_list::get_by_id)
                .put(todo_list::update)
                .delete(todo_list::delete),
        )
        .nest("/{list_id}/items", item_routes)
}
