//! Handlers for todo items.
//!
//! Items are nested under lists:
//! `/lists/{list_id}/items[/{id}]`
//!
//! Every lookup is scoped by the list id in the path, so an item id that
//! exists under a different list is reported as not found.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use todo_core::error::CoreError;
use todo_core::types::DbId;
use todo_db::models::todo_item::{CreateTodoItem, TodoItem, UpdateTodoItem};
use todo_db::repositories::TodoItemRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::PaginationParams;
use crate::response::Empty;
use crate::state::AppState;

/// GET /lists/{list_id}/items?page=&per_page=
///
/// An unknown list has no items, so it yields an empty page.
pub async fn list_by_list(
    State(state): State<AppState>,
    Path(list_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<TodoItem>>> {
    let items = TodoItemRepo::list_by_list(&state.pool, list_id, params.page()).await?;
    Ok(Json(items))
}

/// POST /lists/{list_id}/items
pub async fn create(
    State(state): State<AppState>,
    Path(list_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateTodoItem>,
) -> AppResult<(StatusCode, Json<TodoItem>)> {
    let item = TodoItemRepo::create(&state.pool, list_id, &input)
        .await?
        .ok_or_else(|| list_not_found(list_id))?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /lists/{list_id}/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((list_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<TodoItem>> {
    let item = TodoItemRepo::find_by_id(&state.pool, list_id, id)
        .await?
        .ok_or_else(|| item_not_found(id))?;
    Ok(Json(item))
}

/// PUT /lists/{list_id}/items/{id}
///
/// Partial update: only supplied fields change. `description` and `due_at`
/// may be set to `null` to clear them.
pub async fn update(
    State(state): State<AppState>,
    Path((list_id, id)): Path<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<UpdateTodoItem>,
) -> AppResult<Json<TodoItem>> {
    let item = TodoItemRepo::update(&state.pool, list_id, id, &input)
        .await?
        .ok_or_else(|| item_not_found(id))?;
    Ok(Json(item))
}

/// DELETE /lists/{list_id}/items/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((list_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Empty>> {
    let deleted = TodoItemRepo::delete(&state.pool, list_id, id).await?;
    if deleted {
        Ok(Json(Empty::default()))
    } else {
        Err(item_not_found(id))
    }
}

fn list_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Todo list",
        id,
    })
}

fn item_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Todo item",
        id,
    })
}
