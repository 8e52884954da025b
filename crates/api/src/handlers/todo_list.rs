//! Handlers for the `/lists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use todo_core::error::CoreError;
use todo_core::todo::TITLE_REQUIRED_MESSAGE;
use todo_core::types::DbId;
use todo_db::models::todo_list::{CreateTodoList, TodoList, UpdateTodoList};
use todo_db::repositories::TodoListRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::Empty;
use crate::state::AppState;

/// GET /lists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TodoList>>> {
    let lists = TodoListRepo::list(&state.pool).await?;
    Ok(Json(lists))
}

/// POST /lists
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTodoList>,
) -> AppResult<(StatusCode, Json<TodoList>)> {
    let list = TodoListRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// GET /lists/{list_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TodoList>> {
    let list = TodoListRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Todo list",
            id,
        }))?;
    Ok(Json(list))
}

/// PUT /lists/{list_id}
///
/// Replaces title and description. The title is required; the missing-title
/// check runs before the existence check.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTodoList>,
) -> AppResult<Json<TodoList>> {
    let Some(title) = input.title.as_deref() else {
        return Err(missing_title(&state));
    };

    let list = TodoListRepo::update(&state.pool, id, title, input.description.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Todo list",
            id,
        }))?;
    Ok(Json(list))
}

/// DELETE /lists/{list_id}
///
/// Removes the list and every item it owns.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Empty>> {
    let deleted = TodoListRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(Empty::default()))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Todo list",
            id,
        }))
    }
}

/// Error for a list update without a title: 400, or 401 in legacy mode.
fn missing_title(state: &AppState) -> AppError {
    let message = TITLE_REQUIRED_MESSAGE.to_string();
    if state.config.legacy_missing_title_401 {
        AppError::Core(CoreError::Unauthorized(message))
    } else {
        AppError::Core(CoreError::Validation(message))
    }
}
