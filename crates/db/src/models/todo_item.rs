//! Todo item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::patch::double_option;
use todo_core::todo::{validate_description, validate_title};
use todo_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::status::StatusId;

/// A row from the `todo_items` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TodoItem {
    pub id: DbId,
    pub todo_list_id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// See [`TodoItemStatus`](crate::models::status::TodoItemStatus).
    pub status_code: StatusId,
    pub due_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new todo item. Status always starts as not completed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodoItem {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(custom(function = "validate_description"))]
    pub description: Option<String>,
    pub due_at: Option<Timestamp>,
}

/// DTO for partially updating a todo item.
///
/// `description` and `due_at` distinguish an absent key (keep) from an
/// explicit `null` (clear). `title` and `complete` are only applied when
/// present.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTodoItem {
    #[validate(custom(function = "validate_title"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(custom(function = "validate_description"))]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_at: Option<Option<Timestamp>>,
    pub complete: Option<bool>,
}
