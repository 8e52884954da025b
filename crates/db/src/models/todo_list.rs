//! Todo list entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::todo::{validate_description, validate_title};
use todo_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `todo_lists` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TodoList {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new todo list.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodoList {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(custom(function = "validate_description"))]
    pub description: Option<String>,
}

/// DTO for replacing a todo list.
///
/// `title` is optional at the JSON level only so the handler can report a
/// missing title with its own status; the repository always receives one.
/// An absent `description` clears the stored value.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTodoList {
    #[validate(custom(function = "validate_title"))]
    pub title: Option<String>,
    #[validate(custom(function = "validate_description"))]
    pub description: Option<String>,
}
