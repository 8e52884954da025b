//! Repository for the `todo_items` table.
//!
//! Every query is scoped by `todo_list_id` so an item is only reachable
//! through the list that owns it.

use sqlx::PgPool;
use todo_core::pagination::Page;
use todo_core::patch;
use todo_core::types::DbId;

use crate::models::status::TodoItemStatus;
use crate::models::todo_item::{CreateTodoItem, TodoItem, UpdateTodoItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, todo_list_id, title, description, status_code, due_at, created_at, updated_at";

/// Provides CRUD operations for todo items.
pub struct TodoItemRepo;

impl TodoItemRepo {
    /// Insert a new item under `list_id`, returning the created row.
    ///
    /// Returns `None` without inserting if the list does not exist. The
    /// parent row is share-locked for the duration of the insert so a
    /// concurrent list delete cannot leave an orphan behind.
    pub async fn create(
        pool: &PgPool,
        list_id: DbId,
        input: &CreateTodoItem,
    ) -> Result<Option<TodoItem>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let parent: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM todo_lists WHERE id = $1 FOR SHARE")
                .bind(list_id)
                .fetch_optional(&mut *tx)
                .await?;
        if parent.is_none() {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO todo_items (todo_list_id, title, description, status_code, due_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, TodoItem>(&query)
            .bind(list_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(TodoItemStatus::NotCompleted.id())
            .bind(input.due_at)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(list_id, item_id = item.id, "Created todo item");
        Ok(Some(item))
    }

    /// Find an item by ID, only if it belongs to `list_id`.
    pub async fn find_by_id(
        pool: &PgPool,
        list_id: DbId,
        item_id: DbId,
    ) -> Result<Option<TodoItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM todo_items WHERE id = $1 AND todo_list_id = $2");
        sqlx::query_as::<_, TodoItem>(&query)
            .bind(item_id)
            .bind(list_id)
            .fetch_optional(pool)
            .await
    }

    /// One page of the items belonging to `list_id`, in insertion order.
    pub async fn list_by_list(
        pool: &PgPool,
        list_id: DbId,
        page: Page,
    ) -> Result<Vec<TodoItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todo_items
             WHERE todo_list_id = $1
             ORDER BY id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, TodoItem>(&query)
            .bind(list_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Partially update an item.
    ///
    /// `title` and the status derived from `complete` use `COALESCE`, so
    /// they only change when supplied. `description` and `due_at` are
    /// tri-state: absent keeps the column, `Some(None)` clears it.
    /// Returns `None` if no matching item exists under `list_id`.
    pub async fn update(
        pool: &PgPool,
        list_id: DbId,
        item_id: DbId,
        input: &UpdateTodoItem,
    ) -> Result<Option<TodoItem>, sqlx::Error> {
        let (description_provided, description) = patch::split(&input.description);
        let (due_at_provided, due_at) = patch::split(&input.due_at);
        let status = input
            .complete
            .map(|complete| TodoItemStatus::from_completed(complete).id());

        let query = format!(
            "UPDATE todo_items SET
                title = COALESCE($3, title),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                due_at = CASE WHEN $6 THEN $7 ELSE due_at END,
                status_code = COALESCE($8, status_code),
                updated_at = NOW()
             WHERE id = $1 AND todo_list_id = $2
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, TodoItem>(&query)
            .bind(item_id)
            .bind(list_id)
            .bind(&input.title)
            .bind(description_provided)
            .bind(description.map(String::as_str))
            .bind(due_at_provided)
            .bind(due_at.copied())
            .bind(status)
            .fetch_optional(pool)
            .await?;
        if item.is_some() {
            tracing::debug!(list_id, item_id, "Updated todo item");
        }
        Ok(item)
    }

    /// Delete an item under `list_id`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, list_id: DbId, item_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = $1 AND todo_list_id = $2")
            .bind(item_id)
            .bind(list_id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(list_id, item_id, "Deleted todo item");
        }
        Ok(deleted)
    }
}
