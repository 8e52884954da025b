//! Repository for the `todo_lists` table.

use sqlx::PgPool;
use todo_core::types::DbId;

use crate::models::todo_list::{CreateTodoList, TodoList};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, created_at, updated_at";

/// Provides CRUD operations for todo lists.
pub struct TodoListRepo;

impl TodoListRepo {
    /// Insert a new list, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTodoList) -> Result<TodoList, sqlx::Error> {
        let query = format!(
            "INSERT INTO todo_lists (title, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let list = sqlx::query_as::<_, TodoList>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await?;
        tracing::debug!(list_id = list.id, "Created todo list");
        Ok(list)
    }

    /// Find a list by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TodoList>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todo_lists WHERE id = $1");
        sqlx::query_as::<_, TodoList>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all lists in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<TodoList>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todo_lists ORDER BY id ASC");
        sqlx::query_as::<_, TodoList>(&query).fetch_all(pool).await
    }

    /// Replace a list's title and description.
    ///
    /// Both columns are overwritten; a `None` description clears it.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: &str,
        description: Option<&str>,
    ) -> Result<Option<TodoList>, sqlx::Error> {
        let query = format!(
            "UPDATE todo_lists SET
                title = $2,
                description = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let list = sqlx::query_as::<_, TodoList>(&query)
            .bind(id)
            .bind(title)
            .bind(description)
            .fetch_optional(pool)
            .await?;
        if list.is_some() {
            tracing::debug!(list_id = id, "Updated todo list");
        }
        Ok(list)
    }

    /// Delete a list together with all of its items.
    ///
    /// The list row is locked first so a concurrent item insert either
    /// finishes before the items are removed or observes the list as gone.
    /// Returns `true` if the list existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM todo_lists WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(false);
        }

        let items = sqlx::query("DELETE FROM todo_items WHERE todo_list_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM todo_lists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            list_id = id,
            items_removed = items.rows_affected(),
            "Deleted todo list"
        );
        Ok(true)
    }
}
