//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod todo_item_repo;
pub mod todo_list_repo;

pub use todo_item_repo::TodoItemRepo;
pub use todo_list_repo::TodoListRepo;
