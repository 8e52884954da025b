//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `todo_db` and map
//! absence to [`CoreError::NotFound`](todo_core::error::CoreError).

pub mod echo;
pub mod todo_item;
pub mod todo_list;
