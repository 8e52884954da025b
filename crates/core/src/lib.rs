//! Domain primitives shared by the database and HTTP crates.
//!
//! Nothing in here performs I/O: scalar aliases, the domain error enum,
//! field limits, item status codes, pagination math and the tri-state
//! patch deserializer.

pub mod error;
pub mod pagination;
pub mod patch;
pub mod todo;
pub mod types;
