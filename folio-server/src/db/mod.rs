//! Database layer - connection pool, schema migrations and repositories
//!
//! Repositories borrow the pool and run one statement per call; unique
//! constraints are left to the database and surface as `DbError::Conflict`.

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
