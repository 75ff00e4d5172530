// Coffee Catalog - a minimal GraphQL CRUD service
// An in-memory coffee record store exposed through five GraphQL operations

//! # Coffee Catalog Library
//!
//! This is the library crate for the coffee catalog, a small GraphQL API
//! exposing CRUD operations over an in-memory collection of coffee records.
//! This file serves as the **library root** and defines the public API.
//!
//! ## Core Components
//!
//! ### Domain Models
//! - [`Coffee`]: a single catalog entry (id, name, size)
//! - [`Size`]: the closed set of drink sizes (SHORT, TALL, GRANDE, VENTI)
//!
//! ### Engine
//! - [`CoffeeStorage`] / [`InMemoryStorage`]: the record store - an ordered,
//!   lock-guarded in-memory sequence seeded with three records at startup
//! - [`CoffeeService`]: the CRUD service - assigns ids on create and defines
//!   the NotFound semantics for update/delete on missing ids
//! - GraphQL schema ([`CoffeeSchema`]): findAll, findOne, create, update,
//!   delete
//!
//! ### Server
//! - [`GraphQLServerBuilder`]: Axum HTTP server with GraphiQL, CORS, and a
//!   health check
//!
//! ## Rust Learning Notes:
//!
//! ### Module System
//! Each `pub mod` declaration below pulls in a directory with a `mod.rs`
//! root. The `pub use` statements re-export the important types so users can
//! write `use coffee_catalog::Coffee` instead of navigating the hierarchy.

// Core domain models
pub mod models;

// Engine: storage, CRUD service, GraphQL schema
pub mod engine;

// Server: Axum HTTP server and GraphQL endpoint
pub mod server;

// Re-export core domain types for easy access
pub use models::{Coffee, Size};

// Re-export engine types for convenience
pub use engine::{
    create_schema, create_schema_with_service, CoffeeSchema, CoffeeService, CoffeeStorage,
    InMemoryStorage,
};

// Re-export server types for convenience
pub use server::{GraphQLServer, GraphQLServerBuilder, GraphQLServerConfig};

// Core error types
// Using the `thiserror` crate to make error handling easier
use thiserror::Error;

/// Custom error types for coffee catalog operations
///
/// The catalog has exactly one meaningful domain error: a lookup by id that
/// finds nothing where the operation requires a match. Read lookups never
/// produce it - `find_one` expresses absence as `Ok(None)` - but `update`
/// and `delete` on a missing id fail with [`CoffeeError::NotFound`] so the
/// caller gets a distinguishable error rather than a null.
///
/// ## Rust Learning Notes:
///
/// ### The `thiserror` Crate
/// - `#[derive(Error)]` implements the `std::error::Error` trait
/// - `#[error("...")]` provides the human-readable message
/// - `{field}` in messages interpolates the variant's fields
#[derive(Error, Debug)]
pub enum CoffeeError {
    /// No record has the requested id (update/delete on a missing id)
    #[error("Coffee not found: {id}")]
    NotFound { id: i32 },

    /// The storage backend failed (e.g. a poisoned lock)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid input crossed the API boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Type alias for Results that use our custom error type
///
/// Instead of writing `std::result::Result<Coffee, CoffeeError>` everywhere,
/// we can just write `Result<Coffee>`.
pub type Result<T> = std::result::Result<T, CoffeeError>;
