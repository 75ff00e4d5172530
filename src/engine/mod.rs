// Coffee catalog engine
// This contains the CRUD service, storage abstraction, and GraphQL API

//! # Engine Module
//!
//! The engine is the layer between the domain models and the external world.
//!
//! ## Engine Components
//!
//! ### Storage Engine (`storage` module)
//! - Abstracts the record store behind a trait
//! - Provides the in-memory implementation the server runs on
//! - Owns the ordering and locking guarantees
//!
//! ### CRUD Service (`service` module)
//! - Assigns identifiers on create
//! - Defines the missing-id semantics (explicit NotFound for update/delete)
//! - Delegates storage to the abstraction above
//!
//! ### GraphQL Engine (`graphql` module)
//! - Provides the GraphQL schema and resolvers
//! - Translates between GraphQL types and domain models
//! - Exposes the five named operations: findAll, findOne, create, update,
//!   delete

pub mod graphql;
pub mod service;
pub mod storage;

// Re-export the main engine types for convenience
pub use graphql::{create_schema, create_schema_with_service, CoffeeSchema};
pub use service::CoffeeService;
pub use storage::{CoffeeStorage, InMemoryStorage};
