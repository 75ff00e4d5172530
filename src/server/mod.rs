// Coffee catalog server implementations
// This contains the HTTP server that exposes the engine to clients

//! # Server Module
//!
//! This module contains the server layer that exposes the coffee catalog to
//! external clients. The server sits on top of the engine layer:
//!
//! ```text
//! Client (Any Language)
//!        ↓ HTTP/GraphQL
//! Server Layer (this module) ← Axum HTTP server, GraphQL endpoint
//!        ↓ Function calls
//! Engine Layer ← GraphQL schema, CRUD service, storage abstraction
//!        ↓ Function calls
//! Domain Layer ← Coffee record, Size enumeration
//! ```
//!
//! ## Server Type
//!
//! ### GraphQL Server (`graphql` module)
//! - HTTP server with a GraphQL endpoint at `/graphql`
//! - Built on the Axum web framework
//! - Provides a GraphiQL interface at `/` for development
//! - Handles CORS for browser access
//! - Health check at `/health`

/// GraphQL HTTP server implementation
pub mod graphql;

// Re-export the server types for easy access
pub use graphql::{GraphQLServer, GraphQLServerBuilder, GraphQLServerConfig};
