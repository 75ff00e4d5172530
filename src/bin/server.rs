// Coffee Catalog - GraphQL server binary
// Run with: cargo run --bin server

//! # Coffee Catalog Server Binary
//!
//! This is the executable that starts the coffee catalog HTTP server. It
//! wires all the pieces together:
//!
//! ```text
//! main() function
//!   ↓ builds
//! GraphQLServerBuilder
//!   ↓ creates
//! HTTP Server (Axum)
//!   ↓ serves
//! GraphQL Schema (findAll, findOne, create, update, delete)
//!   ↓ resolves via
//! CoffeeService → InMemoryStorage (seeded with 3 records)
//! ```
//!
//! Once running, visit http://localhost:4000 for the GraphiQL interface or
//! POST GraphQL documents to http://localhost:4000/graphql.

use coffee_catalog::GraphQLServerBuilder;
use dotenv::dotenv;
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file - it's optional
    if dotenv().is_err() {
        eprintln!("Warning: no .env file found, using process environment only");
    }

    // Initialize structured logging for the application
    tracing_subscriber::fmt::init();

    info!("🚀 Starting Coffee Catalog Server...");

    let server_port = env::var("SERVER_PORT")
        .unwrap_or_else(|_| "4000".to_string())
        .parse::<u16>()
        .unwrap_or(4000);

    info!("Server port: {}", server_port);

    GraphQLServerBuilder::new()
        .with_port(server_port)
        .build_and_run()
        .await
}
