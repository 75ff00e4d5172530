// GraphQL server implementation for the coffee catalog
// This creates a standalone GraphQL server over the seeded in-memory store

use std::sync::Arc;

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router, Server,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::engine::{
    graphql::create_schema_with_service,
    service::CoffeeService,
    storage::{CoffeeStorage, InMemoryStorage},
    CoffeeSchema,
};

/// GraphQL server configuration
#[derive(Clone)]
pub struct GraphQLServerConfig {
    pub port: u16,
    pub cors_enabled: bool,
}

impl Default for GraphQLServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            cors_enabled: true,
        }
    }
}

/// GraphQL server
///
/// Owns the store for the process lifetime: the store is created here (or
/// injected via [`GraphQLServer::with_storage`]), handed to the service, and
/// dropped when the server shuts down. No static state anywhere.
pub struct GraphQLServer {
    config: GraphQLServerConfig,
    storage: Arc<dyn CoffeeStorage>,
}

impl GraphQLServer {
    /// Create a server over the seeded default store
    pub fn new() -> Self {
        Self {
            config: GraphQLServerConfig::default(),
            storage: Arc::new(InMemoryStorage::seeded()),
        }
    }

    pub fn with_config(mut self, config: GraphQLServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the backing store (e.g. an empty one for tests)
    pub fn with_storage(mut self, storage: Arc<dyn CoffeeStorage>) -> Self {
        self.storage = storage;
        self
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let service = CoffeeService::new(self.storage);
        let schema = create_schema_with_service(service);

        let mut app = Router::new()
            .route("/", get(graphiql).post(graphql_handler))
            .route("/graphql", post(graphql_handler))
            .route("/health", get(health_check))
            .with_state(schema);

        if self.config.cors_enabled {
            app = app.layer(CorsLayer::permissive());
        }

        let addr = format!("0.0.0.0:{}", self.config.port);

        info!("🚀 Coffee catalog GraphQL server running on http://localhost:{}", self.config.port);
        info!("📊 GraphiQL interface: http://localhost:{}", self.config.port);
        info!("🔗 GraphQL endpoint: http://localhost:{}/graphql", self.config.port);

        // Use axum 0.6 syntax
        Server::bind(&addr.parse()?)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }
}

impl Default for GraphQLServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for server configuration
pub struct GraphQLServerBuilder {
    server: GraphQLServer,
}

impl GraphQLServerBuilder {
    pub fn new() -> Self {
        Self {
            server: GraphQLServer::new(),
        }
    }

    pub fn with_storage(mut self, storage: Arc<dyn CoffeeStorage>) -> Self {
        self.server = self.server.with_storage(storage);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        let mut config = self.server.config.clone();
        config.port = port;
        self.server = self.server.with_config(config);
        self
    }

    pub fn with_cors(mut self, cors_enabled: bool) -> Self {
        let mut config = self.server.config.clone();
        config.cors_enabled = cors_enabled;
        self.server = self.server.with_config(config);
        self
    }

    pub async fn build_and_run(self) -> Result<(), Box<dyn std::error::Error>> {
        self.server.run().await
    }
}

impl Default for GraphQLServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// GraphQL handler
async fn graphql_handler(
    State(schema): State<CoffeeSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

// GraphiQL interface
async fn graphiql() -> impl IntoResponse {
    Html(r#"
<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="robots" content="noindex">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="referrer" content="origin">
    <title>GraphiQL IDE</title>
    <style>
      body {
        height: 100%;
        margin: 0;
        width: 100%;
        overflow: hidden;
      }
      #graphiql {
        height: 100vh;
      }
    </style>
    <script crossorigin src="https://unpkg.com/react@18/umd/react.development.js"></script>
    <script crossorigin src="https://unpkg.com/react-dom@18/umd/react-dom.development.js"></script>
    <link rel="icon" href="https://graphql.org/favicon.ico">
    <link rel="stylesheet" href="https://unpkg.com/graphiql@3/graphiql.min.css" />
  </head>
  <body>
    <div id="graphiql">Loading...</div>
    <script src="https://unpkg.com/graphiql@3/graphiql.min.js" type="application/javascript"></script>
    <script>
      const root = ReactDOM.createRoot(document.getElementById('graphiql'));

      const fetcher = GraphiQL.createFetcher({
        url: '/graphql',
      });

      root.render(React.createElement(GraphiQL, {
        fetcher: fetcher,
        defaultEditorToolsVisibility: true,
      }));
    </script>
  </body>
</html>
"#)
}

// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Coffee catalog GraphQL server is running!")
}
