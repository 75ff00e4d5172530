// GraphQL API for the coffee catalog
// This provides the five named operations over the CRUD service

use async_graphql::{Context, EmptySubscription, Enum, Object, Schema, SimpleObject, ID};
use tracing::debug;

use crate::engine::service::CoffeeService;
use crate::models::{Coffee, Size};
use crate::CoffeeError;

// GraphQL types - these are the API representations of the domain models.
// They are kept separate from the domain structs so the wire shape (ID as an
// opaque string, SCREAMING enum names) never leaks into the service layer.

/// A single coffee entry as exposed over GraphQL
#[derive(SimpleObject, Debug, Clone)]
#[graphql(name = "Coffee")]
pub struct CoffeeGQL {
    pub id: ID,
    pub name: String,
    pub size: SizeGQL,
}

/// Drink size as exposed over GraphQL
///
/// async-graphql renders variants in SCREAMING case, so the schema values
/// are `SHORT`, `TALL`, `GRANDE`, `VENTI` - the same closed set as the
/// domain enum.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "Size")]
pub enum SizeGQL {
    Short,
    Tall,
    Grande,
    Venti,
}

impl From<Size> for SizeGQL {
    fn from(size: Size) -> Self {
        match size {
            Size::Short => SizeGQL::Short,
            Size::Tall => SizeGQL::Tall,
            Size::Grande => SizeGQL::Grande,
            Size::Venti => SizeGQL::Venti,
        }
    }
}

impl From<SizeGQL> for Size {
    fn from(size: SizeGQL) -> Self {
        match size {
            SizeGQL::Short => Size::Short,
            SizeGQL::Tall => Size::Tall,
            SizeGQL::Grande => Size::Grande,
            SizeGQL::Venti => Size::Venti,
        }
    }
}

impl From<&Coffee> for CoffeeGQL {
    fn from(coffee: &Coffee) -> Self {
        CoffeeGQL {
            id: ID(coffee.id.to_string()),
            name: coffee.name.clone(),
            size: coffee.size.into(),
        }
    }
}

/// Parse a GraphQL `ID` argument into a record id
///
/// Ids cross the wire as opaque strings; anything that is not an integer is
/// a [`CoffeeError::InvalidInput`], reported before the service is ever
/// consulted.
fn parse_id(id: &ID) -> async_graphql::Result<i32> {
    id.parse::<i32>().map_err(|_| {
        let err =
            CoffeeError::InvalidInput(format!("coffee id must be an integer, got '{}'", id.as_str()));
        async_graphql::Error::new(err.to_string())
    })
}

/// Root query type - the read half of the API
pub struct Query;

#[Object]
impl Query {
    /// List all coffees in insertion order
    async fn find_all(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<CoffeeGQL>> {
        let service = ctx.data::<CoffeeService>()?;
        match service.find_all().await {
            Ok(coffees) => Ok(coffees.iter().map(CoffeeGQL::from).collect()),
            Err(e) => Err(async_graphql::Error::new(format!(
                "Failed to list coffees: {}",
                e
            ))),
        }
    }

    /// Get a coffee by id, or null when no coffee has the id
    async fn find_one(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<CoffeeGQL>> {
        let service = ctx.data::<CoffeeService>()?;
        let coffee_id = parse_id(&id)?;
        match service.find_one(coffee_id).await {
            Ok(Some(coffee)) => Ok(Some(CoffeeGQL::from(&coffee))),
            Ok(None) => Ok(None),
            Err(e) => Err(async_graphql::Error::new(format!(
                "Failed to get coffee: {}",
                e
            ))),
        }
    }
}

/// Root mutation type - the write half of the API
pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a new coffee; the id is assigned by the service
    async fn create(
        &self,
        ctx: &Context<'_>,
        name: String,
        size: SizeGQL,
    ) -> async_graphql::Result<CoffeeGQL> {
        let service = ctx.data::<CoffeeService>()?;
        debug!("Creating coffee: {} ({})", name, Size::from(size));

        let created = service
            .create(name, size.into())
            .await
            .map_err(|e| async_graphql::Error::new(format!("Failed to create coffee: {}", e)))?;

        Ok(CoffeeGQL::from(&created))
    }

    /// Overwrite the name and size of an existing coffee
    ///
    /// Fails with a NotFound error when no coffee has the id.
    async fn update(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        size: SizeGQL,
    ) -> async_graphql::Result<CoffeeGQL> {
        let service = ctx.data::<CoffeeService>()?;
        let coffee_id = parse_id(&id)?;

        let updated = service
            .update(coffee_id, name, size.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(CoffeeGQL::from(&updated))
    }

    /// Remove an existing coffee and return its prior value
    ///
    /// Fails with a NotFound error when no coffee has the id.
    async fn delete(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<CoffeeGQL> {
        let service = ctx.data::<CoffeeService>()?;
        let coffee_id = parse_id(&id)?;

        let removed = service
            .delete(coffee_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(CoffeeGQL::from(&removed))
    }
}

/// The complete GraphQL schema for the coffee catalog
pub type CoffeeSchema = Schema<Query, Mutation, EmptySubscription>;

/// Create a bare schema without a service attached
///
/// Useful for schema introspection and SDL export; executing operations
/// against it fails because no `CoffeeService` is in the context.
pub fn create_schema() -> CoffeeSchema {
    Schema::build(Query, Mutation, EmptySubscription).finish()
}

/// Create the schema with the CRUD service attached
pub fn create_schema_with_service(service: CoffeeService) -> CoffeeSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(service)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::storage::InMemoryStorage;
    use async_graphql::{Request, Variables};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn seeded_schema() -> CoffeeSchema {
        let service = CoffeeService::new(Arc::new(InMemoryStorage::seeded()));
        create_schema_with_service(service)
    }

    async fn execute(schema: &CoffeeSchema, document: &str, variables: Value) -> Value {
        let request = Request::new(document).variables(Variables::from_json(variables));
        let response = schema.execute(request).await;
        assert!(
            response.errors.is_empty(),
            "unexpected errors: {:?}",
            response.errors
        );
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn find_all_returns_all_coffees() {
        let schema = seeded_schema();
        let document = r#"
            query {
                findAll {
                    id
                    name
                    size
                }
            }
        "#;

        let data = execute(&schema, document, json!({})).await;
        assert_eq!(data["findAll"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn valid_id_returns_coffee() {
        let schema = seeded_schema();
        let document = r#"
            query findOneCoffee($id: ID!) {
                findOne(id: $id) {
                    id
                    name
                    size
                }
            }
        "#;

        let data = execute(&schema, document, json!({ "id": 1 })).await;
        assert_eq!(data["findOne"]["name"], "Caffè Americano");
        assert_eq!(data["findOne"]["size"], "GRANDE");
    }

    #[tokio::test]
    async fn invalid_id_returns_null() {
        let schema = seeded_schema();
        let document = r#"
            query findOneCoffee($id: ID!) {
                findOne(id: $id) {
                    id
                }
            }
        "#;

        let data = execute(&schema, document, json!({ "id": 99 })).await;
        assert!(data["findOne"].is_null());
    }

    #[tokio::test]
    async fn create_returns_new_coffee_and_grows_the_list() {
        let schema = seeded_schema();
        let document = r#"
            mutation create($name: String!, $size: Size!) {
                create(name: $name, size: $size) {
                    id
                    name
                    size
                }
            }
        "#;

        let data = execute(
            &schema,
            document,
            json!({ "name": "Caffè Latte", "size": "GRANDE" }),
        )
        .await;
        assert_eq!(data["create"]["id"], "4");
        assert_eq!(data["create"]["name"], "Caffè Latte");
        assert_eq!(data["create"]["size"], "GRANDE");

        let all = execute(&schema, "query { findAll { id } }", json!({})).await;
        assert_eq!(all["findAll"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn update_overwrites_existing_coffee() {
        let schema = seeded_schema();
        let document = r#"
            mutation update($id: ID!, $name: String!, $size: Size!) {
                update(id: $id, name: $name, size: $size) {
                    id
                    name
                    size
                }
            }
        "#;

        let data = execute(
            &schema,
            document,
            json!({ "id": 1, "name": "UPDATED: Caffè Latte", "size": "SHORT" }),
        )
        .await;
        assert_eq!(data["update"]["id"], "1");

        let found = execute(
            &schema,
            r#"query { findOne(id: "1") { name size } }"#,
            json!({}),
        )
        .await;
        assert_eq!(found["findOne"]["name"], "UPDATED: Caffè Latte");
        assert_eq!(found["findOne"]["size"], "SHORT");
    }

    #[tokio::test]
    async fn delete_removes_coffee_and_returns_prior_value() {
        let schema = seeded_schema();
        let document = r#"
            mutation delete($id: ID!) {
                delete(id: $id) {
                    id
                    name
                    size
                }
            }
        "#;

        let data = execute(&schema, document, json!({ "id": 1 })).await;
        assert_eq!(data["delete"]["name"], "Caffè Americano");

        let all = execute(&schema, "query { findAll { id } }", json!({})).await;
        assert_eq!(all["findAll"].as_array().unwrap().len(), 2);

        let found = execute(
            &schema,
            r#"query { findOne(id: "1") { id } }"#,
            json!({}),
        )
        .await;
        assert!(found["findOne"].is_null());
    }

    #[tokio::test]
    async fn update_missing_id_surfaces_not_found_error() {
        let schema = seeded_schema();
        let document = r#"
            mutation {
                update(id: "99", name: "Ghost", size: TALL) {
                    id
                }
            }
        "#;

        let response = schema.execute(document).await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("not found"));
    }

    #[tokio::test]
    async fn delete_missing_id_surfaces_not_found_error() {
        let schema = seeded_schema();
        let response = schema
            .execute(r#"mutation { delete(id: "99") { id } }"#)
            .await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("not found"));
    }

    #[tokio::test]
    async fn malformed_id_is_an_input_error() {
        let schema = seeded_schema();
        let response = schema
            .execute(r#"query { findOne(id: "not-a-number") { id } }"#)
            .await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("Invalid input"));
        assert!(response.errors[0].message.contains("not-a-number"));
    }

    #[test]
    fn bare_schema_exposes_the_five_operations() {
        let schema = create_schema();
        let sdl = schema.sdl();

        assert!(sdl.contains("findAll"));
        assert!(sdl.contains("findOne"));
        assert!(sdl.contains("create"));
        assert!(sdl.contains("update"));
        assert!(sdl.contains("delete"));

        // API type names match the published schema, not the Rust structs
        assert!(sdl.contains("type Coffee"));
        assert!(sdl.contains("enum Size"));
        assert!(sdl.contains("GRANDE"));
    }
}
