// CRUD service for the coffee catalog
// Validates inputs, assigns identifiers, and delegates to the record store

//! # CRUD Service
//!
//! [`CoffeeService`] is the business-logic layer between the GraphQL
//! resolvers and the storage abstraction. It defines the semantics the store
//! does not:
//!
//! - **Id assignment**: a created record receives one greater than the
//!   current maximum id, or [`BASE_ID`] when the store is empty. The
//!   computation itself happens inside the store's write guard (see
//!   `CoffeeStorage::append_with_next_id`) - read-the-max and append must be
//!   one atomic step, or two concurrent creates could be handed the same id
//! - **Missing-id semantics**: `update` and `delete` on an id that does not
//!   exist fail with [`CoffeeError::NotFound`] rather than silently doing
//!   nothing, while `find_one` expresses absence as `Ok(None)` because a
//!   miss on a read is an answer, not a failure
//!
//! Every operation is a single atomic step over the store - there is no
//! multi-step protocol and therefore no state machine here.
//!
//! ## Rust Learning Notes:
//!
//! ### Trait Objects for the Storage Seam
//! The service holds an `Arc<dyn CoffeeStorage>` rather than a concrete
//! store. Dynamic dispatch costs a vtable lookup per call, which is nothing
//! next to the clarity of a swappable backend, and `Arc` lets the schema and
//! tests share one store instance.

use std::sync::Arc;

use crate::engine::storage::CoffeeStorage;
use crate::models::{Coffee, Size};
use crate::{CoffeeError, Result};

pub use crate::engine::storage::BASE_ID;

/// The CRUD service over the coffee record store
///
/// Cloning the service is cheap - it clones the `Arc`, not the store.
#[derive(Clone)]
pub struct CoffeeService {
    storage: Arc<dyn CoffeeStorage>,
}

impl CoffeeService {
    /// Create a service over an explicitly owned store
    ///
    /// The store is passed in rather than created here so its lifecycle is
    /// visible at the composition root (the server binary or a test).
    pub fn new(storage: Arc<dyn CoffeeStorage>) -> Self {
        Self { storage }
    }

    /// Return the full ordered record sequence, as-is
    pub async fn find_all(&self) -> Result<Vec<Coffee>> {
        self.storage.list().await
    }

    /// Return the record with the given id, or `Ok(None)` when absent
    ///
    /// A miss is never an error for reads.
    pub async fn find_one(&self, id: i32) -> Result<Option<Coffee>> {
        self.storage.find_by_id(id).await
    }

    /// Create a new record with an auto-assigned id
    ///
    /// The new id is strictly greater than every id currently in the store:
    /// one greater than the maximum, or [`BASE_ID`] when the store is empty.
    /// Assignment and append happen atomically under the store's write
    /// guard, so concurrent creates always receive distinct ids. Deleted ids
    /// are never reused within a run of the process as long as a higher id
    /// remains.
    pub async fn create(&self, name: String, size: Size) -> Result<Coffee> {
        self.storage.append_with_next_id(name, size).await
    }

    /// Overwrite the name and size of an existing record
    ///
    /// The record keeps its id and position. Fails with
    /// [`CoffeeError::NotFound`] when no record has the id.
    pub async fn update(&self, id: i32, name: String, size: Size) -> Result<Coffee> {
        self.storage
            .replace(id, name, size)
            .await?
            .ok_or(CoffeeError::NotFound { id })
    }

    /// Remove an existing record and return its prior value
    ///
    /// Fails with [`CoffeeError::NotFound`] when no record has the id.
    pub async fn delete(&self, id: i32) -> Result<Coffee> {
        self.storage
            .remove_by_id(id)
            .await?
            .ok_or(CoffeeError::NotFound { id })
    }
}
