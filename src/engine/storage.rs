// Storage abstraction for the coffee catalog
// This defines the interface for holding the canonical record collection

//! # Storage Abstraction Layer
//!
//! This module provides a storage abstraction that separates the CRUD
//! business logic from the details of how records are held. The abstraction
//! follows the **Repository Pattern**:
//!
//! - **CoffeeStorage trait**: Defines the interface for all storage operations
//! - **InMemoryStorage**: The default (and only) implementation - an ordered
//!   in-memory list seeded with initial data at startup
//!
//! ## Ordering Guarantee
//!
//! The store's iteration order is **insertion order**. Create appends at the
//! end; update mutates in place and never reorders. This is why the backing
//! collection is a `Vec` rather than a map keyed by id.
//!
//! ## Thread Safety
//!
//! The HTTP layer may invoke operations from multiple request tasks at once,
//! so every operation serializes behind a single `RwLock` around the backing
//! `Vec`. Multiple readers may hold the lock simultaneously; writers get
//! exclusive access. No operation suspends while holding the lock.
//!
//! ## Rust Learning Notes:
//!
//! ### Async Traits
//! Rust doesn't natively support async functions in trait objects yet.
//! The `async-trait` crate provides a macro to enable async trait methods.
//! The methods here never actually block, but keeping the trait async means
//! a persistent backend could implement it without changing callers.
//!
//! ### `Result<Option<T>>`
//! Lookups return `Result<Option<Coffee>>`:
//! - `Ok(Some(coffee))`: found the record
//! - `Ok(None)`: no record with that id (not an error)
//! - `Err(error)`: the operation itself failed (lock poisoned, etc.)
//!
//! Callers can never mistake "not found" for a default value.

use std::sync::RwLock;

use crate::models::{Coffee, Size};
use crate::{CoffeeError, Result};

/// Id assigned to the first record created into an empty store
pub const BASE_ID: i32 = 1;

/// Storage trait for the coffee record collection
///
/// This trait defines the interface that storage backends must implement.
/// It is a complete contract over the ordered record sequence: list, lookup,
/// append, remove and in-place replace.
///
/// Id assignment and uniqueness are the caller's responsibility - `append`
/// trusts that the supplied record's id does not collide.
#[async_trait::async_trait]
pub trait CoffeeStorage: Send + Sync {
    /// List all records in insertion order
    ///
    /// Returns a snapshot; callers must not assume the store is unchanged
    /// across calls.
    async fn list(&self) -> Result<Vec<Coffee>>;

    /// Get a record by id
    ///
    /// Returns `Ok(Some(coffee))` if found, `Ok(None)` if no record has the
    /// id. Ids are unique, so ties are impossible.
    async fn find_by_id(&self, id: i32) -> Result<Option<Coffee>>;

    /// Append a new record at the end of the sequence
    ///
    /// The caller guarantees id uniqueness. Returns the stored record back.
    async fn append(&self, coffee: Coffee) -> Result<Coffee>;

    /// Assemble and append a new record with the next sequential id
    ///
    /// The id is one greater than the current maximum, or [`BASE_ID`] when
    /// the store is empty. Both the read of the maximum and the append
    /// happen under one write guard, so concurrent creates can never be
    /// assigned the same id.
    async fn append_with_next_id(&self, name: String, size: Size) -> Result<Coffee>;

    /// Remove the record with the given id
    ///
    /// Returns the removed record, or `Ok(None)` when no record matched.
    async fn remove_by_id(&self, id: i32) -> Result<Option<Coffee>>;

    /// Overwrite the name and size of the record with the given id, in place
    ///
    /// The record keeps its position in the sequence and its id. Returns the
    /// updated record, or `Ok(None)` when no record matched.
    async fn replace(&self, id: i32, name: String, size: Size) -> Result<Option<Coffee>>;
}

/// In-memory storage - the canonical record store for the process lifetime
///
/// This holds the ordered record sequence in a `RwLock<Vec<Coffee>>`. It is
/// initialized once at process start (see [`InMemoryStorage::seeded`]) and
/// torn down on process exit - there is no durability.
///
/// ## Limitations
///
/// - **Not persistent**: data is lost when the process restarts
/// - **Not distributed**: cannot share data across processes
///
/// Both are by the nature of the service; it is a single-process catalog.
#[derive(Default)]
pub struct InMemoryStorage {
    /// The canonical ordered record sequence, guarded for concurrent access
    coffees: RwLock<Vec<Coffee>>,
}

impl InMemoryStorage {
    /// Create an empty store
    ///
    /// Mostly useful in tests; the server uses [`InMemoryStorage::seeded`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the three startup records
    ///
    /// The seed set is fixed: ids 1-3 exist from process start, so the first
    /// created record receives id 4.
    pub fn seeded() -> Self {
        Self {
            coffees: RwLock::new(vec![
                Coffee::new(1, "Caffè Americano", Size::Grande),
                Coffee::new(2, "Caffè Latte", Size::Venti),
                Coffee::new(3, "Caffè Cappuccino", Size::Tall),
            ]),
        }
    }
}

// Lock poisoning only happens if a thread panicked while holding the guard.
// Rather than unwrapping, surface it as a storage error the resolver layer
// can report.
fn poisoned() -> CoffeeError {
    CoffeeError::Storage("coffee store lock poisoned".to_string())
}

#[async_trait::async_trait]
impl CoffeeStorage for InMemoryStorage {
    async fn list(&self) -> Result<Vec<Coffee>> {
        let coffees = self.coffees.read().map_err(|_| poisoned())?;
        Ok(coffees.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Coffee>> {
        let coffees = self.coffees.read().map_err(|_| poisoned())?;
        Ok(coffees.iter().find(|c| c.id == id).cloned())
    }

    async fn append(&self, coffee: Coffee) -> Result<Coffee> {
        let mut coffees = self.coffees.write().map_err(|_| poisoned())?;
        coffees.push(coffee.clone());
        Ok(coffee)
    }

    async fn append_with_next_id(&self, name: String, size: Size) -> Result<Coffee> {
        let mut coffees = self.coffees.write().map_err(|_| poisoned())?;
        let next_id = coffees
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(BASE_ID, |max| max + 1);

        let coffee = Coffee::new(next_id, name, size);
        coffees.push(coffee.clone());
        Ok(coffee)
    }

    async fn remove_by_id(&self, id: i32) -> Result<Option<Coffee>> {
        let mut coffees = self.coffees.write().map_err(|_| poisoned())?;
        match coffees.iter().position(|c| c.id == id) {
            Some(index) => Ok(Some(coffees.remove(index))),
            None => Ok(None),
        }
    }

    async fn replace(&self, id: i32, name: String, size: Size) -> Result<Option<Coffee>> {
        let mut coffees = self.coffees.write().map_err(|_| poisoned())?;
        match coffees.iter_mut().find(|c| c.id == id) {
            Some(coffee) => {
                coffee.name = name;
                coffee.size = size;
                Ok(Some(coffee.clone()))
            }
            None => Ok(None),
        }
    }
}
