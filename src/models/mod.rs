// Core domain models for the coffee catalog
// These are the plain data structures the rest of the crate operates on

//! # Domain Models Module
//!
//! This module contains the domain models for the coffee catalog. The domain
//! here is intentionally tiny: one record type and one enumeration.
//!
//! ## Rust Learning Notes:
//!
//! ### Module Organization
//! This `mod.rs` file serves as the **module root** for the `models`
//! directory. Each `pub mod` declaration pulls in a `.rs` file from the same
//! directory as a publicly accessible submodule.
//!
//! ### Re-exports for Clean APIs
//! The `pub use` statement at the bottom creates a flat API. Users can import
//! `use coffee_catalog::models::Coffee` instead of
//! `use coffee_catalog::models::coffee::Coffee`.

// Declares the `coffee` submodule from `coffee.rs`
// Contains Coffee and Size - the entire domain vocabulary
pub mod coffee;

// Re-export the domain types for convenience
pub use coffee::{Coffee, Size};
