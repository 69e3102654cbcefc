//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping with its click counter
//! - [`Account`] - A registered user
//!
//! # Design Pattern
//!
//! Separate structs are used for creation (`NewLink`, `NewAccount`); fields the
//! store assigns (`created_at`, `clicks`) only exist on the full entity.

pub mod account;
pub mod link;

pub use account::{Account, NewAccount};
pub use link::{Link, NewLink};
