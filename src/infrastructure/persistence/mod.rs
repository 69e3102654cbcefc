//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//! Schema lives in `migrations/` and is applied at start-up.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage, click counting, owner queries
//! - [`PgAccountRepository`] - Account storage

pub mod pg_account_repository;
pub mod pg_link_repository;

pub use pg_account_repository::PgAccountRepository;
pub use pg_link_repository::PgLinkRepository;
