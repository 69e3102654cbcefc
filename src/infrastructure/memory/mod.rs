//! In-process repository implementations.
//!
//! Used when `STORAGE_BACKEND=memory` and by the HTTP integration tests. Data
//! lives only as long as the process. Each map sits behind a single
//! [`tokio::sync::RwLock`], so conditional inserts and click increments are
//! atomic with respect to each other.

mod memory_account_repository;
mod memory_link_repository;

pub use memory_account_repository::MemoryAccountRepository;
pub use memory_link_repository::MemoryLinkRepository;
