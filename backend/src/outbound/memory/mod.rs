//! In-memory storage adapters.
//!
//! Each repository owns its collection behind an `RwLock`, so a mutation
//! completes fully before the next one begins even on a multi-threaded
//! runtime. Instances are explicitly constructed and injected; there is no
//! process-global collection to reset between tests.

mod user_repository;
mod view_repository;

pub use self::user_repository::InMemoryUserRepository;
pub use self::view_repository::InMemoryViewRepository;
