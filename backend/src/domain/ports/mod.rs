//! Domain ports.
//!
//! Driven ports ([`ViewRepository`], [`UserRepository`]) are implemented by
//! storage adapters; driving ports ([`ViewsQuery`], [`ViewsCommand`],
//! [`UsersQuery`], [`UsersCommand`]) are implemented by domain services and
//! consumed by inbound adapters. Handlers depend only on the driving ports,
//! so tests can substitute doubles without wiring storage.

pub mod user_repository;
pub mod users;
pub mod view_repository;
pub mod views;

pub use self::user_repository::{UserPersistenceError, UserRepository};
pub use self::users::{UsersCommand, UsersQuery};
pub use self::view_repository::{ViewPersistenceError, ViewRepository};
pub use self::views::{ViewsCommand, ViewsQuery};

#[cfg(test)]
pub use self::user_repository::MockUserRepository;
#[cfg(test)]
pub use self::view_repository::MockViewRepository;
