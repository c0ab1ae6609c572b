//! Domain primitives, services, and ports.
//!
//! Purpose: define strongly typed domain entities and the use-case services
//! operating on them. Types here are transport agnostic; inbound adapters own
//! HTTP status codes and response envelopes, outbound adapters own storage.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`] — typed domain failure returned by services.
//! - [`RecordId`] — positive integer identifier assigned by repositories.
//! - [`LoftyView`] / [`NewLoftyView`] — scenic view aggregate and its
//!   validated creation payload.
//! - [`User`] / [`NewUser`] / [`EmailAddress`] — user aggregate, creation
//!   payload, and validated email newtype.
//! - [`ViewService`] / [`UserService`] — services implementing the driving
//!   ports in [`ports`].

pub mod error;
pub mod id;
pub mod ports;
pub mod user;
pub mod user_service;
pub mod view;
pub mod view_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::id::{RecordId, RecordIdError};
pub use self::user::{EmailAddress, NewUser, User, UserValidationError};
pub use self::user_service::UserService;
pub use self::view::{LoftyView, NewLoftyView};
pub use self::view_service::ViewService;

/// Convenient result alias for domain operations.
pub type DomainResult<T> = Result<T, Error>;
