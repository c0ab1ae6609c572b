//! Record identifier newtype.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`RecordId::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordIdError {
    /// Identifiers start at 1; zero is never assigned.
    Zero,
}

impl fmt::Display for RecordIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "record id must be a positive integer"),
        }
    }
}

impl std::error::Error for RecordIdError {}

/// Positive integer identifier assigned by a repository.
///
/// ## Invariants
/// - The wrapped value is strictly positive.
/// - Identifiers are assigned by repositories as `max(existing) + 1`; callers
///   never choose them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct RecordId(u64);

impl RecordId {
    /// Validate and construct a [`RecordId`].
    pub fn new(value: u64) -> Result<Self, RecordIdError> {
        if value == 0 {
            return Err(RecordIdError::Zero);
        }
        Ok(Self(value))
    }

    /// Access the underlying integer.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one in assignment order.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The first identifier assigned to an empty collection.
    pub const FIRST: Self = Self(1);
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RecordId> for u64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl TryFrom<u64> for RecordId {
    type Error = RecordIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
