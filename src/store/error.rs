//! Store error types
//!
//! The mock backend has exactly one failure mode: an id that does not exist.

use std::fmt;
use thiserror::Error;

/// Collections an id can be looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Club,
    Event,
    Team,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Club => write!(f, "Club"),
            Entity::Event => write!(f, "Event"),
            Entity::Team => write!(f, "Team"),
        }
    }
}

/// Errors that can occur in the data store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with this id exists in the collection
    #[error("{entity} not found")]
    NotFound { entity: Entity, id: u32 },
}

impl StoreError {
    pub fn club(id: u32) -> Self {
        StoreError::NotFound {
            entity: Entity::Club,
            id,
        }
    }

    pub fn event(id: u32) -> Self {
        StoreError::NotFound {
            entity: Entity::Event,
            id,
        }
    }

    pub fn team(id: u32) -> Self {
        StoreError::NotFound {
            entity: Entity::Team,
            id,
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(StoreError::club(9).to_string(), "Club not found");
        assert_eq!(StoreError::event(9).to_string(), "Event not found");
        assert_eq!(StoreError::team(9).to_string(), "Team not found");
    }

    #[test]
    fn test_error_keeps_id() {
        let err = StoreError::team(42);
        assert!(matches!(
            err,
            StoreError::NotFound {
                entity: Entity::Team,
                id: 42
            }
        ));
    }
}
