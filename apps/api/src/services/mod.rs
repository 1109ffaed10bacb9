// Application services
// Stateless lifecycles that enforce roster rules on top of a storage adapter

pub mod group_lifecycle;
pub mod player_lifecycle;

pub use group_lifecycle::GroupLifecycle;
pub use player_lifecycle::PlayerLifecycle;

use crate::domain::errors::{RosterError, StorageError};

/// Maps an adapter error onto the lifecycle taxonomy
///
/// Unrecognized failures pass through untouched as `Storage`.
pub(crate) fn classify(error: StorageError) -> RosterError {
    match error {
        StorageError::Duplicate(message) => RosterError::Conflict(message),
        StorageError::NotFound(message) => RosterError::NotFound(message),
        other => RosterError::Storage(other),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_becomes_conflict() {
        let err = classify(StorageError::Duplicate("taken".to_string()));
        assert!(matches!(err, RosterError::Conflict(m) if m == "taken"));
    }

    #[test]
    fn not_found_is_kept() {
        let err = classify(StorageError::NotFound("gone".to_string()));
        assert!(matches!(err, RosterError::NotFound(_)));
    }

    #[test]
    fn backend_and_corrupt_pass_through() {
        assert!(matches!(
            classify(StorageError::Backend("io".to_string())),
            RosterError::Storage(StorageError::Backend(_))
        ));
        assert!(matches!(
            classify(StorageError::Corrupt("row".to_string())),
            RosterError::Storage(StorageError::Corrupt(_))
        ));
    }
}
