use super::value_objects::GroupName;
use crate::domain::errors::RosterResult;
use crate::domain::events::RosterEvent;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Group aggregate root
///
/// A named roster. Players are owned by the group through the storage
/// adapter; removing the group removes them too.
///
/// # Invariants
/// - Name is trimmed and non-empty
/// - Name is unique across groups (enforced by the storage adapter)
///
/// # Example
/// ```
/// use roster_api::domain::group::Group;
///
/// let (group, events) = Group::new("  Turma 1 ").expect("valid group");
///
/// assert_eq!(group.name().as_str(), "Turma 1");
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Group {
    id: Uuid,
    name: GroupName,
    created_at: DateTime<Utc>,
}

impl Group {
    /// Creates a new, empty group
    ///
    /// # Returns
    /// * `Ok((Group, Vec<RosterEvent>))` - New group and its `GroupCreated` event
    /// * `Err(RosterError::Validation)` - If the trimmed name is empty
    pub fn new(name: &str) -> RosterResult<(Self, Vec<RosterEvent>)> {
        let name = GroupName::parse(name)?;

        let group = Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        };

        let events = vec![RosterEvent::GroupCreated {
            group_id: group.id,
            name: group.name.clone(),
        }];

        Ok((group, events))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &GroupName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Group from stored data without re-validating it
    ///
    /// Only for storage adapters.
    pub fn from_persistence(id: Uuid, name: GroupName, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}
