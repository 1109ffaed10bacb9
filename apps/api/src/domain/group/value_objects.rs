use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{RosterError, RosterResult};

/// Display name of a group
///
/// # Invariants
/// - Surrounding whitespace is trimmed
/// - Never empty after trimming
/// - Compared exactly (case-sensitive)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupName(String);

impl GroupName {
    /// Parses a user-supplied group name
    ///
    /// # Returns
    /// * `Ok(GroupName)` - Trimmed, non-empty name
    /// * `Err(RosterError::Validation)` - If nothing is left after trimming
    ///
    /// # Example
    /// ```
    /// use roster_api::domain::group::GroupName;
    ///
    /// let name = GroupName::parse("  Turma 1 ").expect("valid name");
    /// assert_eq!(name.as_str(), "Turma 1");
    /// assert!(GroupName::parse("   ").is_err());
    /// ```
    pub fn parse(raw: &str) -> RosterResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RosterError::validation("Group name cannot be empty"));
        }
        Ok(GroupName(trimmed.to_string()))
    }

    /// Resolves a name that refers to an existing group
    ///
    /// A blank name can never name a stored group, so it resolves to
    /// `NotFound` rather than `Validation`.
    pub fn lookup(raw: &str) -> RosterResult<Self> {
        Self::parse(raw).map_err(|_| RosterError::not_found("Group not found: (blank name)"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for GroupName {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        GroupName::parse(&value)
    }
}

impl From<GroupName> for String {
    fn from(name: GroupName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name() {
        assert_eq!(GroupName::parse("Turma A").unwrap().as_str(), "Turma A");
    }

    #[test]
    fn name_is_trimmed() {
        assert_eq!(GroupName::parse("\t Rocket  \n").unwrap().as_str(), "Rocket");
    }

    #[test]
    fn empty_name_fails() {
        let err = GroupName::parse("").unwrap_err();
        assert!(matches!(err, RosterError::Validation(_)));
    }

    #[test]
    fn whitespace_only_name_fails() {
        assert!(matches!(
            GroupName::parse("    ").unwrap_err(),
            RosterError::Validation(_)
        ));
    }

    #[test]
    fn blank_lookup_is_not_found() {
        assert!(matches!(
            GroupName::lookup(" ").unwrap_err(),
            RosterError::NotFound(_)
        ));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_ne!(
            GroupName::parse("turma").unwrap(),
            GroupName::parse("Turma").unwrap()
        );
    }

    #[test]
    fn deserialize_rejects_blank() {
        assert!(serde_json::from_str::<GroupName>("\"  \"").is_err());
        let name: GroupName = serde_json::from_str("\" Friends \"").unwrap();
        assert_eq!(name.as_str(), "Friends");
    }
}
