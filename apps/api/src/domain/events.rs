use uuid::Uuid;

use crate::domain::group::GroupName;
use crate::domain::player::{PlayerName, Team};

/// Domain events emitted by the roster lifecycles
///
/// Each successful mutation produces exactly one event. The lifecycles
/// record them through `tracing`; nothing else consumes them yet.
///
/// # Example
/// ```
/// use roster_api::domain::events::RosterEvent;
/// use roster_api::domain::group::GroupName;
/// use uuid::Uuid;
///
/// let event = RosterEvent::GroupCreated {
///     group_id: Uuid::new_v4(),
///     name: GroupName::parse("Turma").unwrap(),
/// };
/// assert_eq!(event.group().as_str(), "Turma");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    /// A new, empty group was persisted
    GroupCreated {
        group_id: Uuid,
        name: GroupName,
    },
    /// A group and all of its players were deleted
    GroupRemoved {
        name: GroupName,
    },
    /// A player joined a group under a team
    PlayerAdded {
        group: GroupName,
        player_id: Uuid,
        player: PlayerName,
        team: Team,
    },
    /// A player was deleted from a group
    PlayerRemoved {
        group: GroupName,
        player: PlayerName,
    },
}

impl RosterEvent {
    /// Returns the group this event belongs to
    pub fn group(&self) -> &GroupName {
        match self {
            RosterEvent::GroupCreated { name, .. } => name,
            RosterEvent::GroupRemoved { name } => name,
            RosterEvent::PlayerAdded { group, .. } => group,
            RosterEvent::PlayerRemoved { group, .. } => group,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RosterEvent::GroupCreated { .. } => "group_created",
            RosterEvent::GroupRemoved { .. } => "group_removed",
            RosterEvent::PlayerAdded { .. } => "player_added",
            RosterEvent::PlayerRemoved { .. } => "player_removed",
        }
    }

    /// Writes the event to the log
    pub fn record(&self) {
        match self {
            RosterEvent::PlayerAdded { player, team, .. } => tracing::info!(
                event = self.name(),
                group = %self.group(),
                player = %player,
                team = %team,
                "roster event"
            ),
            RosterEvent::PlayerRemoved { player, .. } => tracing::info!(
                event = self.name(),
                group = %self.group(),
                player = %player,
                "roster event"
            ),
            _ => tracing::info!(event = self.name(), group = %self.group(), "roster event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> GroupName {
        GroupName::parse("Turma").unwrap()
    }

    #[test]
    fn group_removed_event() {
        let event = RosterEvent::GroupRemoved { name: group() };

        assert_eq!(event.group(), &group());
        assert_eq!(event.name(), "group_removed");
    }

    #[test]
    fn player_added_event() {
        let event = RosterEvent::PlayerAdded {
            group: group(),
            player_id: Uuid::new_v4(),
            player: PlayerName::parse("Bob").unwrap(),
            team: Team::A,
        };

        assert_eq!(event.group(), &group());
        assert_eq!(event.name(), "player_added");
    }

    #[test]
    fn player_removed_event() {
        let event = RosterEvent::PlayerRemoved {
            group: group(),
            player: PlayerName::parse("Bob").unwrap(),
        };

        assert_eq!(event.name(), "player_removed");
        event.record();
    }

    #[test]
    fn event_clone() {
        let event = RosterEvent::GroupRemoved { name: group() };
        assert_eq!(event.clone(), event);
    }
}
