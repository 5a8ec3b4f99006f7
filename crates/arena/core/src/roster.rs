//! Encounter roster and the accuracy writes produced by target evaluation.

use crate::error::{ArenaError, ArenaResult};
use crate::stats::{AgentId, AgentStats};

/// Ordered list of every participant in an encounter.
///
/// Order is significant: opponent snapshots, and therefore tie-breaks during target
/// selection, follow roster order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<AgentStats>", into = "Vec<AgentStats>"))]
pub struct Roster {
    participants: Vec<AgentStats>,
}

impl Roster {
    /// Builds a roster, rejecting duplicate identifiers.
    pub fn new(participants: Vec<AgentStats>) -> ArenaResult<Self> {
        for (index, agent) in participants.iter().enumerate() {
            if participants[..index].iter().any(|other| other.id == agent.id) {
                return Err(ArenaError::DuplicateAgent(agent.id));
            }
        }
        Ok(Self { participants })
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Returns the participant with the given id.
    pub fn agent(&self, id: AgentId) -> Option<&AgentStats> {
        self.participants.iter().find(|agent| agent.id == id)
    }

    /// Returns the participant with the given id, or [`ArenaError::UnknownAgent`].
    pub fn require(&self, id: AgentId) -> ArenaResult<&AgentStats> {
        self.agent(id).ok_or(ArenaError::UnknownAgent(id))
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut AgentStats> {
        self.participants.iter_mut().find(|agent| agent.id == id)
    }

    /// All participants in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &AgentStats> {
        self.participants.iter()
    }

    /// Every participant other than `id`, in roster order.
    pub fn opponents_of(&self, id: AgentId) -> impl Iterator<Item = &AgentStats> {
        self.participants.iter().filter(move |agent| agent.id != id)
    }

    /// Writes accuracy updates through to the participants' weapons.
    ///
    /// Updates are applied in order, so a later update for the same participant wins.
    /// Updates for participants not in the roster are ignored.
    pub fn apply_accuracy_updates(&mut self, updates: &[AccuracyUpdate]) {
        for update in updates {
            match self.agent_mut(update.agent) {
                Some(agent) => agent.weapon.accuracy = update.accuracy,
                None => tracing::debug!(
                    "Roster: ignoring accuracy update for absent agent {}",
                    update.agent
                ),
            }
        }
    }
}

impl TryFrom<Vec<AgentStats>> for Roster {
    type Error = ArenaError;

    fn try_from(participants: Vec<AgentStats>) -> ArenaResult<Self> {
        Self::new(participants)
    }
}

impl From<Roster> for Vec<AgentStats> {
    fn from(roster: Roster) -> Self {
        roster.participants
    }
}

/// A weapon-accuracy value computed for a participant during target evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccuracyUpdate {
    pub agent: AgentId,
    pub accuracy: f32,
}

impl AccuracyUpdate {
    pub const fn new(agent: AgentId, accuracy: f32) -> Self {
        Self { agent, accuracy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Position, Weapon, WeaponKind};

    fn agent(id: u32) -> AgentStats {
        AgentStats::new(
            AgentId(id),
            Weapon::from_kind(WeaponKind::Longsword, 10.0),
            Position::ORIGIN,
        )
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Roster::new(vec![agent(1), agent(2), agent(1)]);
        assert_eq!(result, Err(ArenaError::DuplicateAgent(AgentId(1))));
    }

    #[test]
    fn opponents_exclude_self_and_keep_order() {
        let roster = Roster::new(vec![agent(3), agent(1), agent(2)]).unwrap();
        let ids: Vec<_> = roster.opponents_of(AgentId(1)).map(|a| a.id).collect();
        assert_eq!(ids, vec![AgentId(3), AgentId(2)]);
    }

    #[test]
    fn accuracy_updates_write_through_in_order() {
        let mut roster = Roster::new(vec![agent(1), agent(2)]).unwrap();
        roster.apply_accuracy_updates(&[
            AccuracyUpdate::new(AgentId(2), 0.4),
            AccuracyUpdate::new(AgentId(1), 0.9),
            AccuracyUpdate::new(AgentId(2), 0.7),
            AccuracyUpdate::new(AgentId(9), 1.0),
        ]);
        assert_eq!(roster.agent(AgentId(1)).unwrap().weapon.accuracy, 0.9);
        assert_eq!(roster.agent(AgentId(2)).unwrap().weapon.accuracy, 0.7);
    }

    #[test]
    fn require_reports_unknown_agent() {
        let roster = Roster::new(vec![agent(1)]).unwrap();
        assert_eq!(
            roster.require(AgentId(5)).unwrap_err(),
            ArenaError::UnknownAgent(AgentId(5))
        );
    }
}
