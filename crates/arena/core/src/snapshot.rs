//! Per-cycle opponent snapshots.
//!
//! A snapshot is a value record: every evaluation pass produces a fresh snapshot
//! through the `with_*` builders and replaces the old one wholesale.

use crate::roster::Roster;
use crate::stats::{AgentId, AgentStats};

/// Derived view of one opponent from the acting agent's perspective.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentSnapshot {
    /// Opponent this snapshot describes (resolved through the [`Roster`]).
    pub opponent: AgentId,
    /// Euclidean distance to the acting agent when the snapshot was built.
    pub distance_to_agent: f32,
    /// Threat the opponent poses to the acting agent, [0, 1].
    pub threat_to_agent: f32,
    /// The acting agent's hit probability against the opponent, [0, 1].
    pub agent_accuracy: f32,
    /// Threat the acting agent poses to the opponent, [0, 1].
    pub agent_threat: f32,
    /// Weighted blend of `agent_threat` and `threat_to_agent`, [0, 1].
    pub threat_ratio: f32,
    /// Target worth derived from `agent_accuracy`, [0, 1].
    pub worth: f32,
}

impl OpponentSnapshot {
    /// Snapshot with only the distance filled in.
    pub const fn new(opponent: AgentId, distance_to_agent: f32) -> Self {
        Self {
            opponent,
            distance_to_agent,
            threat_to_agent: 0.0,
            agent_accuracy: 0.0,
            agent_threat: 0.0,
            threat_ratio: 0.0,
            worth: 0.0,
        }
    }

    /// Builds one snapshot per participant other than `agent`, in roster order.
    ///
    /// Returns an empty list when the roster holds nobody else.
    pub fn collect(agent: &AgentStats, roster: &Roster) -> Vec<Self> {
        let snapshots: Vec<Self> = roster
            .opponents_of(agent.id)
            .map(|opponent| Self::new(opponent.id, agent.distance_to(opponent)))
            .collect();

        tracing::trace!(
            "OpponentSnapshot: agent {} sees {} opponents",
            agent.id,
            snapshots.len()
        );

        snapshots
    }

    /// Snapshot carrying the results of the threat pass.
    #[must_use]
    pub const fn with_threats(
        self,
        agent_accuracy: f32,
        agent_threat: f32,
        threat_to_agent: f32,
    ) -> Self {
        Self {
            agent_accuracy,
            agent_threat,
            threat_to_agent,
            ..self
        }
    }

    #[must_use]
    pub const fn with_threat_ratio(self, threat_ratio: f32) -> Self {
        Self {
            threat_ratio,
            ..self
        }
    }

    #[must_use]
    pub const fn with_worth(self, worth: f32) -> Self {
        Self { worth, ..self }
    }
}

/// Opponent that is nearest to the acting agent.
///
/// On equal distances the later snapshot wins, matching the selector tie-break.
pub fn closest(snapshots: &[OpponentSnapshot]) -> Option<&OpponentSnapshot> {
    let nearest = snapshots
        .iter()
        .map(|s| s.distance_to_agent)
        .fold(f32::INFINITY, f32::min);

    snapshots
        .iter()
        .rev()
        .find(|s| crate::curves::approximately(s.distance_to_agent, nearest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Position, Weapon, WeaponKind};

    fn agent_at(id: u32, x: f32) -> AgentStats {
        AgentStats::new(
            AgentId(id),
            Weapon::from_kind(WeaponKind::Dagger, 5.0),
            Position::new(x, 0.0, 0.0),
        )
    }

    #[test]
    fn collect_skips_acting_agent_and_zeroes_derived_fields() {
        let me = agent_at(0, 0.0);
        let roster = Roster::new(vec![me, agent_at(1, 3.0), agent_at(2, 7.5)]).unwrap();

        let snapshots = OpponentSnapshot::collect(&me, &roster);

        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0], OpponentSnapshot::new(AgentId(1), 3.0));
        assert_eq!(snapshots[1].opponent, AgentId(2));
        assert_eq!(snapshots[1].distance_to_agent, 7.5);
        assert_eq!(snapshots[1].worth, 0.0);
    }

    #[test]
    fn collect_with_lone_agent_is_empty() {
        let me = agent_at(0, 0.0);
        let roster = Roster::new(vec![me]).unwrap();
        assert!(OpponentSnapshot::collect(&me, &roster).is_empty());
    }

    #[test]
    fn builders_replace_only_their_fields() {
        let base = OpponentSnapshot::new(AgentId(4), 2.0);
        let rated = base.with_threats(0.8, 0.1, 0.3).with_threat_ratio(0.5);
        let worthy = rated.with_worth(0.7);

        assert_eq!(base.agent_accuracy, 0.0);
        assert_eq!(rated.threat_ratio, 0.5);
        assert_eq!(worthy.threat_ratio, 0.5);
        assert_eq!(worthy.worth, 0.7);
        assert_eq!(worthy.distance_to_agent, 2.0);
    }

    #[test]
    fn closest_prefers_last_on_tie() {
        let snapshots = [
            OpponentSnapshot::new(AgentId(1), 4.0),
            OpponentSnapshot::new(AgentId(2), 2.0),
            OpponentSnapshot::new(AgentId(3), 2.0),
        ];
        assert_eq!(closest(&snapshots).unwrap().opponent, AgentId(3));
        assert!(closest(&[]).is_none());
    }
}
