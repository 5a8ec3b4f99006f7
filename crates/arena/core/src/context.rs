//! Decision context shared by the action selector and the threat evaluator.
//!
//! The context bundles everything one decision cycle reads: the acting agent, the
//! opponent snapshots built at the start of the cycle and the curve table. All
//! derived signals are computed on demand from those three inputs.

use crate::action::ActionKind;
use crate::config::CurveConfig;
use crate::curves;
use crate::snapshot::{self, OpponentSnapshot};
use crate::stats::AgentStats;

/// Read-only inputs for one decision cycle.
#[derive(Clone, Copy, Debug)]
pub struct DecisionContext<'a> {
    agent: &'a AgentStats,
    opponents: &'a [OpponentSnapshot],
    config: &'a CurveConfig,
}

impl<'a> DecisionContext<'a> {
    pub fn new(
        agent: &'a AgentStats,
        opponents: &'a [OpponentSnapshot],
        config: &'a CurveConfig,
    ) -> Self {
        Self {
            agent,
            opponents,
            config,
        }
    }

    pub fn agent(&self) -> &'a AgentStats {
        self.agent
    }

    pub fn opponents(&self) -> &'a [OpponentSnapshot] {
        self.opponents
    }

    pub fn config(&self) -> &'a CurveConfig {
        self.config
    }

    pub fn has_opponents(&self) -> bool {
        !self.opponents.is_empty()
    }

    // ========================================================================
    // Derived signals
    // ========================================================================

    /// Mean weapon efficiency of the acting agent over all opponents (0 without any).
    pub fn average_efficiency(&self) -> f32 {
        let range = self.agent.weapon.range;
        curves::average(self.opponents.iter().map(|opponent| {
            curves::weapon_efficiency(opponent.distance_to_agent, range, self.config)
        }))
    }

    pub fn strength(&self) -> f32 {
        curves::strength(self.average_efficiency(), self.config)
    }

    pub fn rage(&self) -> f32 {
        curves::rage(self.strength(), self.agent.health_ratio(), self.config)
    }

    /// Closeness to the nearest opponent (0 without any).
    pub fn closeness(&self) -> f32 {
        snapshot::closest(self.opponents)
            .map(|nearest| curves::closeness(nearest.distance_to_agent, self.config))
            .unwrap_or(0.0)
    }

    /// Average opponent distance, normalized (0 without any).
    pub fn urge_to_move(&self) -> f32 {
        let average_distance =
            curves::average(self.opponents.iter().map(|opponent| opponent.distance_to_agent));
        curves::urge_to_move(average_distance, self.config)
    }

    // ========================================================================
    // Action utilities
    // ========================================================================

    pub fn attack_utility(&self) -> f32 {
        curves::attack_utility(self.rage(), self.config)
    }

    pub fn defend_utility(&self) -> f32 {
        curves::defend_utility(self.agent.mana_ratio(), self.config)
    }

    pub fn heal_utility(&self) -> f32 {
        curves::heal_utility(self.agent.health_ratio(), self.agent.mana_ratio(), self.config)
    }

    pub fn move_utility(&self) -> f32 {
        curves::move_utility(self.closeness(), self.urge_to_move(), self.config)
    }

    /// Utility of a scorable action. [`ActionKind::None`] has no utility.
    pub fn utility(&self, action: ActionKind) -> Option<f32> {
        match action {
            ActionKind::Attack => Some(self.attack_utility()),
            ActionKind::Defend => Some(self.defend_utility()),
            ActionKind::Heal => Some(self.heal_utility()),
            ActionKind::Move => Some(self.move_utility()),
            ActionKind::None => None,
        }
    }
}
