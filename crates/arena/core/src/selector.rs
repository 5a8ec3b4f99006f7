//! Action selection.
//!
//! The [`ActionSelector`] scores every scorable [`ActionKind`] through the
//! [`DecisionContext`] and returns the one with the highest utility.
//!
//! # Tie-break
//!
//! Candidates are compared to the maximum utility with [`curves::approximately`],
//! and the selection is overwritten on every match while walking the candidates in
//! enumeration order. When two actions tie, the one declared later wins:
//!
//! ```text
//! Attack 0.50, Defend 0.50, Heal 0.20, Move 0.10  →  Defend
//! ```

use crate::action::{ActionCandidate, ActionKind, Candidates, Decision};
use crate::context::DecisionContext;
use crate::curves;

/// Caller-supplied perturbation added to each utility before comparison.
///
/// The engine itself is deterministic; any randomness comes from here.
pub trait UtilityJitter {
    /// Offset added to the utility of `action`. The sum is re-clamped to [0, 1].
    fn jitter(&self, action: ActionKind) -> f32;
}

/// Jitter source that leaves every utility untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJitter;

impl UtilityJitter for NoJitter {
    fn jitter(&self, _action: ActionKind) -> f32 {
        0.0
    }
}

/// Stateless action selector.
pub struct ActionSelector;

impl ActionSelector {
    /// Scores all actions and selects the best one.
    pub fn select(ctx: &DecisionContext<'_>) -> Decision {
        Self::select_with(ctx, &NoJitter)
    }

    /// Scores all actions with caller-supplied jitter and selects the best one.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The decision context for the acting agent
    /// * `jitter` - Offset source applied to each utility before comparison
    ///
    /// # Returns
    ///
    /// The winning action together with every scored candidate.
    pub fn select_with(ctx: &DecisionContext<'_>, jitter: &dyn UtilityJitter) -> Decision {
        let candidates = Self::evaluate_all(ctx, jitter);
        let action = Self::pick(&candidates);

        tracing::debug!(
            "ActionSelector: agent {} selected {} from {} candidates",
            ctx.agent().id,
            action,
            candidates.len()
        );

        Decision { action, candidates }
    }

    /// Scores every scorable action in enumeration order.
    ///
    /// Actions that need an opponent are skipped when the context has none.
    pub fn evaluate_all(ctx: &DecisionContext<'_>, jitter: &dyn UtilityJitter) -> Candidates {
        let mut candidates = Candidates::new();

        for action in ActionKind::SCORABLE {
            if action.requires_opponent() && !ctx.has_opponents() {
                tracing::debug!("  Action {}: skipped (no opponents)", action);
                continue;
            }
            let Some(utility) = ctx.utility(action) else {
                continue;
            };
            let utility = curves::clamp01(utility + jitter.jitter(action));

            tracing::debug!("  Action {}: utility={:.4}", action, utility);
            candidates.push(ActionCandidate::new(action, utility));
        }

        candidates
    }

    /// Picks the action whose utility matches the maximum, last match winning.
    ///
    /// Returns [`ActionKind::None`] for an empty candidate list.
    pub fn pick(candidates: &[ActionCandidate]) -> ActionKind {
        let Some(highest) = Self::highest_utility(candidates) else {
            return ActionKind::None;
        };

        let mut selected = ActionKind::None;
        for candidate in candidates {
            if curves::approximately(candidate.utility, highest) {
                selected = candidate.action;
            }
        }
        selected
    }

    /// Highest utility in the list, `None` if the list is empty.
    pub fn highest_utility(candidates: &[ActionCandidate]) -> Option<f32> {
        candidates
            .iter()
            .map(|candidate| candidate.utility)
            .reduce(f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CurveConfig;
    use crate::snapshot::OpponentSnapshot;
    use crate::stats::{AgentId, AgentStats, Position, Weapon, WeaponKind};

    fn candidates(utilities: [(ActionKind, f32); 4]) -> Vec<ActionCandidate> {
        utilities
            .into_iter()
            .map(|(action, utility)| ActionCandidate::new(action, utility))
            .collect()
    }

    #[test]
    fn later_action_wins_exact_tie() {
        let list = candidates([
            (ActionKind::Attack, 0.5),
            (ActionKind::Defend, 0.5),
            (ActionKind::Heal, 0.2),
            (ActionKind::Move, 0.1),
        ]);
        assert_eq!(ActionSelector::pick(&list), ActionKind::Defend);
    }

    #[test]
    fn later_action_wins_approximate_tie() {
        let list = candidates([
            (ActionKind::Attack, 0.7),
            (ActionKind::Defend, 0.1),
            (ActionKind::Heal, 0.3),
            (ActionKind::Move, 0.7 + 1e-8),
        ]);
        assert_eq!(ActionSelector::pick(&list), ActionKind::Move);
    }

    #[test]
    fn strict_maximum_wins_regardless_of_position() {
        let list = candidates([
            (ActionKind::Attack, 0.9),
            (ActionKind::Defend, 0.4),
            (ActionKind::Heal, 0.3),
            (ActionKind::Move, 0.2),
        ]);
        assert_eq!(ActionSelector::pick(&list), ActionKind::Attack);
    }

    #[test]
    fn empty_list_selects_none() {
        assert_eq!(ActionSelector::pick(&[]), ActionKind::None);
        assert_eq!(ActionSelector::highest_utility(&[]), None);
    }

    #[test]
    fn target_dependent_actions_are_skipped_without_opponents() {
        let me = AgentStats::new(
            AgentId(0),
            Weapon::from_kind(WeaponKind::Staff, 15.0),
            Position::ORIGIN,
        );
        let config = CurveConfig::default();
        let ctx = DecisionContext::new(&me, &[], &config);

        let scored: Vec<_> = ActionSelector::evaluate_all(&ctx, &NoJitter)
            .iter()
            .map(|candidate| candidate.action)
            .collect();
        assert_eq!(scored, vec![ActionKind::Defend, ActionKind::Heal]);
    }

    struct FavorMove;

    impl UtilityJitter for FavorMove {
        fn jitter(&self, action: ActionKind) -> f32 {
            if action == ActionKind::Move { 2.0 } else { 0.0 }
        }
    }

    #[test]
    fn jitter_is_applied_and_reclamped() {
        let me = AgentStats::new(
            AgentId(0),
            Weapon::from_kind(WeaponKind::Staff, 15.0),
            Position::ORIGIN,
        );
        let opponents = [OpponentSnapshot::new(AgentId(1), 3.0)];
        let config = CurveConfig::default();
        let ctx = DecisionContext::new(&me, &opponents, &config);

        let decision = ActionSelector::select_with(&ctx, &FavorMove);
        assert_eq!(decision.action, ActionKind::Move);
        assert_eq!(decision.utility_of(ActionKind::Move), Some(1.0));
    }
}
