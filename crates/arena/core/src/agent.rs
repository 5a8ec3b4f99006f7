//! Decision-cycle entry points invoked by the turn scheduler.

use crate::action::Decision;
use crate::config::{CurveConfig, TargetFallback};
use crate::context::DecisionContext;
use crate::error::ArenaResult;
use crate::roster::{AccuracyUpdate, Roster};
use crate::selector::{ActionSelector, NoJitter, UtilityJitter};
use crate::snapshot::OpponentSnapshot;
use crate::stats::AgentId;
use crate::target::TargetSelector;
use crate::threat::ThreatEvaluator;

/// Outcome of a target query.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSelection {
    /// The chosen opponent, or `None` when there is no viable target.
    pub target: Option<OpponentSnapshot>,
    /// Every opponent as evaluated for this query.
    pub snapshots: Vec<OpponentSnapshot>,
    /// Accuracy writes produced by the evaluation, in order. When a target was
    /// chosen, the last entry is the acting agent's accuracy against it.
    pub accuracy_updates: Vec<AccuracyUpdate>,
}

impl TargetSelection {
    pub fn target_id(&self) -> Option<AgentId> {
        self.target.map(|snapshot| snapshot.opponent)
    }
}

/// An AI controller driven once per turn by the scheduler.
pub trait CombatAgent {
    /// Chooses the action for `agent` this turn.
    fn decide(&mut self, roster: &Roster, agent: AgentId) -> ArenaResult<Decision>;

    /// Chooses the opponent `agent` should act against.
    fn target(&mut self, roster: &Roster, agent: AgentId) -> ArenaResult<TargetSelection>;
}

#[derive(Debug, Clone)]
struct OpponentCache {
    agent: AgentId,
    snapshots: Vec<OpponentSnapshot>,
}

/// Utility-based combat agent.
///
/// Holds the curve table, the target fallback policy, an optional jitter source and
/// the opponent snapshots rebuilt at the start of every [`decide`](CombatAgent::decide).
pub struct UtilityAgent {
    config: CurveConfig,
    fallback: TargetFallback,
    jitter: Box<dyn UtilityJitter>,
    cache: Option<OpponentCache>,
}

impl UtilityAgent {
    /// Creates an agent after validating the curve table.
    ///
    /// # Arguments
    ///
    /// * `config` - Curve constant table used by every decision cycle
    ///
    /// # Returns
    ///
    /// An agent with the strict target fallback and no jitter, or
    /// [`ArenaError::InvalidConfig`](crate::error::ArenaError::InvalidConfig) for a
    /// non-finite constant or a zero divisor.
    pub fn new(config: CurveConfig) -> ArenaResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fallback: TargetFallback::default(),
            jitter: Box::new(NoJitter),
            cache: None,
        })
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: TargetFallback) -> Self {
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub fn with_jitter(mut self, jitter: Box<dyn UtilityJitter>) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    pub fn fallback(&self) -> TargetFallback {
        self.fallback
    }

    /// Opponent snapshots built by the last decision cycle, if any.
    pub fn cached_opponents(&self) -> Option<&[OpponentSnapshot]> {
        self.cache.as_ref().map(|cache| cache.snapshots.as_slice())
    }

    fn refresh_cache(&mut self, roster: &Roster, agent: AgentId) -> ArenaResult<()> {
        let stats = roster.require(agent)?;
        self.cache = Some(OpponentCache {
            agent,
            snapshots: OpponentSnapshot::collect(stats, roster),
        });
        Ok(())
    }

    fn cache_for(&mut self, roster: &Roster, agent: AgentId) -> ArenaResult<&[OpponentSnapshot]> {
        let stale = self.cache.as_ref().is_none_or(|cache| cache.agent != agent);
        if stale {
            tracing::debug!("UtilityAgent: rebuilding opponent snapshots for {}", agent);
            self.refresh_cache(roster, agent)?;
        }
        Ok(self
            .cache
            .as_ref()
            .map(|cache| cache.snapshots.as_slice())
            .unwrap_or_default())
    }
}

impl CombatAgent for UtilityAgent {
    fn decide(&mut self, roster: &Roster, agent: AgentId) -> ArenaResult<Decision> {
        self.refresh_cache(roster, agent)?;

        let stats = roster.require(agent)?;
        let opponents = self.cached_opponents().unwrap_or_default();
        let ctx = DecisionContext::new(stats, opponents, &self.config);

        Ok(ActionSelector::select_with(&ctx, self.jitter.as_ref()))
    }

    fn target(&mut self, roster: &Roster, agent: AgentId) -> ArenaResult<TargetSelection> {
        let stats = *roster.require(agent)?;
        let fallback = self.fallback;
        let opponents = self.cache_for(roster, agent)?.to_vec();

        let ctx = DecisionContext::new(&stats, &opponents, &self.config);
        let assessment = ThreatEvaluator::evaluate(&ctx, roster)?;
        let target = TargetSelector::select(&assessment.snapshots, fallback);

        let mut accuracy_updates = assessment.accuracy_updates;
        if let Some(chosen) = target {
            accuracy_updates.push(AccuracyUpdate::new(agent, chosen.agent_accuracy));
        }

        tracing::debug!(
            "UtilityAgent: agent {} targets {:?}",
            agent,
            target.map(|snapshot| snapshot.opponent)
        );

        Ok(TargetSelection {
            target,
            snapshots: assessment.snapshots,
            accuracy_updates,
        })
    }
}
