//! Threat, accuracy and worth evaluation of every opponent.
//!
//! Evaluation runs as sequential passes over the snapshot list. Each pass builds a
//! complete new list from the previous one, so no pass ever observes a list that
//! another pass has only partly rewritten:
//!
//! 1. **Accuracy**: each opponent's accuracy against the acting agent
//! 2. **Threat**: the acting agent's accuracy, the threat it poses and the threat it faces
//! 3. **Ratio**: combined threat ratio per opponent
//! 4. **Worth**: target worth from the accuracy of pass 2
//!
//! Accuracy values that the evaluation wants written to weapons are returned as
//! [`AccuracyUpdate`]s instead of being written through.

use crate::context::DecisionContext;
use crate::curves;
use crate::error::{ArenaError, ArenaResult};
use crate::roster::{AccuracyUpdate, Roster};
use crate::snapshot::OpponentSnapshot;

/// Result of a full evaluation pass.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreatAssessment {
    /// Fully evaluated snapshots, in the order they were supplied.
    pub snapshots: Vec<OpponentSnapshot>,
    /// Accuracy writes in the order the passes produced them: one per opponent from
    /// the accuracy pass, then one acting-agent write per opponent from the threat pass.
    pub accuracy_updates: Vec<AccuracyUpdate>,
}

/// Stateless opponent evaluator.
pub struct ThreatEvaluator;

impl ThreatEvaluator {
    /// Runs every pass over the context's opponents.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The decision context holding the acting agent and its snapshots
    /// * `roster` - Source of the opponents' stats
    ///
    /// # Returns
    ///
    /// Fully evaluated snapshots and the accuracy writes, or
    /// [`ArenaError::StaleSnapshot`] if a snapshot's opponent is missing from `roster`.
    pub fn evaluate(ctx: &DecisionContext<'_>, roster: &Roster) -> ArenaResult<ThreatAssessment> {
        let mut accuracy_updates = Self::accuracy_pass(ctx, roster)?;

        let (snapshots, agent_updates) = Self::threat_pass(ctx, roster, ctx.opponents())?;
        accuracy_updates.extend(agent_updates);

        let snapshots = Self::ratio_pass(ctx, &snapshots);
        let snapshots = Self::worth_pass(ctx, &snapshots);

        for snapshot in &snapshots {
            tracing::trace!(
                "  Opponent {}: dist={:.2} acc={:.4} threat={:.4}/{:.4} ratio={:.4} worth={:.4}",
                snapshot.opponent,
                snapshot.distance_to_agent,
                snapshot.agent_accuracy,
                snapshot.agent_threat,
                snapshot.threat_to_agent,
                snapshot.threat_ratio,
                snapshot.worth
            );
        }

        Ok(ThreatAssessment {
            snapshots,
            accuracy_updates,
        })
    }

    /// Pass 1: each opponent's accuracy against the acting agent, floored at 0.
    pub fn accuracy_pass(
        ctx: &DecisionContext<'_>,
        roster: &Roster,
    ) -> ArenaResult<Vec<AccuracyUpdate>> {
        ctx.opponents()
            .iter()
            .map(|snapshot| {
                let opponent = roster
                    .agent(snapshot.opponent)
                    .ok_or(ArenaError::StaleSnapshot(snapshot.opponent))?;
                let accuracy = curves::enemy_accuracy(snapshot.distance_to_agent, ctx.config());
                Ok(AccuracyUpdate::new(opponent.id, accuracy.max(0.0)))
            })
            .collect()
    }

    /// Pass 2: accuracy and threat in both directions.
    ///
    /// Returns the rebuilt snapshots and, per opponent, the acting agent's accuracy
    /// against it.
    pub fn threat_pass(
        ctx: &DecisionContext<'_>,
        roster: &Roster,
        snapshots: &[OpponentSnapshot],
    ) -> ArenaResult<(Vec<OpponentSnapshot>, Vec<AccuracyUpdate>)> {
        let agent = ctx.agent();
        let config = ctx.config();

        let mut rebuilt = Vec::with_capacity(snapshots.len());
        let mut updates = Vec::with_capacity(snapshots.len());

        for snapshot in snapshots {
            let opponent = roster
                .agent(snapshot.opponent)
                .ok_or(ArenaError::StaleSnapshot(snapshot.opponent))?;

            let accuracy =
                curves::agent_accuracy(snapshot.distance_to_agent, agent.weapon.range, config);
            let threat_to_agent = curves::threat(
                agent.health,
                opponent.weapon.damage,
                agent.max_health,
                config,
            );
            let agent_threat = curves::threat(
                opponent.health,
                agent.weapon.damage,
                opponent.max_health,
                config,
            );

            updates.push(AccuracyUpdate::new(agent.id, accuracy));
            rebuilt.push(snapshot.with_threats(accuracy, agent_threat, threat_to_agent));
        }

        Ok((rebuilt, updates))
    }

    /// Pass 3: combined threat ratio.
    pub fn ratio_pass(
        ctx: &DecisionContext<'_>,
        snapshots: &[OpponentSnapshot],
    ) -> Vec<OpponentSnapshot> {
        snapshots
            .iter()
            .map(|snapshot| {
                snapshot.with_threat_ratio(curves::threat_ratio(
                    snapshot.agent_threat,
                    snapshot.threat_to_agent,
                    ctx.config(),
                ))
            })
            .collect()
    }

    /// Pass 4: target worth from the acting agent's accuracy.
    pub fn worth_pass(
        ctx: &DecisionContext<'_>,
        snapshots: &[OpponentSnapshot],
    ) -> Vec<OpponentSnapshot> {
        snapshots
            .iter()
            .map(|snapshot| {
                snapshot.with_worth(curves::worth(snapshot.agent_accuracy, ctx.config()))
            })
            .collect()
    }
}
