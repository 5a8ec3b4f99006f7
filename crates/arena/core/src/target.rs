//! Target selection over fully evaluated opponent snapshots.
//!
//! The most viable target is the opponent that simultaneously holds the highest
//! worth and the highest threat ratio. Both maxima are found in separate scans; the
//! last opponent matching both (within the engine epsilon) wins.
//!
//! When no single opponent holds both maxima, [`TargetFallback`] decides the
//! outcome. The default, [`TargetFallback::Strict`], reports no target.

use crate::config::TargetFallback;
use crate::curves;
use crate::snapshot::OpponentSnapshot;

/// Stateless target selector.
pub struct TargetSelector;

impl TargetSelector {
    /// Selects the most viable target.
    ///
    /// # Arguments
    ///
    /// * `snapshots` - Opponents after every evaluation pass, in roster order
    /// * `fallback` - Policy applied when no opponent holds both maxima
    ///
    /// # Returns
    ///
    /// The chosen opponent, or `None` if there are no opponents or the fallback
    /// declines to choose.
    pub fn select(
        snapshots: &[OpponentSnapshot],
        fallback: TargetFallback,
    ) -> Option<OpponentSnapshot> {
        let highest_worth = Self::highest(snapshots, |s| s.worth)?;
        let highest_ratio = Self::highest(snapshots, |s| s.threat_ratio)?;

        let viable = Self::last_matching(snapshots, |s| {
            curves::approximately(s.worth, highest_worth)
                && curves::approximately(s.threat_ratio, highest_ratio)
        });
        if viable.is_some() {
            return viable;
        }

        let fallback_target = match fallback {
            TargetFallback::Strict => None,
            TargetFallback::MaxWorth => Self::last_matching(snapshots, |s| {
                curves::approximately(s.worth, highest_worth)
            }),
            TargetFallback::MaxThreatRatio => Self::last_matching(snapshots, |s| {
                curves::approximately(s.threat_ratio, highest_ratio)
            }),
        };

        tracing::warn!(
            "TargetSelector: no opponent holds both max worth {:.4} and max threat ratio {:.4}; \
             fallback {} chose {:?}",
            highest_worth,
            highest_ratio,
            fallback,
            fallback_target.map(|s| s.opponent)
        );

        fallback_target
    }

    fn highest(
        snapshots: &[OpponentSnapshot],
        field: impl Fn(&OpponentSnapshot) -> f32,
    ) -> Option<f32> {
        snapshots.iter().map(field).reduce(f32::max)
    }

    fn last_matching(
        snapshots: &[OpponentSnapshot],
        predicate: impl Fn(&OpponentSnapshot) -> bool,
    ) -> Option<OpponentSnapshot> {
        snapshots.iter().rev().find(|s| predicate(s)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::AgentId;

    fn rated(id: u32, worth: f32, threat_ratio: f32) -> OpponentSnapshot {
        OpponentSnapshot::new(AgentId(id), 1.0)
            .with_threat_ratio(threat_ratio)
            .with_worth(worth)
    }

    fn split_maxima() -> [OpponentSnapshot; 3] {
        [
            rated(1, 0.9, 0.2),
            rated(2, 0.3, 0.8),
            rated(3, 0.5, 0.5),
        ]
    }

    #[test]
    fn opponent_with_both_maxima_is_selected() {
        let snapshots = [rated(1, 0.4, 0.4), rated(2, 0.9, 0.7), rated(3, 0.6, 0.1)];
        let target = TargetSelector::select(&snapshots, TargetFallback::Strict).unwrap();
        assert_eq!(target.opponent, AgentId(2));
    }

    #[test]
    fn strict_reports_no_target_when_maxima_are_split() {
        assert_eq!(
            TargetSelector::select(&split_maxima(), TargetFallback::Strict),
            None
        );
    }

    #[test]
    fn fallbacks_pick_single_maximum() {
        let snapshots = split_maxima();
        let by_worth = TargetSelector::select(&snapshots, TargetFallback::MaxWorth).unwrap();
        let by_ratio = TargetSelector::select(&snapshots, TargetFallback::MaxThreatRatio).unwrap();
        assert_eq!(by_worth.opponent, AgentId(1));
        assert_eq!(by_ratio.opponent, AgentId(2));
    }

    #[test]
    fn last_of_identical_opponents_wins() {
        let snapshots = [rated(1, 0.5, 0.5), rated(2, 0.5, 0.5)];
        let target = TargetSelector::select(&snapshots, TargetFallback::Strict).unwrap();
        assert_eq!(target.opponent, AgentId(2));
    }

    #[test]
    fn no_opponents_means_no_target() {
        assert_eq!(TargetSelector::select(&[], TargetFallback::MaxWorth), None);
    }
}
