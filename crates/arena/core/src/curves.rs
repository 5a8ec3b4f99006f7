//! Utility response curves.
//!
//! Each curve maps one or more normalized signals to a utility in [0, 1]. Curves are
//! pure, closed-form and static: the only inputs are the signals and the constant
//! table in [`CurveConfig`].
//!
//! # Curves
//!
//! ```text
//! attack        = clamp(sy * ln(rage + tx) + ty)
//! move          = clamp((wc * closeness + wu * urge_to_move) / total)
//! heal          = clamp((wu * urgency_to_heal + mana_abundance) / total)
//! defend        = clamp(exp(s * mana_abundance - t))
//! ```
//!
//! # Supporting signals
//!
//! ```text
//! rage          = clamp((ws * strength + wh * (1 - hp)) / total / norm)
//! strength      = clamp(sin(s * average_efficiency))
//! efficiency    = 0 if d > r, else 1 / sin(sx * d / r + tx) - ty     (unbounded)
//! accuracy      = clamp(sy * efficiency^p + ty)
//! enemy acc.    = clamp(intercept - falloff * d)
//! urgency       = |clamp(sy * atan(sx * hp + tx) + ty)|
//! abundance     = clamp(acos((1 - mana)^p) - ty)
//! closeness     = clamp((closest / norm)^p)
//! urge_to_move  = average_distance / norm                            (unclamped)
//! threat        = clamp((hp / max - (hp - dmg) / max)^p)
//! threat_ratio  = clamp((wa * agent_threat + wt * threat_to_agent) / total)
//! worth         = clamp(accuracy^p)
//! ```
//!
//! Divisions by zero and powers of negative bases fall back to 0 instead of
//! producing NaN, so no non-finite value ever reaches a comparison.

use crate::config::CurveConfig;

/// Relative tolerance used by [`approximately`].
pub const APPROX_RELATIVE_TOLERANCE: f32 = 1e-6;

/// Absolute floor used by [`approximately`] when both operands are near zero.
pub const APPROX_ABSOLUTE_TOLERANCE: f32 = f32::MIN_POSITIVE * 8.0;

// ============================================================================
// Numeric helpers
// ============================================================================

/// Clamps a value to [0, 1]. NaN maps to 0.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Floating-point equality within the engine epsilon.
#[inline]
pub fn approximately(a: f32, b: f32) -> bool {
    let scale = a.abs().max(b.abs());
    (b - a).abs() < (APPROX_RELATIVE_TOLERANCE * scale).max(APPROX_ABSOLUTE_TOLERANCE)
}

/// Division that yields 0 for a zero or non-finite divisor.
#[inline]
pub fn safe_div(numerator: f32, denominator: f32) -> f32 {
    if denominator == 0.0 || !denominator.is_finite() {
        0.0
    } else {
        numerator / denominator
    }
}

/// Power of a base that is treated as 0 when negative.
#[inline]
pub fn pow_non_negative(base: f32, power: f32) -> f32 {
    if base <= 0.0 || base.is_nan() {
        0.0
    } else {
        base.powf(power)
    }
}

/// Mean of a sequence, 0 when the sequence is empty.
pub fn average(values: impl IntoIterator<Item = f32>) -> f32 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0f32, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f32 }
}

// ============================================================================
// Action utilities
// ============================================================================

/// Attack utility from the agent's rage.
pub fn attack_utility(rage: f32, config: &CurveConfig) -> f32 {
    let shifted = rage + config.attack_translation_x;
    if shifted <= 0.0 {
        // ln diverges to -inf; the clamped curve bottoms out at 0.
        return 0.0;
    }
    clamp01(config.attack_scale_y * shifted.ln() + config.attack_translation_y)
}

/// Move utility from closeness to the nearest opponent and the urge to move.
pub fn move_utility(closeness: f32, urge_to_move: f32, config: &CurveConfig) -> f32 {
    let blended =
        config.move_closeness_weight * closeness + config.move_urge_weight * urge_to_move;
    clamp01(safe_div(blended, config.move_weights_total))
}

/// Healing utility from the agent's health and mana ratios.
pub fn heal_utility(health_ratio: f32, mana_ratio: f32, config: &CurveConfig) -> f32 {
    let blended = config.heal_urgency_weight * urgency_to_heal(health_ratio, config)
        + mana_abundance(mana_ratio, config);
    clamp01(safe_div(blended, config.heal_weights_total))
}

/// Defend utility from the agent's mana ratio.
pub fn defend_utility(mana_ratio: f32, config: &CurveConfig) -> f32 {
    let abundance = mana_abundance(mana_ratio, config);
    clamp01((config.defend_exp_scale * abundance - config.defend_exp_translation).exp())
}

// ============================================================================
// Supporting signals
// ============================================================================

/// Rage from strength and the fraction of health already lost.
pub fn rage(strength: f32, health_ratio: f32, config: &CurveConfig) -> f32 {
    let health_lost = 1.0 - health_ratio;
    let blended = config.rage_strength_weight * strength
        + config.rage_health_lost_weight * health_lost;
    clamp01(safe_div(
        safe_div(blended, config.rage_weights_total),
        config.rage_normalization,
    ))
}

/// Strength from the agent's average weapon efficiency over all opponents.
pub fn strength(average_efficiency: f32, config: &CurveConfig) -> f32 {
    clamp01((config.strength_sin_scale * average_efficiency).sin())
}

/// Weapon efficiency at a distance, given the weapon's range.
///
/// Zero when the target is beyond reach; a distance equal to the range (within the
/// engine epsilon) is still in reach. Inside the range this is a cosecant response
/// that can legitimately exceed 1, so callers clamp downstream. A weapon with no
/// positive range has no efficiency at any distance.
pub fn weapon_efficiency(distance: f32, range: f32, config: &CurveConfig) -> f32 {
    if range <= 0.0 || !range.is_finite() {
        return 0.0;
    }
    if distance > range && !approximately(distance, range) {
        return 0.0;
    }

    let ratio = distance / range;
    let sine = (config.efficiency_cosec_scale_x * ratio + config.efficiency_cosec_translation_x)
        .sin();
    safe_div(1.0, sine) - config.efficiency_cosec_translation_y
}

/// The acting agent's hit probability against an opponent at `distance`.
pub fn agent_accuracy(distance: f32, range: f32, config: &CurveConfig) -> f32 {
    let efficiency = weapon_efficiency(distance, range, config);
    clamp01(
        config.accuracy_scale_y * pow_non_negative(efficiency, config.accuracy_power)
            + config.accuracy_translation_y,
    )
}

/// An opponent's hit probability against the acting agent.
///
/// Linear falloff, deliberately cheaper than [`agent_accuracy`].
pub fn enemy_accuracy(distance: f32, config: &CurveConfig) -> f32 {
    clamp01(config.enemy_accuracy_intercept - config.enemy_accuracy_falloff * distance)
}

/// Urgency to heal from the health ratio. Non-increasing in health.
pub fn urgency_to_heal(health_ratio: f32, config: &CurveConfig) -> f32 {
    let urgency = config.urgency_scale_y
        * (config.urgency_scale_x * health_ratio + config.urgency_translation_x).atan()
        + config.urgency_translation_y;
    clamp01(urgency).abs()
}

/// Mana abundance from the mana ratio.
pub fn mana_abundance(mana_ratio: f32, config: &CurveConfig) -> f32 {
    let missing = 1.0 - mana_ratio;
    // acos is only defined on [-1, 1].
    let shaped = pow_non_negative(missing, config.mana_abundance_power).min(1.0);
    clamp01(shaped.acos() - config.mana_abundance_translation_y)
}

/// Closeness from the distance to the nearest opponent.
pub fn closeness(closest_distance: f32, config: &CurveConfig) -> f32 {
    let normalized = safe_div(closest_distance, config.distance_normalization);
    clamp01(pow_non_negative(normalized, config.closeness_power))
}

/// Urge to move from the average distance to all opponents. Not clamped.
pub fn urge_to_move(average_distance: f32, config: &CurveConfig) -> f32 {
    safe_div(average_distance, config.distance_normalization)
}

/// Damage a hit would take off `health`, relative to `max_health`.
///
/// Evaluated as a difference of two health ratios rather than `damage / max_health`.
pub fn damage_relative_to_health(health: f32, damage: f32, max_health: f32) -> f32 {
    safe_div(health, max_health) - safe_div(health - damage, max_health)
}

/// Threat a unit dealing `damage` poses to a target with `health` of `max_health`.
///
/// Zero damage is zero threat. Damage beyond `max_health` saturates at 1.
pub fn threat(health: f32, damage: f32, max_health: f32, config: &CurveConfig) -> f32 {
    let relative = damage_relative_to_health(health, damage, max_health);
    if relative == 0.0 {
        return 0.0;
    }
    clamp01(pow_non_negative(relative, config.threat_power))
}

/// Combined threat ratio of an opponent.
pub fn threat_ratio(agent_threat: f32, threat_to_agent: f32, config: &CurveConfig) -> f32 {
    let blended = config.threat_ratio_agent_threat_weight * agent_threat
        + config.threat_ratio_threat_to_agent_weight * threat_to_agent;
    clamp01(safe_div(blended, config.threat_ratio_weights_total))
}

/// Worth of an opponent from the acting agent's accuracy against it.
pub fn worth(accuracy: f32, config: &CurveConfig) -> f32 {
    clamp01(pow_non_negative(accuracy, config.worth_power))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> CurveConfig {
        CurveConfig::default()
    }

    fn samples(steps: usize) -> impl Iterator<Item = f32> {
        (0..=steps).map(move |i| i as f32 / steps as f32)
    }

    #[test]
    fn urgency_to_heal_is_bounded_and_non_increasing() {
        let config = cfg();
        let mut previous = f32::INFINITY;
        for hp in samples(200) {
            let urgency = urgency_to_heal(hp, &config);
            assert!((0.0..=1.0).contains(&urgency), "hp={hp} urgency={urgency}");
            assert!(urgency <= previous + 1e-6, "not monotonic at hp={hp}");
            previous = urgency;
        }
        assert!(urgency_to_heal(0.0, &config) >= urgency_to_heal(1.0, &config));
    }

    #[test]
    fn mana_abundance_is_bounded_and_peaks_at_full_mana() {
        let config = cfg();
        let mut previous = f32::NEG_INFINITY;
        for mana in samples(200) {
            let abundance = mana_abundance(mana, &config);
            assert!((0.0..=1.0).contains(&abundance), "mana={mana}");
            assert!(abundance >= previous - 1e-6, "not monotonic at mana={mana}");
            previous = abundance;
        }
        assert_eq!(mana_abundance(1.0, &config), 1.0);
        assert_eq!(mana_abundance(0.0, &config), 0.0);
    }

    #[test]
    fn mana_abundance_tolerates_overfull_mana() {
        let abundance = mana_abundance(1.5, &cfg());
        assert!(abundance.is_finite());
        assert_eq!(abundance, 1.0);
    }

    #[test]
    fn efficiency_is_zero_beyond_range() {
        let config = cfg();
        assert_eq!(weapon_efficiency(10.01, 10.0, &config), 0.0);
        assert_eq!(weapon_efficiency(50.0, 10.0, &config), 0.0);
    }

    #[test]
    fn efficiency_at_exact_range_follows_curve() {
        let config = cfg();
        let expected = 1.0 / (0.5f32 * 1.0 + 0.5).sin() - 0.65;
        let at_range = weapon_efficiency(10.0, 10.0, &config);
        assert!(at_range > 0.0);
        assert!((at_range - expected).abs() < 1e-6);
    }

    #[test]
    fn efficiency_can_exceed_one_at_point_blank() {
        let efficiency = weapon_efficiency(0.0, 10.0, &cfg());
        assert!(efficiency > 1.0, "cosecant peak should not be clamped: {efficiency}");
        // Downstream accuracy is clamped regardless.
        assert_eq!(agent_accuracy(0.0, 10.0, &cfg()), 1.0);
    }

    #[test]
    fn efficiency_without_range_is_zero() {
        assert_eq!(weapon_efficiency(0.0, 0.0, &cfg()), 0.0);
        assert_eq!(weapon_efficiency(1.0, -2.0, &cfg()), 0.0);
    }

    #[test]
    fn zero_damage_is_zero_threat() {
        let config = cfg();
        for health in [0.0, 1.0, 2500.0, 5000.0, 7000.0] {
            assert_eq!(threat(health, 0.0, 5000.0, &config), 0.0);
        }
    }

    #[test]
    fn threat_scales_with_damage_to_health_ratio() {
        let config = cfg();
        let light = threat(5000.0, 500.0, 5000.0, &config);
        let heavy = threat(5000.0, 1200.0, 5000.0, &config);
        assert!(heavy > light);
        assert!((light - 0.1f32.powf(1.5)).abs() < 1e-5);
    }

    #[test]
    fn threat_saturates_when_damage_exceeds_max_health() {
        let config = cfg();
        assert_eq!(threat(1000.0, 1200.0, 1000.0, &config), 1.0);
        assert_eq!(threat(1000.0, 1000.0, 1000.0, &config), 1.0);
    }

    #[test]
    fn threat_with_zero_max_health_falls_back_to_zero() {
        assert_eq!(threat(100.0, 800.0, 0.0, &cfg()), 0.0);
    }

    #[test]
    fn enemy_accuracy_falls_off_linearly() {
        let config = cfg();
        assert_eq!(enemy_accuracy(0.0, &config), 1.0);
        assert!((enemy_accuracy(4.0, &config) - 0.6).abs() < 1e-6);
        assert_eq!(enemy_accuracy(20.0, &config), 0.0);
    }

    #[test]
    fn attack_utility_is_monotonic_in_rage() {
        let config = cfg();
        let mut previous = f32::NEG_INFINITY;
        for r in samples(100) {
            let utility = attack_utility(r, &config);
            assert!((0.0..=1.0).contains(&utility));
            assert!(utility >= previous);
            previous = utility;
        }
        assert_eq!(attack_utility(0.0, &config), 0.0);
    }

    #[test]
    fn defend_utility_falls_as_mana_rises() {
        let config = cfg();
        let empty = defend_utility(0.0, &config);
        let full = defend_utility(1.0, &config);
        assert!(empty > full);
        assert!((full - (-2.1f32).exp()).abs() < 1e-5);
    }

    #[test]
    fn move_utility_blends_and_clamps() {
        let config = cfg();
        assert_eq!(move_utility(0.0, 0.0, &config), 0.0);
        let blended = move_utility(0.5, 0.25, &config);
        assert!((blended - (3.0 * 0.5 + 4.0 * 0.25) / 5.0).abs() < 1e-6);
        assert_eq!(move_utility(1.0, 3.0, &config), 1.0);
    }

    #[test]
    fn urge_to_move_is_unclamped() {
        assert!((urge_to_move(250.0, &cfg()) - 2.5).abs() < 1e-6);
    }

    #[test]
    fn threat_ratio_keeps_distinct_weights() {
        let config = cfg();
        // Only the threat posed to the agent contributes positively.
        assert!((threat_ratio(0.0, 1.0, &config) - 0.4).abs() < 1e-6);
        assert_eq!(threat_ratio(1.0, 0.0, &config), 0.0);
    }

    #[test]
    fn helpers_never_produce_nan() {
        assert_eq!(clamp01(f32::NAN), 0.0);
        assert_eq!(safe_div(1.0, 0.0), 0.0);
        assert_eq!(pow_non_negative(-0.5, 1.5), 0.0);
        assert_eq!(average(std::iter::empty()), 0.0);
        assert!(approximately(0.3, 0.1 + 0.2));
        assert!(!approximately(0.3, 0.31));
    }
}
