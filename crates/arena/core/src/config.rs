//! Curve constant table and engine tunables.
//!
//! Every response curve in [`crate::curves`] reads its shape from [`CurveConfig`].
//! Each constant is an independent field, including those the stock tuning happens
//! to give the same value.

use crate::error::{ArenaError, ArenaResult};

/// Tunable constants for all utility curves.
///
/// The defaults reproduce the stock arena tuning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CurveConfig {
    // ===== attack: scale_y * ln(rage + translation_x) + translation_y =====
    pub attack_scale_y: f32,
    pub attack_translation_x: f32,
    pub attack_translation_y: f32,

    // ===== rage: (strength_w * strength + health_lost_w * lost) / total / norm =====
    pub rage_strength_weight: f32,
    pub rage_health_lost_weight: f32,
    pub rage_weights_total: f32,
    pub rage_normalization: f32,

    // ===== strength: sin(scale * average weapon efficiency) =====
    pub strength_sin_scale: f32,

    // ===== weapon efficiency: 1 / sin(scale_x * d/r + translation_x) - translation_y =====
    pub efficiency_cosec_scale_x: f32,
    pub efficiency_cosec_translation_x: f32,
    pub efficiency_cosec_translation_y: f32,

    // ===== agent accuracy: scale_y * efficiency^power + translation_y =====
    pub accuracy_scale_y: f32,
    pub accuracy_power: f32,
    pub accuracy_translation_y: f32,

    // ===== enemy accuracy: intercept - falloff * distance =====
    pub enemy_accuracy_intercept: f32,
    pub enemy_accuracy_falloff: f32,

    // ===== move: (closeness_w * closeness + urge_w * urge) / total =====
    pub move_closeness_weight: f32,
    pub move_urge_weight: f32,
    pub move_weights_total: f32,
    pub closeness_power: f32,
    /// Divisor applied to distances before they feed closeness and urge to move.
    pub distance_normalization: f32,

    // ===== heal: (urgency_w * urgency + abundance) / total =====
    pub heal_urgency_weight: f32,
    pub heal_weights_total: f32,

    // ===== urgency to heal: |scale_y * atan(scale_x * hp + translation_x) + translation_y| =====
    pub urgency_scale_y: f32,
    pub urgency_scale_x: f32,
    pub urgency_translation_x: f32,
    pub urgency_translation_y: f32,

    // ===== mana abundance: acos((1 - mana)^power) - translation_y =====
    pub mana_abundance_power: f32,
    pub mana_abundance_translation_y: f32,

    // ===== defend: exp(scale * abundance - translation) =====
    pub defend_exp_scale: f32,
    pub defend_exp_translation: f32,

    // ===== threat: (damage relative to health)^power =====
    pub threat_power: f32,

    // ===== threat ratio: (agent_w * agent_threat + to_agent_w * threat_to_agent) / total =====
    pub threat_ratio_agent_threat_weight: f32,
    pub threat_ratio_threat_to_agent_weight: f32,
    pub threat_ratio_weights_total: f32,

    // ===== worth: accuracy^power =====
    pub worth_power: f32,
}

impl CurveConfig {
    pub fn new() -> Self {
        Self {
            attack_scale_y: 0.5,
            attack_translation_x: 0.15,
            attack_translation_y: 0.92,

            rage_strength_weight: 3.0,
            rage_health_lost_weight: 2.0,
            rage_weights_total: 5.0,
            rage_normalization: 5.0,

            strength_sin_scale: 1.7,

            efficiency_cosec_scale_x: 0.5,
            efficiency_cosec_translation_x: 0.5,
            efficiency_cosec_translation_y: 0.65,

            accuracy_scale_y: 0.5,
            accuracy_power: 1.5,
            accuracy_translation_y: 0.5,

            enemy_accuracy_intercept: 1.1,
            enemy_accuracy_falloff: 0.125,

            move_closeness_weight: 3.0,
            move_urge_weight: 4.0,
            move_weights_total: 5.0,
            closeness_power: 1.2,
            distance_normalization: 100.0,

            heal_urgency_weight: 4.0,
            heal_weights_total: 5.0,

            urgency_scale_y: 0.5,
            urgency_scale_x: -3.0,
            urgency_translation_x: 1.5,
            urgency_translation_y: 0.5,

            mana_abundance_power: 2.1,
            mana_abundance_translation_y: 0.57,

            defend_exp_scale: -2.0,
            defend_exp_translation: 0.1,

            threat_power: 1.5,

            threat_ratio_agent_threat_weight: -3.0,
            threat_ratio_threat_to_agent_weight: 2.0,
            threat_ratio_weights_total: 5.0,

            worth_power: 1.5,
        }
    }

    /// Checks that every constant is finite and that every divisor is non-zero.
    ///
    /// A zero divisor does not produce NaN, but it pins the affected curve to 0.
    pub fn validate(&self) -> ArenaResult<()> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(ArenaError::InvalidConfig {
                    field,
                    reason: "must be finite",
                });
            }
        }

        let divisors = [
            ("rage_weights_total", self.rage_weights_total),
            ("rage_normalization", self.rage_normalization),
            ("move_weights_total", self.move_weights_total),
            ("distance_normalization", self.distance_normalization),
            ("heal_weights_total", self.heal_weights_total),
            ("threat_ratio_weights_total", self.threat_ratio_weights_total),
        ];
        for (field, value) in divisors {
            if value == 0.0 {
                return Err(ArenaError::InvalidConfig {
                    field,
                    reason: "must be non-zero",
                });
            }
        }

        Ok(())
    }

    fn fields(&self) -> [(&'static str, f32); 36] {
        [
            ("attack_scale_y", self.attack_scale_y),
            ("attack_translation_x", self.attack_translation_x),
            ("attack_translation_y", self.attack_translation_y),
            ("rage_strength_weight", self.rage_strength_weight),
            ("rage_health_lost_weight", self.rage_health_lost_weight),
            ("rage_weights_total", self.rage_weights_total),
            ("rage_normalization", self.rage_normalization),
            ("strength_sin_scale", self.strength_sin_scale),
            ("efficiency_cosec_scale_x", self.efficiency_cosec_scale_x),
            ("efficiency_cosec_translation_x", self.efficiency_cosec_translation_x),
            ("efficiency_cosec_translation_y", self.efficiency_cosec_translation_y),
            ("accuracy_scale_y", self.accuracy_scale_y),
            ("accuracy_power", self.accuracy_power),
            ("accuracy_translation_y", self.accuracy_translation_y),
            ("enemy_accuracy_intercept", self.enemy_accuracy_intercept),
            ("enemy_accuracy_falloff", self.enemy_accuracy_falloff),
            ("move_closeness_weight", self.move_closeness_weight),
            ("move_urge_weight", self.move_urge_weight),
            ("move_weights_total", self.move_weights_total),
            ("closeness_power", self.closeness_power),
            ("distance_normalization", self.distance_normalization),
            ("heal_urgency_weight", self.heal_urgency_weight),
            ("heal_weights_total", self.heal_weights_total),
            ("urgency_scale_y", self.urgency_scale_y),
            ("urgency_scale_x", self.urgency_scale_x),
            ("urgency_translation_x", self.urgency_translation_x),
            ("urgency_translation_y", self.urgency_translation_y),
            ("mana_abundance_power", self.mana_abundance_power),
            ("mana_abundance_translation_y", self.mana_abundance_translation_y),
            ("defend_exp_scale", self.defend_exp_scale),
            ("defend_exp_translation", self.defend_exp_translation),
            ("threat_power", self.threat_power),
            (
                "threat_ratio_agent_threat_weight",
                self.threat_ratio_agent_threat_weight,
            ),
            (
                "threat_ratio_threat_to_agent_weight",
                self.threat_ratio_threat_to_agent_weight,
            ),
            ("threat_ratio_weights_total", self.threat_ratio_weights_total),
            ("worth_power", self.worth_power),
        ]
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// What the target selector does when no opponent holds both the highest worth
/// and the highest threat ratio.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum TargetFallback {
    /// Report that there is no viable target.
    #[default]
    Strict,
    /// Take the opponent with the highest worth.
    MaxWorth,
    /// Take the opponent with the highest threat ratio.
    MaxThreatRatio,
}
