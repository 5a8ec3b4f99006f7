//! Action kinds and scored candidates.

use arrayvec::ArrayVec;

/// Closed set of actions an agent can choose on its turn.
///
/// Declaration order is the enumeration order used by the selector tie-break.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    Attack,
    Defend,
    Heal,
    Move,
    /// Nothing was selected. Never scored.
    #[default]
    None,
}

impl ActionKind {
    /// Number of scorable action kinds.
    pub const SCORABLE_COUNT: usize = 4;

    /// Scorable action kinds in enumeration order.
    pub const SCORABLE: [ActionKind; Self::SCORABLE_COUNT] = [
        ActionKind::Attack,
        ActionKind::Defend,
        ActionKind::Heal,
        ActionKind::Move,
    ];

    /// Returns true if this action only makes sense with at least one opponent.
    pub const fn requires_opponent(self) -> bool {
        matches!(self, ActionKind::Attack | ActionKind::Move)
    }

    pub const fn is_none(self) -> bool {
        matches!(self, ActionKind::None)
    }
}

/// An action paired with the utility computed for it this cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionCandidate {
    pub action: ActionKind,
    pub utility: f32,
}

impl ActionCandidate {
    pub const fn new(action: ActionKind, utility: f32) -> Self {
        Self { action, utility }
    }
}

/// Fixed-capacity list of the candidates scored in one cycle.
pub type Candidates = ArrayVec<ActionCandidate, { ActionKind::SCORABLE_COUNT }>;

/// Outcome of one decision cycle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    /// Winning action, or [`ActionKind::None`] if nothing could be scored.
    pub action: ActionKind,
    /// Every candidate that was scored, in enumeration order.
    pub candidates: Candidates,
}

impl Decision {
    /// Utility of the winning action, if one was selected.
    pub fn utility(&self) -> Option<f32> {
        if self.action.is_none() {
            return None;
        }
        self.candidates
            .iter()
            .rev()
            .find(|candidate| candidate.action == self.action)
            .map(|candidate| candidate.utility)
    }

    /// Utility computed for a specific action, if it was scored.
    pub fn utility_of(&self, action: ActionKind) -> Option<f32> {
        self.candidates
            .iter()
            .find(|candidate| candidate.action == action)
            .map(|candidate| candidate.utility)
    }
}
