//! Participant state read by the decision engine.
//!
//! Stats are owned by the surrounding simulation. The engine only reads them, and
//! every accuracy write it wants to perform is handed back as an
//! [`AccuracyUpdate`](crate::roster::AccuracyUpdate) instead of mutating in place.

use std::fmt;

/// Unique identifier for a participant in an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// World-space position of a participant.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance between two positions.
    pub fn distance(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Weapon archetypes available in the arena.
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
pub enum WeaponKind {
    #[default]
    Longsword,
    Staff,
    Dagger,
}

impl WeaponKind {
    pub const LONGSWORD_BASE_DAMAGE: f32 = 800.0;
    pub const STAFF_BASE_DAMAGE: f32 = 1200.0;
    pub const DAGGER_BASE_DAMAGE: f32 = 500.0;

    /// Base damage dealt by this weapon archetype.
    pub const fn base_damage(self) -> f32 {
        match self {
            Self::Longsword => Self::LONGSWORD_BASE_DAMAGE,
            Self::Staff => Self::STAFF_BASE_DAMAGE,
            Self::Dagger => Self::DAGGER_BASE_DAMAGE,
        }
    }
}

/// Weapon carried by a participant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub kind: WeaponKind,
    pub damage: f32,
    /// Hit probability in [0, 1]. Recomputed every time the owner is evaluated as
    /// (or evaluates) a target.
    #[cfg_attr(feature = "serde", serde(default))]
    pub accuracy: f32,
    /// Maximum reach in world units.
    pub range: f32,
}

impl Weapon {
    pub fn new(kind: WeaponKind, damage: f32, range: f32) -> Self {
        Self {
            kind,
            damage,
            accuracy: 0.0,
            range,
        }
    }

    /// Weapon with the archetype's base damage.
    pub fn from_kind(kind: WeaponKind, range: f32) -> Self {
        Self::new(kind, kind.base_damage(), range)
    }
}

/// Snapshot of a participant's combat stats.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStats {
    pub id: AgentId,
    pub health: f32,
    #[cfg_attr(feature = "serde", serde(default = "default_max_health"))]
    pub max_health: f32,
    pub mana: f32,
    #[cfg_attr(feature = "serde", serde(default = "default_max_mana"))]
    pub max_mana: f32,
    pub weapon: Weapon,
    pub position: Position,
}

#[cfg(feature = "serde")]
fn default_max_health() -> f32 {
    AgentStats::DEFAULT_MAX_HEALTH
}

#[cfg(feature = "serde")]
fn default_max_mana() -> f32 {
    AgentStats::DEFAULT_MAX_MANA
}

impl AgentStats {
    pub const DEFAULT_MAX_HEALTH: f32 = 5000.0;
    pub const DEFAULT_MAX_MANA: f32 = 2500.0;

    /// Creates a participant at full health and mana with the default maxima.
    pub fn new(id: AgentId, weapon: Weapon, position: Position) -> Self {
        Self {
            id,
            health: Self::DEFAULT_MAX_HEALTH,
            max_health: Self::DEFAULT_MAX_HEALTH,
            mana: Self::DEFAULT_MAX_MANA,
            max_mana: Self::DEFAULT_MAX_MANA,
            weapon,
            position,
        }
    }

    #[must_use]
    pub fn with_health(mut self, health: f32) -> Self {
        self.health = health;
        self
    }

    #[must_use]
    pub fn with_mana(mut self, mana: f32) -> Self {
        self.mana = mana;
        self
    }

    #[must_use]
    pub fn with_maxima(mut self, max_health: f32, max_mana: f32) -> Self {
        self.max_health = max_health;
        self.max_mana = max_mana;
        self
    }

    /// Current health as a fraction of maximum health.
    ///
    /// Returns 0 when `max_health` is not positive.
    pub fn health_ratio(&self) -> f32 {
        ratio(self.health, self.max_health)
    }

    /// Current mana as a fraction of maximum mana.
    ///
    /// Returns 0 when `max_mana` is not positive.
    pub fn mana_ratio(&self) -> f32 {
        ratio(self.mana, self.max_mana)
    }

    /// Distance between this participant and another.
    pub fn distance_to(&self, other: &AgentStats) -> f32 {
        self.position.distance(&other.position)
    }
}

fn ratio(value: f32, max: f32) -> f32 {
    if max > 0.0 && max.is_finite() {
        value / max
    } else {
        0.0
    }
}
