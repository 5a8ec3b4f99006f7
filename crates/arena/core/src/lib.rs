//! Utility-based combat decision engine.
//!
//! `arena-core` scores a fixed menu of actions for an agent on its turn and picks
//! the opponent it should act against. Everything here is synchronous, stateless
//! between cycles apart from the opponent snapshot cache, and deterministic for a
//! given roster and curve table.
//!
//! # Decision cycle
//!
//! 1. **Snapshots** ([`snapshot`]): one [`OpponentSnapshot`] per opponent
//! 2. **Scoring** ([`context`], [`curves`]): one utility per [`ActionKind`]
//! 3. **Selection** ([`selector`]): highest utility, later action wins ties
//!
//! # Target query
//!
//! 1. **Evaluation** ([`threat`]): accuracy, threat, threat ratio and worth per opponent
//! 2. **Selection** ([`target`]): the opponent holding both the best worth and the
//!    best threat ratio
//!
//! Both flows are driven through [`CombatAgent`], implemented by [`UtilityAgent`].
pub mod action;
pub mod agent;
pub mod config;
pub mod context;
pub mod curves;
pub mod error;
pub mod roster;
pub mod selector;
pub mod snapshot;
pub mod stats;
pub mod target;
pub mod threat;

pub use action::{ActionCandidate, ActionKind, Candidates, Decision};
pub use agent::{CombatAgent, TargetSelection, UtilityAgent};
pub use config::{CurveConfig, TargetFallback};
pub use context::DecisionContext;
pub use error::{ArenaError, ArenaResult, ErrorSeverity};
pub use roster::{AccuracyUpdate, Roster};
pub use selector::{ActionSelector, NoJitter, UtilityJitter};
pub use snapshot::OpponentSnapshot;
pub use stats::{AgentId, AgentStats, Position, Weapon, WeaponKind};
pub use target::TargetSelector;
pub use threat::{ThreatAssessment, ThreatEvaluator};
