//! Stock participants built from the arena's gameplay constants.

use arena_core::{AgentId, AgentStats, ArenaResult, Position, Roster, Weapon, WeaponKind};

/// Maximum number of gladiators in one arena match.
pub const MAX_PARTICIPANTS: usize = 4;

/// Distance between two adjacent arena tiles, in world units.
pub const TILE_GAP_DISTANCE: f32 = 5.0;

/// Stock reach of a weapon archetype, in world units.
pub const fn default_range(kind: WeaponKind) -> f32 {
    match kind {
        WeaponKind::Dagger => TILE_GAP_DISTANCE,
        WeaponKind::Longsword => 2.0 * TILE_GAP_DISTANCE,
        WeaponKind::Staff => 3.0 * TILE_GAP_DISTANCE,
    }
}

/// Weapon of the given archetype with stock damage and reach.
pub fn weapon(kind: WeaponKind) -> Weapon {
    Weapon::from_kind(kind, default_range(kind))
}

/// Gladiator at full health and mana carrying a stock weapon.
pub fn gladiator(id: AgentId, kind: WeaponKind, position: Position) -> AgentStats {
    AgentStats::new(id, weapon(kind), position)
}

/// A full arena: [`MAX_PARTICIPANTS`] gladiators one tile apart along the x axis,
/// armed with longsword, staff and dagger in turn.
pub fn stock_arena() -> ArenaResult<Roster> {
    const KINDS: [WeaponKind; 3] = [WeaponKind::Longsword, WeaponKind::Staff, WeaponKind::Dagger];

    let participants = (0..MAX_PARTICIPANTS)
        .map(|slot| {
            let position = Position::new(slot as f32 * TILE_GAP_DISTANCE, 0.0, 0.0);
            gladiator(AgentId(slot as u32), KINDS[slot % KINDS.len()], position)
        })
        .collect();

    Roster::new(participants)
}
