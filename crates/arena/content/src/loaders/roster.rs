//! Encounter roster loader.

use std::path::Path;

use arena_core::{AgentStats, Roster};

use crate::loaders::{LoadResult, read_file};

/// Loader for encounter rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `Vec<AgentStats>`, in turn order. `max_health`, `max_mana` and
    /// weapon `accuracy` may be omitted.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        let roster = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!(
            "RosterLoader: loaded {} participants from {}",
            roster.len(),
            path.display()
        );
        Ok(roster)
    }

    /// Parse a roster from RON text.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let participants: Vec<AgentStats> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        Roster::new(participants)
            .map_err(|e| anyhow::anyhow!("Invalid roster [{}]: {}", e.error_code(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{AgentId, WeaponKind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TWO_GLADIATORS: &str = r#"[
        (
            id: 0,
            health: 5000.0,
            mana: 2500.0,
            weapon: (kind: Longsword, damage: 800.0, range: 10.0),
            position: (x: 0.0, y: 0.0, z: 0.0),
        ),
        (
            id: 1,
            health: 3200.0,
            max_health: 4000.0,
            mana: 100.0,
            weapon: (kind: Dagger, damage: 500.0, accuracy: 0.4, range: 4.0),
            position: (x: 3.0, y: 0.0, z: 4.0),
        ),
    ]"#;

    #[test]
    fn parses_participants_with_defaults() {
        let roster = RosterLoader::parse(TWO_GLADIATORS).unwrap();
        assert_eq!(roster.len(), 2);

        let first = roster.agent(AgentId(0)).unwrap();
        assert_eq!(first.max_health, AgentStats::DEFAULT_MAX_HEALTH);
        assert_eq!(first.max_mana, AgentStats::DEFAULT_MAX_MANA);
        assert_eq!(first.weapon.accuracy, 0.0);

        let second = roster.agent(AgentId(1)).unwrap();
        assert_eq!(second.max_health, 4000.0);
        assert_eq!(second.weapon.kind, WeaponKind::Dagger);
        assert_eq!(first.distance_to(second), 5.0);
    }

    #[test]
    fn duplicate_ids_fail_to_load() {
        let duplicated = TWO_GLADIATORS.replace("id: 1", "id: 0");
        let err = RosterLoader::parse(&duplicated).unwrap_err();
        assert!(err.to_string().contains("more than once"));
        assert!(err.to_string().contains("ARENA_DUPLICATE_AGENT"));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(TWO_GLADIATORS.as_bytes()).unwrap();

        let roster = RosterLoader::load(file.path()).unwrap();
        assert_eq!(roster.iter().map(|a| a.id).collect::<Vec<_>>(), vec![AgentId(0), AgentId(1)]);
    }
}
