//! Level data: where the player starts and which enemies patrol where.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;
use crate::enemies::{EnemyRegistry, PatrolMode, PatrolRoute};

const LEVELS_DIR: &str = "assets/data/levels";

fn default_true() -> bool {
    true
}

/// One enemy placement with its patrol route.
#[derive(Deserialize, Clone, Debug)]
pub struct EnemySpawn {
    /// Enemy definition file stem, e.g. "skeleton".
    pub enemy_type: String,
    pub position: (f32, f32),
    #[serde(default)]
    pub waypoints: Vec<(f32, f32)>,
    /// Loop back to the first waypoint, or walk the route back and forth.
    #[serde(default = "default_true")]
    pub loop_patrol: bool,
}

impl EnemySpawn {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.position.0, self.position.1)
    }

    pub fn route(&self) -> PatrolRoute {
        let waypoints = self
            .waypoints
            .iter()
            .map(|&(x, y)| Vec2::new(x, y))
            .collect();
        PatrolRoute::new(waypoints, PatrolMode::from_looping(self.loop_patrol))
    }
}

/// Level definition loaded from a RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct LevelDefinition {
    pub name: String,
    /// Without a player spawn the level's enemies only patrol.
    #[serde(default)]
    pub player_spawn: Option<(f32, f32)>,
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
}

impl LevelDefinition {
    pub fn parse(contents: &str, source: &str) -> Result<Self, DataLoadError> {
        ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: source.to_string(),
            details: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let source = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: source.clone(),
            details: e.to_string(),
        })?;
        Self::parse(&contents, &source)
    }

    pub fn player_position(&self) -> Option<Vec2> {
        self.player_spawn.map(|(x, y)| Vec2::new(x, y))
    }

    /// Check every enemy placement against the loaded definitions.
    pub fn check_enemy_types(&self, registry: &EnemyRegistry) -> Vec<DataLoadError> {
        self.enemies
            .iter()
            .filter(|spawn| registry.get(&spawn.enemy_type).is_none())
            .map(|spawn| DataLoadError::UnknownEnemyType {
                enemy_type: spawn.enemy_type.clone(),
                level: self.name.clone(),
            })
            .collect()
    }
}

/// Resource holding all loaded levels, keyed by file stem.
#[derive(Resource, Default)]
pub struct LevelRegistry {
    pub levels: HashMap<String, LevelDefinition>,
}

/// Name of the level to build when gameplay starts.
#[derive(Resource)]
pub struct CurrentLevel {
    pub name: String,
}

impl Default for CurrentLevel {
    fn default() -> Self {
        Self {
            name: "courtyard".to_string(),
        }
    }
}

/// Load all levels from the assets/data/levels/ directory.
pub fn load_levels(mut registry: ResMut<LevelRegistry>) {
    let levels_path = Path::new(LEVELS_DIR);

    let Ok(entries) = fs::read_dir(levels_path) else {
        warn!("Levels directory not found: {:?}", levels_path);
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "ron") {
            continue;
        }

        let Some(level_name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let level_name = level_name.to_string();

        match LevelDefinition::load(&path) {
            Ok(level) => {
                info!("Loaded level: {}", level_name);
                registry.levels.insert(level_name, level);
            }
            Err(e) => error!("Failed to load level: {}", e),
        }
    }

    info!("Loaded {} level(s)", registry.levels.len());
}
