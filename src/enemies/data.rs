//! Enemy data loading from RON files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::components::EnemyStats;
use crate::world::DataLoadError;

const ENEMIES_DIR: &str = "assets/data/enemies";

/// Sprite configuration for an enemy type.
#[derive(Deserialize, Clone, Debug)]
pub struct SpriteConfig {
    /// Width and height in world units.
    pub size: (f32, f32),
    pub color: (f32, f32, f32),
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            size: (0.8, 1.0),
            color: (0.75, 0.75, 0.7),
        }
    }
}

/// Collider configuration for an enemy type.
#[derive(Deserialize, Clone, Debug)]
pub struct ColliderConfig {
    pub radius: f32,
    /// Velocity damping, which is what bleeds off knockback.
    pub linear_damping: f32,
}

impl Default for ColliderConfig {
    fn default() -> Self {
        Self {
            radius: 0.4,
            linear_damping: 4.0,
        }
    }
}

/// Enemy definition loaded from RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct EnemyDefinition {
    pub name: String,
    #[serde(default)]
    pub stats: EnemyStats,
    #[serde(default)]
    pub sprite: SpriteConfig,
    #[serde(default)]
    pub collider: ColliderConfig,
}

impl EnemyDefinition {
    /// Parse and validate a definition. `source` names the file in errors.
    pub fn parse(contents: &str, source: &str) -> Result<Self, DataLoadError> {
        let definition: Self = ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: source.to_string(),
            details: e.to_string(),
        })?;
        definition.stats.validate(&definition.name)?;
        Ok(definition)
    }

    /// Read, parse and validate a definition file.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let source = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: source.clone(),
            details: e.to_string(),
        })?;
        Self::parse(&contents, &source)
    }
}

/// Resource holding all loaded enemy definitions.
#[derive(Resource, Default)]
pub struct EnemyRegistry {
    pub definitions: HashMap<String, EnemyDefinition>,
}

impl EnemyRegistry {
    /// Get an enemy definition by type name.
    pub fn get(&self, enemy_type: &str) -> Option<&EnemyDefinition> {
        self.definitions.get(enemy_type)
    }
}

/// Load all enemy definitions from the assets/data/enemies/ directory.
pub fn load_enemy_definitions(mut registry: ResMut<EnemyRegistry>) {
    let enemies_dir = Path::new(ENEMIES_DIR);

    let Ok(entries) = fs::read_dir(enemies_dir) else {
        warn!("Enemy definitions directory not found: {:?}", enemies_dir);
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "ron") {
            continue;
        }

        let Some(enemy_type) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let enemy_type = enemy_type.to_string();

        match EnemyDefinition::load(&path) {
            Ok(definition) => {
                info!("Loaded enemy definition: {} ({})", definition.name, enemy_type);
                registry.definitions.insert(enemy_type, definition);
            }
            Err(e) => error!("{}", e),
        }
    }

    info!("Loaded {} enemy definitions", registry.definitions.len());
}
