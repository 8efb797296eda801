//! Debug overlay: patrol paths and detection/attack ranges.

use bevy::math::Isometry2d;
use bevy::prelude::*;

use super::brain::EnemyBrain;
use super::components::Enemy;
use super::patrol::PatrolMode;

const WAYPOINT_RADIUS: f32 = 0.2;

/// Whether enemy gizmos are drawn. Toggle with F3.
#[derive(Resource, Default)]
pub struct DebugOverlay {
    pub enabled: bool,
}

pub fn toggle_debug_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut overlay: ResMut<DebugOverlay>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        overlay.enabled = !overlay.enabled;
        info!("Enemy debug overlay {}", if overlay.enabled { "on" } else { "off" });
    }
}

pub fn draw_enemy_gizmos(
    overlay: Res<DebugOverlay>,
    mut gizmos: Gizmos,
    query: Query<(&EnemyBrain, &Transform), With<Enemy>>,
) {
    if !overlay.enabled {
        return;
    }

    let path_color = Color::srgb(0.0, 1.0, 1.0);
    let detection_color = Color::srgb(1.0, 0.92, 0.016);
    let attack_color = Color::srgb(1.0, 0.0, 0.0);

    for (brain, transform) in query.iter() {
        let route = brain.route();
        let waypoints = route.waypoints();

        for (i, point) in waypoints.iter().enumerate() {
            gizmos.circle_2d(Isometry2d::from_translation(*point), WAYPOINT_RADIUS, path_color);
            if let Some(next) = waypoints.get(i + 1) {
                gizmos.line_2d(*point, *next, path_color);
            }
        }

        if route.mode() == PatrolMode::Loop && waypoints.len() > 1 {
            gizmos.line_2d(waypoints[waypoints.len() - 1], waypoints[0], path_color);
        }

        let position = Isometry2d::from_translation(transform.translation.truncate());
        gizmos.circle_2d(position, brain.stats().detection_range, detection_color);
        gizmos.circle_2d(position, brain.stats().attack_range, attack_color);
    }
}
