//! Core plugin that sets up game states, events, and pausing.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, InGame, GameOver) and the Running/Paused sub-state
/// - Global events (DamageEvent, DeathEvent)
/// - Pause handling, which also freezes the simulation clock
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()

            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<DeathEvent>()

            // Loading finishes as soon as every OnEnter(Loading) loader has run
            .add_systems(OnEnter(GameState::Loading), finish_loading)

            // Pause/unpause with Escape key
            .add_systems(Update, handle_pause_input.run_if(in_state(GameState::InGame)))
            .add_systems(OnEnter(PlayState::Paused), pause_clock)
            .add_systems(OnExit(PlayState::Paused), resume_clock);
    }
}

/// Move on to gameplay. Data loaders run in the same OnEnter schedule, and
/// the transition itself only happens on the next state update.
fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            PlayState::Running => next_state.set(PlayState::Paused),
            PlayState::Paused => next_state.set(PlayState::Running),
        }
    }
}

/// Timers are due on the fixed clock, so freezing virtual time keeps
/// them from expiring during a pause.
fn pause_clock(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn resume_clock(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}
