//! Enemy animation state driven by brain intents.
//!
//! The brain only emits a locomotion speed and one-shot triggers. The
//! [`EnemyAnimator`] turns those into a visual [`AnimationState`], holding
//! one-shot states for their clip length before falling back to idle or
//! walking. Sprites are tinted per state, starting from each enemy type's
//! own colour, so the demo shows what the enemy is doing without any art
//! assets.

use std::time::Duration;

use bevy::color::Mix;
use bevy::prelude::*;

use super::brain::AnimationTrigger;

/// Length of the attack clip (windup plus recovery).
const ATTACK_CLIP: Duration = Duration::from_millis(800);
/// Length of the hurt clip.
const HURT_CLIP: Duration = Duration::from_millis(500);
/// Locomotion speed above which the walk cycle plays.
const WALK_THRESHOLD: f32 = 0.05;

/// Visual animation state (separate from AI state for animation control).
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnimationState {
    #[default]
    Idle,
    Walking,
    Attacking,
    Hurt,
    Dying,
}

/// Animation sink for one enemy.
#[derive(Component, Default, Debug)]
pub struct EnemyAnimator {
    speed: f32,
    state: AnimationState,
    oneshot: Option<Timer>,
    base_color: Color,
}

impl EnemyAnimator {
    /// An idle animator whose tints are blended from `base_color`.
    pub fn new(base_color: Color) -> Self {
        Self {
            base_color,
            ..default()
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
        if self.oneshot.is_none() && self.state != AnimationState::Dying {
            self.state = self.locomotion();
        }
    }

    /// Start a one-shot clip. Nothing interrupts dying.
    pub fn trigger(&mut self, trigger: AnimationTrigger) {
        if self.state == AnimationState::Dying {
            return;
        }

        match trigger {
            AnimationTrigger::Attack => self.play_once(AnimationState::Attacking, ATTACK_CLIP),
            AnimationTrigger::Hurt => self.play_once(AnimationState::Hurt, HURT_CLIP),
            AnimationTrigger::Die => {
                self.state = AnimationState::Dying;
                self.oneshot = None;
            }
        }
    }

    /// Advance a running one-shot clip and return to locomotion when done.
    pub fn advance(&mut self, delta: Duration) {
        let Some(timer) = self.oneshot.as_mut() else {
            return;
        };

        timer.tick(delta);
        if timer.finished() {
            self.oneshot = None;
            self.state = self.locomotion();
        }
    }

    /// Sprite colour for the current state.
    pub fn tint(&self) -> Color {
        let base = self.base_color.to_srgba();
        let tinted = match self.state {
            AnimationState::Idle => base,
            AnimationState::Walking => base.mix(&Srgba::WHITE, 0.15),
            AnimationState::Attacking => base.mix(&Srgba::rgb(0.95, 0.55, 0.2), 0.6),
            AnimationState::Hurt => base.mix(&Srgba::rgb(1.0, 0.2, 0.2), 0.7),
            AnimationState::Dying => Srgba {
                alpha: 0.6,
                ..base.mix(&Srgba::rgb(0.3, 0.3, 0.3), 0.6)
            },
        };
        tinted.into()
    }

    fn play_once(&mut self, state: AnimationState, clip: Duration) {
        self.state = state;
        self.oneshot = Some(Timer::new(clip, TimerMode::Once));
    }

    fn locomotion(&self) -> AnimationState {
        if self.speed > WALK_THRESHOLD {
            AnimationState::Walking
        } else {
            AnimationState::Idle
        }
    }
}

/// Ticks one-shot clips.
pub fn update_enemy_animators(time: Res<Time>, mut query: Query<&mut EnemyAnimator>) {
    for mut animator in query.iter_mut() {
        animator.advance(time.delta());
    }
}

/// Tints enemy sprites to match their animation state.
pub fn tint_enemy_sprites(mut query: Query<(&EnemyAnimator, &mut Sprite), Changed<EnemyAnimator>>) {
    for (animator, mut sprite) in query.iter_mut() {
        sprite.color = animator.tint();
    }
}
