//! Enemy state machine.
//!
//! [`EnemyBrain`] decides what a single enemy does each fixed tick: walk its
//! patrol route, pause at waypoints, chase and attack its target, flinch
//! when hit and finally die. It touches nothing outside itself. Everything it
//! wants to happen in the world is pushed as an [`Intent`], and every timed
//! wait is an entry in a [`TimerQueue`] that comes back through
//! [`EnemyBrain::on_timer`].

use std::time::Duration;

use bevy::prelude::*;

use super::components::EnemyStats;
use super::patrol::PatrolRoute;
use super::schedule::{ExpiredTimer, TimerPurpose, TimerQueue, TimerToken};

/// Time from starting an attack to the hit landing.
pub const ATTACK_WINDUP: Duration = Duration::from_millis(300);
/// Time after the hit before the enemy acts again.
pub const ATTACK_RECOVERY: Duration = Duration::from_millis(500);
/// Stun duration after taking non-lethal damage.
pub const HURT_DURATION: Duration = Duration::from_millis(500);
/// Time a corpse stays in the world so the death animation can play.
pub const REMOVAL_DELAY: Duration = Duration::from_secs(2);

/// Horizontal speed below which patrol movement keeps facing right.
const FACING_DEADZONE: f32 = 0.1;

/// Which half of an attack is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackPhase {
    Windup,
    Recovery,
}

/// The state an enemy reports.
///
/// Derived from the timed sequences in flight and the current locomotion,
/// highest priority first. States backed by a timer hold its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    /// No waypoints and nothing to chase.
    Idle,
    /// Walking toward the current waypoint.
    Patrolling,
    /// Standing at a reached waypoint.
    Waiting { timer: TimerToken },
    /// Moving toward the target.
    Chasing,
    /// Performing an attack.
    Attacking { phase: AttackPhase, timer: TimerToken },
    /// Stunned after a hit.
    Hurt { timer: TimerToken },
    /// Health reached zero. Terminal.
    Dead { removal: TimerToken },
}

impl AiState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Patrolling => "patrolling",
            Self::Waiting { .. } => "waiting",
            Self::Chasing => "chasing",
            Self::Attacking { .. } => "attacking",
            Self::Hurt { .. } => "hurt",
            Self::Dead { .. } => "dead",
        }
    }
}

/// How the enemy moves when no timed sequence holds it still.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Locomotion {
    Idle,
    Patrolling,
    Chasing,
}

/// One-shot animation cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTrigger {
    Attack,
    Hurt,
    Die,
}

/// Something the brain wants the world to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Desired linear velocity until the next velocity intent.
    Velocity(Vec2),
    /// Instant push, already scaled by the knockback force.
    Impulse(Vec2),
    /// Locomotion speed for the animator.
    AnimationSpeed(f32),
    Animation(AnimationTrigger),
    /// Sprite should face left (`true`) or right.
    Face { left: bool },
    /// Hit the target for this much damage.
    DealDamage(u32),
    /// Stop colliding with anything.
    DisableCollision,
    /// Remove the enemy from the world.
    Despawn,
}

/// What the brain can observe this tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Senses {
    pub position: Vec2,
    /// Target position, if the target still exists.
    pub target: Option<Vec2>,
}

/// Per-enemy state machine plus the data it runs on.
///
/// Waypoint waits, attacks and stuns are tracked in separate slots. A stun
/// or a chase does not abandon a wait or an attack already in flight: the
/// wait still advances the route and the windup still resolves. Only death
/// drops pending sequences.
#[derive(Component, Debug, Clone)]
pub struct EnemyBrain {
    stats: EnemyStats,
    route: PatrolRoute,
    health: u32,
    locomotion: Locomotion,
    wait: Option<TimerToken>,
    attack: Option<(AttackPhase, TimerToken)>,
    hurt: Option<TimerToken>,
    removal: Option<TimerToken>,
    last_attack: Option<Duration>,
    has_target: bool,
}

impl EnemyBrain {
    /// Build a brain at full health.
    ///
    /// `has_target` is fixed for the brain's lifetime: without a target the
    /// enemy never detects, chases or attacks.
    pub fn new(stats: EnemyStats, route: PatrolRoute, has_target: bool) -> Self {
        let mut brain = Self {
            health: stats.max_health,
            stats,
            route,
            locomotion: Locomotion::Idle,
            wait: None,
            attack: None,
            hurt: None,
            removal: None,
            last_attack: None,
            has_target,
        };
        brain.locomotion = brain.resting();
        brain
    }

    pub fn state(&self) -> AiState {
        if let Some(removal) = self.removal {
            return AiState::Dead { removal };
        }
        if let Some(timer) = self.hurt {
            return AiState::Hurt { timer };
        }
        if let Some((phase, timer)) = self.attack {
            return AiState::Attacking { phase, timer };
        }
        if self.locomotion == Locomotion::Chasing {
            return AiState::Chasing;
        }
        if let Some(timer) = self.wait {
            return AiState::Waiting { timer };
        }
        match self.locomotion {
            Locomotion::Idle => AiState::Idle,
            _ => AiState::Patrolling,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn stats(&self) -> &EnemyStats {
        &self.stats
    }

    pub fn route(&self) -> &PatrolRoute {
        &self.route
    }

    /// Simulation time at which the most recent attack windup completed.
    pub fn last_attack(&self) -> Option<Duration> {
        self.last_attack
    }

    pub fn has_target(&self) -> bool {
        self.has_target
    }

    pub fn is_dead(&self) -> bool {
        self.removal.is_some()
    }

    /// Evaluate one fixed tick.
    pub fn tick<K: Copy + PartialEq>(
        &mut self,
        agent: K,
        now: Duration,
        senses: Senses,
        timers: &mut TimerQueue<K>,
        out: &mut Vec<Intent>,
    ) {
        // Stunned, dead and attacking enemies wait for their timers.
        if self.is_dead() || self.hurt.is_some() || self.attack.is_some() {
            return;
        }

        if let Some(target) = self.sensed_target(&senses) {
            let distance = senses.position.distance(target);

            if distance <= self.stats.detection_range {
                if self.stats.flip_sprite {
                    out.push(Intent::Face {
                        left: target.x < senses.position.x,
                    });
                }

                if distance <= self.stats.attack_range && self.cooldown_elapsed(now) {
                    self.begin_attack(agent, now, timers, out);
                } else if distance > self.stats.attack_range {
                    self.chase(senses.position, target, out);
                } else {
                    // In reach but still cooling down: hold position.
                    out.push(Intent::Velocity(Vec2::ZERO));
                    out.push(Intent::AnimationSpeed(0.0));
                }
                return;
            }
        }

        let patrols = self.wait.is_none() && !self.route.is_empty();

        if self.locomotion == Locomotion::Chasing {
            self.locomotion = self.resting();
            if !patrols {
                out.push(Intent::Velocity(Vec2::ZERO));
                out.push(Intent::AnimationSpeed(0.0));
            }
        }

        if patrols {
            self.patrol(agent, now, senses.position, timers, out);
        }
    }

    /// Resume the sequence a timer was scheduled for.
    ///
    /// The resumption happens at the timer's due time, not at the tick that
    /// drained it. Stale timers, and everything but removal once dead, are
    /// ignored.
    pub fn on_timer<K: Copy + PartialEq>(
        &mut self,
        expired: ExpiredTimer<K>,
        senses: Senses,
        timers: &mut TimerQueue<K>,
        out: &mut Vec<Intent>,
    ) {
        let at = expired.due;
        let token = Some(expired.token);
        let alive = !self.is_dead();

        match expired.purpose {
            TimerPurpose::WaypointWait if alive && self.wait == token => {
                self.wait = None;
                self.route.advance();
            }
            TimerPurpose::AttackWindup
                if alive && self.attack == Some((AttackPhase::Windup, expired.token)) =>
            {
                if let Some(target) = self.sensed_target(&senses) {
                    if senses.position.distance(target) <= self.stats.attack_range {
                        out.push(Intent::DealDamage(self.stats.attack_damage));
                    }
                }
                self.last_attack = Some(at);

                let timer = timers.schedule(
                    expired.agent,
                    TimerPurpose::AttackRecovery,
                    at + ATTACK_RECOVERY,
                );
                self.attack = Some((AttackPhase::Recovery, timer));
            }
            TimerPurpose::AttackRecovery
                if alive && self.attack == Some((AttackPhase::Recovery, expired.token)) =>
            {
                self.attack = None;
            }
            TimerPurpose::HurtRecovery if alive && self.hurt == token => {
                self.hurt = None;
            }
            TimerPurpose::Removal if self.removal == token => {
                out.push(Intent::Despawn);
            }
            purpose => {
                debug!("Ignoring stale {:?} timer in state {}", purpose, self.state().name());
            }
        }
    }

    /// Take a hit. Returns `false` when the hit was ignored because the
    /// enemy is already stunned or dead.
    pub fn apply_damage<K: Copy + PartialEq>(
        &mut self,
        agent: K,
        amount: u32,
        knockback: Vec2,
        now: Duration,
        timers: &mut TimerQueue<K>,
        out: &mut Vec<Intent>,
    ) -> bool {
        if self.is_dead() || self.hurt.is_some() {
            return false;
        }

        self.health = self.health.saturating_sub(amount);
        out.push(Intent::Animation(AnimationTrigger::Hurt));
        out.push(Intent::Velocity(Vec2::ZERO));
        out.push(Intent::Impulse(knockback * self.stats.knockback_force));

        if self.health == 0 {
            self.die(agent, now, timers, out);
        } else {
            let timer = timers.schedule(agent, TimerPurpose::HurtRecovery, now + HURT_DURATION);
            self.hurt = Some(timer);
        }
        true
    }

    fn die<K: Copy + PartialEq>(
        &mut self,
        agent: K,
        now: Duration,
        timers: &mut TimerQueue<K>,
        out: &mut Vec<Intent>,
    ) {
        out.push(Intent::Animation(AnimationTrigger::Die));
        out.push(Intent::Velocity(Vec2::ZERO));
        out.push(Intent::AnimationSpeed(0.0));
        out.push(Intent::DisableCollision);

        self.wait = None;
        self.attack = None;
        self.hurt = None;
        self.locomotion = Locomotion::Idle;
        let removal = timers.schedule(agent, TimerPurpose::Removal, now + REMOVAL_DELAY);
        self.removal = Some(removal);
    }

    fn begin_attack<K: Copy + PartialEq>(
        &mut self,
        agent: K,
        now: Duration,
        timers: &mut TimerQueue<K>,
        out: &mut Vec<Intent>,
    ) {
        out.push(Intent::Velocity(Vec2::ZERO));
        out.push(Intent::AnimationSpeed(0.0));
        out.push(Intent::Animation(AnimationTrigger::Attack));

        let timer = timers.schedule(agent, TimerPurpose::AttackWindup, now + ATTACK_WINDUP);
        self.attack = Some((AttackPhase::Windup, timer));
    }

    fn chase(&mut self, position: Vec2, target: Vec2, out: &mut Vec<Intent>) {
        let velocity = (target - position).normalize_or_zero() * self.stats.move_speed;
        out.push(Intent::Velocity(velocity));
        out.push(Intent::AnimationSpeed(velocity.length()));
        self.locomotion = Locomotion::Chasing;
    }

    fn patrol<K: Copy + PartialEq>(
        &mut self,
        agent: K,
        now: Duration,
        position: Vec2,
        timers: &mut TimerQueue<K>,
        out: &mut Vec<Intent>,
    ) {
        let Some(waypoint) = self.route.current() else {
            return;
        };

        let sensed = position + self.stats.check_offset();
        let direction = (waypoint - sensed).normalize_or_zero();
        self.locomotion = Locomotion::Patrolling;

        if self.stats.flip_sprite {
            out.push(Intent::Face {
                left: direction.x < -FACING_DEADZONE,
            });
        }

        if sensed.distance(waypoint) <= self.stats.waypoint_reach_distance {
            out.push(Intent::Velocity(Vec2::ZERO));
            out.push(Intent::AnimationSpeed(0.0));
            let due = now + self.stats.wait_time();
            self.wait = Some(timers.schedule(agent, TimerPurpose::WaypointWait, due));
            return;
        }

        let velocity = direction * self.stats.move_speed;
        out.push(Intent::Velocity(velocity));
        out.push(Intent::AnimationSpeed(velocity.length()));
    }

    fn sensed_target(&self, senses: &Senses) -> Option<Vec2> {
        if self.has_target {
            senses.target
        } else {
            None
        }
    }

    fn cooldown_elapsed(&self, now: Duration) -> bool {
        self.last_attack
            .map_or(true, |last| now > last + self.stats.cooldown())
    }

    fn resting(&self) -> Locomotion {
        if self.route.is_empty() {
            Locomotion::Idle
        } else {
            Locomotion::Patrolling
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::patrol::PatrolMode;

    const AGENT: u32 = 1;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn route() -> PatrolRoute {
        PatrolRoute::new(
            vec![Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0)],
            PatrolMode::Loop,
        )
    }

    fn senses(target: Option<Vec2>) -> Senses {
        Senses {
            position: Vec2::ZERO,
            target,
        }
    }

    /// Drain and dispatch every timer due at `now`.
    fn fire(
        brain: &mut EnemyBrain,
        timers: &mut TimerQueue<u32>,
        now: Duration,
        senses: Senses,
    ) -> Vec<Intent> {
        let mut out = Vec::new();
        while let Some(expired) = timers.pop_due(now) {
            brain.on_timer(expired, senses, timers, &mut out);
        }
        out
    }

    #[test]
    fn starts_patrolling_with_full_health() {
        let brain = EnemyBrain::new(EnemyStats::default(), route(), true);
        assert_eq!(brain.state(), AiState::Patrolling);
        assert_eq!(brain.health(), 30);
        assert!(brain.last_attack().is_none());
    }

    #[test]
    fn starts_idle_without_waypoints() {
        let brain = EnemyBrain::new(EnemyStats::default(), PatrolRoute::empty(), true);
        assert_eq!(brain.state(), AiState::Idle);
    }

    #[test]
    fn target_in_detection_range_is_chased() {
        let mut brain = EnemyBrain::new(EnemyStats::default(), route(), true);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();

        brain.tick(AGENT, ms(0), senses(Some(Vec2::new(-4.0, 0.0))), &mut timers, &mut out);

        assert_eq!(brain.state(), AiState::Chasing);
        assert!(out.contains(&Intent::Face { left: true }));
        assert!(out.contains(&Intent::Velocity(Vec2::new(-3.0, 0.0))));
        assert!(out.contains(&Intent::AnimationSpeed(3.0)));
        assert!(timers.is_empty());
    }

    #[test]
    fn target_without_link_is_ignored() {
        let mut brain = EnemyBrain::new(EnemyStats::default(), route(), false);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();

        brain.tick(AGENT, ms(0), senses(Some(Vec2::new(1.0, 0.0))), &mut timers, &mut out);

        assert_eq!(brain.state(), AiState::Patrolling);
        assert!(!out.iter().any(|i| matches!(i, Intent::Animation(_))));
    }

    #[test]
    fn missing_target_position_falls_back_to_patrol() {
        let mut brain = EnemyBrain::new(EnemyStats::default(), route(), true);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();

        brain.tick(AGENT, ms(0), senses(None), &mut timers, &mut out);

        assert_eq!(brain.state(), AiState::Patrolling);
        assert!(out.contains(&Intent::Velocity(Vec2::new(3.0, 0.0))));
    }

    #[test]
    fn attack_lands_after_windup_when_target_stays_close() {
        let mut brain = EnemyBrain::new(EnemyStats::default(), route(), true);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();
        let close = senses(Some(Vec2::new(1.0, 0.0)));

        brain.tick(AGENT, ms(0), close, &mut timers, &mut out);
        assert!(matches!(
            brain.state(),
            AiState::Attacking { phase: AttackPhase::Windup, .. }
        ));
        assert!(out.contains(&Intent::Animation(AnimationTrigger::Attack)));
        assert!(out.contains(&Intent::Velocity(Vec2::ZERO)));

        assert!(fire(&mut brain, &mut timers, ms(299), close).is_empty());

        let landed = fire(&mut brain, &mut timers, ms(300), close);
        assert_eq!(landed, vec![Intent::DealDamage(10)]);
        assert_eq!(brain.last_attack(), Some(ms(300)));
        assert!(matches!(
            brain.state(),
            AiState::Attacking { phase: AttackPhase::Recovery, .. }
        ));

        fire(&mut brain, &mut timers, ms(800), close);
        assert_eq!(brain.state(), AiState::Patrolling);
    }

    #[test]
    fn attack_whiffs_when_target_escapes_but_cooldown_starts() {
        let mut brain = EnemyBrain::new(EnemyStats::default(), route(), true);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();

        brain.tick(AGENT, ms(0), senses(Some(Vec2::new(1.0, 0.0))), &mut timers, &mut out);
        let landed = fire(&mut brain, &mut timers, ms(300), senses(Some(Vec2::new(3.0, 0.0))));

        assert!(landed.is_empty());
        assert_eq!(brain.last_attack(), Some(ms(300)));
    }

    #[test]
    fn attacking_ignores_the_target_until_recovered() {
        let mut brain = EnemyBrain::new(EnemyStats::default(), route(), true);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();
        let close = senses(Some(Vec2::new(1.0, 0.0)));

        brain.tick(AGENT, ms(0), close, &mut timers, &mut out);
        out.clear();
        brain.tick(AGENT, ms(100), senses(Some(Vec2::new(4.0, 0.0))), &mut timers, &mut out);

        assert!(out.is_empty());
        assert!(matches!(brain.state(), AiState::Attacking { .. }));
    }

    #[test]
    fn holds_position_while_cooling_down() {
        let mut brain = EnemyBrain::new(EnemyStats::default(), route(), true);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();
        let close = senses(Some(Vec2::new(1.0, 0.0)));

        brain.tick(AGENT, ms(0), close, &mut timers, &mut out);
        fire(&mut brain, &mut timers, ms(800), close);
        out.clear();

        brain.tick(AGENT, ms(1000), close, &mut timers, &mut out);

        assert_eq!(brain.state(), AiState::Patrolling);
        assert!(out.contains(&Intent::Velocity(Vec2::ZERO)));
        assert!(!out.contains(&Intent::Animation(AnimationTrigger::Attack)));
    }

    #[test]
    fn reaching_a_waypoint_waits_then_advances() {
        let stats = EnemyStats::default();
        let mut brain = EnemyBrain::new(stats, route(), false);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();
        let at_first = Senses {
            position: Vec2::new(10.0, 0.0),
            target: None,
        };

        brain.tick(AGENT, ms(0), at_first, &mut timers, &mut out);
        assert!(matches!(brain.state(), AiState::Waiting { .. }));
        assert!(out.contains(&Intent::Velocity(Vec2::ZERO)));

        // Waiting agents do not patrol.
        out.clear();
        brain.tick(AGENT, ms(500), at_first, &mut timers, &mut out);
        assert!(out.is_empty());

        fire(&mut brain, &mut timers, ms(1000), at_first);
        assert_eq!(brain.state(), AiState::Patrolling);
        assert_eq!(brain.route().index(), 1);
    }

    #[test]
    fn waypoint_offset_shifts_the_sensing_point() {
        let stats = EnemyStats {
            waypoint_check_offset: (0.0, -1.0),
            ..default()
        };
        let mut brain = EnemyBrain::new(stats, route(), false);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();

        let above = Senses {
            position: Vec2::new(10.0, 1.0),
            target: None,
        };
        brain.tick(AGENT, ms(0), above, &mut timers, &mut out);

        assert!(matches!(brain.state(), AiState::Waiting { .. }));
    }

    #[test]
    fn damage_stuns_and_knocks_back() {
        let mut brain = EnemyBrain::new(EnemyStats::default(), route(), true);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();

        assert!(brain.apply_damage(AGENT, 10, Vec2::X, ms(0), &mut timers, &mut out));

        assert_eq!(brain.health(), 20);
        assert!(matches!(brain.state(), AiState::Hurt { .. }));
        assert!(out.contains(&Intent::Animation(AnimationTrigger::Hurt)));
        assert!(out.contains(&Intent::Impulse(Vec2::new(5.0, 0.0))));

        // A second hit during the stun is ignored.
        out.clear();
        assert!(!brain.apply_damage(AGENT, 10, Vec2::X, ms(100), &mut timers, &mut out));
        assert_eq!(brain.health(), 20);
        assert!(out.is_empty());

        // Stunned agents do nothing on tick.
        brain.tick(AGENT, ms(200), senses(Some(Vec2::new(3.0, 0.0))), &mut timers, &mut out);
        assert!(out.is_empty());

        fire(&mut brain, &mut timers, ms(500), senses(None));
        assert_eq!(brain.state(), AiState::Patrolling);
    }

    #[test]
    fn windup_still_resolves_through_a_stun() {
        let mut brain = EnemyBrain::new(EnemyStats::default(), route(), true);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();
        let close = senses(Some(Vec2::new(1.0, 0.0)));

        brain.tick(AGENT, ms(0), close, &mut timers, &mut out);
        assert!(brain.apply_damage(AGENT, 5, Vec2::NEG_X, ms(100), &mut timers, &mut out));
        assert!(matches!(brain.state(), AiState::Hurt { .. }));

        let fired = fire(&mut brain, &mut timers, ms(300), close);
        assert_eq!(fired, vec![Intent::DealDamage(10)]);
        assert_eq!(brain.last_attack(), Some(ms(300)));
        assert!(matches!(brain.state(), AiState::Hurt { .. }));

        // Stun ends first, then the recovery.
        fire(&mut brain, &mut timers, ms(600), close);
        assert!(matches!(
            brain.state(),
            AiState::Attacking { phase: AttackPhase::Recovery, .. }
        ));
        fire(&mut brain, &mut timers, ms(800), close);
        assert_eq!(brain.state(), AiState::Patrolling);

        // The cooldown counts from the windup that landed during the stun.
        out.clear();
        brain.tick(AGENT, ms(900), close, &mut timers, &mut out);
        assert!(!out.contains(&Intent::Animation(AnimationTrigger::Attack)));
        assert!(out.contains(&Intent::Velocity(Vec2::ZERO)));
    }

    #[test]
    fn waypoint_wait_still_advances_during_a_chase() {
        let mut brain = EnemyBrain::new(EnemyStats::default(), route(), true);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();
        let at_first = |target| Senses {
            position: Vec2::new(10.0, 0.0),
            target,
        };

        brain.tick(AGENT, ms(0), at_first(None), &mut timers, &mut out);
        assert!(matches!(brain.state(), AiState::Waiting { .. }));

        brain.tick(AGENT, ms(100), at_first(Some(Vec2::new(10.0, 4.0))), &mut timers, &mut out);
        assert_eq!(brain.state(), AiState::Chasing);

        fire(&mut brain, &mut timers, ms(1000), at_first(Some(Vec2::new(10.0, 4.0))));
        assert_eq!(brain.route().index(), 1);

        // Losing the target goes straight on to the next waypoint.
        out.clear();
        brain.tick(AGENT, ms(1010), at_first(None), &mut timers, &mut out);
        assert_eq!(brain.state(), AiState::Patrolling);
        assert!(out.contains(&Intent::Velocity(Vec2::new(3.0, 0.0))));
    }

    #[test]
    fn waypoint_wait_still_advances_during_a_stun() {
        let mut brain = EnemyBrain::new(EnemyStats::default(), route(), false);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();
        let at_first = Senses {
            position: Vec2::new(10.0, 0.0),
            target: None,
        };

        brain.tick(AGENT, ms(0), at_first, &mut timers, &mut out);
        brain.apply_damage(AGENT, 5, Vec2::X, ms(800), &mut timers, &mut out);

        fire(&mut brain, &mut timers, ms(1000), at_first);
        assert_eq!(brain.route().index(), 1);
        assert!(matches!(brain.state(), AiState::Hurt { .. }));

        fire(&mut brain, &mut timers, ms(1300), at_first);
        assert_eq!(brain.state(), AiState::Patrolling);
    }

    #[test]
    fn death_drops_a_pending_attack() {
        let stats = EnemyStats {
            max_health: 5,
            ..default()
        };
        let mut brain = EnemyBrain::new(stats, route(), true);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();
        let close = senses(Some(Vec2::new(1.0, 0.0)));

        brain.tick(AGENT, ms(0), close, &mut timers, &mut out);
        brain.apply_damage(AGENT, 5, Vec2::X, ms(100), &mut timers, &mut out);

        assert!(fire(&mut brain, &mut timers, ms(300), close).is_empty());
        assert!(brain.last_attack().is_none());
        assert!(brain.is_dead());
    }

    #[test]
    fn lethal_damage_kills_and_schedules_removal() {
        let stats = EnemyStats {
            max_health: 5,
            ..default()
        };
        let mut brain = EnemyBrain::new(stats, route(), true);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();

        brain.apply_damage(AGENT, 50, Vec2::X, ms(1000), &mut timers, &mut out);

        assert!(brain.is_dead());
        assert_eq!(brain.health(), 0);
        assert!(out.contains(&Intent::Animation(AnimationTrigger::Die)));
        assert!(out.contains(&Intent::DisableCollision));
        let impulse = out.iter().position(|i| *i == Intent::Impulse(Vec2::new(5.0, 0.0)));
        let die = out.iter().position(|i| *i == Intent::Animation(AnimationTrigger::Die));
        assert!(impulse.is_some());
        assert!(impulse < die);
        assert_eq!(timers.next_due(), Some(ms(3000)));

        assert!(fire(&mut brain, &mut timers, ms(2999), senses(None)).is_empty());
        assert_eq!(fire(&mut brain, &mut timers, ms(3000), senses(None)), vec![Intent::Despawn]);
    }

    #[test]
    fn dead_is_absorbing() {
        let stats = EnemyStats {
            max_health: 1,
            ..default()
        };
        let mut brain = EnemyBrain::new(stats, route(), true);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();

        brain.apply_damage(AGENT, 1, Vec2::ZERO, ms(0), &mut timers, &mut out);
        let state = brain.state();
        out.clear();

        brain.tick(AGENT, ms(10), senses(Some(Vec2::new(1.0, 0.0))), &mut timers, &mut out);
        assert!(!brain.apply_damage(AGENT, 1, Vec2::ZERO, ms(20), &mut timers, &mut out));

        assert!(out.is_empty());
        assert_eq!(brain.state(), state);
        assert_eq!(brain.health(), 0);
    }

    #[test]
    fn chase_without_route_ends_idle() {
        let mut brain = EnemyBrain::new(EnemyStats::default(), PatrolRoute::empty(), true);
        let mut timers = TimerQueue::new();
        let mut out = Vec::new();

        brain.tick(AGENT, ms(0), senses(Some(Vec2::new(4.0, 0.0))), &mut timers, &mut out);
        assert_eq!(brain.state(), AiState::Chasing);

        out.clear();
        brain.tick(AGENT, ms(10), senses(Some(Vec2::new(9.0, 0.0))), &mut timers, &mut out);
        assert_eq!(brain.state(), AiState::Idle);
        assert!(out.contains(&Intent::Velocity(Vec2::ZERO)));
    }
}
