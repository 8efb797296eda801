//! Timer queue for delayed enemy resumptions.
//!
//! Every timed wait an enemy performs (waypoint pause, attack windup and
//! recovery, hurt stun, corpse removal) is an entry in a [`TimerQueue`],
//! keyed by the agent and the purpose of the wait. The simulation clock
//! drains due entries each tick and hands them back to the agent's brain.
//!
//! The queue has no cancel operation. A brain remembers the [`TimerToken`]
//! of the timer its current state is waiting on, so an entry that fires
//! after the state moved on is recognised as stale and dropped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use bevy::prelude::*;

/// Why a timer was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerPurpose {
    /// Pause at a reached waypoint before heading to the next one.
    WaypointWait,
    /// Delay between starting an attack and the hit landing.
    AttackWindup,
    /// Delay after the hit before the agent may act again.
    AttackRecovery,
    /// Stun after taking damage.
    HurtRecovery,
    /// Grace period between death and removal from the world.
    Removal,
}

/// Identifies one scheduled timer. Tokens are never reused by a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

/// A timer that has reached its due time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiredTimer<K> {
    pub agent: K,
    pub purpose: TimerPurpose,
    pub token: TimerToken,
    pub due: Duration,
}

#[derive(Debug, Clone)]
struct Entry<K> {
    due: Duration,
    token: TimerToken,
    agent: K,
    purpose: TimerPurpose,
}

// BinaryHeap is a max-heap, so the ordering is reversed: earliest due first,
// then lowest token (scheduling order) for timers due at the same instant.
impl<K> Ord for Entry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.token.cmp(&self.token))
    }
}

impl<K> PartialOrd for Entry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> PartialEq for Entry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl<K> Eq for Entry<K> {}

/// Pending timers for any number of agents, ordered by due time.
#[derive(Debug, Clone)]
pub struct TimerQueue<K> {
    heap: BinaryHeap<Entry<K>>,
    next_token: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_token: 0,
        }
    }
}

impl<K: Copy + PartialEq> TimerQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timer for `agent` that expires at `due` simulation time.
    pub fn schedule(&mut self, agent: K, purpose: TimerPurpose, due: Duration) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.heap.push(Entry {
            due,
            token,
            agent,
            purpose,
        });
        token
    }

    /// Remove and return the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<ExpiredTimer<K>> {
        if self.heap.peek()?.due > now {
            return None;
        }
        self.heap.pop().map(|entry| ExpiredTimer {
            agent: entry.agent,
            purpose: entry.purpose,
            token: entry.token,
            due: entry.due,
        })
    }

    /// Drop every pending timer belonging to `agent`.
    pub fn forget(&mut self, agent: K) {
        self.heap.retain(|entry| entry.agent != agent);
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<Duration> {
        self.heap.peek().map(|entry| entry.due)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// World-wide timer queue for enemy entities.
#[derive(Resource, Default)]
pub struct EnemyTimers(pub TimerQueue<Entity>);
