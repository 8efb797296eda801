//! Patrol routes - the fixed waypoint list an enemy walks between.

use bevy::prelude::*;
use serde::Deserialize;

/// How a route continues after its last waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PatrolMode {
    /// Wrap around to the first waypoint.
    #[default]
    Loop,
    /// Walk back along the route, then forward again.
    PingPong,
}

impl PatrolMode {
    pub fn from_looping(looping: bool) -> Self {
        if looping {
            Self::Loop
        } else {
            Self::PingPong
        }
    }
}

/// Direction of travel along a ping-pong route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatrolDirection {
    #[default]
    Forward,
    Backward,
}

/// Ordered waypoints plus the index of the one currently headed for.
///
/// The index always points inside the list when the list is non-empty.
#[derive(Debug, Clone, Default)]
pub struct PatrolRoute {
    waypoints: Vec<Vec2>,
    index: usize,
    mode: PatrolMode,
    direction: PatrolDirection,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec2>, mode: PatrolMode) -> Self {
        Self {
            waypoints,
            index: 0,
            mode,
            direction: PatrolDirection::Forward,
        }
    }

    /// A route with no waypoints. Enemies holding one never patrol.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The waypoint currently headed for.
    pub fn current(&self) -> Option<Vec2> {
        self.waypoints.get(self.index).copied()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> PatrolDirection {
        self.direction
    }

    pub fn mode(&self) -> PatrolMode {
        self.mode
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Move on to the next waypoint.
    ///
    /// A ping-pong route that reaches either end only turns around; the
    /// index stays on the end waypoint until the next call.
    pub fn advance(&mut self) {
        let len = self.waypoints.len();
        if len < 2 {
            return;
        }

        match self.mode {
            PatrolMode::Loop => self.index = (self.index + 1) % len,
            PatrolMode::PingPong => {
                let last = len - 1;
                match self.direction {
                    PatrolDirection::Forward if self.index >= last => {
                        self.direction = PatrolDirection::Backward;
                    }
                    PatrolDirection::Forward => self.index += 1,
                    PatrolDirection::Backward if self.index == 0 => {
                        self.direction = PatrolDirection::Forward;
                    }
                    PatrolDirection::Backward => self.index -= 1,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(n: usize) -> Vec<Vec2> {
        (0..n).map(|i| Vec2::new(i as f32, 0.0)).collect()
    }

    fn visit_order(route: &mut PatrolRoute, steps: usize) -> Vec<usize> {
        let mut order = vec![route.index()];
        for _ in 0..steps {
            route.advance();
            order.push(route.index());
        }
        order
    }

    #[test]
    fn loop_route_wraps_around() {
        let mut route = PatrolRoute::new(points(3), PatrolMode::Loop);
        assert_eq!(visit_order(&mut route, 7), vec![0, 1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn ping_pong_route_turns_around_at_each_end() {
        let mut route = PatrolRoute::new(points(3), PatrolMode::PingPong);
        assert_eq!(visit_order(&mut route, 8), vec![0, 1, 2, 2, 1, 0, 0, 1, 2]);
    }

    #[test]
    fn ping_pong_turn_keeps_the_end_waypoint() {
        let mut route = PatrolRoute::new(points(3), PatrolMode::PingPong);
        route.advance();
        route.advance();
        assert_eq!(route.index(), 2);

        route.advance();
        assert_eq!(route.index(), 2);
        assert_eq!(route.direction(), PatrolDirection::Backward);
        assert_eq!(route.current(), Some(Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn ping_pong_with_two_points_alternates() {
        let mut route = PatrolRoute::new(points(2), PatrolMode::PingPong);
        assert_eq!(visit_order(&mut route, 4), vec![0, 1, 1, 0, 0]);
        assert_eq!(route.direction(), PatrolDirection::Forward);
    }

    #[test]
    fn single_waypoint_stays_put() {
        let mut route = PatrolRoute::new(points(1), PatrolMode::PingPong);
        assert_eq!(visit_order(&mut route, 3), vec![0, 0, 0, 0]);
        assert_eq!(route.current(), Some(Vec2::ZERO));
    }

    #[test]
    fn empty_route_has_no_target() {
        let mut route = PatrolRoute::empty();
        route.advance();
        assert!(route.is_empty());
        assert!(route.current().is_none());
    }

    #[test]
    fn mode_from_looping_flag() {
        assert_eq!(PatrolMode::from_looping(true), PatrolMode::Loop);
        assert_eq!(PatrolMode::from_looping(false), PatrolMode::PingPong);
    }
}
