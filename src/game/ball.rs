use std::time::Duration;

use egui::{Pos2, Vec2};

use crate::game::geometry::AaBB;
use crate::game::mechanics::{FIELD_LEN_X, FIELD_LEN_Y};
use crate::game::schedule::FrameTicker;

pub const BALL_LEN: f32 = 22.0;

pub const BALL_START_SPEED: f32 = 3.0;
/// gained on every level advance
pub const BALL_SPEED_INCREMENT: f32 = 0.5;

/// dock position used before the first level and when the field is empty
const BALL_PARK_POS_X: f32 = 340.0;
const BALL_PARK_POS_Y: f32 = 278.0;
/// a lost game moves the ball out of the visible field
const BALL_OFFSCREEN_POS_X: f32 = 3000.0;

pub const BALL_FRAMES: usize = 4;
const BALL_FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// The ball is either docked (zero velocity, riding the paddle, which holds
/// the ownership flag) or in flight with `(dx, dy)` of magnitude `speed` per
/// axis. The sprite frame cycles only while in flight.
#[derive(Clone, Debug)]
pub struct Ball {
    pub pos: Pos2,
    pub dx: f32,
    pub dy: f32,
    pub speed: f32,
    pub frame: usize,
    animation: Option<FrameTicker>,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Pos2::new(BALL_PARK_POS_X, BALL_PARK_POS_Y),
            dx: 0.0,
            dy: 0.0,
            speed: BALL_START_SPEED,
            frame: 0,
            animation: None,
        }
    }

    pub fn shape(&self) -> AaBB {
        AaBB::from_pos_size(self.pos, Vec2::splat(BALL_LEN))
    }

    /// bounding box one velocity step ahead; all collision predicates test
    /// this projected position against the target's current bounds
    fn next_shape(&self) -> AaBB {
        self.shape().translate(Vec2::new(self.dx, self.dy))
    }

    pub fn is_moving(&self) -> bool {
        self.dx != 0.0 || self.dy != 0.0
    }

    /// Docked -> InFlight: up and to the left at the current magnitude.
    pub fn launch(&mut self, now: u64) {
        self.dy = -self.speed;
        self.dx = -self.speed;
        self.animation = Some(FrameTicker::new(BALL_FRAME_INTERVAL, now));
    }

    /// one velocity step; the update loop calls this only while moving
    pub fn advance(&mut self) {
        self.pos += Vec2::new(self.dx, self.dy);
    }

    pub fn collides_with(&self, rect: &AaBB) -> bool {
        self.next_shape().strictly_overlaps(rect)
    }

    /// Reflects upward; the horizontal direction points away from the paddle
    /// center, judged by the projected ball center.
    pub fn bounce_off_paddle(&mut self, paddle: &AaBB) {
        self.dy = -self.speed;
        let projected_center_x = self.pos.x + self.dx + BALL_LEN / 2.0;
        self.dx = if projected_center_x < paddle.center().x {
            -self.speed
        } else {
            self.speed
        };
    }

    /// True when the ball strikes the paddle from underneath or the side:
    /// the projected horizontal extents overlap and the projected vertical
    /// center has passed the paddle's vertical center.
    pub fn on_paddle_bottom_edge(&self, paddle: &AaBB) -> bool {
        let next = self.next_shape();
        next.max.x > paddle.min.x
            && next.min.x < paddle.max.x
            && next.center().y > paddle.center().y
    }

    /// Reverses the horizontal direction only; used instead of a bounce when
    /// `on_paddle_bottom_edge` holds, so the ball slides past the paddle.
    pub fn slide_under_paddle(&mut self) {
        self.dx = if self.dx > 0.0 { -self.speed } else { self.speed };
    }

    /// Clamps against the side and top walls, reflecting the velocity
    /// outward. Returns true when the ball crossed the bottom boundary; the
    /// caller handles the life loss.
    pub fn check_bounds(&mut self) -> bool {
        let next = self.pos + Vec2::new(self.dx, self.dy);
        if next.x < 0.0 {
            self.pos.x = 0.0;
            self.dx = self.speed;
        } else if next.x + BALL_LEN > FIELD_LEN_X {
            self.pos.x = FIELD_LEN_X - BALL_LEN;
            self.dx = -self.speed;
        } else if next.y < 0.0 {
            self.pos.y = 0.0;
            self.dy = self.speed;
        } else if next.y + BALL_LEN > FIELD_LEN_Y {
            return true;
        }
        false
    }

    /// InFlight -> Docked: centered above the paddle, or the fixed park
    /// position while no blocks remain. Stops movement and the frame cycle.
    pub fn dock(&mut self, paddle: &AaBB, blocks_remaining: bool) {
        self.animation = None;
        self.pos.x = if blocks_remaining {
            paddle.center().x - BALL_LEN / 2.0
        } else {
            BALL_PARK_POS_X
        };
        self.pos.y = paddle.min.y - BALL_LEN;
        self.dx = 0.0;
        self.dy = 0.0;
    }

    pub fn park_offscreen(&mut self) {
        self.pos.x = BALL_OFFSCREEN_POS_X;
    }

    /// advances the sprite frame while the in-flight ticker is running
    pub fn animate(&mut self, now: u64) {
        if let Some(ticker) = &mut self.animation {
            if ticker.fires_at(now) {
                self.frame = (self.frame + 1) % BALL_FRAMES;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use egui::{Pos2, Vec2};
    use rstest::rstest;

    use super::*;

    fn ball_at(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        let mut ball = Ball::new();
        ball.pos = Pos2::new(x, y);
        ball.dx = dx;
        ball.dy = dy;
        ball
    }

    fn rect(min_x: f32, min_y: f32, len_x: f32, len_y: f32) -> AaBB {
        AaBB::from_pos_size(Pos2::new(min_x, min_y), Vec2::new(len_x, len_y))
    }

    // the predicate tests the projected position, not the current one
    #[rstest]
    #[case(ball_at(100.0, 100.0, 3.0, 3.0), rect(124.0, 120.0, 64.0, 32.0), true)]
    #[case(ball_at(100.0, 100.0, 0.0, 0.0), rect(124.0, 120.0, 64.0, 32.0), false)]
    #[case(ball_at(100.0, 100.0, 3.0, 3.0), rect(125.0, 103.0, 64.0, 32.0), false)] // edge touch
    #[case(ball_at(100.0, 100.0, -3.0, 0.0), rect(33.0, 100.0, 64.0, 32.0), false)] // edge touch left
    #[case(ball_at(100.0, 100.0, -3.0, 0.0), rect(34.0, 100.0, 64.0, 32.0), true)]
    fn collision_uses_projected_position(
        #[case] ball: Ball,
        #[case] target: AaBB,
        #[case] expected: bool,
    ) {
        assert_eq!(ball.collides_with(&target), expected);
    }

    #[rstest]
    #[case(ball_at(310.0, 310.0, 0.0, 0.0), true)] // projected center below paddle center
    #[case(ball_at(310.0, 280.0, 0.0, 3.0), false)] // still above
    #[case(ball_at(200.0, 320.0, 0.0, 0.0), false)] // no horizontal overlap
    #[case(ball_at(280.0, 320.0, 3.0, 0.0), true)] // slides into overlap
    fn under_paddle_heuristic(#[case] ball: Ball, #[case] expected: bool) {
        let paddle = rect(300.0, 300.0, 100.0, 35.0);
        assert_eq!(ball.on_paddle_bottom_edge(&paddle), expected);
    }

    #[rstest]
    #[case(ball_at(310.0, 290.0, -3.0, 3.0), -3.0)] // projected center left of paddle center
    #[case(ball_at(370.0, 290.0, 3.0, 3.0), 3.0)]
    fn paddle_bounce_direction(#[case] mut ball: Ball, #[case] expected_dx: f32) {
        let paddle = rect(300.0, 300.0, 100.0, 35.0);
        ball.bounce_off_paddle(&paddle);
        assert_eq!(ball.dx, expected_dx);
        assert_eq!(ball.dy, -ball.speed);
    }

    #[test]
    fn slide_reverses_horizontal_only() {
        let mut ball = ball_at(310.0, 320.0, 3.0, 3.0);
        ball.slide_under_paddle();
        assert_eq!((ball.dx, ball.dy), (-3.0, 3.0));
        ball.slide_under_paddle();
        assert_eq!((ball.dx, ball.dy), (3.0, 3.0));
    }

    #[rstest]
    #[case(ball_at(1.0, 50.0, -3.0, 0.0), (0.0, 50.0), (3.0, 0.0))] // left wall
    #[case(ball_at(620.0, 50.0, 3.0, 0.0), (618.0, 50.0), (-3.0, 0.0))] // right wall
    #[case(ball_at(50.0, 2.0, 0.0, -3.0), (50.0, 0.0), (0.0, 3.0))] // ceiling
    fn wall_reflection(
        #[case] mut ball: Ball,
        #[case] expected_pos: (f32, f32),
        #[case] expected_velocity: (f32, f32),
    ) {
        assert!(!ball.check_bounds());
        assert_eq!(ball.pos, Pos2::new(expected_pos.0, expected_pos.1));
        assert_eq!((ball.dx, ball.dy), expected_velocity);
    }

    #[test]
    fn bottom_crossing_reported_not_clamped() {
        let mut ball = ball_at(50.0, 340.0, 0.0, 3.0);
        assert!(ball.check_bounds());
        assert_eq!(ball.pos, Pos2::new(50.0, 340.0));
    }

    #[test]
    fn frame_cycle_runs_only_in_flight() {
        let mut ball = Ball::new();
        for now in 1..=20 {
            ball.animate(now);
        }
        assert_eq!(ball.frame, 0);

        ball.launch(0);
        for now in 1..=20 {
            ball.animate(now);
        }
        // fires at ticks 5, 10, 15, 20 and wraps
        assert_eq!(ball.frame, 0);
        ball.animate(25);
        assert_eq!(ball.frame, 1);

        let paddle = rect(300.0, 300.0, 100.0, 35.0);
        ball.dock(&paddle, true);
        for now in 26..=60 {
            ball.animate(now);
        }
        assert_eq!(ball.frame, 1);
    }

    #[test]
    fn dock_positions() {
        let paddle = rect(300.0, 300.0, 100.0, 35.0);
        let mut ball = ball_at(100.0, 100.0, 3.0, -3.0);
        ball.dock(&paddle, true);
        assert_eq!(ball.pos, Pos2::new(339.0, 278.0));
        assert_eq!((ball.dx, ball.dy), (0.0, 0.0));

        let mut ball = ball_at(100.0, 100.0, 3.0, -3.0);
        ball.dock(&paddle, false);
        assert_eq!(ball.pos, Pos2::new(340.0, 278.0));
    }
}
