use egui::{Pos2, Vec2};

use crate::game::ball::{Ball, BALL_LEN};
use crate::game::geometry::AaBB;
use crate::game::mechanics::{PaddleControl, FIELD_LEN_X};

pub const PADDLE_LEN_X: f32 = 100.0;
pub const PADDLE_LEN_Y: f32 = 35.0;

pub const PADDLE_START_POS_X: f32 = 300.0;
const PADDLE_POS_Y: f32 = 300.0;

const PADDLE_SPEED: f32 = 6.0;

/// Horizontally moving paddle. While `holds_ball` is set the docked ball
/// rides on top and follows every movement; ownership transfers exactly once
/// per dock/release cycle.
#[derive(Clone, Debug)]
pub struct Paddle {
    pub pos: Pos2,
    pub dx: f32,
    pub speed: f32,
    pub holds_ball: bool,
}

impl Paddle {
    pub fn new() -> Self {
        Self {
            pos: Pos2::new(PADDLE_START_POS_X, PADDLE_POS_Y),
            dx: 0.0,
            speed: PADDLE_SPEED,
            holds_ball: true,
        }
    }

    pub fn shape(&self) -> AaBB {
        AaBB::from_pos_size(self.pos, Vec2::new(PADDLE_LEN_X, PADDLE_LEN_Y))
    }

    pub fn is_moving(&self) -> bool {
        self.dx != 0.0
    }

    pub fn process_control(&mut self, control: PaddleControl, ball: &mut Ball) {
        match control {
            PaddleControl::Left => self.dx = -self.speed,
            PaddleControl::Right => self.dx = self.speed,
            PaddleControl::None => self.stop(ball),
        }
    }

    pub fn stop(&mut self, ball: &mut Ball) {
        self.dx = 0.0;
        if self.holds_ball {
            ball.dx = 0.0;
        }
    }

    /// If a ball is docked, launches it and drops ownership; no-op otherwise.
    pub fn release(&mut self, ball: &mut Ball, now: u64) {
        if self.holds_ball {
            ball.launch(now);
            self.holds_ball = false;
        }
    }

    /// one velocity step; a docked ball moves by the same delta
    pub fn advance(&mut self, ball: &mut Ball) {
        self.pos.x += self.dx;
        if self.holds_ball {
            ball.pos.x += self.dx;
        }
    }

    /// Clamps to the playfield; when clamped while holding, the docked ball
    /// is recentered on the paddle.
    pub fn check_bounds(&mut self, ball: &mut Ball) {
        if self.pos.x + PADDLE_LEN_X > FIELD_LEN_X {
            self.pos.x = FIELD_LEN_X - PADDLE_LEN_X;
            self.center_ball(ball);
        } else if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.center_ball(ball);
        }
    }

    fn center_ball(&self, ball: &mut Ball) {
        if self.holds_ball {
            ball.pos.x = self.shape().center().x - BALL_LEN / 2.0;
        }
    }
}
