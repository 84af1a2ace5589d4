use std::time::Duration;

use crate::game::ball::{Ball, BALL_SPEED_INCREMENT};
use crate::game::blocks::{generate_blocks, Block, GRID_BLOCK_COUNT};
use crate::game::paddle::{Paddle, PADDLE_START_POS_X};
use crate::game::schedule::{ActionQueue, DeferredAction};

/// TOP / LEFT corner is 0/0
pub const FIELD_LEN_X: f32 = 640.0;
pub const FIELD_LEN_Y: f32 = 360.0;

const START_LIVES: u32 = 3;

/// lets the frame that cleared the field finish before the level changes
pub const LEVEL_ADVANCE_DELAY: Duration = Duration::from_millis(120);
pub const GAME_OVER_DELAY: Duration = Duration::from_millis(10);
pub const RESTART_DELAY: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaddleControl {
    None,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug)]
pub struct GameInput {
    pub control: PaddleControl,
    pub release: bool,
    pub toggle_pause: bool,
}

impl GameInput {
    pub fn none() -> Self {
        Self {
            control: PaddleControl::None,
            release: false,
            toggle_pause: false,
        }
    }
}

/// Complete simulation state, advanced by one [`time_step`] per display
/// refresh. All timers run on the simulation tick counter.
///
/// [`time_step`]: BreakoutMechanics::time_step
#[derive(Clone, Debug)]
pub struct BreakoutMechanics {
    pub blocks: Vec<Block>,
    pub ball: Ball,
    pub paddle: Paddle,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub phase: GamePhase,
    /// count of blocks with `alive == true`
    pub remaining_blocks: u32,
    pub tick: u64,
    actions: ActionQueue,
}

impl BreakoutMechanics {
    pub fn new() -> Self {
        Self {
            blocks: generate_blocks(1),
            ball: Ball::new(),
            paddle: Paddle::new(),
            score: 0,
            lives: START_LIVES,
            level: 1,
            phase: GamePhase::Running,
            remaining_blocks: GRID_BLOCK_COUNT,
            tick: 0,
            actions: ActionQueue::new(),
        }
    }

    /// physically move one time step forward
    pub fn time_step(&mut self, input: GameInput) {
        if input.toggle_pause {
            self.toggle_pause();
        }
        match self.phase {
            GamePhase::Paused => return,
            GamePhase::GameOver => {
                // only the tick clock keeps running, so the deferred
                // restart can fire
                self.tick += 1;
                self.fire_due_actions();
                return;
            }
            GamePhase::Running => {}
        }

        self.tick += 1;
        self.fire_due_actions();
        if self.phase != GamePhase::Running {
            return;
        }

        self.paddle.process_control(input.control, &mut self.ball);
        if input.release {
            self.paddle.release(&mut self.ball, self.tick);
        }

        let paddle_shape = self.paddle.shape();
        let on_bottom_edge = self.ball.on_paddle_bottom_edge(&paddle_shape);
        if self.ball.collides_with(&paddle_shape) && !on_bottom_edge {
            self.ball.bounce_off_paddle(&paddle_shape);
        }
        if on_bottom_edge {
            self.ball.slide_under_paddle();
        }

        if self.ball.is_moving() {
            self.ball.advance();
        }
        if self.paddle.is_moving() {
            self.paddle.advance(&mut self.ball);
        }

        self.resolve_block_hit();

        self.check_ball_bounds();
        self.paddle.check_bounds(&mut self.ball);

        self.ball.animate(self.tick);
    }

    fn toggle_pause(&mut self) {
        if self.lives == 0 {
            return;
        }
        match self.phase {
            GamePhase::Running => {
                log::debug!("paused at tick {}", self.tick);
                self.phase = GamePhase::Paused;
            }
            GamePhase::Paused => self.phase = GamePhase::Running,
            GamePhase::GameOver => {}
        }
    }

    /// Resolves at most one block hit per tick; the first living match in
    /// iteration order wins, so overlapping blocks cannot double-score.
    fn resolve_block_hit(&mut self) {
        let hit = self
            .blocks
            .iter()
            .position(|block| block.alive && self.ball.collides_with(&block.shape));
        let Some(idx) = hit else {
            return;
        };

        self.ball.dy = -self.ball.dy;
        let block = &mut self.blocks[idx];
        match block.tier.degraded() {
            Some(weaker) => block.tier = weaker,
            None => {
                block.alive = false;
                self.remaining_blocks -= 1;
                self.score += self.level;
                if self.remaining_blocks == 0 {
                    self.actions
                        .schedule(DeferredAction::AdvanceLevel, LEVEL_ADVANCE_DELAY, self.tick);
                }
            }
        }
    }

    fn check_ball_bounds(&mut self) {
        if !self.ball.check_bounds() {
            return;
        }
        self.lives -= 1;
        log::info!("ball lost, {} lives left", self.lives);
        self.dock_ball();
        if self.lives == 0 {
            self.ball.park_offscreen();
            self.actions
                .schedule(DeferredAction::GameOver, GAME_OVER_DELAY, self.tick);
        }
    }

    fn dock_ball(&mut self) {
        self.ball
            .dock(&self.paddle.shape(), self.remaining_blocks > 0);
        self.paddle.holds_ball = true;
    }

    fn fire_due_actions(&mut self) {
        for action in self.actions.drain_due(self.tick) {
            match action {
                DeferredAction::AdvanceLevel => self.advance_level(),
                DeferredAction::GameOver => self.enter_game_over(),
                DeferredAction::Restart => {
                    *self = BreakoutMechanics::new();
                    return;
                }
            }
        }
    }

    /// Guarded so a duplicate deferred event in the same tick window cannot
    /// advance twice.
    fn advance_level(&mut self) {
        if self.remaining_blocks != 0 {
            return;
        }
        self.level += 1;
        self.blocks = generate_blocks(self.level);
        self.dock_ball();
        self.ball.speed += BALL_SPEED_INCREMENT;
        self.remaining_blocks = GRID_BLOCK_COUNT;
        self.paddle.pos.x = PADDLE_START_POS_X;
        log::info!("level {} reached, score {}", self.level, self.score);
    }

    fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.actions
            .schedule(DeferredAction::Restart, RESTART_DELAY, self.tick);
        log::info!("game over, final score {}", self.score);
    }
}

impl Default for BreakoutMechanics {
    fn default() -> Self {
        Self::new()
    }
}
