use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Rounding};

use crate::assets::Sprites;
use crate::game::ball::BALL_FRAMES;
use crate::game::geometry::AaBB;
use crate::game::mechanics::{BreakoutMechanics, GamePhase, FIELD_LEN_X, FIELD_LEN_Y};

const HUD_FONT_SIZE: f32 = 20.0;
const OVERLAY_FONT_SIZE: f32 = 32.0;

pub struct GameDrawer<'a> {
    canvas: Rect,
    state: &'a BreakoutMechanics,
    sprites: &'a Sprites,
}

impl<'a> GameDrawer<'a> {
    pub fn new(canvas: Rect, state: &'a BreakoutMechanics, sprites: &'a Sprites) -> Self {
        Self {
            canvas,
            state,
            sprites,
        }
    }

    /// pos / FIELD_LEN = result / canvas_size
    fn scale(&self, pos: Pos2) -> Pos2 {
        Pos2::new(
            self.canvas.min.x + pos.x * self.canvas.width() / FIELD_LEN_X,
            self.canvas.min.y + pos.y * self.canvas.height() / FIELD_LEN_Y,
        )
    }

    fn scale_shape(&self, shape: &AaBB) -> Rect {
        Rect::from_min_max(self.scale(shape.min), self.scale(shape.max))
    }

    fn full_uv() -> Rect {
        Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0))
    }

    pub fn paint(&self, painter: &Painter) {
        painter.image(
            self.sprites.background.id(),
            self.canvas,
            Self::full_uv(),
            Color32::WHITE,
        );
        painter.image(
            self.sprites.paddle.id(),
            self.scale_shape(&self.state.paddle.shape()),
            Self::full_uv(),
            Color32::WHITE,
        );
        self.ball(painter);
        for block in self.state.blocks.iter().filter(|block| block.alive) {
            painter.image(
                self.sprites.block_texture(block.tier).id(),
                self.scale_shape(&block.shape),
                Self::full_uv(),
                Color32::WHITE,
            );
        }
        self.hud(painter);
        match self.state.phase {
            GamePhase::Running => {}
            GamePhase::Paused => self.overlay(painter, "Pause"),
            GamePhase::GameOver => self.overlay(painter, "Game Over"),
        }
    }

    /// current animation frame, cut out of the horizontal sprite strip
    fn ball(&self, painter: &Painter) {
        let frame = self.state.ball.frame;
        let uv = Rect::from_min_max(
            Pos2::new(frame as f32 / BALL_FRAMES as f32, 0.0),
            Pos2::new((frame + 1) as f32 / BALL_FRAMES as f32, 1.0),
        );
        painter.image(
            self.sprites.ball.id(),
            self.scale_shape(&self.state.ball.shape()),
            uv,
            Color32::WHITE,
        );
    }

    fn hud(&self, painter: &Painter) {
        painter.text(
            self.scale(Pos2::new(15.0, FIELD_LEN_Y - 10.0)),
            Align2::LEFT_CENTER,
            format!(
                "Level: {}    Score: {}    Lives: {}",
                self.state.level, self.state.score, self.state.lives
            ),
            FontId::proportional(HUD_FONT_SIZE),
            Color32::WHITE,
        );
    }

    fn overlay(&self, painter: &Painter, text: &str) {
        painter.rect_filled(
            self.canvas,
            Rounding::none(),
            Color32::from_black_alpha(153),
        );
        painter.text(
            self.canvas.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(OVERLAY_FONT_SIZE),
            Color32::WHITE,
        );
    }
}
