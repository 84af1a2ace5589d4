use egui::{Context, Id, Key, LayerId, Order};

use crate::assets::{SpriteImages, Sprites};
use crate::drawer::GameDrawer;
use crate::game::mechanics::{BreakoutMechanics, GameInput, GamePhase, PaddleControl};

/// eframe application driving the simulation: one `time_step` per display
/// refresh, keyboard mapped to the four logical actions.
pub struct BreakoutApp {
    mechanics: BreakoutMechanics,
    sprites: Sprites,
}

impl BreakoutApp {
    pub fn new(cc: &eframe::CreationContext<'_>, images: SpriteImages) -> Self {
        Self {
            mechanics: BreakoutMechanics::new(),
            sprites: Sprites::upload(&cc.egui_ctx, images),
        }
    }

    fn read_ui_control(&self, ctx: &Context) -> GameInput {
        let control = if ctx.input(|i| i.key_down(Key::ArrowLeft) && !i.key_down(Key::ArrowRight))
        {
            PaddleControl::Left
        } else if ctx.input(|i| i.key_down(Key::ArrowRight) && !i.key_down(Key::ArrowLeft)) {
            PaddleControl::Right
        } else {
            PaddleControl::None
        };
        GameInput {
            control,
            release: ctx.input(|i| i.key_pressed(Key::Space)),
            toggle_pause: ctx.input(|i| i.key_pressed(Key::Enter)),
        }
    }
}

impl eframe::App for BreakoutApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let input = self.read_ui_control(ctx);
        self.mechanics.time_step(input);

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("game")));
        let canvas = painter.clip_rect();
        GameDrawer::new(canvas, &self.mechanics, &self.sprites).paint(&painter);

        match self.mechanics.phase {
            // GameOver keeps stepping so the deferred restart fires;
            // a paused game waits for the resume key event instead
            GamePhase::Running | GamePhase::GameOver => ctx.request_repaint(),
            GamePhase::Paused => {}
        }
    }
}
