use std::path::Path;

use anyhow::anyhow;
use egui::Vec2;

use breakout::app::BreakoutApp;
use breakout::assets::SpriteImages;
use breakout::game::mechanics::{FIELD_LEN_X, FIELD_LEN_Y};
use breakout::util::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging();

    let images = SpriteImages::load(Path::new("img"))?;

    let mut native_options = eframe::NativeOptions::default();
    native_options.initial_window_size = Some(Vec2::new(FIELD_LEN_X, FIELD_LEN_Y));
    native_options.resizable = false;
    native_options.default_theme = eframe::Theme::Dark;
    eframe::run_native(
        "Breakout",
        native_options,
        Box::new(move |cc| Box::new(BreakoutApp::new(cc, images))),
    )
    .map_err(|err| anyhow!("frame loop failed: {err}"))
}
