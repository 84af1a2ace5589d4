use std::path::Path;

use anyhow::{Context, Result};
use egui::{ColorImage, TextureHandle, TextureOptions};

use crate::game::blocks::BlockTier;

/// Decoded sprite images, loadable before any GUI context exists.
pub struct SpriteImages {
    background: ColorImage,
    paddle: ColorImage,
    ball: ColorImage,
    blocks_main: ColorImage,
    blocks_red: ColorImage,
    blocks_green: ColorImage,
}

impl SpriteImages {
    /// Loads all sprites from `dir`; the ball sprite is a horizontal strip of
    /// four animation frames.
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            background: load_image(dir, "bg")?,
            paddle: load_image(dir, "paddle")?,
            ball: load_image(dir, "ball")?,
            blocks_main: load_image(dir, "blocks_main")?,
            blocks_red: load_image(dir, "blocks_red")?,
            blocks_green: load_image(dir, "blocks_green")?,
        })
    }
}

fn load_image(dir: &Path, name: &str) -> Result<ColorImage> {
    let path = dir.join(format!("{name}.png"));
    let image = image::open(&path)
        .with_context(|| format!("loading sprite {}", path.display()))?
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, image.as_raw()))
}

/// Sprite registry keyed by logical name; the drawer treats the handles as
/// opaque.
pub struct Sprites {
    pub background: TextureHandle,
    pub paddle: TextureHandle,
    pub ball: TextureHandle,
    blocks_main: TextureHandle,
    blocks_red: TextureHandle,
    blocks_green: TextureHandle,
}

impl Sprites {
    pub fn upload(ctx: &egui::Context, images: SpriteImages) -> Self {
        let texture =
            |name: &str, image| ctx.load_texture(name, image, TextureOptions::NEAREST);
        Self {
            background: texture("bg", images.background),
            paddle: texture("paddle", images.paddle),
            ball: texture("ball", images.ball),
            blocks_main: texture("blocks_main", images.blocks_main),
            blocks_red: texture("blocks_red", images.blocks_red),
            blocks_green: texture("blocks_green", images.blocks_green),
        }
    }

    /// tier -> display asset mapping, kept out of the gameplay logic
    pub fn block_texture(&self, tier: BlockTier) -> &TextureHandle {
        match tier {
            BlockTier::Main => &self.blocks_main,
            BlockTier::Red => &self.blocks_red,
            BlockTier::Green => &self.blocks_green,
        }
    }
}
