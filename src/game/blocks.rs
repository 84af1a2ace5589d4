use egui::{Pos2, Vec2};
use itertools::Itertools;

use crate::game::geometry::AaBB;

pub const BLOCK_LEN_X: f32 = 64.0;
pub const BLOCK_LEN_Y: f32 = 32.0;

/// block size plus spacing
const GRID_STRIDE_X: f32 = 68.0;
const GRID_STRIDE_Y: f32 = 38.0;
/// distance of the first block from the top/left corner of the field
const GRID_OFFSET_X: f32 = 50.0;
const GRID_OFFSET_Y: f32 = 35.0;

pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 8;
pub const GRID_BLOCK_COUNT: u32 = (GRID_ROWS * GRID_COLS) as u32;

/// Remaining toughness of a block. `Main` is the weakest tier; a hit on it
/// destroys the block. The tier maps to a sprite only at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockTier {
    Green,
    Red,
    Main,
}

impl BlockTier {
    pub fn for_level(level: u32) -> Self {
        match level {
            0..=2 => BlockTier::Main,
            3..=5 => BlockTier::Red,
            _ => BlockTier::Green,
        }
    }

    /// one tier weaker; `None` means the block is depleted
    pub fn degraded(self) -> Option<Self> {
        match self {
            BlockTier::Green => Some(BlockTier::Red),
            BlockTier::Red => Some(BlockTier::Main),
            BlockTier::Main => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub shape: AaBB,
    pub tier: BlockTier,
    pub alive: bool,
}

/// Fresh grid for `level`. The caller replaces the previous level's blocks
/// wholesale.
pub fn generate_blocks(level: u32) -> Vec<Block> {
    let tier = BlockTier::for_level(level);
    (0..GRID_ROWS)
        .cartesian_product(0..GRID_COLS)
        .map(|(row, col)| Block {
            shape: AaBB::from_pos_size(
                Pos2::new(
                    GRID_OFFSET_X + GRID_STRIDE_X * col as f32,
                    GRID_OFFSET_Y + GRID_STRIDE_Y * row as f32,
                ),
                Vec2::new(BLOCK_LEN_X, BLOCK_LEN_Y),
            ),
            tier,
            alive: true,
        })
        .collect()
}
