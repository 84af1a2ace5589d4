pub mod ball;
pub mod blocks;
pub mod geometry;
pub mod mechanics;
pub mod paddle;
pub mod schedule;
