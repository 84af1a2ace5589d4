pub mod app;
pub mod assets;
pub mod drawer;
pub mod game;
pub mod util;
