pub mod app;
pub mod config;
pub mod game;
mod ui;

pub use config::{
    BASE_GRAVITY_MS, BOARD_H, BOARD_W, CELL_W, GRAVITY_STEP_MS, LEVEL_UP_MS, MIN_GRAVITY_MS,
    MIN_PANE_WIDTH, PLAY_H, PLAY_W,
};
pub use game::{
    blueprint, gravity_interval, random_shape, score_for, Board, Cell, Game, InvalidDimensions,
    Piece, Shape, ShapeMatrix, ALL_SHAPES,
};
