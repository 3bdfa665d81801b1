pub mod board;
pub mod piece;
pub mod state;

pub use board::{Board, Cell, InvalidDimensions};
pub use piece::{blueprint, random_shape, Piece, Shape, ShapeMatrix, ALL_SHAPES};
pub use state::{gravity_interval, score_for, Game};
