use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::Cell;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

pub const ALL_SHAPES: [Shape; 7] = [
    Shape::I,
    Shape::J,
    Shape::L,
    Shape::O,
    Shape::S,
    Shape::T,
    Shape::Z,
];

pub fn random_shape<R: Rng>(rng: &mut R) -> Shape {
    *ALL_SHAPES.choose(rng).unwrap_or(&Shape::I)
}

// Square occupancy matrix for one piece, row-major with the origin top-left.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ShapeMatrix {
    size: usize,
    cells: Vec<Cell>,
}

impl ShapeMatrix {
    fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            for ch in row.chars() {
                cells.push(if ch == '#' { Cell::Occupied } else { Cell::Empty });
            }
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.size + x]
    }

    // 90° clockwise: new row r is old column r read bottom-to-top.
    pub fn rotate_clockwise(&self) -> Self {
        let n = self.size;
        let mut cells = vec![Cell::Empty; n * n];
        for y in 0..n {
            for x in 0..n {
                cells[y * n + x] = self.cells[(n - 1 - x) * n + y];
            }
        }
        Self { size: n, cells }
    }

    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| matches!(cell, Cell::Occupied))
            .map(move |(i, _)| (i % n, i / n))
    }
}

// Spawn-orientation blueprints. I and O are square-bounded so rotation keeps
// their bounding box; the rest sit in a 3x3 box.
pub fn blueprint(shape: Shape) -> ShapeMatrix {
    const I: [&str; 4] = ["....", "####", "....", "...."];
    const J: [&str; 3] = ["#..", "###", "..."];
    const L: [&str; 3] = ["..#", "###", "..."];
    const O: [&str; 2] = ["##", "##"];
    const S: [&str; 3] = [".##", "##.", "..."];
    const T: [&str; 3] = [".#.", "###", "..."];
    const Z: [&str; 3] = ["##.", ".##", "..."];

    match shape {
        Shape::I => ShapeMatrix::from_rows(&I),
        Shape::J => ShapeMatrix::from_rows(&J),
        Shape::L => ShapeMatrix::from_rows(&L),
        Shape::O => ShapeMatrix::from_rows(&O),
        Shape::S => ShapeMatrix::from_rows(&S),
        Shape::T => ShapeMatrix::from_rows(&T),
        Shape::Z => ShapeMatrix::from_rows(&Z),
    }
}

#[derive(Clone)]
pub struct Piece {
    pub shape: ShapeMatrix,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn spawn(kind: Shape, board_width: usize) -> Self {
        let shape = blueprint(kind);
        let x = board_width as i32 / 2 - shape.size() as i32 / 2;
        Self { shape, x, y: 0 }
    }

    pub fn cells(&self) -> Vec<(i32, i32)> {
        self.shape
            .occupied()
            .map(|(cx, cy)| (self.x + cx as i32, self.y + cy as i32))
            .collect()
    }

    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate_clockwise(),
            x: self.x,
            y: self.y,
        }
    }
}
