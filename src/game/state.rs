use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{BASE_GRAVITY_MS, GRAVITY_STEP_MS, LEVEL_UP_MS, MIN_GRAVITY_MS};
use crate::game::{random_shape, Board, Cell, InvalidDimensions, Piece};

pub fn score_for(lines_cleared: usize) -> u64 {
    lines_cleared as u64 * 100
}

// Milliseconds between gravity steps at a given level, floored.
pub fn gravity_interval(level: u32) -> u64 {
    BASE_GRAVITY_MS
        .saturating_sub(u64::from(level.saturating_sub(1)) * GRAVITY_STEP_MS)
        .max(MIN_GRAVITY_MS)
}

pub struct Game {
    pub board: Board,
    pub current: Piece,
    pub score: u64,
    pub level: u32,
    pub lines_cleared: u64,
    pub game_over: bool,
    elapsed_ms: u64,
    fall_ms: u64,
    rng: StdRng,
}

impl Game {
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidDimensions> {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    pub fn with_rng(
        width: usize,
        height: usize,
        mut rng: StdRng,
    ) -> Result<Self, InvalidDimensions> {
        let board = Board::new(width, height)?;
        let kind = random_shape(&mut rng);
        let current = Piece::spawn(kind, width);
        Ok(Self {
            board,
            current,
            score: 0,
            level: 1,
            lines_cleared: 0,
            game_over: false,
            elapsed_ms: 0,
            fall_ms: 0,
            rng,
        })
    }

    pub fn can_place(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        for (x, y) in piece.cells() {
            let (nx, ny) = (x + dx, y + dy);
            if nx < 0 || nx >= self.board.width as i32 || ny >= self.board.height as i32 {
                return false;
            }
            // No top bound: rows above the well count as open space.
            if ny < 0 {
                continue;
            }
            if matches!(self.board.get(nx as usize, ny as usize), Cell::Occupied) {
                return false;
            }
        }
        true
    }

    pub fn move_current(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over {
            return false;
        }
        if self.can_place(&self.current, dx, dy) {
            self.current.x += dx;
            self.current.y += dy;
            true
        } else {
            false
        }
    }

    // Player-driven down-step; a successful one restarts the gravity wait.
    pub fn soft_drop(&mut self) -> bool {
        let moved = self.move_current(0, 1);
        if moved {
            self.fall_ms = 0;
        }
        moved
    }

    // Cycle through the three other fixed-origin orientations and keep the
    // first that fits; the fourth transform is the identity, so a full miss
    // leaves the piece as it was. No wall kicks.
    pub fn rotate_current(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let mut next = self.current.clone();
        for _ in 0..3 {
            next = next.rotated();
            if self.can_place(&next, 0, 0) {
                self.current = next;
                return true;
            }
        }
        false
    }

    pub fn lock_piece(&mut self) {
        for (x, y) in self.current.cells() {
            if x >= 0 && y >= 0 {
                let (xu, yu) = (x as usize, y as usize);
                if xu < self.board.width && yu < self.board.height {
                    self.board.set(xu, yu, Cell::Occupied);
                }
            }
        }
    }

    pub fn clear_full_rows(&mut self) -> usize {
        let full: Vec<usize> = (0..self.board.height)
            .filter(|&y| self.board.row_full(y))
            .collect();
        if full.is_empty() {
            return 0;
        }
        let mut cells = vec![Cell::Empty; full.len() * self.board.width];
        for y in 0..self.board.height {
            if full.contains(&y) {
                continue;
            }
            for x in 0..self.board.width {
                cells.push(self.board.get(x, y));
            }
        }
        self.board.cells = cells;
        full.len()
    }

    pub fn spawn_next(&mut self) {
        let kind = random_shape(&mut self.rng);
        self.current = Piece::spawn(kind, self.board.width);
        if !self.can_place(&self.current, 0, 0) {
            self.game_over = true;
        }
    }

    // Advance session time; one gravity step is attempted once the fall
    // accumulator passes the interval for the current level.
    pub fn tick(&mut self, dt_ms: u64) {
        if self.game_over {
            return;
        }
        self.elapsed_ms += dt_ms;
        self.level = (self.elapsed_ms / LEVEL_UP_MS + 1) as u32;
        self.fall_ms += dt_ms;
        if self.fall_ms > gravity_interval(self.level) {
            if !self.move_current(0, 1) {
                self.settle_current();
            }
            self.fall_ms = 0;
        }
    }

    pub fn hard_drop(&mut self) {
        if self.game_over {
            return;
        }
        while self.move_current(0, 1) {}
        self.settle_current();
        self.fall_ms = 0;
    }

    pub fn reset(&mut self) {
        self.board.clear();
        let kind = random_shape(&mut self.rng);
        self.current = Piece::spawn(kind, self.board.width);
        self.score = 0;
        self.level = 1;
        self.lines_cleared = 0;
        self.game_over = false;
        self.elapsed_ms = 0;
        self.fall_ms = 0;
    }

    pub(crate) fn ghost_piece(&self) -> Piece {
        let mut ghost = self.current.clone();
        while self.can_place(&ghost, 0, 1) {
            ghost.y += 1;
        }
        ghost
    }

    fn settle_current(&mut self) {
        self.lock_piece();
        let cleared = self.clear_full_rows();
        self.lines_cleared += cleared as u64;
        self.score += score_for(cleared);
        self.spawn_next();
    }
}
