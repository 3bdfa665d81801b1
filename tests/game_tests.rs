use blockfall::{
    blueprint, gravity_interval, score_for, Board, Cell, Game, Piece, Shape, ALL_SHAPES,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_game(seed: u64) -> Game {
    Game::with_rng(10, 20, StdRng::seed_from_u64(seed)).unwrap()
}

fn piece_at(kind: Shape, x: i32, y: i32) -> Piece {
    let mut piece = Piece::spawn(kind, 10);
    piece.x = x;
    piece.y = y;
    piece
}

#[test]
fn zero_dimensions_are_rejected_at_construction() {
    assert!(Game::new(0, 20).is_err());
    assert!(Game::new(10, 0).is_err());
    let err = Board::new(0, 0).unwrap_err();
    assert_eq!(err.to_string(), "board dimensions must be positive, got 0x0");
}

#[test]
fn gravity_interval_speeds_up_and_floors() {
    assert_eq!(gravity_interval(1), 1000);
    assert_eq!(gravity_interval(5), 600);
    assert_eq!(gravity_interval(10), 100);
    assert_eq!(gravity_interval(20), 100);
    for level in 1..40 {
        assert!(gravity_interval(level + 1) <= gravity_interval(level));
        assert!(gravity_interval(level) >= 100);
    }
}

#[test]
fn score_is_linear_per_line() {
    assert_eq!(score_for(0), 0);
    for n in 1..=6 {
        assert_eq!(score_for(n), 100 * n as u64);
    }
}

#[test]
fn can_place_rejects_walls_floor_and_occupied_cells() {
    let mut game = seeded_game(1);
    game.current = piece_at(Shape::O, 4, 0);
    assert!(game.can_place(&game.current, 0, 0));
    assert!(!game.can_place(&game.current, -5, 0)); // past the left wall
    assert!(!game.can_place(&game.current, 6, 0)); // past the right wall
    assert!(game.can_place(&game.current, 4, 0)); // flush with the right wall
    assert!(game.can_place(&game.current, 0, 18)); // resting on the floor
    assert!(!game.can_place(&game.current, 0, 19)); // through the floor

    game.board.set(5, 10, Cell::Occupied);
    assert!(!game.can_place(&game.current, 0, 9)); // lands on the planted cell
    assert!(game.can_place(&game.current, 0, 8)); // just above it
    assert!(game.can_place(&game.current, -2, 9)); // beside it
}

#[test]
fn cells_above_the_well_do_not_block_placement() {
    let mut game = seeded_game(14);
    // Bounding box pokes above the top row; those cells count as open space.
    game.current = piece_at(Shape::O, 4, -1);
    assert!(game.can_place(&game.current, 0, 0));
}

#[test]
fn blocked_translate_leaves_the_piece_in_place() {
    let mut game = seeded_game(2);
    game.current = piece_at(Shape::O, 0, 5);
    assert!(!game.move_current(-1, 0));
    assert_eq!((game.current.x, game.current.y), (0, 5));
    assert!(game.move_current(1, 0));
    assert_eq!((game.current.x, game.current.y), (1, 5));
}

#[test]
fn clear_with_no_full_rows_is_a_no_op() {
    let mut game = seeded_game(3);
    for x in 0..9 {
        game.board.set(x, 19, Cell::Occupied); // one gap at the right
    }
    let before = game.board.cells.clone();
    assert_eq!(game.clear_full_rows(), 0);
    assert_eq!(game.board.cells, before);
}

#[test]
fn clearing_rows_two_and_five_shifts_the_stack_down() {
    let mut game = seeded_game(4);
    for x in 0..10 {
        game.board.set(x, 2, Cell::Occupied);
        game.board.set(x, 5, Cell::Occupied);
    }
    game.board.set(0, 0, Cell::Occupied);
    game.board.set(3, 3, Cell::Occupied);
    game.board.set(7, 19, Cell::Occupied);

    assert_eq!(game.clear_full_rows(), 2);
    assert_eq!(game.board.height, 20);
    for y in 0..2 {
        for x in 0..10 {
            assert_eq!(game.board.get(x, y), Cell::Empty);
        }
    }
    // Markers kept their relative order: two rows removed above shifts by
    // two, one row removed above shifts by one, below stays put.
    assert_eq!(game.board.get(0, 2), Cell::Occupied);
    assert_eq!(game.board.get(3, 4), Cell::Occupied);
    assert_eq!(game.board.get(7, 19), Cell::Occupied);
    assert!((0..20).all(|y| !game.board.row_full(y)));
}

#[test]
fn rotation_cycles_back_after_four_turns() {
    for kind in ALL_SHAPES {
        let matrix = blueprint(kind);
        let mut rotated = matrix.clone();
        for _ in 0..4 {
            rotated = rotated.rotate_clockwise();
        }
        assert_eq!(rotated, matrix, "{kind:?}");
    }
}

#[test]
fn o_piece_is_rotation_symmetric() {
    let matrix = blueprint(Shape::O);
    assert_eq!(matrix.rotate_clockwise(), matrix);
}

#[test]
fn i_piece_twice_rotated_is_a_horizontal_bar_again() {
    let twice = blueprint(Shape::I).rotate_clockwise().rotate_clockwise();
    let cells: Vec<_> = twice.occupied().collect();
    assert_eq!(cells, vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
}

#[test]
fn rotation_applies_when_the_turned_shape_fits() {
    let mut game = seeded_game(6);
    game.current = piece_at(Shape::I, 3, 5);
    assert!(game.rotate_current());
    let cells: Vec<_> = game.current.shape.occupied().collect();
    assert_eq!(cells, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
}

#[test]
fn rotation_with_no_fitting_orientation_leaves_the_shape() {
    let mut game = seeded_game(5);
    game.current = piece_at(Shape::I, 3, 16);
    // Block the vertical columns and the lower bar of every other
    // orientation; the piece's own row stays free.
    game.board.set(4, 18, Cell::Occupied);
    game.board.set(5, 18, Cell::Occupied);
    assert!(!game.rotate_current());
    assert_eq!(game.current.shape, blueprint(Shape::I));
    assert_eq!((game.current.x, game.current.y), (3, 16));
}

#[test]
fn gravity_steps_only_after_the_interval_passes() {
    let mut game = seeded_game(8);
    let y0 = game.current.y;
    game.tick(400);
    game.tick(400);
    assert_eq!(game.current.y, y0);
    game.tick(400); // accumulator passes 1000ms and resets
    assert_eq!(game.current.y, y0 + 1);
    game.tick(900);
    assert_eq!(game.current.y, y0 + 1);
    game.tick(200);
    assert_eq!(game.current.y, y0 + 2);
}

#[test]
fn soft_drop_restarts_the_gravity_wait() {
    let mut game = seeded_game(9);
    let y0 = game.current.y;
    game.tick(900);
    assert!(game.soft_drop());
    assert_eq!(game.current.y, y0 + 1);
    game.tick(900); // only 900ms since the manual drop
    assert_eq!(game.current.y, y0 + 1);
    game.tick(200);
    assert_eq!(game.current.y, y0 + 2);
}

#[test]
fn level_follows_elapsed_minutes() {
    let mut game = seeded_game(10);
    assert_eq!(game.level, 1);
    for _ in 0..60 {
        game.tick(1000);
    }
    assert_eq!(game.level, 2);
    for _ in 0..60 {
        game.tick(1000);
    }
    assert_eq!(game.level, 3);
}

#[test]
fn hard_drop_locks_at_the_floor_and_spawns_anew() {
    let mut game = seeded_game(12);
    game.current = piece_at(Shape::O, 4, 0);
    game.hard_drop();
    assert_eq!(game.board.get(4, 18), Cell::Occupied);
    assert_eq!(game.board.get(5, 18), Cell::Occupied);
    assert_eq!(game.board.get(4, 19), Cell::Occupied);
    assert_eq!(game.board.get(5, 19), Cell::Occupied);
    assert_eq!(game.current.y, 0); // fresh piece back at the top
    assert_eq!(game.score, 0); // no drop bonus
}

#[test]
fn spawning_onto_a_filled_stack_ends_the_game() {
    let mut game = seeded_game(7);
    for y in 0..2 {
        for x in 0..10 {
            game.board.set(x, y, Cell::Occupied);
        }
    }
    assert!(!game.game_over);
    game.spawn_next();
    assert!(game.game_over);

    // Terminal state: nothing moves any more.
    let (x0, y0) = (game.current.x, game.current.y);
    assert!(!game.move_current(-1, 0));
    assert!(!game.rotate_current());
    game.tick(10_000);
    assert_eq!((game.current.x, game.current.y), (x0, y0));
    assert_eq!(game.score, 0);
    assert!(game.game_over);
}

#[test]
fn reset_starts_a_fresh_session() {
    let mut game = seeded_game(11);
    for y in 0..2 {
        for x in 0..10 {
            game.board.set(x, y, Cell::Occupied);
        }
    }
    game.spawn_next();
    assert!(game.game_over);

    game.reset();
    assert!(!game.game_over);
    assert_eq!(game.score, 0);
    assert_eq!(game.level, 1);
    assert_eq!(game.lines_cleared, 0);
    assert_eq!(game.current.y, 0);
    assert!(game.board.cells.iter().all(|&c| c == Cell::Empty));
}

#[test]
fn seeded_sessions_deal_identical_piece_sequences() {
    let mut a = seeded_game(42);
    let mut b = seeded_game(42);
    for _ in 0..10 {
        assert_eq!(a.current.shape, b.current.shape);
        a.spawn_next();
        b.spawn_next();
    }
}

#[test]
fn filling_the_bottom_row_clears_it_and_scores_one_hundred() {
    let mut game = seeded_game(13);
    // Lay two bars into the bottom row by hand, leaving columns 6..=9 open.
    game.current = piece_at(Shape::I, 0, 18);
    game.lock_piece();
    game.current = piece_at(Shape::I, 2, 18);
    game.lock_piece();
    // Drop the closing bar through the engine and let gravity settle it.
    game.current = piece_at(Shape::I, 6, 0);
    for _ in 0..19 {
        game.tick(gravity_interval(game.level) + 1);
    }
    assert_eq!(game.score, 100);
    assert_eq!(game.lines_cleared, 1);
    assert_eq!(game.board.height, 20);
    assert!((0..10).all(|x| game.board.get(x, 19) == Cell::Empty));
    assert!(!game.game_over);
}
