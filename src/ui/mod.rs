use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::game::Cell;
use crate::{Game, CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W};

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("BLOCKFALL"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("BLOCKFALL")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let well_w = PLAY_W as u16;
    let well_h = PLAY_H as u16;

    let col_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(well_w),
            Constraint::Min(0),
        ])
        .split(cabinet_inner)[1];

    let info_h = 6u16;
    let controls_h = 5u16;
    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(info_h),
            Constraint::Length(well_h),
            Constraint::Length(controls_h),
            Constraint::Min(0),
        ])
        .split(col_rect);

    let mut info_rect = stack[1];
    let well_rect = stack[2];
    let mut controls_rect = stack[3];
    // Widen info/controls boxes slightly while keeping them centered.
    let expand = 4u16;
    let max_right = cabinet_inner.x + cabinet_inner.width;
    let new_x = info_rect.x.saturating_sub(expand);
    let mut new_w = info_rect.width.saturating_add(expand * 2);
    if new_x + new_w > max_right {
        new_w = max_right.saturating_sub(new_x);
    }
    info_rect.x = new_x;
    info_rect.width = new_w;
    controls_rect.x = new_x;
    controls_rect.width = new_w;

    draw_info(frame, game, info_rect);
    draw_playfield(frame, game, well_rect);
    draw_controls(frame, controls_rect);
}

fn draw_playfield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let mut grid = vec![vec![' '; PLAY_W]; PLAY_H];

    // Border: top/ceiling, sides, heavy floor.
    grid[0][0] = '┌';
    grid[0][PLAY_W - 1] = '┐';
    for x in 1..PLAY_W - 1 {
        grid[0][x] = '─';
    }
    for y in 1..PLAY_H - 1 {
        grid[y][0] = '│';
        grid[y][PLAY_W - 1] = '│';
    }
    grid[PLAY_H - 1][0] = '└';
    grid[PLAY_H - 1][PLAY_W - 1] = '┘';
    for x in 1..PLAY_W - 1 {
        grid[PLAY_H - 1][x] = '═';
    }

    // Plot one block in the inner area, two characters wide.
    let plot_block = |grid: &mut [Vec<char>], bx: usize, by: usize, ch: char| {
        let gx = 1 + bx * CELL_W;
        let gy = 1 + by;
        if gy < PLAY_H && gx + 1 < PLAY_W {
            grid[gy][gx] = ch;
            grid[gy][gx + 1] = ch;
        }
    };

    // Locked cells.
    for y in 0..game.board.height {
        for x in 0..game.board.width {
            if let Cell::Occupied = game.board.get(x, y) {
                plot_block(&mut grid, x, y, '█');
            }
        }
    }

    // Ghost piece: faint landing marker under the active piece.
    let ghost = game.ghost_piece();
    for (x, y) in ghost.cells() {
        if x >= 0 && y >= 0 {
            let (xu, yu) = (x as usize, y as usize);
            if xu < game.board.width && yu < game.board.height {
                let gx = 1 + xu * CELL_W;
                let gy = 1 + yu;
                if gy < PLAY_H && gx + 1 < PLAY_W {
                    grid[gy][gx] = '·';
                    grid[gy][gx + 1] = '·';
                }
            }
        }
    }

    // Active piece.
    for (x, y) in game.current.cells() {
        if x >= 0 && y >= 0 {
            let (xu, yu) = (x as usize, y as usize);
            if xu < game.board.width && yu < game.board.height {
                plot_block(&mut grid, xu, yu, '█');
            }
        }
    }

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| Line::raw(row.iter().collect::<String>()))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);

    if game.game_over {
        let overlay_w = (PLAY_W as u16).saturating_sub(4).max(8);
        let overlay_h = 5u16;
        let popup = Rect {
            x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
            y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
            width: overlay_w,
            height: overlay_h,
        };
        let overlay = Paragraph::new("GAME OVER\nr restart / q quit")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(overlay, popup);
    }
}

fn draw_info(frame: &mut Frame, game: &Game, area: Rect) {
    let status = if game.game_over {
        "OVER"
    } else {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        if (millis / 300) % 2 == 0 {
            "ACTIVE"
        } else {
            "      "
        }
    };

    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}", "SCORE:", game.score)),
        Line::raw(format!("{:<7} {}", "LINES:", game.lines_cleared)),
        Line::raw(format!("{:<7} {}", "STATUS:", status)),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![Line::raw(format!("{:<6} {}", "LEVEL:", game.level))])
        .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::raw("←/→ move"),
        Line::raw("↓ soft"),
        Line::raw("q/esc quit"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![
        Line::raw("↑ rotate"),
        Line::raw("space slam"),
        Line::raw("r restart"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}
