use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::ui::draw_game;
use crate::{Game, BOARD_H, BOARD_W};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    let mut game = Game::new(BOARD_W, BOARD_H)?;
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| draw_game(frame, &game))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
                handle_input(key.code, &mut game);
            }
        }

        // Feed real elapsed time into the engine; gravity pacing is its call.
        let dt = last_frame.elapsed();
        last_frame = Instant::now();
        game.tick(dt.as_millis() as u64);
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn handle_input(code: KeyCode, game: &mut Game) {
    match code {
        KeyCode::Left => {
            let _ = game.move_current(-1, 0);
        }
        KeyCode::Right => {
            let _ = game.move_current(1, 0);
        }
        KeyCode::Down => {
            let _ = game.soft_drop();
        }
        KeyCode::Up => {
            let _ = game.rotate_current();
        }
        KeyCode::Char(' ') => {
            game.hard_drop();
        }
        KeyCode::Char('r') => {
            game.reset();
        }
        _ => {}
    }
}
