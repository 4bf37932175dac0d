//! Terminal UI for Dots and Boxes.

#![warn(missing_docs)]

mod app;
mod input;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

/// Dots and Boxes - connect dots, claim boxes, beat the minimax opponent
#[derive(Parser, Debug)]
#[command(name = "dots_and_boxes")]
#[command(about = "Play Dots and Boxes against a minimax opponent", long_about = None)]
#[command(version)]
struct Cli {
    /// Rows of boxes on the board
    #[arg(long, default_value = "3")]
    rows: usize,

    /// Columns of boxes on the board
    #[arg(long, default_value = "3")]
    cols: usize,

    /// Search depth in plies (higher is stronger and slower)
    #[arg(long, default_value = "3")]
    ply: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    info!(rows = cli.rows, cols = cli.cols, ply = cli.ply, "starting Dots and Boxes TUI");

    let app = App::new(cli.rows, cli.cols, cli.ply)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        app.quit_game();
                        return Ok(());
                    }
                    code => app.on_key(code),
                }
            }
        }
    }
}
