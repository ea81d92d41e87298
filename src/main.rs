//! concertina: A collapsible two-level list in the terminal.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use concertina::{app_state, config, controller, input, policy, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "concertina")]
#[command(about = "Collapsible two-level lists in the terminal", long_about = None)]
struct Args {
    /// JSON dataset: an array of { "title": .., "children": [..] }
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Expansion policy: single or multiple
    #[arg(long, short = 'p', value_name = "POLICY")]
    policy: Option<String>,

    /// Write debug logs to this file
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(policy) = args.policy {
        cfg.policy = policy;
    }
    if let Some(log) = args.log {
        cfg.log_file = log.to_string_lossy().to_string();
    }

    if !cfg.log_file.is_empty() {
        let log_file = File::create(&cfg.log_file)?;
        WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), log_file)
            .map_err(io::Error::other)?;
    }

    let policy: policy::ExpansionPolicy = cfg
        .expansion_policy()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let model = match args.path {
        Some(path) => input::load_tree(&path)?,
        None => input::sample_tree(),
    };

    if model.node_count() == 0 {
        eprintln!("No sections found in dataset");
        return Ok(());
    }

    let list = controller::FlattenedListController::new(model, policy);
    let state = app_state::AppState::new(list, cfg.row_heights(), cfg.child_indent);

    run_tui(state)
}

fn run_tui(mut app: app_state::AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    } else if let Some(selection) = app.selection {
        let json = serde_json::to_string_pretty(&selection).map_err(io::Error::other)?;
        println!("{json}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                KeyCode::Home => app.move_to_first(),
                KeyCode::End => app.move_to_last(),
                KeyCode::Enter | KeyCode::Char(' ') => app.activate_current(),
                KeyCode::Char('c') => app.collapse_all(),
                _ => {}
            }
        }
    }
}
