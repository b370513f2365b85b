use clap::Parser;
use holeban::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, render_game, render_session_complete,
    setup_terminal,
};
use holeban::core::{
    GameChangeType, GameState, GameUpdate, Status, UndoHistory, UserAction, advance,
};
use holeban::levels::{LoadedLevel, builtin_levels, compile_levels, load_level_pack};
use holeban::models::GameRenderState;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// How long the completion banner stays up before the next level loads.
const HANDOFF_HOLD: Duration = Duration::from_millis(1500);

#[derive(Parser, Debug)]
#[command(about = "Push every box into a hole")]
struct Args {
    /// JSON level pack to play instead of the builtin catalog
    #[arg(value_name = "PACK")]
    pack: Option<PathBuf>,

    /// 1-based level to start from
    #[arg(short, long, default_value = "1")]
    level: usize,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let specs = match &args.pack {
        Some(path) => load_level_pack(path)?,
        None => builtin_levels(),
    };
    let catalog = compile_levels(&specs)?;
    if args.level == 0 || args.level > catalog.len() {
        return Err(format!(
            "level {} is out of range, the catalog has {} levels",
            args.level,
            catalog.len()
        )
        .into());
    }

    let mut terminal = setup_terminal()?;
    let result = run_session(&mut terminal, &catalog, args.level - 1);
    cleanup_terminal()?;
    result
}

enum LevelOutcome {
    Advance,
    Jump(usize),
    Quit,
}

fn run_session(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    catalog: &[LoadedLevel],
    start_index: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut index = start_index;
    loop {
        tracing::info!(level = index + 1, name = %catalog[index].name, "level start");
        match run_level(terminal, catalog, index)? {
            LevelOutcome::Advance => {
                if index + 1 == catalog.len() {
                    tracing::info!("session complete");
                    render_session_complete(terminal, catalog.len())?;
                    wait_for_any_key()?;
                    return Ok(());
                }
                index += 1;
            }
            LevelOutcome::Jump(target) => {
                index = target;
            }
            LevelOutcome::Quit => {
                tracing::info!("quit");
                return Ok(());
            }
        }
    }
}

/// Play one level to its end. Entering a level (first load or jump) builds a
/// fresh state and history; restart resets both in place.
fn run_level(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    catalog: &[LoadedLevel],
    index: usize,
) -> Result<LevelOutcome, Box<dyn std::error::Error>> {
    let loaded = &catalog[index];
    let mut state = loaded.level.initial_state();
    let mut history = UndoHistory::new();
    let mut last_change: Option<GameChangeType> = None;
    let mut help_visible = false;

    loop {
        draw(
            terminal,
            catalog,
            index,
            &state,
            &history,
            last_change,
            help_visible,
        )?;

        if state.status == Status::Finished {
            tracing::info!(level = index + 1, moves = history.len(), "level complete");
            return wait_for_handoff();
        }

        let input = handle_input()?;
        if help_visible {
            match input {
                ConsoleInput::Quit => return Ok(LevelOutcome::Quit),
                ConsoleInput::Timeout => {}
                _ => help_visible = false,
            }
            continue;
        }

        match input {
            ConsoleInput::UserAction(UserAction::Move(direction)) => {
                match advance(&loaded.level, &state, direction) {
                    GameUpdate::NextState(next, change_type) => {
                        history.record(state.clone());
                        state = next;
                        last_change = Some(change_type);
                    }
                    GameUpdate::NoChange => {}
                }
            }
            ConsoleInput::Undo => {
                if let Some(previous) = history.pop() {
                    tracing::debug!(level = index + 1, depth = history.len(), "undo");
                    state = previous;
                    last_change = None;
                }
            }
            ConsoleInput::Restart => {
                tracing::debug!(level = index + 1, "restart");
                state = loaded.level.initial_state();
                history.clear();
                last_change = None;
            }
            ConsoleInput::NextLevel => {
                if index + 1 < catalog.len() {
                    return Ok(LevelOutcome::Jump(index + 1));
                }
            }
            ConsoleInput::PreviousLevel => {
                if index > 0 {
                    return Ok(LevelOutcome::Jump(index - 1));
                }
            }
            ConsoleInput::ToggleHelp => help_visible = true,
            ConsoleInput::Quit => return Ok(LevelOutcome::Quit),
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }
    }
}

/// Keep the completion banner up briefly. Any key moves on right away,
/// except quit which still quits.
fn wait_for_handoff() -> Result<LevelOutcome, Box<dyn std::error::Error>> {
    let deadline = Instant::now() + HANDOFF_HOLD;
    while Instant::now() < deadline {
        match handle_input()? {
            ConsoleInput::Quit => return Ok(LevelOutcome::Quit),
            ConsoleInput::Timeout => {}
            _ => break,
        }
    }
    Ok(LevelOutcome::Advance)
}

fn wait_for_any_key() -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match handle_input()? {
            ConsoleInput::Timeout => {}
            _ => return Ok(()),
        }
    }
}

fn draw(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    catalog: &[LoadedLevel],
    index: usize,
    state: &GameState,
    history: &UndoHistory,
    last_change: Option<GameChangeType>,
    help_visible: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = &catalog[index];
    let render_state = GameRenderState {
        game: state.clone(),
        level_name: loaded.name.clone(),
        level_number: index + 1,
        level_count: catalog.len(),
        moves: history.len(),
        last_change,
        help_visible,
    };
    render_game(terminal, &loaded.level, &render_state)
}
