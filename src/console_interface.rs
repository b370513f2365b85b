use crate::core::{Actor, Direction, GameState, Level, Occupancy, Status, Tile, UserAction, Vec2};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    level: &Level,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Game area (or the key map while help is up)
        let body = if state.help_visible {
            help_text()
        } else {
            render_game_to_string(level, &state.game)
        };
        let title = format!(
            "{} ({}/{})",
            state.level_name, state.level_number, state.level_count
        );
        let game_paragraph = Paragraph::new(body)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instructions = if state.game.status == Status::Finished {
            "Every box is in a hole! Press any key for the next level.".to_string()
        } else {
            format!(
                "Moves: {} | Arrows/WASD move, U undo, R restart, N/P switch level, H help, Q quit",
                state.moves
            )
        };

        let instructions = if let Some(change_type) = &state.last_change {
            format!("{} | Last: {:?}", instructions, change_type)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// Closing screen once the last level has been finished.
pub fn render_session_complete(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    level_count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let text = format!(
            "All {} levels complete!\n\nPress any key to leave.",
            level_count
        );
        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("holeban"))
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, f.area());
    })?;
    Ok(())
}

/// Re-emit the level in plan symbols with the actors overlaid. A player
/// standing on a hole still draws as `@`; the plan alphabet has no symbol
/// for that pairing.
pub fn render_game_to_string(level: &Level, game: &GameState) -> String {
    let mut result = String::new();
    for y in 0..level.height {
        for x in 0..level.width {
            let pos = Vec2 {
                x: x as i32,
                y: y as i32,
            };
            let actor = game.actors.iter().find(|actor| actor.pos() == pos);
            let ch = match actor {
                Some(Actor::Player { .. }) => '@',
                Some(Actor::Box {
                    occupancy: Occupancy::Seated,
                    ..
                }) => '+',
                Some(Actor::Box {
                    occupancy: Occupancy::Free,
                    ..
                }) => '=',
                None => match level.tile(pos) {
                    Tile::Floor => '.',
                    Tile::Wall => '#',
                    Tile::Hole => 'O',
                },
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

fn help_text() -> String {
    [
        "Arrows / WASD   move, push the box ahead",
        "U / Backspace   undo the last move",
        "R               restart this level",
        "N / PageDown    next level",
        "P / PageUp      previous level",
        "H / F1          close this help",
        "Q / Esc         quit",
        "",
        "@ player   = box   + box in hole   O hole   # wall",
    ]
    .join("\n")
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Undo,
    Restart,
    NextLevel,
    PreviousLevel,
    ToggleHelp,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => ConsoleInput::Undo,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::PageDown => {
                    ConsoleInput::NextLevel
                }
                KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::PageUp => {
                    ConsoleInput::PreviousLevel
                }
                KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::F(1) => ConsoleInput::ToggleHelp,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
