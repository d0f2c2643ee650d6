use crate::config::{GlyphTable, ThemeConfig};
use crate::core::{Board, Direction, EffectSink, GridCoord, Level, NoEffects, TileLayer, UserAction};
use crate::error::LevelError;
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
use std::path::Path;
use tracing::info;

pub const UNKNOWN_GLYPH: char = '?';

/// Reads a text level from disk.
pub fn load_level_with_effects<E: EffectSink>(
    path: impl AsRef<Path>,
    theme: &ThemeConfig,
    effects: E,
) -> Result<Level<E>, LevelError> {
    let contents = std::fs::read_to_string(path)?;
    parse_level_with_effects(&contents, theme, effects)
}

pub fn parse_level(s: &str, theme: &ThemeConfig) -> Result<Level<NoEffects>, LevelError> {
    parse_level_with_effects(s, theme, NoEffects)
}

pub fn parse_level_with_effects<E: EffectSink>(
    s: &str,
    theme: &ThemeConfig,
    effects: E,
) -> Result<Level<E>, LevelError> {
    let glyphs = theme.glyph_table()?;
    let mut terrain = TileLayer::new();
    let mut items = TileLayer::new();
    let mut player = None;

    let mut row = 0;
    for line in s.lines() {
        let line = line.trim_matches('\n');
        if line.is_empty() {
            continue;
        }

        for (column, ch) in line.chars().enumerate() {
            let pos = GridCoord::flat(column as i32, row as i32);
            if ch == glyphs.player {
                if player.is_some() {
                    return Err(LevelError::MultiplePlayers { row, column });
                }
                player = Some(pos);
                terrain.set(pos, Some(glyphs.floor_tile.clone()));
            } else if let Some(tile) = glyphs.terrain.get_by_left(&ch) {
                terrain.set(pos, Some(tile.clone()));
            } else if let Some(tile) = glyphs.items.get_by_left(&ch) {
                terrain.set(pos, Some(glyphs.floor_tile.clone()));
                items.set(pos, Some(tile.clone()));
            } else {
                return Err(LevelError::UnknownGlyph { glyph: ch, row, column });
            }
        }
        row += 1;
    }

    let player = player.ok_or(LevelError::MissingPlayer)?;
    info!(rows = row, terrain = terrain.len(), items = items.len(), %player, "level parsed");

    let board = Board::new(theme.classifier(), terrain, items, effects);
    Ok(Level::new(board, player))
}

/// Draws the level back as text: player over items over terrain.
pub fn render_level_to_string<E: EffectSink>(level: &Level<E>, glyphs: &GlyphTable) -> String {
    let bounds = level.bounds();
    let mut result = String::new();
    for y in bounds.min.y..=bounds.max.y {
        let mut line = String::new();
        for x in bounds.min.x..=bounds.max.x {
            let pos = GridCoord::new(x, y, bounds.min.z);
            let ch = if pos == level.player() {
                glyphs.player
            } else if let Some(item) = level.board.items().get(&pos) {
                glyphs.items.get_by_right(item).copied().unwrap_or(UNKNOWN_GLYPH)
            } else if let Some(tile) = level.board.terrain().get(&pos) {
                glyphs.terrain.get_by_right(tile).copied().unwrap_or(UNKNOWN_GLYPH)
            } else {
                ' '
            };
            line.push(ch);
        }
        result.push_str(line.trim_end());
        result.push('\n');
    }
    result
}

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
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let game_paragraph = Paragraph::new(state.board_text.as_str())
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instructions = if state.won {
            "Goal reached! Press any key to quit."
        } else {
            "Controls: WASD or Arrow keys to move, Q to quit"
        };

        let mut instructions = format!("{} | Open: {}", instructions, describe_directions(&state.open_directions));
        if let Some(change_type) = &state.last_change {
            instructions = format!("{} | Last: {:?}", instructions, change_type);
        }
        if state.start_visits > 0 {
            instructions = format!("{} | Back at start x{}", instructions, state.start_visits);
        }

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub fn describe_directions(directions: &[Direction]) -> String {
    if directions.is_empty() {
        return "none".to_string();
    }
    directions
        .iter()
        .map(|d| format!("{:?}", d))
        .collect::<Vec<_>>()
        .join(" ")
}

pub enum ConsoleInput {
    UserAction(UserAction),
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
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
