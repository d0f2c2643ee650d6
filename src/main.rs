// Terminal Sokoban on top of the tilemap push rules
// Controls: W/A/S/D or arrow keys (immediate response). Q to quit.
// Usage: tilemap_rules [interactive|print] [level.txt] [theme.json]

use std::io;
use std::sync::Mutex;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tilemap_rules::config::{GlyphTable, ThemeConfig};
use tilemap_rules::console_interface::ConsoleInput::*;
use tilemap_rules::console_interface::{
    cleanup_terminal, describe_directions, handle_input, load_level_with_effects, parse_level_with_effects,
    render_game, render_level_to_string, setup_terminal,
};
use tilemap_rules::core::{Direction, GameUpdate, Level};
use tilemap_rules::models::{GameRenderState, Progress};

const DEFAULT_LEVEL: &str = r#"
  #######
  #  .  #
  #  $  #
### $# ###
#   @   #
###S  ###
  #  D  #
  #######
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let switch = args.next().unwrap_or("interactive".to_string());
    let level_path = args.next();
    let theme = match args.next() {
        Some(path) => ThemeConfig::load(path)?,
        None => ThemeConfig::default(),
    };

    init_logging()?;

    let glyphs = theme.glyph_table()?;
    let level = match level_path {
        Some(path) => load_level_with_effects(path, &theme, Progress::default())?,
        None => parse_level_with_effects(DEFAULT_LEVEL, &theme, Progress::default())?,
    };
    info!(mode = %switch, player = %level.player(), "level loaded");

    match switch.as_str() {
        "print" => {
            print_level(&level, &glyphs);
        }
        "interactive" => {
            run_interactive(level, &glyphs)?;
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive' or 'print'. defaulting to interactive",
                switch
            );
            run_interactive(level, &glyphs)?;
        }
    }

    Ok(())
}

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("exports")?;
    let log_out = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open("exports/move_log.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(log_out))
        .with_ansi(false)
        .init();
    Ok(())
}

fn print_level(level: &Level<Progress>, glyphs: &GlyphTable) {
    print!("{}", render_level_to_string(level, glyphs));
    for direction in Direction::all() {
        println!("{:?}: {}", direction, level.preview(direction));
    }
    println!("Open: {}", describe_directions(&level.open_directions()));
}

fn run_interactive(
    level: Level<Progress>,
    glyphs: &GlyphTable,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut level = level;
    let mut terminal = setup_terminal()?;

    render(&mut terminal, &level, glyphs, None)?;

    loop {
        match handle_input() {
            Ok(Quit) => break,
            Ok(UserAction(user_action)) => {
                let change = match level.step(user_action) {
                    GameUpdate::Moved(change_type) => Some(change_type),
                    GameUpdate::Blocked => None,
                };
                render(&mut terminal, &level, glyphs, change)?;

                if level.board.effects().won {
                    // Keep showing the win screen until user inputs
                    loop {
                        match handle_input() {
                            Ok(Timeout) => {}
                            Ok(_) => break,
                            Err(_) => {
                                println!("error reading input");
                                break;
                            }
                        }
                    }
                    break;
                }
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(_) => {
                println!("error reading input");
                break;
            }
        }
    }

    cleanup_terminal()?;
    info!(progress = ?level.board.effects(), "session ended");

    Ok(())
}

fn render(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    level: &Level<Progress>,
    glyphs: &GlyphTable,
    last_change: Option<tilemap_rules::core::GameChangeType>,
) -> Result<(), Box<dyn std::error::Error>> {
    let progress = level.board.effects();
    render_game(terminal, &GameRenderState {
        board_text: render_level_to_string(level, glyphs),
        won: progress.won,
        start_visits: progress.start_visits,
        open_directions: level.open_directions(),
        last_change,
    })
}
