mod build_info;
mod constants;
mod game;
mod sound;
mod theme;
mod ui;

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game::logic::{process_input, tick_game, FlappyInput};
use game::types::FlappyGame;
use ratatui::{backend::CrosstermBackend, Terminal};
use sound::SoundPlayer;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "flappy {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flappy - Terminal Flappy Bird\n");
                println!("Usage: flappy [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Keys:");
                println!("  Space/Up/Enter  Start the game / flap");
                println!("  T               Cycle theme (Day/Night/Neon)");
                println!("  S               Cycle bird skin");
                println!("  R               Restart after a crash");
                println!("  Q/Esc           Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'flappy --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

/// Main loop: draw, translate input, advance the simulation, cue sounds.
///
/// Everything runs on this one thread, so input handling never interleaves
/// with a tick and the renderer never observes a half-updated state.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut game = FlappyGame::new();
    let mut rng = rand::thread_rng();
    let sound = SoundPlayer::new();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &game))?;

        // Poll for input for at most one tick interval
        if event::poll(Duration::from_millis(constants::TICK_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        break;
                    }
                    code => {
                        if let Some(input) = map_key(code) {
                            if let Some(event) = process_input(&mut game, input) {
                                sound.handle_event(event);
                            }
                        }
                    }
                }
            }
        }

        // Advance the simulation by however much wall-clock time passed
        let dt_ms = last_tick.elapsed().as_millis() as u64;
        last_tick = Instant::now();
        for event in tick_game(&mut game, dt_ms, &mut rng) {
            sound.handle_event(event);
        }
    }

    Ok(())
}

/// Translate a key press into a game action.
fn map_key(code: KeyCode) -> Option<FlappyInput> {
    match code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(FlappyInput::Primary),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(FlappyInput::CycleTheme),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(FlappyInput::CycleSkin),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(FlappyInput::Restart),
        _ => None,
    }
}
