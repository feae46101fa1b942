use std::io::{self, BufRead, Write};
use std::process;

use crossterm::style::Color;
use crossterm::tty::IsTty;
use dungeon_dice::config::{self, Command, GameConfig};
use dungeon_dice::core::constants::ATTACK_DIE_SIDES;
use dungeon_dice::ui::{print_character_sheet, print_line, print_panel, render_character_sheet};
use dungeon_dice::{Character, Dice};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> io::Result<()> {
    let command = match config::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'dungeon-dice --help' for usage.");
            process::exit(1);
        }
    };

    let options = match command {
        Command::Help => {
            println!("{}", config::usage());
            return Ok(());
        }
        Command::Version => {
            println!("dungeon-dice {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Run(options) => options,
    };

    let config = match GameConfig::resolve(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    init_logging(&config);
    run(&config)
}

/// Logs go to stderr so they never interleave with the game's own output.
fn init_logging(config: &GameConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(config: &GameConfig) -> io::Result<()> {
    let mut dice = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?config.seed, "session started");

    let mut stdout = io::stdout();
    print_panel(&mut stdout, "Welcome to Dungeon Dice!", Color::Green)?;

    let name = prompt(&mut stdout, "Enter your character's name: ")?;
    let player = match Character::new(&name) {
        Ok(player) => player,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if config.intro_roll {
        let roll = dice.roll_die(ATTACK_DIE_SIDES);
        print_line(
            &mut stdout,
            &format!("You rolled a: {}", roll),
            Color::Cyan,
            true,
        )?;
    }

    print_line(
        &mut stdout,
        &format!("Welcome, {}!", player.name()),
        Color::Yellow,
        true,
    )?;

    if stdout.is_tty() {
        render_character_sheet(&player)?;
    } else {
        print_character_sheet(&mut stdout, &player)?;
    }

    print_line(&mut stdout, "Game is working", Color::Yellow, false)?;
    Ok(())
}

fn prompt(out: &mut impl Write, message: &str) -> io::Result<String> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
