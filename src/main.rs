//! Gomoku GUI and headless self-play
//!
//! ## Usage
//!
//! - `gomoku` - Open the game window
//! - `gomoku selfplay --player1 greedy --player2 forward` - Engine vs engine in the terminal

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use gomoku::ui::GomokuApp;
use gomoku::{AIEngine, EngineConfig, Game, GameMode, Outcome, SearchMode};

/// Gomoku with greedy and forward-pruning engines
#[derive(Parser)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log engine decisions (repeat for per-candidate traces)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Forward-pruning look-ahead plies
    #[arg(long, global = true, default_value_t = gomoku::config::DEFAULT_DEPTH)]
    depth: u8,

    /// Minimum heuristic score for a searched candidate
    #[arg(long, global = true, default_value_t = gomoku::config::DEFAULT_THRESHOLD)]
    threshold: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the game window
    Gui,
    /// Play one engine-vs-engine game and print the final board
    Selfplay {
        #[arg(long, value_enum, default_value_t = Engine::Greedy)]
        player1: Engine,
        #[arg(long, value_enum, default_value_t = Engine::Forward)]
        player2: Engine,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Engine {
    Greedy,
    Forward,
}

impl From<Engine> for SearchMode {
    fn from(engine: Engine) -> Self {
        match engine {
            Engine::Greedy => SearchMode::Greedy,
            Engine::Forward => SearchMode::ForwardPruning,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = EngineConfig::new(cli.depth, cli.threshold)?;

    match cli.command {
        Some(Commands::Selfplay { player1, player2 }) => run_selfplay(config, player1.into(), player2.into()),
        Some(Commands::Gui) | None => run_gui(config),
    }
}

fn run_gui(config: EngineConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 780.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
    .map_err(|err| anyhow!("GUI failed: {err}"))
}

fn run_selfplay(config: EngineConfig, player1: SearchMode, player2: SearchMode) -> Result<()> {
    let mode = GameMode::EvE { player1, player2 };
    info!("self-play: {}", mode.label());

    let mut game = Game::new(mode, config);
    let mut engine = AIEngine::with_config(config);
    while !game.is_over() {
        game.play_ai(&mut engine)?;
    }

    println!("{}", game.board().render());
    match game.outcome() {
        Outcome::Win(mark) => println!("{} won! ({} moves)", mark, game.history().len()),
        Outcome::Draw => println!("Game draw! ({} moves)", game.history().len()),
        Outcome::Continue => {}
    }
    Ok(())
}
