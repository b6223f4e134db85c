//! Filler
//!
//! Opens the game window, or plays a match in the terminal with `--headless`.

use clap::Parser;
use filler::config::{Cli, GameConfig};
use filler::ui::{FillerApp, GameState};
use filler::player::HumanMoveSource;
use filler::{Match, Outcome, Player};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.game_config();

    if cli.headless {
        config.validate_headless()?;
        return play_headless(&config);
    }

    config.validate()?;
    let state = GameState::new(config)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 640.0])
            .with_min_inner_size([560.0, 480.0])
            .with_title("Filler"),
        ..Default::default()
    };

    eframe::run_native(
        "Filler",
        options,
        Box::new(move |cc| Ok(Box::new(FillerApp::new(cc, state)))),
    )?;
    Ok(())
}

fn play_headless(config: &GameConfig) -> Result<(), Box<dyn std::error::Error>> {
    let board = config.new_board()?;
    println!("{board}");

    let [one, two] = config.providers(&HumanMoveSource::new());
    let mut game = Match::new(board, one, two);
    let outcome = game.run();

    println!("{}", game.board());
    println!(
        "Scores: {} - {} after {} moves",
        game.board().score(Player::One),
        game.board().score(Player::Two),
        game.history().len()
    );
    match outcome {
        Outcome::Win(player) => println!("{player} wins"),
        Outcome::Tie => println!("Tie"),
        Outcome::InProgress => println!("Match stopped before a result"),
    }
    info!(?outcome, "Headless match done");
    Ok(())
}
