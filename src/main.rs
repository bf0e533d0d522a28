use anyhow::Context;
use battleship_hotseat::{
    console::{LineInput, TextScreen},
    init_logging, GameController,
};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Two-player hot-seat Battleship", long_about = None)]
struct Cli {
    /// Name shown for the player who places and shoots first.
    #[arg(long, default_value = "Player 1")]
    first: String,
    /// Name shown for the second player.
    #[arg(long, default_value = "Player 2")]
    second: String,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut game = GameController::with_names(
        LineInput::stdio(),
        TextScreen::stdout(),
        cli.first,
        cli.second,
    );
    let winner = game.run().context("game aborted")?;
    log::info!(
        "{} won after {} shots",
        game.player(winner).name(),
        game.shots_fired()
    );
    Ok(())
}
