use battleship_hotseat::{init_logging, GameController, NullScreen, RandomInput, NUM_SHIPS};
use clap::Parser;
use serde_json::json;

/// Play one headless game with random input and print the result as JSON.
#[derive(Parser)]
struct Args {
    seed1: u64,
    seed2: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let seed = args.seed1 ^ args.seed2.rotate_left(32);
    let mut game = GameController::new(RandomInput::new(seed), NullScreen);
    let winner = match game.run() {
        Ok(winner) => winner,
        Err(never) => match never {},
    };
    let shots = game.shots_fired();
    let winner_name = game.player(winner).name().to_string();
    let (input, _) = game.into_parts();

    let result = json!({
        "winner": winner_name,
        "seat": winner,
        "shots": shots,
        "rejected_placements": input.segments_drawn() - 2 * NUM_SHIPS,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
