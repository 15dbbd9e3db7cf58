use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AiPlayer, Game, GameConfig, MatchOutcome, Side, Silent};
use serde::Serialize;

#[derive(Serialize)]
struct Summary {
    seed: u64,
    winner: Side,
    outcome: MatchOutcome,
    turns: usize,
    user_live: usize,
    computer_live: usize,
}

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut game = Game::new(
        GameConfig::default(),
        SmallRng::seed_from_u64(seed),
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
    );
    let outcome = game.run(&mut Silent)?;

    let summary = Summary {
        seed,
        winner: outcome.winner(),
        outcome,
        turns: game.turns(),
        user_live: game.user_grid().live_vessel_count(),
        computer_live: game.computer_grid().live_vessel_count(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
