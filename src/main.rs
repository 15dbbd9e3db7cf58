use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::cli::ConsoleReporter;
use seabattle::{init_logging, AiPlayer, CliPlayer, Game, GameConfig, MatchOutcome};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    let mut reporter = ConsoleReporter::stdout();
    reporter.greet();

    let outcome = match command {
        Commands::Play { seed } => {
            let mut game = Game::new(
                GameConfig::default(),
                make_rng(seed),
                Box::new(CliPlayer::stdin()),
                Box::new(AiPlayer::new()),
            );
            game.run(&mut reporter)?
        }
        Commands::Watch { seed } => {
            let mut game = Game::new(
                GameConfig::default(),
                make_rng(seed),
                Box::new(AiPlayer::new()),
                Box::new(AiPlayer::new()),
            );
            game.run(&mut reporter)?
        }
    };

    match outcome {
        MatchOutcome::UserWins => println!("All enemy vessels destroyed."),
        MatchOutcome::ComputerWins => println!("All your vessels have been destroyed."),
    }
    Ok(())
}
