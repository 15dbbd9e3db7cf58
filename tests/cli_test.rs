use std::io::Cursor;

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::cli::{greeting, parse_target, render_pair, ConsoleReporter};
use seabattle::{
    CliPlayer, Coordinate, GameEvent, Grid, InputError, Orientation, Player, Reporter, Side,
    Vessel,
};

#[test]
fn test_cli_player_reads_one_based_lines() {
    let mut rng = SmallRng::seed_from_u64(0);
    let input = Cursor::new("1 1\nhello\n6 6\n");
    let mut output = Vec::new();
    let mut player = CliPlayer::new(input, &mut output);

    assert_eq!(player.request_target(&mut rng, 6), Ok(Coordinate::new(0, 0)));
    assert!(matches!(
        player.request_target(&mut rng, 6),
        Err(InputError::Malformed(_))
    ));
    assert_eq!(player.request_target(&mut rng, 6), Ok(Coordinate::new(5, 5)));
    assert_eq!(player.request_target(&mut rng, 6), Err(InputError::Closed));
    drop(player);

    let prompts = String::from_utf8(output).unwrap();
    assert_eq!(prompts.matches("Your shot").count(), 4);
}

#[test]
fn test_parse_target_round_trips_display() {
    let c = Coordinate::new(3, 4);
    assert_eq!(parse_target(&c.to_string()), Ok(c));
}

#[test]
fn test_console_reporter_renders_and_notifies() {
    let mut user = Grid::new(2, true);
    user.add_vessel(Vessel::new(1, Coordinate::new(0, 0), Orientation::Horizontal))
        .unwrap();
    let computer = Grid::new(2, false);

    let mut reporter = ConsoleReporter::new(Vec::new());
    reporter.greet();
    reporter.render(&user, &computer);
    reporter.notify(Side::User, GameEvent::UserWins);
    let text = String::from_utf8(reporter.into_inner()).unwrap();

    assert!(text.starts_with(greeting()));
    assert!(text.contains(&render_pair(&user, &computer)));
    assert!(text.contains("1 | ■ | O |"));
    assert!(text.trim_end().ends_with("You win!"));
}
