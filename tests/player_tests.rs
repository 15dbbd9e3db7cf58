mod common;

use common::{grid, Scripted};
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    AiPlayer, Coordinate, GameEvent, InputClosed, InputError, Orientation, Player, Recorder,
    Side,
};

fn target_grid() -> seabattle::Grid {
    let mut g = grid(&[(2, 0, 0, Orientation::Horizontal)], false);
    g.reset_for_play();
    g
}

#[test]
fn test_perform_turn_return_values() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut opponent = target_grid();
    let mut reporter = Recorder::default();
    let mut player = Scripted::new(vec![
        Ok(Coordinate::new(0, 0)),
        Ok(Coordinate::new(9, 9)),
        Ok(Coordinate::new(0, 0)),
        Err(InputError::Malformed("x".into())),
        Ok(Coordinate::new(5, 5)),
        Ok(Coordinate::new(1, 0)),
    ]);

    let mut results = Vec::new();
    for _ in 0..6 {
        results.push(
            player
                .perform_turn(Side::User, &mut rng, &mut opponent, &mut reporter)
                .unwrap(),
        );
    }
    assert_eq!(results, vec![true, true, true, true, false, false]);

    let events: Vec<_> = reporter.events.iter().map(|&(_, e)| e).collect();
    assert_eq!(
        events,
        vec![
            GameEvent::Hit,
            GameEvent::OutOfBounds,
            GameEvent::AlreadyTargeted,
            GameEvent::MalformedInput,
            GameEvent::Miss,
            GameEvent::Sunk,
        ]
    );
    // malformed input never reaches the grid
    assert_eq!(reporter.targets.len(), 5);
    assert_eq!(opponent.live_vessel_count(), 0);
}

#[test]
fn test_closed_input_ends_turn_with_error() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut opponent = target_grid();
    let mut player = Scripted::new(vec![]);
    let err = player
        .perform_turn(Side::User, &mut rng, &mut opponent, &mut Recorder::default())
        .unwrap_err();
    assert_eq!(err, InputClosed);
}

#[test]
fn test_ai_targets_stay_in_bounds() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut ai = AiPlayer::new();
    for _ in 0..500 {
        let c = ai.request_target(&mut rng, 6).unwrap();
        assert!((0..6).contains(&c.x) && (0..6).contains(&c.y), "{:?}", c);
    }
}

#[test]
fn test_ai_eventually_sinks_everything() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut opponent = target_grid();
    let mut ai = AiPlayer::new();
    let mut turns = 0;
    while opponent.live_vessel_count() > 0 {
        ai.perform_turn(Side::Computer, &mut rng, &mut opponent, &mut Recorder::default())
            .unwrap();
        turns += 1;
        assert!(turns < 10_000, "random shooting never finished");
    }
}
