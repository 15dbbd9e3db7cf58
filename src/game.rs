//! Match controller: alternating turns, the extra-turn-on-hit rule and victory detection.

use log::info;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::core::{FleetGenerator, GameConfig, Grid, InputClosed};
use crate::events::{GameEvent, Reporter, Side};
use crate::player::Player;

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    UserWins,
    ComputerWins,
}

impl MatchOutcome {
    pub fn winner(self) -> Side {
        match self {
            MatchOutcome::UserWins => Side::User,
            MatchOutcome::ComputerWins => Side::Computer,
        }
    }
}

impl From<MatchOutcome> for GameEvent {
    fn from(outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::UserWins => GameEvent::UserWins,
            MatchOutcome::ComputerWins => GameEvent::ComputerWins,
        }
    }
}

/// A user and a computer, each with a grid, taking turns until one fleet is gone.
///
/// `grids[i]` belongs to the player in `players[i]`; each player fires at the
/// other index. Only the grid under attack is touched during a turn.
pub struct Game {
    grids: [Grid; 2],
    players: [Box<dyn Player>; 2],
    rng: SmallRng,
    active: Side,
    turns: usize,
    finished: bool,
}

impl Game {
    /// Generate both grids from `config` and get them ready for the first shot.
    /// The user's vessels are drawn; the computer's are concealed.
    pub fn new(
        config: GameConfig,
        mut rng: SmallRng,
        user: Box<dyn Player>,
        computer: Box<dyn Player>,
    ) -> Self {
        let generator = FleetGenerator::new(config);
        let user_grid = generator.generate(&mut rng, true);
        let computer_grid = generator.generate(&mut rng, false);
        Self::from_grids(user_grid, computer_grid, rng, user, computer)
    }

    /// Start a match on already populated grids.
    pub fn from_grids(
        mut user_grid: Grid,
        mut computer_grid: Grid,
        rng: SmallRng,
        user: Box<dyn Player>,
        computer: Box<dyn Player>,
    ) -> Self {
        user_grid.reset_for_play();
        computer_grid.reset_for_play();
        info!(
            "match started: {} user vessels, {} computer vessels",
            user_grid.live_vessel_count(),
            computer_grid.live_vessel_count()
        );
        Self {
            grids: [user_grid, computer_grid],
            players: [user, computer],
            rng,
            active: Side::User,
            turns: 0,
            finished: false,
        }
    }

    /// Side that acts next.
    pub fn active(&self) -> Side {
        self.active
    }

    /// Number of turns taken so far, rejected targets included.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side.index()]
    }

    pub fn user_grid(&self) -> &Grid {
        self.grid(Side::User)
    }

    pub fn computer_grid(&self) -> &Grid {
        self.grid(Side::Computer)
    }

    /// Winner, if either fleet has been destroyed.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        if self.computer_grid().live_vessel_count() == 0 {
            Some(MatchOutcome::UserWins)
        } else if self.user_grid().live_vessel_count() == 0 {
            Some(MatchOutcome::ComputerWins)
        } else {
            None
        }
    }

    /// Run one iteration of the match loop: render, let the active side act,
    /// then either keep the turn or pass it. Returns the outcome once a fleet
    /// is gone.
    pub fn play_turn(
        &mut self,
        reporter: &mut dyn Reporter,
    ) -> Result<Option<MatchOutcome>, InputClosed> {
        if let Some(outcome) = self.outcome() {
            self.finish(outcome, reporter);
            return Ok(Some(outcome));
        }
        reporter.render(&self.grids[0], &self.grids[1]);

        let side = self.active;
        let target = side.opponent().index();
        let again = self.players[side.index()].perform_turn(
            side,
            &mut self.rng,
            &mut self.grids[target],
            reporter,
        )?;
        self.turns += 1;

        if let Some(outcome) = self.outcome() {
            self.finish(outcome, reporter);
            return Ok(Some(outcome));
        }
        if !again {
            self.active = side.opponent();
        }
        Ok(None)
    }

    /// Show the final boards and announce the winner, once per match.
    fn finish(&mut self, outcome: MatchOutcome, reporter: &mut dyn Reporter) {
        if self.finished {
            return;
        }
        self.finished = true;
        reporter.render(&self.grids[0], &self.grids[1]);
        reporter.notify(outcome.winner(), GameEvent::from(outcome));
        info!("match over after {} turns: {:?}", self.turns, outcome);
    }

    /// Play until one side wins.
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<MatchOutcome, InputClosed> {
        loop {
            if let Some(outcome) = self.play_turn(reporter)? {
                return Ok(outcome);
            }
        }
    }
}
