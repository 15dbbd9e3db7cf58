//! Console rendering and notifications for a human vs computer match.

use std::io::{self, Write};

use crate::core::{CellState, Coordinate, Grid};
use crate::events::{GameEvent, Reporter, Side};

/// Glyph for a cell as drawn on the console.
pub fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty => 'O',
        CellState::Occupied => '■',
        CellState::Miss | CellState::Halo => 'T',
        CellState::Hit => 'X',
    }
}

/// Draw `grid` with 1-based column and row headers, honouring its reveal flag.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::from(" ");
    for x in 1..=grid.side_length() {
        out.push_str(&format!(" | {}", x));
    }
    out.push_str(" |\n");
    for (y, row) in grid.rows().iter().enumerate() {
        out.push_str(&format!("{}", y + 1));
        for &state in row {
            out.push_str(&format!(" | {}", glyph(state)));
        }
        out.push_str(" |\n");
    }
    out
}

/// Draw the user's grid above the computer's.
pub fn render_pair(user: &Grid, computer: &Grid) -> String {
    format!(
        "{}\nYour grid:\n{}\nComputer's grid:\n{}{}",
        "-".repeat(20),
        render_grid(user),
        render_grid(computer),
        "-".repeat(20),
    )
}

/// Greeting and input format help.
pub fn greeting() -> &'static str {
    "-------------------\n\
     \x20 Welcome to\n\
     \x20   Sea Battle\n\
     -------------------\n\
     \x20input format: x y\n\
     \x20x - column number\n\
     \x20y - row number\n"
}

/// Human-readable text for an event.
pub fn describe(side: Side, event: GameEvent) -> &'static str {
    match (side, event) {
        (Side::User, GameEvent::Hit) => "Hit! Shoot again.",
        (Side::Computer, GameEvent::Hit) => "The computer hit your vessel.",
        (_, GameEvent::Miss) => "Miss.",
        (Side::User, GameEvent::Sunk) => "Vessel sunk!",
        (Side::Computer, GameEvent::Sunk) => "The computer sank your vessel!",
        (_, GameEvent::OutOfBounds) => "That point is outside the grid!",
        (_, GameEvent::AlreadyTargeted) => "That point has already been targeted!",
        (_, GameEvent::MalformedInput) => "Enter two numbers: column and row.",
        (_, GameEvent::UserWins) => "You win!",
        (_, GameEvent::ComputerWins) => "The computer wins!",
    }
}

/// [`Reporter`] writing boards and messages to a console stream.
pub struct ConsoleReporter<W> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn greet(&mut self) {
        let _ = write!(self.out, "{}", greeting());
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn render(&mut self, user: &Grid, computer: &Grid) {
        let _ = writeln!(self.out, "{}", render_pair(user, computer));
    }

    fn announce_target(&mut self, side: Side, target: Coordinate) {
        if side == Side::Computer {
            let _ = writeln!(self.out, "Computer fires at: {}", target);
        }
    }

    fn notify(&mut self, side: Side, event: GameEvent) {
        let _ = writeln!(self.out, "{}", describe(side, event));
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Orientation, Vessel};

    fn sample_grid(reveal: bool) -> Grid {
        let mut grid = Grid::new(3, reveal);
        grid.add_vessel(Vessel::new(2, Coordinate::new(0, 0), Orientation::Horizontal))
            .unwrap();
        grid.reset_for_play();
        grid
    }

    #[test]
    fn revealed_grid_shows_hull() {
        let text = render_grid(&sample_grid(true));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "  | 1 | 2 | 3 |");
        assert_eq!(lines[1], "1 | ■ | ■ | O |");
        assert_eq!(lines[3], "3 | O | O | O |");
    }

    #[test]
    fn concealed_grid_hides_hull_but_shows_shots() {
        let mut grid = sample_grid(false);
        grid.resolve_shot(Coordinate::new(0, 0)).unwrap();
        grid.resolve_shot(Coordinate::new(2, 2)).unwrap();
        let text = render_grid(&grid);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], "1 | X | O | O |");
        assert_eq!(lines[3], "3 | O | O | T |");
    }

    #[test]
    fn reporter_only_announces_computer_targets() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.announce_target(Side::User, Coordinate::new(0, 0));
        reporter.announce_target(Side::Computer, Coordinate::new(1, 2));
        reporter.notify(Side::Computer, GameEvent::Miss);
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(text, "Computer fires at: 2 3\nMiss.\n");
    }
}
