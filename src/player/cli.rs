use std::io::{self, BufRead, StdinLock, Stdout, Write};

use rand::rngs::SmallRng;

use crate::cli::parse_target;
use crate::core::{Coordinate, InputError};

use super::Player;

/// Human player reading one target per line, as two 1-based numbers.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player attached to the process's standard input and output.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.output, "Your shot (column row): ")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn request_target(
        &mut self,
        _rng: &mut SmallRng,
        _side_length: i32,
    ) -> Result<Coordinate, InputError> {
        if self.prompt().is_err() {
            return Err(InputError::Closed);
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => Err(InputError::Closed),
            Ok(_) => parse_target(&line),
        }
    }
}
