//! Line-oriented console input for human players.

use std::io::{self, BufRead, Write};
use tictactoe_engine::{GameError, Move, MoveSource, Rejection};
use tracing::{debug, instrument, warn};

/// A source of input lines.
///
/// Standard input is read through [`io::Stdin`] rather than a held lock so
/// several human players can share it.
pub trait LineReader {
    /// Appends the next line to `buf`, returning the bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineReader for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineReader for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: io::Read> LineReader for io::BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Prompts on `output` and reads coordinates from `input`, one per line.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    input: R,
    output: W,
}

impl<R: LineReader, W: Write> ConsoleInput<R, W> {
    /// Creates a console input over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn say(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.output, "{}", text)
            .and_then(|_| self.output.flush())
            .map_err(|e| GameError::input(format!("Failed to write prompt: {}", e)))
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| GameError::input(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Err(GameError::input("Input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Asks for one coordinate until a number is entered.
    fn read_coordinate(
        &mut self,
        player: &str,
        axis: &str,
        plural: &str,
        order: &str,
        size: usize,
    ) -> Result<usize, GameError> {
        loop {
            self.say(&format!(
                "Player {}, please enter the {} where you want to place your piece.",
                player, axis
            ))?;
            self.say(&format!(
                "{} must be in range [0, {}]. {} are from {}.",
                plural,
                size - 1,
                plural,
                order
            ))?;

            let line = self.read_line()?;
            match line.parse::<usize>() {
                Ok(value) => {
                    self.say(&format!("Selected {}: {}", axis, value))?;
                    return Ok(value);
                }
                Err(e) => {
                    debug!(input = %line, error = %e, "Unparsable coordinate");
                    self.say("Incorrect format!")?;
                }
            }
        }
    }
}

impl<R: LineReader, W: Write> MoveSource for ConsoleInput<R, W> {
    #[instrument(skip(self))]
    fn request_move(&mut self, player: &str, size: usize) -> Result<Move, GameError> {
        let row = self.read_coordinate(player, "row", "Rows", "top to bottom", size)?;
        let col = self.read_coordinate(player, "col", "Columns", "left to right", size)?;
        Ok(Move::new(row, col))
    }

    fn reject(&mut self, reason: &Rejection) {
        if let Err(e) = self.say(&reason.to_string()) {
            warn!(error = %e, "Failed to report rejected move");
        }
    }

    fn accepted(&mut self, position: Move) {
        let text = format!("Placed piece at {}, {}!", position.row, position.col);
        if let Err(e) = self.say(&text) {
            warn!(error = %e, "Failed to confirm move");
        }
    }
}
