//! Human player reading coordinates from a text stream.

use super::{Strategy, require_moves};
use crate::error::StrategyError;
use crate::games::tictactoe::{Board, Coord, Mark};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Human player using line-oriented input.
///
/// Each line is `row col` (zero-based). Unparseable or illegal input is
/// reported on the output stream and the player is asked again.
pub struct HumanStrategy<R, W> {
    name: String,
    mark: Mark,
    input: R,
    output: W,
}

impl<R: BufRead + Send, W: Write + Send> HumanStrategy<R, W> {
    /// Creates a new human player.
    pub fn new(mark: Mark, input: R, output: W) -> Self {
        Self {
            name: format!("Human({})", mark),
            mark,
            input,
            output,
        }
    }

    fn say(&mut self, text: &str) -> Result<(), StrategyError> {
        write!(self.output, "{}", text)
            .and_then(|_| self.output.flush())
            .map_err(|e| StrategyError::Input(e.to_string()))
    }
}

impl<R: BufRead + Send, W: Write + Send> Strategy for HumanStrategy<R, W> {
    #[instrument(skip_all, fields(strategy = %self.name))]
    fn select_move(&mut self, board: &Board) -> Result<Coord, StrategyError> {
        require_moves(board)?;
        self.say(&format!("{}\n", board))?;

        loop {
            self.say(&format!("Player {}, enter row and column: ", self.mark))?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| StrategyError::Input(e.to_string()))?;
            if read == 0 {
                return Err(StrategyError::Input("input closed".to_string()));
            }

            let Some(coord) = Coord::parse(&line) else {
                warn!(input = %line.trim(), "Unparseable coordinate");
                self.say("Expected two numbers, e.g. `1 2`\n")?;
                continue;
            };

            match board.with_move(coord, self.mark) {
                Ok(_) => {
                    debug!(%coord, "Human chose cell");
                    return Ok(coord);
                }
                Err(e) => {
                    warn!(%coord, error = %e, "Rejected human move");
                    self.say(&format!("{}\n", e))?;
                }
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reprompts_until_legal() {
        let board: Board = "X../.../...".parse().unwrap();
        let input = Cursor::new("nonsense\n0 0\n7 7\n2,1\n");
        let mut output = Vec::new();
        let coord = HumanStrategy::new(Mark::O, input, &mut output)
            .select_move(&board)
            .unwrap();
        assert_eq!(coord, Coord::new(2, 1));

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Expected two numbers"));
        assert!(transcript.contains("already occupied"));
        assert!(transcript.contains("outside the 3x3 board"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut strategy = HumanStrategy::new(Mark::X, Cursor::new(""), Vec::new());
        assert!(matches!(
            strategy.select_move(&Board::new()),
            Err(StrategyError::Input(_))
        ));
    }
}
