//! Interactive agent reading moves as text lines
//!
//! Generic over the reader and writer so that play sessions can be scripted
//! in tests with an in-memory cursor.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::{
    Error, Result,
    ports::Agent,
    tictactoe::{Action, BoardState, Player, Position},
};

/// Parse a line of the form `x y` into a legal action on `board`.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] when the line is not two integers and
/// [`Error::IllegalMove`] when the cell is out of range or occupied.
pub fn parse_move(line: &str, board: &BoardState, player: Player) -> Result<Action> {
    let malformed = |reason: &str| Error::MalformedInput {
        input: line.trim().to_string(),
        reason: reason.to_string(),
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = tokens.as_slice() else {
        return Err(malformed("expected two numbers separated by a space"));
    };
    let x = x
        .parse::<usize>()
        .map_err(|_| malformed("x must be a number between 0 and 2"))?;
    let y = y
        .parse::<usize>()
        .map_err(|_| malformed("y must be a number between 0 and 2"))?;

    Action::new(board, x, y, player)
}

/// A person at the keyboard (or a scripted stand-in)
pub struct HumanAgent<R, W> {
    name: String,
    player: Player,
    input: R,
    output: W,
}

impl HumanAgent<StdinLock<'static>, Stdout> {
    /// Human reading from stdin and writing prompts to stdout
    pub fn stdio(player: Player) -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(player, stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(player: Player, input: R, output: W) -> Self {
        Self {
            name: "Human".to_string(),
            player,
            input,
            output,
        }
    }

    /// Consume the agent and return its writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn select_move(&mut self, position: &Position) -> Result<Action> {
        if position.is_terminal() {
            return Err(Error::GameOver);
        }
        writeln!(self.output, "{}", position.board)?;

        loop {
            write!(self.output, "{} to move, enter x y: ", position.to_move)?;
            self.output.flush()?;

            let line = self.read_line()?;
            match parse_move(&line, &position.board, position.to_move) {
                Ok(action) => return Ok(action),
                Err(err) if err.is_retryable_input() => {
                    writeln!(self.output, "{err}. Try again.")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn on_win(&mut self) -> Result<()> {
        writeln!(self.output, "You win!")?;
        Ok(())
    }

    fn on_lose(&mut self) -> Result<()> {
        writeln!(self.output, "You lose.")?;
        Ok(())
    }

    fn on_draw(&mut self) -> Result<()> {
        writeln!(self.output, "It's a draw.")?;
        Ok(())
    }

    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }
}
