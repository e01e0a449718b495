use std::fmt::Display;
use std::io::{BufRead, Write};

use game::GameError;
use tic_tac_toe::Board;

/// Moves the cursor home and clears the screen.
pub const WIPE: &str = "\x1b[H\x1b[J";

/// Line-oriented terminal: everything the game says goes to `output`, every answer is one line
/// of `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: true,
        }
    }

    pub fn clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Print `text` without a newline and wait for a line back. The line ending is stripped,
    /// nothing else is.
    pub fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    pub fn say(&mut self, text: impl Display) -> Result<(), GameError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// The board with a blank line above and below.
    pub fn show_board(&mut self, board: &Board) -> Result<(), GameError> {
        write!(self.output, "\n{}\n\n", board)?;
        Ok(())
    }

    pub fn wipe(&mut self) -> Result<(), GameError> {
        if self.clear_screen {
            write!(self.output, "{}", WIPE)?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
