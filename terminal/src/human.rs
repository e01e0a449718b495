use std::io::{BufRead, Write};

use game::{GameError, Player, Seat};
use tic_tac_toe::{Move, Symbol, TicTacToe};

use crate::console::Console;

pub struct HumanPlayer<'a, R, W> {
    console: &'a mut Console<R, W>,
    symbol: Symbol,
}

impl<'a, R: BufRead, W: Write> HumanPlayer<'a, R, W> {
    pub fn new(console: &'a mut Console<R, W>, symbol: Symbol) -> Self {
        Self { console, symbol }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl<'a, R: BufRead, W: Write> Player<TicTacToe> for HumanPlayer<'a, R, W> {
    /// Keeps asking for a row and a column until they make a legal move.
    fn choose_move(&mut self, game: &TicTacToe) -> Result<Move, GameError> {
        self.console.wipe()?;
        self.console.say(format_args!("You are playing as {}", self.symbol))?;
        self.console.show_board(game.board())?;

        loop {
            let row = self.console.prompt("Enter the row for your move: ")?;
            let column = self.console.prompt("Enter the column for your move: ")?;

            match game.parse_move(&row, &column) {
                Ok(game_move) => return Ok(game_move),
                Err(err) => {
                    log::debug!("rejected move: {}", err);
                    self.console.say("\nInvalid move, please try again")?;
                }
            }
        }
    }

    /// Show the board again after our own move, before the other side replies.
    fn inform_of_move_played(&mut self, game: &TicTacToe, _game_move: Move, player: Seat) -> Result<(), GameError> {
        if player == self.symbol.seat() {
            self.console.show_board(game.board())?;
        }
        Ok(())
    }
}
