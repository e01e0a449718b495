use std::io::{BufRead, Write};

use game::{Adjudicator, Conclusion, GameError, Outcome, Player, RandomPlayer};
use rand::Rng;
use tic_tac_toe::{Symbol, TicTacToe};

use crate::console::Console;
use crate::human::HumanPlayer;

pub const SYMBOL_PROMPT: &str = "Pick your symbol, X or O (X is default): ";
pub const REPLAY_PROMPT: &str = "Play again? (y/N):";

/// One person at the terminal playing game after game against the random opponent.
pub struct Session<R, W, G> {
    console: Console<R, W>,
    rng: G,
    games_played: usize,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(console: Console<R, W>, rng: G) -> Self {
        Self {
            console,
            rng,
            games_played: 0,
        }
    }

    /// Play until the human declines a replay. Returns how many games were played.
    pub fn run(&mut self) -> Result<usize, GameError> {
        loop {
            self.play_game()?;
            if !self.wants_replay()? {
                return Ok(self.games_played);
            }
        }
    }

    /// Setup, turns, and the end screen for a single game on a fresh board.
    pub fn play_game(&mut self) -> Result<Outcome, GameError> {
        self.console.wipe()?;
        let symbol = Symbol::from_choice(&self.console.prompt(SYMBOL_PROMPT)?);
        log::info!("new game, human plays {}", symbol);

        let human = HumanPlayer::new(&mut self.console, symbol);
        let computer = RandomPlayer::new(symbol.other().seat(), &mut self.rng);

        // X always has the first seat, so when the human is O the computer opens.
        let (conclusion, game) = match symbol {
            Symbol::X => play_out(Adjudicator::new(TicTacToe::new(), human, computer))?,
            Symbol::O => play_out(Adjudicator::new(TicTacToe::new(), computer, human))?,
        };

        let outcome = conclusion.outcome_for(symbol.seat());
        self.games_played += 1;
        log::info!("game {} over: {:?}", self.games_played, outcome);

        self.console.wipe()?;
        self.console.say(outcome)?;
        self.console.show_board(game.board())?;
        Ok(outcome)
    }

    /// Only "y" means yes. Running out of input counts as no.
    fn wants_replay(&mut self) -> Result<bool, GameError> {
        match self.console.prompt(REPLAY_PROMPT) {
            Ok(answer) => Ok(answer.trim().eq_ignore_ascii_case("y")),
            Err(GameError::InputClosed) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub fn games_played(&self) -> usize {
        self.games_played
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

fn play_out<P1, P2>(mut adjudicator: Adjudicator<TicTacToe, P1, P2>) -> Result<(Conclusion, TicTacToe), GameError>
where
    P1: Player<TicTacToe>,
    P2: Player<TicTacToe>,
{
    let conclusion = adjudicator.play_out()?;
    Ok((conclusion, adjudicator.into_game_state()))
}
