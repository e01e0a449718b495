use std::fmt;
use std::io;

use rand::Rng;

/// Errors that can escape a turn. Bad moves never do: a player is expected to keep asking until
/// it has a legal one.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed while waiting for a response")]
    InputClosed,
}

pub trait Player<Game: GameState> {
    fn choose_move(&mut self, game: &Game) -> Result<<Game as GameState>::Move, GameError>;

    /// Called on both players after every move that didn't end the game.
    fn inform_of_move_played(&mut self, _game: &Game, _game_move: <Game as GameState>::Move, _player: Seat) -> Result<(), GameError> {
        Ok(())
    }
}

/// Picks uniformly at random among the legal moves, using whatever random source it was given.
pub struct RandomPlayer<R: Rng> {
    seat: Seat,
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(seat: Seat, rng: R) -> Self {
        Self { seat, rng }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }
}

impl<Game: GameState, R: Rng> Player<Game> for RandomPlayer<R> {
    fn choose_move(&mut self, game: &Game) -> Result<<Game as GameState>::Move, GameError> {
        let game_move = random_legal_move(game, &mut self.rng);
        log::debug!("{:?} (random) chose {:?}", self.seat, game_move);
        Ok(game_move)
    }
}

/// Rejection sampling.
///
/// Draw from the whole move space with `GameState::sample_move` until a draw is legal. Every
/// legal move is equally likely, and the expected number of draws is (size of move space) /
/// (number of legal moves).
///
/// This never returns if there are no legal moves. Only call it on a game which hasn't concluded.
pub fn random_legal_move<Game: GameState, R: Rng + ?Sized>(game: &Game, rng: &mut R) -> <Game as GameState>::Move {
    let mut draws = 0u32;
    loop {
        let game_move = game.sample_move(rng);
        draws += 1;
        if game.is_legal(game_move) {
            log::trace!("accepted {:?} after {} draws", game_move, draws);
            return game_move;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second
}

impl Seat {
    pub fn other(&self) -> Seat {
        match *self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conclusion {
    Win(Seat),
    Draw
}

impl Conclusion {
    /// How the game went for whoever sat in `seat`.
    pub fn outcome_for(&self, seat: Seat) -> Outcome {
        match *self {
            Conclusion::Win(winner) if winner == seat => Outcome::Win,
            Conclusion::Win(_) => Outcome::Loss,
            Conclusion::Draw => Outcome::Tie,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Tie
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match *self {
            Outcome::Win => "You win!",
            Outcome::Loss => "You lose!",
            Outcome::Tie => "You tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub trait GameState: fmt::Debug {
    type Move: Copy + fmt::Debug;

    fn is_legal(&self, game_move: Self::Move) -> bool;

    /// Apply a move. Panics if the move isn't legal; check with `is_legal` first.
    fn update(&mut self, game_move: Self::Move, player: Seat);

    /// A uniformly random move from the whole move space. It may well be illegal.
    fn sample_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Move;

    /// Called straight after `last_player` moved. Has to look for a win before a draw, since the
    /// winning move can also be the one that fills the board.
    fn try_conclude(&self, last_player: Seat) -> Option<Conclusion>;
}

pub struct Adjudicator<Game: GameState, PlayerOne: Player<Game>, PlayerTwo: Player<Game>> {
    current_turn: Seat,
    game_state: Game,
    player_one: PlayerOne,
    player_two: PlayerTwo,
    moves_played: usize,
    conclusion: Option<Conclusion>,
}

impl<Game: GameState, PlayerOne: Player<Game>, PlayerTwo: Player<Game>> Adjudicator<Game, PlayerOne, PlayerTwo> {
    pub fn new(game_state: Game, player_one: PlayerOne, player_two: PlayerTwo) -> Self {
        Self {
            current_turn: Seat::First,
            game_state,
            player_one,
            player_two,
            moves_played: 0,
            conclusion: None,
        }
    }

    /// Ask whoever's turn it is for a move, apply it, and check whether the game is over.
    ///
    /// Once the game has concluded this does nothing and keeps returning the conclusion.
    pub fn progress_one_turn(&mut self) -> Result<Option<Conclusion>, GameError> {
        if self.conclusion.is_some() {
            return Ok(self.conclusion);
        }

        let player = self.current_turn;
        let game_move = match player {
            Seat::First => self.player_one.choose_move(&self.game_state)?,
            Seat::Second => self.player_two.choose_move(&self.game_state)?,
        };
        self.game_state.update(game_move, player);
        self.moves_played += 1;

        log::debug!("{:?} played {:?}, new game state: {:?}", player, game_move, self.game_state);

        match self.game_state.try_conclude(player) {
            Some(conclusion) => {
                self.conclusion = Some(conclusion);
                log::info!("got conclusion after {} moves: {:?}", self.moves_played, conclusion);
            },
            None => {
                self.player_one.inform_of_move_played(&self.game_state, game_move, player)?;
                self.player_two.inform_of_move_played(&self.game_state, game_move, player)?;
                self.current_turn = player.other();
            },
        }

        Ok(self.conclusion)
    }

    pub fn play_out(&mut self) -> Result<Conclusion, GameError> {
        loop {
            if let Some(conclusion) = self.progress_one_turn()? {
                return Ok(conclusion);
            }
        }
    }

    pub fn conclusion(&self) -> Option<Conclusion> {
        self.conclusion
    }

    pub fn current_turn(&self) -> Seat {
        self.current_turn
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn game_state(&self) -> &Game {
        &self.game_state
    }

    pub fn into_game_state(self) -> Game {
        self.game_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_alternate() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
        assert_eq!(Seat::First.other().other(), Seat::First);
    }

    #[test]
    fn conclusion_is_seen_from_each_side() {
        let conclusion = Conclusion::Win(Seat::Second);
        assert_eq!(conclusion.outcome_for(Seat::Second), Outcome::Win);
        assert_eq!(conclusion.outcome_for(Seat::First), Outcome::Loss);
        assert_eq!(Conclusion::Draw.outcome_for(Seat::First), Outcome::Tie);
        assert_eq!(Conclusion::Draw.outcome_for(Seat::Second), Outcome::Tie);
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(Outcome::Win.to_string(), "You win!");
        assert_eq!(Outcome::Loss.to_string(), "You lose!");
        assert_eq!(Outcome::Tie.to_string(), "You tie!");
    }

    /// Count up to a target; whoever reaches it wins. Moves are how much to add.
    #[derive(Debug)]
    struct CountTo {
        total: u8,
        target: u8,
    }

    impl GameState for CountTo {
        type Move = u8;

        fn is_legal(&self, game_move: u8) -> bool {
            (1..=2).contains(&game_move) && self.total + game_move <= self.target
        }

        fn update(&mut self, game_move: u8, _player: Seat) {
            assert!(self.is_legal(game_move), "Move not legal");
            self.total += game_move;
        }

        fn sample_move<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
            rng.random_range(0..4)
        }

        fn try_conclude(&self, last_player: Seat) -> Option<Conclusion> {
            if self.total == self.target {
                Some(Conclusion::Win(last_player))
            } else {
                None
            }
        }
    }

    struct AlwaysOne;

    impl Player<CountTo> for AlwaysOne {
        fn choose_move(&mut self, _game: &CountTo) -> Result<u8, GameError> {
            Ok(1)
        }
    }

    #[test]
    fn adjudicator_alternates_and_stops_at_conclusion() {
        let mut adjudicator = Adjudicator::new(CountTo { total: 0, target: 3 }, AlwaysOne, AlwaysOne);
        assert_eq!(adjudicator.current_turn(), Seat::First);
        assert_eq!(adjudicator.progress_one_turn().unwrap(), None);
        assert_eq!(adjudicator.current_turn(), Seat::Second);
        assert_eq!(adjudicator.progress_one_turn().unwrap(), None);
        assert_eq!(adjudicator.progress_one_turn().unwrap(), Some(Conclusion::Win(Seat::First)));

        // Concluded games don't move any more.
        assert_eq!(adjudicator.progress_one_turn().unwrap(), Some(Conclusion::Win(Seat::First)));
        assert_eq!(adjudicator.moves_played(), 3);
        assert_eq!(adjudicator.game_state().total, 3);
    }

    #[test]
    fn random_legal_move_only_returns_legal_moves() {
        use rand::rngs::SmallRng;
        use rand::SeedableRng;

        let mut rng = SmallRng::seed_from_u64(7);
        let game = CountTo { total: 4, target: 5 };
        for _ in 0..200 {
            assert_eq!(random_legal_move(&game, &mut rng), 1);
        }
    }
}
