use std::fmt;

use game::{Conclusion, GameState, Seat};
use rand::Rng;

pub mod board;
pub mod rules;

pub use board::{Board, Cell, Symbol, BOARD_SIZE};
pub use rules::{has_empty_cell, symbol_has_won};

/// Zero-based coordinates.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    pub fn new(row: usize, column: usize) -> Move {
        Move { row, column }
    }
}

/// Why a move typed in by a human was turned down. Coordinates are as typed, so one-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{0:?} is not a whole number")]
    NotAnInteger(String),
    #[error("row {row}, column {column} is off the board")]
    OutOfRange { row: i64, column: i64 },
    #[error("row {row}, column {column} is already taken")]
    Occupied { row: i64, column: i64 },
}

fn parse_coordinate(text: &str) -> Result<i64, MoveError> {
    text.trim()
        .parse()
        .map_err(|_| MoveError::NotAnInteger(text.trim().to_string()))
}

#[derive(Clone, PartialEq)]
pub struct TicTacToe {
    board: Board,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::with_board(Board::default())
    }

    pub fn with_board(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Turn a one-based row and column, as typed, into a move that can be played right now.
    /// Never touches the board.
    pub fn parse_move(&self, row: &str, column: &str) -> Result<Move, MoveError> {
        let row = parse_coordinate(row)?;
        let column = parse_coordinate(column)?;

        let size = self.board.size() as i64;
        if !(1..=size).contains(&row) || !(1..=size).contains(&column) {
            return Err(MoveError::OutOfRange { row, column });
        }

        let game_move = Move::new((row - 1) as usize, (column - 1) as usize);
        if self.board.get(game_move.row, game_move.column).is_some() {
            return Err(MoveError::Occupied { row, column });
        }

        Ok(game_move)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TicTacToe {{\n{}\n}}", self.board)
    }
}

impl GameState for TicTacToe {
    type Move = Move;

    fn is_legal(&self, game_move: Move) -> bool {
        self.board.contains(game_move.row, game_move.column)
            && self.board.get(game_move.row, game_move.column).is_none()
    }

    fn update(&mut self, game_move: Move, player: Seat) {
        assert!(self.is_legal(game_move), "Move not legal: {:?}", game_move);
        self.board.set(game_move.row, game_move.column, Symbol::from(player));
    }

    fn sample_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        let size = self.board.size();
        Move::new(rng.random_range(0..size), rng.random_range(0..size))
    }

    fn try_conclude(&self, last_player: Seat) -> Option<Conclusion> {
        if symbol_has_won(&self.board, Symbol::from(last_player)) {
            return Some(Conclusion::Win(last_player));
        }

        // Otherwise, if nobody can move, draw
        if !has_empty_cell(&self.board) {
            return Some(Conclusion::Draw);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut TicTacToe, moves: &[(usize, usize)]) {
        let mut player = Seat::First;
        for &(row, column) in moves {
            game.update(Move::new(row, column), player);
            player = player.other();
        }
    }

    #[test]
    fn parses_one_based_coordinates() {
        let game = TicTacToe::new();
        assert_eq!(game.parse_move("1", "1"), Ok(Move::new(0, 0)));
        assert_eq!(game.parse_move("3", "2"), Ok(Move::new(2, 1)));
        assert_eq!(game.parse_move(" 2 \n", "3\n"), Ok(Move::new(1, 2)));
    }

    #[test]
    fn rejects_non_integers() {
        let game = TicTacToe::new();
        assert_eq!(game.parse_move("one", "1"), Err(MoveError::NotAnInteger("one".to_string())));
        assert_eq!(game.parse_move("1", ""), Err(MoveError::NotAnInteger(String::new())));
        assert_eq!(game.parse_move("1.5", "1"), Err(MoveError::NotAnInteger("1.5".to_string())));
    }

    #[test]
    fn rejects_off_the_board() {
        let game = TicTacToe::new();
        assert_eq!(game.parse_move("10", "1"), Err(MoveError::OutOfRange { row: 10, column: 1 }));
        assert_eq!(game.parse_move("0", "1"), Err(MoveError::OutOfRange { row: 0, column: 1 }));
        assert_eq!(game.parse_move("1", "4"), Err(MoveError::OutOfRange { row: 1, column: 4 }));
        assert_eq!(game.parse_move("-1", "2"), Err(MoveError::OutOfRange { row: -1, column: 2 }));
        assert_eq!(game.board(), &Board::default());
    }

    #[test]
    fn rejects_taken_cells_without_changing_them() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(1, 1)]);
        let before = game.clone();
        assert_eq!(game.parse_move("2", "2"), Err(MoveError::Occupied { row: 2, column: 2 }));
        assert_eq!(game, before);
    }

    #[test]
    fn legality() {
        let mut game = TicTacToe::new();
        assert!(game.is_legal(Move::new(0, 0)));
        assert!(game.is_legal(Move::new(2, 2)));
        assert!(!game.is_legal(Move::new(3, 0)));
        assert!(!game.is_legal(Move::new(0, 3)));
        play(&mut game, &[(0, 0)]);
        assert!(!game.is_legal(Move::new(0, 0)));
    }

    #[test]
    #[should_panic(expected = "Move not legal")]
    fn update_refuses_illegal_move() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, 0), (0, 0)]);
    }

    #[test]
    fn seats_play_their_symbols() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, 0), (2, 2)]);
        assert_eq!(game.board().get(0, 0), Cell::from(Symbol::X));
        assert_eq!(game.board().get(2, 2), Cell::from(Symbol::O));
    }

    #[test]
    fn game_goes_on_without_a_line() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, 0), (1, 1)]);
        assert_eq!(game.try_conclude(Seat::Second), None);
    }

    #[test]
    fn win_beats_tie_on_a_full_board() {
        // X O X
        // O X O
        // O X X  <- the ninth move completes the diagonal
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)]);
        assert!(!has_empty_cell(game.board()));
        assert_eq!(game.try_conclude(Seat::First), Some(Conclusion::Win(Seat::First)));
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        // X O X
        // X O O
        // O X X
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)]);
        assert_eq!(game.try_conclude(Seat::First), Some(Conclusion::Draw));
    }

    #[test]
    fn samples_stay_on_the_board() {
        use rand::rngs::SmallRng;
        use rand::SeedableRng;

        let game = TicTacToe::new();
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..500 {
            let game_move = game.sample_move(&mut rng);
            assert!(game_move.row < BOARD_SIZE && game_move.column < BOARD_SIZE);
        }
    }
}
