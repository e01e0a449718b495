use std::fmt;
use std::ops::Deref;

use game::Seat;
use ndarray::prelude::*;

pub const BOARD_SIZE: usize = 3;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn other(&self) -> Symbol {
        match *self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Read the symbol a human asked for. Only "O" (either case) picks noughts; anything else,
    /// including a blank line, is X.
    pub fn from_choice(input: &str) -> Symbol {
        match input.trim() {
            "O" | "o" => Symbol::O,
            _ => Symbol::X,
        }
    }

    /// X always moves first.
    pub fn seat(&self) -> Seat {
        match *self {
            Symbol::X => Seat::First,
            Symbol::O => Seat::Second,
        }
    }
}

impl From<Seat> for Symbol {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::First => Symbol::X,
            Seat::Second => Symbol::O,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Symbol::X => "X",
            Symbol::O => "O",
        })
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Cell(Option<Symbol>);

impl Cell {
    pub const EMPTY: Cell = Cell(None);
}

impl From<Option<Symbol>> for Cell {
    fn from(t: Option<Symbol>) -> Self {
        Cell(t)
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        Cell(Some(symbol))
    }
}

impl Deref for Cell {
    type Target = Option<Symbol>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(symbol) => write!(f, "{}", symbol),
            None => f.write_str(" "),
        }
    }
}

/// A square grid of cells. Cells only ever go from empty to taken.
#[derive(Clone, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array::from_elem((size, size), Cell::EMPTY),
        }
    }

    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.size() && column < self.size()
    }

    /// Panics if the coordinates are off the board.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[[row, column]]
    }

    /// Panics if the coordinates are off the board or the cell is already taken. Validate the
    /// move first.
    pub fn set(&mut self, row: usize, column: usize, symbol: Symbol) {
        let cell = &mut self.cells[[row, column]];
        assert!(cell.is_none(), "Cell ({}, {}) already holds {}", row, column, cell);
        *cell = symbol.into();
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_none())
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|x| **x == cell).count()
    }

    pub(crate) fn cells(&self) -> ArrayView2<Cell> {
        self.cells.view()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BOARD_SIZE)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Board {{\n{}\n}}", self.cells)
    }
}

/// One-based column numbers across the top, one-based row numbers down the side, cells split by
/// `|` and rows by a line of dashes as wide as a row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let size = self.size();
        f.write_str("  ")?;
        for column in 0..size {
            write!(f, " {}", column + 1)?;
        }
        writeln!(f)?;

        for (i, row) in self.cells.outer_iter().enumerate() {
            if i > 0 {
                write!(f, "\n  {}\n", "-".repeat(2 * size + 1))?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j == 0 {
                    write!(f, " {} {}", i + 1, cell)?;
                } else {
                    write!(f, "|{}", cell)?;
                }
            }
        }
        Ok(())
    }
}
