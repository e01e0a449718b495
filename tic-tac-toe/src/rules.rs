use ndarray::prelude::*;

use crate::board::{Board, Cell, Symbol};

fn line_is(line: ArrayView1<Cell>, target: Cell) -> bool {
    line.iter().all(|x| *x == target)
}

/// Does `symbol` own a whole row, column or diagonal?
pub fn symbol_has_won(board: &Board, symbol: Symbol) -> bool {
    let cells = board.cells();
    let target = Cell::from(symbol);

    // Any rows all match?
    if cells.axis_iter(Axis(0)).any(|row| line_is(row, target)) {
        return true;
    }
    // Any columns all match?
    if cells.axis_iter(Axis(1)).any(|column| line_is(column, target)) {
        return true;
    }
    // Diagonal matches?
    if line_is(cells.diag(), target) {
        return true;
    }
    // Anti-diagonal matches? Mirror the columns and take a look at the diag again.
    let mut view = cells;
    view.invert_axis(Axis(1));
    line_is(view.diag(), target)
}

/// Only means a tie once `symbol_has_won` has come back false for the player who just moved.
pub fn has_empty_cell(board: &Board) -> bool {
    board.has_empty_cell()
}
