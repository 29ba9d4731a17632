//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight fixed three-in-a-row lines.
///
/// Declaration order is the detection order: rows top to bottom,
/// columns left to right, then the two diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum WinLine {
    /// Row 0-1-2.
    #[display("top row")]
    TopRow,
    /// Row 3-4-5.
    #[display("middle row")]
    MiddleRow,
    /// Row 6-7-8.
    #[display("bottom row")]
    BottomRow,
    /// Column 0-3-6.
    #[display("left column")]
    LeftColumn,
    /// Column 1-4-7.
    #[display("center column")]
    CenterColumn,
    /// Column 2-5-8.
    #[display("right column")]
    RightColumn,
    /// Diagonal 0-4-8.
    #[display("main diagonal")]
    MainDiagonal,
    /// Diagonal 2-4-6.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl WinLine {
    /// All lines in detection order.
    pub const ALL: [WinLine; 8] = [
        WinLine::TopRow,
        WinLine::MiddleRow,
        WinLine::BottomRow,
        WinLine::LeftColumn,
        WinLine::CenterColumn,
        WinLine::RightColumn,
        WinLine::MainDiagonal,
        WinLine::AntiDiagonal,
    ];

    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            WinLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinLine::CenterColumn => [TopCenter, Center, BottomCenter],
            WinLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinLine::MainDiagonal => [TopLeft, Center, BottomRight],
            WinLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The line as board indices, for highlighting.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

/// Finds the first completed line, in detection order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, WinLine)> {
    WinLine::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Returns true if placing `mark` at `pos` would complete a line for `mark`.
pub fn completes_line(board: &Board, pos: Position, mark: Mark) -> bool {
    let board = board.with_mark(pos, mark);
    WinLine::ALL
        .into_iter()
        .filter(|line| line.contains(pos))
        .any(|line| line.positions().iter().all(|p| board.get(*p) == Square::Occupied(mark)))
}
