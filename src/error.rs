use thiserror::Error;

use crate::types::Cell;

/// Reasons a requested move is rejected. The session is left unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    /// One of the cells lies outside the 8x8 grid
    #[error("cell {0} is off the board")]
    OutOfBounds(Cell),

    /// The origin holds a piece of the side not on move
    #[error("it is not this piece's turn")]
    WrongTurn,

    /// A chained jump is pending and the move is not a jump from the landing cell
    #[error("the piece at {0} must continue jumping")]
    ForcedJumpViolation(Cell),

    /// A capture is available somewhere and the move is not a jump
    #[error("a capture is available and must be taken")]
    MustCaptureViolation,

    /// The displacement is not a step or jump this piece may make
    #[error("this piece cannot move that way")]
    ShapeMismatch,

    /// The destination already holds a piece
    #[error("destination is occupied")]
    DestinationOccupied,

    /// There is no piece on the origin cell
    #[error("no piece at the selected cell")]
    NoPieceAtOrigin,

    /// A jump whose midpoint holds no opponent piece
    #[error("there is no opposing piece to capture")]
    NoCaptureTarget,

    /// The session has finished; reset before playing again
    #[error("game is already over")]
    GameOver,
}
