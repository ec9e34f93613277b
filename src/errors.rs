use thiserror::Error;

use crate::board::Color;

/// Errors raised at the engine boundary.
///
/// Illegal move attempts are deliberately not represented here: rejecting a
/// move is a normal outcome (the caller gets the original board back), while
/// these variants signal caller bugs or a malformed board.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ChessError {
    #[error("file {0} is out of range (expected 1-8)")]
    InvalidFile(u8),

    #[error("rank {0} is out of range (expected 1-8)")]
    InvalidRank(u8),

    #[error("unrecognized file letter '{0}' (expected a-h)")]
    InvalidFileLetter(char),

    /// The board has no king of the given color. Boards reachable from the
    /// starting layout always carry both kings, so this indicates a bug in
    /// whatever constructed the position.
    #[error("no {0} king on the board")]
    MissingKing(Color),
}
