use crate::board::{Board, Color, Piece, PieceKind, Square};
use crate::errors::ChessError;

/// A (from, to) pair. The en passant marker in effect when a move is
/// generated travels separately, owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardStatus {
    InPlay,
    Stalemate,
    WhiteWins,
    BlackWins,
}

/// Per-side check flags, for the front end's "in check" indicators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckStatus {
    pub white_in_check: bool,
    pub black_in_check: bool,
}

const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

// The origin must hold a piece of the expected kind; anything else yields an
// empty result rather than an error. Callers are expected to check occupancy
// first, but generators never crash on a mismatched or empty origin.
fn verified_piece(board: &Board, from: Square, kind: PieceKind) -> Option<Piece> {
    board.piece_at(from).filter(|piece| piece.kind == kind)
}

/// Pseudo-legal pawn destinations: a blocked single push, the double push
/// from the starting rank (both squares empty), diagonal captures, and the
/// en passant marker square when it lies diagonally forward-adjacent.
pub fn pawn_moves(board: &Board, from: Square, en_passant: Option<Square>) -> Vec<Square> {
    let Some(pawn) = verified_piece(board, from, PieceKind::Pawn) else {
        return Vec::new();
    };
    let (dir, start_rank) = match pawn.color {
        Color::White => (1, 2),
        Color::Black => (-1, 7),
    };
    let mut moves = Vec::new();

    if let Some(one) = from.offset(0, dir) {
        if board.piece_at(one).is_none() {
            moves.push(one);
            if from.rank() == start_rank {
                if let Some(two) = from.offset(0, 2 * dir) {
                    if board.piece_at(two).is_none() {
                        moves.push(two);
                    }
                }
            }
        }
    }

    // diagonal captures; the marker square counts as a capture destination
    // even though it is empty
    for d_file in [-1, 1] {
        let Some(diag) = from.offset(d_file, dir) else {
            continue;
        };
        match board.piece_at(diag) {
            Some(other) if other.color != pawn.color => moves.push(diag),
            None if en_passant == Some(diag) => moves.push(diag),
            _ => {}
        }
    }

    moves
}

pub fn knight_moves(board: &Board, from: Square) -> Vec<Square> {
    match verified_piece(board, from, PieceKind::Knight) {
        Some(knight) => step_moves(board, from, knight.color, &KNIGHT_OFFSETS),
        None => Vec::new(),
    }
}

pub fn bishop_moves(board: &Board, from: Square) -> Vec<Square> {
    match verified_piece(board, from, PieceKind::Bishop) {
        Some(bishop) => slider_moves(board, from, bishop.color, &DIAGONALS),
        None => Vec::new(),
    }
}

pub fn rook_moves(board: &Board, from: Square) -> Vec<Square> {
    match verified_piece(board, from, PieceKind::Rook) {
        Some(rook) => slider_moves(board, from, rook.color, &ORTHOGONALS),
        None => Vec::new(),
    }
}

/// A queen moves like a rook and a bishop; there is no independent logic.
pub fn queen_moves(board: &Board, from: Square) -> Vec<Square> {
    match verified_piece(board, from, PieceKind::Queen) {
        Some(queen) => {
            let mut moves = slider_moves(board, from, queen.color, &ORTHOGONALS);
            moves.extend(slider_moves(board, from, queen.color, &DIAGONALS));
            moves
        }
        None => Vec::new(),
    }
}

/// One step in each of the eight directions. Castling is not generated.
pub fn king_moves(board: &Board, from: Square) -> Vec<Square> {
    match verified_piece(board, from, PieceKind::King) {
        Some(king) => step_moves(board, from, king.color, &KING_OFFSETS),
        None => Vec::new(),
    }
}

// Fixed-offset pieces: a candidate square is a destination if it is on the
// board and not occupied by a friendly piece.
fn step_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(d_file, d_rank) in offsets {
        let Some(to) = from.offset(d_file, d_rank) else {
            continue;
        };
        match board.piece_at(to) {
            Some(other) if other.color == color => {}
            _ => moves.push(to),
        }
    }
    moves
}

// Sliding pieces: step outward per direction, adding empty squares, adding
// an enemy square and stopping, stopping short of a friendly piece.
fn slider_moves(board: &Board, from: Square, color: Color, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(d_file, d_rank) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_file, d_rank) {
            match board.piece_at(to) {
                None => moves.push(to),
                Some(other) => {
                    if other.color != color {
                        moves.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
    moves
}

/// Pseudo-legal destinations for whatever occupies the origin square; empty
/// when the origin is vacant.
pub fn piece_moves(board: &Board, from: Square, en_passant: Option<Square>) -> Vec<Square> {
    match board.piece_at(from) {
        None => Vec::new(),
        Some(piece) => match piece.kind {
            PieceKind::Pawn => pawn_moves(board, from, en_passant),
            PieceKind::Knight => knight_moves(board, from),
            PieceKind::Bishop => bishop_moves(board, from),
            PieceKind::Rook => rook_moves(board, from),
            PieceKind::Queen => queen_moves(board, from),
            PieceKind::King => king_moves(board, from),
        },
    }
}

/// Every pseudo-legal (from, to) pair for one side, origin squares in
/// row-major order.
pub fn pseudo_legal_moves(board: &Board, color: Color, en_passant: Option<Square>) -> Vec<Move> {
    let mut moves = Vec::new();
    for tile in board.tiles_of_color(color) {
        let from = tile.square();
        for to in piece_moves(board, from, en_passant) {
            moves.push(Move { from, to });
        }
    }
    moves
}

/// True when the king's square appears among the enemy's pseudo-legal
/// destinations. Pseudo-legal on purpose: requiring legality here would make
/// check detection depend on itself.
pub fn is_king_in_check(board: &Board, color: Color) -> Result<bool, ChessError> {
    let king = board.find_king(color)?;
    for tile in board.tiles_of_color(color.opposite()) {
        if piece_moves(board, tile.square(), None).contains(&king) {
            return Ok(true);
        }
    }
    Ok(false)
}

// Hypothetically apply the move on a scratch board and look for check.
fn leaves_king_in_check(
    board: &Board,
    from: Square,
    to: Square,
    color: Color,
    en_passant: Option<Square>,
) -> Result<bool, ChessError> {
    let (next, _) = board.apply_unchecked(from, to, en_passant);
    is_king_in_check(&next, color)
}

/// All moves for one side that do not leave that side's own king in check.
///
/// This is the most expensive operation in the crate: every candidate move
/// is applied to a scratch board and the full check scan runs against the
/// result. Fine at 8x8; anything bigger would want attack maps.
pub fn legal_moves(
    board: &Board,
    color: Color,
    en_passant: Option<Square>,
) -> Result<Vec<Move>, ChessError> {
    let mut moves = Vec::new();
    for mv in pseudo_legal_moves(board, color, en_passant) {
        if !leaves_king_in_check(board, mv.from, mv.to, color, en_passant)? {
            moves.push(mv);
        }
    }
    Ok(moves)
}

/// Legal destinations reachable from one origin square; what the front end
/// queries to highlight moves after a selection. Empty origin yields an
/// empty list.
pub fn legal_moves_from(
    board: &Board,
    from: Square,
    en_passant: Option<Square>,
) -> Result<Vec<Square>, ChessError> {
    let Some(piece) = board.piece_at(from) else {
        return Ok(Vec::new());
    };
    let mut moves = Vec::new();
    for to in piece_moves(board, from, en_passant) {
        if !leaves_king_in_check(board, from, to, piece.color, en_passant)? {
            moves.push(to);
        }
    }
    Ok(moves)
}

pub fn is_checkmate(
    board: &Board,
    color: Color,
    en_passant: Option<Square>,
) -> Result<bool, ChessError> {
    Ok(is_king_in_check(board, color)? && legal_moves(board, color, en_passant)?.is_empty())
}

pub fn is_stalemate(
    board: &Board,
    color: Color,
    en_passant: Option<Square>,
) -> Result<bool, ChessError> {
    Ok(!is_king_in_check(board, color)? && legal_moves(board, color, en_passant)?.is_empty())
}

/// Classify the game for the side to move. Turn tracking is caller state,
/// so the side to move comes in as a parameter.
pub fn board_status(
    board: &Board,
    to_move: Color,
    en_passant: Option<Square>,
) -> Result<BoardStatus, ChessError> {
    if !legal_moves(board, to_move, en_passant)?.is_empty() {
        return Ok(BoardStatus::InPlay);
    }
    if is_king_in_check(board, to_move)? {
        // mated: the other side wins
        Ok(match to_move {
            Color::White => BoardStatus::BlackWins,
            Color::Black => BoardStatus::WhiteWins,
        })
    } else {
        Ok(BoardStatus::Stalemate)
    }
}

pub fn check_status(board: &Board) -> Result<CheckStatus, ChessError> {
    Ok(CheckStatus {
        white_in_check: is_king_in_check(board, Color::White)?,
        black_in_check: is_king_in_check(board, Color::Black)?,
    })
}
