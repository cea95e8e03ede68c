//! Static position evaluation from the engine side's point of view.

use chess_core::{Color, PieceKind, Position, RulesEngine};

use crate::Score;

/// d4, d5, e4, e5.
pub const CENTER_SQUARES: [u8; 4] = [27, 35, 28, 36];

const MOBILITY_WEIGHT: Score = 0.1;
const CENTER_BONUS: Score = 5.0;
const CHECK_BONUS: Score = 50.0;

/// Material value, indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [Score; 6] = [10.0, 30.0, 30.0, 50.0, 90.0, 0.0];

pub fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUES[kind.idx()]
}

/// Scores `pos` for `engine_side`.
///
/// Sum of four terms, unnormalized:
/// - material, + for engine pieces and - for opponent pieces
/// - +5 per engine piece on a center square
/// - legal-move count of the side to move times 0.1, signed by whose turn it is
/// - +50 when the opponent is to move and in check
pub fn evaluate<R: RulesEngine + ?Sized>(rules: &R, pos: &Position, engine_side: Color) -> Score {
    let mut score = 0.0;

    for sq in 0..64u8 {
        if let Some(piece) = rules.piece_at(pos, sq) {
            let value = piece_value(piece.kind);
            if piece.color == engine_side {
                score += value;
            } else {
                score -= value;
            }
        }
    }

    for sq in CENTER_SQUARES {
        if rules.piece_at(pos, sq).is_some_and(|p| p.color == engine_side) {
            score += CENTER_BONUS;
        }
    }

    let to_move = rules.side_to_move(pos);
    let mobility = rules.legal_move_count(pos) as Score * MOBILITY_WEIGHT;
    if to_move == engine_side {
        score += mobility;
    } else {
        score -= mobility;
    }

    if to_move != engine_side && rules.is_check(pos) {
        score += CHECK_BONUS;
    }

    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
