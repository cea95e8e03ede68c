//! The rules capability set the engine consumes, and its cozy-chess backed
//! implementation.

use cozy_chess::{Board, Square};

use crate::error::RulesError;
use crate::position::Position;
use crate::san::render_san;
use crate::types::*;

/// Everything the search needs to know about chess legality.
///
/// The engine never re-implements the rules: it asks which moves exist and
/// what position a move leads to.
pub trait RulesEngine: Send + Sync {
    /// Legal moves for the side to move, optionally only those leaving
    /// `origin`. Order is stable for a given position.
    fn legal_moves(&self, pos: &Position, origin: Option<u8>) -> Vec<Move>;

    fn legal_move_count(&self, pos: &Position) -> usize {
        self.legal_moves(pos, None).len()
    }

    /// Plays `mv` on a copy of `pos`. The input position is never touched.
    fn apply_move(&self, pos: &Position, mv: &Move) -> Result<Position, RulesError>;

    fn is_checkmate(&self, pos: &Position) -> bool;
    fn is_stalemate(&self, pos: &Position) -> bool;
    /// Stalemate, fifty-move rule, insufficient material or threefold
    /// repetition.
    fn is_draw(&self, pos: &Position) -> bool;
    fn is_check(&self, pos: &Position) -> bool;

    fn is_game_over(&self, pos: &Position) -> bool {
        self.is_checkmate(pos) || self.is_draw(pos)
    }

    fn side_to_move(&self, pos: &Position) -> Color {
        pos.side_to_move()
    }

    fn piece_at(&self, pos: &Position, sq: u8) -> Option<Piece> {
        pos.piece_at(sq)
    }
}

/// Standard chess rules, backed by cozy-chess move generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl StandardRules {
    pub fn new() -> Self {
        Self
    }
}

fn raw_moves(board: &Board) -> Vec<cozy_chess::Move> {
    let mut moves = Vec::with_capacity(64);
    board.generate_moves(|piece_moves| {
        moves.extend(piece_moves);
        false
    });
    moves
}

fn has_legal_moves(board: &Board) -> bool {
    board.generate_moves(|_| true)
}

/// Annotates a cozy-chess move with piece, capture, flags and SAN.
fn describe(board: &Board, raw: cozy_chess::Move, siblings: &[cozy_chess::Move]) -> Option<Move> {
    let stm = board.side_to_move();
    let piece = PieceKind::from_cozy(board.piece_on(raw.from)?);
    let from = raw.from as u8;
    let raw_to = raw.to as u8;

    // cozy-chess encodes castling as the king capturing its own rook.
    let castle_side = if piece == PieceKind::King && board.color_on(raw.to) == Some(stm) {
        Some(file_of(raw_to) > file_of(from))
    } else {
        None
    };

    let mut flags = MoveFlags::default();
    let (to, captured) = match castle_side {
        Some(kingside) => {
            flags.castle_kingside = kingside;
            flags.castle_queenside = !kingside;
            let file = if kingside { 6 } else { 2 };
            (sq(file, rank_of(from))?, None)
        }
        None => {
            let target = board.piece_on(raw.to).map(PieceKind::from_cozy);
            if piece == PieceKind::Pawn && target.is_none() && file_of(from) != file_of(raw_to) {
                flags.en_passant = true;
                (raw_to, Some(PieceKind::Pawn))
            } else {
                flags.double_push = piece == PieceKind::Pawn && (rank_of(raw_to) - rank_of(from)).abs() == 2;
                (raw_to, target)
            }
        }
    };

    let mut after = board.clone();
    after.play_unchecked(raw);
    let check = !after.checkers().is_empty();
    let mate = check && !has_legal_moves(&after);

    let san = render_san(board, raw, piece, castle_side, captured.is_some(), check, mate, siblings);

    Some(Move {
        from,
        to,
        promo: raw.promotion.map(PieceKind::from_cozy),
        piece,
        color: Color::from_cozy(stm),
        captured,
        flags,
        san,
    })
}

/// Converts an annotated move back to the cozy-chess encoding.
fn to_raw(board: &Board, mv: &Move) -> Option<cozy_chess::Move> {
    if mv.from >= 64 || mv.to >= 64 {
        return None;
    }
    let from = Square::index(mv.from as usize);
    let to = if mv.is_castle() {
        let rights = board.castle_rights(mv.color.to_cozy());
        let rook_file = if mv.flags.castle_kingside { rights.short } else { rights.long }?;
        Square::index(rank_of(mv.from) as usize * 8 + rook_file as usize)
    } else {
        Square::index(mv.to as usize)
    };
    Some(cozy_chess::Move {
        from,
        to,
        promotion: mv.promo.map(PieceKind::to_cozy),
    })
}

impl RulesEngine for StandardRules {
    fn legal_moves(&self, pos: &Position, origin: Option<u8>) -> Vec<Move> {
        let board = pos.board();
        let raw = raw_moves(board);
        raw.iter()
            .filter(|m| origin.is_none_or(|o| m.from as u8 == o))
            .filter_map(|&m| describe(board, m, &raw))
            .collect()
    }

    fn legal_move_count(&self, pos: &Position) -> usize {
        let mut count = 0;
        pos.board().generate_moves(|piece_moves| {
            count += piece_moves.len();
            false
        });
        count
    }

    fn apply_move(&self, pos: &Position, mv: &Move) -> Result<Position, RulesError> {
        let board = pos.board();
        let illegal = || RulesError::IllegalMove {
            uci: mv.uci(),
            fen: pos.fen(),
        };
        let raw = to_raw(board, mv).ok_or_else(illegal)?;
        if !board.is_legal(raw) {
            return Err(illegal());
        }
        let mut next = board.clone();
        next.play_unchecked(raw);
        Ok(pos.successor(next))
    }

    fn is_checkmate(&self, pos: &Position) -> bool {
        pos.in_check() && !has_legal_moves(pos.board())
    }

    fn is_stalemate(&self, pos: &Position) -> bool {
        !pos.in_check() && !has_legal_moves(pos.board())
    }

    fn is_draw(&self, pos: &Position) -> bool {
        self.is_stalemate(pos)
            || pos.is_fifty_move_draw()
            || pos.is_insufficient_material()
            || pos.is_threefold_repetition()
    }

    fn is_check(&self, pos: &Position) -> bool {
        pos.in_check()
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
