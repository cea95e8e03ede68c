use cozy_chess::{Board, Square};

use crate::error::RulesError;
use crate::types::*;

/// A chess position plus the key history needed for repetition detection.
///
/// The history holds the Zobrist key of every position since the last
/// irreversible move (capture or pawn move), the current one last.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    history: Vec<u64>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let board = Board::from_fen(fen.trim(), false).map_err(|e| RulesError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e:?}"),
        })?;
        Ok(Self::from_board(board))
    }

    pub(crate) fn from_board(board: Board) -> Self {
        let key = board.hash();
        Self {
            board,
            history: vec![key],
        }
    }

    /// Position reached by playing a move that produced `board`.
    pub(crate) fn successor(&self, board: Board) -> Self {
        let mut history = if board.halfmove_clock() == 0 {
            Vec::with_capacity(8)
        } else {
            self.history.clone()
        };
        history.push(board.hash());
        Self { board, history }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fen(&self) -> String {
        format!("{}", self.board)
    }

    pub fn side_to_move(&self) -> Color {
        Color::from_cozy(self.board.side_to_move())
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        if sq >= 64 {
            return None;
        }
        let square = Square::index(sq as usize);
        let kind = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some(Piece {
            color: Color::from_cozy(color),
            kind: PieceKind::from_cozy(kind),
        })
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.board.halfmove_clock() as u32
    }

    pub fn fullmove_number(&self) -> u32 {
        self.board.fullmove_number() as u32
    }

    /// Zobrist key over pieces, side to move, castling and en passant.
    /// Move counters are not part of it.
    pub fn position_hash(&self) -> u64 {
        self.board.hash()
    }

    /// How many times the current position has occurred, this one included.
    pub fn repetition_count(&self) -> usize {
        let key = self.position_hash();
        self.history.iter().filter(|&&k| k == key).count()
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock() >= 100
    }

    /// Neither side can possibly mate: bare kings, a single minor piece, or
    /// only bishops that all stand on one square color.
    pub fn is_insufficient_material(&self) -> bool {
        let kings = self.board.pieces(cozy_chess::Piece::King);
        let others = self.board.occupied() ^ kings;
        if others.is_empty() {
            return true;
        }

        let knights = self.board.pieces(cozy_chess::Piece::Knight);
        let bishops = self.board.pieces(cozy_chess::Piece::Bishop);
        if others.len() == 1 && (others == knights || others == bishops) {
            return true;
        }

        if others == bishops {
            let mut shades = bishops.into_iter().map(|s| {
                let idx = s as usize;
                (idx % 8 + idx / 8) % 2
            });
            if let Some(first) = shades.next() {
                return shades.all(|shade| shade == first);
            }
        }
        false
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
