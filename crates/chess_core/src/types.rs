use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    pub(crate) fn from_cozy(color: cozy_chess::Color) -> Self {
        match color {
            cozy_chess::Color::White => Color::White,
            cozy_chess::Color::Black => Color::Black,
        }
    }

    pub(crate) fn to_cozy(self) -> cozy_chess::Color {
        match self {
            Color::White => cozy_chess::Color::White,
            Color::Black => cozy_chess::Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

impl FromStr for Color {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Color::White),
            "b" | "black" => Ok(Color::Black),
            _ => Err(RulesError::InvalidColor(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Upper-case letter used in SAN; pawns have none.
    pub fn san_letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }

    /// Parses a promotion letter in either case (`q`, `R`, ...).
    pub fn from_promo_char(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            _ => None,
        }
    }

    pub(crate) fn from_cozy(piece: cozy_chess::Piece) -> Self {
        match piece {
            cozy_chess::Piece::Pawn => PieceKind::Pawn,
            cozy_chess::Piece::Knight => PieceKind::Knight,
            cozy_chess::Piece::Bishop => PieceKind::Bishop,
            cozy_chess::Piece::Rook => PieceKind::Rook,
            cozy_chess::Piece::Queen => PieceKind::Queen,
            cozy_chess::Piece::King => PieceKind::King,
        }
    }

    pub(crate) fn to_cozy(self) -> cozy_chess::Piece {
        match self {
            PieceKind::Pawn => cozy_chess::Piece::Pawn,
            PieceKind::Knight => cozy_chess::Piece::Knight,
            PieceKind::Bishop => cozy_chess::Piece::Bishop,
            PieceKind::Rook => cozy_chess::Piece::Rook,
            PieceKind::Queen => cozy_chess::Piece::Queen,
            PieceKind::King => cozy_chess::Piece::King,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// Special-move markers supplied by the rules adapter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveFlags {
    pub castle_kingside: bool,
    pub castle_queenside: bool,
    pub en_passant: bool,
    pub double_push: bool,
}

impl MoveFlags {
    pub fn is_castle(&self) -> bool {
        self.castle_kingside || self.castle_queenside
    }
}

/// A legal move annotated by the rules adapter.
///
/// Castling is expressed as the king's own step (`e1g1`), en passant as the
/// pawn's diagonal step. `captured`, `flags` and `san` are read-only hints
/// for evaluation and display.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    pub promo: Option<PieceKind>,
    pub piece: PieceKind,
    pub color: Color,
    pub captured: Option<PieceKind>,
    pub flags: MoveFlags,
    pub san: String,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_castle(&self) -> bool {
        self.flags.is_castle()
    }

    pub fn is_en_passant(&self) -> bool {
        self.flags.en_passant
    }

    pub fn gives_check(&self) -> bool {
        self.san.ends_with('+') || self.gives_mate()
    }

    pub fn gives_mate(&self) -> bool {
        self.san.ends_with('#')
    }

    /// True when origin, destination and promotion all match.
    pub fn matches(&self, from: u8, to: u8, promo: Option<PieceKind>) -> bool {
        self.from == from && self.to == to && self.promo == promo
    }

    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    pub fn uci(&self) -> String {
        let mut s = format!("{}{}", sq_to_coord(self.from), sq_to_coord(self.to));
        if let Some(p) = self.promo {
            s.push(match p {
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                PieceKind::Rook => 'r',
                _ => 'q',
            });
        }
        s
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.san)
    }
}

// Helpers
pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn rank_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank as u8) * 8 + (file as u8))
    } else {
        None
    }
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let file = f - b'a';
    let rank = r - b'1';
    Some(rank * 8 + file)
}

/// Splits coordinate text (`e2e4`, `e7e8q`) into origin, destination and
/// promotion piece.
pub fn parse_coord_move(text: &str) -> Result<(u8, u8, Option<PieceKind>), RulesError> {
    let text = text.trim();
    if !(4..=5).contains(&text.len()) || !text.is_ascii() {
        return Err(RulesError::InvalidMoveText(text.to_string()));
    }
    let from = coord_to_sq(&text[0..2]).ok_or_else(|| RulesError::InvalidSquare(text[0..2].to_string()))?;
    let to = coord_to_sq(&text[2..4]).ok_or_else(|| RulesError::InvalidSquare(text[2..4].to_string()))?;
    let promo = match text[4..].chars().next() {
        Some(ch) => Some(PieceKind::from_promo_char(ch).ok_or_else(|| RulesError::InvalidMoveText(text.to_string()))?),
        None => None,
    };
    Ok((from, to, promo))
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
