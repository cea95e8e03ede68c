//! Standard Algebraic Notation.

use cozy_chess::Board;

use crate::types::*;

/// Renders SAN for `raw`, a legal move in `board`.
///
/// `siblings` is the full legal move list of `board`; it drives
/// disambiguation when two pieces of the same kind can reach one square.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_san(
    board: &Board,
    raw: cozy_chess::Move,
    piece: PieceKind,
    castle_kingside: Option<bool>,
    is_capture: bool,
    check: bool,
    mate: bool,
    siblings: &[cozy_chess::Move],
) -> String {
    let from = raw.from as u8;
    let to = raw.to as u8;
    let mut san = String::new();

    match castle_kingside {
        Some(true) => san.push_str("O-O"),
        Some(false) => san.push_str("O-O-O"),
        None => {
            match piece.san_letter() {
                Some(letter) => {
                    san.push(letter);
                    san.push_str(&disambiguation(board, raw, siblings));
                }
                None if is_capture => san.push((b'a' + (from % 8)) as char),
                None => {}
            }
            if is_capture {
                san.push('x');
            }
            san.push_str(&sq_to_coord(to));
            if let Some(promo) = raw.promotion.map(PieceKind::from_cozy).and_then(PieceKind::san_letter) {
                san.push('=');
                san.push(promo);
            }
        }
    }

    if mate {
        san.push('#');
    } else if check {
        san.push('+');
    }
    san
}

fn disambiguation(board: &Board, raw: cozy_chess::Move, siblings: &[cozy_chess::Move]) -> String {
    let piece = board.piece_on(raw.from);
    let rivals: Vec<u8> = siblings
        .iter()
        .filter(|m| m.to == raw.to && m.from != raw.from && board.piece_on(m.from) == piece)
        .map(|m| m.from as u8)
        .collect();
    if rivals.is_empty() {
        return String::new();
    }

    let from = raw.from as u8;
    let coord = sq_to_coord(from);
    if rivals.iter().all(|&r| file_of(r) != file_of(from)) {
        coord[0..1].to_string()
    } else if rivals.iter().all(|&r| rank_of(r) != rank_of(from)) {
        coord[1..2].to_string()
    } else {
        coord
    }
}
