//! Draw and terminal-state detection through the public rules API.

use chess_core::{Color, GameLedger, GameStatus, PieceKind, Position, RulesEngine, StandardRules};

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    let rules = StandardRules;
    let p = pos("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");

    assert!(rules.legal_moves(&p, None).is_empty());
    assert!(!rules.is_check(&p));
    assert!(rules.is_stalemate(&p));
    assert!(rules.is_draw(&p));
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let ledger = GameLedger::from_fen("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(ledger.status(), GameStatus::Stalemate);
    assert_eq!(ledger.pgn(), "1/2-1/2");
}

// =============================================================================
// Fifty-move rule
// =============================================================================

#[test]
fn test_fifty_move_rule_threshold() {
    assert!(pos("8/8/8/4k3/8/4K3/8/8 w - - 100 60").is_fifty_move_draw());
    assert!(!pos("8/8/8/4k3/8/4K3/8/8 w - - 99 60").is_fifty_move_draw());
}

#[test]
fn test_fifty_move_clock_reset_on_pawn_move() {
    let rules = StandardRules;
    let p = pos("8/8/8/4k3/8/3K4/4P3/4R3 w - - 99 60");
    let pawn_move = rules
        .legal_moves(&p, None)
        .into_iter()
        .find(|m| m.piece == PieceKind::Pawn)
        .unwrap();

    let after = rules.apply_move(&p, &pawn_move).unwrap();
    assert_eq!(after.halfmove_clock(), 0);
    assert!(!after.is_fifty_move_draw());
}

#[test]
fn test_fifty_move_rule_reached_by_quiet_move() {
    let mut ledger = GameLedger::from_fen("8/8/8/4k3/8/3K4/8/4R3 w - - 99 60").unwrap();
    ledger.make_coord_move("e1h1").unwrap();
    assert_eq!(ledger.status(), GameStatus::FiftyMoveRule);
}

// =============================================================================
// Insufficient material
// =============================================================================

#[test]
fn test_insufficient_material_cases() {
    for fen in [
        "8/8/8/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KB2/8/8 w - - 0 1",
        "8/8/8/4k3/8/4KN2/8/8 w - - 0 1",
        "8/8/4b3/4k3/8/4K3/8/8 w - - 0 1",
        "8/8/4n3/4k3/8/4K3/8/8 w - - 0 1",
        // c1 and f8 share a shade
        "5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1",
    ] {
        assert!(pos(fen).is_insufficient_material(), "{fen}");
    }
}

#[test]
fn test_sufficient_material_cases() {
    for fen in [
        // opposite-shade bishops
        "2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1",
        "8/8/8/4k3/8/4K3/4P3/8 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4R3 w - - 0 1",
        "8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1",
        "8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1",
    ] {
        assert!(!pos(fen).is_insufficient_material(), "{fen}");
    }
}

#[test]
fn test_capture_into_bare_kings_is_a_draw() {
    let mut ledger = GameLedger::from_fen("8/8/8/8/4n3/3K4/8/7k w - - 0 1").unwrap();
    let mv = ledger.make_coord_move("d3e4").unwrap();
    assert_eq!(mv.captured, Some(PieceKind::Knight));
    assert_eq!(ledger.status(), GameStatus::InsufficientMaterial);
}

// =============================================================================
// Repetition keys
// =============================================================================

#[test]
fn test_position_hash_ignores_move_counters() {
    let a = pos("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let b = pos("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 6 5");
    assert_eq!(a.position_hash(), b.position_hash());
}

#[test]
fn test_position_hash_tracks_side_and_castling() {
    let base = pos("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let black = pos("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
    let fewer_rights = pos("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1");
    assert_ne!(base.position_hash(), black.position_hash());
    assert_ne!(base.position_hash(), fewer_rights.position_hash());
}

#[test]
fn test_pawn_move_clears_repetition_history() {
    let mut ledger = GameLedger::new();
    for mv in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        ledger.make_coord_move(mv).unwrap();
    }
    assert_eq!(ledger.position().repetition_count(), 2);

    ledger.make_coord_move("e2e4").unwrap();
    assert_eq!(ledger.position().repetition_count(), 1);
}

// =============================================================================
// Check versus mate
// =============================================================================

#[test]
fn test_checkmate_is_not_stalemate() {
    let rules = StandardRules;
    let p = pos("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert!(rules.legal_moves(&p, None).is_empty());
    assert!(rules.is_checkmate(&p));
    assert!(!rules.is_draw(&p));

    let ledger = GameLedger::from_position(p);
    assert_eq!(ledger.status(), GameStatus::Checkmate { winner: Color::White });
}

#[test]
fn test_check_is_not_checkmate() {
    let rules = StandardRules;
    let p = pos("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");
    assert!(!rules.legal_moves(&p, None).is_empty());
    assert!(rules.is_check(&p));
    assert!(!rules.is_checkmate(&p));
}
