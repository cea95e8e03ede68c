use chess_core::{PieceKind, StandardRules};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::MATE_SCORE;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

fn find(p: &Position, uci: &str) -> Move {
    StandardRules
        .legal_moves(p, None)
        .into_iter()
        .find(|m| m.uci() == uci)
        .unwrap()
}

#[test]
fn test_declines_when_not_engine_turn() {
    let selector = Selector::new(&StandardRules, Tier::Medium, Color::Black);
    let mut rng = StdRng::seed_from_u64(1);
    let result = selector.choose(&Position::startpos(), &mut rng);
    assert_eq!(result.unwrap_err(), Declined::NotEngineTurn);
}

#[test]
fn test_declines_in_terminal_positions() {
    let mut rng = StdRng::seed_from_u64(1);
    for fen in [
        "k7/8/1K6/4Q3/8/8/8/8 b - - 0 1",
        "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
        "8/8/8/4k3/8/4K3/8/8 b - - 0 1",
    ] {
        for tier in Tier::ALL {
            let selector = Selector::new(&StandardRules, tier, Color::Black);
            assert_eq!(selector.choose(&pos(fen), &mut rng).unwrap_err(), Declined::GameOver, "{fen}");
        }
    }
}

#[test]
fn test_quick_score_bonuses() {
    let p = pos("r3k3/1P6/8/8/8/8/8/R3K2R w KQq - 0 1");
    // bxa8=Q captures a rook and promotes.
    assert_eq!(quick_score(&find(&p, "b7a8q")), 500.0 + 50.0 + 10.0);
    assert_eq!(quick_score(&find(&p, "e1g1")), 30.0);
    assert_eq!(quick_score(&find(&p, "h1h2")), 0.0);

    let p = pos("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    assert_eq!(quick_score(&find(&p, "e1e8")), 100.0);
}

#[test]
fn test_medium_takes_free_queen() {
    let p = pos("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let selector = Selector::new(&StandardRules, Tier::Medium, Color::White);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selection = selector.choose(&p, &mut rng).unwrap();
        assert_eq!(selection.mv.uci(), "e4d5");
        assert_eq!(selection.mv.captured, Some(PieceKind::Queen));
        assert!(!selection.blundered);
    }
}

#[test]
fn test_hard_is_deterministic_and_finds_mate() {
    let p = pos("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    let selector = Selector::new(&StandardRules, Tier::Hard, Color::White);
    let picks: Vec<Selection> = [3, 99]
        .into_iter()
        .map(|seed| selector.choose(&p, &mut StdRng::seed_from_u64(seed)).unwrap())
        .collect();

    for selection in &picks {
        assert_eq!(selection.mv.san, "Qe8#");
        assert_eq!(selection.score, MATE_SCORE);
        assert!(selection.nodes > 0);
    }
}

#[test]
fn test_hard_prefers_immediate_mate_over_slower_one() {
    for (fen, mate) in [
        ("6k1/8/6K1/8/8/8/8/R7 w - - 0 1", "Ra8#"),
        ("k7/8/1K6/8/8/8/8/7R w - - 0 1", "Rh8#"),
        ("7k/5K2/8/8/8/8/8/1R4R1 w - - 0 1", "Rh1#"),
    ] {
        let selector = Selector::new(&StandardRules, Tier::Hard, Color::White);
        let selection = selector.choose(&pos(fen), &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(selection.mv.san, mate, "{fen}");
        assert_eq!(selection.score, MATE_SCORE);
    }
}

#[test]
fn test_easy_sometimes_blunders() {
    let p = pos("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let selector = Selector::new(&StandardRules, Tier::Easy, Color::White);
    let mut rng = StdRng::seed_from_u64(7);
    let blunders = (0..200)
        .filter(|_| selector.choose(&p, &mut rng).unwrap().blundered)
        .count();
    assert!(blunders > 20 && blunders < 120, "{blunders} blunders");
}

#[test]
fn test_selected_move_is_always_legal() {
    let p = pos("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let legal = StandardRules.legal_moves(&p, None);
    let mut rng = StdRng::seed_from_u64(11);
    for tier in [Tier::Easy, Tier::Medium] {
        let selector = Selector::new(&StandardRules, tier, Color::White);
        for _ in 0..50 {
            let selection = selector.choose(&p, &mut rng).unwrap();
            assert!(legal.contains(&selection.mv));
            assert_eq!(selection.candidates, legal.len());
        }
    }
}
