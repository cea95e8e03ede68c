use super::*;

fn quiet(num_games: u32, max_moves: u32) -> MatchRunner {
    MatchRunner::new(MatchConfig {
        num_games,
        max_moves,
        verbose: false,
        ..Default::default()
    })
}

#[test]
fn test_match_completes_every_game() {
    let report = quiet(4, 40).run_match(Tier::Medium, Tier::Easy);
    assert_eq!(report.result.total_games(), 4);
    assert_eq!(report.games.len(), 4);
    for game in &report.games {
        assert!(game.plies <= 40);
        assert!(!game.pgn.is_empty());
    }
}

#[test]
fn test_colors_alternate() {
    let report = quiet(2, 10).run_match(Tier::Easy, Tier::Medium);
    assert_eq!((report.games[0].white, report.games[0].black), (Tier::Easy, Tier::Medium));
    assert_eq!((report.games[1].white, report.games[1].black), (Tier::Medium, Tier::Easy));
}

#[test]
fn test_move_limit_is_a_draw() {
    let game = quiet(1, 6).play_game(Tier::Easy, Tier::Easy, 3);
    assert_eq!(game.plies, 6);
    assert_eq!(game.termination, Termination::MoveLimit);
    assert_eq!(game.result, GameResult::Draw);
}

#[test]
fn test_games_replay_from_seed() {
    let runner = quiet(1, 30);
    let a = runner.play_game(Tier::Easy, Tier::Medium, 17);
    let b = runner.play_game(Tier::Easy, Tier::Medium, 17);
    assert_eq!(a, b);
}

#[test]
fn test_quick_match() {
    let report = quick_match(Tier::Medium, Tier::Medium, 2, 20);
    assert_eq!(report.result.total_games(), 2);
    assert_eq!(report.tier1, Tier::Medium);
}
