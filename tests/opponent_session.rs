use std::time::{Duration, Instant};

use variant_chess::engines::engine_greedy::GreedyEngine;
use variant_chess::game_state::chess_types::*;
use variant_chess::game_state::game_config::GameConfig;
use variant_chess::game_state::game_state::{GameState, MoveOutcome};
use variant_chess::session::game_session::GameSession;
use variant_chess::session::scheduler::ImmediateScheduler;

fn sq(name: &str) -> Position {
    let bytes = name.as_bytes();
    Position::new(8 - (bytes[1] - b'0') as i8, (bytes[0] - b'a') as i8)
}

#[test]
fn opponent_replies_to_each_human_move() {
    let mut session = GameSession::new(
        GameConfig::default().with_seed(5),
        Box::new(GreedyEngine::with_seed(5)),
        Box::new(ImmediateScheduler::new()),
    );

    for (from, to) in [("e2", "e4"), ("g1", "f3"), ("f1", "c4")] {
        if session.state().status().is_terminal() {
            break;
        }
        // The greedy reply may have changed the position; skip moves that
        // are no longer legal rather than failing the scenario.
        if session.play(sq(from), sq(to), None).is_err() {
            continue;
        }
        let before_reply = session.state().history().len();
        let replies = session.poll(Instant::now());
        assert!(replies.len() <= 1);
        assert_eq!(session.state().history().len(), before_reply + replies.len());
        if !session.state().status().is_terminal() {
            assert_eq!(session.state().side_to_move(), Color::White);
        }
    }
    assert!(session.state().history().len() >= 2);
}

#[test]
fn pending_promotion_holds_the_opponent_back() {
    let board = Board::from_ascii(&[
        "........", "P......k", "........", "........", "........", "........", "........",
        "....K...",
    ])
    .expect("diagram should parse");
    let state = GameState::from_position(board, Color::White, GameMode::Classic);
    let mut session = GameSession::from_game_state(
        state,
        Box::new(GreedyEngine::with_seed(1)),
        Box::new(ImmediateScheduler::new()),
    );

    let outcome = session.play(sq("a7"), sq("a8"), None).expect("a8");
    assert_eq!(outcome, MoveOutcome::PromotionPending(sq("a8")));
    assert_eq!(session.pending_tasks(), 0);
    assert!(session.poll(Instant::now()).is_empty());

    session.promote(PieceKind::Queen).expect("promote");
    assert_eq!(session.pending_tasks(), 1);
    let replies = session.poll(Instant::now());
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].from, sq("h7"));
    assert_eq!(session.state().side_to_move(), Color::White);
}

#[test]
fn superseded_delayed_task_is_a_no_op() {
    let delay = Duration::from_secs(10);
    let mut session = GameSession::with_delayed_opponent(
        GameConfig::default().with_seed(3).with_opponent_delay(delay),
        Box::new(GreedyEngine::with_seed(3)),
    );
    session.play(sq("e2"), sq("e4"), None).expect("e4");
    session.undo().expect("undo e4");
    session.play(sq("d2"), sq("d4"), None).expect("d4");
    assert_eq!(session.pending_tasks(), 2);

    let later = Instant::now() + delay + Duration::from_millis(1);
    let replies = session.poll(later);
    assert_eq!(replies.len(), 1);
    assert_eq!(session.state().history().len(), 2);
    assert_eq!(
        session.state().history().as_slice()[0].to,
        sq("d4")
    );
    assert_eq!(session.pending_tasks(), 0);
}
