use variant_chess::game_state::chess_rules::LEGACY_RANDOM_POOL;
use variant_chess::game_state::chess_types::*;
use variant_chess::game_state::game_config::GameConfig;
use variant_chess::game_state::game_state::GameState;

fn sq(name: &str) -> Position {
    let bytes = name.as_bytes();
    Position::new(8 - (bytes[1] - b'0') as i8, (bytes[0] - b'a') as i8)
}

fn game(rows: [&str; 8], side: Color, mode: GameMode) -> GameState {
    let board = Board::from_ascii(&rows).expect("diagram should parse");
    GameState::from_position(board, side, mode)
}

const GHOST_SETUP: [&str; 8] = [
    ".......k", "........", "........", ".r......", "........", "....n...", "....P...",
    "K.......",
];

#[test]
fn ghost_pawn_jumps_once() {
    let mut ghost = game(GHOST_SETUP, Color::White, GameMode::GhostPawn);
    assert!(ghost.legal_moves_from(sq("e2")).contains(&sq("e4")));

    ghost
        .apply_move(sq("e2"), sq("e4"), None)
        .expect("ghost jump should be legal");
    let pawn = ghost.board().get(sq("e4")).expect("pawn landed on e4");
    assert!(pawn.ghost_walk_used);
    assert!(ghost.history().last().is_some_and(|r| r.ghost_walk));

    // Same geometry again: enemy directly ahead, empty square beyond.
    ghost
        .apply_move(sq("b5"), sq("e5"), None)
        .expect("rook to e5");
    assert!(!ghost.legal_moves_from(sq("e4")).contains(&sq("e6")));

    ghost.undo().expect("undo rook move");
    ghost.undo().expect("undo ghost jump");
    let pawn = ghost.board().get(sq("e2")).expect("pawn back on e2");
    assert!(!pawn.ghost_walk_used);
    assert!(!pawn.has_moved);
}

#[test]
fn classic_pawn_cannot_jump() {
    let classic = game(GHOST_SETUP, Color::White, GameMode::Classic);
    assert!(classic.legal_moves_from(sq("e2")).is_empty());
}

#[test]
fn special_pawn_power_double_steps_from_any_rank() {
    let rows = [
        "....k...", "........", "........", "........", "........", "....P...", "........",
        "....K...",
    ];
    for (mode, expected) in [(GameMode::SpecialPawnPower, true), (GameMode::Classic, false)] {
        let mut state = game(rows, Color::White, mode);
        state.apply_move(sq("e1"), sq("d1"), None).expect("Kd1");
        state.apply_move(sq("e8"), sq("d8"), None).expect("Kd8");
        assert_eq!(
            state.legal_moves_from(sq("e3")).contains(&sq("e5")),
            expected,
            "{mode}"
        );
    }
}

#[test]
fn heavy_knight_vaults_only_in_its_mode() {
    let rows = [
        "k.......", "........", "........", "........", "...N....", "........", "........",
        "K.......",
    ];
    let heavy = game(rows, Color::White, GameMode::HeavyKnight);
    let classic = game(rows, Color::White, GameMode::Classic);
    assert_eq!(heavy.legal_moves_from(sq("d4")).len(), 16);
    assert!(heavy.legal_moves_from(sq("d4")).contains(&sq("e7")));
    assert_eq!(classic.legal_moves_from(sq("d4")).len(), 8);
    assert!(!classic.legal_moves_from(sq("d4")).contains(&sq("e7")));
}

#[test]
fn stunned_rook_cannot_move_but_still_attacks() {
    let rows = [
        "k.......", "........", "........", "....r...", "........", "......N.", "........",
        "...K....",
    ];
    let mut heavy = game(rows, Color::White, GameMode::HeavyKnight);
    heavy.apply_move(sq("g3"), sq("f5"), None).expect("Nf5");

    let rook = heavy.board().get(sq("e5")).expect("rook on e5");
    assert!(rook.is_stunned());
    assert!(heavy.legal_moves_from(sq("e5")).is_empty());
    assert!(heavy
        .all_legal_moves(Color::Black)
        .iter()
        .all(|mv| mv.from != sq("e5")));

    heavy.apply_move(sq("a8"), sq("b8"), None).expect("Kb8");
    let king_moves = heavy.legal_moves_from(sq("d1"));
    assert!(!king_moves.contains(&sq("e1")));
    assert!(!king_moves.contains(&sq("e2")));
    assert!(king_moves.contains(&sq("c2")));
}

#[test]
fn bishop_sniper_shoots_over_a_blocker() {
    let rows = [
        ".......k", "........", "........", "........", "........", "....n...", "...P....",
        "..B....K",
    ];
    let classic = game(rows, Color::White, GameMode::Classic);
    assert!(!classic.legal_moves_from(sq("c1")).contains(&sq("e3")));

    let mut sniper = game(rows, Color::White, GameMode::BishopSniper);
    assert!(sniper.legal_moves_from(sq("c1")).contains(&sq("e3")));
    let before = sniper.board().clone();
    sniper
        .apply_move(sq("c1"), sq("e3"), None)
        .expect("sniper capture should be legal");
    assert_eq!(
        sniper.board().get(sq("e3")).map(|p| p.kind),
        Some(PieceKind::Bishop)
    );
    assert!(sniper.board().get(sq("d2")).is_some());
    assert_eq!(sniper.captured_pieces(Color::Black).len(), 1);

    sniper.undo().expect("undo sniper capture");
    assert_eq!(sniper.board(), &before);
}

#[test]
fn sniper_needs_an_enemy_on_the_target() {
    let empty_target = [
        ".......k", "........", "........", "........", "........", "........", "...P....",
        "..B....K",
    ];
    let sniper = game(empty_target, Color::White, GameMode::BishopSniper);
    assert!(!sniper.legal_moves_from(sq("c1")).contains(&sq("e3")));
}

#[test]
fn queen_inherits_the_sniper_capture() {
    let rows = [
        ".......k", "........", "........", "........", "........", "....n...", "...P....",
        "..Q....K",
    ];
    let classic = game(rows, Color::White, GameMode::Classic);
    assert!(!classic.legal_moves_from(sq("c1")).contains(&sq("e3")));

    let mut sniper = game(rows, Color::White, GameMode::BishopSniper);
    assert!(sniper.legal_moves_from(sq("c1")).contains(&sq("e3")));
    sniper
        .apply_move(sq("c1"), sq("e3"), None)
        .expect("queen sniper capture should be legal");
    assert_eq!(
        sniper.board().get(sq("e3")).map(|p| (p.kind, p.color)),
        Some((PieceKind::Queen, Color::White))
    );
    assert_eq!(sniper.captured_pieces(Color::Black).len(), 1);
}

#[test]
fn queen_sniper_shot_gives_check() {
    let rows = [
        "........", "........", "........", "........", "........", "....k...", "...N....",
        "..Q....K",
    ];
    let classic = game(rows, Color::Black, GameMode::Classic);
    assert_eq!(classic.status(), GameStatus::Playing);

    let sniper = game(rows, Color::Black, GameMode::BishopSniper);
    assert_eq!(sniper.status(), GameStatus::Check);
}

#[test]
fn rook_charge_carries_the_rook_past_a_long_capture() {
    let rows = [
        ".......k", "........", "r.......", "........", "........", "........", "........",
        "R......K",
    ];
    let mut charge = game(rows, Color::White, GameMode::RookCharge);
    let before = charge.board().clone();
    charge
        .apply_move(sq("a1"), sq("a6"), None)
        .expect("rook capture should be legal");
    assert!(charge.board().is_empty(sq("a6")));
    assert_eq!(
        charge.board().get(sq("a7")).map(|p| (p.kind, p.color)),
        Some((PieceKind::Rook, Color::White))
    );
    assert_eq!(charge.last_move().map(|m| m.to), Some(sq("a7")));
    assert_eq!(
        charge.history().last().and_then(|r| r.charged_to),
        Some(sq("a7"))
    );

    charge.undo().expect("undo charge");
    assert_eq!(charge.board(), &before);
    assert!(charge.captured_pieces(Color::Black).is_empty());

    let mut classic = game(rows, Color::White, GameMode::Classic);
    classic
        .apply_move(sq("a1"), sq("a6"), None)
        .expect("rook capture should be legal");
    assert_eq!(
        classic.board().get(sq("a6")).map(|p| p.color),
        Some(Color::White)
    );
    assert!(classic.board().is_empty(sq("a7")));
}

#[test]
fn rook_charge_stops_when_blocked_or_unsafe() {
    let blocked = [
        ".......k", "p.......", "r.......", "........", "........", "........", "........",
        "R......K",
    ];
    let mut charge = game(blocked, Color::White, GameMode::RookCharge);
    charge.apply_move(sq("a1"), sq("a6"), None).expect("Rxa6");
    assert_eq!(
        charge.board().get(sq("a6")).map(|p| p.color),
        Some(Color::White)
    );

    // Charging from d6 to c6 would open the d-file onto the white king.
    let pinned = [
        "k..q....", "........", "...n...R", "........", "........", "........", "........",
        "...K....",
    ];
    let mut charge = game(pinned, Color::White, GameMode::RookCharge);
    charge.apply_move(sq("h6"), sq("d6"), None).expect("Rxd6");
    assert_eq!(
        charge.board().get(sq("d6")).map(|p| p.kind),
        Some(PieceKind::Rook)
    );
    assert!(charge.board().is_empty(sq("c6")));
    assert_eq!(charge.history().last().and_then(|r| r.charged_to), None);
}

#[test]
fn random_mode_pools() {
    for seed in 0..64 {
        let legacy = GameState::new(
            GameConfig::default()
                .with_mode(ModeChoice::Random)
                .with_seed(seed),
        );
        assert!(LEGACY_RANDOM_POOL.contains(&legacy.mode()));
    }

    let full: Vec<GameMode> = (0..64)
        .map(|seed| {
            GameState::new(
                GameConfig::default()
                    .with_mode(ModeChoice::Random)
                    .with_full_random_pool(true)
                    .with_seed(seed),
            )
            .mode()
        })
        .collect();
    assert!(full
        .iter()
        .any(|mode| matches!(mode, GameMode::BishopSniper | GameMode::RookCharge)));
}
