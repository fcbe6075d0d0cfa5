use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    push_unique, slide_targets, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};
use crate::moves::bishop_moves::sniper_targets;

/// Union of rook and bishop movement. The bishop's sniper capture comes
/// along in `BishopSniper` mode.
pub fn queen_moves(board: &Board, from: Position, color: Color, mode: GameMode) -> Vec<Position> {
    let mut out = Vec::with_capacity(27);
    slide_targets(board, from, color, &ORTHOGONAL_DIRECTIONS, &mut out);
    slide_targets(board, from, color, &DIAGONAL_DIRECTIONS, &mut out);
    if mode.bishop_sniper() {
        for target in sniper_targets(board, from, color) {
            push_unique(&mut out, target);
        }
    }
    out
}
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_from_d4_on_empty_board_sees_twenty_seven_squares() {
        let board = Board::empty();
        assert_eq!(queen_moves(&board, Position::new(4, 3), Color::Black, GameMode::Classic).len(), 27);
    }

    #[test]
    fn queen_captures_first_enemy_on_each_line() {
        let board = Board::from_ascii(&[
            "...r....", "........", "........", "........", "...Q..p.", "........", "........",
            "........",
        ])
        .expect("diagram should parse");
        let moves = queen_moves(&board, Position::new(4, 3), Color::White, GameMode::Classic);
        assert!(moves.contains(&Position::new(0, 3)));
        assert!(moves.contains(&Position::new(4, 6)));
        assert!(!moves.contains(&Position::new(4, 7)));
    }
}
