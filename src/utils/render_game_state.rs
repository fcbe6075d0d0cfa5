//! Terminal-oriented Unicode board renderer.
//!
//! Used by `Board`'s `Display` impl, log output and the self-play binary.

use crate::game_state::chess_types::*;

/// Render the board with rank 8 (row 0) at the top and file/rank labels on
/// every edge. Stunned pieces are followed by `*` instead of a space.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8i8 {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..8i8 {
            let square = board.get(Position::new(row, col));
            out.push(square.map_or('·', |piece| piece_to_unicode(piece.color, piece.kind)));
            if square.is_some_and(|piece| piece.is_stunned()) {
                out.push('*');
                // Keep the rank label apart from an h-file marker.
                if col == 7 {
                    out.push(' ');
                }
            } else {
                out.push(' ');
            }
        }

        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board plus a one-line summary of mode, side to move and status.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = render_board(game_state.board());
    out.push_str(&format!(
        "\nmode: {}  to move: {}  status: {}",
        game_state.mode(),
        game_state.side_to_move(),
        game_state.status()
    ));
    if let Some(square) = game_state.pending_promotion() {
        out.push_str(&format!("  promotion pending on {square}"));
    }
    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
