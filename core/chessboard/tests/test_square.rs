mod test_helpers;

use chessboard::constants::{DARK_SQUARE_COLOR, LIGHT_SQUARE_COLOR};
use chessboard::{CellRect, Color, Piece, PieceKind, Position, Shade, Square};
use test_helpers::{DrawCommand, RecordingTarget, test_assets};

#[test]
fn test_shade_follows_coordinate_parity() {
    for pos in Position::all() {
        let square = Square::new(pos, 100);
        let expected = if (pos.x + pos.y) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        };
        assert_eq!(square.shade(), expected, "位置 {pos} 深淺錯誤");
    }

    assert_eq!(Square::new(Position::new(0, 0), 100).color(), LIGHT_SQUARE_COLOR);
    assert_eq!(Square::new(Position::new(1, 0), 100).color(), DARK_SQUARE_COLOR);
}

#[test]
fn test_rect_from_grid_position() {
    let square = Square::new(Position::new(3, 5), 100);
    assert_eq!(
        square.rect(),
        CellRect {
            x: 300,
            y: 500,
            width: 100,
            height: 100,
        }
    );
    assert!(!square.is_occupied());

    // 其他格子大小
    let square = Square::new(Position::new(7, 1), 64);
    assert_eq!(square.rect().top_left(), (448, 64));
    assert!(square.rect().contains(448, 64));
    assert!(!square.rect().contains(512, 64));
}

#[test]
fn test_draw_empty_square_only_fills() {
    let square = Square::new(Position::new(1, 1), 100);
    let mut target = RecordingTarget::default();
    square.draw(&mut target);

    assert_eq!(
        target.commands,
        vec![DrawCommand::Fill(square.rect(), LIGHT_SQUARE_COLOR)]
    );
}

#[test]
fn test_draw_piece_on_top_of_background() {
    let mut square = Square::new(Position::new(2, 7), 100);
    square.occupying_piece = Some(Piece::new(PieceKind::Bishop, Color::White, &test_assets()));

    let mut target = RecordingTarget::default();
    square.draw(&mut target);

    assert_eq!(
        target.commands,
        vec![
            DrawCommand::Fill(square.rect(), DARK_SQUARE_COLOR),
            DrawCommand::Blit("bishop_white.png".to_string(), (200, 700), 100),
        ]
    );

    // 重複繪製結果相同
    let mut again = RecordingTarget::default();
    square.draw(&mut again);
    assert_eq!(target.commands, again.commands);
}
