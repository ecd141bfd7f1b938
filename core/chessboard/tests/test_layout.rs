use chessboard::error::{ErrorKind, LayoutError, LoadError};
use chessboard::{Color, Layout, LayoutCell, PieceKind, Position};

const STANDARD_ROWS: [[&str; 8]; 8] = [
    ["bR", "bK", "bB", "bQ", "bG", "bB", "bK", "bR"],
    ["bP", "bP", "bP", "bP", "bP", "bP", "bP", "bP"],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["wP", "wP", "wP", "wP", "wP", "wP", "wP", "wP"],
    ["wR", "wK", "wB", "wQ", "wG", "wB", "wK", "wR"],
];

fn standard_rows() -> Vec<Vec<String>> {
    STANDARD_ROWS
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect()
}

#[test]
fn test_standard_layout_codes() {
    let layout = Layout::standard();

    assert_eq!(layout.to_rows(), standard_rows());
    assert_eq!(layout.occupied().count(), 32);
    assert_eq!(Layout::from_rows(&standard_rows()).unwrap(), layout);
    assert_eq!(
        layout.cell(Position::new(4, 0)),
        Some(LayoutCell::Occupied(Color::Black, PieceKind::King))
    );
    assert_eq!(
        layout.cell(Position::new(1, 7)),
        Some(LayoutCell::Occupied(Color::White, PieceKind::Knight))
    );
    assert_eq!(layout.cell(Position::new(8, 0)), None);
}

#[test]
fn test_layout_from_ascii() {
    let ascii = r#"
. . . . bG . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . wQ . . . .
. . . . . . . .
. . . . . . . .
. . . . wG . . .
    "#;

    let layout = Layout::from_ascii(ascii).unwrap();

    let pieces: Vec<_> = layout.occupied().collect();
    assert_eq!(
        pieces,
        vec![
            (Position::new(4, 0), Color::Black, PieceKind::King),
            (Position::new(3, 4), Color::White, PieceKind::Queen),
            (Position::new(4, 7), Color::White, PieceKind::King),
        ]
    );
}

#[test]
fn test_layout_from_toml() {
    let mut content = String::from("rows = [\n");
    for row in STANDARD_ROWS {
        let cells: Vec<String> = row.iter().map(|c| format!("{c:?}")).collect();
        content.push_str(&format!("  [{}],\n", cells.join(", ")));
    }
    content.push_str("]\n");

    assert_eq!(Layout::from_toml(&content).unwrap(), Layout::standard());

    // 輸出的 TOML 可再讀回
    let written = Layout::standard().to_toml().unwrap();
    assert_eq!(Layout::from_toml(&written).unwrap(), Layout::standard());
}

#[test]
fn test_layout_wrong_dimensions() {
    let mut rows = standard_rows();
    rows.pop();
    let err = Layout::from_rows(&rows).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Layout(LayoutError::WrongDimensions { rows: 7, cols: 8 })
    ));

    let mut rows = standard_rows();
    rows[3].push(String::new());
    let err = Layout::from_rows(&rows).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Layout(LayoutError::WrongDimensions { rows: 8, cols: 9 })
    ));
}

#[test]
fn test_layout_malformed_cell() {
    let mut rows = standard_rows();
    rows[0][1] = "bN".to_string();

    let err = Layout::from_rows(&rows).unwrap_err();
    assert_eq!(
        err.kind().to_string(),
        LayoutError::MalformedLayout {
            x: 1,
            y: 0,
            code: "bN".to_string(),
        }
        .to_string()
    );
}

#[test]
fn test_layout_bad_toml() {
    let err = Layout::from_toml("rows = 3").unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Load(LoadError::DeserializeError { .. })
    ));
}
