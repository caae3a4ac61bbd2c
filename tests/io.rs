//! Validates board rendering and PNG export

use gridworld::algorithm::synthesis::generate;
use gridworld::io::configuration::CELL_PIXEL_SIZE;
use gridworld::io::image::export_board_as_png;
use gridworld::io::render::render_ascii;

#[test]
fn test_ascii_render_shape() {
    let board = generate(1);
    let rendered = render_ascii(&board, false);

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), board.size());
    assert!(lines.iter().all(|line| line.chars().count() == board.size()));
}

#[test]
fn test_hidden_hazards_are_indistinguishable_from_empty() {
    let board = generate(1);
    let hidden = render_ascii(&board, false);
    let exposed = render_ascii(&board, true);

    assert!(!hidden.contains('!'));
    assert!(exposed.contains('!'));
    // Exposure changes nothing but hazard markers
    assert_eq!(hidden.len(), exposed.len());
    let repainted: String = exposed
        .chars()
        .map(|symbol| if symbol == '!' { '.' } else { symbol })
        .collect();
    assert_eq!(hidden, repainted);
}

#[test]
fn test_png_export_writes_scaled_image() {
    let Ok(directory) = tempfile::tempdir() else {
        unreachable!("temporary directory should be creatable");
    };
    let path = directory.path().join("maps").join("level_1.png");
    let board = generate(1);

    let result = export_board_as_png(&board, &path.to_string_lossy());
    assert!(result.is_ok(), "export failed: {result:?}");

    match image::open(&path) {
        Ok(exported) => {
            let edge = board.size() as u32 * CELL_PIXEL_SIZE;
            assert_eq!(exported.width(), edge);
            assert_eq!(exported.height(), edge);
        }
        Err(error) => unreachable!("exported PNG should load: {error}"),
    }
}
