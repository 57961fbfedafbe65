mod common;

use common::{board, gesture, p, Paint, RecordingSurface, Sketch};
use roughboard_shared::{Board, BoardConfig, MemoryStorage, Tool};

#[test]
fn empty_board_only_clears() {
    let board = board();
    let mut surface = RecordingSurface::default();
    board.render(&mut surface);
    assert_eq!(surface.ops, vec![Paint::Clear("black".to_string())]);
}

#[test]
fn shapes_are_painted_in_document_order() {
    let mut board = board();
    board.set_tool(Tool::Line);
    gesture(&mut board, &[p(0.0, 0.0), p(1.0, 1.0)]);
    board.set_tool(Tool::Freehand);
    gesture(&mut board, &[p(5.0, 5.0), p(6.0, 6.0)]);

    let mut surface = RecordingSurface::default();
    board.render(&mut surface);
    assert_eq!(
        surface.ops,
        vec![
            Paint::Clear("black".to_string()),
            Paint::Draw(Sketch::Line {
                from: p(0.0, 0.0),
                to: p(1.0, 1.0),
            }),
            Paint::Draw(Sketch::Path(vec![p(5.0, 5.0), p(6.0, 6.0)])),
        ]
    );
}

#[test]
fn every_render_is_a_full_redraw() {
    let mut board = board();
    gesture(&mut board, &[p(0.0, 0.0), p(1.0, 1.0)]);

    let mut surface = RecordingSurface::default();
    board.render(&mut surface);
    board.render(&mut surface);
    assert_eq!(surface.ops.len(), 4);
    assert_eq!(surface.ops[2], Paint::Clear("black".to_string()));
}

#[test]
fn background_comes_from_config() {
    let config = BoardConfig {
        background: "#101010".to_string(),
        ..BoardConfig::default()
    };
    let board = Board::open(
        common::RecordingGenerator::default(),
        MemoryStorage::new(),
        &config,
    );
    let mut surface = RecordingSurface::default();
    board.render(&mut surface);
    assert_eq!(surface.ops, vec![Paint::Clear("#101010".to_string())]);
}
