mod common;

use common::{board, counted_board, gesture, p, RecordingGenerator, Sketch};
use roughboard_shared::{
    to_canvas_local, Change, FillStyle, Frame, Geometry, Point, ShapeFactory, StrokeWidth, Style,
    Tool, DEFAULT_COLOR,
};

#[test]
fn one_gesture_adds_exactly_one_shape() {
    let mut board = board();
    gesture(&mut board, &[p(10.0, 10.0), p(20.0, 30.0), p(50.0, 60.0)]);
    assert_eq!(board.document().len(), 1);

    gesture(&mut board, &[p(0.0, 0.0), p(5.0, 5.0)]);
    assert_eq!(board.document().len(), 2);
}

#[test]
fn final_geometry_uses_anchor_and_last_position() {
    let mut board = board();
    board.set_tool(Tool::Line);
    gesture(&mut board, &[p(10.0, 10.0), p(20.0, 30.0), p(50.0, 60.0)]);

    let shape = board.document().last().unwrap();
    assert_eq!(
        shape.geometry(),
        &Geometry::Line {
            from: p(10.0, 10.0),
            to: p(50.0, 60.0),
        }
    );
    assert_eq!(
        shape.handle().sketch,
        Sketch::Line {
            from: p(10.0, 10.0),
            to: p(50.0, 60.0),
        }
    );
}

#[test]
fn pointer_down_starts_with_zero_length_shape() {
    let mut board = board();
    board.set_tool(Tool::Rectangle);
    assert_eq!(board.pointer_down(p(7.0, 8.0)), Change::Document);

    let shape = board.document().last().unwrap();
    assert_eq!(
        shape.handle().sketch,
        Sketch::Rectangle(Frame {
            x: 7.0,
            y: 8.0,
            width: 0.0,
            height: 0.0,
        })
    );
}

#[test]
fn rectangle_is_normalized_for_any_drag_direction() {
    let mut down_right = board();
    down_right.set_tool(Tool::Rectangle);
    gesture(&mut down_right, &[p(10.0, 20.0), p(40.0, 60.0)]);

    let mut up_left = board();
    up_left.set_tool(Tool::Rectangle);
    gesture(&mut up_left, &[p(40.0, 60.0), p(10.0, 20.0)]);

    let a = &down_right.document().last().unwrap().handle().sketch;
    let b = &up_left.document().last().unwrap().handle().sketch;
    assert_eq!(a, b);
    match a {
        Sketch::Rectangle(frame) => {
            assert!(frame.width >= 0.0 && frame.height >= 0.0);
            assert_eq!((frame.x, frame.y), (10.0, 20.0));
        }
        other => panic!("expected a rectangle, got {other:?}"),
    }
}

#[test]
fn ellipse_is_centered_between_corners() {
    let mut board = board();
    board.set_tool(Tool::Ellipse);
    gesture(&mut board, &[p(100.0, 100.0), p(60.0, 80.0)]);

    match &board.document().last().unwrap().handle().sketch {
        Sketch::Ellipse(frame) => {
            assert_eq!(frame.center, p(80.0, 90.0));
            assert_eq!(frame.radius_x, 20.0);
            assert_eq!(frame.radius_y, 10.0);
        }
        other => panic!("expected an ellipse, got {other:?}"),
    }
}

#[test]
fn freehand_keeps_every_point() {
    let mut board = board();
    board.set_tool(Tool::Freehand);
    let points: Vec<Point> = (0..6).map(|i| p(i as f64, (i * 2) as f64)).collect();
    gesture(&mut board, &points);

    let shape = board.document().last().unwrap();
    let stored = shape.geometry().points().unwrap();
    assert_eq!(stored.len(), points.len());
    assert_eq!(stored, points.as_slice());
    assert_eq!(shape.handle().sketch, Sketch::Path(points));
}

#[test]
fn freehand_path_is_regenerated_on_every_move() {
    let mut board = board();
    board.set_tool(Tool::Freehand);
    let _ = board.pointer_down(p(0.0, 0.0));
    let _ = board.pointer_move(p(1.0, 1.0));
    let _ = board.pointer_move(p(2.0, 2.0));

    let shape = board.document().last().unwrap();
    assert_eq!(
        shape.handle().sketch,
        Sketch::Path(vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)])
    );
}

#[test]
fn every_move_generates_exactly_one_drawable() {
    let (mut board, calls) = counted_board();
    board.set_tool(Tool::Freehand);
    let _ = board.pointer_down(p(0.0, 0.0));
    assert_eq!(calls.get(), 1);
    for step in 1..=5 {
        let _ = board.pointer_move(p(step as f64, 0.0));
        assert_eq!(calls.get(), 1 + step);
    }
    let _ = board.pointer_up();
    let _ = board.pointer_move(p(9.0, 9.0));
    assert_eq!(calls.get(), 6);
    assert_eq!(board.document().len(), 1);
}

#[test]
fn built_shapes_carry_a_sanitized_color() {
    let factory = ShapeFactory::new(RecordingGenerator::default());
    let geometry = Geometry::Line {
        from: p(0.0, 0.0),
        to: p(1.0, 1.0),
    };
    let blank = Style {
        color: "   ".to_string(),
        ..Style::default()
    };
    let shape = factory.build(geometry.clone(), blank);
    assert_eq!(shape.style().color, DEFAULT_COLOR);

    let padded = Style {
        color: " #123456 ".to_string(),
        ..Style::default()
    };
    assert_eq!(factory.build(geometry, padded).style().color, "#123456");
}

#[test]
fn moves_while_idle_are_ignored() {
    let mut board = board();
    assert_eq!(board.pointer_move(p(5.0, 5.0)), Change::None);
    assert!(board.document().is_empty());

    gesture(&mut board, &[p(0.0, 0.0), p(10.0, 10.0)]);
    let before = board.document().records();
    assert_eq!(board.pointer_move(p(99.0, 99.0)), Change::None);
    assert_eq!(board.document().records(), before);
}

#[test]
fn only_the_latest_shape_changes_during_a_drag() {
    let mut board = board();
    gesture(&mut board, &[p(0.0, 0.0), p(10.0, 10.0)]);
    let first = board.document().records()[0].clone();

    let _ = board.pointer_down(p(50.0, 50.0));
    let _ = board.pointer_move(p(70.0, 80.0));
    let _ = board.pointer_move(p(90.0, 95.0));

    let records = board.document().records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], first);
    assert_eq!(records[1].x2, Some(90.0));
}

#[test]
fn cursor_follows_the_drawing_state() {
    let mut board = board();
    assert_eq!(board.cursor(), "default");
    let _ = board.pointer_down(p(1.0, 1.0));
    assert_eq!(board.cursor(), "crosshair");
    assert!(board.is_drawing());
    let _ = board.pointer_up();
    assert_eq!(board.cursor(), "default");
}

#[test]
fn erase_tool_adds_nothing() {
    let mut board = board();
    board.set_tool(Tool::Erase);
    assert_eq!(board.pointer_down(p(1.0, 1.0)), Change::None);
    assert!(!board.is_drawing());
    assert_eq!(board.pointer_move(p(4.0, 4.0)), Change::None);
    assert!(board.document().is_empty());
}

#[test]
fn non_finite_positions_are_rejected() {
    let mut board = board();
    assert_eq!(board.pointer_down(p(f64::NAN, 1.0)), Change::None);
    assert!(board.document().is_empty());

    let _ = board.pointer_down(p(1.0, 1.0));
    assert_eq!(board.pointer_move(p(f64::INFINITY, 2.0)), Change::None);
    assert_eq!(board.document().records()[0].x2, Some(1.0));
}

#[test]
fn style_settings_apply_to_new_shapes() {
    let mut board = board();
    board.set_tool(Tool::Rectangle);
    board.set_color("#00ff00");
    board.set_fill(FillStyle::Fill);
    board.set_stroke_width(StrokeWidth::new(7));
    gesture(&mut board, &[p(0.0, 0.0), p(10.0, 10.0)]);

    let shape = board.document().last().unwrap();
    assert_eq!(shape.style().color, "#00ff00");
    assert_eq!(shape.handle().options.fill.as_deref(), Some("#00ff00"));
    assert_eq!(shape.handle().options.stroke_width, 7.0);
}

#[test]
fn canvas_local_coordinates_subtract_the_origin() {
    assert_eq!(to_canvas_local(p(120.0, 85.0), p(20.0, 5.0)), p(100.0, 80.0));
}
