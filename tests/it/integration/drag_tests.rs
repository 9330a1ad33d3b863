//! Selecting and moving existing elements.

use crate::helpers::*;
use sketchboard::canvas::Canvas;
use sketchboard::input::Key;
use sketchboard::types::ElementId;

fn single_box() -> Canvas {
    TestCanvasBuilder::new().with_element(50.0, 50.0, 100.0, 100.0).build()
}

#[test]
fn test_drag_moves_element_with_pointer() {
    let mut canvas = single_box();

    down(&mut canvas, 60.0, 60.0);
    assert_eq!(canvas.selected(), Some(ElementId(0)));
    assert!(!canvas.is_dragging());

    move_to(&mut canvas, 110.0, 60.0);
    assert!(canvas.is_dragging());

    let el = element(&canvas, ElementId(0));
    assert_eq!((el.x, el.y), (100.0, 50.0));
    assert_eq!((el.width, el.height), (100.0, 100.0));

    up(&mut canvas);
    assert!(!canvas.is_dragging());
    assert_eq!(canvas.selected(), Some(ElementId(0)));
}

#[test]
fn test_below_threshold_does_not_move() {
    let mut canvas = single_box();

    down(&mut canvas, 60.0, 60.0);
    move_to(&mut canvas, 62.0, 61.0);

    assert!(!canvas.is_dragging());
    assert!(canvas.input_state().is_drag_gesture());
    let el = element(&canvas, ElementId(0));
    assert_eq!((el.x, el.y), (50.0, 50.0));
}

#[test]
fn test_threshold_must_be_strictly_exceeded() {
    let mut canvas = single_box();

    down(&mut canvas, 60.0, 60.0);
    move_to(&mut canvas, 63.0, 60.0);
    assert!(!canvas.is_dragging());
    assert_eq!(element(&canvas, ElementId(0)).x, 50.0);

    move_to(&mut canvas, 64.0, 60.0);
    assert!(canvas.is_dragging());
    assert_eq!(element(&canvas, ElementId(0)).x, 54.0);
}

#[test]
fn test_threshold_is_euclidean() {
    let mut canvas = single_box();

    // Neither axis alone exceeds 3, the diagonal does
    down(&mut canvas, 60.0, 60.0);
    move_to(&mut canvas, 62.5, 62.5);

    assert!(canvas.is_dragging());
    let el = element(&canvas, ElementId(0));
    assert_eq!((el.x, el.y), (52.5, 52.5));
}

#[test]
fn test_active_drag_keeps_following_inside_threshold() {
    let mut canvas = single_box();

    down(&mut canvas, 60.0, 60.0);
    move_to(&mut canvas, 80.0, 60.0);
    move_to(&mut canvas, 61.0, 60.0);

    assert!(canvas.is_dragging());
    assert_eq!(element(&canvas, ElementId(0)).x, 51.0);
}

#[test]
fn test_grab_offset_is_preserved() {
    let (dx, dy) = (25.0, -15.0);

    for &(gx, gy) in &[(60.0, 60.0), (140.0, 130.0), (100.0, 51.0)] {
        let mut canvas = single_box();
        down(&mut canvas, gx, gy);
        move_to(&mut canvas, gx + dx, gy + dy);

        let el = element(&canvas, ElementId(0));
        assert_eq!((el.x, el.y), (50.0 + dx, 50.0 + dy), "grabbed at ({gx}, {gy})");
    }
}

#[test]
fn test_custom_threshold() {
    let mut canvas = TestCanvasBuilder::new()
        .with_element(50.0, 50.0, 100.0, 100.0)
        .with_drag_threshold(10.0)
        .build();

    down(&mut canvas, 60.0, 60.0);
    move_to(&mut canvas, 68.0, 60.0);
    assert!(!canvas.is_dragging());

    move_to(&mut canvas, 71.0, 60.0);
    assert!(canvas.is_dragging());
    assert_eq!(element(&canvas, ElementId(0)).x, 61.0);
}

#[test]
fn test_topmost_element_is_grabbed() {
    let mut canvas = TestCanvasBuilder::new()
        .with_element(0.0, 0.0, 100.0, 100.0)
        .with_element(50.0, 50.0, 100.0, 100.0)
        .build();

    down(&mut canvas, 75.0, 75.0);
    move_to(&mut canvas, 85.0, 75.0);
    up(&mut canvas);

    assert_eq!(canvas.selected(), Some(ElementId(1)));
    assert_eq!(element(&canvas, ElementId(1)).x, 60.0);
    assert_eq!(element(&canvas, ElementId(0)).x, 0.0);
}

#[test]
fn test_press_on_element_creates_nothing() {
    let mut canvas = single_box();

    click(&mut canvas, 100.0, 100.0);

    assert_eq!(canvas.elements().len(), 1);
    assert_eq!(canvas.selected(), Some(ElementId(0)));
    assert_eq!(element(&canvas, ElementId(0)).x, 50.0);
}

#[test]
fn test_edge_press_selects() {
    let mut canvas = single_box();

    down(&mut canvas, 150.0, 150.0);
    assert_eq!(canvas.selected(), Some(ElementId(0)));
    assert!(!canvas.is_drawing());
}

#[test]
fn test_deleting_dragged_element_ends_drag() {
    let mut canvas = single_box();

    down(&mut canvas, 60.0, 60.0);
    move_to(&mut canvas, 80.0, 60.0);
    press(&mut canvas, Key::Delete);

    assert!(canvas.elements().is_empty());
    assert!(canvas.input_state().is_idle());

    // Later moves and the release have nothing to act on
    move_to(&mut canvas, 120.0, 60.0);
    up(&mut canvas);
    assert!(canvas.elements().is_empty());
    assert_invariants(&canvas);
}

#[test]
fn test_drag_sequence_keeps_invariants() {
    let mut canvas = TestCanvasBuilder::new()
        .with_element(0.0, 0.0, 40.0, 40.0)
        .with_element(100.0, 0.0, 40.0, 40.0)
        .build();

    down(&mut canvas, 10.0, 10.0);
    for step in 1..=20 {
        move_to(&mut canvas, 10.0 + step as f32 * 5.0, 10.0);
        assert_invariants(&canvas);
        assert!(canvas.elements().iter().all(|e| !e.drawing));
    }
    up(&mut canvas);

    // Moving never changes stacking order
    assert_eq!(element(&canvas, ElementId(0)).x, 100.0);
    assert_eq!(canvas.elements()[0].id, ElementId(0));
}
