//! Drawing gestures on empty canvas space.

use crate::helpers::*;
use sketchboard::canvas::Canvas;
use sketchboard::input::{EventOutcome, PointerButton, Modifiers};
use sketchboard::types::{ElementId, Point};

#[test]
fn test_drag_draw_creates_normalized_rect() {
    let mut canvas = Canvas::default();

    down(&mut canvas, 100.0, 100.0);
    move_to(&mut canvas, 140.0, 180.0);
    up(&mut canvas);

    assert_eq!(canvas.elements().len(), 1);
    let el = &canvas.elements()[0];
    assert_eq!((el.x, el.y, el.width, el.height), (100.0, 100.0, 40.0, 80.0));
    assert!(!el.drawing);
}

#[test]
fn test_drawing_flag_only_during_gesture() {
    let mut canvas = Canvas::default();

    down(&mut canvas, 10.0, 10.0);
    let id = last_id(&canvas);
    assert!(element(&canvas, id).drawing);
    assert!(canvas.is_drawing());

    move_to(&mut canvas, 30.0, 40.0);
    assert!(element(&canvas, id).drawing);

    up(&mut canvas);
    assert!(!element(&canvas, id).drawing);
    assert!(canvas.input_state().is_idle());
}

#[test]
fn test_every_direction_is_normalized() {
    let deltas = [-30.0_f32, -7.0, 12.0, 45.0];

    for &dx in &deltas {
        for &dy in &deltas {
            let mut canvas = Canvas::default();
            let id = draw(&mut canvas, (100.0, 100.0), (100.0 + dx, 100.0 + dy));
            let el = element(&canvas, id);

            assert_eq!(el.x, 100.0_f32.min(100.0 + dx), "dx={dx} dy={dy}");
            assert_eq!(el.y, 100.0_f32.min(100.0 + dy), "dx={dx} dy={dy}");
            assert_eq!(el.width, dx.abs());
            assert_eq!(el.height, dy.abs());
            // Rectangle spans exactly both drawn corners
            assert_eq!(el.x + el.width, 100.0_f32.max(100.0 + dx));
            assert_eq!(el.y + el.height, 100.0_f32.max(100.0 + dy));
            assert_invariants(&canvas);
        }
    }
}

#[test]
fn test_shift_constrains_to_square() {
    let targets = [(230.0, 150.0), (120.0, 260.0), (180.0, 205.0), (260.0, 260.0), (170.0, 120.0)];

    for &(tx, ty) in &targets {
        let mut canvas = Canvas::default();
        down(&mut canvas, 200.0, 200.0);
        move_with_shift(&mut canvas, tx, ty);
        up(&mut canvas);

        let el = &canvas.elements()[0];
        assert_eq!(el.width, el.height, "target ({tx}, {ty})");
    }
}

#[test]
fn test_shift_square_preserves_axis_signs() {
    let mut canvas = Canvas::default();
    down(&mut canvas, 200.0, 200.0);
    move_with_shift(&mut canvas, 230.0, 150.0);

    // dx=+30, dy=-50 -> side 50, grows right and up
    let el = &canvas.elements()[0];
    assert_eq!((el.x, el.y, el.width, el.height), (200.0, 150.0, 50.0, 50.0));
}

#[test]
fn test_square_follows_latest_modifier_state() {
    let mut canvas = Canvas::default();
    down(&mut canvas, 0.0, 0.0);
    move_with_shift(&mut canvas, 20.0, 60.0);
    assert_eq!(canvas.elements()[0].width, 60.0);

    move_to(&mut canvas, 20.0, 60.0);
    assert_eq!(canvas.elements()[0].width, 20.0);
    assert_eq!(canvas.elements()[0].height, 60.0);
}

#[test]
fn test_click_creates_default_box_centered_on_click() {
    let mut canvas = Canvas::default();
    click(&mut canvas, 300.0, 300.0);

    let el = &canvas.elements()[0];
    assert_eq!((el.x, el.y, el.width, el.height), (275.0, 275.0, 50.0, 50.0));
    assert!(!el.drawing);
}

#[test]
fn test_click_uses_configured_default_size() {
    let mut canvas = TestCanvasBuilder::new().with_default_size(80.0).build();
    click(&mut canvas, 300.0, 300.0);

    let el = &canvas.elements()[0];
    assert_eq!((el.x, el.y, el.width, el.height), (260.0, 260.0, 80.0, 80.0));
}

#[test]
fn test_zero_height_draw_gets_default_size_around_anchor() {
    let mut canvas = Canvas::default();
    let id = draw(&mut canvas, (100.0, 100.0), (100.0, 160.0));

    let el = element(&canvas, id);
    assert_eq!((el.x, el.y, el.width, el.height), (75.0, 75.0, 50.0, 50.0));
}

#[test]
fn test_ids_are_monotonic_across_deletes() {
    let mut canvas = Canvas::default();
    click(&mut canvas, 100.0, 100.0);
    click(&mut canvas, 400.0, 400.0);

    // Select and delete the second one, then draw again
    click(&mut canvas, 400.0, 400.0);
    press(&mut canvas, sketchboard::input::Key::Delete);
    click(&mut canvas, 700.0, 700.0);

    let ids: Vec<_> = canvas.elements().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![ElementId(0), ElementId(2)]);
}

#[test]
fn test_new_elements_append_last() {
    let mut canvas = TestCanvasBuilder::new().with_element(0.0, 0.0, 10.0, 10.0).build();
    draw(&mut canvas, (100.0, 100.0), (120.0, 120.0));

    assert_eq!(canvas.elements().len(), 2);
    assert_eq!(canvas.elements()[1].id, ElementId(1));
}

#[test]
fn test_draw_start_clears_selection() {
    let mut canvas = TestCanvasBuilder::new().with_element(0.0, 0.0, 10.0, 10.0).build();

    click(&mut canvas, 5.0, 5.0);
    assert_eq!(canvas.selected(), Some(ElementId(0)));

    down(&mut canvas, 100.0, 100.0);
    assert_eq!(canvas.selected(), None);
    assert_eq!(canvas.input_state().drawing_element(), Some(ElementId(1)));
    assert_invariants(&canvas);
}

#[test]
fn test_non_primary_button_creates_nothing() {
    let mut canvas = Canvas::default();

    for button in [PointerButton::Secondary, PointerButton::Middle, PointerButton::Other(4)] {
        let outcome = canvas.handle_pointer_down(button, Point::new(50.0, 50.0), Modifiers::NONE);
        assert_eq!(outcome, EventOutcome::Ignored);
    }

    assert!(canvas.elements().is_empty());
    assert!(canvas.input_state().is_idle());
}

#[test]
fn test_primary_down_reports_handled() {
    let mut canvas = Canvas::default();
    assert_eq!(down(&mut canvas, 50.0, 50.0), EventOutcome::Handled);
    assert_eq!(up(&mut canvas), EventOutcome::Handled);
    // Nothing active any more
    assert_eq!(up(&mut canvas), EventOutcome::Ignored);
}
