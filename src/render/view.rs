//! gpui host - a full-window canvas driven by a `CanvasSurface`.
//!
//! Translates gpui mouse and key events into `CanvasEvent`s and paints the
//! renderer's primitives as absolutely positioned boxes.

use crate::constants::CANVAS_BACKGROUND;
use crate::input::{CanvasEvent, CanvasOrigin, Key, Modifiers, PointerButton};
use crate::render::{ElementPrimitive, OutlineStyle};
use crate::settings::Settings;
use crate::surface::CanvasSurface;
use crate::types::{CursorStyle, Point};
use gpui::prelude::*;
use gpui::{
    App, Context, FocusHandle, Focusable, KeyDownEvent, MouseButton, MouseDownEvent, MouseMoveEvent,
    MouseUpEvent, Pixels, Window, div, px, rgba,
};

pub struct SketchboardView {
    surface: CanvasSurface,
    focus_handle: FocusHandle,
}

impl SketchboardView {
    pub fn new(settings: Settings, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            // The canvas fills the window, so client and canvas space coincide
            surface: CanvasSurface::attach(settings, CanvasOrigin::ZERO),
            focus_handle,
        }
    }

    fn dispatch(&mut self, event: CanvasEvent, cx: &mut Context<Self>) {
        if self.surface.dispatch(event).is_handled() {
            cx.stop_propagation();
        }
        cx.notify();
    }

    fn handle_mouse_down(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
        self.dispatch(
            CanvasEvent::PointerDown {
                button: pointer_button(event.button),
                position: to_point(event.position),
                modifiers: to_modifiers(&event.modifiers),
            },
            cx,
        );
    }

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.dispatch(
            CanvasEvent::PointerMove {
                position: to_point(event.position),
                modifiers: to_modifiers(&event.modifiers),
            },
            cx,
        );
    }

    fn handle_mouse_up(&mut self, _event: &MouseUpEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.dispatch(CanvasEvent::PointerUp, cx);
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let key = Key::from_name(&event.keystroke.key);
        self.dispatch(CanvasEvent::KeyDown { key }, cx);
    }
}

impl Focusable for SketchboardView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for SketchboardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let primitives = self.surface.render();

        div()
            .size_full()
            .relative()
            .overflow_hidden()
            .bg(rgba(CANVAS_BACKGROUND))
            .cursor(to_gpui_cursor(self.surface.canvas().cursor()))
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .on_mouse_down(MouseButton::Left, cx.listener(Self::handle_mouse_down))
            .on_mouse_down(MouseButton::Right, cx.listener(Self::handle_mouse_down))
            .on_mouse_down(MouseButton::Middle, cx.listener(Self::handle_mouse_down))
            .on_mouse_move(cx.listener(Self::handle_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .on_mouse_up_out(MouseButton::Left, cx.listener(Self::handle_mouse_up))
            .children(primitives.iter().map(render_primitive))
    }
}

fn render_primitive(primitive: &ElementPrimitive) -> impl IntoElement {
    // Dashed outlines are approximated with a translucent stroke
    let outline = match primitive.outline.style {
        OutlineStyle::Solid => primitive.outline.color.0,
        OutlineStyle::Dashed => (primitive.outline.color.0 & 0xffffff00) | 0x80,
    };

    div()
        .absolute()
        .left(px(primitive.x))
        .top(px(primitive.y))
        .w(px(primitive.width))
        .h(px(primitive.height))
        .bg(rgba(primitive.fill.0))
        .border_2()
        .border_color(rgba(outline))
        .cursor(to_gpui_cursor(primitive.cursor))
}

fn to_point(position: gpui::Point<Pixels>) -> Point {
    Point::new(f32::from(position.x), f32::from(position.y))
}

fn to_modifiers(modifiers: &gpui::Modifiers) -> Modifiers {
    Modifiers {
        shift: modifiers.shift,
        control: modifiers.control,
        alt: modifiers.alt,
        platform: modifiers.platform,
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other(0),
    }
}

fn to_gpui_cursor(cursor: CursorStyle) -> gpui::CursorStyle {
    match cursor {
        CursorStyle::Move => gpui::CursorStyle::OpenHand,
        CursorStyle::Default => gpui::CursorStyle::Arrow,
    }
}
