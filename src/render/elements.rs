//! Element renderer.
//!
//! A pure mapping from the current canvas state to one primitive per element.
//! Nothing is cached between calls; hosts re-run it after every change.

use crate::constants::{ELEMENT_FILL, OUTLINE_DEFAULT, OUTLINE_DRAGGING, OUTLINE_SELECTED, OUTLINE_WIDTH};
use crate::types::{CursorStyle, Element, ElementId};
use serde::{Serialize, Serializer};

/// Snapshot of canvas state handed to the renderer.
#[derive(Clone, Copy, Debug)]
pub struct RenderInput<'a> {
    pub elements: &'a [Element],
    pub selected: Option<ElementId>,
    pub hovered: Option<ElementId>,
    /// Applies to the selected element only
    pub dragging: bool,
}

/// Visual state of one element, highest precedence first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    Drawing,
    Dragging,
    Selected,
    Hovered,
    Default,
}

impl VisualState {
    pub fn resolve(element: &Element, input: &RenderInput<'_>) -> Self {
        let is_selected = input.selected == Some(element.id);

        if element.drawing {
            VisualState::Drawing
        } else if input.dragging && is_selected {
            VisualState::Dragging
        } else if is_selected {
            VisualState::Selected
        } else if input.hovered == Some(element.id) {
            VisualState::Hovered
        } else {
            VisualState::Default
        }
    }

    pub fn outline(self) -> Outline {
        let (color, style) = match self {
            VisualState::Drawing => (OUTLINE_DEFAULT, OutlineStyle::Dashed),
            VisualState::Dragging => (OUTLINE_DRAGGING, OutlineStyle::Solid),
            VisualState::Selected => (OUTLINE_SELECTED, OutlineStyle::Solid),
            VisualState::Hovered | VisualState::Default => (OUTLINE_DEFAULT, OutlineStyle::Solid),
        };
        Outline {
            width: OUTLINE_WIDTH,
            color: Color(color),
            style,
        }
    }

    pub fn cursor(self) -> CursorStyle {
        match self {
            VisualState::Dragging | VisualState::Selected | VisualState::Hovered => CursorStyle::Move,
            VisualState::Drawing | VisualState::Default => CursorStyle::Default,
        }
    }
}

/// Packed RGBA color (0xRRGGBBAA), serialized as a hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u32);

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("#{:08x}", self.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineStyle {
    Solid,
    Dashed,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Outline {
    pub width: f32,
    pub color: Color,
    pub style: OutlineStyle,
}

/// One styled box, positioned in canvas-local coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElementPrimitive {
    pub id: ElementId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub state: VisualState,
    pub outline: Outline,
    pub fill: Color,
    pub cursor: CursorStyle,
}

/// Map every element to a primitive, in collection (stacking) order.
pub fn render_elements(input: &RenderInput<'_>) -> Vec<ElementPrimitive> {
    input
        .elements
        .iter()
        .map(|element| {
            let state = VisualState::resolve(element, input);
            ElementPrimitive {
                id: element.id,
                x: element.x,
                y: element.y,
                width: element.width,
                height: element.height,
                state,
                outline: state.outline(),
                fill: Color(ELEMENT_FILL),
                cursor: state.cursor(),
            }
        })
        .collect()
}
