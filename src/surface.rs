//! Canvas surface - scoped event subscription around a `Canvas`.
//!
//! A surface subscribes to input events once when it is attached and
//! unsubscribes exactly once when it is detached or dropped. While attached
//! it converts client positions to canvas-local ones and forwards events to
//! the controller; once detached every event is ignored.

use crate::canvas::Canvas;
use crate::input::{CanvasEvent, CanvasOrigin, CoordinateConverter, EventOutcome};
use crate::render::{ElementPrimitive, render_elements};
use crate::settings::Settings;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

static SUBSCRIPTION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Live event registration. Each one gets a process-unique id so attach and
/// detach can be paired up in logs.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
}

impl Subscription {
    fn new() -> Self {
        Self {
            id: SUBSCRIPTION_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

pub struct CanvasSurface {
    canvas: Canvas,
    origin: CanvasOrigin,
    subscription: Option<Subscription>,
}

impl CanvasSurface {
    /// Create a surface and subscribe it to canvas input.
    pub fn attach(settings: Settings, origin: CanvasOrigin) -> Self {
        Self::attach_canvas(Canvas::new(settings), origin)
    }

    pub fn attach_canvas(canvas: Canvas, origin: CanvasOrigin) -> Self {
        let subscription = Subscription::new();
        info!(subscription = subscription.id, "Canvas surface attached");
        Self {
            canvas,
            origin,
            subscription: Some(subscription),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }

    /// Forward a client-space event to the canvas.
    pub fn dispatch(&mut self, event: CanvasEvent) -> EventOutcome {
        if self.subscription.is_none() {
            return EventOutcome::Ignored;
        }

        let origin = self.origin;
        let local = event.map_position(|position| CoordinateConverter::client_to_canvas(position, origin));
        self.canvas.handle_event(&local)
    }

    /// Update where the surface sits in client space (layout change, resize).
    pub fn set_origin(&mut self, origin: CanvasOrigin) {
        self.origin = origin;
    }

    pub fn origin(&self) -> CanvasOrigin {
        self.origin
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn render(&self) -> Vec<ElementPrimitive> {
        render_elements(&self.canvas.render_input())
    }

    /// Unsubscribe and settle any gesture left open. Safe to call twice.
    pub fn detach(&mut self) {
        let Some(subscription) = self.subscription.take() else {
            return;
        };

        self.canvas.finish_gesture();
        self.canvas.hovered = None;
        self.canvas.refresh_cursor();
        info!(subscription = subscription.id, "Canvas surface detached");
        debug!(elements = self.canvas.elements().len(), "Surface released");
    }
}

impl Drop for CanvasSurface {
    fn drop(&mut self) {
        self.detach();
    }
}
