//! Pointer interaction with the wheel surface.
//!
//! Gesture recognition itself belongs to the host toolkit; this module only
//! holds the small state machine that decides which pointer samples commit a
//! color. The rule that matters: a sample outside the disc never commits and
//! never cancels an ongoing drag.

use crate::color::HsvColor;
use crate::wheel::{color_for_position, Size, WheelPoint};

/// Pointer events the wheel responds to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer went down at a position.
    Pressed(WheelPoint),
    /// Pointer moved to a position.
    Moved(WheelPoint),
    /// Pointer went up.
    Released,
}

/// Drag interaction state for the wheel surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WheelDragState {
    /// Not dragging
    #[default]
    Idle,
    /// A drag started inside the disc and has not been released yet
    Dragging,
}

impl WheelDragState {
    /// Check if currently dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self, WheelDragState::Dragging)
    }
}

/// Turns a stream of pointer events into committed colors.
///
/// A press commits and starts a drag only when it lands inside the disc.
/// While dragging, every in-disc move commits; out-of-disc moves are dropped
/// without ending the gesture. Release ends the drag and commits nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInteraction {
    size: Size,
    drag: WheelDragState,
}

impl WheelInteraction {
    /// Create an interaction for a wheel of the given bounding box.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            drag: WheelDragState::default(),
        }
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Update the bounding box after a layout change.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Feed one pointer event; returns the newly committed color, if any.
    ///
    /// `value` is the host's current brightness setting, applied to every
    /// color read off the disc.
    pub fn handle(&mut self, event: PointerEvent, value: f32) -> Option<HsvColor> {
        match event {
            PointerEvent::Pressed(point) => {
                let color = color_for_position(point, self.size, value)?;
                log::debug!("wheel: drag started at ({:.1}, {:.1})", point.x, point.y);
                self.drag = WheelDragState::Dragging;
                Some(color)
            }
            PointerEvent::Moved(point) => {
                if !self.drag.is_dragging() {
                    return None;
                }
                color_for_position(point, self.size, value)
            }
            PointerEvent::Released => {
                if self.drag.is_dragging() {
                    log::debug!("wheel: drag stopped");
                    self.drag = WheelDragState::Idle;
                }
                None
            }
        }
    }
}
