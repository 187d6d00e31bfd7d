//! Pointer Input Module
//!
//! Drag state for mouse and touch. Press and release are handled as events
//! the moment they arrive, so the held flag is correct at sample time no
//! matter how events and frames interleave. The position is kept in
//! normalized device coordinates: x in [-1, 1] left to right, y in [-1, 1]
//! bottom to top.

use glam::Vec2;

/// Mouse/touch drag tracking.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Last known position in normalized device coordinates.
    position: Option<Vec2>,
    /// Whether a press is currently held.
    pressed: bool,
    /// Whether the pointer is over the viewport.
    in_window: bool,
}

impl PointerState {
    /// Create a new pointer state with no position and nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the pointer position from raw pixel coordinates.
    ///
    /// # Arguments
    /// * `x` - X position in pixels
    /// * `y` - Y position in pixels (origin at top)
    /// * `viewport_width` - Viewport width in pixels
    /// * `viewport_height` - Viewport height in pixels
    pub fn set_position(&mut self, x: f64, y: f64, viewport_width: u32, viewport_height: u32) {
        if viewport_width == 0 || viewport_height == 0 {
            return;
        }
        let ndc_x = (x as f32 / viewport_width as f32) * 2.0 - 1.0;
        let ndc_y = 1.0 - (y as f32 / viewport_height as f32) * 2.0; // Flip Y
        self.position = Some(Vec2::new(ndc_x.clamp(-1.0, 1.0), ndc_y.clamp(-1.0, 1.0)));
        self.in_window = true;
    }

    /// Mouse button or touch went down.
    pub fn press(&mut self) {
        self.pressed = true;
    }

    /// Mouse button or touch was lifted (or cancelled).
    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Pointer left the viewport; any drag in progress ends.
    pub fn leave_window(&mut self) {
        self.in_window = false;
        self.pressed = false;
        self.position = None;
    }

    /// Pointer entered the viewport.
    pub fn enter_window(&mut self) {
        self.in_window = true;
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.pressed
    }

    /// Normalized position, if the pointer has been seen.
    pub fn ndc_position(&self) -> Option<Vec2> {
        self.position
    }

    /// Reset all pointer state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_default() {
        let pointer = PointerState::new();
        assert!(!pointer.is_dragging());
        assert!(pointer.ndc_position().is_none());
    }

    #[test]
    fn test_ndc_conversion() {
        let mut pointer = PointerState::new();

        pointer.set_position(100.0, 50.0, 200, 100);
        assert_eq!(pointer.ndc_position(), Some(Vec2::ZERO));

        pointer.set_position(200.0, 0.0, 200, 100);
        assert_eq!(pointer.ndc_position(), Some(Vec2::new(1.0, 1.0)));

        pointer.set_position(0.0, 100.0, 200, 100);
        assert_eq!(pointer.ndc_position(), Some(Vec2::new(-1.0, -1.0)));
    }

    #[test]
    fn test_zero_sized_viewport_ignored() {
        let mut pointer = PointerState::new();
        pointer.set_position(10.0, 10.0, 0, 0);
        assert!(pointer.ndc_position().is_none());
    }

    #[test]
    fn test_press_release_between_frames() {
        let mut pointer = PointerState::new();
        pointer.press();
        assert!(pointer.is_dragging());
        pointer.release();
        assert!(!pointer.is_dragging());
    }

    #[test]
    fn test_leave_window_ends_drag() {
        let mut pointer = PointerState::new();
        pointer.set_position(10.0, 10.0, 100, 100);
        pointer.press();
        pointer.leave_window();
        assert!(!pointer.is_dragging());
        assert!(pointer.ndc_position().is_none());
    }
}
