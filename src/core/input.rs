//! Per-tick input signals, already reduced to camera semantics.
//!
//! Device polling is the host's concern; the scene only ever sees these
//! plain booleans and one-shot events, which keeps camera kinematics
//! deterministic and unit-testable.

/// Held signals sampled once per tick. The four headings drive both
/// camera variants; the zoom/roll/reset holds only affect the orbital
/// camera and are ignored by the first-person one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraInput {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub backward: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub reset: bool,
}

impl CameraInput {
    pub fn headings(left: bool, right: bool, forward: bool, backward: bool) -> Self {
        Self {
            left,
            right,
            forward,
            backward,
            ..Self::default()
        }
    }
}

/// One-shot events dispatched to the scene between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    SwitchCamera,
    ReassignColors,
    ToggleWalls,
    ToggleRoofs,
}

/// Output surface dimensions, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The larger dimension always ends up in the numerator, so the ratio
    /// is >= 1 regardless of orientation.
    pub fn aspect_ratio(&self) -> f32 {
        let (w, h) = (self.width as f32, self.height as f32);
        if w > h {
            w / h
        } else {
            h / w
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_uses_larger_dimension_as_numerator() {
        assert_eq!(Viewport::new(800, 600).aspect_ratio(), 800.0 / 600.0);
        assert_eq!(Viewport::new(600, 800).aspect_ratio(), 800.0 / 600.0);
        assert_eq!(Viewport::new(512, 512).aspect_ratio(), 1.0);
    }

    #[test]
    fn heading_constructor_leaves_holds_clear() {
        let input = CameraInput::headings(true, false, true, false);
        assert!(input.left && input.forward);
        assert!(!input.zoom_in && !input.roll_right && !input.reset);
    }
}
