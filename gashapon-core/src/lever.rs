//! Reset lever gesture tracking.
//!
//! The lever is a bounded one-dimensional drag control. Pulling it leftward
//! along its track raises its position from 0 to 100; letting go past the
//! threshold asks for a reset. Whatever happens, a release puts the lever
//! back at rest.

/// Default release threshold (strictly greater than triggers).
pub const DEFAULT_RESET_THRESHOLD: f32 = 80.0;

/// Screen-space extent of the lever track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    pub left: f32,
    pub width: f32,
}

impl TrackGeometry {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Position (0-100) for a pointer at `pointer_x`, or `None` if the
    /// track has no usable width.
    pub fn position_for(&self, pointer_x: f32) -> Option<f32> {
        if self.width <= 0.0 || !self.width.is_finite() || !pointer_x.is_finite() {
            return None;
        }
        let position = (self.right() - pointer_x) / self.width * 100.0;
        Some(position.clamp(0.0, 100.0))
    }
}

/// Outcome of releasing the lever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeverRelease {
    /// The lever was not being dragged.
    Ignored,
    /// Released at or below the threshold.
    Returned,
    /// Released past the threshold; the caller should reset.
    Triggered,
}

/// Drag state of the reset lever.
#[derive(Debug, Clone)]
pub struct LeverTracker {
    track: TrackGeometry,
    threshold: f32,
    position: f32,
    dragging: bool,
}

impl Default for LeverTracker {
    fn default() -> Self {
        Self::new(TrackGeometry::default())
    }
}

impl LeverTracker {
    pub fn new(track: TrackGeometry) -> Self {
        Self {
            track,
            threshold: DEFAULT_RESET_THRESHOLD,
            position: 0.0,
            dragging: false,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Update the track geometry (e.g. after a layout change).
    pub fn set_track(&mut self, track: TrackGeometry) {
        self.track = track;
    }

    pub fn track(&self) -> TrackGeometry {
        self.track
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Current position, 0 (rest) to 100 (fully pulled).
    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a release right now would trigger a reset.
    pub fn shows_reset_label(&self) -> bool {
        self.position > self.threshold
    }

    /// Start dragging. The press location itself is not recorded.
    pub fn press(&mut self) {
        self.dragging = true;
    }

    /// Feed a pointer sample. Ignored unless dragging.
    pub fn move_to(&mut self, pointer_x: f32) {
        if !self.dragging {
            return;
        }
        if let Some(position) = self.track.position_for(pointer_x) {
            self.position = position;
        }
    }

    /// Stop dragging and return the lever to rest.
    pub fn release(&mut self) -> LeverRelease {
        if !self.dragging {
            return LeverRelease::Ignored;
        }

        let outcome = if self.position > self.threshold {
            LeverRelease::Triggered
        } else {
            LeverRelease::Returned
        };

        self.rest();
        outcome
    }

    /// Abandon a drag without triggering anything.
    pub fn cancel(&mut self) {
        self.rest();
    }

    fn rest(&mut self) {
        self.position = 0.0;
        self.dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> LeverTracker {
        LeverTracker::new(TrackGeometry::new(100.0, 200.0))
    }

    #[test]
    fn test_position_for() {
        let track = TrackGeometry::new(100.0, 200.0);
        assert_eq!(track.right(), 300.0);
        assert_eq!(track.position_for(300.0), Some(0.0));
        assert_eq!(track.position_for(200.0), Some(50.0));
        assert_eq!(track.position_for(100.0), Some(100.0));
    }

    #[test]
    fn test_position_is_clamped() {
        let track = TrackGeometry::new(100.0, 200.0);
        assert_eq!(track.position_for(500.0), Some(0.0));
        assert_eq!(track.position_for(-50.0), Some(100.0));
    }

    #[test]
    fn test_degenerate_track() {
        assert_eq!(TrackGeometry::new(0.0, 0.0).position_for(10.0), None);
        assert_eq!(TrackGeometry::new(0.0, -5.0).position_for(10.0), None);
        assert_eq!(TrackGeometry::new(0.0, 100.0).position_for(f32::NAN), None);
    }

    #[test]
    fn test_move_before_press_is_ignored() {
        let mut lever = tracker();
        lever.move_to(120.0);
        assert_eq!(lever.position(), 0.0);
        assert!(!lever.is_dragging());
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut lever = tracker();
        assert_eq!(lever.release(), LeverRelease::Ignored);
    }

    #[test]
    fn test_drag_tracks_pointer() {
        let mut lever = tracker();
        lever.press();
        assert!(lever.is_dragging());

        lever.move_to(260.0);
        assert!((lever.position() - 20.0).abs() < 1e-4);
        lever.move_to(150.0);
        assert_eq!(lever.position(), 75.0);
        assert!(!lever.shows_reset_label());
        lever.move_to(130.0);
        assert!(lever.shows_reset_label());
    }

    #[test]
    fn test_release_below_threshold() {
        let mut lever = tracker();
        lever.press();
        lever.move_to(200.0);
        assert_eq!(lever.release(), LeverRelease::Returned);
        assert_eq!(lever.position(), 0.0);
        assert!(!lever.is_dragging());
    }

    #[test]
    fn test_release_exactly_at_threshold_does_not_trigger() {
        // Width 100 keeps the arithmetic exact.
        let mut lever = LeverTracker::new(TrackGeometry::new(0.0, 100.0));
        lever.press();
        lever.move_to(20.0);
        assert_eq!(lever.position(), 80.0);
        assert_eq!(lever.release(), LeverRelease::Returned);
    }

    #[test]
    fn test_release_past_threshold_triggers() {
        let mut lever = tracker();
        lever.press();
        lever.move_to(130.0);
        assert_eq!(lever.release(), LeverRelease::Triggered);
        assert_eq!(lever.position(), 0.0);
        assert!(!lever.is_dragging());
    }

    #[test]
    fn test_move_after_release_is_ignored() {
        let mut lever = tracker();
        lever.press();
        lever.move_to(200.0);
        lever.release();
        lever.move_to(100.0);
        assert_eq!(lever.position(), 0.0);
        assert_eq!(lever.release(), LeverRelease::Ignored);
    }

    #[test]
    fn test_degenerate_track_keeps_last_position() {
        let mut lever = tracker();
        lever.press();
        lever.move_to(200.0);
        lever.set_track(TrackGeometry::new(0.0, 0.0));
        lever.move_to(0.0);
        assert_eq!(lever.position(), 50.0);
    }

    #[test]
    fn test_cancel() {
        let mut lever = tracker();
        lever.press();
        lever.move_to(100.0);
        lever.cancel();
        assert_eq!(lever.position(), 0.0);
        assert!(!lever.is_dragging());
        assert_eq!(lever.release(), LeverRelease::Ignored);
    }

    #[test]
    fn test_custom_threshold() {
        let mut lever = tracker().with_threshold(40.0);
        lever.press();
        lever.move_to(200.0);
        assert_eq!(lever.release(), LeverRelease::Triggered);
    }
}
