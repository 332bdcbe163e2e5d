//! Application state and session integration.
//!
//! This module provides the AppState resource that owns the gashapon
//! session, plus the systems that keep its timers running and tear it down
//! when the app exits.

use bevy::prelude::*;
use gashapon_core::{GashaponSession, LeverRelease};

/// How long a status message stays up, in seconds.
const STATUS_TIMEOUT: f64 = 3.0;

/// Main application state resource.
#[derive(Resource)]
pub struct AppState {
    /// The widget session (pool, selection, slots, lever, pulse).
    pub session: GashaponSession,
    /// Status bar message.
    pub status_message: Option<String>,
    /// When the status message was set (for auto-clear).
    pub status_set_time: Option<f64>,
}

impl AppState {
    pub fn new(session: GashaponSession) -> Self {
        Self {
            session,
            status_message: None,
            status_set_time: None,
        }
    }

    /// Draw a capsule at host time `now`.
    pub fn draw(&mut self, now: f64) {
        match self.session.draw(now) {
            Some(item) => {
                info!(id = item.id, title = %item.title, "capsule drawn");
                if self.session.engine().is_exhausted() {
                    self.set_status("That was the last capsule", now);
                }
            }
            None => self.set_status("The machine is empty. Pull the lever to refill it.", now),
        }
    }

    /// Show the item in a filled slot.
    pub fn inspect(&mut self, id: u32) {
        self.session.inspect(id);
    }

    /// Let go of the lever.
    pub fn release_lever(&mut self, now: f64) {
        if self.session.release_lever() == LeverRelease::Triggered {
            self.set_status("Machine refilled", now);
        }
    }

    /// Drop a drag that ended without a release.
    pub fn cancel_lever(&mut self) {
        self.session.cancel_lever();
    }

    /// Set a status message (with timestamp for auto-clear).
    pub fn set_status(&mut self, message: impl Into<String>, current_time: f64) {
        self.status_message = Some(message.into());
        self.status_set_time = Some(current_time);
    }

    /// Clear status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_set_time = None;
    }

    /// Whether the status message has been up longer than the timeout.
    fn status_expired(&self, now: f64) -> bool {
        self.status_set_time
            .is_some_and(|set_time| now - set_time > STATUS_TIMEOUT)
    }
}

/// System to drive the stretch pulse off the Bevy clock.
pub fn tick_session(mut app_state: ResMut<AppState>, time: Res<Time>) {
    app_state.session.tick(time.elapsed_secs_f64());
}

/// System to clear old status messages after 3 seconds.
pub fn clear_old_status(mut app_state: ResMut<AppState>, time: Res<Time>) {
    if app_state.status_expired(time.elapsed_secs_f64()) {
        app_state.clear_status();
    }
}

/// System to cancel pending timers and drags when the app is closing.
pub fn shutdown_on_exit(mut exit: EventReader<AppExit>, mut app_state: ResMut<AppState>) {
    if exit.read().next().is_some() {
        app_state.session.shutdown();
        info!("session shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gashapon_core::testing::catalog_of;
    use gashapon_core::SessionConfig;

    fn app_state(n: u32) -> AppState {
        let session =
            GashaponSession::with_catalog(catalog_of(n), SessionConfig::new().with_seed(3))
                .unwrap();
        AppState::new(session)
    }

    #[test]
    fn test_draw_from_empty_machine_sets_status() {
        let mut state = app_state(1);
        state.draw(0.0);
        assert_eq!(state.status_message.as_deref(), Some("That was the last capsule"));

        state.draw(1.0);
        assert!(state.status_message.unwrap().contains("empty"));
    }

    #[test]
    fn test_lost_drag_does_not_refill() {
        let mut state = app_state(2);
        state.draw(0.0);
        state
            .session
            .set_track(gashapon_core::TrackGeometry::new(0.0, 100.0));
        state.session.press_lever();
        state.session.move_lever(0.0);

        state.cancel_lever();
        assert!(!state.session.lever().is_dragging());
        assert_eq!(state.session.engine().pool_len(), 1);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_release_past_threshold_refills() {
        let mut state = app_state(2);
        state.draw(0.0);
        state
            .session
            .set_track(gashapon_core::TrackGeometry::new(0.0, 100.0));
        state.session.press_lever();
        state.session.move_lever(0.0);

        state.release_lever(1.0);
        assert_eq!(state.session.engine().pool_len(), 2);
        assert_eq!(state.status_message.as_deref(), Some("Machine refilled"));
    }

    #[test]
    fn test_status_expires() {
        let mut state = app_state(2);
        state.set_status("hello", 10.0);
        assert!(!state.status_expired(12.0));
        assert!(state.status_expired(13.5));
    }
}
