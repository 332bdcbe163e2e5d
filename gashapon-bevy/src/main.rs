//! Gashapon Bevy GUI - a capsule-toy machine on a single page.
//!
//! Click the machine to draw a capsule; each capsule fills its slot in the
//! collection grid and shows up in the detail column. Drag the header lever
//! to the left and let go to refill the machine.

mod state;
mod ui;

use anyhow::Context;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::state::AppState;
use gashapon_core::{GashaponSession, SessionConfig};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "zatfer".into(),
            resolution: (1280., 800.).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(EguiPlugin);

    // LogPlugin is built by now, so session warnings reach the log
    insert_session(&mut app, SessionConfig::from_env())?;

    app.add_systems(Startup, setup)
        // Update systems - UI
        .add_systems(Update, (ui::main_ui_system, ui::handle_keyboard_input))
        // Update systems - session timers and teardown
        .add_systems(
            Update,
            (
                state::tick_session,
                state::clear_old_status,
                state::shutdown_on_exit,
            ),
        )
        .run();

    Ok(())
}

/// Create the session and hand it to the app as [`AppState`].
fn insert_session(app: &mut App, config: SessionConfig) -> anyhow::Result<()> {
    let session = GashaponSession::new(config.clone()).with_context(|| match &config.catalog_path {
        Some(path) => format!("failed to start with catalog {}", path.display()),
        None => "failed to start with the bundled catalog".to_string(),
    })?;
    app.insert_resource(AppState::new(session));
    Ok(())
}

/// Initial setup system.
fn setup(mut commands: Commands, app_state: Res<AppState>) {
    commands.spawn(Camera2d);

    let catalog = app_state.session.engine().catalog();
    info!(items = catalog.len(), "machine loaded");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_session() {
        let mut app = App::new();
        insert_session(&mut app, SessionConfig::new().with_seed(7)).unwrap();

        let app_state = app.world().resource::<AppState>();
        assert_eq!(app_state.session.engine().pool_len(), 16);
    }

    #[test]
    fn test_insert_session_reports_bad_catalog() {
        let mut app = App::new();
        let config = SessionConfig::new().with_catalog_path("missing/elements.json");

        let err = insert_session(&mut app, config).unwrap_err();
        assert!(err.to_string().contains("missing/elements.json"));
        assert!(!app.world().contains_resource::<AppState>());
    }
}
