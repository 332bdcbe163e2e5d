//! UI module - egui-based interface panels.

mod lever;
mod panels;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::state::AppState;

/// Main UI system - renders all egui panels.
pub fn main_ui_system(
    mut contexts: EguiContexts,
    mut app_state: ResMut<AppState>,
    time: Res<Time>,
) {
    let ctx = contexts.ctx_mut();
    let now = time.elapsed_secs_f64();

    // Configure egui style
    configure_style(ctx);

    // Top/bottom panels claim space before the CentralPanel fills the rest
    panels::render_header(ctx, &mut app_state, now);
    panels::render_status_bar(ctx, &app_state);
    panels::render_main(ctx, &mut app_state, now);
}

/// Configure egui visual style.
fn configure_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    use egui::{FontId, TextStyle};
    style.text_styles = [
        (TextStyle::Small, FontId::proportional(12.0)),
        (TextStyle::Body, FontId::proportional(16.0)),
        (TextStyle::Monospace, FontId::monospace(15.0)),
        (TextStyle::Button, FontId::proportional(16.0)),
        (TextStyle::Heading, FontId::proportional(24.0)),
    ]
    .into();

    // Plain white page
    let visuals = &mut style.visuals;
    visuals.dark_mode = false;
    visuals.override_text_color = Some(egui::Color32::from_rgb(17, 17, 17));
    visuals.window_fill = egui::Color32::WHITE;
    visuals.panel_fill = egui::Color32::WHITE;
    visuals.faint_bg_color = egui::Color32::from_gray(245);
    visuals.extreme_bg_color = egui::Color32::from_gray(250);
    visuals.hyperlink_color = egui::Color32::from_gray(75);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::NONE;

    ctx.set_style(style);
}

/// Handle keyboard input for drawing and shortcuts.
pub fn handle_keyboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut app_state: ResMut<AppState>,
    mut contexts: EguiContexts,
    mut exit: EventWriter<AppExit>,
    time: Res<Time>,
) {
    let ctx = contexts.ctx_mut();

    // Ctrl+Q / Cmd+Q to quit (works anywhere)
    let ctrl_pressed = keys.pressed(KeyCode::ControlLeft)
        || keys.pressed(KeyCode::ControlRight)
        || keys.pressed(KeyCode::SuperLeft)
        || keys.pressed(KeyCode::SuperRight);

    if ctrl_pressed && keys.just_pressed(KeyCode::KeyQ) {
        exit.send(AppExit::Success);
        return;
    }

    if ctx.wants_keyboard_input() {
        return;
    }

    // Space / Enter work the machine like a click
    if keys.just_pressed(KeyCode::Space) || keys.just_pressed(KeyCode::Enter) {
        app_state.draw(time.elapsed_secs_f64());
    }
}
