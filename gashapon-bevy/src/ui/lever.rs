//! Reset lever widget.
//!
//! A pill-shaped track with a round knob. The knob rests at the right end
//! and is dragged leftward; the session turns pointer x into a 0-100
//! position against the track rect recorded here every frame.

use bevy_egui::egui;
use gashapon_core::TrackGeometry;

use crate::state::AppState;

/// Track size in points.
pub const TRACK_SIZE: egui::Vec2 = egui::vec2(96.0, 32.0);
const KNOB_DIAMETER: f32 = 24.0;
/// Gap between the knob and the track edge at rest.
const KNOB_INSET: f32 = 4.0;
/// How far the knob travels from rest to fully pulled.
const KNOB_TRAVEL: f32 = 64.0;
/// Seconds for the knob to ease back to rest after a release.
const RETURN_TIME: f32 = 0.2;

/// Distance from the track's right edge to the knob's right edge.
pub fn knob_right_offset(position: f32) -> f32 {
    KNOB_INSET + position / 100.0 * KNOB_TRAVEL
}

/// Render the lever and feed its drag gesture into the session.
pub fn render_lever(ui: &mut egui::Ui, app_state: &mut AppState, now: f64) {
    let (track_rect, _) = ui.allocate_exact_size(TRACK_SIZE, egui::Sense::hover());
    app_state
        .session
        .set_track(TrackGeometry::new(track_rect.left(), track_rect.width()));

    let knob_id = ui.id().with("reset_lever_knob");
    let lever = app_state.session.lever();
    let dragging = lever.is_dragging();

    // Follow the pointer exactly while dragging; ease back otherwise.
    let shown_position = ui.ctx().animate_value_with_time(
        knob_id.with("ease"),
        lever.position(),
        if dragging { 0.0 } else { RETURN_TIME },
    );

    let knob_right = track_rect.right() - knob_right_offset(shown_position);
    let knob_rect = egui::Rect::from_min_size(
        egui::pos2(
            knob_right - KNOB_DIAMETER,
            track_rect.center().y - KNOB_DIAMETER / 2.0,
        ),
        egui::vec2(KNOB_DIAMETER, KNOB_DIAMETER),
    );

    let response = ui.interact(knob_rect, knob_id, egui::Sense::drag());

    if response.drag_started() {
        app_state.session.press_lever();
    }
    if response.drag_stopped() {
        app_state.release_lever(now);
    } else if response.dragged() {
        if let Some(pointer) = response.interact_pointer_pos() {
            app_state.session.move_lever(pointer.x);
        }
    } else if app_state.session.lever().is_dragging() {
        // Drag vanished without a pointer-up (focus loss and the like).
        app_state.cancel_lever();
    }

    let response = if app_state.session.lever().is_dragging() {
        response.on_hover_cursor(egui::CursorIcon::Grabbing)
    } else {
        response.on_hover_cursor(egui::CursorIcon::Grab)
    };

    let painter = ui.painter();
    painter.rect_filled(track_rect, TRACK_SIZE.y / 2.0, egui::Color32::from_gray(229));
    painter.circle_filled(
        response.rect.center(),
        KNOB_DIAMETER / 2.0,
        egui::Color32::BLACK,
    );

    if app_state.session.lever().shows_reset_label() {
        painter.text(
            track_rect.center(),
            egui::Align2::CENTER_CENTER,
            "Reset",
            egui::FontId::proportional(11.0),
            egui::Color32::from_gray(75),
        );
    }
}
