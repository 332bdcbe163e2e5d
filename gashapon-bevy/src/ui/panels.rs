//! Main UI panels: header, machine, detail column and slot grid.

use bevy_egui::egui;
use gashapon_core::{Item, SessionSnapshot};

use super::lever;
use crate::state::AppState;

/// Fixed profile links shown in the header: (title, url, dot colour).
const SOCIAL_LINKS: [(&str, &str, egui::Color32); 3] = [
    ("GitHub", "https://github.com/zatfer", egui::Color32::BLACK),
    (
        "SoundCloud",
        "https://soundcloud.com/zatfer",
        egui::Color32::from_rgb(249, 115, 22),
    ),
    (
        "LinkedIn",
        "https://linkedin.com/in/zatfer",
        egui::Color32::from_rgb(37, 99, 235),
    ),
];

/// Capsule colours, picked by item id.
const CAPSULE_COLORS: [egui::Color32; 6] = [
    egui::Color32::from_rgb(239, 68, 68),
    egui::Color32::from_rgb(245, 158, 11),
    egui::Color32::from_rgb(34, 197, 94),
    egui::Color32::from_rgb(59, 130, 246),
    egui::Color32::from_rgb(168, 85, 247),
    egui::Color32::from_rgb(236, 72, 153),
];

const MACHINE_SIZE: egui::Vec2 = egui::vec2(260.0, 380.0);
/// Vertical scale of the machine while the stretch pulse is active.
const STRETCH_SCALE: f32 = 1.1;
const SLOT_SIZE: egui::Vec2 = egui::vec2(64.0, 96.0);
const SLOT_GAP: f32 = 16.0;
const DETAIL_IMAGE_SIZE: f32 = 192.0;

pub fn capsule_color(id: u32) -> egui::Color32 {
    CAPSULE_COLORS[id as usize % CAPSULE_COLORS.len()]
}

/// Render the top bar with title, reset lever and profile links.
pub fn render_header(ctx: &egui::Context, app_state: &mut AppState, now: f64) {
    egui::TopBottomPanel::top("header")
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.add_space(24.0);
            ui.horizontal(|ui| {
                ui.add_space(24.0);
                ui.label(egui::RichText::new("zatfer").size(24.0).strong());
                ui.add_space(16.0);
                lever::render_lever(ui, app_state, now);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(24.0);
                    // right_to_left lays out last link first
                    for (title, url, color) in SOCIAL_LINKS.iter().rev() {
                        render_link_dot(ui, title, url, *color);
                        ui.add_space(16.0);
                    }
                });
            });
            ui.add_space(24.0);
        });
}

fn render_link_dot(ui: &mut egui::Ui, title: &str, url: &str, color: egui::Color32) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::click());
    let color = if response.hovered() {
        color.gamma_multiply(0.7)
    } else {
        color
    };
    ui.painter().circle_filled(rect.center(), 12.0, color);

    let response = response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(title);
    if response.clicked() {
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
    }
}

/// Render the status line at the bottom of the screen.
pub fn render_status_bar(ctx: &egui::Context, app_state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar")
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add_space(24.0);
                let left = app_state.session.engine().pool_len();
                ui.label(
                    egui::RichText::new(format!("{left} left"))
                        .small()
                        .color(egui::Color32::GRAY),
                );
                if let Some(message) = &app_state.status_message {
                    ui.separator();
                    ui.label(egui::RichText::new(message).small());
                }
            });
            ui.add_space(8.0);
        });
}

/// Render the three columns: machine, current capsule, slot grid.
pub fn render_main(ctx: &egui::Context, app_state: &mut AppState, now: f64) {
    let snapshot = app_state.session.snapshot(now);

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(48.0);
        ui.columns(3, |columns| {
            columns[0].vertical_centered(|ui| {
                if render_machine(ui, &snapshot) {
                    app_state.draw(now);
                }
            });
            columns[1].vertical_centered(|ui| {
                if let Some(item) = &snapshot.selection {
                    render_detail(ui, item);
                }
            });
            columns[2].vertical_centered(|ui| {
                if let Some(id) = render_slot_grid(ui, app_state, &snapshot) {
                    app_state.inspect(id);
                }
            });
        });
    });
}

/// Paint the machine. Returns true when it was clicked while not empty.
fn render_machine(ui: &mut egui::Ui, snapshot: &SessionSnapshot) -> bool {
    let sense = if snapshot.exhausted {
        egui::Sense::hover()
    } else {
        egui::Sense::click()
    };
    let (outer, response) = ui.allocate_exact_size(MACHINE_SIZE, sense);

    let scale = ui.ctx().animate_value_with_time(
        response.id.with("stretch"),
        if snapshot.stretching { STRETCH_SCALE } else { 1.0 },
        0.2,
    );
    let rect = egui::Rect::from_center_size(
        outer.center(),
        egui::vec2(outer.width(), outer.height() * scale),
    );

    let alpha = if snapshot.exhausted { 0.5 } else { 1.0 };
    let tint = |color: egui::Color32| color.gamma_multiply(alpha);
    let painter = ui.painter();

    // Globe with a few capsules left inside
    let globe_radius = rect.width() * 0.42;
    let globe_center = egui::pos2(rect.center().x, rect.top() + globe_radius + 4.0);
    painter.circle(
        globe_center,
        globe_radius,
        tint(egui::Color32::from_rgb(224, 242, 254)),
        egui::Stroke::new(3.0, tint(egui::Color32::from_gray(40))),
    );
    let shown = snapshot.pool_len.min(9);
    for i in 0..shown {
        let angle = i as f32 * 2.4;
        let distance = globe_radius * 0.25 + (i as f32 * 7.0) % (globe_radius * 0.5);
        let center = globe_center + egui::vec2(angle.cos(), angle.sin().abs()) * distance;
        painter.circle_filled(center, 16.0, tint(capsule_color(i as u32 + 1)));
    }

    // Body, dial and chute
    let body = egui::Rect::from_min_max(
        egui::pos2(rect.left() + 20.0, globe_center.y + globe_radius - 8.0),
        egui::pos2(rect.right() - 20.0, rect.bottom()),
    );
    painter.rect_filled(body, 12.0, tint(egui::Color32::from_rgb(220, 38, 38)));
    painter.circle_filled(
        egui::pos2(body.center().x, body.top() + body.height() * 0.35),
        22.0,
        tint(egui::Color32::from_gray(240)),
    );
    let chute = egui::Rect::from_center_size(
        egui::pos2(body.center().x, body.bottom() - body.height() * 0.22),
        egui::vec2(56.0, 32.0),
    );
    painter.rect_filled(chute, 6.0, tint(egui::Color32::from_gray(30)));

    let response = if snapshot.exhausted {
        response.on_hover_cursor(egui::CursorIcon::NotAllowed)
    } else {
        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    };
    response.clicked()
}

/// Render the current item: image, title with link, description.
fn render_detail(ui: &mut egui::Ui, item: &Item) {
    ui.set_max_width(448.0);

    ui.horizontal(|ui| {
        let (image_rect, image_response) = ui.allocate_exact_size(
            egui::vec2(DETAIL_IMAGE_SIZE, DETAIL_IMAGE_SIZE),
            egui::Sense::hover(),
        );
        paint_capsule(ui.painter(), image_rect, item, 12.0, 1.0);
        image_response.on_hover_text(&item.image);

        ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(&item.title).size(48.0).strong());
                ui.hyperlink_to(egui::RichText::new("🔗").size(24.0), &item.url);
            });
        });
    });

    ui.add_space(16.0);
    ui.label(egui::RichText::new(&item.description).color(egui::Color32::from_gray(75)));
}

/// Render the slot grid. Returns the id of a filled slot that was clicked.
fn render_slot_grid(
    ui: &mut egui::Ui,
    app_state: &AppState,
    snapshot: &SessionSnapshot,
) -> Option<u32> {
    let grid = app_state.session.grid();
    let mut clicked = None;

    egui::Grid::new("slot_grid")
        .spacing(egui::vec2(SLOT_GAP, SLOT_GAP))
        .show(ui, |ui| {
            for row in grid.rows_of_slots() {
                for id in row {
                    if render_slot(ui, snapshot.filled.get(&id).map(|item| item.as_ref())) {
                        clicked = Some(id);
                    }
                }
                ui.end_row();
            }
        });

    clicked
}

/// Paint one slot. Returns true when a filled slot is clicked.
fn render_slot(ui: &mut egui::Ui, item: Option<&Item>) -> bool {
    let rounding = SLOT_SIZE.x / 2.0;

    let Some(item) = item else {
        let (rect, _) = ui.allocate_exact_size(SLOT_SIZE, egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, rounding, egui::Color32::from_gray(248));
        return false;
    };

    let (rect, response) = ui.allocate_exact_size(SLOT_SIZE, egui::Sense::click());
    let alpha = if response.hovered() { 0.8 } else { 1.0 };
    paint_capsule(ui.painter(), rect, item, rounding, alpha);

    response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(&item.title)
        .clicked()
}

/// Stand-in for the item image: a coloured capsule with the title's initial.
fn paint_capsule(
    painter: &egui::Painter,
    rect: egui::Rect,
    item: &Item,
    rounding: f32,
    alpha: f32,
) {
    let color = capsule_color(item.id).gamma_multiply(alpha);
    painter.rect_filled(rect, rounding, color);

    let lower = egui::Rect::from_min_max(egui::pos2(rect.left(), rect.center().y), rect.max);
    painter.rect_filled(
        lower,
        egui::Rounding {
            nw: 0.0,
            ne: 0.0,
            sw: rounding,
            se: rounding,
        },
        egui::Color32::from_white_alpha(90).gamma_multiply(alpha),
    );

    let initial = item.title.chars().next().unwrap_or('?').to_string();
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(rect.height() * 0.3),
        egui::Color32::WHITE.gamma_multiply(alpha),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capsule_color_is_stable() {
        assert_eq!(capsule_color(3), capsule_color(3));
        assert_eq!(capsule_color(1), capsule_color(1 + CAPSULE_COLORS.len() as u32));
    }
}
