use signer_core::viewport::{EventOutcome, PanMode, RenderDirective, ViewportEvent};

use crate::app::SignerApp;
use crate::input::{pointer_events, wheel_events, PointerGesture};
use crate::session::ViewerSession;
use crate::state::UiState;

const GRID_STROKE: egui::Stroke = egui::Stroke {
    width: 1.0,
    color: egui::Color32::RED,
};

pub fn show(ctx: &egui::Context, app: &mut SignerApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let Some(session) = app.session.as_mut() else {
            show_placeholder(ui);
            return;
        };

        session
            .controller
            .set_viewport_size(f64::from(rect.width()), f64::from(rect.height()));

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        let pointer = response.hover_pos().map(|p| p - rect.min);

        for event in collect_events(ui, &response, rect, session, pointer) {
            apply_event(session, &mut app.ui_state, event);
        }
        if response.drag_stopped_by(egui::PointerButton::Middle) {
            session.controller.pan_end();
        }

        app.ui_state.hover = pointer.map(|p| (f64::from(p.x), f64::from(p.y)));
        app.ui_state.hover_point = app
            .ui_state
            .hover
            .and_then(|(x, y)| session.controller.image_point_at(x, y));

        let directive = session.controller.render();
        let painter = ui.painter_at(rect);
        draw_image(&painter, session, &directive, rect);
        draw_grid(&painter, &directive, rect);
        if let Some(point) = app.ui_state.last_stored {
            draw_marker(&painter, session, point, rect);
        }

        let panning = matches!(session.controller.mode(), PanMode::Panning { .. })
            && response.dragged_by(egui::PointerButton::Middle);
        if panning {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    });
}

/// Gather this frame's pointer input as viewport events.
fn collect_events(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
    session: &mut ViewerSession,
    pointer: Option<egui::Vec2>,
) -> Vec<ViewportEvent> {
    let mut events = Vec::new();

    if let Some(p) = pointer.filter(|_| response.hovered()) {
        let unit = session.controller.scroll_unit();
        events.extend(wheel_events(ui, p, &mut session.wheel, unit, session.zoom_step));
    }

    if let Some(pos) = response.interact_pointer_pos() {
        let gesture = PointerGesture {
            pos: pos - rect.min,
            pan_started: response.drag_started_by(egui::PointerButton::Middle),
            panning: response.dragged_by(egui::PointerButton::Middle),
            clicked: response.clicked(),
        };
        events.extend(pointer_events(gesture));
    }
    events
}

fn apply_event(session: &mut ViewerSession, ui_state: &mut UiState, event: ViewportEvent) {
    match session.controller.handle(event, &mut session.sink) {
        Ok(EventOutcome::Stored(point)) => {
            ui_state.last_stored = Some(point);
            ui_state.add_log(format!(
                "Stored {point} in {}",
                session.sink.path().display()
            ));
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!("failed to store coordinate: {e}");
            ui_state.add_log(format!("ERROR: {e}"));
        }
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn to_screen(rect: egui::Rect, directive: &RenderDirective, canvas: (f64, f64)) -> egui::Pos2 {
    let (ox, oy) = directive.scroll_offset;
    rect.min + egui::vec2((canvas.0 - ox) as f32, (canvas.1 - oy) as f32)
}

fn draw_image(
    painter: &egui::Painter,
    session: &ViewerSession,
    directive: &RenderDirective,
    rect: egui::Rect,
) {
    let (ox, oy) = directive.image_origin();
    let min = rect.min + egui::vec2(ox as f32, oy as f32);
    let size = egui::vec2(directive.scaled_width as f32, directive.scaled_height as f32);
    painter.image(
        session.texture.id(),
        egui::Rect::from_min_size(min, size),
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_grid(painter: &egui::Painter, directive: &RenderDirective, rect: egui::Rect) {
    for line in &directive.grid {
        painter.line_segment(
            [
                to_screen(rect, directive, line.start),
                to_screen(rect, directive, line.end),
            ],
            GRID_STROKE,
        );
    }
}

/// Ring around the centre of the last stored pixel.
fn draw_marker(
    painter: &egui::Painter,
    session: &ViewerSession,
    point: signer_core::coords::ImagePoint,
    rect: egui::Rect,
) {
    let scale = session.controller.scale();
    let cx = (f64::from(point.x) + 0.5) * scale;
    let cy = (f64::from(point.y) + 0.5) * scale;
    let (vx, vy) = session.controller.canvas_to_viewport(cx, cy);
    let centre = rect.min + egui::vec2(vx as f32, vy as f32);
    painter.circle_stroke(centre, 6.0, egui::Stroke::new(2.0, egui::Color32::YELLOW));
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open a certificate template to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
