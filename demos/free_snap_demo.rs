#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use egui_snap_panels::{PanelId, SnapLayout};

const TITLE_HEIGHT: f32 = 24.0;

struct App {
    layout: SnapLayout,
}

impl Default for App {
    fn default() -> Self {
        Self {
            layout: SnapLayout::new(),
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("egui_snap_panels demo"),
        ..Default::default()
    };

    eframe::run_native(
        "egui_snap_panels demo",
        options,
        Box::new(|_cc| Ok(Box::new(App::default()))),
    )
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let viewport = ui.max_rect();

            ui.horizontal(|ui| {
                if ui.button("Spawn panel").clicked() {
                    self.layout.create_panel(viewport);
                }
                ui.add(
                    egui::Label::new(
                        "Drag a title bar near a screen edge or another panel's edge to snap; \
                         pick a snapped panel back up to unsnap it.",
                    )
                    .selectable(false),
                );
            });

            let pointer = ctx.input(|i| i.pointer.latest_pos());
            let panels = self.layout.panels().to_vec();
            let mut close_clicked: Option<PanelId> = None;

            for panel in &panels {
                let title_rect = egui::Rect::from_min_size(
                    panel.rect.min,
                    egui::Vec2::new(panel.rect.width(), TITLE_HEIGHT),
                );

                {
                    let painter = ui.painter();
                    painter.rect_filled(panel.rect, 4.0, panel.color.gamma_multiply(0.35));
                    painter.rect_stroke(
                        panel.rect,
                        4.0,
                        ui.visuals().widgets.noninteractive.bg_stroke,
                        egui::StrokeKind::Inside,
                    );
                    painter.rect_filled(title_rect, 4.0, panel.color);

                    let label = if panel.snapped {
                        format!("{:?} (snapped)", panel.id)
                    } else {
                        format!("{:?}", panel.id)
                    };
                    painter.text(
                        title_rect.left_center() + egui::Vec2::new(8.0, 0.0),
                        egui::Align2::LEFT_CENTER,
                        label,
                        egui::FontId::proportional(13.0),
                        ui.visuals().strong_text_color(),
                    );
                }

                let title_resp = ui.interact(
                    title_rect,
                    ui.id().with((panel.id, "snap_panel_title")),
                    egui::Sense::click_and_drag(),
                );
                if title_resp.drag_started()
                    && let Some(pointer) = pointer
                {
                    self.layout.begin_drag(panel.id, pointer);
                }
                if title_resp.dragged()
                    && let Some(pointer) = pointer
                {
                    self.layout.drag_move(panel.id, pointer, viewport);
                }
                if title_resp.drag_stopped() {
                    self.layout.release(viewport);
                }

                let close_rect = egui::Rect::from_center_size(
                    title_rect.right_center() - egui::Vec2::new(14.0, 0.0),
                    egui::Vec2::splat(16.0),
                );
                let close_resp = ui.interact(
                    close_rect,
                    ui.id().with((panel.id, "snap_panel_close")),
                    egui::Sense::click(),
                );
                ui.painter().text(
                    close_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "✕",
                    egui::FontId::proportional(12.0),
                    ui.visuals().strong_text_color(),
                );
                if close_resp.clicked() {
                    close_clicked = Some(panel.id);
                }
            }

            if let Some(decision) = self.layout.preview() {
                let stroke = ui.visuals().selection.stroke;
                let fill = stroke.color.gamma_multiply(0.25);
                ui.painter()
                    .rect(decision.preview, 1.0, fill, stroke, egui::StrokeKind::Inside);
            }

            if let Some(id) = close_clicked {
                self.layout.close_panel(id);
            }
        });
    }
}
