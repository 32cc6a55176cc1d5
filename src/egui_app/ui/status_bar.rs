use eframe::egui::{self, RichText};

use super::style;
use crate::egui_app::state::StatusBarState;

pub(super) fn render(ctx: &egui::Context, status: &StatusBarState) {
    let palette = style::palette();
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let (rect, _) = ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 7.0, status.badge_color);
            ui.label(RichText::new(&status.badge_label).color(palette.text));
            ui.separator();
            ui.label(&status.text).on_hover_text(status.log_text());
        });
    });
}
