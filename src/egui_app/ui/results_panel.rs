use eframe::egui::{
    self, Align2, FontId, Pos2, Rect, RichText, Sense, Stroke, epaint::CornerRadius, pos2, vec2,
};

use super::{APP_TITLE, style};
use crate::egui_app::state::ResultsState;
use crate::predictor::PredictionReport;

const CHART_HEIGHT: f32 = 240.0;
const CHART_MAX_WIDTH: f32 = 720.0;
const AXIS_LABEL_BAND: f32 = 22.0;
const VALUE_LABEL_BAND: f32 = 18.0;
/// Fraction of each slot taken by its bar.
const BAR_FILL: f32 = 0.6;

pub(super) fn render(ui: &mut egui::Ui, results: &ResultsState) {
    ui.add_space(6.0);
    ui.heading(RichText::new(APP_TITLE).size(24.0));
    ui.add_space(10.0);
    match results {
        ResultsState::Empty => {
            ui.label(
                RichText::new("Fill in the applicant details and press Predict Credit Approval.")
                    .color(style::palette().text_dim),
            );
        }
        ResultsState::Failed(message) => {
            ui.colored_label(style::palette().warning, message);
        }
        ResultsState::Ready(report) => {
            egui::ScrollArea::vertical()
                .id_salt("results_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| render_report(ui, report));
        }
    }
}

fn render_report(ui: &mut egui::Ui, report: &PredictionReport) {
    ui.heading("Prediction Results");
    render_bar_chart(ui, report);
    ui.add_space(16.0);

    ui.heading("Detailed Probability Breakdown");
    ui.add_space(6.0);
    ui.columns(report.categories.len(), |columns| {
        for (column, entry) in columns.iter_mut().zip(&report.categories) {
            column.label(RichText::new(entry.category.label()).color(style::palette().text_dim));
            column.label(RichText::new(&entry.percent).size(26.0).strong());
        }
    });
    ui.add_space(16.0);

    ui.heading("Input Data");
    ui.add_space(6.0);
    egui::Grid::new("input_data_grid")
        .num_columns(2)
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for entry in &report.submitted {
                ui.label(&entry.label).on_hover_text(&entry.feature);
                ui.label(&entry.value);
                ui.end_row();
            }
        });
}

fn render_bar_chart(ui: &mut egui::Ui, report: &PredictionReport) {
    let palette = style::palette();
    let width = ui.available_width().min(CHART_MAX_WIDTH);
    let (rect, _) = ui.allocate_exact_size(vec2(width, CHART_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::ZERO, palette.surface);

    let plot = Rect::from_min_max(
        rect.min + vec2(8.0, VALUE_LABEL_BAND),
        rect.max - vec2(8.0, AXIS_LABEL_BAND),
    );
    let font = FontId::proportional(12.0);
    for (index, (bar, entry)) in bar_rects(plot, &report.probabilities)
        .into_iter()
        .zip(&report.categories)
        .enumerate()
    {
        painter.rect_filled(bar, CornerRadius::ZERO, style::category_color(index));
        painter.text(
            bar.center_top() - vec2(0.0, 2.0),
            Align2::CENTER_BOTTOM,
            &entry.percent,
            font.clone(),
            palette.text,
        );
        painter.text(
            pos2(bar.center().x, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            entry.category.label(),
            font.clone(),
            palette.text_dim,
        );
    }
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.0, palette.axis),
    );
}

/// Bar geometry for each probability; heights are clamped to the plot.
fn bar_rects(plot: Rect, probabilities: &[f64]) -> Vec<Rect> {
    if probabilities.is_empty() {
        return Vec::new();
    }
    let slot = plot.width() / probabilities.len() as f32;
    let bar_width = slot * BAR_FILL;
    probabilities
        .iter()
        .enumerate()
        .map(|(index, &probability)| {
            let height = plot.height() * probability.clamp(0.0, 1.0) as f32;
            let left = plot.left() + slot * index as f32 + (slot - bar_width) / 2.0;
            Rect::from_min_max(
                Pos2::new(left, plot.bottom() - height),
                Pos2::new(left + bar_width, plot.bottom()),
            )
        })
        .collect()
}
