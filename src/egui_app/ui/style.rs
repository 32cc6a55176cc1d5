use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::egui_app::state::StatusTone;

/// Colors shared by the form, chart and status bar.
#[derive(Clone, Copy)]
pub struct Palette {
    pub surface: Color32,
    pub panel: Color32,
    pub control: Color32,
    pub stripe: Color32,
    pub outline: Color32,
    pub axis: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub accent: Color32,
    pub warning: Color32,
}

pub fn palette() -> Palette {
    Palette {
        surface: Color32::from_rgb(14, 17, 23),
        panel: Color32::from_rgb(24, 28, 36),
        control: Color32::from_rgb(38, 44, 56),
        stripe: Color32::from_rgb(30, 35, 44),
        outline: Color32::from_rgb(52, 60, 74),
        axis: Color32::from_rgb(96, 106, 122),
        text: Color32::from_rgb(222, 226, 232),
        text_dim: Color32::from_rgb(150, 158, 170),
        accent: Color32::from_rgb(255, 75, 75),
        warning: Color32::from_rgb(230, 160, 60),
    }
}

/// Dark theme with square widgets.
pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.panel_fill = palette.panel;
    visuals.window_fill = palette.surface;
    visuals.extreme_bg_color = palette.surface;
    visuals.faint_bg_color = palette.stripe;
    visuals.override_text_color = Some(palette.text);
    visuals.warn_fg_color = palette.warning;
    visuals.error_fg_color = palette.accent;
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
    style_widget(&mut visuals.widgets.noninteractive, palette.panel, palette);
    style_widget(&mut visuals.widgets.inactive, palette.control, palette);
    style_widget(&mut visuals.widgets.hovered, palette.outline, palette);
    style_widget(&mut visuals.widgets.active, palette.accent, palette);
    style_widget(&mut visuals.widgets.open, palette.control, palette);
}

fn style_widget(widget: &mut WidgetVisuals, fill: Color32, palette: Palette) {
    widget.corner_radius = CornerRadius::ZERO;
    widget.bg_fill = fill;
    widget.weak_bg_fill = fill;
    widget.bg_stroke = Stroke::new(1.0, palette.outline);
    widget.fg_stroke = Stroke::new(1.0, palette.text);
}

const CATEGORY_COLORS: [Color32; 4] = [
    Color32::from_rgb(76, 175, 120),
    Color32::from_rgb(222, 190, 80),
    Color32::from_rgb(236, 130, 60),
    Color32::from_rgb(214, 60, 60),
];

/// Bar fill per risk band, green through red.
pub fn category_color(index: usize) -> Color32 {
    CATEGORY_COLORS[index.min(CATEGORY_COLORS.len() - 1)]
}

/// Badge label and color for a status tone.
pub fn status_badge(tone: StatusTone) -> (&'static str, Color32) {
    match tone {
        StatusTone::Idle => ("Ready", Color32::from_rgb(70, 76, 88)),
        StatusTone::Info => ("Done", CATEGORY_COLORS[0]),
        StatusTone::Error => ("Error", palette().accent),
    }
}
