use eframe::egui::{self, RichText};

use crate::egui_app::controller::AppController;
use crate::form::{ControlKind, FeatureValue, FormControl, ValueDomain};

const BUTTON_ROW_HEIGHT: f32 = 40.0;

pub(super) fn render(ui: &mut egui::Ui, controller: &mut AppController) {
    ui.add_space(6.0);
    ui.heading("Input Customer Details");
    ui.add_space(6.0);

    let mut submit = false;
    let mut reset = false;
    egui::ScrollArea::vertical()
        .id_salt("input_form_scroll")
        .max_height((ui.available_height() - BUTTON_ROW_HEIGHT).max(0.0))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("input_form_grid")
                .num_columns(2)
                .spacing([10.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    for control in controller.form_mut().controls_mut() {
                        ui.label(&control.label).on_hover_text(&control.feature);
                        render_control(ui, control);
                        ui.end_row();
                    }
                });
        });

    ui.separator();
    ui.horizontal(|ui| {
        if ui
            .button(RichText::new("Predict Credit Approval").strong())
            .clicked()
        {
            submit = true;
        }
        if ui.button("Reset").clicked() {
            reset = true;
        }
    });

    if submit {
        controller.submit();
    } else if reset {
        controller.reset_form();
    }
}

fn render_control(ui: &mut egui::Ui, control: &mut FormControl) {
    let domain = control.spec.domain;
    match domain {
        ValueDomain::Choices(choices) => {
            let mut selected = match control.value() {
                FeatureValue::Integer(value) => value,
                FeatureValue::Real(value) => value as i64,
            };
            egui::ComboBox::from_id_salt(&control.feature)
                .selected_text(choice_text(control.spec.kind, selected))
                .show_ui(ui, |ui| {
                    for &choice in choices {
                        ui.selectable_value(&mut selected, choice, choice_text(control.spec.kind, choice));
                    }
                });
            control.set_value(FeatureValue::Integer(selected));
        }
        ValueDomain::Real { .. } => {
            if let Some(value) = control.real_value_mut() {
                ui.add(egui::DragValue::new(value).speed(1.0).max_decimals(4));
            }
        }
    }
}

fn choice_text(kind: ControlKind, value: i64) -> String {
    match (kind, value) {
        (ControlKind::Flag, 0) => "0 (No)".to_string(),
        (ControlKind::Flag, 1) => "1 (Yes)".to_string(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_choices_are_annotated() {
        assert_eq!(choice_text(ControlKind::Flag, 0), "0 (No)");
        assert_eq!(choice_text(ControlKind::Flag, 1), "1 (Yes)");
        assert_eq!(choice_text(ControlKind::Education, 2), "2");
    }
}
