use eframe::egui::{self, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::lookup::{PickerSection, PICKER_COLUMNS};
use crate::data::model::Dataset;
use crate::state::{options, AppState, Command, Dimension, ViewState};

// ---------------------------------------------------------------------------
// Picker view: two dropdowns and the per-section results
// ---------------------------------------------------------------------------

pub fn picker_view(ui: &mut Ui, state: &AppState, commands: &mut Vec<Command>) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No dataset loaded  (File → Open…)");
        });
        return;
    };

    ui.horizontal_top(|ui: &mut Ui| {
        for dimension in Dimension::ALL {
            dropdown(ui, dataset, &state.view, dimension, commands);
            ui.add_space(12.0);
        }
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, section) in state.results.iter().enumerate() {
                ui.heading(&section.title);
                results_table(ui, idx, section);
                ui.add_space(10.0);
            }
        });
}

fn dropdown(
    ui: &mut Ui,
    dataset: &Dataset,
    view: &ViewState,
    dimension: Dimension,
    commands: &mut Vec<Command>,
) {
    ui.vertical(|ui: &mut Ui| {
        let label = format!("{}  ⏷", view.dropdown_label(dimension));
        if ui
            .selectable_label(view.is_dropdown_open(dimension), label)
            .clicked()
        {
            commands.push(Command::ToggleDropdown(dimension));
        }

        if view.is_dropdown_open(dimension) {
            egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
                for choice in options(dimension, dataset) {
                    if ui.selectable_label(false, choice.label()).clicked() {
                        commands.push(Command::SelectOption(choice));
                    }
                }
            });
        }
    });
}

fn results_table(ui: &mut Ui, idx: usize, section: &PickerSection) {
    TableBuilder::new(ui)
        .id_salt(("picker_results", idx))
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(240.0))
        .column(Column::remainder().at_least(140.0))
        .header(22.0, |mut header| {
            for title in PICKER_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for row in &section.rows {
                body.row(22.0, |mut table_row| {
                    table_row.col(|ui: &mut Ui| {
                        ui.label(&row.service);
                    });
                    table_row.col(|ui: &mut Ui| super::rating_cell(ui, &row.cell));
                });
            }
        });
}
