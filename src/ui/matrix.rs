use eframe::egui::{Color32, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::lookup::{service_matrix, MatrixTable};
use crate::state::{AppState, Command, ServiceId};

// ---------------------------------------------------------------------------
// Matrix view: every service, each with a collapsible rating table
// ---------------------------------------------------------------------------

pub fn matrix_view(ui: &mut Ui, state: &AppState, commands: &mut Vec<Command>) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No dataset loaded  (File → Open…)");
        });
        return;
    };
    let view = &state.view;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (section_idx, section) in dataset.sections.iter().enumerate() {
                if section_idx > 0 {
                    ui.separator();
                }
                ui.heading(&section.title);

                for (service_idx, service) in section.services.iter().enumerate() {
                    let id = ServiceId {
                        section: section_idx,
                        service: service_idx,
                    };
                    let expanded = view.is_service_expanded(id);

                    ui.horizontal(|ui: &mut Ui| {
                        if ui
                            .selectable_label(expanded, view.service_toggle_label(id))
                            .clicked()
                        {
                            commands.push(Command::ToggleService(id));
                        }
                        ui.strong(&service.name);
                    });

                    if expanded {
                        match service_matrix(dataset, service) {
                            Ok(table) => matrix_table(ui, id, &table),
                            Err(e) => {
                                ui.colored_label(Color32::RED, e.to_string());
                            }
                        }
                        ui.add_space(6.0);
                    }
                }
            }
        });
}

fn matrix_table(ui: &mut Ui, id: ServiceId, table: &MatrixTable) {
    let level_columns = table.header.len().saturating_sub(1);

    TableBuilder::new(ui)
        .id_salt(("matrix", id.section, id.service))
        .striped(false)
        .vscroll(false)
        .column(Column::auto().at_least(80.0))
        .columns(Column::auto().at_least(120.0), level_columns)
        .header(22.0, |mut header| {
            for heading in &table.header {
                header.col(|ui: &mut Ui| {
                    ui.strong(heading);
                });
            }
        })
        .body(|mut body| {
            for row in &table.rows {
                body.row(22.0, |mut table_row| {
                    table_row.col(|ui: &mut Ui| {
                        ui.strong(row.file_type.label());
                    });
                    for cell in &row.cells {
                        table_row.col(|ui: &mut Ui| super::rating_cell(ui, cell));
                    }
                });
            }
        });
}
