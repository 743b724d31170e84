use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader::load_file;
use crate::export::write_document;
use crate::state::{AppState, Command, Tab, ViewState};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = state.dataset.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export HTML…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} sections, {} services, {} data levels",
                ds.sections.len(),
                ds.service_count(),
                ds.level_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

pub fn tab_strip(ui: &mut Ui, view: &ViewState, commands: &mut Vec<Command>) {
    ui.horizontal(|ui: &mut Ui| {
        for tab in Tab::ALL {
            let title = RichText::new(tab.title()).strong();
            if ui
                .selectable_label(view.is_panel_visible(tab), title)
                .clicked()
            {
                commands.push(Command::SelectTab(tab));
            }
        }
    });
    ui.add_space(2.0);
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn load_dataset(state: &mut AppState, path: &Path) {
    match load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} sections / {} services from {}",
                dataset.sections.len(),
                dataset.service_count(),
                path.display()
            );
            state.set_dataset(dataset);
        }
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            state.set_load_error(&e);
        }
    }
}

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open Level of Service dataset")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        load_dataset(state, &path);
    }
}

pub fn export_dialog(state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };
    let file = rfd::FileDialog::new()
        .set_title("Export as HTML")
        .set_file_name("levels-of-service.html")
        .add_filter("HTML", &["html", "htm"])
        .save_file();

    if let Some(path) = file {
        match write_document(&path, dataset, &state.view, &state.results) {
            Ok(()) => {
                log::info!("Exported view to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
