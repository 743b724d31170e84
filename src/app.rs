use std::path::Path;

use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{matrix, panels, picker};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LosViewerApp {
    pub state: AppState,
}

impl LosViewerApp {
    pub fn new(dataset_path: &Path) -> Self {
        let mut state = AppState::default();
        panels::load_dataset(&mut state, dataset_path);
        Self { state }
    }
}

impl eframe::App for LosViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Widgets only record commands; they are applied once the frame is drawn.
        let mut commands = Vec::new();

        // ---- Top panel: menu bar + tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
            panels::tab_strip(ui, &self.state.view, &mut commands);
        });

        // ---- Central panel: the active view ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view.tab {
            Tab::Picker => picker::picker_view(ui, &self.state, &mut commands),
            Tab::Matrix => matrix::matrix_view(ui, &self.state, &mut commands),
        });

        for command in commands {
            self.state.apply(command);
        }
    }
}
