use eframe::egui::{RichText, Ui};

use crate::data::lookup::RatingCell;

pub mod matrix;
pub mod panels;
pub mod picker;

/// Legend text on a background tinted by the rating's severity.
pub fn rating_cell(ui: &mut Ui, cell: &RatingCell) {
    ui.painter()
        .rect_filled(ui.max_rect(), 0.0, cell.severity.fill());
    ui.label(RichText::new(&cell.label).color(cell.severity.text_color()));
}
