use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Rating;

// ---------------------------------------------------------------------------
// Severity classes: rating → style category
// ---------------------------------------------------------------------------

/// Fixed style category for a rating, used by both the picker results
/// and the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Danger,
    Success,
    Info,
    Warning,
}

impl Severity {
    /// Indexed by rating.
    pub const ALL: [Severity; 4] = [
        Severity::Danger,
        Severity::Success,
        Severity::Info,
        Severity::Warning,
    ];

    /// `None` for ratings outside `0..=3`.
    pub fn from_rating(rating: Rating) -> Option<Self> {
        Self::ALL.get(rating as usize).copied()
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Severity::Danger => "danger",
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }

    /// Table cell class, e.g. `table-success`.
    pub fn css_class(self) -> String {
        format!("table-{}", self.class_name())
    }

    fn hue(self) -> f32 {
        match self {
            Severity::Danger => 0.0,
            Severity::Success => 130.0,
            Severity::Info => 190.0,
            Severity::Warning => 45.0,
        }
    }

    /// Pale background for table cells.
    pub fn fill(self) -> Color32 {
        hsl_to_color32(self.hue(), 0.65, 0.85)
    }

    /// Dark foreground readable on top of [`Severity::fill`].
    pub fn text_color(self) -> Color32 {
        hsl_to_color32(self.hue(), 0.70, 0.22)
    }
}

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}
