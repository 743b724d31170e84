use thiserror::Error;

use super::model::{Dataset, FileType, Rating, Service};
use crate::severity::Severity;

// ---------------------------------------------------------------------------
// Rendered cells
// ---------------------------------------------------------------------------

/// A rating resolved to its legend text and severity class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingCell {
    pub rating: Rating,
    pub label: String,
    pub severity: Severity,
}

/// Raised when a dataset that skipped validation is indexed out of bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("{service}: no {file_type} rating for data level {level}")]
    MissingLevel {
        service: String,
        file_type: FileType,
        level: usize,
    },

    #[error("rating {0} has no legend entry or severity class")]
    UnknownRating(Rating),
}

fn rating_cell(dataset: &Dataset, rating: Rating) -> Result<RatingCell, LookupError> {
    let severity = Severity::from_rating(rating).ok_or(LookupError::UnknownRating(rating))?;
    let label = dataset
        .legend_label(rating)
        .ok_or(LookupError::UnknownRating(rating))?;
    Ok(RatingCell {
        rating,
        label: label.to_string(),
        severity,
    })
}

fn lookup(
    dataset: &Dataset,
    service: &Service,
    file_type: FileType,
    level: usize,
) -> Result<RatingCell, LookupError> {
    let rating = service
        .rating(file_type, level)
        .ok_or_else(|| LookupError::MissingLevel {
            service: service.name.clone(),
            file_type,
            level,
        })?;
    rating_cell(dataset, rating)
}

// ---------------------------------------------------------------------------
// Picker: (file type, data level) → one table per section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRow {
    pub service: String,
    pub cell: RatingCell,
}

/// Two-column (Service, Level) result table for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSection {
    pub title: String,
    pub rows: Vec<PickerRow>,
}

pub const PICKER_COLUMNS: [&str; 2] = ["Service", "Level"];

/// Every service's rating for the chosen file type and data level,
/// grouped by section in dataset order.
pub fn picker_results(
    dataset: &Dataset,
    file_type: FileType,
    level: usize,
) -> Result<Vec<PickerSection>, LookupError> {
    dataset
        .sections
        .iter()
        .map(|section| {
            let rows = section
                .services
                .iter()
                .map(|service| {
                    Ok(PickerRow {
                        service: service.name.clone(),
                        cell: lookup(dataset, service, file_type, level)?,
                    })
                })
                .collect::<Result<Vec<_>, LookupError>>()?;
            Ok(PickerSection {
                title: section.title.clone(),
                rows,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Matrix: service → file type × data level table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    pub file_type: FileType,
    pub cells: Vec<RatingCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixTable {
    /// "File Type" followed by one capitalized label per data level.
    pub header: Vec<String>,
    pub rows: Vec<MatrixRow>,
}

pub fn service_matrix(dataset: &Dataset, service: &Service) -> Result<MatrixTable, LookupError> {
    let header = std::iter::once("File Type".to_string())
        .chain((0..dataset.level_count()).filter_map(|level| dataset.index_header(level)))
        .collect();

    let rows = FileType::ALL
        .into_iter()
        .map(|file_type| {
            let cells = (0..dataset.level_count())
                .map(|level| lookup(dataset, service, file_type, level))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(MatrixRow { file_type, cells })
        })
        .collect::<Result<Vec<_>, LookupError>>()?;

    Ok(MatrixTable { header, rows })
}
