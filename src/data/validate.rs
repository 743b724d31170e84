use thiserror::Error;

use super::model::{Dataset, FileType, Rating};
use crate::severity::Severity;

/// Highest valid rating.
pub const MAX_RATING: Rating = 3;

/// Structural problems that make a dataset unusable for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("legend has {found} entries, expected {expected}")]
    LegendLength { expected: usize, found: usize },

    #[error("dataset defines no data levels")]
    NoIndices,

    #[error(
        "{section} / {service}: {file_type} has {found} ratings but there are {expected} data levels"
    )]
    RatingCount {
        section: String,
        service: String,
        file_type: FileType,
        expected: usize,
        found: usize,
    },

    #[error("{section} / {service}: {file_type}[{level}] = {rating} is outside 0..=3")]
    RatingOutOfRange {
        section: String,
        service: String,
        file_type: FileType,
        level: usize,
        rating: Rating,
    },
}

/// Check every invariant the lookup code relies on.
///
/// On success, for every service, file type and level `< indices.len()`,
/// the rating exists and indexes both `legend` and the severity table.
pub fn validate(dataset: &Dataset) -> Result<(), ValidationError> {
    if dataset.legend.len() != Severity::ALL.len() {
        return Err(ValidationError::LegendLength {
            expected: Severity::ALL.len(),
            found: dataset.legend.len(),
        });
    }
    if dataset.indices.is_empty() {
        return Err(ValidationError::NoIndices);
    }

    let expected = dataset.level_count();
    for section in &dataset.sections {
        for service in &section.services {
            for file_type in FileType::ALL {
                let ratings = service.ratings(file_type);
                if ratings.len() != expected {
                    return Err(ValidationError::RatingCount {
                        section: section.title.clone(),
                        service: service.name.clone(),
                        file_type,
                        expected,
                        found: ratings.len(),
                    });
                }
                if let Some((level, &rating)) =
                    ratings.iter().enumerate().find(|&(_, &r)| r > MAX_RATING)
                {
                    return Err(ValidationError::RatingOutOfRange {
                        section: section.title.clone(),
                        service: service.name.clone(),
                        file_type,
                        level,
                        rating,
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_dataset;

    #[test]
    fn sample_dataset_is_valid() {
        assert_eq!(validate(&sample_dataset()), Ok(()));
    }

    #[test]
    fn every_array_matches_index_count() {
        let ds = sample_dataset();
        for section in &ds.sections {
            for service in &section.services {
                for ft in FileType::ALL {
                    assert_eq!(service.ratings(ft).len(), ds.indices.len());
                    assert!(service.ratings(ft).iter().all(|&r| r <= MAX_RATING));
                }
            }
        }
    }

    #[test]
    fn short_rating_array_is_rejected() {
        let mut ds = sample_dataset();
        ds.sections[1].services[0].ascii.pop();
        assert_eq!(
            validate(&ds),
            Err(ValidationError::RatingCount {
                section: "Visualization".to_string(),
                service: "Image Server".to_string(),
                file_type: FileType::Ascii,
                expected: 5,
                found: 4,
            })
        );
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let mut ds = sample_dataset();
        ds.sections[0].services[1].hdf4[3] = 4;
        let err = validate(&ds).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation / Format <Checker>: HDF4[3] = 4 is outside 0..=3"
        );
    }

    #[test]
    fn legend_must_cover_every_rating() {
        let mut ds = sample_dataset();
        ds.legend.truncate(3);
        assert_eq!(
            validate(&ds),
            Err(ValidationError::LegendLength {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn empty_indices_are_rejected() {
        let mut ds = sample_dataset();
        ds.indices.clear();
        assert_eq!(validate(&ds), Err(ValidationError::NoIndices));
    }
}
