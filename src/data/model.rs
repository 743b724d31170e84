use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FileType – the fixed set of file formats rated per service
// ---------------------------------------------------------------------------

/// One of the five file formats a service is rated against.
/// The variant order is the row order of every matrix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileType {
    NetCdf,
    Hdf4,
    Hdf5,
    Ascii,
    Binary,
}

impl FileType {
    pub const ALL: [FileType; 5] = [
        FileType::NetCdf,
        FileType::Hdf4,
        FileType::Hdf5,
        FileType::Ascii,
        FileType::Binary,
    ];

    /// Label as it appears in the dataset JSON and in the UI.
    pub fn label(self) -> &'static str {
        match self {
            FileType::NetCdf => "NetCDF",
            FileType::Hdf4 => "HDF4",
            FileType::Hdf5 => "HDF5",
            FileType::Ascii => "ASCII",
            FileType::Binary => "Binary",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Level of Service rating; valid values are `0..=3`.
pub type Rating = u8;

// ---------------------------------------------------------------------------
// Service / Section / Dataset – the static lookup matrix
// ---------------------------------------------------------------------------

/// A single service with one rating per data level for every file type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "service")]
    pub name: String,
    #[serde(rename = "NetCDF")]
    pub netcdf: Vec<Rating>,
    #[serde(rename = "HDF4")]
    pub hdf4: Vec<Rating>,
    #[serde(rename = "HDF5")]
    pub hdf5: Vec<Rating>,
    #[serde(rename = "ASCII")]
    pub ascii: Vec<Rating>,
    #[serde(rename = "Binary")]
    pub binary: Vec<Rating>,
}

impl Service {
    /// Ratings for one file type, indexed by data level.
    pub fn ratings(&self, file_type: FileType) -> &[Rating] {
        match file_type {
            FileType::NetCdf => &self.netcdf,
            FileType::Hdf4 => &self.hdf4,
            FileType::Hdf5 => &self.hdf5,
            FileType::Ascii => &self.ascii,
            FileType::Binary => &self.binary,
        }
    }

    pub fn rating(&self, file_type: FileType, level: usize) -> Option<Rating> {
        self.ratings(file_type).get(level).copied()
    }

    /// Element id used for this service's matrix table.
    pub fn anchor(&self) -> String {
        self.name.split(' ').collect::<Vec<_>>().join("_")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub services: Vec<Service>,
}

/// The full Level of Service dataset, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// `legend[n]` describes rating `n`.
    pub legend: Vec<String>,
    /// Data level labels, one column per entry.
    pub indices: Vec<String>,
    pub sections: Vec<Section>,
}

impl Dataset {
    /// Number of data levels (columns of every rating array).
    pub fn level_count(&self) -> usize {
        self.indices.len()
    }

    pub fn service_count(&self) -> usize {
        self.sections.iter().map(|s| s.services.len()).sum()
    }

    pub fn legend_label(&self, rating: Rating) -> Option<&str> {
        self.legend.get(rating as usize).map(String::as_str)
    }

    /// Matrix column header for a data level: the index label with its
    /// first character upper-cased.
    pub fn index_header(&self, level: usize) -> Option<String> {
        self.indices.get(level).map(|label| capitalize(label))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
