/// Data layer: core types, loading, validation, and lookup.
///
/// Architecture:
/// ```text
///  LoSDictionary.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ validate  │  array lengths, rating range, legend size
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  lookup   │  (file type, level) → per-section result rows,
///   └──────────┘  service → matrix table
/// ```

pub mod loader;
pub mod lookup;
pub mod model;
pub mod validate;

#[cfg(test)]
pub mod fixtures {
    use super::model::{Dataset, Section, Service};

    fn service(name: &str, ratings: [[u8; 5]; 5]) -> Service {
        let [netcdf, hdf4, hdf5, ascii, binary] = ratings;
        Service {
            name: name.to_string(),
            netcdf: netcdf.to_vec(),
            hdf4: hdf4.to_vec(),
            hdf5: hdf5.to_vec(),
            ascii: ascii.to_vec(),
            binary: binary.to_vec(),
        }
    }

    /// Two sections, three services, five data levels.
    /// `sections[0].services[0].HDF5[2] == 1`.
    pub fn sample_dataset() -> Dataset {
        Dataset {
            legend: vec![
                "Not supported".to_string(),
                "Full support".to_string(),
                "Partial support".to_string(),
                "Planned".to_string(),
            ],
            indices: (0..5).map(|i| format!("level {i}")).collect(),
            sections: vec![
                Section {
                    title: "Validation".to_string(),
                    services: vec![
                        service(
                            "Metadata Compliance Checker",
                            [
                                [1, 1, 1, 2, 3],
                                [0, 0, 2, 2, 3],
                                [0, 3, 1, 2, 2],
                                [0, 0, 0, 0, 0],
                                [0, 0, 0, 3, 3],
                            ],
                        ),
                        service(
                            "Format <Checker>",
                            [
                                [1, 1, 1, 1, 1],
                                [2, 2, 2, 2, 2],
                                [1, 1, 2, 2, 3],
                                [3, 3, 3, 3, 3],
                                [0, 0, 0, 0, 0],
                            ],
                        ),
                    ],
                },
                Section {
                    title: "Visualization".to_string(),
                    services: vec![service(
                        "Image Server",
                        [
                            [0, 1, 1, 1, 1],
                            [0, 0, 0, 2, 2],
                            [0, 2, 3, 1, 1],
                            [0, 0, 0, 0, 0],
                            [0, 0, 3, 3, 3],
                        ],
                    )],
                },
            ],
        }
    }
}
