use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::Dataset;
use super::validate::validate;

/// Where the dataset is looked up at startup, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "static/LoSDictionary.json";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and validate a Level of Service dataset.  Dispatch by extension.
///
/// Only `.json` is supported:
///
/// ```json
/// {
///   "legend":  ["Not supported", "Full support", "Partial support", "Planned"],
///   "indices": ["level 0", "level 1", ...],
///   "sections": [
///     { "title": "Validation",
///       "services": [
///         { "service": "Metadata Compliance Checker",
///           "NetCDF": [1, 1, ...], "HDF4": [...], "HDF5": [...],
///           "ASCII": [...], "Binary": [...] }
///       ] }
///   ]
/// }
/// ```
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_dataset(&text)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Parse and validate a dataset from JSON text.
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let dataset: Dataset = serde_json::from_str(text).context("parsing dataset JSON")?;
    validate(&dataset).context("validating dataset")?;
    Ok(dataset)
}
