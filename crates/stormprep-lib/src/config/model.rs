use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Mirror of the NOAA storm-events CSV archive.
pub const DEFAULT_BASE_URL: &str =
    "https://www1.ncdc.noaa.gov/pub/data/swdi/stormevents/csvfiles/";
pub const DEFAULT_MANIFEST_PATH: &str = "noaa_files_list.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "raw-data/noaa_files";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Remote prefix; a filename from the manifest is appended verbatim to
    /// form the download URL.
    pub base_url: String,
    pub manifest_path: PathBuf,
    /// When true, empty manifest lines (e.g. a trailing newline) are dropped
    /// instead of being treated as empty filenames.
    pub skip_blank_lines: bool,
    pub output: OutputConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            skip_blank_lines: false,
            output: OutputConfig {
                path: PathBuf::from(DEFAULT_OUTPUT_DIR),
            },
        }
    }
}
