use eyre::Result;
use std::path::{Path, PathBuf};
use stormprep_lib::config::{Config, OutputConfig};
use tempfile::TempDir;

/// Creates a temp dir holding a manifest file with the given contents and an
/// (initially absent) output directory path.
pub fn setup_test_environment(manifest_contents: &str) -> Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;

    let manifest_path = temp_dir.path().join("files.txt");
    std::fs::write(&manifest_path, manifest_contents)?;

    let output_dir = temp_dir.path().join("out");

    Ok((temp_dir, manifest_path, output_dir))
}

pub fn write_test_config(
    dir: &Path,
    base_url: &str,
    manifest_path: &Path,
    output_dir: &Path,
) -> Result<PathBuf> {
    let config = Config {
        base_url: base_url.to_string(),
        manifest_path: manifest_path.to_path_buf(),
        skip_blank_lines: false,
        output: OutputConfig {
            path: output_dir.to_path_buf(),
        },
    };

    let config_path = dir.join("config.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    Ok(config_path)
}
