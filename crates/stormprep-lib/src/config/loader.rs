use super::model::{DEFAULT_BASE_URL, DEFAULT_MANIFEST_PATH, DEFAULT_OUTPUT_DIR};
use super::Config;
use crate::error::StormPrepError;
use config::Config as ConfigBuilder;

/// Loads a configuration file, falling back to the built-in defaults for any
/// field the file does not set.
pub fn load_config(config_path: &str) -> Result<Config, StormPrepError> {
    let config_builder = ConfigBuilder::builder()
        .set_default("base_url", DEFAULT_BASE_URL)?
        .set_default("manifest_path", DEFAULT_MANIFEST_PATH)?
        .set_default("skip_blank_lines", false)?
        .set_default("output.path", DEFAULT_OUTPUT_DIR)?
        .add_source(config::File::with_name(config_path))
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("stormprep.yaml");
        std::fs::write(&config_path, "base_url: \"http://localhost:8080/\"\n").unwrap();

        let config = load_config(config_path.to_str().unwrap()).unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.manifest_path, PathBuf::from(DEFAULT_MANIFEST_PATH));
        assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(!config.skip_blank_lines);
    }

    #[test]
    fn full_file_overrides_every_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("stormprep.yaml");
        std::fs::write(
            &config_path,
            concat!(
                "base_url: \"http://mirror.example/csv/\"\n",
                "manifest_path: \"files.txt\"\n",
                "skip_blank_lines: true\n",
                "output:\n",
                "  path: \"data/out\"\n",
            ),
        )
        .unwrap();

        let config = load_config(config_path.to_str().unwrap()).unwrap();

        assert_eq!(config.base_url, "http://mirror.example/csv/");
        assert_eq!(config.manifest_path, PathBuf::from("files.txt"));
        assert_eq!(config.output.path, PathBuf::from("data/out"));
        assert!(config.skip_blank_lines);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_config("/nonexistent/stormprep.yaml");
        assert!(matches!(result, Err(StormPrepError::Config(_))));
    }
}
