use crate::cli::args::Command;
use crate::cli::params::FetchParams;
use crate::config::{Config, load_config};
use crate::error::StormPrepError;
use crate::manifest::Manifest;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
}

/// Turns parsed CLI arguments into fully-resolved parameters: config file (or
/// defaults) merged with flag overrides, base URL validated, manifest loaded.
/// Everything that can fail here is a fatal setup error.
pub fn resolve_command(command: Command) -> Result<ResolvedCommand, StormPrepError> {
    match command {
        Command::Fetch {
            config_path,
            manifest_path,
            base_url,
            output_dir,
            skip_blank_lines,
        } => {
            let mut config = match config_path {
                Some(config_path) => load_config(&config_path)?,
                None => Config::default(),
            };

            if let Some(manifest_path) = manifest_path {
                config.manifest_path = PathBuf::from(manifest_path);
            }
            if let Some(base_url) = base_url {
                config.base_url = base_url;
            }
            if let Some(output_dir) = output_dir {
                config.output.path = PathBuf::from(output_dir);
            }
            if skip_blank_lines {
                config.skip_blank_lines = true;
            }

            Url::parse(&config.base_url).map_err(|e| StormPrepError::CliArgumentValidation {
                details: format!("Invalid base URL {}: {}", config.base_url, e),
            })?;

            let manifest =
                Manifest::load_from_file(&config.manifest_path, config.skip_blank_lines)?;

            Ok(ResolvedCommand::Fetch(FetchParams {
                manifest,
                base_url: config.base_url,
                output_dir: config.output.path,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_command(manifest_path: &str) -> Command {
        Command::Fetch {
            config_path: None,
            manifest_path: Some(manifest_path.to_string()),
            base_url: Some("http://localhost:9/csv/".to_string()),
            output_dir: Some("/tmp/stormprep-test".to_string()),
            skip_blank_lines: false,
        }
    }

    #[test]
    fn flag_overrides_take_precedence_over_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manifest_path = temp_dir.path().join("files.txt");
        std::fs::write(&manifest_path, "a.csv.gz").unwrap();

        let ResolvedCommand::Fetch(params) =
            resolve_command(fetch_command(manifest_path.to_str().unwrap())).unwrap();

        assert_eq!(params.base_url, "http://localhost:9/csv/");
        assert_eq!(params.output_dir, PathBuf::from("/tmp/stormprep-test"));
        assert_eq!(params.manifest.entries(), ["a.csv.gz"]);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let manifest_path = temp_dir.path().join("files.txt");
        std::fs::write(&manifest_path, "a.csv.gz").unwrap();

        let command = Command::Fetch {
            config_path: None,
            manifest_path: Some(manifest_path.to_str().unwrap().to_string()),
            base_url: Some("not a url".to_string()),
            output_dir: None,
            skip_blank_lines: false,
        };

        let result = resolve_command(command);
        assert!(matches!(
            result,
            Err(StormPrepError::CliArgumentValidation { .. })
        ));
    }

    #[test]
    fn missing_manifest_is_fatal() {
        let result = resolve_command(fetch_command("/nonexistent/files.txt"));
        assert!(matches!(result, Err(StormPrepError::ManifestLoad { .. })));
    }
}
