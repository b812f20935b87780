use crate::error::StormPrepError;
use std::path::Path;

/// Ordered list of remote filenames to fetch, one per line.
///
/// Parsing splits on `'\n'` exactly: entries are not trimmed, duplicates are
/// kept, and unless blank-line skipping is enabled a trailing newline yields
/// an empty-string entry (which resolves to the bare base URL).
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    pub fn load_from_file(path: &Path, skip_blank_lines: bool) -> Result<Self, StormPrepError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| StormPrepError::ManifestLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Self::parse(&contents, skip_blank_lines))
    }

    pub fn parse(contents: &str, skip_blank_lines: bool) -> Self {
        let entries = contents
            .split('\n')
            .filter(|line| !skip_blank_lines || !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
