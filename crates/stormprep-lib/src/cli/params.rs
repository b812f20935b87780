use crate::manifest::Manifest;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub manifest: Manifest,
    pub base_url: String,
    pub output_dir: PathBuf,
}
