mod download;
mod types;

pub use download::fetch_all;
pub use types::{FetchOutcome, FetchReport};
