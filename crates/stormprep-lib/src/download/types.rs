/// Result of processing a single manifest entry. Failures carry the URL and
/// reason so the caller can log them; they never abort the run.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Downloaded,
    AlreadyPresent,
    Failed { url: String, reason: String },
}

/// Per-run tally. `manifest_len` is the raw manifest entry count and is what
/// the end-of-run summary reports; the other counters break down what
/// actually happened to each entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchReport {
    pub manifest_len: usize,
    pub downloaded: usize,
    pub already_present: usize,
    pub failed: usize,
}

impl FetchReport {
    pub fn record(&mut self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Downloaded => self.downloaded += 1,
            FetchOutcome::AlreadyPresent => self.already_present += 1,
            FetchOutcome::Failed { .. } => self.failed += 1,
        }
    }
}
