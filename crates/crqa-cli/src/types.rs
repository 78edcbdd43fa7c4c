use std::path::PathBuf;

use crqa_validate::ValidationRun;

#[derive(Debug)]
pub struct ValidateResult {
    pub input_dir: PathBuf,
    pub run: ValidationRun,
    /// Empty on a dry run.
    pub reports: Vec<PathBuf>,
}

impl ValidateResult {
    /// Errors and rejects fail the run; warnings do not.
    pub fn has_errors(&self) -> bool {
        self.run.has_errors()
    }
}
