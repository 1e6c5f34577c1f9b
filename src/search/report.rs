use std::fs::File;
use std::io::Write;
use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::core::error::Result;

/// Outcome of one instrumented sequential-search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub label: String,
    /// Elapsed wall-clock time in seconds, at millisecond resolution.
    pub elapsed_secs: f64,
    pub comparisons: u64,
}

impl SearchReport {
    /// The tab-separated report line: label, elapsed time, comparison count.
    ///
    /// `{:?}` keeps the decimal point on whole-second values (`0.0s`, never
    /// `0s`) while leaving sub-second values untouched.
    pub fn render(&self) -> String {
        format!(
            "{}\tTime: {:?}s\tComparisons: {}",
            self.label, self.elapsed_secs, self.comparisons
        )
    }

    /// Persist the report. The file handle is scoped to this call and an
    /// existing report at `path` is replaced.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}
