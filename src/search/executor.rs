use std::time::Instant;
use crate::catalog::store::Catalog;
use crate::core::types::Show;
use crate::search::report::SearchReport;

/// Resolves id queries against a loaded catalog.
pub struct QueryEngine<'a> {
    pub catalog: &'a Catalog,
}

impl<'a> QueryEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        QueryEngine { catalog }
    }

    /// Resolve ids to records, keeping request order.
    /// An unknown id is dropped from the subset, never an error.
    pub fn resolve_ids(&self, ids: &[String]) -> Vec<&'a Show> {
        ids.iter()
            .filter_map(|id| self.catalog.find_by_id(id))
            .collect()
    }

    /// Order records by title, ascending byte-wise; ties keep their order.
    pub fn sort_by_title(records: &mut [&'a Show]) {
        records.sort_by(|a, b| a.title.cmp(&b.title));
    }
}

/// Instrumented sequential title search over a resolved working subset.
///
/// Every probe walks the whole subset and counts one comparison per record
/// examined, found or not. The clock starts when the search is built and
/// stops at `finish`, so the caller decides what the timed window covers.
pub struct SequentialSearch<'a> {
    pub subset: Vec<&'a Show>,
    pub comparisons: u64,
    started: Instant,
}

impl<'a> SequentialSearch<'a> {
    pub fn start(subset: Vec<&'a Show>) -> Self {
        SequentialSearch {
            subset,
            comparisons: 0,
            started: Instant::now(),
        }
    }

    /// Whether `title` exactly matches a record in the subset.
    ///
    /// The scan never exits early; after a run of `Q` probes the counter
    /// holds exactly `Q x subset length`.
    pub fn probe(&mut self, title: &str) -> bool {
        let mut found = false;
        for show in &self.subset {
            self.comparisons += 1;
            if show.title == title {
                found = true;
            }
        }
        found
    }

    /// Stop the clock and build the report.
    pub fn finish(self, label: &str) -> SearchReport {
        // Elapsed time is truncated to whole milliseconds first
        let millis = self.started.elapsed().as_millis();
        SearchReport {
            label: label.to_string(),
            elapsed_secs: millis as f64 / 1000.0,
            comparisons: self.comparisons,
        }
    }

    /// One-shot run: probe every title, then close the report.
    pub fn run(subset: Vec<&'a Show>, titles: &[String], label: &str) -> (Vec<bool>, SearchReport) {
        let mut search = SequentialSearch::start(subset);
        let verdicts = titles.iter().map(|title| search.probe(title)).collect();
        (verdicts, search.finish(label))
    }
}
