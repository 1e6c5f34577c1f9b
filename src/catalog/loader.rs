use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, error, warn};
use crate::catalog::store::Catalog;
use crate::parse::normalize::FieldNormalizer;
use crate::parse::splitter::LineSplitter;

/// Reads the delimited source file into a `Catalog`.
pub struct CatalogLoader {
    pub row_hint: usize,
}

impl CatalogLoader {
    /// `row_hint` pre-sizes the catalog; rows beyond it still load.
    pub fn new(row_hint: usize) -> Self {
        CatalogLoader { row_hint }
    }

    /// Read the whole source: one header line, then one record per line.
    ///
    /// An unreadable source is reported and yields whatever was parsed up
    /// to the failure. Loading never aborts the process.
    pub fn load(&self, path: &Path) -> Catalog {
        match File::open(path) {
            Ok(file) => self.load_from(BufReader::new(file)),
            Err(err) => {
                error!(path = %path.display(), error = %err, "cannot open catalog source");
                Catalog::new()
            }
        }
    }

    /// Same contract as `load`, over an already-open reader.
    pub fn load_from(&self, reader: impl BufRead) -> Catalog {
        let mut catalog = Catalog::with_capacity(self.row_hint);
        let mut lines = reader.lines();

        match lines.next() {
            Some(Ok(_header)) => {}
            Some(Err(err)) => {
                error!(error = %err, "cannot read catalog header");
                return catalog;
            }
            None => {
                warn!("catalog source is empty");
                return catalog;
            }
        }

        for line in lines {
            match line {
                Ok(line) => catalog.push(FieldNormalizer::record(LineSplitter::split(&line))),
                Err(err) => {
                    // Partial catalog, not a process failure
                    error!(error = %err, rows = catalog.len(), "catalog read stopped early");
                    break;
                }
            }
        }

        debug!(rows = catalog.len(), "catalog loaded");
        catalog
    }
}
