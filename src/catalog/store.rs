use std::collections::HashMap;
use crate::core::types::Show;

/// In-memory catalog of loaded records.
///
/// Records keep their source order; the id table points at the first
/// occurrence of each id and is maintained by `push`.
pub struct Catalog {
    pub shows: Vec<Show>,
    pub index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            shows: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Catalog {
            shows: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Append a record. A duplicate id keeps pointing at its first record.
    pub fn push(&mut self, show: Show) {
        let position = self.shows.len();
        self.index.entry(show.show_id.clone()).or_insert(position);
        self.shows.push(show);
    }

    /// Record registered under `id`, if any.
    pub fn find_by_id(&self, id: &str) -> Option<&Show> {
        self.index.get(id).map(|&position| &self.shows[position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Show> {
        self.shows.iter()
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}
