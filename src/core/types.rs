use serde::{Serialize, Deserialize};
use chrono::NaiveDate;
use std::fmt;

/// Number of comma-separated fields in one catalog row.
pub const FIELD_COUNT: usize = 11;

/// Placeholder printed for absent scalar values.
pub const MISSING_LABEL: &str = "NaN";

/// Year printed when no release year was recorded.
pub const SENTINEL_YEAR: i32 = 0;

/// Date printed when no added-date was recorded.
pub const SENTINEL_DATE_TEXT: &str = "March 1, 1900";

/// Month-name date layout shared by the source file and the printed line.
pub const DATE_FORMAT: &str = "%B %-d, %Y";

/// One catalog entry, built from a single source row.
///
/// Absent values are stored as `None` / empty lists; the placeholders only
/// appear when a record is rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub show_id: String,
    pub kind: String,
    pub title: String,
    pub director: Option<String>,
    pub cast: Vec<String>,
    pub country: Option<String>,
    pub date_added: Option<NaiveDate>,
    pub release_year: Option<i32>,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub genres: Vec<String>,
}

impl Show {
    /// Added-date as printed, falling back to the sentinel date.
    pub fn date_text(&self) -> String {
        match self.date_added {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => SENTINEL_DATE_TEXT.to_string(),
        }
    }

    fn list_text(items: &[String]) -> String {
        if items.is_empty() {
            MISSING_LABEL.to_string()
        } else {
            items.join(", ")
        }
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "=> {} ## {} ## {} ## {} ## [{}] ## {} ## {} ## {} ## {} ## {} ## [{}] ##",
            self.show_id,
            self.title,
            self.kind,
            self.director.as_deref().unwrap_or(MISSING_LABEL),
            Show::list_text(&self.cast),
            self.country.as_deref().unwrap_or(MISSING_LABEL),
            self.date_text(),
            self.release_year.unwrap_or(SENTINEL_YEAR),
            self.rating.as_deref().unwrap_or(MISSING_LABEL),
            self.duration.as_deref().unwrap_or(MISSING_LABEL),
            Show::list_text(&self.genres),
        )
    }
}
