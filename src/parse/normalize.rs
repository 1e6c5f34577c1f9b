use chrono::NaiveDate;
use tracing::warn;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DATE_FORMAT, FIELD_COUNT, Show};

/// Sort applied to a multi-value field at normalization time.
#[derive(Debug, Clone, Copy)]
pub enum ListOrder {
    /// Byte-wise string ordering.
    Ordinal,
    /// Case-insensitive ordering, byte-wise between equal keys.
    CaseInsensitive,
}

/// Missing-value policy for raw catalog fields.
///
/// Raw text arrives exactly as sliced by `LineSplitter`. Absent or unusable
/// values become `None` / an empty list here; placeholder text exists only
/// where records are rendered.
pub struct FieldNormalizer;

impl FieldNormalizer {
    /// Free-text field, passed through unchanged; empty means missing.
    pub fn scalar(raw: &str) -> Option<String> {
        if raw.is_empty() {
            None
        } else {
            Some(raw.to_string())
        }
    }

    /// Release year. Empty, unreadable and zero values all count as missing;
    /// parse failures are swallowed, never propagated.
    pub fn year(raw: &str) -> Option<i32> {
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<i32>() {
            Ok(0) | Err(_) => None,
            Ok(year) => Some(year),
        }
    }

    /// Strict added-date parse in the `"Month D, YYYY"` layout.
    pub fn parse_added_date(raw: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|e| Error::new(ErrorKind::Parse, format!("bad added date {:?}: {}", raw, e)))
    }

    /// Lenient added-date: empty means missing, unreadable text is logged
    /// and dropped.
    pub fn date(raw: &str) -> Option<NaiveDate> {
        if raw.is_empty() {
            return None;
        }
        match Self::parse_added_date(raw) {
            Ok(date) => Some(date),
            Err(err) => {
                warn!(error = %err, "dropping unreadable added date");
                None
            }
        }
    }

    /// Comma-separated list: items are trimmed and sorted once, here. Empty
    /// input gives an empty list.
    pub fn multi(raw: &str, order: ListOrder) -> Vec<String> {
        if raw.is_empty() {
            return Vec::new();
        }
        let mut items: Vec<String> = raw.split(',').map(|item| item.trim().to_string()).collect();
        match order {
            ListOrder::Ordinal => items.sort(),
            ListOrder::CaseInsensitive => items.sort_by(|a, b| {
                a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
            }),
        }
        items
    }

    /// Assemble a record from one split source row.
    ///
    /// Field order follows the source file: id, kind, title, director, cast,
    /// country, date added, release year, rating, duration, genres.
    pub fn record(fields: [String; FIELD_COUNT]) -> Show {
        let [show_id, kind, title, director, cast, country, date_added, release_year, rating, duration, genres] =
            fields;
        Show {
            show_id,
            kind,
            title,
            director: Self::scalar(&director),
            cast: Self::multi(&cast, ListOrder::Ordinal),
            country: Self::scalar(&country),
            date_added: Self::date(&date_added),
            release_year: Self::year(&release_year),
            rating: Self::scalar(&rating),
            duration: Self::scalar(&duration),
            genres: Self::multi(&genres, ListOrder::CaseInsensitive),
        }
    }
}
