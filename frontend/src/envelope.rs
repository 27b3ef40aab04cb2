//! Typed wrapper around API response bodies.
//!
//! The service answers some endpoints with a single record and others with an
//! array. Which shape applies is a property of the operation that was
//! dispatched, never something to sniff out of the body, so the caller that
//! issued the request wraps the decoded body in the matching
//! [`ResponseEnvelope`] variant. Search results get their own variant because
//! an empty search is reported differently from an empty listing.

/// A decoded response body tagged with the shape the operation declared.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope<T> {
    /// Endpoints that return one record (create, retrieve, update, cancel).
    Single(T),
    /// The unfiltered listing endpoint.
    List(Vec<T>),
    /// A filtered query. Empty means "no match", which is user-visible.
    SearchList(Vec<T>),
}

/// The uniform projection every envelope reduces to: what the form should
/// show and what the results table should show.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T> {
    /// Record to copy into the form. For lists this is the first element,
    /// and `None` when the list is empty.
    pub form_record: Option<T>,
    /// Rows for the results table, in server order.
    pub table_records: Vec<T>,
}

impl<T: Clone> ResponseEnvelope<T> {
    /// Projects the envelope into form and table halves. Pure and
    /// deterministic: normalizing the same envelope twice gives the same
    /// projection.
    pub fn normalize(self) -> Normalized<T> {
        match self {
            ResponseEnvelope::Single(record) => Normalized {
                form_record: Some(record.clone()),
                table_records: vec![record],
            },
            ResponseEnvelope::List(records) | ResponseEnvelope::SearchList(records) => Normalized {
                form_record: records.first().cloned(),
                table_records: records,
            },
        }
    }

    /// True only for a search that matched nothing. An empty plain `List` is
    /// an ordinary result, not an empty search.
    pub fn is_empty_search(&self) -> bool {
        matches!(self, ResponseEnvelope::SearchList(records) if records.is_empty())
    }
}
