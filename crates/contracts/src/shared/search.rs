//! Search request bodies.
//!
//! Every list screen posts `{<filters>, <paging keys>, [sortBy, sortDir]}`
//! to `/api/<resource>/search`. Filters that carry no value are left out of
//! the body entirely.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use super::date_format::{format_range_bound, DateBound};

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Id(Option<i64>),
    /// Record status code (`"A"`, `"I"`); empty means "any".
    Status(String),
    Date { raw: String, bound: DateBound },
}

impl FilterValue {
    fn to_json(&self) -> Option<Value> {
        match self {
            FilterValue::Text(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| Value::String(s.to_string()))
            }
            FilterValue::Id(id) => id.map(Value::from),
            FilterValue::Status(s) => (!s.is_empty()).then(|| Value::String(s.clone())),
            FilterValue::Date { raw, bound } => format_range_bound(raw, *bound).map(Value::String),
        }
    }

    pub fn is_set(&self) -> bool {
        self.to_json().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    fields: BTreeMap<String, FilterValue>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.insert(key.to_string(), FilterValue::Text(value.into()));
        self
    }

    pub fn id(mut self, key: &str, value: Option<i64>) -> Self {
        self.fields.insert(key.to_string(), FilterValue::Id(value));
        self
    }

    pub fn status(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.insert(key.to_string(), FilterValue::Status(value.into()));
        self
    }

    pub fn date(mut self, key: &str, raw: impl Into<String>, bound: DateBound) -> Self {
        self.fields.insert(
            key.to_string(),
            FilterValue::Date {
                raw: raw.into(),
                bound,
            },
        );
        self
    }

    /// `startDate` / `endDate` pair from two date inputs.
    pub fn date_range(self, from: impl Into<String>, to: impl Into<String>, end: DateBound) -> Self {
        self.date("startDate", from, DateBound::StartOfDay)
            .date("endDate", to, end)
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.fields.get(key)
    }

    pub fn active_count(&self) -> usize {
        self.fields.values().filter(|v| v.is_set()).count()
    }

    /// Both queries would send the same filters.
    pub fn same_filters(&self, other: &SearchQuery) -> bool {
        self.to_fields() == other.to_fields()
    }

    /// Filters with a value, serialized for the wire.
    pub fn to_fields(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .filter_map(|(k, v)| v.to_json().map(|json| (k.clone(), json)))
            .collect()
    }
}

/// The backend speaks two paging dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingKeys {
    /// `currentPage` / `perPageRecord`
    CurrentPage,
    /// `page` / `size`
    PageSize,
}

impl PagingKeys {
    fn names(self) -> (&'static str, &'static str) {
        match self {
            PagingKeys::CurrentPage => ("currentPage", "perPageRecord"),
            PagingKeys::PageSize => ("page", "size"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub by: &'static str,
    pub dir: SortDir,
}

impl SortSpec {
    pub fn id_desc() -> Self {
        Self {
            by: "id",
            dir: SortDir::Desc,
        }
    }
}

/// One fetch the list controller wants issued.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub fields: Map<String, Value>,
    pub index: usize,
    pub size: usize,
    pub keys: PagingKeys,
    pub sort: Option<SortSpec>,
}

impl SearchRequest {
    pub fn to_body(&self) -> Value {
        let mut body = self.fields.clone();
        let (page_key, size_key) = self.keys.names();
        body.insert(page_key.to_string(), json!(self.index));
        body.insert(size_key.to_string(), json!(self.size));
        if let Some(sort) = &self.sort {
            body.insert("sortBy".to_string(), json!(sort.by));
            body.insert("sortDir".to_string(), json!(sort.dir.as_str()));
        }
        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_are_omitted() {
        let q = SearchQuery::new()
            .text("search", "   ")
            .id("productId", None)
            .status("status", "")
            .date_range("", "2024-13-40", DateBound::EndOfDay);
        assert!(q.to_fields().is_empty());
        assert_eq!(q.active_count(), 0);
    }

    #[test]
    fn blank_values_match_a_missing_key() {
        let blank = SearchQuery::new().text("search", "  ").date_range("", "", DateBound::EndOfDay);
        assert!(blank.same_filters(&SearchQuery::new()));
        assert!(!blank.same_filters(&SearchQuery::new().id("productId", Some(4))));
    }

    #[test]
    fn date_range_body() {
        let q = SearchQuery::new().date_range("2024-01-01", "2024-01-31", DateBound::EndOfDay);
        let fields = q.to_fields();
        assert_eq!(fields["startDate"], json!("01-01-2024 00:00:00"));
        assert_eq!(fields["endDate"], json!("31-01-2024 23:59:59"));
    }

    #[test]
    fn current_page_dialect_with_sort() {
        let req = SearchRequest {
            fields: SearchQuery::new().text("search", " bolt ").to_fields(),
            index: 2,
            size: 25,
            keys: PagingKeys::CurrentPage,
            sort: Some(SortSpec::id_desc()),
        };
        assert_eq!(
            req.to_body(),
            json!({
                "search": "bolt",
                "currentPage": 2,
                "perPageRecord": 25,
                "sortBy": "id",
                "sortDir": "desc"
            })
        );
    }

    #[test]
    fn page_size_dialect() {
        let req = SearchRequest {
            fields: SearchQuery::new().id("categoryId", Some(4)).to_fields(),
            index: 0,
            size: 10,
            keys: PagingKeys::PageSize,
            sort: None,
        };
        assert_eq!(req.to_body(), json!({"categoryId": 4, "page": 0, "size": 10}));
    }
}
