//! Pagination and filtering query parameters for the car list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

/// Default page size applied when `pageSize` is absent.
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query parameters accepted by `GET /v1/cars`.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
/// All fields are optional; absent filters are tolerated without error.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarQueryParams {
    /// Exact-match size category filter.
    pub size: Option<String>,

    /// Availability date constraining the joined rental records.
    #[serde(default, with = "optional_datetime")]
    pub available_at: Option<DateTime<Utc>>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl CarQueryParams {
    /// Resolved page number, defaulting to 1. Zero is clamped rather than
    /// rejected; the endpoint tolerates sloppy pagination input.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Resolved page size, defaulting to 10.
    pub fn page_size(&self) -> u32 {
        match self.page_size {
            Some(0) | None => DEFAULT_PAGE_SIZE,
            Some(n) => n,
        }
    }

    /// Converts to database `(offset, limit)`.
    pub fn offset_limit(&self) -> (i64, i64) {
        let page = self.page();
        let page_size = self.page_size();
        (((page - 1) * page_size) as i64, page_size as i64)
    }
}

/// Pagination summary returned under `meta.pagination`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_count: u32,
    pub page_size: u32,
    pub count: i64,
}

impl PaginationMeta {
    /// Builds the summary for a page of a `count`-row result set.
    ///
    /// `page_count` is the ceiling of `count / page_size`.
    pub fn build(page: u32, page_size: u32, count: i64) -> Self {
        let page_count = ((count as f64) / (page_size as f64)).ceil() as u32;

        Self {
            page,
            page_count,
            page_size,
            count,
        }
    }
}

/// Accepts either an RFC3339 datetime or a plain `YYYY-MM-DD` date.
mod optional_datetime {
    use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            None => Ok(None),
            Some(s) => {
                if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
                    return Ok(Some(dt.with_timezone(&Utc)));
                }

                NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map(|d| Some(d.and_time(NaiveTime::MIN).and_utc()))
                    .map_err(serde::de::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, page_size: Option<u32>) -> CarQueryParams {
        CarQueryParams {
            size: None,
            available_at: None,
            page,
            page_size,
        }
    }

    #[test]
    fn test_defaults() {
        let (offset, limit) = params(None, None).offset_limit();
        assert_eq!(offset, 0);
        assert_eq!(limit, 10);
    }

    #[test]
    fn test_page_2_with_default_size() {
        let (offset, limit) = params(Some(2), None).offset_limit();
        assert_eq!(offset, 10);
        assert_eq!(limit, 10);
    }

    #[test]
    fn test_custom_page_and_size() {
        let (offset, limit) = params(Some(3), Some(50)).offset_limit();
        assert_eq!(offset, 100);
        assert_eq!(limit, 50);
    }

    #[test]
    fn test_page_zero_is_clamped() {
        let (offset, limit) = params(Some(0), None).offset_limit();
        assert_eq!(offset, 0);
        assert_eq!(limit, 10);
    }

    #[test]
    fn test_pagination_meta_build() {
        let meta = PaginationMeta::build(2, 10, 25);
        assert_eq!(meta.page, 2);
        assert_eq!(meta.page_size, 10);
        assert_eq!(meta.count, 25);
        assert_eq!(meta.page_count, 3);
    }

    #[test]
    fn test_pagination_meta_exact_division() {
        let meta = PaginationMeta::build(1, 10, 30);
        assert_eq!(meta.page_count, 3);
    }

    #[test]
    fn test_pagination_meta_empty_result() {
        let meta = PaginationMeta::build(1, 10, 0);
        assert_eq!(meta.page_count, 0);
        assert_eq!(meta.count, 0);
    }

    #[test]
    fn test_pagination_meta_serializes_camel_case() {
        let json = serde_json::to_value(PaginationMeta::build(2, 10, 25)).unwrap();
        assert_eq!(json["page"], 2);
        assert_eq!(json["pageCount"], 3);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["count"], 25);
    }

    #[test]
    fn test_query_string_numbers_are_parsed() {
        let params = parse_query("size=small&page=2&pageSize=10").unwrap();
        assert_eq!(params.size.as_deref(), Some("small"));
        assert_eq!(params.page(), 2);
        assert_eq!(params.page_size(), 10);
    }

    #[test]
    fn test_available_at_accepts_plain_date() {
        let params = parse_query("availableAt=2026-03-05").unwrap();
        let dt = params.available_at.expect("date should parse");
        assert_eq!(dt.to_rfc3339(), "2026-03-05T00:00:00+00:00");
    }

    #[test]
    fn test_available_at_accepts_rfc3339() {
        let params = parse_query("availableAt=2026-03-05T10:30:00Z").unwrap();
        assert!(params.available_at.is_some());
    }

    #[test]
    fn test_available_at_rejects_garbage() {
        assert!(parse_query("availableAt=soon").is_err());
    }

    /// Parses query-string pairs into params the way the query extractor
    /// presents them: every value arrives as a string.
    fn parse_query(query: &str) -> Result<CarQueryParams, serde_json::Error> {
        let map: serde_json::Map<String, serde_json::Value> = query
            .split('&')
            .filter(|s| !s.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (k.to_string(), serde_json::Value::String(v.to_string()))
            })
            .collect();

        serde_json::from_value(map.into())
    }
}
