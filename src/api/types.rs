//! Catalog API request and response types.
//!
//! These types model the `/artworks` listing endpoint and the normalized
//! rows that the table displays.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder for a missing title.
pub const UNKNOWN_TITLE: &str = "Unknown Title";
/// Placeholder for a missing artist.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
/// Placeholder for a missing place of origin.
pub const UNKNOWN_ORIGIN: &str = "Unknown Origin";
/// Placeholder for missing inscriptions.
pub const NO_INSCRIPTIONS: &str = "No Inscriptions";
/// Placeholder for a missing start or end date.
pub const NO_DATE: &str = "No date";

/// A single artwork record as returned by the catalog.
///
/// Every field is optional; the catalog omits or nulls fields freely.
/// Dates are years and arrive as numbers, but strings are tolerated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawArtwork {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<Value>,
    #[serde(default)]
    pub date_end: Option<Value>,
}

/// Pagination metadata attached to a listing response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of records in the catalog.
    #[serde(default)]
    pub total: u64,
    /// Records per page, as echoed by the server.
    #[serde(default)]
    pub limit: Option<u32>,
    /// 1-based page number, as echoed by the server.
    #[serde(default)]
    pub current_page: Option<u32>,
    /// Total number of pages at this limit.
    #[serde(default)]
    pub total_pages: Option<u64>,
}

/// Response body of `GET /artworks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtworkListResponse {
    #[serde(default)]
    pub data: Vec<RawArtwork>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// One normalized artwork row.
///
/// Rows are rebuilt on every fetch; only `id` identifies a row across pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub origin: String,
    pub inscriptions: String,
    pub date_start: String,
    pub date_end: String,
}

impl Artwork {
    /// Normalize a raw record, substituting a placeholder for each missing field.
    ///
    /// Returns `None` when the record carries no `id`, since such a row could
    /// never be tracked by the selection set.
    pub fn from_raw(raw: RawArtwork) -> Option<Self> {
        let id = raw.id?;
        Some(Self {
            id,
            title: text_or(raw.title, UNKNOWN_TITLE),
            artist: text_or(raw.artist_display, UNKNOWN_ARTIST),
            origin: text_or(raw.place_of_origin, UNKNOWN_ORIGIN),
            inscriptions: text_or(raw.inscriptions, NO_INSCRIPTIONS),
            date_start: year_or(raw.date_start.as_ref(), NO_DATE),
            date_end: year_or(raw.date_end.as_ref(), NO_DATE),
        })
    }
}

/// A fetched page of normalized rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworkPage {
    /// Rows in the order the catalog returned them.
    pub rows: Vec<Artwork>,
    /// Total record count reported by the catalog.
    pub total: u64,
}

impl From<ArtworkListResponse> for ArtworkPage {
    fn from(response: ArtworkListResponse) -> Self {
        Self {
            rows: response
                .data
                .into_iter()
                .filter_map(Artwork::from_raw)
                .collect(),
            total: response.pagination.total,
        }
    }
}

fn text_or(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => placeholder.to_string(),
    }
}

// A zero year counts as missing, matching how the catalog encodes "unknown".
fn year_or(value: Option<&Value>, placeholder: &str) -> String {
    match value {
        Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f != 0.0) => n.to_string(),
        Some(Value::String(s)) if !s.trim().is_empty() && s.trim() != "0" => s.clone(),
        _ => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record_keeps_fields() {
        let raw: RawArtwork = serde_json::from_value(json!({
            "id": 27992,
            "title": "A Sunday on La Grande Jatte",
            "artist_display": "Georges Seurat",
            "place_of_origin": "France",
            "inscriptions": "Signed lower right",
            "date_start": 1884,
            "date_end": 1886
        }))
        .unwrap();

        let artwork = Artwork::from_raw(raw).unwrap();
        assert_eq!(artwork.id, 27992);
        assert_eq!(artwork.title, "A Sunday on La Grande Jatte");
        assert_eq!(artwork.artist, "Georges Seurat");
        assert_eq!(artwork.origin, "France");
        assert_eq!(artwork.inscriptions, "Signed lower right");
        assert_eq!(artwork.date_start, "1884");
        assert_eq!(artwork.date_end, "1886");
    }

    #[test]
    fn test_placeholders_applied_per_field() {
        let raw: RawArtwork = serde_json::from_value(json!({
            "id": 1,
            "title": "Nighthawks",
            "inscriptions": ""
        }))
        .unwrap();

        let artwork = Artwork::from_raw(raw).unwrap();
        assert_eq!(artwork.title, "Nighthawks");
        assert_eq!(artwork.inscriptions, NO_INSCRIPTIONS);
        assert_eq!(artwork.artist, UNKNOWN_ARTIST);
        assert_eq!(artwork.origin, UNKNOWN_ORIGIN);
        assert_eq!(artwork.date_start, NO_DATE);
        assert_eq!(artwork.date_end, NO_DATE);
    }

    #[test]
    fn test_null_fields_get_placeholders() {
        let raw: RawArtwork = serde_json::from_value(json!({
            "id": 2,
            "title": null,
            "artist_display": null,
            "date_start": null,
            "date_end": 0
        }))
        .unwrap();

        let artwork = Artwork::from_raw(raw).unwrap();
        assert_eq!(artwork.title, UNKNOWN_TITLE);
        assert_eq!(artwork.artist, UNKNOWN_ARTIST);
        assert_eq!(artwork.date_start, NO_DATE);
        assert_eq!(artwork.date_end, NO_DATE);
    }

    #[test]
    fn test_negative_year_is_kept() {
        let raw: RawArtwork = serde_json::from_value(json!({
            "id": 3,
            "date_start": -500,
            "date_end": "-450"
        }))
        .unwrap();

        let artwork = Artwork::from_raw(raw).unwrap();
        assert_eq!(artwork.date_start, "-500");
        assert_eq!(artwork.date_end, "-450");
    }

    #[test]
    fn test_record_without_id_is_dropped() {
        let raw = RawArtwork {
            title: Some("Orphan".to_string()),
            ..Default::default()
        };
        assert!(Artwork::from_raw(raw).is_none());
    }

    #[test]
    fn test_list_response_to_page() {
        let response: ArtworkListResponse = serde_json::from_value(json!({
            "pagination": {
                "total": 129884,
                "limit": 12,
                "offset": 0,
                "total_pages": 10824,
                "current_page": 1
            },
            "data": [
                { "id": 10, "title": "First" },
                { "title": "No id" },
                { "id": 11, "title": "Second" }
            ]
        }))
        .unwrap();

        let page = ArtworkPage::from(response);
        assert_eq!(page.total, 129884);
        let ids: Vec<u64> = page.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn test_missing_pagination_defaults_total() {
        let response: ArtworkListResponse =
            serde_json::from_value(json!({ "data": [] })).unwrap();
        let page = ArtworkPage::from(response);
        assert_eq!(page.total, 0);
        assert!(page.rows.is_empty());
    }
}
