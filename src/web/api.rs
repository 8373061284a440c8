//! JSON API handlers for the web dashboard.
//!
//! Each handler corresponds to an API endpoint and returns a
//! `Response<Cursor<Vec<u8>>>` with JSON content. Chart resolution
//! failures are reported inside the JSON body (`available: false`), never
//! as HTTP errors, so the page degrades instead of breaking.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tiny_http::{Response, StatusCode};

use crate::catalog::{self, Catalog};
use crate::config;
use crate::resolver::{self, ChartDocument};

use super::content_type_json;

// ---------------------------------------------------------------------------
// JSON response types
// ---------------------------------------------------------------------------

/// Catalog API response — dropdown entries in display order.
#[derive(Serialize)]
struct CatalogResponse {
    default_id: &'static str,
    entries: Vec<CatalogEntryResponse>,
}

#[derive(Serialize)]
struct CatalogEntryResponse {
    id: &'static str,
    label: &'static str,
    explanation: &'static str,
}

/// Chart API response — one resolved selection.
#[derive(Serialize)]
struct ChartResponse {
    id: String,
    label: Option<&'static str>,
    explanation: &'static str,
    available: bool,
    content: Option<String>,
    error: Option<String>,
}

/// Health API response.
#[derive(Serialize)]
struct HealthResponse {
    chart_dir: String,
    config_exists: bool,
    charts: Vec<ChartStatusResponse>,
}

#[derive(Serialize)]
struct ChartStatusResponse {
    id: &'static str,
    present: bool,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a JSON success response.
fn json_response<T: Serialize>(data: &T) -> Result<Response<Cursor<Vec<u8>>>> {
    let body = serde_json::to_string(data).context("failed to serialize JSON response")?;
    Ok(Response::from_data(body.into_bytes())
        .with_header(content_type_json())
        .with_status_code(StatusCode(200)))
}

/// Parse the `?id=X` query parameter from a URL.
fn parse_id_param(url: &str) -> Option<&str> {
    url.split('?').nth(1)?.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        if k == "id" && !v.is_empty() { Some(v) } else { None }
    })
}

/// Resolve a selection into a `ChartResponse` body.
///
/// A missing `id` parameter falls back to the catalog's default entry, so
/// the initial page load and an explicit selection share one code path.
fn chart_response(cat: &Catalog, chart_dir: &Path, id: Option<&str>) -> ChartResponse {
    let id = id.unwrap_or_else(|| cat.default_id());
    let resolved = resolver::resolve(cat, chart_dir, id);

    let (available, content, error) = match resolved.document {
        ChartDocument::Loaded(content) => (true, Some(content), None),
        ChartDocument::Unavailable(reason) => (false, None, Some(reason)),
    };

    ChartResponse {
        id: id.to_string(),
        label: cat.get(id).map(|e| e.label),
        explanation: resolved.explanation,
        available,
        content,
        error,
    }
}

// ---------------------------------------------------------------------------
// API Handlers
// ---------------------------------------------------------------------------

/// `GET /api/catalog` — dropdown entries and the default selection.
pub fn get_catalog() -> Result<Response<Cursor<Vec<u8>>>> {
    let cat = catalog::catalog();

    let resp = CatalogResponse {
        default_id: cat.default_id(),
        entries: cat
            .entries()
            .iter()
            .map(|e| CatalogEntryResponse {
                id: e.id,
                label: e.label,
                explanation: e.explanation,
            })
            .collect(),
    };

    json_response(&resp)
}

/// `GET /api/chart?id=X` — explanation and document for a selection.
pub fn get_chart(url: &str, chart_dir: &Path) -> Result<Response<Cursor<Vec<u8>>>> {
    let resp = chart_response(catalog::catalog(), chart_dir, parse_id_param(url));
    json_response(&resp)
}

/// `GET /api/health` — chart file presence and config status.
pub fn get_health(chart_dir: &Path) -> Result<Response<Cursor<Vec<u8>>>> {
    let config_exists = config::global_config_file()
        .map(|p| p.exists())
        .unwrap_or(false);

    let resp = HealthResponse {
        chart_dir: chart_dir.display().to_string(),
        config_exists,
        charts: catalog::catalog()
            .entries()
            .iter()
            .map(|e| ChartStatusResponse {
                id: e.id,
                present: chart_dir.join(e.id).is_file(),
            })
            .collect(),
    };

    json_response(&resp)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FALLBACK_EXPLANATION;

    #[test]
    fn parse_id_param_extracts_value() {
        assert_eq!(
            parse_id_param("/api/chart?id=ewma_control_charts.html"),
            Some("ewma_control_charts.html")
        );
        assert_eq!(
            parse_id_param("/api/chart?foo=bar&id=x.html"),
            Some("x.html")
        );
    }

    #[test]
    fn parse_id_param_returns_none_for_missing_or_empty() {
        assert_eq!(parse_id_param("/api/chart"), None);
        assert_eq!(parse_id_param("/api/chart?foo=bar"), None);
        assert_eq!(parse_id_param("/api/chart?id="), None);
    }

    #[test]
    fn chart_response_embeds_file_content_for_valid_selection() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("ewma_control_charts.html"),
            "<html>ewma chart</html>",
        )
        .unwrap();

        let resp = chart_response(
            catalog::catalog(),
            dir.path(),
            Some("ewma_control_charts.html"),
        );
        assert!(resp.available);
        assert_eq!(resp.content.as_deref(), Some("<html>ewma chart</html>"));
        assert_eq!(resp.label, Some("EWMA Control Charts"));
        assert!(
            resp.explanation
                .starts_with("EWMA (Exponentially Weighted Moving Average)")
        );
        assert!(resp.error.is_none());
    }

    #[test]
    fn chart_response_degrades_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let resp = chart_response(
            catalog::catalog(),
            dir.path(),
            Some("svd_pca_visualization.html"),
        );
        assert!(!resp.available);
        assert!(resp.content.is_none());
        assert!(resp.error.is_some());
        // Explanation still present so the page renders something useful.
        assert!(resp.explanation.starts_with("The 3D PCA visualization"));
    }

    #[test]
    fn chart_response_falls_back_for_unknown_id() {
        let dir = tempfile::tempdir().unwrap();

        let resp = chart_response(catalog::catalog(), dir.path(), Some("bogus.html"));
        assert!(!resp.available);
        assert_eq!(resp.explanation, FALLBACK_EXPLANATION);
        assert!(resp.label.is_none());
    }

    #[test]
    fn chart_response_defaults_to_first_catalog_entry() {
        let dir = tempfile::tempdir().unwrap();

        let resp = chart_response(catalog::catalog(), dir.path(), None);
        assert_eq!(resp.id, "svd_pca_visualization.html");
    }

    #[test]
    fn chart_response_serializes() {
        let resp = ChartResponse {
            id: "ewma_control_charts.html".to_string(),
            label: Some("EWMA Control Charts"),
            explanation: "smooths data",
            available: true,
            content: Some("<html></html>".to_string()),
            error: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"available\":true"));
        assert!(json.contains("\"id\":\"ewma_control_charts.html\""));
    }

    #[test]
    fn catalog_response_lists_all_entries() {
        let cat = catalog::catalog();
        let resp = CatalogResponse {
            default_id: cat.default_id(),
            entries: cat
                .entries()
                .iter()
                .map(|e| CatalogEntryResponse {
                    id: e.id,
                    label: e.label,
                    explanation: e.explanation,
                })
                .collect(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"default_id\":\"svd_pca_visualization.html\""));
        assert!(json.contains("Shewhart Control Charts"));
    }
}
