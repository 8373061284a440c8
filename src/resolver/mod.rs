//! Selection resolution.
//!
//! Maps a selected chart identifier to the pair the dashboard renders:
//! the explanation paragraph and the raw contents of the external chart
//! file. Read failures degrade to an unavailable document rather than
//! surfacing an error; the page keeps working with whatever charts exist.

use std::fs;
use std::path::Path;

use crate::catalog::Catalog;

/// Raw contents of a chart file, or the reason it could not be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartDocument {
    Loaded(String),
    Unavailable(String),
}

impl ChartDocument {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ChartDocument::Loaded(_))
    }
}

/// Result of resolving a selection.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub explanation: &'static str,
    pub document: ChartDocument,
}

/// Resolve a chart identifier against the catalog and chart directory.
///
/// Identifiers double as filenames, so the catalog acts as the allowlist:
/// unknown ids never touch the filesystem. Every call re-reads the file;
/// there is no caching.
pub fn resolve(catalog: &Catalog, chart_dir: &Path, id: &str) -> Resolved {
    let explanation = catalog.explanation_for(id);

    let document = if catalog.contains(id) {
        match fs::read_to_string(chart_dir.join(id)) {
            Ok(content) => ChartDocument::Loaded(content),
            Err(e) => ChartDocument::Unavailable(format!("could not read {id}: {e}")),
        }
    } else {
        ChartDocument::Unavailable(format!("unknown chart id: {id}"))
    };

    Resolved {
        explanation,
        document,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, FALLBACK_EXPLANATION};

    #[test]
    fn resolve_loads_existing_chart_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cusum_control_charts.html"), "<html>cusum</html>").unwrap();

        let resolved = resolve(catalog::catalog(), dir.path(), "cusum_control_charts.html");
        assert_eq!(
            resolved.document,
            ChartDocument::Loaded("<html>cusum</html>".to_string())
        );
        assert!(resolved.explanation.starts_with("CUSUM (Cumulative Sum)"));
    }

    #[test]
    fn resolve_degrades_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();

        let resolved = resolve(catalog::catalog(), dir.path(), "shewhart_control_charts.html");
        assert!(!resolved.document.is_loaded());
        // Explanation still resolves even though the file is gone.
        assert!(resolved.explanation.starts_with("Shewhart control charts"));
    }

    #[test]
    fn resolve_unknown_id_uses_fallback_and_skips_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        // A file matching the id exists but is not cataloged; it must not
        // be served.
        fs::write(dir.path().join("notes.txt"), "private").unwrap();

        let resolved = resolve(catalog::catalog(), dir.path(), "notes.txt");
        assert_eq!(resolved.explanation, FALLBACK_EXPLANATION);
        match resolved.document {
            ChartDocument::Unavailable(reason) => {
                assert!(reason.contains("unknown chart id"));
            }
            ChartDocument::Loaded(_) => panic!("uncataloged file must not load"),
        }
    }

    #[test]
    fn resolve_is_idempotent_for_a_fixed_id() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ewma_control_charts.html"), "<p>ewma</p>").unwrap();

        let first = resolve(catalog::catalog(), dir.path(), "ewma_control_charts.html");
        let second = resolve(catalog::catalog(), dir.path(), "ewma_control_charts.html");
        assert_eq!(first.explanation, second.explanation);
        assert_eq!(first.document, second.document);
    }
}
