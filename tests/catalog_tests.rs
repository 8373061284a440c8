//! Catalog contract tests.
//!
//! The catalog is fixed configuration: these tests pin the exact ids,
//! labels, display order, and explanation texts the dashboard exposes.

use polldash::catalog::{self, FALLBACK_EXPLANATION};

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

#[test]
fn entries_are_in_dropdown_display_order() {
    let labels: Vec<&str> = catalog::catalog()
        .entries()
        .iter()
        .map(|e| e.label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "3D PCA Visualization",
            "Mahalanobis Distances",
            "EWMA Control Charts",
            "CUSUM Control Charts",
            "Shewhart Control Charts",
        ]
    );
}

#[test]
fn default_selection_is_pca_visualization() {
    assert_eq!(
        catalog::catalog().default_id(),
        "svd_pca_visualization.html"
    );
}

#[test]
fn ids_look_like_html_filenames() {
    for entry in catalog::catalog().entries() {
        assert!(entry.id.ends_with(".html"), "unexpected id: {}", entry.id);
        assert!(!entry.id.contains('/'), "id must be a bare filename");
    }
}

// ---------------------------------------------------------------------------
// Explanations
// ---------------------------------------------------------------------------

#[test]
fn every_catalog_id_resolves_to_its_registered_explanation() {
    let cat = catalog::catalog();
    for entry in cat.entries() {
        assert_eq!(cat.explanation_for(entry.id), entry.explanation);
    }
}

#[test]
fn explanations_open_with_their_chart_names() {
    let cat = catalog::catalog();
    let expected = [
        ("svd_pca_visualization.html", "The 3D PCA visualization"),
        ("mahalanobis_distances.html", "Mahalanobis distance"),
        (
            "ewma_control_charts.html",
            "EWMA (Exponentially Weighted Moving Average)",
        ),
        ("cusum_control_charts.html", "CUSUM (Cumulative Sum)"),
        ("shewhart_control_charts.html", "Shewhart control charts"),
    ];
    for (id, prefix) in expected {
        assert!(
            cat.explanation_for(id).starts_with(prefix),
            "explanation for {id} does not start with {prefix:?}"
        );
    }
}

#[test]
fn unknown_ids_get_the_fallback_literal() {
    let cat = catalog::catalog();
    for id in ["", "pca", "svd_pca_visualization", "../etc/passwd"] {
        assert_eq!(cat.explanation_for(id), FALLBACK_EXPLANATION);
    }
    assert_eq!(
        FALLBACK_EXPLANATION,
        "No explanation available for this chart."
    );
}
