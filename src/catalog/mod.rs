//! Fixed chart catalog.
//!
//! Maps each chart identifier (which doubles as the filename of the
//! pre-rendered HTML artifact) to a dropdown label and an explanation
//! paragraph. The catalog is built once and shared read-only for the
//! process lifetime; entry order is dropdown display order.

use std::sync::OnceLock;

/// Explanation returned for identifiers not present in the catalog.
pub const FALLBACK_EXPLANATION: &str = "No explanation available for this chart.";

/// One selectable chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartEntry {
    /// Identifier, also the expected filename in the chart directory.
    pub id: &'static str,
    /// Human-readable dropdown label.
    pub label: &'static str,
    /// Explanation paragraph shown next to the chart.
    pub explanation: &'static str,
}

/// Ordered, immutable sequence of chart entries.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<ChartEntry>,
}

impl Catalog {
    /// All entries in display order.
    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    /// Look up an entry by identifier.
    pub fn get(&self, id: &str) -> Option<&ChartEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Whether the identifier names a cataloged chart.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Identifier of the default selection: the first entry.
    pub fn default_id(&self) -> &'static str {
        self.entries[0].id
    }

    /// Explanation for an identifier, falling back to
    /// [`FALLBACK_EXPLANATION`] for unknown ids.
    pub fn explanation_for(&self, id: &str) -> &'static str {
        self.get(id).map_or(FALLBACK_EXPLANATION, |e| e.explanation)
    }
}

/// The process-wide catalog.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(build)
}

fn build() -> Catalog {
    Catalog {
        entries: vec![
            ChartEntry {
                id: "svd_pca_visualization.html",
                label: "3D PCA Visualization",
                explanation: "The 3D PCA visualization reduces the high-dimensional \
                    pollution data into three components for easy interpretation. \
                    This chart helps identify patterns, clusters, and anomalies in \
                    the data by showing distributions in 3D space.",
            },
            ChartEntry {
                id: "mahalanobis_distances.html",
                label: "Mahalanobis Distances",
                explanation: "Mahalanobis distance detects outliers by measuring how \
                    far a point is from the mean, considering correlations among \
                    variables. It is a powerful tool for identifying unusual patterns \
                    or anomalies in the dataset.",
            },
            ChartEntry {
                id: "ewma_control_charts.html",
                label: "EWMA Control Charts",
                explanation: "EWMA (Exponentially Weighted Moving Average) control \
                    charts smooth data over time to highlight subtle trends and \
                    detect deviations. These charts are commonly used for monitoring \
                    gradual process changes.",
            },
            ChartEntry {
                id: "cusum_control_charts.html",
                label: "CUSUM Control Charts",
                explanation: "CUSUM (Cumulative Sum) control charts accumulate \
                    deviations from the target to detect gradual shifts in process \
                    behavior. They are highly sensitive to small changes in data \
                    trends.",
            },
            ChartEntry {
                id: "shewhart_control_charts.html",
                label: "Shewhart Control Charts",
                explanation: "Shewhart control charts monitor individual data points \
                    to detect sudden changes or outliers in a process. These are \
                    ideal for identifying random or assignable variations in the \
                    data.",
            },
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
