//! polldash — pollution data monitoring dashboard.
//!
//! Serves a fixed catalog of pre-rendered analytical charts (PCA,
//! Mahalanobis distances, EWMA/CUSUM/Shewhart control charts) through an
//! embedded single-page dashboard. The chart HTML files themselves are
//! produced by an external analysis pipeline; this binary only catalogs,
//! resolves, and displays them.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod resolver;
pub mod web;
