//! Embedded web dashboard for polldash.
//!
//! A lightweight HTTP server (sync, via `tiny_http`) that serves:
//! - The single-page dashboard with the chart dropdown
//! - JSON API endpoints for the catalog, chart resolution, and health
//!
//! Launched via `polldash serve` (default: `http://127.0.0.1:9748`).

mod api;
mod frontend;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tiny_http::{Header, Method, Response, Server, StatusCode};

use crate::config::PolldashConfig;

// ---------------------------------------------------------------------------
// Server entry point
// ---------------------------------------------------------------------------

/// Start the dashboard server with the given configuration.
///
/// Blocks the current thread and handles requests sequentially, which is
/// sufficient for a small single-user dashboard. Handler errors are
/// answered per-request; only a failed bind aborts startup.
pub fn serve(cfg: &PolldashConfig) -> Result<()> {
    let chart_dir = PathBuf::from(&cfg.charts.dir);
    let addr = cfg.listen_addr();
    let server = Server::http(&addr)
        .map_err(|e| anyhow::anyhow!("failed to start HTTP server on {addr}: {e}"))?;

    println!("polldash dashboard running at http://{addr}");
    println!("serving charts from {}", chart_dir.display());
    println!("Press Ctrl+C to stop.\n");

    if cfg.server.open_browser {
        let _ = open_browser(&format!("http://{addr}"));
    }

    for request in server.incoming_requests() {
        let method = request.method().clone();
        let url = request.url().to_string();

        match dispatch(&method, &url, &chart_dir, &cfg.ui.title) {
            Ok(resp) => {
                let _ = request.respond(resp);
            }
            Err(e) => {
                let body = serde_json::json!({ "error": e.to_string() }).to_string();
                let resp = Response::from_data(body.into_bytes())
                    .with_header(content_type_json())
                    .with_status_code(StatusCode(500));
                let _ = request.respond(resp);
            }
        }

        // Brief access log
        println!(
            "{} {} {}",
            method,
            url,
            chrono::Local::now().format("%H:%M:%S")
        );
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Dispatch an incoming request to the appropriate handler.
fn dispatch(
    method: &Method,
    url: &str,
    chart_dir: &Path,
    title: &str,
) -> Result<Response<Cursor<Vec<u8>>>> {
    // Strip query string for path matching
    let path = url.split('?').next().unwrap_or(url);

    match (method, path) {
        // Frontend
        (&Method::Get, "/") | (&Method::Get, "/index.html") => Ok(serve_frontend(title)),

        // API
        (&Method::Get, "/api/catalog") => api::get_catalog(),
        (&Method::Get, "/api/chart") => api::get_chart(url, chart_dir),
        (&Method::Get, "/api/health") => api::get_health(chart_dir),

        // 404
        _ => Ok(not_found()),
    }
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

/// Serve the embedded single-page frontend with the configured title.
fn serve_frontend(title: &str) -> Response<Cursor<Vec<u8>>> {
    let html = frontend::INDEX_HTML.replace(frontend::TITLE_PLACEHOLDER, title);
    Response::from_data(html.into_bytes())
        .with_header(content_type_html())
        .with_status_code(StatusCode(200))
}

/// 404 response.
fn not_found() -> Response<Cursor<Vec<u8>>> {
    let body = r#"{"error": "not found"}"#;
    Response::from_data(body.as_bytes().to_vec())
        .with_header(content_type_json())
        .with_status_code(StatusCode(404))
}

/// JSON content type header.
pub(crate) fn content_type_json() -> Header {
    Header::from_bytes("Content-Type", "application/json; charset=utf-8").unwrap()
}

/// HTML content type header.
fn content_type_html() -> Header {
    Header::from_bytes("Content-Type", "text/html; charset=utf-8").unwrap()
}

/// Attempt to open a URL in the system default browser.
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", url])
            .spawn()
            .context("failed to open browser")?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(url)
            .spawn()
            .context("failed to open browser")?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(url)
            .spawn()
            .context("failed to open browser")?;
    }

    Ok(())
}
