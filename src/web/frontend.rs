//! Embedded HTML/CSS/JS frontend for the polldash dashboard.
//!
//! The entire page is compiled into the binary as a string constant.
//! No external assets, no build tools, no CDN dependencies. The chart
//! documents themselves are injected client-side into an iframe via
//! `srcdoc`, keeping their scripts isolated from the dashboard page.

/// Placeholder in [`INDEX_HTML`] replaced with the configured page title.
pub const TITLE_PLACEHOLDER: &str = "__DASHBOARD_TITLE__";

/// The complete single-page dashboard HTML.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__DASHBOARD_TITLE__</title>
<style>
:root {
  --bg: #f5f6f8;
  --surface: #ffffff;
  --border: #dee2e6;
  --text: #343a40;
  --text-muted: #6c757d;
  --accent: #007bff;
  --red: #dc3545;
  --radius: 8px;
  --shadow: 0px 4px 6px rgba(0, 0, 0, 0.1);
  --font: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
}

* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  background: var(--bg);
  color: var(--text);
  font-family: var(--font);
  font-size: 15px;
  line-height: 1.5;
}

.app {
  max-width: 1100px;
  margin: 0 auto;
  padding: 24px;
}

header {
  text-align: center;
  margin-top: 20px;
  margin-bottom: 40px;
}

header h1 {
  font-size: 28px;
  font-weight: 600;
  color: var(--text);
}

/* Chart selector */
.selector {
  text-align: center;
  margin-bottom: 30px;
}

.selector label {
  display: block;
  font-weight: bold;
  font-size: 18px;
  margin-bottom: 10px;
}

.selector select {
  width: 70%;
  max-width: 640px;
  padding: 8px 12px;
  font-size: 15px;
  color: var(--text);
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

/* Cards */
.card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  padding: 20px;
  margin-bottom: 20px;
}

.card h2 {
  font-size: 18px;
  margin-bottom: 12px;
}

.card h2.explanation-title { color: var(--accent); }
.card h2.chart-title { color: var(--text); text-align: center; }

#explanation {
  text-align: justify;
  font-size: 16px;
  line-height: 1.8;
}

/* Chart frame */
#chart-frame {
  width: 100%;
  height: 600px;
  border: 2px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  background: var(--surface);
}

#chart-unavailable {
  display: none;
  padding: 60px 20px;
  text-align: center;
  color: var(--red);
  border: 2px dashed var(--border);
  border-radius: var(--radius);
}

#chart-unavailable .hint {
  margin-top: 8px;
  color: var(--text-muted);
  font-size: 13px;
}

footer {
  text-align: center;
  color: var(--text-muted);
  font-size: 12px;
  margin-top: 24px;
}
</style>
</head>
<body>
<div class="app">
  <header>
    <h1>__DASHBOARD_TITLE__</h1>
  </header>

  <div class="selector">
    <label for="chart-select">Select a Chart to Display</label>
    <select id="chart-select"></select>
  </div>

  <div class="card">
    <h2 class="explanation-title">Chart Explanation</h2>
    <p id="explanation"></p>
  </div>

  <div class="card">
    <h2 class="chart-title">Chart View</h2>
    <iframe id="chart-frame" sandbox="allow-scripts"></iframe>
    <div id="chart-unavailable">
      <div id="chart-unavailable-msg"></div>
      <div class="hint">Re-run the analysis pipeline to regenerate this chart file.</div>
    </div>
  </div>

  <footer>polldash &middot; charts are pre-rendered by the analysis pipeline</footer>
</div>

<script>
const select = document.getElementById('chart-select');
const explanation = document.getElementById('explanation');
const frame = document.getElementById('chart-frame');
const unavailable = document.getElementById('chart-unavailable');
const unavailableMsg = document.getElementById('chart-unavailable-msg');

// ---------------------------------------------------------------------------
// Data loading
// ---------------------------------------------------------------------------
async function loadCatalog() {
  const res = await fetch('/api/catalog');
  const data = await res.json();

  for (const entry of data.entries) {
    const opt = document.createElement('option');
    opt.value = entry.id;
    opt.textContent = entry.label;
    select.appendChild(opt);
  }

  select.value = data.default_id;
  await loadChart(select.value);
}

async function loadChart(id) {
  const res = await fetch('/api/chart?id=' + encodeURIComponent(id));
  const data = await res.json();

  explanation.textContent = data.explanation.trim();

  if (data.available) {
    frame.srcdoc = data.content;
    frame.style.display = 'block';
    unavailable.style.display = 'none';
  } else {
    unavailableMsg.textContent = 'Chart unavailable: ' + (data.error || 'unknown error');
    frame.style.display = 'none';
    unavailable.style.display = 'block';
  }
}

select.addEventListener('change', () => loadChart(select.value));

// ---------------------------------------------------------------------------
// Init
// ---------------------------------------------------------------------------
loadCatalog();
</script>
</body>
</html>"##;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
