//! Embedded HTML landing page.

use axum::response::Html;

/// Landing page document.
const HOME: &str = r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>NLP Suite // Backend</title>
    <style>
        :root {
            --bg-app: #09090b;
            --bg-panel: #121214;
            --border-subtle: #27272a;
            --text-primary: #ededed;
            --text-secondary: #a1a1aa;
            --state-success: #10b981;
            --font-sans: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            --font-mono: "JetBrains Mono", "SF Mono", Consolas, monospace;
        }
        * { box-sizing: border-box; }
        body {
            margin: 0;
            background: var(--bg-app);
            color: var(--text-primary);
            font-family: var(--font-sans);
            -webkit-font-smoothing: antialiased;
        }
        .container {
            max-width: 720px;
            margin: 0 auto;
            padding: 48px 24px;
        }
        header {
            padding-bottom: 24px;
            border-bottom: 1px solid var(--border-subtle);
        }
        h1 { font-size: 22px; margin: 0; }
        .sub { color: var(--text-secondary); margin-top: 8px; }
        .status-dot {
            display: inline-block;
            width: 8px; height: 8px;
            border-radius: 50%;
            background: var(--state-success);
            margin-right: 8px;
        }
        table { width: 100%; border-collapse: collapse; margin-top: 32px; }
        td, th {
            text-align: left;
            padding: 10px 12px;
            border-bottom: 1px solid var(--border-subtle);
            font-size: 14px;
        }
        th { color: var(--text-secondary); font-weight: 500; }
        code { font-family: var(--font-mono); color: var(--text-primary); }
        .method { color: var(--text-secondary); }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1><span class="status-dot"></span>NLP Suite Backend</h1>
            <div class="sub">Demonstration API &mdash; placeholder endpoints for the processing suite</div>
        </header>
        <table>
            <tr><th>Method</th><th>Path</th><th>Description</th></tr>
            <tr><td class="method">POST</td><td><code>/api/process</code></td><td>Process a text payload</td></tr>
            <tr><td class="method">GET</td><td><code>/api/analytics</code></td><td>Analytics results (simulated)</td></tr>
            <tr><td class="method">POST</td><td><code>/api/upload</code></td><td>File upload acknowledgment</td></tr>
            <tr><td class="method">GET</td><td><code>/api/status</code></td><td>Service status</td></tr>
        </table>
    </div>
</body>
</html>
"#;

/// Serve the static landing page.
pub async fn landing_page() -> Html<&'static str> {
    Html(HOME)
}
