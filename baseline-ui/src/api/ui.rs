//! UI routes - demo page and badge stylesheet
//!
//! Hand-written HTML/CSS (vanilla ES6+, no frameworks).

use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use baseline_common::feature_ids;
use baseline_common::models::BaselineTag;
use baseline_common::status::tier_definition;

use crate::render::render_page;
use crate::AppState;

/// Feature ids offered as starting points on the demo page
const SUGGESTED_FEATURES: [&str; 6] = [
    "flexbox",
    "grid",
    "container-queries",
    "has",
    "popover",
    "view-transitions",
];

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_page))
        .route("/styles.css", get(stylesheet))
}

/// Root page - badge lookup demo
async fn root_page() -> impl IntoResponse {
    let suggestions: String = SUGGESTED_FEATURES
        .iter()
        .map(|id| format!(r#"<a class="suggestion" href="/badge/{id}">{id}</a>"#))
        .collect();

    let legend: String = [
        ("widely", BaselineTag::Widely),
        ("newly", BaselineTag::Newly),
        ("limited", BaselineTag::Limited),
        ("no_data", BaselineTag::NoData),
    ]
    .iter()
    .map(|(name, tag)| {
        format!(
            r#"<li><span class="legend-tag {name}">{name}</span> {}</li>"#,
            tier_definition(*tag)
        )
    })
    .collect();

    let body = format!(
        r#"<h1>Baseline badge service</h1>
<p>Look up the Baseline browser-compatibility status of a web platform feature
and embed it as a badge. Data is fetched fresh from the compatibility API on
every request ({} known feature ids).</p>

<form id="lookup">
    <input id="feature-id" type="text" placeholder="feature id, e.g. flexbox" autofocus>
    <button type="submit">Show badge</button>
</form>

<p class="suggestions">Try: {suggestions}</p>

<h2>Endpoints</h2>
<ul>
    <li><code>GET /badge/&lt;feature-id&gt;</code> - embeddable HTML badge</li>
    <li><code>GET /api/status/&lt;feature-id&gt;</code> - feature record and derived status as JSON</li>
    <li><code>GET /health</code> - service health</li>
</ul>

<h2>Baseline tiers</h2>
<ul class="legend">{legend}</ul>

<script>
    document.getElementById('lookup').addEventListener('submit', (event) => {{
        event.preventDefault();
        const id = document.getElementById('feature-id').value.trim();
        if (id) {{
            window.location.href = `/badge/${{encodeURIComponent(id)}}`;
        }}
    }});
</script>"#,
        feature_ids::count()
    );

    Html(render_page("Baseline badge service", &body))
}

/// GET /styles.css - the badge stylesheet
async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

const STYLESHEET: &str = r#":root {
    --baseline-icon-widely-front: #ffffff;
    --baseline-icon-widely-back: #1ea446;
    --baseline-icon-newly-front: #1a73e8;
    --baseline-icon-newly-back: #a8c7fa;
    --baseline-icon-limited-front: #ea8600;
    --baseline-icon-limited-back: #c6c6c6;
    --baseline-icon-no-data: #80868b;
    --baseline-badge-widely-bg: #ceead6;
    --baseline-badge-widely-fg: #0d652d;
    --baseline-badge-newly-bg: #d2e3fc;
    --baseline-badge-newly-fg: #174ea6;
    --baseline-badge-limited-bg: #feefc3;
    --baseline-badge-limited-fg: #b05a00;
    --baseline-badge-unknown-bg: #e8eaed;
    --baseline-badge-unknown-fg: #3c4043;
    --baseline-surface: #ffffff;
    --baseline-text: #202124;
    --baseline-border: #dadce0;
}

@media (prefers-color-scheme: dark) {
    :root {
        --baseline-badge-widely-bg: #0d652d;
        --baseline-badge-widely-fg: #ceead6;
        --baseline-badge-newly-bg: #174ea6;
        --baseline-badge-newly-fg: #d2e3fc;
        --baseline-badge-limited-bg: #b05a00;
        --baseline-badge-limited-fg: #feefc3;
        --baseline-badge-unknown-bg: #3c4043;
        --baseline-badge-unknown-fg: #e8eaed;
        --baseline-surface: #202124;
        --baseline-text: #e8eaed;
        --baseline-border: #5f6368;
    }
}

body {
    font-family: system-ui, -apple-system, sans-serif;
    max-width: 800px;
    margin: 40px auto;
    padding: 20px;
    line-height: 1.6;
    background: var(--baseline-surface);
    color: var(--baseline-text);
}

.baseline-status {
    border: 1px solid var(--baseline-border);
    border-radius: 8px;
    padding: 16px;
    margin: 16px 0;
}

.baseline-status h2.name {
    margin: 0 0 8px;
    font-size: 1.1rem;
}

.baseline-status details > summary {
    display: flex;
    justify-content: space-between;
    align-items: center;
    cursor: pointer;
    list-style: none;
}

.baseline-status-title {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 12px;
    width: 100%;
    justify-content: space-between;
}

.baseline-status-title > div {
    display: flex;
    align-items: center;
    gap: 6px;
}

.baseline-badge {
    border-radius: 4px;
    padding: 2px 8px;
    font-size: 0.85rem;
}

.baseline-badge.widely {
    background: var(--baseline-badge-widely-bg);
    color: var(--baseline-badge-widely-fg);
}

.baseline-badge.newly,
.baseline-badge.newly-badge {
    background: var(--baseline-badge-newly-bg);
    color: var(--baseline-badge-newly-fg);
}

.baseline-badge.limited {
    background: var(--baseline-badge-limited-bg);
    color: var(--baseline-badge-limited-fg);
}

.baseline-badge.unknown,
.baseline-badge.no-data {
    background: var(--baseline-badge-unknown-bg);
    color: var(--baseline-badge-unknown-fg);
}

.baseline-badge.newly:empty {
    display: none;
}

.baseline-year {
    font-weight: 600;
}

.baseline-status-browsers {
    display: flex;
    gap: 10px;
}

.baseline-status-browsers > span {
    display: inline-flex;
    align-items: center;
    gap: 2px;
}

.support-available {
    color: var(--baseline-icon-widely-back);
}

.support-unavailable {
    color: var(--baseline-icon-limited-front);
}

.support-no_data {
    color: var(--baseline-icon-no-data);
}

.baseline-description {
    margin-top: 12px;
    font-size: 0.95rem;
}

.learn-more {
    margin-top: 8px;
}

.open-icon svg {
    fill: var(--baseline-icon-no-data);
}

form#lookup {
    display: flex;
    gap: 8px;
    margin: 16px 0;
}

form#lookup input {
    flex: 1;
    padding: 8px;
    border: 1px solid var(--baseline-border);
    border-radius: 4px;
    background: var(--baseline-surface);
    color: var(--baseline-text);
}

form#lookup button {
    padding: 8px 16px;
    border: none;
    border-radius: 4px;
    background: #0066cc;
    color: white;
    cursor: pointer;
}

.suggestions .suggestion {
    margin-right: 8px;
}

.legend .legend-tag {
    display: inline-block;
    min-width: 64px;
    text-align: center;
    border-radius: 4px;
    padding: 1px 6px;
    font-size: 0.8rem;
    margin-right: 6px;
}

.legend-tag.widely {
    background: var(--baseline-badge-widely-bg);
    color: var(--baseline-badge-widely-fg);
}

.legend-tag.newly {
    background: var(--baseline-badge-newly-bg);
    color: var(--baseline-badge-newly-fg);
}

.legend-tag.limited {
    background: var(--baseline-badge-limited-bg);
    color: var(--baseline-badge-limited-fg);
}

.legend-tag.no_data {
    background: var(--baseline-badge-unknown-bg);
    color: var(--baseline-badge-unknown-fg);
}
"#;
