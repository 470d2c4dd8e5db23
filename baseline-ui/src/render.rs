//! Badge HTML rendering
//!
//! Server-side rendering of the baseline status badge: a self-contained
//! `<div class="baseline-status">` fragment suitable for embedding, plus a
//! standalone page wrapper. Markup is hand-templated strings; all dynamic
//! text is escaped.

use baseline_common::date_format::{format_month_year_opt, year_of};
use baseline_common::models::FeatureRecord;
use baseline_common::status::{resolve_status, status_description, status_title, support_class};

const BASELINE_BROWSERS: [&str; 4] = ["chrome", "edge", "firefox", "safari"];

/// Escape text for interpolation into HTML
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Tier icon (two-shape Baseline glyph, dashed "?" circle for unknown)
fn tier_icon(tag: &str) -> String {
    let svg = match tag {
        "limited" => {
            r##"<svg width="36" height="20" viewBox="0 0 36 20" aria-hidden="true"><path d="M15 3L21 13H9L15 3Z" fill="var(--baseline-icon-limited-front)"/><circle cx="27" cy="10" r="7" fill="var(--baseline-icon-limited-back)"/></svg>"##
        }
        "widely" => {
            r##"<svg width="36" height="20" viewBox="0 0 36 20" aria-hidden="true"><circle cx="9" cy="10" r="8" fill="var(--baseline-icon-widely-back)"/><path d="M5 10L8 13L13 7" stroke="var(--baseline-icon-widely-front)" stroke-width="2" fill="none"/><circle cx="27" cy="10" r="7" fill="var(--baseline-icon-widely-back)"/></svg>"##
        }
        "newly" => {
            r##"<svg width="36" height="20" viewBox="0 0 36 20" aria-hidden="true"><circle cx="9" cy="10" r="8" fill="var(--baseline-icon-newly-back)"/><circle cx="9" cy="10" r="3" fill="var(--baseline-icon-newly-front)"/><circle cx="27" cy="10" r="7" fill="var(--baseline-icon-newly-back)"/></svg>"##
        }
        _ => {
            r##"<svg width="36" height="20" viewBox="0 0 36 20" aria-hidden="true"><circle cx="18" cy="10" r="8" fill="none" stroke="var(--baseline-icon-no-data)" stroke-width="2" stroke-dasharray="2,2"/><text x="18" y="14" text-anchor="middle" font-size="12" fill="var(--baseline-icon-no-data)">?</text></svg>"##
        }
    };
    format!(r#"<span class="baseline-icon {tag}">{svg}</span>"#)
}

/// Stylized browser logo glyph
fn browser_icon(name: &str) -> String {
    let svg = match name {
        "chrome" => {
            r##"<svg width="16" height="16" viewBox="0 0 16 16" aria-hidden="true"><circle cx="8" cy="8" r="7" fill="#4285F4"/><circle cx="8" cy="8" r="4" fill="white"/><circle cx="8" cy="8" r="2" fill="#4285F4"/></svg>"##
        }
        "edge" => {
            r##"<svg width="16" height="16" viewBox="0 0 16 16" aria-hidden="true"><path d="M2 8C2 4.7 4.7 2 8 2C11.3 2 14 4.7 14 8C14 11.3 11.3 14 8 14C4.7 14 2 11.3 2 8Z" fill="#0078D4"/></svg>"##
        }
        "firefox" => {
            r##"<svg width="16" height="16" viewBox="0 0 16 16" aria-hidden="true"><circle cx="8" cy="8" r="7" fill="#FF7139"/><path d="M5 6C5 4 6.5 3 8 3C9.5 3 11 4 11 6V10C11 12 9.5 13 8 13C6.5 13 5 12 5 10V6Z" fill="white"/></svg>"##
        }
        _ => {
            r##"<svg width="16" height="16" viewBox="0 0 16 16" aria-hidden="true"><circle cx="8" cy="8" r="7" fill="#007AFF"/><path d="M6 10C6 8.5 7 7.5 8 7.5C9 7.5 10 8.5 10 10V11C10 12.5 9 13.5 8 13.5C7 13.5 6 12.5 6 11V10Z" fill="white"/></svg>"##
        }
    };
    format!(r#"<span class="browser-icon {name}">{svg}</span>"#)
}

/// Per-browser support marker (check / cross / question)
fn support_icon(class: &str) -> String {
    let svg = match class {
        "available" => {
            r##"<svg width="12" height="12" viewBox="0 0 12 12" aria-hidden="true"><circle cx="6" cy="6" r="5" fill="currentColor"/><path d="M3 6L5 8L9 4" stroke="white" stroke-width="1.5" fill="none"/></svg>"##
        }
        "unavailable" => {
            r##"<svg width="12" height="12" viewBox="0 0 12 12" aria-hidden="true"><circle cx="6" cy="6" r="5" fill="currentColor"/><path d="M4 4L8 8M8 4L4 8" stroke="white" stroke-width="1.5"/></svg>"##
        }
        _ => {
            r##"<svg width="12" height="12" viewBox="0 0 12 12" aria-hidden="true"><circle cx="6" cy="6" r="5" fill="currentColor"/><text x="6" y="8" text-anchor="middle" font-size="8" fill="white">?</text></svg>"##
        }
    };
    format!(r#"<span class="support-icon {class}">{svg}</span>"#)
}

const OPEN_ICON: &str = r##"<div class="open-icon"><svg viewBox="0 0 24 24" width="12" height="12" aria-hidden="true"><path d="M7.41 8.58L12 13.17l4.59-4.59L18 10l-6 6-6-6l1.41-1.42z"/></svg></div>"##;

fn browsers_row(class: &str) -> String {
    let mut row = String::from(r#"<div class="baseline-status-browsers">"#);
    for browser in BASELINE_BROWSERS {
        row.push_str(&format!(
            r#"<span class="support-{class}">{}{}</span>"#,
            browser_icon(browser),
            support_icon(class)
        ));
    }
    row.push_str("</div>");
    row
}

/// Render the badge fragment for a fetched record (or its absence).
///
/// `requested_id` is the id the caller asked about; it labels the
/// unknown-state badge when no record came back.
pub fn render_badge(requested_id: &str, feature: Option<&FeatureRecord>) -> String {
    let Some(feature) = feature else {
        return render_unknown_badge(requested_id);
    };

    let status = resolve_status(Some(feature));
    let tag = status.tag;
    let low_date = feature.baseline.as_ref().and_then(|b| b.low_date.as_deref());
    let formatted_date = format_month_year_opt(low_date);

    let name = escape_html(&feature.name);
    let icon = tier_icon(tag);

    // "Baseline" label accompanies the available tiers only
    let label = if tag == "widely" || tag == "newly" {
        "<strong>Baseline</strong>"
    } else {
        ""
    };

    let badge = format!(
        r#"<span class="baseline-badge {tag}">{}</span>"#,
        status_title(tag)
    );

    // The newly badge shows a year chip and a separate pill instead of a title
    let mut newly_extras = String::new();
    if tag == "newly" {
        if let Some(date) = low_date {
            let year = year_of(date);
            if !year.is_empty() {
                newly_extras.push_str(&format!(r#"<span class="baseline-year">{year}</span>"#));
            }
        }
        newly_extras.push_str(r#"<span class="baseline-badge newly-badge">newly available</span>"#);
    }

    let browsers = browsers_row(support_class(tag));
    let description = escape_html(&status_description(tag, &formatted_date));

    let learn_more = if tag != "unknown" {
        format!(
            r#"<div class="learn-more"><a href="https://web.dev/baseline/{}" target="_blank" rel="noopener noreferrer">Learn more</a></div>"#,
            escape_html(&feature.feature_id)
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="baseline-status">
  <div class="baseline-content">
    <h2 class="name">{name}</h2>
    <details>
      <summary>
        <div class="baseline-status-title">
          <div>{icon}{label}{badge}{newly_extras}</div>
          {browsers}
        </div>
        {OPEN_ICON}
      </summary>
      <div class="baseline-description">{description}{learn_more}</div>
    </details>
  </div>
</div>"#
    )
}

/// Unknown-state badge for a feature the API returned no record for
fn render_unknown_badge(requested_id: &str) -> String {
    let heading = if requested_id.is_empty() {
        "Unknown feature".to_string()
    } else {
        escape_html(requested_id)
    };
    let icon = tier_icon("unknown");
    let browsers = browsers_row("no_data");
    let description = escape_html(&status_description("unknown", ""));

    format!(
        r#"<div class="baseline-status">
  <div class="baseline-error-state">
    <h2 class="name">{heading}</h2>
    <div class="baseline-status-title">
      <div>{icon}<strong>Baseline</strong><span class="baseline-badge unknown">Unknown availability</span></div>
      {browsers}
    </div>
    <details>
      <summary>{description}{OPEN_ICON}</summary>
    </details>
  </div>
</div>"#
    )
}

/// Wrap a badge fragment in a standalone demo document
pub fn render_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <link rel="stylesheet" href="/styles.css">
</head>
<body>
{body}
</body>
</html>"#,
        escape_html(title)
    )
}
