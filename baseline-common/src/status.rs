//! Baseline status resolution
//!
//! Maps a fetched feature record to its presentation status. Classification
//! is a pure function of the record's baseline tier: absence of a record, of
//! the baseline block, or of a recognized status always lands on the unknown
//! tier. No input is rejected.

use serde::Serialize;

use crate::models::{BaselineTag, FeatureRecord};

/// Date pair carried by available tiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDates {
    /// When the feature entered its current tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_since: Option<String>,
    /// When the feature became widely available (widely tier only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widely_available_since: Option<String>,
}

/// Derived, read-only presentation status for a feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaselineStatus {
    /// Human-readable status message
    pub message: String,
    /// CSS-style classification tag: "widely", "newly", "limited" or "unknown"
    pub tag: &'static str,
    /// Whether the feature counts as Baseline-available
    pub available: bool,
    /// Relevant dates, present only for the available tiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<StatusDates>,
}

impl BaselineStatus {
    fn unknown(message: &str) -> Self {
        Self {
            message: message.to_string(),
            tag: "unknown",
            available: false,
            dates: None,
        }
    }
}

/// Resolve a fetched record (or its absence) to a presentation status.
///
/// # Examples
///
/// ```
/// use baseline_common::resolve_status;
///
/// let status = resolve_status(None);
/// assert_eq!(status.tag, "unknown");
/// assert!(!status.available);
/// ```
pub fn resolve_status(feature: Option<&FeatureRecord>) -> BaselineStatus {
    let Some(feature) = feature else {
        return BaselineStatus::unknown("Unknown");
    };

    let baseline = feature.baseline.as_ref();

    match baseline.map(|b| b.status) {
        Some(BaselineTag::Widely) => BaselineStatus {
            message: "Widely available".to_string(),
            tag: "widely",
            available: true,
            dates: Some(StatusDates {
                available_since: baseline.and_then(|b| b.low_date.clone()),
                widely_available_since: baseline.and_then(|b| b.high_date.clone()),
            }),
        },
        Some(BaselineTag::Newly) => BaselineStatus {
            message: "Newly available".to_string(),
            tag: "newly",
            available: true,
            dates: Some(StatusDates {
                available_since: baseline.and_then(|b| b.low_date.clone()),
                widely_available_since: None,
            }),
        },
        Some(BaselineTag::Limited) => BaselineStatus {
            message: "Limited availability".to_string(),
            tag: "limited",
            available: false,
            dates: None,
        },
        _ => BaselineStatus::unknown("Status unknown"),
    }
}

/// Badge label for a tier.
///
/// The newly tier renders an empty label: its badge shows the year chip and a
/// separate "newly available" pill instead.
pub fn status_title(tag: &str) -> &'static str {
    match tag {
        "widely" => "Widely available",
        "newly" => "",
        "limited" => "Limited availability",
        _ => "Unknown availability",
    }
}

/// Long explanatory sentence for the badge's collapsible description.
///
/// `formatted_date` is the already-formatted low date ("Month Year"); the
/// available tiers fall back to the no-data copy when it is empty.
pub fn status_description(tag: &str, formatted_date: &str) -> String {
    match tag {
        "newly" if !formatted_date.is_empty() => format!(
            "Since {formatted_date} this feature works across the latest \
             devices and browser versions. This feature might not work in \
             older devices or browsers."
        ),
        "widely" if !formatted_date.is_empty() => format!(
            "This feature is well established and works across many devices \
             and browser versions. It's been available across browsers since \
             {formatted_date}."
        ),
        "limited" => "This feature is not Baseline because it does not work in \
                      some of the most widely-used browsers."
            .to_string(),
        _ => "We currently don't have browser support information about this \
              feature."
            .to_string(),
    }
}

/// Glossary definition for a tier (MDN Baseline compatibility glossary copy)
pub fn tier_definition(tag: BaselineTag) -> &'static str {
    match tag {
        BaselineTag::Widely => {
            "Features listed as widely available have a consistent history of \
             support in each of the Baseline browsers for at least 2.5 years."
        }
        BaselineTag::Newly => {
            "Features listed as newly available work in at least the latest \
             stable version of each of the Baseline browsers, but may not work \
             with older browsers and devices."
        }
        BaselineTag::Limited => {
            "Features listed with limited availability are not yet available \
             in all browsers."
        }
        BaselineTag::NoData | BaselineTag::Unknown => "No data available on this feature.",
    }
}

/// Per-browser support class derived from the tier.
///
/// All four Baseline browsers share one class; per-browser compatibility data
/// is not consumed.
pub fn support_class(tag: &str) -> &'static str {
    match tag {
        "limited" => "unavailable",
        "newly" | "widely" => "available",
        _ => "no_data",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BaselineInfo;

    fn record(baseline: Option<BaselineInfo>) -> FeatureRecord {
        FeatureRecord {
            feature_id: "flexbox".to_string(),
            name: "CSS Flexible Box Layout".to_string(),
            description: None,
            baseline,
            spec: None,
        }
    }

    fn info(status: BaselineTag, low: Option<&str>, high: Option<&str>) -> BaselineInfo {
        BaselineInfo {
            status,
            low_date: low.map(str::to_string),
            high_date: high.map(str::to_string),
        }
    }

    #[test]
    fn test_absent_record_is_unknown() {
        let status = resolve_status(None);
        assert_eq!(status.message, "Unknown");
        assert_eq!(status.tag, "unknown");
        assert!(!status.available);
        assert!(status.dates.is_none());
    }

    #[test]
    fn test_widely_carries_both_dates() {
        let record = record(Some(info(
            BaselineTag::Widely,
            Some("2015-09-01"),
            Some("2017-03-01"),
        )));
        let status = resolve_status(Some(&record));

        assert_eq!(status.message, "Widely available");
        assert_eq!(status.tag, "widely");
        assert!(status.available);
        let dates = status.dates.unwrap();
        assert_eq!(dates.available_since.as_deref(), Some("2015-09-01"));
        assert_eq!(dates.widely_available_since.as_deref(), Some("2017-03-01"));
    }

    #[test]
    fn test_newly_never_carries_widely_date() {
        // high_date present on the wire must not leak into the projection
        let record = record(Some(info(
            BaselineTag::Newly,
            Some("2022-09-01"),
            Some("2025-03-01"),
        )));
        let status = resolve_status(Some(&record));

        assert_eq!(status.message, "Newly available");
        assert_eq!(status.tag, "newly");
        assert!(status.available);
        let dates = status.dates.unwrap();
        assert_eq!(dates.available_since.as_deref(), Some("2022-09-01"));
        assert!(dates.widely_available_since.is_none());
    }

    #[test]
    fn test_limited_has_no_dates() {
        let record = record(Some(info(BaselineTag::Limited, Some("2020-01-01"), None)));
        let status = resolve_status(Some(&record));

        assert_eq!(status.message, "Limited availability");
        assert_eq!(status.tag, "limited");
        assert!(!status.available);
        assert!(status.dates.is_none());
    }

    #[test]
    fn test_missing_baseline_block_is_status_unknown() {
        let record = record(None);
        let status = resolve_status(Some(&record));

        assert_eq!(status.message, "Status unknown");
        assert_eq!(status.tag, "unknown");
        assert!(!status.available);
        assert!(status.dates.is_none());
    }

    #[test]
    fn test_no_data_and_unrecognized_status_are_unknown() {
        for tag in [BaselineTag::NoData, BaselineTag::Unknown] {
            let record = record(Some(info(tag, None, None)));
            let status = resolve_status(Some(&record));
            assert_eq!(status.message, "Status unknown");
            assert_eq!(status.tag, "unknown");
            assert!(!status.available);
        }
    }

    #[test]
    fn test_widely_without_dates_still_available() {
        // The projection carries the date pair even when both fields are absent
        let record = record(Some(info(BaselineTag::Widely, None, None)));
        let status = resolve_status(Some(&record));
        assert!(status.available);
        let dates = status.dates.unwrap();
        assert!(dates.available_since.is_none());
        assert!(dates.widely_available_since.is_none());
    }

    #[test]
    fn test_serialized_date_field_names() {
        let record = record(Some(info(
            BaselineTag::Widely,
            Some("2015-09-01"),
            Some("2017-03-01"),
        )));
        let status = resolve_status(Some(&record));
        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["tag"], "widely");
        assert_eq!(json["available"], true);
        assert_eq!(json["dates"]["availableSince"], "2015-09-01");
        assert_eq!(json["dates"]["widelyAvailableSince"], "2017-03-01");
    }

    #[test]
    fn test_unknown_status_serializes_without_dates_key() {
        let json = serde_json::to_value(resolve_status(None)).unwrap();
        assert!(json.get("dates").is_none());
    }

    #[test]
    fn test_status_title() {
        assert_eq!(status_title("widely"), "Widely available");
        assert_eq!(status_title("newly"), "");
        assert_eq!(status_title("limited"), "Limited availability");
        assert_eq!(status_title("unknown"), "Unknown availability");
    }

    #[test]
    fn test_status_description_copy() {
        let newly = status_description("newly", "September 2022");
        assert!(newly.starts_with("Since September 2022"));

        let widely = status_description("widely", "March 2017");
        assert!(widely.contains("available across browsers since March 2017"));

        let limited = status_description("limited", "");
        assert!(limited.contains("not Baseline"));

        // Available tiers without a date fall back to the no-data copy
        let dateless = status_description("widely", "");
        assert!(dateless.contains("don't have browser support information"));
    }

    #[test]
    fn test_support_class() {
        assert_eq!(support_class("limited"), "unavailable");
        assert_eq!(support_class("newly"), "available");
        assert_eq!(support_class("widely"), "available");
        assert_eq!(support_class("unknown"), "no_data");
    }

    #[test]
    fn test_tier_definitions_distinct() {
        assert!(tier_definition(BaselineTag::Widely).contains("2.5 years"));
        assert!(tier_definition(BaselineTag::Newly).contains("latest"));
        assert!(tier_definition(BaselineTag::Limited).contains("not yet available"));
        assert_eq!(
            tier_definition(BaselineTag::NoData),
            tier_definition(BaselineTag::Unknown)
        );
    }
}
