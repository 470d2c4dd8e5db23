//! WebStatus API wire types
//!
//! Response models for the web-platform compatibility endpoint
//! (`GET /v1/features?q=id:{feature_id}`). The envelope carries an array of
//! feature records; callers consume the first element.

use serde::{Deserialize, Serialize};

/// Baseline availability tier as reported by the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselineTag {
    /// Not yet available in all Baseline browsers
    Limited,
    /// Available in the latest stable version of each Baseline browser
    Newly,
    /// Consistently supported across Baseline browsers for a multi-year window
    Widely,
    /// The API has no compatibility data for this feature
    NoData,
    /// Any status string this client does not recognize
    #[default]
    #[serde(other)]
    Unknown,
}

impl BaselineTag {
    /// Wire/CSS form of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            BaselineTag::Limited => "limited",
            BaselineTag::Newly => "newly",
            BaselineTag::Widely => "widely",
            BaselineTag::NoData => "no_data",
            BaselineTag::Unknown => "unknown",
        }
    }
}

/// Baseline compatibility block of a feature record
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BaselineInfo {
    /// Availability tier; a block without one classifies as unknown
    #[serde(default)]
    pub status: BaselineTag,
    /// ISO date the feature entered its current tier
    #[serde(default)]
    pub low_date: Option<String>,
    /// ISO date the feature became widely available
    #[serde(default)]
    pub high_date: Option<String>,
}

/// Link to a specification document
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpecLink {
    /// Specification URL
    pub url: String,
    /// Human-readable title
    #[serde(default)]
    pub title: Option<String>,
}

/// Specification references for a feature
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpecInfo {
    /// Links to the defining specification(s)
    #[serde(default)]
    pub links: Option<Vec<SpecLink>>,
}

/// One web-platform feature record
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureRecord {
    /// Stable feature identifier (e.g. "flexbox")
    pub feature_id: String,
    /// Display name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Baseline compatibility data, absent when the API has none
    #[serde(default)]
    pub baseline: Option<BaselineInfo>,
    /// Specification references
    #[serde(default)]
    pub spec: Option<SpecInfo>,
}

/// Response envelope for the features endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesResponse {
    /// Matching feature records (first element consumed)
    #[serde(default)]
    pub data: Vec<FeatureRecord>,
}

impl FeaturesResponse {
    /// First matching record, if any
    pub fn into_first(self) -> Option<FeatureRecord> {
        self.data.into_iter().next()
    }
}
