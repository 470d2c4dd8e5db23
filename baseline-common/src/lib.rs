//! # Baseline Common Library
//!
//! Shared code for the baseline badge service including:
//! - WebStatus API wire types (feature records, baseline info)
//! - Status resolution (feature record -> presentation status)
//! - Date formatting helpers
//! - Known feature-id registry
//! - Configuration loading

pub mod config;
pub mod date_format;
pub mod error;
pub mod feature_ids;
pub mod models;
pub mod status;

pub use error::{Error, Result};
pub use models::{BaselineInfo, BaselineTag, FeatureRecord, FeaturesResponse};
pub use status::{resolve_status, BaselineStatus};
