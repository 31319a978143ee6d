//! Embedded correspondence resource.
//!
//! The default table is compiled in with `include_str!()` so the process-wide
//! mapper never touches the filesystem.

/// Name reported for the embedded resource in logs.
pub const CATEGORY_MAPPING_NAME: &str = "category-mapping.txt";

/// Source ad category codes to IAB tier-1 content categories.
pub const CATEGORY_MAPPING: &str = include_str!("../data/category-mapping.txt");
