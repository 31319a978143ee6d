//! Destination taxonomy types for ad category mapping.
//!
//! This crate provides:
//!
//! - [`TaxonomyCategory`]: the code-to-member resolver every destination
//!   taxonomy implements
//! - [`ContentCategory`]: the IAB tier-1 content categories used by OpenRTB
//! - [`SourceCode`] and [`GENERIC_SOURCE_CODE`]: the origin taxonomy's integer codes
//!
//! # Example
//!
//! ```
//! use adcat_model::{ContentCategory, TaxonomyCategory};
//!
//! let arts = ContentCategory::from_code(1).unwrap();
//! assert_eq!(arts, ContentCategory::ArtsEntertainment);
//! assert_eq!(arts.iab_id(), "IAB1");
//! ```

pub mod category;
pub mod traits;

pub use category::{ContentCategory, ParseCategoryError};
pub use traits::TaxonomyCategory;

/// Integer identifier from the origin (source) taxonomy.
pub type SourceCode = u32;

/// Reserved source code marking the generic/fallback category.
///
/// When a destination category maps to both this code and a more specific one,
/// the generic code wins.
pub const GENERIC_SOURCE_CODE: SourceCode = 0;
