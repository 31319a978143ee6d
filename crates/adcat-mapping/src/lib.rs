//! Bidirectional mapping between source ad category codes and IAB content
//! categories.
//!
//! This crate provides:
//!
//! - **Resource parsing** of `|`-separated correspondence lines ([`parser`])
//! - **Table construction**: a forward multimap and its derived inverse ([`builder`])
//! - **Ambiguity collapse** toward the generic source code ([`resolver`])
//! - **Lookups** through the immutable [`CategoryMapper`] ([`mapper`])
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use adcat_mapping::CategoryMapper;
//! use adcat_model::ContentCategory;
//!
//! let mapper = CategoryMapper::<ContentCategory>::parse("1|Arts|100|ArtsSrc\n");
//!
//! assert_eq!(
//!     mapper.map_to_destination(100),
//!     &BTreeSet::from([ContentCategory::ArtsEntertainment])
//! );
//! assert_eq!(mapper.description_for_source(100), "ArtsSrc");
//! ```
//!
//! The process-wide default mapper is built lazily from the embedded resource:
//!
//! ```
//! use adcat_model::ContentCategory;
//!
//! let news = adcat_mapping::shared().map_to_source(ContentCategory::News);
//! assert!(news.contains(&16));
//! ```

pub mod builder;
pub mod config;
pub mod embedded;
pub mod error;
pub mod mapper;
pub mod parser;
pub mod resolver;

pub use builder::{DENSE_SOURCE_LIMIT, MappingTables, SourceTable};
pub use config::{MAPPING_FILE_ENV_VAR, MappingConfig, MappingSource};
pub use error::{MappingError, Result};
pub use mapper::{CategoryMapper, shared};
pub use parser::{CorrespondenceRecord, LoadReport, ParsedResource, parse_line, parse_resource};
pub use resolver::{Resolution, is_ambiguous_generic};
