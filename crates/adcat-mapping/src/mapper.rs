//! The read-only lookup API.
//!
//! A [`CategoryMapper`] is built once from a correspondence resource and never
//! mutated afterwards, so it can be shared freely between threads. Lookups
//! borrow from the frozen tables; misses yield empty sets and empty strings.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use adcat_model::{ContentCategory, GENERIC_SOURCE_CODE, SourceCode, TaxonomyCategory};

use crate::builder::MappingTables;
use crate::config::{MappingConfig, MappingSource};
use crate::embedded;
use crate::error::{MappingError, Result};
use crate::parser::{self, LoadReport};
use crate::resolver::{self, Resolution};

static SHARED: LazyLock<CategoryMapper<ContentCategory>> =
    LazyLock::new(CategoryMapper::embedded);

/// Process-wide mapper built from the embedded resource.
///
/// The first caller builds the tables; concurrent first callers block until
/// that build finishes and then all see the same instance.
pub fn shared() -> &'static CategoryMapper<ContentCategory> {
    &SHARED
}

/// Bidirectional translation between source codes and destination categories.
#[derive(Debug, Clone)]
pub struct CategoryMapper<C> {
    tables: MappingTables<C>,
    report: LoadReport,
    no_categories: BTreeSet<C>,
    no_sources: BTreeSet<SourceCode>,
    generic_only: BTreeSet<SourceCode>,
}

impl<C: TaxonomyCategory> CategoryMapper<C> {
    /// Build from resource text, keeping every valid record.
    pub fn parse(content: &str) -> Self {
        Self::parse_with(content, "<memory>", None)
    }

    /// Build from resource text.
    ///
    /// `resource` names the input in log output only. With `max_source_code`
    /// set, records naming a larger source code are dropped.
    pub fn parse_with(
        content: &str,
        resource: &str,
        max_source_code: Option<SourceCode>,
    ) -> Self {
        let parsed = parser::parse_resource::<C>(content, resource, max_source_code);
        let tables = MappingTables::build(parsed.records);

        tracing::info!(
            resource = %resource,
            categories = tables.forward.len(),
            source_codes = tables.source_count(),
            pairs = tables.pair_count(),
            dropped = parsed.report.dropped(),
            "Built category mapping"
        );

        Self {
            tables,
            report: parsed.report,
            no_categories: BTreeSet::new(),
            no_sources: BTreeSet::new(),
            generic_only: BTreeSet::from([GENERIC_SOURCE_CODE]),
        }
    }

    /// Build from any reader.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::ResourceRead`] if the reader fails or yields
    /// invalid UTF-8.
    pub fn from_reader<R: Read>(
        mut reader: R,
        max_source_code: Option<SourceCode>,
    ) -> Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|source| MappingError::ResourceRead { source })?;
        Ok(Self::parse_with(&content, "<reader>", max_source_code))
    }

    /// Build from a resource file.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::ResourceLoad`] if the file is missing or unreadable.
    pub fn from_path(path: &Path, max_source_code: Option<SourceCode>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| MappingError::load(path, source))?;
        Ok(Self::parse_with(
            &content,
            &path.display().to_string(),
            max_source_code,
        ))
    }

    /// Build from the resource compiled into the binary.
    pub fn embedded() -> Self {
        Self::parse_with(
            embedded::CATEGORY_MAPPING,
            embedded::CATEGORY_MAPPING_NAME,
            None,
        )
    }

    /// Build from the source named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::ResourceLoad`] if a configured file cannot be read.
    pub fn load(config: &MappingConfig) -> Result<Self> {
        match &config.source {
            MappingSource::Embedded => Ok(Self::parse_with(
                embedded::CATEGORY_MAPPING,
                embedded::CATEGORY_MAPPING_NAME,
                config.max_source_code,
            )),
            MappingSource::File(path) => Self::from_path(path, config.max_source_code),
        }
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Destination categories for a source code; empty when no record named it.
    pub fn map_to_destination(&self, code: SourceCode) -> &BTreeSet<C> {
        self.tables
            .inverse
            .get(code)
            .unwrap_or(&self.no_categories)
    }

    /// Source codes for a destination category, after ambiguity collapse.
    ///
    /// A category mapped to both the generic code and specific codes yields
    /// only the generic code.
    pub fn map_to_source(&self, category: C) -> &BTreeSet<SourceCode> {
        let raw = self.raw_sources(category);
        match resolver::resolve(raw) {
            Resolution::Unchanged => raw,
            Resolution::Generic => &self.generic_only,
        }
    }

    /// Union of [`map_to_destination`](Self::map_to_destination) over `codes`,
    /// added to `into` when given.
    pub fn map_many_to_destination<I>(&self, codes: I, into: Option<BTreeSet<C>>) -> BTreeSet<C>
    where
        I: IntoIterator<Item = SourceCode>,
    {
        let mut result = into.unwrap_or_default();
        for code in codes {
            result.extend(self.map_to_destination(code).iter().copied());
        }
        result
    }

    /// Union of [`map_to_source`](Self::map_to_source) over `categories`,
    /// added to `into` when given.
    pub fn map_many_to_source<I>(
        &self,
        categories: I,
        into: Option<BTreeSet<SourceCode>>,
    ) -> BTreeSet<SourceCode>
    where
        I: IntoIterator<Item = C>,
    {
        let mut result = into.unwrap_or_default();
        for category in categories {
            result.extend(self.map_to_source(category).iter().copied());
        }
        result
    }

    /// Description of a destination category, or `""` if never observed.
    pub fn description_for_destination(&self, category: C) -> &str {
        self.tables
            .category_descriptions
            .get(&category)
            .map_or("", String::as_str)
    }

    /// Description of a source code, or `""` if never observed.
    pub fn description_for_source(&self, code: SourceCode) -> &str {
        self.tables
            .source_descriptions
            .get(code)
            .map_or("", String::as_str)
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Source codes for a category before ambiguity collapse.
    pub fn raw_sources(&self, category: C) -> &BTreeSet<SourceCode> {
        self.tables
            .forward
            .get(&category)
            .unwrap_or(&self.no_sources)
    }

    /// Categories that appear in at least one record, in order.
    pub fn categories(&self) -> impl Iterator<Item = C> + '_ {
        self.tables.forward.keys().copied()
    }

    /// Source codes named by at least one record, in order.
    pub fn source_codes(&self) -> impl Iterator<Item = SourceCode> + '_ {
        self.tables
            .inverse
            .iter()
            .filter(|(_, categories)| !categories.is_empty())
            .map(|(code, _)| code)
    }

    /// Number of distinct source codes named by any record.
    pub fn source_count(&self) -> usize {
        self.tables.source_count()
    }

    /// Largest source code in the tables.
    pub fn max_source_code(&self) -> Option<SourceCode> {
        self.tables.inverse.max_code()
    }

    pub fn destination_descriptions(&self) -> &BTreeMap<C, String> {
        &self.tables.category_descriptions
    }

    /// Source code descriptions, in code order, for every code a record named.
    pub fn source_descriptions(&self) -> impl Iterator<Item = (SourceCode, &str)> + '_ {
        self.source_codes()
            .map(move |code| (code, self.description_for_source(code)))
    }

    /// What happened to each line of the resource.
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Number of distinct (category, source code) pairs.
    pub fn pair_count(&self) -> usize {
        self.tables.pair_count()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.forward.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1|Arts|0|Generic\n2|Autos|0|Generic\n1|Arts|100|ArtsSrc\n";

    #[test]
    fn test_single_record() {
        let mapper = CategoryMapper::<ContentCategory>::parse("1|Arts|100|ArtsSrc");
        assert_eq!(
            mapper.map_to_destination(100),
            &BTreeSet::from([ContentCategory::ArtsEntertainment])
        );
        assert_eq!(
            mapper.map_to_source(ContentCategory::ArtsEntertainment),
            &BTreeSet::from([100])
        );
    }

    #[test]
    fn test_generic_collapse() {
        let mapper = CategoryMapper::<ContentCategory>::parse(SAMPLE);
        assert_eq!(
            mapper.raw_sources(ContentCategory::ArtsEntertainment),
            &BTreeSet::from([0, 100])
        );
        assert_eq!(
            mapper.map_to_source(ContentCategory::ArtsEntertainment),
            &BTreeSet::from([0])
        );
        assert_eq!(
            mapper.map_to_source(ContentCategory::Automotive),
            &BTreeSet::from([0])
        );
    }

    #[test]
    fn test_source_direction_has_no_collapse() {
        let mapper = CategoryMapper::<ContentCategory>::parse(SAMPLE);
        assert_eq!(
            mapper.map_to_destination(0),
            &BTreeSet::from([
                ContentCategory::ArtsEntertainment,
                ContentCategory::Automotive
            ])
        );
    }

    #[test]
    fn test_misses_are_empty() {
        let mapper = CategoryMapper::<ContentCategory>::parse(SAMPLE);
        assert!(mapper.map_to_destination(50).is_empty());
        assert!(mapper.map_to_destination(101).is_empty());
        assert!(mapper.map_to_destination(SourceCode::MAX).is_empty());
        assert!(mapper.map_to_source(ContentCategory::News).is_empty());
        assert_eq!(mapper.description_for_destination(ContentCategory::News), "");
        assert_eq!(mapper.description_for_source(50), "");
        assert_eq!(mapper.description_for_source(101), "");
    }

    #[test]
    fn test_descriptions() {
        let mapper = CategoryMapper::<ContentCategory>::parse(SAMPLE);
        assert_eq!(
            mapper.description_for_destination(ContentCategory::Automotive),
            "Autos"
        );
        assert_eq!(mapper.description_for_source(0), "Generic");
        assert_eq!(mapper.description_for_source(100), "ArtsSrc");
        assert_eq!(
            mapper.source_descriptions().collect::<Vec<_>>(),
            vec![(0, "Generic"), (100, "ArtsSrc")]
        );
        assert_eq!(mapper.source_count(), 2);
        assert_eq!(mapper.max_source_code(), Some(100));
    }

    #[test]
    fn test_large_source_code_is_kept() {
        let mapper = CategoryMapper::<ContentCategory>::parse("1|Arts|70000|Big\n");
        assert_eq!(
            mapper.map_to_destination(70_000),
            &BTreeSet::from([ContentCategory::ArtsEntertainment])
        );
        assert_eq!(mapper.description_for_source(70_000), "Big");
        assert_eq!(
            mapper.map_to_source(ContentCategory::ArtsEntertainment),
            &BTreeSet::from([70_000])
        );
        assert_eq!(mapper.max_source_code(), Some(70_000));
        assert!(mapper.map_to_destination(69_999).is_empty());
        assert_eq!(mapper.report().dropped(), 0);
    }

    #[test]
    fn test_extreme_source_code_stays_sparse() {
        let content = format!("12|News|{}|Last\n12|News|16|News\n", SourceCode::MAX);
        let mapper = CategoryMapper::<ContentCategory>::parse(&content);
        assert_eq!(
            mapper.source_codes().collect::<Vec<_>>(),
            vec![16, SourceCode::MAX]
        );
        assert_eq!(mapper.description_for_source(SourceCode::MAX), "Last");
    }

    #[test]
    fn test_batch_into_existing_set() {
        let mapper = CategoryMapper::<ContentCategory>::parse(SAMPLE);
        let seeded = BTreeSet::from([ContentCategory::News]);
        let result = mapper.map_many_to_destination([100, 7], Some(seeded));
        assert_eq!(
            result,
            BTreeSet::from([ContentCategory::ArtsEntertainment, ContentCategory::News])
        );

        let sources = mapper.map_many_to_source(
            [ContentCategory::ArtsEntertainment, ContentCategory::Automotive],
            Some(BTreeSet::from([42])),
        );
        assert_eq!(sources, BTreeSet::from([0, 42]));
    }

    #[test]
    fn test_empty_resource() {
        let mapper = CategoryMapper::<ContentCategory>::parse("");
        assert!(mapper.is_empty());
        assert_eq!(mapper.max_source_code(), None);
        assert!(mapper.map_to_destination(0).is_empty());
        assert_eq!(mapper.description_for_source(0), "");
    }

    #[test]
    fn test_shared_is_built_once() {
        let first = shared();
        let second = shared();
        assert!(std::ptr::eq(first, second));
        assert!(!first.is_empty());
    }
}
