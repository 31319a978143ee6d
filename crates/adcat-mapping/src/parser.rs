//! Correspondence resource parsing.
//!
//! Each data line carries four `|`-separated fields:
//!
//! ```text
//! <destination code>|<destination description>|<source code>|<source description>
//! ```
//!
//! Lines that do not match the grammar (blank lines, `#` comments, garbage)
//! are skipped without a warning. Lines that match but name an unknown
//! destination code are dropped with a warning so that a newer resource keeps
//! loading against an older taxonomy.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use adcat_model::{SourceCode, TaxonomyCategory};

/// Number of dropped records logged individually before only a summary is emitted.
const MAX_LOGGED_DROPS: usize = 5;

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\|([^|]*)\|(\d+)\|([^|]*)$").expect("Invalid correspondence line regex")
});

/// A grammatically valid line whose destination code is not yet resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub destination_code: u32,
    pub destination_description: &'a str,
    pub source_code: SourceCode,
    pub source_description: &'a str,
}

/// One validated correspondence between a destination category and a source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrespondenceRecord<C> {
    pub category: C,
    pub category_description: String,
    pub source_code: SourceCode,
    pub source_description: String,
}

/// Counters collected while parsing a resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Total lines read.
    pub lines: usize,
    /// Records kept.
    pub records: usize,
    /// Non-data lines skipped silently.
    pub ignored_lines: usize,
    /// Records dropped because the destination code did not resolve.
    pub unresolved_categories: usize,
    /// Records dropped because the source code exceeded an opt-in maximum.
    pub oversized_codes: usize,
}

impl LoadReport {
    /// Records dropped with a warning.
    pub fn dropped(&self) -> usize {
        self.unresolved_categories + self.oversized_codes
    }
}

/// Parser output: the kept records plus what happened to the rest.
#[derive(Debug, Clone)]
pub struct ParsedResource<C> {
    pub records: Vec<CorrespondenceRecord<C>>,
    pub report: LoadReport,
}

/// Match a single line against the grammar.
///
/// Returns `None` for non-data lines, including numeric fields too large for
/// a `u32`.
pub fn parse_line(line: &str) -> Option<RawRecord<'_>> {
    let captures = LINE_PATTERN.captures(line)?;
    let destination_code = captures.get(1)?.as_str().parse().ok()?;
    let source_code = captures.get(3)?.as_str().parse().ok()?;

    Some(RawRecord {
        destination_code,
        destination_description: captures.get(2)?.as_str(),
        source_code,
        source_description: captures.get(4)?.as_str(),
    })
}

/// Parse a whole resource, resolving destination codes through `C`.
///
/// `resource` names the input in log output only. Records naming a source code
/// above `max_source_code` are dropped when a maximum is given.
pub fn parse_resource<C: TaxonomyCategory>(
    content: &str,
    resource: &str,
    max_source_code: Option<SourceCode>,
) -> ParsedResource<C> {
    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for (index, line) in content.lines().enumerate() {
        report.lines += 1;

        let Some(raw) = parse_line(line) else {
            report.ignored_lines += 1;
            continue;
        };

        let Some(category) = C::from_code(raw.destination_code) else {
            report.unresolved_categories += 1;
            if report.dropped() <= MAX_LOGGED_DROPS {
                tracing::warn!(
                    resource = %resource,
                    line = index + 1,
                    destination_code = raw.destination_code,
                    source_code = raw.source_code,
                    "Ignoring unknown destination category code"
                );
            }
            continue;
        };

        if let Some(max) = max_source_code.filter(|max| raw.source_code > *max) {
            report.oversized_codes += 1;
            if report.dropped() <= MAX_LOGGED_DROPS {
                tracing::warn!(
                    resource = %resource,
                    line = index + 1,
                    source_code = raw.source_code,
                    max_source_code = max,
                    "Ignoring source code above the configured maximum"
                );
            }
            continue;
        }

        records.push(CorrespondenceRecord {
            category,
            category_description: raw.destination_description.to_string(),
            source_code: raw.source_code,
            source_description: raw.source_description.to_string(),
        });
    }

    report.records = records.len();

    if report.dropped() > MAX_LOGGED_DROPS {
        tracing::warn!(
            resource = %resource,
            unresolved_categories = report.unresolved_categories,
            oversized_codes = report.oversized_codes,
            "Category mapping resource contains dropped records"
        );
    }

    tracing::debug!(
        resource = %resource,
        lines = report.lines,
        records = report.records,
        ignored_lines = report.ignored_lines,
        "Parsed category mapping resource"
    );

    ParsedResource { records, report }
}
