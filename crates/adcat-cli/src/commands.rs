//! Subcommand implementations.
//!
//! Each command renders to a `String` so the binary only prints and tests can
//! compare output directly.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use adcat_mapping::{CategoryMapper, LoadReport, MappingConfig, MappingSource};
use adcat_model::{ContentCategory, SourceCode, TaxonomyCategory};

use crate::cli::{Cli, Command, OutputFormatArg};

type Mapper = CategoryMapper<ContentCategory>;

/// Resolve the mapping config: `--mapping` beats `ADCAT_MAPPING_FILE`, which
/// beats the embedded table.
pub fn mapping_config(cli: &Cli) -> MappingConfig {
    let mut config = MappingConfig::from_env();
    if let Some(path) = &cli.mapping {
        config.source = MappingSource::File(path.clone());
    }
    if let Some(max) = cli.max_source_code {
        config.max_source_code = Some(max);
    }
    config
}

/// Build the mapper and run the selected command.
pub fn run(cli: &Cli) -> Result<String> {
    let config = mapping_config(cli);
    let mapper = Mapper::load(&config).context("load category mapping")?;
    run_with(&mapper, &cli.command, cli.format)
}

/// Run a command against an already built mapper.
pub fn run_with(mapper: &Mapper, command: &Command, format: OutputFormatArg) -> Result<String> {
    match command {
        Command::ToIab { codes } => run_to_iab(mapper, codes, format),
        Command::ToSource { categories } => run_to_source(mapper, categories, format),
        Command::Describe { source: false } => run_describe_categories(mapper, format),
        Command::Describe { source: true } => run_describe_sources(mapper, format),
        Command::Stats => run_stats(mapper, format),
    }
}

#[derive(Debug, Serialize)]
struct CategoryEntry {
    iab: ContentCategory,
    code: u32,
    label: &'static str,
    description: String,
}

impl CategoryEntry {
    fn new(mapper: &Mapper, category: ContentCategory) -> Self {
        Self {
            iab: category,
            code: category.code(),
            label: category.label(),
            description: mapper.description_for_destination(category).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SourceEntry {
    code: SourceCode,
    description: String,
    categories: Vec<ContentCategory>,
}

impl SourceEntry {
    fn new(mapper: &Mapper, code: SourceCode) -> Self {
        Self {
            code,
            description: mapper.description_for_source(code).to_string(),
            categories: mapper.map_to_destination(code).iter().copied().collect(),
        }
    }
}

#[derive(Serialize)]
struct ToIabOutput<'a> {
    codes: &'a [SourceCode],
    categories: Vec<CategoryEntry>,
}

#[derive(Serialize)]
struct ToSourceOutput {
    categories: Vec<ContentCategory>,
    source_codes: Vec<SourceEntry>,
}

#[derive(Serialize)]
struct StatsOutput<'a> {
    report: &'a LoadReport,
    categories: usize,
    source_codes: usize,
    pairs: usize,
}

pub fn run_to_iab(
    mapper: &Mapper,
    codes: &[SourceCode],
    format: OutputFormatArg,
) -> Result<String> {
    let categories = mapper.map_many_to_destination(codes.iter().copied(), None);
    tracing::debug!(
        requested = codes.len(),
        found = categories.len(),
        "Translated source codes"
    );

    let entries: Vec<CategoryEntry> = categories
        .into_iter()
        .map(|category| CategoryEntry::new(mapper, category))
        .collect();

    match format {
        OutputFormatArg::Json => to_json(&ToIabOutput {
            codes,
            categories: entries,
        }),
        OutputFormatArg::Table => Ok(category_table(&entries).to_string()),
    }
}

pub fn run_to_source(
    mapper: &Mapper,
    categories: &[String],
    format: OutputFormatArg,
) -> Result<String> {
    let parsed = parse_categories(categories)?;
    let codes = mapper.map_many_to_source(parsed.iter().copied(), None);
    for category in &parsed {
        if adcat_mapping::is_ambiguous_generic(mapper.raw_sources(*category)) {
            tracing::info!(
                category = %category,
                "Category maps to the generic code and specific codes; returning generic only"
            );
        }
    }

    let entries: Vec<SourceEntry> = codes
        .into_iter()
        .map(|code| SourceEntry::new(mapper, code))
        .collect();

    match format {
        OutputFormatArg::Json => to_json(&ToSourceOutput {
            categories: parsed.into_iter().collect(),
            source_codes: entries,
        }),
        OutputFormatArg::Table => Ok(source_table(&entries).to_string()),
    }
}

pub fn run_describe_categories(mapper: &Mapper, format: OutputFormatArg) -> Result<String> {
    let entries: Vec<CategoryEntry> = mapper
        .categories()
        .map(|category| CategoryEntry::new(mapper, category))
        .collect();

    match format {
        OutputFormatArg::Json => to_json(&entries),
        OutputFormatArg::Table => Ok(category_table(&entries).to_string()),
    }
}

pub fn run_describe_sources(mapper: &Mapper, format: OutputFormatArg) -> Result<String> {
    let entries: Vec<SourceEntry> = mapper
        .source_codes()
        .map(|code| SourceEntry::new(mapper, code))
        .collect();

    match format {
        OutputFormatArg::Json => to_json(&entries),
        OutputFormatArg::Table => Ok(source_table(&entries).to_string()),
    }
}

pub fn run_stats(mapper: &Mapper, format: OutputFormatArg) -> Result<String> {
    let stats = StatsOutput {
        report: mapper.report(),
        categories: mapper.categories().count(),
        source_codes: mapper.source_count(),
        pairs: mapper.pair_count(),
    };

    match format {
        OutputFormatArg::Json => to_json(&stats),
        OutputFormatArg::Table => {
            let mut table = Table::new();
            table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
            apply_table_style(&mut table);
            let rows = [
                ("Lines read", stats.report.lines),
                ("Records kept", stats.report.records),
                ("Non-data lines", stats.report.ignored_lines),
                ("Unknown category codes", stats.report.unresolved_categories),
                ("Oversized source codes", stats.report.oversized_codes),
                ("Categories", stats.categories),
                ("Source codes", stats.source_codes),
                ("Category/code pairs", stats.pairs),
            ];
            for (metric, value) in rows {
                table.add_row(vec![Cell::new(metric), Cell::new(value)]);
            }
            align_column(&mut table, 1, CellAlignment::Right);
            Ok(table.to_string())
        }
    }
}

fn parse_categories(values: &[String]) -> Result<BTreeSet<ContentCategory>> {
    values
        .iter()
        .map(|value| {
            value
                .parse::<ContentCategory>()
                .with_context(|| format!("invalid category argument '{value}'"))
        })
        .collect()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize output")
}

fn category_table(entries: &[CategoryEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("IAB"),
        header_cell("Category"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.iab.to_string()),
            Cell::new(entry.label),
            Cell::new(&entry.description),
        ]);
    }
    table
}

fn source_table(entries: &[SourceEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Description"),
        header_cell("IAB"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        let iab = entry
            .categories
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(entry.code),
            Cell::new(&entry.description),
            Cell::new(iab),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
