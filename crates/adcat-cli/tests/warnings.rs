//! Warnings emitted while loading a correspondence resource, captured through
//! the CLI's subscriber.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

use adcat_cli::logging::{LogConfig, LogFormat, build_subscriber};
use adcat_mapping::CategoryMapper;
use adcat_model::ContentCategory;

const UNKNOWN_CODE: &str = "Ignoring unknown destination category code";
const SUMMARY: &str = "Category mapping resource contains dropped records";

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Buffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Parse `content` and return the warning lines it logged.
fn warnings_for(content: &str) -> Vec<String> {
    let config = LogConfig {
        level_filter: LevelFilter::WARN,
        use_env_filter: false,
        with_ansi: false,
        format: LogFormat::Compact,
        ..LogConfig::default()
    };
    let buffer = Buffer::default();
    let subscriber = build_subscriber(&config, buffer.clone());

    tracing::subscriber::with_default(subscriber, || {
        CategoryMapper::<ContentCategory>::parse(content);
    });

    buffer
        .contents()
        .lines()
        .filter(|line| line.contains("WARN"))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_unknown_destination_code_warns_once() {
    let warnings = warnings_for("99|X|5|Y\n");
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains(UNKNOWN_CODE));
    assert!(warnings[0].contains("destination_code=99"));
    assert!(warnings[0].contains("source_code=5"));
}

#[test]
fn test_garbage_line_is_silent() {
    let warnings = warnings_for("garbage-not-matching-pattern\n# comment\n\n");
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn test_valid_records_are_silent() {
    let warnings = warnings_for("1|Arts|100|ArtsSrc\n1|Arts|70000|Big\n");
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn test_sixth_drop_only_adds_summary() {
    let content: String = (90..96).map(|code| format!("{code}|X|{code}|Y\n")).collect();
    let warnings = warnings_for(&content);

    let individual: Vec<_> = warnings
        .iter()
        .filter(|line| line.contains(UNKNOWN_CODE))
        .collect();
    assert_eq!(individual.len(), 5, "{warnings:?}");
    assert!(individual.iter().all(|line| !line.contains("destination_code=95")));

    assert_eq!(warnings.len(), 6, "{warnings:?}");
    assert!(warnings[5].contains(SUMMARY));
    assert!(warnings[5].contains("unresolved_categories=6"));
}

#[test]
fn test_five_drops_have_no_summary() {
    let content: String = (90..95).map(|code| format!("{code}|X|{code}|Y\n")).collect();
    let warnings = warnings_for(&content);
    assert_eq!(warnings.len(), 5, "{warnings:?}");
    assert!(warnings.iter().all(|line| !line.contains(SUMMARY)));
}

#[test]
fn test_explicit_maximum_warns() {
    let config = LogConfig {
        use_env_filter: false,
        with_ansi: false,
        format: LogFormat::Compact,
        ..LogConfig::default()
    };
    let buffer = Buffer::default();
    let subscriber = build_subscriber(&config, buffer.clone());

    let mapper = tracing::subscriber::with_default(subscriber, || {
        CategoryMapper::<ContentCategory>::parse_with("1|Arts|900|Big\n", "limit", Some(100))
    });

    assert!(mapper.map_to_destination(900).is_empty());
    let output = buffer.contents();
    assert!(output.contains("Ignoring source code above the configured maximum"));
    assert!(output.contains("max_source_code=100"));
}
