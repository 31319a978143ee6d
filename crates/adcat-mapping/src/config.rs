//! Where the correspondence resource comes from.

use std::path::PathBuf;

use adcat_model::SourceCode;

/// Environment variable for overriding the embedded correspondence resource.
pub const MAPPING_FILE_ENV_VAR: &str = "ADCAT_MAPPING_FILE";

/// Origin of the correspondence resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MappingSource {
    /// The table compiled into the binary.
    #[default]
    Embedded,
    /// A resource file on disk.
    File(PathBuf),
}

/// Settings used when building a mapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingConfig {
    /// Resource to read.
    pub source: MappingSource,
    /// When set, records naming a larger source code are dropped with a
    /// warning. Unset by default: every valid record is kept.
    pub max_source_code: Option<SourceCode>,
}

impl MappingConfig {
    /// Build a config from the environment.
    ///
    /// Resolution order:
    /// 1. `ADCAT_MAPPING_FILE` environment variable (non-empty)
    /// 2. the embedded resource
    pub fn from_env() -> Self {
        let source = std::env::var_os(MAPPING_FILE_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map_or(MappingSource::Embedded, |value| {
                MappingSource::File(PathBuf::from(value))
            });
        Self {
            source,
            ..Self::default()
        }
    }

    /// Read the resource from `path` instead.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = MappingSource::File(path.into());
        self
    }

    /// Drop records whose source code is larger than `max`.
    #[must_use]
    pub fn with_max_source_code(mut self, max: SourceCode) -> Self {
        self.max_source_code = Some(max);
        self
    }
}
