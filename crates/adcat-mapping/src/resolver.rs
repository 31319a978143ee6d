//! Ambiguity collapse for destination -> source lookups.

use std::collections::BTreeSet;

use adcat_model::{GENERIC_SOURCE_CODE, SourceCode};

/// Outcome of resolving the raw source codes of one destination category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Return the raw set as is.
    Unchanged,
    /// Return only the generic code.
    Generic,
}

/// Decide what a destination category should translate to.
///
/// A category that maps to the generic code and to anything else is
/// ambiguous; the generic code dominates and the specific codes are hidden.
pub fn resolve(raw: &BTreeSet<SourceCode>) -> Resolution {
    if is_ambiguous_generic(raw) {
        Resolution::Generic
    } else {
        Resolution::Unchanged
    }
}

/// True when `raw` holds the generic code alongside at least one other code.
pub fn is_ambiguous_generic(raw: &BTreeSet<SourceCode>) -> bool {
    raw.len() > 1 && raw.contains(&GENERIC_SOURCE_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(codes: &[SourceCode]) -> BTreeSet<SourceCode> {
        codes.iter().copied().collect()
    }

    #[test]
    fn test_small_sets_are_unchanged() {
        assert_eq!(resolve(&set(&[])), Resolution::Unchanged);
        assert_eq!(resolve(&set(&[0])), Resolution::Unchanged);
        assert_eq!(resolve(&set(&[100])), Resolution::Unchanged);
    }

    #[test]
    fn test_specific_codes_without_generic_are_unchanged() {
        assert_eq!(resolve(&set(&[3, 33, 34])), Resolution::Unchanged);
    }

    #[test]
    fn test_generic_dominates() {
        assert_eq!(resolve(&set(&[0, 100])), Resolution::Generic);
        assert_eq!(resolve(&set(&[0, 5, 1004])), Resolution::Generic);
    }
}
